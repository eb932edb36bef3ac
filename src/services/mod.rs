//! # 서비스 모듈
//!
//! 라우트 핸들러가 호출하는 비즈니스 로직입니다.
//! - `selector`: 책 목록에서 무작위/분위기별로 한 권을 고르는 함수

pub mod selector;

pub use selector::*;
