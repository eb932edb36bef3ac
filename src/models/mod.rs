//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `book`: 책 한 권(데이터셋의 한 행)과 응답/쿼리 구조체
//!
//! `pub use book::*;`로 재공개하여 `crate::models::Book`처럼 짧게 접근합니다.

pub mod book;

pub use book::*;
