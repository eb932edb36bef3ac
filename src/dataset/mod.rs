//! # 데이터셋 계층 (Data Access Layer)
//!
//! 서버 시작 시 한 번 로딩되고, 이후 읽기 전용으로만 사용되는 책 목록을 다룹니다.
//! 라우트 핸들러(routes/)는 `AppState`를 통해 이 데이터셋에 접근합니다.
//!
//! 하위 모듈:
//! - `loader`: 구분자 파일을 읽어 `Dataset`을 만드는 함수들

pub mod loader;

pub use loader::*;

use crate::models::Book;

/// 메모리에 보관되는 전체 책 목록 (파일의 행 순서 유지)
///
/// 생성 후에는 절대 변경되지 않으므로, `Arc<Dataset>`로 감싸
/// 여러 요청이 락 없이 동시에 읽습니다.
#[derive(Debug, Default)]
pub struct Dataset {
    books: Vec<Book>,
}

impl Dataset {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<Vec<Book>> for Dataset {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}
