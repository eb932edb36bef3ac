//! # 책(Book) 모델 정의
//!
//! 데이터셋의 한 행(row)과 API 응답 구조체를 정의합니다.
//!
//! ## 구조체 역할
//! - `Book`: 로딩 시점에 파싱된 데이터셋의 한 행 (메모리에 보관)
//! - `BookResponse`: `GET /random`, `GET /mood`의 응답 본문
//! - `MoodQuery`: `GET /mood?tag=...`의 쿼리 파라미터

use serde::Serialize;

/// 데이터셋의 한 행 — 책 한 권에 대응합니다.
///
/// 모든 필드는 문자열입니다. `energy`도 숫자로 변환하지 않고
/// 파일에 적힌 그대로 보관합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub mood_tag: String,
    pub energy: String,
    pub notes: String,
}

/// 책 추천 응답 — `mood_tag`는 응답에서 `mood`라는 이름으로 나갑니다.
///
/// 필드 선언 순서가 곧 JSON 키 순서입니다.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub mood: String,
    pub energy: String,
    pub notes: String,
}

// From 트레이트: `BookResponse::from(&book)` 또는 `(&book).into()`로 변환
impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            mood: book.mood_tag.clone(),
            energy: book.energy.clone(),
            notes: book.notes.clone(),
        }
    }
}

/// `GET /mood?tag=...`의 쿼리 파라미터
///
/// 쿼리 문자열은 `(키, 값)` 쌍의 목록으로 먼저 받은 뒤 이 구조체로 옮깁니다.
/// 구조체로 바로 역직렬화하면 `?tag=a&tag=b`처럼 키가 반복될 때
/// Axum이 JSON이 아닌 일반 텍스트 400을 내보내기 때문입니다.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MoodQuery {
    /// `tag`가 없으면 None. 여러 번 나오면 첫 번째 값을 사용합니다.
    pub tag: Option<String>,
}

impl MoodQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        // into_iter(): 벡터의 소유권을 넘겨받아 값을 복사 없이 꺼냅니다
        // find(): 조건에 맞는 첫 번째 항목만 찾고 멈춥니다
        let tag = pairs
            .into_iter()
            .find(|(key, _)| key == "tag")
            .map(|(_, value)| value);
        Self { tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_renames_mood_tag() {
        let book = Book {
            title: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            mood_tag: "Epic".into(),
            energy: "High".into(),
            notes: "Classic".into(),
        };

        let value = serde_json::to_value(BookResponse::from(&book)).unwrap();
        assert_eq!(value["mood"], "Epic");
        assert!(value.get("mood_tag").is_none());
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn mood_query_takes_first_tag() {
        let query = MoodQuery::from_pairs(pairs(&[("tag", "happy"), ("tag", "sad")]));
        assert_eq!(query.tag.as_deref(), Some("happy"));
    }

    #[test]
    fn mood_query_ignores_other_keys() {
        let query = MoodQuery::from_pairs(pairs(&[("page", "2"), ("tag", "cozy")]));
        assert_eq!(query.tag.as_deref(), Some("cozy"));
        assert_eq!(MoodQuery::from_pairs(pairs(&[("mood", "cozy")])), MoodQuery::default());
    }
}
