//! # 책 추천 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /random | `random_book` | 전체 중 무작위 한 권 |
//! | GET | /mood?tag=분위기 | `mood_book` | 분위기가 일치하는 책 중 무작위 한 권 |
//!
//! 두 핸들러 모두 요청 본문을 읽지 않고, 데이터셋을 변경하지 않습니다.

use crate::{
    dataset::Dataset,                  // 읽기 전용 책 목록
    error::AppError,                   // 자동으로 JSON 에러 응답으로 변환되는 에러 타입
    models::*,                         // BookResponse, MoodQuery
    services::{self, RandomSource},    // 책 선택 로직과 난수 생성기 트레이트
};
use axum::{
    extract::{Query, State}, // Query: URL 쿼리 파라미터, State: 앱 공유 상태
    Json,
};
// Arc: 여러 스레드가 같은 값을 공유하는 참조 카운트 스마트 포인터
use std::sync::Arc;

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 전역 변수 대신 Axum의 State로 의존성을 주입하므로,
/// 테스트에서는 원하는 데이터셋과 난수 생성기를 넣어 라우터를 만들 수 있습니다.
// #[derive(Clone)]: Axum의 State 추출자는 요청마다 AppState를 clone합니다.
// 필드가 모두 Arc이므로 clone해도 데이터셋 자체는 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    /// 시작 시 로딩된 책 목록 (읽기 전용)
    pub dataset: Arc<Dataset>,
    /// 책을 고를 때 쓰는 난수 생성기
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    /// `impl RandomSource + 'static`: 트레이트를 구현한 어떤 타입이든 받습니다.
    /// `Arc::new()` 시점에 `Arc<dyn RandomSource>`로 자동 변환됩니다.
    pub fn new(dataset: Dataset, random: impl RandomSource + 'static) -> Self {
        Self {
            dataset: Arc::new(dataset),
            random: Arc::new(random),
        }
    }
}

/// `GET /random` — 전체 책 중 한 권을 무작위로 추천합니다.
///
/// # 에러
/// - 데이터셋이 비어 있으면 404 `{ "error": "no_books" }`
pub async fn random_book(State(state): State<AppState>) -> Result<Json<BookResponse>, AppError> {
    // .ok_or(): Option을 Result로 변환 (None → Err(AppError::NoBooks))
    // `?`: Err이면 핸들러에서 바로 반환되어 404 JSON 응답이 됩니다
    let book = services::pick_random(state.dataset.books(), state.random.as_ref())
        .ok_or(AppError::NoBooks)?;

    tracing::debug!(title = %book.title, "picked random book");
    // book.into(): From<&Book> 구현으로 BookResponse로 변환 (mood_tag → mood)
    Ok(Json(book.into()))
}

/// `GET /mood?tag=분위기` — 분위기 태그가 일치하는 책 중 한 권을 추천합니다.
///
/// 태그 비교는 대소문자를 구분하지 않는 완전 일치입니다.
///
/// # 에러
/// - `tag`가 없거나 빈 문자열이면 400 `{ "error": "missing_tag_param" }`
/// - 일치하는 책이 없으면 404 `{ "error": "no_books_for_mood" }`
pub async fn mood_book(
    State(state): State<AppState>,
    // Query<Vec<(String, String)>>: 쿼리 문자열을 (키, 값) 쌍 목록으로 추출합니다.
    // 키가 반복되거나 모르는 키가 있어도 추출이 실패하지 않으므로,
    // 모든 에러 응답이 AppError를 거쳐 JSON으로 나갑니다.
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<BookResponse>, AppError> {
    let query = MoodQuery::from_pairs(pairs);

    // match 가드(if): Some이면서 빈 문자열이 아닐 때만 태그로 사용합니다
    let tag = match query.tag {
        Some(tag) if !tag.is_empty() => tag,
        _ => return Err(AppError::MissingTagParam),
    };

    // .ok_or_else(): None일 때만 클로저를 실행해 에러를 만듭니다
    let book = services::pick_by_mood(state.dataset.books(), &tag, state.random.as_ref())
        .ok_or_else(|| AppError::NoBooksForMood(tag.clone()))?;

    tracing::debug!(%tag, title = %book.title, "picked book for mood");
    Ok(Json(book.into()))
}
