//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `books`: 무작위 추천, 분위기별 추천 핸들러와 `AppState`
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod books;
pub mod health;

// 하위 모듈의 핸들러를 재공개하여 `routes::random_book`처럼 바로 접근합니다.
pub use books::*;
pub use health::*;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 전체 API 라우터를 만듭니다.
///
/// `main`과 테스트가 같은 라우터를 사용하도록 여기서 한 번만 정의합니다.
/// 등록되지 않은 경로는 Axum 기본 404가 처리합니다.
pub fn router(state: AppState) -> Router {
    // 모든 출처(origin)에서의 호출을 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // .route(): URL 경로와 핸들러를 연결합니다. get()은 GET 메서드만 허용
        .route("/", get(health_check))
        .route("/random", get(random_book))
        .route("/mood", get(mood_book))
        // .with_state(): 모든 핸들러에서 State<AppState>로 꺼낼 수 있게 주입
        .with_state(state)
        // .layer(): 미들웨어 추가. 나중에 추가한 레이어가 바깥쪽에서 먼저 요청을 받습니다
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}
