//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /` → `{ "status": "ok" }`
//!
//! 데이터셋 상태와 무관하게 항상 같은 응답을 반환합니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /` — 서버 상태를 확인합니다.
///
/// State 등 추출자가 필요 없고, 고정된 JSON만 반환하므로 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
