//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `LoadError`: 서버 시작 시 데이터셋 로딩 실패 (치명적, 서버가 뜨지 않음)
//! - `AppError`: 요청 단위 에러. `IntoResponse` 구현으로 HTTP 응답으로 자동 변환

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (400, 404 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use std::path::PathBuf;
use thiserror::Error; // #[derive(Error)]로 Display와 std::error::Error를 자동 구현

/// 데이터셋 파일 로딩 중 발생하는 에러
///
/// 이 에러는 HTTP 응답이 되지 않습니다. `main`에서 `?`로 전파되어
/// 프로세스가 리스너를 열기 전에 종료됩니다.
#[derive(Debug, Error)]
pub enum LoadError {
    /// 파일을 열 수 없음 (존재하지 않음, 권한 없음 등)
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 구분자 파일 형식 오류 또는 읽기 도중 I/O 오류
    /// #[from]: csv::Error → LoadError::Csv 자동 변환
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// 헤더 정규화(trim + 소문자) 후에도 필수 컬럼이 없음
    /// `.0.join(", ")`: 첫 번째 필드(Vec<String>)를 쉼표로 이어 메시지에 넣습니다
    #[error("dataset missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// 요청 처리 중 발생하는 에러
///
/// 각 variant는 고정된 에러 코드와 HTTP 상태 코드로 변환됩니다.
/// 응답 본문: `{ "error": "<code>" }`
#[derive(Debug, Error)]
pub enum AppError {
    /// 데이터셋이 비어 있음 (HTTP 404)
    #[error("no books in dataset")]
    NoBooks,

    /// 요청한 분위기(mood)에 맞는 책이 없음 (HTTP 404)
    #[error("no books for mood '{0}'")]
    NoBooksForMood(String),

    /// `tag` 쿼리 파라미터가 없거나 비어 있음 (HTTP 400)
    #[error("missing tag query parameter")]
    MissingTagParam,
}

impl AppError {
    /// 클라이언트에 노출되는 에러 코드
    pub fn code(&self) -> &'static str {
        // match: 모든 variant를 빠짐없이 처리해야 합니다 (exhaustive)
        match self {
            AppError::NoBooks => "no_books",
            AppError::NoBooksForMood(_) => "no_books_for_mood",
            AppError::MissingTagParam => "missing_tag_param",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoBooks | AppError::NoBooksForMood(_) => StatusCode::NOT_FOUND,
            AppError::MissingTagParam => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 모든 에러는 요청 단위로 끝나며, 이후 요청에 영향을 주지 않습니다.
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, code = self.code(), "request failed");

        // 결과: { "error": "no_books" } 형태의 평평한 JSON
        let body = Json(json!({ "error": self.code() }));
        // (StatusCode, Json) 튜플은 Axum이 자동으로 HTTP 응답으로 변환합니다
        (self.status(), body).into_response()
    }
}
