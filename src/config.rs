//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `BOOKS_CSV_PATH`: 책 데이터셋 파일 경로 (기본값: "books.csv")
//! - `BOOKS_CSV_DELIMITER`: 필드 구분자 (기본값: ",")
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 변경되지 않습니다.
// - Debug: {:?} 포맷으로 출력 가능
// - Clone: .clone()으로 값을 복제 가능
#[derive(Debug, Clone)]
pub struct Config {
    /// 책 데이터셋 파일 경로
    pub books_csv_path: String,
    /// 데이터셋 필드 구분자 (ASCII 한 글자)
    pub delimiter: u8,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 5000)
    /// u16: 0~65535 범위의 부호 없는 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 실패하지 않습니다.
    /// 잘못된 값(파싱 불가능한 포트, 비ASCII 구분자)은 기본값으로 대체됩니다.
    pub fn from_env() -> Self {
        Self {
            // unwrap_or_else(|_| ...): 환경변수가 없으면(Err) 클로저의 기본값 사용
            books_csv_path: env::var("BOOKS_CSV_PATH")
                .unwrap_or_else(|_| "books.csv".to_string()),
            // .ok(): Result → Option 변환
            // .and_then(): Some일 때만 파싱을 시도하고, 실패하면 None
            delimiter: env::var("BOOKS_CSV_DELIMITER")
                .ok()
                .and_then(|value| parse_delimiter(&value))
                .unwrap_or(b','),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()          // "5000" → 5000u16
                .unwrap_or(5000), // 파싱 실패 시 기본값
        }
    }
}

/// 구분자 문자열의 첫 글자를 바이트로 변환합니다.
///
/// `"\t"`(두 글자 이스케이프)는 탭 문자로 취급합니다.
fn parse_delimiter(value: &str) -> Option<u8> {
    if value == "\\t" {
        return Some(b'\t');
    }
    // `?`: 빈 문자열이면 None을 바로 반환
    let c = value.chars().next()?;
    // csv 구분자는 한 바이트여야 하므로 ASCII 문자만 허용합니다
    c.is_ascii().then_some(c as u8)
}
