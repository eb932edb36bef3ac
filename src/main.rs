//! # Bookmood 웹 서버 진입점
//!
//! 분위기(mood)에 맞는 책을 추천하는 HTTP 서버의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 책 데이터셋 파일 로딩 (실패하면 서버를 시작하지 않음)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작 및 종료 시그널 대기

// ── 모듈 선언 ──
// `mod config;`는 같은 디렉토리의 `config.rs`를,
// `mod dataset;`은 `dataset/mod.rs`를 모듈로 가져옵니다.
mod config;
mod dataset;
mod error;
mod models;
mod routes;
mod services;

// ── 외부 크레이트 및 모듈에서 필요한 항목 가져오기 ──
// anyhow::Context: 에러에 "무엇을 하다가 실패했는지" 설명을 덧붙이는 트레이트
use anyhow::{Context, Result};
use config::Config;
use routes::AppState; // 핸들러들이 공유하는 상태 (데이터셋 + 난수 생성기)
use services::ThreadRandom; // 실제 서버에서 사용하는 난수 생성기
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: 비동기 런타임을 만들고 그 안에서 main을 실행하는 어트리뷰트 매크로
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일에서 BOOKS_CSV_PATH, PORT 등을 읽어옵니다.
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다 (시스템 환경변수만 사용).
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // registry()에 필터와 포맷터를 레이어처럼 쌓아올립니다.
    tracing_subscriber::registry()
        .with(
            // RUST_LOG가 없으면 bookmood, tower_http, axum 모듈을 debug 레벨로 설정
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmood=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 터미널 출력 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // 모든 항목에 기본값이 있으므로 실패하지 않습니다.
    let config = Config::from_env();
    tracing::info!("Starting bookmood server on {}:{}", config.host, config.port);

    // ── 4단계: 데이터셋 로딩 ──
    // 파일이 없거나 필수 컬럼이 빠졌으면 `?`로 main을 빠져나가 프로세스가 종료됩니다.
    // 즉, 리스너를 열기 전(요청을 하나도 받기 전)에 실패합니다.
    // with_context(): 실패 시에만 클로저를 실행해 에러 메시지에 파일 경로를 붙입니다.
    let dataset = dataset::load(&config.books_csv_path, config.delimiter)
        .with_context(|| format!("failed to load books from {}", config.books_csv_path))?;
    // 구조화 로깅: `path = %...`는 Display로, `books = ...`는 값 그대로 필드에 기록됩니다.
    tracing::info!(
        path = %config.books_csv_path,
        books = dataset.len(),
        "Dataset loaded"
    );
    if dataset.is_empty() {
        // 빈 데이터셋은 치명적이지 않습니다. 요청마다 404로 응답합니다.
        tracing::warn!("Dataset has no rows; /random and /mood will return 404");
    }

    // ── 5단계: 라우터 설정 ──
    // AppState::new(): 데이터셋을 Arc로 감싸 모든 핸들러가 복사 없이 공유하게 합니다.
    // 이후 데이터셋은 읽기만 하므로 락(Mutex/RwLock)이 필요 없습니다.
    let app = routes::router(AppState::new(dataset, ThreadRandom));

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    // TcpListener: 지정된 주소에서 TCP 연결을 기다리는 소켓
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // with_graceful_shutdown(): 시그널이 오면 새 연결을 받지 않고,
    // 처리 중인 요청이 끝날 때까지 기다린 뒤 serve()가 반환됩니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Ctrl+C 또는 SIGTERM(unix)을 받을 때까지 기다립니다.
///
/// 두 시그널 중 먼저 도착하는 쪽에서 반환합니다.
async fn shutdown_signal() {
    use tokio::signal;

    // Ctrl+C (SIGINT) 대기
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    // SIGTERM 대기: docker stop, systemd 등이 보내는 종료 시그널
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    // unix가 아닌 플랫폼에는 SIGTERM이 없으므로 영원히 끝나지 않는 future로 대체
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // tokio::select!: 여러 future 중 먼저 완료되는 쪽을 실행합니다
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
