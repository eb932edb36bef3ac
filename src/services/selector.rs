//! # 책 선택 서비스
//!
//! 읽기 전용 책 목록에서 한 권을 무작위로 고르는 순수 함수들입니다.
//!
//! 이 모듈의 함수들:
//! - `pick_random()`: 전체 목록에서 균등 확률로 한 권 선택
//! - `pick_by_mood()`: `mood_tag`가 대소문자 무시하고 정확히 일치하는 책 중 한 권 선택
//!
//! 난수는 `RandomSource` 트레이트로 주입받습니다. 서버는 `ThreadRandom`을,
//! 테스트는 결과가 고정된 구현체를 사용합니다.

use crate::models::Book;
use rand::Rng;

/// 균등 분포 인덱스 생성기
///
/// `Send + Sync`: `AppState` 안에서 `Arc<dyn RandomSource>`로
/// 여러 요청 스레드가 공유하기 때문에 필요합니다.
pub trait RandomSource: Send + Sync {
    /// `0..len` 범위의 인덱스를 반환합니다. 호출자는 `len > 0`을 보장합니다.
    fn pick_index(&self, len: usize) -> usize;
}

/// 스레드 로컬 난수 생성기 기반 구현 (시드 고정 없음, 매 호출이 독립 추출)
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        // thread_rng(): 스레드마다 하나씩 있는 난수 생성기 (OS 엔트로피로 시드)
        // gen_range(0..len): 0 이상 len 미만의 균등 분포 정수
        rand::thread_rng().gen_range(0..len)
    }
}

/// 목록에서 한 항목을 무작위로 고릅니다. 목록이 비어 있으면 `None`.
pub fn pick_random<'a, T>(items: &'a [T], rng: &dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    // .get(): 범위를 벗어난 인덱스면 패닉 대신 None을 반환합니다
    items.get(rng.pick_index(items.len()))
}

/// `mood_tag`가 `tag`와 일치하는 책 중 한 권을 무작위로 고릅니다.
///
/// 비교는 양쪽을 소문자로 바꾼 뒤 문자열 전체가 같은지 봅니다.
/// 부분 문자열이나 유사 매칭은 하지 않습니다. 일치하는 책이 없으면 `None`.
pub fn pick_by_mood<'a>(
    books: &'a [Book],
    tag: &str,
    rng: &dyn RandomSource,
) -> Option<&'a Book> {
    let candidates = mood_candidates(books, tag);
    // candidates는 Vec<&Book>이므로 pick_random은 &&Book을 돌려줍니다.
    // .copied(): Option<&&Book> → Option<&Book> (참조 자체를 복사)
    pick_random(&candidates, rng).copied()
}

/// 대소문자를 무시하고 `mood_tag == tag`인 책들 (원래 순서 유지)
pub fn mood_candidates<'a>(books: &'a [Book], tag: &str) -> Vec<&'a Book> {
    // 비교 대상 태그는 한 번만 소문자로 바꿔 둡니다
    let wanted = tag.to_lowercase();
    books
        .iter()
        .filter(|book| book.mood_tag.to_lowercase() == wanted)
        .collect()
}
