//! # 데이터셋 로더
//!
//! 헤더 행이 있는 구분자 파일을 읽어 `Dataset`으로 변환합니다.
//!
//! 로딩 규칙:
//! - 헤더 이름은 앞뒤 공백 제거 + 소문자 변환 후 비교합니다 (`" Title "` → `"title"`)
//! - 필수 컬럼 6개 중 하나라도 없으면 `LoadError::MissingColumns`
//! - 필수가 아닌 컬럼은 무시합니다
//! - 셀이 비어 있거나 행이 짧으면 빈 문자열로 채웁니다
//! - 셀 값은 가공하지 않습니다 (`energy`도 문자열 그대로)

use super::Dataset;
use crate::{error::LoadError, models::Book};
// ReaderBuilder: 구분자, 헤더 처리 등을 설정해 csv 리더를 만드는 빌더
// StringRecord: 한 행의 필드들을 UTF-8 문자열로 담는 타입
use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};

/// 필수 컬럼 목록 (정규화된 이름)
pub const REQUIRED_COLUMNS: [&str; 6] = ["title", "author", "genre", "mood_tag", "energy", "notes"];

/// 파일 경로에서 데이터셋을 로딩합니다.
///
/// 서버 시작 시 한 번만 호출되며, 실패하면 서버가 시작되지 않습니다.
///
/// # 에러
/// - `LoadError::Io`: 파일을 열 수 없음
/// - `LoadError::Csv`: 파일 형식 오류 또는 읽기 실패
/// - `LoadError::MissingColumns`: 필수 컬럼 누락
pub fn load(path: impl AsRef<Path>, delimiter: u8) -> Result<Dataset, LoadError> {
    // AsRef<Path>: &str, String, PathBuf 등 경로처럼 쓸 수 있는 타입을 모두 받습니다
    let path = path.as_ref();
    // map_err(): io::Error를 경로 정보가 담긴 LoadError::Io로 바꿉니다
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(file, delimiter)
}

/// 임의의 `Read` 구현체(파일, 메모리 버퍼 등)에서 데이터셋을 파싱합니다.
pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Dataset, LoadError> {
    // flexible(true): 행마다 필드 수가 달라도 허용 (짧은 행은 빈 셀로 채움)
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    // headers(): 첫 행을 헤더로 읽습니다. 빈 입력이면 빈 레코드가 돌아와
    // resolve_columns에서 필수 컬럼 6개 모두 누락으로 처리됩니다.
    let columns = resolve_columns(reader.headers()?)?;

    let mut books = Vec::new();
    // records(): 헤더 다음 행부터 한 행씩 읽는 이터레이터
    // 각 항목이 Result이므로 `?`로 형식 오류를 LoadError::Csv로 전파합니다.
    for record in reader.records() {
        let record = record?;
        // 완전히 빈 줄은 건너뜁니다 (빈 필드 하나짜리 레코드).
        // ",,,,," 처럼 구분자가 있는 행은 빈 값의 책으로 그대로 남습니다.
        if is_blank(&record) {
            continue;
        }
        books.push(to_book(&record, &columns));
    }
    Ok(Dataset::from(books))
}

/// 헤더 이름을 정규화합니다: BOM 제거, 앞뒤 공백 제거, 소문자 변환
pub fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// 필수 컬럼 각각이 헤더의 몇 번째 위치에 있는지 찾습니다.
///
/// 반환 배열은 `REQUIRED_COLUMNS`와 같은 순서입니다.
/// 같은 이름이 두 번 나오면 앞의 것을 사용합니다.
fn resolve_columns(headers: &StringRecord) -> Result<[usize; 6], LoadError> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    let mut indices = [0usize; 6];
    let mut missing = Vec::new();
    for (slot, required) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match normalized.iter().position(|name| name == required) {
            Some(index) => *slot = index,
            None => missing.push(required.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(LoadError::MissingColumns(missing))
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|cell| cell.trim().is_empty())
}

fn to_book(record: &StringRecord, columns: &[usize; 6]) -> Book {
    // 행이 짧아 해당 위치에 셀이 없으면 unwrap_or_default()로 빈 문자열
    let cell = |i: usize| record.get(columns[i]).unwrap_or_default().to_string();
    Book {
        title: cell(0),
        author: cell(1),
        genre: cell(2),
        mood_tag: cell(3),
        energy: cell(4),
        notes: cell(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "title,author,genre,mood_tag,energy,notes";

    fn parse(content: &str) -> Result<Dataset, LoadError> {
        from_reader(content.as_bytes(), b',')
    }

    #[test]
    fn loads_rows_in_file_order() {
        let csv = format!(
            "{HEADER}\nDune,Herbert,SciFi,Epic,High,Classic\nEmma,Austen,Romance,Cozy,Low,Witty\n"
        );
        let dataset = parse(&csv).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.books()[0].title, "Dune");
        assert_eq!(dataset.books()[1].mood_tag, "Cozy");
    }

    #[test]
    fn header_names_are_trimmed_and_lowercased() {
        let csv = " Title ,AUTHOR, Genre,Mood_Tag ,ENERGY,Notes\nDune,Herbert,SciFi,Epic,High,Classic\n";
        let dataset = parse(csv).unwrap();

        assert_eq!(dataset.books()[0].author, "Herbert");
        assert_eq!(dataset.books()[0].mood_tag, "Epic");
    }

    #[test]
    fn missing_genre_column_fails() {
        let csv = "title,author,mood_tag,energy,notes\nDune,Herbert,Epic,High,Classic\n";
        match parse(csv) {
            Err(LoadError::MissingColumns(missing)) => assert_eq!(missing, vec!["genre"]),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn all_missing_columns_are_reported() {
        match parse("title,author\n") {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["genre", "mood_tag", "energy", "notes"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_missing_every_column() {
        assert!(matches!(parse(""), Err(LoadError::MissingColumns(m)) if m.len() == 6));
    }

    #[test]
    fn header_only_yields_empty_dataset() {
        let dataset = parse(&format!("{HEADER}\n")).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn extra_columns_and_reordering_are_handled() {
        let csv = "isbn,notes,energy,mood_tag,genre,author,title\n123,Classic,7,Epic,SciFi,Herbert,Dune\n";
        let dataset = parse(csv).unwrap();
        let book = &dataset.books()[0];

        assert_eq!(book.title, "Dune");
        assert_eq!(book.notes, "Classic");
        assert_eq!(book.energy, "7");
    }

    #[test]
    fn short_rows_and_empty_cells_become_empty_strings() {
        let csv = format!("{HEADER}\nDune,Herbert,,Epic\n");
        let dataset = parse(&csv).unwrap();
        let book = &dataset.books()[0];

        assert_eq!(book.genre, "");
        assert_eq!(book.energy, "");
        assert_eq!(book.notes, "");
    }

    #[test]
    fn quoted_cells_keep_delimiters() {
        let csv = format!("{HEADER}\n\"Dune, Part One\",Herbert,SciFi,Epic,High,\"Sand, spice\"\n");
        let dataset = parse(&csv).unwrap();
        let book = &dataset.books()[0];

        assert_eq!(book.title, "Dune, Part One");
        assert_eq!(book.notes, "Sand, spice");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = format!(
            "{HEADER}\n\nDune,Herbert,SciFi,Epic,High,Classic\n\n\nEmma,Austen,Romance,Cozy,Low,Witty\n\n"
        );
        let dataset = parse(&csv).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.books()[1].title, "Emma");
    }

    #[test]
    fn blank_lines_with_crlf_are_skipped() {
        let csv = format!("{HEADER}\r\n\r\nDune,Herbert,SciFi,Epic,High,Classic\r\n\r\n");
        assert_eq!(parse(&csv).unwrap().len(), 1);
    }

    #[test]
    fn row_of_empty_cells_is_kept() {
        let csv = format!("{HEADER}\n,,,,,\n");
        let dataset = parse(&csv).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.books()[0].title, "");
    }

    #[test]
    fn custom_delimiter() {
        let csv = "title;author;genre;mood_tag;energy;notes\nDune;Herbert;SciFi;Epic;High;Classic\n";
        let dataset = from_reader(csv.as_bytes(), b';').unwrap();
        assert_eq!(dataset.books()[0].genre, "SciFi");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Dune,Herbert,SciFi,Epic,High,Classic").unwrap();

        let dataset = load(file.path(), b',').unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("nope.csv"), b',');
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn normalize_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Title"), "title");
        assert_eq!(normalize_header("  MOOD_TAG\t"), "mood_tag");
    }
}
