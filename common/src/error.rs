//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
///
/// 공유 계층의 파서는 soft-fail이라 에러를 거의 내지 않는다.
/// 추출 실패만 Parse로 표면화된다.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("JSON을 찾을 수 없습니다".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Parse error: JSON을 찾을 수 없습니다");
    }
}
