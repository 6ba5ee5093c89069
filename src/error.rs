use thiserror::Error;

#[derive(Error, Debug)]
pub enum TailorAiError {
    #[error("설정 에러: {0}")]
    Config(String),

    #[error("카탈로그 파일이 없습니다: {0}. `tailor-ai config --set-catalog PATH` 로 설정하거나 --catalog 옵션을 사용하세요")]
    CatalogNotFound(String),

    #[error("카탈로그 읽기 에러: {0}")]
    CatalogLoad(#[from] csv::Error),

    #[error("추론 서비스 호출 에러: {0}")]
    ApiCall(String),

    #[error("입력 파일이 없습니다: {0}")]
    FileNotFound(String),

    #[error("JSON 해석 에러: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 에러: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TailorAiError>;
