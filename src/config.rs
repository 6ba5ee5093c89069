use crate::error::{Result, TailorAiError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 카탈로그 CSV 경로
    pub catalog_path: Option<PathBuf>,
    /// 추론 서비스 호출 제한 시간(초)
    pub timeout_seconds: u64,
    /// 검색 결과 상한
    pub result_cap: usize,
    /// 추천 개수
    pub recommend_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            timeout_seconds: 120,
            result_cap: crate::filter::DEFAULT_RESULT_CAP,
            recommend_top_n: crate::recommend::DEFAULT_TOP_N,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TailorAiError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("tailor-ai").join("config.json"))
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }
}
