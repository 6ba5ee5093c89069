//! 추론 서비스 프로바이더 선택
//!
//! 언어 추론은 로컬에 설치된 AI CLI를 통해 수행한다.
//! 프로바이더별로 실행 파일 이름과 프롬프트 전달 인자가 다르다.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum AiProvider {
    #[default]
    Claude,
    Codex,
    Gemini,
}

impl AiProvider {
    pub fn command_name(&self) -> &'static str {
        match self {
            AiProvider::Claude => "claude",
            AiProvider::Codex => "codex",
            AiProvider::Gemini => "gemini",
        }
    }

    /// 프롬프트를 전달하는 CLI 인자 목록
    pub fn build_args(&self, prompt: &str) -> Vec<String> {
        match self {
            AiProvider::Claude => vec![
                "-p".to_string(),
                prompt.to_string(),
                "--output-format".to_string(),
                "text".to_string(),
            ],
            AiProvider::Codex => vec!["exec".to_string(), prompt.to_string()],
            AiProvider::Gemini => vec!["-p".to_string(), prompt.to_string()],
        }
    }
}
