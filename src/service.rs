//! 언어 추론 서비스 연동
//!
//! 추론 서비스는 불투명한 외부 협력자다. 프롬프트를 보내고 자유 텍스트를
//! 받는 계약만 유지하며, 응답의 형식 보장은 파서의 복구 로직이 맡는다.
//!
//! 호출은 반드시 제한 시간 안에 끝나야 한다. 타임아웃과 전송 실패는
//! 호출 측에서 형식이 깨진 응답과 동일하게 취급한다(soft-fail).
//! 재시도는 하지 않는다.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::ai_provider::AiProvider;
use crate::error::{Result, TailorAiError};

/// 언어 추론 서비스 인터페이스
///
/// 테스트에서는 고정 응답을 돌려주는 구현으로 대체한다.
pub trait InferenceService {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// 로컬 AI CLI를 통한 추론 서비스 구현
pub struct CliInference {
    provider: AiProvider,
    timeout: Duration,
    verbose: bool,
}

impl CliInference {
    pub fn new(provider: AiProvider, timeout_seconds: u64, verbose: bool) -> Self {
        Self {
            provider,
            timeout: Duration::from_secs(timeout_seconds),
            verbose,
        }
    }

    async fn run_cli(&self, prompt: &str) -> Result<String> {
        let args = self.provider.build_args(prompt);

        // Windows에서는 cmd /c 경유로 실행
        #[cfg(windows)]
        let mut command = {
            let mut command = tokio::process::Command::new("cmd");
            command.arg("/c").arg(self.provider.command_name()).args(&args);
            command
        };

        #[cfg(not(windows))]
        let mut command = {
            let mut command = tokio::process::Command::new(self.provider.command_name());
            command.args(&args);
            command
        };

        if self.verbose {
            println!("  [추론] 프롬프트 길이: {} chars", prompt.chars().count());
        }

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                TailorAiError::ApiCall(format!(
                    "추론 서비스 응답 시간 초과 ({}초)",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| TailorAiError::ApiCall(format!("AI CLI 실행 에러: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TailorAiError::ApiCall(format!(
                "AI CLI failed (code {:?}): {}",
                output.status.code(),
                stderr
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout).to_string();

        if self.verbose {
            println!("  [추론] 응답 길이: {} chars", response.chars().count());
        }

        Ok(response)
    }
}

impl InferenceService for CliInference {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.run_cli(prompt).await
    }
}
