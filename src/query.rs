//! 질의 분석 모듈
//!
//! 자유 텍스트 질의를 추론 서비스에 보내 FilterSpec으로 바꾼다.
//! 서비스 실패(타임아웃·전송 오류·형식 불량)는 빈 스펙으로 강등되어
//! 요청이 "필터 없음" 상태로 계속 진행된다. 에러를 전파하지 않는다.

use tailor_ai_common::{build_filter_prompt, parse_filter_spec, FilterSpec};

use crate::service::InferenceService;

/// 질의를 분석해 필터 스펙을 추출한다
///
/// 항상 구조적으로 유효한 FilterSpec을 반환한다.
pub async fn analyze_query(
    service: &impl InferenceService,
    query: &str,
    verbose: bool,
) -> FilterSpec {
    let prompt = build_filter_prompt(query);

    match service.complete(&prompt).await {
        Ok(response) => {
            let spec = parse_filter_spec(&response);
            if verbose {
                println!("  [분석] 추출된 필터: {:?}", spec);
            }
            if spec.is_empty() {
                eprintln!("경고: 질의에서 필터를 추출하지 못해 전체 검색으로 진행합니다");
            }
            spec
        }
        Err(e) => {
            eprintln!("경고: 질의 분석 실패, 필터 없이 계속합니다: {}", e);
            FilterSpec::default()
        }
    }
}
