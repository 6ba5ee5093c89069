//! 응답 복구(soft-fail) 통합 테스트
//!
//! 임의의 펜스/산문으로 감싼 정상 JSON은 맨 JSON과 동등하게 복구되고,
//! 복구 불가능한 응답은 에러 없이 빈 스펙으로 강등되는지 검증

use tailor_ai_common::{parse_filter_spec, parse_recommend_response, FilterSpec};

const BARE_SPEC: &str =
    r#"{"style": "캐주얼", "price_limit": 50000, "keywords": ["바지"], "color": "블랙"}"#;

fn expected_spec() -> FilterSpec {
    serde_json::from_str(BARE_SPEC).expect("기준 스펙 파싱 실패")
}

#[test]
fn test_repair_equivalent_across_wrappings() {
    let wrappings = vec![
        BARE_SPEC.to_string(),
        format!("```json\n{}\n```", BARE_SPEC),
        format!("```\n{}\n```", BARE_SPEC),
        format!("분석 결과는 다음과 같습니다:\n```json\n{}\n```\n도움이 되셨길 바랍니다.", BARE_SPEC),
        format!("입력: 5만원 이하 캐주얼 바지\n{}", BARE_SPEC),
        format!("결과: {} 이상입니다.", BARE_SPEC),
    ];

    for wrapped in wrappings {
        let spec = parse_filter_spec(&wrapped);
        assert_eq!(spec, expected_spec(), "복구 실패: {}", wrapped);
    }
}

#[test]
fn test_repair_malformed_never_raises() {
    let malformed = [
        "",
        "   ",
        "죄송합니다. 분석할 수 없습니다.",
        "{\"style\": ",
        "```json\n{broken\n```",
        "{]",
        "null",
    ];

    for input in malformed {
        let spec = parse_filter_spec(input);
        assert!(spec.is_empty(), "빈 스펙이어야 함: {:?}", input);
    }
}

#[test]
fn test_repair_drops_unknown_fields() {
    let response = r#"{"category": "하의", "confidence": 0.9, "keywords": ["바지"]}"#;
    let spec = parse_filter_spec(response);
    assert_eq!(spec.keywords, vec!["바지".to_string()]);
    assert!(spec.style.is_none());
}

#[test]
fn test_repair_coerces_scalar_season() {
    let response = r#"{"season": "여름", "keywords": []}"#;
    let spec = parse_filter_spec(response);
    assert_eq!(spec.season, Some(vec!["여름".to_string()]));
}

#[test]
fn test_repair_color_passthrough() {
    // 색상 정규화는 추론 서비스 책임이며 복구 단계는 값을 바꾸지 않는다
    let response = r#"{"color": "버건디"}"#;
    let spec = parse_filter_spec(response);
    assert_eq!(spec.color.as_deref(), Some("버건디"));
}

#[test]
fn test_recommend_repair_shares_discipline() {
    let bare = r#"{"recommendations": [{"product_name": "테스트", "reason": "이유"}]}"#;
    let fenced = format!("추천 결과:\n```json\n{}\n```", bare);

    let from_bare = parse_recommend_response(bare);
    let from_fenced = parse_recommend_response(&fenced);
    assert_eq!(from_bare, from_fenced);
    assert_eq!(from_bare.recommendations.len(), 1);

    let degraded = parse_recommend_response("추천할 만한 상품이 많았습니다.");
    assert!(degraded.recommendations.is_empty());
}
