//! 데이터 타입 정의
//!
//! CLI와 요청 처리 계층에서 공유되는 타입:
//! - Product: 카탈로그 스냅샷의 한 행
//! - FilterSpec: 질의 분석으로 추출한 필터 값
//! - Recommendation / RecommendResponse: AI 추천 결과
//! - SearchResponse: 검색 응답 본문

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::price::parse_price;

/// 카탈로그 상품 1건
///
/// 모든 필드는 누락되거나 형식이 깨져 있을 수 있다.
/// 비어 있는 값은 파싱 단계에서 "해당 없음"으로 처리한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub product_name: String,
    pub mall_name: String,
    pub current_price: String,
    pub original_price: String,
    /// "MAIN > SUB" 형태의 복합 경로일 수 있음
    pub category: String,
    /// 직렬화된 리스트 문자열 (예: "['캐주얼', '데일리']")
    pub style: String,
    /// 직렬화된 리스트 문자열 (예: "['봄', '여름']")
    pub season: String,
    /// 쉼표 구분 색상 옵션 (예: "블랙(Black), 아이보리")
    pub color_option: String,
    pub thumbnail_img_url: String,
    pub product_url_path: String,
}

/// 질의 분석으로 추출한 필터 값
///
/// 모든 필드는 선택적이다. 비어 있거나 없는 필드는 "제약 없음"을 의미하며
/// 절대 "전부 제외"로 해석하지 않는다. 타입이 맞지 않는 필드는 구조체
/// 전체 파싱을 깨뜨리지 않고 해당 필드만 없는 것으로 강등된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    #[serde(deserialize_with = "de_opt_text")]
    pub style: Option<String>,

    #[serde(deserialize_with = "de_opt_text")]
    pub gender: Option<String>,

    #[serde(deserialize_with = "de_opt_text")]
    pub age_group: Option<String>,

    /// 원 단위 가격 상한
    #[serde(deserialize_with = "de_opt_price")]
    pub price_limit: Option<i64>,

    /// 요청된 계절 목록 (스칼라로 오면 단일 원소 리스트로 강제)
    #[serde(deserialize_with = "de_season_list")]
    pub season: Option<Vec<String>>,

    #[serde(deserialize_with = "de_keywords")]
    pub keywords: Vec<String>,

    #[serde(deserialize_with = "de_opt_text")]
    pub color: Option<String>,
}

impl FilterSpec {
    /// 어떤 제약도 담고 있지 않은지 여부
    pub fn is_empty(&self) -> bool {
        self.style.is_none()
            && self.gender.is_none()
            && self.age_group.is_none()
            && self.price_limit.is_none()
            && self.season.is_none()
            && self.keywords.is_empty()
            && self.color.is_none()
    }
}

/// AI 추천 1건
///
/// 표시용 필드는 매칭된 상품에서 복사해 채운다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub product_name: String,
    /// 추천 이유 (자유 서술)
    pub reason: String,
    /// 스타일링 제안 (자유 서술)
    pub styling_tip: String,
    pub thumbnail_img_url: String,
    pub product_url_path: String,
    pub price: String,
    pub mall_name: String,
}

/// 추천 응답 본문
///
/// 추천이 비어 있는 경우에만 message에 사유가 담긴다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 검색 응답 본문
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub results: Vec<Product>,
    pub total_count: usize,
}

// =============================================
// 필드 단위 관대한 디시리얼라이저
//
// 추론 서비스가 돌려주는 값의 타입은 보장되지 않는다.
// 타입이 어긋난 필드는 에러 대신 "없음"으로 강등한다.
// =============================================

fn raw_value<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer)
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            // 모델이 문자열 "null"을 돌려주는 경우가 있음
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_text(&raw_value(deserializer)?))
}

fn de_opt_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match raw_value(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_price(&s),
        _ => None,
    };
    Ok(amount.filter(|v| *v >= 0))
}

fn de_season_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let seasons = match raw_value(deserializer)? {
        Value::Array(items) => items.iter().filter_map(coerce_text).collect(),
        value @ Value::String(_) => coerce_text(&value).map(|s| vec![s]).unwrap_or_default(),
        _ => Vec::new(),
    };
    Ok(if seasons.is_empty() { None } else { Some(seasons) })
}

fn de_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keywords = match raw_value(deserializer)? {
        Value::Array(items) => items.iter().filter_map(coerce_text).collect(),
        value @ Value::String(_) => coerce_text(&value).map(|s| vec![s]).unwrap_or_default(),
        _ => Vec::new(),
    };
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_spec_full() {
        let json = r#"{
            "style": "캐주얼",
            "gender": "여성",
            "age_group": "20대",
            "price_limit": 50000,
            "season": ["봄", "여름"],
            "keywords": ["바지"],
            "color": "블랙"
        }"#;

        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.style.as_deref(), Some("캐주얼"));
        assert_eq!(spec.gender.as_deref(), Some("여성"));
        assert_eq!(spec.price_limit, Some(50000));
        assert_eq!(spec.season, Some(vec!["봄".to_string(), "여름".to_string()]));
        assert_eq!(spec.keywords, vec!["바지".to_string()]);
        assert_eq!(spec.color.as_deref(), Some("블랙"));
    }

    #[test]
    fn test_filter_spec_nulls_are_absent() {
        let json = r#"{
            "style": null,
            "gender": null,
            "price_limit": null,
            "season": null,
            "keywords": [],
            "color": null
        }"#;

        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert!(spec.is_empty());
    }

    #[test]
    fn test_filter_spec_season_scalar_coerced() {
        let json = r#"{"season": "겨울"}"#;
        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.season, Some(vec!["겨울".to_string()]));
    }

    #[test]
    fn test_filter_spec_price_as_string() {
        let json = r#"{"price_limit": "50,000원"}"#;
        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.price_limit, Some(50000));
    }

    #[test]
    fn test_filter_spec_negative_price_dropped() {
        let json = r#"{"price_limit": -100}"#;
        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.price_limit, None);
    }

    #[test]
    fn test_filter_spec_wrong_typed_field_degrades() {
        // price_limit이 객체여도 전체 파싱은 성공하고 해당 필드만 없음 처리
        let json = r#"{"price_limit": {"amount": 1}, "keywords": ["바지", 3]}"#;
        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.price_limit, None);
        assert_eq!(spec.keywords, vec!["바지".to_string()]);
    }

    #[test]
    fn test_filter_spec_unknown_field_dropped() {
        // 추론 서비스가 덧붙이는 category 키는 스키마에 없으므로 무시
        let json = r#"{"category": "하의", "keywords": ["바지"]}"#;
        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.keywords, vec!["바지".to_string()]);
    }

    #[test]
    fn test_filter_spec_null_string_is_absent() {
        let json = r#"{"color": "null", "style": "  "}"#;
        let spec: FilterSpec = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(spec.color, None);
        assert_eq!(spec.style, None);
    }

    #[test]
    fn test_product_deserialize_missing_fields() {
        let json = r#"{"product_name": "테스트 바지"}"#;
        let product: Product = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(product.product_name, "테스트 바지");
        assert_eq!(product.current_price, "");
        assert_eq!(product.color_option, "");
    }

    #[test]
    fn test_recommend_response_serialize_without_message() {
        let response = RecommendResponse {
            recommendations: vec![Recommendation {
                product_name: "테스트 상품".to_string(),
                reason: "이유".to_string(),
                ..Default::default()
            }],
            message: None,
        };

        let json = serde_json::to_string(&response).expect("직렬화 실패");
        assert!(json.contains("\"product_name\":\"테스트 상품\""));
        assert!(!json.contains("message"));
    }

    #[test]
    fn test_recommend_response_with_message() {
        let response = RecommendResponse {
            recommendations: vec![],
            message: Some("검색 결과가 없어 추천을 생성할 수 없습니다.".to_string()),
        };

        let json = serde_json::to_string(&response).expect("직렬화 실패");
        assert!(json.contains("\"recommendations\":[]"));
        assert!(json.contains("검색 결과가 없어"));
    }
}
