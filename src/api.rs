//! 요청 경계 핸들러
//!
//! 검색/추천 요청 한 건을 처리해 항상 형식이 온전한 응답 본문을 만든다.
//! 구성 요소 수준의 실패(추출 불량, 행 불량, 서비스 장애, 빈 결과)는
//! 각 구성 요소 안에서 흡수되므로 핸들러 자체는 실패하지 않는다.
//! 환경 문제(카탈로그 없음 등)만 경계에서 error 필드가 있는 본문으로
//! 변환한다.

use tailor_ai_common::{RecommendResponse, SearchResponse, Product, Taxonomy};

use crate::filter::filter_products;
use crate::query::analyze_query;
use crate::recommend::recommend;
use crate::service::InferenceService;

/// 검색 요청 처리: 질의 분석 → 카탈로그 필터링
pub async fn handle_search(
    service: &impl InferenceService,
    taxonomy: &Taxonomy,
    catalog: &[Product],
    query: &str,
    explicit_category: Option<&str>,
    cap: usize,
    verbose: bool,
) -> SearchResponse {
    let spec = analyze_query(service, query, verbose).await;
    let results = filter_products(catalog, &spec, taxonomy, explicit_category, cap);

    SearchResponse {
        total_count: results.len(),
        results,
    }
}

/// 추천 요청 처리: 필터링된 상품 + 질의 → 추천 목록
pub async fn handle_recommend(
    service: &impl InferenceService,
    query: &str,
    products: &[Product],
    top_n: usize,
    verbose: bool,
) -> RecommendResponse {
    recommend(service, query, products, top_n, verbose).await
}

/// 내부 오류를 형식이 온전한 에러 본문으로 변환
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    struct FixedService(&'static str);

    impl InferenceService for FixedService {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_handle_search_counts_results() {
        let catalog = vec![
            Product {
                product_name: "와이드 팬츠".to_string(),
                category: "PANTS > 롱팬츠".to_string(),
                current_price: "48,000원".to_string(),
                ..Default::default()
            },
            Product {
                product_name: "라운드 니트".to_string(),
                category: "TOP > 니트".to_string(),
                current_price: "30,000원".to_string(),
                ..Default::default()
            },
        ];

        let service = FixedService(r#"{"keywords": ["바지"], "price_limit": 50000}"#);
        let response = handle_search(
            &service,
            &Taxonomy::builtin(),
            &catalog,
            "5만원 이하 바지",
            None,
            10,
            false,
        )
        .await;

        assert_eq!(response.total_count, 1);
        assert_eq!(response.results[0].product_name, "와이드 팬츠");
    }

    #[test]
    fn test_error_body_shape() {
        let body = error_body("추천 처리 중 오류가 발생했습니다.");
        assert_eq!(body["error"], "추천 처리 중 오류가 발생했습니다.");
    }
}
