//! AI 추천 어셈블러
//!
//! 필터링된 상품 목록과 원 질의를 추론 서비스에 보내 추천 목록을 만든다.
//! 응답은 질의 분석과 같은 soft-fail 복구를 거치며, 폴백 사다리가
//! 항상 구조적으로 유효한 응답을 보장한다:
//! 1. 형식이 온전하고 비어 있지 않은 추천 → 그대로 사용
//! 2. 비었거나 형식이 깨진 응답 → 첫 상품으로 단일 추천 합성
//! 3. 애초에 상품이 없음 → 빈 목록 + 사유 메시지 (서비스 호출 없음)

use tailor_ai_common::{
    build_recommend_prompt, resolve_product_url, resolve_thumbnail, try_parse_recommend_response,
    Product, Recommendation, RecommendResponse,
};

use crate::filter::DEFAULT_RESULT_CAP;
use crate::service::InferenceService;

/// 추천 개수 기본값
pub const DEFAULT_TOP_N: usize = 3;

/// 검색 결과가 없을 때의 안내 메시지
pub const NO_RESULT_MESSAGE: &str = "검색 결과가 없어 추천을 생성할 수 없습니다.";

/// 추천이 비어 있을 때 합성 추천에 붙는 사유
pub const FALLBACK_REASON: &str = "현재 검색 결과에서 가장 관련성 높은 상품입니다.";

/// 서비스 실패/형식 불량일 때 합성 추천에 붙는 사유
pub const ERROR_FALLBACK_REASON: &str =
    "추천 시스템 오류가 발생했지만, 검색 결과에서 가장 관련성 높은 상품입니다.";

/// 필터링된 상품에 대한 추천을 생성한다
///
/// 절대 에러를 전파하지 않는다. 서비스 실패는 폴백 사다리로 흡수된다.
pub async fn recommend(
    service: &impl InferenceService,
    query: &str,
    products: &[Product],
    top_n: usize,
    verbose: bool,
) -> RecommendResponse {
    if products.is_empty() {
        return RecommendResponse {
            recommendations: Vec::new(),
            message: Some(NO_RESULT_MESSAGE.to_string()),
        };
    }

    let payload = product_payload(products);
    let prompt = build_recommend_prompt(query, &payload, top_n);

    let parsed = match service.complete(&prompt).await {
        Ok(response) => {
            if verbose {
                println!("  [추천] 응답 복구 시도");
            }
            match try_parse_recommend_response(&response) {
                Some(parsed) => parsed,
                None => {
                    eprintln!("경고: 추천 응답 형식이 올바르지 않아 폴백 추천으로 대체합니다");
                    return fallback_response(&products[0], ERROR_FALLBACK_REASON);
                }
            }
        }
        Err(e) => {
            eprintln!("경고: 추천 생성 실패, 폴백 추천으로 대체합니다: {}", e);
            return fallback_response(&products[0], ERROR_FALLBACK_REASON);
        }
    };

    if parsed.recommendations.is_empty() {
        return fallback_response(&products[0], FALLBACK_REASON);
    }

    let recommendations = parsed
        .recommendations
        .into_iter()
        .take(top_n)
        .map(|rec| backfill_display_fields(rec, products))
        .collect();

    RecommendResponse {
        recommendations,
        message: None,
    }
}

/// 추론 서비스에 보낼 상품 목록 직렬화 (첫 페이지만)
fn product_payload(products: &[Product]) -> String {
    let info: Vec<serde_json::Value> = products
        .iter()
        .take(DEFAULT_RESULT_CAP)
        .map(|product| {
            serde_json::json!({
                "name": product.product_name,
                "price": product.current_price,
                "mall": product.mall_name,
                "category": product.category,
                "style": product.style,
                "season": product.season,
                "color_option": product.color_option,
                "thumbnail_img_url": product.thumbnail_img_url,
                "product_url_path": product.product_url_path,
            })
        })
        .collect();

    serde_json::to_string_pretty(&info).unwrap_or_else(|_| "[]".to_string())
}

/// 첫 상품으로 합성한 단일 추천
fn fallback_response(product: &Product, reason: &str) -> RecommendResponse {
    RecommendResponse {
        recommendations: vec![Recommendation {
            product_name: product.product_name.clone(),
            reason: reason.to_string(),
            styling_tip: String::new(),
            thumbnail_img_url: resolve_thumbnail(&product.thumbnail_img_url),
            product_url_path: resolve_product_url(&product.mall_name, &product.product_url_path),
            price: product.current_price.clone(),
            mall_name: product.mall_name.clone(),
        }],
        message: None,
    }
}

/// 추천의 표시용 필드를 매칭된 상품에서 보충한다
///
/// 추론 서비스가 URL이나 가격을 빠뜨리거나 바꿔 적는 경우가 있어,
/// 상품명이 일치하는 카탈로그 행의 값을 신뢰한다.
fn backfill_display_fields(mut rec: Recommendation, products: &[Product]) -> Recommendation {
    match products.iter().find(|p| p.product_name == rec.product_name) {
        Some(product) => {
            rec.price = product.current_price.clone();
            rec.mall_name = product.mall_name.clone();
            rec.thumbnail_img_url = resolve_thumbnail(&product.thumbnail_img_url);
            rec.product_url_path =
                resolve_product_url(&product.mall_name, &product.product_url_path);
        }
        None => {
            // 카탈로그에 없는 상품명이면 응답 값을 최대한 보정만 한다
            rec.thumbnail_img_url = resolve_thumbnail(&rec.thumbnail_img_url);
            rec.product_url_path = resolve_product_url(&rec.mall_name, &rec.product_url_path);
        }
    }

    rec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedService(&'static str);

    impl InferenceService for FixedService {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// 호출 횟수를 세는 목 서비스
    struct CountingService {
        calls: AtomicUsize,
    }

    impl InferenceService for CountingService {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(r#"{"recommendations": []}"#.to_string())
        }
    }

    fn sample_product() -> Product {
        Product {
            product_name: "와이드 팬츠".to_string(),
            mall_name: "musinsa".to_string(),
            current_price: "48,000원".to_string(),
            thumbnail_img_url: "".to_string(),
            product_url_path: "/products/1234".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_recommend_empty_products_skips_service() {
        let service = CountingService {
            calls: AtomicUsize::new(0),
        };

        let response = recommend(&service, "바지 추천", &[], 3, false).await;
        assert!(response.recommendations.is_empty());
        assert_eq!(response.message.as_deref(), Some(NO_RESULT_MESSAGE));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_recommend_well_formed_response() {
        let service = FixedService(
            r#"```json
{"recommendations": [{"product_name": "와이드 팬츠", "reason": "핏이 좋습니다", "styling_tip": "셔츠와 매치"}]}
```"#,
        );

        let products = vec![sample_product()];
        let response = recommend(&service, "바지 추천", &products, 3, false).await;

        assert_eq!(response.recommendations.len(), 1);
        assert!(response.message.is_none());
        let rec = &response.recommendations[0];
        assert_eq!(rec.reason, "핏이 좋습니다");
        // 표시용 필드는 카탈로그 값으로 보충
        assert_eq!(rec.price, "48,000원");
        assert_eq!(rec.product_url_path, "https://www.musinsa.com/products/1234");
        assert_eq!(rec.thumbnail_img_url, tailor_ai_common::DEFAULT_IMAGE);
    }

    #[tokio::test]
    async fn test_recommend_prose_only_uses_error_reason() {
        let service = FixedService("좋은 상품들이네요. 첫 번째 상품을 추천합니다.");

        let products = vec![sample_product()];
        let response = recommend(&service, "바지 추천", &products, 3, false).await;

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].product_name, "와이드 팬츠");
        assert_eq!(response.recommendations[0].reason, ERROR_FALLBACK_REASON);
    }

    #[tokio::test]
    async fn test_recommend_service_error_uses_error_reason() {
        struct FailingService;

        impl InferenceService for FailingService {
            async fn complete(&self, _prompt: &str) -> Result<String> {
                Err(crate::error::TailorAiError::ApiCall("호출 실패".to_string()))
            }
        }

        let products = vec![sample_product()];
        let response = recommend(&FailingService, "바지 추천", &products, 3, false).await;

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].reason, ERROR_FALLBACK_REASON);
    }

    #[tokio::test]
    async fn test_recommend_empty_recommendations_falls_back() {
        let service = FixedService(r#"{"recommendations": []}"#);

        let products = vec![sample_product()];
        let response = recommend(&service, "바지 추천", &products, 3, false).await;

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].product_name, "와이드 팬츠");
        // 응답 자체는 온전했으므로 오류 사유가 아닌 일반 사유
        assert_eq!(response.recommendations[0].reason, FALLBACK_REASON);
    }

    #[tokio::test]
    async fn test_recommend_truncates_to_top_n() {
        let service = FixedService(
            r#"{"recommendations": [
                {"product_name": "A"}, {"product_name": "B"},
                {"product_name": "C"}, {"product_name": "D"}
            ]}"#,
        );

        let products = vec![sample_product()];
        let response = recommend(&service, "바지", &products, 3, false).await;
        assert_eq!(response.recommendations.len(), 3);
    }
}
