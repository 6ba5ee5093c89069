//! 쇼핑몰 도메인 모듈
//!
//! 카탈로그의 상품 URL은 쇼핑몰 기준 상대 경로인 경우가 있어
//! 몰 이름 → 도메인 테이블로 절대 URL을 만든다.

/// 썸네일이 없을 때 쓰는 기본 이미지 경로
pub const DEFAULT_IMAGE: &str = "/static/no-image.png";

/// 몰 이름에 대응하는 도메인
pub fn mall_domain(mall_name: &str) -> Option<&'static str> {
    match mall_name.trim().to_lowercase().as_str() {
        "carenel" => Some("https://carenel.com"),
        "coconco" => Some("https://www.coconco.com"),
        "dailybain" => Some("https://dailybain.com"),
        "nabiang" => Some("https://www.nabiang.co.kr"),
        "naning9" => Some("https://www.naning9.com"),
        "neriah" => Some("https://neriah.kr"),
        "pink-rocket" => Some("http://www.pink-rocket.com"),
        "vanillashu" => Some("https://www.vanillashu.co.kr"),
        "varzar" => Some("https://varzar.com"),
        "musinsa" => Some("https://www.musinsa.com"),
        "29cm" => Some("https://www.29cm.co.kr"),
        "wconcept" => Some("https://www.wconcept.co.kr"),
        "ssf" => Some("https://www.ssfshop.com"),
        "hfashionmall" => Some("https://www.hfashionmall.com"),
        "thehandsome" => Some("https://www.thehandsome.com"),
        "sivillage" => Some("https://www.sivillage.com"),
        "lfmall" => Some("https://www.lfmall.co.kr"),
        "hmall" => Some("https://www.hyundaihmall.com"),
        _ => None,
    }
}

/// 상품 URL을 절대 경로로 변환
///
/// 이미 절대 URL이면 그대로 두고, 상대 경로이면서 몰 도메인을 알면
/// 도메인을 앞에 붙인다. 둘 다 아니면 입력을 그대로 돌려준다.
pub fn resolve_product_url(mall_name: &str, url_path: &str) -> String {
    let path = url_path.trim();
    if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    match mall_domain(mall_name) {
        Some(domain) if path.starts_with('/') => format!("{}{}", domain, path),
        Some(domain) => format!("{}/{}", domain, path),
        None => path.to_string(),
    }
}

/// 썸네일 URL 보정 (비어 있으면 기본 이미지)
pub fn resolve_thumbnail(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        DEFAULT_IMAGE.to_string()
    } else {
        trimmed.to_string()
    }
}
