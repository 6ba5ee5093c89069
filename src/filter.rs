//! 카탈로그 필터 엔진
//!
//! 검증된 FilterSpec을 상품 목록에 적용한다. 단계는 독립적인 술어의
//! 순차 교집합(AND)이다: 키워드 → 카테고리 → 가격 → 색상 → 계절 → 스타일.
//!
//! 정렬은 하지 않는다. 카탈로그의 상대 순서를 그대로 유지하고(안정 필터),
//! 모든 단계가 끝난 뒤에 상한을 적용한다.
//!
//! 행 단위 해석 실패(깨진 직렬화 리스트, 숫자가 아닌 가격)는 그 행만
//! 제외하고 계속한다. 불량 행 하나가 전체 필터를 중단시키지 않는다.

use tailor_ai_common::{parse_price, parse_string_list, FilterSpec, Product, Taxonomy};

/// 결과 상한 기본값
pub const DEFAULT_RESULT_CAP: usize = 10;

/// 필터 스펙을 카탈로그에 적용한다
///
/// # Arguments
/// * `catalog` - 카탈로그 스냅샷 (순서 유지)
/// * `spec` - 검증된 필터 스펙
/// * `taxonomy` - 주입된 택소노미
/// * `explicit_category` - 명시적으로 지정된 코스 카테고리 (없으면 키워드로 추정)
/// * `cap` - 결과 상한
pub fn filter_products(
    catalog: &[Product],
    spec: &FilterSpec,
    taxonomy: &Taxonomy,
    explicit_category: Option<&str>,
    cap: usize,
) -> Vec<Product> {
    let mut rows: Vec<&Product> = catalog.iter().collect();

    rows = keyword_stage(rows, &spec.keywords, taxonomy);
    rows = category_stage(rows, explicit_category, &spec.keywords, taxonomy);
    rows = price_stage(rows, spec.price_limit);
    rows = color_stage(rows, spec.color.as_deref());
    rows = season_stage(rows, spec.season.as_deref());
    rows = style_stage(rows, spec.style.as_deref(), taxonomy);

    rows.into_iter().take(cap).cloned().collect()
}

/// 키워드 단계: 상품명이 키워드 또는 그 확장형 중 하나를 포함해야 통과
fn keyword_stage<'a>(
    rows: Vec<&'a Product>,
    keywords: &[String],
    taxonomy: &Taxonomy,
) -> Vec<&'a Product> {
    if keywords.is_empty() {
        return rows;
    }

    let expanded: Vec<String> = keywords
        .iter()
        .flat_map(|keyword| taxonomy.expand_keyword(keyword))
        .map(|form| form.to_lowercase())
        .collect();

    rows.into_iter()
        .filter(|product| {
            let name = product.product_name.to_lowercase();
            expanded.iter().any(|form| name.contains(form.as_str()))
        })
        .collect()
}

/// 카테고리 단계: 코스 카테고리가 정해지면 그 카테고리 경로의 상품만 통과
///
/// 명시적 지정이 우선이고, 없으면 키워드에서 추정한다. 둘 다 없거나
/// 택소노미가 모르는 카테고리면 제약으로 해석하지 않고 통과시킨다.
fn category_stage<'a>(
    rows: Vec<&'a Product>,
    explicit: Option<&str>,
    keywords: &[String],
    taxonomy: &Taxonomy,
) -> Vec<&'a Product> {
    let coarse = match explicit {
        Some(name) => Some(name.to_string()),
        None => taxonomy.infer_category(keywords).map(|c| c.to_string()),
    };
    let Some(coarse) = coarse else {
        return rows;
    };
    if taxonomy.category_paths(&coarse).is_none() {
        return rows;
    }

    rows.into_iter()
        .filter(|product| taxonomy.category_matches(&product.category, &coarse))
        .collect()
}

/// 가격 단계: 정규화된 현재가가 상한 이하인 상품만 통과
///
/// 가격이 없거나 해석 불가능한 상품은 상한 검사에 실패한 것으로 제외한다.
/// 다른 선택 필드와 달리 부재가 통과가 아니라 제외인 점에 주의.
fn price_stage<'a>(rows: Vec<&'a Product>, price_limit: Option<i64>) -> Vec<&'a Product> {
    let Some(limit) = price_limit else {
        return rows;
    };

    rows.into_iter()
        .filter(|product| match parse_price(&product.current_price) {
            Some(price) => price <= limit,
            None => false,
        })
        .collect()
}

/// 색상 단계: 색상 옵션에 요청 색상이 포함된 상품만 통과
///
/// 현재 행 전체에서 color_option 컬럼이 비어 있으면 단계 자체가
/// no-op이 된다(전부 제외가 아니라 전부 통과).
fn color_stage<'a>(rows: Vec<&'a Product>, color: Option<&str>) -> Vec<&'a Product> {
    let Some(color) = color else {
        return rows;
    };

    if rows.iter().all(|p| p.color_option.trim().is_empty()) {
        return rows;
    }

    let color_lower = color.to_lowercase();
    // "블랙(Black)" 같은 병기 표기를 허용하는 패턴
    let patterns = [
        color_lower.clone(),
        format!("{}(", color_lower),
        format!("({}", color_lower),
    ];

    rows.into_iter()
        .filter(|product| {
            product
                .color_option
                .split(',')
                .map(|option| option.trim().to_lowercase())
                .any(|option| patterns.iter().any(|pattern| option.contains(pattern.as_str())))
        })
        .collect()
}

/// 계절 단계: 상품의 계절 리스트가 요청 집합과 교차해야 통과
///
/// 행의 계절 데이터가 깨져 있으면 그 행은 제외된다.
fn season_stage<'a>(rows: Vec<&'a Product>, seasons: Option<&[String]>) -> Vec<&'a Product> {
    let Some(seasons) = seasons else {
        return rows;
    };
    if seasons.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|product| match parse_string_list(&product.season) {
            Some(product_seasons) => product_seasons
                .iter()
                .any(|s| seasons.iter().any(|requested| requested == s.trim())),
            None => false,
        })
        .collect()
}

/// 스타일 단계: 상품의 스타일 리스트에 요청 스타일(또는 동의어)이 있어야 통과
///
/// 스타일 제약이 있을 때 스타일 필드가 없거나 깨진 상품은 제외된다.
fn style_stage<'a>(
    rows: Vec<&'a Product>,
    style: Option<&str>,
    taxonomy: &Taxonomy,
) -> Vec<&'a Product> {
    let Some(style) = style else {
        return rows;
    };

    let synonyms: Vec<String> = taxonomy
        .style_synonyms(style)
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect();

    rows.into_iter()
        .filter(|product| match parse_string_list(&product.style) {
            Some(product_styles) => product_styles.iter().any(|entry| {
                let entry = entry.trim().to_lowercase();
                synonyms.iter().any(|synonym| entry.contains(synonym.as_str()))
            }),
            None => false,
        })
        .collect()
}
