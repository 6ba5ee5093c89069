//! 프롬프트 생성 모듈
//!
//! 추론 서비스에 보내는 지시문:
//! - build_filter_prompt: 질의 분석(필터 추출)용
//! - build_recommend_prompt: 추천 생성용

/// 선택 가능한 스타일 값
pub const STYLE_VALUES: &str = "스포츠, 캐주얼, 데일리, 페미닌, 포멀, 섹시, 미니멀, 스포티, 럭셔리, 스트릿, 트렌디, 클래식, 빈티지, 보헤미안, 글래머러스, 프레피, 아웃도어, 유니크, 컨템포러리";

/// 질의 분석 프롬프트 생성
///
/// 사용자 질의에서 필터 값을 JSON으로 추출하도록 지시한다.
/// 응답은 JSON만 포함해야 하지만, 파서는 그 약속이 깨져도 복구한다.
pub fn build_filter_prompt(query: &str) -> String {
    format!(
        r#"사용자의 쇼핑 관련 질문을 분석하여 다음 필터 값들을 JSON 형식으로 추출해주세요.

분석 규칙:
1. 실제 검색하고자 하는 상품 키워드만 'keywords'에 포함
2. 색상은 별도로 추출하여 'color' 필드에 포함
   - 예시: "검정색 바지" → color: "블랙"
   - 색상 매핑: 검정/검은색 → 블랙, 하얀/흰색 → 화이트, 빨간색 → 레드 등
3. 가격 제한은 다음 규칙을 따라 추출:
   - "5만원 이하" → 50000
   - 항상 원 단위로 변환하여 숫자만 반환

입력: {query}

JSON 형식으로만 응답해주세요:
{{
    "style": "다음 중 하나만 선택 [{styles}]",
    "gender": "명시적인 성별 언급이 있는 경우에만 [여성, 남성, 공용] 중 선택, 없으면 null",
    "age_group": "다음 중 하나만 선택 [10대, 20대, 30대, 40대, 50대 이상], 없으면 null",
    "price_limit": "가격 제한이 있는 경우 원 단위 숫자로 변환, 없으면 null",
    "season": "다음 중 선택 [봄, 여름, 가을, 겨울, 간절기] (여러 개 가능), 없으면 null",
    "keywords": "실제 검색하고자 하는 상품 키워드만 포함 (배열)",
    "color": "색상 언급이 있는 경우 매핑된 색상명, 없으면 null"
}}"#,
        query = query,
        styles = STYLE_VALUES,
    )
}

/// 추천 프롬프트 생성
///
/// # Arguments
/// * `query` - 사용자 질의 원문
/// * `product_info_json` - 필터링된 상품 목록의 JSON 직렬화
/// * `top_n` - 선택할 최대 상품 수
pub fn build_recommend_prompt(query: &str, product_info_json: &str, top_n: usize) -> String {
    format!(
        r#"사용자 질문: {query}

다음은 검색된 상품 목록입니다:
{products}

위 상품들 중에서 사용자의 요구사항에 가장 적합한 상품 {top_n}개를 선택하고, 아래 가이드라인에 따라 상세한 추천 이유와 스타일링 제안을 해주세요:

1. 사용자의 요구사항 분석
   - 검색 의도 파악 (목적, 상황, 선호도 등)
   - 연령대나 성별이 언급된 경우 그에 맞는 스타일 고려
   - 계절이나 날씨가 언급된 경우 적절한 코디 제안

2. 상품 추천 시 포함할 내용
   - 상품의 디자인, 소재, 핏 등 구체적인 특징
   - 가격대비 장점
   - 다른 아이템과의 코디네이션 제안
   - 구매 시 참고할 사이즈나 컬러 팁

3. 스타일링 제안
   - 추천 상품과 잘 어울리는 다른 아이템 구체적 제안
   - TPO(Time, Place, Occasion)를 고려한 코디 제안
   - 액세서리나 신발 등 포인트 아이템 추천

반드시 아래 형식의 유효한 JSON으로 응답해주세요:

{{
    "recommendations": [
        {{
            "product_name": "상품명",
            "reason": "상세한 추천 이유 (위 가이드라인에 따라 구체적으로 작성)",
            "styling_tip": "스타일링 제안 (코디네이션, 액세서리, 신발 등 구체적 제안)",
            "thumbnail_img_url": "이미지URL",
            "product_url_path": "상품URL",
            "price": "가격",
            "mall_name": "쇼핑몰명"
        }}
    ]
}}"#,
        query = query,
        products = product_info_json,
        top_n = top_n,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_prompt() {
        let prompt = build_filter_prompt("5만원 이하 캐주얼 바지");
        assert!(prompt.contains("5만원 이하 캐주얼 바지"));
        assert!(prompt.contains("price_limit"));
        assert!(prompt.contains("JSON 형식으로만 응답"));
        assert!(prompt.contains("캐주얼"));
    }

    #[test]
    fn test_build_recommend_prompt() {
        let prompt = build_recommend_prompt("바지 추천", r#"[{"name": "테스트"}]"#, 3);
        assert!(prompt.contains("바지 추천"));
        assert!(prompt.contains("테스트"));
        assert!(prompt.contains("3개를 선택"));
        assert!(prompt.contains("recommendations"));
    }
}
