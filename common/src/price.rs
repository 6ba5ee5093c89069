//! 가격 정규화 모듈
//!
//! 카탈로그의 가격 표시 문자열("48,000원")을 정수 원화 금액으로 변환한다.

/// 가격 문자열을 숫자로 변환 (예: "30,000원" -> 30000)
///
/// 통화 접미사와 천 단위 구분자를 제거한 뒤 정수로 파싱한다.
/// 빈 값, NaN 마커, 숫자가 전혀 없는 문자열은 `None`을 반환한다.
/// 어떤 입력에도 패닉하지 않는다.
pub fn parse_price(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }

    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // 자릿수 초과도 파싱 실패로 취급
    let amount: i64 = digits.parse().ok()?;
    Some(if negative { -amount } else { amount })
}
