//! 추론 서비스 응답 파서
//!
//! 추론 서비스의 응답은 JSON 그대로라는 보장이 없다. 펜스 블록, 설명문,
//! 입력 echo가 섞인 텍스트에서 JSON 본문만 추출하고, 파싱 실패 시에는
//! 에러 대신 기본값으로 강등한다(soft-fail).
//!
//! 추출 우선순위:
//! 1. ```json ... ``` 블록
//! 2. 태그 없는 ``` ... ``` 블록
//! 3. 본문의 첫 `{...}` 객체 또는 `[...]` 배열

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::types::{FilterSpec, RecommendResponse};

/// 응답에서 JSON 부분만 추출
///
/// 여는 중괄호 앞의 라벨/echo("입력: ..." 등)는 잘라낸다.
///
/// # Examples
/// ```
/// use tailor_ai_common::extract_json;
///
/// let response = "분석 결과: {\"keywords\": [\"바지\"]}";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"keywords\": [\"바지\"]}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    let body = fenced_block(response).unwrap_or(response);
    first_json_span(body).ok_or_else(|| Error::Parse("응답에서 JSON을 찾을 수 없습니다".into()))
}

/// 펜스 블록 내용을 추출 (```json 태그 블록 우선)
fn fenced_block(response: &str) -> Option<&str> {
    if let Some(pos) = response.find("```json") {
        let rest = &response[pos + "```json".len()..];
        let end = rest.find("```").unwrap_or(rest.len());
        return Some(rest[..end].trim());
    }

    if let Some(pos) = response.find("```") {
        let rest = &response[pos + 3..];
        if let Some(end) = rest.find("```") {
            return Some(rest[..end].trim());
        }
    }

    None
}

/// 본문에서 가장 먼저 시작하는 JSON 객체/배열 범위를 찾는다
fn first_json_span(body: &str) -> Option<&str> {
    let object_start = body.find('{');
    let array_start = body.find('[');

    let (start, close) = match (object_start, array_start) {
        (Some(o), Some(a)) if a < o => (a, ']'),
        (Some(o), _) => (o, '}'),
        (None, Some(a)) => (a, ']'),
        (None, None) => return None,
    };

    let end = body.rfind(close).filter(|e| *e >= start)?;
    Some(&body[start..=end])
}

/// soft-fail 파싱 콤비네이터
///
/// 응답에서 JSON을 추출해 `T`로 파싱하되, 추출/파싱이 실패하면
/// `T::default()`를 돌려준다. 절대 에러를 전파하지 않는다.
/// 필터 복구와 추천 복구가 같은 경로를 공유한다.
pub fn parse_or_default<T: DeserializeOwned + Default>(response: &str) -> T {
    extract_json(response)
        .ok()
        .and_then(|json| serde_json::from_str(json.trim()).ok())
        .unwrap_or_default()
}

/// 질의 분석 응답을 FilterSpec으로 복구
///
/// 항상 구조적으로 유효한 FilterSpec을 반환한다. 형식이 깨진 응답은
/// 모든 필드가 없는 빈 스펙("필터 없음")으로 강등된다.
pub fn parse_filter_spec(response: &str) -> FilterSpec {
    parse_or_default(response)
}

/// 추천 응답을 RecommendResponse로 복구
///
/// 형식이 깨진 응답은 빈 추천 목록으로 강등되고, 호출 측의
/// 폴백 사다리가 이어받는다.
pub fn parse_recommend_response(response: &str) -> RecommendResponse {
    try_parse_recommend_response(response).unwrap_or_default()
}

/// 추천 응답의 엄격한 파싱
///
/// 추출/파싱 실패를 "추천이 비어 있음"과 구분해야 하는 호출 측을 위해
/// 강등 대신 `None`을 돌려준다.
pub fn try_parse_recommend_response(response: &str) -> Option<RecommendResponse> {
    let json = extract_json(response).ok()?;
    serde_json::from_str(json.trim()).ok()
}

/// 직렬화된 리스트 컬럼을 파싱 (예: "['봄', '여름']" -> ["봄", "여름"])
///
/// 원본 데이터는 파이썬 리터럴 형식으로 저장되어 있다. 코드 실행 없이
/// 따옴표로 감싼 원소만 허용하는 엄격한 파서로 읽고, 형식이 조금이라도
/// 어긋나면 `None`을 반환한다(fail closed).
pub fn parse_string_list(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;

    let mut items = Vec::new();
    let mut rest = inner.trim();
    if rest.is_empty() {
        return Some(items);
    }

    loop {
        let quote = rest.chars().next()?;
        if quote != '\'' && quote != '"' {
            return None;
        }
        let after_open = &rest[1..];
        let end = after_open.find(quote)?;
        items.push(after_open[..end].to_string());

        rest = after_open[end + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest.strip_prefix(',')?.trim_start();
        if rest.is_empty() {
            // 후행 쉼표는 불량 데이터로 간주
            return None;
        }
    }

    Some(items)
}
