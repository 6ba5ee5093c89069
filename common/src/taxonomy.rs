//! 검색 택소노미 모듈
//!
//! 코스 검색 카테고리 ↔ 카탈로그 세부 카테고리 경로, 검색어 확장 테이블,
//! 스타일 동의어 사전을 담는 정적 매핑. 프로세스 시작 시 한 번 만들어
//! 읽기 전용으로 주입되며 이후 변경되지 않는다.

use std::collections::HashMap;

/// 검색어 하나에 대한 확장 집합
#[derive(Debug, Clone, Default)]
pub struct KeywordExpansion {
    /// 연관 카테고리 토큰 (카탈로그 경로 또는 카테고리명)
    pub categories: Vec<String>,
    /// 동의어 검색 키워드
    pub keywords: Vec<String>,
    /// 상품 설명에서 찾는 보조 키워드
    pub description_keywords: Vec<String>,
}

/// 정적 택소노미
///
/// 필터 엔진을 순수하게 유지하기 위해 전역 상태가 아니라
/// 명시적으로 전달되는 불변 객체로 쓴다.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// 코스 카테고리 → 카탈로그 세부 경로 목록
    category_paths: Vec<(String, Vec<String>)>,
    /// 검색어 → 확장 집합
    keyword_expansions: HashMap<String, KeywordExpansion>,
    /// 카테고리 추정용 역방향 인덱스 (선언 순서 유지, 첫 매칭 우선)
    category_keywords: Vec<(String, Vec<String>)>,
    /// 스타일 → 동의어 목록
    style_synonyms: HashMap<String, Vec<String>>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Taxonomy {
    /// 내장 택소노미를 구성한다
    pub fn builtin() -> Self {
        let category_paths = vec![
            (
                "상의".to_string(),
                owned(&[
                    "TOP > 셔츠&블라우스",
                    "TOP > 반팔티",
                    "TOP > 니트",
                    "TOP > 후드/맨투맨",
                    "TOP > 긴팔티",
                    "TOP > 트레이닝",
                    "TOP > 나시",
                ]),
            ),
            (
                "하의".to_string(),
                owned(&[
                    "PANTS > 롱팬츠",
                    "PANTS > 슬랙스",
                    "PANTS > 레깅스",
                    "PANTS > 숏팬츠",
                    "PANTS > 트레이닝",
                ]),
            ),
            (
                "원피스/스커트".to_string(),
                owned(&["DRESS&SKIRT > 스커트"]),
            ),
            (
                "아우터".to_string(),
                owned(&[
                    "OUTER > 가디건",
                    "OUTER > 베스트",
                    "OUTER > 자켓",
                    "OUTER > 점퍼",
                    "OUTER > 집업",
                ]),
            ),
            (
                "신발".to_string(),
                owned(&[
                    "BEST > 펌프스",
                    "BEST > 샌들/뮬",
                    "BEST > 스니커즈",
                    "BEST > 플랫/로퍼",
                    "BEST > 부츠/앵클",
                    "BEST > 슬링백",
                    "BEST > 블로퍼/슬리퍼",
                ]),
            ),
            (
                "가방".to_string(),
                owned(&[
                    "크로스백",
                    "미니백",
                    "숄더백",
                    "토드백",
                    "캔버스/백팩",
                    "클러치/파우치",
                ]),
            ),
            ("모자".to_string(), owned(&["모자 > 볼캡", "모자 > 버킷햇"])),
            ("악세서리".to_string(), owned(&["귀걸이", "목걸이"])),
            ("언더웨어".to_string(), owned(&["브라", "팬티", "보정"])),
        ];

        let mut keyword_expansions = HashMap::new();
        keyword_expansions.insert(
            "모자".to_string(),
            KeywordExpansion {
                categories: owned(&["모자", "볼캡", "버킷햇"]),
                keywords: owned(&["모자", "볼캡", "버킷햇", "캡"]),
                description_keywords: owned(&["모자", "볼캡", "버킷햇", "캡", "햇", "비니"]),
            },
        );
        keyword_expansions.insert(
            "바지".to_string(),
            KeywordExpansion {
                categories: owned(&["PANTS", "팬츠", "바지", "슬랙스", "진"]),
                keywords: owned(&["바지", "팬츠", "슬랙스", "진", "청바지", "데님"]),
                description_keywords: owned(&[
                    "바지",
                    "팬츠",
                    "슬랙스",
                    "진",
                    "청바지",
                    "데님",
                    "와이드",
                    "스트레이트",
                ]),
            },
        );
        keyword_expansions.insert(
            "치마".to_string(),
            KeywordExpansion::from_paths(&["DRESS&SKIRT > 스커트"], "치마"),
        );
        keyword_expansions.insert(
            "티셔츠".to_string(),
            KeywordExpansion::from_paths(&["TOP > 반팔티", "TOP > 긴팔티"], "티셔츠"),
        );
        keyword_expansions.insert(
            "자켓".to_string(),
            KeywordExpansion::from_paths(&["OUTER > 자켓"], "자켓"),
        );
        keyword_expansions.insert(
            "원피스".to_string(),
            KeywordExpansion::from_paths(&["DRESS&SKIRT"], "원피스"),
        );
        keyword_expansions.insert(
            "가방".to_string(),
            KeywordExpansion::from_paths(&["BAG"], "가방"),
        );
        keyword_expansions.insert(
            "신발".to_string(),
            KeywordExpansion::from_paths(&["BEST"], "신발"),
        );

        let category_keywords = vec![
            (
                "상의".to_string(),
                owned(&["티셔츠", "셔츠", "블라우스", "니트", "맨투맨", "후드", "나시"]),
            ),
            (
                "하의".to_string(),
                owned(&["바지", "팬츠", "슬랙스", "레깅스", "숏팬츠", "트레이닝"]),
            ),
            ("원피스/스커트".to_string(), owned(&["원피스", "스커트"])),
            (
                "아우터".to_string(),
                owned(&["자켓", "코트", "가디건", "점퍼", "집업"]),
            ),
            (
                "신발".to_string(),
                owned(&["신발", "운동화", "구두", "샌들", "슬리퍼", "부츠", "스니커즈"]),
            ),
            (
                "가방".to_string(),
                owned(&["가방", "백팩", "크로스백", "숄더백", "클러치"]),
            ),
            ("모자".to_string(), owned(&["모자", "캡", "버킷햇"])),
            ("악세서리".to_string(), owned(&["귀걸이", "목걸이"])),
            ("언더웨어".to_string(), owned(&["브라", "팬티", "속옷"])),
        ];

        let mut style_synonyms = HashMap::new();
        let style_table: &[(&str, &[&str])] = &[
            ("스포츠", &["스포츠", "운동", "애슬레저", "스포츠웨어"]),
            ("캐주얼", &["캐주얼", "데일리룩", "일상복", "편한"]),
            ("데일리", &["데일리", "일상", "평상복", "기본"]),
            ("페미닌", &["페미닌", "여성스러운", "로맨틱", "걸리시"]),
            ("포멀", &["포멀", "정장", "비즈니스", "격식"]),
            ("섹시", &["섹시", "글래머", "섹시한", "볼륨"]),
            ("미니멀", &["미니멀", "심플", "단순한", "깔끔한"]),
            ("스포티", &["스포티", "스포티브", "액티브", "활동적인"]),
            ("럭셔리", &["럭셔리", "고급스러운", "명품", "프리미엄"]),
            ("스트릿", &["스트릿", "길거리", "힙합", "스케이터"]),
            ("트렌디", &["트렌디", "유행", "최신", "인기"]),
            ("클래식", &["클래식", "고전적인", "전통적인", "베이직"]),
            ("빈티지", &["빈티지", "레트로", "구제", "올드스쿨"]),
            ("보헤미안", &["보헤미안", "보헤미안룩", "자유로운", "히피"]),
            ("글래머러스", &["글래머러스", "화려한", "돋보이는", "세련된"]),
            ("프레피", &["프레피", "학생룩", "아카데믹", "교복"]),
            ("아웃도어", &["아웃도어", "등산복", "야외활동", "캠핑"]),
            ("유니크", &["유니크", "독특한", "개성있는", "특이한"]),
            ("컨템포러리", &["컨템포러리", "현대적인", "모던한", "세련된"]),
        ];
        for (style, synonyms) in style_table {
            style_synonyms.insert(style.to_string(), owned(synonyms));
        }

        Self {
            category_paths,
            keyword_expansions,
            category_keywords,
            style_synonyms,
        }
    }

    /// 검색어의 확장 집합을 하나의 목록으로 돌려준다
    ///
    /// 택소노미에 없는 검색어는 자기 자신만 담긴 집합으로 취급한다.
    pub fn expand_keyword(&self, keyword: &str) -> Vec<String> {
        match self.keyword_expansions.get(keyword) {
            Some(expansion) => {
                let mut forms = Vec::new();
                for form in expansion
                    .keywords
                    .iter()
                    .chain(expansion.categories.iter())
                    .chain(expansion.description_keywords.iter())
                {
                    if !forms.contains(form) {
                        forms.push(form.clone());
                    }
                }
                forms
            }
            None => vec![keyword.to_string()],
        }
    }

    /// 키워드 목록에서 코스 카테고리를 추정한다
    ///
    /// 역방향 인덱스를 선언 순서대로 검사해 첫 매칭을 돌려준다.
    pub fn infer_category(&self, keywords: &[String]) -> Option<&str> {
        for keyword in keywords {
            for (category, words) in &self.category_keywords {
                if words.iter().any(|word| keyword.contains(word.as_str())) {
                    return Some(category);
                }
            }
        }
        None
    }

    /// 코스 카테고리에 속한 카탈로그 세부 경로 목록
    pub fn category_paths(&self, coarse: &str) -> Option<&[String]> {
        self.category_paths
            .iter()
            .find(|(name, _)| name == coarse)
            .map(|(_, paths)| paths.as_slice())
    }

    /// 상품의 카테고리 경로가 코스 카테고리로 귀속되는지 검사
    ///
    /// 정확 일치 또는 복합 경로에 대한 대소문자 무시 부분 일치를 허용한다.
    pub fn category_matches(&self, product_category: &str, coarse: &str) -> bool {
        let Some(paths) = self.category_paths(coarse) else {
            return false;
        };

        let category = product_category.trim();
        if category.is_empty() {
            return false;
        }
        let category_lower = category.to_lowercase();

        paths.iter().any(|path| {
            let path_lower = path.to_lowercase();
            category == path.as_str() || category_lower.contains(&path_lower)
        })
    }

    /// 스타일의 동의어 목록 (없으면 자기 자신만)
    pub fn style_synonyms(&self, style: &str) -> Vec<String> {
        self.style_synonyms
            .get(style)
            .cloned()
            .unwrap_or_else(|| vec![style.to_string()])
    }
}

impl KeywordExpansion {
    /// 경로 목록만 있는 항목을 확장 집합으로 정규화
    fn from_paths(paths: &[&str], keyword: &str) -> Self {
        Self {
            categories: owned(paths),
            keywords: vec![keyword.to_string()],
            description_keywords: vec![keyword.to_string()],
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
