//! 카탈로그 스냅샷 로더
//!
//! CSV 파일을 읽어 상품 목록을 만든다. 프로세스 시작 시 한 번 읽고
//! 요청 처리 중에는 불변으로 공유한다.
//!
//! 셀 누락과 컬럼 누락은 빈 문자열로 흡수하고, 해석이 불가능한 행은
//! 건너뛴다. 행 하나의 불량이 전체 로드를 중단시키지 않는다.

use std::path::Path;

use tailor_ai_common::Product;

use crate::error::{Result, TailorAiError};

/// CSV 파일에서 카탈로그를 읽는다
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(TailorAiError::CatalogNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let mut products = Vec::new();
    let mut skipped = 0usize;

    for record in reader.deserialize::<Product>() {
        match record {
            Ok(product) => products.push(product),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        eprintln!("경고: 해석할 수 없는 카탈로그 행 {}건을 건너뜀", skipped);
    }

    Ok(products)
}
