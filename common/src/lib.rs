//! Tailor AI Common Library
//!
//! CLI와 요청 처리 계층에서 공유되는 타입과 유틸리티

pub mod error;
pub mod mall;
pub mod parser;
pub mod price;
pub mod prompts;
pub mod taxonomy;
pub mod types;

pub use error::{Error, Result};
pub use mall::{resolve_product_url, resolve_thumbnail, DEFAULT_IMAGE};
pub use parser::{
    extract_json, parse_filter_spec, parse_or_default, parse_recommend_response,
    parse_string_list, try_parse_recommend_response,
};
pub use price::parse_price;
pub use prompts::{build_filter_prompt, build_recommend_prompt};
pub use taxonomy::{KeywordExpansion, Taxonomy};
pub use types::{FilterSpec, Product, Recommendation, RecommendResponse, SearchResponse};
