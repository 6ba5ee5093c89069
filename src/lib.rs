//! Tailor AI
//!
//! 자유 텍스트 질의를 받아 카탈로그 상품을 필터링하고
//! AI 스타일링 추천을 생성하는 파이프라인

pub mod ai_provider;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod recommend;
pub mod service;
