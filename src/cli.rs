use crate::ai_provider::AiProvider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tailor-ai")]
#[command(about = "AI 패션 검색·스타일링 추천 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AI 프로바이더 (claude/codex/gemini)
    #[arg(long, default_value = "claude", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 자유 텍스트 질의로 카탈로그를 검색하고 추천까지 생성
    Search {
        /// 검색 질의 (예: "5만원 이하 캐주얼 바지")
        #[arg(required = true)]
        query: String,

        /// 카탈로그 CSV 경로 (기본: 설정 파일의 catalog_path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 코스 카테고리를 직접 지정 (예: 하의)
        #[arg(long)]
        category: Option<String>,

        /// 결과 상한
        #[arg(long)]
        cap: Option<usize>,

        /// 추천 생성 건너뛰기 (검색만)
        #[arg(long)]
        no_recommend: bool,

        /// 응답 JSON을 저장할 파일 (기본: 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 저장된 상품 목록 JSON으로 추천만 생성
    Recommend {
        /// 검색 질의 원문
        #[arg(required = true)]
        query: String,

        /// 상품 목록 JSON 파일 (검색 응답의 results 배열)
        #[arg(required = true)]
        input: PathBuf,

        /// 추천 개수
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// 설정 조회/변경
    Config {
        /// 카탈로그 CSV 경로 설정
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 현재 설정 출력
        #[arg(long)]
        show: bool,
    },
}
