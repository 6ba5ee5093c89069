use clap::Parser;
use tailor_ai_rust::{api, catalog, cli, config, error, service};

use cli::{Cli, Commands};
use config::Config;
use error::{Result, TailorAiError};
use service::CliInference;
use tailor_ai_common::{Product, Taxonomy};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // 경계에서 에러를 형식이 온전한 본문으로 출력
        let body = api::error_body(&e.to_string());
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Search {
            query,
            catalog: catalog_arg,
            category,
            cap,
            no_recommend,
            output,
        } => {
            println!("🔎 tailor-ai - 상품 검색\n");

            let catalog_path = catalog_arg
                .or_else(|| config.catalog_path.clone())
                .ok_or_else(|| TailorAiError::CatalogNotFound("(미설정)".to_string()))?;

            // 1. 카탈로그 로드 (요청 처리 중에는 불변)
            println!("[1/3] 카탈로그 로드 중...");
            let products = catalog::load_catalog(&catalog_path)?;
            println!("✔ {}개 상품 로드\n", products.len());

            let taxonomy = Taxonomy::builtin();
            let inference =
                CliInference::new(cli.ai_provider, config.timeout_seconds, cli.verbose);

            // 2. 질의 분석 + 필터링
            println!("[2/3] 질의 분석 및 필터링 중...");
            let search = api::handle_search(
                &inference,
                &taxonomy,
                &products,
                &query,
                category.as_deref(),
                cap.unwrap_or(config.result_cap),
                cli.verbose,
            )
            .await;
            println!("✔ {}개 상품 매칭\n", search.total_count);

            for product in &search.results {
                println!(
                    "  - {} | {} | {}",
                    product.product_name, product.current_price, product.mall_name
                );
            }

            // 3. 추천 생성
            let body = if no_recommend {
                serde_json::to_value(&search)?
            } else {
                println!("\n[3/3] 추천 생성 중...");
                let recommendation = api::handle_recommend(
                    &inference,
                    &query,
                    &search.results,
                    config.recommend_top_n,
                    cli.verbose,
                )
                .await;
                println!("✔ 추천 {}건\n", recommendation.recommendations.len());

                let mut body = serde_json::to_value(&search)?;
                let extra = serde_json::to_value(&recommendation)?;
                if let (serde_json::Value::Object(body), serde_json::Value::Object(extra)) =
                    (&mut body, extra)
                {
                    body.extend(extra);
                }
                body
            };

            write_output(&body, output.as_deref())?;
            println!("\n✅ 검색 완료");
        }

        Commands::Recommend { query, input, top_n } => {
            println!("💡 tailor-ai - 추천 생성\n");

            if !input.exists() {
                return Err(TailorAiError::FileNotFound(input.display().to_string()));
            }
            let content = std::fs::read_to_string(&input)?;
            let products: Vec<Product> = serde_json::from_str(&content)?;

            let inference =
                CliInference::new(cli.ai_provider, config.timeout_seconds, cli.verbose);
            let response = api::handle_recommend(
                &inference,
                &query,
                &products,
                top_n.unwrap_or(config.recommend_top_n),
                cli.verbose,
            )
            .await;

            let body = serde_json::to_value(&response)?;
            write_output(&body, None)?;
            println!("\n✅ 추천 완료");
        }

        Commands::Config { set_catalog, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog_path(path)?;
                println!("✔ 카탈로그 경로를 설정했습니다");
            }

            if show {
                println!("설정:");
                println!(
                    "  카탈로그: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "미설정".to_string())
                );
                println!("  제한 시간: {}초", config.timeout_seconds);
                println!("  결과 상한: {}", config.result_cap);
                println!("  추천 개수: {}", config.recommend_top_n);
            }
        }
    }

    Ok(())
}

fn write_output(body: &serde_json::Value, output: Option<&std::path::Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(body)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("✔ 결과를 저장: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
