use artwork_browser::{cli, config, error, interactive, logging, render, session, source};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use session::BrowserSession;
use source::{ArticClient, PageSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Browse { page, page_size, target, json } => {
            let page_size = resolve_page_size(&config, page_size)?;
            let client = ArticClient::from_config(&config)?;
            let mut session = BrowserSession::new(client, page_size);

            println!("🖼  artwork-browser - {}", config.api_base_url());
            let selected = interactive::run_browser(&mut session, page, target.as_deref()).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            } else {
                println!("\n✅ 選択: {}件", selected.len());
                if !selected.is_empty() {
                    let ids: Vec<String> = selected.iter().map(|id| id.to_string()).collect();
                    println!("  {}", ids.join(", "));
                }
            }
        }

        Commands::Page { page, page_size, format } => {
            let page_size = resolve_page_size(&config, page_size)?;
            let client = ArticClient::from_config(&config)?;

            match format {
                OutputFormat::Json => {
                    let data = client.fetch_page(page, page_size).await?;
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                OutputFormat::Table => {
                    let mut session = BrowserSession::new(client, page_size);
                    session.open(page).await?;
                    println!("{}", render::render_page(session.view()));
                }
            }
        }

        Commands::Config { set_api_url, set_page_size, reset, show } => {
            let mut config = if reset { Config::default() } else { config };
            let changed = reset || set_api_url.is_some() || set_page_size.is_some();

            if let Some(url) = set_api_url {
                config.set_api_base_url(url)?;
            }
            if let Some(size) = set_page_size {
                config.set_page_size(size)?;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url());
                println!("  ページサイズ: {}", config.page_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  User-Agent: {}", config.user_agent);
            }
        }
    }

    Ok(())
}

fn resolve_page_size(config: &Config, page_size: Option<u32>) -> Result<u32> {
    match page_size {
        Some(0) => Err(error::BrowserError::Config("--page-size は1以上を指定してください".into())),
        Some(n) => Ok(n),
        None => Ok(config.page_size),
    }
}
