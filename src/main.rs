//! Listing Viewer CLI
//!
//! - `render`: 페이로드를 로드해 정적 HTML 페이지 출력
//! - `replay`: UI 이벤트 목록을 세션에 적용하고 단계별 상태를 JSON으로 출력

use clap::{Parser, Subcommand};

use listing_viewer::commands::{self, PageState};
use listing_viewer::config::{load_env_files, ViewerConfig};
use listing_viewer::utils::validate_output_path;
use listing_viewer::view::html::render_page;

#[derive(Parser)]
#[command(name = "listing-viewer", version, about = "Render a property listing page")]
struct Cli {
    /// 페이로드 디렉토리, JSON 파일 또는 http(s) 기본 URL
    #[arg(long, global = true, env = "LISTING_SOURCE")]
    source: Option<String>,

    /// 뷰포트 너비 (갤러리 페이지 크기 결정)
    #[arg(long, global = true, env = "LISTING_VIEWPORT_WIDTH")]
    viewport: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 정적 HTML 페이지 렌더링
    Render {
        /// 출력 파일 (없으면 stdout)
        #[arg(long, short)]
        out: Option<String>,
    },
    /// 이벤트 재생: 예) "select:3,next,open:9,key:escape,resize:500"
    Replay {
        events: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("listing_viewer=info")),
        )
        .init();

    load_env_files();
    let cli = Cli::parse();

    let mut config = ViewerConfig::from_env()?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(width) = cli.viewport {
        config.viewport_width = width;
    }

    let today = chrono::Local::now().date_naive();
    let mut state = commands::load_page(&config, today).await;

    match cli.command {
        Command::Render { out } => {
            let html = render_page(state.view())?;
            match out {
                Some(path) => {
                    let path = validate_output_path(&path)?;
                    tokio::fs::write(&path, html).await?;
                    tracing::info!("wrote {}", path.display());
                }
                None => println!("{}", html),
            }
            if let PageState::Failed { error, .. } = &state {
                tracing::warn!("page rendered in error state: {}", error);
            }
        }
        Command::Replay { events } => match &mut state {
            PageState::Populated { session, view, .. } => {
                let snapshots = commands::replay(session, &events, view)?;
                for snapshot in snapshots {
                    println!("{}", serde_json::to_string(&snapshot)?);
                }
            }
            PageState::Failed { error, .. } => {
                anyhow::bail!("cannot replay events: {}", error);
            }
        },
    }

    Ok(())
}
