use anyhow::Result;
use arxiv_embed::config::{get_config, load_config, Config};
use arxiv_embed::embedding::OpenAiProvider;
use arxiv_embed::feed::ArxivFeed;
use arxiv_embed::models::PaperRecord;
use arxiv_embed::server::{run_server, AppState};
use arxiv_embed::storage::{EmbeddingStore, MemoryStore, RestStore};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arxiv-embed - Serve arXiv paper listings and persist text embeddings
#[derive(Parser, Debug)]
#[command(name = "arxiv-embed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch arXiv paper listings and persist text embeddings", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for fetched listings
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable block format
    Plain,
    /// JSON array of records
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Use the in-memory store instead of the configured backend
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },

    /// Fetch the newest papers in a category and print them
    #[command(alias = "f")]
    Fetch {
        /// arXiv category (e.g. cs.AI)
        #[arg(long, short)]
        category: String,

        /// Number of latest papers to retrieve
        #[arg(long, short, default_value_t = 10)]
        max_results: usize,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Plain)]
        output: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("arxiv_embed={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("using config file: {}", path.display());
            load_config(path)?
        }
        None => get_config(),
    };

    match cli.command {
        Commands::Serve { dry_run } => serve(config, dry_run).await,
        Commands::Fetch {
            category,
            max_results,
            output,
        } => fetch(category, max_results, output).await,
    }
}

async fn serve(config: Config, dry_run: bool) -> Result<()> {
    let api_key = config.embedding.api_key.clone().ok_or_else(|| {
        anyhow::anyhow!("no embedding API key configured (set OPENAI_API_KEY)")
    })?;

    let embeddings = Arc::new(OpenAiProvider::with_base_url(
        config.embedding.api_base.as_str(),
        api_key,
        config.embedding.model.as_str(),
    ));

    let store: Arc<dyn EmbeddingStore> = match (&config.storage.base_url, dry_run) {
        (Some(base_url), false) => Arc::new(RestStore::new(
            base_url.as_str(),
            config.storage.table.as_str(),
            config.storage.credential.clone(),
        )),
        _ => {
            tracing::info!("using in-memory embedding store");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = config.server.bind;
    let state = AppState::new(config, ArxivFeed::new(), embeddings, store);
    run_server(addr, state).await
}

async fn fetch(category: String, max_results: usize, output: OutputFormat) -> Result<()> {
    let feed = ArxivFeed::new();
    let papers = feed.latest(&category, max_results).await?;

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&papers)?),
        OutputFormat::Plain => {
            for paper in &papers {
                print_paper(paper);
            }
        }
    }

    Ok(())
}

fn print_paper(paper: &PaperRecord) {
    println!("Title: {}", paper.title);
    println!("Authors: {}", paper.authors);
    println!("Summary: {}", paper.summary);
    println!("Published Date: {}", paper.published_date);
    println!("Link: {}", paper.link);
    println!("----------------------------------------");
}
