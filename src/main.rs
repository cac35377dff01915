//! Preview CLI for the navigation controller.
//!
//! Lets template authors resolve and render routes from a terminal: static
//! routes render locally, dynamic routes fetch from the configured content
//! API, exactly as the in-page controller would.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content_nav::config::{load_config, NavConfig};
use content_nav::fetch::HttpFetcher;
use content_nav::render::{BufferSink, RenderContext};
use content_nav::{NavigateOptions, Navigator, RouteTable};

#[derive(Parser)]
#[command(name = "content-nav")]
#[command(about = "Preview tool for the site navigation controller", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a route and print the rendered HTML
    Render {
        /// Site-relative path, e.g. /about-us or /topics/energy
        path: String,
    },
    /// Print the static and dynamic route tables
    Routes,
    /// Load and validate a config file
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => NavConfig::default(),
    };

    // RUST_LOG wins; the config level is the fallback.
    let default_filter = format!("content_nav={}", config.observability.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Render { path } => render_route(&config, &path).await,
        Commands::Routes => {
            print_routes();
            ExitCode::SUCCESS
        }
        Commands::CheckConfig => {
            // Loading already validated; reaching here means it passed.
            if cli.config.is_none() {
                eprintln!("error: --config is required for check-config");
                return ExitCode::FAILURE;
            }
            println!("config ok");
            ExitCode::SUCCESS
        }
    }
}

async fn render_route(config: &NavConfig, path: &str) -> ExitCode {
    let fetcher = match HttpFetcher::new(config.fetch.clone()) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("error: failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Derive the site-relative context path from the configured base URL.
    let context_path = url::Url::parse(&config.api.context_base)
        .map(|u| u.path().trim_end_matches('/').to_string())
        .unwrap_or_default();

    let mut navigator = Navigator::new(config, RenderContext::new(context_path), fetcher);
    let mut sink = BufferSink::new();

    match navigator
        .navigate(&mut sink, path, NavigateOptions::no_history())
        .await
    {
        Ok(outcome) => {
            eprintln!("rendered with template: {}", outcome.template());
            if let Some(html) = sink.html() {
                println!("{html}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            // A fetch failure still produced the error page; show it.
            if let Some(html) = sink.html() {
                println!("{html}");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_routes() {
    let table = RouteTable::new();
    println!("static routes:");
    for (path, template) in table.static_routes() {
        println!("  {path:<14} -> {template}");
    }
    println!("dynamic prefixes (in evaluation order):");
    for (prefix, template) in table.dynamic_routes() {
        println!("  {prefix:<14} -> {template}  (fetches {{context_base}}/api{{path}})");
    }
}
