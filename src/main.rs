use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use travel_planner::connector::{backend_from_env, backend_from_env_file, web};
use travel_planner::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "travel-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with canned itineraries instead of calling a model provider
    #[arg(long, global = true)]
    mock_llm: bool,

    /// Read configuration from this dotenv file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let backend = match cli.env_file.as_deref() {
        Some(path) => backend_from_env_file(path)?,
        None => backend_from_env(),
    };

    let container = Container::new(ContainerConfig {
        backend,
        mock_llm: cli.mock_llm,
    });

    if let Commands::Serve { listen } = cli.command {
        return web::serve(Arc::new(container), listen).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
