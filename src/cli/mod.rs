use std::net::SocketAddr;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the itinerary form over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8501")]
        listen: SocketAddr,
    },

    /// Generate one itinerary and print it as markdown
    Plan {
        #[arg(short, long)]
        city: String,

        /// Comma-separated interests, e.g. "museums, food"
        #[arg(short, long)]
        interests: String,
    },

    /// Show the resolved model provider
    Config,
}
