use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use genre_scout::web::{self, AppState};
use genre_scout::{DiscovererBuilder, env};
use log::info;

#[derive(Parser)]
#[command(name = "genre-scout-web")]
#[command(version, about = "Serve the emerging artist form over HTTP", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8501")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    env::load_env_file();
    let args = Args::parse();

    info!("Building discoverer ...");
    // One client for the whole process, shared by every request
    let discoverer = DiscovererBuilder::new().build()?;
    let state = Arc::new(AppState::new(discoverer));

    web::serve(args.bind, state).await?;
    Ok(())
}
