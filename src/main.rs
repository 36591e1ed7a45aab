use genre_scout::{cli, env};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    env::load_env_file();

    cli::run().await?;
    Ok(())
}
