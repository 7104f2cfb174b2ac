use anyhow::Result;
use clap::Parser;
use weather_scene::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_scene::run(cli).await
}
