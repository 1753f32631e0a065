mod cli;

use std::process;

use appannie_stats::config::Config;
use appannie_stats::error::Error;
use appannie_stats::service::{AppAnnieService, StatsLoader};
use clap::Parser;
use cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .compact()
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  match run(Cli::parse()).await {
    Ok(_) => println!("done!"),
    Err(e) => {
      error!("{e}");
      println!("{e}");
      process::exit(1);
    }
  }
}

async fn run(Cli { account, app, out, key }: Cli) -> Result<String, Error> {
  let config = Config::resolve(account, app, key, out)?;
  let service = AppAnnieService::new()?;

  service.export_weekly_stats(&config).await
}
