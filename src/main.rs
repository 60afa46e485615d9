use clap::Parser;
use scribe_server::{start_scribe_server, CmdArgs};
use scribe_utils::error::ScribeResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> ScribeResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_scribe_server(args).await?;
  Ok(())
}
