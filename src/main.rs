use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use workboard_server::{start_workboard_server, CmdArgs};
use workboard_utils::error::WorkboardResult;

#[tokio::main]
pub async fn main() -> WorkboardResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_workboard_server(args).await?;
  Ok(())
}
