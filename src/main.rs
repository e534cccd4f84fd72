//! Foundry CLI binary entry point.

use agent_foundry::cli::{Cli, Commands, ReplayArgs};
use agent_foundry::config::FoundryConfig;
use agent_foundry::encoding::encode_stream;
use agent_foundry::replay::open_capture;
use agent_foundry::translate::translate;
use agent_foundry::types::RunIdentity;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() {
    agent_foundry::observability::init_tracing();
    let cli = Cli::parse_args();

    let result = match cli.command {
        Commands::Replay(args) => handle_replay(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn handle_replay(args: ReplayArgs) -> agent_foundry::error::Result<()> {
    let mut config = FoundryConfig::from_env()?;
    if let Some(policy) = args.policy {
        config = config.with_failure_policy(policy);
    }

    let upstream = open_capture(&args.file).await?;
    let identity = RunIdentity::resolve(args.thread_id, args.run_id);
    let events = translate(upstream, identity, config.translator_settings());
    let mut frames = encode_stream(events);

    let mut stdout = tokio::io::stdout();
    while let Some(frame) = frames.next().await {
        stdout.write_all(frame?.as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}
