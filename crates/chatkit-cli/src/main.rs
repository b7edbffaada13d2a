use chatkit::ChatKit;
use chatkit_cli::{Command, execute};
use chatkit_observability::{LogFormat, init_logging};
use clap::Parser;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "chatkit-cli")]
#[command(about = "Chatkit CLI - Manage Chatkit users and rooms", long_about = None)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_logging(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    if let Err(e) = run(cli.command).await {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let chatkit = ChatKit::from_env()?;
    tracing::debug!(instance = %chatkit.config().instance_id(), "Loaded Chatkit configuration");

    let output = execute(&chatkit, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
