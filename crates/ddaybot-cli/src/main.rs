use clap::{Parser, Subcommand};

use ddaybot_config::Config;
use ddaybot_line::LineApi;
use ddaybot_scheduler::{Clock, SystemClock, days_remaining, message};

#[derive(Parser)]
#[command(name = "ddaybot", about = "LINE D-Day countdown bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook gateway and the daily scheduler
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Push the countdown message to the configured group once
    Send,
    /// Print the number of days remaining
    Days,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config::from_env()?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                ddaybot_gateway::start_gateway(config, port)
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))
            })?;
        }
        Commands::Send => {
            let config = Config::from_env()?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let Some(group_id) = &config.group_id else {
                    println!("LINE_GROUP_ID is not set; nothing to send");
                    return Ok(());
                };
                let api = LineApi::new(&config.channel_access_token);
                let days_left = days_remaining(config.target_date, SystemClock.now_local());
                api.push_message(group_id, &message::daily_countdown(days_left, config.target_date))
                    .await?;
                println!("Sent! Days left: {days_left}");
                anyhow::Ok(())
            })?;
        }
        Commands::Days => {
            let config = Config::from_env()?;
            let days_left = days_remaining(config.target_date, SystemClock.now_local());
            println!(
                "{days_left} day(s) until D-Day ({})",
                config.target_date.format("%d/%m/%Y")
            );
        }
    }

    Ok(())
}
