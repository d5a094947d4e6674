use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use ledger_position::{load_from_file, replay_settlements, PositionInfo, PositionKey, PositionStore, ReplayConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(Parser, Debug)]
struct Commands {
    /// Settlement script in TOML format
    #[arg(short, long)]
    config: PathBuf,

    /// Print resulting positions as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct PositionEntry<'a> {
    key: &'a PositionKey,
    position: &'a PositionInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let fmt_layer = fmt::Layer::default().with_thread_ids(false).with_file(false).with_line_number(true).with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    let args = Commands::parse();

    let config: ReplayConfig = load_from_file(args.config.clone()).await?;
    info!("Loaded {} settlements from {}", config.settlements.len(), args.config.display());

    let mut store = PositionStore::new();
    replay_settlements(&mut store, &config.settlements)?;

    let mut positions: Vec<_> = store.iter().collect();
    positions.sort_by_key(|(key, _)| **key);

    if args.json {
        let entries: Vec<PositionEntry> = positions.into_iter().map(|(key, position)| PositionEntry { key, position }).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (key, position) in positions {
            println!(
                "{key} liquidity {} fee_growth_inside {} {} tokens_owed {} {}",
                position.liquidity(),
                position.fee_growth_inside_0_last_x128(),
                position.fee_growth_inside_1_last_x128(),
                position.tokens_owed_0(),
                position.tokens_owed_1()
            );
        }
    }

    Ok(())
}
