//! # Percept CLI
//!
//! Command-line interface for encoding sensor percepts into state hashes.
//!
//! ```bash
//! # 编码单个快照
//! percept-cli encode --puck-left 1 --left 0.5 --mid 1.0
//!
//! # 回放 JSON Lines 日志（每行一个快照）
//! percept-cli replay snapshots.jsonl --scheme PuckMid16
//!
//! # 列出哈希方案
//! percept-cli schemes
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod settings;

use commands::{EncodeCommand, ReplayCommand, SchemesCommand};

/// Percept CLI - 感知快照编码工具
#[derive(Parser, Debug)]
#[command(name = "percept-cli")]
#[command(about = "Encode sensor percepts into 16-bit state hashes", long_about = None)]
#[command(version)]
struct Cli {
    /// 编码器配置文件（TOML），缺省时读取 `<config_dir>/percept/encoder.toml`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 编码单个快照
    Encode {
        #[command(flatten)]
        args: EncodeCommand,
    },

    /// 回放 JSON Lines 快照日志
    Replay {
        #[command(flatten)]
        args: ReplayCommand,
    },

    /// 列出已注册的哈希方案
    Schemes,
}

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，不干扰 stdout 的结果）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("percept_cli=info,warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = settings::load_encoder_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode { args } => args.execute(config),

        Commands::Replay { args } => args.execute(config),

        Commands::Schemes => SchemesCommand.execute(),
    }
}
