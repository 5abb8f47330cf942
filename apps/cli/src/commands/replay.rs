//! replay 命令
//!
//! 逐行读取 JSON Lines 快照日志，输出每条记录的哈希，最后汇总诊断事件数

use anyhow::{Context, Result};
use clap::Args;
use percept_encoder::{
    ChannelOverflowHook, EncoderConfig, HashScheme, OverflowKind, SensorSnapshot, StateEncoder,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 回放命令参数
#[derive(Args, Debug)]
pub struct ReplayCommand {
    /// 快照日志路径（每行一个 JSON 快照，空行忽略）
    pub input: PathBuf,

    /// 哈希方案（覆盖配置）
    #[arg(short, long)]
    pub scheme: Option<HashScheme>,
}

/// 回放统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub records: usize,
    pub budget_overflows: usize,
    pub field_carries: usize,
}

impl ReplayCommand {
    /// 执行回放
    pub fn execute(&self, mut config: EncoderConfig) -> Result<()> {
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }

        let file = File::open(&self.input)
            .with_context(|| format!("❌ 无法打开日志文件: {}", self.input.display()))?;

        let stdout = std::io::stdout();
        let summary = replay(BufReader::new(file), config, &mut stdout.lock())?;

        info!(
            records = summary.records,
            budget_overflows = summary.budget_overflows,
            field_carries = summary.field_carries,
            "replay finished"
        );
        println!(
            "# records={} budget_overflows={} field_carries={}",
            summary.records, summary.budget_overflows, summary.field_carries
        );

        Ok(())
    }
}

/// 编码日志中的每个快照，按 `行号<TAB>哈希` 写出
pub fn replay<R: BufRead, W: Write>(
    reader: R,
    config: EncoderConfig,
    out: &mut W,
) -> Result<ReplaySummary> {
    let (hook, rx) = ChannelOverflowHook::new();
    let encoder = StateEncoder::builder().config(config).hook(Arc::new(hook)).build();

    let mut summary = ReplaySummary::default();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("读取第 {} 行失败", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let snapshot: SensorSnapshot = serde_json::from_str(&line)
            .with_context(|| format!("第 {} 行不是有效的快照", line_no))?;
        let state = encoder.encode(&snapshot);
        summary.records += 1;

        writeln!(out, "{}\t{}", line_no, state.hash())?;

        // 逐条取走事件，队列不会积压
        for event in rx.try_iter() {
            match event.kind {
                OverflowKind::HashBudget => summary.budget_overflows += 1,
                OverflowKind::FieldCarry => summary.field_carries += 1,
            }
        }
    }

    Ok(summary)
}
