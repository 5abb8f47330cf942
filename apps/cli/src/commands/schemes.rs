//! schemes 命令
//!
//! 列出已注册的哈希方案及其上界

use anyhow::Result;
use percept_encoder::HashScheme;

/// 方案列表命令
#[derive(Debug)]
pub struct SchemesCommand;

impl SchemesCommand {
    pub fn execute(&self) -> Result<()> {
        print!("{}", render_schemes());
        Ok(())
    }
}

fn render_schemes() -> String {
    HashScheme::ALL
        .into_iter()
        .map(|scheme| {
            let default = if scheme == HashScheme::default() { " (default)" } else { "" };
            format!("{:<10} max={}{}\n", scheme.name(), scheme.max_hash_size(), default)
        })
        .collect()
}
