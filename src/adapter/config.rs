//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::application::dto::load_config::LoadConfig;
use crate::domain::services::sdg_catalog::DEFAULT_TABLE_NAME;

pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// データベース接続設定
///
/// 接続先は環境から暗黙に取らず、必ずこの構造体で渡す
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    #[serde(default = "default_table")]
    pub table: String,
    pub source_path: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_table() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            anyhow::bail!("batch_size must be greater than 0");
        }
        if self.table.trim().is_empty() {
            anyhow::bail!("table must not be empty");
        }
        Ok(())
    }

    /// `~` を展開したソースパス
    pub fn expanded_source_path(&self) -> String {
        shellexpand::tilde(&self.source_path).into_owned()
    }

    /// Application層向けのロード設定に変換
    pub fn to_load_config(&self) -> LoadConfig {
        LoadConfig::new(
            self.table.clone(),
            self.expanded_source_path(),
            self.batch_size,
        )
    }
}
