//! SDG Loader
//!
//! SDGデータセットのCSVを PostgreSQL に一括投入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use sdg_loader::adapter::config::Config;
use sdg_loader::driver::{self, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    driver::run(config, args).await
}
