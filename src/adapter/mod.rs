//! Adapter Layer
//!
//! 外部システム（PostgreSQL, ファイルシステム）との統合

pub mod config;
pub mod postgres;
pub mod repositories;
