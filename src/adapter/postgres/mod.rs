//! PostgreSQL Adapter Modules
//!
//! PostgreSQL統合のためのアダプターモジュール

pub mod client;
pub mod sql;
