//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod csv_record_sink;
pub mod csv_record_source;
pub mod memory_table_repository;
pub mod postgres_table_repository;
