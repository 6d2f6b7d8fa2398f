//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **CreateSchemaUseCase**: 固定スキーマのテーブル作成
//! - **ImportRecordsUseCase**: CSVの一括投入
//! - **ExportRecordsUseCase**: テーブル内容のCSV書き出し

pub mod create_schema;
pub mod export_records;
pub mod import_records;
