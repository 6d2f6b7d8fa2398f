//! # Export Records Use Case
//!
//! テーブル内容をCSVに書き出すユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::entities::table_schema::TableSchema;
use crate::domain::repositories::record_sink::RecordSink;
use crate::domain::repositories::table_repository::TableRepository;

/// エクスポートユースケース
///
/// テーブルの全行を読み出し、カラム名のヘッダー付きで書き出す
pub struct ExportRecordsUseCase<T: TableRepository, K: RecordSink> {
    table_repository: Arc<T>,
    record_sink: Arc<K>,
}

impl<T: TableRepository, K: RecordSink> ExportRecordsUseCase<T, K> {
    pub fn new(table_repository: Arc<T>, record_sink: Arc<K>) -> Self {
        Self {
            table_repository,
            record_sink,
        }
    }

    /// テーブルを書き出す
    ///
    /// # Returns
    ///
    /// 書き出した行数
    pub async fn execute(&self, schema: &TableSchema, output_path: &str) -> Result<usize> {
        let records = self.table_repository.fetch_all(schema).await?;
        let written = self
            .record_sink
            .write_records(output_path, schema, &records)
            .await?;

        info!(
            "Exported {} rows from {} to {}",
            written,
            schema.name(),
            output_path
        );

        Ok(written)
    }
}
