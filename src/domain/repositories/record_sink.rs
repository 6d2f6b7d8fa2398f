//! # Record Sink Trait
//!
//! テーブル内容のファイル書き出しを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::record::Record;
use crate::domain::entities::table_schema::TableSchema;

/// レコードシンク
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// ヘッダー行（カラム名）とレコードを書き出す
    ///
    /// # Returns
    ///
    /// 書き出したデータ行数
    async fn write_records(
        &self,
        path: &str,
        schema: &TableSchema,
        records: &[Record],
    ) -> Result<usize>;
}
