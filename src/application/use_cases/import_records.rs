//! # Import Records Use Case
//!
//! CSV一括投入ユースケース

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::sync::Arc;

use crate::application::dto::load_config::LoadConfig;
use crate::domain::entities::load_batch::LoadBatch;
use crate::domain::entities::table_schema::TableSchema;
use crate::domain::errors::LoadError;
use crate::domain::repositories::record_source::RecordSource;
use crate::domain::repositories::table_repository::TableRepository;

/// 投入結果のサマリー
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// ソースから読み込んだデータ行数（ヘッダーを除く）
    pub rows_read: usize,
    /// データベースが報告した挿入行数
    pub rows_inserted: u64,
    /// 実行したバッチ数
    pub batch_count: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ImportSummary {
    /// 所要時間（ミリ秒）
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// CSV一括投入ユースケース
///
/// ソースを全行読み込んで変換したあと、バッチに分割して1トランザクションで挿入する。
/// 変換エラーがあればトランザクションは開始されない
pub struct ImportRecordsUseCase<S: RecordSource, T: TableRepository> {
    record_source: Arc<S>,
    table_repository: Arc<T>,
}

impl<S: RecordSource, T: TableRepository> ImportRecordsUseCase<S, T> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `record_source` - レコードソース
    /// * `table_repository` - テーブルリポジトリ
    pub fn new(record_source: Arc<S>, table_repository: Arc<T>) -> Self {
        Self {
            record_source,
            table_repository,
        }
    }

    /// ソースファイルをテーブルに投入する
    ///
    /// # Errors
    ///
    /// ソースの読み込み・変換、挿入のいずれかに失敗した場合、
    /// または挿入行数が読み込み行数と一致しない場合
    pub async fn execute(&self, schema: &TableSchema, config: &LoadConfig) -> Result<ImportSummary> {
        let started_at = Utc::now();

        let records = self
            .record_source
            .read_records(&config.source_path, schema)
            .await?;
        let rows_read = records.len();
        info!("Read {} records from {}", rows_read, config.source_path);

        let batches = LoadBatch::new(records).split_by_size(config.batch_size);
        debug!(
            "Split into {} batches (batch size {})",
            batches.len(),
            config.batch_size
        );

        let rows_inserted = self
            .table_repository
            .insert_batches(schema, &batches)
            .await?;

        if rows_inserted != rows_read as u64 {
            return Err(LoadError::RowCountMismatch {
                table: schema.name().to_string(),
                expected: rows_read as u64,
                actual: rows_inserted,
            }
            .into());
        }

        info!("Inserted {} rows into {}", rows_inserted, schema.name());

        Ok(ImportSummary {
            rows_read,
            rows_inserted,
            batch_count: batches.len(),
            started_at,
            finished_at: Utc::now(),
        })
    }
}
