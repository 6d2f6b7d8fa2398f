//! # Create Schema Use Case
//!
//! テーブル作成ユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::entities::table_schema::TableSchema;
use crate::domain::repositories::table_repository::TableRepository;

/// テーブル作成ユースケース
///
/// 固定スキーマのテーブルを作成する。冪等ではなく、既存テーブルがあれば失敗する
pub struct CreateSchemaUseCase<T: TableRepository> {
    table_repository: Arc<T>,
}

impl<T: TableRepository> CreateSchemaUseCase<T> {
    /// 新しいユースケースを作成
    pub fn new(table_repository: Arc<T>) -> Self {
        Self { table_repository }
    }

    /// テーブルを作成する
    ///
    /// # Errors
    ///
    /// テーブルが既に存在する場合。エラーはそのまま呼び出し元に返す
    pub async fn execute(&self, schema: &TableSchema) -> Result<()> {
        info!(
            "Creating table {} with {} columns",
            schema.name(),
            schema.column_count()
        );
        self.table_repository.create_table(schema).await?;
        info!("Created table {}", schema.name());
        Ok(())
    }
}
