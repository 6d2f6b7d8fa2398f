//! In-Memory Table Repository Implementation
//!
//! TableRepositoryのメモリ実装。dry-runとテストで使う。
//! 書き込みはステージングしてから一括で反映するため、途中で失敗しても何も残らない

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

use crate::domain::entities::load_batch::LoadBatch;
use crate::domain::entities::record::Record;
use crate::domain::entities::table_schema::{ColumnType, TableSchema};
use crate::domain::repositories::table_repository::TableRepository;

/// メモリストアのエラー（PostgreSQLと同じ文言）
#[derive(Debug, Error, PartialEq)]
pub enum MemoryStoreError {
    #[error("relation \"{0}\" already exists")]
    DuplicateTable(String),

    #[error("relation \"{0}\" does not exist")]
    UndefinedTable(String),

    #[error("INSERT has {found} expressions but \"{table}\" has {expected} columns")]
    ColumnCount {
        table: String,
        expected: usize,
        found: usize,
    },

    #[error("column \"{column}\" is of type {expected} but expression is of a different type")]
    TypeMismatch { column: String, expected: ColumnType },
}

#[derive(Debug)]
struct MemoryTable {
    schema: TableSchema,
    rows: Vec<Record>,
}

/// メモリ上のテーブルリポジトリ
#[derive(Debug, Default)]
pub struct MemoryTableRepository {
    tables: Mutex<HashMap<String, MemoryTable>>,
}

impl MemoryTableRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 作成済みテーブルのスキーマ
    pub fn table_schema(&self, table: &str) -> Option<TableSchema> {
        self.lock_tables()
            .ok()?
            .get(table)
            .map(|t| t.schema.clone())
    }

    fn lock_tables(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, MemoryTable>>> {
        self.tables
            .lock()
            .map_err(|e| anyhow::anyhow!("memory store lock poisoned: {}", e))
    }

    /// 1行をテーブル定義に照らして検査する
    fn check_record(schema: &TableSchema, record: &Record) -> Result<(), MemoryStoreError> {
        if record.len() != schema.column_count() {
            return Err(MemoryStoreError::ColumnCount {
                table: schema.name().to_string(),
                expected: schema.column_count(),
                found: record.len(),
            });
        }
        for (value, column) in record.values().iter().zip(schema.columns()) {
            if !value.fits(column.column_type) {
                return Err(MemoryStoreError::TypeMismatch {
                    column: column.name.clone(),
                    expected: column.column_type,
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TableRepository for MemoryTableRepository {
    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let mut tables = self.lock_tables()?;
        if tables.contains_key(schema.name()) {
            return Err(MemoryStoreError::DuplicateTable(schema.name().to_string()).into());
        }
        tables.insert(
            schema.name().to_string(),
            MemoryTable {
                schema: schema.clone(),
                rows: Vec::new(),
            },
        );
        Ok(())
    }

    async fn insert_batches(&self, schema: &TableSchema, batches: &[LoadBatch]) -> Result<u64> {
        let mut tables = self.lock_tables()?;
        let table = tables
            .get_mut(schema.name())
            .ok_or_else(|| MemoryStoreError::UndefinedTable(schema.name().to_string()))?;

        // 既存テーブルの定義で検査する（呼び出し側のスキーマではなく）
        let mut staged = Vec::new();
        for record in batches.iter().flat_map(LoadBatch::records) {
            Self::check_record(&table.schema, record)?;
            staged.push(record.clone());
        }

        let inserted = staged.len() as u64;
        table.rows.extend(staged);
        Ok(inserted)
    }

    async fn fetch_all(&self, schema: &TableSchema) -> Result<Vec<Record>> {
        let tables = self.lock_tables()?;
        let table = tables
            .get(schema.name())
            .ok_or_else(|| MemoryStoreError::UndefinedTable(schema.name().to_string()))?;
        Ok(table.rows.clone())
    }

    async fn count_rows(&self, table: &str) -> Result<u64> {
        let tables = self.lock_tables()?;
        let table = tables
            .get(table)
            .ok_or_else(|| MemoryStoreError::UndefinedTable(table.to_string()))?;
        Ok(table.rows.len() as u64)
    }
}
