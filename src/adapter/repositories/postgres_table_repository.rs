//! PostgreSQL Table Repository Implementation
//!
//! TableRepositoryのPostgreSQL実装

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};

use crate::adapter::config::ConnectionConfig;
use crate::adapter::postgres::{client, sql};
use crate::domain::entities::load_batch::LoadBatch;
use crate::domain::entities::record::{CellValue, Record};
use crate::domain::entities::table_schema::{ColumnType, TableSchema};
use crate::domain::repositories::table_repository::TableRepository;

type SqlParam = Box<dyn ToSql + Sync + Send>;

/// PostgreSQLテーブルリポジトリ
///
/// トランザクション開始に `&mut Client` が必要なため、クライアントは排他ロックで保持する。
/// `Transaction` はcommitされずにdropされるとロールバックされる
pub struct PostgresTableRepository {
    client: Mutex<Client>,
}

impl PostgresTableRepository {
    pub fn new(client: Client) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }

    /// 接続してリポジトリを作成
    pub async fn connect(connection: &ConnectionConfig) -> Result<Self> {
        let client = client::connect(connection).await?;
        Ok(Self::new(client))
    }

    /// CellValueをカラム型に対応するパラメータに変換
    ///
    /// NULLもカラム型付きで渡す
    fn to_sql_param(value: &CellValue, column_type: ColumnType) -> SqlParam {
        match (value, column_type) {
            (CellValue::Text(v), _) => Box::new(v.clone()),
            (CellValue::Integer(v), _) => Box::new(*v),
            (CellValue::Float(v), _) => Box::new(*v),
            (CellValue::Null, ColumnType::Text) => Box::new(None::<String>),
            (CellValue::Null, ColumnType::Integer) => Box::new(None::<i32>),
            (CellValue::Null, ColumnType::Float) => Box::new(None::<f64>),
        }
    }

    fn to_sql_params(schema: &TableSchema, records: &[Record]) -> Vec<SqlParam> {
        records
            .iter()
            .flat_map(|record| {
                record
                    .values()
                    .iter()
                    .zip(schema.columns())
                    .map(|(value, column)| Self::to_sql_param(value, column.column_type))
            })
            .collect()
    }

    fn from_row(schema: &TableSchema, row: &Row) -> Result<Record> {
        let mut values = Vec::with_capacity(schema.column_count());
        for (i, column) in schema.columns().iter().enumerate() {
            let value = match column.column_type {
                ColumnType::Text => row.try_get::<_, Option<String>>(i)?.map(CellValue::Text),
                ColumnType::Integer => row.try_get::<_, Option<i32>>(i)?.map(CellValue::Integer),
                ColumnType::Float => row.try_get::<_, Option<f64>>(i)?.map(CellValue::Float),
            };
            values.push(value.unwrap_or(CellValue::Null));
        }
        Ok(Record::new(values))
    }
}

#[async_trait]
impl TableRepository for PostgresTableRepository {
    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;
        tx.execute(sql::create_table(schema).as_str(), &[]).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_batches(&self, schema: &TableSchema, batches: &[LoadBatch]) -> Result<u64> {
        let max_rows = sql::max_rows_per_statement(schema.column_count());

        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;

        // 行がなくてもテーブルが存在しなければ失敗させる
        tx.execute(sql::probe_table(schema).as_str(), &[]).await?;

        let mut inserted = 0u64;
        for (index, batch) in batches.iter().enumerate() {
            for chunk in batch.records().chunks(max_rows) {
                let statement = sql::insert_rows(schema, chunk.len());
                let params = Self::to_sql_params(schema, chunk);
                let refs: Vec<&(dyn ToSql + Sync)> = params
                    .iter()
                    .map(|p| &**p as &(dyn ToSql + Sync))
                    .collect();
                inserted += tx.execute(statement.as_str(), &refs).await?;
            }
            debug!(
                "Inserted batch {}/{} ({} rows)",
                index + 1,
                batches.len(),
                batch.len()
            );
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn fetch_all(&self, schema: &TableSchema) -> Result<Vec<Record>> {
        let client = self.client.lock().await;
        let rows = client.query(sql::select_all(schema).as_str(), &[]).await?;
        rows.iter().map(|row| Self::from_row(schema, row)).collect()
    }

    async fn count_rows(&self, table: &str) -> Result<u64> {
        let client = self.client.lock().await;
        let row = client.query_one(sql::count_rows(table).as_str(), &[]).await?;
        let count: i64 = row.try_get(0)?;
        Ok(count as u64)
    }
}
