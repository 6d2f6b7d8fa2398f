//! # Table Repository Trait
//!
//! ロード先テーブルへの操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::load_batch::LoadBatch;
use crate::domain::entities::record::Record;
use crate::domain::entities::table_schema::TableSchema;

/// テーブルリポジトリ
///
/// 書き込み系の操作はそれぞれ1つのトランザクションで実行され、
/// 失敗した場合は何も残らない
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// テーブルを作成する
    ///
    /// # Errors
    ///
    /// 同名のテーブルが既に存在する場合にエラーを返す（ロールバック済み）
    async fn create_table(&self, schema: &TableSchema) -> Result<()>;

    /// 全バッチを1つのトランザクションで挿入する
    ///
    /// # Returns
    ///
    /// 挿入された行数
    ///
    /// # Errors
    ///
    /// いずれかのバッチが失敗した場合、それまでのバッチも含めてロールバックする
    async fn insert_batches(&self, schema: &TableSchema, batches: &[LoadBatch]) -> Result<u64>;

    /// テーブルの全行をカラム宣言順で読み出す
    async fn fetch_all(&self, schema: &TableSchema) -> Result<Vec<Record>>;

    /// テーブルの行数を返す
    async fn count_rows(&self, table: &str) -> Result<u64>;
}
