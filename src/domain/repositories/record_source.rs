//! # Record Source Trait
//!
//! 区切りテキストファイルからのレコード読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::record::Record;
use crate::domain::entities::table_schema::TableSchema;

/// レコードソース
///
/// ヘッダー行を読み飛ばし、残りの各行をスキーマに従ってレコードに変換する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// ファイルを読み込んでレコードに変換する
    ///
    /// # Arguments
    ///
    /// * `path` - ソースファイルのパス
    /// * `schema` - ロード先のスキーマ
    ///
    /// # Errors
    ///
    /// ファイルが読めない場合、ヘッダーのカラム数が合わない場合、
    /// いずれかの行が変換できない場合にエラーを返す。部分的な結果は返さない
    async fn read_records(&self, path: &str, schema: &TableSchema) -> Result<Vec<Record>>;
}
