//! # Load Configuration DTO
//!
//! ロード設定のData Transfer Object

/// ロード設定
///
/// CSVをテーブルに投入するために必要な設定情報
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// ロード先テーブル名
    pub table: String,
    /// ソースCSVファイルのパス
    pub source_path: String,
    /// 1回の複数行INSERTに含める行数
    pub batch_size: usize,
}

impl LoadConfig {
    /// 新しいロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use sdg_loader::application::dto::load_config::LoadConfig;
    ///
    /// let config = LoadConfig::new(
    ///     "table_sdg".to_string(),
    ///     "/opt/airflow/data/sdg.csv".to_string(),
    ///     500,
    /// );
    ///
    /// assert_eq!(config.table, "table_sdg");
    /// assert_eq!(config.batch_size, 500);
    /// ```
    pub fn new(table: String, source_path: String, batch_size: usize) -> Self {
        Self {
            table,
            source_path,
            batch_size,
        }
    }
}
