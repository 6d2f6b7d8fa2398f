//! # LoadBatch Value Object
//!
//! 1回の複数行INSERTで投入するレコードのまとまり

use super::record::Record;

/// ロードバッチ
///
/// レコードのコレクションを表すバリューオブジェクト
#[derive(Debug, Clone, Default)]
pub struct LoadBatch {
    records: Vec<Record>,
}

impl LoadBatch {
    /// 新しいロードバッチを作成
    ///
    /// # Arguments
    ///
    /// * `records` - レコードのベクター
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// バッチ内のレコード数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// レコードへの参照を返す
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// バッチをサイズで分割
    ///
    /// # Arguments
    ///
    /// * `batch_size` - 分割後の各バッチのサイズ（0の場合は分割しない）
    ///
    /// # Returns
    ///
    /// 分割されたバッチのベクター。空のバッチからは空のベクターを返す
    pub fn split_by_size(self, batch_size: usize) -> Vec<LoadBatch> {
        if self.records.is_empty() {
            return Vec::new();
        }
        if batch_size == 0 {
            return vec![self];
        }

        let mut batches = Vec::with_capacity(self.records.len().div_ceil(batch_size));
        let mut records = self.records;
        while records.len() > batch_size {
            let rest = records.split_off(batch_size);
            batches.push(LoadBatch::new(records));
            records = rest;
        }
        batches.push(LoadBatch::new(records));
        batches
    }
}
