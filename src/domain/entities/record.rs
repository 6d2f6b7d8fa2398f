//! # Record Entity
//!
//! テーブルの1行を表すエンティティ

use super::table_schema::ColumnType;

/// セルの値
///
/// 空フィールドはどの型のカラムでも `Null` になる
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Integer(i32),
    Float(f64),
}

impl CellValue {
    /// 値がカラム型に格納可能かどうか
    pub fn fits(&self, column_type: ColumnType) -> bool {
        matches!(
            (self, column_type),
            (CellValue::Null, _)
                | (CellValue::Text(_), ColumnType::Text)
                | (CellValue::Integer(_), ColumnType::Integer)
                | (CellValue::Float(_), ColumnType::Float)
        )
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            CellValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// レコード
///
/// 値はテーブルのカラム宣言順に並ぶ
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<CellValue>,
}

impl Record {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
