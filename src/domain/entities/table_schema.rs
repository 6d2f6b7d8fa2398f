//! # TableSchema Value Object
//!
//! ロード先テーブルのカラム定義

use std::fmt;

use crate::domain::errors::LoadError;

/// カラムの型
///
/// CSVのフィールドはこの型に従って変換される
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 文字列
    Text,
    /// 32bit整数
    Integer,
    /// 倍精度浮動小数点
    Float,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // PostgreSQL のエラーメッセージと同じ型名
        let name = match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Float => "double precision",
        };
        f.write_str(name)
    }
}

/// カラム定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// テーブルスキーマ
///
/// テーブル名と順序付きのカラムリスト。CSVとの対応はカラムの位置のみで決まる。
/// 主キー、一意制約、NOT NULL制約は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// 新しいスキーマを作成
    ///
    /// # Errors
    ///
    /// テーブル名またはカラム名が空の場合、カラムが1つもない場合にエラーを返す
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Result<Self, LoadError> {
        let name = name.into();
        validate_identifier(&name)?;
        if columns.is_empty() {
            return Err(LoadError::EmptySchema(name));
        }
        for column in &columns {
            validate_identifier(&column.name)?;
        }

        Ok(Self { name, columns })
    }

    /// テーブル名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// カラム定義（宣言順）
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// カラム数
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// カラム名のイテレータ（宣言順）
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

fn validate_identifier(name: &str) -> Result<(), LoadError> {
    if name.trim().is_empty() || name.contains('\0') {
        return Err(LoadError::InvalidIdentifier(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_preserves_column_order() {
        let schema = TableSchema::new(
            "t",
            vec![
                ColumnDef::new("b", ColumnType::Text),
                ColumnDef::new("a", ColumnType::Integer),
                ColumnDef::new("c", ColumnType::Float),
            ],
        )
        .unwrap();

        let names: Vec<&str> = schema.column_names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(schema.column_count(), 3);
        assert_eq!(schema.columns()[1].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_schema_rejects_empty_table_name() {
        let result = TableSchema::new("  ", vec![ColumnDef::new("a", ColumnType::Text)]);
        assert!(matches!(result, Err(LoadError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_schema_rejects_empty_column_name() {
        let result = TableSchema::new("t", vec![ColumnDef::new("", ColumnType::Text)]);
        assert!(matches!(result, Err(LoadError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_schema_rejects_no_columns() {
        let result = TableSchema::new("t", vec![]);
        assert!(matches!(result, Err(LoadError::EmptySchema(_))));
    }

    #[test]
    fn test_column_type_display_uses_sql_names() {
        assert_eq!(ColumnType::Text.to_string(), "text");
        assert_eq!(ColumnType::Integer.to_string(), "integer");
        assert_eq!(ColumnType::Float.to_string(), "double precision");
    }
}
