//! # Coercion Service
//!
//! CSVの生フィールドをカラム型の値に変換するサービス

use crate::domain::entities::record::{CellValue, Record};
use crate::domain::entities::table_schema::{ColumnDef, ColumnType, TableSchema};
use crate::domain::errors::LoadError;

/// 型変換サービス
///
/// 位置によるカラム対応付けで、1行分のフィールドをレコードに変換する
pub struct CoercionService;

impl CoercionService {
    /// ヘッダー行のカラム数をスキーマと照合する
    ///
    /// ヘッダーの名前は使わない。カラム数のみを確認する
    pub fn check_header(field_count: usize, schema: &TableSchema) -> Result<(), LoadError> {
        if field_count == 0 {
            return Err(LoadError::MissingHeader {
                table: schema.name().to_string(),
            });
        }
        if field_count != schema.column_count() {
            return Err(LoadError::HeaderMismatch {
                table: schema.name().to_string(),
                expected: schema.column_count(),
                found: field_count,
            });
        }
        Ok(())
    }

    /// 1行分のフィールドをレコードに変換する
    ///
    /// # Arguments
    ///
    /// * `fields` - CSVのフィールド（左から順に）
    /// * `schema` - ロード先のスキーマ
    /// * `line` - エラーメッセージ用の行番号（1始まり）
    ///
    /// # Errors
    ///
    /// フィールド数がカラム数と異なる場合、または型変換に失敗した場合
    pub fn coerce_record<'a, I>(
        fields: I,
        schema: &TableSchema,
        line: u64,
    ) -> Result<Record, LoadError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();

        if fields.len() > schema.column_count() {
            return Err(LoadError::ExtraData {
                table: schema.name().to_string(),
                line,
            });
        }
        if let Some(column) = schema.columns().get(fields.len()) {
            return Err(LoadError::MissingData {
                table: schema.name().to_string(),
                line,
                column: column.name.clone(),
            });
        }

        let values = fields
            .iter()
            .zip(schema.columns())
            .map(|(raw, column)| Self::coerce_field(raw, column, schema.name(), line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Record::new(values))
    }

    /// 1フィールドを変換する
    ///
    /// 空フィールドはカラム型に関係なく `Null`。
    /// 数値は前後の空白を許容する。テキストはそのまま保持する
    pub fn coerce_field(
        raw: &str,
        column: &ColumnDef,
        table: &str,
        line: u64,
    ) -> Result<CellValue, LoadError> {
        if raw.is_empty() {
            return Ok(CellValue::Null);
        }

        let invalid = || LoadError::InvalidValue {
            table: table.to_string(),
            line,
            column: column.name.clone(),
            column_type: column.column_type,
            value: raw.to_string(),
        };

        match column.column_type {
            ColumnType::Text => Ok(CellValue::Text(raw.to_string())),
            ColumnType::Integer => raw
                .trim()
                .parse::<i32>()
                .map(CellValue::Integer)
                .map_err(|_| invalid()),
            ColumnType::Float => raw
                .trim()
                .parse::<f64>()
                .map(CellValue::Float)
                .map_err(|_| invalid()),
        }
    }
}
