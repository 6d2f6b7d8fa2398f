//! # Load Errors
//!
//! ローダー自身が検出するエラー
//!
//! メッセージはPostgreSQLの `COPY` が返すものに揃えている。
//! データベース側のエラーはこの型に包まずにそのまま伝播する。

use thiserror::Error;

use super::entities::table_schema::ColumnType;

#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("invalid identifier: \"{0}\"")]
    InvalidIdentifier(String),

    #[error("table \"{0}\" must have at least one column")]
    EmptySchema(String),

    #[error("COPY {table}, line 1: missing header line")]
    MissingHeader { table: String },

    #[error("COPY {table}, line 1: header has {found} columns, expected {expected}")]
    HeaderMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    #[error("COPY {table}, line {line}: missing data for column \"{column}\"")]
    MissingData {
        table: String,
        line: u64,
        column: String,
    },

    #[error("COPY {table}, line {line}: extra data after last expected column")]
    ExtraData { table: String, line: u64 },

    #[error(
        "COPY {table}, line {line}, column {column}: invalid input syntax for type {column_type}: \"{value}\""
    )]
    InvalidValue {
        table: String,
        line: u64,
        column: String,
        column_type: ColumnType,
        value: String,
    },

    #[error("expected to insert {expected} rows into \"{table}\" but the database reported {actual}")]
    RowCountMismatch {
        table: String,
        expected: u64,
        actual: u64,
    },
}
