//! SQL Statement Builders
//!
//! スキーマからDDL/DMLを組み立てる

use crate::domain::entities::table_schema::{ColumnType, TableSchema};

/// 1ステートメントあたりのバインドパラメータ上限（PostgreSQLのプロトコル制限）
pub const MAX_BIND_PARAMETERS: usize = 65535;

/// 識別子をダブルクォートで囲む
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn sql_type(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Text => "TEXT",
        ColumnType::Integer => "INTEGER",
        ColumnType::Float => "FLOAT",
    }
}

/// `CREATE TABLE`（制約・インデックスなし）
pub fn create_table(schema: &TableSchema) -> String {
    let columns = schema
        .columns()
        .iter()
        .map(|c| format!("{} {}", quote_identifier(&c.name), sql_type(c.column_type)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "CREATE TABLE {} ({})",
        quote_identifier(schema.name()),
        columns
    )
}

fn column_list(schema: &TableSchema) -> String {
    schema
        .column_names()
        .map(quote_identifier)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 複数行 `INSERT`
///
/// パラメータは行優先で `$1` から連番
pub fn insert_rows(schema: &TableSchema, row_count: usize) -> String {
    let width = schema.column_count();
    let mut sql = format!(
        "INSERT INTO {} ({}) VALUES ",
        quote_identifier(schema.name()),
        column_list(schema)
    );

    let rows = (0..row_count)
        .map(|row| {
            let placeholders = (1..=width)
                .map(|col| format!("${}", row * width + col))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({})", placeholders)
        })
        .collect::<Vec<_>>()
        .join(", ");
    sql.push_str(&rows);

    sql
}

pub fn select_all(schema: &TableSchema) -> String {
    format!(
        "SELECT {} FROM {}",
        column_list(schema),
        quote_identifier(schema.name())
    )
}

/// テーブルの存在確認用（行は返さない）
pub fn probe_table(schema: &TableSchema) -> String {
    format!("SELECT 1 FROM {} LIMIT 0", quote_identifier(schema.name()))
}

pub fn count_rows(table: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", quote_identifier(table))
}

/// パラメータ上限を超えない1ステートメントあたりの最大行数
pub fn max_rows_per_statement(column_count: usize) -> usize {
    (MAX_BIND_PARAMETERS / column_count.max(1)).max(1)
}
