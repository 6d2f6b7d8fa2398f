//! CSV Record Sink Implementation
//!
//! RecordSinkのCSVファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::Writer;
use std::io::Write;

use crate::domain::entities::record::{CellValue, Record};
use crate::domain::entities::table_schema::TableSchema;
use crate::domain::repositories::record_sink::RecordSink;

/// CSVファイルベースのレコードシンク
pub struct CsvRecordSink;

impl CsvRecordSink {
    pub fn new() -> Self {
        Self
    }

    /// NULLは空フィールド、浮動小数点は往復可能な最短表記
    fn format_cell(value: &CellValue) -> String {
        match value {
            CellValue::Null => String::new(),
            CellValue::Text(v) => v.clone(),
            CellValue::Integer(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
        }
    }

    fn write_to<W: Write>(writer: W, schema: &TableSchema, records: &[Record]) -> Result<usize> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(schema.column_names())?;
        for record in records {
            writer.write_record(record.values().iter().map(Self::format_cell))?;
        }
        writer.flush()?;
        Ok(records.len())
    }

    fn write_records_sync(path: &str, schema: &TableSchema, records: &[Record]) -> Result<usize> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("could not open file \"{}\" for writing", path))?;
        Self::write_to(file, schema, records)
    }
}

#[async_trait]
impl RecordSink for CsvRecordSink {
    async fn write_records(
        &self,
        path: &str,
        schema: &TableSchema,
        records: &[Record],
    ) -> Result<usize> {
        let path = path.to_string();
        let schema = schema.clone();
        let records = records.to_vec();
        tokio::task::spawn_blocking(move || Self::write_records_sync(&path, &schema, &records))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for CsvRecordSink {
    fn default() -> Self {
        Self::new()
    }
}
