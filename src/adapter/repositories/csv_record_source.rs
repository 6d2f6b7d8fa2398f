//! CSV Record Source Implementation
//!
//! RecordSourceのCSVファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::{Position, ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs;

use crate::domain::entities::record::Record;
use crate::domain::entities::table_schema::TableSchema;
use crate::domain::repositories::record_source::RecordSource;
use crate::domain::services::coercion::CoercionService;

/// CSVファイルベースのレコードソース
///
/// カンマ区切り、UTF-8、先頭行はヘッダー。ヘッダーはカラム数の照合にのみ使う
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRecordSource;

/// 読み込み位置の直前にある空行
struct BlankLines {
    /// 空行の行番号
    lines: Vec<u64>,
    /// 空行の次の行（レコードが始まる行）
    next_line: u64,
}

impl CsvRecordSource {
    /// 新しいソースを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルを読み込んでレコードに変換する（同期処理）
    pub fn read_records_sync(&self, path: &str, schema: &TableSchema) -> Result<Vec<Record>> {
        let data = fs::read(path)
            .with_context(|| format!("could not open file \"{}\" for reading", path))?;
        self.read_from(&data, schema)
    }

    /// 1行ずつ読みながら検査・変換する
    ///
    /// 最初のエラーで中断し、それまでの結果は捨てる
    fn read_from(&self, data: &[u8], schema: &TableSchema) -> Result<Vec<Record>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            // フィールド数の検査は自前で行う
            .flexible(true)
            .from_reader(data);

        let header_len = reader.headers()?.len();
        CoercionService::check_header(header_len, schema)?;

        let mut records = Vec::new();
        let mut raw = StringRecord::new();
        loop {
            let more = reader.read_record(&mut raw)?;

            // csvリーダーは空行を黙って読み飛ばす。
            // 空行は空フィールド1つの行として扱い、カラム数の検査にかける
            let next_line = match raw.position() {
                Some(position) => {
                    let blanks = Self::blank_lines_before(data, position);
                    for line in blanks.lines {
                        let record = CoercionService::coerce_record([""], schema, line)?;
                        records.push(record);
                    }
                    blanks.next_line
                }
                None => 0,
            };

            if !more {
                break;
            }
            let record = CoercionService::coerce_record(raw.iter(), schema, next_line)?;
            records.push(record);
        }

        debug!("Parsed {} data lines for {}", records.len(), schema.name());
        Ok(records)
    }

    /// `position` から続く空行を数える
    ///
    /// `position` は読み込み開始位置（前のレコードの行末の直後）
    fn blank_lines_before(data: &[u8], position: &Position) -> BlankLines {
        let mut offset = usize::try_from(position.byte()).unwrap_or(data.len());
        let mut line = position.line();

        // CRLFのLFがまだ消費されていない
        if offset > 0 && data.get(offset - 1) == Some(&b'\r') && data.get(offset) == Some(&b'\n')
        {
            offset += 1;
            line += 1;
        }

        let mut lines = Vec::new();
        while let Some(&byte) = data.get(offset) {
            match byte {
                b'\n' => offset += 1,
                b'\r' => {
                    offset += 1;
                    if data.get(offset) == Some(&b'\n') {
                        offset += 1;
                    }
                }
                _ => break,
            }
            lines.push(line);
            line += 1;
        }

        BlankLines {
            lines,
            next_line: line,
        }
    }
}

#[async_trait]
impl RecordSource for CsvRecordSource {
    async fn read_records(&self, path: &str, schema: &TableSchema) -> Result<Vec<Record>> {
        info!("Reading {}", path);
        let source = *self;
        let path = path.to_string();
        let schema = schema.clone();
        tokio::task::spawn_blocking(move || source.read_records_sync(&path, &schema))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
