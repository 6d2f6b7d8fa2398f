//! Loader Integration Tests
//!
//! テーブル作成と一括投入をメモリリポジトリに対して検証する

use std::fs;
use std::path::Path;
use std::sync::Arc;

use sdg_loader::adapter::repositories::csv_record_source::CsvRecordSource;
use sdg_loader::adapter::repositories::memory_table_repository::MemoryTableRepository;
use sdg_loader::application::dto::load_config::LoadConfig;
use sdg_loader::application::use_cases::create_schema::CreateSchemaUseCase;
use sdg_loader::application::use_cases::import_records::ImportRecordsUseCase;
use sdg_loader::domain::entities::record::CellValue;
use sdg_loader::domain::entities::table_schema::{ColumnDef, ColumnType, TableSchema};
use sdg_loader::domain::errors::LoadError;
use sdg_loader::domain::repositories::table_repository::TableRepository;
use sdg_loader::domain::services::sdg_catalog::{SdgCatalog, SDG_COLUMNS};
use tempfile::TempDir;

struct Loader {
    repo: Arc<MemoryTableRepository>,
    create: CreateSchemaUseCase<MemoryTableRepository>,
    import: ImportRecordsUseCase<CsvRecordSource, MemoryTableRepository>,
}

impl Loader {
    fn new() -> Self {
        let repo = Arc::new(MemoryTableRepository::new());
        Self {
            create: CreateSchemaUseCase::new(repo.clone()),
            import: ImportRecordsUseCase::new(Arc::new(CsvRecordSource::new()), repo.clone()),
            repo,
        }
    }
}

fn write_csv(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

fn load_config(schema: &TableSchema, path: &str, batch_size: usize) -> LoadConfig {
    LoadConfig::new(schema.name().to_string(), path.to_string(), batch_size)
}

fn two_column_schema() -> TableSchema {
    TableSchema::new(
        "t",
        vec![
            ColumnDef::new("name", ColumnType::Text),
            ColumnDef::new("year", ColumnType::Integer),
        ],
    )
    .unwrap()
}

fn fixture_path() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_sdg.csv")
        .to_string_lossy()
        .to_string()
}

#[tokio::test]
async fn test_schema_shape_after_create() {
    let loader = Loader::new();
    let schema = SdgCatalog::table_schema("table_sdg").unwrap();

    loader.create.execute(&schema).await.unwrap();

    let created = loader.repo.table_schema("table_sdg").unwrap();
    let columns: Vec<(&str, ColumnType)> = created
        .columns()
        .iter()
        .map(|c| (c.name.as_str(), c.column_type))
        .collect();
    assert_eq!(columns, SDG_COLUMNS.to_vec());
}

#[tokio::test]
async fn test_create_twice_fails_with_conflict() {
    let loader = Loader::new();
    let schema = SdgCatalog::table_schema("table_sdg").unwrap();

    loader.create.execute(&schema).await.unwrap();
    let err = loader.create.execute(&schema).await.unwrap_err();

    assert_eq!(err.to_string(), "relation \"table_sdg\" already exists");
}

#[tokio::test]
async fn test_row_count_matches_data_lines() {
    let loader = Loader::new();
    let schema = SdgCatalog::table_schema("table_sdg").unwrap();
    loader.create.execute(&schema).await.unwrap();

    let summary = loader
        .import
        .execute(&schema, &load_config(&schema, &fixture_path(), 2))
        .await
        .unwrap();

    assert_eq!(summary.rows_inserted, 5);
    assert_eq!(summary.batch_count, 3);
    assert_eq!(loader.repo.count_rows("table_sdg").await.unwrap(), 5);
}

#[tokio::test]
async fn test_short_last_line_leaves_table_empty() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = two_column_schema();
    loader.create.execute(&schema).await.unwrap();

    let path = write_csv(dir.path(), "bad.csv", "A,1\nfoo,2023\nbar,2024\nbaz\n");
    let err = loader
        .import
        .execute(&schema, &load_config(&schema, &path, 1))
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<LoadError>(),
        Some(&LoadError::MissingData {
            table: "t".to_string(),
            line: 4,
            column: "year".to_string(),
        })
    );
    assert_eq!(loader.repo.count_rows("t").await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_line_in_body_leaves_table_empty() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = two_column_schema();
    loader.create.execute(&schema).await.unwrap();

    let path = write_csv(dir.path(), "blank.csv", "A,1\nfoo,2023\n\nbar,2024\n");
    let err = loader
        .import
        .execute(&schema, &load_config(&schema, &path, 500))
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<LoadError>(),
        Some(&LoadError::MissingData {
            table: "t".to_string(),
            line: 3,
            column: "year".to_string(),
        })
    );
    assert_eq!(loader.repo.count_rows("t").await.unwrap(), 0);
}

#[tokio::test]
async fn test_trailing_newline_counts_no_extra_row() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = two_column_schema();
    loader.create.execute(&schema).await.unwrap();

    let path = write_csv(dir.path(), "nl.csv", "A,1\nfoo,2023\nbar,2024\n");
    let summary = loader
        .import
        .execute(&schema, &load_config(&schema, &path, 500))
        .await
        .unwrap();

    assert_eq!(summary.rows_inserted, 2);
}

#[tokio::test]
async fn test_positional_mapping() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = two_column_schema();
    loader.create.execute(&schema).await.unwrap();

    let path = write_csv(dir.path(), "min.csv", "A,1\nfoo,2023");
    loader
        .import
        .execute(&schema, &load_config(&schema, &path, 500))
        .await
        .unwrap();

    let rows = loader.repo.fetch_all(&schema).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(0), Some(&CellValue::Text("foo".to_string())));
    assert_eq!(rows[0].get(1), Some(&CellValue::Integer(2023)));
}

#[tokio::test]
async fn test_decimal_is_stored_as_float() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = TableSchema::new("f", vec![ColumnDef::new("v", ColumnType::Float)]).unwrap();
    loader.create.execute(&schema).await.unwrap();

    let path = write_csv(dir.path(), "f.csv", "value\n3.25\n-0.001\n");
    loader
        .import
        .execute(&schema, &load_config(&schema, &path, 500))
        .await
        .unwrap();

    let rows = loader.repo.fetch_all(&schema).await.unwrap();
    assert_eq!(rows[0].get(0).and_then(CellValue::as_float), Some(3.25));
    assert_eq!(rows[1].get(0).and_then(CellValue::as_float), Some(-0.001));
}

#[tokio::test]
async fn test_empty_fields_load_as_null() {
    let loader = Loader::new();
    let schema = SdgCatalog::table_schema("table_sdg").unwrap();
    loader.create.execute(&schema).await.unwrap();

    loader
        .import
        .execute(&schema, &load_config(&schema, &fixture_path(), 500))
        .await
        .unwrap();

    let rows = loader.repo.fetch_all(&schema).await.unwrap();
    // Afghanistan 2000: renewables, gdp_growth, gdp_per_capita are empty
    assert!(rows[0].get(14).unwrap().is_null());
    assert!(rows[0].get(15).unwrap().is_null());
    assert!(rows[0].get(16).unwrap().is_null());
    // density is kept as text, including the thousands separator
    assert_eq!(rows[4].get(17).and_then(CellValue::as_text), Some("1,265"));
}

#[tokio::test]
async fn test_header_mismatch_inserts_nothing() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = two_column_schema();
    loader.create.execute(&schema).await.unwrap();

    let path = write_csv(dir.path(), "wide.csv", "A,B,C\nfoo,2023,x\n");
    let err = loader
        .import
        .execute(&schema, &load_config(&schema, &path, 500))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::HeaderMismatch { .. })
    ));
    assert_eq!(loader.repo.count_rows("t").await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_file_inserts_nothing() {
    let loader = Loader::new();
    let schema = two_column_schema();
    loader.create.execute(&schema).await.unwrap();

    let result = loader
        .import
        .execute(&schema, &load_config(&schema, "/nonexistent/data.csv", 500))
        .await;

    assert!(result.is_err());
    assert_eq!(loader.repo.count_rows("t").await.unwrap(), 0);
}

#[tokio::test]
async fn test_import_without_table_fails() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new();
    let schema = two_column_schema();

    let path = write_csv(dir.path(), "min.csv", "A,1\nfoo,2023\n");
    let err = loader
        .import
        .execute(&schema, &load_config(&schema, &path, 500))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "relation \"t\" does not exist");
}
