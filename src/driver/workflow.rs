//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::csv_record_sink::CsvRecordSink;
use crate::adapter::repositories::csv_record_source::CsvRecordSource;
use crate::adapter::repositories::memory_table_repository::MemoryTableRepository;
use crate::adapter::repositories::postgres_table_repository::PostgresTableRepository;
use crate::application::dto::load_config::LoadConfig;
use crate::application::use_cases::create_schema::CreateSchemaUseCase;
use crate::application::use_cases::export_records::ExportRecordsUseCase;
use crate::application::use_cases::import_records::{ImportRecordsUseCase, ImportSummary};
use crate::domain::entities::table_schema::TableSchema;
use crate::domain::repositories::table_repository::TableRepository;
use crate::domain::services::sdg_catalog::SdgCatalog;

use super::cli::{Args, Command};

/// 引数に応じてリポジトリを選び、ワークフローを実行する
///
/// `--dry-run` ではPostgreSQLに接続せず、メモリ上のテーブルに対して同じ処理を行う
pub async fn run(config: Config, args: Args) -> Result<()> {
    if args.dry_run {
        if let Command::Export { .. } = args.command() {
            anyhow::bail!("--dry-run cannot be combined with export");
        }
        println!("✓ Dry-run mode (loading into an in-memory table)");
        let workflow = LoadWorkflow::new(config, Arc::new(MemoryTableRepository::new()));
        return workflow.execute(&args).await;
    }

    let repository = PostgresTableRepository::connect(&config.connection).await?;
    println!(
        "✓ Connected to {}:{}/{}",
        config.connection.host, config.connection.port, config.connection.database
    );
    let workflow = LoadWorkflow::new(config, Arc::new(repository));
    workflow.execute(&args).await
}

/// Load Workflow
pub struct LoadWorkflow<T: TableRepository> {
    config: Config,
    table_repository: Arc<T>,
    create_use_case: CreateSchemaUseCase<T>,
    import_use_case: ImportRecordsUseCase<CsvRecordSource, T>,
    export_use_case: ExportRecordsUseCase<T, CsvRecordSink>,
}

impl<T: TableRepository> LoadWorkflow<T> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config, table_repository: Arc<T>) -> Self {
        let source = Arc::new(CsvRecordSource::new());
        let sink = Arc::new(CsvRecordSink::new());

        let create_use_case = CreateSchemaUseCase::new(table_repository.clone());
        let import_use_case = ImportRecordsUseCase::new(source, table_repository.clone());
        let export_use_case = ExportRecordsUseCase::new(table_repository.clone(), sink);

        Self {
            config,
            table_repository,
            create_use_case,
            import_use_case,
            export_use_case,
        }
    }

    /// Execute the selected command
    pub async fn execute(&self, args: &Args) -> Result<()> {
        let schema = SdgCatalog::table_schema(&self.config.table)?;

        match args.command() {
            Command::Load => {
                let load_config = self.load_config(args);
                self.load(&schema, &load_config).await?;
            }
            Command::Export { output } => {
                self.export(&schema, &output).await?;
            }
        }

        Ok(())
    }

    /// `--source` があれば設定ファイルの値より優先する
    pub fn load_config(&self, args: &Args) -> LoadConfig {
        let mut load_config = self.config.to_load_config();
        if let Some(source) = &args.source {
            load_config.source_path = shellexpand::tilde(source).into_owned();
        }
        load_config
    }

    /// テーブル作成と一括投入を順に実行する
    ///
    /// 作成に失敗した場合、投入は行わない
    pub async fn load(&self, schema: &TableSchema, load_config: &LoadConfig) -> Result<ImportSummary> {
        info!("Starting SDG loader...");
        println!("✓ Using configuration:");
        println!("  Table: {}", schema.name());
        println!("  Source: {}", load_config.source_path);
        println!("  Batch size: {}", load_config.batch_size);

        self.create_use_case.execute(schema).await?;
        println!(
            "✓ Created table {} ({} columns)",
            schema.name(),
            schema.column_count()
        );

        let summary = self.import_use_case.execute(schema, load_config).await?;
        println!(
            "✓ Imported {} rows in {} batches ({} ms)",
            summary.rows_inserted,
            summary.batch_count,
            summary.elapsed_ms()
        );

        let total = self.table_repository.count_rows(schema.name()).await?;
        println!("✓ Load complete! {} now has {} rows", schema.name(), total);

        Ok(summary)
    }

    /// テーブルをCSVに書き出す
    pub async fn export(&self, schema: &TableSchema, output: &str) -> Result<usize> {
        let output = shellexpand::tilde(output).into_owned();
        let written = self.export_use_case.execute(schema, &output).await?;
        println!("✓ Exported {} rows to {}", written, output);
        Ok(written)
    }
}
