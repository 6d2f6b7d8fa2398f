//! # SDG Catalog
//!
//! Global Data on Sustainable Energy データセット用の固定スキーマ

use crate::domain::entities::table_schema::{ColumnDef, ColumnType, TableSchema};
use crate::domain::errors::LoadError;

/// デフォルトのテーブル名
pub const DEFAULT_TABLE_NAME: &str = "table_sdg";

/// カラム定義（CSVヘッダーと同じ順序）
///
/// `density_n` は元データのヘッダーに改行が含まれる列で、値に桁区切りのカンマが
/// 入ることがあるためテキストとして保持する。
pub const SDG_COLUMNS: &[(&str, ColumnType)] = &[
    ("entity", ColumnType::Text),
    ("year", ColumnType::Integer),
    ("access_to_electricity", ColumnType::Float),
    ("access_to_clean_fuels_for_cooking", ColumnType::Float),
    (
        "renewable_electricity_generating_capacity_per_capita",
        ColumnType::Float,
    ),
    ("financial_flows_to_developing_countries", ColumnType::Float),
    (
        "renewable_energy_share_in_the_total_final_energy_consumption",
        ColumnType::Float,
    ),
    ("electricity_from_fossil_fuels", ColumnType::Float),
    ("electricity_from_nuclear", ColumnType::Float),
    ("electricity_from_renewables", ColumnType::Float),
    ("low_carbon_electricity", ColumnType::Float),
    ("primary_energy_consumption_per_capita", ColumnType::Float),
    ("energy_intensity_level_of_primary_energy", ColumnType::Float),
    ("value_co2_emissions_kt_by_country", ColumnType::Float),
    ("renewables", ColumnType::Float),
    ("gdp_growth", ColumnType::Float),
    ("gdp_per_capita", ColumnType::Float),
    ("density_n", ColumnType::Text),
    ("land_area", ColumnType::Float),
    ("latitude", ColumnType::Float),
    ("longitude", ColumnType::Float),
];

/// SDGカタログ
pub struct SdgCatalog;

impl SdgCatalog {
    /// 指定したテーブル名でSDGスキーマを作成
    ///
    /// # Errors
    ///
    /// テーブル名が空の場合
    pub fn table_schema(table_name: &str) -> Result<TableSchema, LoadError> {
        let columns = SDG_COLUMNS
            .iter()
            .map(|(name, column_type)| ColumnDef::new(*name, *column_type))
            .collect();
        TableSchema::new(table_name, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdg_schema_shape() {
        let schema = SdgCatalog::table_schema(DEFAULT_TABLE_NAME).unwrap();

        assert_eq!(schema.name(), "table_sdg");
        assert_eq!(schema.column_count(), 21);
        assert_eq!(schema.columns()[0], ColumnDef::new("entity", ColumnType::Text));
        assert_eq!(schema.columns()[1], ColumnDef::new("year", ColumnType::Integer));
        assert_eq!(
            schema.columns()[20],
            ColumnDef::new("longitude", ColumnType::Float)
        );
    }

    #[test]
    fn test_sdg_schema_type_counts() {
        let schema = SdgCatalog::table_schema(DEFAULT_TABLE_NAME).unwrap();
        let count = |t: ColumnType| schema.columns().iter().filter(|c| c.column_type == t).count();

        assert_eq!(count(ColumnType::Text), 2);
        assert_eq!(count(ColumnType::Integer), 1);
        assert_eq!(count(ColumnType::Float), 18);
    }

    #[test]
    fn test_density_is_text() {
        let schema = SdgCatalog::table_schema(DEFAULT_TABLE_NAME).unwrap();
        let density = schema
            .columns()
            .iter()
            .find(|c| c.name == "density_n")
            .unwrap();
        assert_eq!(density.column_type, ColumnType::Text);
    }

    #[test]
    fn test_column_names_are_unique() {
        let mut names: Vec<&str> = SDG_COLUMNS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SDG_COLUMNS.len());
    }

    #[test]
    fn test_custom_table_name() {
        let schema = SdgCatalog::table_schema("sdg_staging").unwrap();
        assert_eq!(schema.name(), "sdg_staging");
        assert!(SdgCatalog::table_schema("").is_err());
    }
}
