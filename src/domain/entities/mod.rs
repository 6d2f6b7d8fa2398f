//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **TableSchema**: ロード先テーブルの順序付きカラム定義
//! - **Record**: テーブルの1行
//! - **LoadBatch**: 複数行INSERT単位のバリューオブジェクト

pub mod load_batch;
pub mod record;
pub mod table_schema;
