//! # Domain Layer
//!
//! このモジュールはローダーの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - データベースやファイル形式について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティ（TableSchema, Record, LoadBatch）
//! - **errors**: ローダーが検出するエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（型変換、SDGカタログ）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
