//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod coercion;
pub mod sdg_catalog;
