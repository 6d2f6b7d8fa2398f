//! # Data Transfer Objects

pub mod load_config;
