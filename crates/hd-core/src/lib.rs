//! # hd-core
//!
//! Core types, static catalogs, and the bundled happiness dataset for HappyData.
//!
//! This crate provides the foundational types shared across all HappyData crates:
//! - Entity structs mirroring the World Bank directory and data point records
//! - The predefined indicator and region catalog
//! - The bundled secondary (happiness score) dataset
//! - Request sequence tokens for discarding superseded view fetches
//! - Cross-cutting error types

pub mod catalog;
pub mod dataset;
pub mod entities;
pub mod errors;
pub mod sequence;

pub use catalog::Catalog;
pub use dataset::SecondaryDataset;
pub use entities::{Country, Group, GroupRef, Indicator, Observation, ScorePoint};
pub use errors::CoreError;
pub use sequence::{RequestSequence, RequestToken};
