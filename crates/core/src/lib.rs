//! Domain logic for the worst-picture award interval service.
//!
//! Data flow: uploaded bytes -> [`movie_csv`] -> [`store::RecordStore`] ->
//! [`producers`] -> [`intervals`] -> [`intervals::SummarizedAwards`].
//! [`service::AnalysisService`] ties the stages together.

pub mod error;
pub mod intervals;
pub mod movie;
pub mod movie_csv;
pub mod producers;
pub mod service;
pub mod store;
pub mod types;
