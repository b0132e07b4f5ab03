//! Reference dataset: the country and currency tables and their indexes.

mod dataset_errors;
mod dataset_model;
mod dataset_registry;

pub use dataset_errors::DatasetError;
pub use dataset_model::{CountryRecord, CurrencyRecord, DatasetCatalog};
pub use dataset_registry::ReferenceDataset;
