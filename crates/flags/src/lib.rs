//! Flag lookup core.
//!
//! This crate resolves a caller-supplied identifier (a 2- or 3-letter country
//! code, or a currency code) to an immutable record describing a flag asset and
//! its display metadata.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +--------------------+
//! |   raw string     | --> |     Resolver       |  (trim, uppercase, dispatch)
//! +------------------+     +--------------------+
//!                                   |
//!                                   v
//!                          +--------------------+
//!                          |  ReferenceDataset  |  (code2 / code3 / currency indexes)
//!                          +--------------------+
//!                                   |
//!                                   v
//!                    Found(record) | NotFound(input) | InvalidInput
//! ```
//!
//! # Core Types
//!
//! - [`ReferenceDataset`] - Immutable country/currency tables and their indexes
//! - [`Resolver`] - Stateless lookup over a shared dataset
//! - [`Resolution`] - Tagged lookup outcome
//! - [`CountryRecord`] / [`CurrencyRecord`] - Dataset records
//!
//! # Example
//!
//! ```
//! use flagcc_core::{Resolution, Resolver};
//!
//! let resolver = Resolver::embedded();
//! match resolver.resolve_country("ch") {
//!     Resolution::Found(country) => assert_eq!(country.name, "Switzerland"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod constants;
pub mod dataset;
pub mod errors;
pub mod resolver;

pub use dataset::{CountryRecord, CurrencyRecord, DatasetError, ReferenceDataset};
pub use errors::{Error, Result};
pub use resolver::{FlagResolverTrait, InvalidInput, Resolution, Resolver};
