//! Resolution of raw caller input to dataset records.
//!
//! Input is trimmed and uppercased. Country codes are dispatched on length:
//! two letters go to the code2 index, three letters to the code3 index, and
//! anything else is rejected without touching the dataset. Currency codes are
//! looked up whole, including suffixed keys such as "MRU[12]".

mod resolver_model;
mod resolver_service;
mod resolver_traits;

pub use resolver_model::{InvalidInput, Resolution};
pub use resolver_service::Resolver;
pub use resolver_traits::FlagResolverTrait;
