//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod convert;
pub mod error;
pub mod log;
pub mod provider;
pub mod rates;

// Re-export main types for cleaner imports
pub use cache::{CacheError, RateCache};
pub use error::{FetchError, RateError};
pub use provider::{ProviderSettings, RateProvider};
pub use rates::{ConversionRequest, RateSnapshot, RateSource};
