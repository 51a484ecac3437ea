pub use error::{DataError, DataErrorKind, PropertiesError};
pub use provider::{DataLocale, DataProvider, Provider};

pub mod collections;
pub mod error;
pub mod logger;
pub mod normalizer;
pub mod properties;
pub mod provider;
pub mod segmenter;
pub mod text;

mod data;
