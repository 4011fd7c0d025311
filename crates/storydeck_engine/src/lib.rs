//! Storydeck engine: search request execution and wire decoding.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_results, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{Fetcher, ReqwestFetcher, SearchSettings};
pub use types::{EngineEvent, FailureKind, Generation, SearchError, SearchHit, SearchResults};
