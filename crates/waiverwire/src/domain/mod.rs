//! Domain Layer
//!
//! Plain types shared by the fetcher, the notifier and the pipeline.

pub mod digest;
pub mod errors;
pub mod profile;

pub use digest::{Digest, CITATION_RULE};
pub use errors::{ConfigError, DeliveryError, FetchError, PipelineError, Stage};
pub use profile::{SearchMode, SearchOptions, SearchProfile, SourceKind};
