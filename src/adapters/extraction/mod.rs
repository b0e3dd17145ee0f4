//! Field extraction adapters.

mod mock_extractor;

pub use mock_extractor::MockFieldExtractor;
