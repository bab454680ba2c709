pub mod batcher;
pub mod error;
pub mod pipeline;
pub mod recorder;
pub mod submitter;

// Re-export commonly used types
pub use batcher::{Batch, partition};
pub use error::EngineError;
pub use pipeline::{RunOptions, RunSummary, run};
pub use recorder::stamp;
pub use submitter::{BatchOutcome, SubmissionReport, Submitter};
