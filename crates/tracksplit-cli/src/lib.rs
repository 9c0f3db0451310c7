//! Track splitting CLI: argument surface, per-file pipeline, and batch
//! orchestration on top of the `tracksplit-media` collaborators.

pub mod args;
pub mod batch;
pub mod error;
pub mod pipeline;

pub use args::Args;
pub use batch::{run_batch, BatchSummary};
pub use error::{SplitError, SplitResult};
pub use pipeline::{process_file, RunOptions, TrackDescriptor};
