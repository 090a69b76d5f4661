//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the source-transformation pipeline.
///
/// All variants are fatal: the artifact is written only after every stage
/// has succeeded, so no partial output ever hits the disk.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("import target `{path}` does not exist or cannot be read")]
    ImportNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find a `/** ... */` metadata comment in the entry file")]
    MetadataMissing,

    #[error("missing metadata key `@{0}`")]
    MissingMetadataKey(String),
}
