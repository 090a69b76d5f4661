//! The source-transformation pipeline.
//!
//! Stages run strictly in sequence, each consuming the previous stage's
//! text output:
//!
//! 1. [`import::inline`] - inline `@import url("...");` directives
//! 2. [`metadata::extract`] - doc comment span + `@key value` annotations
//! 3. [`minify::minify`] - whitespace/comment stripping (themes only)
//! 4. [`name::resolve_name`] - output filename from a template
//!
//! Every stage is a pure function over text. File discovery, artifact
//! writing and logging live in the CLI shell, which keeps the stages
//! independently testable.

pub mod error;
pub mod import;
pub mod metadata;
pub mod minify;
pub mod name;

pub use error::PipelineError;
pub use metadata::Metadata;
