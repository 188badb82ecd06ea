//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

mod certificate;
mod endpoint;
mod job;
mod job_template;
mod preset;
mod queue;
mod tagging;

pub use certificate::*;
pub use endpoint::*;
pub use job::*;
pub use job_template::*;
pub use preset::*;
pub use queue::*;
pub use tagging::*;
