//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::upper_case_acronyms)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod model;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{MediaConvertError, MediaConvertErrorCode};
pub use model::SERVICE_MODEL;
pub use operations::MediaConvertOperation;

// Generated: 25 operations, 219 enums, 100 shared structs, 25 input structs, 25 output structs, 6 error structs
