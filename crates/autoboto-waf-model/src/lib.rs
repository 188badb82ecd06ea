//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.
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

pub use error::{WafError, WafErrorCode};
pub use model::SERVICE_MODEL;
pub use operations::WafOperation;

// Generated: 73 operations, 14 enums, 53 shared structs, 73 input structs, 73 output structs, 14 error structs
