//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

mod byte_match_set;
mod change_token;
mod geo_match_set;
mod ip_set;
mod logging;
mod permission_policy;
mod rate_based_rule;
mod regex_match_set;
mod regex_pattern_set;
mod rule;
mod rule_group;
mod sampled_request;
mod size_constraint_set;
mod sql_injection_match_set;
mod subscribed_rule_group;
mod web_acl;
mod xss_match_set;

pub use byte_match_set::*;
pub use change_token::*;
pub use geo_match_set::*;
pub use ip_set::*;
pub use logging::*;
pub use permission_policy::*;
pub use rate_based_rule::*;
pub use regex_match_set::*;
pub use regex_pattern_set::*;
pub use rule::*;
pub use rule_group::*;
pub use sampled_request::*;
pub use size_constraint_set::*;
pub use sql_injection_match_set::*;
pub use subscribed_rule_group::*;
pub use web_acl::*;
pub use xss_match_set::*;
