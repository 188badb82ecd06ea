//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{EnumDescriptor, Protocol, ServiceModel, ShapeDescriptor, ShapeKind};

use crate::operations::OPERATIONS;
use crate::{error, input, output, types};

/// Static description of the AWS WAF model.
pub static SERVICE_MODEL: ServiceModel = ServiceModel {
    name: "waf",
    title: "AWS WAF",
    api_version: "2015-08-24",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("AWSWAF_20150824"),
    shapes: &[
        ShapeDescriptor::of::<types::ActivatedRule>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ByteMatchSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ByteMatchSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ByteMatchSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ByteMatchTuple>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ExcludedRule>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::FieldToMatch>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::GeoMatchConstraint>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::GeoMatchSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::GeoMatchSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::GeoMatchSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::HTTPHeader>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::HTTPRequest>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::IPSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::IPSetDescriptor>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::IPSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::IPSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::LoggingConfiguration>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Predicate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RateBasedRule>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexMatchSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexMatchSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexMatchSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexMatchTuple>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexPatternSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexPatternSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RegexPatternSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Rule>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RuleGroup>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RuleGroupSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RuleGroupUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RuleSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RuleUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SampledHTTPRequest>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SizeConstraint>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SizeConstraintSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SizeConstraintSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SizeConstraintSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SqlInjectionMatchSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SqlInjectionMatchSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SqlInjectionMatchSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SqlInjectionMatchTuple>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SubscribedRuleGroupSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TimeWindow>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::WafAction>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::WafOverrideAction>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::WebACL>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::WebACLSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::WebACLUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::XssMatchSet>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::XssMatchSetSummary>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::XssMatchSetUpdate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::XssMatchTuple>(ShapeKind::Structure),
        ShapeDescriptor::of::<input::CreateByteMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateGeoMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateIPSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateRateBasedRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateRegexMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateRegexPatternSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateRuleGroupInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateSizeConstraintSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateSqlInjectionMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateWebACLInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateXssMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteByteMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteGeoMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteIPSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteLoggingConfigurationInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeletePermissionPolicyInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteRateBasedRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteRegexMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteRegexPatternSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteRuleGroupInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteSizeConstraintSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteSqlInjectionMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteWebACLInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteXssMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetByteMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetChangeTokenInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetChangeTokenStatusInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetGeoMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetIPSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetLoggingConfigurationInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetPermissionPolicyInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetRateBasedRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetRateBasedRuleManagedKeysInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetRegexMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetRegexPatternSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetRuleGroupInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetSampledRequestsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetSizeConstraintSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetSqlInjectionMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetWebACLInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetXssMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListActivatedRulesInRuleGroupInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListByteMatchSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListGeoMatchSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListIPSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListLoggingConfigurationsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListRateBasedRulesInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListRegexMatchSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListRegexPatternSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListRuleGroupsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListRulesInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListSizeConstraintSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListSqlInjectionMatchSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListSubscribedRuleGroupsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListWebACLsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListXssMatchSetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::PutLoggingConfigurationInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::PutPermissionPolicyInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateByteMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateGeoMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateIPSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateRateBasedRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateRegexMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateRegexPatternSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateRuleGroupInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateRuleInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateSizeConstraintSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateSqlInjectionMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateWebACLInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateXssMatchSetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<output::CreateByteMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateGeoMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateIPSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateRateBasedRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateRegexMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateRegexPatternSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateRuleGroupOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateSizeConstraintSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateSqlInjectionMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateWebACLOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateXssMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteByteMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteGeoMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteIPSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteLoggingConfigurationOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeletePermissionPolicyOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteRateBasedRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteRegexMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteRegexPatternSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteRuleGroupOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteSizeConstraintSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteSqlInjectionMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteWebACLOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteXssMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetByteMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetChangeTokenOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetChangeTokenStatusOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetGeoMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetIPSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetLoggingConfigurationOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetPermissionPolicyOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetRateBasedRuleManagedKeysOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetRateBasedRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetRegexMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetRegexPatternSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetRuleGroupOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetSampledRequestsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetSizeConstraintSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetSqlInjectionMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetWebACLOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetXssMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListActivatedRulesInRuleGroupOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListByteMatchSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListGeoMatchSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListIPSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListLoggingConfigurationsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListRateBasedRulesOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListRegexMatchSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListRegexPatternSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListRuleGroupsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListRulesOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListSizeConstraintSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListSqlInjectionMatchSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListSubscribedRuleGroupsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListWebACLsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListXssMatchSetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::PutLoggingConfigurationOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::PutPermissionPolicyOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateByteMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateGeoMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateIPSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateRateBasedRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateRegexMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateRegexPatternSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateRuleGroupOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateRuleOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateSizeConstraintSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateSqlInjectionMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateWebACLOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateXssMatchSetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<error::WAFDisallowedNameException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFInternalErrorException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFInvalidAccountException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFInvalidOperationException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFInvalidParameterException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFInvalidPermissionPolicyException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFInvalidRegexPatternException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFLimitsExceededException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFNonEmptyEntityException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFNonexistentContainerException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFNonexistentItemException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFReferencedItemException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFStaleDataException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::WAFSubscriptionNotFoundException>(ShapeKind::Error),
    ],
    enums: &[
        EnumDescriptor::of::<types::ChangeAction>(),
        EnumDescriptor::of::<types::ChangeTokenStatus>(),
        EnumDescriptor::of::<types::ComparisonOperator>(),
        EnumDescriptor::of::<types::GeoMatchConstraintType>(),
        EnumDescriptor::of::<types::GeoMatchConstraintValue>(),
        EnumDescriptor::of::<types::IPSetDescriptorType>(),
        EnumDescriptor::of::<types::MatchFieldType>(),
        EnumDescriptor::of::<types::PositionalConstraint>(),
        EnumDescriptor::of::<types::PredicateType>(),
        EnumDescriptor::of::<types::RateKey>(),
        EnumDescriptor::of::<types::TextTransformation>(),
        EnumDescriptor::of::<types::WafActionType>(),
        EnumDescriptor::of::<types::WafOverrideActionType>(),
        EnumDescriptor::of::<types::WafRuleType>(),
    ],
    operations: &OPERATIONS,
};
