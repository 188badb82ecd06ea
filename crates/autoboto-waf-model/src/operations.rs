//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::OperationDescriptor;

/// `X-Amz-Target` prefix of the service.
pub const TARGET_PREFIX: &str = "AWSWAF_20150824";

/// All supported AWS WAF operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WafOperation {
    /// The CreateByteMatchSet operation.
    CreateByteMatchSet,
    /// The CreateGeoMatchSet operation.
    CreateGeoMatchSet,
    /// The CreateIPSet operation.
    CreateIPSet,
    /// The CreateRateBasedRule operation.
    CreateRateBasedRule,
    /// The CreateRegexMatchSet operation.
    CreateRegexMatchSet,
    /// The CreateRegexPatternSet operation.
    CreateRegexPatternSet,
    /// The CreateRule operation.
    CreateRule,
    /// The CreateRuleGroup operation.
    CreateRuleGroup,
    /// The CreateSizeConstraintSet operation.
    CreateSizeConstraintSet,
    /// The CreateSqlInjectionMatchSet operation.
    CreateSqlInjectionMatchSet,
    /// The CreateWebACL operation.
    CreateWebACL,
    /// The CreateXssMatchSet operation.
    CreateXssMatchSet,
    /// The DeleteByteMatchSet operation.
    DeleteByteMatchSet,
    /// The DeleteGeoMatchSet operation.
    DeleteGeoMatchSet,
    /// The DeleteIPSet operation.
    DeleteIPSet,
    /// The DeleteLoggingConfiguration operation.
    DeleteLoggingConfiguration,
    /// The DeletePermissionPolicy operation.
    DeletePermissionPolicy,
    /// The DeleteRateBasedRule operation.
    DeleteRateBasedRule,
    /// The DeleteRegexMatchSet operation.
    DeleteRegexMatchSet,
    /// The DeleteRegexPatternSet operation.
    DeleteRegexPatternSet,
    /// The DeleteRule operation.
    DeleteRule,
    /// The DeleteRuleGroup operation.
    DeleteRuleGroup,
    /// The DeleteSizeConstraintSet operation.
    DeleteSizeConstraintSet,
    /// The DeleteSqlInjectionMatchSet operation.
    DeleteSqlInjectionMatchSet,
    /// The DeleteWebACL operation.
    DeleteWebACL,
    /// The DeleteXssMatchSet operation.
    DeleteXssMatchSet,
    /// The GetByteMatchSet operation.
    GetByteMatchSet,
    /// The GetChangeToken operation.
    GetChangeToken,
    /// The GetChangeTokenStatus operation.
    GetChangeTokenStatus,
    /// The GetGeoMatchSet operation.
    GetGeoMatchSet,
    /// The GetIPSet operation.
    GetIPSet,
    /// The GetLoggingConfiguration operation.
    GetLoggingConfiguration,
    /// The GetPermissionPolicy operation.
    GetPermissionPolicy,
    /// The GetRateBasedRule operation.
    GetRateBasedRule,
    /// The GetRateBasedRuleManagedKeys operation.
    GetRateBasedRuleManagedKeys,
    /// The GetRegexMatchSet operation.
    GetRegexMatchSet,
    /// The GetRegexPatternSet operation.
    GetRegexPatternSet,
    /// The GetRule operation.
    GetRule,
    /// The GetRuleGroup operation.
    GetRuleGroup,
    /// The GetSampledRequests operation.
    GetSampledRequests,
    /// The GetSizeConstraintSet operation.
    GetSizeConstraintSet,
    /// The GetSqlInjectionMatchSet operation.
    GetSqlInjectionMatchSet,
    /// The GetWebACL operation.
    GetWebACL,
    /// The GetXssMatchSet operation.
    GetXssMatchSet,
    /// The ListActivatedRulesInRuleGroup operation.
    ListActivatedRulesInRuleGroup,
    /// The ListByteMatchSets operation.
    ListByteMatchSets,
    /// The ListGeoMatchSets operation.
    ListGeoMatchSets,
    /// The ListIPSets operation.
    ListIPSets,
    /// The ListLoggingConfigurations operation.
    ListLoggingConfigurations,
    /// The ListRateBasedRules operation.
    ListRateBasedRules,
    /// The ListRegexMatchSets operation.
    ListRegexMatchSets,
    /// The ListRegexPatternSets operation.
    ListRegexPatternSets,
    /// The ListRuleGroups operation.
    ListRuleGroups,
    /// The ListRules operation.
    ListRules,
    /// The ListSizeConstraintSets operation.
    ListSizeConstraintSets,
    /// The ListSqlInjectionMatchSets operation.
    ListSqlInjectionMatchSets,
    /// The ListSubscribedRuleGroups operation.
    ListSubscribedRuleGroups,
    /// The ListWebACLs operation.
    ListWebACLs,
    /// The ListXssMatchSets operation.
    ListXssMatchSets,
    /// The PutLoggingConfiguration operation.
    PutLoggingConfiguration,
    /// The PutPermissionPolicy operation.
    PutPermissionPolicy,
    /// The UpdateByteMatchSet operation.
    UpdateByteMatchSet,
    /// The UpdateGeoMatchSet operation.
    UpdateGeoMatchSet,
    /// The UpdateIPSet operation.
    UpdateIPSet,
    /// The UpdateRateBasedRule operation.
    UpdateRateBasedRule,
    /// The UpdateRegexMatchSet operation.
    UpdateRegexMatchSet,
    /// The UpdateRegexPatternSet operation.
    UpdateRegexPatternSet,
    /// The UpdateRule operation.
    UpdateRule,
    /// The UpdateRuleGroup operation.
    UpdateRuleGroup,
    /// The UpdateSizeConstraintSet operation.
    UpdateSizeConstraintSet,
    /// The UpdateSqlInjectionMatchSet operation.
    UpdateSqlInjectionMatchSet,
    /// The UpdateWebACL operation.
    UpdateWebACL,
    /// The UpdateXssMatchSet operation.
    UpdateXssMatchSet,
}

impl WafOperation {
    /// Every operation, in name order.
    pub const ALL: &'static [Self] = &[
        Self::CreateByteMatchSet,
        Self::CreateGeoMatchSet,
        Self::CreateIPSet,
        Self::CreateRateBasedRule,
        Self::CreateRegexMatchSet,
        Self::CreateRegexPatternSet,
        Self::CreateRule,
        Self::CreateRuleGroup,
        Self::CreateSizeConstraintSet,
        Self::CreateSqlInjectionMatchSet,
        Self::CreateWebACL,
        Self::CreateXssMatchSet,
        Self::DeleteByteMatchSet,
        Self::DeleteGeoMatchSet,
        Self::DeleteIPSet,
        Self::DeleteLoggingConfiguration,
        Self::DeletePermissionPolicy,
        Self::DeleteRateBasedRule,
        Self::DeleteRegexMatchSet,
        Self::DeleteRegexPatternSet,
        Self::DeleteRule,
        Self::DeleteRuleGroup,
        Self::DeleteSizeConstraintSet,
        Self::DeleteSqlInjectionMatchSet,
        Self::DeleteWebACL,
        Self::DeleteXssMatchSet,
        Self::GetByteMatchSet,
        Self::GetChangeToken,
        Self::GetChangeTokenStatus,
        Self::GetGeoMatchSet,
        Self::GetIPSet,
        Self::GetLoggingConfiguration,
        Self::GetPermissionPolicy,
        Self::GetRateBasedRule,
        Self::GetRateBasedRuleManagedKeys,
        Self::GetRegexMatchSet,
        Self::GetRegexPatternSet,
        Self::GetRule,
        Self::GetRuleGroup,
        Self::GetSampledRequests,
        Self::GetSizeConstraintSet,
        Self::GetSqlInjectionMatchSet,
        Self::GetWebACL,
        Self::GetXssMatchSet,
        Self::ListActivatedRulesInRuleGroup,
        Self::ListByteMatchSets,
        Self::ListGeoMatchSets,
        Self::ListIPSets,
        Self::ListLoggingConfigurations,
        Self::ListRateBasedRules,
        Self::ListRegexMatchSets,
        Self::ListRegexPatternSets,
        Self::ListRuleGroups,
        Self::ListRules,
        Self::ListSizeConstraintSets,
        Self::ListSqlInjectionMatchSets,
        Self::ListSubscribedRuleGroups,
        Self::ListWebACLs,
        Self::ListXssMatchSets,
        Self::PutLoggingConfiguration,
        Self::PutPermissionPolicy,
        Self::UpdateByteMatchSet,
        Self::UpdateGeoMatchSet,
        Self::UpdateIPSet,
        Self::UpdateRateBasedRule,
        Self::UpdateRegexMatchSet,
        Self::UpdateRegexPatternSet,
        Self::UpdateRule,
        Self::UpdateRuleGroup,
        Self::UpdateSizeConstraintSet,
        Self::UpdateSqlInjectionMatchSet,
        Self::UpdateWebACL,
        Self::UpdateXssMatchSet,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateByteMatchSet => "CreateByteMatchSet",
            Self::CreateGeoMatchSet => "CreateGeoMatchSet",
            Self::CreateIPSet => "CreateIPSet",
            Self::CreateRateBasedRule => "CreateRateBasedRule",
            Self::CreateRegexMatchSet => "CreateRegexMatchSet",
            Self::CreateRegexPatternSet => "CreateRegexPatternSet",
            Self::CreateRule => "CreateRule",
            Self::CreateRuleGroup => "CreateRuleGroup",
            Self::CreateSizeConstraintSet => "CreateSizeConstraintSet",
            Self::CreateSqlInjectionMatchSet => "CreateSqlInjectionMatchSet",
            Self::CreateWebACL => "CreateWebACL",
            Self::CreateXssMatchSet => "CreateXssMatchSet",
            Self::DeleteByteMatchSet => "DeleteByteMatchSet",
            Self::DeleteGeoMatchSet => "DeleteGeoMatchSet",
            Self::DeleteIPSet => "DeleteIPSet",
            Self::DeleteLoggingConfiguration => "DeleteLoggingConfiguration",
            Self::DeletePermissionPolicy => "DeletePermissionPolicy",
            Self::DeleteRateBasedRule => "DeleteRateBasedRule",
            Self::DeleteRegexMatchSet => "DeleteRegexMatchSet",
            Self::DeleteRegexPatternSet => "DeleteRegexPatternSet",
            Self::DeleteRule => "DeleteRule",
            Self::DeleteRuleGroup => "DeleteRuleGroup",
            Self::DeleteSizeConstraintSet => "DeleteSizeConstraintSet",
            Self::DeleteSqlInjectionMatchSet => "DeleteSqlInjectionMatchSet",
            Self::DeleteWebACL => "DeleteWebACL",
            Self::DeleteXssMatchSet => "DeleteXssMatchSet",
            Self::GetByteMatchSet => "GetByteMatchSet",
            Self::GetChangeToken => "GetChangeToken",
            Self::GetChangeTokenStatus => "GetChangeTokenStatus",
            Self::GetGeoMatchSet => "GetGeoMatchSet",
            Self::GetIPSet => "GetIPSet",
            Self::GetLoggingConfiguration => "GetLoggingConfiguration",
            Self::GetPermissionPolicy => "GetPermissionPolicy",
            Self::GetRateBasedRule => "GetRateBasedRule",
            Self::GetRateBasedRuleManagedKeys => "GetRateBasedRuleManagedKeys",
            Self::GetRegexMatchSet => "GetRegexMatchSet",
            Self::GetRegexPatternSet => "GetRegexPatternSet",
            Self::GetRule => "GetRule",
            Self::GetRuleGroup => "GetRuleGroup",
            Self::GetSampledRequests => "GetSampledRequests",
            Self::GetSizeConstraintSet => "GetSizeConstraintSet",
            Self::GetSqlInjectionMatchSet => "GetSqlInjectionMatchSet",
            Self::GetWebACL => "GetWebACL",
            Self::GetXssMatchSet => "GetXssMatchSet",
            Self::ListActivatedRulesInRuleGroup => "ListActivatedRulesInRuleGroup",
            Self::ListByteMatchSets => "ListByteMatchSets",
            Self::ListGeoMatchSets => "ListGeoMatchSets",
            Self::ListIPSets => "ListIPSets",
            Self::ListLoggingConfigurations => "ListLoggingConfigurations",
            Self::ListRateBasedRules => "ListRateBasedRules",
            Self::ListRegexMatchSets => "ListRegexMatchSets",
            Self::ListRegexPatternSets => "ListRegexPatternSets",
            Self::ListRuleGroups => "ListRuleGroups",
            Self::ListRules => "ListRules",
            Self::ListSizeConstraintSets => "ListSizeConstraintSets",
            Self::ListSqlInjectionMatchSets => "ListSqlInjectionMatchSets",
            Self::ListSubscribedRuleGroups => "ListSubscribedRuleGroups",
            Self::ListWebACLs => "ListWebACLs",
            Self::ListXssMatchSets => "ListXssMatchSets",
            Self::PutLoggingConfiguration => "PutLoggingConfiguration",
            Self::PutPermissionPolicy => "PutPermissionPolicy",
            Self::UpdateByteMatchSet => "UpdateByteMatchSet",
            Self::UpdateGeoMatchSet => "UpdateGeoMatchSet",
            Self::UpdateIPSet => "UpdateIPSet",
            Self::UpdateRateBasedRule => "UpdateRateBasedRule",
            Self::UpdateRegexMatchSet => "UpdateRegexMatchSet",
            Self::UpdateRegexPatternSet => "UpdateRegexPatternSet",
            Self::UpdateRule => "UpdateRule",
            Self::UpdateRuleGroup => "UpdateRuleGroup",
            Self::UpdateSizeConstraintSet => "UpdateSizeConstraintSet",
            Self::UpdateSqlInjectionMatchSet => "UpdateSqlInjectionMatchSet",
            Self::UpdateWebACL => "UpdateWebACL",
            Self::UpdateXssMatchSet => "UpdateXssMatchSet",
        }
    }

    /// Parse an operation name string into a `WafOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateByteMatchSet" => Some(Self::CreateByteMatchSet),
            "CreateGeoMatchSet" => Some(Self::CreateGeoMatchSet),
            "CreateIPSet" => Some(Self::CreateIPSet),
            "CreateRateBasedRule" => Some(Self::CreateRateBasedRule),
            "CreateRegexMatchSet" => Some(Self::CreateRegexMatchSet),
            "CreateRegexPatternSet" => Some(Self::CreateRegexPatternSet),
            "CreateRule" => Some(Self::CreateRule),
            "CreateRuleGroup" => Some(Self::CreateRuleGroup),
            "CreateSizeConstraintSet" => Some(Self::CreateSizeConstraintSet),
            "CreateSqlInjectionMatchSet" => Some(Self::CreateSqlInjectionMatchSet),
            "CreateWebACL" => Some(Self::CreateWebACL),
            "CreateXssMatchSet" => Some(Self::CreateXssMatchSet),
            "DeleteByteMatchSet" => Some(Self::DeleteByteMatchSet),
            "DeleteGeoMatchSet" => Some(Self::DeleteGeoMatchSet),
            "DeleteIPSet" => Some(Self::DeleteIPSet),
            "DeleteLoggingConfiguration" => Some(Self::DeleteLoggingConfiguration),
            "DeletePermissionPolicy" => Some(Self::DeletePermissionPolicy),
            "DeleteRateBasedRule" => Some(Self::DeleteRateBasedRule),
            "DeleteRegexMatchSet" => Some(Self::DeleteRegexMatchSet),
            "DeleteRegexPatternSet" => Some(Self::DeleteRegexPatternSet),
            "DeleteRule" => Some(Self::DeleteRule),
            "DeleteRuleGroup" => Some(Self::DeleteRuleGroup),
            "DeleteSizeConstraintSet" => Some(Self::DeleteSizeConstraintSet),
            "DeleteSqlInjectionMatchSet" => Some(Self::DeleteSqlInjectionMatchSet),
            "DeleteWebACL" => Some(Self::DeleteWebACL),
            "DeleteXssMatchSet" => Some(Self::DeleteXssMatchSet),
            "GetByteMatchSet" => Some(Self::GetByteMatchSet),
            "GetChangeToken" => Some(Self::GetChangeToken),
            "GetChangeTokenStatus" => Some(Self::GetChangeTokenStatus),
            "GetGeoMatchSet" => Some(Self::GetGeoMatchSet),
            "GetIPSet" => Some(Self::GetIPSet),
            "GetLoggingConfiguration" => Some(Self::GetLoggingConfiguration),
            "GetPermissionPolicy" => Some(Self::GetPermissionPolicy),
            "GetRateBasedRule" => Some(Self::GetRateBasedRule),
            "GetRateBasedRuleManagedKeys" => Some(Self::GetRateBasedRuleManagedKeys),
            "GetRegexMatchSet" => Some(Self::GetRegexMatchSet),
            "GetRegexPatternSet" => Some(Self::GetRegexPatternSet),
            "GetRule" => Some(Self::GetRule),
            "GetRuleGroup" => Some(Self::GetRuleGroup),
            "GetSampledRequests" => Some(Self::GetSampledRequests),
            "GetSizeConstraintSet" => Some(Self::GetSizeConstraintSet),
            "GetSqlInjectionMatchSet" => Some(Self::GetSqlInjectionMatchSet),
            "GetWebACL" => Some(Self::GetWebACL),
            "GetXssMatchSet" => Some(Self::GetXssMatchSet),
            "ListActivatedRulesInRuleGroup" => Some(Self::ListActivatedRulesInRuleGroup),
            "ListByteMatchSets" => Some(Self::ListByteMatchSets),
            "ListGeoMatchSets" => Some(Self::ListGeoMatchSets),
            "ListIPSets" => Some(Self::ListIPSets),
            "ListLoggingConfigurations" => Some(Self::ListLoggingConfigurations),
            "ListRateBasedRules" => Some(Self::ListRateBasedRules),
            "ListRegexMatchSets" => Some(Self::ListRegexMatchSets),
            "ListRegexPatternSets" => Some(Self::ListRegexPatternSets),
            "ListRuleGroups" => Some(Self::ListRuleGroups),
            "ListRules" => Some(Self::ListRules),
            "ListSizeConstraintSets" => Some(Self::ListSizeConstraintSets),
            "ListSqlInjectionMatchSets" => Some(Self::ListSqlInjectionMatchSets),
            "ListSubscribedRuleGroups" => Some(Self::ListSubscribedRuleGroups),
            "ListWebACLs" => Some(Self::ListWebACLs),
            "ListXssMatchSets" => Some(Self::ListXssMatchSets),
            "PutLoggingConfiguration" => Some(Self::PutLoggingConfiguration),
            "PutPermissionPolicy" => Some(Self::PutPermissionPolicy),
            "UpdateByteMatchSet" => Some(Self::UpdateByteMatchSet),
            "UpdateGeoMatchSet" => Some(Self::UpdateGeoMatchSet),
            "UpdateIPSet" => Some(Self::UpdateIPSet),
            "UpdateRateBasedRule" => Some(Self::UpdateRateBasedRule),
            "UpdateRegexMatchSet" => Some(Self::UpdateRegexMatchSet),
            "UpdateRegexPatternSet" => Some(Self::UpdateRegexPatternSet),
            "UpdateRule" => Some(Self::UpdateRule),
            "UpdateRuleGroup" => Some(Self::UpdateRuleGroup),
            "UpdateSizeConstraintSet" => Some(Self::UpdateSizeConstraintSet),
            "UpdateSqlInjectionMatchSet" => Some(Self::UpdateSqlInjectionMatchSet),
            "UpdateWebACL" => Some(Self::UpdateWebACL),
            "UpdateXssMatchSet" => Some(Self::UpdateXssMatchSet),
            _ => None,
        }
    }

    /// Returns the `X-Amz-Target` header value of this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }

    /// Parse an `X-Amz-Target` header value.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        target
            .strip_prefix(TARGET_PREFIX)?
            .strip_prefix('.')
            .and_then(Self::from_name)
    }

    /// Returns the static descriptor of this operation.
    #[must_use]
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        &OPERATIONS[*self as usize]
    }
}

impl std::fmt::Display for WafOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptors of every operation, indexed by `WafOperation as usize`.
pub static OPERATIONS: [OperationDescriptor; 73] = [
    OperationDescriptor {
        name: "CreateByteMatchSet",
        input: Some("CreateByteMatchSetRequest"),
        output: Some("CreateByteMatchSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateGeoMatchSet",
        input: Some("CreateGeoMatchSetRequest"),
        output: Some("CreateGeoMatchSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateIPSet",
        input: Some("CreateIPSetRequest"),
        output: Some("CreateIPSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateRateBasedRule",
        input: Some("CreateRateBasedRuleRequest"),
        output: Some("CreateRateBasedRuleResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateRegexMatchSet",
        input: Some("CreateRegexMatchSetRequest"),
        output: Some("CreateRegexMatchSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateRegexPatternSet",
        input: Some("CreateRegexPatternSetRequest"),
        output: Some("CreateRegexPatternSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateRule",
        input: Some("CreateRuleRequest"),
        output: Some("CreateRuleResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateRuleGroup",
        input: Some("CreateRuleGroupRequest"),
        output: Some("CreateRuleGroupResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateSizeConstraintSet",
        input: Some("CreateSizeConstraintSetRequest"),
        output: Some("CreateSizeConstraintSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateSqlInjectionMatchSet",
        input: Some("CreateSqlInjectionMatchSetRequest"),
        output: Some("CreateSqlInjectionMatchSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateWebACL",
        input: Some("CreateWebACLRequest"),
        output: Some("CreateWebACLResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "CreateXssMatchSet",
        input: Some("CreateXssMatchSetRequest"),
        output: Some("CreateXssMatchSetResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFDisallowedNameException",
            "WAFInvalidParameterException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteByteMatchSet",
        input: Some("DeleteByteMatchSetRequest"),
        output: Some("DeleteByteMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteGeoMatchSet",
        input: Some("DeleteGeoMatchSetRequest"),
        output: Some("DeleteGeoMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteIPSet",
        input: Some("DeleteIPSetRequest"),
        output: Some("DeleteIPSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteLoggingConfiguration",
        input: Some("DeleteLoggingConfigurationRequest"),
        output: Some("DeleteLoggingConfigurationResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeletePermissionPolicy",
        input: Some("DeletePermissionPolicyRequest"),
        output: Some("DeletePermissionPolicyResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFStaleDataException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteRateBasedRule",
        input: Some("DeleteRateBasedRuleRequest"),
        output: Some("DeleteRateBasedRuleResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteRegexMatchSet",
        input: Some("DeleteRegexMatchSetRequest"),
        output: Some("DeleteRegexMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteRegexPatternSet",
        input: Some("DeleteRegexPatternSetRequest"),
        output: Some("DeleteRegexPatternSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteRule",
        input: Some("DeleteRuleRequest"),
        output: Some("DeleteRuleResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteRuleGroup",
        input: Some("DeleteRuleGroupRequest"),
        output: Some("DeleteRuleGroupResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteSizeConstraintSet",
        input: Some("DeleteSizeConstraintSetRequest"),
        output: Some("DeleteSizeConstraintSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteSqlInjectionMatchSet",
        input: Some("DeleteSqlInjectionMatchSetRequest"),
        output: Some("DeleteSqlInjectionMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteWebACL",
        input: Some("DeleteWebACLRequest"),
        output: Some("DeleteWebACLResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "DeleteXssMatchSet",
        input: Some("DeleteXssMatchSetRequest"),
        output: Some("DeleteXssMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFReferencedItemException",
            "WAFStaleDataException",
            "WAFNonEmptyEntityException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetByteMatchSet",
        input: Some("GetByteMatchSetRequest"),
        output: Some("GetByteMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetChangeToken",
        input: Some("GetChangeTokenRequest"),
        output: Some("GetChangeTokenResponse"),
        errors: &[
            "WAFInternalErrorException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetChangeTokenStatus",
        input: Some("GetChangeTokenStatusRequest"),
        output: Some("GetChangeTokenStatusResponse"),
        errors: &[
            "WAFNonexistentItemException",
            "WAFInternalErrorException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetGeoMatchSet",
        input: Some("GetGeoMatchSetRequest"),
        output: Some("GetGeoMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetIPSet",
        input: Some("GetIPSetRequest"),
        output: Some("GetIPSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetLoggingConfiguration",
        input: Some("GetLoggingConfigurationRequest"),
        output: Some("GetLoggingConfigurationResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetPermissionPolicy",
        input: Some("GetPermissionPolicyRequest"),
        output: Some("GetPermissionPolicyResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetRateBasedRule",
        input: Some("GetRateBasedRuleRequest"),
        output: Some("GetRateBasedRuleResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetRateBasedRuleManagedKeys",
        input: Some("GetRateBasedRuleManagedKeysRequest"),
        output: Some("GetRateBasedRuleManagedKeysResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
            "WAFInvalidParameterException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetRegexMatchSet",
        input: Some("GetRegexMatchSetRequest"),
        output: Some("GetRegexMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetRegexPatternSet",
        input: Some("GetRegexPatternSetRequest"),
        output: Some("GetRegexPatternSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetRule",
        input: Some("GetRuleRequest"),
        output: Some("GetRuleResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetRuleGroup",
        input: Some("GetRuleGroupRequest"),
        output: Some("GetRuleGroupResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetSampledRequests",
        input: Some("GetSampledRequestsRequest"),
        output: Some("GetSampledRequestsResponse"),
        errors: &[
            "WAFNonexistentItemException",
            "WAFInternalErrorException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetSizeConstraintSet",
        input: Some("GetSizeConstraintSetRequest"),
        output: Some("GetSizeConstraintSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetSqlInjectionMatchSet",
        input: Some("GetSqlInjectionMatchSetRequest"),
        output: Some("GetSqlInjectionMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetWebACL",
        input: Some("GetWebACLRequest"),
        output: Some("GetWebACLResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "GetXssMatchSet",
        input: Some("GetXssMatchSetRequest"),
        output: Some("GetXssMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFNonexistentItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListActivatedRulesInRuleGroup",
        input: Some("ListActivatedRulesInRuleGroupRequest"),
        output: Some("ListActivatedRulesInRuleGroupResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFNonexistentItemException",
            "WAFInvalidParameterException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListByteMatchSets",
        input: Some("ListByteMatchSetsRequest"),
        output: Some("ListByteMatchSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListGeoMatchSets",
        input: Some("ListGeoMatchSetsRequest"),
        output: Some("ListGeoMatchSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListIPSets",
        input: Some("ListIPSetsRequest"),
        output: Some("ListIPSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListLoggingConfigurations",
        input: Some("ListLoggingConfigurationsRequest"),
        output: Some("ListLoggingConfigurationsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFNonexistentItemException",
            "WAFInvalidParameterException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListRateBasedRules",
        input: Some("ListRateBasedRulesRequest"),
        output: Some("ListRateBasedRulesResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListRegexMatchSets",
        input: Some("ListRegexMatchSetsRequest"),
        output: Some("ListRegexMatchSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListRegexPatternSets",
        input: Some("ListRegexPatternSetsRequest"),
        output: Some("ListRegexPatternSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListRuleGroups",
        input: Some("ListRuleGroupsRequest"),
        output: Some("ListRuleGroupsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListRules",
        input: Some("ListRulesRequest"),
        output: Some("ListRulesResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListSizeConstraintSets",
        input: Some("ListSizeConstraintSetsRequest"),
        output: Some("ListSizeConstraintSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListSqlInjectionMatchSets",
        input: Some("ListSqlInjectionMatchSetsRequest"),
        output: Some("ListSqlInjectionMatchSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListSubscribedRuleGroups",
        input: Some("ListSubscribedRuleGroupsRequest"),
        output: Some("ListSubscribedRuleGroupsResponse"),
        errors: &[
            "WAFNonexistentItemException",
            "WAFInternalErrorException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListWebACLs",
        input: Some("ListWebACLsRequest"),
        output: Some("ListWebACLsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "ListXssMatchSets",
        input: Some("ListXssMatchSetsRequest"),
        output: Some("ListXssMatchSetsResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "PutLoggingConfiguration",
        input: Some("PutLoggingConfigurationRequest"),
        output: Some("PutLoggingConfigurationResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "PutPermissionPolicy",
        input: Some("PutPermissionPolicyRequest"),
        output: Some("PutPermissionPolicyResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFStaleDataException",
            "WAFNonexistentItemException",
            "WAFInvalidPermissionPolicyException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateByteMatchSet",
        input: Some("UpdateByteMatchSetRequest"),
        output: Some("UpdateByteMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateGeoMatchSet",
        input: Some("UpdateGeoMatchSetRequest"),
        output: Some("UpdateGeoMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateIPSet",
        input: Some("UpdateIPSetRequest"),
        output: Some("UpdateIPSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateRateBasedRule",
        input: Some("UpdateRateBasedRuleRequest"),
        output: Some("UpdateRateBasedRuleResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
            "WAFReferencedItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateRegexMatchSet",
        input: Some("UpdateRegexMatchSetRequest"),
        output: Some("UpdateRegexMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateRegexPatternSet",
        input: Some("UpdateRegexPatternSetRequest"),
        output: Some("UpdateRegexPatternSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
            "WAFInvalidRegexPatternException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateRule",
        input: Some("UpdateRuleRequest"),
        output: Some("UpdateRuleResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
            "WAFReferencedItemException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateRuleGroup",
        input: Some("UpdateRuleGroupRequest"),
        output: Some("UpdateRuleGroupResponse"),
        errors: &[
            "WAFStaleDataException",
            "WAFInternalErrorException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFInvalidOperationException",
            "WAFLimitsExceededException",
            "WAFInvalidParameterException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateSizeConstraintSet",
        input: Some("UpdateSizeConstraintSetRequest"),
        output: Some("UpdateSizeConstraintSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateSqlInjectionMatchSet",
        input: Some("UpdateSqlInjectionMatchSetRequest"),
        output: Some("UpdateSqlInjectionMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateWebACL",
        input: Some("UpdateWebACLRequest"),
        output: Some("UpdateWebACLResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
            "WAFReferencedItemException",
            "WAFSubscriptionNotFoundException",
        ],
        http: None,
    },
    OperationDescriptor {
        name: "UpdateXssMatchSet",
        input: Some("UpdateXssMatchSetRequest"),
        output: Some("UpdateXssMatchSetResponse"),
        errors: &[
            "WAFInternalErrorException",
            "WAFInvalidAccountException",
            "WAFInvalidOperationException",
            "WAFInvalidParameterException",
            "WAFNonexistentContainerException",
            "WAFNonexistentItemException",
            "WAFStaleDataException",
            "WAFLimitsExceededException",
        ],
        http: None,
    },
];
