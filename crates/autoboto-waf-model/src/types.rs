//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo, shape_enum};
use serde::{Deserialize, Serialize};

shape_enum! {
    /// AWS WAF `ChangeAction` enum.
    pub enum ChangeAction {
        Delete => "DELETE",
        Insert => "INSERT",
    }
}

shape_enum! {
    /// AWS WAF `ChangeTokenStatus` enum.
    pub enum ChangeTokenStatus {
        Insync => "INSYNC",
        Pending => "PENDING",
        Provisioned => "PROVISIONED",
    }
}

shape_enum! {
    /// AWS WAF `ComparisonOperator` enum.
    pub enum ComparisonOperator {
        Eq => "EQ",
        Ge => "GE",
        Gt => "GT",
        Le => "LE",
        Lt => "LT",
        Ne => "NE",
    }
}

shape_enum! {
    /// AWS WAF `GeoMatchConstraintType` enum.
    pub enum GeoMatchConstraintType {
        Country => "Country",
    }
}

shape_enum! {
    /// AWS WAF `GeoMatchConstraintValue` enum.
    pub enum GeoMatchConstraintValue {
        Ad => "AD",
        Ae => "AE",
        Af => "AF",
        Ag => "AG",
        Ai => "AI",
        Al => "AL",
        Am => "AM",
        Ao => "AO",
        Aq => "AQ",
        Ar => "AR",
        As => "AS",
        At => "AT",
        Au => "AU",
        Aw => "AW",
        Ax => "AX",
        Az => "AZ",
        Ba => "BA",
        Bb => "BB",
        Bd => "BD",
        Be => "BE",
        Bf => "BF",
        Bg => "BG",
        Bh => "BH",
        Bi => "BI",
        Bj => "BJ",
        Bl => "BL",
        Bm => "BM",
        Bn => "BN",
        Bo => "BO",
        Bq => "BQ",
        Br => "BR",
        Bs => "BS",
        Bt => "BT",
        Bv => "BV",
        Bw => "BW",
        By => "BY",
        Bz => "BZ",
        Ca => "CA",
        Cc => "CC",
        Cd => "CD",
        Cf => "CF",
        Cg => "CG",
        Ch => "CH",
        Ci => "CI",
        Ck => "CK",
        Cl => "CL",
        Cm => "CM",
        Cn => "CN",
        Co => "CO",
        Cr => "CR",
        Cu => "CU",
        Cv => "CV",
        Cw => "CW",
        Cx => "CX",
        Cy => "CY",
        Cz => "CZ",
        De => "DE",
        Dj => "DJ",
        Dk => "DK",
        Dm => "DM",
        Do => "DO",
        Dz => "DZ",
        Ec => "EC",
        Ee => "EE",
        Eg => "EG",
        Eh => "EH",
        Er => "ER",
        Es => "ES",
        Et => "ET",
        Fi => "FI",
        Fj => "FJ",
        Fk => "FK",
        Fm => "FM",
        Fo => "FO",
        Fr => "FR",
        Ga => "GA",
        Gb => "GB",
        Gd => "GD",
        Ge => "GE",
        Gf => "GF",
        Gg => "GG",
        Gh => "GH",
        Gi => "GI",
        Gl => "GL",
        Gm => "GM",
        Gn => "GN",
        Gp => "GP",
        Gq => "GQ",
        Gr => "GR",
        Gs => "GS",
        Gt => "GT",
        Gu => "GU",
        Gw => "GW",
        Gy => "GY",
        Hk => "HK",
        Hm => "HM",
        Hn => "HN",
        Hr => "HR",
        Ht => "HT",
        Hu => "HU",
        Id => "ID",
        Ie => "IE",
        Il => "IL",
        Im => "IM",
        In => "IN",
        Io => "IO",
        Iq => "IQ",
        Ir => "IR",
        Is => "IS",
        It => "IT",
        Je => "JE",
        Jm => "JM",
        Jo => "JO",
        Jp => "JP",
        Ke => "KE",
        Kg => "KG",
        Kh => "KH",
        Ki => "KI",
        Km => "KM",
        Kn => "KN",
        Kp => "KP",
        Kr => "KR",
        Kw => "KW",
        Ky => "KY",
        Kz => "KZ",
        La => "LA",
        Lb => "LB",
        Lc => "LC",
        Li => "LI",
        Lk => "LK",
        Lr => "LR",
        Ls => "LS",
        Lt => "LT",
        Lu => "LU",
        Lv => "LV",
        Ly => "LY",
        Ma => "MA",
        Mc => "MC",
        Md => "MD",
        Me => "ME",
        Mf => "MF",
        Mg => "MG",
        Mh => "MH",
        Mk => "MK",
        Ml => "ML",
        Mm => "MM",
        Mn => "MN",
        Mo => "MO",
        Mp => "MP",
        Mq => "MQ",
        Mr => "MR",
        Ms => "MS",
        Mt => "MT",
        Mu => "MU",
        Mv => "MV",
        Mw => "MW",
        Mx => "MX",
        My => "MY",
        Mz => "MZ",
        Na => "NA",
        Nc => "NC",
        Ne => "NE",
        Nf => "NF",
        Ng => "NG",
        Ni => "NI",
        Nl => "NL",
        No => "NO",
        Np => "NP",
        Nr => "NR",
        Nu => "NU",
        Nz => "NZ",
        Om => "OM",
        Pa => "PA",
        Pe => "PE",
        Pf => "PF",
        Pg => "PG",
        Ph => "PH",
        Pk => "PK",
        Pl => "PL",
        Pm => "PM",
        Pn => "PN",
        Pr => "PR",
        Ps => "PS",
        Pt => "PT",
        Pw => "PW",
        Py => "PY",
        Qa => "QA",
        Re => "RE",
        Ro => "RO",
        Rs => "RS",
        Ru => "RU",
        Rw => "RW",
        Sa => "SA",
        Sb => "SB",
        Sc => "SC",
        Sd => "SD",
        Se => "SE",
        Sg => "SG",
        Sh => "SH",
        Si => "SI",
        Sj => "SJ",
        Sk => "SK",
        Sl => "SL",
        Sm => "SM",
        Sn => "SN",
        So => "SO",
        Sr => "SR",
        Ss => "SS",
        St => "ST",
        Sv => "SV",
        Sx => "SX",
        Sy => "SY",
        Sz => "SZ",
        Tc => "TC",
        Td => "TD",
        Tf => "TF",
        Tg => "TG",
        Th => "TH",
        Tj => "TJ",
        Tk => "TK",
        Tl => "TL",
        Tm => "TM",
        Tn => "TN",
        To => "TO",
        Tr => "TR",
        Tt => "TT",
        Tv => "TV",
        Tw => "TW",
        Tz => "TZ",
        Ua => "UA",
        Ug => "UG",
        Um => "UM",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Va => "VA",
        Vc => "VC",
        Ve => "VE",
        Vg => "VG",
        Vi => "VI",
        Vn => "VN",
        Vu => "VU",
        Wf => "WF",
        Ws => "WS",
        Ye => "YE",
        Yt => "YT",
        Za => "ZA",
        Zm => "ZM",
        Zw => "ZW",
    }
}

shape_enum! {
    /// AWS WAF `IPSetDescriptorType` enum.
    pub enum IPSetDescriptorType {
        Ipv4 => "IPV4",
        Ipv6 => "IPV6",
    }
}

shape_enum! {
    /// AWS WAF `MatchFieldType` enum.
    pub enum MatchFieldType {
        AllQueryArgs => "ALL_QUERY_ARGS",
        Body => "BODY",
        Header => "HEADER",
        Method => "METHOD",
        QueryString => "QUERY_STRING",
        SingleQueryArg => "SINGLE_QUERY_ARG",
        Uri => "URI",
    }
}

shape_enum! {
    /// AWS WAF `PositionalConstraint` enum.
    pub enum PositionalConstraint {
        Contains => "CONTAINS",
        ContainsWord => "CONTAINS_WORD",
        EndsWith => "ENDS_WITH",
        Exactly => "EXACTLY",
        StartsWith => "STARTS_WITH",
    }
}

shape_enum! {
    /// AWS WAF `PredicateType` enum.
    pub enum PredicateType {
        ByteMatch => "ByteMatch",
        GeoMatch => "GeoMatch",
        IpMatch => "IPMatch",
        RegexMatch => "RegexMatch",
        SizeConstraint => "SizeConstraint",
        SqlInjectionMatch => "SqlInjectionMatch",
        XssMatch => "XssMatch",
    }
}

shape_enum! {
    /// AWS WAF `RateKey` enum.
    pub enum RateKey {
        Ip => "IP",
    }
}

shape_enum! {
    /// AWS WAF `TextTransformation` enum.
    pub enum TextTransformation {
        CmdLine => "CMD_LINE",
        CompressWhiteSpace => "COMPRESS_WHITE_SPACE",
        HtmlEntityDecode => "HTML_ENTITY_DECODE",
        Lowercase => "LOWERCASE",
        None => "NONE",
        UrlDecode => "URL_DECODE",
    }
}

shape_enum! {
    /// AWS WAF `WafActionType` enum.
    pub enum WafActionType {
        Allow => "ALLOW",
        Block => "BLOCK",
        Count => "COUNT",
    }
}

shape_enum! {
    /// AWS WAF `WafOverrideActionType` enum.
    pub enum WafOverrideActionType {
        Count => "COUNT",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS WAF `WafRuleType` enum.
    pub enum WafRuleType {
        Group => "GROUP",
        RateBased => "RATE_BASED",
        Regular => "REGULAR",
    }
}

/// AWS WAF `ActivatedRule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivatedRule {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<WafAction>,
    #[serde(rename = "ExcludedRules", skip_serializing_if = "Option::is_none")]
    pub excluded_rules: Option<Vec<ExcludedRule>>,
    #[serde(rename = "OverrideAction", skip_serializing_if = "Option::is_none")]
    pub override_action: Option<WafOverrideAction>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<WafRuleType>,
}

impl Shape for ActivatedRule {
    const SHAPE_NAME: &'static str = "ActivatedRule";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Structure("WafAction")),
        FieldMapping::new(
            "excluded_rules",
            "ExcludedRules",
            TypeInfo::List(&TypeInfo::Structure("ExcludedRule")),
        ),
        FieldMapping::new(
            "override_action",
            "OverrideAction",
            TypeInfo::Structure("WafOverrideAction"),
        ),
        FieldMapping::new("priority", "Priority", TypeInfo::Integer).required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
        FieldMapping::new("type", "Type", TypeInfo::Enum("WafRuleType")),
    ];
}

/// AWS WAF `ByteMatchSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ByteMatchSet {
    #[serde(rename = "ByteMatchSetId", skip_serializing_if = "Option::is_none")]
    pub byte_match_set_id: Option<String>,
    #[serde(rename = "ByteMatchTuples", skip_serializing_if = "Option::is_none")]
    pub byte_match_tuples: Option<Vec<ByteMatchTuple>>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for ByteMatchSet {
    const SHAPE_NAME: &'static str = "ByteMatchSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set_id", "ByteMatchSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "byte_match_tuples",
            "ByteMatchTuples",
            TypeInfo::List(&TypeInfo::Structure("ByteMatchTuple")),
        )
        .required(),
        FieldMapping::new("name", "Name", TypeInfo::String),
    ];
}

/// AWS WAF `ByteMatchSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ByteMatchSetSummary {
    #[serde(rename = "ByteMatchSetId", skip_serializing_if = "Option::is_none")]
    pub byte_match_set_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for ByteMatchSetSummary {
    const SHAPE_NAME: &'static str = "ByteMatchSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set_id", "ByteMatchSetId", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ByteMatchSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ByteMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "ByteMatchTuple", skip_serializing_if = "Option::is_none")]
    pub byte_match_tuple: Option<ByteMatchTuple>,
}

impl Shape for ByteMatchSetUpdate {
    const SHAPE_NAME: &'static str = "ByteMatchSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "byte_match_tuple",
            "ByteMatchTuple",
            TypeInfo::Structure("ByteMatchTuple"),
        )
        .required(),
    ];
}

/// AWS WAF `ByteMatchTuple`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ByteMatchTuple {
    #[serde(rename = "FieldToMatch", skip_serializing_if = "Option::is_none")]
    pub field_to_match: Option<FieldToMatch>,
    #[serde(rename = "PositionalConstraint", skip_serializing_if = "Option::is_none")]
    pub positional_constraint: Option<PositionalConstraint>,
    #[serde(
        rename = "TargetString",
        default,
        with = "autoboto_core::blob::base64_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_string: Option<bytes::Bytes>,
    #[serde(rename = "TextTransformation", skip_serializing_if = "Option::is_none")]
    pub text_transformation: Option<TextTransformation>,
}

impl Shape for ByteMatchTuple {
    const SHAPE_NAME: &'static str = "ByteMatchTuple";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "field_to_match",
            "FieldToMatch",
            TypeInfo::Structure("FieldToMatch"),
        )
        .required(),
        FieldMapping::new(
            "positional_constraint",
            "PositionalConstraint",
            TypeInfo::Enum("PositionalConstraint"),
        )
        .required(),
        FieldMapping::new("target_string", "TargetString", TypeInfo::Blob).required(),
        FieldMapping::new(
            "text_transformation",
            "TextTransformation",
            TypeInfo::Enum("TextTransformation"),
        )
        .required(),
    ];
}

/// AWS WAF `ExcludedRule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcludedRule {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for ExcludedRule {
    const SHAPE_NAME: &'static str = "ExcludedRule";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `FieldToMatch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldToMatch {
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<MatchFieldType>,
}

impl Shape for FieldToMatch {
    const SHAPE_NAME: &'static str = "FieldToMatch";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("data", "Data", TypeInfo::String),
        FieldMapping::new("type", "Type", TypeInfo::Enum("MatchFieldType")).required(),
    ];
}

/// AWS WAF `GeoMatchConstraint`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoMatchConstraint {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<GeoMatchConstraintType>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<GeoMatchConstraintValue>,
}

impl Shape for GeoMatchConstraint {
    const SHAPE_NAME: &'static str = "GeoMatchConstraint";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("type", "Type", TypeInfo::Enum("GeoMatchConstraintType")).required(),
        FieldMapping::new("value", "Value", TypeInfo::Enum("GeoMatchConstraintValue")).required(),
    ];
}

/// AWS WAF `GeoMatchSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoMatchSet {
    #[serde(rename = "GeoMatchConstraints", skip_serializing_if = "Option::is_none")]
    pub geo_match_constraints: Option<Vec<GeoMatchConstraint>>,
    #[serde(rename = "GeoMatchSetId", skip_serializing_if = "Option::is_none")]
    pub geo_match_set_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for GeoMatchSet {
    const SHAPE_NAME: &'static str = "GeoMatchSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "geo_match_constraints",
            "GeoMatchConstraints",
            TypeInfo::List(&TypeInfo::Structure("GeoMatchConstraint")),
        )
        .required(),
        FieldMapping::new("geo_match_set_id", "GeoMatchSetId", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String),
    ];
}

/// AWS WAF `GeoMatchSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoMatchSetSummary {
    #[serde(rename = "GeoMatchSetId", skip_serializing_if = "Option::is_none")]
    pub geo_match_set_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for GeoMatchSetSummary {
    const SHAPE_NAME: &'static str = "GeoMatchSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("geo_match_set_id", "GeoMatchSetId", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GeoMatchSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "GeoMatchConstraint", skip_serializing_if = "Option::is_none")]
    pub geo_match_constraint: Option<GeoMatchConstraint>,
}

impl Shape for GeoMatchSetUpdate {
    const SHAPE_NAME: &'static str = "GeoMatchSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "geo_match_constraint",
            "GeoMatchConstraint",
            TypeInfo::Structure("GeoMatchConstraint"),
        )
        .required(),
    ];
}

/// AWS WAF `HTTPHeader`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HTTPHeader {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Shape for HTTPHeader {
    const SHAPE_NAME: &'static str = "HTTPHeader";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new("value", "Value", TypeInfo::String),
    ];
}

/// AWS WAF `HTTPRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HTTPRequest {
    #[serde(rename = "ClientIP", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "HTTPVersion", skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    #[serde(rename = "Headers", skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<HTTPHeader>>,
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Shape for HTTPRequest {
    const SHAPE_NAME: &'static str = "HTTPRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("client_ip", "ClientIP", TypeInfo::String),
        FieldMapping::new("country", "Country", TypeInfo::String),
        FieldMapping::new("http_version", "HTTPVersion", TypeInfo::String),
        FieldMapping::new("headers", "Headers", TypeInfo::List(&TypeInfo::Structure("HTTPHeader"))),
        FieldMapping::new("method", "Method", TypeInfo::String),
        FieldMapping::new("uri", "URI", TypeInfo::String),
    ];
}

/// AWS WAF `IPSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IPSet {
    #[serde(rename = "IPSetDescriptors", skip_serializing_if = "Option::is_none")]
    pub ip_set_descriptors: Option<Vec<IPSetDescriptor>>,
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for IPSet {
    const SHAPE_NAME: &'static str = "IPSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "ip_set_descriptors",
            "IPSetDescriptors",
            TypeInfo::List(&TypeInfo::Structure("IPSetDescriptor")),
        )
        .required(),
        FieldMapping::new("ip_set_id", "IPSetId", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String),
    ];
}

/// AWS WAF `IPSetDescriptor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IPSetDescriptor {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<IPSetDescriptorType>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Shape for IPSetDescriptor {
    const SHAPE_NAME: &'static str = "IPSetDescriptor";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("type", "Type", TypeInfo::Enum("IPSetDescriptorType")).required(),
        FieldMapping::new("value", "Value", TypeInfo::String).required(),
    ];
}

/// AWS WAF `IPSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IPSetSummary {
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for IPSetSummary {
    const SHAPE_NAME: &'static str = "IPSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("ip_set_id", "IPSetId", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `IPSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IPSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "IPSetDescriptor", skip_serializing_if = "Option::is_none")]
    pub ip_set_descriptor: Option<IPSetDescriptor>,
}

impl Shape for IPSetUpdate {
    const SHAPE_NAME: &'static str = "IPSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "ip_set_descriptor",
            "IPSetDescriptor",
            TypeInfo::Structure("IPSetDescriptor"),
        )
        .required(),
    ];
}

/// AWS WAF `LoggingConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfiguration {
    #[serde(rename = "LogDestinationConfigs", skip_serializing_if = "Option::is_none")]
    pub log_destination_configs: Option<Vec<String>>,
    #[serde(rename = "RedactedFields", skip_serializing_if = "Option::is_none")]
    pub redacted_fields: Option<Vec<FieldToMatch>>,
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl Shape for LoggingConfiguration {
    const SHAPE_NAME: &'static str = "LoggingConfiguration";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "log_destination_configs",
            "LogDestinationConfigs",
            TypeInfo::List(&TypeInfo::String),
        )
        .required(),
        FieldMapping::new(
            "redacted_fields",
            "RedactedFields",
            TypeInfo::List(&TypeInfo::Structure("FieldToMatch")),
        ),
        FieldMapping::new("resource_arn", "ResourceArn", TypeInfo::String).required(),
    ];
}

/// AWS WAF `Predicate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    #[serde(rename = "DataId", skip_serializing_if = "Option::is_none")]
    pub data_id: Option<String>,
    #[serde(rename = "Negated", skip_serializing_if = "Option::is_none")]
    pub negated: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<PredicateType>,
}

impl Shape for Predicate {
    const SHAPE_NAME: &'static str = "Predicate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("data_id", "DataId", TypeInfo::String).required(),
        FieldMapping::new("negated", "Negated", TypeInfo::Boolean).required(),
        FieldMapping::new("type", "Type", TypeInfo::Enum("PredicateType")).required(),
    ];
}

/// AWS WAF `RateBasedRule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateBasedRule {
    #[serde(rename = "MatchPredicates", skip_serializing_if = "Option::is_none")]
    pub match_predicates: Option<Vec<Predicate>>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RateKey", skip_serializing_if = "Option::is_none")]
    pub rate_key: Option<RateKey>,
    #[serde(rename = "RateLimit", skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for RateBasedRule {
    const SHAPE_NAME: &'static str = "RateBasedRule";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "match_predicates",
            "MatchPredicates",
            TypeInfo::List(&TypeInfo::Structure("Predicate")),
        )
        .required(),
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String),
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new("rate_key", "RateKey", TypeInfo::Enum("RateKey")).required(),
        FieldMapping::new("rate_limit", "RateLimit", TypeInfo::Long).required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RegexMatchSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexMatchSet {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RegexMatchSetId", skip_serializing_if = "Option::is_none")]
    pub regex_match_set_id: Option<String>,
    #[serde(rename = "RegexMatchTuples", skip_serializing_if = "Option::is_none")]
    pub regex_match_tuples: Option<Vec<RegexMatchTuple>>,
}

impl Shape for RegexMatchSet {
    const SHAPE_NAME: &'static str = "RegexMatchSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new("regex_match_set_id", "RegexMatchSetId", TypeInfo::String),
        FieldMapping::new(
            "regex_match_tuples",
            "RegexMatchTuples",
            TypeInfo::List(&TypeInfo::Structure("RegexMatchTuple")),
        ),
    ];
}

/// AWS WAF `RegexMatchSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexMatchSetSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RegexMatchSetId", skip_serializing_if = "Option::is_none")]
    pub regex_match_set_id: Option<String>,
}

impl Shape for RegexMatchSetSummary {
    const SHAPE_NAME: &'static str = "RegexMatchSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("regex_match_set_id", "RegexMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RegexMatchSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "RegexMatchTuple", skip_serializing_if = "Option::is_none")]
    pub regex_match_tuple: Option<RegexMatchTuple>,
}

impl Shape for RegexMatchSetUpdate {
    const SHAPE_NAME: &'static str = "RegexMatchSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "regex_match_tuple",
            "RegexMatchTuple",
            TypeInfo::Structure("RegexMatchTuple"),
        )
        .required(),
    ];
}

/// AWS WAF `RegexMatchTuple`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexMatchTuple {
    #[serde(rename = "FieldToMatch", skip_serializing_if = "Option::is_none")]
    pub field_to_match: Option<FieldToMatch>,
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set_id: Option<String>,
    #[serde(rename = "TextTransformation", skip_serializing_if = "Option::is_none")]
    pub text_transformation: Option<TextTransformation>,
}

impl Shape for RegexMatchTuple {
    const SHAPE_NAME: &'static str = "RegexMatchTuple";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "field_to_match",
            "FieldToMatch",
            TypeInfo::Structure("FieldToMatch"),
        )
        .required(),
        FieldMapping::new("regex_pattern_set_id", "RegexPatternSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "text_transformation",
            "TextTransformation",
            TypeInfo::Enum("TextTransformation"),
        )
        .required(),
    ];
}

/// AWS WAF `RegexPatternSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexPatternSet {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set_id: Option<String>,
    #[serde(rename = "RegexPatternStrings", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_strings: Option<Vec<String>>,
}

impl Shape for RegexPatternSet {
    const SHAPE_NAME: &'static str = "RegexPatternSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new("regex_pattern_set_id", "RegexPatternSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "regex_pattern_strings",
            "RegexPatternStrings",
            TypeInfo::List(&TypeInfo::String),
        )
        .required(),
    ];
}

/// AWS WAF `RegexPatternSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexPatternSetSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set_id: Option<String>,
}

impl Shape for RegexPatternSetSummary {
    const SHAPE_NAME: &'static str = "RegexPatternSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("regex_pattern_set_id", "RegexPatternSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RegexPatternSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexPatternSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "RegexPatternString", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_string: Option<String>,
}

impl Shape for RegexPatternSetUpdate {
    const SHAPE_NAME: &'static str = "RegexPatternSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "regex_pattern_string",
            "RegexPatternString",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `Rule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Predicates", skip_serializing_if = "Option::is_none")]
    pub predicates: Option<Vec<Predicate>>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for Rule {
    const SHAPE_NAME: &'static str = "Rule";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String),
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new(
            "predicates",
            "Predicates",
            TypeInfo::List(&TypeInfo::Structure("Predicate")),
        )
        .required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RuleGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
}

impl Shape for RuleGroup {
    const SHAPE_NAME: &'static str = "RuleGroup";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String),
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RuleGroupSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGroupSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
}

impl Shape for RuleGroupSummary {
    const SHAPE_NAME: &'static str = "RuleGroupSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RuleGroupUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGroupUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "ActivatedRule", skip_serializing_if = "Option::is_none")]
    pub activated_rule: Option<ActivatedRule>,
}

impl Shape for RuleGroupUpdate {
    const SHAPE_NAME: &'static str = "RuleGroupUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "activated_rule",
            "ActivatedRule",
            TypeInfo::Structure("ActivatedRule"),
        )
        .required(),
    ];
}

/// AWS WAF `RuleSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for RuleSummary {
    const SHAPE_NAME: &'static str = "RuleSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `RuleUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "Predicate", skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

impl Shape for RuleUpdate {
    const SHAPE_NAME: &'static str = "RuleUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new("predicate", "Predicate", TypeInfo::Structure("Predicate")).required(),
    ];
}

/// AWS WAF `SampledHTTPRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledHTTPRequest {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(rename = "Request", skip_serializing_if = "Option::is_none")]
    pub request: Option<HTTPRequest>,
    #[serde(rename = "RuleWithinRuleGroup", skip_serializing_if = "Option::is_none")]
    pub rule_within_rule_group: Option<String>,
    #[serde(
        rename = "Timestamp",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl Shape for SampledHTTPRequest {
    const SHAPE_NAME: &'static str = "SampledHTTPRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::String),
        FieldMapping::new("request", "Request", TypeInfo::Structure("HTTPRequest")).required(),
        FieldMapping::new("rule_within_rule_group", "RuleWithinRuleGroup", TypeInfo::String),
        FieldMapping::new("timestamp", "Timestamp", TypeInfo::Timestamp),
        FieldMapping::new("weight", "Weight", TypeInfo::Long).required(),
    ];
}

/// AWS WAF `SizeConstraint`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraint {
    #[serde(rename = "ComparisonOperator", skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    #[serde(rename = "FieldToMatch", skip_serializing_if = "Option::is_none")]
    pub field_to_match: Option<FieldToMatch>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(rename = "TextTransformation", skip_serializing_if = "Option::is_none")]
    pub text_transformation: Option<TextTransformation>,
}

impl Shape for SizeConstraint {
    const SHAPE_NAME: &'static str = "SizeConstraint";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "comparison_operator",
            "ComparisonOperator",
            TypeInfo::Enum("ComparisonOperator"),
        )
        .required(),
        FieldMapping::new(
            "field_to_match",
            "FieldToMatch",
            TypeInfo::Structure("FieldToMatch"),
        )
        .required(),
        FieldMapping::new("size", "Size", TypeInfo::Long).required(),
        FieldMapping::new(
            "text_transformation",
            "TextTransformation",
            TypeInfo::Enum("TextTransformation"),
        )
        .required(),
    ];
}

/// AWS WAF `SizeConstraintSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraintSet {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "SizeConstraintSetId", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set_id: Option<String>,
    #[serde(rename = "SizeConstraints", skip_serializing_if = "Option::is_none")]
    pub size_constraints: Option<Vec<SizeConstraint>>,
}

impl Shape for SizeConstraintSet {
    const SHAPE_NAME: &'static str = "SizeConstraintSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new(
            "size_constraint_set_id",
            "SizeConstraintSetId",
            TypeInfo::String,
        )
        .required(),
        FieldMapping::new(
            "size_constraints",
            "SizeConstraints",
            TypeInfo::List(&TypeInfo::Structure("SizeConstraint")),
        )
        .required(),
    ];
}

/// AWS WAF `SizeConstraintSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraintSetSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "SizeConstraintSetId", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set_id: Option<String>,
}

impl Shape for SizeConstraintSetSummary {
    const SHAPE_NAME: &'static str = "SizeConstraintSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new(
            "size_constraint_set_id",
            "SizeConstraintSetId",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `SizeConstraintSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraintSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "SizeConstraint", skip_serializing_if = "Option::is_none")]
    pub size_constraint: Option<SizeConstraint>,
}

impl Shape for SizeConstraintSetUpdate {
    const SHAPE_NAME: &'static str = "SizeConstraintSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "size_constraint",
            "SizeConstraint",
            TypeInfo::Structure("SizeConstraint"),
        )
        .required(),
    ];
}

/// AWS WAF `SqlInjectionMatchSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlInjectionMatchSet {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "SqlInjectionMatchSetId", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set_id: Option<String>,
    #[serde(rename = "SqlInjectionMatchTuples", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_tuples: Option<Vec<SqlInjectionMatchTuple>>,
}

impl Shape for SqlInjectionMatchSet {
    const SHAPE_NAME: &'static str = "SqlInjectionMatchSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new(
            "sql_injection_match_set_id",
            "SqlInjectionMatchSetId",
            TypeInfo::String,
        )
        .required(),
        FieldMapping::new(
            "sql_injection_match_tuples",
            "SqlInjectionMatchTuples",
            TypeInfo::List(&TypeInfo::Structure("SqlInjectionMatchTuple")),
        )
        .required(),
    ];
}

/// AWS WAF `SqlInjectionMatchSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlInjectionMatchSetSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "SqlInjectionMatchSetId", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set_id: Option<String>,
}

impl Shape for SqlInjectionMatchSetSummary {
    const SHAPE_NAME: &'static str = "SqlInjectionMatchSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new(
            "sql_injection_match_set_id",
            "SqlInjectionMatchSetId",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `SqlInjectionMatchSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlInjectionMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "SqlInjectionMatchTuple", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_tuple: Option<SqlInjectionMatchTuple>,
}

impl Shape for SqlInjectionMatchSetUpdate {
    const SHAPE_NAME: &'static str = "SqlInjectionMatchSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "sql_injection_match_tuple",
            "SqlInjectionMatchTuple",
            TypeInfo::Structure("SqlInjectionMatchTuple"),
        )
        .required(),
    ];
}

/// AWS WAF `SqlInjectionMatchTuple`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlInjectionMatchTuple {
    #[serde(rename = "FieldToMatch", skip_serializing_if = "Option::is_none")]
    pub field_to_match: Option<FieldToMatch>,
    #[serde(rename = "TextTransformation", skip_serializing_if = "Option::is_none")]
    pub text_transformation: Option<TextTransformation>,
}

impl Shape for SqlInjectionMatchTuple {
    const SHAPE_NAME: &'static str = "SqlInjectionMatchTuple";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "field_to_match",
            "FieldToMatch",
            TypeInfo::Structure("FieldToMatch"),
        )
        .required(),
        FieldMapping::new(
            "text_transformation",
            "TextTransformation",
            TypeInfo::Enum("TextTransformation"),
        )
        .required(),
    ];
}

/// AWS WAF `SubscribedRuleGroupSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscribedRuleGroupSummary {
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
}

impl Shape for SubscribedRuleGroupSummary {
    const SHAPE_NAME: &'static str = "SubscribedRuleGroupSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `TimeWindow`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(
        rename = "EndTime",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(
        rename = "StartTime",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
}

impl Shape for TimeWindow {
    const SHAPE_NAME: &'static str = "TimeWindow";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("end_time", "EndTime", TypeInfo::Timestamp).required(),
        FieldMapping::new("start_time", "StartTime", TypeInfo::Timestamp).required(),
    ];
}

/// AWS WAF `WafAction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafAction {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<WafActionType>,
}

impl Shape for WafAction {
    const SHAPE_NAME: &'static str = "WafAction";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("type", "Type", TypeInfo::Enum("WafActionType")).required(),
    ];
}

/// AWS WAF `WafOverrideAction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafOverrideAction {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<WafOverrideActionType>,
}

impl Shape for WafOverrideAction {
    const SHAPE_NAME: &'static str = "WafOverrideAction";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("type", "Type", TypeInfo::Enum("WafOverrideActionType")).required(),
    ];
}

/// AWS WAF `WebACL`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebACL {
    #[serde(rename = "DefaultAction", skip_serializing_if = "Option::is_none")]
    pub default_action: Option<WafAction>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Rules", skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ActivatedRule>>,
    #[serde(rename = "WebACLArn", skip_serializing_if = "Option::is_none")]
    pub web_acl_arn: Option<String>,
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<String>,
}

impl Shape for WebACL {
    const SHAPE_NAME: &'static str = "WebACL";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "default_action",
            "DefaultAction",
            TypeInfo::Structure("WafAction"),
        )
        .required(),
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String),
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new(
            "rules",
            "Rules",
            TypeInfo::List(&TypeInfo::Structure("ActivatedRule")),
        )
        .required(),
        FieldMapping::new("web_acl_arn", "WebACLArn", TypeInfo::String),
        FieldMapping::new("web_acl_id", "WebACLId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `WebACLSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebACLSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<String>,
}

impl Shape for WebACLSummary {
    const SHAPE_NAME: &'static str = "WebACLSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("web_acl_id", "WebACLId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `WebACLUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebACLUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "ActivatedRule", skip_serializing_if = "Option::is_none")]
    pub activated_rule: Option<ActivatedRule>,
}

impl Shape for WebACLUpdate {
    const SHAPE_NAME: &'static str = "WebACLUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "activated_rule",
            "ActivatedRule",
            TypeInfo::Structure("ActivatedRule"),
        )
        .required(),
    ];
}

/// AWS WAF `XssMatchSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XssMatchSet {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "XssMatchSetId", skip_serializing_if = "Option::is_none")]
    pub xss_match_set_id: Option<String>,
    #[serde(rename = "XssMatchTuples", skip_serializing_if = "Option::is_none")]
    pub xss_match_tuples: Option<Vec<XssMatchTuple>>,
}

impl Shape for XssMatchSet {
    const SHAPE_NAME: &'static str = "XssMatchSet";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String),
        FieldMapping::new("xss_match_set_id", "XssMatchSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "xss_match_tuples",
            "XssMatchTuples",
            TypeInfo::List(&TypeInfo::Structure("XssMatchTuple")),
        )
        .required(),
    ];
}

/// AWS WAF `XssMatchSetSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XssMatchSetSummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "XssMatchSetId", skip_serializing_if = "Option::is_none")]
    pub xss_match_set_id: Option<String>,
}

impl Shape for XssMatchSetSummary {
    const SHAPE_NAME: &'static str = "XssMatchSetSummary";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("xss_match_set_id", "XssMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `XssMatchSetUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XssMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    #[serde(rename = "XssMatchTuple", skip_serializing_if = "Option::is_none")]
    pub xss_match_tuple: Option<XssMatchTuple>,
}

impl Shape for XssMatchSetUpdate {
    const SHAPE_NAME: &'static str = "XssMatchSetUpdate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("action", "Action", TypeInfo::Enum("ChangeAction")).required(),
        FieldMapping::new(
            "xss_match_tuple",
            "XssMatchTuple",
            TypeInfo::Structure("XssMatchTuple"),
        )
        .required(),
    ];
}

/// AWS WAF `XssMatchTuple`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XssMatchTuple {
    #[serde(rename = "FieldToMatch", skip_serializing_if = "Option::is_none")]
    pub field_to_match: Option<FieldToMatch>,
    #[serde(rename = "TextTransformation", skip_serializing_if = "Option::is_none")]
    pub text_transformation: Option<TextTransformation>,
}

impl Shape for XssMatchTuple {
    const SHAPE_NAME: &'static str = "XssMatchTuple";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "field_to_match",
            "FieldToMatch",
            TypeInfo::Structure("FieldToMatch"),
        )
        .required(),
        FieldMapping::new(
            "text_transformation",
            "TextTransformation",
            TypeInfo::Enum("TextTransformation"),
        )
        .required(),
    ];
}

