//! Shape resolution and type mapping from Smithy shapes to Rust types.
//!
//! This module resolves Smithy shape references into concrete Rust types and
//! `TypeInfo` expressions, and collects the transitive closure of shapes
//! needed by the configured operations.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};

use crate::config::ServiceConfig;
use crate::model::{MemberShape, Shape, SmithyModel};

/// Maximum recursion depth when resolving shape references.
const MAX_RESOLVE_DEPTH: usize = 24;

/// Serde helper path for timestamp members.
pub const TIMESTAMP_WITH: &str = "autoboto_core::timestamp::epoch_seconds_option";

/// Serde helper path for blob members.
pub const BLOB_WITH: &str = "autoboto_core::blob::base64_option";

/// Categorized operation info for code generation.
#[derive(Debug)]
pub struct OperationInfo {
    /// Short operation name (e.g., "CreateJob").
    pub name: String,
    /// Short input shape name, `None` for `smithy.api#Unit`.
    pub input_shape: Option<String>,
    /// Short output shape name, `None` for `smithy.api#Unit`.
    pub output_shape: Option<String>,
    /// Short names of the error shapes, in model order.
    pub errors: Vec<String>,
    /// The `@http` binding, for REST protocols.
    pub http: Option<HttpInfo>,
}

/// An operation's `@http` trait.
#[derive(Debug, Clone)]
pub struct HttpInfo {
    /// HTTP method.
    pub method: String,
    /// URI pattern with labels.
    pub uri: String,
    /// Success status code.
    pub code: u16,
}

/// Mapping from operation category name to a list of operation names.
pub type OperationCategories = BTreeMap<String, Vec<String>>;

/// Information about a struct member field for code generation.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Original Smithy member name.
    pub smithy_name: String,
    /// Rust field name (snake_case, raw identifier for keywords).
    pub rust_name: String,
    /// Name the member travels under on the wire.
    pub wire_name: String,
    /// Rust type of the value, without the `Option` wrapper.
    pub rust_type: String,
    /// `autoboto_core::TypeInfo` constructor expression.
    pub type_info: String,
    /// Serde `with` module for timestamps and blobs.
    pub serde_with: Option<&'static str>,
    /// Enums and structures this field refers to.
    pub references: Vec<String>,
    /// Whether this field carries `@required`.
    pub required: bool,
    /// HTTP binding annotation if any.
    pub http_binding: Option<HttpBinding>,
}

impl FieldInfo {
    /// The field name without the raw identifier prefix.
    pub fn plain_name(&self) -> &str {
        self.rust_name.strip_prefix("r#").unwrap_or(&self.rust_name)
    }
}

/// HTTP binding information for a struct member.
#[derive(Debug, Clone)]
pub enum HttpBinding {
    /// Field comes from a URI path label.
    Label,
    /// Field comes from a query string parameter.
    Query(String),
    /// Field comes from an HTTP header.
    Header(String),
    /// Field is the HTTP payload body.
    Payload,
    /// Field comes from headers with a prefix.
    PrefixHeaders(String),
}

/// A structure ready for emission.
#[derive(Debug, Clone)]
pub struct StructInfo {
    /// Shape name in the service model.
    pub shape_name: String,
    /// Member fields, sorted by Smithy member name.
    pub fields: Vec<FieldInfo>,
}

/// An error structure ready for emission.
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// The structure itself.
    pub shape: StructInfo,
    /// Status code from `@httpError`, or the `@error` default.
    pub status: u16,
}

/// Enum variant information for code generation.
#[derive(Debug, Clone)]
pub struct EnumVariantInfo {
    /// Rust variant name (PascalCase).
    pub rust_name: String,
    /// The string value from `@enumValue`.
    pub string_value: String,
}

/// Resolved information about all shapes needed for code generation.
#[derive(Debug)]
pub struct ResolvedModel {
    /// All operations we are generating, sorted by name.
    pub operations: Vec<OperationInfo>,
    /// Operation categories for file organization.
    pub categories: OperationCategories,
    /// All enum shapes needed (short name -> variants).
    pub enums: BTreeMap<String, Vec<EnumVariantInfo>>,
    /// All shared struct shapes (short name -> struct).
    pub shared_structs: BTreeMap<String, StructInfo>,
    /// Input struct shapes (Rust name -> struct).
    pub input_structs: BTreeMap<String, StructInfo>,
    /// Output struct shapes (Rust name -> struct).
    pub output_structs: BTreeMap<String, StructInfo>,
    /// Error struct shapes (short name -> error).
    pub error_structs: BTreeMap<String, ErrorInfo>,
}

/// Rust name of a top-level input structure.
pub fn input_struct_name(short: &str) -> String {
    short
        .strip_suffix("Request")
        .map_or_else(|| short.to_owned(), |base| format!("{base}Input"))
}

/// Rust name of a top-level output structure.
pub fn output_struct_name(short: &str) -> String {
    short
        .strip_suffix("Response")
        .map_or_else(|| short.to_owned(), |base| format!("{base}Output"))
}

/// A resolved member type.
#[derive(Debug)]
struct ResolvedType {
    rust: String,
    info: String,
    with: Option<&'static str>,
    references: Vec<String>,
}

impl ResolvedType {
    fn simple(rust: &str, info: &str) -> Self {
        Self {
            rust: rust.to_owned(),
            info: format!("TypeInfo::{info}"),
            with: None,
            references: Vec::new(),
        }
    }

    fn named(short: &str, kind: &str) -> Self {
        Self {
            rust: short.to_owned(),
            info: format!("TypeInfo::{kind}(\"{short}\")"),
            with: None,
            references: vec![short.to_owned()],
        }
    }

    fn element(self, context: &str) -> Result<Self> {
        if self.with.is_some() {
            bail!("{context}: timestamps and blobs inside collections are not supported");
        }
        Ok(self)
    }
}

/// Resolve a Smithy shape target to a Rust type and `TypeInfo` expression.
fn resolve_type(model: &SmithyModel, target: &str, depth: usize) -> Result<ResolvedType> {
    if depth > MAX_RESOLVE_DEPTH {
        bail!("type nesting too deep at {target}");
    }

    if let Some(builtin) = resolve_builtin_type(target) {
        return Ok(builtin);
    }

    let shape = model
        .shapes
        .get(target)
        .with_context(|| format!("shape {target} not found in model"))?;
    let short = SmithyModel::short_name(target);

    let resolved = match shape {
        Shape::String(_) => ResolvedType::simple("String", "String"),
        Shape::Boolean(_) => ResolvedType::simple("bool", "Boolean"),
        Shape::Integer(_) | Shape::Short(_) | Shape::Byte(_) | Shape::IntEnum(_) => {
            ResolvedType::simple("i32", "Integer")
        }
        Shape::Long(_) => ResolvedType::simple("i64", "Long"),
        Shape::Float(_) => ResolvedType::simple("f32", "Float"),
        Shape::Double(_) => ResolvedType::simple("f64", "Double"),
        Shape::Timestamp(_) => timestamp_type(),
        Shape::Blob(_) => blob_type(),
        Shape::Document(_) => ResolvedType::simple("serde_json::Value", "Document"),
        Shape::Enum(_) => ResolvedType::named(short, "Enum"),
        Shape::Structure(_) | Shape::Union(_) => ResolvedType::named(short, "Structure"),
        Shape::List(list_shape) => {
            let inner = resolve_type(model, &list_shape.member.target, depth + 1)?.element(target)?;
            ResolvedType {
                rust: format!("Vec<{}>", inner.rust),
                info: format!("TypeInfo::List(&{})", inner.info),
                with: None,
                references: inner.references,
            }
        }
        Shape::Map(map_shape) => {
            let key = resolve_type(model, &map_shape.key.target, depth + 1)?.element(target)?;
            let value = resolve_type(model, &map_shape.value.target, depth + 1)?.element(target)?;
            let mut references = key.references;
            references.extend(value.references);
            ResolvedType {
                rust: format!("HashMap<{}, {}>", key.rust, value.rust),
                info: format!("TypeInfo::Map(&{}, &{})", key.info, value.info),
                with: None,
                references,
            }
        }
        Shape::BigInteger(_)
        | Shape::BigDecimal(_)
        | Shape::Operation(_)
        | Shape::Service(_)
        | Shape::Resource(_) => bail!("{target} cannot be used as a member type"),
    };
    Ok(resolved)
}

fn timestamp_type() -> ResolvedType {
    ResolvedType {
        with: Some(TIMESTAMP_WITH),
        ..ResolvedType::simple("chrono::DateTime<chrono::Utc>", "Timestamp")
    }
}

fn blob_type() -> ResolvedType {
    ResolvedType {
        with: Some(BLOB_WITH),
        ..ResolvedType::simple("bytes::Bytes", "Blob")
    }
}

/// Resolve built-in smithy.api types.
fn resolve_builtin_type(target: &str) -> Option<ResolvedType> {
    let resolved = match target {
        "smithy.api#String" => ResolvedType::simple("String", "String"),
        "smithy.api#Boolean" | "smithy.api#PrimitiveBoolean" => {
            ResolvedType::simple("bool", "Boolean")
        }
        "smithy.api#Integer" | "smithy.api#PrimitiveInteger" => {
            ResolvedType::simple("i32", "Integer")
        }
        "smithy.api#Long" | "smithy.api#PrimitiveLong" => ResolvedType::simple("i64", "Long"),
        "smithy.api#Float" | "smithy.api#PrimitiveFloat" => ResolvedType::simple("f32", "Float"),
        "smithy.api#Double" | "smithy.api#PrimitiveDouble" => {
            ResolvedType::simple("f64", "Double")
        }
        "smithy.api#Blob" => blob_type(),
        "smithy.api#Timestamp" => timestamp_type(),
        "smithy.api#Document" => ResolvedType::simple("serde_json::Value", "Document"),
        _ => return None,
    };
    Some(resolved)
}

/// Extract HTTP binding info from a member's traits.
fn extract_http_binding(member: &MemberShape) -> Option<HttpBinding> {
    if member.traits.contains_key("smithy.api#httpLabel") {
        return Some(HttpBinding::Label);
    }
    if let Some(s) = member
        .traits
        .get("smithy.api#httpQuery")
        .and_then(serde_json::Value::as_str)
    {
        return Some(HttpBinding::Query(s.to_owned()));
    }
    if let Some(s) = member
        .traits
        .get("smithy.api#httpHeader")
        .and_then(serde_json::Value::as_str)
    {
        return Some(HttpBinding::Header(s.to_owned()));
    }
    if member.traits.contains_key("smithy.api#httpPayload") {
        return Some(HttpBinding::Payload);
    }
    if let Some(s) = member
        .traits
        .get("smithy.api#httpPrefixHeaders")
        .and_then(serde_json::Value::as_str)
    {
        return Some(HttpBinding::PrefixHeaders(s.to_owned()));
    }
    None
}

/// Identifiers that need the raw `r#` prefix as field names.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type", "unsafe", "use",
    "where", "while", "yield",
];

/// Convert a Smithy member name to a Rust snake_case field name.
pub fn to_snake_case(name: &str) -> String {
    use heck::ToSnakeCase;
    let snake = name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

/// Convert a Smithy enum member name to a Rust variant name.
///
/// Handles SCREAMING_SNAKE_CASE, camelCase, and already-PascalCase names.
/// Names starting with a digit get a `Value` prefix, and `Unknown` is
/// reserved for the fallback variant.
pub fn enum_variant_name(name: &str) -> Result<String> {
    use heck::ToPascalCase;
    let pascal = name.to_pascal_case();
    match pascal.chars().next() {
        None => bail!("enum member {name:?} has no usable characters"),
        Some(c) if c.is_ascii_digit() => Ok(format!("Value{pascal}")),
        Some(_) if pascal == "Unknown" => Ok("UnknownValue".to_owned()),
        Some(_) => Ok(pascal),
    }
}

/// Collect all shape IDs transitively referenced from a given shape.
fn collect_referenced_shapes(
    model: &SmithyModel,
    shape_id: &str,
    visited: &mut BTreeSet<String>,
    depth: usize,
) {
    if depth > MAX_RESOLVE_DEPTH
        || visited.contains(shape_id)
        || shape_id.starts_with("smithy.api#")
    {
        return;
    }
    visited.insert(shape_id.to_owned());

    let Some(shape) = model.shapes.get(shape_id) else {
        return;
    };

    for target in direct_targets(shape) {
        collect_referenced_shapes(model, target, visited, depth + 1);
    }
}

/// Shape IDs a shape points at directly.
fn direct_targets(shape: &Shape) -> Vec<&str> {
    match shape {
        Shape::Structure(s) => s.members.values().map(|m| m.target.as_str()).collect(),
        Shape::Union(u) => u.members.values().map(|m| m.target.as_str()).collect(),
        Shape::List(l) => vec![l.member.target.as_str()],
        Shape::Map(m) => vec![m.key.target.as_str(), m.value.target.as_str()],
        _ => Vec::new(),
    }
}

/// Resolve fields for a structure or union shape.
fn resolve_struct_fields(
    model: &SmithyModel,
    members: &std::collections::HashMap<String, MemberShape>,
    use_json_name: bool,
) -> Result<Vec<FieldInfo>> {
    // Collect members into a BTreeMap for stable ordering
    let sorted_members: BTreeMap<&String, &MemberShape> = members.iter().collect();

    let fields = sorted_members
        .into_iter()
        .map(|(name, member)| {
            let resolved = resolve_type(model, &member.target, 0)
                .with_context(|| format!("member {name}"))?;
            let wire_name = if use_json_name {
                member.json_name().unwrap_or(name)
            } else {
                name
            };
            Ok(FieldInfo {
                smithy_name: name.clone(),
                rust_name: to_snake_case(name),
                wire_name: wire_name.to_owned(),
                rust_type: resolved.rust,
                type_info: resolved.info,
                serde_with: resolved.with,
                references: resolved.references,
                required: member.is_required(),
                http_binding: extract_http_binding(member),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    for field in &fields {
        if let Some(previous) = seen.insert(&field.rust_name, &field.smithy_name) {
            bail!(
                "members {previous} and {} both map to field {}",
                field.smithy_name,
                field.rust_name
            );
        }
    }
    Ok(fields)
}

/// Resolve the variants of an enum shape, sorted by Rust name.
fn resolve_enum_variants(
    shape_id: &str,
    members: &std::collections::HashMap<String, MemberShape>,
) -> Result<Vec<EnumVariantInfo>> {
    let mut variants = members
        .iter()
        .map(|(variant_name, member)| {
            let string_value = member
                .traits
                .get("smithy.api#enumValue")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(variant_name.as_str())
                .to_owned();
            Ok(EnumVariantInfo {
                rust_name: enum_variant_name(variant_name)
                    .with_context(|| format!("enum {shape_id}"))?,
                string_value,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    variants.sort_by(|a, b| a.rust_name.cmp(&b.rust_name));

    for pair in variants.windows(2) {
        if pair[0].rust_name == pair[1].rust_name {
            bail!(
                "enum {shape_id}: members {:?} and {:?} map to the same variant",
                pair[0].string_value,
                pair[1].string_value
            );
        }
    }
    Ok(variants)
}

/// Status code of an error structure.
fn error_status(traits: &std::collections::HashMap<String, serde_json::Value>) -> u16 {
    if let Some(code) = traits
        .get("smithy.api#httpError")
        .and_then(serde_json::Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
    {
        return code;
    }
    match traits.get("smithy.api#error").and_then(serde_json::Value::as_str) {
        Some("server") => 500,
        _ => 400,
    }
}

fn http_info(traits: &std::collections::HashMap<String, serde_json::Value>) -> Option<HttpInfo> {
    let http = traits.get("smithy.api#http")?;
    Some(HttpInfo {
        method: http.get("method")?.as_str()?.to_owned(),
        uri: http.get("uri")?.as_str()?.to_owned(),
        code: http
            .get("code")
            .and_then(serde_json::Value::as_u64)
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or(200),
    })
}

/// Resolve all needed shapes from the Smithy model.
pub fn resolve_model(model: &SmithyModel, config: &ServiceConfig) -> Result<ResolvedModel> {
    let use_json_name = config.protocol == "restJson1";

    // Step 1: Collect all operation info and referenced shapes.
    let mut operations = Vec::new();
    let mut all_referenced = BTreeSet::new();
    let mut input_shape_ids = BTreeSet::new();
    let mut output_shape_ids = BTreeSet::new();
    let mut error_shape_ids = BTreeSet::new();

    for op_name in config.target_operations() {
        let full_name = config.shape_id(op_name);
        let shape = model
            .shapes
            .get(&full_name)
            .with_context(|| format!("Operation {op_name} not found in model"))?;

        let Shape::Operation(op) = shape else {
            bail!("{op_name} is not an operation shape");
        };

        let input_target = op
            .input
            .as_ref()
            .map(|r| r.target.clone())
            .filter(|t| t != "smithy.api#Unit");
        let output_target = op
            .output
            .as_ref()
            .map(|r| r.target.clone())
            .filter(|t| t != "smithy.api#Unit");

        if let Some(ref inp) = input_target {
            collect_referenced_shapes(model, inp, &mut all_referenced, 0);
            input_shape_ids.insert(inp.clone());
        }
        if let Some(ref out) = output_target {
            collect_referenced_shapes(model, out, &mut all_referenced, 0);
            output_shape_ids.insert(out.clone());
        }
        for err in &op.errors {
            collect_referenced_shapes(model, &err.target, &mut all_referenced, 0);
            error_shape_ids.insert(err.target.clone());
        }

        operations.push(OperationInfo {
            name: op_name.to_owned(),
            input_shape: input_target.map(|t| SmithyModel::short_name(&t).to_owned()),
            output_shape: output_target.map(|t| SmithyModel::short_name(&t).to_owned()),
            errors: op
                .errors
                .iter()
                .map(|r| SmithyModel::short_name(&r.target).to_owned())
                .collect(),
            http: http_info(&op.traits),
        });
    }

    // Step 2: Shapes that some other shape points at; top-level inputs and
    // outputs among them are emitted as shared structs.
    let mut nested = BTreeSet::new();
    for shape_id in &all_referenced {
        if let Some(shape) = model.shapes.get(shape_id.as_str()) {
            nested.extend(direct_targets(shape).into_iter().map(str::to_owned));
        }
    }

    // Step 3: Enums.
    let mut enums = BTreeMap::new();
    for shape_id in &all_referenced {
        if let Some(Shape::Enum(enum_shape)) = model.shapes.get(shape_id.as_str()) {
            let short = SmithyModel::short_name(shape_id).to_owned();
            enums.insert(short, resolve_enum_variants(shape_id, &enum_shape.members)?);
        }
    }

    // Step 4: Structures - separate into input, output, error, and shared.
    let mut input_structs = BTreeMap::new();
    let mut output_structs = BTreeMap::new();
    let mut shared_structs = BTreeMap::new();
    let mut error_structs = BTreeMap::new();

    for shape_id in &all_referenced {
        let (members, traits) = match model.shapes.get(shape_id.as_str()) {
            Some(Shape::Structure(s)) => (&s.members, &s.traits),
            Some(Shape::Union(u)) => (&u.members, &u.traits),
            _ => continue,
        };

        let short = SmithyModel::short_name(shape_id).to_owned();
        let fields = resolve_struct_fields(model, members, use_json_name)
            .with_context(|| format!("Failed to resolve {shape_id}"))?;
        let info = StructInfo {
            shape_name: short.clone(),
            fields,
        };

        if traits.contains_key("smithy.api#error") {
            if !error_shape_ids.contains(shape_id) {
                bail!("error shape {short} is referenced as a member");
            }
            let status = error_status(traits);
            error_structs.insert(short, ErrorInfo { shape: info, status });
            continue;
        }

        let is_input = input_shape_ids.contains(shape_id);
        let is_output = output_shape_ids.contains(shape_id);
        let is_nested = nested.contains(shape_id);

        if is_input && !is_output && !is_nested {
            input_structs.insert(input_struct_name(&short), info);
        } else if is_output && !is_input && !is_nested {
            output_structs.insert(output_struct_name(&short), info);
        } else {
            shared_structs.insert(short, info);
        }
    }

    Ok(ResolvedModel {
        operations,
        categories: config.operations.clone(),
        enums,
        shared_structs,
        input_structs,
        output_structs,
        error_structs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_snake_case_member_names() {
        assert_eq!(to_snake_case("H264Settings"), "h264_settings");
        assert_eq!(to_snake_case("IPSetId"), "ip_set_id");
        assert_eq!(to_snake_case("ChangeToken"), "change_token");
        assert_eq!(to_snake_case("Type"), "r#type");
    }

    #[test]
    fn test_should_name_enum_variants() {
        assert_eq!(enum_variant_name("HIGH_BITRATE").unwrap(), "HighBitrate");
        assert_eq!(enum_variant_name("LEVEL_4_1").unwrap(), "Level41");
        assert_eq!(enum_variant_name("_1080P").unwrap(), "Value1080p");
        assert_eq!(enum_variant_name("UNKNOWN").unwrap(), "UnknownValue");
        assert!(enum_variant_name("_").is_err());
    }

    #[test]
    fn test_should_rename_io_structs() {
        assert_eq!(input_struct_name("CreateJobRequest"), "CreateJobInput");
        assert_eq!(output_struct_name("GetWebACLResponse"), "GetWebACLOutput");
        assert_eq!(output_struct_name("Job"), "Job");
    }
}
