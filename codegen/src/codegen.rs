//! Rust code generation from resolved Smithy shapes.
//!
//! This module takes a `ResolvedModel` and produces Rust source code strings
//! for types, input/output structs, errors, operations, and the service
//! descriptor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::{Result, bail};

use crate::config::ServiceConfig;
use crate::shapes::{
    EnumVariantInfo, ErrorInfo, FieldInfo, HttpBinding, OperationCategories, ResolvedModel,
    StructInfo, input_struct_name, output_struct_name,
};

/// Column limit used when laying out long generated lines.
const MAX_WIDTH: usize = 100;

/// Shared state of one generator run.
struct Generator<'a> {
    config: &'a ServiceConfig,
    resolved: &'a ResolvedModel,
    header: String,
}

/// Generate all source files and return them as a map of path -> content.
pub fn generate_all(
    config: &ServiceConfig,
    resolved: &ResolvedModel,
) -> Result<BTreeMap<String, String>> {
    let generator = Generator {
        config,
        resolved,
        header: format!(
            "//! Auto-generated from the {} Smithy model. DO NOT EDIT.",
            config.title
        ),
    };
    let mut files = BTreeMap::new();

    files.insert("types.rs".to_owned(), generator.generate_types()?);
    files.insert("error.rs".to_owned(), generator.generate_error()?);
    files.insert("operations.rs".to_owned(), generator.generate_operations()?);
    files.insert("model.rs".to_owned(), generator.generate_model()?);
    files.insert("lib.rs".to_owned(), generator.generate_lib()?);

    generator.generate_io_modules(&mut files, IoKind::Input)?;
    generator.generate_io_modules(&mut files, IoKind::Output)?;

    Ok(files)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IoKind {
    Input,
    Output,
}

impl IoKind {
    fn module(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl Generator<'_> {
    fn prefix(&self) -> &str {
        &self.config.type_prefix
    }

    /// Generate types.rs with all shared enums and structs.
    fn generate_types(&self) -> Result<String> {
        let resolved = self.resolved;
        let mut out = String::with_capacity(256 * 1024);
        writeln!(out, "{}", self.header)?;
        writeln!(out)?;

        let structs: Vec<(&String, &StructInfo)> = resolved.shared_structs.iter().collect();
        if needs_hashmap(&structs) {
            writeln!(out, "use std::collections::HashMap;")?;
            writeln!(out)?;
        }

        let mut core_imports = Vec::new();
        if !structs.is_empty() {
            core_imports.extend(["FieldMapping", "Shape"]);
            if structs.iter().any(|(_, s)| !s.fields.is_empty()) {
                core_imports.push("TypeInfo");
            }
        }
        if !resolved.enums.is_empty() {
            core_imports.push("shape_enum");
        }
        if !core_imports.is_empty() {
            writeln!(out, "use autoboto_core::{{{}}};", core_imports.join(", "))?;
        }
        if !structs.is_empty() {
            writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
        }
        writeln!(out)?;

        for (name, variants) in &resolved.enums {
            self.write_enum(&mut out, name, variants)?;
        }

        for (name, info) in &structs {
            self.write_struct(&mut out, name, info, false)?;
        }

        Ok(out)
    }

    /// Generate a single `shape_enum!` invocation.
    fn write_enum(&self, out: &mut String, name: &str, variants: &[EnumVariantInfo]) -> Result<()> {
        writeln!(out, "shape_enum! {{")?;
        writeln!(out, "    /// {} `{name}` enum.", self.config.title)?;
        writeln!(out, "    pub enum {name} {{")?;
        for variant in variants {
            writeln!(
                out,
                "        {} => {:?},",
                variant.rust_name, variant.string_value
            )?;
        }
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        Ok(())
    }

    /// Generate a struct, its serde attributes and its `Shape` impl.
    fn write_struct(
        &self,
        out: &mut String,
        name: &str,
        info: &StructInfo,
        include_http_comments: bool,
    ) -> Result<()> {
        writeln!(out, "/// {} `{}`.", self.config.title, info.shape_name)?;
        writeln!(
            out,
            "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]"
        )?;
        if info.fields.is_empty() {
            writeln!(out, "pub struct {name} {{}}")?;
        } else {
            writeln!(out, "pub struct {name} {{")?;
            for field in &info.fields {
                if include_http_comments {
                    if let Some(ref binding) = field.http_binding {
                        writeln!(out, "    {}", http_binding_comment(binding))?;
                    }
                }
                write_serde_attr(out, field)?;
                writeln!(out, "    pub {}: Option<{}>,", field.rust_name, field.rust_type)?;
            }
            writeln!(out, "}}")?;
        }
        writeln!(out)?;

        writeln!(out, "impl Shape for {name} {{")?;
        writeln!(
            out,
            "    const SHAPE_NAME: &'static str = \"{}\";",
            info.shape_name
        )?;
        if info.fields.is_empty() {
            writeln!(out, "    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];")?;
        } else {
            writeln!(out, "    const FIELD_MAPPINGS: &'static [FieldMapping] = &[")?;
            for field in &info.fields {
                write_mapping_entry(out, field)?;
            }
            writeln!(out, "    ];")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
        Ok(())
    }

    /// Generate input or output module files.
    fn generate_io_modules(
        &self,
        files: &mut BTreeMap<String, String>,
        kind: IoKind,
    ) -> Result<()> {
        let module = kind.module();
        let structs = match kind {
            IoKind::Input => &self.resolved.input_structs,
            IoKind::Output => &self.resolved.output_structs,
        };
        let categories = self.category_structs(kind, structs);

        // Generate mod.rs
        let mut mod_out = String::with_capacity(4096);
        writeln!(mod_out, "{}", self.header)?;
        writeln!(mod_out)?;
        for cat_name in categories.keys() {
            writeln!(mod_out, "mod {cat_name};")?;
        }
        if !categories.is_empty() {
            writeln!(mod_out)?;
        }
        for cat_name in categories.keys() {
            writeln!(mod_out, "pub use {cat_name}::*;")?;
        }
        files.insert(format!("{module}/mod.rs"), mod_out);

        // Generate each category file
        for (cat_name, category_structs) in &categories {
            let mut out = String::with_capacity(16 * 1024);
            writeln!(out, "{}", self.header)?;
            writeln!(out)?;

            if needs_hashmap(category_structs) {
                writeln!(out, "use std::collections::HashMap;")?;
                writeln!(out)?;
            }

            if category_structs.iter().any(|(_, s)| !s.fields.is_empty()) {
                writeln!(out, "use autoboto_core::{{FieldMapping, Shape, TypeInfo}};")?;
            } else {
                writeln!(out, "use autoboto_core::{{FieldMapping, Shape}};")?;
            }
            writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
            writeln!(out)?;

            let needed = self.needed_types(category_structs);
            if !needed.is_empty() {
                write_use_list(&mut out, "crate::types", &needed)?;
                writeln!(out)?;
            }

            for (name, info) in category_structs {
                self.write_struct(&mut out, name, info, kind == IoKind::Input)?;
            }

            files.insert(format!("{module}/{cat_name}.rs"), out);
        }

        Ok(())
    }

    /// Structs of each category, sorted by Rust name. Empty categories are dropped.
    fn category_structs<'m>(
        &self,
        kind: IoKind,
        structs: &'m BTreeMap<String, StructInfo>,
    ) -> BTreeMap<String, Vec<(&'m String, &'m StructInfo)>> {
        let categories: &OperationCategories = &self.resolved.categories;
        let mut result = BTreeMap::new();

        for (cat_name, ops) in categories {
            let mut names = BTreeSet::new();
            for op_name in ops {
                let Some(info) = self.resolved.operations.iter().find(|o| &o.name == op_name)
                else {
                    continue;
                };
                let struct_name = match kind {
                    IoKind::Input => info.input_shape.as_deref().map(input_struct_name),
                    IoKind::Output => info.output_shape.as_deref().map(output_struct_name),
                };
                if let Some(struct_name) = struct_name {
                    names.insert(struct_name);
                }
            }

            let entries: Vec<(&String, &StructInfo)> = names
                .iter()
                .filter_map(|name| structs.get_key_value(name))
                .collect();
            if !entries.is_empty() {
                result.insert(cat_name.clone(), entries);
            }
        }

        result
    }

    /// Names from `types.rs` referenced by the given structs.
    fn needed_types(&self, structs: &[(&String, &StructInfo)]) -> Vec<String> {
        let mut needed = BTreeSet::new();
        for (_, info) in structs {
            for field in &info.fields {
                for name in &field.references {
                    if self.resolved.enums.contains_key(name)
                        || self.resolved.shared_structs.contains_key(name)
                    {
                        needed.insert(name.clone());
                    }
                }
            }
        }
        needed.into_iter().collect()
    }

    /// Generate error.rs with the error shapes, the error code enum and the
    /// service error struct.
    fn generate_error(&self) -> Result<String> {
        let prefix = self.prefix();
        let errors: Vec<(&String, &ErrorInfo)> = self.resolved.error_structs.iter().collect();
        if errors.is_empty() {
            bail!("{} declares no error shapes", self.config.service);
        }
        let mut out = String::with_capacity(32 * 1024);
        writeln!(out, "{}", self.header)?;
        writeln!(out)?;
        writeln!(out, "use std::fmt;")?;
        writeln!(out)?;

        let any_fields = errors.iter().any(|(_, e)| !e.shape.fields.is_empty());
        if any_fields {
            writeln!(
                out,
                "use autoboto_core::{{ErrorShape, FieldMapping, Shape, TypeInfo}};"
            )?;
            writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
            writeln!(out)?;
        } else {
            writeln!(out, "use autoboto_core::{{ErrorShape, FieldMapping, Shape}};")?;
            writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
            writeln!(out)?;
        }

        let as_structs: Vec<(&String, &StructInfo)> =
            errors.iter().map(|(name, e)| (*name, &e.shape)).collect();
        let needed = self.needed_types(&as_structs);
        if !needed.is_empty() {
            write_use_list(&mut out, "crate::types", &needed)?;
            writeln!(out)?;
        }

        // Error shapes
        for (name, error) in &errors {
            self.write_struct(&mut out, name, &error.shape, false)?;
            writeln!(out, "impl ErrorShape for {name} {{")?;
            writeln!(out, "    const ERROR_CODE: &'static str = \"{name}\";")?;
            writeln!(out, "    const HTTP_STATUS: u16 = {};", error.status)?;
            writeln!(out)?;
            writeln!(out, "    fn message(&self) -> Option<&str> {{")?;
            let has_message = error
                .shape
                .fields
                .iter()
                .any(|f| f.rust_name == "message" && f.rust_type == "String");
            if has_message {
                writeln!(out, "        self.message.as_deref()")?;
            } else {
                writeln!(out, "        None")?;
            }
            writeln!(out, "    }}")?;
            writeln!(out, "}}")?;
            writeln!(out)?;
        }

        // Error code enum
        writeln!(out, "/// Error codes of the {} service.", self.config.title)?;
        writeln!(
            out,
            "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]"
        )?;
        writeln!(out, "#[non_exhaustive]")?;
        writeln!(out, "pub enum {prefix}ErrorCode {{")?;
        for (i, (name, _)) in errors.iter().enumerate() {
            if i == 0 {
                writeln!(out, "    /// Default error code.")?;
                writeln!(out, "    #[default]")?;
            }
            writeln!(out, "    /// {name} error.")?;
            writeln!(out, "    {name},")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl {prefix}ErrorCode {{")?;
        writeln!(out, "    /// Every error code, in name order.")?;
        writeln!(out, "    pub const ALL: &'static [Self] = &[")?;
        for (name, _) in &errors {
            writeln!(out, "        Self::{name},")?;
        }
        writeln!(out, "    ];")?;
        writeln!(out)?;

        writeln!(out, "    /// Returns the error code as a string.")?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
        writeln!(out, "        match self {{")?;
        for (name, _) in &errors {
            writeln!(out, "            Self::{name} => \"{name}\",")?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;

        writeln!(
            out,
            "    /// Returns the fully qualified shape ID of this error."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn error_type(&self) -> &'static str {{")?;
        writeln!(out, "        match self {{")?;
        for (name, _) in &errors {
            writeln!(
                out,
                "            Self::{name} => \"{}\",",
                self.config.shape_id(name)
            )?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;

        writeln!(
            out,
            "    /// Returns the default HTTP status code for this error."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    #[allow(clippy::match_same_arms)]")?;
        writeln!(
            out,
            "    pub fn default_status_code(&self) -> http::StatusCode {{"
        )?;
        writeln!(out, "        match self {{")?;
        // Group error codes by status code to avoid match_same_arms lint
        let mut status_groups: BTreeMap<u16, Vec<&str>> = BTreeMap::new();
        for (name, error) in &errors {
            status_groups.entry(error.status).or_default().push(name);
        }
        for (status, codes) in &status_groups {
            let patterns: Vec<String> = codes.iter().map(|c| format!("Self::{c}")).collect();
            write_match_arm(&mut out, &patterns, status_const(*status))?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;

        writeln!(
            out,
            "    /// Parse an error code. Accepts `Code`, `namespace#Code` and `Code:detail`."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn from_code(code: &str) -> Option<Self> {{")?;
        writeln!(
            out,
            "        let code = code.split_once(':').map_or(code, |(code, _)| code);"
        )?;
        writeln!(
            out,
            "        let code = code.rsplit_once('#').map_or(code, |(_, code)| code);"
        )?;
        writeln!(out, "        match code {{")?;
        for (name, _) in &errors {
            writeln!(out, "            \"{name}\" => Some(Self::{name}),")?;
        }
        writeln!(out, "            _ => None,")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl fmt::Display for {prefix}ErrorCode {{")?;
        writeln!(
            out,
            "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
        )?;
        writeln!(out, "        f.write_str(self.as_str())")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        self.write_service_error(&mut out, &errors)?;
        Ok(out)
    }

    /// The service error struct, its conversions and the error macro.
    fn write_service_error(
        &self,
        out: &mut String,
        errors: &[(&String, &ErrorInfo)],
    ) -> Result<()> {
        let prefix = self.prefix();
        let error_macro = self.config.error_macro();
        let crate_name = &self.config.crate_name;

        writeln!(out, "/// An error returned by the {} service.", self.config.title)?;
        writeln!(out, "#[derive(Debug)]")?;
        writeln!(out, "pub struct {prefix}Error {{")?;
        writeln!(out, "    /// The error code.")?;
        writeln!(out, "    pub code: {prefix}ErrorCode,")?;
        writeln!(out, "    /// A human-readable error message.")?;
        writeln!(out, "    pub message: String,")?;
        writeln!(out, "    /// The HTTP status code.")?;
        writeln!(out, "    pub status_code: http::StatusCode,")?;
        writeln!(out, "    /// The underlying source error, if any.")?;
        writeln!(
            out,
            "    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,"
        )?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl fmt::Display for {prefix}Error {{")?;
        writeln!(
            out,
            "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
        )?;
        writeln!(
            out,
            "        write!(f, \"{prefix}Error({{}}): {{}}\", self.code, self.message)"
        )?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl std::error::Error for {prefix}Error {{")?;
        writeln!(
            out,
            "    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {{"
        )?;
        writeln!(
            out,
            "        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))"
        )?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl {prefix}Error {{")?;
        writeln!(
            out,
            "    /// Create a new error from an error code, using the code as message."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn new(code: {prefix}ErrorCode) -> Self {{")?;
        writeln!(out, "        Self::with_message(code, code.as_str())")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;
        writeln!(out, "    /// Create a new error with a custom message.")?;
        writeln!(out, "    #[must_use]")?;
        writeln!(
            out,
            "    pub fn with_message(code: {prefix}ErrorCode, message: impl Into<String>) -> Self {{"
        )?;
        writeln!(out, "        Self {{")?;
        writeln!(out, "            status_code: code.default_status_code(),")?;
        writeln!(out, "            message: message.into(),")?;
        writeln!(out, "            code,")?;
        writeln!(out, "            source: None,")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;
        writeln!(out, "    /// Set the source error.")?;
        writeln!(out, "    #[must_use]")?;
        writeln!(
            out,
            "    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {{"
        )?;
        writeln!(out, "        self.source = Some(Box::new(source));")?;
        writeln!(out, "        self")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;
        writeln!(
            out,
            "    /// Returns the fully qualified shape ID of the error."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn error_type(&self) -> &'static str {{")?;
        writeln!(out, "        self.code.error_type()")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        for (name, _) in errors {
            writeln!(out, "impl From<{name}> for {prefix}Error {{")?;
            writeln!(out, "    fn from(err: {name}) -> Self {{")?;
            writeln!(out, "        let code = {prefix}ErrorCode::{name};")?;
            writeln!(out, "        match err.message() {{")?;
            writeln!(
                out,
                "            Some(message) => Self::with_message(code, message),"
            )?;
            writeln!(out, "            None => Self::new(code),")?;
            writeln!(out, "        }}")?;
            writeln!(out, "    }}")?;
            writeln!(out, "}}")?;
            writeln!(out)?;
        }

        let Some((first, _)) = errors.first() else {
            return Ok(());
        };
        writeln!(out, "/// Create a `{prefix}Error` from an error code.")?;
        writeln!(out, "///")?;
        writeln!(out, "/// # Examples")?;
        writeln!(out, "///")?;
        writeln!(out, "/// ```")?;
        writeln!(out, "/// use {crate_name}::{error_macro};")?;
        writeln!(out, "/// use {crate_name}::error::{prefix}ErrorCode;")?;
        writeln!(out, "///")?;
        writeln!(out, "/// let err = {error_macro}!({first});")?;
        writeln!(out, "/// assert_eq!(err.code, {prefix}ErrorCode::{first});")?;
        writeln!(out, "///")?;
        writeln!(
            out,
            "/// let err = {error_macro}!({first}, \"custom message\");"
        )?;
        writeln!(out, "/// assert_eq!(err.message, \"custom message\");")?;
        writeln!(out, "/// ```")?;
        writeln!(out, "#[macro_export]")?;
        writeln!(out, "macro_rules! {error_macro} {{")?;
        writeln!(out, "    ($code:ident) => {{")?;
        writeln!(
            out,
            "        $crate::error::{prefix}Error::new($crate::error::{prefix}ErrorCode::$code)"
        )?;
        writeln!(out, "    }};")?;
        writeln!(out, "    ($code:ident, $msg:expr) => {{")?;
        writeln!(
            out,
            "        $crate::error::{prefix}Error::with_message($crate::error::{prefix}ErrorCode::$code, $msg)"
        )?;
        writeln!(out, "    }};")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    /// Generate operations.rs with the operation enum and descriptors.
    fn generate_operations(&self) -> Result<String> {
        let prefix = self.prefix();
        let ops = &self.resolved.operations;
        let mut out = String::with_capacity(32 * 1024);
        writeln!(out, "{}", self.header)?;
        writeln!(out)?;
        if ops.iter().any(|op| op.http.is_some()) {
            writeln!(out, "use autoboto_core::{{HttpTrait, OperationDescriptor}};")?;
        } else {
            writeln!(out, "use autoboto_core::OperationDescriptor;")?;
        }
        writeln!(out)?;

        if let Some(target_prefix) = &self.config.target_prefix {
            writeln!(out, "/// `X-Amz-Target` prefix of the service.")?;
            writeln!(out, "pub const TARGET_PREFIX: &str = \"{target_prefix}\";")?;
            writeln!(out)?;
        }

        writeln!(out, "/// All supported {} operations.", self.config.title)?;
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
        writeln!(out, "pub enum {prefix}Operation {{")?;
        for op in ops {
            writeln!(out, "    /// The {} operation.", op.name)?;
            writeln!(out, "    {},", op.name)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl {prefix}Operation {{")?;
        writeln!(out, "    /// Every operation, in name order.")?;
        writeln!(out, "    pub const ALL: &'static [Self] = &[")?;
        for op in ops {
            writeln!(out, "        Self::{},", op.name)?;
        }
        writeln!(out, "    ];")?;
        writeln!(out)?;

        writeln!(out, "    /// Returns the AWS operation name string.")?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
        writeln!(out, "        match self {{")?;
        for op in ops {
            writeln!(out, "            Self::{0} => \"{0}\",", op.name)?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;

        writeln!(
            out,
            "    /// Parse an operation name string into a `{prefix}Operation`."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{")?;
        writeln!(out, "        match name {{")?;
        for op in ops {
            writeln!(out, "            \"{0}\" => Some(Self::{0}),", op.name)?;
        }
        writeln!(out, "            _ => None,")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;

        if self.config.target_prefix.is_some() {
            writeln!(
                out,
                "    /// Returns the `X-Amz-Target` header value of this operation."
            )?;
            writeln!(out, "    #[must_use]")?;
            writeln!(out, "    pub fn target(&self) -> String {{")?;
            writeln!(
                out,
                "        format!(\"{{TARGET_PREFIX}}.{{}}\", self.as_str())"
            )?;
            writeln!(out, "    }}")?;
            writeln!(out)?;
            writeln!(out, "    /// Parse an `X-Amz-Target` header value.")?;
            writeln!(out, "    #[must_use]")?;
            writeln!(
                out,
                "    pub fn from_target(target: &str) -> Option<Self> {{"
            )?;
            writeln!(out, "        target")?;
            writeln!(out, "            .strip_prefix(TARGET_PREFIX)?")?;
            writeln!(out, "            .strip_prefix('.')")?;
            writeln!(out, "            .and_then(Self::from_name)")?;
            writeln!(out, "    }}")?;
            writeln!(out)?;
        }

        writeln!(
            out,
            "    /// Returns the static descriptor of this operation."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(
            out,
            "    pub fn descriptor(&self) -> &'static OperationDescriptor {{"
        )?;
        writeln!(out, "        &OPERATIONS[*self as usize]")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl std::fmt::Display for {prefix}Operation {{")?;
        writeln!(
            out,
            "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{"
        )?;
        writeln!(out, "        f.write_str(self.as_str())")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(
            out,
            "/// Descriptors of every operation, indexed by `{prefix}Operation as usize`."
        )?;
        writeln!(
            out,
            "pub static OPERATIONS: [OperationDescriptor; {}] = [",
            ops.len()
        )?;
        for op in ops {
            writeln!(out, "    OperationDescriptor {{")?;
            writeln!(out, "        name: \"{}\",", op.name)?;
            writeln!(out, "        input: {},", option_str(op.input_shape.as_deref()))?;
            writeln!(out, "        output: {},", option_str(op.output_shape.as_deref()))?;
            if op.errors.is_empty() {
                writeln!(out, "        errors: &[],")?;
            } else {
                writeln!(out, "        errors: &[")?;
                for err in &op.errors {
                    writeln!(out, "            \"{err}\",")?;
                }
                writeln!(out, "        ],")?;
            }
            match &op.http {
                Some(http) => {
                    writeln!(out, "        http: Some(HttpTrait {{")?;
                    writeln!(out, "            method: \"{}\",", http.method)?;
                    writeln!(out, "            uri: \"{}\",", http.uri)?;
                    writeln!(out, "            code: {},", http.code)?;
                    writeln!(out, "        }}),")?;
                }
                None => writeln!(out, "        http: None,")?,
            }
            writeln!(out, "    }},")?;
        }
        writeln!(out, "];")?;

        Ok(out)
    }

    /// Generate model.rs with the static service descriptor.
    fn generate_model(&self) -> Result<String> {
        let config = self.config;
        let resolved = self.resolved;
        let mut out = String::with_capacity(64 * 1024);
        writeln!(out, "{}", self.header)?;
        writeln!(out)?;
        writeln!(
            out,
            "use autoboto_core::{{EnumDescriptor, Protocol, ServiceModel, ShapeDescriptor, ShapeKind}};"
        )?;
        writeln!(out)?;
        writeln!(out, "use crate::operations::OPERATIONS;")?;
        writeln!(out, "use crate::{{error, input, output, types}};")?;
        writeln!(out)?;

        writeln!(out, "/// Static description of the {} model.", config.title)?;
        writeln!(out, "pub static SERVICE_MODEL: ServiceModel = ServiceModel {{")?;
        writeln!(out, "    name: \"{}\",", config.service)?;
        writeln!(out, "    title: \"{}\",", config.title)?;
        writeln!(out, "    api_version: \"{}\",", config.api_version)?;
        writeln!(out, "    protocol: Protocol::{},", config.protocol_variant()?)?;
        writeln!(
            out,
            "    target_prefix: {},",
            option_str(config.target_prefix.as_deref())
        )?;
        writeln!(out, "    shapes: &[")?;
        for name in resolved.shared_structs.keys() {
            writeln!(
                out,
                "        ShapeDescriptor::of::<types::{name}>(ShapeKind::Structure),"
            )?;
        }
        for name in resolved.input_structs.keys() {
            writeln!(
                out,
                "        ShapeDescriptor::of::<input::{name}>(ShapeKind::Input),"
            )?;
        }
        for name in resolved.output_structs.keys() {
            writeln!(
                out,
                "        ShapeDescriptor::of::<output::{name}>(ShapeKind::Output),"
            )?;
        }
        for name in resolved.error_structs.keys() {
            writeln!(
                out,
                "        ShapeDescriptor::of::<error::{name}>(ShapeKind::Error),"
            )?;
        }
        writeln!(out, "    ],")?;
        writeln!(out, "    enums: &[")?;
        for name in resolved.enums.keys() {
            writeln!(out, "        EnumDescriptor::of::<types::{name}>(),")?;
        }
        writeln!(out, "    ],")?;
        writeln!(out, "    operations: &OPERATIONS,")?;
        writeln!(out, "}};")?;

        Ok(out)
    }

    /// Generate lib.rs that re-exports all modules.
    fn generate_lib(&self) -> Result<String> {
        let prefix = self.prefix();
        let resolved = self.resolved;
        let mut out = String::with_capacity(2048);
        writeln!(out, "{}", self.header)?;
        writeln!(out, "#![allow(clippy::too_many_lines)]")?;
        writeln!(out, "#![allow(clippy::struct_excessive_bools)]")?;
        writeln!(out, "#![allow(clippy::doc_markdown)]")?;
        writeln!(out, "#![allow(clippy::upper_case_acronyms)]")?;
        writeln!(out, "#![allow(missing_docs)]")?;
        writeln!(out)?;

        writeln!(out, "pub mod error;")?;
        writeln!(out, "pub mod input;")?;
        writeln!(out, "pub mod model;")?;
        writeln!(out, "pub mod operations;")?;
        writeln!(out, "pub mod output;")?;
        writeln!(out, "pub mod types;")?;
        writeln!(out)?;

        writeln!(out, "pub use error::{{{prefix}Error, {prefix}ErrorCode}};")?;
        writeln!(out, "pub use model::SERVICE_MODEL;")?;
        writeln!(out, "pub use operations::{prefix}Operation;")?;
        writeln!(out)?;

        let n_ops = resolved.operations.len();
        let n_enums = resolved.enums.len();
        let n_shared = resolved.shared_structs.len();
        let n_inputs = resolved.input_structs.len();
        let n_outputs = resolved.output_structs.len();
        let n_errors = resolved.error_structs.len();
        writeln!(
            out,
            "// Generated: {n_ops} operations, {n_enums} enums, {n_shared} shared structs, {n_inputs} input structs, {n_outputs} output structs, {n_errors} error structs"
        )?;

        Ok(out)
    }
}

fn needs_hashmap(structs: &[(&String, &StructInfo)]) -> bool {
    structs
        .iter()
        .any(|(_, s)| s.fields.iter().any(|f| f.rust_type.contains("HashMap<")))
}

fn http_binding_comment(binding: &HttpBinding) -> String {
    match binding {
        HttpBinding::Label => "/// HTTP label (URI path).".to_owned(),
        HttpBinding::Query(q) => format!("/// HTTP query: `{q}`."),
        HttpBinding::Header(h) => format!("/// HTTP header: `{h}`."),
        HttpBinding::Payload => "/// HTTP payload body.".to_owned(),
        HttpBinding::PrefixHeaders(p) => format!("/// HTTP prefix headers: `{p}`."),
    }
}

/// Write the `#[serde(...)]` attribute of a field, wrapping it when it would
/// exceed the column limit.
fn write_serde_attr(out: &mut String, field: &FieldInfo) -> Result<()> {
    let mut parts = vec![format!("rename = \"{}\"", field.wire_name)];
    if let Some(with) = field.serde_with {
        parts.push("default".to_owned());
        parts.push(format!("with = \"{with}\""));
    }
    parts.push("skip_serializing_if = \"Option::is_none\"".to_owned());

    let single = format!("    #[serde({})]", parts.join(", "));
    if single.len() <= MAX_WIDTH {
        writeln!(out, "{single}")?;
    } else {
        writeln!(out, "    #[serde(")?;
        writeln!(out, "        {}", parts.join(",\n        "))?;
        writeln!(out, "    )]")?;
    }
    Ok(())
}

/// Write one `FieldMapping` entry of a mapping table.
fn write_mapping_entry(out: &mut String, field: &FieldInfo) -> Result<()> {
    let suffix = if field.required { ".required()" } else { "" };
    let single = format!(
        "        FieldMapping::new(\"{}\", \"{}\", {}){suffix},",
        field.plain_name(),
        field.wire_name,
        field.type_info
    );
    if single.len() <= MAX_WIDTH {
        writeln!(out, "{single}")?;
        return Ok(());
    }
    writeln!(out, "        FieldMapping::new(")?;
    writeln!(out, "            \"{}\",", field.plain_name())?;
    writeln!(out, "            \"{}\",", field.wire_name)?;
    writeln!(out, "            {},", field.type_info)?;
    if field.required {
        writeln!(out, "        )")?;
        writeln!(out, "        .required(),")?;
    } else {
        writeln!(out, "        ),")?;
    }
    Ok(())
}

/// Write a `use path::{...};` line, filling continuation lines up to the
/// column limit.
fn write_use_list(out: &mut String, path: &str, names: &[String]) -> Result<()> {
    let single = match names {
        [name] => format!("use {path}::{name};"),
        _ => format!("use {path}::{{{}}};", names.join(", ")),
    };
    if single.len() <= MAX_WIDTH {
        writeln!(out, "{single}")?;
        return Ok(());
    }
    writeln!(out, "use {path}::{{")?;
    let mut line = String::from("   ");
    for name in names {
        if line.len() + name.len() + 2 > MAX_WIDTH {
            writeln!(out, "{line}")?;
            line = String::from("   ");
        }
        write!(line, " {name},")?;
    }
    writeln!(out, "{line}")?;
    writeln!(out, "}};")?;
    Ok(())
}

/// Write a match arm, one pattern per line when the arm is too long.
fn write_match_arm(out: &mut String, patterns: &[String], value: &str) -> Result<()> {
    let single = format!("            {} => {value},", patterns.join(" | "));
    if single.len() <= MAX_WIDTH {
        writeln!(out, "{single}")?;
        return Ok(());
    }
    for (i, pattern) in patterns.iter().enumerate() {
        if i == 0 {
            writeln!(out, "            {pattern}")?;
        } else {
            writeln!(out, "            | {pattern}")?;
        }
    }
    writeln!(out, "            => {value},")?;
    Ok(())
}

fn status_const(status: u16) -> &'static str {
    match status {
        400 => "http::StatusCode::BAD_REQUEST",
        403 => "http::StatusCode::FORBIDDEN",
        404 => "http::StatusCode::NOT_FOUND",
        409 => "http::StatusCode::CONFLICT",
        429 => "http::StatusCode::TOO_MANY_REQUESTS",
        501 => "http::StatusCode::NOT_IMPLEMENTED",
        503 => "http::StatusCode::SERVICE_UNAVAILABLE",
        _ => "http::StatusCode::INTERNAL_SERVER_ERROR",
    }
}

fn option_str(value: Option<&str>) -> String {
    value.map_or_else(|| "None".to_owned(), |v| format!("Some(\"{v}\")"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, wire: &str, info: &str, required: bool) -> FieldInfo {
        FieldInfo {
            smithy_name: wire.to_owned(),
            rust_name: name.to_owned(),
            wire_name: wire.to_owned(),
            rust_type: "String".to_owned(),
            type_info: info.to_owned(),
            serde_with: None,
            references: Vec::new(),
            required,
            http_binding: None,
        }
    }

    #[test]
    fn test_should_keep_short_mapping_entries_on_one_line() {
        let mut out = String::new();
        write_mapping_entry(&mut out, &field("r#type", "Type", "TypeInfo::String", true)).unwrap();
        assert_eq!(
            out,
            "        FieldMapping::new(\"type\", \"Type\", TypeInfo::String).required(),\n"
        );
    }

    #[test]
    fn test_should_wrap_long_mapping_entries() {
        let mut out = String::new();
        let info = "TypeInfo::Enum(\"AacAudioDescriptionBroadcasterMix\")";
        write_mapping_entry(
            &mut out,
            &field(
                "audio_description_broadcaster_mix",
                "audioDescriptionBroadcasterMix",
                info,
                false,
            ),
        )
        .unwrap();
        assert!(out.starts_with("        FieldMapping::new(\n"));
        assert!(out.ends_with("        ),\n"));
    }

    #[test]
    fn test_should_wrap_serde_attributes_with_helpers() {
        let mut out = String::new();
        let mut created = field("created_at", "createdAt", "TypeInfo::Timestamp", false);
        created.serde_with = Some(crate::shapes::TIMESTAMP_WITH);
        write_serde_attr(&mut out, &created).unwrap();
        assert_eq!(
            out,
            "    #[serde(\n        rename = \"createdAt\",\n        default,\n        with = \"autoboto_core::timestamp::epoch_seconds_option\",\n        skip_serializing_if = \"Option::is_none\"\n    )]\n"
        );
    }

    #[test]
    fn test_should_match_checked_in_waf_sources() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = ServiceConfig::load(&dir.join("services/waf.toml")).unwrap();
        let raw = std::fs::read_to_string(&config.model).unwrap();
        let model: crate::model::SmithyModel = serde_json::from_str(&raw).unwrap();
        let resolved = crate::shapes::resolve_model(&model, &config).unwrap();
        assert_eq!(resolved.operations.len(), 73);
        assert_eq!(resolved.error_structs.len(), 14);

        let files = generate_all(&config, &resolved).unwrap();
        for name in ["lib.rs", "operations.rs", "model.rs"] {
            let checked_in = std::fs::read_to_string(config.output.join(name)).unwrap();
            assert_eq!(files[name], checked_in, "{name} is out of date");
        }
    }

    #[test]
    fn test_should_format_optional_strings() {
        assert_eq!(option_str(None), "None");
        assert_eq!(option_str(Some("AWSWAF_20150824")), "Some(\"AWSWAF_20150824\")");
    }
}
