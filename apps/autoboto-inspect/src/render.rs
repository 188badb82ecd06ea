//! Serializable views over service descriptors.
//!
//! Every view renders either as one or more plain-text lines or as JSON via
//! its `Serialize` implementation.

use std::io::{self, Write};

use anyhow::Result;
use autoboto_core::{
    EnumDescriptor, FieldMapping, OperationDescriptor, ServiceModel, ShapeDescriptor,
    ValidationReport,
};
use serde::Serialize;

use crate::config::OutputFormat;

/// Plain-text rendering of a view.
pub trait RenderText {
    /// Write the view as text lines.
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: RenderText> RenderText for Vec<T> {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        for item in self {
            item.render_text(out)?;
        }
        Ok(())
    }
}

/// Write `view` to `out` in the requested format.
pub fn emit<T: RenderText + Serialize>(
    view: &T,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => view.render_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Summary line for one service model.
#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub name: &'static str,
    pub title: &'static str,
    pub api_version: &'static str,
    pub protocol: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_prefix: Option<&'static str>,
    pub shapes: usize,
    pub enums: usize,
    pub operations: usize,
}

impl ServiceView {
    pub fn new(service: &ServiceModel) -> Self {
        Self {
            name: service.name,
            title: service.title,
            api_version: service.api_version,
            protocol: service.protocol.as_str(),
            target_prefix: service.target_prefix,
            shapes: service.shapes.len(),
            enums: service.enums.len(),
            operations: service.operations.len(),
        }
    }
}

impl RenderText for ServiceView {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{:<14} {:<12} {}  {} ({} shapes, {} enums, {} operations)",
            self.name,
            self.protocol,
            self.api_version,
            self.title,
            self.shapes,
            self.enums,
            self.operations
        )
    }
}

/// One row of a shape listing.
#[derive(Debug, Serialize)]
pub struct ShapeRow {
    pub name: &'static str,
    pub kind: &'static str,
    pub fields: usize,
}

impl ShapeRow {
    pub fn new(shape: &ShapeDescriptor) -> Self {
        Self {
            name: shape.name,
            kind: shape.kind.as_str(),
            fields: shape.fields.len(),
        }
    }
}

impl RenderText for ShapeRow {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:<9} {} ({} fields)", self.kind, self.name, self.fields)
    }
}

/// Full mapping table of one shape.
#[derive(Debug, Serialize)]
pub struct ShapeView {
    pub service: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub fields: Vec<FieldView>,
}

impl ShapeView {
    pub fn new(service: &ServiceModel, shape: &ShapeDescriptor) -> Self {
        Self {
            service: service.name,
            name: shape.name,
            kind: shape.kind.as_str(),
            fields: shape.fields.iter().map(FieldView::new).collect(),
        }
    }
}

impl RenderText for ShapeView {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}.{} ({})", self.service, self.name, self.kind)?;
        for field in &self.fields {
            let marker = if field.required { " [required]" } else { "" };
            writeln!(
                out,
                "  {} ({}): {}{marker}",
                field.wire_name, field.field, field.type_name
            )?;
        }
        Ok(())
    }
}

/// One mapping table entry.
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub field: &'static str,
    pub wire_name: &'static str,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
}

impl FieldView {
    fn new(mapping: &FieldMapping) -> Self {
        Self {
            field: mapping.field,
            wire_name: mapping.wire_name,
            type_name: mapping.type_info.to_string(),
            required: mapping.required,
        }
    }
}

/// One row of an enum listing.
#[derive(Debug, Serialize)]
pub struct EnumRow {
    pub name: &'static str,
    pub values: usize,
}

impl EnumRow {
    pub fn new(descriptor: &EnumDescriptor) -> Self {
        Self {
            name: descriptor.name,
            values: descriptor.values.len(),
        }
    }
}

impl RenderText for EnumRow {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} ({} values)", self.name, self.values)
    }
}

/// Known values of one enum.
#[derive(Debug, Serialize)]
pub struct EnumView {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl EnumView {
    pub fn new(descriptor: &EnumDescriptor) -> Self {
        Self {
            name: descriptor.name,
            values: descriptor.values,
        }
    }
}

impl RenderText for EnumView {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.name)?;
        for value in self.values {
            writeln!(out, "  {value}")?;
        }
        Ok(())
    }
}

/// One operation with its wire binding.
#[derive(Debug, Serialize)]
pub struct OperationView {
    pub name: &'static str,
    pub input: Option<&'static str>,
    pub output: Option<&'static str>,
    pub errors: &'static [&'static str],
    pub binding: String,
}

impl OperationView {
    pub fn new(service: &ServiceModel, op: &OperationDescriptor) -> Self {
        let binding = match (op.http, service.target_prefix) {
            (Some(http), _) => format!("{} {} -> {}", http.method, http.uri, http.code),
            (None, Some(prefix)) => format!("X-Amz-Target: {prefix}.{}", op.name),
            (None, None) => String::from("POST /"),
        };
        Self {
            name: op.name,
            input: op.input,
            output: op.output,
            errors: op.errors,
            binding,
        }
    }
}

impl RenderText for OperationView {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:<40} {}", self.name, self.binding)
    }
}

/// Validation outcome of one service.
#[derive(Debug, Serialize)]
pub struct CheckView {
    pub service: &'static str,
    pub issues: Vec<String>,
}

impl CheckView {
    pub fn new(report: &ValidationReport) -> Self {
        Self {
            service: report.service,
            issues: report.issues.iter().map(ToString::to_string).collect(),
        }
    }
}

impl RenderText for CheckView {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.issues.is_empty() {
            return writeln!(out, "{}: ok", self.service);
        }
        writeln!(out, "{}: {} issue(s)", self.service, self.issues.len())?;
        for issue in &self.issues {
            writeln!(out, "  {issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use autoboto_core::{ModelIssue, validate_service};

    use super::*;

    fn text<T: RenderText>(view: &T) -> String {
        let mut buf = Vec::new();
        view.render_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_should_render_http_binding_for_rest_operations() {
        let service = &autoboto_mediaconvert_model::SERVICE_MODEL;
        let op = service.operation("CreateJob").unwrap();
        let view = OperationView::new(service, op);
        assert_eq!(view.binding, "POST /2017-08-29/jobs -> 201");
    }

    #[test]
    fn test_should_render_target_binding_for_json_rpc_operations() {
        let service = &autoboto_waf_model::SERVICE_MODEL;
        let op = service.operation("GetChangeToken").unwrap();
        let view = OperationView::new(service, op);
        assert_eq!(view.binding, "X-Amz-Target: AWSWAF_20150824.GetChangeToken");
    }

    #[test]
    fn test_should_mark_required_fields_in_shape_text() {
        let service = &autoboto_waf_model::SERVICE_MODEL;
        let shape = service.shape("CreateByteMatchSetRequest").unwrap();
        let rendered = text(&ShapeView::new(service, shape));
        assert!(rendered.starts_with("waf.CreateByteMatchSetRequest (input)"));
        assert!(rendered.contains("  ChangeToken (change_token): String [required]"));
    }

    #[test]
    fn test_should_serialize_field_type_under_type_key() {
        let service = &autoboto_waf_model::SERVICE_MODEL;
        let shape = service.shape("TimeWindow").unwrap();
        let json = serde_json::to_value(ShapeView::new(service, shape)).unwrap();
        assert_eq!(json["fields"][0]["type"], "DateTime<Utc>");
    }

    #[test]
    fn test_should_render_check_outcomes() {
        let ok = CheckView::new(&validate_service(&autoboto_waf_model::SERVICE_MODEL));
        assert_eq!(text(&ok), "waf: ok\n");

        let bad = CheckView {
            service: "waf",
            issues: vec![ModelIssue::EmptyEnum { name: "RateKey" }.to_string()],
        };
        assert_eq!(text(&bad), "waf: 1 issue(s)\n  RateKey: enum has no values\n");
    }

    #[test]
    fn test_should_emit_json_with_trailing_newline() {
        let mut buf = Vec::new();
        let view = EnumView::new(
            autoboto_waf_model::SERVICE_MODEL
                .enumeration("ChangeAction")
                .unwrap(),
        );
        emit(&view, OutputFormat::Json, &mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.ends_with("}\n"));
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["values"], serde_json::json!(["DELETE", "INSERT"]));
    }
}
