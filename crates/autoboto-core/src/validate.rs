//! Static validation of a service model's mapping tables.
//!
//! Generated code pairs every struct with a mapping table. These checks make
//! sure the two agree and that every reference inside a service resolves.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::{AutobotoError, AutobotoResult};
use crate::mapping::{FieldMapping, TypeInfo};
use crate::model::{ServiceModel, ShapeKind};

/// One problem found in a service model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelIssue {
    /// The mapping table and the struct declare different field counts.
    FieldCountMismatch {
        /// Shape name.
        shape: &'static str,
        /// Entries in the mapping table.
        mapped: usize,
        /// Fields the struct declares.
        declared: usize,
    },
    /// A mapped wire name is not declared by the struct.
    UndeclaredWireName {
        /// Shape name.
        shape: &'static str,
        /// Offending wire name.
        wire_name: &'static str,
    },
    /// The struct declares a wire name missing from the mapping table.
    UnmappedField {
        /// Shape name.
        shape: &'static str,
        /// Offending wire name.
        wire_name: &'static str,
    },
    /// A field or wire name is empty.
    EmptyName {
        /// Shape name.
        shape: &'static str,
    },
    /// A field or wire name appears twice in one shape.
    DuplicateName {
        /// Shape name.
        shape: &'static str,
        /// Duplicated name.
        name: &'static str,
    },
    /// A type reference does not resolve within the service.
    DanglingReference {
        /// Shape name.
        shape: &'static str,
        /// Field holding the reference.
        field: &'static str,
        /// The unresolved type.
        target: String,
    },
    /// An enum has no values.
    EmptyEnum {
        /// Enum name.
        name: &'static str,
    },
    /// An enum value is empty, duplicated or does not round-trip.
    BadEnumValue {
        /// Enum name.
        name: &'static str,
        /// Offending value.
        value: &'static str,
    },
    /// An operation references a missing shape or one of the wrong kind.
    BadOperationShape {
        /// Operation name.
        operation: &'static str,
        /// Referenced shape name.
        shape: &'static str,
        /// Kind the reference requires.
        expected: ShapeKind,
    },
    /// An error shape does not carry exactly one `message` member.
    MalformedError {
        /// Shape name.
        shape: &'static str,
    },
    /// A shape, enum or operation name is defined twice.
    DuplicateDefinition {
        /// Duplicated name.
        name: &'static str,
    },
}

impl fmt::Display for ModelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCountMismatch {
                shape,
                mapped,
                declared,
            } => write!(
                f,
                "{shape}: mapping has {mapped} entries but the struct declares {declared} fields"
            ),
            Self::UndeclaredWireName { shape, wire_name } => {
                write!(f, "{shape}: mapped wire name `{wire_name}` is not declared")
            }
            Self::UnmappedField { shape, wire_name } => {
                write!(f, "{shape}: declared field `{wire_name}` has no mapping")
            }
            Self::EmptyName { shape } => write!(f, "{shape}: empty field or wire name"),
            Self::DuplicateName { shape, name } => write!(f, "{shape}: duplicate name `{name}`"),
            Self::DanglingReference {
                shape,
                field,
                target,
            } => write!(f, "{shape}.{field}: unresolved reference to {target}"),
            Self::EmptyEnum { name } => write!(f, "{name}: enum has no values"),
            Self::BadEnumValue { name, value } => {
                write!(f, "{name}: value `{value}` is empty, duplicated or does not round-trip")
            }
            Self::BadOperationShape {
                operation,
                shape,
                expected,
            } => write!(f, "{operation}: `{shape}` is not a known {expected} shape"),
            Self::MalformedError { shape } => {
                write!(f, "{shape}: error shapes carry exactly one `message` member")
            }
            Self::DuplicateDefinition { name } => write!(f, "`{name}` is defined twice"),
        }
    }
}

/// Result of validating one service model.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Service that was validated.
    pub service: &'static str,
    /// Problems found, empty when the model is consistent.
    pub issues: Vec<ModelIssue>,
}

impl ValidationReport {
    /// Returns `true` when no issues were found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Convert into a result, failing with [`AutobotoError::InvalidModel`].
    pub fn into_result(self) -> AutobotoResult<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(AutobotoError::InvalidModel {
                service: self.service,
                issues: self.issues.len(),
            })
        }
    }
}

/// Validate every shape, enum and operation of a service model.
#[must_use]
pub fn validate_service(service: &ServiceModel) -> ValidationReport {
    let mut issues = Vec::new();

    check_unique_definitions(service, &mut issues);
    for shape in service.shapes {
        check_shape_fields(shape.name, shape.fields, shape.declared_wire_fields(), &mut issues);
        check_references(service, shape.name, shape.fields, &mut issues);
        if shape.kind == ShapeKind::Error
            && !(shape.fields.len() == 1 && shape.fields[0].field == "message")
        {
            issues.push(ModelIssue::MalformedError { shape: shape.name });
        }
    }
    check_enums(service, &mut issues);
    check_operations(service, &mut issues);

    for issue in &issues {
        debug!(service = service.name, %issue, "model issue");
    }
    debug!(
        service = service.name,
        shapes = service.shapes.len(),
        enums = service.enums.len(),
        operations = service.operations.len(),
        issues = issues.len(),
        "validated service model"
    );

    ValidationReport {
        service: service.name,
        issues,
    }
}

fn check_unique_definitions(service: &ServiceModel, issues: &mut Vec<ModelIssue>) {
    let mut seen = HashSet::new();
    let names = service
        .shapes
        .iter()
        .map(|s| s.name)
        .chain(service.enums.iter().map(|e| e.name));
    for name in names {
        if !seen.insert(name) {
            issues.push(ModelIssue::DuplicateDefinition { name });
        }
    }

    let mut ops = HashSet::new();
    for op in service.operations {
        if !ops.insert(op.name) {
            issues.push(ModelIssue::DuplicateDefinition { name: op.name });
        }
    }
}

fn check_shape_fields(
    shape: &'static str,
    fields: &'static [FieldMapping],
    declared: &'static [&'static str],
    issues: &mut Vec<ModelIssue>,
) {
    if fields.len() != declared.len() {
        issues.push(ModelIssue::FieldCountMismatch {
            shape,
            mapped: fields.len(),
            declared: declared.len(),
        });
    }

    let mut field_names = HashSet::new();
    let mut wire_names = HashSet::new();
    for mapping in fields {
        if mapping.field.is_empty() || mapping.wire_name.is_empty() {
            issues.push(ModelIssue::EmptyName { shape });
            continue;
        }
        if !field_names.insert(mapping.field) {
            issues.push(ModelIssue::DuplicateName {
                shape,
                name: mapping.field,
            });
        }
        if !wire_names.insert(mapping.wire_name) {
            issues.push(ModelIssue::DuplicateName {
                shape,
                name: mapping.wire_name,
            });
        }
    }

    let declared_set: BTreeSet<&str> = declared.iter().copied().collect();
    for mapping in fields {
        if !mapping.wire_name.is_empty() && !declared_set.contains(mapping.wire_name) {
            issues.push(ModelIssue::UndeclaredWireName {
                shape,
                wire_name: mapping.wire_name,
            });
        }
    }
    for &wire_name in declared {
        if !wire_names.contains(wire_name) {
            issues.push(ModelIssue::UnmappedField { shape, wire_name });
        }
    }
}

fn check_references(
    service: &ServiceModel,
    shape: &'static str,
    fields: &'static [FieldMapping],
    issues: &mut Vec<ModelIssue>,
) {
    for mapping in fields {
        for reference in mapping.type_info.references() {
            let resolved = match reference {
                TypeInfo::Structure(name) => service.shape(name).is_some(),
                TypeInfo::Enum(name) => service.enumeration(name).is_some(),
                _ => true,
            };
            if !resolved {
                issues.push(ModelIssue::DanglingReference {
                    shape,
                    field: mapping.field,
                    target: reference.to_string(),
                });
            }
        }
    }
}

fn check_enums(service: &ServiceModel, issues: &mut Vec<ModelIssue>) {
    for descriptor in service.enums {
        if descriptor.values.is_empty() {
            issues.push(ModelIssue::EmptyEnum {
                name: descriptor.name,
            });
        }
        let mut seen = HashSet::new();
        for &value in descriptor.values {
            if value.is_empty() || !seen.insert(value) || !descriptor.round_trips(value) {
                issues.push(ModelIssue::BadEnumValue {
                    name: descriptor.name,
                    value,
                });
            }
        }
    }
}

fn check_operations(service: &ServiceModel, issues: &mut Vec<ModelIssue>) {
    for op in service.operations {
        let expectations = op
            .input
            .map(|s| (s, ShapeKind::Input))
            .into_iter()
            .chain(op.output.map(|s| (s, ShapeKind::Output)))
            .chain(op.errors.iter().map(|s| (*s, ShapeKind::Error)));
        for (shape, expected) in expectations {
            if service.shape(shape).is_none_or(|s| s.kind != expected) {
                issues.push(ModelIssue::BadOperationShape {
                    operation: op.name,
                    shape,
                    expected,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::model::fixtures::SERVICE;
    use crate::model::{EnumDescriptor, OperationDescriptor, Protocol, ShapeDescriptor};
    use crate::shape::Shape;

    #[test]
    fn test_should_accept_consistent_service() {
        let report = validate_service(&SERVICE);
        assert!(report.is_ok(), "{:?}", report.issues);
        assert!(report.into_result().is_ok());
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Drifted {
        #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(rename = "Extra", skip_serializing_if = "Option::is_none")]
        extra: Option<String>,
    }

    impl Shape for Drifted {
        const SHAPE_NAME: &'static str = "Drifted";
        const FIELD_MAPPINGS: &'static [FieldMapping] = &[
            FieldMapping::new("name", "name", TypeInfo::String),
            FieldMapping::new("target", "Target", TypeInfo::Structure("Missing")),
            FieldMapping::new("target", "Target", TypeInfo::Enum("AlsoMissing")),
        ];
    }

    static BROKEN: ServiceModel = ServiceModel {
        name: "broken",
        title: "Broken",
        api_version: "2020-01-01",
        protocol: Protocol::AwsJson1_1,
        target_prefix: Some("Broken_20200101"),
        shapes: &[
            ShapeDescriptor::of::<Drifted>(ShapeKind::Structure),
            ShapeDescriptor::of::<Drifted>(ShapeKind::Error),
        ],
        enums: &[],
        operations: &[OperationDescriptor {
            name: "Get",
            input: Some("Drifted"),
            output: Some("GetResponse"),
            errors: &[],
            http: None,
        }],
    };

    #[test]
    fn test_should_report_every_kind_of_drift() {
        let report = validate_service(&BROKEN);
        let issues = &report.issues;

        assert!(issues.contains(&ModelIssue::FieldCountMismatch {
            shape: "Drifted",
            mapped: 3,
            declared: 2,
        }));
        assert!(issues.contains(&ModelIssue::UndeclaredWireName {
            shape: "Drifted",
            wire_name: "name",
        }));
        assert!(issues.contains(&ModelIssue::UnmappedField {
            shape: "Drifted",
            wire_name: "Extra",
        }));
        assert!(issues.contains(&ModelIssue::DuplicateName {
            shape: "Drifted",
            name: "Target",
        }));
        assert!(issues.contains(&ModelIssue::DanglingReference {
            shape: "Drifted",
            field: "target",
            target: "Missing".to_owned(),
        }));
        assert!(issues.contains(&ModelIssue::DuplicateDefinition { name: "Drifted" }));
        assert!(issues.contains(&ModelIssue::MalformedError { shape: "Drifted" }));
        assert!(issues.iter().any(|i| matches!(
            i,
            ModelIssue::BadOperationShape {
                shape: "GetResponse",
                expected: ShapeKind::Output,
                ..
            }
        )));

        let err = report.into_result().unwrap_err();
        assert!(matches!(err, AutobotoError::InvalidModel { service: "broken", .. }));
    }

    crate::shape_enum! {
        /// Enum whose second value repeats the first.
        pub enum Doubled {
            First => "SAME",
            Second => "SAME",
        }
    }

    #[test]
    fn test_should_flag_enum_values_that_do_not_round_trip() {
        static DOUBLED: ServiceModel = ServiceModel {
            name: "doubled",
            title: "Doubled",
            api_version: "2020-01-01",
            protocol: Protocol::RestJson1,
            target_prefix: None,
            shapes: &[],
            enums: &[EnumDescriptor::of::<Doubled>()],
            operations: &[],
        };
        let report = validate_service(&DOUBLED);
        assert_eq!(
            report.issues,
            vec![ModelIssue::BadEnumValue {
                name: "Doubled",
                value: "SAME",
            }]
        );
    }
}
