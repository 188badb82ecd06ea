//! Static validation of the bundled service models.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use autoboto_core::{ShapeKind, find_service, validate_service};

    use crate::{all_services, init_tracing};

    #[test]
    fn test_should_validate_every_service_model() {
        init_tracing();
        for service in all_services() {
            let report = validate_service(service);
            tracing::info!(
                service = service.name,
                shapes = service.shapes.len(),
                issues = report.issues.len(),
                "validated service model"
            );
            assert!(
                report.is_ok(),
                "{} has issues:\n{}",
                service.name,
                report
                    .issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            );
            assert!(report.into_result().is_ok());
        }
    }

    #[test]
    fn test_should_map_every_declared_field() {
        for service in all_services() {
            for shape in service.shapes {
                let declared: HashSet<_> = shape.declared_wire_fields().iter().collect();
                let mapped: HashSet<_> = shape.fields.iter().map(|m| &m.wire_name).collect();
                assert_eq!(declared, mapped, "{}.{}", service.name, shape.name);
            }
        }
    }

    #[test]
    fn test_should_pair_every_operation_with_io_shapes() {
        for service in all_services() {
            for op in service.operations {
                let input = op.input.and_then(|name| service.shape(name));
                let output = op.output.and_then(|name| service.shape(name));
                assert_eq!(input.map(|s| s.kind), Some(ShapeKind::Input), "{}", op.name);
                assert_eq!(output.map(|s| s.kind), Some(ShapeKind::Output), "{}", op.name);
                for error in op.errors {
                    assert_eq!(
                        service.shape(error).map(|s| s.kind),
                        Some(ShapeKind::Error),
                        "{} -> {error}",
                        op.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_should_round_trip_every_enum_value() {
        for service in all_services() {
            for descriptor in service.enums {
                assert!(!descriptor.values.is_empty(), "{}", descriptor.name);
                for value in descriptor.values {
                    assert!(
                        descriptor.round_trips(value),
                        "{}::{value} does not round-trip",
                        descriptor.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_should_keep_protocol_specific_naming() {
        let mediaconvert = find_service(&all_services(), "mediaconvert").unwrap();
        let waf = find_service(&all_services(), "WAF").unwrap();

        let job = mediaconvert.require_shape("Job").unwrap();
        assert!(
            job.fields
                .iter()
                .all(|m| m.wire_name.starts_with(|c: char| c.is_ascii_lowercase()))
        );

        let rule = waf.require_shape("Rule").unwrap();
        assert!(
            rule.fields
                .iter()
                .all(|m| m.wire_name.starts_with(|c: char| c.is_ascii_uppercase()))
        );
    }
}
