//! WAF wire-format integration tests.

#[cfg(test)]
mod tests {
    use autoboto_core::{Shape, TypeInfo, missing_required};
    use autoboto_waf_model::input::{CreateByteMatchSetInput, UpdateByteMatchSetInput};
    use autoboto_waf_model::operations::TARGET_PREFIX;
    use autoboto_waf_model::output::{
        GetByteMatchSetOutput, GetChangeTokenStatusOutput, GetSampledRequestsOutput,
    };
    use autoboto_waf_model::types::{
        ByteMatchSetUpdate, ByteMatchTuple, ChangeAction, ChangeTokenStatus, FieldToMatch,
        MatchFieldType, PositionalConstraint, Predicate, PredicateType, TextTransformation,
    };
    use autoboto_waf_model::{SERVICE_MODEL, WafOperation};
    use bytes::Bytes;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::{from_wire, init_tracing, to_wire, wire_keys};

    fn bad_bot_tuple() -> ByteMatchTuple {
        ByteMatchTuple {
            field_to_match: Some(FieldToMatch {
                r#type: Some(MatchFieldType::Header),
                data: Some("User-Agent".to_owned()),
            }),
            positional_constraint: Some(PositionalConstraint::Contains),
            target_string: Some(Bytes::from_static(b"badbot")),
            text_transformation: Some(TextTransformation::Lowercase),
        }
    }

    #[test]
    fn test_should_encode_pascal_case_update_with_base64_target() {
        init_tracing();
        let input = UpdateByteMatchSetInput {
            byte_match_set_id: Some("e5f3a1b2-0000-4c3d-9e8f-123456789abc".to_owned()),
            change_token: Some("abcd1234-aaaa-bbbb-cccc-0123456789ab".to_owned()),
            updates: Some(vec![ByteMatchSetUpdate {
                action: Some(ChangeAction::Insert),
                byte_match_tuple: Some(bad_bot_tuple()),
            }]),
        };

        assert_eq!(
            to_wire(&input),
            json!({
                "ByteMatchSetId": "e5f3a1b2-0000-4c3d-9e8f-123456789abc",
                "ChangeToken": "abcd1234-aaaa-bbbb-cccc-0123456789ab",
                "Updates": [{
                    "Action": "INSERT",
                    "ByteMatchTuple": {
                        "FieldToMatch": { "Type": "HEADER", "Data": "User-Agent" },
                        "PositionalConstraint": "CONTAINS",
                        "TargetString": "YmFkYm90",
                        "TextTransformation": "LOWERCASE"
                    }
                }]
            })
        );
        assert!(missing_required(&input).is_empty());
    }

    #[test]
    fn test_should_decode_base64_target_string() {
        let output: GetByteMatchSetOutput = from_wire(json!({
            "ByteMatchSet": {
                "ByteMatchSetId": "e5f3a1b2",
                "Name": "bad-bots",
                "ByteMatchTuples": [{
                    "FieldToMatch": { "Type": "HEADER", "Data": "User-Agent" },
                    "PositionalConstraint": "CONTAINS",
                    "TargetString": "YmFkYm90",
                    "TextTransformation": "LOWERCASE"
                }]
            }
        }));

        let set = output.byte_match_set.expect("byte match set");
        assert_eq!(set.name.as_deref(), Some("bad-bots"));
        assert_eq!(set.byte_match_tuples.expect("tuples"), vec![bad_bot_tuple()]);
    }

    #[test]
    fn test_should_reject_invalid_base64_target_string() {
        let result = serde_json::from_value::<ByteMatchTuple>(json!({
            "TargetString": "not base64!"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_should_decode_sampled_requests_with_timestamps() {
        let output: GetSampledRequestsOutput = from_wire(json!({
            "PopulationSize": 1200,
            "TimeWindow": { "StartTime": 1_541_030_400, "EndTime": 1_541_041_200 },
            "SampledRequests": [{
                "Action": "BLOCK",
                "Weight": 1,
                "Timestamp": 1_541_030_512.25,
                "Request": {
                    "ClientIP": "192.0.2.44",
                    "Country": "US",
                    "URI": "/login",
                    "Method": "POST",
                    "HTTPVersion": "HTTP/1.1",
                    "Headers": [{ "Name": "Host", "Value": "example.com" }]
                }
            }]
        }));

        let window = output.time_window.expect("time window");
        assert_eq!(
            window.start_time,
            Some(Utc.timestamp_opt(1_541_030_400, 0).unwrap())
        );
        let sample = &output.sampled_requests.expect("samples")[0];
        assert_eq!(
            sample.timestamp,
            Some(Utc.timestamp_millis_opt(1_541_030_512_250).unwrap())
        );
        let request = sample.request.as_ref().expect("request");
        assert_eq!(request.client_ip.as_deref(), Some("192.0.2.44"));
        assert_eq!(request.http_version.as_deref(), Some("HTTP/1.1"));
        assert_eq!(
            to_wire(sample)["Timestamp"],
            json!(1_541_030_512.25)
        );
    }

    #[test]
    fn test_should_map_keyword_type_member() {
        let predicate = Predicate {
            data_id: Some("ipset-1".to_owned()),
            negated: Some(false),
            r#type: Some(PredicateType::IpMatch),
        };
        assert_eq!(wire_keys(&predicate), vec!["DataId", "Negated", "Type"]);
        assert_eq!(to_wire(&predicate)["Type"], json!("IPMatch"));
        assert_eq!(Predicate::mapping_for("r#type"), None);
        assert_eq!(
            Predicate::mapping_for_wire("Type").map(|m| (m.field, m.type_info)),
            Some(("type", TypeInfo::Enum("PredicateType")))
        );
    }

    #[test]
    fn test_should_preserve_unknown_change_token_status() {
        let output: GetChangeTokenStatusOutput =
            from_wire(json!({ "ChangeTokenStatus": "ROLLING_BACK" }));
        let status = output.change_token_status.as_ref().expect("status");
        tracing::debug!(%status, "decoded change token status");
        assert!(!status.is_known());
        assert_eq!(status, &ChangeTokenStatus::Unknown("ROLLING_BACK".to_owned()));
        assert_eq!(to_wire(&output), json!({ "ChangeTokenStatus": "ROLLING_BACK" }));
    }

    #[test]
    fn test_should_report_missing_change_token() {
        let input = CreateByteMatchSetInput {
            name: Some("bad-bots".to_owned()),
            ..Default::default()
        };
        assert_eq!(missing_required(&input), vec!["ChangeToken"]);
        assert_eq!(CreateByteMatchSetInput::SHAPE_NAME, "CreateByteMatchSetRequest");
    }

    #[test]
    fn test_should_resolve_operations_from_target_header() {
        assert_eq!(TARGET_PREFIX, "AWSWAF_20150824");
        assert_eq!(
            WafOperation::from_target("AWSWAF_20150824.CreateWebACL"),
            Some(WafOperation::CreateWebACL)
        );
        assert_eq!(WafOperation::from_target("AWSWAF_20150824CreateWebACL"), None);
        assert_eq!(WafOperation::from_target("AWSWAF_Regional.CreateWebACL"), None);
        assert_eq!(
            WafOperation::GetChangeToken.target(),
            "AWSWAF_20150824.GetChangeToken"
        );
        for op in WafOperation::ALL {
            assert_eq!(WafOperation::from_target(&op.target()), Some(*op));
            assert!(op.descriptor().http.is_none());
        }
    }

    #[test]
    fn test_should_align_operation_descriptors_with_variants() {
        for op in WafOperation::ALL {
            let descriptor = op.descriptor();
            assert_eq!(descriptor.name, op.as_str());
            let listed = SERVICE_MODEL.require_operation(op.as_str()).unwrap();
            assert!(std::ptr::eq(listed, descriptor), "{op}");
        }
    }

    #[test]
    fn test_should_list_seventy_three_operations() {
        assert_eq!(WafOperation::ALL.len(), 73);
        assert_eq!(SERVICE_MODEL.operations.len(), 73);
        assert_eq!(SERVICE_MODEL.target_prefix, Some(TARGET_PREFIX));
    }
}
