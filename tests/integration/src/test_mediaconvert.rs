//! MediaConvert wire-format integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use autoboto_core::{Shape, ShapeKind, TypeInfo, missing_required};
    use autoboto_mediaconvert_model::input::{CreateJobInput, ListJobsInput, UntagResourceInput};
    use autoboto_mediaconvert_model::output::{GetJobOutput, ListQueuesOutput};
    use autoboto_mediaconvert_model::types::{
        Input, InputTimecodeSource, JobSettings, JobStatus, Order, OutputGroupType, QueueStatus,
        Type,
    };
    use autoboto_mediaconvert_model::{MediaConvertOperation, SERVICE_MODEL};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::{from_wire, init_tracing, to_wire, wire_keys};

    fn get_job_response() -> serde_json::Value {
        json!({
            "job": {
                "arn": "arn:aws:mediaconvert:us-west-2:111122223333:jobs/1522107000000-abc123",
                "id": "1522107000000-abc123",
                "role": "arn:aws:iam::111122223333:role/MediaConvertRole",
                "queue": "arn:aws:mediaconvert:us-west-2:111122223333:queues/Default",
                "status": "COMPLETE",
                "createdAt": 1_522_107_000,
                "timing": {
                    "submitTime": 1_522_107_000,
                    "startTime": 1_522_107_001.5,
                    "finishTime": 1_522_107_060
                },
                "userMetadata": { "project": "launch" },
                "settings": {
                    "inputs": [
                        { "fileInput": "s3://media-in/clip.mp4", "timecodeSource": "ZEROBASED" }
                    ],
                    "outputGroups": [{
                        "name": "File Group",
                        "outputGroupSettings": {
                            "type": "FILE_GROUP_SETTINGS",
                            "fileGroupSettings": { "destination": "s3://media-out/" }
                        }
                    }]
                }
            }
        })
    }

    #[test]
    fn test_should_decode_camel_case_job() {
        init_tracing();
        let output: GetJobOutput = from_wire(get_job_response());
        let job = output.job.expect("job");

        assert_eq!(job.id.as_deref(), Some("1522107000000-abc123"));
        assert_eq!(job.status, Some(JobStatus::Complete));
        assert_eq!(
            job.created_at,
            Some(Utc.timestamp_opt(1_522_107_000, 0).unwrap())
        );

        let timing = job.timing.expect("timing");
        assert_eq!(
            timing.start_time,
            Some(Utc.timestamp_millis_opt(1_522_107_001_500).unwrap())
        );

        let settings = job.settings.expect("settings");
        let inputs = settings.inputs.expect("inputs");
        assert_eq!(inputs[0].timecode_source, Some(InputTimecodeSource::Zerobased));
        let group = &settings.output_groups.expect("output groups")[0];
        let group_settings = group.output_group_settings.as_ref().expect("group settings");
        assert_eq!(group_settings.r#type, Some(OutputGroupType::FileGroupSettings));
        assert_eq!(
            group_settings
                .file_group_settings
                .as_ref()
                .and_then(|s| s.destination.as_deref()),
            Some("s3://media-out/")
        );
        assert_eq!(
            job.user_metadata.unwrap().get("project").map(String::as_str),
            Some("launch")
        );
    }

    #[test]
    fn test_should_round_trip_job_through_wire_json() {
        let decoded: GetJobOutput = from_wire(get_job_response());
        let reencoded = to_wire(&decoded);
        assert_eq!(reencoded, get_job_response());
    }

    #[test]
    fn test_should_encode_only_set_members() {
        let input = CreateJobInput {
            role: Some("arn:aws:iam::111122223333:role/MediaConvertRole".to_owned()),
            settings: Some(JobSettings {
                inputs: Some(vec![Input {
                    file_input: Some("s3://media-in/clip.mp4".to_owned()),
                    ..Default::default()
                }]),
                ..Default::default()
            }),
            user_metadata: Some(HashMap::from([("team".to_owned(), "video".to_owned())])),
            ..Default::default()
        };

        assert_eq!(wire_keys(&input), vec!["role", "settings", "userMetadata"]);
        assert_eq!(
            to_wire(&input)["settings"],
            json!({ "inputs": [{ "fileInput": "s3://media-in/clip.mp4" }] })
        );
        assert!(missing_required(&input).is_empty());
    }

    #[test]
    fn test_should_report_missing_required_create_job_members() {
        let input = CreateJobInput {
            queue: Some("Default".to_owned()),
            ..Default::default()
        };
        assert_eq!(missing_required(&input), vec!["role", "settings"]);
    }

    #[test]
    fn test_should_keep_unknown_enum_values_verbatim() {
        let output: ListQueuesOutput = from_wire(json!({
            "queues": [
                { "name": "Default", "status": "ACTIVE", "type": "SYSTEM" },
                { "name": "Night", "status": "DRAINING", "type": "CUSTOM" }
            ]
        }));
        let queues = output.queues.expect("queues");

        assert_eq!(queues[0].status, Some(QueueStatus::Active));
        assert_eq!(queues[0].r#type, Some(Type::System));
        assert_eq!(queues[1].status, Some(QueueStatus::Unknown("DRAINING".to_owned())));
        assert_eq!(to_wire(&queues[1])["status"], json!("DRAINING"));
    }

    #[test]
    fn test_should_compare_enums_with_wire_strings() {
        assert_eq!(JobStatus::Progressing, "PROGRESSING");
        assert_eq!(Order::from("DESCENDING"), Order::Descending);
        assert!(!Order::from("sideways").is_known());
    }

    #[test]
    fn test_should_map_query_and_label_members() {
        let list = ListJobsInput {
            max_results: Some(20),
            order: Some(Order::Ascending),
            status: Some(JobStatus::Error),
            ..Default::default()
        };
        assert_eq!(
            to_wire(&list),
            json!({ "maxResults": 20, "order": "ASCENDING", "status": "ERROR" })
        );
        assert_eq!(
            UntagResourceInput::mapping_for("tag_keys").map(|m| m.type_info),
            Some(TypeInfo::List(&TypeInfo::String))
        );
    }

    #[test]
    fn test_should_describe_rest_bindings() {
        let create = MediaConvertOperation::CreateJob.descriptor();
        let http = create.http.expect("http binding");
        assert_eq!((http.method, http.uri, http.code), ("POST", "/2017-08-29/jobs", 201));
        assert_eq!(create.input, Some("CreateJobRequest"));

        let untag = SERVICE_MODEL.require_operation("UntagResource").unwrap();
        assert_eq!(untag.http.map(|h| h.method), Some("PUT"));
        assert!(SERVICE_MODEL.target_prefix.is_none());
    }

    #[test]
    fn test_should_align_operation_descriptors_with_variants() {
        assert_eq!(MediaConvertOperation::ALL.len(), SERVICE_MODEL.operations.len());
        for op in MediaConvertOperation::ALL {
            let descriptor = op.descriptor();
            tracing::debug!(operation = op.as_str(), "checking descriptor");
            assert_eq!(descriptor.name, op.as_str());
            let listed = SERVICE_MODEL.require_operation(op.as_str()).unwrap();
            assert!(std::ptr::eq(listed, descriptor), "{op}");
        }
    }

    #[test]
    fn test_should_classify_request_and_response_shapes() {
        assert_eq!(
            SERVICE_MODEL.shape("CreateJobRequest").map(|s| s.kind),
            Some(ShapeKind::Input)
        );
        assert_eq!(
            SERVICE_MODEL.shape("GetJobResponse").map(|s| s.kind),
            Some(ShapeKind::Output)
        );
        assert_eq!(
            SERVICE_MODEL.shape("Job").map(|s| s.kind),
            Some(ShapeKind::Structure)
        );
        assert_eq!(CreateJobInput::SHAPE_NAME, "CreateJobRequest");
    }
}
