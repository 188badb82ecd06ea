//! Exception shape and service error integration tests.

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use autoboto_core::{ErrorShape, Shape, ShapeKind};
    use autoboto_mediaconvert_model::error::{
        ConflictException, InternalServerErrorException, MediaConvertError,
        MediaConvertErrorCode, TooManyRequestsException,
    };
    use autoboto_mediaconvert_model::mediaconvert_error;
    use autoboto_waf_model::error::{
        WAFInternalErrorException, WAFStaleDataException, WafError, WafErrorCode,
    };
    use autoboto_waf_model::waf_error;
    use http::StatusCode;
    use serde_json::json;

    use crate::{all_services, from_wire, to_wire};

    #[test]
    fn test_should_carry_message_in_every_exception_shape() {
        for service in all_services() {
            let errors: Vec<_> = service.errors().collect();
            assert!(!errors.is_empty(), "{} declares no errors", service.name);
            for shape in errors {
                assert_eq!(shape.kind, ShapeKind::Error);
                assert_eq!(shape.fields.len(), 1, "{}", shape.name);
                assert_eq!(shape.fields[0].field, "message", "{}", shape.name);
                assert_eq!(shape.fields[0].wire_name, "message", "{}", shape.name);
            }
        }
    }

    #[test]
    fn test_should_decode_exception_body() {
        let err: ConflictException =
            from_wire(json!({ "message": "queue Default is already in use" }));
        assert_eq!(err.message(), Some("queue Default is already in use"));
        assert_eq!(ConflictException::HTTP_STATUS, 409);
        assert_eq!(ConflictException::ERROR_CODE, ConflictException::SHAPE_NAME);

        let empty: WAFStaleDataException = from_wire(json!({}));
        assert_eq!(empty.message(), None);
        assert_eq!(to_wire(&empty), json!({}));
    }

    #[test]
    fn test_should_use_declared_http_status_codes() {
        assert_eq!(TooManyRequestsException::HTTP_STATUS, 429);
        assert_eq!(InternalServerErrorException::HTTP_STATUS, 500);
        assert_eq!(WAFInternalErrorException::HTTP_STATUS, 500);
        assert_eq!(WAFStaleDataException::HTTP_STATUS, 400);

        for code in MediaConvertErrorCode::ALL {
            let status = code.default_status_code();
            assert!(status.is_client_error() || status.is_server_error(), "{code}");
        }
        assert_eq!(
            WafErrorCode::WAFInternalErrorException.default_status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(WafErrorCode::ALL.len(), 14);
    }

    #[test]
    fn test_should_parse_error_codes_in_all_forms() {
        assert_eq!(
            MediaConvertErrorCode::from_code("NotFoundException"),
            Some(MediaConvertErrorCode::NotFoundException)
        );
        assert_eq!(
            MediaConvertErrorCode::from_code("com.amazonaws.mediaconvert#ForbiddenException"),
            Some(MediaConvertErrorCode::ForbiddenException)
        );
        assert_eq!(
            WafErrorCode::from_code("WAFNonexistentItemException:http://internal.amazon.com/"),
            Some(WafErrorCode::WAFNonexistentItemException)
        );
        assert_eq!(WafErrorCode::from_code("ThrottlingException"), None);

        for code in WafErrorCode::ALL {
            assert_eq!(WafErrorCode::from_code(code.error_type()), Some(*code));
        }
    }

    #[test]
    fn test_should_convert_exception_shapes_into_service_errors() {
        let err: MediaConvertError = ConflictException {
            message: Some("queue is busy".to_owned()),
        }
        .into();
        assert_eq!(err.code, MediaConvertErrorCode::ConflictException);
        assert_eq!(err.status_code, StatusCode::CONFLICT);
        assert_eq!(err.message, "queue is busy");
        assert_eq!(err.to_string(), "MediaConvertError(ConflictException): queue is busy");

        let err: WafError = WAFStaleDataException::default().into();
        assert_eq!(err.message, "WAFStaleDataException");
        assert_eq!(err.error_type(), "com.amazonaws.waf#WAFStaleDataException");
    }

    #[test]
    fn test_should_build_errors_with_macros() {
        let err = mediaconvert_error!(BadRequestException, "missing role");
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "missing role");

        let err = waf_error!(WAFLimitsExceededException)
            .with_source(std::io::Error::other("quota store unavailable"));
        assert_eq!(err.code, WafErrorCode::WAFLimitsExceededException);
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("quota store unavailable".to_owned())
        );
    }
}
