//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{HttpTrait, OperationDescriptor};

/// All supported AWS Elemental MediaConvert operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaConvertOperation {
    /// The AssociateCertificate operation.
    AssociateCertificate,
    /// The CancelJob operation.
    CancelJob,
    /// The CreateJob operation.
    CreateJob,
    /// The CreateJobTemplate operation.
    CreateJobTemplate,
    /// The CreatePreset operation.
    CreatePreset,
    /// The CreateQueue operation.
    CreateQueue,
    /// The DeleteJobTemplate operation.
    DeleteJobTemplate,
    /// The DeletePreset operation.
    DeletePreset,
    /// The DeleteQueue operation.
    DeleteQueue,
    /// The DescribeEndpoints operation.
    DescribeEndpoints,
    /// The DisassociateCertificate operation.
    DisassociateCertificate,
    /// The GetJob operation.
    GetJob,
    /// The GetJobTemplate operation.
    GetJobTemplate,
    /// The GetPreset operation.
    GetPreset,
    /// The GetQueue operation.
    GetQueue,
    /// The ListJobTemplates operation.
    ListJobTemplates,
    /// The ListJobs operation.
    ListJobs,
    /// The ListPresets operation.
    ListPresets,
    /// The ListQueues operation.
    ListQueues,
    /// The ListTagsForResource operation.
    ListTagsForResource,
    /// The TagResource operation.
    TagResource,
    /// The UntagResource operation.
    UntagResource,
    /// The UpdateJobTemplate operation.
    UpdateJobTemplate,
    /// The UpdatePreset operation.
    UpdatePreset,
    /// The UpdateQueue operation.
    UpdateQueue,
}

impl MediaConvertOperation {
    /// Every operation, in name order.
    pub const ALL: &'static [Self] = &[
        Self::AssociateCertificate,
        Self::CancelJob,
        Self::CreateJob,
        Self::CreateJobTemplate,
        Self::CreatePreset,
        Self::CreateQueue,
        Self::DeleteJobTemplate,
        Self::DeletePreset,
        Self::DeleteQueue,
        Self::DescribeEndpoints,
        Self::DisassociateCertificate,
        Self::GetJob,
        Self::GetJobTemplate,
        Self::GetPreset,
        Self::GetQueue,
        Self::ListJobTemplates,
        Self::ListJobs,
        Self::ListPresets,
        Self::ListQueues,
        Self::ListTagsForResource,
        Self::TagResource,
        Self::UntagResource,
        Self::UpdateJobTemplate,
        Self::UpdatePreset,
        Self::UpdateQueue,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssociateCertificate => "AssociateCertificate",
            Self::CancelJob => "CancelJob",
            Self::CreateJob => "CreateJob",
            Self::CreateJobTemplate => "CreateJobTemplate",
            Self::CreatePreset => "CreatePreset",
            Self::CreateQueue => "CreateQueue",
            Self::DeleteJobTemplate => "DeleteJobTemplate",
            Self::DeletePreset => "DeletePreset",
            Self::DeleteQueue => "DeleteQueue",
            Self::DescribeEndpoints => "DescribeEndpoints",
            Self::DisassociateCertificate => "DisassociateCertificate",
            Self::GetJob => "GetJob",
            Self::GetJobTemplate => "GetJobTemplate",
            Self::GetPreset => "GetPreset",
            Self::GetQueue => "GetQueue",
            Self::ListJobTemplates => "ListJobTemplates",
            Self::ListJobs => "ListJobs",
            Self::ListPresets => "ListPresets",
            Self::ListQueues => "ListQueues",
            Self::ListTagsForResource => "ListTagsForResource",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
            Self::UpdateJobTemplate => "UpdateJobTemplate",
            Self::UpdatePreset => "UpdatePreset",
            Self::UpdateQueue => "UpdateQueue",
        }
    }

    /// Parse an operation name string into a `MediaConvertOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AssociateCertificate" => Some(Self::AssociateCertificate),
            "CancelJob" => Some(Self::CancelJob),
            "CreateJob" => Some(Self::CreateJob),
            "CreateJobTemplate" => Some(Self::CreateJobTemplate),
            "CreatePreset" => Some(Self::CreatePreset),
            "CreateQueue" => Some(Self::CreateQueue),
            "DeleteJobTemplate" => Some(Self::DeleteJobTemplate),
            "DeletePreset" => Some(Self::DeletePreset),
            "DeleteQueue" => Some(Self::DeleteQueue),
            "DescribeEndpoints" => Some(Self::DescribeEndpoints),
            "DisassociateCertificate" => Some(Self::DisassociateCertificate),
            "GetJob" => Some(Self::GetJob),
            "GetJobTemplate" => Some(Self::GetJobTemplate),
            "GetPreset" => Some(Self::GetPreset),
            "GetQueue" => Some(Self::GetQueue),
            "ListJobTemplates" => Some(Self::ListJobTemplates),
            "ListJobs" => Some(Self::ListJobs),
            "ListPresets" => Some(Self::ListPresets),
            "ListQueues" => Some(Self::ListQueues),
            "ListTagsForResource" => Some(Self::ListTagsForResource),
            "TagResource" => Some(Self::TagResource),
            "UntagResource" => Some(Self::UntagResource),
            "UpdateJobTemplate" => Some(Self::UpdateJobTemplate),
            "UpdatePreset" => Some(Self::UpdatePreset),
            "UpdateQueue" => Some(Self::UpdateQueue),
            _ => None,
        }
    }

    /// Returns the static descriptor of this operation.
    #[must_use]
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        &OPERATIONS[*self as usize]
    }
}

impl std::fmt::Display for MediaConvertOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptors of every operation, indexed by `MediaConvertOperation as usize`.
pub static OPERATIONS: [OperationDescriptor; 25] = [
    OperationDescriptor {
        name: "AssociateCertificate",
        input: Some("AssociateCertificateRequest"),
        output: Some("AssociateCertificateResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/certificates",
            code: 201,
        }),
    },
    OperationDescriptor {
        name: "CancelJob",
        input: Some("CancelJobRequest"),
        output: Some("CancelJobResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "DELETE",
            uri: "/2017-08-29/jobs/{Id}",
            code: 202,
        }),
    },
    OperationDescriptor {
        name: "CreateJob",
        input: Some("CreateJobRequest"),
        output: Some("CreateJobResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/jobs",
            code: 201,
        }),
    },
    OperationDescriptor {
        name: "CreateJobTemplate",
        input: Some("CreateJobTemplateRequest"),
        output: Some("CreateJobTemplateResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/jobTemplates",
            code: 201,
        }),
    },
    OperationDescriptor {
        name: "CreatePreset",
        input: Some("CreatePresetRequest"),
        output: Some("CreatePresetResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/presets",
            code: 201,
        }),
    },
    OperationDescriptor {
        name: "CreateQueue",
        input: Some("CreateQueueRequest"),
        output: Some("CreateQueueResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/queues",
            code: 201,
        }),
    },
    OperationDescriptor {
        name: "DeleteJobTemplate",
        input: Some("DeleteJobTemplateRequest"),
        output: Some("DeleteJobTemplateResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "DELETE",
            uri: "/2017-08-29/jobTemplates/{Name}",
            code: 202,
        }),
    },
    OperationDescriptor {
        name: "DeletePreset",
        input: Some("DeletePresetRequest"),
        output: Some("DeletePresetResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "DELETE",
            uri: "/2017-08-29/presets/{Name}",
            code: 202,
        }),
    },
    OperationDescriptor {
        name: "DeleteQueue",
        input: Some("DeleteQueueRequest"),
        output: Some("DeleteQueueResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "DELETE",
            uri: "/2017-08-29/queues/{Name}",
            code: 202,
        }),
    },
    OperationDescriptor {
        name: "DescribeEndpoints",
        input: Some("DescribeEndpointsRequest"),
        output: Some("DescribeEndpointsResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/endpoints",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "DisassociateCertificate",
        input: Some("DisassociateCertificateRequest"),
        output: Some("DisassociateCertificateResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "DELETE",
            uri: "/2017-08-29/certificates/{Arn}",
            code: 202,
        }),
    },
    OperationDescriptor {
        name: "GetJob",
        input: Some("GetJobRequest"),
        output: Some("GetJobResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/jobs/{Id}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "GetJobTemplate",
        input: Some("GetJobTemplateRequest"),
        output: Some("GetJobTemplateResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/jobTemplates/{Name}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "GetPreset",
        input: Some("GetPresetRequest"),
        output: Some("GetPresetResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/presets/{Name}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "GetQueue",
        input: Some("GetQueueRequest"),
        output: Some("GetQueueResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/queues/{Name}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "ListJobTemplates",
        input: Some("ListJobTemplatesRequest"),
        output: Some("ListJobTemplatesResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/jobTemplates",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "ListJobs",
        input: Some("ListJobsRequest"),
        output: Some("ListJobsResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/jobs",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "ListPresets",
        input: Some("ListPresetsRequest"),
        output: Some("ListPresetsResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/presets",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "ListQueues",
        input: Some("ListQueuesRequest"),
        output: Some("ListQueuesResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/queues",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "ListTagsForResource",
        input: Some("ListTagsForResourceRequest"),
        output: Some("ListTagsForResourceResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "GET",
            uri: "/2017-08-29/tags/{Arn}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "TagResource",
        input: Some("TagResourceRequest"),
        output: Some("TagResourceResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "POST",
            uri: "/2017-08-29/tags",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "UntagResource",
        input: Some("UntagResourceRequest"),
        output: Some("UntagResourceResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "PUT",
            uri: "/2017-08-29/tags/{Arn}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "UpdateJobTemplate",
        input: Some("UpdateJobTemplateRequest"),
        output: Some("UpdateJobTemplateResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "PUT",
            uri: "/2017-08-29/jobTemplates/{Name}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "UpdatePreset",
        input: Some("UpdatePresetRequest"),
        output: Some("UpdatePresetResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "PUT",
            uri: "/2017-08-29/presets/{Name}",
            code: 200,
        }),
    },
    OperationDescriptor {
        name: "UpdateQueue",
        input: Some("UpdateQueueRequest"),
        output: Some("UpdateQueueResponse"),
        errors: &[
            "BadRequestException",
            "InternalServerErrorException",
            "ForbiddenException",
            "NotFoundException",
            "TooManyRequestsException",
            "ConflictException",
        ],
        http: Some(HttpTrait {
            method: "PUT",
            uri: "/2017-08-29/queues/{Name}",
            code: 200,
        }),
    },
];
