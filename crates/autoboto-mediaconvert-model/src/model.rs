//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{EnumDescriptor, Protocol, ServiceModel, ShapeDescriptor, ShapeKind};

use crate::operations::OPERATIONS;
use crate::{error, input, output, types};

/// Static description of the AWS Elemental MediaConvert model.
pub static SERVICE_MODEL: ServiceModel = ServiceModel {
    name: "mediaconvert",
    title: "AWS Elemental MediaConvert",
    api_version: "2017-08-29",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    shapes: &[
        ShapeDescriptor::of::<types::AacSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Ac3Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AiffSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AncillarySourceSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AudioCodecSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AudioDescription>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AudioNormalizationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AudioSelector>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AudioSelectorGroup>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::AvailBlanking>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::BurninDestinationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CaptionDescription>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CaptionDescriptionPreset>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CaptionDestinationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CaptionSelector>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CaptionSourceSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ChannelMapping>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CmafEncryptionSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::CmafGroupSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ColorCorrector>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ContainerSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DashIsoEncryptionSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DashIsoGroupSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Deinterlacer>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DvbNitSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DvbSdtSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DvbSubDestinationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DvbSubSourceSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::DvbTdtSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Eac3Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::EmbeddedSourceSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Endpoint>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::F4vSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::FileGroupSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::FileSourceSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::FrameCaptureSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::H264QvbrSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::H264Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::H265QvbrSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::H265Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Hdr10Metadata>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::HlsCaptionLanguageMapping>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::HlsEncryptionSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::HlsGroupSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::HlsSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Id3Insertion>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ImageInserter>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Input>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::InputClipping>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::InputDecryptionSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::InputTemplate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::InsertableImage>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Job>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::JobSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::JobTemplate>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::JobTemplateSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::M2tsSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::M3u8Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::MovSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Mp2Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Mp4Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Mpeg2Settings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::MsSmoothEncryptionSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::MsSmoothGroupSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::NielsenConfiguration>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::NoiseReducer>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::NoiseReducerFilterSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::NoiseReducerSpatialFilterSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Output>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::OutputChannelMapping>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::OutputDetail>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::OutputGroup>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::OutputGroupDetail>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::OutputGroupSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::OutputSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Preset>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::PresetSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ProresSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Queue>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Rectangle>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::RemixSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ReservationPlan>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ReservationPlanSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::ResourceTags>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SccDestinationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::SpekeKeyProvider>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::StaticKeyProvider>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TeletextDestinationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TeletextSourceSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TimecodeBurnin>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TimecodeConfig>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TimedMetadataInsertion>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::Timing>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::TtmlDestinationSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::VideoCodecSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::VideoDescription>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::VideoDetail>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::VideoPreprocessor>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::VideoSelector>(ShapeKind::Structure),
        ShapeDescriptor::of::<types::WavSettings>(ShapeKind::Structure),
        ShapeDescriptor::of::<input::AssociateCertificateInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CancelJobInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateJobInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateJobTemplateInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreatePresetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::CreateQueueInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteJobTemplateInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeletePresetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DeleteQueueInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DescribeEndpointsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::DisassociateCertificateInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetJobInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetJobTemplateInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetPresetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::GetQueueInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListJobTemplatesInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListJobsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListPresetsInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListQueuesInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::ListTagsForResourceInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::TagResourceInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UntagResourceInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateJobTemplateInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdatePresetInput>(ShapeKind::Input),
        ShapeDescriptor::of::<input::UpdateQueueInput>(ShapeKind::Input),
        ShapeDescriptor::of::<output::AssociateCertificateOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CancelJobOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateJobOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateJobTemplateOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreatePresetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::CreateQueueOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteJobTemplateOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeletePresetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DeleteQueueOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DescribeEndpointsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::DisassociateCertificateOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetJobOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetJobTemplateOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetPresetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::GetQueueOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListJobTemplatesOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListJobsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListPresetsOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListQueuesOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::ListTagsForResourceOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::TagResourceOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UntagResourceOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateJobTemplateOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdatePresetOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<output::UpdateQueueOutput>(ShapeKind::Output),
        ShapeDescriptor::of::<error::BadRequestException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::ConflictException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::ForbiddenException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::InternalServerErrorException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::NotFoundException>(ShapeKind::Error),
        ShapeDescriptor::of::<error::TooManyRequestsException>(ShapeKind::Error),
    ],
    enums: &[
        EnumDescriptor::of::<types::AacAudioDescriptionBroadcasterMix>(),
        EnumDescriptor::of::<types::AacCodecProfile>(),
        EnumDescriptor::of::<types::AacCodingMode>(),
        EnumDescriptor::of::<types::AacRateControlMode>(),
        EnumDescriptor::of::<types::AacRawFormat>(),
        EnumDescriptor::of::<types::AacSpecification>(),
        EnumDescriptor::of::<types::AacVbrQuality>(),
        EnumDescriptor::of::<types::Ac3BitstreamMode>(),
        EnumDescriptor::of::<types::Ac3CodingMode>(),
        EnumDescriptor::of::<types::Ac3DynamicRangeCompressionProfile>(),
        EnumDescriptor::of::<types::Ac3LfeFilter>(),
        EnumDescriptor::of::<types::Ac3MetadataControl>(),
        EnumDescriptor::of::<types::AfdSignaling>(),
        EnumDescriptor::of::<types::AntiAlias>(),
        EnumDescriptor::of::<types::AudioCodec>(),
        EnumDescriptor::of::<types::AudioDefaultSelection>(),
        EnumDescriptor::of::<types::AudioLanguageCodeControl>(),
        EnumDescriptor::of::<types::AudioNormalizationAlgorithm>(),
        EnumDescriptor::of::<types::AudioNormalizationAlgorithmControl>(),
        EnumDescriptor::of::<types::AudioNormalizationLoudnessLogging>(),
        EnumDescriptor::of::<types::AudioNormalizationPeakCalculation>(),
        EnumDescriptor::of::<types::AudioSelectorType>(),
        EnumDescriptor::of::<types::AudioTypeControl>(),
        EnumDescriptor::of::<types::BurninSubtitleAlignment>(),
        EnumDescriptor::of::<types::BurninSubtitleBackgroundColor>(),
        EnumDescriptor::of::<types::BurninSubtitleFontColor>(),
        EnumDescriptor::of::<types::BurninSubtitleOutlineColor>(),
        EnumDescriptor::of::<types::BurninSubtitleShadowColor>(),
        EnumDescriptor::of::<types::BurninSubtitleTeletextSpacing>(),
        EnumDescriptor::of::<types::CaptionDestinationType>(),
        EnumDescriptor::of::<types::CaptionSourceType>(),
        EnumDescriptor::of::<types::CmafClientCache>(),
        EnumDescriptor::of::<types::CmafCodecSpecification>(),
        EnumDescriptor::of::<types::CmafEncryptionType>(),
        EnumDescriptor::of::<types::CmafInitializationVectorInManifest>(),
        EnumDescriptor::of::<types::CmafKeyProviderType>(),
        EnumDescriptor::of::<types::CmafManifestCompression>(),
        EnumDescriptor::of::<types::CmafManifestDurationFormat>(),
        EnumDescriptor::of::<types::CmafSegmentControl>(),
        EnumDescriptor::of::<types::CmafStreamInfResolution>(),
        EnumDescriptor::of::<types::CmafWriteDASHManifest>(),
        EnumDescriptor::of::<types::CmafWriteHLSManifest>(),
        EnumDescriptor::of::<types::ColorMetadata>(),
        EnumDescriptor::of::<types::ColorSpace>(),
        EnumDescriptor::of::<types::ColorSpaceConversion>(),
        EnumDescriptor::of::<types::ColorSpaceUsage>(),
        EnumDescriptor::of::<types::Commitment>(),
        EnumDescriptor::of::<types::ContainerType>(),
        EnumDescriptor::of::<types::DashIsoHbbtvCompliance>(),
        EnumDescriptor::of::<types::DashIsoSegmentControl>(),
        EnumDescriptor::of::<types::DecryptionMode>(),
        EnumDescriptor::of::<types::DeinterlaceAlgorithm>(),
        EnumDescriptor::of::<types::DeinterlacerControl>(),
        EnumDescriptor::of::<types::DeinterlacerMode>(),
        EnumDescriptor::of::<types::DescribeEndpointsMode>(),
        EnumDescriptor::of::<types::DropFrameTimecode>(),
        EnumDescriptor::of::<types::DvbSubtitleAlignment>(),
        EnumDescriptor::of::<types::DvbSubtitleBackgroundColor>(),
        EnumDescriptor::of::<types::DvbSubtitleFontColor>(),
        EnumDescriptor::of::<types::DvbSubtitleOutlineColor>(),
        EnumDescriptor::of::<types::DvbSubtitleShadowColor>(),
        EnumDescriptor::of::<types::DvbSubtitleTeletextSpacing>(),
        EnumDescriptor::of::<types::Eac3AttenuationControl>(),
        EnumDescriptor::of::<types::Eac3BitstreamMode>(),
        EnumDescriptor::of::<types::Eac3CodingMode>(),
        EnumDescriptor::of::<types::Eac3DcFilter>(),
        EnumDescriptor::of::<types::Eac3DynamicRangeCompressionLine>(),
        EnumDescriptor::of::<types::Eac3DynamicRangeCompressionRf>(),
        EnumDescriptor::of::<types::Eac3LfeControl>(),
        EnumDescriptor::of::<types::Eac3LfeFilter>(),
        EnumDescriptor::of::<types::Eac3MetadataControl>(),
        EnumDescriptor::of::<types::Eac3PassthroughControl>(),
        EnumDescriptor::of::<types::Eac3PhaseControl>(),
        EnumDescriptor::of::<types::Eac3StereoDownmix>(),
        EnumDescriptor::of::<types::Eac3SurroundExMode>(),
        EnumDescriptor::of::<types::Eac3SurroundMode>(),
        EnumDescriptor::of::<types::EmbeddedConvert608To708>(),
        EnumDescriptor::of::<types::F4vMoovPlacement>(),
        EnumDescriptor::of::<types::FileSourceConvert608To708>(),
        EnumDescriptor::of::<types::FontScript>(),
        EnumDescriptor::of::<types::H264AdaptiveQuantization>(),
        EnumDescriptor::of::<types::H264CodecLevel>(),
        EnumDescriptor::of::<types::H264CodecProfile>(),
        EnumDescriptor::of::<types::H264EntropyEncoding>(),
        EnumDescriptor::of::<types::H264FieldEncoding>(),
        EnumDescriptor::of::<types::H264FlickerAdaptiveQuantization>(),
        EnumDescriptor::of::<types::H264FramerateControl>(),
        EnumDescriptor::of::<types::H264FramerateConversionAlgorithm>(),
        EnumDescriptor::of::<types::H264GopBReference>(),
        EnumDescriptor::of::<types::H264GopSizeUnits>(),
        EnumDescriptor::of::<types::H264InterlaceMode>(),
        EnumDescriptor::of::<types::H264ParControl>(),
        EnumDescriptor::of::<types::H264QualityTuningLevel>(),
        EnumDescriptor::of::<types::H264RateControlMode>(),
        EnumDescriptor::of::<types::H264RepeatPps>(),
        EnumDescriptor::of::<types::H264SceneChangeDetect>(),
        EnumDescriptor::of::<types::H264SlowPal>(),
        EnumDescriptor::of::<types::H264SpatialAdaptiveQuantization>(),
        EnumDescriptor::of::<types::H264Syntax>(),
        EnumDescriptor::of::<types::H264Telecine>(),
        EnumDescriptor::of::<types::H264TemporalAdaptiveQuantization>(),
        EnumDescriptor::of::<types::H264UnregisteredSeiTimecode>(),
        EnumDescriptor::of::<types::H265AdaptiveQuantization>(),
        EnumDescriptor::of::<types::H265AlternateTransferFunctionSei>(),
        EnumDescriptor::of::<types::H265CodecLevel>(),
        EnumDescriptor::of::<types::H265CodecProfile>(),
        EnumDescriptor::of::<types::H265FlickerAdaptiveQuantization>(),
        EnumDescriptor::of::<types::H265FramerateControl>(),
        EnumDescriptor::of::<types::H265FramerateConversionAlgorithm>(),
        EnumDescriptor::of::<types::H265GopBReference>(),
        EnumDescriptor::of::<types::H265GopSizeUnits>(),
        EnumDescriptor::of::<types::H265InterlaceMode>(),
        EnumDescriptor::of::<types::H265ParControl>(),
        EnumDescriptor::of::<types::H265QualityTuningLevel>(),
        EnumDescriptor::of::<types::H265RateControlMode>(),
        EnumDescriptor::of::<types::H265SampleAdaptiveOffsetFilterMode>(),
        EnumDescriptor::of::<types::H265SceneChangeDetect>(),
        EnumDescriptor::of::<types::H265SlowPal>(),
        EnumDescriptor::of::<types::H265SpatialAdaptiveQuantization>(),
        EnumDescriptor::of::<types::H265Telecine>(),
        EnumDescriptor::of::<types::H265TemporalAdaptiveQuantization>(),
        EnumDescriptor::of::<types::H265TemporalIds>(),
        EnumDescriptor::of::<types::H265Tiles>(),
        EnumDescriptor::of::<types::H265UnregisteredSeiTimecode>(),
        EnumDescriptor::of::<types::H265WriteMp4PackagingType>(),
        EnumDescriptor::of::<types::HlsAdMarkers>(),
        EnumDescriptor::of::<types::HlsAudioTrackType>(),
        EnumDescriptor::of::<types::HlsCaptionLanguageSetting>(),
        EnumDescriptor::of::<types::HlsClientCache>(),
        EnumDescriptor::of::<types::HlsCodecSpecification>(),
        EnumDescriptor::of::<types::HlsDirectoryStructure>(),
        EnumDescriptor::of::<types::HlsEncryptionType>(),
        EnumDescriptor::of::<types::HlsIFrameOnlyManifest>(),
        EnumDescriptor::of::<types::HlsInitializationVectorInManifest>(),
        EnumDescriptor::of::<types::HlsKeyProviderType>(),
        EnumDescriptor::of::<types::HlsManifestCompression>(),
        EnumDescriptor::of::<types::HlsManifestDurationFormat>(),
        EnumDescriptor::of::<types::HlsOutputSelection>(),
        EnumDescriptor::of::<types::HlsProgramDateTime>(),
        EnumDescriptor::of::<types::HlsSegmentControl>(),
        EnumDescriptor::of::<types::HlsStreamInfResolution>(),
        EnumDescriptor::of::<types::HlsTimedMetadataId3Frame>(),
        EnumDescriptor::of::<types::InputDeblockFilter>(),
        EnumDescriptor::of::<types::InputDenoiseFilter>(),
        EnumDescriptor::of::<types::InputFilterEnable>(),
        EnumDescriptor::of::<types::InputPsiControl>(),
        EnumDescriptor::of::<types::InputTimecodeSource>(),
        EnumDescriptor::of::<types::JobStatus>(),
        EnumDescriptor::of::<types::JobTemplateListBy>(),
        EnumDescriptor::of::<types::LanguageCode>(),
        EnumDescriptor::of::<types::M2tsAudioBufferModel>(),
        EnumDescriptor::of::<types::M2tsBufferModel>(),
        EnumDescriptor::of::<types::M2tsEbpAudioInterval>(),
        EnumDescriptor::of::<types::M2tsEbpPlacement>(),
        EnumDescriptor::of::<types::M2tsEsRateInPes>(),
        EnumDescriptor::of::<types::M2tsNielsenId3>(),
        EnumDescriptor::of::<types::M2tsPcrControl>(),
        EnumDescriptor::of::<types::M2tsRateMode>(),
        EnumDescriptor::of::<types::M2tsScte35Source>(),
        EnumDescriptor::of::<types::M2tsSegmentationMarkers>(),
        EnumDescriptor::of::<types::M2tsSegmentationStyle>(),
        EnumDescriptor::of::<types::M3u8NielsenId3>(),
        EnumDescriptor::of::<types::M3u8PcrControl>(),
        EnumDescriptor::of::<types::M3u8Scte35Source>(),
        EnumDescriptor::of::<types::MovClapAtom>(),
        EnumDescriptor::of::<types::MovCslgAtom>(),
        EnumDescriptor::of::<types::MovMpeg2FourCCControl>(),
        EnumDescriptor::of::<types::MovPaddingControl>(),
        EnumDescriptor::of::<types::MovReference>(),
        EnumDescriptor::of::<types::Mp4CslgAtom>(),
        EnumDescriptor::of::<types::Mp4FreeSpaceBox>(),
        EnumDescriptor::of::<types::Mp4MoovPlacement>(),
        EnumDescriptor::of::<types::Mpeg2AdaptiveQuantization>(),
        EnumDescriptor::of::<types::Mpeg2CodecLevel>(),
        EnumDescriptor::of::<types::Mpeg2CodecProfile>(),
        EnumDescriptor::of::<types::Mpeg2FramerateControl>(),
        EnumDescriptor::of::<types::Mpeg2FramerateConversionAlgorithm>(),
        EnumDescriptor::of::<types::Mpeg2GopSizeUnits>(),
        EnumDescriptor::of::<types::Mpeg2InterlaceMode>(),
        EnumDescriptor::of::<types::Mpeg2IntraDcPrecision>(),
        EnumDescriptor::of::<types::Mpeg2ParControl>(),
        EnumDescriptor::of::<types::Mpeg2QualityTuningLevel>(),
        EnumDescriptor::of::<types::Mpeg2RateControlMode>(),
        EnumDescriptor::of::<types::Mpeg2SceneChangeDetect>(),
        EnumDescriptor::of::<types::Mpeg2SlowPal>(),
        EnumDescriptor::of::<types::Mpeg2SpatialAdaptiveQuantization>(),
        EnumDescriptor::of::<types::Mpeg2Syntax>(),
        EnumDescriptor::of::<types::Mpeg2Telecine>(),
        EnumDescriptor::of::<types::Mpeg2TemporalAdaptiveQuantization>(),
        EnumDescriptor::of::<types::MsSmoothAudioDeduplication>(),
        EnumDescriptor::of::<types::MsSmoothManifestEncoding>(),
        EnumDescriptor::of::<types::NoiseReducerFilter>(),
        EnumDescriptor::of::<types::Order>(),
        EnumDescriptor::of::<types::OutputGroupType>(),
        EnumDescriptor::of::<types::OutputSdt>(),
        EnumDescriptor::of::<types::PresetListBy>(),
        EnumDescriptor::of::<types::PricingPlan>(),
        EnumDescriptor::of::<types::ProresCodecProfile>(),
        EnumDescriptor::of::<types::ProresFramerateControl>(),
        EnumDescriptor::of::<types::ProresFramerateConversionAlgorithm>(),
        EnumDescriptor::of::<types::ProresInterlaceMode>(),
        EnumDescriptor::of::<types::ProresParControl>(),
        EnumDescriptor::of::<types::ProresSlowPal>(),
        EnumDescriptor::of::<types::ProresTelecine>(),
        EnumDescriptor::of::<types::QueueListBy>(),
        EnumDescriptor::of::<types::QueueStatus>(),
        EnumDescriptor::of::<types::RenewalType>(),
        EnumDescriptor::of::<types::ReservationPlanStatus>(),
        EnumDescriptor::of::<types::RespondToAfd>(),
        EnumDescriptor::of::<types::ScalingBehavior>(),
        EnumDescriptor::of::<types::SccDestinationFramerate>(),
        EnumDescriptor::of::<types::TimecodeBurninPosition>(),
        EnumDescriptor::of::<types::TimecodeSource>(),
        EnumDescriptor::of::<types::TimedMetadata>(),
        EnumDescriptor::of::<types::TtmlStylePassthrough>(),
        EnumDescriptor::of::<types::Type>(),
        EnumDescriptor::of::<types::VideoCodec>(),
        EnumDescriptor::of::<types::VideoTimecodeInsertion>(),
        EnumDescriptor::of::<types::WavFormat>(),
    ],
    operations: &OPERATIONS,
};
