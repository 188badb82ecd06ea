//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::collections::HashMap;

use autoboto_core::{FieldMapping, Shape, TypeInfo, shape_enum};
use serde::{Deserialize, Serialize};

shape_enum! {
    /// AWS Elemental MediaConvert `AacAudioDescriptionBroadcasterMix` enum.
    pub enum AacAudioDescriptionBroadcasterMix {
        BroadcasterMixedAd => "BROADCASTER_MIXED_AD",
        Normal => "NORMAL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AacCodecProfile` enum.
    pub enum AacCodecProfile {
        Hev1 => "HEV1",
        Hev2 => "HEV2",
        Lc => "LC",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AacCodingMode` enum.
    pub enum AacCodingMode {
        AdReceiverMix => "AD_RECEIVER_MIX",
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode11 => "CODING_MODE_1_1",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode51 => "CODING_MODE_5_1",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AacRateControlMode` enum.
    pub enum AacRateControlMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AacRawFormat` enum.
    pub enum AacRawFormat {
        LatmLoas => "LATM_LOAS",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AacSpecification` enum.
    pub enum AacSpecification {
        Mpeg2 => "MPEG2",
        Mpeg4 => "MPEG4",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AacVbrQuality` enum.
    pub enum AacVbrQuality {
        High => "HIGH",
        Low => "LOW",
        MediumHigh => "MEDIUM_HIGH",
        MediumLow => "MEDIUM_LOW",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Ac3BitstreamMode` enum.
    pub enum Ac3BitstreamMode {
        Commentary => "COMMENTARY",
        CompleteMain => "COMPLETE_MAIN",
        Dialogue => "DIALOGUE",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        MusicAndEffects => "MUSIC_AND_EFFECTS",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
        VoiceOver => "VOICE_OVER",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Ac3CodingMode` enum.
    pub enum Ac3CodingMode {
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode11 => "CODING_MODE_1_1",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode32Lfe => "CODING_MODE_3_2_LFE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Ac3DynamicRangeCompressionProfile` enum.
    pub enum Ac3DynamicRangeCompressionProfile {
        FilmStandard => "FILM_STANDARD",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Ac3LfeFilter` enum.
    pub enum Ac3LfeFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Ac3MetadataControl` enum.
    pub enum Ac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AfdSignaling` enum.
    pub enum AfdSignaling {
        Auto => "AUTO",
        Fixed => "FIXED",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AntiAlias` enum.
    pub enum AntiAlias {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioCodec` enum.
    pub enum AudioCodec {
        Aac => "AAC",
        Ac3 => "AC3",
        Aiff => "AIFF",
        Eac3 => "EAC3",
        Mp2 => "MP2",
        Passthrough => "PASSTHROUGH",
        Wav => "WAV",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioDefaultSelection` enum.
    pub enum AudioDefaultSelection {
        Default => "DEFAULT",
        NotDefault => "NOT_DEFAULT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioLanguageCodeControl` enum.
    pub enum AudioLanguageCodeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioNormalizationAlgorithm` enum.
    pub enum AudioNormalizationAlgorithm {
        ItuBs17701 => "ITU_BS_1770_1",
        ItuBs17702 => "ITU_BS_1770_2",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioNormalizationAlgorithmControl` enum.
    pub enum AudioNormalizationAlgorithmControl {
        CorrectAudio => "CORRECT_AUDIO",
        MeasureOnly => "MEASURE_ONLY",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioNormalizationLoudnessLogging` enum.
    pub enum AudioNormalizationLoudnessLogging {
        DontLog => "DONT_LOG",
        Log => "LOG",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioNormalizationPeakCalculation` enum.
    pub enum AudioNormalizationPeakCalculation {
        None => "NONE",
        TruePeak => "TRUE_PEAK",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioSelectorType` enum.
    pub enum AudioSelectorType {
        LanguageCode => "LANGUAGE_CODE",
        Pid => "PID",
        Track => "TRACK",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `AudioTypeControl` enum.
    pub enum AudioTypeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `BurninSubtitleAlignment` enum.
    pub enum BurninSubtitleAlignment {
        Centered => "CENTERED",
        Left => "LEFT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `BurninSubtitleBackgroundColor` enum.
    pub enum BurninSubtitleBackgroundColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `BurninSubtitleFontColor` enum.
    pub enum BurninSubtitleFontColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `BurninSubtitleOutlineColor` enum.
    pub enum BurninSubtitleOutlineColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `BurninSubtitleShadowColor` enum.
    pub enum BurninSubtitleShadowColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `BurninSubtitleTeletextSpacing` enum.
    pub enum BurninSubtitleTeletextSpacing {
        FixedGrid => "FIXED_GRID",
        Proportional => "PROPORTIONAL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CaptionDestinationType` enum.
    pub enum CaptionDestinationType {
        BurnIn => "BURN_IN",
        DvbSub => "DVB_SUB",
        Embedded => "EMBEDDED",
        Scc => "SCC",
        Srt => "SRT",
        Teletext => "TELETEXT",
        Ttml => "TTML",
        Webvtt => "WEBVTT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CaptionSourceType` enum.
    pub enum CaptionSourceType {
        Ancillary => "ANCILLARY",
        DvbSub => "DVB_SUB",
        Embedded => "EMBEDDED",
        NullSource => "NULL_SOURCE",
        Scc => "SCC",
        Srt => "SRT",
        Stl => "STL",
        Teletext => "TELETEXT",
        Ttml => "TTML",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafClientCache` enum.
    pub enum CmafClientCache {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafCodecSpecification` enum.
    pub enum CmafCodecSpecification {
        Rfc4281 => "RFC_4281",
        Rfc6381 => "RFC_6381",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafEncryptionType` enum.
    pub enum CmafEncryptionType {
        SampleAes => "SAMPLE_AES",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafInitializationVectorInManifest` enum.
    pub enum CmafInitializationVectorInManifest {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafKeyProviderType` enum.
    pub enum CmafKeyProviderType {
        StaticKey => "STATIC_KEY",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafManifestCompression` enum.
    pub enum CmafManifestCompression {
        Gzip => "GZIP",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafManifestDurationFormat` enum.
    pub enum CmafManifestDurationFormat {
        FloatingPoint => "FLOATING_POINT",
        Integer => "INTEGER",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafSegmentControl` enum.
    pub enum CmafSegmentControl {
        SegmentedFiles => "SEGMENTED_FILES",
        SingleFile => "SINGLE_FILE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafStreamInfResolution` enum.
    pub enum CmafStreamInfResolution {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafWriteDASHManifest` enum.
    pub enum CmafWriteDASHManifest {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `CmafWriteHLSManifest` enum.
    pub enum CmafWriteHLSManifest {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ColorMetadata` enum.
    pub enum ColorMetadata {
        Ignore => "IGNORE",
        Insert => "INSERT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ColorSpace` enum.
    pub enum ColorSpace {
        Follow => "FOLLOW",
        Hdr10 => "HDR10",
        Hlg2020 => "HLG_2020",
        Rec601 => "REC_601",
        Rec709 => "REC_709",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ColorSpaceConversion` enum.
    pub enum ColorSpaceConversion {
        Force601 => "FORCE_601",
        Force709 => "FORCE_709",
        ForceHdr10 => "FORCE_HDR10",
        ForceHlg2020 => "FORCE_HLG_2020",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ColorSpaceUsage` enum.
    pub enum ColorSpaceUsage {
        Fallback => "FALLBACK",
        Force => "FORCE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Commitment` enum.
    pub enum Commitment {
        OneYear => "ONE_YEAR",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ContainerType` enum.
    pub enum ContainerType {
        Cmfc => "CMFC",
        F4v => "F4V",
        Ismv => "ISMV",
        M2ts => "M2TS",
        M3u8 => "M3U8",
        Mov => "MOV",
        Mp4 => "MP4",
        Mpd => "MPD",
        Mxf => "MXF",
        Raw => "RAW",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DashIsoHbbtvCompliance` enum.
    pub enum DashIsoHbbtvCompliance {
        Hbbtv15 => "HBBTV_1_5",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DashIsoSegmentControl` enum.
    pub enum DashIsoSegmentControl {
        SegmentedFiles => "SEGMENTED_FILES",
        SingleFile => "SINGLE_FILE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DecryptionMode` enum.
    pub enum DecryptionMode {
        AesCbc => "AES_CBC",
        AesCtr => "AES_CTR",
        AesGcm => "AES_GCM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DeinterlaceAlgorithm` enum.
    pub enum DeinterlaceAlgorithm {
        Blend => "BLEND",
        BlendTicker => "BLEND_TICKER",
        Interpolate => "INTERPOLATE",
        InterpolateTicker => "INTERPOLATE_TICKER",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DeinterlacerControl` enum.
    pub enum DeinterlacerControl {
        ForceAllFrames => "FORCE_ALL_FRAMES",
        Normal => "NORMAL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DeinterlacerMode` enum.
    pub enum DeinterlacerMode {
        Adaptive => "ADAPTIVE",
        Deinterlace => "DEINTERLACE",
        InverseTelecine => "INVERSE_TELECINE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DescribeEndpointsMode` enum.
    pub enum DescribeEndpointsMode {
        Default => "DEFAULT",
        GetOnly => "GET_ONLY",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DropFrameTimecode` enum.
    pub enum DropFrameTimecode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DvbSubtitleAlignment` enum.
    pub enum DvbSubtitleAlignment {
        Centered => "CENTERED",
        Left => "LEFT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DvbSubtitleBackgroundColor` enum.
    pub enum DvbSubtitleBackgroundColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DvbSubtitleFontColor` enum.
    pub enum DvbSubtitleFontColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DvbSubtitleOutlineColor` enum.
    pub enum DvbSubtitleOutlineColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DvbSubtitleShadowColor` enum.
    pub enum DvbSubtitleShadowColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `DvbSubtitleTeletextSpacing` enum.
    pub enum DvbSubtitleTeletextSpacing {
        FixedGrid => "FIXED_GRID",
        Proportional => "PROPORTIONAL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3AttenuationControl` enum.
    pub enum Eac3AttenuationControl {
        Attenuate3Db => "ATTENUATE_3_DB",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3BitstreamMode` enum.
    pub enum Eac3BitstreamMode {
        Commentary => "COMMENTARY",
        CompleteMain => "COMPLETE_MAIN",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3CodingMode` enum.
    pub enum Eac3CodingMode {
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode32 => "CODING_MODE_3_2",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3DcFilter` enum.
    pub enum Eac3DcFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3DynamicRangeCompressionLine` enum.
    pub enum Eac3DynamicRangeCompressionLine {
        FilmLight => "FILM_LIGHT",
        FilmStandard => "FILM_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        None => "NONE",
        Speech => "SPEECH",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3DynamicRangeCompressionRf` enum.
    pub enum Eac3DynamicRangeCompressionRf {
        FilmLight => "FILM_LIGHT",
        FilmStandard => "FILM_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        None => "NONE",
        Speech => "SPEECH",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3LfeControl` enum.
    pub enum Eac3LfeControl {
        Lfe => "LFE",
        NoLfe => "NO_LFE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3LfeFilter` enum.
    pub enum Eac3LfeFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3MetadataControl` enum.
    pub enum Eac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3PassthroughControl` enum.
    pub enum Eac3PassthroughControl {
        NoPassthrough => "NO_PASSTHROUGH",
        WhenPossible => "WHEN_POSSIBLE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3PhaseControl` enum.
    pub enum Eac3PhaseControl {
        NoShift => "NO_SHIFT",
        Shift90Degrees => "SHIFT_90_DEGREES",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3StereoDownmix` enum.
    pub enum Eac3StereoDownmix {
        Dpl2 => "DPL2",
        LoRo => "LO_RO",
        LtRt => "LT_RT",
        NotIndicated => "NOT_INDICATED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3SurroundExMode` enum.
    pub enum Eac3SurroundExMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        NotIndicated => "NOT_INDICATED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Eac3SurroundMode` enum.
    pub enum Eac3SurroundMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        NotIndicated => "NOT_INDICATED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `EmbeddedConvert608To708` enum.
    pub enum EmbeddedConvert608To708 {
        Disabled => "DISABLED",
        Upconvert => "UPCONVERT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `F4vMoovPlacement` enum.
    pub enum F4vMoovPlacement {
        Normal => "NORMAL",
        ProgressiveDownload => "PROGRESSIVE_DOWNLOAD",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `FileSourceConvert608To708` enum.
    pub enum FileSourceConvert608To708 {
        Disabled => "DISABLED",
        Upconvert => "UPCONVERT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `FontScript` enum.
    pub enum FontScript {
        Automatic => "AUTOMATIC",
        Hans => "HANS",
        Hant => "HANT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264AdaptiveQuantization` enum.
    pub enum H264AdaptiveQuantization {
        High => "HIGH",
        Higher => "HIGHER",
        Low => "LOW",
        Max => "MAX",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264CodecLevel` enum.
    pub enum H264CodecLevel {
        Auto => "AUTO",
        Level1 => "LEVEL_1",
        Level11 => "LEVEL_1_1",
        Level12 => "LEVEL_1_2",
        Level13 => "LEVEL_1_3",
        Level2 => "LEVEL_2",
        Level21 => "LEVEL_2_1",
        Level22 => "LEVEL_2_2",
        Level3 => "LEVEL_3",
        Level31 => "LEVEL_3_1",
        Level32 => "LEVEL_3_2",
        Level4 => "LEVEL_4",
        Level41 => "LEVEL_4_1",
        Level42 => "LEVEL_4_2",
        Level5 => "LEVEL_5",
        Level51 => "LEVEL_5_1",
        Level52 => "LEVEL_5_2",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264CodecProfile` enum.
    pub enum H264CodecProfile {
        Baseline => "BASELINE",
        High => "HIGH",
        High10bit => "HIGH_10BIT",
        High422 => "HIGH_422",
        High42210bit => "HIGH_422_10BIT",
        Main => "MAIN",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264EntropyEncoding` enum.
    pub enum H264EntropyEncoding {
        Cabac => "CABAC",
        Cavlc => "CAVLC",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264FieldEncoding` enum.
    pub enum H264FieldEncoding {
        ForceField => "FORCE_FIELD",
        Paff => "PAFF",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264FlickerAdaptiveQuantization` enum.
    pub enum H264FlickerAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264FramerateControl` enum.
    pub enum H264FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264FramerateConversionAlgorithm` enum.
    pub enum H264FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264GopBReference` enum.
    pub enum H264GopBReference {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264GopSizeUnits` enum.
    pub enum H264GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264InterlaceMode` enum.
    pub enum H264InterlaceMode {
        BottomField => "BOTTOM_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264ParControl` enum.
    pub enum H264ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264QualityTuningLevel` enum.
    pub enum H264QualityTuningLevel {
        MultiPassHq => "MULTI_PASS_HQ",
        SinglePass => "SINGLE_PASS",
        SinglePassHq => "SINGLE_PASS_HQ",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264RateControlMode` enum.
    pub enum H264RateControlMode {
        Cbr => "CBR",
        Qvbr => "QVBR",
        Vbr => "VBR",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264RepeatPps` enum.
    pub enum H264RepeatPps {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264SceneChangeDetect` enum.
    pub enum H264SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264SlowPal` enum.
    pub enum H264SlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264SpatialAdaptiveQuantization` enum.
    pub enum H264SpatialAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264Syntax` enum.
    pub enum H264Syntax {
        Default => "DEFAULT",
        Rp2027 => "RP2027",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264Telecine` enum.
    pub enum H264Telecine {
        Hard => "HARD",
        None => "NONE",
        Soft => "SOFT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264TemporalAdaptiveQuantization` enum.
    pub enum H264TemporalAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H264UnregisteredSeiTimecode` enum.
    pub enum H264UnregisteredSeiTimecode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265AdaptiveQuantization` enum.
    pub enum H265AdaptiveQuantization {
        High => "HIGH",
        Higher => "HIGHER",
        Low => "LOW",
        Max => "MAX",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265AlternateTransferFunctionSei` enum.
    pub enum H265AlternateTransferFunctionSei {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265CodecLevel` enum.
    pub enum H265CodecLevel {
        Auto => "AUTO",
        Level1 => "LEVEL_1",
        Level2 => "LEVEL_2",
        Level21 => "LEVEL_2_1",
        Level3 => "LEVEL_3",
        Level31 => "LEVEL_3_1",
        Level4 => "LEVEL_4",
        Level41 => "LEVEL_4_1",
        Level5 => "LEVEL_5",
        Level51 => "LEVEL_5_1",
        Level52 => "LEVEL_5_2",
        Level6 => "LEVEL_6",
        Level61 => "LEVEL_6_1",
        Level62 => "LEVEL_6_2",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265CodecProfile` enum.
    pub enum H265CodecProfile {
        Main10High => "MAIN10_HIGH",
        Main10Main => "MAIN10_MAIN",
        Main42210bitHigh => "MAIN_422_10BIT_HIGH",
        Main42210bitMain => "MAIN_422_10BIT_MAIN",
        Main4228bitHigh => "MAIN_422_8BIT_HIGH",
        Main4228bitMain => "MAIN_422_8BIT_MAIN",
        MainHigh => "MAIN_HIGH",
        MainMain => "MAIN_MAIN",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265FlickerAdaptiveQuantization` enum.
    pub enum H265FlickerAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265FramerateControl` enum.
    pub enum H265FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265FramerateConversionAlgorithm` enum.
    pub enum H265FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265GopBReference` enum.
    pub enum H265GopBReference {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265GopSizeUnits` enum.
    pub enum H265GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265InterlaceMode` enum.
    pub enum H265InterlaceMode {
        BottomField => "BOTTOM_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265ParControl` enum.
    pub enum H265ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265QualityTuningLevel` enum.
    pub enum H265QualityTuningLevel {
        MultiPassHq => "MULTI_PASS_HQ",
        SinglePass => "SINGLE_PASS",
        SinglePassHq => "SINGLE_PASS_HQ",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265RateControlMode` enum.
    pub enum H265RateControlMode {
        Cbr => "CBR",
        Qvbr => "QVBR",
        Vbr => "VBR",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265SampleAdaptiveOffsetFilterMode` enum.
    pub enum H265SampleAdaptiveOffsetFilterMode {
        Adaptive => "ADAPTIVE",
        Default => "DEFAULT",
        Off => "OFF",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265SceneChangeDetect` enum.
    pub enum H265SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265SlowPal` enum.
    pub enum H265SlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265SpatialAdaptiveQuantization` enum.
    pub enum H265SpatialAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265Telecine` enum.
    pub enum H265Telecine {
        Hard => "HARD",
        None => "NONE",
        Soft => "SOFT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265TemporalAdaptiveQuantization` enum.
    pub enum H265TemporalAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265TemporalIds` enum.
    pub enum H265TemporalIds {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265Tiles` enum.
    pub enum H265Tiles {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265UnregisteredSeiTimecode` enum.
    pub enum H265UnregisteredSeiTimecode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `H265WriteMp4PackagingType` enum.
    pub enum H265WriteMp4PackagingType {
        Hev1 => "HEV1",
        Hvc1 => "HVC1",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsAdMarkers` enum.
    pub enum HlsAdMarkers {
        Elemental => "ELEMENTAL",
        ElementalScte35 => "ELEMENTAL_SCTE35",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsAudioTrackType` enum.
    pub enum HlsAudioTrackType {
        AlternateAudioAutoSelect => "ALTERNATE_AUDIO_AUTO_SELECT",
        AlternateAudioAutoSelectDefault => "ALTERNATE_AUDIO_AUTO_SELECT_DEFAULT",
        AlternateAudioNotAutoSelect => "ALTERNATE_AUDIO_NOT_AUTO_SELECT",
        AudioOnlyVariantStream => "AUDIO_ONLY_VARIANT_STREAM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsCaptionLanguageSetting` enum.
    pub enum HlsCaptionLanguageSetting {
        Insert => "INSERT",
        None => "NONE",
        Omit => "OMIT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsClientCache` enum.
    pub enum HlsClientCache {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsCodecSpecification` enum.
    pub enum HlsCodecSpecification {
        Rfc4281 => "RFC_4281",
        Rfc6381 => "RFC_6381",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsDirectoryStructure` enum.
    pub enum HlsDirectoryStructure {
        SingleDirectory => "SINGLE_DIRECTORY",
        SubdirectoryPerStream => "SUBDIRECTORY_PER_STREAM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsEncryptionType` enum.
    pub enum HlsEncryptionType {
        Aes128 => "AES128",
        SampleAes => "SAMPLE_AES",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsIFrameOnlyManifest` enum.
    pub enum HlsIFrameOnlyManifest {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsInitializationVectorInManifest` enum.
    pub enum HlsInitializationVectorInManifest {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsKeyProviderType` enum.
    pub enum HlsKeyProviderType {
        Speke => "SPEKE",
        StaticKey => "STATIC_KEY",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsManifestCompression` enum.
    pub enum HlsManifestCompression {
        Gzip => "GZIP",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsManifestDurationFormat` enum.
    pub enum HlsManifestDurationFormat {
        FloatingPoint => "FLOATING_POINT",
        Integer => "INTEGER",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsOutputSelection` enum.
    pub enum HlsOutputSelection {
        ManifestsAndSegments => "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly => "SEGMENTS_ONLY",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsProgramDateTime` enum.
    pub enum HlsProgramDateTime {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsSegmentControl` enum.
    pub enum HlsSegmentControl {
        SegmentedFiles => "SEGMENTED_FILES",
        SingleFile => "SINGLE_FILE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsStreamInfResolution` enum.
    pub enum HlsStreamInfResolution {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `HlsTimedMetadataId3Frame` enum.
    pub enum HlsTimedMetadataId3Frame {
        None => "NONE",
        Priv => "PRIV",
        Tdrl => "TDRL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `InputDeblockFilter` enum.
    pub enum InputDeblockFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `InputDenoiseFilter` enum.
    pub enum InputDenoiseFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `InputFilterEnable` enum.
    pub enum InputFilterEnable {
        Auto => "AUTO",
        Disable => "DISABLE",
        Force => "FORCE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `InputPsiControl` enum.
    pub enum InputPsiControl {
        IgnorePsi => "IGNORE_PSI",
        UsePsi => "USE_PSI",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `InputTimecodeSource` enum.
    pub enum InputTimecodeSource {
        Embedded => "EMBEDDED",
        Specifiedstart => "SPECIFIEDSTART",
        Zerobased => "ZEROBASED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `JobStatus` enum.
    pub enum JobStatus {
        Canceled => "CANCELED",
        Complete => "COMPLETE",
        Error => "ERROR",
        Progressing => "PROGRESSING",
        Submitted => "SUBMITTED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `JobTemplateListBy` enum.
    pub enum JobTemplateListBy {
        CreationDate => "CREATION_DATE",
        Name => "NAME",
        System => "SYSTEM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `LanguageCode` enum.
    pub enum LanguageCode {
        Aar => "AAR",
        Abk => "ABK",
        Afr => "AFR",
        Aka => "AKA",
        Amh => "AMH",
        Ara => "ARA",
        Arg => "ARG",
        Asm => "ASM",
        Ava => "AVA",
        Ave => "AVE",
        Aym => "AYM",
        Aze => "AZE",
        Bak => "BAK",
        Bam => "BAM",
        Bel => "BEL",
        Ben => "BEN",
        Bih => "BIH",
        Bis => "BIS",
        Bod => "BOD",
        Bos => "BOS",
        Bre => "BRE",
        Bul => "BUL",
        Cat => "CAT",
        Ces => "CES",
        Cha => "CHA",
        Che => "CHE",
        Chu => "CHU",
        Chv => "CHV",
        Cor => "COR",
        Cos => "COS",
        Cre => "CRE",
        Cym => "CYM",
        Dan => "DAN",
        Deu => "DEU",
        Div => "DIV",
        Dzo => "DZO",
        Ell => "ELL",
        Eng => "ENG",
        Enm => "ENM",
        Epo => "EPO",
        Est => "EST",
        Eus => "EUS",
        Ewe => "EWE",
        Fao => "FAO",
        Fas => "FAS",
        Fij => "FIJ",
        Fin => "FIN",
        Fra => "FRA",
        Frm => "FRM",
        Fry => "FRY",
        Ful => "FUL",
        Ger => "GER",
        Gla => "GLA",
        Gle => "GLE",
        Glg => "GLG",
        Glv => "GLV",
        Grn => "GRN",
        Guj => "GUJ",
        Hat => "HAT",
        Hau => "HAU",
        Heb => "HEB",
        Her => "HER",
        Hin => "HIN",
        Hmo => "HMO",
        Hrv => "HRV",
        Hun => "HUN",
        Hye => "HYE",
        Ibo => "IBO",
        Ido => "IDO",
        Iii => "III",
        Iku => "IKU",
        Ile => "ILE",
        Ina => "INA",
        Ind => "IND",
        Ipk => "IPK",
        Isl => "ISL",
        Ita => "ITA",
        Jav => "JAV",
        Jpn => "JPN",
        Kal => "KAL",
        Kan => "KAN",
        Kas => "KAS",
        Kat => "KAT",
        Kau => "KAU",
        Kaz => "KAZ",
        Khm => "KHM",
        Kik => "KIK",
        Kin => "KIN",
        Kir => "KIR",
        Kom => "KOM",
        Kon => "KON",
        Kor => "KOR",
        Kua => "KUA",
        Kur => "KUR",
        Lao => "LAO",
        Lat => "LAT",
        Lav => "LAV",
        Lim => "LIM",
        Lin => "LIN",
        Lit => "LIT",
        Ltz => "LTZ",
        Lub => "LUB",
        Lug => "LUG",
        Mah => "MAH",
        Mal => "MAL",
        Mar => "MAR",
        Mkd => "MKD",
        Mlg => "MLG",
        Mlt => "MLT",
        Mon => "MON",
        Mri => "MRI",
        Msa => "MSA",
        Mya => "MYA",
        Nau => "NAU",
        Nav => "NAV",
        Nbl => "NBL",
        Nde => "NDE",
        Ndo => "NDO",
        Nep => "NEP",
        Nld => "NLD",
        Nno => "NNO",
        Nob => "NOB",
        Nor => "NOR",
        Nya => "NYA",
        Oci => "OCI",
        Oji => "OJI",
        Ori => "ORI",
        Orj => "ORJ",
        Orm => "ORM",
        Oss => "OSS",
        Pan => "PAN",
        Pli => "PLI",
        Pol => "POL",
        Por => "POR",
        Pus => "PUS",
        Qaa => "QAA",
        Qpc => "QPC",
        Que => "QUE",
        Roh => "ROH",
        Ron => "RON",
        Run => "RUN",
        Rus => "RUS",
        Sag => "SAG",
        San => "SAN",
        Sin => "SIN",
        Slk => "SLK",
        Slv => "SLV",
        Sme => "SME",
        Smo => "SMO",
        Sna => "SNA",
        Snd => "SND",
        Som => "SOM",
        Sot => "SOT",
        Spa => "SPA",
        Sqi => "SQI",
        Srb => "SRB",
        Srd => "SRD",
        Ssw => "SSW",
        Sun => "SUN",
        Swa => "SWA",
        Swe => "SWE",
        Tah => "TAH",
        Tam => "TAM",
        Tat => "TAT",
        Tel => "TEL",
        Tgk => "TGK",
        Tgl => "TGL",
        Tha => "THA",
        Tir => "TIR",
        Tng => "TNG",
        Ton => "TON",
        Tsn => "TSN",
        Tso => "TSO",
        Tuk => "TUK",
        Tur => "TUR",
        Twi => "TWI",
        Uig => "UIG",
        Ukr => "UKR",
        Urd => "URD",
        Uzb => "UZB",
        Ven => "VEN",
        Vie => "VIE",
        Vol => "VOL",
        Wln => "WLN",
        Wol => "WOL",
        Xho => "XHO",
        Yid => "YID",
        Yor => "YOR",
        Zha => "ZHA",
        Zho => "ZHO",
        Zul => "ZUL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsAudioBufferModel` enum.
    pub enum M2tsAudioBufferModel {
        Atsc => "ATSC",
        Dvb => "DVB",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsBufferModel` enum.
    pub enum M2tsBufferModel {
        Multiplex => "MULTIPLEX",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsEbpAudioInterval` enum.
    pub enum M2tsEbpAudioInterval {
        VideoAndFixedIntervals => "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval => "VIDEO_INTERVAL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsEbpPlacement` enum.
    pub enum M2tsEbpPlacement {
        VideoAndAudioPids => "VIDEO_AND_AUDIO_PIDS",
        VideoPid => "VIDEO_PID",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsEsRateInPes` enum.
    pub enum M2tsEsRateInPes {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsNielsenId3` enum.
    pub enum M2tsNielsenId3 {
        Insert => "INSERT",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsPcrControl` enum.
    pub enum M2tsPcrControl {
        ConfiguredPcrPeriod => "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket => "PCR_EVERY_PES_PACKET",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsRateMode` enum.
    pub enum M2tsRateMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsScte35Source` enum.
    pub enum M2tsScte35Source {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsSegmentationMarkers` enum.
    pub enum M2tsSegmentationMarkers {
        Ebp => "EBP",
        EbpLegacy => "EBP_LEGACY",
        None => "NONE",
        PsiSegstart => "PSI_SEGSTART",
        RaiAdapt => "RAI_ADAPT",
        RaiSegstart => "RAI_SEGSTART",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M2tsSegmentationStyle` enum.
    pub enum M2tsSegmentationStyle {
        MaintainCadence => "MAINTAIN_CADENCE",
        ResetCadence => "RESET_CADENCE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M3u8NielsenId3` enum.
    pub enum M3u8NielsenId3 {
        Insert => "INSERT",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M3u8PcrControl` enum.
    pub enum M3u8PcrControl {
        ConfiguredPcrPeriod => "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket => "PCR_EVERY_PES_PACKET",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `M3u8Scte35Source` enum.
    pub enum M3u8Scte35Source {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MovClapAtom` enum.
    pub enum MovClapAtom {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MovCslgAtom` enum.
    pub enum MovCslgAtom {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MovMpeg2FourCCControl` enum.
    pub enum MovMpeg2FourCCControl {
        Mpeg => "MPEG",
        Xdcam => "XDCAM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MovPaddingControl` enum.
    pub enum MovPaddingControl {
        None => "NONE",
        Omneon => "OMNEON",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MovReference` enum.
    pub enum MovReference {
        External => "EXTERNAL",
        SelfContained => "SELF_CONTAINED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mp4CslgAtom` enum.
    pub enum Mp4CslgAtom {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mp4FreeSpaceBox` enum.
    pub enum Mp4FreeSpaceBox {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mp4MoovPlacement` enum.
    pub enum Mp4MoovPlacement {
        Normal => "NORMAL",
        ProgressiveDownload => "PROGRESSIVE_DOWNLOAD",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2AdaptiveQuantization` enum.
    pub enum Mpeg2AdaptiveQuantization {
        High => "HIGH",
        Low => "LOW",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2CodecLevel` enum.
    pub enum Mpeg2CodecLevel {
        Auto => "AUTO",
        High => "HIGH",
        High1440 => "HIGH1440",
        Low => "LOW",
        Main => "MAIN",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2CodecProfile` enum.
    pub enum Mpeg2CodecProfile {
        Main => "MAIN",
        Profile422 => "PROFILE_422",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2FramerateControl` enum.
    pub enum Mpeg2FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2FramerateConversionAlgorithm` enum.
    pub enum Mpeg2FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2GopSizeUnits` enum.
    pub enum Mpeg2GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2InterlaceMode` enum.
    pub enum Mpeg2InterlaceMode {
        BottomField => "BOTTOM_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2IntraDcPrecision` enum.
    pub enum Mpeg2IntraDcPrecision {
        Auto => "AUTO",
        IntraDcPrecision10 => "INTRA_DC_PRECISION_10",
        IntraDcPrecision11 => "INTRA_DC_PRECISION_11",
        IntraDcPrecision8 => "INTRA_DC_PRECISION_8",
        IntraDcPrecision9 => "INTRA_DC_PRECISION_9",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2ParControl` enum.
    pub enum Mpeg2ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2QualityTuningLevel` enum.
    pub enum Mpeg2QualityTuningLevel {
        MultiPass => "MULTI_PASS",
        SinglePass => "SINGLE_PASS",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2RateControlMode` enum.
    pub enum Mpeg2RateControlMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2SceneChangeDetect` enum.
    pub enum Mpeg2SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2SlowPal` enum.
    pub enum Mpeg2SlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2SpatialAdaptiveQuantization` enum.
    pub enum Mpeg2SpatialAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2Syntax` enum.
    pub enum Mpeg2Syntax {
        D10 => "D_10",
        Default => "DEFAULT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2Telecine` enum.
    pub enum Mpeg2Telecine {
        Hard => "HARD",
        None => "NONE",
        Soft => "SOFT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Mpeg2TemporalAdaptiveQuantization` enum.
    pub enum Mpeg2TemporalAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MsSmoothAudioDeduplication` enum.
    pub enum MsSmoothAudioDeduplication {
        CombineDuplicateStreams => "COMBINE_DUPLICATE_STREAMS",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `MsSmoothManifestEncoding` enum.
    pub enum MsSmoothManifestEncoding {
        Utf16 => "UTF16",
        Utf8 => "UTF8",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `NoiseReducerFilter` enum.
    pub enum NoiseReducerFilter {
        Bilateral => "BILATERAL",
        Conserve => "CONSERVE",
        Gaussian => "GAUSSIAN",
        Lanczos => "LANCZOS",
        Mean => "MEAN",
        Sharpen => "SHARPEN",
        Spatial => "SPATIAL",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Order` enum.
    pub enum Order {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `OutputGroupType` enum.
    pub enum OutputGroupType {
        CmafGroupSettings => "CMAF_GROUP_SETTINGS",
        DashIsoGroupSettings => "DASH_ISO_GROUP_SETTINGS",
        FileGroupSettings => "FILE_GROUP_SETTINGS",
        HlsGroupSettings => "HLS_GROUP_SETTINGS",
        MsSmoothGroupSettings => "MS_SMOOTH_GROUP_SETTINGS",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `OutputSdt` enum.
    pub enum OutputSdt {
        SdtFollow => "SDT_FOLLOW",
        SdtFollowIfPresent => "SDT_FOLLOW_IF_PRESENT",
        SdtManual => "SDT_MANUAL",
        SdtNone => "SDT_NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `PresetListBy` enum.
    pub enum PresetListBy {
        CreationDate => "CREATION_DATE",
        Name => "NAME",
        System => "SYSTEM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `PricingPlan` enum.
    pub enum PricingPlan {
        OnDemand => "ON_DEMAND",
        Reserved => "RESERVED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresCodecProfile` enum.
    pub enum ProresCodecProfile {
        AppleProres422 => "APPLE_PRORES_422",
        AppleProres422Hq => "APPLE_PRORES_422_HQ",
        AppleProres422Lt => "APPLE_PRORES_422_LT",
        AppleProres422Proxy => "APPLE_PRORES_422_PROXY",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresFramerateControl` enum.
    pub enum ProresFramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresFramerateConversionAlgorithm` enum.
    pub enum ProresFramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresInterlaceMode` enum.
    pub enum ProresInterlaceMode {
        BottomField => "BOTTOM_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresParControl` enum.
    pub enum ProresParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresSlowPal` enum.
    pub enum ProresSlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ProresTelecine` enum.
    pub enum ProresTelecine {
        Hard => "HARD",
        None => "NONE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `QueueListBy` enum.
    pub enum QueueListBy {
        CreationDate => "CREATION_DATE",
        Name => "NAME",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `QueueStatus` enum.
    pub enum QueueStatus {
        Active => "ACTIVE",
        Paused => "PAUSED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `RenewalType` enum.
    pub enum RenewalType {
        AutoRenew => "AUTO_RENEW",
        Expire => "EXPIRE",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ReservationPlanStatus` enum.
    pub enum ReservationPlanStatus {
        Active => "ACTIVE",
        Expired => "EXPIRED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `RespondToAfd` enum.
    pub enum RespondToAfd {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
        Respond => "RESPOND",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `ScalingBehavior` enum.
    pub enum ScalingBehavior {
        Default => "DEFAULT",
        StretchToOutput => "STRETCH_TO_OUTPUT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `SccDestinationFramerate` enum.
    pub enum SccDestinationFramerate {
        Framerate2397 => "FRAMERATE_23_97",
        Framerate24 => "FRAMERATE_24",
        Framerate2997Dropframe => "FRAMERATE_29_97_DROPFRAME",
        Framerate2997NonDropframe => "FRAMERATE_29_97_NON_DROPFRAME",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `TimecodeBurninPosition` enum.
    pub enum TimecodeBurninPosition {
        BottomCenter => "BOTTOM_CENTER",
        BottomLeft => "BOTTOM_LEFT",
        BottomRight => "BOTTOM_RIGHT",
        MiddleCenter => "MIDDLE_CENTER",
        MiddleLeft => "MIDDLE_LEFT",
        MiddleRight => "MIDDLE_RIGHT",
        TopCenter => "TOP_CENTER",
        TopLeft => "TOP_LEFT",
        TopRight => "TOP_RIGHT",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `TimecodeSource` enum.
    pub enum TimecodeSource {
        Embedded => "EMBEDDED",
        Specifiedstart => "SPECIFIEDSTART",
        Zerobased => "ZEROBASED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `TimedMetadata` enum.
    pub enum TimedMetadata {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `TtmlStylePassthrough` enum.
    pub enum TtmlStylePassthrough {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `Type` enum.
    pub enum Type {
        Custom => "CUSTOM",
        System => "SYSTEM",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `VideoCodec` enum.
    pub enum VideoCodec {
        FrameCapture => "FRAME_CAPTURE",
        H264 => "H_264",
        H265 => "H_265",
        Mpeg2 => "MPEG2",
        Prores => "PRORES",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `VideoTimecodeInsertion` enum.
    pub enum VideoTimecodeInsertion {
        Disabled => "DISABLED",
        PicTimingSei => "PIC_TIMING_SEI",
    }
}

shape_enum! {
    /// AWS Elemental MediaConvert `WavFormat` enum.
    pub enum WavFormat {
        Rf64 => "RF64",
        Riff => "RIFF",
    }
}

/// AWS Elemental MediaConvert `AacSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AacSettings {
    #[serde(rename = "audioDescriptionBroadcasterMix", skip_serializing_if = "Option::is_none")]
    pub audio_description_broadcaster_mix: Option<AacAudioDescriptionBroadcasterMix>,
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "codecProfile", skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<AacCodecProfile>,
    #[serde(rename = "codingMode", skip_serializing_if = "Option::is_none")]
    pub coding_mode: Option<AacCodingMode>,
    #[serde(rename = "rateControlMode", skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<AacRateControlMode>,
    #[serde(rename = "rawFormat", skip_serializing_if = "Option::is_none")]
    pub raw_format: Option<AacRawFormat>,
    #[serde(rename = "sampleRate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
    #[serde(rename = "specification", skip_serializing_if = "Option::is_none")]
    pub specification: Option<AacSpecification>,
    #[serde(rename = "vbrQuality", skip_serializing_if = "Option::is_none")]
    pub vbr_quality: Option<AacVbrQuality>,
}

impl Shape for AacSettings {
    const SHAPE_NAME: &'static str = "AacSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_description_broadcaster_mix",
            "audioDescriptionBroadcasterMix",
            TypeInfo::Enum("AacAudioDescriptionBroadcasterMix"),
        ),
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("codec_profile", "codecProfile", TypeInfo::Enum("AacCodecProfile")),
        FieldMapping::new("coding_mode", "codingMode", TypeInfo::Enum("AacCodingMode")),
        FieldMapping::new(
            "rate_control_mode",
            "rateControlMode",
            TypeInfo::Enum("AacRateControlMode"),
        ),
        FieldMapping::new("raw_format", "rawFormat", TypeInfo::Enum("AacRawFormat")),
        FieldMapping::new("sample_rate", "sampleRate", TypeInfo::Integer),
        FieldMapping::new("specification", "specification", TypeInfo::Enum("AacSpecification")),
        FieldMapping::new("vbr_quality", "vbrQuality", TypeInfo::Enum("AacVbrQuality")),
    ];
}

/// AWS Elemental MediaConvert `Ac3Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ac3Settings {
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "bitstreamMode", skip_serializing_if = "Option::is_none")]
    pub bitstream_mode: Option<Ac3BitstreamMode>,
    #[serde(rename = "codingMode", skip_serializing_if = "Option::is_none")]
    pub coding_mode: Option<Ac3CodingMode>,
    #[serde(rename = "dialnorm", skip_serializing_if = "Option::is_none")]
    pub dialnorm: Option<i32>,
    #[serde(rename = "dynamicRangeCompressionProfile", skip_serializing_if = "Option::is_none")]
    pub dynamic_range_compression_profile: Option<Ac3DynamicRangeCompressionProfile>,
    #[serde(rename = "lfeFilter", skip_serializing_if = "Option::is_none")]
    pub lfe_filter: Option<Ac3LfeFilter>,
    #[serde(rename = "metadataControl", skip_serializing_if = "Option::is_none")]
    pub metadata_control: Option<Ac3MetadataControl>,
    #[serde(rename = "sampleRate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
}

impl Shape for Ac3Settings {
    const SHAPE_NAME: &'static str = "Ac3Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("bitstream_mode", "bitstreamMode", TypeInfo::Enum("Ac3BitstreamMode")),
        FieldMapping::new("coding_mode", "codingMode", TypeInfo::Enum("Ac3CodingMode")),
        FieldMapping::new("dialnorm", "dialnorm", TypeInfo::Integer),
        FieldMapping::new(
            "dynamic_range_compression_profile",
            "dynamicRangeCompressionProfile",
            TypeInfo::Enum("Ac3DynamicRangeCompressionProfile"),
        ),
        FieldMapping::new("lfe_filter", "lfeFilter", TypeInfo::Enum("Ac3LfeFilter")),
        FieldMapping::new(
            "metadata_control",
            "metadataControl",
            TypeInfo::Enum("Ac3MetadataControl"),
        ),
        FieldMapping::new("sample_rate", "sampleRate", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `AiffSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiffSettings {
    #[serde(rename = "bitDepth", skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<i32>,
    #[serde(rename = "channels", skip_serializing_if = "Option::is_none")]
    pub channels: Option<i32>,
    #[serde(rename = "sampleRate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
}

impl Shape for AiffSettings {
    const SHAPE_NAME: &'static str = "AiffSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("bit_depth", "bitDepth", TypeInfo::Integer),
        FieldMapping::new("channels", "channels", TypeInfo::Integer),
        FieldMapping::new("sample_rate", "sampleRate", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `AncillarySourceSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AncillarySourceSettings {
    #[serde(rename = "sourceAncillaryChannelNumber", skip_serializing_if = "Option::is_none")]
    pub source_ancillary_channel_number: Option<i32>,
}

impl Shape for AncillarySourceSettings {
    const SHAPE_NAME: &'static str = "AncillarySourceSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "source_ancillary_channel_number",
            "sourceAncillaryChannelNumber",
            TypeInfo::Integer,
        ),
    ];
}

/// AWS Elemental MediaConvert `AudioCodecSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioCodecSettings {
    #[serde(rename = "aacSettings", skip_serializing_if = "Option::is_none")]
    pub aac_settings: Option<AacSettings>,
    #[serde(rename = "ac3Settings", skip_serializing_if = "Option::is_none")]
    pub ac3_settings: Option<Ac3Settings>,
    #[serde(rename = "aiffSettings", skip_serializing_if = "Option::is_none")]
    pub aiff_settings: Option<AiffSettings>,
    #[serde(rename = "codec", skip_serializing_if = "Option::is_none")]
    pub codec: Option<AudioCodec>,
    #[serde(rename = "eac3Settings", skip_serializing_if = "Option::is_none")]
    pub eac3_settings: Option<Eac3Settings>,
    #[serde(rename = "mp2Settings", skip_serializing_if = "Option::is_none")]
    pub mp2_settings: Option<Mp2Settings>,
    #[serde(rename = "wavSettings", skip_serializing_if = "Option::is_none")]
    pub wav_settings: Option<WavSettings>,
}

impl Shape for AudioCodecSettings {
    const SHAPE_NAME: &'static str = "AudioCodecSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("aac_settings", "aacSettings", TypeInfo::Structure("AacSettings")),
        FieldMapping::new("ac3_settings", "ac3Settings", TypeInfo::Structure("Ac3Settings")),
        FieldMapping::new("aiff_settings", "aiffSettings", TypeInfo::Structure("AiffSettings")),
        FieldMapping::new("codec", "codec", TypeInfo::Enum("AudioCodec")),
        FieldMapping::new("eac3_settings", "eac3Settings", TypeInfo::Structure("Eac3Settings")),
        FieldMapping::new("mp2_settings", "mp2Settings", TypeInfo::Structure("Mp2Settings")),
        FieldMapping::new("wav_settings", "wavSettings", TypeInfo::Structure("WavSettings")),
    ];
}

/// AWS Elemental MediaConvert `AudioDescription`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioDescription {
    #[serde(rename = "audioNormalizationSettings", skip_serializing_if = "Option::is_none")]
    pub audio_normalization_settings: Option<AudioNormalizationSettings>,
    #[serde(rename = "audioSourceName", skip_serializing_if = "Option::is_none")]
    pub audio_source_name: Option<String>,
    #[serde(rename = "audioType", skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<i32>,
    #[serde(rename = "audioTypeControl", skip_serializing_if = "Option::is_none")]
    pub audio_type_control: Option<AudioTypeControl>,
    #[serde(rename = "codecSettings", skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<AudioCodecSettings>,
    #[serde(rename = "customLanguageCode", skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(rename = "languageCodeControl", skip_serializing_if = "Option::is_none")]
    pub language_code_control: Option<AudioLanguageCodeControl>,
    #[serde(rename = "remixSettings", skip_serializing_if = "Option::is_none")]
    pub remix_settings: Option<RemixSettings>,
    #[serde(rename = "streamName", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

impl Shape for AudioDescription {
    const SHAPE_NAME: &'static str = "AudioDescription";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_normalization_settings",
            "audioNormalizationSettings",
            TypeInfo::Structure("AudioNormalizationSettings"),
        ),
        FieldMapping::new("audio_source_name", "audioSourceName", TypeInfo::String),
        FieldMapping::new("audio_type", "audioType", TypeInfo::Integer),
        FieldMapping::new(
            "audio_type_control",
            "audioTypeControl",
            TypeInfo::Enum("AudioTypeControl"),
        ),
        FieldMapping::new(
            "codec_settings",
            "codecSettings",
            TypeInfo::Structure("AudioCodecSettings"),
        ),
        FieldMapping::new("custom_language_code", "customLanguageCode", TypeInfo::String),
        FieldMapping::new("language_code", "languageCode", TypeInfo::Enum("LanguageCode")),
        FieldMapping::new(
            "language_code_control",
            "languageCodeControl",
            TypeInfo::Enum("AudioLanguageCodeControl"),
        ),
        FieldMapping::new("remix_settings", "remixSettings", TypeInfo::Structure("RemixSettings")),
        FieldMapping::new("stream_name", "streamName", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `AudioNormalizationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioNormalizationSettings {
    #[serde(rename = "algorithm", skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AudioNormalizationAlgorithm>,
    #[serde(rename = "algorithmControl", skip_serializing_if = "Option::is_none")]
    pub algorithm_control: Option<AudioNormalizationAlgorithmControl>,
    #[serde(rename = "correctionGateLevel", skip_serializing_if = "Option::is_none")]
    pub correction_gate_level: Option<i32>,
    #[serde(rename = "loudnessLogging", skip_serializing_if = "Option::is_none")]
    pub loudness_logging: Option<AudioNormalizationLoudnessLogging>,
    #[serde(rename = "peakCalculation", skip_serializing_if = "Option::is_none")]
    pub peak_calculation: Option<AudioNormalizationPeakCalculation>,
    #[serde(rename = "targetLkfs", skip_serializing_if = "Option::is_none")]
    pub target_lkfs: Option<f64>,
}

impl Shape for AudioNormalizationSettings {
    const SHAPE_NAME: &'static str = "AudioNormalizationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("algorithm", "algorithm", TypeInfo::Enum("AudioNormalizationAlgorithm")),
        FieldMapping::new(
            "algorithm_control",
            "algorithmControl",
            TypeInfo::Enum("AudioNormalizationAlgorithmControl"),
        ),
        FieldMapping::new("correction_gate_level", "correctionGateLevel", TypeInfo::Integer),
        FieldMapping::new(
            "loudness_logging",
            "loudnessLogging",
            TypeInfo::Enum("AudioNormalizationLoudnessLogging"),
        ),
        FieldMapping::new(
            "peak_calculation",
            "peakCalculation",
            TypeInfo::Enum("AudioNormalizationPeakCalculation"),
        ),
        FieldMapping::new("target_lkfs", "targetLkfs", TypeInfo::Double),
    ];
}

/// AWS Elemental MediaConvert `AudioSelector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioSelector {
    #[serde(rename = "customLanguageCode", skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(rename = "defaultSelection", skip_serializing_if = "Option::is_none")]
    pub default_selection: Option<AudioDefaultSelection>,
    #[serde(rename = "externalAudioFileInput", skip_serializing_if = "Option::is_none")]
    pub external_audio_file_input: Option<String>,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(rename = "offset", skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(rename = "pids", skip_serializing_if = "Option::is_none")]
    pub pids: Option<Vec<i32>>,
    #[serde(rename = "programSelection", skip_serializing_if = "Option::is_none")]
    pub program_selection: Option<i32>,
    #[serde(rename = "remixSettings", skip_serializing_if = "Option::is_none")]
    pub remix_settings: Option<RemixSettings>,
    #[serde(rename = "selectorType", skip_serializing_if = "Option::is_none")]
    pub selector_type: Option<AudioSelectorType>,
    #[serde(rename = "tracks", skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<i32>>,
}

impl Shape for AudioSelector {
    const SHAPE_NAME: &'static str = "AudioSelector";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("custom_language_code", "customLanguageCode", TypeInfo::String),
        FieldMapping::new(
            "default_selection",
            "defaultSelection",
            TypeInfo::Enum("AudioDefaultSelection"),
        ),
        FieldMapping::new("external_audio_file_input", "externalAudioFileInput", TypeInfo::String),
        FieldMapping::new("language_code", "languageCode", TypeInfo::Enum("LanguageCode")),
        FieldMapping::new("offset", "offset", TypeInfo::Integer),
        FieldMapping::new("pids", "pids", TypeInfo::List(&TypeInfo::Integer)),
        FieldMapping::new("program_selection", "programSelection", TypeInfo::Integer),
        FieldMapping::new("remix_settings", "remixSettings", TypeInfo::Structure("RemixSettings")),
        FieldMapping::new("selector_type", "selectorType", TypeInfo::Enum("AudioSelectorType")),
        FieldMapping::new("tracks", "tracks", TypeInfo::List(&TypeInfo::Integer)),
    ];
}

/// AWS Elemental MediaConvert `AudioSelectorGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioSelectorGroup {
    #[serde(rename = "audioSelectorNames", skip_serializing_if = "Option::is_none")]
    pub audio_selector_names: Option<Vec<String>>,
}

impl Shape for AudioSelectorGroup {
    const SHAPE_NAME: &'static str = "AudioSelectorGroup";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_selector_names",
            "audioSelectorNames",
            TypeInfo::List(&TypeInfo::String),
        ),
    ];
}

/// AWS Elemental MediaConvert `AvailBlanking`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailBlanking {
    #[serde(rename = "availBlankingImage", skip_serializing_if = "Option::is_none")]
    pub avail_blanking_image: Option<String>,
}

impl Shape for AvailBlanking {
    const SHAPE_NAME: &'static str = "AvailBlanking";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("avail_blanking_image", "availBlankingImage", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `BurninDestinationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurninDestinationSettings {
    #[serde(rename = "alignment", skip_serializing_if = "Option::is_none")]
    pub alignment: Option<BurninSubtitleAlignment>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<BurninSubtitleBackgroundColor>,
    #[serde(rename = "backgroundOpacity", skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<i32>,
    #[serde(rename = "fontColor", skip_serializing_if = "Option::is_none")]
    pub font_color: Option<BurninSubtitleFontColor>,
    #[serde(rename = "fontOpacity", skip_serializing_if = "Option::is_none")]
    pub font_opacity: Option<i32>,
    #[serde(rename = "fontResolution", skip_serializing_if = "Option::is_none")]
    pub font_resolution: Option<i32>,
    #[serde(rename = "fontScript", skip_serializing_if = "Option::is_none")]
    pub font_script: Option<FontScript>,
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(rename = "outlineColor", skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<BurninSubtitleOutlineColor>,
    #[serde(rename = "outlineSize", skip_serializing_if = "Option::is_none")]
    pub outline_size: Option<i32>,
    #[serde(rename = "shadowColor", skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<BurninSubtitleShadowColor>,
    #[serde(rename = "shadowOpacity", skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<i32>,
    #[serde(rename = "shadowXOffset", skip_serializing_if = "Option::is_none")]
    pub shadow_x_offset: Option<i32>,
    #[serde(rename = "shadowYOffset", skip_serializing_if = "Option::is_none")]
    pub shadow_y_offset: Option<i32>,
    #[serde(rename = "teletextSpacing", skip_serializing_if = "Option::is_none")]
    pub teletext_spacing: Option<BurninSubtitleTeletextSpacing>,
    #[serde(rename = "xPosition", skip_serializing_if = "Option::is_none")]
    pub x_position: Option<i32>,
    #[serde(rename = "yPosition", skip_serializing_if = "Option::is_none")]
    pub y_position: Option<i32>,
}

impl Shape for BurninDestinationSettings {
    const SHAPE_NAME: &'static str = "BurninDestinationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("alignment", "alignment", TypeInfo::Enum("BurninSubtitleAlignment")),
        FieldMapping::new(
            "background_color",
            "backgroundColor",
            TypeInfo::Enum("BurninSubtitleBackgroundColor"),
        ),
        FieldMapping::new("background_opacity", "backgroundOpacity", TypeInfo::Integer),
        FieldMapping::new("font_color", "fontColor", TypeInfo::Enum("BurninSubtitleFontColor")),
        FieldMapping::new("font_opacity", "fontOpacity", TypeInfo::Integer),
        FieldMapping::new("font_resolution", "fontResolution", TypeInfo::Integer),
        FieldMapping::new("font_script", "fontScript", TypeInfo::Enum("FontScript")),
        FieldMapping::new("font_size", "fontSize", TypeInfo::Integer),
        FieldMapping::new(
            "outline_color",
            "outlineColor",
            TypeInfo::Enum("BurninSubtitleOutlineColor"),
        ),
        FieldMapping::new("outline_size", "outlineSize", TypeInfo::Integer),
        FieldMapping::new(
            "shadow_color",
            "shadowColor",
            TypeInfo::Enum("BurninSubtitleShadowColor"),
        ),
        FieldMapping::new("shadow_opacity", "shadowOpacity", TypeInfo::Integer),
        FieldMapping::new("shadow_x_offset", "shadowXOffset", TypeInfo::Integer),
        FieldMapping::new("shadow_y_offset", "shadowYOffset", TypeInfo::Integer),
        FieldMapping::new(
            "teletext_spacing",
            "teletextSpacing",
            TypeInfo::Enum("BurninSubtitleTeletextSpacing"),
        ),
        FieldMapping::new("x_position", "xPosition", TypeInfo::Integer),
        FieldMapping::new("y_position", "yPosition", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `CaptionDescription`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionDescription {
    #[serde(rename = "captionSelectorName", skip_serializing_if = "Option::is_none")]
    pub caption_selector_name: Option<String>,
    #[serde(rename = "customLanguageCode", skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(rename = "destinationSettings", skip_serializing_if = "Option::is_none")]
    pub destination_settings: Option<CaptionDestinationSettings>,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(rename = "languageDescription", skip_serializing_if = "Option::is_none")]
    pub language_description: Option<String>,
}

impl Shape for CaptionDescription {
    const SHAPE_NAME: &'static str = "CaptionDescription";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("caption_selector_name", "captionSelectorName", TypeInfo::String),
        FieldMapping::new("custom_language_code", "customLanguageCode", TypeInfo::String),
        FieldMapping::new(
            "destination_settings",
            "destinationSettings",
            TypeInfo::Structure("CaptionDestinationSettings"),
        ),
        FieldMapping::new("language_code", "languageCode", TypeInfo::Enum("LanguageCode")),
        FieldMapping::new("language_description", "languageDescription", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `CaptionDescriptionPreset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionDescriptionPreset {
    #[serde(rename = "customLanguageCode", skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(rename = "destinationSettings", skip_serializing_if = "Option::is_none")]
    pub destination_settings: Option<CaptionDestinationSettings>,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(rename = "languageDescription", skip_serializing_if = "Option::is_none")]
    pub language_description: Option<String>,
}

impl Shape for CaptionDescriptionPreset {
    const SHAPE_NAME: &'static str = "CaptionDescriptionPreset";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("custom_language_code", "customLanguageCode", TypeInfo::String),
        FieldMapping::new(
            "destination_settings",
            "destinationSettings",
            TypeInfo::Structure("CaptionDestinationSettings"),
        ),
        FieldMapping::new("language_code", "languageCode", TypeInfo::Enum("LanguageCode")),
        FieldMapping::new("language_description", "languageDescription", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `CaptionDestinationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionDestinationSettings {
    #[serde(rename = "burninDestinationSettings", skip_serializing_if = "Option::is_none")]
    pub burnin_destination_settings: Option<BurninDestinationSettings>,
    #[serde(rename = "destinationType", skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<CaptionDestinationType>,
    #[serde(rename = "dvbSubDestinationSettings", skip_serializing_if = "Option::is_none")]
    pub dvb_sub_destination_settings: Option<DvbSubDestinationSettings>,
    #[serde(rename = "sccDestinationSettings", skip_serializing_if = "Option::is_none")]
    pub scc_destination_settings: Option<SccDestinationSettings>,
    #[serde(rename = "teletextDestinationSettings", skip_serializing_if = "Option::is_none")]
    pub teletext_destination_settings: Option<TeletextDestinationSettings>,
    #[serde(rename = "ttmlDestinationSettings", skip_serializing_if = "Option::is_none")]
    pub ttml_destination_settings: Option<TtmlDestinationSettings>,
}

impl Shape for CaptionDestinationSettings {
    const SHAPE_NAME: &'static str = "CaptionDestinationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "burnin_destination_settings",
            "burninDestinationSettings",
            TypeInfo::Structure("BurninDestinationSettings"),
        ),
        FieldMapping::new(
            "destination_type",
            "destinationType",
            TypeInfo::Enum("CaptionDestinationType"),
        ),
        FieldMapping::new(
            "dvb_sub_destination_settings",
            "dvbSubDestinationSettings",
            TypeInfo::Structure("DvbSubDestinationSettings"),
        ),
        FieldMapping::new(
            "scc_destination_settings",
            "sccDestinationSettings",
            TypeInfo::Structure("SccDestinationSettings"),
        ),
        FieldMapping::new(
            "teletext_destination_settings",
            "teletextDestinationSettings",
            TypeInfo::Structure("TeletextDestinationSettings"),
        ),
        FieldMapping::new(
            "ttml_destination_settings",
            "ttmlDestinationSettings",
            TypeInfo::Structure("TtmlDestinationSettings"),
        ),
    ];
}

/// AWS Elemental MediaConvert `CaptionSelector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionSelector {
    #[serde(rename = "customLanguageCode", skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(rename = "sourceSettings", skip_serializing_if = "Option::is_none")]
    pub source_settings: Option<CaptionSourceSettings>,
}

impl Shape for CaptionSelector {
    const SHAPE_NAME: &'static str = "CaptionSelector";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("custom_language_code", "customLanguageCode", TypeInfo::String),
        FieldMapping::new("language_code", "languageCode", TypeInfo::Enum("LanguageCode")),
        FieldMapping::new(
            "source_settings",
            "sourceSettings",
            TypeInfo::Structure("CaptionSourceSettings"),
        ),
    ];
}

/// AWS Elemental MediaConvert `CaptionSourceSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionSourceSettings {
    #[serde(rename = "ancillarySourceSettings", skip_serializing_if = "Option::is_none")]
    pub ancillary_source_settings: Option<AncillarySourceSettings>,
    #[serde(rename = "dvbSubSourceSettings", skip_serializing_if = "Option::is_none")]
    pub dvb_sub_source_settings: Option<DvbSubSourceSettings>,
    #[serde(rename = "embeddedSourceSettings", skip_serializing_if = "Option::is_none")]
    pub embedded_source_settings: Option<EmbeddedSourceSettings>,
    #[serde(rename = "fileSourceSettings", skip_serializing_if = "Option::is_none")]
    pub file_source_settings: Option<FileSourceSettings>,
    #[serde(rename = "sourceType", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<CaptionSourceType>,
    #[serde(rename = "teletextSourceSettings", skip_serializing_if = "Option::is_none")]
    pub teletext_source_settings: Option<TeletextSourceSettings>,
}

impl Shape for CaptionSourceSettings {
    const SHAPE_NAME: &'static str = "CaptionSourceSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "ancillary_source_settings",
            "ancillarySourceSettings",
            TypeInfo::Structure("AncillarySourceSettings"),
        ),
        FieldMapping::new(
            "dvb_sub_source_settings",
            "dvbSubSourceSettings",
            TypeInfo::Structure("DvbSubSourceSettings"),
        ),
        FieldMapping::new(
            "embedded_source_settings",
            "embeddedSourceSettings",
            TypeInfo::Structure("EmbeddedSourceSettings"),
        ),
        FieldMapping::new(
            "file_source_settings",
            "fileSourceSettings",
            TypeInfo::Structure("FileSourceSettings"),
        ),
        FieldMapping::new("source_type", "sourceType", TypeInfo::Enum("CaptionSourceType")),
        FieldMapping::new(
            "teletext_source_settings",
            "teletextSourceSettings",
            TypeInfo::Structure("TeletextSourceSettings"),
        ),
    ];
}

/// AWS Elemental MediaConvert `ChannelMapping`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMapping {
    #[serde(rename = "outputChannels", skip_serializing_if = "Option::is_none")]
    pub output_channels: Option<Vec<OutputChannelMapping>>,
}

impl Shape for ChannelMapping {
    const SHAPE_NAME: &'static str = "ChannelMapping";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "output_channels",
            "outputChannels",
            TypeInfo::List(&TypeInfo::Structure("OutputChannelMapping")),
        ),
    ];
}

/// AWS Elemental MediaConvert `CmafEncryptionSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CmafEncryptionSettings {
    #[serde(rename = "constantInitializationVector", skip_serializing_if = "Option::is_none")]
    pub constant_initialization_vector: Option<String>,
    #[serde(rename = "encryptionMethod", skip_serializing_if = "Option::is_none")]
    pub encryption_method: Option<CmafEncryptionType>,
    #[serde(rename = "initializationVectorInManifest", skip_serializing_if = "Option::is_none")]
    pub initialization_vector_in_manifest: Option<CmafInitializationVectorInManifest>,
    #[serde(rename = "staticKeyProvider", skip_serializing_if = "Option::is_none")]
    pub static_key_provider: Option<StaticKeyProvider>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CmafKeyProviderType>,
}

impl Shape for CmafEncryptionSettings {
    const SHAPE_NAME: &'static str = "CmafEncryptionSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "constant_initialization_vector",
            "constantInitializationVector",
            TypeInfo::String,
        ),
        FieldMapping::new(
            "encryption_method",
            "encryptionMethod",
            TypeInfo::Enum("CmafEncryptionType"),
        ),
        FieldMapping::new(
            "initialization_vector_in_manifest",
            "initializationVectorInManifest",
            TypeInfo::Enum("CmafInitializationVectorInManifest"),
        ),
        FieldMapping::new(
            "static_key_provider",
            "staticKeyProvider",
            TypeInfo::Structure("StaticKeyProvider"),
        ),
        FieldMapping::new("type", "type", TypeInfo::Enum("CmafKeyProviderType")),
    ];
}

/// AWS Elemental MediaConvert `CmafGroupSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CmafGroupSettings {
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(rename = "clientCache", skip_serializing_if = "Option::is_none")]
    pub client_cache: Option<CmafClientCache>,
    #[serde(rename = "codecSpecification", skip_serializing_if = "Option::is_none")]
    pub codec_specification: Option<CmafCodecSpecification>,
    #[serde(rename = "destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "encryption", skip_serializing_if = "Option::is_none")]
    pub encryption: Option<CmafEncryptionSettings>,
    #[serde(rename = "fragmentLength", skip_serializing_if = "Option::is_none")]
    pub fragment_length: Option<i32>,
    #[serde(rename = "manifestCompression", skip_serializing_if = "Option::is_none")]
    pub manifest_compression: Option<CmafManifestCompression>,
    #[serde(rename = "manifestDurationFormat", skip_serializing_if = "Option::is_none")]
    pub manifest_duration_format: Option<CmafManifestDurationFormat>,
    #[serde(rename = "minBufferTime", skip_serializing_if = "Option::is_none")]
    pub min_buffer_time: Option<i32>,
    #[serde(rename = "segmentControl", skip_serializing_if = "Option::is_none")]
    pub segment_control: Option<CmafSegmentControl>,
    #[serde(rename = "segmentLength", skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
    #[serde(rename = "streamInfResolution", skip_serializing_if = "Option::is_none")]
    pub stream_inf_resolution: Option<CmafStreamInfResolution>,
    #[serde(rename = "writeDashManifest", skip_serializing_if = "Option::is_none")]
    pub write_dash_manifest: Option<CmafWriteDASHManifest>,
    #[serde(rename = "writeHlsManifest", skip_serializing_if = "Option::is_none")]
    pub write_hls_manifest: Option<CmafWriteHLSManifest>,
}

impl Shape for CmafGroupSettings {
    const SHAPE_NAME: &'static str = "CmafGroupSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("base_url", "baseUrl", TypeInfo::String),
        FieldMapping::new("client_cache", "clientCache", TypeInfo::Enum("CmafClientCache")),
        FieldMapping::new(
            "codec_specification",
            "codecSpecification",
            TypeInfo::Enum("CmafCodecSpecification"),
        ),
        FieldMapping::new("destination", "destination", TypeInfo::String),
        FieldMapping::new(
            "encryption",
            "encryption",
            TypeInfo::Structure("CmafEncryptionSettings"),
        ),
        FieldMapping::new("fragment_length", "fragmentLength", TypeInfo::Integer),
        FieldMapping::new(
            "manifest_compression",
            "manifestCompression",
            TypeInfo::Enum("CmafManifestCompression"),
        ),
        FieldMapping::new(
            "manifest_duration_format",
            "manifestDurationFormat",
            TypeInfo::Enum("CmafManifestDurationFormat"),
        ),
        FieldMapping::new("min_buffer_time", "minBufferTime", TypeInfo::Integer),
        FieldMapping::new(
            "segment_control",
            "segmentControl",
            TypeInfo::Enum("CmafSegmentControl"),
        ),
        FieldMapping::new("segment_length", "segmentLength", TypeInfo::Integer),
        FieldMapping::new(
            "stream_inf_resolution",
            "streamInfResolution",
            TypeInfo::Enum("CmafStreamInfResolution"),
        ),
        FieldMapping::new(
            "write_dash_manifest",
            "writeDashManifest",
            TypeInfo::Enum("CmafWriteDASHManifest"),
        ),
        FieldMapping::new(
            "write_hls_manifest",
            "writeHlsManifest",
            TypeInfo::Enum("CmafWriteHLSManifest"),
        ),
    ];
}

/// AWS Elemental MediaConvert `ColorCorrector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorCorrector {
    #[serde(rename = "brightness", skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,
    #[serde(rename = "colorSpaceConversion", skip_serializing_if = "Option::is_none")]
    pub color_space_conversion: Option<ColorSpaceConversion>,
    #[serde(rename = "contrast", skip_serializing_if = "Option::is_none")]
    pub contrast: Option<i32>,
    #[serde(rename = "hdr10Metadata", skip_serializing_if = "Option::is_none")]
    pub hdr10_metadata: Option<Hdr10Metadata>,
    #[serde(rename = "hue", skip_serializing_if = "Option::is_none")]
    pub hue: Option<i32>,
    #[serde(rename = "saturation", skip_serializing_if = "Option::is_none")]
    pub saturation: Option<i32>,
}

impl Shape for ColorCorrector {
    const SHAPE_NAME: &'static str = "ColorCorrector";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("brightness", "brightness", TypeInfo::Integer),
        FieldMapping::new(
            "color_space_conversion",
            "colorSpaceConversion",
            TypeInfo::Enum("ColorSpaceConversion"),
        ),
        FieldMapping::new("contrast", "contrast", TypeInfo::Integer),
        FieldMapping::new("hdr10_metadata", "hdr10Metadata", TypeInfo::Structure("Hdr10Metadata")),
        FieldMapping::new("hue", "hue", TypeInfo::Integer),
        FieldMapping::new("saturation", "saturation", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `ContainerSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSettings {
    #[serde(rename = "container", skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerType>,
    #[serde(rename = "f4vSettings", skip_serializing_if = "Option::is_none")]
    pub f4v_settings: Option<F4vSettings>,
    #[serde(rename = "m2tsSettings", skip_serializing_if = "Option::is_none")]
    pub m2ts_settings: Option<M2tsSettings>,
    #[serde(rename = "m3u8Settings", skip_serializing_if = "Option::is_none")]
    pub m3u8_settings: Option<M3u8Settings>,
    #[serde(rename = "movSettings", skip_serializing_if = "Option::is_none")]
    pub mov_settings: Option<MovSettings>,
    #[serde(rename = "mp4Settings", skip_serializing_if = "Option::is_none")]
    pub mp4_settings: Option<Mp4Settings>,
}

impl Shape for ContainerSettings {
    const SHAPE_NAME: &'static str = "ContainerSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("container", "container", TypeInfo::Enum("ContainerType")),
        FieldMapping::new("f4v_settings", "f4vSettings", TypeInfo::Structure("F4vSettings")),
        FieldMapping::new("m2ts_settings", "m2tsSettings", TypeInfo::Structure("M2tsSettings")),
        FieldMapping::new("m3u8_settings", "m3u8Settings", TypeInfo::Structure("M3u8Settings")),
        FieldMapping::new("mov_settings", "movSettings", TypeInfo::Structure("MovSettings")),
        FieldMapping::new("mp4_settings", "mp4Settings", TypeInfo::Structure("Mp4Settings")),
    ];
}

/// AWS Elemental MediaConvert `DashIsoEncryptionSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashIsoEncryptionSettings {
    #[serde(rename = "spekeKeyProvider", skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
}

impl Shape for DashIsoEncryptionSettings {
    const SHAPE_NAME: &'static str = "DashIsoEncryptionSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "speke_key_provider",
            "spekeKeyProvider",
            TypeInfo::Structure("SpekeKeyProvider"),
        ),
    ];
}

/// AWS Elemental MediaConvert `DashIsoGroupSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashIsoGroupSettings {
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(rename = "destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "encryption", skip_serializing_if = "Option::is_none")]
    pub encryption: Option<DashIsoEncryptionSettings>,
    #[serde(rename = "fragmentLength", skip_serializing_if = "Option::is_none")]
    pub fragment_length: Option<i32>,
    #[serde(rename = "hbbtvCompliance", skip_serializing_if = "Option::is_none")]
    pub hbbtv_compliance: Option<DashIsoHbbtvCompliance>,
    #[serde(rename = "minBufferTime", skip_serializing_if = "Option::is_none")]
    pub min_buffer_time: Option<i32>,
    #[serde(rename = "segmentControl", skip_serializing_if = "Option::is_none")]
    pub segment_control: Option<DashIsoSegmentControl>,
    #[serde(rename = "segmentLength", skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
}

impl Shape for DashIsoGroupSettings {
    const SHAPE_NAME: &'static str = "DashIsoGroupSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("base_url", "baseUrl", TypeInfo::String),
        FieldMapping::new("destination", "destination", TypeInfo::String),
        FieldMapping::new(
            "encryption",
            "encryption",
            TypeInfo::Structure("DashIsoEncryptionSettings"),
        ),
        FieldMapping::new("fragment_length", "fragmentLength", TypeInfo::Integer),
        FieldMapping::new(
            "hbbtv_compliance",
            "hbbtvCompliance",
            TypeInfo::Enum("DashIsoHbbtvCompliance"),
        ),
        FieldMapping::new("min_buffer_time", "minBufferTime", TypeInfo::Integer),
        FieldMapping::new(
            "segment_control",
            "segmentControl",
            TypeInfo::Enum("DashIsoSegmentControl"),
        ),
        FieldMapping::new("segment_length", "segmentLength", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `Deinterlacer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deinterlacer {
    #[serde(rename = "algorithm", skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<DeinterlaceAlgorithm>,
    #[serde(rename = "control", skip_serializing_if = "Option::is_none")]
    pub control: Option<DeinterlacerControl>,
    #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
    pub mode: Option<DeinterlacerMode>,
}

impl Shape for Deinterlacer {
    const SHAPE_NAME: &'static str = "Deinterlacer";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("algorithm", "algorithm", TypeInfo::Enum("DeinterlaceAlgorithm")),
        FieldMapping::new("control", "control", TypeInfo::Enum("DeinterlacerControl")),
        FieldMapping::new("mode", "mode", TypeInfo::Enum("DeinterlacerMode")),
    ];
}

/// AWS Elemental MediaConvert `DvbNitSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DvbNitSettings {
    #[serde(rename = "networkId", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<i32>,
    #[serde(rename = "networkName", skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    #[serde(rename = "nitInterval", skip_serializing_if = "Option::is_none")]
    pub nit_interval: Option<i32>,
}

impl Shape for DvbNitSettings {
    const SHAPE_NAME: &'static str = "DvbNitSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("network_id", "networkId", TypeInfo::Integer),
        FieldMapping::new("network_name", "networkName", TypeInfo::String),
        FieldMapping::new("nit_interval", "nitInterval", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `DvbSdtSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DvbSdtSettings {
    #[serde(rename = "outputSdt", skip_serializing_if = "Option::is_none")]
    pub output_sdt: Option<OutputSdt>,
    #[serde(rename = "sdtInterval", skip_serializing_if = "Option::is_none")]
    pub sdt_interval: Option<i32>,
    #[serde(rename = "serviceName", skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(rename = "serviceProviderName", skip_serializing_if = "Option::is_none")]
    pub service_provider_name: Option<String>,
}

impl Shape for DvbSdtSettings {
    const SHAPE_NAME: &'static str = "DvbSdtSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("output_sdt", "outputSdt", TypeInfo::Enum("OutputSdt")),
        FieldMapping::new("sdt_interval", "sdtInterval", TypeInfo::Integer),
        FieldMapping::new("service_name", "serviceName", TypeInfo::String),
        FieldMapping::new("service_provider_name", "serviceProviderName", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `DvbSubDestinationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DvbSubDestinationSettings {
    #[serde(rename = "alignment", skip_serializing_if = "Option::is_none")]
    pub alignment: Option<DvbSubtitleAlignment>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<DvbSubtitleBackgroundColor>,
    #[serde(rename = "backgroundOpacity", skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<i32>,
    #[serde(rename = "fontColor", skip_serializing_if = "Option::is_none")]
    pub font_color: Option<DvbSubtitleFontColor>,
    #[serde(rename = "fontOpacity", skip_serializing_if = "Option::is_none")]
    pub font_opacity: Option<i32>,
    #[serde(rename = "fontResolution", skip_serializing_if = "Option::is_none")]
    pub font_resolution: Option<i32>,
    #[serde(rename = "fontScript", skip_serializing_if = "Option::is_none")]
    pub font_script: Option<FontScript>,
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(rename = "outlineColor", skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<DvbSubtitleOutlineColor>,
    #[serde(rename = "outlineSize", skip_serializing_if = "Option::is_none")]
    pub outline_size: Option<i32>,
    #[serde(rename = "shadowColor", skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<DvbSubtitleShadowColor>,
    #[serde(rename = "shadowOpacity", skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<i32>,
    #[serde(rename = "shadowXOffset", skip_serializing_if = "Option::is_none")]
    pub shadow_x_offset: Option<i32>,
    #[serde(rename = "shadowYOffset", skip_serializing_if = "Option::is_none")]
    pub shadow_y_offset: Option<i32>,
    #[serde(rename = "teletextSpacing", skip_serializing_if = "Option::is_none")]
    pub teletext_spacing: Option<DvbSubtitleTeletextSpacing>,
    #[serde(rename = "xPosition", skip_serializing_if = "Option::is_none")]
    pub x_position: Option<i32>,
    #[serde(rename = "yPosition", skip_serializing_if = "Option::is_none")]
    pub y_position: Option<i32>,
}

impl Shape for DvbSubDestinationSettings {
    const SHAPE_NAME: &'static str = "DvbSubDestinationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("alignment", "alignment", TypeInfo::Enum("DvbSubtitleAlignment")),
        FieldMapping::new(
            "background_color",
            "backgroundColor",
            TypeInfo::Enum("DvbSubtitleBackgroundColor"),
        ),
        FieldMapping::new("background_opacity", "backgroundOpacity", TypeInfo::Integer),
        FieldMapping::new("font_color", "fontColor", TypeInfo::Enum("DvbSubtitleFontColor")),
        FieldMapping::new("font_opacity", "fontOpacity", TypeInfo::Integer),
        FieldMapping::new("font_resolution", "fontResolution", TypeInfo::Integer),
        FieldMapping::new("font_script", "fontScript", TypeInfo::Enum("FontScript")),
        FieldMapping::new("font_size", "fontSize", TypeInfo::Integer),
        FieldMapping::new(
            "outline_color",
            "outlineColor",
            TypeInfo::Enum("DvbSubtitleOutlineColor"),
        ),
        FieldMapping::new("outline_size", "outlineSize", TypeInfo::Integer),
        FieldMapping::new("shadow_color", "shadowColor", TypeInfo::Enum("DvbSubtitleShadowColor")),
        FieldMapping::new("shadow_opacity", "shadowOpacity", TypeInfo::Integer),
        FieldMapping::new("shadow_x_offset", "shadowXOffset", TypeInfo::Integer),
        FieldMapping::new("shadow_y_offset", "shadowYOffset", TypeInfo::Integer),
        FieldMapping::new(
            "teletext_spacing",
            "teletextSpacing",
            TypeInfo::Enum("DvbSubtitleTeletextSpacing"),
        ),
        FieldMapping::new("x_position", "xPosition", TypeInfo::Integer),
        FieldMapping::new("y_position", "yPosition", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `DvbSubSourceSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DvbSubSourceSettings {
    #[serde(rename = "pid", skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
}

impl Shape for DvbSubSourceSettings {
    const SHAPE_NAME: &'static str = "DvbSubSourceSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("pid", "pid", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `DvbTdtSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DvbTdtSettings {
    #[serde(rename = "tdtInterval", skip_serializing_if = "Option::is_none")]
    pub tdt_interval: Option<i32>,
}

impl Shape for DvbTdtSettings {
    const SHAPE_NAME: &'static str = "DvbTdtSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("tdt_interval", "tdtInterval", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `Eac3Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Eac3Settings {
    #[serde(rename = "attenuationControl", skip_serializing_if = "Option::is_none")]
    pub attenuation_control: Option<Eac3AttenuationControl>,
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "bitstreamMode", skip_serializing_if = "Option::is_none")]
    pub bitstream_mode: Option<Eac3BitstreamMode>,
    #[serde(rename = "codingMode", skip_serializing_if = "Option::is_none")]
    pub coding_mode: Option<Eac3CodingMode>,
    #[serde(rename = "dcFilter", skip_serializing_if = "Option::is_none")]
    pub dc_filter: Option<Eac3DcFilter>,
    #[serde(rename = "dialnorm", skip_serializing_if = "Option::is_none")]
    pub dialnorm: Option<i32>,
    #[serde(rename = "dynamicRangeCompressionLine", skip_serializing_if = "Option::is_none")]
    pub dynamic_range_compression_line: Option<Eac3DynamicRangeCompressionLine>,
    #[serde(rename = "dynamicRangeCompressionRf", skip_serializing_if = "Option::is_none")]
    pub dynamic_range_compression_rf: Option<Eac3DynamicRangeCompressionRf>,
    #[serde(rename = "lfeControl", skip_serializing_if = "Option::is_none")]
    pub lfe_control: Option<Eac3LfeControl>,
    #[serde(rename = "lfeFilter", skip_serializing_if = "Option::is_none")]
    pub lfe_filter: Option<Eac3LfeFilter>,
    #[serde(rename = "loRoCenterMixLevel", skip_serializing_if = "Option::is_none")]
    pub lo_ro_center_mix_level: Option<f64>,
    #[serde(rename = "loRoSurroundMixLevel", skip_serializing_if = "Option::is_none")]
    pub lo_ro_surround_mix_level: Option<f64>,
    #[serde(rename = "ltRtCenterMixLevel", skip_serializing_if = "Option::is_none")]
    pub lt_rt_center_mix_level: Option<f64>,
    #[serde(rename = "ltRtSurroundMixLevel", skip_serializing_if = "Option::is_none")]
    pub lt_rt_surround_mix_level: Option<f64>,
    #[serde(rename = "metadataControl", skip_serializing_if = "Option::is_none")]
    pub metadata_control: Option<Eac3MetadataControl>,
    #[serde(rename = "passthroughControl", skip_serializing_if = "Option::is_none")]
    pub passthrough_control: Option<Eac3PassthroughControl>,
    #[serde(rename = "phaseControl", skip_serializing_if = "Option::is_none")]
    pub phase_control: Option<Eac3PhaseControl>,
    #[serde(rename = "sampleRate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
    #[serde(rename = "stereoDownmix", skip_serializing_if = "Option::is_none")]
    pub stereo_downmix: Option<Eac3StereoDownmix>,
    #[serde(rename = "surroundExMode", skip_serializing_if = "Option::is_none")]
    pub surround_ex_mode: Option<Eac3SurroundExMode>,
    #[serde(rename = "surroundMode", skip_serializing_if = "Option::is_none")]
    pub surround_mode: Option<Eac3SurroundMode>,
}

impl Shape for Eac3Settings {
    const SHAPE_NAME: &'static str = "Eac3Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "attenuation_control",
            "attenuationControl",
            TypeInfo::Enum("Eac3AttenuationControl"),
        ),
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("bitstream_mode", "bitstreamMode", TypeInfo::Enum("Eac3BitstreamMode")),
        FieldMapping::new("coding_mode", "codingMode", TypeInfo::Enum("Eac3CodingMode")),
        FieldMapping::new("dc_filter", "dcFilter", TypeInfo::Enum("Eac3DcFilter")),
        FieldMapping::new("dialnorm", "dialnorm", TypeInfo::Integer),
        FieldMapping::new(
            "dynamic_range_compression_line",
            "dynamicRangeCompressionLine",
            TypeInfo::Enum("Eac3DynamicRangeCompressionLine"),
        ),
        FieldMapping::new(
            "dynamic_range_compression_rf",
            "dynamicRangeCompressionRf",
            TypeInfo::Enum("Eac3DynamicRangeCompressionRf"),
        ),
        FieldMapping::new("lfe_control", "lfeControl", TypeInfo::Enum("Eac3LfeControl")),
        FieldMapping::new("lfe_filter", "lfeFilter", TypeInfo::Enum("Eac3LfeFilter")),
        FieldMapping::new("lo_ro_center_mix_level", "loRoCenterMixLevel", TypeInfo::Double),
        FieldMapping::new("lo_ro_surround_mix_level", "loRoSurroundMixLevel", TypeInfo::Double),
        FieldMapping::new("lt_rt_center_mix_level", "ltRtCenterMixLevel", TypeInfo::Double),
        FieldMapping::new("lt_rt_surround_mix_level", "ltRtSurroundMixLevel", TypeInfo::Double),
        FieldMapping::new(
            "metadata_control",
            "metadataControl",
            TypeInfo::Enum("Eac3MetadataControl"),
        ),
        FieldMapping::new(
            "passthrough_control",
            "passthroughControl",
            TypeInfo::Enum("Eac3PassthroughControl"),
        ),
        FieldMapping::new("phase_control", "phaseControl", TypeInfo::Enum("Eac3PhaseControl")),
        FieldMapping::new("sample_rate", "sampleRate", TypeInfo::Integer),
        FieldMapping::new("stereo_downmix", "stereoDownmix", TypeInfo::Enum("Eac3StereoDownmix")),
        FieldMapping::new(
            "surround_ex_mode",
            "surroundExMode",
            TypeInfo::Enum("Eac3SurroundExMode"),
        ),
        FieldMapping::new("surround_mode", "surroundMode", TypeInfo::Enum("Eac3SurroundMode")),
    ];
}

/// AWS Elemental MediaConvert `EmbeddedSourceSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedSourceSettings {
    #[serde(rename = "convert608To708", skip_serializing_if = "Option::is_none")]
    pub convert608_to708: Option<EmbeddedConvert608To708>,
    #[serde(rename = "source608ChannelNumber", skip_serializing_if = "Option::is_none")]
    pub source608_channel_number: Option<i32>,
    #[serde(rename = "source608TrackNumber", skip_serializing_if = "Option::is_none")]
    pub source608_track_number: Option<i32>,
}

impl Shape for EmbeddedSourceSettings {
    const SHAPE_NAME: &'static str = "EmbeddedSourceSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "convert608_to708",
            "convert608To708",
            TypeInfo::Enum("EmbeddedConvert608To708"),
        ),
        FieldMapping::new("source608_channel_number", "source608ChannelNumber", TypeInfo::Integer),
        FieldMapping::new("source608_track_number", "source608TrackNumber", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `Endpoint`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Shape for Endpoint {
    const SHAPE_NAME: &'static str = "Endpoint";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("url", "url", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `F4vSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct F4vSettings {
    #[serde(rename = "moovPlacement", skip_serializing_if = "Option::is_none")]
    pub moov_placement: Option<F4vMoovPlacement>,
}

impl Shape for F4vSettings {
    const SHAPE_NAME: &'static str = "F4vSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("moov_placement", "moovPlacement", TypeInfo::Enum("F4vMoovPlacement")),
    ];
}

/// AWS Elemental MediaConvert `FileGroupSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileGroupSettings {
    #[serde(rename = "destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Shape for FileGroupSettings {
    const SHAPE_NAME: &'static str = "FileGroupSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("destination", "destination", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `FileSourceSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSourceSettings {
    #[serde(rename = "convert608To708", skip_serializing_if = "Option::is_none")]
    pub convert608_to708: Option<FileSourceConvert608To708>,
    #[serde(rename = "sourceFile", skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(rename = "timeDelta", skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<i32>,
}

impl Shape for FileSourceSettings {
    const SHAPE_NAME: &'static str = "FileSourceSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "convert608_to708",
            "convert608To708",
            TypeInfo::Enum("FileSourceConvert608To708"),
        ),
        FieldMapping::new("source_file", "sourceFile", TypeInfo::String),
        FieldMapping::new("time_delta", "timeDelta", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `FrameCaptureSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameCaptureSettings {
    #[serde(rename = "framerateDenominator", skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(rename = "framerateNumerator", skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(rename = "maxCaptures", skip_serializing_if = "Option::is_none")]
    pub max_captures: Option<i32>,
    #[serde(rename = "quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,
}

impl Shape for FrameCaptureSettings {
    const SHAPE_NAME: &'static str = "FrameCaptureSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("framerate_denominator", "framerateDenominator", TypeInfo::Integer),
        FieldMapping::new("framerate_numerator", "framerateNumerator", TypeInfo::Integer),
        FieldMapping::new("max_captures", "maxCaptures", TypeInfo::Integer),
        FieldMapping::new("quality", "quality", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `H264QvbrSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct H264QvbrSettings {
    #[serde(rename = "maxAverageBitrate", skip_serializing_if = "Option::is_none")]
    pub max_average_bitrate: Option<i32>,
    #[serde(rename = "qvbrQualityLevel", skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level: Option<i32>,
}

impl Shape for H264QvbrSettings {
    const SHAPE_NAME: &'static str = "H264QvbrSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("max_average_bitrate", "maxAverageBitrate", TypeInfo::Integer),
        FieldMapping::new("qvbr_quality_level", "qvbrQualityLevel", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `H264Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct H264Settings {
    #[serde(rename = "adaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub adaptive_quantization: Option<H264AdaptiveQuantization>,
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "codecLevel", skip_serializing_if = "Option::is_none")]
    pub codec_level: Option<H264CodecLevel>,
    #[serde(rename = "codecProfile", skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<H264CodecProfile>,
    #[serde(rename = "entropyEncoding", skip_serializing_if = "Option::is_none")]
    pub entropy_encoding: Option<H264EntropyEncoding>,
    #[serde(rename = "fieldEncoding", skip_serializing_if = "Option::is_none")]
    pub field_encoding: Option<H264FieldEncoding>,
    #[serde(rename = "flickerAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub flicker_adaptive_quantization: Option<H264FlickerAdaptiveQuantization>,
    #[serde(rename = "framerateControl", skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<H264FramerateControl>,
    #[serde(rename = "framerateConversionAlgorithm", skip_serializing_if = "Option::is_none")]
    pub framerate_conversion_algorithm: Option<H264FramerateConversionAlgorithm>,
    #[serde(rename = "framerateDenominator", skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(rename = "framerateNumerator", skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(rename = "gopBReference", skip_serializing_if = "Option::is_none")]
    pub gop_b_reference: Option<H264GopBReference>,
    #[serde(rename = "gopClosedCadence", skip_serializing_if = "Option::is_none")]
    pub gop_closed_cadence: Option<i32>,
    #[serde(rename = "gopSize", skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(rename = "gopSizeUnits", skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<H264GopSizeUnits>,
    #[serde(rename = "hrdBufferInitialFillPercentage", skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_initial_fill_percentage: Option<i32>,
    #[serde(rename = "hrdBufferSize", skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_size: Option<i32>,
    #[serde(rename = "interlaceMode", skip_serializing_if = "Option::is_none")]
    pub interlace_mode: Option<H264InterlaceMode>,
    #[serde(rename = "maxBitrate", skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    #[serde(rename = "minIInterval", skip_serializing_if = "Option::is_none")]
    pub min_i_interval: Option<i32>,
    #[serde(
        rename = "numberBFramesBetweenReferenceFrames",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_b_frames_between_reference_frames: Option<i32>,
    #[serde(rename = "numberReferenceFrames", skip_serializing_if = "Option::is_none")]
    pub number_reference_frames: Option<i32>,
    #[serde(rename = "parControl", skip_serializing_if = "Option::is_none")]
    pub par_control: Option<H264ParControl>,
    #[serde(rename = "parDenominator", skip_serializing_if = "Option::is_none")]
    pub par_denominator: Option<i32>,
    #[serde(rename = "parNumerator", skip_serializing_if = "Option::is_none")]
    pub par_numerator: Option<i32>,
    #[serde(rename = "qualityTuningLevel", skip_serializing_if = "Option::is_none")]
    pub quality_tuning_level: Option<H264QualityTuningLevel>,
    #[serde(rename = "qvbrSettings", skip_serializing_if = "Option::is_none")]
    pub qvbr_settings: Option<H264QvbrSettings>,
    #[serde(rename = "rateControlMode", skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<H264RateControlMode>,
    #[serde(rename = "repeatPps", skip_serializing_if = "Option::is_none")]
    pub repeat_pps: Option<H264RepeatPps>,
    #[serde(rename = "sceneChangeDetect", skip_serializing_if = "Option::is_none")]
    pub scene_change_detect: Option<H264SceneChangeDetect>,
    #[serde(rename = "slices", skip_serializing_if = "Option::is_none")]
    pub slices: Option<i32>,
    #[serde(rename = "slowPal", skip_serializing_if = "Option::is_none")]
    pub slow_pal: Option<H264SlowPal>,
    #[serde(rename = "softness", skip_serializing_if = "Option::is_none")]
    pub softness: Option<i32>,
    #[serde(rename = "spatialAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub spatial_adaptive_quantization: Option<H264SpatialAdaptiveQuantization>,
    #[serde(rename = "syntax", skip_serializing_if = "Option::is_none")]
    pub syntax: Option<H264Syntax>,
    #[serde(rename = "telecine", skip_serializing_if = "Option::is_none")]
    pub telecine: Option<H264Telecine>,
    #[serde(rename = "temporalAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub temporal_adaptive_quantization: Option<H264TemporalAdaptiveQuantization>,
    #[serde(rename = "unregisteredSeiTimecode", skip_serializing_if = "Option::is_none")]
    pub unregistered_sei_timecode: Option<H264UnregisteredSeiTimecode>,
}

impl Shape for H264Settings {
    const SHAPE_NAME: &'static str = "H264Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "adaptive_quantization",
            "adaptiveQuantization",
            TypeInfo::Enum("H264AdaptiveQuantization"),
        ),
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("codec_level", "codecLevel", TypeInfo::Enum("H264CodecLevel")),
        FieldMapping::new("codec_profile", "codecProfile", TypeInfo::Enum("H264CodecProfile")),
        FieldMapping::new(
            "entropy_encoding",
            "entropyEncoding",
            TypeInfo::Enum("H264EntropyEncoding"),
        ),
        FieldMapping::new("field_encoding", "fieldEncoding", TypeInfo::Enum("H264FieldEncoding")),
        FieldMapping::new(
            "flicker_adaptive_quantization",
            "flickerAdaptiveQuantization",
            TypeInfo::Enum("H264FlickerAdaptiveQuantization"),
        ),
        FieldMapping::new(
            "framerate_control",
            "framerateControl",
            TypeInfo::Enum("H264FramerateControl"),
        ),
        FieldMapping::new(
            "framerate_conversion_algorithm",
            "framerateConversionAlgorithm",
            TypeInfo::Enum("H264FramerateConversionAlgorithm"),
        ),
        FieldMapping::new("framerate_denominator", "framerateDenominator", TypeInfo::Integer),
        FieldMapping::new("framerate_numerator", "framerateNumerator", TypeInfo::Integer),
        FieldMapping::new("gop_b_reference", "gopBReference", TypeInfo::Enum("H264GopBReference")),
        FieldMapping::new("gop_closed_cadence", "gopClosedCadence", TypeInfo::Integer),
        FieldMapping::new("gop_size", "gopSize", TypeInfo::Double),
        FieldMapping::new("gop_size_units", "gopSizeUnits", TypeInfo::Enum("H264GopSizeUnits")),
        FieldMapping::new(
            "hrd_buffer_initial_fill_percentage",
            "hrdBufferInitialFillPercentage",
            TypeInfo::Integer,
        ),
        FieldMapping::new("hrd_buffer_size", "hrdBufferSize", TypeInfo::Integer),
        FieldMapping::new("interlace_mode", "interlaceMode", TypeInfo::Enum("H264InterlaceMode")),
        FieldMapping::new("max_bitrate", "maxBitrate", TypeInfo::Integer),
        FieldMapping::new("min_i_interval", "minIInterval", TypeInfo::Integer),
        FieldMapping::new(
            "number_b_frames_between_reference_frames",
            "numberBFramesBetweenReferenceFrames",
            TypeInfo::Integer,
        ),
        FieldMapping::new("number_reference_frames", "numberReferenceFrames", TypeInfo::Integer),
        FieldMapping::new("par_control", "parControl", TypeInfo::Enum("H264ParControl")),
        FieldMapping::new("par_denominator", "parDenominator", TypeInfo::Integer),
        FieldMapping::new("par_numerator", "parNumerator", TypeInfo::Integer),
        FieldMapping::new(
            "quality_tuning_level",
            "qualityTuningLevel",
            TypeInfo::Enum("H264QualityTuningLevel"),
        ),
        FieldMapping::new("qvbr_settings", "qvbrSettings", TypeInfo::Structure("H264QvbrSettings")),
        FieldMapping::new(
            "rate_control_mode",
            "rateControlMode",
            TypeInfo::Enum("H264RateControlMode"),
        ),
        FieldMapping::new("repeat_pps", "repeatPps", TypeInfo::Enum("H264RepeatPps")),
        FieldMapping::new(
            "scene_change_detect",
            "sceneChangeDetect",
            TypeInfo::Enum("H264SceneChangeDetect"),
        ),
        FieldMapping::new("slices", "slices", TypeInfo::Integer),
        FieldMapping::new("slow_pal", "slowPal", TypeInfo::Enum("H264SlowPal")),
        FieldMapping::new("softness", "softness", TypeInfo::Integer),
        FieldMapping::new(
            "spatial_adaptive_quantization",
            "spatialAdaptiveQuantization",
            TypeInfo::Enum("H264SpatialAdaptiveQuantization"),
        ),
        FieldMapping::new("syntax", "syntax", TypeInfo::Enum("H264Syntax")),
        FieldMapping::new("telecine", "telecine", TypeInfo::Enum("H264Telecine")),
        FieldMapping::new(
            "temporal_adaptive_quantization",
            "temporalAdaptiveQuantization",
            TypeInfo::Enum("H264TemporalAdaptiveQuantization"),
        ),
        FieldMapping::new(
            "unregistered_sei_timecode",
            "unregisteredSeiTimecode",
            TypeInfo::Enum("H264UnregisteredSeiTimecode"),
        ),
    ];
}

/// AWS Elemental MediaConvert `H265QvbrSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct H265QvbrSettings {
    #[serde(rename = "maxAverageBitrate", skip_serializing_if = "Option::is_none")]
    pub max_average_bitrate: Option<i32>,
    #[serde(rename = "qvbrQualityLevel", skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level: Option<i32>,
}

impl Shape for H265QvbrSettings {
    const SHAPE_NAME: &'static str = "H265QvbrSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("max_average_bitrate", "maxAverageBitrate", TypeInfo::Integer),
        FieldMapping::new("qvbr_quality_level", "qvbrQualityLevel", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `H265Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct H265Settings {
    #[serde(rename = "adaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub adaptive_quantization: Option<H265AdaptiveQuantization>,
    #[serde(rename = "alternateTransferFunctionSei", skip_serializing_if = "Option::is_none")]
    pub alternate_transfer_function_sei: Option<H265AlternateTransferFunctionSei>,
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "codecLevel", skip_serializing_if = "Option::is_none")]
    pub codec_level: Option<H265CodecLevel>,
    #[serde(rename = "codecProfile", skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<H265CodecProfile>,
    #[serde(rename = "flickerAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub flicker_adaptive_quantization: Option<H265FlickerAdaptiveQuantization>,
    #[serde(rename = "framerateControl", skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<H265FramerateControl>,
    #[serde(rename = "framerateConversionAlgorithm", skip_serializing_if = "Option::is_none")]
    pub framerate_conversion_algorithm: Option<H265FramerateConversionAlgorithm>,
    #[serde(rename = "framerateDenominator", skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(rename = "framerateNumerator", skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(rename = "gopBReference", skip_serializing_if = "Option::is_none")]
    pub gop_b_reference: Option<H265GopBReference>,
    #[serde(rename = "gopClosedCadence", skip_serializing_if = "Option::is_none")]
    pub gop_closed_cadence: Option<i32>,
    #[serde(rename = "gopSize", skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(rename = "gopSizeUnits", skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<H265GopSizeUnits>,
    #[serde(rename = "hrdBufferInitialFillPercentage", skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_initial_fill_percentage: Option<i32>,
    #[serde(rename = "hrdBufferSize", skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_size: Option<i32>,
    #[serde(rename = "interlaceMode", skip_serializing_if = "Option::is_none")]
    pub interlace_mode: Option<H265InterlaceMode>,
    #[serde(rename = "maxBitrate", skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    #[serde(rename = "minIInterval", skip_serializing_if = "Option::is_none")]
    pub min_i_interval: Option<i32>,
    #[serde(
        rename = "numberBFramesBetweenReferenceFrames",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_b_frames_between_reference_frames: Option<i32>,
    #[serde(rename = "numberReferenceFrames", skip_serializing_if = "Option::is_none")]
    pub number_reference_frames: Option<i32>,
    #[serde(rename = "parControl", skip_serializing_if = "Option::is_none")]
    pub par_control: Option<H265ParControl>,
    #[serde(rename = "parDenominator", skip_serializing_if = "Option::is_none")]
    pub par_denominator: Option<i32>,
    #[serde(rename = "parNumerator", skip_serializing_if = "Option::is_none")]
    pub par_numerator: Option<i32>,
    #[serde(rename = "qualityTuningLevel", skip_serializing_if = "Option::is_none")]
    pub quality_tuning_level: Option<H265QualityTuningLevel>,
    #[serde(rename = "qvbrSettings", skip_serializing_if = "Option::is_none")]
    pub qvbr_settings: Option<H265QvbrSettings>,
    #[serde(rename = "rateControlMode", skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<H265RateControlMode>,
    #[serde(rename = "sampleAdaptiveOffsetFilterMode", skip_serializing_if = "Option::is_none")]
    pub sample_adaptive_offset_filter_mode: Option<H265SampleAdaptiveOffsetFilterMode>,
    #[serde(rename = "sceneChangeDetect", skip_serializing_if = "Option::is_none")]
    pub scene_change_detect: Option<H265SceneChangeDetect>,
    #[serde(rename = "slices", skip_serializing_if = "Option::is_none")]
    pub slices: Option<i32>,
    #[serde(rename = "slowPal", skip_serializing_if = "Option::is_none")]
    pub slow_pal: Option<H265SlowPal>,
    #[serde(rename = "spatialAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub spatial_adaptive_quantization: Option<H265SpatialAdaptiveQuantization>,
    #[serde(rename = "telecine", skip_serializing_if = "Option::is_none")]
    pub telecine: Option<H265Telecine>,
    #[serde(rename = "temporalAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub temporal_adaptive_quantization: Option<H265TemporalAdaptiveQuantization>,
    #[serde(rename = "temporalIds", skip_serializing_if = "Option::is_none")]
    pub temporal_ids: Option<H265TemporalIds>,
    #[serde(rename = "tiles", skip_serializing_if = "Option::is_none")]
    pub tiles: Option<H265Tiles>,
    #[serde(rename = "unregisteredSeiTimecode", skip_serializing_if = "Option::is_none")]
    pub unregistered_sei_timecode: Option<H265UnregisteredSeiTimecode>,
    #[serde(rename = "writeMp4PackagingType", skip_serializing_if = "Option::is_none")]
    pub write_mp4_packaging_type: Option<H265WriteMp4PackagingType>,
}

impl Shape for H265Settings {
    const SHAPE_NAME: &'static str = "H265Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "adaptive_quantization",
            "adaptiveQuantization",
            TypeInfo::Enum("H265AdaptiveQuantization"),
        ),
        FieldMapping::new(
            "alternate_transfer_function_sei",
            "alternateTransferFunctionSei",
            TypeInfo::Enum("H265AlternateTransferFunctionSei"),
        ),
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("codec_level", "codecLevel", TypeInfo::Enum("H265CodecLevel")),
        FieldMapping::new("codec_profile", "codecProfile", TypeInfo::Enum("H265CodecProfile")),
        FieldMapping::new(
            "flicker_adaptive_quantization",
            "flickerAdaptiveQuantization",
            TypeInfo::Enum("H265FlickerAdaptiveQuantization"),
        ),
        FieldMapping::new(
            "framerate_control",
            "framerateControl",
            TypeInfo::Enum("H265FramerateControl"),
        ),
        FieldMapping::new(
            "framerate_conversion_algorithm",
            "framerateConversionAlgorithm",
            TypeInfo::Enum("H265FramerateConversionAlgorithm"),
        ),
        FieldMapping::new("framerate_denominator", "framerateDenominator", TypeInfo::Integer),
        FieldMapping::new("framerate_numerator", "framerateNumerator", TypeInfo::Integer),
        FieldMapping::new("gop_b_reference", "gopBReference", TypeInfo::Enum("H265GopBReference")),
        FieldMapping::new("gop_closed_cadence", "gopClosedCadence", TypeInfo::Integer),
        FieldMapping::new("gop_size", "gopSize", TypeInfo::Double),
        FieldMapping::new("gop_size_units", "gopSizeUnits", TypeInfo::Enum("H265GopSizeUnits")),
        FieldMapping::new(
            "hrd_buffer_initial_fill_percentage",
            "hrdBufferInitialFillPercentage",
            TypeInfo::Integer,
        ),
        FieldMapping::new("hrd_buffer_size", "hrdBufferSize", TypeInfo::Integer),
        FieldMapping::new("interlace_mode", "interlaceMode", TypeInfo::Enum("H265InterlaceMode")),
        FieldMapping::new("max_bitrate", "maxBitrate", TypeInfo::Integer),
        FieldMapping::new("min_i_interval", "minIInterval", TypeInfo::Integer),
        FieldMapping::new(
            "number_b_frames_between_reference_frames",
            "numberBFramesBetweenReferenceFrames",
            TypeInfo::Integer,
        ),
        FieldMapping::new("number_reference_frames", "numberReferenceFrames", TypeInfo::Integer),
        FieldMapping::new("par_control", "parControl", TypeInfo::Enum("H265ParControl")),
        FieldMapping::new("par_denominator", "parDenominator", TypeInfo::Integer),
        FieldMapping::new("par_numerator", "parNumerator", TypeInfo::Integer),
        FieldMapping::new(
            "quality_tuning_level",
            "qualityTuningLevel",
            TypeInfo::Enum("H265QualityTuningLevel"),
        ),
        FieldMapping::new("qvbr_settings", "qvbrSettings", TypeInfo::Structure("H265QvbrSettings")),
        FieldMapping::new(
            "rate_control_mode",
            "rateControlMode",
            TypeInfo::Enum("H265RateControlMode"),
        ),
        FieldMapping::new(
            "sample_adaptive_offset_filter_mode",
            "sampleAdaptiveOffsetFilterMode",
            TypeInfo::Enum("H265SampleAdaptiveOffsetFilterMode"),
        ),
        FieldMapping::new(
            "scene_change_detect",
            "sceneChangeDetect",
            TypeInfo::Enum("H265SceneChangeDetect"),
        ),
        FieldMapping::new("slices", "slices", TypeInfo::Integer),
        FieldMapping::new("slow_pal", "slowPal", TypeInfo::Enum("H265SlowPal")),
        FieldMapping::new(
            "spatial_adaptive_quantization",
            "spatialAdaptiveQuantization",
            TypeInfo::Enum("H265SpatialAdaptiveQuantization"),
        ),
        FieldMapping::new("telecine", "telecine", TypeInfo::Enum("H265Telecine")),
        FieldMapping::new(
            "temporal_adaptive_quantization",
            "temporalAdaptiveQuantization",
            TypeInfo::Enum("H265TemporalAdaptiveQuantization"),
        ),
        FieldMapping::new("temporal_ids", "temporalIds", TypeInfo::Enum("H265TemporalIds")),
        FieldMapping::new("tiles", "tiles", TypeInfo::Enum("H265Tiles")),
        FieldMapping::new(
            "unregistered_sei_timecode",
            "unregisteredSeiTimecode",
            TypeInfo::Enum("H265UnregisteredSeiTimecode"),
        ),
        FieldMapping::new(
            "write_mp4_packaging_type",
            "writeMp4PackagingType",
            TypeInfo::Enum("H265WriteMp4PackagingType"),
        ),
    ];
}

/// AWS Elemental MediaConvert `Hdr10Metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hdr10Metadata {
    #[serde(rename = "bluePrimaryX", skip_serializing_if = "Option::is_none")]
    pub blue_primary_x: Option<i32>,
    #[serde(rename = "bluePrimaryY", skip_serializing_if = "Option::is_none")]
    pub blue_primary_y: Option<i32>,
    #[serde(rename = "greenPrimaryX", skip_serializing_if = "Option::is_none")]
    pub green_primary_x: Option<i32>,
    #[serde(rename = "greenPrimaryY", skip_serializing_if = "Option::is_none")]
    pub green_primary_y: Option<i32>,
    #[serde(rename = "maxContentLightLevel", skip_serializing_if = "Option::is_none")]
    pub max_content_light_level: Option<i32>,
    #[serde(rename = "maxFrameAverageLightLevel", skip_serializing_if = "Option::is_none")]
    pub max_frame_average_light_level: Option<i32>,
    #[serde(rename = "maxLuminance", skip_serializing_if = "Option::is_none")]
    pub max_luminance: Option<i32>,
    #[serde(rename = "minLuminance", skip_serializing_if = "Option::is_none")]
    pub min_luminance: Option<i32>,
    #[serde(rename = "redPrimaryX", skip_serializing_if = "Option::is_none")]
    pub red_primary_x: Option<i32>,
    #[serde(rename = "redPrimaryY", skip_serializing_if = "Option::is_none")]
    pub red_primary_y: Option<i32>,
    #[serde(rename = "whitePointX", skip_serializing_if = "Option::is_none")]
    pub white_point_x: Option<i32>,
    #[serde(rename = "whitePointY", skip_serializing_if = "Option::is_none")]
    pub white_point_y: Option<i32>,
}

impl Shape for Hdr10Metadata {
    const SHAPE_NAME: &'static str = "Hdr10Metadata";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("blue_primary_x", "bluePrimaryX", TypeInfo::Integer),
        FieldMapping::new("blue_primary_y", "bluePrimaryY", TypeInfo::Integer),
        FieldMapping::new("green_primary_x", "greenPrimaryX", TypeInfo::Integer),
        FieldMapping::new("green_primary_y", "greenPrimaryY", TypeInfo::Integer),
        FieldMapping::new("max_content_light_level", "maxContentLightLevel", TypeInfo::Integer),
        FieldMapping::new(
            "max_frame_average_light_level",
            "maxFrameAverageLightLevel",
            TypeInfo::Integer,
        ),
        FieldMapping::new("max_luminance", "maxLuminance", TypeInfo::Integer),
        FieldMapping::new("min_luminance", "minLuminance", TypeInfo::Integer),
        FieldMapping::new("red_primary_x", "redPrimaryX", TypeInfo::Integer),
        FieldMapping::new("red_primary_y", "redPrimaryY", TypeInfo::Integer),
        FieldMapping::new("white_point_x", "whitePointX", TypeInfo::Integer),
        FieldMapping::new("white_point_y", "whitePointY", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `HlsCaptionLanguageMapping`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HlsCaptionLanguageMapping {
    #[serde(rename = "captionChannel", skip_serializing_if = "Option::is_none")]
    pub caption_channel: Option<i32>,
    #[serde(rename = "customLanguageCode", skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(rename = "languageDescription", skip_serializing_if = "Option::is_none")]
    pub language_description: Option<String>,
}

impl Shape for HlsCaptionLanguageMapping {
    const SHAPE_NAME: &'static str = "HlsCaptionLanguageMapping";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("caption_channel", "captionChannel", TypeInfo::Integer),
        FieldMapping::new("custom_language_code", "customLanguageCode", TypeInfo::String),
        FieldMapping::new("language_code", "languageCode", TypeInfo::Enum("LanguageCode")),
        FieldMapping::new("language_description", "languageDescription", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `HlsEncryptionSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HlsEncryptionSettings {
    #[serde(rename = "constantInitializationVector", skip_serializing_if = "Option::is_none")]
    pub constant_initialization_vector: Option<String>,
    #[serde(rename = "encryptionMethod", skip_serializing_if = "Option::is_none")]
    pub encryption_method: Option<HlsEncryptionType>,
    #[serde(rename = "initializationVectorInManifest", skip_serializing_if = "Option::is_none")]
    pub initialization_vector_in_manifest: Option<HlsInitializationVectorInManifest>,
    #[serde(rename = "spekeKeyProvider", skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
    #[serde(rename = "staticKeyProvider", skip_serializing_if = "Option::is_none")]
    pub static_key_provider: Option<StaticKeyProvider>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<HlsKeyProviderType>,
}

impl Shape for HlsEncryptionSettings {
    const SHAPE_NAME: &'static str = "HlsEncryptionSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "constant_initialization_vector",
            "constantInitializationVector",
            TypeInfo::String,
        ),
        FieldMapping::new(
            "encryption_method",
            "encryptionMethod",
            TypeInfo::Enum("HlsEncryptionType"),
        ),
        FieldMapping::new(
            "initialization_vector_in_manifest",
            "initializationVectorInManifest",
            TypeInfo::Enum("HlsInitializationVectorInManifest"),
        ),
        FieldMapping::new(
            "speke_key_provider",
            "spekeKeyProvider",
            TypeInfo::Structure("SpekeKeyProvider"),
        ),
        FieldMapping::new(
            "static_key_provider",
            "staticKeyProvider",
            TypeInfo::Structure("StaticKeyProvider"),
        ),
        FieldMapping::new("type", "type", TypeInfo::Enum("HlsKeyProviderType")),
    ];
}

/// AWS Elemental MediaConvert `HlsGroupSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HlsGroupSettings {
    #[serde(rename = "adMarkers", skip_serializing_if = "Option::is_none")]
    pub ad_markers: Option<Vec<HlsAdMarkers>>,
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(rename = "captionLanguageMappings", skip_serializing_if = "Option::is_none")]
    pub caption_language_mappings: Option<Vec<HlsCaptionLanguageMapping>>,
    #[serde(rename = "captionLanguageSetting", skip_serializing_if = "Option::is_none")]
    pub caption_language_setting: Option<HlsCaptionLanguageSetting>,
    #[serde(rename = "clientCache", skip_serializing_if = "Option::is_none")]
    pub client_cache: Option<HlsClientCache>,
    #[serde(rename = "codecSpecification", skip_serializing_if = "Option::is_none")]
    pub codec_specification: Option<HlsCodecSpecification>,
    #[serde(rename = "destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "directoryStructure", skip_serializing_if = "Option::is_none")]
    pub directory_structure: Option<HlsDirectoryStructure>,
    #[serde(rename = "encryption", skip_serializing_if = "Option::is_none")]
    pub encryption: Option<HlsEncryptionSettings>,
    #[serde(rename = "manifestCompression", skip_serializing_if = "Option::is_none")]
    pub manifest_compression: Option<HlsManifestCompression>,
    #[serde(rename = "manifestDurationFormat", skip_serializing_if = "Option::is_none")]
    pub manifest_duration_format: Option<HlsManifestDurationFormat>,
    #[serde(rename = "minSegmentLength", skip_serializing_if = "Option::is_none")]
    pub min_segment_length: Option<i32>,
    #[serde(rename = "outputSelection", skip_serializing_if = "Option::is_none")]
    pub output_selection: Option<HlsOutputSelection>,
    #[serde(rename = "programDateTime", skip_serializing_if = "Option::is_none")]
    pub program_date_time: Option<HlsProgramDateTime>,
    #[serde(rename = "programDateTimePeriod", skip_serializing_if = "Option::is_none")]
    pub program_date_time_period: Option<i32>,
    #[serde(rename = "segmentControl", skip_serializing_if = "Option::is_none")]
    pub segment_control: Option<HlsSegmentControl>,
    #[serde(rename = "segmentLength", skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
    #[serde(rename = "segmentsPerSubdirectory", skip_serializing_if = "Option::is_none")]
    pub segments_per_subdirectory: Option<i32>,
    #[serde(rename = "streamInfResolution", skip_serializing_if = "Option::is_none")]
    pub stream_inf_resolution: Option<HlsStreamInfResolution>,
    #[serde(rename = "timedMetadataId3Frame", skip_serializing_if = "Option::is_none")]
    pub timed_metadata_id3_frame: Option<HlsTimedMetadataId3Frame>,
    #[serde(rename = "timedMetadataId3Period", skip_serializing_if = "Option::is_none")]
    pub timed_metadata_id3_period: Option<i32>,
    #[serde(rename = "timestampDeltaMilliseconds", skip_serializing_if = "Option::is_none")]
    pub timestamp_delta_milliseconds: Option<i32>,
}

impl Shape for HlsGroupSettings {
    const SHAPE_NAME: &'static str = "HlsGroupSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "ad_markers",
            "adMarkers",
            TypeInfo::List(&TypeInfo::Enum("HlsAdMarkers")),
        ),
        FieldMapping::new("base_url", "baseUrl", TypeInfo::String),
        FieldMapping::new(
            "caption_language_mappings",
            "captionLanguageMappings",
            TypeInfo::List(&TypeInfo::Structure("HlsCaptionLanguageMapping")),
        ),
        FieldMapping::new(
            "caption_language_setting",
            "captionLanguageSetting",
            TypeInfo::Enum("HlsCaptionLanguageSetting"),
        ),
        FieldMapping::new("client_cache", "clientCache", TypeInfo::Enum("HlsClientCache")),
        FieldMapping::new(
            "codec_specification",
            "codecSpecification",
            TypeInfo::Enum("HlsCodecSpecification"),
        ),
        FieldMapping::new("destination", "destination", TypeInfo::String),
        FieldMapping::new(
            "directory_structure",
            "directoryStructure",
            TypeInfo::Enum("HlsDirectoryStructure"),
        ),
        FieldMapping::new("encryption", "encryption", TypeInfo::Structure("HlsEncryptionSettings")),
        FieldMapping::new(
            "manifest_compression",
            "manifestCompression",
            TypeInfo::Enum("HlsManifestCompression"),
        ),
        FieldMapping::new(
            "manifest_duration_format",
            "manifestDurationFormat",
            TypeInfo::Enum("HlsManifestDurationFormat"),
        ),
        FieldMapping::new("min_segment_length", "minSegmentLength", TypeInfo::Integer),
        FieldMapping::new(
            "output_selection",
            "outputSelection",
            TypeInfo::Enum("HlsOutputSelection"),
        ),
        FieldMapping::new(
            "program_date_time",
            "programDateTime",
            TypeInfo::Enum("HlsProgramDateTime"),
        ),
        FieldMapping::new("program_date_time_period", "programDateTimePeriod", TypeInfo::Integer),
        FieldMapping::new("segment_control", "segmentControl", TypeInfo::Enum("HlsSegmentControl")),
        FieldMapping::new("segment_length", "segmentLength", TypeInfo::Integer),
        FieldMapping::new(
            "segments_per_subdirectory",
            "segmentsPerSubdirectory",
            TypeInfo::Integer,
        ),
        FieldMapping::new(
            "stream_inf_resolution",
            "streamInfResolution",
            TypeInfo::Enum("HlsStreamInfResolution"),
        ),
        FieldMapping::new(
            "timed_metadata_id3_frame",
            "timedMetadataId3Frame",
            TypeInfo::Enum("HlsTimedMetadataId3Frame"),
        ),
        FieldMapping::new("timed_metadata_id3_period", "timedMetadataId3Period", TypeInfo::Integer),
        FieldMapping::new(
            "timestamp_delta_milliseconds",
            "timestampDeltaMilliseconds",
            TypeInfo::Integer,
        ),
    ];
}

/// AWS Elemental MediaConvert `HlsSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HlsSettings {
    #[serde(rename = "audioGroupId", skip_serializing_if = "Option::is_none")]
    pub audio_group_id: Option<String>,
    #[serde(rename = "audioRenditionSets", skip_serializing_if = "Option::is_none")]
    pub audio_rendition_sets: Option<String>,
    #[serde(rename = "audioTrackType", skip_serializing_if = "Option::is_none")]
    pub audio_track_type: Option<HlsAudioTrackType>,
    #[serde(rename = "iFrameOnlyManifest", skip_serializing_if = "Option::is_none")]
    pub i_frame_only_manifest: Option<HlsIFrameOnlyManifest>,
    #[serde(rename = "segmentModifier", skip_serializing_if = "Option::is_none")]
    pub segment_modifier: Option<String>,
}

impl Shape for HlsSettings {
    const SHAPE_NAME: &'static str = "HlsSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("audio_group_id", "audioGroupId", TypeInfo::String),
        FieldMapping::new("audio_rendition_sets", "audioRenditionSets", TypeInfo::String),
        FieldMapping::new(
            "audio_track_type",
            "audioTrackType",
            TypeInfo::Enum("HlsAudioTrackType"),
        ),
        FieldMapping::new(
            "i_frame_only_manifest",
            "iFrameOnlyManifest",
            TypeInfo::Enum("HlsIFrameOnlyManifest"),
        ),
        FieldMapping::new("segment_modifier", "segmentModifier", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `Id3Insertion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Id3Insertion {
    #[serde(rename = "id3", skip_serializing_if = "Option::is_none")]
    pub id3: Option<String>,
    #[serde(rename = "timecode", skip_serializing_if = "Option::is_none")]
    pub timecode: Option<String>,
}

impl Shape for Id3Insertion {
    const SHAPE_NAME: &'static str = "Id3Insertion";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("id3", "id3", TypeInfo::String),
        FieldMapping::new("timecode", "timecode", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `ImageInserter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInserter {
    #[serde(rename = "insertableImages", skip_serializing_if = "Option::is_none")]
    pub insertable_images: Option<Vec<InsertableImage>>,
}

impl Shape for ImageInserter {
    const SHAPE_NAME: &'static str = "ImageInserter";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "insertable_images",
            "insertableImages",
            TypeInfo::List(&TypeInfo::Structure("InsertableImage")),
        ),
    ];
}

/// AWS Elemental MediaConvert `Input`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "audioSelectorGroups", skip_serializing_if = "Option::is_none")]
    pub audio_selector_groups: Option<HashMap<String, AudioSelectorGroup>>,
    #[serde(rename = "audioSelectors", skip_serializing_if = "Option::is_none")]
    pub audio_selectors: Option<HashMap<String, AudioSelector>>,
    #[serde(rename = "captionSelectors", skip_serializing_if = "Option::is_none")]
    pub caption_selectors: Option<HashMap<String, CaptionSelector>>,
    #[serde(rename = "deblockFilter", skip_serializing_if = "Option::is_none")]
    pub deblock_filter: Option<InputDeblockFilter>,
    #[serde(rename = "decryptionSettings", skip_serializing_if = "Option::is_none")]
    pub decryption_settings: Option<InputDecryptionSettings>,
    #[serde(rename = "denoiseFilter", skip_serializing_if = "Option::is_none")]
    pub denoise_filter: Option<InputDenoiseFilter>,
    #[serde(rename = "fileInput", skip_serializing_if = "Option::is_none")]
    pub file_input: Option<String>,
    #[serde(rename = "filterEnable", skip_serializing_if = "Option::is_none")]
    pub filter_enable: Option<InputFilterEnable>,
    #[serde(rename = "filterStrength", skip_serializing_if = "Option::is_none")]
    pub filter_strength: Option<i32>,
    #[serde(rename = "imageInserter", skip_serializing_if = "Option::is_none")]
    pub image_inserter: Option<ImageInserter>,
    #[serde(rename = "inputClippings", skip_serializing_if = "Option::is_none")]
    pub input_clippings: Option<Vec<InputClipping>>,
    #[serde(rename = "programNumber", skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(rename = "psiControl", skip_serializing_if = "Option::is_none")]
    pub psi_control: Option<InputPsiControl>,
    #[serde(rename = "timecodeSource", skip_serializing_if = "Option::is_none")]
    pub timecode_source: Option<InputTimecodeSource>,
    #[serde(rename = "videoSelector", skip_serializing_if = "Option::is_none")]
    pub video_selector: Option<VideoSelector>,
}

impl Shape for Input {
    const SHAPE_NAME: &'static str = "Input";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_selector_groups",
            "audioSelectorGroups",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("AudioSelectorGroup")),
        ),
        FieldMapping::new(
            "audio_selectors",
            "audioSelectors",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("AudioSelector")),
        ),
        FieldMapping::new(
            "caption_selectors",
            "captionSelectors",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("CaptionSelector")),
        ),
        FieldMapping::new("deblock_filter", "deblockFilter", TypeInfo::Enum("InputDeblockFilter")),
        FieldMapping::new(
            "decryption_settings",
            "decryptionSettings",
            TypeInfo::Structure("InputDecryptionSettings"),
        ),
        FieldMapping::new("denoise_filter", "denoiseFilter", TypeInfo::Enum("InputDenoiseFilter")),
        FieldMapping::new("file_input", "fileInput", TypeInfo::String),
        FieldMapping::new("filter_enable", "filterEnable", TypeInfo::Enum("InputFilterEnable")),
        FieldMapping::new("filter_strength", "filterStrength", TypeInfo::Integer),
        FieldMapping::new("image_inserter", "imageInserter", TypeInfo::Structure("ImageInserter")),
        FieldMapping::new(
            "input_clippings",
            "inputClippings",
            TypeInfo::List(&TypeInfo::Structure("InputClipping")),
        ),
        FieldMapping::new("program_number", "programNumber", TypeInfo::Integer),
        FieldMapping::new("psi_control", "psiControl", TypeInfo::Enum("InputPsiControl")),
        FieldMapping::new(
            "timecode_source",
            "timecodeSource",
            TypeInfo::Enum("InputTimecodeSource"),
        ),
        FieldMapping::new("video_selector", "videoSelector", TypeInfo::Structure("VideoSelector")),
    ];
}

/// AWS Elemental MediaConvert `InputClipping`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputClipping {
    #[serde(rename = "endTimecode", skip_serializing_if = "Option::is_none")]
    pub end_timecode: Option<String>,
    #[serde(rename = "startTimecode", skip_serializing_if = "Option::is_none")]
    pub start_timecode: Option<String>,
}

impl Shape for InputClipping {
    const SHAPE_NAME: &'static str = "InputClipping";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("end_timecode", "endTimecode", TypeInfo::String),
        FieldMapping::new("start_timecode", "startTimecode", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `InputDecryptionSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDecryptionSettings {
    #[serde(rename = "decryptionMode", skip_serializing_if = "Option::is_none")]
    pub decryption_mode: Option<DecryptionMode>,
    #[serde(rename = "encryptedDecryptionKey", skip_serializing_if = "Option::is_none")]
    pub encrypted_decryption_key: Option<String>,
    #[serde(rename = "initializationVector", skip_serializing_if = "Option::is_none")]
    pub initialization_vector: Option<String>,
    #[serde(rename = "kmsKeyRegion", skip_serializing_if = "Option::is_none")]
    pub kms_key_region: Option<String>,
}

impl Shape for InputDecryptionSettings {
    const SHAPE_NAME: &'static str = "InputDecryptionSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("decryption_mode", "decryptionMode", TypeInfo::Enum("DecryptionMode")),
        FieldMapping::new("encrypted_decryption_key", "encryptedDecryptionKey", TypeInfo::String),
        FieldMapping::new("initialization_vector", "initializationVector", TypeInfo::String),
        FieldMapping::new("kms_key_region", "kmsKeyRegion", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `InputTemplate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTemplate {
    #[serde(rename = "audioSelectorGroups", skip_serializing_if = "Option::is_none")]
    pub audio_selector_groups: Option<HashMap<String, AudioSelectorGroup>>,
    #[serde(rename = "audioSelectors", skip_serializing_if = "Option::is_none")]
    pub audio_selectors: Option<HashMap<String, AudioSelector>>,
    #[serde(rename = "captionSelectors", skip_serializing_if = "Option::is_none")]
    pub caption_selectors: Option<HashMap<String, CaptionSelector>>,
    #[serde(rename = "deblockFilter", skip_serializing_if = "Option::is_none")]
    pub deblock_filter: Option<InputDeblockFilter>,
    #[serde(rename = "denoiseFilter", skip_serializing_if = "Option::is_none")]
    pub denoise_filter: Option<InputDenoiseFilter>,
    #[serde(rename = "filterEnable", skip_serializing_if = "Option::is_none")]
    pub filter_enable: Option<InputFilterEnable>,
    #[serde(rename = "filterStrength", skip_serializing_if = "Option::is_none")]
    pub filter_strength: Option<i32>,
    #[serde(rename = "imageInserter", skip_serializing_if = "Option::is_none")]
    pub image_inserter: Option<ImageInserter>,
    #[serde(rename = "inputClippings", skip_serializing_if = "Option::is_none")]
    pub input_clippings: Option<Vec<InputClipping>>,
    #[serde(rename = "programNumber", skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(rename = "psiControl", skip_serializing_if = "Option::is_none")]
    pub psi_control: Option<InputPsiControl>,
    #[serde(rename = "timecodeSource", skip_serializing_if = "Option::is_none")]
    pub timecode_source: Option<InputTimecodeSource>,
    #[serde(rename = "videoSelector", skip_serializing_if = "Option::is_none")]
    pub video_selector: Option<VideoSelector>,
}

impl Shape for InputTemplate {
    const SHAPE_NAME: &'static str = "InputTemplate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_selector_groups",
            "audioSelectorGroups",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("AudioSelectorGroup")),
        ),
        FieldMapping::new(
            "audio_selectors",
            "audioSelectors",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("AudioSelector")),
        ),
        FieldMapping::new(
            "caption_selectors",
            "captionSelectors",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("CaptionSelector")),
        ),
        FieldMapping::new("deblock_filter", "deblockFilter", TypeInfo::Enum("InputDeblockFilter")),
        FieldMapping::new("denoise_filter", "denoiseFilter", TypeInfo::Enum("InputDenoiseFilter")),
        FieldMapping::new("filter_enable", "filterEnable", TypeInfo::Enum("InputFilterEnable")),
        FieldMapping::new("filter_strength", "filterStrength", TypeInfo::Integer),
        FieldMapping::new("image_inserter", "imageInserter", TypeInfo::Structure("ImageInserter")),
        FieldMapping::new(
            "input_clippings",
            "inputClippings",
            TypeInfo::List(&TypeInfo::Structure("InputClipping")),
        ),
        FieldMapping::new("program_number", "programNumber", TypeInfo::Integer),
        FieldMapping::new("psi_control", "psiControl", TypeInfo::Enum("InputPsiControl")),
        FieldMapping::new(
            "timecode_source",
            "timecodeSource",
            TypeInfo::Enum("InputTimecodeSource"),
        ),
        FieldMapping::new("video_selector", "videoSelector", TypeInfo::Structure("VideoSelector")),
    ];
}

/// AWS Elemental MediaConvert `InsertableImage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertableImage {
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(rename = "fadeIn", skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<i32>,
    #[serde(rename = "fadeOut", skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<i32>,
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(rename = "imageInserterInput", skip_serializing_if = "Option::is_none")]
    pub image_inserter_input: Option<String>,
    #[serde(rename = "imageX", skip_serializing_if = "Option::is_none")]
    pub image_x: Option<i32>,
    #[serde(rename = "imageY", skip_serializing_if = "Option::is_none")]
    pub image_y: Option<i32>,
    #[serde(rename = "layer", skip_serializing_if = "Option::is_none")]
    pub layer: Option<i32>,
    #[serde(rename = "opacity", skip_serializing_if = "Option::is_none")]
    pub opacity: Option<i32>,
    #[serde(rename = "startTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "width", skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

impl Shape for InsertableImage {
    const SHAPE_NAME: &'static str = "InsertableImage";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("duration", "duration", TypeInfo::Integer),
        FieldMapping::new("fade_in", "fadeIn", TypeInfo::Integer),
        FieldMapping::new("fade_out", "fadeOut", TypeInfo::Integer),
        FieldMapping::new("height", "height", TypeInfo::Integer),
        FieldMapping::new("image_inserter_input", "imageInserterInput", TypeInfo::String),
        FieldMapping::new("image_x", "imageX", TypeInfo::Integer),
        FieldMapping::new("image_y", "imageY", TypeInfo::Integer),
        FieldMapping::new("layer", "layer", TypeInfo::Integer),
        FieldMapping::new("opacity", "opacity", TypeInfo::Integer),
        FieldMapping::new("start_time", "startTime", TypeInfo::String),
        FieldMapping::new("width", "width", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `Job`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "billingTagsSource", skip_serializing_if = "Option::is_none")]
    pub billing_tags_source: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "jobTemplate", skip_serializing_if = "Option::is_none")]
    pub job_template: Option<String>,
    #[serde(rename = "outputGroupDetails", skip_serializing_if = "Option::is_none")]
    pub output_group_details: Option<Vec<OutputGroupDetail>>,
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(rename = "role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobSettings>,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(rename = "timing", skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(rename = "userMetadata", skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<HashMap<String, String>>,
}

impl Shape for Job {
    const SHAPE_NAME: &'static str = "Job";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String),
        FieldMapping::new("billing_tags_source", "billingTagsSource", TypeInfo::String),
        FieldMapping::new("created_at", "createdAt", TypeInfo::Timestamp),
        FieldMapping::new("error_code", "errorCode", TypeInfo::Integer),
        FieldMapping::new("error_message", "errorMessage", TypeInfo::String),
        FieldMapping::new("id", "id", TypeInfo::String),
        FieldMapping::new("job_template", "jobTemplate", TypeInfo::String),
        FieldMapping::new(
            "output_group_details",
            "outputGroupDetails",
            TypeInfo::List(&TypeInfo::Structure("OutputGroupDetail")),
        ),
        FieldMapping::new("queue", "queue", TypeInfo::String),
        FieldMapping::new("role", "role", TypeInfo::String).required(),
        FieldMapping::new("settings", "settings", TypeInfo::Structure("JobSettings")).required(),
        FieldMapping::new("status", "status", TypeInfo::Enum("JobStatus")),
        FieldMapping::new("timing", "timing", TypeInfo::Structure("Timing")),
        FieldMapping::new(
            "user_metadata",
            "userMetadata",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::String),
        ),
    ];
}

/// AWS Elemental MediaConvert `JobSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(rename = "adAvailOffset", skip_serializing_if = "Option::is_none")]
    pub ad_avail_offset: Option<i32>,
    #[serde(rename = "availBlanking", skip_serializing_if = "Option::is_none")]
    pub avail_blanking: Option<AvailBlanking>,
    #[serde(rename = "inputs", skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Input>>,
    #[serde(rename = "nielsenConfiguration", skip_serializing_if = "Option::is_none")]
    pub nielsen_configuration: Option<NielsenConfiguration>,
    #[serde(rename = "outputGroups", skip_serializing_if = "Option::is_none")]
    pub output_groups: Option<Vec<OutputGroup>>,
    #[serde(rename = "timecodeConfig", skip_serializing_if = "Option::is_none")]
    pub timecode_config: Option<TimecodeConfig>,
    #[serde(rename = "timedMetadataInsertion", skip_serializing_if = "Option::is_none")]
    pub timed_metadata_insertion: Option<TimedMetadataInsertion>,
}

impl Shape for JobSettings {
    const SHAPE_NAME: &'static str = "JobSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("ad_avail_offset", "adAvailOffset", TypeInfo::Integer),
        FieldMapping::new("avail_blanking", "availBlanking", TypeInfo::Structure("AvailBlanking")),
        FieldMapping::new("inputs", "inputs", TypeInfo::List(&TypeInfo::Structure("Input"))),
        FieldMapping::new(
            "nielsen_configuration",
            "nielsenConfiguration",
            TypeInfo::Structure("NielsenConfiguration"),
        ),
        FieldMapping::new(
            "output_groups",
            "outputGroups",
            TypeInfo::List(&TypeInfo::Structure("OutputGroup")),
        ),
        FieldMapping::new(
            "timecode_config",
            "timecodeConfig",
            TypeInfo::Structure("TimecodeConfig"),
        ),
        FieldMapping::new(
            "timed_metadata_insertion",
            "timedMetadataInsertion",
            TypeInfo::Structure("TimedMetadataInsertion"),
        ),
    ];
}

/// AWS Elemental MediaConvert `JobTemplate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTemplate {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "lastUpdated",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobTemplateSettings>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
}

impl Shape for JobTemplate {
    const SHAPE_NAME: &'static str = "JobTemplate";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String),
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("created_at", "createdAt", TypeInfo::Timestamp),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("last_updated", "lastUpdated", TypeInfo::Timestamp),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("queue", "queue", TypeInfo::String),
        FieldMapping::new(
            "settings",
            "settings",
            TypeInfo::Structure("JobTemplateSettings"),
        )
        .required(),
        FieldMapping::new("type", "type", TypeInfo::Enum("Type")),
    ];
}

/// AWS Elemental MediaConvert `JobTemplateSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTemplateSettings {
    #[serde(rename = "adAvailOffset", skip_serializing_if = "Option::is_none")]
    pub ad_avail_offset: Option<i32>,
    #[serde(rename = "availBlanking", skip_serializing_if = "Option::is_none")]
    pub avail_blanking: Option<AvailBlanking>,
    #[serde(rename = "inputs", skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<InputTemplate>>,
    #[serde(rename = "nielsenConfiguration", skip_serializing_if = "Option::is_none")]
    pub nielsen_configuration: Option<NielsenConfiguration>,
    #[serde(rename = "outputGroups", skip_serializing_if = "Option::is_none")]
    pub output_groups: Option<Vec<OutputGroup>>,
    #[serde(rename = "timecodeConfig", skip_serializing_if = "Option::is_none")]
    pub timecode_config: Option<TimecodeConfig>,
    #[serde(rename = "timedMetadataInsertion", skip_serializing_if = "Option::is_none")]
    pub timed_metadata_insertion: Option<TimedMetadataInsertion>,
}

impl Shape for JobTemplateSettings {
    const SHAPE_NAME: &'static str = "JobTemplateSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("ad_avail_offset", "adAvailOffset", TypeInfo::Integer),
        FieldMapping::new("avail_blanking", "availBlanking", TypeInfo::Structure("AvailBlanking")),
        FieldMapping::new(
            "inputs",
            "inputs",
            TypeInfo::List(&TypeInfo::Structure("InputTemplate")),
        ),
        FieldMapping::new(
            "nielsen_configuration",
            "nielsenConfiguration",
            TypeInfo::Structure("NielsenConfiguration"),
        ),
        FieldMapping::new(
            "output_groups",
            "outputGroups",
            TypeInfo::List(&TypeInfo::Structure("OutputGroup")),
        ),
        FieldMapping::new(
            "timecode_config",
            "timecodeConfig",
            TypeInfo::Structure("TimecodeConfig"),
        ),
        FieldMapping::new(
            "timed_metadata_insertion",
            "timedMetadataInsertion",
            TypeInfo::Structure("TimedMetadataInsertion"),
        ),
    ];
}

/// AWS Elemental MediaConvert `M2tsSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct M2tsSettings {
    #[serde(rename = "audioBufferModel", skip_serializing_if = "Option::is_none")]
    pub audio_buffer_model: Option<M2tsAudioBufferModel>,
    #[serde(rename = "audioFramesPerPes", skip_serializing_if = "Option::is_none")]
    pub audio_frames_per_pes: Option<i32>,
    #[serde(rename = "audioPids", skip_serializing_if = "Option::is_none")]
    pub audio_pids: Option<Vec<i32>>,
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "bufferModel", skip_serializing_if = "Option::is_none")]
    pub buffer_model: Option<M2tsBufferModel>,
    #[serde(rename = "dvbNitSettings", skip_serializing_if = "Option::is_none")]
    pub dvb_nit_settings: Option<DvbNitSettings>,
    #[serde(rename = "dvbSdtSettings", skip_serializing_if = "Option::is_none")]
    pub dvb_sdt_settings: Option<DvbSdtSettings>,
    #[serde(rename = "dvbSubPids", skip_serializing_if = "Option::is_none")]
    pub dvb_sub_pids: Option<Vec<i32>>,
    #[serde(rename = "dvbTdtSettings", skip_serializing_if = "Option::is_none")]
    pub dvb_tdt_settings: Option<DvbTdtSettings>,
    #[serde(rename = "dvbTeletextPid", skip_serializing_if = "Option::is_none")]
    pub dvb_teletext_pid: Option<i32>,
    #[serde(rename = "ebpAudioInterval", skip_serializing_if = "Option::is_none")]
    pub ebp_audio_interval: Option<M2tsEbpAudioInterval>,
    #[serde(rename = "ebpPlacement", skip_serializing_if = "Option::is_none")]
    pub ebp_placement: Option<M2tsEbpPlacement>,
    #[serde(rename = "esRateInPes", skip_serializing_if = "Option::is_none")]
    pub es_rate_in_pes: Option<M2tsEsRateInPes>,
    #[serde(rename = "fragmentTime", skip_serializing_if = "Option::is_none")]
    pub fragment_time: Option<f64>,
    #[serde(rename = "maxPcrInterval", skip_serializing_if = "Option::is_none")]
    pub max_pcr_interval: Option<i32>,
    #[serde(rename = "minEbpInterval", skip_serializing_if = "Option::is_none")]
    pub min_ebp_interval: Option<i32>,
    #[serde(rename = "nielsenId3", skip_serializing_if = "Option::is_none")]
    pub nielsen_id3: Option<M2tsNielsenId3>,
    #[serde(rename = "nullPacketBitrate", skip_serializing_if = "Option::is_none")]
    pub null_packet_bitrate: Option<f64>,
    #[serde(rename = "patInterval", skip_serializing_if = "Option::is_none")]
    pub pat_interval: Option<i32>,
    #[serde(rename = "pcrControl", skip_serializing_if = "Option::is_none")]
    pub pcr_control: Option<M2tsPcrControl>,
    #[serde(rename = "pcrPid", skip_serializing_if = "Option::is_none")]
    pub pcr_pid: Option<i32>,
    #[serde(rename = "pmtInterval", skip_serializing_if = "Option::is_none")]
    pub pmt_interval: Option<i32>,
    #[serde(rename = "pmtPid", skip_serializing_if = "Option::is_none")]
    pub pmt_pid: Option<i32>,
    #[serde(rename = "privateMetadataPid", skip_serializing_if = "Option::is_none")]
    pub private_metadata_pid: Option<i32>,
    #[serde(rename = "programNumber", skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(rename = "rateMode", skip_serializing_if = "Option::is_none")]
    pub rate_mode: Option<M2tsRateMode>,
    #[serde(rename = "scte35Pid", skip_serializing_if = "Option::is_none")]
    pub scte35_pid: Option<i32>,
    #[serde(rename = "scte35Source", skip_serializing_if = "Option::is_none")]
    pub scte35_source: Option<M2tsScte35Source>,
    #[serde(rename = "segmentationMarkers", skip_serializing_if = "Option::is_none")]
    pub segmentation_markers: Option<M2tsSegmentationMarkers>,
    #[serde(rename = "segmentationStyle", skip_serializing_if = "Option::is_none")]
    pub segmentation_style: Option<M2tsSegmentationStyle>,
    #[serde(rename = "segmentationTime", skip_serializing_if = "Option::is_none")]
    pub segmentation_time: Option<f64>,
    #[serde(rename = "timedMetadataPid", skip_serializing_if = "Option::is_none")]
    pub timed_metadata_pid: Option<i32>,
    #[serde(rename = "transportStreamId", skip_serializing_if = "Option::is_none")]
    pub transport_stream_id: Option<i32>,
    #[serde(rename = "videoPid", skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<i32>,
}

impl Shape for M2tsSettings {
    const SHAPE_NAME: &'static str = "M2tsSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_buffer_model",
            "audioBufferModel",
            TypeInfo::Enum("M2tsAudioBufferModel"),
        ),
        FieldMapping::new("audio_frames_per_pes", "audioFramesPerPes", TypeInfo::Integer),
        FieldMapping::new("audio_pids", "audioPids", TypeInfo::List(&TypeInfo::Integer)),
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("buffer_model", "bufferModel", TypeInfo::Enum("M2tsBufferModel")),
        FieldMapping::new(
            "dvb_nit_settings",
            "dvbNitSettings",
            TypeInfo::Structure("DvbNitSettings"),
        ),
        FieldMapping::new(
            "dvb_sdt_settings",
            "dvbSdtSettings",
            TypeInfo::Structure("DvbSdtSettings"),
        ),
        FieldMapping::new("dvb_sub_pids", "dvbSubPids", TypeInfo::List(&TypeInfo::Integer)),
        FieldMapping::new(
            "dvb_tdt_settings",
            "dvbTdtSettings",
            TypeInfo::Structure("DvbTdtSettings"),
        ),
        FieldMapping::new("dvb_teletext_pid", "dvbTeletextPid", TypeInfo::Integer),
        FieldMapping::new(
            "ebp_audio_interval",
            "ebpAudioInterval",
            TypeInfo::Enum("M2tsEbpAudioInterval"),
        ),
        FieldMapping::new("ebp_placement", "ebpPlacement", TypeInfo::Enum("M2tsEbpPlacement")),
        FieldMapping::new("es_rate_in_pes", "esRateInPes", TypeInfo::Enum("M2tsEsRateInPes")),
        FieldMapping::new("fragment_time", "fragmentTime", TypeInfo::Double),
        FieldMapping::new("max_pcr_interval", "maxPcrInterval", TypeInfo::Integer),
        FieldMapping::new("min_ebp_interval", "minEbpInterval", TypeInfo::Integer),
        FieldMapping::new("nielsen_id3", "nielsenId3", TypeInfo::Enum("M2tsNielsenId3")),
        FieldMapping::new("null_packet_bitrate", "nullPacketBitrate", TypeInfo::Double),
        FieldMapping::new("pat_interval", "patInterval", TypeInfo::Integer),
        FieldMapping::new("pcr_control", "pcrControl", TypeInfo::Enum("M2tsPcrControl")),
        FieldMapping::new("pcr_pid", "pcrPid", TypeInfo::Integer),
        FieldMapping::new("pmt_interval", "pmtInterval", TypeInfo::Integer),
        FieldMapping::new("pmt_pid", "pmtPid", TypeInfo::Integer),
        FieldMapping::new("private_metadata_pid", "privateMetadataPid", TypeInfo::Integer),
        FieldMapping::new("program_number", "programNumber", TypeInfo::Integer),
        FieldMapping::new("rate_mode", "rateMode", TypeInfo::Enum("M2tsRateMode")),
        FieldMapping::new("scte35_pid", "scte35Pid", TypeInfo::Integer),
        FieldMapping::new("scte35_source", "scte35Source", TypeInfo::Enum("M2tsScte35Source")),
        FieldMapping::new(
            "segmentation_markers",
            "segmentationMarkers",
            TypeInfo::Enum("M2tsSegmentationMarkers"),
        ),
        FieldMapping::new(
            "segmentation_style",
            "segmentationStyle",
            TypeInfo::Enum("M2tsSegmentationStyle"),
        ),
        FieldMapping::new("segmentation_time", "segmentationTime", TypeInfo::Double),
        FieldMapping::new("timed_metadata_pid", "timedMetadataPid", TypeInfo::Integer),
        FieldMapping::new("transport_stream_id", "transportStreamId", TypeInfo::Integer),
        FieldMapping::new("video_pid", "videoPid", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `M3u8Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct M3u8Settings {
    #[serde(rename = "audioFramesPerPes", skip_serializing_if = "Option::is_none")]
    pub audio_frames_per_pes: Option<i32>,
    #[serde(rename = "audioPids", skip_serializing_if = "Option::is_none")]
    pub audio_pids: Option<Vec<i32>>,
    #[serde(rename = "nielsenId3", skip_serializing_if = "Option::is_none")]
    pub nielsen_id3: Option<M3u8NielsenId3>,
    #[serde(rename = "patInterval", skip_serializing_if = "Option::is_none")]
    pub pat_interval: Option<i32>,
    #[serde(rename = "pcrControl", skip_serializing_if = "Option::is_none")]
    pub pcr_control: Option<M3u8PcrControl>,
    #[serde(rename = "pcrPid", skip_serializing_if = "Option::is_none")]
    pub pcr_pid: Option<i32>,
    #[serde(rename = "pmtInterval", skip_serializing_if = "Option::is_none")]
    pub pmt_interval: Option<i32>,
    #[serde(rename = "pmtPid", skip_serializing_if = "Option::is_none")]
    pub pmt_pid: Option<i32>,
    #[serde(rename = "privateMetadataPid", skip_serializing_if = "Option::is_none")]
    pub private_metadata_pid: Option<i32>,
    #[serde(rename = "programNumber", skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(rename = "scte35Pid", skip_serializing_if = "Option::is_none")]
    pub scte35_pid: Option<i32>,
    #[serde(rename = "scte35Source", skip_serializing_if = "Option::is_none")]
    pub scte35_source: Option<M3u8Scte35Source>,
    #[serde(rename = "timedMetadata", skip_serializing_if = "Option::is_none")]
    pub timed_metadata: Option<TimedMetadata>,
    #[serde(rename = "timedMetadataPid", skip_serializing_if = "Option::is_none")]
    pub timed_metadata_pid: Option<i32>,
    #[serde(rename = "transportStreamId", skip_serializing_if = "Option::is_none")]
    pub transport_stream_id: Option<i32>,
    #[serde(rename = "videoPid", skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<i32>,
}

impl Shape for M3u8Settings {
    const SHAPE_NAME: &'static str = "M3u8Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("audio_frames_per_pes", "audioFramesPerPes", TypeInfo::Integer),
        FieldMapping::new("audio_pids", "audioPids", TypeInfo::List(&TypeInfo::Integer)),
        FieldMapping::new("nielsen_id3", "nielsenId3", TypeInfo::Enum("M3u8NielsenId3")),
        FieldMapping::new("pat_interval", "patInterval", TypeInfo::Integer),
        FieldMapping::new("pcr_control", "pcrControl", TypeInfo::Enum("M3u8PcrControl")),
        FieldMapping::new("pcr_pid", "pcrPid", TypeInfo::Integer),
        FieldMapping::new("pmt_interval", "pmtInterval", TypeInfo::Integer),
        FieldMapping::new("pmt_pid", "pmtPid", TypeInfo::Integer),
        FieldMapping::new("private_metadata_pid", "privateMetadataPid", TypeInfo::Integer),
        FieldMapping::new("program_number", "programNumber", TypeInfo::Integer),
        FieldMapping::new("scte35_pid", "scte35Pid", TypeInfo::Integer),
        FieldMapping::new("scte35_source", "scte35Source", TypeInfo::Enum("M3u8Scte35Source")),
        FieldMapping::new("timed_metadata", "timedMetadata", TypeInfo::Enum("TimedMetadata")),
        FieldMapping::new("timed_metadata_pid", "timedMetadataPid", TypeInfo::Integer),
        FieldMapping::new("transport_stream_id", "transportStreamId", TypeInfo::Integer),
        FieldMapping::new("video_pid", "videoPid", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `MovSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovSettings {
    #[serde(rename = "clapAtom", skip_serializing_if = "Option::is_none")]
    pub clap_atom: Option<MovClapAtom>,
    #[serde(rename = "cslgAtom", skip_serializing_if = "Option::is_none")]
    pub cslg_atom: Option<MovCslgAtom>,
    #[serde(rename = "mpeg2FourCCControl", skip_serializing_if = "Option::is_none")]
    pub mpeg2_four_cc_control: Option<MovMpeg2FourCCControl>,
    #[serde(rename = "paddingControl", skip_serializing_if = "Option::is_none")]
    pub padding_control: Option<MovPaddingControl>,
    #[serde(rename = "reference", skip_serializing_if = "Option::is_none")]
    pub reference: Option<MovReference>,
}

impl Shape for MovSettings {
    const SHAPE_NAME: &'static str = "MovSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("clap_atom", "clapAtom", TypeInfo::Enum("MovClapAtom")),
        FieldMapping::new("cslg_atom", "cslgAtom", TypeInfo::Enum("MovCslgAtom")),
        FieldMapping::new(
            "mpeg2_four_cc_control",
            "mpeg2FourCCControl",
            TypeInfo::Enum("MovMpeg2FourCCControl"),
        ),
        FieldMapping::new("padding_control", "paddingControl", TypeInfo::Enum("MovPaddingControl")),
        FieldMapping::new("reference", "reference", TypeInfo::Enum("MovReference")),
    ];
}

/// AWS Elemental MediaConvert `Mp2Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mp2Settings {
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "channels", skip_serializing_if = "Option::is_none")]
    pub channels: Option<i32>,
    #[serde(rename = "sampleRate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
}

impl Shape for Mp2Settings {
    const SHAPE_NAME: &'static str = "Mp2Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("channels", "channels", TypeInfo::Integer),
        FieldMapping::new("sample_rate", "sampleRate", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `Mp4Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mp4Settings {
    #[serde(rename = "cslgAtom", skip_serializing_if = "Option::is_none")]
    pub cslg_atom: Option<Mp4CslgAtom>,
    #[serde(rename = "freeSpaceBox", skip_serializing_if = "Option::is_none")]
    pub free_space_box: Option<Mp4FreeSpaceBox>,
    #[serde(rename = "moovPlacement", skip_serializing_if = "Option::is_none")]
    pub moov_placement: Option<Mp4MoovPlacement>,
    #[serde(rename = "mp4MajorBrand", skip_serializing_if = "Option::is_none")]
    pub mp4_major_brand: Option<String>,
}

impl Shape for Mp4Settings {
    const SHAPE_NAME: &'static str = "Mp4Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("cslg_atom", "cslgAtom", TypeInfo::Enum("Mp4CslgAtom")),
        FieldMapping::new("free_space_box", "freeSpaceBox", TypeInfo::Enum("Mp4FreeSpaceBox")),
        FieldMapping::new("moov_placement", "moovPlacement", TypeInfo::Enum("Mp4MoovPlacement")),
        FieldMapping::new("mp4_major_brand", "mp4MajorBrand", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `Mpeg2Settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mpeg2Settings {
    #[serde(rename = "adaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub adaptive_quantization: Option<Mpeg2AdaptiveQuantization>,
    #[serde(rename = "bitrate", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(rename = "codecLevel", skip_serializing_if = "Option::is_none")]
    pub codec_level: Option<Mpeg2CodecLevel>,
    #[serde(rename = "codecProfile", skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<Mpeg2CodecProfile>,
    #[serde(rename = "framerateControl", skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<Mpeg2FramerateControl>,
    #[serde(rename = "framerateConversionAlgorithm", skip_serializing_if = "Option::is_none")]
    pub framerate_conversion_algorithm: Option<Mpeg2FramerateConversionAlgorithm>,
    #[serde(rename = "framerateDenominator", skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(rename = "framerateNumerator", skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(rename = "gopClosedCadence", skip_serializing_if = "Option::is_none")]
    pub gop_closed_cadence: Option<i32>,
    #[serde(rename = "gopSize", skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(rename = "gopSizeUnits", skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<Mpeg2GopSizeUnits>,
    #[serde(rename = "hrdBufferInitialFillPercentage", skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_initial_fill_percentage: Option<i32>,
    #[serde(rename = "hrdBufferSize", skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_size: Option<i32>,
    #[serde(rename = "interlaceMode", skip_serializing_if = "Option::is_none")]
    pub interlace_mode: Option<Mpeg2InterlaceMode>,
    #[serde(rename = "intraDcPrecision", skip_serializing_if = "Option::is_none")]
    pub intra_dc_precision: Option<Mpeg2IntraDcPrecision>,
    #[serde(rename = "maxBitrate", skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    #[serde(rename = "minIInterval", skip_serializing_if = "Option::is_none")]
    pub min_i_interval: Option<i32>,
    #[serde(
        rename = "numberBFramesBetweenReferenceFrames",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_b_frames_between_reference_frames: Option<i32>,
    #[serde(rename = "parControl", skip_serializing_if = "Option::is_none")]
    pub par_control: Option<Mpeg2ParControl>,
    #[serde(rename = "parDenominator", skip_serializing_if = "Option::is_none")]
    pub par_denominator: Option<i32>,
    #[serde(rename = "parNumerator", skip_serializing_if = "Option::is_none")]
    pub par_numerator: Option<i32>,
    #[serde(rename = "qualityTuningLevel", skip_serializing_if = "Option::is_none")]
    pub quality_tuning_level: Option<Mpeg2QualityTuningLevel>,
    #[serde(rename = "rateControlMode", skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<Mpeg2RateControlMode>,
    #[serde(rename = "sceneChangeDetect", skip_serializing_if = "Option::is_none")]
    pub scene_change_detect: Option<Mpeg2SceneChangeDetect>,
    #[serde(rename = "slowPal", skip_serializing_if = "Option::is_none")]
    pub slow_pal: Option<Mpeg2SlowPal>,
    #[serde(rename = "softness", skip_serializing_if = "Option::is_none")]
    pub softness: Option<i32>,
    #[serde(rename = "spatialAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub spatial_adaptive_quantization: Option<Mpeg2SpatialAdaptiveQuantization>,
    #[serde(rename = "syntax", skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Mpeg2Syntax>,
    #[serde(rename = "telecine", skip_serializing_if = "Option::is_none")]
    pub telecine: Option<Mpeg2Telecine>,
    #[serde(rename = "temporalAdaptiveQuantization", skip_serializing_if = "Option::is_none")]
    pub temporal_adaptive_quantization: Option<Mpeg2TemporalAdaptiveQuantization>,
}

impl Shape for Mpeg2Settings {
    const SHAPE_NAME: &'static str = "Mpeg2Settings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "adaptive_quantization",
            "adaptiveQuantization",
            TypeInfo::Enum("Mpeg2AdaptiveQuantization"),
        ),
        FieldMapping::new("bitrate", "bitrate", TypeInfo::Integer),
        FieldMapping::new("codec_level", "codecLevel", TypeInfo::Enum("Mpeg2CodecLevel")),
        FieldMapping::new("codec_profile", "codecProfile", TypeInfo::Enum("Mpeg2CodecProfile")),
        FieldMapping::new(
            "framerate_control",
            "framerateControl",
            TypeInfo::Enum("Mpeg2FramerateControl"),
        ),
        FieldMapping::new(
            "framerate_conversion_algorithm",
            "framerateConversionAlgorithm",
            TypeInfo::Enum("Mpeg2FramerateConversionAlgorithm"),
        ),
        FieldMapping::new("framerate_denominator", "framerateDenominator", TypeInfo::Integer),
        FieldMapping::new("framerate_numerator", "framerateNumerator", TypeInfo::Integer),
        FieldMapping::new("gop_closed_cadence", "gopClosedCadence", TypeInfo::Integer),
        FieldMapping::new("gop_size", "gopSize", TypeInfo::Double),
        FieldMapping::new("gop_size_units", "gopSizeUnits", TypeInfo::Enum("Mpeg2GopSizeUnits")),
        FieldMapping::new(
            "hrd_buffer_initial_fill_percentage",
            "hrdBufferInitialFillPercentage",
            TypeInfo::Integer,
        ),
        FieldMapping::new("hrd_buffer_size", "hrdBufferSize", TypeInfo::Integer),
        FieldMapping::new("interlace_mode", "interlaceMode", TypeInfo::Enum("Mpeg2InterlaceMode")),
        FieldMapping::new(
            "intra_dc_precision",
            "intraDcPrecision",
            TypeInfo::Enum("Mpeg2IntraDcPrecision"),
        ),
        FieldMapping::new("max_bitrate", "maxBitrate", TypeInfo::Integer),
        FieldMapping::new("min_i_interval", "minIInterval", TypeInfo::Integer),
        FieldMapping::new(
            "number_b_frames_between_reference_frames",
            "numberBFramesBetweenReferenceFrames",
            TypeInfo::Integer,
        ),
        FieldMapping::new("par_control", "parControl", TypeInfo::Enum("Mpeg2ParControl")),
        FieldMapping::new("par_denominator", "parDenominator", TypeInfo::Integer),
        FieldMapping::new("par_numerator", "parNumerator", TypeInfo::Integer),
        FieldMapping::new(
            "quality_tuning_level",
            "qualityTuningLevel",
            TypeInfo::Enum("Mpeg2QualityTuningLevel"),
        ),
        FieldMapping::new(
            "rate_control_mode",
            "rateControlMode",
            TypeInfo::Enum("Mpeg2RateControlMode"),
        ),
        FieldMapping::new(
            "scene_change_detect",
            "sceneChangeDetect",
            TypeInfo::Enum("Mpeg2SceneChangeDetect"),
        ),
        FieldMapping::new("slow_pal", "slowPal", TypeInfo::Enum("Mpeg2SlowPal")),
        FieldMapping::new("softness", "softness", TypeInfo::Integer),
        FieldMapping::new(
            "spatial_adaptive_quantization",
            "spatialAdaptiveQuantization",
            TypeInfo::Enum("Mpeg2SpatialAdaptiveQuantization"),
        ),
        FieldMapping::new("syntax", "syntax", TypeInfo::Enum("Mpeg2Syntax")),
        FieldMapping::new("telecine", "telecine", TypeInfo::Enum("Mpeg2Telecine")),
        FieldMapping::new(
            "temporal_adaptive_quantization",
            "temporalAdaptiveQuantization",
            TypeInfo::Enum("Mpeg2TemporalAdaptiveQuantization"),
        ),
    ];
}

/// AWS Elemental MediaConvert `MsSmoothEncryptionSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsSmoothEncryptionSettings {
    #[serde(rename = "spekeKeyProvider", skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
}

impl Shape for MsSmoothEncryptionSettings {
    const SHAPE_NAME: &'static str = "MsSmoothEncryptionSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "speke_key_provider",
            "spekeKeyProvider",
            TypeInfo::Structure("SpekeKeyProvider"),
        ),
    ];
}

/// AWS Elemental MediaConvert `MsSmoothGroupSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsSmoothGroupSettings {
    #[serde(rename = "audioDeduplication", skip_serializing_if = "Option::is_none")]
    pub audio_deduplication: Option<MsSmoothAudioDeduplication>,
    #[serde(rename = "destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "encryption", skip_serializing_if = "Option::is_none")]
    pub encryption: Option<MsSmoothEncryptionSettings>,
    #[serde(rename = "fragmentLength", skip_serializing_if = "Option::is_none")]
    pub fragment_length: Option<i32>,
    #[serde(rename = "manifestEncoding", skip_serializing_if = "Option::is_none")]
    pub manifest_encoding: Option<MsSmoothManifestEncoding>,
}

impl Shape for MsSmoothGroupSettings {
    const SHAPE_NAME: &'static str = "MsSmoothGroupSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_deduplication",
            "audioDeduplication",
            TypeInfo::Enum("MsSmoothAudioDeduplication"),
        ),
        FieldMapping::new("destination", "destination", TypeInfo::String),
        FieldMapping::new(
            "encryption",
            "encryption",
            TypeInfo::Structure("MsSmoothEncryptionSettings"),
        ),
        FieldMapping::new("fragment_length", "fragmentLength", TypeInfo::Integer),
        FieldMapping::new(
            "manifest_encoding",
            "manifestEncoding",
            TypeInfo::Enum("MsSmoothManifestEncoding"),
        ),
    ];
}

/// AWS Elemental MediaConvert `NielsenConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NielsenConfiguration {
    #[serde(rename = "breakoutCode", skip_serializing_if = "Option::is_none")]
    pub breakout_code: Option<i32>,
    #[serde(rename = "distributorId", skip_serializing_if = "Option::is_none")]
    pub distributor_id: Option<String>,
}

impl Shape for NielsenConfiguration {
    const SHAPE_NAME: &'static str = "NielsenConfiguration";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("breakout_code", "breakoutCode", TypeInfo::Integer),
        FieldMapping::new("distributor_id", "distributorId", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `NoiseReducer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseReducer {
    #[serde(rename = "filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<NoiseReducerFilter>,
    #[serde(rename = "filterSettings", skip_serializing_if = "Option::is_none")]
    pub filter_settings: Option<NoiseReducerFilterSettings>,
    #[serde(rename = "spatialFilterSettings", skip_serializing_if = "Option::is_none")]
    pub spatial_filter_settings: Option<NoiseReducerSpatialFilterSettings>,
}

impl Shape for NoiseReducer {
    const SHAPE_NAME: &'static str = "NoiseReducer";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("filter", "filter", TypeInfo::Enum("NoiseReducerFilter")),
        FieldMapping::new(
            "filter_settings",
            "filterSettings",
            TypeInfo::Structure("NoiseReducerFilterSettings"),
        ),
        FieldMapping::new(
            "spatial_filter_settings",
            "spatialFilterSettings",
            TypeInfo::Structure("NoiseReducerSpatialFilterSettings"),
        ),
    ];
}

/// AWS Elemental MediaConvert `NoiseReducerFilterSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseReducerFilterSettings {
    #[serde(rename = "strength", skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
}

impl Shape for NoiseReducerFilterSettings {
    const SHAPE_NAME: &'static str = "NoiseReducerFilterSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("strength", "strength", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `NoiseReducerSpatialFilterSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseReducerSpatialFilterSettings {
    #[serde(rename = "postFilterSharpenStrength", skip_serializing_if = "Option::is_none")]
    pub post_filter_sharpen_strength: Option<i32>,
    #[serde(rename = "speed", skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(rename = "strength", skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
}

impl Shape for NoiseReducerSpatialFilterSettings {
    const SHAPE_NAME: &'static str = "NoiseReducerSpatialFilterSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "post_filter_sharpen_strength",
            "postFilterSharpenStrength",
            TypeInfo::Integer,
        ),
        FieldMapping::new("speed", "speed", TypeInfo::Integer),
        FieldMapping::new("strength", "strength", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `Output`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "audioDescriptions", skip_serializing_if = "Option::is_none")]
    pub audio_descriptions: Option<Vec<AudioDescription>>,
    #[serde(rename = "captionDescriptions", skip_serializing_if = "Option::is_none")]
    pub caption_descriptions: Option<Vec<CaptionDescription>>,
    #[serde(rename = "containerSettings", skip_serializing_if = "Option::is_none")]
    pub container_settings: Option<ContainerSettings>,
    #[serde(rename = "extension", skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(rename = "nameModifier", skip_serializing_if = "Option::is_none")]
    pub name_modifier: Option<String>,
    #[serde(rename = "outputSettings", skip_serializing_if = "Option::is_none")]
    pub output_settings: Option<OutputSettings>,
    #[serde(rename = "preset", skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(rename = "videoDescription", skip_serializing_if = "Option::is_none")]
    pub video_description: Option<VideoDescription>,
}

impl Shape for Output {
    const SHAPE_NAME: &'static str = "Output";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_descriptions",
            "audioDescriptions",
            TypeInfo::List(&TypeInfo::Structure("AudioDescription")),
        ),
        FieldMapping::new(
            "caption_descriptions",
            "captionDescriptions",
            TypeInfo::List(&TypeInfo::Structure("CaptionDescription")),
        ),
        FieldMapping::new(
            "container_settings",
            "containerSettings",
            TypeInfo::Structure("ContainerSettings"),
        ),
        FieldMapping::new("extension", "extension", TypeInfo::String),
        FieldMapping::new("name_modifier", "nameModifier", TypeInfo::String),
        FieldMapping::new(
            "output_settings",
            "outputSettings",
            TypeInfo::Structure("OutputSettings"),
        ),
        FieldMapping::new("preset", "preset", TypeInfo::String),
        FieldMapping::new(
            "video_description",
            "videoDescription",
            TypeInfo::Structure("VideoDescription"),
        ),
    ];
}

/// AWS Elemental MediaConvert `OutputChannelMapping`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputChannelMapping {
    #[serde(rename = "inputChannels", skip_serializing_if = "Option::is_none")]
    pub input_channels: Option<Vec<i32>>,
}

impl Shape for OutputChannelMapping {
    const SHAPE_NAME: &'static str = "OutputChannelMapping";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("input_channels", "inputChannels", TypeInfo::List(&TypeInfo::Integer)),
    ];
}

/// AWS Elemental MediaConvert `OutputDetail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputDetail {
    #[serde(rename = "durationInMs", skip_serializing_if = "Option::is_none")]
    pub duration_in_ms: Option<i32>,
    #[serde(rename = "videoDetails", skip_serializing_if = "Option::is_none")]
    pub video_details: Option<VideoDetail>,
}

impl Shape for OutputDetail {
    const SHAPE_NAME: &'static str = "OutputDetail";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("duration_in_ms", "durationInMs", TypeInfo::Integer),
        FieldMapping::new("video_details", "videoDetails", TypeInfo::Structure("VideoDetail")),
    ];
}

/// AWS Elemental MediaConvert `OutputGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputGroup {
    #[serde(rename = "customName", skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "outputGroupSettings", skip_serializing_if = "Option::is_none")]
    pub output_group_settings: Option<OutputGroupSettings>,
    #[serde(rename = "outputs", skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
}

impl Shape for OutputGroup {
    const SHAPE_NAME: &'static str = "OutputGroup";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("custom_name", "customName", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String),
        FieldMapping::new(
            "output_group_settings",
            "outputGroupSettings",
            TypeInfo::Structure("OutputGroupSettings"),
        ),
        FieldMapping::new("outputs", "outputs", TypeInfo::List(&TypeInfo::Structure("Output"))),
    ];
}

/// AWS Elemental MediaConvert `OutputGroupDetail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputGroupDetail {
    #[serde(rename = "outputDetails", skip_serializing_if = "Option::is_none")]
    pub output_details: Option<Vec<OutputDetail>>,
}

impl Shape for OutputGroupDetail {
    const SHAPE_NAME: &'static str = "OutputGroupDetail";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "output_details",
            "outputDetails",
            TypeInfo::List(&TypeInfo::Structure("OutputDetail")),
        ),
    ];
}

/// AWS Elemental MediaConvert `OutputGroupSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputGroupSettings {
    #[serde(rename = "cmafGroupSettings", skip_serializing_if = "Option::is_none")]
    pub cmaf_group_settings: Option<CmafGroupSettings>,
    #[serde(rename = "dashIsoGroupSettings", skip_serializing_if = "Option::is_none")]
    pub dash_iso_group_settings: Option<DashIsoGroupSettings>,
    #[serde(rename = "fileGroupSettings", skip_serializing_if = "Option::is_none")]
    pub file_group_settings: Option<FileGroupSettings>,
    #[serde(rename = "hlsGroupSettings", skip_serializing_if = "Option::is_none")]
    pub hls_group_settings: Option<HlsGroupSettings>,
    #[serde(rename = "msSmoothGroupSettings", skip_serializing_if = "Option::is_none")]
    pub ms_smooth_group_settings: Option<MsSmoothGroupSettings>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OutputGroupType>,
}

impl Shape for OutputGroupSettings {
    const SHAPE_NAME: &'static str = "OutputGroupSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "cmaf_group_settings",
            "cmafGroupSettings",
            TypeInfo::Structure("CmafGroupSettings"),
        ),
        FieldMapping::new(
            "dash_iso_group_settings",
            "dashIsoGroupSettings",
            TypeInfo::Structure("DashIsoGroupSettings"),
        ),
        FieldMapping::new(
            "file_group_settings",
            "fileGroupSettings",
            TypeInfo::Structure("FileGroupSettings"),
        ),
        FieldMapping::new(
            "hls_group_settings",
            "hlsGroupSettings",
            TypeInfo::Structure("HlsGroupSettings"),
        ),
        FieldMapping::new(
            "ms_smooth_group_settings",
            "msSmoothGroupSettings",
            TypeInfo::Structure("MsSmoothGroupSettings"),
        ),
        FieldMapping::new("type", "type", TypeInfo::Enum("OutputGroupType")),
    ];
}

/// AWS Elemental MediaConvert `OutputSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "hlsSettings", skip_serializing_if = "Option::is_none")]
    pub hls_settings: Option<HlsSettings>,
}

impl Shape for OutputSettings {
    const SHAPE_NAME: &'static str = "OutputSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("hls_settings", "hlsSettings", TypeInfo::Structure("HlsSettings")),
    ];
}

/// AWS Elemental MediaConvert `Preset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "lastUpdated",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<PresetSettings>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
}

impl Shape for Preset {
    const SHAPE_NAME: &'static str = "Preset";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String),
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("created_at", "createdAt", TypeInfo::Timestamp),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("last_updated", "lastUpdated", TypeInfo::Timestamp),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("settings", "settings", TypeInfo::Structure("PresetSettings")).required(),
        FieldMapping::new("type", "type", TypeInfo::Enum("Type")),
    ];
}

/// AWS Elemental MediaConvert `PresetSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetSettings {
    #[serde(rename = "audioDescriptions", skip_serializing_if = "Option::is_none")]
    pub audio_descriptions: Option<Vec<AudioDescription>>,
    #[serde(rename = "captionDescriptions", skip_serializing_if = "Option::is_none")]
    pub caption_descriptions: Option<Vec<CaptionDescriptionPreset>>,
    #[serde(rename = "containerSettings", skip_serializing_if = "Option::is_none")]
    pub container_settings: Option<ContainerSettings>,
    #[serde(rename = "videoDescription", skip_serializing_if = "Option::is_none")]
    pub video_description: Option<VideoDescription>,
}

impl Shape for PresetSettings {
    const SHAPE_NAME: &'static str = "PresetSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "audio_descriptions",
            "audioDescriptions",
            TypeInfo::List(&TypeInfo::Structure("AudioDescription")),
        ),
        FieldMapping::new(
            "caption_descriptions",
            "captionDescriptions",
            TypeInfo::List(&TypeInfo::Structure("CaptionDescriptionPreset")),
        ),
        FieldMapping::new(
            "container_settings",
            "containerSettings",
            TypeInfo::Structure("ContainerSettings"),
        ),
        FieldMapping::new(
            "video_description",
            "videoDescription",
            TypeInfo::Structure("VideoDescription"),
        ),
    ];
}

/// AWS Elemental MediaConvert `ProresSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProresSettings {
    #[serde(rename = "codecProfile", skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<ProresCodecProfile>,
    #[serde(rename = "framerateControl", skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<ProresFramerateControl>,
    #[serde(rename = "framerateConversionAlgorithm", skip_serializing_if = "Option::is_none")]
    pub framerate_conversion_algorithm: Option<ProresFramerateConversionAlgorithm>,
    #[serde(rename = "framerateDenominator", skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(rename = "framerateNumerator", skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(rename = "interlaceMode", skip_serializing_if = "Option::is_none")]
    pub interlace_mode: Option<ProresInterlaceMode>,
    #[serde(rename = "parControl", skip_serializing_if = "Option::is_none")]
    pub par_control: Option<ProresParControl>,
    #[serde(rename = "parDenominator", skip_serializing_if = "Option::is_none")]
    pub par_denominator: Option<i32>,
    #[serde(rename = "parNumerator", skip_serializing_if = "Option::is_none")]
    pub par_numerator: Option<i32>,
    #[serde(rename = "slowPal", skip_serializing_if = "Option::is_none")]
    pub slow_pal: Option<ProresSlowPal>,
    #[serde(rename = "telecine", skip_serializing_if = "Option::is_none")]
    pub telecine: Option<ProresTelecine>,
}

impl Shape for ProresSettings {
    const SHAPE_NAME: &'static str = "ProresSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("codec_profile", "codecProfile", TypeInfo::Enum("ProresCodecProfile")),
        FieldMapping::new(
            "framerate_control",
            "framerateControl",
            TypeInfo::Enum("ProresFramerateControl"),
        ),
        FieldMapping::new(
            "framerate_conversion_algorithm",
            "framerateConversionAlgorithm",
            TypeInfo::Enum("ProresFramerateConversionAlgorithm"),
        ),
        FieldMapping::new("framerate_denominator", "framerateDenominator", TypeInfo::Integer),
        FieldMapping::new("framerate_numerator", "framerateNumerator", TypeInfo::Integer),
        FieldMapping::new("interlace_mode", "interlaceMode", TypeInfo::Enum("ProresInterlaceMode")),
        FieldMapping::new("par_control", "parControl", TypeInfo::Enum("ProresParControl")),
        FieldMapping::new("par_denominator", "parDenominator", TypeInfo::Integer),
        FieldMapping::new("par_numerator", "parNumerator", TypeInfo::Integer),
        FieldMapping::new("slow_pal", "slowPal", TypeInfo::Enum("ProresSlowPal")),
        FieldMapping::new("telecine", "telecine", TypeInfo::Enum("ProresTelecine")),
    ];
}

/// AWS Elemental MediaConvert `Queue`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "lastUpdated",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "pricingPlan", skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    #[serde(rename = "progressingJobsCount", skip_serializing_if = "Option::is_none")]
    pub progressing_jobs_count: Option<i32>,
    #[serde(rename = "reservationPlan", skip_serializing_if = "Option::is_none")]
    pub reservation_plan: Option<ReservationPlan>,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<QueueStatus>,
    #[serde(rename = "submittedJobsCount", skip_serializing_if = "Option::is_none")]
    pub submitted_jobs_count: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
}

impl Shape for Queue {
    const SHAPE_NAME: &'static str = "Queue";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String),
        FieldMapping::new("created_at", "createdAt", TypeInfo::Timestamp),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("last_updated", "lastUpdated", TypeInfo::Timestamp),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("pricing_plan", "pricingPlan", TypeInfo::Enum("PricingPlan")),
        FieldMapping::new("progressing_jobs_count", "progressingJobsCount", TypeInfo::Integer),
        FieldMapping::new(
            "reservation_plan",
            "reservationPlan",
            TypeInfo::Structure("ReservationPlan"),
        ),
        FieldMapping::new("status", "status", TypeInfo::Enum("QueueStatus")),
        FieldMapping::new("submitted_jobs_count", "submittedJobsCount", TypeInfo::Integer),
        FieldMapping::new("type", "type", TypeInfo::Enum("Type")),
    ];
}

/// AWS Elemental MediaConvert `Rectangle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(rename = "width", skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(rename = "x", skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(rename = "y", skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl Shape for Rectangle {
    const SHAPE_NAME: &'static str = "Rectangle";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("height", "height", TypeInfo::Integer),
        FieldMapping::new("width", "width", TypeInfo::Integer),
        FieldMapping::new("x", "x", TypeInfo::Integer),
        FieldMapping::new("y", "y", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `RemixSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemixSettings {
    #[serde(rename = "channelMapping", skip_serializing_if = "Option::is_none")]
    pub channel_mapping: Option<ChannelMapping>,
    #[serde(rename = "channelsIn", skip_serializing_if = "Option::is_none")]
    pub channels_in: Option<i32>,
    #[serde(rename = "channelsOut", skip_serializing_if = "Option::is_none")]
    pub channels_out: Option<i32>,
}

impl Shape for RemixSettings {
    const SHAPE_NAME: &'static str = "RemixSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "channel_mapping",
            "channelMapping",
            TypeInfo::Structure("ChannelMapping"),
        ),
        FieldMapping::new("channels_in", "channelsIn", TypeInfo::Integer),
        FieldMapping::new("channels_out", "channelsOut", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `ReservationPlan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationPlan {
    #[serde(rename = "commitment", skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    #[serde(
        rename = "expiresAt",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(
        rename = "purchasedAt",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchased_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "renewalType", skip_serializing_if = "Option::is_none")]
    pub renewal_type: Option<RenewalType>,
    #[serde(rename = "reservedSlots", skip_serializing_if = "Option::is_none")]
    pub reserved_slots: Option<i32>,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationPlanStatus>,
}

impl Shape for ReservationPlan {
    const SHAPE_NAME: &'static str = "ReservationPlan";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("commitment", "commitment", TypeInfo::Enum("Commitment")),
        FieldMapping::new("expires_at", "expiresAt", TypeInfo::Timestamp),
        FieldMapping::new("purchased_at", "purchasedAt", TypeInfo::Timestamp),
        FieldMapping::new("renewal_type", "renewalType", TypeInfo::Enum("RenewalType")),
        FieldMapping::new("reserved_slots", "reservedSlots", TypeInfo::Integer),
        FieldMapping::new("status", "status", TypeInfo::Enum("ReservationPlanStatus")),
    ];
}

/// AWS Elemental MediaConvert `ReservationPlanSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationPlanSettings {
    #[serde(rename = "commitment", skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    #[serde(rename = "renewalType", skip_serializing_if = "Option::is_none")]
    pub renewal_type: Option<RenewalType>,
    #[serde(rename = "reservedSlots", skip_serializing_if = "Option::is_none")]
    pub reserved_slots: Option<i32>,
}

impl Shape for ReservationPlanSettings {
    const SHAPE_NAME: &'static str = "ReservationPlanSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("commitment", "commitment", TypeInfo::Enum("Commitment")).required(),
        FieldMapping::new("renewal_type", "renewalType", TypeInfo::Enum("RenewalType")).required(),
        FieldMapping::new("reserved_slots", "reservedSlots", TypeInfo::Integer).required(),
    ];
}

/// AWS Elemental MediaConvert `ResourceTags`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTags {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Shape for ResourceTags {
    const SHAPE_NAME: &'static str = "ResourceTags";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String),
        FieldMapping::new("tags", "tags", TypeInfo::Map(&TypeInfo::String, &TypeInfo::String)),
    ];
}

/// AWS Elemental MediaConvert `SccDestinationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SccDestinationSettings {
    #[serde(rename = "framerate", skip_serializing_if = "Option::is_none")]
    pub framerate: Option<SccDestinationFramerate>,
}

impl Shape for SccDestinationSettings {
    const SHAPE_NAME: &'static str = "SccDestinationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("framerate", "framerate", TypeInfo::Enum("SccDestinationFramerate")),
    ];
}

/// AWS Elemental MediaConvert `SpekeKeyProvider`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpekeKeyProvider {
    #[serde(rename = "resourceId", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(rename = "systemIds", skip_serializing_if = "Option::is_none")]
    pub system_ids: Option<Vec<String>>,
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Shape for SpekeKeyProvider {
    const SHAPE_NAME: &'static str = "SpekeKeyProvider";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("resource_id", "resourceId", TypeInfo::String),
        FieldMapping::new("system_ids", "systemIds", TypeInfo::List(&TypeInfo::String)),
        FieldMapping::new("url", "url", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `StaticKeyProvider`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticKeyProvider {
    #[serde(rename = "keyFormat", skip_serializing_if = "Option::is_none")]
    pub key_format: Option<String>,
    #[serde(rename = "keyFormatVersions", skip_serializing_if = "Option::is_none")]
    pub key_format_versions: Option<String>,
    #[serde(rename = "staticKeyValue", skip_serializing_if = "Option::is_none")]
    pub static_key_value: Option<String>,
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Shape for StaticKeyProvider {
    const SHAPE_NAME: &'static str = "StaticKeyProvider";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("key_format", "keyFormat", TypeInfo::String),
        FieldMapping::new("key_format_versions", "keyFormatVersions", TypeInfo::String),
        FieldMapping::new("static_key_value", "staticKeyValue", TypeInfo::String),
        FieldMapping::new("url", "url", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `TeletextDestinationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeletextDestinationSettings {
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<String>,
}

impl Shape for TeletextDestinationSettings {
    const SHAPE_NAME: &'static str = "TeletextDestinationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("page_number", "pageNumber", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `TeletextSourceSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeletextSourceSettings {
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<String>,
}

impl Shape for TeletextSourceSettings {
    const SHAPE_NAME: &'static str = "TeletextSourceSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("page_number", "pageNumber", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `TimecodeBurnin`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimecodeBurnin {
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(rename = "position", skip_serializing_if = "Option::is_none")]
    pub position: Option<TimecodeBurninPosition>,
    #[serde(rename = "prefix", skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl Shape for TimecodeBurnin {
    const SHAPE_NAME: &'static str = "TimecodeBurnin";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("font_size", "fontSize", TypeInfo::Integer),
        FieldMapping::new("position", "position", TypeInfo::Enum("TimecodeBurninPosition")),
        FieldMapping::new("prefix", "prefix", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `TimecodeConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimecodeConfig {
    #[serde(rename = "anchor", skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(rename = "source", skip_serializing_if = "Option::is_none")]
    pub source: Option<TimecodeSource>,
    #[serde(rename = "start", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(rename = "timestampOffset", skip_serializing_if = "Option::is_none")]
    pub timestamp_offset: Option<String>,
}

impl Shape for TimecodeConfig {
    const SHAPE_NAME: &'static str = "TimecodeConfig";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("anchor", "anchor", TypeInfo::String),
        FieldMapping::new("source", "source", TypeInfo::Enum("TimecodeSource")),
        FieldMapping::new("start", "start", TypeInfo::String),
        FieldMapping::new("timestamp_offset", "timestampOffset", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `TimedMetadataInsertion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimedMetadataInsertion {
    #[serde(rename = "id3Insertions", skip_serializing_if = "Option::is_none")]
    pub id3_insertions: Option<Vec<Id3Insertion>>,
}

impl Shape for TimedMetadataInsertion {
    const SHAPE_NAME: &'static str = "TimedMetadataInsertion";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "id3_insertions",
            "id3Insertions",
            TypeInfo::List(&TypeInfo::Structure("Id3Insertion")),
        ),
    ];
}

/// AWS Elemental MediaConvert `Timing`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(
        rename = "finishTime",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub finish_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(
        rename = "startTime",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(
        rename = "submitTime",
        default,
        with = "autoboto_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<chrono::DateTime<chrono::Utc>>,
}

impl Shape for Timing {
    const SHAPE_NAME: &'static str = "Timing";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("finish_time", "finishTime", TypeInfo::Timestamp),
        FieldMapping::new("start_time", "startTime", TypeInfo::Timestamp),
        FieldMapping::new("submit_time", "submitTime", TypeInfo::Timestamp),
    ];
}

/// AWS Elemental MediaConvert `TtmlDestinationSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmlDestinationSettings {
    #[serde(rename = "stylePassthrough", skip_serializing_if = "Option::is_none")]
    pub style_passthrough: Option<TtmlStylePassthrough>,
}

impl Shape for TtmlDestinationSettings {
    const SHAPE_NAME: &'static str = "TtmlDestinationSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "style_passthrough",
            "stylePassthrough",
            TypeInfo::Enum("TtmlStylePassthrough"),
        ),
    ];
}

/// AWS Elemental MediaConvert `VideoCodecSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoCodecSettings {
    #[serde(rename = "codec", skip_serializing_if = "Option::is_none")]
    pub codec: Option<VideoCodec>,
    #[serde(rename = "frameCaptureSettings", skip_serializing_if = "Option::is_none")]
    pub frame_capture_settings: Option<FrameCaptureSettings>,
    #[serde(rename = "h264Settings", skip_serializing_if = "Option::is_none")]
    pub h264_settings: Option<H264Settings>,
    #[serde(rename = "h265Settings", skip_serializing_if = "Option::is_none")]
    pub h265_settings: Option<H265Settings>,
    #[serde(rename = "mpeg2Settings", skip_serializing_if = "Option::is_none")]
    pub mpeg2_settings: Option<Mpeg2Settings>,
    #[serde(rename = "proresSettings", skip_serializing_if = "Option::is_none")]
    pub prores_settings: Option<ProresSettings>,
}

impl Shape for VideoCodecSettings {
    const SHAPE_NAME: &'static str = "VideoCodecSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("codec", "codec", TypeInfo::Enum("VideoCodec")),
        FieldMapping::new(
            "frame_capture_settings",
            "frameCaptureSettings",
            TypeInfo::Structure("FrameCaptureSettings"),
        ),
        FieldMapping::new("h264_settings", "h264Settings", TypeInfo::Structure("H264Settings")),
        FieldMapping::new("h265_settings", "h265Settings", TypeInfo::Structure("H265Settings")),
        FieldMapping::new("mpeg2_settings", "mpeg2Settings", TypeInfo::Structure("Mpeg2Settings")),
        FieldMapping::new(
            "prores_settings",
            "proresSettings",
            TypeInfo::Structure("ProresSettings"),
        ),
    ];
}

/// AWS Elemental MediaConvert `VideoDescription`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoDescription {
    #[serde(rename = "afdSignaling", skip_serializing_if = "Option::is_none")]
    pub afd_signaling: Option<AfdSignaling>,
    #[serde(rename = "antiAlias", skip_serializing_if = "Option::is_none")]
    pub anti_alias: Option<AntiAlias>,
    #[serde(rename = "codecSettings", skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<VideoCodecSettings>,
    #[serde(rename = "colorMetadata", skip_serializing_if = "Option::is_none")]
    pub color_metadata: Option<ColorMetadata>,
    #[serde(rename = "crop", skip_serializing_if = "Option::is_none")]
    pub crop: Option<Rectangle>,
    #[serde(rename = "dropFrameTimecode", skip_serializing_if = "Option::is_none")]
    pub drop_frame_timecode: Option<DropFrameTimecode>,
    #[serde(rename = "fixedAfd", skip_serializing_if = "Option::is_none")]
    pub fixed_afd: Option<i32>,
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(rename = "position", skip_serializing_if = "Option::is_none")]
    pub position: Option<Rectangle>,
    #[serde(rename = "respondToAfd", skip_serializing_if = "Option::is_none")]
    pub respond_to_afd: Option<RespondToAfd>,
    #[serde(rename = "scalingBehavior", skip_serializing_if = "Option::is_none")]
    pub scaling_behavior: Option<ScalingBehavior>,
    #[serde(rename = "sharpness", skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<i32>,
    #[serde(rename = "timecodeInsertion", skip_serializing_if = "Option::is_none")]
    pub timecode_insertion: Option<VideoTimecodeInsertion>,
    #[serde(rename = "videoPreprocessors", skip_serializing_if = "Option::is_none")]
    pub video_preprocessors: Option<VideoPreprocessor>,
    #[serde(rename = "width", skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

impl Shape for VideoDescription {
    const SHAPE_NAME: &'static str = "VideoDescription";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("afd_signaling", "afdSignaling", TypeInfo::Enum("AfdSignaling")),
        FieldMapping::new("anti_alias", "antiAlias", TypeInfo::Enum("AntiAlias")),
        FieldMapping::new(
            "codec_settings",
            "codecSettings",
            TypeInfo::Structure("VideoCodecSettings"),
        ),
        FieldMapping::new("color_metadata", "colorMetadata", TypeInfo::Enum("ColorMetadata")),
        FieldMapping::new("crop", "crop", TypeInfo::Structure("Rectangle")),
        FieldMapping::new(
            "drop_frame_timecode",
            "dropFrameTimecode",
            TypeInfo::Enum("DropFrameTimecode"),
        ),
        FieldMapping::new("fixed_afd", "fixedAfd", TypeInfo::Integer),
        FieldMapping::new("height", "height", TypeInfo::Integer),
        FieldMapping::new("position", "position", TypeInfo::Structure("Rectangle")),
        FieldMapping::new("respond_to_afd", "respondToAfd", TypeInfo::Enum("RespondToAfd")),
        FieldMapping::new("scaling_behavior", "scalingBehavior", TypeInfo::Enum("ScalingBehavior")),
        FieldMapping::new("sharpness", "sharpness", TypeInfo::Integer),
        FieldMapping::new(
            "timecode_insertion",
            "timecodeInsertion",
            TypeInfo::Enum("VideoTimecodeInsertion"),
        ),
        FieldMapping::new(
            "video_preprocessors",
            "videoPreprocessors",
            TypeInfo::Structure("VideoPreprocessor"),
        ),
        FieldMapping::new("width", "width", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `VideoDetail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    #[serde(rename = "heightInPx", skip_serializing_if = "Option::is_none")]
    pub height_in_px: Option<i32>,
    #[serde(rename = "widthInPx", skip_serializing_if = "Option::is_none")]
    pub width_in_px: Option<i32>,
}

impl Shape for VideoDetail {
    const SHAPE_NAME: &'static str = "VideoDetail";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("height_in_px", "heightInPx", TypeInfo::Integer),
        FieldMapping::new("width_in_px", "widthInPx", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `VideoPreprocessor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPreprocessor {
    #[serde(rename = "colorCorrector", skip_serializing_if = "Option::is_none")]
    pub color_corrector: Option<ColorCorrector>,
    #[serde(rename = "deinterlacer", skip_serializing_if = "Option::is_none")]
    pub deinterlacer: Option<Deinterlacer>,
    #[serde(rename = "imageInserter", skip_serializing_if = "Option::is_none")]
    pub image_inserter: Option<ImageInserter>,
    #[serde(rename = "noiseReducer", skip_serializing_if = "Option::is_none")]
    pub noise_reducer: Option<NoiseReducer>,
    #[serde(rename = "timecodeBurnin", skip_serializing_if = "Option::is_none")]
    pub timecode_burnin: Option<TimecodeBurnin>,
}

impl Shape for VideoPreprocessor {
    const SHAPE_NAME: &'static str = "VideoPreprocessor";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "color_corrector",
            "colorCorrector",
            TypeInfo::Structure("ColorCorrector"),
        ),
        FieldMapping::new("deinterlacer", "deinterlacer", TypeInfo::Structure("Deinterlacer")),
        FieldMapping::new("image_inserter", "imageInserter", TypeInfo::Structure("ImageInserter")),
        FieldMapping::new("noise_reducer", "noiseReducer", TypeInfo::Structure("NoiseReducer")),
        FieldMapping::new(
            "timecode_burnin",
            "timecodeBurnin",
            TypeInfo::Structure("TimecodeBurnin"),
        ),
    ];
}

/// AWS Elemental MediaConvert `VideoSelector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSelector {
    #[serde(rename = "colorSpace", skip_serializing_if = "Option::is_none")]
    pub color_space: Option<ColorSpace>,
    #[serde(rename = "colorSpaceUsage", skip_serializing_if = "Option::is_none")]
    pub color_space_usage: Option<ColorSpaceUsage>,
    #[serde(rename = "hdr10Metadata", skip_serializing_if = "Option::is_none")]
    pub hdr10_metadata: Option<Hdr10Metadata>,
    #[serde(rename = "pid", skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
    #[serde(rename = "programNumber", skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
}

impl Shape for VideoSelector {
    const SHAPE_NAME: &'static str = "VideoSelector";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("color_space", "colorSpace", TypeInfo::Enum("ColorSpace")),
        FieldMapping::new(
            "color_space_usage",
            "colorSpaceUsage",
            TypeInfo::Enum("ColorSpaceUsage"),
        ),
        FieldMapping::new("hdr10_metadata", "hdr10Metadata", TypeInfo::Structure("Hdr10Metadata")),
        FieldMapping::new("pid", "pid", TypeInfo::Integer),
        FieldMapping::new("program_number", "programNumber", TypeInfo::Integer),
    ];
}

/// AWS Elemental MediaConvert `WavSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WavSettings {
    #[serde(rename = "bitDepth", skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<i32>,
    #[serde(rename = "channels", skip_serializing_if = "Option::is_none")]
    pub channels: Option<i32>,
    #[serde(rename = "format", skip_serializing_if = "Option::is_none")]
    pub format: Option<WavFormat>,
    #[serde(rename = "sampleRate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
}

impl Shape for WavSettings {
    const SHAPE_NAME: &'static str = "WavSettings";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("bit_depth", "bitDepth", TypeInfo::Integer),
        FieldMapping::new("channels", "channels", TypeInfo::Integer),
        FieldMapping::new("format", "format", TypeInfo::Enum("WavFormat")),
        FieldMapping::new("sample_rate", "sampleRate", TypeInfo::Integer),
    ];
}

