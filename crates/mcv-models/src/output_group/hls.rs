//! Apple HLS output group settings.

use super::{DestinationSettings, StaticKeyProvider};
use crate::language::LanguageCode;

string_enum! {
    /// Ad marker styles written into HLS manifests.
    pub enum HlsAdMarkers {
        Elemental => "ELEMENTAL",
        ElementalScte35 => "ELEMENTAL_SCTE35",
    }
}

string_enum! {
    /// Whether caption languages are listed in the master manifest.
    pub enum HlsCaptionLanguageSetting {
        Insert => "INSERT",
        Omit => "OMIT",
        None => "NONE",
    }
}

string_enum! {
    pub enum HlsClientCache {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum HlsCodecSpecification {
        Rfc6381 => "RFC_6381",
        Rfc4281 => "RFC_4281",
    }
}

string_enum! {
    /// Segment layout under the destination.
    pub enum HlsDirectoryStructure {
        SingleDirectory => "SINGLE_DIRECTORY",
        SubdirectoryPerStream => "SUBDIRECTORY_PER_STREAM",
    }
}

string_enum! {
    pub enum HlsManifestCompression {
        Gzip => "GZIP",
        None => "NONE",
    }
}

string_enum! {
    pub enum HlsManifestDurationFormat {
        FloatingPoint => "FLOATING_POINT",
        Integer => "INTEGER",
    }
}

string_enum! {
    pub enum HlsOutputSelection {
        ManifestsAndSegments => "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly => "SEGMENTS_ONLY",
    }
}

string_enum! {
    pub enum HlsProgramDateTime {
        Include => "INCLUDE",
        Exclude => "EXCLUDE",
    }
}

string_enum! {
    pub enum HlsSegmentControl {
        SingleFile => "SINGLE_FILE",
        SegmentedFiles => "SEGMENTED_FILES",
    }
}

string_enum! {
    pub enum HlsStreamInfResolution {
        Include => "INCLUDE",
        Exclude => "EXCLUDE",
    }
}

string_enum! {
    pub enum HlsTimedMetadataId3Frame {
        None => "NONE",
        Priv => "PRIV",
        Tdrl => "TDRL",
    }
}

string_enum! {
    /// Encryption method applied to HLS segments.
    pub enum HlsEncryptionType {
        Aes128 => "AES128",
        SampleAes => "SAMPLE_AES",
    }
}

string_enum! {
    pub enum HlsInitializationVectorInManifest {
        Include => "INCLUDE",
        Exclude => "EXCLUDE",
    }
}

string_enum! {
    pub enum HlsOfflineEncrypted {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// Source of the content key.
    pub enum HlsKeyProviderType {
        Speke => "SPEKE",
        StaticKey => "STATIC_KEY",
    }
}
record! {
    /// An extra variant manifest built from a subset of the group's outputs.
    pub struct HlsAdditionalManifest {
        #[validate(length(min = 1))]
        manifest_name_modifier: String => with_manifest_name_modifier,
        selected_outputs: Vec<String> => with_selected_outputs,
    }
}

record! {
    /// Maps a CEA-608 caption channel to a language in the manifest.
    pub struct HlsCaptionLanguageMapping {
        caption_channel: i32 => with_caption_channel,
        #[validate(custom(function = "crate::validation::custom_language_code"))]
        custom_language_code: String => with_custom_language_code,
        language_code: LanguageCode => with_language_code,
        language_description: String => with_language_description,
    }
}

record! {
    pub struct HlsEncryptionSettings {
        /// Fixed 128-bit initialization vector, hex encoded.
        #[validate(custom(function = "crate::validation::hex_128"))]
        constant_initialization_vector: String => with_constant_initialization_vector,
        encryption_method: HlsEncryptionType => with_encryption_method,
        initialization_vector_in_manifest: HlsInitializationVectorInManifest => with_initialization_vector_in_manifest,
        offline_encrypted: HlsOfflineEncrypted => with_offline_encrypted,
        #[validate(nested)]
        static_key_provider: StaticKeyProvider => with_static_key_provider,
        #[serde(rename = "type")]
        key_provider_type: HlsKeyProviderType => with_key_provider_type,
    }
}

record! {
    /// Settings for an `HLS_GROUP_SETTINGS` output group.
    pub struct HlsGroupSettings {
        ad_markers: Vec<HlsAdMarkers> => with_ad_markers,
        #[validate(nested)]
        additional_manifests: Vec<HlsAdditionalManifest> => with_additional_manifests,
        base_url: String => with_base_url,
        #[validate(nested)]
        caption_language_mappings: Vec<HlsCaptionLanguageMapping> => with_caption_language_mappings,
        caption_language_setting: HlsCaptionLanguageSetting => with_caption_language_setting,
        client_cache: HlsClientCache => with_client_cache,
        codec_specification: HlsCodecSpecification => with_codec_specification,
        /// S3 prefix the manifests and segments are written under.
        #[validate(custom(function = "crate::validation::s3_destination"))]
        destination: String => with_destination,
        #[validate(nested)]
        destination_settings: DestinationSettings => with_destination_settings,
        directory_structure: HlsDirectoryStructure => with_directory_structure,
        #[validate(nested)]
        encryption: HlsEncryptionSettings => with_encryption,
        manifest_compression: HlsManifestCompression => with_manifest_compression,
        manifest_duration_format: HlsManifestDurationFormat => with_manifest_duration_format,
        min_final_segment_length: f64 => with_min_final_segment_length,
        #[validate(range(min = 0))]
        min_segment_length: i32 => with_min_segment_length,
        output_selection: HlsOutputSelection => with_output_selection,
        program_date_time: HlsProgramDateTime => with_program_date_time,
        #[validate(range(min = 0, max = 3600))]
        program_date_time_period: i32 => with_program_date_time_period,
        segment_control: HlsSegmentControl => with_segment_control,
        /// Target segment duration in seconds.
        #[validate(range(min = 1))]
        segment_length: i32 => with_segment_length,
        #[validate(range(min = 1))]
        segments_per_subdirectory: i32 => with_segments_per_subdirectory,
        stream_inf_resolution: HlsStreamInfResolution => with_stream_inf_resolution,
        timed_metadata_id3_frame: HlsTimedMetadataId3Frame => with_timed_metadata_id3_frame,
        timed_metadata_id3_period: i32 => with_timed_metadata_id3_period,
        timestamp_delta_milliseconds: i32 => with_timestamp_delta_milliseconds,
    }
}
