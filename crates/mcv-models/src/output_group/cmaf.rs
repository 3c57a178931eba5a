//! CMAF output group settings (segments shared by DASH and HLS manifests).

use super::{DestinationSettings, StaticKeyProvider};

string_enum! {
    pub enum CmafClientCache {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum CmafCodecSpecification {
        Rfc6381 => "RFC_6381",
        Rfc4281 => "RFC_4281",
    }
}

string_enum! {
    pub enum CmafManifestCompression {
        Gzip => "GZIP",
        None => "NONE",
    }
}

string_enum! {
    pub enum CmafManifestDurationFormat {
        FloatingPoint => "FLOATING_POINT",
        Integer => "INTEGER",
    }
}

string_enum! {
    /// DASH profile declared in the MPD.
    pub enum CmafMpdProfile {
        MainProfile => "MAIN_PROFILE",
        OnDemandProfile => "ON_DEMAND_PROFILE",
    }
}

string_enum! {
    pub enum CmafSegmentControl {
        SingleFile => "SINGLE_FILE",
        SegmentedFiles => "SEGMENTED_FILES",
    }
}

string_enum! {
    pub enum CmafStreamInfResolution {
        Include => "INCLUDE",
        Exclude => "EXCLUDE",
    }
}

string_enum! {
    pub enum CmafWriteDashManifest {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum CmafWriteHlsManifest {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Write `SegmentTimeline` inside each `Representation` instead of the `AdaptationSet`.
    pub enum CmafWriteSegmentTimelineInRepresentation {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// Encryption scheme for CMAF segments.
    pub enum CmafEncryptionType {
        SampleAes => "SAMPLE_AES",
        AesCtr => "AES_CTR",
    }
}

string_enum! {
    pub enum CmafInitializationVectorInManifest {
        Include => "INCLUDE",
        Exclude => "EXCLUDE",
    }
}

string_enum! {
    pub enum CmafKeyProviderType {
        Speke => "SPEKE",
        StaticKey => "STATIC_KEY",
    }
}
record! {
    pub struct CmafAdditionalManifest {
        #[validate(length(min = 1))]
        manifest_name_modifier: String => with_manifest_name_modifier,
        selected_outputs: Vec<String> => with_selected_outputs,
    }
}

record! {
    pub struct CmafEncryptionSettings {
        #[validate(custom(function = "crate::validation::hex_128"))]
        constant_initialization_vector: String => with_constant_initialization_vector,
        encryption_method: CmafEncryptionType => with_encryption_method,
        initialization_vector_in_manifest: CmafInitializationVectorInManifest => with_initialization_vector_in_manifest,
        #[validate(nested)]
        static_key_provider: StaticKeyProvider => with_static_key_provider,
        #[serde(rename = "type")]
        key_provider_type: CmafKeyProviderType => with_key_provider_type,
    }
}

record! {
    /// Settings for a `CMAF_GROUP_SETTINGS` output group.
    pub struct CmafGroupSettings {
        #[validate(nested)]
        additional_manifests: Vec<CmafAdditionalManifest> => with_additional_manifests,
        base_url: String => with_base_url,
        client_cache: CmafClientCache => with_client_cache,
        codec_specification: CmafCodecSpecification => with_codec_specification,
        #[validate(custom(function = "crate::validation::s3_destination"))]
        destination: String => with_destination,
        #[validate(nested)]
        destination_settings: DestinationSettings => with_destination_settings,
        #[validate(nested)]
        encryption: CmafEncryptionSettings => with_encryption,
        /// Fragment duration in seconds.
        #[validate(range(min = 1))]
        fragment_length: i32 => with_fragment_length,
        manifest_compression: CmafManifestCompression => with_manifest_compression,
        manifest_duration_format: CmafManifestDurationFormat => with_manifest_duration_format,
        /// Minimum player buffer, in milliseconds, signalled in the MPD.
        #[validate(range(min = 0))]
        min_buffer_time: i32 => with_min_buffer_time,
        min_final_segment_length: f64 => with_min_final_segment_length,
        mpd_profile: CmafMpdProfile => with_mpd_profile,
        segment_control: CmafSegmentControl => with_segment_control,
        #[validate(range(min = 1))]
        segment_length: i32 => with_segment_length,
        stream_inf_resolution: CmafStreamInfResolution => with_stream_inf_resolution,
        write_dash_manifest: CmafWriteDashManifest => with_write_dash_manifest,
        write_hls_manifest: CmafWriteHlsManifest => with_write_hls_manifest,
        write_segment_timeline_in_representation: CmafWriteSegmentTimelineInRepresentation => with_write_segment_timeline_in_representation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_manifest_switches() {
        let settings = CmafGroupSettings::new()
            .with_write_dash_manifest(CmafWriteDashManifest::Enabled)
            .with_write_hls_manifest(CmafWriteHlsManifest::Disabled)
            .with_fragment_length(2)
            .with_segment_length(10);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["writeDashManifest"], "ENABLED");
        assert_eq!(json["writeHlsManifest"], "DISABLED");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_fragment_length_positive() {
        assert!(CmafGroupSettings::new().with_fragment_length(0).validate().is_err());
    }

    #[test]
    fn test_encryption_tokens() {
        assert_eq!(CmafEncryptionType::AesCtr.as_str(), "AES_CTR");
        assert_eq!(
            "SAMPLE_AES".parse::<CmafEncryptionType>().unwrap(),
            CmafEncryptionType::SampleAes
        );
    }
}
