//! Output groups: where and how a job's outputs are packaged.

mod cmaf;
mod hls;

pub use cmaf::*;
pub use hls::*;

use crate::audio::AudioDescription;
use crate::captions::CaptionDescription;
use crate::container::ContainerSettings;
use crate::video::VideoDescription;

string_enum! {
    /// Output group kind. Selects which member of `OutputGroupSettings` applies.
    pub enum OutputGroupType {
        HlsGroupSettings => "HLS_GROUP_SETTINGS",
        DashIsoGroupSettings => "DASH_ISO_GROUP_SETTINGS",
        FileGroupSettings => "FILE_GROUP_SETTINGS",
        MsSmoothGroupSettings => "MS_SMOOTH_GROUP_SETTINGS",
        CmafGroupSettings => "CMAF_GROUP_SETTINGS",
    }
}

string_enum! {
    /// Canned ACL applied to written objects.
    pub enum S3ObjectCannedAcl {
        PublicRead => "PUBLIC_READ",
        AuthenticatedRead => "AUTHENTICATED_READ",
        BucketOwnerRead => "BUCKET_OWNER_READ",
        BucketOwnerFullControl => "BUCKET_OWNER_FULL_CONTROL",
    }
}

string_enum! {
    pub enum S3ServerSideEncryptionType {
        ServerSideEncryptionS3 => "SERVER_SIDE_ENCRYPTION_S3",
        ServerSideEncryptionKms => "SERVER_SIDE_ENCRYPTION_KMS",
    }
}
record! {
    pub struct S3DestinationAccessControl {
        canned_acl: S3ObjectCannedAcl => with_canned_acl,
    }
}

record! {
    pub struct S3EncryptionSettings {
        encryption_type: S3ServerSideEncryptionType => with_encryption_type,
        /// Required when `encryption_type` is `SERVER_SIDE_ENCRYPTION_KMS`.
        kms_key_arn: String => with_kms_key_arn,
    }
}

record! {
    pub struct S3DestinationSettings {
        #[validate(nested)]
        access_control: S3DestinationAccessControl => with_access_control,
        #[validate(nested)]
        encryption: S3EncryptionSettings => with_encryption,
    }
}

record! {
    /// Properties of the storage an output group writes to.
    pub struct DestinationSettings {
        #[validate(nested)]
        s3_settings: S3DestinationSettings => with_s3_settings,
    }
}

record! {
    /// A content key supplied directly instead of through a key server.
    pub struct StaticKeyProvider {
        key_format: String => with_key_format,
        key_format_versions: String => with_key_format_versions,
        #[validate(custom(function = "crate::validation::hex_128"))]
        static_key_value: String => with_static_key_value,
        /// Key URI written into the manifest.
        url: String => with_url,
    }
}

record! {
    /// One rendition of a job: a container holding video, audio and
    /// caption streams.
    pub struct Output {
        #[validate(nested)]
        audio_descriptions: Vec<AudioDescription> => with_audio_descriptions,
        #[validate(nested)]
        caption_descriptions: Vec<CaptionDescription> => with_caption_descriptions,
        #[validate(nested)]
        container_settings: ContainerSettings => with_container_settings,
        extension: String => with_extension,
        /// Suffix appended to the input file name for this output.
        #[validate(length(min = 1))]
        name_modifier: String => with_name_modifier,
        preset: String => with_preset,
        #[validate(nested)]
        video_description: VideoDescription => with_video_description,
    }
}

record! {
    pub struct OutputGroupSettings {
        #[validate(nested)]
        cmaf_group_settings: CmafGroupSettings => with_cmaf_group_settings,
        #[validate(nested)]
        hls_group_settings: HlsGroupSettings => with_hls_group_settings,
        #[serde(rename = "type")]
        group_type: OutputGroupType => with_group_type,
    }
}

record! {
    /// A set of outputs packaged together.
    pub struct OutputGroup {
        custom_name: String => with_custom_name,
        name: String => with_name,
        #[validate(nested)]
        output_group_settings: OutputGroupSettings => with_output_group_settings,
        #[validate(nested)]
        outputs: Vec<Output> => with_outputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_group_type_wire_name() {
        let settings = OutputGroupSettings::new()
            .with_group_type(OutputGroupType::HlsGroupSettings)
            .with_hls_group_settings(HlsGroupSettings::new().with_segment_length(6));

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["type"], "HLS_GROUP_SETTINGS");
        assert_eq!(json["hlsGroupSettings"]["segmentLength"], 6);
    }

    #[test]
    fn test_validation_reaches_outputs() {
        let group = OutputGroup::new().with_outputs(vec![
            Output::new().with_name_modifier("_720p"),
            Output::new().with_name_modifier(""),
        ]);
        assert!(group.validate().is_err());

        let group = OutputGroup::new().with_outputs(vec![Output::new().with_name_modifier("_720p")]);
        assert!(group.validate().is_ok());
    }

    #[test]
    fn test_s3_destination_settings() {
        let destination = DestinationSettings::new().with_s3_settings(
            S3DestinationSettings::new()
                .with_access_control(
                    S3DestinationAccessControl::new()
                        .with_canned_acl(S3ObjectCannedAcl::BucketOwnerFullControl),
                )
                .with_encryption(
                    S3EncryptionSettings::new()
                        .with_encryption_type(S3ServerSideEncryptionType::ServerSideEncryptionS3),
                ),
        );

        let json = serde_json::to_value(&destination).unwrap();
        assert_eq!(
            json["s3Settings"]["accessControl"]["cannedAcl"],
            "BUCKET_OWNER_FULL_CONTROL"
        );
        assert_eq!(
            json["s3Settings"]["encryption"]["encryptionType"],
            "SERVER_SIDE_ENCRYPTION_S3"
        );
    }
}
