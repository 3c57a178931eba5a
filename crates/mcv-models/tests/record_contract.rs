//! Contract checks shared by every record type.

use std::fmt::{Debug, Display};

use mcv_models::*;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Convert a camelCase wire name back to the snake_case field name.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn definition<'a>(schema: &'a Value, property: &Value) -> Option<&'a Value> {
    let reference = property
        .get("$ref")
        .or_else(|| {
            ["anyOf", "allOf", "oneOf"].iter().find_map(|key| {
                property
                    .get(*key)?
                    .as_array()?
                    .iter()
                    .find_map(|s| s.get("$ref"))
            })
        })?
        .as_str()?;
    let name = reference.rsplit('/').next()?;
    schema.get("definitions")?.get(name)
}

fn first_enum_token(definition: &Value) -> Option<Value> {
    if let Some(tokens) = definition.get("enum").and_then(Value::as_array) {
        return tokens.first().cloned();
    }
    definition
        .get("oneOf")?
        .as_array()?
        .iter()
        .find_map(|variant| variant.get("enum")?.as_array()?.first().cloned())
}

/// A wire value that deserializes into the given property.
fn sample_value(schema: &Value, property: &Value) -> Value {
    if let Some(definition) = definition(schema, property) {
        return first_enum_token(definition).unwrap_or_else(|| json!({}));
    }

    let types: Vec<&str> = match property.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(ts)) => ts.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    match types.into_iter().find(|t| *t != "null") {
        Some("string") => json!("x"),
        Some("integer") => json!(1),
        Some("number") => json!(1.5),
        Some("boolean") => json!(true),
        Some("array") => json!([]),
        _ => json!({}),
    }
}

fn check<R>(name: &str)
where
    R: Default + PartialEq + Debug + Display + Serialize + DeserializeOwned + JsonSchema + Validate,
{
    let empty = R::default();
    assert_eq!(empty.to_string(), "{}", "{}", name);
    assert_eq!(serde_json::to_string(&empty).unwrap(), "{}", "{}", name);
    assert_eq!(serde_json::from_str::<R>("{}").unwrap(), empty, "{}", name);
    assert!(empty.validate().is_ok(), "{}", name);

    let schema = serde_json::to_value(schemars::schema_for!(R)).unwrap();
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    for (key, property) in &properties {
        let mut wire = Map::new();
        wire.insert(key.clone(), sample_value(&schema, property));
        let wire = Value::Object(wire);

        let one: R = serde_json::from_value(wire.clone())
            .unwrap_or_else(|e| panic!("{}.{}: {}", name, key, e));
        assert_ne!(one, empty, "{}.{}", name, key);
        assert_eq!(serde_json::to_value(&one).unwrap(), wire, "{}.{}", name, key);

        let rendered = one.to_string();
        assert!(rendered.starts_with('{') && rendered.ends_with('}'), "{}", rendered);
        assert!(!rendered.contains(", "), "{}.{} renders {}", name, key, rendered);
        if key != "type" && !key.chars().any(|c| c.is_ascii_digit()) {
            assert!(
                rendered.starts_with(&format!("{{{}: ", snake_case(key))),
                "{}.{} renders {}",
                name,
                key,
                rendered
            );
        }
    }
}

macro_rules! check_records {
    ($($ty:path),+ $(,)?) => {
        fn check_all() -> usize {
            let mut checked = 0;
            $(
                assert_eq!(<$ty>::new(), <$ty>::default());
                check::<$ty>(stringify!($ty));
                checked += 1;
            )+
            checked
        }
    };
}

check_records! {
    // audio
    audio::AudioCodecSettings,
    audio::AudioNormalizationSettings,
    audio::OutputChannelMapping,
    audio::ChannelMapping,
    audio::RemixSettings,
    audio::AudioDescription,
    audio::Eac3Settings,
    // captions
    captions::BurninDestinationSettings,
    captions::DvbSubDestinationSettings,
    captions::CaptionDestinationSettings,
    captions::CaptionDescription,
    // container
    container::DvbNitSettings,
    container::DvbSdtSettings,
    container::DvbTdtSettings,
    container::M2tsScte35Esam,
    container::M2tsSettings,
    container::ContainerSettings,
    // input
    input::InputClipping,
    input::VideoSelector,
    input::InsertableImage,
    input::ImageInserter,
    input::Input,
    input::InputTemplate,
    // job
    job::AccelerationSettings,
    job::HopDestination,
    job::JobMessages,
    job::Timing,
    job::VideoDetail,
    job::OutputDetail,
    job::OutputGroupDetail,
    job::QueueTransition,
    job::JobSettings,
    job::Job,
    job::JobTemplateSettings,
    job::JobTemplate,
    // operations
    operations::CreateJobRequest,
    operations::CreateJobResponse,
    operations::GetJobRequest,
    operations::GetJobResponse,
    operations::ListJobsRequest,
    operations::ListJobsResponse,
    operations::CancelJobRequest,
    operations::CancelJobResponse,
    operations::AssociateCertificateRequest,
    operations::AssociateCertificateResponse,
    operations::DisassociateCertificateRequest,
    operations::DisassociateCertificateResponse,
    operations::GetJobTemplateRequest,
    operations::GetJobTemplateResponse,
    operations::ListJobTemplatesRequest,
    operations::ListJobTemplatesResponse,
    operations::CreateQueueRequest,
    operations::CreateQueueResponse,
    operations::GetQueueRequest,
    operations::GetQueueResponse,
    operations::ListQueuesRequest,
    operations::ListQueuesResponse,
    operations::UpdateQueueRequest,
    operations::UpdateQueueResponse,
    operations::DeleteQueueRequest,
    operations::DeleteQueueResponse,
    operations::Endpoint,
    operations::DescribeEndpointsRequest,
    operations::DescribeEndpointsResponse,
    operations::ResourceTags,
    operations::ListTagsForResourceRequest,
    operations::ListTagsForResourceResponse,
    operations::TagResourceRequest,
    operations::TagResourceResponse,
    operations::UntagResourceRequest,
    operations::UntagResourceResponse,
    // output_group
    output_group::CmafAdditionalManifest,
    output_group::CmafEncryptionSettings,
    output_group::CmafGroupSettings,
    output_group::HlsAdditionalManifest,
    output_group::HlsCaptionLanguageMapping,
    output_group::HlsEncryptionSettings,
    output_group::HlsGroupSettings,
    output_group::S3DestinationAccessControl,
    output_group::S3EncryptionSettings,
    output_group::S3DestinationSettings,
    output_group::DestinationSettings,
    output_group::StaticKeyProvider,
    output_group::Output,
    output_group::OutputGroupSettings,
    output_group::OutputGroup,
    // queue
    queue::ReservationPlanSettings,
    queue::ReservationPlan,
    queue::Queue,
    // video
    video::ProresSettings,
    video::Vp9Settings,
    video::H265QvbrSettings,
    video::H265Settings,
    video::H264QvbrSettings,
    video::H264Settings,
    video::Rectangle,
    video::VideoCodecSettings,
    video::VideoDescription,
    video::Mpeg2Settings,
    video::ColorCorrector,
    video::Deinterlacer,
    video::NoiseReducer,
    video::TimecodeBurnin,
    video::VideoPreprocessor,
}

#[test]
fn test_every_record_honours_the_field_contract() {
    assert_eq!(check_all(), 104);
}
