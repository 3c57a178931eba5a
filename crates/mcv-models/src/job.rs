//! Jobs, job settings and job templates.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::input::{Input, InputTemplate};
use crate::output_group::OutputGroup;
use crate::queue::Type;

string_enum! {
    pub enum AccelerationStatus {
        NotApplicable => "NOT_APPLICABLE",
        InProgress => "IN_PROGRESS",
        Accelerated => "ACCELERATED",
        NotAccelerated => "NOT_ACCELERATED",
    }
}

string_enum! {
    /// Which resource's tags are applied to the job for cost allocation.
    pub enum BillingTagsSource {
        Queue => "QUEUE",
        Preset => "PRESET",
        JobTemplate => "JOB_TEMPLATE",
        Job => "JOB",
    }
}

string_enum! {
    /// Phase a `PROGRESSING` job is in.
    pub enum JobPhase {
        Probing => "PROBING",
        Transcoding => "TRANSCODING",
        Uploading => "UPLOADING",
    }
}

string_enum! {
    /// Run an on-demand job as if it were on a reserved queue, to estimate
    /// reserved-capacity timing.
    pub enum SimulateReservedQueue {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Lifecycle state of a job.
    pub enum JobStatus {
        Submitted => "SUBMITTED",
        Progressing => "PROGRESSING",
        Complete => "COMPLETE",
        Canceled => "CANCELED",
        Error => "ERROR",
    }
}

string_enum! {
    /// How often the service emits `STATUS_UPDATE` events for a running job.
    pub enum StatusUpdateInterval {
        Seconds10 => "SECONDS_10",
        Seconds12 => "SECONDS_12",
        Seconds15 => "SECONDS_15",
        Seconds20 => "SECONDS_20",
        Seconds30 => "SECONDS_30",
        Seconds60 => "SECONDS_60",
        Seconds120 => "SECONDS_120",
        Seconds180 => "SECONDS_180",
        Seconds240 => "SECONDS_240",
        Seconds300 => "SECONDS_300",
        Seconds360 => "SECONDS_360",
        Seconds420 => "SECONDS_420",
        Seconds480 => "SECONDS_480",
        Seconds540 => "SECONDS_540",
        Seconds600 => "SECONDS_600",
    }
}

string_enum! {
    /// Accelerated transcoding. `PREFERRED` falls back to normal transcoding when the
    /// job cannot be accelerated.
    pub enum AccelerationMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        Preferred => "PREFERRED",
    }
}

string_enum! {
    /// Sort order of list results.
    pub enum Order {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

string_enum! {
    pub enum JobTemplateListBy {
        Name => "NAME",
        CreationDate => "CREATION_DATE",
        System => "SYSTEM",
    }
}
impl JobStatus {
    /// Whether the job can still change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Complete | JobStatus::Canceled | JobStatus::Error)
    }
}

record! {
    pub struct AccelerationSettings {
        mode: AccelerationMode => with_mode,
    }
}

record! {
    /// A queue the job moves to if it waits too long in the current one.
    pub struct HopDestination {
        #[validate(range(min = -50, max = 50))]
        priority: i32 => with_priority,
        queue: String => with_queue,
        /// Minutes to wait before hopping.
        #[validate(range(min = 1))]
        wait_minutes: i32 => with_wait_minutes,
    }
}

record! {
    /// Informational and warning messages the service attached to a job.
    pub struct JobMessages {
        info: Vec<String> => with_info,
        warning: Vec<String> => with_warning,
    }
}

record! {
    pub struct Timing {
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        finish_time: DateTime<Utc> => with_finish_time,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        start_time: DateTime<Utc> => with_start_time,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        submit_time: DateTime<Utc> => with_submit_time,
    }
}

record! {
    pub struct VideoDetail {
        height_in_px: i32 => with_height_in_px,
        width_in_px: i32 => with_width_in_px,
    }
}

record! {
    /// What the service actually produced for one output.
    pub struct OutputDetail {
        duration_in_ms: i32 => with_duration_in_ms,
        video_details: VideoDetail => with_video_details,
    }
}

record! {
    pub struct OutputGroupDetail {
        output_details: Vec<OutputDetail> => with_output_details,
    }
}

record! {
    /// A move of the job from one queue to another.
    pub struct QueueTransition {
        destination_queue: String => with_destination_queue,
        source_queue: String => with_source_queue,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        timestamp: DateTime<Utc> => with_timestamp,
    }
}

record! {
    /// What a job does: its inputs and the output groups built from them.
    pub struct JobSettings {
        /// Milliseconds to shift ad avail markers by.
        #[validate(range(min = -1000, max = 1000))]
        ad_avail_offset: i32 => with_ad_avail_offset,
        #[validate(nested)]
        inputs: Vec<Input> => with_inputs,
        #[validate(nested)]
        output_groups: Vec<OutputGroup> => with_output_groups,
    }
}

record! {
    /// A transcoding job, as submitted and as reported back by the service.
    pub struct Job {
        #[validate(nested)]
        acceleration_settings: AccelerationSettings => with_acceleration_settings,
        acceleration_status: AccelerationStatus => with_acceleration_status,
        arn: String => with_arn,
        billing_tags_source: BillingTagsSource => with_billing_tags_source,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_at: DateTime<Utc> => with_created_at,
        current_phase: JobPhase => with_current_phase,
        error_code: i32 => with_error_code,
        error_message: String => with_error_message,
        #[validate(nested)]
        hop_destinations: Vec<HopDestination> => with_hop_destinations,
        id: String => with_id,
        /// Rough progress estimate, only reported while `PROGRESSING`.
        job_percent_complete: i32 => with_job_percent_complete,
        job_template: String => with_job_template,
        messages: JobMessages => with_messages,
        output_group_details: Vec<OutputGroupDetail> => with_output_group_details,
        #[validate(range(min = -50, max = 50))]
        priority: i32 => with_priority,
        queue: String => with_queue,
        queue_transitions: Vec<QueueTransition> => with_queue_transitions,
        retry_count: i32 => with_retry_count,
        /// IAM role the service assumes to read inputs and write outputs.
        role: String => with_role,
        #[validate(nested)]
        settings: JobSettings => with_settings,
        simulate_reserved_queue: SimulateReservedQueue => with_simulate_reserved_queue,
        status: JobStatus => with_status,
        status_update_interval: StatusUpdateInterval => with_status_update_interval,
        timing: Timing => with_timing,
        user_metadata: BTreeMap<String, String> => with_user_metadata,
    }
}

record! {
    /// Job settings saved in a template. Inputs carry no source location.
    pub struct JobTemplateSettings {
        #[validate(range(min = -1000, max = 1000))]
        ad_avail_offset: i32 => with_ad_avail_offset,
        #[validate(nested)]
        inputs: Vec<InputTemplate> => with_inputs,
        #[validate(nested)]
        output_groups: Vec<OutputGroup> => with_output_groups,
    }
}

record! {
    /// Reusable job settings.
    pub struct JobTemplate {
        #[validate(nested)]
        acceleration_settings: AccelerationSettings => with_acceleration_settings,
        arn: String => with_arn,
        category: String => with_category,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_at: DateTime<Utc> => with_created_at,
        description: String => with_description,
        #[validate(nested)]
        hop_destinations: Vec<HopDestination> => with_hop_destinations,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated: DateTime<Utc> => with_last_updated,
        name: String => with_name,
        #[validate(range(min = -50, max = 50))]
        priority: i32 => with_priority,
        queue: String => with_queue,
        #[validate(nested)]
        settings: JobTemplateSettings => with_settings,
        status_update_interval: StatusUpdateInterval => with_status_update_interval,
        /// `SYSTEM` templates are provided by the service and read-only.
        #[serde(rename = "type")]
        template_type: Type => with_template_type,
    }
}
