//! Queues and reserved-capacity plans.

use chrono::{DateTime, Utc};

string_enum! {
    /// A `PAUSED` queue holds its jobs without starting them.
    pub enum QueueStatus {
        Active => "ACTIVE",
        Paused => "PAUSED",
    }
}

string_enum! {
    pub enum PricingPlan {
        OnDemand => "ON_DEMAND",
        Reserved => "RESERVED",
    }
}

string_enum! {
    /// Term of a reserved-queue purchase.
    pub enum Commitment {
        OneYear => "ONE_YEAR",
    }
}

string_enum! {
    pub enum RenewalType {
        AutoRenew => "AUTO_RENEW",
        Expire => "EXPIRE",
    }
}

string_enum! {
    pub enum ReservationPlanStatus {
        Active => "ACTIVE",
        Expired => "EXPIRED",
    }
}

string_enum! {
    pub enum QueueListBy {
        Name => "NAME",
        CreationDate => "CREATION_DATE",
    }
}

string_enum! {
    /// Whether a resource is provided by the service or created by the account.
    pub enum Type {
        System => "SYSTEM",
        Custom => "CUSTOM",
    }
}
record! {
    /// Terms requested when buying or changing a reserved queue.
    pub struct ReservationPlanSettings {
        commitment: Commitment => with_commitment,
        renewal_type: RenewalType => with_renewal_type,
        /// Number of jobs the queue can process in parallel.
        #[validate(range(min = 1))]
        reserved_slots: i32 => with_reserved_slots,
    }
}

record! {
    /// Reserved capacity currently attached to a queue.
    pub struct ReservationPlan {
        commitment: Commitment => with_commitment,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        expires_at: DateTime<Utc> => with_expires_at,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        purchased_at: DateTime<Utc> => with_purchased_at,
        renewal_type: RenewalType => with_renewal_type,
        reserved_slots: i32 => with_reserved_slots,
        status: ReservationPlanStatus => with_status,
    }
}

record! {
    /// A queue jobs are submitted to.
    pub struct Queue {
        arn: String => with_arn,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_at: DateTime<Utc> => with_created_at,
        description: String => with_description,
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated: DateTime<Utc> => with_last_updated,
        name: String => with_name,
        pricing_plan: PricingPlan => with_pricing_plan,
        progressing_jobs_count: i32 => with_progressing_jobs_count,
        reservation_plan: ReservationPlan => with_reservation_plan,
        status: QueueStatus => with_status,
        submitted_jobs_count: i32 => with_submitted_jobs_count,
        #[serde(rename = "type")]
        queue_type: Type => with_queue_type,
    }
}
