use std::collections::BTreeMap;

use super::{json_body, path_param, require, HttpMethod, HttpRequest, Operation};
use crate::error::MarshalResult;
use crate::job::Order;
use crate::queue::{PricingPlan, Queue, QueueListBy, QueueStatus, ReservationPlanSettings};

record! {
    pub struct CreateQueueRequest {
        description: String => with_description,
        #[validate(length(min = 1))]
        name: String => with_name,
        pricing_plan: PricingPlan => with_pricing_plan,
        /// Required when `pricing_plan` is `RESERVED`.
        #[validate(nested)]
        reservation_plan_settings: ReservationPlanSettings => with_reservation_plan_settings,
        status: QueueStatus => with_status,
        tags: BTreeMap<String, String> => with_tags,
    }
}

record! {
    pub struct CreateQueueResponse {
        queue: Queue => with_queue,
    }
}

impl Operation for CreateQueueRequest {
    const NAME: &'static str = "CreateQueue";
    type Output = CreateQueueResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        require("name", &self.name)?;
        Ok(HttpRequest::new(HttpMethod::Post, "queues").body(json_body(self, &[])?))
    }
}

record! {
    pub struct GetQueueRequest {
        name: String => with_name,
    }
}

record! {
    pub struct GetQueueResponse {
        queue: Queue => with_queue,
    }
}

impl Operation for GetQueueRequest {
    const NAME: &'static str = "GetQueue";
    type Output = GetQueueResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let name = path_param("name", &self.name)?;
        Ok(HttpRequest::new(HttpMethod::Get, format!("queues/{}", name)))
    }
}

record! {
    pub struct ListQueuesRequest {
        list_by: QueueListBy => with_list_by,
        #[validate(range(min = 1, max = 20))]
        max_results: i32 => with_max_results,
        next_token: String => with_next_token,
        order: Order => with_order,
    }
}

record! {
    pub struct ListQueuesResponse {
        next_token: String => with_next_token,
        queues: Vec<Queue> => with_queues,
    }
}

impl Operation for ListQueuesRequest {
    const NAME: &'static str = "ListQueues";
    type Output = ListQueuesResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        Ok(HttpRequest::new(HttpMethod::Get, "queues")
            .query_param("listBy", &self.list_by)
            .query_param("maxResults", &self.max_results)
            .query_param("nextToken", &self.next_token)
            .query_param("order", &self.order))
    }
}

record! {
    /// Change a queue's description, status or reservation plan.
    pub struct UpdateQueueRequest {
        description: String => with_description,
        name: String => with_name,
        #[validate(nested)]
        reservation_plan_settings: ReservationPlanSettings => with_reservation_plan_settings,
        status: QueueStatus => with_status,
    }
}

record! {
    pub struct UpdateQueueResponse {
        queue: Queue => with_queue,
    }
}

impl Operation for UpdateQueueRequest {
    const NAME: &'static str = "UpdateQueue";
    type Output = UpdateQueueResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let name = path_param("name", &self.name)?;
        Ok(HttpRequest::new(HttpMethod::Put, format!("queues/{}", name))
            .body(json_body(self, &["name"])?))
    }
}

record! {
    /// Delete an empty custom queue.
    pub struct DeleteQueueRequest {
        name: String => with_name,
    }
}

record! {
    pub struct DeleteQueueResponse {}
}

impl Operation for DeleteQueueRequest {
    const NAME: &'static str = "DeleteQueue";
    type Output = DeleteQueueResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let name = path_param("name", &self.name)?;
        Ok(HttpRequest::new(HttpMethod::Delete, format!("queues/{}", name)))
    }
}
