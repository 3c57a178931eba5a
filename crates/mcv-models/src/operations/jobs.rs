use std::collections::BTreeMap;

use uuid::Uuid;

use super::{json_body, path_param, HttpMethod, HttpRequest, Operation};
use crate::error::MarshalResult;
use crate::job::{
    AccelerationSettings, BillingTagsSource, HopDestination, Job, JobSettings, JobStatus, Order,
    SimulateReservedQueue, StatusUpdateInterval,
};

record! {
    /// Submit a new transcoding job.
    pub struct CreateJobRequest {
        #[validate(nested)]
        acceleration_settings: AccelerationSettings => with_acceleration_settings,
        billing_tags_source: BillingTagsSource => with_billing_tags_source,
        /// Idempotency token. Generated when absent.
        client_request_token: String => with_client_request_token,
        #[validate(nested)]
        hop_destinations: Vec<HopDestination> => with_hop_destinations,
        job_template: String => with_job_template,
        #[validate(range(min = -50, max = 50))]
        priority: i32 => with_priority,
        queue: String => with_queue,
        role: String => with_role,
        #[validate(nested)]
        settings: JobSettings => with_settings,
        simulate_reserved_queue: SimulateReservedQueue => with_simulate_reserved_queue,
        status_update_interval: StatusUpdateInterval => with_status_update_interval,
        tags: BTreeMap<String, String> => with_tags,
        user_metadata: BTreeMap<String, String> => with_user_metadata,
    }
}

record! {
    pub struct CreateJobResponse {
        job: Job => with_job,
    }
}

impl Operation for CreateJobRequest {
    const NAME: &'static str = "CreateJob";
    type Output = CreateJobResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let mut request = self.clone();
        if request.client_request_token.as_deref().map_or(true, str::is_empty) {
            request.client_request_token = Some(Uuid::new_v4().to_string());
        }
        Ok(HttpRequest::new(HttpMethod::Post, "jobs").body(json_body(&request, &[])?))
    }
}

record! {
    pub struct GetJobRequest {
        id: String => with_id,
    }
}

record! {
    pub struct GetJobResponse {
        job: Job => with_job,
    }
}

impl Operation for GetJobRequest {
    const NAME: &'static str = "GetJob";
    type Output = GetJobResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let id = path_param("id", &self.id)?;
        Ok(HttpRequest::new(HttpMethod::Get, format!("jobs/{}", id)))
    }
}

record! {
    /// List recent jobs, newest first unless `order` says otherwise.
    pub struct ListJobsRequest {
        #[validate(range(min = 1, max = 20))]
        max_results: i32 => with_max_results,
        next_token: String => with_next_token,
        order: Order => with_order,
        /// Only list jobs submitted to this queue.
        queue: String => with_queue,
        status: JobStatus => with_status,
    }
}

record! {
    pub struct ListJobsResponse {
        jobs: Vec<Job> => with_jobs,
        /// Present when more results are available.
        next_token: String => with_next_token,
    }
}

impl Operation for ListJobsRequest {
    const NAME: &'static str = "ListJobs";
    type Output = ListJobsResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        Ok(HttpRequest::new(HttpMethod::Get, "jobs")
            .query_param("maxResults", &self.max_results)
            .query_param("nextToken", &self.next_token)
            .query_param("order", &self.order)
            .query_param("queue", &self.queue)
            .query_param("status", &self.status))
    }
}

record! {
    /// Cancel a job that has not finished.
    pub struct CancelJobRequest {
        id: String => with_id,
    }
}

record! {
    pub struct CancelJobResponse {}
}

impl Operation for CancelJobRequest {
    const NAME: &'static str = "CancelJob";
    type Output = CancelJobResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let id = path_param("id", &self.id)?;
        Ok(HttpRequest::new(HttpMethod::Delete, format!("jobs/{}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarshalError;
    use crate::input::Input;
    use validator::Validate;

    fn body_json(request: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_create_job_generates_token() {
        let request = CreateJobRequest::new()
            .with_role("arn:aws:iam::123456789012:role/MediaConvert")
            .with_settings(
                JobSettings::new().with_inputs(vec![Input::new().with_file_input("s3://in/a.mov")]),
            );

        let http = request.marshal().unwrap();
        assert_eq!(http.method, HttpMethod::Post);
        assert_eq!(http.path, "/2017-08-29/jobs");
        assert!(http.query.is_empty());

        let body = body_json(&http);
        let token = body["clientRequestToken"].as_str().unwrap();
        assert!(Uuid::parse_str(token).is_ok());
        assert_eq!(body["settings"]["inputs"][0]["fileInput"], "s3://in/a.mov");
        assert!(request.client_request_token.is_none());
    }

    #[test]
    fn test_create_job_keeps_caller_token() {
        let request = CreateJobRequest::new().with_client_request_token("retry-safe-token");
        let body = body_json(&request.marshal().unwrap());
        assert_eq!(body["clientRequestToken"], "retry-safe-token");
    }

    #[test]
    fn test_create_job_priority_range() {
        assert!(CreateJobRequest::new().with_priority(50).validate().is_ok());
        assert!(CreateJobRequest::new().with_priority(-51).validate().is_err());
    }

    #[test]
    fn test_get_and_cancel_paths() {
        let get = GetJobRequest::new().with_id("1580000000000-abc").marshal().unwrap();
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.path, "/2017-08-29/jobs/1580000000000-abc");
        assert!(get.body.is_none());

        let cancel = CancelJobRequest::new().with_id("1580000000000-abc").marshal().unwrap();
        assert_eq!(cancel.method, HttpMethod::Delete);
        assert_eq!(cancel.path, "/2017-08-29/jobs/1580000000000-abc");
    }

    #[test]
    fn test_missing_id_fails() {
        assert!(matches!(
            GetJobRequest::new().marshal(),
            Err(MarshalError::MissingField("id"))
        ));
        assert!(matches!(
            CancelJobRequest::new().with_id("").marshal(),
            Err(MarshalError::MissingField("id"))
        ));
    }

    #[test]
    fn test_list_jobs_query() {
        let http = ListJobsRequest::new()
            .with_max_results(20)
            .with_status(JobStatus::Error)
            .with_order(Order::Descending)
            .marshal()
            .unwrap();

        assert_eq!(http.path, "/2017-08-29/jobs");
        assert_eq!(
            http.query,
            vec![
                ("maxResults".to_string(), "20".to_string()),
                ("order".to_string(), "DESCENDING".to_string()),
                ("status".to_string(), "ERROR".to_string()),
            ]
        );
        assert!(http.body.is_none());
    }

    #[test]
    fn test_list_jobs_max_results_range() {
        assert!(ListJobsRequest::new().with_max_results(21).validate().is_err());
        assert!(ListJobsRequest::new().with_max_results(0).validate().is_err());
    }

    #[test]
    fn test_empty_response_shapes() {
        let response: CancelJobResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, CancelJobResponse::new());
        assert_eq!(response.to_string(), "{}");
    }
}
