//! MediaConvert REST API client.
//!
//! - SigV4-signed requests over a pooled HTTP client
//! - Exponential backoff with jitter on throttling and 5xx
//! - Observability (tracing spans, metrics)

use std::time::{Duration, Instant};

use chrono::Utc;
use mcv_models::operations::*;
use mcv_models::{HttpMethod, HttpRequest, Job, JobStatus, Operation, Validate};
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

use crate::config::MediaConvertConfig;
use crate::error::{MediaConvertError, MediaConvertResult};
use crate::metrics::record_request;
use crate::retry::{parse_retry_after, with_retry};
use crate::signing::{Signer, SERVICE};

/// MediaConvert REST API client.
#[derive(Debug, Clone)]
pub struct MediaConvertClient {
    http: Client,
    config: MediaConvertConfig,
    base_url: String,
}

impl MediaConvertClient {
    /// Create a new client.
    pub fn new(config: MediaConvertConfig) -> MediaConvertResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("mcv-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MediaConvertError::Network)?;

        let base_url = config.endpoint_url();

        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> MediaConvertResult<Self> {
        Self::new(MediaConvertConfig::from_env()?)
    }

    pub fn config(&self) -> &MediaConvertConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate, marshal, sign and send any operation.
    pub async fn send<O: Operation>(&self, request: &O) -> MediaConvertResult<O::Output> {
        request.validate()?;
        let http = request.marshal()?;
        let url = self.request_url(&http)?;

        debug!(
            operation = O::NAME,
            method = %http.method,
            path = %http.path,
            query_params = http.query.len(),
            body_bytes = http.body.as_ref().map_or(0, String::len),
            "Marshalled MediaConvert request"
        );

        self.execute_request(
            O::NAME,
            with_retry(&self.config.retry, O::NAME, || self.dispatch(&http, &url)),
        )
        .await
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    pub async fn create_job(&self, request: &CreateJobRequest) -> MediaConvertResult<CreateJobResponse> {
        self.send(request).await
    }

    pub async fn get_job(&self, request: &GetJobRequest) -> MediaConvertResult<GetJobResponse> {
        self.send(request).await
    }

    pub async fn list_jobs(&self, request: &ListJobsRequest) -> MediaConvertResult<ListJobsResponse> {
        self.send(request).await
    }

    pub async fn cancel_job(&self, request: &CancelJobRequest) -> MediaConvertResult<CancelJobResponse> {
        self.send(request).await
    }

    /// List every job, following `nextToken` until the last page.
    pub async fn list_all_jobs(&self, status: Option<JobStatus>) -> MediaConvertResult<Vec<Job>> {
        let mut jobs = Vec::new();
        let mut request = ListJobsRequest::new().with_max_results(20);
        request.status = status;

        loop {
            let page = self.list_jobs(&request).await?;
            jobs.extend(page.jobs.unwrap_or_default());

            match page.next_token.filter(|t| !t.is_empty()) {
                Some(token) => request.next_token = Some(token),
                None => break,
            }
        }

        info!(count = jobs.len(), "Listed all MediaConvert jobs");
        Ok(jobs)
    }

    // =========================================================================
    // Job templates
    // =========================================================================

    pub async fn get_job_template(
        &self,
        request: &GetJobTemplateRequest,
    ) -> MediaConvertResult<GetJobTemplateResponse> {
        self.send(request).await
    }

    pub async fn list_job_templates(
        &self,
        request: &ListJobTemplatesRequest,
    ) -> MediaConvertResult<ListJobTemplatesResponse> {
        self.send(request).await
    }

    // =========================================================================
    // Queues
    // =========================================================================

    pub async fn create_queue(&self, request: &CreateQueueRequest) -> MediaConvertResult<CreateQueueResponse> {
        self.send(request).await
    }

    pub async fn get_queue(&self, request: &GetQueueRequest) -> MediaConvertResult<GetQueueResponse> {
        self.send(request).await
    }

    pub async fn list_queues(&self, request: &ListQueuesRequest) -> MediaConvertResult<ListQueuesResponse> {
        self.send(request).await
    }

    pub async fn update_queue(&self, request: &UpdateQueueRequest) -> MediaConvertResult<UpdateQueueResponse> {
        self.send(request).await
    }

    pub async fn delete_queue(&self, request: &DeleteQueueRequest) -> MediaConvertResult<DeleteQueueResponse> {
        self.send(request).await
    }

    // =========================================================================
    // Certificates and tags
    // =========================================================================

    pub async fn associate_certificate(
        &self,
        request: &AssociateCertificateRequest,
    ) -> MediaConvertResult<AssociateCertificateResponse> {
        self.send(request).await
    }

    pub async fn disassociate_certificate(
        &self,
        request: &DisassociateCertificateRequest,
    ) -> MediaConvertResult<DisassociateCertificateResponse> {
        self.send(request).await
    }

    pub async fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> MediaConvertResult<ListTagsForResourceResponse> {
        self.send(request).await
    }

    pub async fn tag_resource(&self, request: &TagResourceRequest) -> MediaConvertResult<TagResourceResponse> {
        self.send(request).await
    }

    pub async fn untag_resource(
        &self,
        request: &UntagResourceRequest,
    ) -> MediaConvertResult<UntagResourceResponse> {
        self.send(request).await
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    pub async fn describe_endpoints(
        &self,
        request: &DescribeEndpointsRequest,
    ) -> MediaConvertResult<DescribeEndpointsResponse> {
        self.send(request).await
    }

    /// Look up the account endpoint and return a client bound to it.
    pub async fn with_discovered_endpoint(&self) -> MediaConvertResult<Self> {
        let response = self.describe_endpoints(&DescribeEndpointsRequest::new()).await?;
        let url = response
            .endpoints
            .unwrap_or_default()
            .into_iter()
            .find_map(|e| e.url)
            .ok_or_else(|| MediaConvertError::config("DescribeEndpoints returned no endpoint"))?;

        info!(endpoint = %url, "Discovered MediaConvert endpoint");
        Self::new(self.config.clone().with_endpoint(url))
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn request_url(&self, request: &HttpRequest) -> MediaConvertResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))
            .map_err(|e| MediaConvertError::config(format!("Invalid endpoint {}: {}", self.base_url, e)))?;

        if !request.query.is_empty() {
            let query = request
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// One signed attempt. Signed per attempt so `x-amz-date` stays fresh.
    async fn dispatch<T: DeserializeOwned>(&self, request: &HttpRequest, url: &Url) -> MediaConvertResult<T> {
        let payload = request.body.as_deref().unwrap_or("");
        let signer = Signer::new(&self.config.credentials, &self.config.region, SERVICE);
        let headers = signer.sign(request.method.as_str(), url, payload.as_bytes(), Utc::now())?;

        let mut builder = self.http.request(to_reqwest_method(request.method), url.clone());
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        let text = response.text().await?;
        let body = if text.trim().is_empty() { "{}" } else { text.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    async fn execute_request<T, F>(&self, operation: &str, fut: F) -> MediaConvertResult<T>
    where
        F: std::future::Future<Output = MediaConvertResult<T>>,
    {
        let span = info_span!("mediaconvert_request", operation = %operation, endpoint = %self.base_url);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(500),
        };
        record_request(operation, status, latency_ms);

        result
    }

    async fn handle_error_response(response: reqwest::Response) -> MediaConvertError {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();

        MediaConvertError::from_http_status(status, &body)
            .with_retry_after(parse_retry_after(retry_after.as_deref()))
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn client(endpoint: &str) -> MediaConvertClient {
        let config = MediaConvertConfig::new("us-west-2", Credentials::new("AKIDEXAMPLE", "secret"))
            .with_endpoint(endpoint);
        MediaConvertClient::new(config).unwrap()
    }

    #[test]
    fn test_request_url_keeps_encoded_path() {
        let client = client("https://abcd.mediaconvert.us-west-2.amazonaws.com/");
        let http = ListTagsForResourceRequest::new()
            .with_arn("arn:aws:mediaconvert:us-west-2:123456789012:queues/Default")
            .marshal()
            .unwrap();
        let url = client.request_url(&http).unwrap();
        assert_eq!(
            url.as_str(),
            "https://abcd.mediaconvert.us-west-2.amazonaws.com/2017-08-29/tags/\
             arn%3Aaws%3Amediaconvert%3Aus-west-2%3A123456789012%3Aqueues%2FDefault"
        );
    }

    #[test]
    fn test_request_url_encodes_query() {
        let client = client("http://127.0.0.1:9000");
        let http = ListJobsRequest::new()
            .with_max_results(5)
            .with_next_token("a+b/c")
            .with_status(JobStatus::Error)
            .marshal()
            .unwrap();
        let url = client.request_url(&http).unwrap();
        assert_eq!(url.query(), Some("maxResults=5&nextToken=a%2Bb%2Fc&status=ERROR"));
    }

    #[test]
    fn test_validation_runs_before_network() {
        let client = client("http://127.0.0.1:1");
        let request = CreateJobRequest::new().with_priority(99);
        let err = tokio_test::block_on(client.create_job(&request)).unwrap_err();
        assert!(matches!(err, MediaConvertError::Validation(_)));
    }

    #[test]
    fn test_missing_path_param_fails_before_network() {
        let client = client("http://127.0.0.1:1");
        let err = tokio_test::block_on(client.get_job(&GetJobRequest::new())).unwrap_err();
        assert!(matches!(err, MediaConvertError::Marshal(_)));
    }

    #[test]
    fn test_default_endpoint_is_regional() {
        let config = MediaConvertConfig::new("eu-central-1", Credentials::new("AKIDEXAMPLE", "secret"));
        let client = MediaConvertClient::new(config).unwrap();
        assert_eq!(client.base_url(), "https://mediaconvert.eu-central-1.amazonaws.com");
    }
}
