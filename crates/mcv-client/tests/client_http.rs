//! HTTP-level client tests against a local mock server.

use std::time::Duration;

use mcv_client::{Credentials, MediaConvertClient, MediaConvertConfig, MediaConvertError, RetryConfig};
use mcv_models::operations::{
    CancelJobRequest, CreateJobRequest, DescribeEndpointsRequest, GetJobRequest, ListJobsRequest,
    ListTagsForResourceRequest,
};
use mcv_models::JobStatus;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> MediaConvertClient {
    let mut config = MediaConvertConfig::new(
        "us-west-2",
        Credentials::new("AKIDEXAMPLE", "secret").with_session_token("session"),
    )
    .with_endpoint(server.uri());
    config.timeout = Duration::from_secs(5);
    config.retry = RetryConfig {
        max_retries: 2,
        base_delay_ms: 1,
        max_delay_ms: 5,
    };
    MediaConvertClient::new(config).unwrap()
}

fn job_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "arn": format!("arn:aws:mediaconvert:us-west-2:123456789012:jobs/{}", id),
        "role": "arn:aws:iam::123456789012:role/MediaConvert",
        "status": status,
        "createdAt": 1580000000
    })
}

#[tokio::test]
async fn test_get_job_is_signed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017-08-29/jobs/1580000000000-abc123"))
        .and(header_exists("authorization"))
        .and(header_exists("x-amz-date"))
        .and(header_exists("x-amz-content-sha256"))
        .and(header("x-amz-security-token", "session"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "job": job_json("1580000000000-abc123", "PROGRESSING") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .get_job(&GetJobRequest::new().with_id("1580000000000-abc123"))
        .await
        .unwrap();

    let job = response.job.unwrap();
    assert_eq!(job.id.as_deref(), Some("1580000000000-abc123"));
    assert_eq!(job.status, Some(JobStatus::Progressing));
    assert_eq!(job.created_at.map(|t| t.timestamp()), Some(1_580_000_000));
}

#[tokio::test]
async fn test_create_job_sends_body_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2017-08-29/jobs"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "role": "arn:aws:iam::123456789012:role/MediaConvert",
            "priority": 5
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "job": job_json("j1", "SUBMITTED") })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = CreateJobRequest::new()
        .with_role("arn:aws:iam::123456789012:role/MediaConvert")
        .with_priority(5);
    let response = client.create_job(&request).await.unwrap();
    assert_eq!(response.job.and_then(|j| j.status), Some(JobStatus::Submitted));

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(body["clientRequestToken"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_list_jobs_query_and_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017-08-29/jobs"))
        .and(query_param("status", "COMPLETE"))
        .and(query_param("nextToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [job_json("j3", "COMPLETE")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2017-08-29/jobs"))
        .and(query_param("status", "COMPLETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [job_json("j1", "COMPLETE"), job_json("j2", "COMPLETE")],
            "nextToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let jobs = client.list_all_jobs(Some(JobStatus::Complete)).await.unwrap();
    let ids: Vec<_> = jobs.iter().filter_map(|j| j.id.as_deref()).collect();
    assert_eq!(ids, vec!["j1", "j2", "j3"]);
}

#[tokio::test]
async fn test_empty_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/2017-08-29/jobs/j1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.cancel_job(&CancelJobRequest::new().with_id("j1")).await;
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_arn_path_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/2017-08-29/tags/arn%3Aaws%3Amediaconvert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resourceTags": { "arn": "arn:aws:mediaconvert:us-west-2:1:queues/Default", "tags": { "env": "prod" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .list_tags_for_resource(
            &ListTagsForResourceRequest::new().with_arn("arn:aws:mediaconvert:us-west-2:1:queues/Default"),
        )
        .await
        .unwrap();
    let tags = response.resource_tags.and_then(|r| r.tags).unwrap();
    assert_eq!(tags.get("env").map(String::as_str), Some("prod"));
}

#[tokio::test]
async fn test_retries_on_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2017-08-29/endpoints"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "message": "try again" })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/2017-08-29/endpoints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "endpoints": [{ "url": "https://abcd.mediaconvert.us-west-2.amazonaws.com" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .describe_endpoints(&DescribeEndpointsRequest::new())
        .await
        .unwrap();
    assert_eq!(response.endpoints.map(|e| e.len()), Some(1));
}

#[tokio::test]
async fn test_throttling_exhausts_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017-08-29/jobs"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_json(json!({ "message": "Too many requests" })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.list_jobs(&ListJobsRequest::new()).await.unwrap_err();
    assert!(matches!(
        err,
        MediaConvertError::TooManyRequests { ref message, retry_after_ms: Some(0) } if message == "Too many requests"
    ));
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017-08-29/jobs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Job not found" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .get_job(&GetJobRequest::new().with_id("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, MediaConvertError::NotFound(ref m) if m == "Job not found"));
}

#[tokio::test]
async fn test_discovers_account_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2017-08-29/endpoints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "endpoints": [{ "url": format!("{}/account", server.uri()) }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let discovered = client.with_discovered_endpoint().await.unwrap();
    assert_eq!(discovered.base_url(), format!("{}/account", server.uri()));
}
