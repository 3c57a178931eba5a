use super::{json_body, HttpMethod, HttpRequest, Operation};
use crate::error::MarshalResult;

string_enum! {
    /// `DEFAULT` creates the account endpoint if it does not exist yet.
    /// `GET_ONLY` only returns an existing one.
    pub enum DescribeEndpointsMode {
        Default => "DEFAULT",
        GetOnly => "GET_ONLY",
    }
}

record! {
    /// An account-specific API endpoint.
    pub struct Endpoint {
        url: String => with_url,
    }
}

record! {
    /// Discover the account-specific endpoint. Sent to the regional endpoint.
    pub struct DescribeEndpointsRequest {
        max_results: i32 => with_max_results,
        mode: DescribeEndpointsMode => with_mode,
        next_token: String => with_next_token,
    }
}

record! {
    pub struct DescribeEndpointsResponse {
        endpoints: Vec<Endpoint> => with_endpoints,
        next_token: String => with_next_token,
    }
}

impl Operation for DescribeEndpointsRequest {
    const NAME: &'static str = "DescribeEndpoints";
    type Output = DescribeEndpointsResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        Ok(HttpRequest::new(HttpMethod::Post, "endpoints").body(json_body(self, &[])?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_endpoints_body() {
        let http = DescribeEndpointsRequest::new()
            .with_mode(DescribeEndpointsMode::GetOnly)
            .marshal()
            .unwrap();
        assert_eq!(http.method, HttpMethod::Post);
        assert_eq!(http.path, "/2017-08-29/endpoints");
        assert_eq!(http.body.as_deref(), Some(r#"{"mode":"GET_ONLY"}"#));
    }

    #[test]
    fn test_empty_request_sends_empty_object() {
        let http = DescribeEndpointsRequest::new().marshal().unwrap();
        assert_eq!(http.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_response_fixture() {
        let response: DescribeEndpointsResponse = serde_json::from_str(
            r#"{"endpoints": [{"url": "https://abcd1234.mediaconvert.us-west-2.amazonaws.com"}]}"#,
        )
        .unwrap();
        let url = response
            .endpoints
            .and_then(|e| e.into_iter().next())
            .and_then(|e| e.url);
        assert_eq!(
            url.as_deref(),
            Some("https://abcd1234.mediaconvert.us-west-2.amazonaws.com")
        );
    }
}
