//! Request and response shapes of the REST API, and how each request maps
//! onto an HTTP call.
//!
//! Every request type implements [`Operation`]. Marshalling never touches
//! the network: it produces an [`HttpRequest`] describing the method, the
//! path under the API version prefix, the query string and the JSON body.
//! Signing and dispatch live in the client crate.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::{MarshalError, MarshalResult};

mod certificates;
mod endpoints;
mod job_templates;
mod jobs;
mod queues;
mod tags;

pub use certificates::*;
pub use endpoints::*;
pub use job_templates::*;
pub use jobs::*;
pub use queues::*;
pub use tags::*;

/// Path prefix shared by every operation.
pub const API_VERSION_PREFIX: &str = "/2017-08-29";

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marshalled, unsigned request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute path including [`API_VERSION_PREFIX`], already percent-encoded.
    pub path: String,
    /// Query parameters in the order they were added, not yet encoded.
    pub query: Vec<(String, String)>,
    /// JSON body, if the operation sends one.
    pub body: Option<String>,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: impl AsRef<str>) -> Self {
        Self {
            method,
            path: format!("{}/{}", API_VERSION_PREFIX, path.as_ref()),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a query parameter when the value is present.
    fn query_param<T: fmt::Display>(mut self, name: &str, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// A request that can be sent to the service.
pub trait Operation: Validate + Serialize {
    /// Operation name, used for logging and metrics labels.
    const NAME: &'static str;

    /// Response shape.
    type Output: DeserializeOwned;

    /// Build the HTTP request for this operation.
    fn marshal(&self) -> MarshalResult<HttpRequest>;
}

/// Percent-encode a required path parameter.
fn path_param(name: &'static str, value: &Option<String>) -> MarshalResult<String> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(urlencoding::encode(v).into_owned()),
        _ => Err(MarshalError::missing(name)),
    }
}

/// Fail when a required body field is absent or empty.
fn require(name: &'static str, value: &Option<String>) -> MarshalResult<()> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(MarshalError::missing(name)),
    }
}

/// Serialize a request as the JSON body, leaving out fields that travel in
/// the path or query string.
fn json_body<T: Serialize>(value: &T, exclude: &[&str]) -> MarshalResult<String> {
    let mut json = serde_json::to_value(value)?;
    if let Some(object) = json.as_object_mut() {
        for key in exclude {
            object.remove(*key);
        }
    }
    Ok(serde_json::to_string(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_param_encodes_arns() {
        let arn = Some("arn:aws:mediaconvert:us-west-2:123456789012:queues/Default".to_string());
        assert_eq!(
            path_param("arn", &arn).unwrap(),
            "arn%3Aaws%3Amediaconvert%3Aus-west-2%3A123456789012%3Aqueues%2FDefault"
        );
    }

    #[test]
    fn test_path_param_required() {
        assert!(matches!(
            path_param("id", &None),
            Err(MarshalError::MissingField("id"))
        ));
        assert!(matches!(
            path_param("id", &Some(String::new())),
            Err(MarshalError::MissingField("id"))
        ));
    }

    #[test]
    fn test_query_params_skip_absent_values() {
        let request = HttpRequest::new(HttpMethod::Get, "jobs")
            .query_param("maxResults", &Some(10))
            .query_param::<String>("nextToken", &None);
        assert_eq!(request.path, "/2017-08-29/jobs");
        assert_eq!(request.query, vec![("maxResults".to_string(), "10".to_string())]);
    }

    #[test]
    fn test_json_body_excludes_fields() {
        let value = serde_json::json!({"name": "q", "description": "d"});
        let body = json_body(&value, &["name"]).unwrap();
        assert_eq!(body, r#"{"description":"d"}"#);
    }
}
