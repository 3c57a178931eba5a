use std::collections::BTreeMap;

use super::{json_body, path_param, require, HttpMethod, HttpRequest, Operation};
use crate::error::MarshalResult;

record! {
    /// The tags attached to one resource.
    pub struct ResourceTags {
        arn: String => with_arn,
        tags: BTreeMap<String, String> => with_tags,
    }
}

record! {
    pub struct ListTagsForResourceRequest {
        arn: String => with_arn,
    }
}

record! {
    pub struct ListTagsForResourceResponse {
        resource_tags: ResourceTags => with_resource_tags,
    }
}

impl Operation for ListTagsForResourceRequest {
    const NAME: &'static str = "ListTagsForResource";
    type Output = ListTagsForResourceResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let arn = path_param("arn", &self.arn)?;
        Ok(HttpRequest::new(HttpMethod::Get, format!("tags/{}", arn)))
    }
}

record! {
    /// Add or overwrite tags on a queue, preset or job template.
    pub struct TagResourceRequest {
        arn: String => with_arn,
        tags: BTreeMap<String, String> => with_tags,
    }
}

record! {
    pub struct TagResourceResponse {}
}

impl Operation for TagResourceRequest {
    const NAME: &'static str = "TagResource";
    type Output = TagResourceResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        require("arn", &self.arn)?;
        Ok(HttpRequest::new(HttpMethod::Post, "tags").body(json_body(self, &[])?))
    }
}

record! {
    pub struct UntagResourceRequest {
        arn: String => with_arn,
        tag_keys: Vec<String> => with_tag_keys,
    }
}

record! {
    pub struct UntagResourceResponse {}
}

impl Operation for UntagResourceRequest {
    const NAME: &'static str = "UntagResource";
    type Output = UntagResourceResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let arn = path_param("arn", &self.arn)?;
        Ok(HttpRequest::new(HttpMethod::Put, format!("tags/{}", arn))
            .body(json_body(self, &["arn"])?))
    }
}
