use super::{path_param, HttpMethod, HttpRequest, Operation};
use crate::error::MarshalResult;
use crate::job::{JobTemplate, JobTemplateListBy, Order};

record! {
    pub struct GetJobTemplateRequest {
        name: String => with_name,
    }
}

record! {
    pub struct GetJobTemplateResponse {
        job_template: JobTemplate => with_job_template,
    }
}

impl Operation for GetJobTemplateRequest {
    const NAME: &'static str = "GetJobTemplate";
    type Output = GetJobTemplateResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let name = path_param("name", &self.name)?;
        Ok(HttpRequest::new(HttpMethod::Get, format!("jobTemplates/{}", name)))
    }
}

record! {
    pub struct ListJobTemplatesRequest {
        /// Only list templates in this category.
        category: String => with_category,
        list_by: JobTemplateListBy => with_list_by,
        #[validate(range(min = 1, max = 20))]
        max_results: i32 => with_max_results,
        next_token: String => with_next_token,
        order: Order => with_order,
    }
}

record! {
    pub struct ListJobTemplatesResponse {
        job_templates: Vec<JobTemplate> => with_job_templates,
        next_token: String => with_next_token,
    }
}

impl Operation for ListJobTemplatesRequest {
    const NAME: &'static str = "ListJobTemplates";
    type Output = ListJobTemplatesResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        Ok(HttpRequest::new(HttpMethod::Get, "jobTemplates")
            .query_param("category", &self.category)
            .query_param("listBy", &self.list_by)
            .query_param("maxResults", &self.max_results)
            .query_param("nextToken", &self.next_token)
            .query_param("order", &self.order))
    }
}
