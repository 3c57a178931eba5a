use super::{json_body, path_param, require, HttpMethod, HttpRequest, Operation};
use crate::error::MarshalResult;

record! {
    /// Associate an ACM certificate with the account for use by SPEKE key
    /// providers.
    pub struct AssociateCertificateRequest {
        arn: String => with_arn,
    }
}

record! {
    pub struct AssociateCertificateResponse {}
}

impl Operation for AssociateCertificateRequest {
    const NAME: &'static str = "AssociateCertificate";
    type Output = AssociateCertificateResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        require("arn", &self.arn)?;
        Ok(HttpRequest::new(HttpMethod::Post, "certificates").body(json_body(self, &[])?))
    }
}

record! {
    pub struct DisassociateCertificateRequest {
        arn: String => with_arn,
    }
}

record! {
    pub struct DisassociateCertificateResponse {}
}

impl Operation for DisassociateCertificateRequest {
    const NAME: &'static str = "DisassociateCertificate";
    type Output = DisassociateCertificateResponse;

    fn marshal(&self) -> MarshalResult<HttpRequest> {
        let arn = path_param("arn", &self.arn)?;
        Ok(HttpRequest::new(HttpMethod::Delete, format!("certificates/{}", arn)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERT_ARN: &str = "arn:aws:acm:us-east-1:123456789012:certificate/abcd-1234";

    #[test]
    fn test_associate_sends_arn_in_body() {
        let http = AssociateCertificateRequest::new().with_arn(CERT_ARN).marshal().unwrap();
        assert_eq!(http.method, HttpMethod::Post);
        assert_eq!(http.path, "/2017-08-29/certificates");
        assert_eq!(
            http.body.as_deref(),
            Some(r#"{"arn":"arn:aws:acm:us-east-1:123456789012:certificate/abcd-1234"}"#)
        );
    }

    #[test]
    fn test_disassociate_encodes_arn_in_path() {
        let http = DisassociateCertificateRequest::new()
            .with_arn(CERT_ARN)
            .marshal()
            .unwrap();
        assert_eq!(http.method, HttpMethod::Delete);
        assert_eq!(
            http.path,
            "/2017-08-29/certificates/arn%3Aaws%3Aacm%3Aus-east-1%3A123456789012%3Acertificate%2Fabcd-1234"
        );
        assert!(http.body.is_none());
    }

    #[test]
    fn test_arn_required() {
        assert!(AssociateCertificateRequest::new().marshal().is_err());
        assert!(DisassociateCertificateRequest::new().marshal().is_err());
    }
}
