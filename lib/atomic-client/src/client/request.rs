use std::time::Duration;

use bytes::Bytes;
use headers::{ContentType, HeaderMapExt};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::Value;
use url::Url;

use super::call::ApiCall;
use super::parameters::PathResolved;
use super::{AtomicError, Authentication, CallQuery, RequestParams, SecureString};

/// Header carrying the tenant scope.
pub const ATOMIC_INSTANCE: HeaderName = HeaderName::from_static("atomic-instance");

/// Where the operation payload goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsEncoding {
    /// Flattened into the query string.
    Query,
    /// Serialized as a JSON body.
    Json,
    /// The body is provided pre-encoded, the payload is not serialized.
    Multipart,
}

impl ParamsEncoding {
    /// Default encoding of a method: `GET`, `DELETE` and `HEAD` use the query string,
    /// everything else a JSON body.
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::GET || *method == Method::DELETE || *method == Method::HEAD {
            Self::Query
        } else {
            Self::Json
        }
    }
}

/// Fully specified outbound request: method, path with query, headers and body.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    timeout: Option<Duration>,
}

impl RequestDescriptor {
    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path, with the query string when one was encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Outbound headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The `Content-Type` header value, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// The encoded body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Deadline of the exchange.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(super) fn into_request(self, base_url: &Url) -> Result<reqwest::Request, AtomicError> {
        let url = Url::parse(&format!(
            "{}{}",
            base_url.as_str().trim_end_matches('/'),
            self.path
        ))?;

        let mut request = reqwest::Request::new(self.method, url);
        *request.headers_mut() = self.headers;
        *request.timeout_mut() = self.timeout;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        Ok(request)
    }
}

impl ApiCall<'_> {
    /// Computes the outbound request without sending it.
    ///
    /// Validation and credential resolution are not performed here; `bearer` is the
    /// already resolved token, if any.
    ///
    /// # Errors
    ///
    /// Fails if an identifier is missing from the path, if the payload cannot be serialized,
    /// or if a header is invalid.
    pub fn describe(&self, bearer: Option<&SecureString>) -> Result<RequestDescriptor, AtomicError> {
        let PathResolved { mut path } = PathResolved::try_from(self.path.clone())?;
        let mut headers = HeaderMap::new();
        self.default_headers.apply_to(&mut headers)?;

        let mut body = None;
        match self.encoding {
            ParamsEncoding::Query => {
                let query = self.query()?;
                if !query.is_empty() {
                    path.push('?');
                    path.push_str(&query.encode()?);
                }
            }
            ParamsEncoding::Json => {
                if self.body.is_none()
                    && let Some(payload) = self.payload
                {
                    let mut json = payload.to_json()?;
                    merge_directives(&mut json, &self.params);
                    body = Some(Bytes::from(serde_json::to_vec(&json)?));
                    headers.typed_insert(ContentType::json());
                }
            }
            ParamsEncoding::Multipart => {}
        }

        if let Some(provided) = &self.body {
            body = Some(provided.data().clone());
            headers.typed_insert(provided.content_type());
        }

        if !self.params.is_auth_suppressed()
            && let Some(token) = bearer
        {
            headers.insert(AUTHORIZATION, Authentication::bearer_header(token)?);
        }

        if let Some(instance) = self.params.instance() {
            headers.insert(ATOMIC_INSTANCE, HeaderValue::from_str(instance)?);
        }

        self.params.headers().apply_to(&mut headers)?;

        Ok(RequestDescriptor {
            method: self.method.clone(),
            path,
            headers,
            body,
            timeout: self.params.timeout(),
        })
    }

    fn query(&self) -> Result<CallQuery, AtomicError> {
        let mut query = match self.payload {
            Some(payload) => payload.to_query()?,
            None => CallQuery::new(),
        };
        for expand in self.params.expand() {
            query.push("expand", expand.as_str());
        }
        for field in self.params.fields() {
            query.push("fields", field.as_str());
        }
        Ok(query)
    }
}

/// Ambient `expand` / `fields` directives win over payload fields of the same name.
fn merge_directives(json: &mut Value, params: &RequestParams) {
    let Value::Object(map) = json else {
        return;
    };
    if !params.expand().is_empty() {
        map.insert("expand".to_string(), Value::from(params.expand().to_vec()));
    }
    if !params.fields().is_empty() {
        map.insert("fields".to_string(), Value::from(params.fields().to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Serialize;
    use serde_json::json;

    use super::*;
    use crate::client::{AtomicClient, CallBody, CallPath, Validate};

    #[derive(Debug, Serialize)]
    struct WidgetRef {
        #[serde(skip_serializing)]
        id: String,
    }

    impl Validate for WidgetRef {}

    #[derive(Debug, Serialize)]
    struct NewWidget {
        name: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
    }

    impl Validate for NewWidget {}

    fn client() -> AtomicClient {
        AtomicClient::builder()
            .with_host("http://localhost:8080")
            .with_bearer_token("api-key")
            .build()
            .expect("valid client")
    }

    fn token() -> SecureString {
        SecureString::from("api-key")
    }

    fn header<'a>(descriptor: &'a RequestDescriptor, name: &str) -> Option<&'a str> {
        descriptor
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[test]
    fn should_build_get_without_body() {
        let payload = WidgetRef {
            id: "abc".to_string(),
        };
        let descriptor = client()
            .get(CallPath::from("/api/1.0.0/widgets/{id}").add_param("id", &payload.id))
            .with_payload(&payload)
            .describe(Some(&token()))
            .expect("valid request");

        assert_eq!(descriptor.method(), Method::GET);
        assert_eq!(descriptor.path(), "/api/1.0.0/widgets/abc");
        assert!(descriptor.body().is_none());
        assert_eq!(descriptor.content_type(), None);
    }

    #[test]
    fn should_build_post_with_json_body() {
        let payload = NewWidget {
            name: "x".to_string(),
            tags: vec![],
        };
        let descriptor = client()
            .post("/api/1.0.0/widgets")
            .with_payload(&payload)
            .describe(Some(&token()))
            .expect("valid request");

        assert_eq!(descriptor.method(), Method::POST);
        assert_eq!(descriptor.path(), "/api/1.0.0/widgets");
        assert_eq!(descriptor.content_type(), Some("application/json"));
        assert_eq!(
            descriptor.body().map(Bytes::as_ref),
            Some(br#"{"name":"x"}"#.as_slice())
        );
    }

    #[rstest]
    #[case::get(Method::GET, ParamsEncoding::Query)]
    #[case::delete(Method::DELETE, ParamsEncoding::Query)]
    #[case::head(Method::HEAD, ParamsEncoding::Query)]
    #[case::post(Method::POST, ParamsEncoding::Json)]
    #[case::put(Method::PUT, ParamsEncoding::Json)]
    #[case::patch(Method::PATCH, ParamsEncoding::Json)]
    fn should_derive_encoding_from_method(#[case] method: Method, #[case] expected: ParamsEncoding) {
        assert_eq!(ParamsEncoding::for_method(&method), expected);
    }

    #[test]
    fn should_put_payload_in_query_for_delete() {
        let payload = NewWidget {
            name: "x y".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let descriptor = client()
            .delete("/api/1.0.0/widgets")
            .with_payload(&payload)
            .describe(None)
            .expect("valid request");

        insta::assert_snapshot!(descriptor.path(), @"/api/1.0.0/widgets?name=x+y&tags=a&tags=b");
        assert!(descriptor.body().is_none());
    }

    #[test]
    fn should_not_append_empty_query() {
        let payload = NewWidget {
            name: String::new(),
            tags: vec![],
        };
        let descriptor = client()
            .get("/api/1.0.0/widgets")
            .with_payload(&payload)
            .describe(None)
            .expect("valid request");

        assert_eq!(descriptor.path(), "/api/1.0.0/widgets");
    }

    #[test]
    fn should_append_directives_to_query() {
        let descriptor = client()
            .get("/api/1.0.0/widgets")
            .with_params(
                RequestParams::new()
                    .with_expand("owner")
                    .with_fields(["id", "name"]),
            )
            .describe(None)
            .expect("valid request");

        insta::assert_snapshot!(descriptor.path(), @"/api/1.0.0/widgets?expand=owner&fields=id&fields=name");
    }

    #[test]
    fn should_merge_directives_into_json_body() {
        let payload = NewWidget {
            name: "x".to_string(),
            tags: vec![],
        };
        let descriptor = client()
            .post("/api/1.0.0/widgets")
            .with_params(RequestParams::new().with_expand("owner"))
            .with_payload(&payload)
            .describe(None)
            .expect("valid request");

        let body: Value = serde_json::from_slice(descriptor.body().expect("json body"))
            .expect("valid json");
        assert_eq!(body, json!({ "name": "x", "expand": ["owner"] }));
    }

    #[test]
    fn should_inject_bearer_authorization() {
        let descriptor = client()
            .get("/api/1.0.0/widgets")
            .describe(Some(&token()))
            .expect("valid request");

        assert_eq!(header(&descriptor, "authorization"), Some("Bearer api-key"));
    }

    #[test]
    fn should_not_inject_authorization_when_suppressed() {
        let descriptor = client()
            .get("/api/1.0.0/widgets")
            .without_auth()
            .describe(Some(&token()))
            .expect("valid request");

        assert!(descriptor.headers().get(AUTHORIZATION).is_none());
    }

    #[rstest]
    #[case::padded("  tenant-1 \t", Some("tenant-1"))]
    #[case::blank("   ", None)]
    fn should_send_trimmed_instance(#[case] instance: &str, #[case] expected: Option<&str>) {
        let descriptor = client()
            .get("/api/1.0.0/widgets")
            .with_params(RequestParams::new().with_instance(instance))
            .describe(None)
            .expect("valid request");

        assert_eq!(header(&descriptor, "atomic-instance"), expected);
    }

    #[test]
    fn should_let_ambient_headers_win() {
        let payload = NewWidget {
            name: "x".to_string(),
            tags: vec![],
        };
        let descriptor = client()
            .post("/api/1.0.0/widgets")
            .with_payload(&payload)
            .with_params(
                RequestParams::new()
                    .with_instance("tenant-1")
                    .with_header("Content-Type", "application/vnd.atomic+json")
                    .with_header("Atomic-Instance", "tenant-2")
                    .with_header("Authorization", "Bearer other"),
            )
            .describe(Some(&token()))
            .expect("valid request");

        assert_eq!(descriptor.content_type(), Some("application/vnd.atomic+json"));
        assert_eq!(header(&descriptor, "atomic-instance"), Some("tenant-2"));
        assert_eq!(header(&descriptor, "authorization"), Some("Bearer other"));
    }

    #[test]
    fn should_send_multipart_body_verbatim() {
        let payload = NewWidget {
            name: "x".to_string(),
            tags: vec![],
        };
        let body = CallBody::multipart_file("w.csv", "text/csv", b"a,b\n").expect("valid body");
        let data = body.data().clone();

        let descriptor = client()
            .post("/api/1.0.0/widgets/import")
            .with_payload(&payload)
            .with_body(body)
            .describe(Some(&token()))
            .expect("valid request");

        assert!(
            descriptor
                .content_type()
                .is_some_and(|ct| ct.starts_with("multipart/form-data; boundary="))
        );
        assert_eq!(descriptor.body(), Some(&data));
        assert_eq!(descriptor.path(), "/api/1.0.0/widgets/import");
        assert_eq!(header(&descriptor, "authorization"), Some("Bearer api-key"));
    }

    #[test]
    fn should_send_payload_in_query_with_multipart_body() {
        let payload = NewWidget {
            name: "x".to_string(),
            tags: vec![],
        };
        let body = CallBody::multipart_file("w.png", "image/png", b"PNG").expect("valid body");

        let descriptor = client()
            .post("/api/1.0.0/assets")
            .with_payload(&payload)
            .with_body(body)
            .with_encoding(ParamsEncoding::Query)
            .describe(None)
            .expect("valid request");

        assert_eq!(descriptor.path(), "/api/1.0.0/assets?name=x");
        assert!(
            descriptor
                .content_type()
                .is_some_and(|ct| ct.starts_with("multipart/form-data"))
        );
    }

    #[test]
    fn should_fail_on_missing_identifier() {
        let result = client()
            .get("/api/1.0.0/widgets/{id}")
            .describe(None);

        assert!(matches!(result, Err(AtomicError::PathUnresolved { .. })));
    }

    #[test]
    fn should_resolve_url_against_host_prefix() {
        let descriptor = client()
            .get("/api/1.0.0/widgets")
            .with_params(RequestParams::new().with_expand("owner"))
            .describe(None)
            .expect("valid request");

        let request = descriptor
            .into_request(&Url::parse("https://example.com/atomic/").expect("valid url"))
            .expect("valid url");

        assert_eq!(
            request.url().as_str(),
            "https://example.com/atomic/api/1.0.0/widgets?expand=owner"
        );
    }
}
