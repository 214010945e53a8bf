use super::ApiCall;
use crate::client::{CallBody, MethodParams, ParamsEncoding, RequestParams};

impl<'a> ApiCall<'a> {
    /// Attaches the ambient call settings, layered over those already set on the call.
    #[must_use]
    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = self.params.merge(params);
        self
    }

    /// Adds a header override, it wins over every default header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params = self.params.with_header(name, value);
        self
    }

    /// Sets the operation payload.
    ///
    /// The payload is validated before anything is sent, then encoded according to
    /// the call [`ParamsEncoding`].
    #[must_use]
    pub fn with_payload(mut self, payload: &'a dyn MethodParams) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Overrides the encoding derived from the HTTP method.
    #[must_use]
    pub fn with_encoding(mut self, encoding: ParamsEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Supplies a pre-encoded body, sent verbatim with its own content type.
    ///
    /// A `multipart/form-data` body switches the encoding to [`ParamsEncoding::Multipart`]:
    /// the payload is not serialized. Call [`with_encoding`](Self::with_encoding) afterwards
    /// to send the payload in the query string alongside the body.
    #[must_use]
    pub fn with_body(mut self, body: CallBody) -> Self {
        if body.is_multipart() {
            self.encoding = ParamsEncoding::Multipart;
        }
        self.body = Some(body);
        self
    }

    /// Suppresses the automatic bearer authentication for this call.
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.params = self.params.without_auth();
        self
    }
}
