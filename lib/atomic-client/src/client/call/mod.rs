use http::Method;
use url::Url;

use super::{Authentication, CallBody, CallHeaders, CallPath, MethodParams, ParamsEncoding, RequestParams};

mod builder;
mod execution;

/// A single call to the Atomic API, built fluently and consumed by
/// [`fetch`](ApiCall::fetch) or [`send`](ApiCall::send).
///
/// The payload is borrowed for the duration of the call.
#[derive(derive_more::Debug)]
pub struct ApiCall<'a> {
    pub(super) client: reqwest::Client,
    pub(super) base_url: Url,
    pub(super) authentication: Option<Authentication>,
    pub(super) default_headers: CallHeaders,

    pub(super) method: Method,
    pub(super) path: CallPath,
    pub(super) params: RequestParams,
    pub(super) encoding: ParamsEncoding,

    #[debug(skip)]
    pub(super) payload: Option<&'a dyn MethodParams>,
    #[debug(ignore)]
    pub(super) body: Option<CallBody>,
}

impl ApiCall<'_> {
    pub(super) fn build(
        client: reqwest::Client,
        base_url: Url,
        authentication: Option<Authentication>,
        default_headers: CallHeaders,
        method: Method,
        path: CallPath,
    ) -> Self {
        let encoding = ParamsEncoding::for_method(&method);
        Self {
            client,
            base_url,
            authentication,
            default_headers,
            method,
            path,
            params: RequestParams::default(),
            encoding,
            payload: None,
            body: None,
        }
    }
}
