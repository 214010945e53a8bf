/// Why no access token could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum OAuth2Error {
    /// An authorization server URL cannot be parsed.
    #[display("Invalid OAuth2 endpoint '{url}': {source}")]
    InvalidEndpoint {
        /// The rejected URL.
        url: String,
        /// The parse failure.
        source: url::ParseError,
    },

    /// The HTTP client used for token requests cannot be created.
    #[display("Cannot create the token HTTP client: {reason}")]
    HttpClient {
        /// Description of the failure.
        reason: String,
    },

    /// The token endpoint was unreachable or refused the client.
    #[display("Token request to {token_url} failed: {reason}")]
    TokenRequest {
        /// The token endpoint.
        token_url: String,
        /// Description of the failure.
        reason: String,
    },

    /// A pre-acquired token expired or was dropped, and cannot be renewed.
    #[display("The pre-acquired token is no longer valid")]
    TokenUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_endpoint_of_failed_request() {
        let error = OAuth2Error::TokenRequest {
            token_url: "https://auth.passport.online/oauth/token".to_string(),
            reason: "invalid_client".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Token request to https://auth.passport.online/oauth/token failed: invalid_client"
        );
    }

    #[test]
    fn should_keep_parse_failure_as_source() {
        let source = url::Url::parse("not a url").expect_err("relative");
        let error = OAuth2Error::InvalidEndpoint {
            url: "not a url".to_string(),
            source,
        };

        assert!(std::error::Error::source(&error).is_some());
    }
}
