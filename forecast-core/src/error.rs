use thiserror::Error;

/// Failure reported by the provider codec.
///
/// Every decode either yields a complete domain value or one of these; a
/// partially filled record never escapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with status `404` for the requested location.
    #[error("The weather provider could not find the requested location")]
    LocationNotFound,

    /// The provider answered with a status other than `200` or `404`.
    #[error("The weather provider is unavailable (status code {code})")]
    ProviderUnavailable { code: i64 },

    /// A required field is missing or has the wrong type.
    #[error("Malformed provider payload: {0}")]
    MalformedPayload(String),
}

impl ProviderError {
    pub(crate) fn malformed(what: impl std::fmt::Display) -> Self {
        ProviderError::MalformedPayload(what.to_string())
    }
}
