//! Provider-fault error type.

/// An opaque error raised by a language feature provider.
///
/// The registry carries these from the provider to the editor unchanged;
/// translation never rewrites or wraps a provider fault.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ProviderError(Box<dyn std::error::Error + Send + Sync>);

impl ProviderError {
    /// Wraps an arbitrary error.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Builds an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

/// Result alias used by every provider and source method.
pub type ProviderResult<T> = Result<T, ProviderError>;
