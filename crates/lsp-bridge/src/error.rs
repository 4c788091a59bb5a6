//! Conversion failure taxonomy.

use lsp_bridge_model::ProviderError;

/// A failure while translating between editor and protocol shapes.
///
/// Provider faults are never wrapped in this type; they travel as
/// [`ProviderError`] untouched.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A uri on the wire (or in the editor) could not be parsed.
    #[error("invalid uri `{uri}`: {message}")]
    InvalidUri {
        /// The offending uri text.
        uri: String,
        /// The parser's message.
        message: String,
    },

    /// A code action carrying a workspace edit was sent toward a server
    /// that resolves actions lazily. Resolved edits only ever travel
    /// server-to-editor.
    #[error("code actions with a resolved edit cannot be converted back to the protocol")]
    EditOnResolvableAction,
}

impl From<ConvertError> for ProviderError {
    fn from(err: ConvertError) -> Self {
        ProviderError::new(err)
    }
}
