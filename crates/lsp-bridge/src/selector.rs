//! Document selectors.
//!
//! A selector names the documents a feature registration applies to, by
//! language id, uri scheme, and/or glob pattern over the uri path.

use globset::GlobBuilder;
use url::Url;

/// One filter clause. Absent fields match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentFilter {
    /// Language id to match, e.g. `"rust"`.
    pub language: Option<String>,
    /// Uri scheme to match, e.g. `"file"`.
    pub scheme: Option<String>,
    /// Glob pattern matched against the uri path.
    pub pattern: Option<String>,
}

impl DocumentFilter {
    /// A filter matching one language id.
    pub fn language(language: impl Into<String>) -> Self {
        Self { language: Some(language.into()), ..Default::default() }
    }

    fn matches(&self, language: &str, uri: &Url) -> bool {
        if let Some(wanted) = &self.language
            && wanted != "*"
            && wanted != language
        {
            return false;
        }
        if let Some(scheme) = &self.scheme
            && scheme != uri.scheme()
        {
            return false;
        }
        if let Some(pattern) = &self.pattern {
            let glob = match GlobBuilder::new(pattern).build() {
                Ok(glob) => glob,
                Err(err) => {
                    tracing::warn!(pattern = %pattern, error = %err, "invalid document filter pattern");
                    return false;
                }
            };
            if !glob.compile_matcher().is_match(uri.path()) {
                return false;
            }
        }
        true
    }

    /// The language id this filter registers for; `"*"` when the filter
    /// does not constrain the language.
    fn registration_language(&self) -> &str {
        self.language.as_deref().unwrap_or("*")
    }
}

/// The documents a registration applies to: a single language id, one
/// filter, or any of several filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSelector {
    /// A bare language id.
    Language(String),
    /// One filter clause.
    Filter(DocumentFilter),
    /// Any of several filter clauses.
    Many(Vec<DocumentFilter>),
}

impl DocumentSelector {
    /// Whether a document with `language` and `uri` matches.
    pub fn matches(&self, language: &str, uri: &Url) -> bool {
        match self {
            DocumentSelector::Language(wanted) => wanted == "*" || wanted == language,
            DocumentSelector::Filter(filter) => filter.matches(language, uri),
            DocumentSelector::Many(filters) => {
                filters.iter().any(|filter| filter.matches(language, uri))
            }
        }
    }

    /// The distinct language ids to register under. A clause that does not
    /// constrain the language contributes the `"*"` wildcard.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = match self {
            DocumentSelector::Language(language) => vec![language.clone()],
            DocumentSelector::Filter(filter) => vec![filter.registration_language().to_string()],
            DocumentSelector::Many(filters) => filters
                .iter()
                .map(|filter| filter.registration_language().to_string())
                .collect(),
        };
        languages.sort();
        languages.dedup();
        languages
    }
}

impl From<&str> for DocumentSelector {
    fn from(language: &str) -> Self {
        DocumentSelector::Language(language.to_string())
    }
}
