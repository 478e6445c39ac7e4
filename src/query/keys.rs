use std::fmt;

use crate::constants::SESSION_SCOPE_TOKEN;
use crate::params::SearchParams;

/// Ordered token sequence identifying a cached/fetchable resource query.
///
/// The canonical representation is structural: bare string keys are
/// normalized into a one-element sequence at construction, so downstream
/// code never branches on shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Key for a filtered listing of `resource`.
    ///
    /// Tokens are rendered deterministically (fixed pagination order, filters
    /// sorted by name, values sorted within a filter), so the same logical
    /// query always produces the same key regardless of call site, and
    /// different resources never collide.
    pub fn for_resource(resource: &str, params: &SearchParams) -> Self {
        let mut tokens = vec![resource.to_string()];
        tokens.push(format!("limit={}", params.limit));
        tokens.push(format!("offset={}", params.offset));
        if let Some(query) = &params.query {
            tokens.push(format!("query={}", query));
        }
        for (name, values) in &params.filters {
            let mut keys: Vec<&str> = values.iter().map(String::as_str).collect();
            keys.sort_unstable();
            tokens.push(format!("{}={}", name, keys.join(",")));
        }
        Self(tokens)
    }

    /// Append the active locale as the final token.
    ///
    /// Not idempotent: every call appends, so compose exactly once per query
    /// definition. Locale-keyed entries drop out naturally when the locale
    /// changes.
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.0.push(locale.to_string());
        self
    }

    /// Ensure the key is session-scoped: the sequence begins with the
    /// reserved `user` token. Idempotent; applying it twice is a no-op
    /// after the first application.
    pub fn with_session_scope(mut self) -> Self {
        if !self.is_session_scoped() {
            self.0.insert(0, SESSION_SCOPE_TOKEN.to_string());
        }
        self
    }

    /// Whether the key addresses data tied to the current session
    pub fn is_session_scoped(&self) -> bool {
        self.0.first().map(String::as_str) == Some(SESSION_SCOPE_TOKEN)
    }

    /// The underlying token sequence
    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for QueryKey {
    fn from(token: &str) -> Self {
        Self(vec![token.to_string()])
    }
}

impl From<String> for QueryKey {
    fn from(token: String) -> Self {
        Self(vec![token])
    }
}

impl From<Vec<String>> for QueryKey {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl From<Vec<&str>> for QueryKey {
    fn from(tokens: Vec<&str>) -> Self {
        Self(tokens.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}
