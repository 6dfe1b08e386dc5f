use url::Url;

use crate::error::Result;

/// Ordered query parameters for one upstream request
///
/// Optional values that are absent or blank are dropped instead of being
/// sent as empty parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a parameter that is always sent
    #[must_use]
    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a parameter only when it carries a non-blank value
    #[must_use]
    pub fn set_opt(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = non_blank(value) {
            self.pairs.push((key, value.to_owned()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Build a request URL from a base URL, an endpoint path and query parameters
///
/// `path` is appended verbatim to `base`; a trailing slash on `base` is
/// ignored so both `https://host/api` and `https://host/api/` work.
pub fn endpoint_url(base: &str, path: &str, params: &QueryParams) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{path}", base.trim_end_matches('/')))?;

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

/// Trimmed value, or `None` when absent or blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
