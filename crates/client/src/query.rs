//! Query-string construction for list endpoints.
//!
//! Only parameters that are actually set appear in the output; an unset
//! filter is omitted entirely rather than sent as an empty value. Pairs are
//! appended in call order, so identical filters always serialize to identical
//! query strings.

use std::fmt::Display;

use url::form_urlencoded::Serializer;

/// Builder for an optional query-string suffix.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    #[must_use]
    pub fn push(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    #[must_use]
    pub fn push_opt(self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Append an optional flag in the backend's 1/0 form.
    #[must_use]
    pub fn push_opt_flag(self, key: &'static str, value: Option<bool>) -> Self {
        self.push_opt(key, value.map(|flag| i32::from(flag)))
    }

    /// Render as `?k=v&...`, URL-encoded, or an empty string with no pairs.
    #[must_use]
    pub fn finish(self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut serializer = Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        format!("?{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_parameters_are_omitted_entirely() {
        let query = QueryBuilder::new()
            .push_opt("category", None::<&str>)
            .push_opt("limit", Some(20))
            .push_opt("offset", None::<u32>)
            .finish();
        assert_eq!(query, "?limit=20");
    }

    #[test]
    fn all_unset_yields_empty_string() {
        let query = QueryBuilder::new()
            .push_opt("category", None::<&str>)
            .finish();
        assert_eq!(query, "");
    }

    #[test]
    fn values_are_url_encoded() {
        let query = QueryBuilder::new()
            .push("category", "arts & crafts")
            .finish();
        assert_eq!(query, "?category=arts+%26+crafts");
    }

    #[test]
    fn identical_inputs_serialize_identically() {
        let build = || {
            QueryBuilder::new()
                .push_opt("category", Some("food"))
                .push_opt("limit", Some(10))
                .finish()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn flags_use_sqlite_integer_form() {
        let query = QueryBuilder::new()
            .push_opt_flag("is_read", Some(true))
            .finish();
        assert_eq!(query, "?is_read=1");
        let query = QueryBuilder::new()
            .push_opt_flag("is_read", Some(false))
            .finish();
        assert_eq!(query, "?is_read=0");
    }
}
