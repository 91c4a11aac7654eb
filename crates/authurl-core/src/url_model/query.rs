//! Ordered query parameters and the tagged inputs accepted by the builder.

use std::collections::BTreeMap;

use url::form_urlencoded;
use url::Url;

/// Ordered `application/x-www-form-urlencoded` pairs with `set`/`append`
/// semantics matching the browser's `URLSearchParams`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string; a single leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_url(url: &Url) -> Self {
        let pairs = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replaces the first pair with `key` in place and drops any later
    /// duplicates; appends when the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });
        if !found {
            self.append(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn serialize(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Writes these pairs as the query of `url`, removing the `?` entirely
    /// when there are none.
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.serialize()));
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One source of query parameters for a hash sub-route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    /// Already-parsed parameters, duplicates preserved.
    Params(QueryParams),
    /// Plain key/value pairs in caller order.
    Pairs(Vec<(String, String)>),
}

impl QueryInput {
    pub fn pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        QueryInput::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        match self {
            QueryInput::Params(params) => Box::new(params.iter()),
            QueryInput::Pairs(pairs) => Box::new(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        }
    }
}

impl From<QueryParams> for QueryInput {
    fn from(params: QueryParams) -> Self {
        QueryInput::Params(params)
    }
}

impl From<BTreeMap<String, String>> for QueryInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        QueryInput::Pairs(map.into_iter().collect())
    }
}

/// Either a single query source or an ordered list of them; later sources
/// override earlier ones on key collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashSearchParams {
    Single(QueryInput),
    List(Vec<QueryInput>),
}

impl HashSearchParams {
    pub fn inputs(&self) -> &[QueryInput] {
        match self {
            HashSearchParams::Single(input) => std::slice::from_ref(input),
            HashSearchParams::List(inputs) => inputs,
        }
    }
}

impl From<QueryInput> for HashSearchParams {
    fn from(input: QueryInput) -> Self {
        HashSearchParams::Single(input)
    }
}

impl From<Vec<QueryInput>> for HashSearchParams {
    fn from(inputs: Vec<QueryInput>) -> Self {
        HashSearchParams::List(inputs)
    }
}

/// `redirectUrl` -> `redirect_url`. Only ASCII uppercase letters are rewritten.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
