use url::form_urlencoded;

use super::{DeepLinker, SetStringOptions};

/// In-memory browser location
///
/// Keeps the fragment history so that "replace" and "push" writes can be told
/// apart. Fragments are stored without the leading `#` and encoded as
/// `application/x-www-form-urlencoded` pairs.
#[derive(Debug, Clone)]
pub struct HashDeepLinker {
    history: Vec<String>,
}

impl Default for HashDeepLinker {
    fn default() -> Self {
        Self::new()
    }
}

impl HashDeepLinker {
    pub fn new() -> Self {
        Self {
            history: vec![String::new()],
        }
    }

    /// Start at a given fragment, with or without the leading `#`
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            history: vec![strip_hash(fragment).to_string()],
        }
    }

    /// Current fragment including `#`, or empty when there is none
    pub fn fragment(&self) -> String {
        let current = self.current();
        if current.is_empty() {
            String::new()
        } else {
            format!("#{}", current)
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Simulate the user editing the address bar; pushes a history entry
    pub fn set_fragment(&mut self, fragment: &str) {
        self.navigate(strip_hash(fragment).to_string(), false);
    }

    fn current(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or_default()
    }

    fn params(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.current().as_bytes())
            .into_owned()
            .collect()
    }

    fn navigate(&mut self, fragment: String, replace: bool) {
        // Browsers do not add an entry when the fragment is unchanged
        if fragment == self.current() {
            return;
        }
        if replace {
            if let Some(last) = self.history.last_mut() {
                *last = fragment;
                return;
            }
        }
        self.history.push(fragment);
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

impl DeepLinker for HashDeepLinker {
    fn get_string(&self, key: &str) -> String {
        self.params()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap_or_default()
    }

    fn set_string(&mut self, key: &str, value: &str, options: &SetStringOptions) {
        let mut params = self.params();
        params.retain(|(k, _)| k != key);
        if value != options.default_value {
            params.push((key.to_string(), value.to_string()));
            // Keep key order stable for readable links
            params.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let fragment = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        self.navigate(fragment, options.use_location_replace);
    }
}
