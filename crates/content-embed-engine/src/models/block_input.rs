/// User-typed input as seen by block definitions.
///
/// Keeps the untouched text next to its normalized (trimmed, lowercased) form.
/// Alias matching and most validators work on the normalized form; validators
/// that extract case-sensitive data (URLs, ids) read `raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInput<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> BlockInput<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: raw.trim().to_lowercase(),
        }
    }

    /// The input exactly as the user submitted it
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Trimmed and lowercased input
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether the normalized input contains `needle`, ignoring case and surrounding whitespace
    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        !needle.is_empty() && self.normalized.contains(&needle)
    }
}
