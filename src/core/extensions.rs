//! Extension set - which discovered files are eligible for tokenization
//!
//! Entries are '.'-prefixed suffixes matched case-sensitively against a
//! path's final extension. Bare entries ("py") are normalized to ".py".

use std::collections::HashSet;
use std::path::Path;

/// Extensions processed when --extensions is not given.
pub const DEFAULT_EXTENSIONS: &str = ".py,.js,.jsx,.ts,.tsx,.java,.cpp,.c,.h,.hpp,.cs,.rb,.php,\
.go,.rs,.swift,.kt,.kts,.scala,.sql,.html,.css,.scss,.sass,.less,.md,.txt,.json,.yaml,.yml";

/// A normalized set of file extensions.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    entries: HashSet<String>,
}

impl ExtensionSet {
    /// Build a set from raw entries, prepending a leading dot where missing.
    ///
    /// Empty entries are dropped. Duplicates collapse.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter(|e| !e.as_ref().is_empty())
            .map(|e| normalize(e.as_ref()))
            .collect();
        Self { entries }
    }

    /// Check whether a path's final extension is in the set.
    ///
    /// Matching is case-sensitive and looks only at the last suffix, so
    /// "archive.tar.gz" matches ".gz" but not ".tar.gz". Paths without an
    /// extension never match.
    pub fn matches(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.entries.contains(&format!(".{}", ext)),
            None => false,
        }
    }

    /// Number of distinct extensions in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no extensions were given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.split(','))
    }
}

fn normalize(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
