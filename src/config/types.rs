//! Configuration data types.

use std::collections::BTreeSet;
use std::fmt;

/// Keys understood in the `[GADD]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatternKey {
    /// Paths excluded from the dead-code scan
    Exclude,
    /// Decorators whose functions and classes are ignored
    IgnoreDecorators,
    /// Names ignored by the dead-code scan
    IgnoreNames,
}

impl PatternKey {
    /// All keys in file order.
    pub const ALL: [PatternKey; 3] = [
        PatternKey::Exclude,
        PatternKey::IgnoreDecorators,
        PatternKey::IgnoreNames,
    ];

    /// Key as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKey::Exclude => "exclude",
            PatternKey::IgnoreDecorators => "ignore_decorators",
            PatternKey::IgnoreNames => "ignore_names",
        }
    }

    /// Look up a key by its config file spelling. Matching is case-insensitive.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern sets used by the dead-code scanner.
///
/// Sets only ever grow: merging takes the union, there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    exclude: BTreeSet<String>,
    ignore_decorators: BTreeSet<String>,
    ignore_names: BTreeSet<String>,
}

impl PatternConfig {
    /// Build a configuration from raw pattern lists. Entries are trimmed and
    /// blank entries are dropped.
    pub fn from_lists<S: AsRef<str>>(
        exclude: &[S],
        ignore_decorators: &[S],
        ignore_names: &[S],
    ) -> Self {
        let mut config = Self::default();
        config.extend(PatternKey::Exclude, exclude);
        config.extend(PatternKey::IgnoreDecorators, ignore_decorators);
        config.extend(PatternKey::IgnoreNames, ignore_names);
        config
    }

    /// Add patterns to one key.
    pub fn extend<I, S>(&mut self, key: PatternKey, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.set_mut(key);
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if !pattern.is_empty() {
                set.insert(pattern.to_string());
            }
        }
    }

    /// Union every set with the patterns of `other`.
    pub fn merge(&mut self, other: &PatternConfig) {
        for key in PatternKey::ALL {
            self.extend(key, other.get(key));
        }
    }

    /// Patterns stored under `key`, in sorted order.
    pub fn get(&self, key: PatternKey) -> &BTreeSet<String> {
        match key {
            PatternKey::Exclude => &self.exclude,
            PatternKey::IgnoreDecorators => &self.ignore_decorators,
            PatternKey::IgnoreNames => &self.ignore_names,
        }
    }

    fn set_mut(&mut self, key: PatternKey) -> &mut BTreeSet<String> {
        match key {
            PatternKey::Exclude => &mut self.exclude,
            PatternKey::IgnoreDecorators => &mut self.ignore_decorators,
            PatternKey::IgnoreNames => &mut self.ignore_names,
        }
    }

    pub fn exclude_paths(&self) -> Vec<String> {
        self.exclude.iter().cloned().collect()
    }

    pub fn ignore_decorators(&self) -> Vec<String> {
        self.ignore_decorators.iter().cloned().collect()
    }

    pub fn ignore_names(&self) -> Vec<String> {
        self.ignore_names.iter().cloned().collect()
    }

    /// True when no key holds any pattern.
    pub fn is_empty(&self) -> bool {
        PatternKey::ALL.iter().all(|k| self.get(*k).is_empty())
    }
}
