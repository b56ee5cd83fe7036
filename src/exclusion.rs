use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

/// Whether the list names executables to skip or the only executables to
/// touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Blacklist,
    Whitelist,
}

/// Ordered executable basenames read from the exclusion file, one per line.
/// Loaded once per run and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    entries: Vec<String>,
}

impl ExclusionList {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads the exclusion file. A missing file yields an empty list and a
    /// warning, not a failure; so does any other read error. Line endings
    /// are stripped and blank lines dropped.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "exclusion file not found, nothing will be filtered");
                return Self::default();
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read exclusion file");
                return Self::default();
            }
        };

        let entries: Vec<String> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        debug!(path = %path.display(), entries = entries.len(), "exclusion list loaded");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when any entry matches `candidate` under the bounded prefix
    /// comparison: the first min(entry, candidate) bytes decide, case
    /// sensitively. An entry that merely extends the candidate matches, and
    /// so does an entry the candidate extends ("notepad.ex" matches
    /// "notepad.exe"). Full-string equality is deliberately NOT required;
    /// this mirrors the comparison the tool has always shipped with.
    pub fn contains_match(&self, candidate: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| bounded_prefix_match(entry, candidate))
    }
}

fn bounded_prefix_match(entry: &str, candidate: &str) -> bool {
    let n = entry.len().min(candidate.len());
    n > 0 && entry.as_bytes()[..n] == candidate.as_bytes()[..n]
}

/// The decision the driver asks for: skip this window based on its owning
/// executable? In blacklist mode a match skips; in whitelist mode the
/// absence of any match skips.
pub fn should_skip(exe_base_name: &str, list: &ExclusionList, mode: FilterMode) -> bool {
    let matched = list.contains_match(exe_base_name);
    match mode {
        FilterMode::Blacklist => matched,
        FilterMode::Whitelist => !matched,
    }
}

/// The file name after the final path separator.
pub fn executable_base_name(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}
