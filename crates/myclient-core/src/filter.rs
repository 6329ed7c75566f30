//! Client-side row filter directives
//!
//! A line may end with `| grep <pattern>` or `| grepv <pattern>` (the space
//! after the pipe is optional). The marker splits the line into the SQL
//! fragment and a case-insensitive pattern that restricts which rows of the
//! result are printed.
//!
//! Markers are matched in two passes over the line: first the spaced pair
//! (`"| grep "`, then `"| grepv "`), then the unspaced pair (`"|grep "`, then
//! `"|grepv "`) on whatever fragment the first pass left. Within a pass the
//! first spelling that occurs wins; a hit in the second pass overwrites the
//! directive found by the first.

/// Ordered marker rules: `(marker, exclude)`, grouped by pass
const MARKER_PASSES: [[(&str, bool); 2]; 2] = [
    [("| grep ", false), ("| grepv ", true)],
    [("|grep ", false), ("|grepv ", true)],
];

/// A `grep`/`grepv` directive attached to a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDirective {
    pattern: String,
    exclude: bool,
}

impl FilterDirective {
    /// Create a directive; the pattern is trimmed and loses one trailing `;`
    pub fn new(pattern: impl AsRef<str>, exclude: bool) -> Self {
        let pattern = pattern.as_ref().trim();
        let pattern = pattern.strip_suffix(';').unwrap_or(pattern);
        Self {
            pattern: pattern.to_lowercase(),
            exclude,
        }
    }

    /// The lower-cased pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True for `grepv`
    pub fn is_exclude(&self) -> bool {
        self.exclude
    }

    /// Decide whether a row is printed.
    ///
    /// Null cells never match. An empty pattern admits every row.
    pub fn admits<S: AsRef<str>>(&self, cells: &[Option<S>]) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        let any_match = cells
            .iter()
            .flatten()
            .any(|cell| cell.as_ref().to_lowercase().contains(&self.pattern));
        any_match != self.exclude
    }
}

/// A raw line split into its SQL fragment and optional filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLine {
    /// Everything before the filter marker (the whole line if none)
    pub fragment: String,
    /// Text after the marker, verbatim
    pub pattern: Option<String>,
    /// Whether the winning marker was `grepv`
    pub exclude: bool,
}

impl ExtractedLine {
    /// Directive built from the extracted pattern
    pub fn directive(&self) -> Option<FilterDirective> {
        self.pattern
            .as_ref()
            .map(|pattern| FilterDirective::new(pattern, self.exclude))
    }
}

/// Split a raw input line on the first applicable filter marker
pub fn extract_filter(line: &str) -> ExtractedLine {
    let mut fragment = line.to_string();
    let mut pattern = None;
    let mut exclude = false;

    for pass in &MARKER_PASSES {
        for &(marker, is_exclude) in pass {
            let mut parts = fragment.split(marker);
            let head = parts.next().unwrap_or_default();
            if let Some(rest) = parts.next() {
                let (head, rest) = (head.to_string(), rest.to_string());
                fragment = head;
                pattern = Some(rest);
                exclude = is_exclude;
                break;
            }
        }
    }

    ExtractedLine {
        fragment,
        pattern,
        exclude,
    }
}
