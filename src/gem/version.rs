use std::cmp::Ordering;

/// A single segment of a gem version.
///
/// Variant order matters: letter segments sort before numeric ones, so
/// `1.0.0.rc1` is lower than `1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Text(String),
    Number(u64),
}

/// Parsed version that orders the way RubyGems does
#[derive(Debug, Clone)]
pub struct GemVersion {
    segments: Vec<Segment>,
}

impl GemVersion {
    /// Parse a version string into digit and letter runs.
    ///
    /// Examples:
    /// - "1.2.3" -> [1, 2, 3]
    /// - "1.0.0.rc1" -> [1, 0, 0, "rc", 1]
    /// - "2.0.0-beta" -> [2, 0, 0, "beta"]
    ///
    /// Returns None for strings that contain no digits or any character
    /// other than ASCII alphanumerics, `.`, `-` and `_`.
    pub fn parse(version: &str) -> Option<Self> {
        let version = version.trim();
        if !version.chars().any(|c| c.is_ascii_digit())
            || !version
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        {
            return None;
        }

        let mut segments = Vec::new();
        let mut chars = version.chars().peekable();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                let mut run = String::new();
                while let Some(d) = chars.next_if(char::is_ascii_digit) {
                    run.push(d);
                }
                segments.push(Segment::Number(run.parse().unwrap_or(u64::MAX)));
            } else if c.is_ascii_alphabetic() {
                let mut run = String::new();
                while let Some(a) = chars.next_if(char::is_ascii_alphabetic) {
                    run.push(a);
                }
                segments.push(Segment::Text(run));
            } else {
                chars.next();
            }
        }

        Some(Self { segments })
    }
}

impl Ord for GemVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let zero = Segment::Number(0);
        let len = self.segments.len().max(other.segments.len());

        (0..len)
            .map(|i| {
                let lhs = self.segments.get(i).unwrap_or(&zero);
                let rhs = other.segments.get(i).unwrap_or(&zero);
                lhs.cmp(rhs)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for GemVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GemVersion {}

/// Sort versions newest first, dropping strings that do not parse
pub fn sort_descending(versions: Vec<String>) -> Vec<String> {
    let mut versions = sort_ascending(versions);
    versions.reverse();
    versions
}

/// Sort versions oldest first, dropping strings that do not parse
pub fn sort_ascending(versions: Vec<String>) -> Vec<String> {
    let mut parsed: Vec<(String, GemVersion)> = versions
        .into_iter()
        .filter_map(|v| GemVersion::parse(&v).map(|parsed| (v, parsed)))
        .collect();

    parsed.sort_by(|(_, a), (_, b)| a.cmp(b));

    parsed.into_iter().map(|(v, _)| v).collect()
}
