/// Character-class check for names the rendering layer cannot display.
use serde::{Deserialize, Serialize};

/// Inclusive range of Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodepointRange {
    pub start: u32,
    pub end: u32,
}

impl CodepointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }
}

/// Pictographs, dingbats and the enclosed/symbol block span.
///
/// The last range is broad (it covers CJK and Hangul as well); narrow it
/// through configuration when those names should be scanned.
const DEFAULT_RANGES: &[CodepointRange] = &[
    CodepointRange::new(0x1F300, 0x1F9FF),
    CodepointRange::new(0x2702, 0x27B0),
    CodepointRange::new(0x24C2, 0x1F251),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsetPolicy {
    pub ranges: Vec<CodepointRange>,
}

impl Default for CharsetPolicy {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_RANGES.to_vec(),
        }
    }
}

impl CharsetPolicy {
    /// `true` if any character of `name` falls inside a flagged range.
    pub fn has_unsupported_characters(&self, name: &str) -> bool {
        name.chars()
            .any(|c| self.ranges.iter().any(|range| range.contains(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass() {
        let policy = CharsetPolicy::default();
        assert!(!policy.has_unsupported_characters("report-2024_final.pdf"));
        assert!(!policy.has_unsupported_characters("café déjà vu.txt"));
    }

    #[test]
    fn test_pictographs_flagged() {
        let policy = CharsetPolicy::default();
        assert!(policy.has_unsupported_characters("party 🎉.txt"));
        assert!(policy.has_unsupported_characters("✂ cut"));
        assert!(policy.has_unsupported_characters("Ⓜ"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = CodepointRange::new(0x2702, 0x27B0);
        assert!(range.contains('\u{2702}'));
        assert!(range.contains('\u{27B0}'));
        assert!(!range.contains('\u{2701}'));
        assert!(!range.contains('\u{27B1}'));
    }

    #[test]
    fn test_empty_policy_flags_nothing() {
        let policy = CharsetPolicy { ranges: Vec::new() };
        assert!(!policy.has_unsupported_characters("🎉"));
    }
}
