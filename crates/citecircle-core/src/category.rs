use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome for a citation's gender pairing code: the four
/// defined first-author/last-author pairings plus a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    ManMan,
    ManWoman,
    WomanMan,
    WomanWoman,
    Unknown,
}

impl Category {
    /// Fixed category order used for grouping, matrix columns, and color
    /// list positions.
    pub const ALL: [Category; 5] = [
        Category::ManMan,
        Category::ManWoman,
        Category::WomanMan,
        Category::WomanWoman,
        Category::Unknown,
    ];

    /// Total classification of a raw pairing code.
    ///
    /// Exact match decides the four defined codes. Any other code containing
    /// `U` marks one or both authors as undetermined. Codes matching neither
    /// rule fold into `Unknown` as well; the permissive fallback is policy,
    /// not an accident, so existing inputs keep their observed behavior.
    pub fn classify(code: &str) -> Category {
        match code {
            "MM" => Category::ManMan,
            "MW" => Category::ManWoman,
            "WM" => Category::WomanMan,
            "WW" => Category::WomanWoman,
            _ if code.contains('U') => Category::Unknown,
            _ => Category::Unknown,
        }
    }

    /// 1-based position in the fixed order. Doubles as the matrix column of
    /// this category's anchor node and as the cell value tagged there.
    pub fn index(self) -> usize {
        match self {
            Category::ManMan => 1,
            Category::ManWoman => 2,
            Category::WomanMan => 3,
            Category::WomanWoman => 4,
            Category::Unknown => 5,
        }
    }

    /// Anchor node text shown on the circle.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::ManMan => "Man - Man",
            Category::ManWoman => "Man - Woman",
            Category::WomanMan => "Woman - Man",
            Category::WomanWoman => "Woman - Woman",
            Category::Unknown => "Unknown",
        }
    }

    /// Wording used in the figure legend.
    pub fn legend_name(self) -> &'static str {
        match self {
            Category::ManMan => "Man / Man",
            Category::ManWoman => "Man / Woman",
            Category::WomanMan => "Woman / Man",
            Category::WomanWoman => "Woman / Woman",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_defined_codes() {
        assert_eq!(Category::classify("MM"), Category::ManMan);
        assert_eq!(Category::classify("MW"), Category::ManWoman);
        assert_eq!(Category::classify("WM"), Category::WomanMan);
        assert_eq!(Category::classify("WW"), Category::WomanWoman);
    }

    #[test]
    fn test_classify_undetermined_codes() {
        for code in ["UU", "MU", "UM", "WU", "UW"] {
            assert_eq!(Category::classify(code), Category::Unknown, "{code}");
        }
    }

    #[test]
    fn test_classify_folds_malformed_codes_into_unknown() {
        for code in ["", "XX", "mm", "M", "WWW"] {
            assert_eq!(Category::classify(code), Category::Unknown, "{code:?}");
        }
    }

    #[test]
    fn test_indices_follow_fixed_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position + 1);
        }
    }
}
