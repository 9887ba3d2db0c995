//! Canonical (matrix) and display (circle) label orderings.
//!
//! The canonical order is what matrix rows/columns, titles, angles and node
//! colors are indexed by. The display order controls only where nodes sit on
//! the circle. Mixing the two up silently corrupts the matrix, so they are
//! separate types and a [`DisplayOrder`] can only be derived from a
//! [`CanonicalOrder`].

use citecircle_core::{Category, CitationRecord};
use serde::{Deserialize, Serialize};

/// Non-citation labels occupying the seven fixed leading slots of the
/// canonical order: two invisible spacers and five category anchor nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placeholder {
    LeadSpacer,
    ManMan,
    ManWoman,
    WomanMan,
    WomanWoman,
    Unknown,
    TrailSpacer,
}

impl Placeholder {
    /// Canonical slot order. A placeholder's matrix column is its position
    /// here; the spacers at 0 and 6 are never targeted by a matrix cell.
    pub const ALL: [Placeholder; 7] = [
        Placeholder::LeadSpacer,
        Placeholder::ManMan,
        Placeholder::ManWoman,
        Placeholder::WomanMan,
        Placeholder::WomanWoman,
        Placeholder::Unknown,
        Placeholder::TrailSpacer,
    ];

    /// Label text. The two spacer tokens stay distinct strings so angle
    /// lookups by name remain well-defined.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::LeadSpacer => "Spacer1",
            Placeholder::TrailSpacer => "Spacer2",
            Placeholder::ManMan => Category::ManMan.display_name(),
            Placeholder::ManWoman => Category::ManWoman.display_name(),
            Placeholder::WomanMan => Category::WomanMan.display_name(),
            Placeholder::WomanWoman => Category::WomanWoman.display_name(),
            Placeholder::Unknown => Category::Unknown.display_name(),
        }
    }

    pub fn is_spacer(self) -> bool {
        matches!(self, Placeholder::LeadSpacer | Placeholder::TrailSpacer)
    }

    /// The category this slot anchors, if it is not a spacer.
    pub fn category(self) -> Option<Category> {
        match self {
            Placeholder::LeadSpacer | Placeholder::TrailSpacer => None,
            Placeholder::ManMan => Some(Category::ManMan),
            Placeholder::ManWoman => Some(Category::ManWoman),
            Placeholder::WomanMan => Some(Category::WomanMan),
            Placeholder::WomanWoman => Some(Category::WomanWoman),
            Placeholder::Unknown => Some(Category::Unknown),
        }
    }

    pub fn for_category(category: Category) -> Placeholder {
        match category {
            Category::ManMan => Placeholder::ManMan,
            Category::ManWoman => Placeholder::ManWoman,
            Category::WomanMan => Placeholder::WomanMan,
            Category::WomanWoman => Placeholder::WomanWoman,
            Category::Unknown => Placeholder::Unknown,
        }
    }

    /// Column this placeholder occupies in the canonical order. For the five
    /// anchors this equals `Category::index()`.
    pub fn column(self) -> usize {
        match self.category() {
            Some(category) => category.index(),
            None => match self {
                Placeholder::LeadSpacer => 0,
                _ => 6,
            },
        }
    }
}

/// One slot in either ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Placeholder(Placeholder),
    Citation { key: String, category: Category },
}

impl Label {
    pub fn name(&self) -> &str {
        match self {
            Label::Placeholder(placeholder) => placeholder.name(),
            Label::Citation { key, .. } => key,
        }
    }

    /// The category of a citation label. Anchor placeholders intentionally
    /// answer `None` here; they take the shared placeholder node color, not
    /// their category's.
    pub fn citation_category(&self) -> Option<Category> {
        match self {
            Label::Placeholder(_) => None,
            Label::Citation { category, .. } => Some(*category),
        }
    }
}

/// The correctness-critical ordering: seven placeholders followed by the
/// citation keys grouped stably by category in fixed order. Length is always
/// `7 + number of records`; every record appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrder {
    labels: Vec<Label>,
}

impl CanonicalOrder {
    /// Number of leading placeholder slots.
    pub const PLACEHOLDER_COUNT: usize = Placeholder::ALL.len();

    /// Partitions the records by category (stable, input order preserved
    /// within each group) and prepends the placeholder block. Empty groups
    /// contribute nothing; duplicate keys are kept as-is.
    pub fn build(records: &[CitationRecord]) -> CanonicalOrder {
        let mut groups: [Vec<Label>; 5] = Default::default();
        for record in records {
            let category = record.category();
            groups[category.index() - 1].push(Label::Citation {
                key: record.key.clone(),
                category,
            });
        }

        let mut labels: Vec<Label> = Vec::with_capacity(Self::PLACEHOLDER_COUNT + records.len());
        labels.extend(Placeholder::ALL.iter().copied().map(Label::Placeholder));
        for group in groups {
            labels.extend(group);
        }
        CanonicalOrder { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never true: the placeholder block is always present.
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The citation block without the leading placeholders, in canonical
    /// sub-order. This is what the display order wraps.
    pub fn citations(&self) -> &[Label] {
        &self.labels[Self::PLACEHOLDER_COUNT..]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(Label::name)
    }

    /// Citation count per category, in fixed order. Used for the run summary.
    pub fn tally(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for label in self.citations() {
            if let Some(category) = label.citation_category() {
                counts[category.index() - 1] += 1;
            }
        }
        counts
    }
}

/// The aesthetics-only ordering: man-first anchors lead, the citation arc
/// sits between the two spacers, the remaining anchors trail. Used solely
/// for angular placement, never for matrix indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOrder {
    labels: Vec<Label>,
}

impl DisplayOrder {
    const LEAD: [Placeholder; 3] = [
        Placeholder::ManMan,
        Placeholder::ManWoman,
        Placeholder::LeadSpacer,
    ];
    const TRAIL: [Placeholder; 4] = [
        Placeholder::TrailSpacer,
        Placeholder::WomanMan,
        Placeholder::WomanWoman,
        Placeholder::Unknown,
    ];

    /// The only constructor: rearranging an existing canonical order keeps
    /// the two orderings over the same label multiset by construction.
    pub fn from_canonical(canonical: &CanonicalOrder) -> DisplayOrder {
        let mut labels = Vec::with_capacity(canonical.len());
        labels.extend(Self::LEAD.iter().copied().map(Label::Placeholder));
        labels.extend(canonical.citations().iter().cloned());
        labels.extend(Self::TRAIL.iter().copied().map(Label::Placeholder));
        DisplayOrder { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_records() -> Vec<CitationRecord> {
        vec![
            CitationRecord::new("p1", "MM"),
            CitationRecord::new("p2", "MW"),
            CitationRecord::new("p3", "WW"),
            CitationRecord::new("p4", "UU"),
        ]
    }

    #[test]
    fn test_canonical_order_matches_worked_example() {
        let order = CanonicalOrder::build(&example_records());
        let names: Vec<&str> = order.names().collect();
        assert_eq!(
            names,
            [
                "Spacer1",
                "Man - Man",
                "Man - Woman",
                "Woman - Man",
                "Woman - Woman",
                "Unknown",
                "Spacer2",
                "p1",
                "p2",
                "p3",
                "p4",
            ]
        );
    }

    #[test]
    fn test_display_order_matches_worked_example() {
        let canonical = CanonicalOrder::build(&example_records());
        let display = DisplayOrder::from_canonical(&canonical);
        let names: Vec<&str> = display.labels().iter().map(Label::name).collect();
        assert_eq!(
            names,
            [
                "Man - Man",
                "Man - Woman",
                "Spacer1",
                "p1",
                "p2",
                "p3",
                "p4",
                "Spacer2",
                "Woman - Man",
                "Woman - Woman",
                "Unknown",
            ]
        );
    }

    #[test]
    fn test_grouping_is_stable_within_category() {
        let records = vec![
            CitationRecord::new("late_mm", "MM"),
            CitationRecord::new("first_ww", "WW"),
            CitationRecord::new("early_mm", "MM"),
        ];
        let order = CanonicalOrder::build(&records);
        let citations: Vec<&str> = order.citations().iter().map(Label::name).collect();
        assert_eq!(citations, ["late_mm", "early_mm", "first_ww"]);
    }

    #[test]
    fn test_empty_record_set_keeps_placeholder_block() {
        let order = CanonicalOrder::build(&[]);
        assert_eq!(order.len(), CanonicalOrder::PLACEHOLDER_COUNT);
        assert!(order.citations().is_empty());

        let display = DisplayOrder::from_canonical(&order);
        assert_eq!(display.len(), order.len());
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let records = vec![
            CitationRecord::new("dup", "MM"),
            CitationRecord::new("dup", "WW"),
        ];
        let order = CanonicalOrder::build(&records);
        assert_eq!(order.len(), CanonicalOrder::PLACEHOLDER_COUNT + 2);
        let keys: Vec<&str> = order.citations().iter().map(Label::name).collect();
        assert_eq!(keys, ["dup", "dup"]);
    }

    #[test]
    fn test_tally_counts_by_category() {
        let order = CanonicalOrder::build(&example_records());
        assert_eq!(order.tally(), [1, 1, 0, 1, 1]);
    }

    #[test]
    fn test_placeholder_columns_align_with_category_indices() {
        for category in Category::ALL {
            let placeholder = Placeholder::for_category(category);
            assert_eq!(placeholder.column(), category.index());
        }
        assert_eq!(Placeholder::LeadSpacer.column(), 0);
        assert_eq!(Placeholder::TrailSpacer.column(), 6);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn code_strategy() -> impl Strategy<Value = String> {
            proptest::sample::select(vec![
                "MM".to_string(),
                "MW".to_string(),
                "WM".to_string(),
                "WW".to_string(),
                "UU".to_string(),
                "MU".to_string(),
                "UW".to_string(),
                "XX".to_string(),
                String::new(),
            ])
        }

        fn records_strategy() -> impl Strategy<Value = Vec<CitationRecord>> {
            proptest::collection::vec(
                ("[A-Za-z]{2,8}[0-9]{0,4}", code_strategy())
                    .prop_map(|(key, code)| CitationRecord::new(key, code)),
                0..32,
            )
        }

        proptest! {
            #[test]
            fn prop_length_is_placeholders_plus_records(records in records_strategy()) {
                let order = CanonicalOrder::build(&records);
                prop_assert_eq!(order.len(), CanonicalOrder::PLACEHOLDER_COUNT + records.len());
            }

            #[test]
            fn prop_citation_block_is_grouped_in_fixed_order(records in records_strategy()) {
                let order = CanonicalOrder::build(&records);
                let indices: Vec<usize> = order
                    .citations()
                    .iter()
                    .filter_map(|label| label.citation_category())
                    .map(Category::index)
                    .collect();
                prop_assert!(indices.windows(2).all(|pair| pair[0] <= pair[1]));
            }

            #[test]
            fn prop_orders_share_labels_but_not_sequence(records in records_strategy()) {
                let canonical = CanonicalOrder::build(&records);
                let display = DisplayOrder::from_canonical(&canonical);

                let mut canonical_names: Vec<&str> = canonical.names().collect();
                let mut display_names: Vec<&str> =
                    display.labels().iter().map(Label::name).collect();
                canonical_names.sort_unstable();
                display_names.sort_unstable();
                prop_assert_eq!(canonical_names, display_names);

                prop_assert_ne!(canonical.labels(), display.labels());
            }
        }
    }
}
