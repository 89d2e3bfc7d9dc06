use serde::{Deserialize, Serialize};

/// Fixed set of issue categories the classifier can attach to a review.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Technical,
    Content,
    Instructional,
    Ux,
    Engagement,
}

impl IssueCategory {
    pub const fn label(self) -> &'static str {
        match self {
            IssueCategory::Technical => "Technical",
            IssueCategory::Content => "Content",
            IssueCategory::Instructional => "Instructional",
            IssueCategory::Ux => "User Experience",
            IssueCategory::Engagement => "Engagement",
        }
    }

    /// Baseline remediation cost on the 1-10 effort scale. Platform-level
    /// fixes (technical, UX) cost more than content edits.
    pub const fn base_effort(self) -> u8 {
        match self {
            IssueCategory::Technical => 8,
            IssueCategory::Content => 4,
            IssueCategory::Instructional => 6,
            IssueCategory::Ux => 7,
            IssueCategory::Engagement => 5,
        }
    }

    pub const fn ordered() -> [IssueCategory; 5] {
        [
            IssueCategory::Technical,
            IssueCategory::Content,
            IssueCategory::Instructional,
            IssueCategory::Ux,
            IssueCategory::Engagement,
        ]
    }
}

/// Detection rules for one category. A pattern matches when every term in it
/// occurs in the normalized review text; a category matches when any of its
/// patterns does. Terms are lowercase substrings, so "freez" covers both
/// "freezes" and "freezing".
pub(crate) struct CategoryRule {
    pub(crate) category: IssueCategory,
    pub(crate) patterns: &'static [&'static [&'static str]],
    pub(crate) suggestions: &'static [&'static str],
}

/// Domain configuration, not algorithm: extend the tables to teach the
/// classifier new symptoms without touching the aggregation code.
pub(crate) const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: IssueCategory::Technical,
        patterns: &[
            &["video", "freez"],
            &["video", "buffer"],
            &["video", "stutter"],
            &["audio", "cut"],
            &["audio", "broken"],
            &["audio", "missing"],
            &["crash"],
            &["won't load"],
            &["wont load"],
            &["not loading"],
            &["fails to load"],
            &["broken link"],
            &["dead link"],
            &["404"],
            &["error message"],
            &["glitch"],
            &["playback"],
        ],
        suggestions: &[
            "Re-encode affected video lessons and verify playback across browsers",
            "Audit lesson assets for dead links and missing files",
            "Add automated playback monitoring for course media",
        ],
    },
    CategoryRule {
        category: IssueCategory::Content,
        patterns: &[
            &["outdated"],
            &["out of date"],
            &["deprecated"],
            &["incorrect"],
            &["inaccurate"],
            &["wrong", "answer"],
            &["typo"],
            &["old", "version"],
            &["needs", "updat"],
            &["no longer", "works"],
        ],
        suggestions: &[
            "Refresh outdated lessons against current tool versions",
            "Run a technical review of quiz answers and code samples",
            "Publish a changelog so learners can see when content was last revised",
        ],
    },
    CategoryRule {
        category: IssueCategory::Instructional,
        patterns: &[
            &["confusing"],
            &["unclear"],
            &["hard to follow"],
            &["difficult to follow"],
            &["poorly explained"],
            &["not explained"],
            &["too fast"],
            &["rushed"],
            &["skips", "steps"],
            &["assumes", "knowledge"],
            &["more examples"],
            &["lacks", "example"],
        ],
        suggestions: &[
            "Add worked examples and step-by-step walkthroughs to dense sections",
            "Record shorter re-explanations for the most confusing lessons",
            "Publish prerequisite guidance so learners arrive prepared",
        ],
    },
    CategoryRule {
        category: IssueCategory::Ux,
        patterns: &[
            &["navigation"],
            &["navigate"],
            &["hard to find"],
            &["can't find"],
            &["cant find"],
            &["interface"],
            &["layout"],
            &["clunky"],
            &["subtitle"],
            &["caption"],
            &["mobile"],
            &["font size"],
        ],
        suggestions: &[
            "Simplify course navigation and surface a persistent outline",
            "Test the course layout on mobile and small screens",
            "Provide captions and adjustable playback controls",
        ],
    },
    CategoryRule {
        category: IssueCategory::Engagement,
        patterns: &[
            &["boring"],
            &["monotone"],
            &["not engaging"],
            &["lost interest"],
            &["too long"],
            &["drags"],
            &["tedious"],
            &["repetitive"],
            &["hard to stay", "focused"],
        ],
        suggestions: &[
            "Break long lectures into shorter segments with knowledge checks",
            "Add hands-on exercises or projects between lecture blocks",
            "Vary delivery with demos, visuals, and real-world stories",
        ],
    },
];

pub(crate) fn suggestions_for(category: IssueCategory) -> &'static [&'static str] {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.category == category)
        .map(|rule| rule.suggestions)
        .unwrap_or(&[])
}

/// Keywords that pin severity regardless of the numeric rating.
pub(crate) const HIGH_IMPACT_TERMS: &[&str] = &[
    "critical",
    "blocking",
    "cannot continue",
    "can't continue",
    "cant continue",
    "unusable",
    "completely broken",
    "impossible to",
];

pub(crate) const MEDIUM_IMPACT_TERMS: &[&str] = &[
    "should fix",
    "would help",
    "please fix",
    "needs improvement",
    "could be better",
    "minor issue",
];
