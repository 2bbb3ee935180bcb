// src/extractors/markers.rs
//
// Every markup signature the job-card extractor depends on lives here.
// The class tokens are generated by the job board and drift without notice,
// so a markup change should only ever touch this table.

/// How a marker's class signature is compared against an element's class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMatch {
    /// Any element with the right tag.
    Any,
    /// One of the element's class tokens equals the value.
    Token(&'static str),
    /// One of the element's class tokens contains the value as a substring.
    Contains(&'static str),
}

impl ClassMatch {
    pub fn matches<'c, I>(&self, mut classes: I) -> bool
    where
        I: Iterator<Item = &'c str>,
    {
        match *self {
            ClassMatch::Any => true,
            ClassMatch::Token(token) => classes.any(|c| c == token),
            ClassMatch::Contains(part) => classes.any(|c| c.contains(part)),
        }
    }
}

/// A tag name plus class signature identifying one structural role in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub tag: &'static str,
    pub class: ClassMatch,
}

impl Marker {
    pub const fn new(tag: &'static str, class: ClassMatch) -> Self {
        Self { tag, class }
    }
}

// --- Attributes ---
pub const CANDIDATE_JOB_ID_ATTR: &str = "data-occludable-job-id";
pub const CARD_JOB_ID_ATTR: &str = "data-job-id";
pub const LINK_TARGET_ATTR: &str = "href";

// --- List structure ---
pub const JOB_LIST: Marker = Marker::new("ul", ClassMatch::Token("eUqfEYGWzKYSSZZiKvAmRbkGoCLfJrzzPwBhk"));
pub const CANDIDATE: Marker = Marker::new("li", ClassMatch::Token("ember-view"));
pub const CARD: Marker = Marker::new("div", ClassMatch::Token("job-card-container"));

// --- Title / link ---
pub const TITLE_LINK: Marker = Marker::new("a", ClassMatch::Contains("job-card-container__link"));
pub const TITLE_TEXT: Marker = Marker::new("strong", ClassMatch::Any);

// --- Company ---
pub const COMPANY_SUBTITLE: Marker = Marker::new("div", ClassMatch::Token("artdeco-entity-lockup__subtitle"));
pub const COMPANY_NAME: Marker = Marker::new("span", ClassMatch::Token("lhTobqFRnhXjIxsPALxnKZTvtIokoQuCLO"));

// --- Location / salary ---
// Location and salary share the item signature; salary is scoped under METADATA_BLOCK.
pub const METADATA_LIST: Marker = Marker::new("ul", ClassMatch::Token("job-card-container__metadata-wrapper"));
pub const METADATA_ITEM: Marker = Marker::new("li", ClassMatch::Token("nnOoYztMdggrEcztrGDGSlUMxBgYhtrXQEvk"));
pub const METADATA_BLOCK: Marker = Marker::new("div", ClassMatch::Token("artdeco-entity-lockup__metadata"));

// --- Footer ---
pub const FOOTER: Marker = Marker::new("ul", ClassMatch::Contains("job-card-list__footer-wrapper"));
pub const POSTED_TIME: Marker = Marker::new("time", ClassMatch::Any);
pub const EASY_APPLY_PATTERN: &str = "Easy Apply";
pub const PROMOTED_PATTERN: &str = "Promoted";

// --- Insights ---
pub const INSIGHT: Marker = Marker::new("div", ClassMatch::Token("job-card-list__insight"));
pub const INSIGHT_TEXT: Marker = Marker::new("div", ClassMatch::Token("job-card-container__job-insight-text"));
