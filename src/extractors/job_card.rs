// src/extractors/job_card.rs

// --- Imports ---
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

use super::markers::{self, Marker};
use super::query::NodeQuery;

// --- Footer flag patterns (Lazy Static) ---
// Literal substrings; matched per text node.
static EASY_APPLY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&regex::escape(markers::EASY_APPLY_PATTERN))
        .expect("Failed to compile EASY_APPLY_RE")
});

static PROMOTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&regex::escape(markers::PROMOTED_PATTERN))
        .expect("Failed to compile PROMOTED_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkplaceType {
    Remote,
    #[serde(rename = "On-site")]
    OnSite,
}

impl WorkplaceType {
    /// "Remote" only when the location text says so (case-sensitive).
    pub fn from_location(location: &str) -> Self {
        if location.contains("Remote") {
            WorkplaceType::Remote
        } else {
            WorkplaceType::OnSite
        }
    }
}

impl fmt::Display for WorkplaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkplaceType::Remote => f.write_str("Remote"),
            WorkplaceType::OnSite => f.write_str("On-site"),
        }
    }
}

/// One job posting pulled out of the results list. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub workplace_type: WorkplaceType,
    pub salary: String,
    pub apply_url: String,
    pub posted: String,
    pub easy_apply: bool,
    pub promoted: bool,
    pub insights: String,
}

/// Why a candidate list item produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No `job-card-container` div carrying the item's job id.
    NoCardContainer { job_id: String },
    /// Title or company came out empty.
    MissingRequired { has_title: bool, has_company: bool },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoCardContainer { job_id } => {
                write!(f, "could not find job-card-container div for job ID '{}'", job_id)
            }
            SkipReason::MissingRequired { has_title, has_company } => write!(
                f,
                "missing required fields - Title: {}, Company: {}",
                has_title, has_company
            ),
        }
    }
}

/// Result of running field extraction over a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    Parsed(JobRecord),
    Skipped(SkipReason),
}

impl CandidateOutcome {
    pub fn record(&self) -> Option<&JobRecord> {
        match self {
            CandidateOutcome::Parsed(record) => Some(record),
            CandidateOutcome::Skipped(_) => None,
        }
    }

    pub fn into_record(self) -> Option<JobRecord> {
        match self {
            CandidateOutcome::Parsed(record) => Some(record),
            CandidateOutcome::Skipped(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Log progress and skip reasons for every candidate at INFO instead of DEBUG.
    pub trace_candidates: bool,
}

#[derive(Debug, Default)]
struct FooterInfo {
    posted: Option<String>,
    easy_apply: bool,
    promoted: bool,
}

// --- Main Extractor Structure ---
pub struct JobExtractor {
    config: ExtractorConfig,
}

impl JobExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Parses a results page and returns every valid job record in document order.
    pub fn extract(&self, html_content: &str) -> Vec<JobRecord> {
        let document = Html::parse_document(html_content);
        self.candidates(&document)
            .filter_map(CandidateOutcome::into_record)
            .collect()
    }

    /// Lazily yields one outcome per candidate list item, in document order.
    /// Yields nothing when the job list container is missing.
    pub fn candidates<'a>(
        &'a self,
        document: &'a Html,
    ) -> impl Iterator<Item = CandidateOutcome> + 'a {
        let items: Vec<ElementRef<'a>> = match document.root_element().find(markers::JOB_LIST) {
            Some(job_list) => {
                let items: Vec<ElementRef<'a>> = job_list.find_all(markers::CANDIDATE).collect();
                tracing::info!("Found {} potential job items", items.len());
                items
            }
            None => {
                tracing::warn!("Could not find job list container");
                Vec::new()
            }
        };

        let total = items.len();
        items.into_iter().enumerate().map(move |(idx, item)| {
            let outcome = parse_candidate(item);
            self.report(idx + 1, total, &outcome);
            outcome
        })
    }

    fn report(&self, position: usize, total: usize, outcome: &CandidateOutcome) {
        if self.config.trace_candidates {
            tracing::info!("Processing job {}/{}", position, total);
        }

        if let Some(record) = outcome.record() {
            if self.config.trace_candidates {
                tracing::info!(
                    "Successfully parsed job: {} at {} ({})",
                    record.title,
                    record.company,
                    record.workplace_type
                );
            }
        } else if let CandidateOutcome::Skipped(reason) = outcome {
            if self.config.trace_candidates {
                tracing::info!("Job {} was skipped: {}", position, reason);
            } else {
                tracing::debug!("Job {}/{} was skipped: {}", position, total, reason);
            }
        }
    }
}

/// Pulls every field out of one candidate list item.
///
/// Each lookup is independently optional; only a missing card wrapper or an
/// empty title/company discards the candidate.
pub fn parse_candidate<'a, N: NodeQuery<'a>>(item: N) -> CandidateOutcome {
    let job_id: &'a str = item.attr(markers::CANDIDATE_JOB_ID_ATTR).unwrap_or_default();
    tracing::trace!("Processing job ID: {}", job_id);

    let card = item.find_where(move |el: N| {
        el.matches_marker(markers::CARD) && el.attr(markers::CARD_JOB_ID_ATTR) == Some(job_id)
    });
    let Some(card) = card else {
        return CandidateOutcome::Skipped(SkipReason::NoCardContainer {
            job_id: job_id.to_string(),
        });
    };

    let title_link = card.find(markers::TITLE_LINK);
    let title = title_link
        .and_then(|link| link.find(markers::TITLE_TEXT))
        .map(|strong| strong.own_text())
        .unwrap_or_default();
    if title.is_empty() {
        tracing::trace!("Could not find job title");
    }

    let company = text_at(card, &[markers::COMPANY_SUBTITLE, markers::COMPANY_NAME])
        .unwrap_or_default();
    if company.is_empty() {
        tracing::trace!("Could not find company name");
    }

    let location = text_at(card, &[markers::METADATA_LIST, markers::METADATA_ITEM])
        .unwrap_or_default();
    if location.is_empty() {
        tracing::trace!("Could not find location");
    }

    let salary = text_at(
        card,
        &[markers::METADATA_BLOCK, markers::METADATA_LIST, markers::METADATA_ITEM],
    )
    .unwrap_or_default();

    let apply_url = title_link
        .and_then(|link| link.attr(markers::LINK_TARGET_ATTR))
        .unwrap_or_default()
        .to_string();

    let footer = card.find(markers::FOOTER).map(read_footer).unwrap_or_default();

    let insights = text_at(card, &[markers::INSIGHT, markers::INSIGHT_TEXT]).unwrap_or_default();

    if title.is_empty() || company.is_empty() {
        return CandidateOutcome::Skipped(SkipReason::MissingRequired {
            has_title: !title.is_empty(),
            has_company: !company.is_empty(),
        });
    }

    CandidateOutcome::Parsed(JobRecord {
        job_id: job_id.to_string(),
        workplace_type: WorkplaceType::from_location(&location),
        title,
        company,
        location,
        salary,
        apply_url,
        posted: footer.posted.unwrap_or_default(),
        easy_apply: footer.easy_apply,
        promoted: footer.promoted,
        insights,
    })
}

/// Follows a chain of markers downward from `scope` and returns the visible
/// text of the final element, or `None` if any step is missing.
fn text_at<'a, N: NodeQuery<'a>>(scope: N, path: &[Marker]) -> Option<String> {
    path.iter()
        .try_fold(scope, |node, marker| node.find(*marker))
        .map(|node| node.visible_text())
}

fn read_footer<'a, N: NodeQuery<'a>>(footer: N) -> FooterInfo {
    FooterInfo {
        posted: text_at(footer, &[markers::POSTED_TIME]),
        easy_apply: footer.has_text_node(|text| EASY_APPLY_RE.is_match(text)),
        promoted: footer.has_text_node(|text| PROMOTED_RE.is_match(text)),
    }
}
