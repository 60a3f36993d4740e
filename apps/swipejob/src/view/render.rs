//! Search page templates.
//!
//! Skill matches are computed here, per posting, every time a page is built.

use askama::Template;

use crate::models::posting::JobPosting;
use crate::skills::SkillSet;
use crate::view::state::ViewState;

/// Display model for one posting. The matched-skills line is empty when nothing matches.
pub struct JobCard<'a> {
    pub posting: &'a JobPosting,
    pub score_percent: String,
    pub matched_skills: String,
}

impl<'a> JobCard<'a> {
    pub fn new(posting: &'a JobPosting, skills: &SkillSet) -> Self {
        Self {
            posting,
            score_percent: posting.score_percent(),
            matched_skills: skills.matches_in(&posting.job_summary).join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage<'a> {
    pub query: &'a str,
    pub error: Option<&'a str>,
    pub cards: Vec<JobCard<'a>>,
}

impl<'a> SearchPage<'a> {
    pub fn new(view: &'a ViewState, skills: &SkillSet) -> Self {
        Self {
            query: &view.query,
            error: view.error.as_deref(),
            cards: view
                .results
                .iter()
                .map(|posting| JobCard::new(posting, skills))
                .collect(),
        }
    }
}
