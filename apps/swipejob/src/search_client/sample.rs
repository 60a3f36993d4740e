//! Offline search backend for local development (`ENABLE_LOCAL_TESTING=true`).
//!
//! Returns the same fixed postings for every query so the UI can be exercised
//! without the remote matching API running.

use async_trait::async_trait;
use tracing::info;

use super::{SearchCollaborator, SearchError};
use crate::models::posting::JobPosting;

pub struct SampleSearch;

#[async_trait]
impl SearchCollaborator for SampleSearch {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, SearchError> {
        info!("Returning sample postings for query {query:?}");
        Ok(sample_postings())
    }
}

pub fn sample_postings() -> Vec<JobPosting> {
    [
        (
            0.95,
            "Software Engineer",
            "TechCorp",
            "$120,000/year",
            "UK",
            "Develop web applications using Python and JavaScript, focusing on scalable backend systems and user-friendly interfaces. Collaborate with cross-functional teams to deliver high-quality software solutions.",
        ),
        (
            0.90,
            "Backend Engineer",
            "CloudSys",
            "€95,000/year",
            "DE",
            "Design and implement scalable APIs using Node.js and Express, ensuring high performance and reliability for cloud-based applications.",
        ),
        (
            0.88,
            "Data Scientist",
            "Datacorp",
            "$130,000/year",
            "US",
            "Analyze large datasets to provide actionable insights, build machine learning models using Python and TensorFlow, and present findings to stakeholders.",
        ),
        (
            0.85,
            "Machine Learning Engineer",
            "InfraTech",
            "$140,000/year",
            "US",
            "Develop AI models with TensorFlow and PyTorch, optimize algorithms for real-time data processing, and deploy solutions on AWS.",
        ),
    ]
    .into_iter()
    .map(
        |(score, title, company, salary, country, summary)| JobPosting {
            job_title: title.to_string(),
            company_name: company.to_string(),
            country_code: country.to_string(),
            base_salary: salary.to_string(),
            job_summary: summary.to_string(),
            score,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillSet;

    #[tokio::test]
    async fn test_sample_search_ignores_query() {
        let a = SampleSearch.search("Rust").await.unwrap();
        let b = SampleSearch.search("").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_sample_postings_sorted_by_score() {
        let postings = sample_postings();
        assert!(postings.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_sample_backend_posting_highlights_node_and_express() {
        let skills = SkillSet::default();
        let backend = &sample_postings()[1];
        assert_eq!(skills.matches_in(&backend.job_summary), vec!["Node.js", "Express"]);
    }
}
