use serde::{Deserialize, Deserializer, Serialize};

/// One job listing as returned by the search collaborator.
///
/// Field names follow the collaborator's JSON. Postings are never mutated after decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_title: String,
    pub company_name: String,
    pub country_code: String,
    #[serde(deserialize_with = "salary_as_text")]
    pub base_salary: String,
    pub job_summary: String,
    /// Relevance in [0, 1], opaque to us.
    pub score: f64,
}

impl JobPosting {
    /// Score as a percentage with one decimal place, e.g. `0.95` → `"95.0%"`.
    pub fn score_percent(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }
}

/// Salaries arrive either as display strings (`"$120,000/year"`) or bare numbers.
fn salary_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Salary {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Salary::deserialize(deserializer)? {
        Salary::Text(s) => s,
        Salary::Number(n) => n.to_string(),
    })
}
