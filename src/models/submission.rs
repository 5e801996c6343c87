use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{MovieRecommendation, Sentiment};

/// Raw values as typed into the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub feeling: String,
    #[serde(default)]
    pub gender: String,
    /// Accepted as text or as a JSON number; checked by `validate`
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAge {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawAge>::deserialize(deserializer)? {
        Some(RawAge::Text(text)) => text,
        Some(RawAge::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// A rejected form field
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please describe your feeling.")]
    MissingFeeling,
    #[error("Please select your gender.")]
    MissingGender,
    #[error("Please enter a valid age.")]
    InvalidAge,
}

impl ValidationError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::MissingFeeling => "feeling",
            ValidationError::MissingGender => "gender",
            ValidationError::InvalidAge => "age",
        }
    }
}

/// Who asked for a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user: UserProfile,
    pub feeling: String,
}

impl SubmissionForm {
    /// Checks fields in form order and reports the first problem found
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        let name = self.name.trim();
        let feeling = self.feeling.trim();
        let gender = self.gender.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if feeling.is_empty() {
            return Err(ValidationError::MissingFeeling);
        }
        if gender.is_empty() {
            return Err(ValidationError::MissingGender);
        }
        let age = parse_age(self.age.trim()).ok_or(ValidationError::InvalidAge)?;

        Ok(Submission {
            user: UserProfile {
                name: name.to_string(),
                age,
                gender: gender.to_string(),
            },
            feeling: feeling.to_string(),
        })
    }
}

/// Digits only, strictly positive. Signs, decimals and overflow are rejected.
fn parse_age(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|age| *age > 0)
}

/// Where a submission currently is
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Classifying,
    Fetching,
    Presenting,
    Persisting,
}

/// Snapshot of the submission lifecycle for the input form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub phase: SubmissionPhase,
    pub busy: bool,
    pub message: Option<String>,
}

impl From<SubmissionPhase> for SubmissionStatus {
    fn from(phase: SubmissionPhase) -> Self {
        let message = match phase {
            SubmissionPhase::Fetching => Some("Loading recommendations...".to_string()),
            _ => None,
        };
        Self {
            phase,
            busy: phase != SubmissionPhase::Idle,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A message box shown after a submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn no_results() -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "No Results".to_string(),
            message: "No movie recommendations found. Please try again later.".to_string(),
        }
    }

    pub fn save_failed(reason: impl std::fmt::Display) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Database Error".to_string(),
            message: format!("Could not save recommendations: {}", reason),
        }
    }
}

/// Everything the interface needs to render one submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionReport {
    pub submission_id: Uuid,
    pub sentiment: Sentiment,
    pub mood_banner: String,
    pub recommendations: Vec<MovieRecommendation>,
    pub notices: Vec<Notice>,
    /// Number of rows written to history
    pub saved: u64,
}

impl SubmissionReport {
    pub fn new(submission_id: Uuid, sentiment: Sentiment) -> Self {
        Self {
            submission_id,
            sentiment,
            mood_banner: sentiment.mood_banner().to_string(),
            recommendations: Vec::new(),
            notices: Vec::new(),
            saved: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, feeling: &str, gender: &str, age: &str) -> SubmissionForm {
        SubmissionForm {
            name: name.to_string(),
            feeling: feeling.to_string(),
            gender: gender.to_string(),
            age: age.to_string(),
        }
    }

    #[test]
    fn test_age_accepts_json_number() {
        let form: SubmissionForm = serde_json::from_value(serde_json::json!({
            "name": "Kabir", "feeling": "fine", "gender": "Male", "age": 30
        }))
        .unwrap();
        assert_eq!(form.age, "30");
        assert_eq!(form.validate().unwrap().user.age, 30);

        for age in [serde_json::json!(-5), serde_json::json!(2.5)] {
            let form: SubmissionForm = serde_json::from_value(serde_json::json!({
                "name": "Kabir", "feeling": "fine", "gender": "Male", "age": age
            }))
            .unwrap();
            assert_eq!(form.validate(), Err(ValidationError::InvalidAge));
        }
    }

    #[test]
    fn test_age_null_or_missing_is_invalid() {
        let form: SubmissionForm = serde_json::from_str(
            r#"{"name": "Kabir", "feeling": "fine", "gender": "Male", "age": null}"#,
        )
        .unwrap();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));

        let form: SubmissionForm =
            serde_json::from_str(r#"{"name": "Kabir", "feeling": "fine", "gender": "Male"}"#)
                .unwrap();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn test_validate_trims_fields() {
        let submission = form("  Asha ", " happy today ", " Female", " 27 ").validate().unwrap();
        assert_eq!(submission.user.name, "Asha");
        assert_eq!(submission.user.gender, "Female");
        assert_eq!(submission.user.age, 27);
        assert_eq!(submission.feeling, "happy today");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(form("", "", "", "").validate(), Err(ValidationError::MissingName));
        assert_eq!(form("A", "  ", "", "").validate(), Err(ValidationError::MissingFeeling));
        assert_eq!(form("A", "ok", "", "3").validate(), Err(ValidationError::MissingGender));
    }

    #[test]
    fn test_validate_rejects_bad_ages() {
        for age in ["abc", "-5", "0", "", "12.5", "+4", "99999999999"] {
            let err = form("A", "fine", "Other", age).validate().unwrap_err();
            assert_eq!(err, ValidationError::InvalidAge, "age {:?}", age);
            assert_eq!(err.field(), "age");
        }
    }

    #[test]
    fn test_status_from_phase() {
        let idle = SubmissionStatus::from(SubmissionPhase::Idle);
        assert!(!idle.busy);
        assert_eq!(idle.message, None);

        let fetching = SubmissionStatus::from(SubmissionPhase::Fetching);
        assert!(fetching.busy);
        assert_eq!(fetching.message.as_deref(), Some("Loading recommendations..."));
    }

    #[test]
    fn test_save_failed_notice() {
        let notice = Notice::save_failed("disk I/O error");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Could not save recommendations: disk I/O error");
    }
}
