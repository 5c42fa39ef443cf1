use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{wire, Entity, Searchable};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "patientId", default)]
    pub patient: Option<PatientLink>,
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub image_url: String,
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub detected_disease: String,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default, deserialize_with = "wire::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The patient reference is populated by the server when it can resolve the
/// patient, otherwise it is left as the raw identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatientLink {
    Profile(PatientRef),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Label(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Scores in [0, 1] are fractions; anything larger is already a percentage.
            Confidence::Score(score) if (0.0..=1.0).contains(score) => {
                write!(f, "{:.1}%", score * 100.0)
            }
            Confidence::Score(score) => write!(f, "{score:.1}%"),
            Confidence::Label(label) => f.write_str(label),
        }
    }
}

impl DetectionRecord {
    pub fn patient_name(&self) -> Option<&str> {
        self.profile()
            .and_then(|patient| patient.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn patient_email(&self) -> Option<&str> {
        self.profile()
            .and_then(|patient| patient.email.as_deref())
            .filter(|email| !email.is_empty())
    }

    /// A zero score reads as "no confidence reported", like an empty label.
    pub fn confidence_label(&self) -> String {
        match &self.confidence {
            Some(Confidence::Label(label)) if label.trim().is_empty() => "Unknown".to_string(),
            Some(Confidence::Score(score)) if *score == 0.0 || score.is_nan() => {
                "Unknown".to_string()
            }
            Some(confidence) => confidence.to_string(),
            None => "Unknown".to_string(),
        }
    }

    fn profile(&self) -> Option<&PatientRef> {
        match &self.patient {
            Some(PatientLink::Profile(patient)) => Some(patient),
            _ => None,
        }
    }
}

impl Entity for DetectionRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for DetectionRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.detected_disease.as_str()];
        fields.extend(self.patient_name());
        fields.extend(self.patient_email());
        fields
    }
}
