use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{wire, Entity, Searchable};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub qualification: String,
    #[serde(default, deserialize_with = "wire::whole_years")]
    pub experience: u32,
    #[serde(default, deserialize_with = "wire::text_or_empty")]
    pub location: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default, deserialize_with = "wire::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Doctor {
    pub fn gender_label(&self) -> &str {
        self.gender
            .as_deref()
            .filter(|gender| !gender.trim().is_empty())
            .unwrap_or("Not specified")
    }
}

impl Entity for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Doctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.qualification.as_str(),
            self.location.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_document() {
        let doctor: Doctor = serde_json::from_str(
            r#"{
                "_id": "64f0c2",
                "name": "Dr. Lee",
                "email": "lee@clinic.test",
                "qualification": "MBBS, MD Dermatology",
                "experience": 12,
                "location": "Pune",
                "profilePic": "https://cdn.test/lee.png",
                "createdAt": "2024-03-05T10:15:00.000Z",
                "__v": 0
            }"#,
        )
        .unwrap();

        assert_eq!(doctor.id, "64f0c2");
        assert_eq!(doctor.experience, 12);
        assert_eq!(doctor.profile_pic.as_deref(), Some("https://cdn.test/lee.png"));
        assert_eq!(doctor.gender_label(), "Not specified");
    }

    #[test]
    fn searches_name_email_qualification_and_location() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"_id":"1","name":"Dr. Lee","email":"lee@x.test","qualification":"MD",
                "location":"Goa","gender":"female","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(doctor.search_fields(), vec!["Dr. Lee", "lee@x.test", "MD", "Goa"]);
        assert_eq!(doctor.gender_label(), "female");
    }

    #[test]
    fn loose_fields_do_not_reject_the_document() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"_id":"2","name":"Dr. Rao","email":"rao@x.test","qualification":null,
                "experience":"5","location":null,"gender":null}"#,
        )
        .unwrap();

        assert_eq!(doctor.experience, 5);
        assert_eq!(doctor.qualification, "");
        assert_eq!(doctor.location, "");
        assert_eq!(doctor.created_at, None);
        assert_eq!(doctor.gender_label(), "Not specified");

        let doctor: Doctor =
            serde_json::from_str(r#"{"_id":"3","name":"Dr. Das","experience":null}"#).unwrap();
        assert_eq!(doctor.experience, 0);
        assert_eq!(doctor.email, "");
    }
}
