use reqwest::{Client, Response, Url};
use serde::de::{self, DeserializeOwned};
use serde_json::Value;

use super::ApiError;
use crate::config::AppConfig;
use crate::model::{DetectionRecord, Doctor};

const DOCTORS_PATH: &str = "admin/doctors";
const DETECTIONS_PATH: &str = "admin/detection-history";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the admin endpoints of the detection platform API.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("dermadmin/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.list(DOCTORS_PATH).await
    }

    pub async fn delete_doctor(&self, id: &str) -> Result<(), ApiError> {
        self.delete(DOCTORS_PATH, id).await
    }

    pub async fn list_detections(&self) -> Result<Vec<DetectionRecord>, ApiError> {
        self.list(DETECTIONS_PATH).await
    }

    pub async fn delete_detection(&self, id: &str) -> Result<(), ApiError> {
        self.delete(DETECTIONS_PATH, id).await
    }

    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let url = Url::parse(url).map_err(|_| ApiError::InvalidUrl(url.to_string()))?;
        log::debug!("GET {url}");
        let response = ensure_success(self.http.get(url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path, None)?;
        log::info!("GET {url}");
        let response = ensure_success(self.http.get(url).send().await?).await?;
        let body = response.text().await?;
        parse_list(&body)
    }

    async fn delete(&self, path: &str, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path, Some(id))?;
        log::info!("DELETE {url}");
        ensure_success(self.http.delete(url).send().await?).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str, id: Option<&str>) -> Result<Url, ApiError> {
        let raw = format!("{}/{path}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw.clone()))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(raw))?
                .push(id);
        }
        Ok(url)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    });
    log::warn!("API responded with {status}: {message}");
    Err(ApiError::Status { status, message })
}

/// Pulls a human readable message out of an error body: the `message` or
/// `error` field of a JSON object, or else the body text itself.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        let field = ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str));
        if let Some(message) = field {
            return Some(message.to_string());
        }
    }

    let mut message: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    if body.chars().count() > MAX_ERROR_BODY_CHARS {
        message.push('…');
    }
    Some(message)
}

/// Accepts either a bare JSON array or an object wrapping it in `data`.
/// Records that fail to decode are skipped so one bad document does not hide
/// the rest of the list.
fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                let reason = ["message", "error"]
                    .iter()
                    .find_map(|key| fields.get(*key).and_then(Value::as_str))
                    .unwrap_or("response has no `data` array");
                return Err(ApiError::Decode(de::Error::custom(reason)));
            }
        },
        _ => return Err(ApiError::Decode(de::Error::custom("expected a list of records"))),
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping record {index} of {total}: {err}");
                None
            }
        })
        .collect();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AdminClient {
        let config = AppConfig {
            api_base_url: format!("{}/api", server.uri()),
            ..AppConfig::default()
        };
        AdminClient::new(&config).unwrap()
    }

    fn doctor_json(id: &str, name: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "email": format!("{id}@clinic.test"),
            "qualification": "MD",
            "experience": 4,
            "location": "Chennai",
            "createdAt": "2024-02-10T09:30:00Z"
        })
    }

    #[tokio::test]
    async fn lists_doctors_in_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                doctor_json("b", "Dr. Bose"),
                doctor_json("a", "Dr. Anand"),
            ])))
            .mount(&server)
            .await;

        let doctors = client_for(&server).list_doctors().await.unwrap();
        let ids: Vec<_> = doctors.iter().map(|doctor| doctor.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn lists_detections_from_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/detection-history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{
                    "_id": "r1",
                    "patientId": {"name": "Asha", "email": "asha@mail.test"},
                    "imageUrl": "https://cdn.test/r1.jpg",
                    "detectedDisease": "Psoriasis",
                    "createdAt": "2024-05-01T00:00:00Z"
                }]
            })))
            .mount(&server)
            .await;

        let records = client_for(&server).list_detections().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].patient_name(), Some("Asha"));
    }

    #[tokio::test]
    async fn delete_targets_the_record_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/admin/doctors/64f0c2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_doctor("64f0c2").await.unwrap();
    }

    #[tokio::test]
    async fn failed_delete_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/admin/detection-history/r9"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "Record not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_detection("r9")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
        assert_eq!(err.to_string(), "Record not found (HTTP 404 Not Found)");
    }

    #[tokio::test]
    async fn malformed_list_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_doctors().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn malformed_record_keeps_its_neighbours() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                doctor_json("a", "Dr. Anand"),
                {"name": "Dr. Nobody", "experience": {"years": 3}},
                doctor_json("c", "Dr. Chen"),
            ])))
            .mount(&server)
            .await;

        let doctors = client_for(&server).list_doctors().await.unwrap();
        let ids: Vec<_> = doctors.iter().map(|doctor| doctor.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn loosely_typed_fields_still_decode() {
        let body = json!([
            doctor_json("a", "Dr. Anand"),
            {"_id": "b", "name": "Dr. Bose", "email": "b@clinic.test",
             "qualification": null, "experience": "5", "location": null},
            doctor_json("c", "Dr. Chen"),
        ])
        .to_string();

        let doctors: Vec<Doctor> = parse_list(&body).unwrap();
        assert_eq!(doctors.len(), 3);
        assert_eq!(doctors[1].experience, 5);
        assert_eq!(doctors[1].created_at, None);
    }

    #[test]
    fn object_without_data_array_is_rejected() {
        let err = parse_list::<Doctor>(r#"{"success":true,"doctors":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().contains("no `data` array"), "{err}");

        let err =
            parse_list::<Doctor>(r#"{"success":false,"message":"Session expired"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().contains("Session expired"), "{err}");

        let err = parse_list::<Doctor>(r#"{"data":{"items":[]}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn fetches_image_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/r1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
            .mount(&server)
            .await;

        let bytes = client_for(&server)
            .fetch_image(&format!("{}/images/r1.jpg", server.uri()))
            .await
            .unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(
            error_message(r#"{"error":"Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
        assert_eq!(error_message("  gateway down ").as_deref(), Some("gateway down"));
        assert_eq!(error_message(""), None);
    }
}
