use gloo_net::http::Request;
use log::info;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::config;
use crate::contact::form_state::{subject_for, ContactFields, SubmissionOutcome};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RelayError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unreadable relay response: {0}")]
    Decode(String),
    #[error("Could not build form body")]
    Body,
}

/// Body of one submission, in the field order the relay expects.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub name: String,
    pub tel: String,
    pub email: String,
    pub message: String,
}

impl RelayPayload {
    pub fn from_fields(fields: &ContactFields) -> Self {
        Self {
            access_key: config::RELAY_ACCESS_KEY.to_string(),
            subject: subject_for(&fields.name),
            from_name: config::RELAY_FROM_NAME.to_string(),
            name: fields.name.clone(),
            tel: fields.tel.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        }
    }

    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("access_key", &self.access_key),
            ("subject", &self.subject),
            ("from_name", &self.from_name),
            ("name", &self.name),
            ("tel", &self.tel),
            ("email", &self.email),
            ("message", &self.message),
        ]
    }

    fn to_form_data(&self) -> Result<FormData, RelayError> {
        let form = FormData::new().map_err(|_| RelayError::Body)?;
        for (key, value) in self.entries() {
            form.append_with_str(key, value).map_err(|_| RelayError::Body)?;
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<RelayResponse> for SubmissionOutcome {
    fn from(response: RelayResponse) -> Self {
        if response.success {
            SubmissionOutcome::Accepted
        } else {
            let message = response.message.filter(|m| !m.trim().is_empty());
            SubmissionOutcome::Rejected(message)
        }
    }
}

/// Posts one submission. Exactly one request per call, no retry.
pub async fn submit(payload: &RelayPayload) -> Result<SubmissionOutcome, RelayError> {
    let body = payload.to_form_data()?;
    let response = Request::post(config::get_relay_url())
        .body(body)
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    info!("Relay answered with status {}", response.status());

    let parsed = response
        .json::<RelayResponse>()
        .await
        .map_err(|e| RelayError::Decode(e.to_string()))?;
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "  Jan  ".to_string(),
            tel: "600100200".to_string(),
            email: "jan@example.com".to_string(),
            message: "Kuchnia w kształcie L".to_string(),
        }
    }

    #[test]
    fn payload_carries_static_and_user_fields() {
        let payload = RelayPayload::from_fields(&fields());
        let keys: Vec<_> = payload.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["access_key", "subject", "from_name", "name", "tel", "email", "message"]
        );
        assert_eq!(payload.subject, "Od Jan");
        assert_eq!(payload.access_key, config::RELAY_ACCESS_KEY);
        assert_eq!(payload.from_name, "Nowy Formularz");
        assert_eq!(payload.name, "  Jan  ");
        assert_eq!(payload.message, "Kuchnia w kształcie L");
    }

    #[test]
    fn success_response_is_accepted() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success":true,"message":"Email sent"}"#).unwrap();
        assert_eq!(SubmissionOutcome::from(response), SubmissionOutcome::Accepted);
    }

    #[test]
    fn failure_response_keeps_server_message() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success":false,"message":"X"}"#).unwrap();
        assert_eq!(
            SubmissionOutcome::from(response),
            SubmissionOutcome::Rejected(Some("X".to_string()))
        );
    }

    #[test]
    fn failure_without_message_falls_back() {
        let bare: RelayResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(SubmissionOutcome::from(bare), SubmissionOutcome::Rejected(None));

        let blank: RelayResponse =
            serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
        assert_eq!(SubmissionOutcome::from(blank), SubmissionOutcome::Rejected(None));
    }

    #[test]
    fn response_without_success_flag_does_not_decode() {
        assert!(serde_json::from_str::<RelayResponse>(r#"{"message":"?"}"#).is_err());
    }
}
