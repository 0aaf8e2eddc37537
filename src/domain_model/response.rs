use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A response as received from the remote API, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn json_value(status: StatusCode, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Server-provided `message` field. Validation pipes on the API side send an
    /// array of messages, which are joined.
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(&self.body).ok()?;
        match value.get("message")? {
            serde_json::Value::String(message) => Some(message.clone()),
            serde_json::Value::Array(messages) => {
                let joined = messages
                    .iter()
                    .filter_map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                (!joined.is_empty()).then_some(joined)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_is_read_from_string_or_array() {
        let single = HttpResponse::json_value(
            StatusCode::CONFLICT,
            &json!({ "message": "email already used" }),
        );
        assert_eq!(single.message().as_deref(), Some("email already used"));

        let many = HttpResponse::json_value(
            StatusCode::BAD_REQUEST,
            &json!({ "message": ["nom is required", "prix must be positive"] }),
        );
        assert_eq!(
            many.message().as_deref(),
            Some("nom is required, prix must be positive")
        );

        let plain = HttpResponse::new(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(plain.message(), None);
        assert_eq!(plain.text(), "upstream down");
    }
}
