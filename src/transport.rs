use log::{debug, error, trace};
use reqwest::blocking::{Client as ReqwestClient, Request};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::configuration::Configuration;
use crate::error::{Error, Result};

/// Flat, string-valued request parameters as the Bot API expects them
/// in a form-encoded body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a typed parameter struct. `None` fields are dropped, numbers
    /// and booleans become their decimal/text form, nested values are sent
    /// as JSON strings.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::other(format!("Cannot encode request parameters: {}", e)))?;

        let Value::Object(fields) = value else {
            return Err(Error::other("Request parameters must be a struct or map"));
        };

        let mut params = Params::new();
        for (key, value) in fields {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
            };
            params.0.insert(key, text);
        }
        Ok(params)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Something that can execute a single Bot API method.
///
/// Implementations return the raw response body of a successful call and
/// report transport and API failures as [`Error`]. Closures with the matching
/// signature implement this trait, which makes stubbing straightforward.
pub trait Transport {
    fn raw(&self, method: &str, params: &Params) -> Result<Vec<u8>>;
}

impl<F> Transport for F
where
    F: Fn(&str, &Params) -> Result<Vec<u8>>,
{
    fn raw(&self, method: &str, params: &Params) -> Result<Vec<u8>> {
        self(method, params)
    }
}

/// Extra information attached to some API errors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before the request can be repeated
    pub retry_after: Option<u64>,
}

/// Envelope every Bot API response is wrapped in
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
    error_code: Option<i64>,
    parameters: Option<ResponseParameters>,
}

impl ApiResponse {
    fn into_error(self, status: u16) -> Error {
        let description = self
            .description
            .unwrap_or_else(|| "Unknown API error".to_string());

        match self.parameters.unwrap_or_default() {
            ResponseParameters {
                retry_after: Some(retry_after),
                ..
            } => Error::FloodControl {
                retry_after,
                description,
            },
            ResponseParameters {
                migrate_to_chat_id: Some(migrate_to_chat_id),
                ..
            } => Error::ChatMigrated {
                migrate_to_chat_id,
                description,
            },
            _ => Error::Api {
                code: self.error_code.unwrap_or(i64::from(status)),
                description,
            },
        }
    }
}

/// Blocking HTTP transport talking to the Bot API server
pub struct HttpTransport {
    client: ReqwestClient,
    /// `{api_url}/bot{token}`, never logged
    endpoint: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport from a validated configuration
    pub fn new(config: &Configuration) -> Result<Self> {
        config.validate()?;

        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.client_options().timeout))
            .build()?;

        Ok(HttpTransport {
            client,
            endpoint: format!("{}/bot{}", config.api_url(), config.bot_token()?),
        })
    }

    /// Build the form-encoded `POST {api_url}/bot{token}/{method}` request
    fn request(&self, method: &str, params: &Params) -> Result<Request> {
        let url = format!("{}/{}", self.endpoint, method);
        self.client
            .post(&url)
            .form(params)
            .build()
            .map_err(|e| Error::Http(e.without_url()))
    }
}

impl Transport for HttpTransport {
    fn raw(&self, method: &str, params: &Params) -> Result<Vec<u8>> {
        debug!("Calling {}", method);
        trace!("{} params: {:?}", method, params);

        let request = self.request(method, params)?;

        // The URL carries the token, strip it from any error we surface
        let response = self.client.execute(request).map_err(|e| {
            let e = e.without_url();
            error!("HTTP request for {} failed: {}", method, e);
            Error::Http(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| Error::Http(e.without_url()))?;

        trace!("{} responded with status {}", method, status);
        check_response(status, &body)
    }
}

/// Validate a raw response against the Bot API envelope and hand back
/// the body of a successful call.
pub(crate) fn check_response(status: u16, body: &[u8]) -> Result<Vec<u8>> {
    match serde_json::from_slice::<ApiResponse>(body) {
        Ok(envelope) if envelope.ok => Ok(body.to_vec()),
        Ok(envelope) => {
            let err = envelope.into_error(status);
            error!("Telegram API returned error: {}", err);
            Err(err)
        }
        Err(_) if !(200..300).contains(&status) => {
            let body = String::from_utf8_lossy(body);
            error!("HTTP error status {}: {}", status, body);
            Err(Error::api(i64::from(status), body))
        }
        Err(e) => {
            error!("Failed to parse API response: {}", e);
            Err(Error::Decode(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample<'a> {
        chat_id: String,
        message_thread_id: i64,
        name: Option<&'a str>,
        disable: bool,
        ids: Vec<i64>,
    }

    #[test]
    fn flattens_typed_params() {
        let params = Params::from_serialize(&Sample {
            chat_id: "-1001".to_string(),
            message_thread_id: 42,
            name: None,
            disable: true,
            ids: vec![1, 2],
        })
        .unwrap();

        assert_eq!(params.keys(), vec!["chat_id", "disable", "ids", "message_thread_id"]);
        assert_eq!(params.get("message_thread_id"), Some("42"));
        assert_eq!(params.get("disable"), Some("true"));
        assert_eq!(params.get("ids"), Some("[1,2]"));
        assert!(!params.contains_key("name"));
    }

    #[test]
    fn rejects_non_struct_params() {
        assert!(matches!(
            Params::from_serialize(&42),
            Err(Error::Other(_))
        ));
    }

    #[test]
    fn request_posts_form_to_method_url() {
        let mut config = Configuration::default();
        config.set_bot_token("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11");
        config.set_api_url("http://localhost:8081/");
        let transport = HttpTransport::new(&config).unwrap();

        let mut params = Params::new();
        params.insert("message_thread_id", "7");
        params.insert("chat_id", "-1001234");
        let request = transport.request("closeForumTopic", &params).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8081/bot123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11/closeForumTopic"
        );
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"chat_id=-1001234&message_thread_id=7");
    }

    #[test]
    fn empty_params_send_empty_form() {
        let mut config = Configuration::default();
        config.set_bot_token("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11");
        let transport = HttpTransport::new(&config).unwrap();

        let request = transport
            .request("getForumTopicIconStickers", &Params::new())
            .unwrap();

        assert!(request.url().path().ends_with("/getForumTopicIconStickers"));
        assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(&b""[..]));
    }

    #[test]
    fn successful_envelope_returns_body() {
        let body = br#"{"ok":true,"result":true}"#;
        assert_eq!(check_response(200, body).unwrap(), body.to_vec());
    }

    #[test]
    fn api_error_carries_code_and_description() {
        let body = br#"{"ok":false,"error_code":400,"description":"Bad Request: TOPIC_NOT_MODIFIED"}"#;
        match check_response(400, body) {
            Err(Error::Api { code, description }) => {
                assert_eq!(code, 400);
                assert_eq!(description, "Bad Request: TOPIC_NOT_MODIFIED");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn flood_control_is_reported() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 7","parameters":{"retry_after":7}}"#;
        assert!(matches!(
            check_response(429, body),
            Err(Error::FloodControl { retry_after: 7, .. })
        ));
    }

    #[test]
    fn chat_migration_is_reported() {
        let body = br#"{"ok":false,"error_code":400,"description":"Bad Request: group chat was upgraded to a supergroup chat","parameters":{"migrate_to_chat_id":-1001234}}"#;
        assert!(matches!(
            check_response(400, body),
            Err(Error::ChatMigrated {
                migrate_to_chat_id: -1001234,
                ..
            })
        ));
    }

    #[test]
    fn non_json_error_page_uses_status() {
        match check_response(502, b"<html>Bad Gateway</html>") {
            Err(Error::Api { code, description }) => {
                assert_eq!(code, 502);
                assert!(description.contains("Bad Gateway"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        assert!(matches!(
            check_response(200, b"{not json"),
            Err(Error::Decode(_))
        ));
    }
}
