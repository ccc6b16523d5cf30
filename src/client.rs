use log::error;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Params, Transport};

/// Telegram bot client.
///
/// Every method issues exactly one request through the transport `T` and
/// keeps no state between calls. The default transport talks HTTP to the
/// Bot API; tests and embedders can supply their own via
/// [`Bot::with_transport`].
#[derive(Debug)]
pub struct Bot<T = HttpTransport> {
    transport: T,
}

/// Successful response envelope, `{"result": ...}`
#[derive(Debug, Deserialize)]
struct Envelope<R> {
    #[serde(alias = "Result")]
    result: R,
}

impl Bot<HttpTransport> {
    /// Create a bot backed by the HTTP transport
    pub fn new(config: Configuration) -> Result<Self> {
        Ok(Bot {
            transport: HttpTransport::new(&config)?,
        })
    }

    /// Create a bot from `TELEGRAMA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Configuration::from_env()?)
    }
}

impl<T: Transport> Bot<T> {
    /// Create a bot on top of an arbitrary transport
    pub fn with_transport(transport: T) -> Self {
        Bot { transport }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call a Bot API method and return the raw response body
    pub fn raw(&self, method: &str, params: &Params) -> Result<Vec<u8>> {
        self.transport.raw(method, params)
    }

    /// Call a method and decode the `result` field of the response
    pub(crate) fn call<R: DeserializeOwned>(&self, method: &str, params: &Params) -> Result<R> {
        let data = self.raw(method, params)?;

        let envelope: Envelope<R> = serde_json::from_slice(&data).map_err(|e| {
            error!("Failed to decode {} response: {}", method, e);
            Error::Decode(e)
        })?;

        Ok(envelope.result)
    }

    /// Call a method that only signals success
    pub(crate) fn exec(&self, method: &str, params: &Params) -> Result<()> {
        self.raw(method, params).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replying(body: &'static str) -> Bot<impl Transport> {
        Bot::with_transport(move |_: &str, _: &Params| -> Result<Vec<u8>> {
            Ok(body.as_bytes().to_vec())
        })
    }

    #[test]
    fn decodes_lowercase_and_capitalized_result() {
        let bot = replying(r#"{"ok":true,"result":[1,2,3]}"#);
        let numbers: Vec<i64> = bot.call("getNumbers", &Params::new()).unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);

        let bot = replying(r#"{"Result":"done"}"#);
        let text: String = bot.call("getText", &Params::new()).unwrap();
        assert_eq!(text, "done");
    }

    #[test]
    fn missing_result_is_decode_error() {
        let bot = replying(r#"{"ok":true}"#);
        let result: Result<bool> = bot.call("getFlag", &Params::new());
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn exec_ignores_payload() {
        let bot = replying("not even json");
        assert!(bot.exec("closeForumTopic", &Params::new()).is_ok());
    }

    #[test]
    fn new_rejects_missing_token() {
        assert!(matches!(
            Bot::new(Configuration::default()),
            Err(Error::Configuration(_))
        ));
    }
}
