// tRPC-over-HTTP envelope with the superjson transformer.
//
// Inputs travel as `{"json": <input>}` (query string for queries, body for
// mutations); results come back as `{"result":{"data":{"json": <output>}}}`
// and failures as `{"error":{"json":{"message": ..}}}`.

use anyhow::{anyhow, bail};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

pub fn envelope<T: Serialize>(input: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(input)?;
    Ok(json!({ "json": value }).to_string())
}

pub fn procedure_url(base: &str, procedure: &str) -> String {
    format!("{base}/{procedure}")
}

/// Decode a response body, surfacing the server's error message if present.
pub fn decode<T: DeserializeOwned>(procedure: &str, body: &str) -> anyhow::Result<T> {
    let mut value: Value = serde_json::from_str(body)
        .map_err(|e| anyhow!("{procedure}: response is not JSON: {e}"))?;
    if let Some(err) = value.get("error") {
        let message = err
            .pointer("/json/message")
            .or_else(|| err.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        bail!("{procedure}: {message}");
    }
    let data = value
        .pointer_mut("/result/data/json")
        .map(Value::take)
        .ok_or_else(|| anyhow!("{procedure}: missing result.data.json"))?;
    serde_json::from_value(data).map_err(|e| anyhow!("{procedure}: unexpected result shape: {e}"))
}
