use anyhow::{Context, Error, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Appends each segment percent-encoded, so a segment can never introduce
/// extra path levels, a query or a fragment.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Invalid base URL '{}'", base_url))?;
    url.path_segments_mut()
        .map_err(|_| Error::msg(format!("Base URL '{}' cannot take a path", base_url)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

pub async fn make_request(client: &Client, url: Url, params: &[(&str, &str)]) -> Result<Value> {
    let res = client.get(url).query(params).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|err| Error::msg(format!("{}: {}", error_msg, err))),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
