//! Per-call request inputs

use serde::Serialize;
use std::collections::BTreeMap;

/// Inputs of a single endpoint call: path parameters, query parameters and
/// an optional JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    path: BTreeMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value substituted for `{name}` in the endpoint's path template.
    pub fn path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    /// Appends a free-text query parameter. Values are percent-encoded when
    /// the URL is built.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request body.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn path_params(&self) -> &BTreeMap<String, String> {
        &self.path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        time_limit: u32,
    }

    #[test]
    fn test_builder_collects_everything() {
        let params = RequestParams::new()
            .path("token", "abc")
            .query("q", "famous places")
            .query("q", "second")
            .json_body(&Body { time_limit: 60 })
            .unwrap();

        assert_eq!(params.path_params().get("token").map(String::as_str), Some("abc"));
        assert_eq!(params.query_params().len(), 2);
        assert_eq!(params.body().unwrap()["timeLimit"], 60);
    }

    #[test]
    fn test_later_path_value_replaces_earlier() {
        let params = RequestParams::new().path("token", "a").path("token", "b");
        assert_eq!(params.path_params().len(), 1);
        assert_eq!(params.path_params()["token"], "b");
    }
}
