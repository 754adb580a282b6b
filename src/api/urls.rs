//! URL building utilities for API endpoints

use std::collections::{BTreeMap, BTreeSet};
use url::Url;

use crate::error::ApiError;

use super::endpoint::Endpoint;
use super::request::RequestParams;

/// Characters allowed in a substituted path segment: the RFC 3986
/// unreserved set.
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// Fills the `{name}` placeholders of a path template.
///
/// Fails with `MalformedRequest` when a placeholder has no value, when a
/// value is empty or has characters outside the unreserved set, or when a
/// supplied parameter is not used by the template.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use geoguessr_api::api::render_path;
///
/// let mut params = BTreeMap::new();
/// params.insert("token".to_string(), "6G9h2UPctmUmUtaa".to_string());
/// let path = render_path("challenge_highscores", "/results/highscores/{token}", &params).unwrap();
/// assert_eq!(path, "/results/highscores/6G9h2UPctmUmUtaa");
/// ```
pub fn render_path(
    endpoint_name: &str,
    template: &str,
    path_params: &BTreeMap<String, String>,
) -> Result<String, ApiError> {
    let mut rendered = String::with_capacity(template.len());
    let mut used = BTreeSet::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            ApiError::malformed_request(endpoint_name, "unterminated placeholder in path template")
        })?;
        let name = &after[..end];

        let value = path_params.get(name).ok_or_else(|| {
            ApiError::malformed_request(endpoint_name, format!("missing path parameter '{name}'"))
        })?;
        if value.is_empty() {
            return Err(ApiError::malformed_request(
                endpoint_name,
                format!("path parameter '{name}' is empty"),
            ));
        }
        if let Some(bad) = value.chars().find(|c| !is_unreserved(*c)) {
            return Err(ApiError::malformed_request(
                endpoint_name,
                format!("path parameter '{name}' contains invalid character {bad:?}"),
            ));
        }

        rendered.push_str(value);
        used.insert(name);
        rest = &after[end + 1..];
    }
    rendered.push_str(rest);

    if let Some(unused) = path_params.keys().find(|k| !used.contains(k.as_str())) {
        return Err(ApiError::malformed_request(
            endpoint_name,
            format!("unknown path parameter '{unused}'"),
        ));
    }

    Ok(rendered)
}

/// Builds a percent-encoded query string from ordered pairs. Spaces become
/// `%20`, reserved characters such as `&` and `=` are escaped.
///
/// # Example
/// ```
/// use geoguessr_api::api::build_query;
///
/// let query = build_query([("q", "famous places & more")]);
/// assert_eq!(query, "q=famous%20places%20%26%20more");
/// ```
pub fn build_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the complete URL of one endpoint call.
///
/// Query order: the endpoint's fixed parameters, then caller parameters,
/// then the pagination cursor.
pub fn build_endpoint_url<R>(
    base_url: &str,
    endpoint: &Endpoint<R>,
    params: &RequestParams,
    cursor: Option<&str>,
) -> Result<Url, ApiError> {
    let path = render_path(endpoint.name, endpoint.path, params.path_params())?;

    let cursor_pair = match (cursor, endpoint.cursor_param) {
        (None, _) => None,
        (Some(value), Some(name)) => Some((name, value)),
        (Some(_), None) => {
            return Err(ApiError::malformed_request(
                endpoint.name,
                "endpoint does not accept a pagination cursor",
            ));
        }
    };

    let mut pairs: Vec<(&str, &str)> = endpoint.fixed_query.to_vec();
    pairs.extend(
        params
            .query_params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    pairs.extend(cursor_pair);
    let query = build_query(pairs);

    let mut raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    if !query.is_empty() {
        raw.push('?');
        raw.push_str(&query);
    }

    Url::parse(&raw).map_err(|e| {
        ApiError::malformed_request(endpoint.name, format!("invalid URL '{raw}': {e}"))
    })
}

/// Extracts a token from either a bare token or a full URL such as
/// `https://www.geoguessr.com/challenge/6G9h2UPctmUmUtaa`.
///
/// # Example
/// ```
/// use geoguessr_api::api::extract_token;
///
/// assert_eq!(extract_token("https://www.geoguessr.com/challenge/6G9h2UPctmUmUtaa"), "6G9h2UPctmUmUtaa");
/// assert_eq!(extract_token("6G9h2UPctmUmUtaa"), "6G9h2UPctmUmUtaa");
/// ```
pub fn extract_token(input: &str) -> &str {
    let trimmed = input.trim();
    let without_query = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(without_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::Host;

    const HIGHSCORES: Endpoint<()> =
        Endpoint::get("highscores", Host::Web, "/results/highscores/{token}");
    const FEED: Endpoint<()> =
        Endpoint::get("feed", Host::Web, "/api/v4/feed/friends").paginated("paginationToken");
    const GAME: Endpoint<()> =
        Endpoint::get("game", Host::Web, "/api/v3/games/{token}").with_query(&[("client", "web")]);

    fn params_with(name: &str, value: &str) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(name.to_string(), value.to_string());
        params
    }

    #[test]
    fn test_render_path_substitutes_token_exactly() {
        let path = render_path(
            "highscores",
            "/results/highscores/{token}",
            &params_with("token", "6G9h2UPctmUmUtaa"),
        )
        .unwrap();
        assert_eq!(path, "/results/highscores/6G9h2UPctmUmUtaa");
    }

    #[test]
    fn test_render_path_multiple_placeholders() {
        let mut params = BTreeMap::new();
        params.insert("playerId".to_string(), "p1".to_string());
        params.insert("duelId".to_string(), "d-2".to_string());
        params.insert("roundNumber".to_string(), "3".to_string());
        let path = render_path(
            "replay",
            "/api/replays/{playerId}/{duelId}/{roundNumber}",
            &params,
        )
        .unwrap();
        assert_eq!(path, "/api/replays/p1/d-2/3");
    }

    #[test]
    fn test_render_path_missing_parameter() {
        let err = render_path("highscores", "/results/highscores/{token}", &BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedRequest { .. }));
        assert!(err.to_string().contains("missing path parameter 'token'"));
    }

    #[test]
    fn test_render_path_rejects_invalid_characters() {
        for bad in ["a/b", "a b", "a?b", "a#b", "a%2Fb", "ä", ""] {
            let err = render_path(
                "highscores",
                "/results/highscores/{token}",
                &params_with("token", bad),
            )
            .unwrap_err();
            assert!(
                matches!(err, ApiError::MalformedRequest { .. }),
                "value {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_render_path_rejects_unknown_parameter() {
        let mut params = params_with("token", "abc");
        params.insert("tokn".to_string(), "abc".to_string());
        let err = render_path("highscores", "/results/highscores/{token}", &params).unwrap_err();
        assert!(err.to_string().contains("unknown path parameter 'tokn'"));
    }

    #[test]
    fn test_build_query_percent_encodes() {
        assert_eq!(build_query([("q", "a b&c=d")]), "q=a%20b%26c%3Dd");
        assert_eq!(build_query(std::iter::empty()), "");
    }

    #[test]
    fn test_build_endpoint_url_with_fixed_query() {
        let params = RequestParams::new().path("token", "XB9wycuZvDrhl7cB");
        let url = build_endpoint_url("https://www.geoguessr.com/", &GAME, &params, None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.geoguessr.com/api/v3/games/XB9wycuZvDrhl7cB?client=web"
        );
    }

    #[test]
    fn test_build_endpoint_url_encodes_free_text_query() {
        let params = RequestParams::new()
            .path("token", "abc")
            .query("q", "famous places & more");
        let url = build_endpoint_url("http://localhost:8080", &HIGHSCORES, &params, None).unwrap();
        assert_eq!(url.path(), "/results/highscores/abc");
        assert_eq!(url.query(), Some("q=famous%20places%20%26%20more"));
    }

    #[test]
    fn test_build_endpoint_url_appends_cursor_last() {
        let params = RequestParams::new().query("limit", "10");
        let url =
            build_endpoint_url("https://www.geoguessr.com", &FEED, &params, Some("abc+/=")).unwrap();
        assert_eq!(url.query(), Some("limit=10&paginationToken=abc%2B%2F%3D"));
    }

    #[test]
    fn test_build_endpoint_url_rejects_cursor_on_plain_endpoint() {
        let params = RequestParams::new().path("token", "abc");
        let err = build_endpoint_url("https://www.geoguessr.com", &HIGHSCORES, &params, Some("x"))
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedRequest { .. }));
    }

    #[test]
    fn test_extract_token_variants() {
        assert_eq!(
            extract_token("https://www.geoguessr.com/challenge/6G9h2UPctmUmUtaa/"),
            "6G9h2UPctmUmUtaa"
        );
        assert_eq!(
            extract_token("https://www.geoguessr.com/game/XB9wycuZvDrhl7cB?client=web"),
            "XB9wycuZvDrhl7cB"
        );
        assert_eq!(extract_token("  abc  "), "abc");
    }
}
