use futures::future::join_all;
use geoguessr_api::ApiError;
use geoguessr_api::api::{
    Credentials, HttpResponse, RequestParams, TransportError, catalog, extract_token,
};
use geoguessr_api::testing_utils::{MockTransport, fixtures, mock_client};
use http::StatusCode;

#[tokio::test]
async fn test_authenticated_endpoints_make_no_call_without_credentials() {
    let client = mock_client(MockTransport::respond_with(200, "{}"));

    let profile = client
        .invoke(&catalog::PROFILE, &RequestParams::new(), None)
        .await;
    let friends = client
        .invoke(&catalog::FRIENDS, &RequestParams::new(), None)
        .await;
    let duel = client
        .invoke(
            &catalog::DUEL,
            &RequestParams::new().path("gameId", "d1"),
            None,
        )
        .await;

    for err in [profile.unwrap_err(), friends.unwrap_err(), duel.unwrap_err()] {
        assert!(err.is_unauthenticated());
        assert_eq!(err.status(), None);
    }
    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn test_repeated_calls_give_equal_results() {
    let client = mock_client(MockTransport::respond_with(200, fixtures::PROFILE));
    let credentials = Credentials::new("cookie");

    let first = client
        .invoke(&catalog::PROFILE, &RequestParams::new(), Some(&credentials))
        .await
        .unwrap();
    let second = client
        .invoke(&catalog::PROFILE, &RequestParams::new(), Some(&credentials))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
    assert_eq!(client.transport().call_count(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_get_their_own_results() {
    let client = mock_client(MockTransport::new(|request| {
        let token = request.url.path().rsplit('/').next().unwrap_or_default().to_string();
        let body = format!(
            r#"{{"map":{{"name":"{token}"}},"creator":{{"nick":"host","countryCode":"fi"}},"created":"2024-05-01T10:00:00Z","roundCount":5,"timeLimit":0,"forbidMoving":false,"forbidRotating":false,"forbidZooming":false}}"#
        );
        Ok(HttpResponse::new(StatusCode::OK, body))
    }));
    let credentials = Credentials::new("cookie");

    let tokens: Vec<String> = (0..16).map(|i| format!("challenge{i}")).collect();
    let calls = tokens.iter().map(|token| {
        let params = RequestParams::new().path("token", token.clone());
        let client = &client;
        let credentials = &credentials;
        async move {
            client
                .invoke(&catalog::CHALLENGE, &params, Some(credentials))
                .await
        }
    });
    let results = join_all(calls).await;

    for (token, result) in tokens.iter().zip(results) {
        assert_eq!(&result.unwrap().map.name, token);
    }
    assert_eq!(client.transport().call_count(), tokens.len());
}

#[tokio::test]
async fn test_transport_errors_are_not_retried() {
    let client = mock_client(MockTransport::fail_with(TransportError::Connect(
        "connection refused".to_string(),
    )));

    let err = client
        .invoke(&catalog::SUBSCRIPTION_PLANS, &RequestParams::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(client.transport().call_count(), 1);
}

#[tokio::test]
async fn test_feed_pagination_follows_cursors() {
    let client = mock_client(MockTransport::new(|request| {
        let body = match request
            .url
            .query_pairs()
            .find(|(name, _)| name == "paginationToken")
            .map(|(_, value)| value.into_owned())
            .as_deref()
        {
            None => fixtures::FEED_PAGE_1,
            Some("cursor-2") => fixtures::FEED_PAGE_2,
            Some(_) => fixtures::FEED_PAGE_LAST,
        };
        Ok(HttpResponse::new(StatusCode::OK, body))
    }));
    let credentials = Credentials::new("cookie");

    let pages = client
        .collect_pages(
            &catalog::FRIENDS_FEED,
            &RequestParams::new(),
            Some(&credentials),
            10,
        )
        .await
        .unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[1].entries[0].user.nick, "Bob");
    assert_eq!(client.transport().call_count(), 3);
}

#[test]
fn test_challenge_url_and_token_are_interchangeable() {
    assert_eq!(
        extract_token("https://www.geoguessr.com/challenge/abc123"),
        extract_token("abc123")
    );
}
