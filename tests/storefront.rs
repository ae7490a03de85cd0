use mockito::{Matcher, Server, ServerGuard};
use steamsearch::{StorefrontClient, StorefrontConfig, StorefrontError};

fn client_for(server: &ServerGuard) -> StorefrontClient {
    StorefrontClient::new(StorefrontConfig::with_host(&server.url()))
}

const PORTAL_SEARCH: &str = r#"[
    {"appid": "400", "name": "Portal", "icon": "https://cdn/400/icon.jpg", "logo": "https://cdn/400/logo.jpg"},
    {"appid": "620", "name": "Portal 2", "icon": "https://cdn/620/icon.jpg", "logo": "https://cdn/620/logo.jpg"},
    {"appid": "317400", "name": "Portal Stories: Mel", "icon": "", "logo": ""}
]"#;

const PORTAL_2_REVIEWS: &str = r#"{
    "success": 1,
    "query_summary": {
        "num_reviews": 20,
        "review_score": 9,
        "review_score_desc": "Overwhelmingly Positive",
        "total_positive": 9000,
        "total_negative": 500,
        "total_reviews": 9500
    },
    "reviews": []
}"#;

#[tokio::test]
async fn test_review_for_exact_match() {
    let mut server = Server::new_async().await;

    let search = server
        .mock("GET", Matcher::Regex(r"^/actions/SearchApps/Portal(%20|\+)2$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PORTAL_SEARCH)
        .expect(1)
        .create_async()
        .await;
    let reviews = server
        .mock("GET", "/appreviews/620")
        .match_query(Matcher::UrlEncoded("json".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(PORTAL_2_REVIEWS)
        .expect(1)
        .create_async()
        .await;

    let (reception, app_id) = client_for(&server).get_app_review("Portal 2").await.unwrap();

    assert_eq!(app_id, "620");
    assert_eq!(
        reception,
        "Reception for Portal 2 is \"Overwhelmingly Positive\" recommended by 9000/9500 reviewers.\n\
         For more info, check out the store page:\n\
         https://store.steampowered.com/app/620"
    );
    search.assert_async().await;
    reviews.assert_async().await;
}

#[tokio::test]
async fn test_resolve_prefers_exact_match_over_substrings() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/actions/SearchApps/Portal")
        .with_status(200)
        .with_body(PORTAL_SEARCH)
        .create_async()
        .await;

    let app = client_for(&server).resolve_application("Portal").await.unwrap();

    assert_eq!(app.name, "Portal");
    assert_eq!(app.app_id, "400");
}

#[tokio::test]
async fn test_ambiguous_query_skips_reviews() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/actions/SearchApps/Half")
        .with_status(200)
        .with_body(r#"[{"appid": "70", "name": "Half-Life"}, {"appid": "220", "name": "Half-Life 2"}]"#)
        .create_async()
        .await;
    let reviews = server
        .mock("GET", Matcher::Regex("^/appreviews/".to_string()))
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server).get_app_review("Half").await.unwrap_err();

    match err {
        StorefrontError::AmbiguousMatch { query, candidates } => {
            assert_eq!(query, "Half");
            assert_eq!(candidates, ["Half-Life", "Half-Life 2"]);
        }
        other => panic!("expected an ambiguous match, got {other:?}"),
    }
    reviews.assert_async().await;
}

#[tokio::test]
async fn test_unknown_game_is_not_found() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/actions/SearchApps/Nonexistent")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let err = client_for(&server).get_app_review("Nonexistent").await.unwrap_err();

    assert!(matches!(err, StorefrontError::NotFound { .. }));
    assert!(err.to_string().contains("\"Nonexistent\""));
}

#[tokio::test]
async fn test_null_search_body_is_not_found() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/actions/SearchApps/Nonexistent")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let err = client_for(&server).resolve_application("Nonexistent").await.unwrap_err();

    assert!(matches!(err, StorefrontError::NotFound { query } if query == "Nonexistent"));
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/actions/SearchApps/Portal")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let err = client_for(&server).resolve_application("Portal").await.unwrap_err();

    assert!(matches!(err, StorefrontError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = StorefrontClient::new(StorefrontConfig::with_host("http://127.0.0.1:1"));

    let err = client.check_app_is_adult("620").await.unwrap_err();

    assert!(matches!(err, StorefrontError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_reviews_are_parse_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/actions/SearchApps/Portal")
        .with_status(200)
        .with_body(PORTAL_SEARCH)
        .create_async()
        .await;
    server
        .mock("GET", "/appreviews/400")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server).get_app_review("Portal").await.unwrap_err();

    assert!(matches!(err, StorefrontError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_adult_descriptor_is_detected() {
    let mut server = Server::new_async().await;

    let details = server
        .mock("GET", "/api/appdetails")
        .match_query(Matcher::UrlEncoded("appids".to_string(), "620".to_string()))
        .with_status(200)
        .with_body(r#"{"620": {"success": true, "data": {"content_descriptors": {"ids": [1,3,5]}}}}"#)
        .expect(1)
        .create_async()
        .await;

    assert!(client_for(&server).check_app_is_adult("620").await.unwrap());
    details.assert_async().await;
}

#[tokio::test]
async fn test_null_descriptive_fields_still_detect_adult_content() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/api/appdetails")
        .match_query(Matcher::UrlEncoded("appids".to_string(), "620".to_string()))
        .with_status(200)
        .with_body(
            r#"{"620": {"success": true, "data": {"name": null, "header_image": null, "content_descriptors": {"ids": [3]}}}}"#,
        )
        .create_async()
        .await;

    assert!(client_for(&server).check_app_is_adult("620").await.unwrap());
}

#[tokio::test]
async fn test_missing_details_get_benefit_of_the_doubt() {
    let mut server = Server::new_async().await;

    for (id, body) in [
        ("1", r#"{"1": {"success": true, "data": {"content_descriptors": {"ids": [2, 5]}}}}"#),
        ("2", r#"{"2": {"success": false}}"#),
        ("3", "{}"),
        ("4", "null"),
    ] {
        server
            .mock("GET", "/api/appdetails")
            .match_query(Matcher::UrlEncoded("appids".to_string(), id.to_string()))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;
    }

    let client = client_for(&server);
    for id in ["1", "2", "3", "4"] {
        assert!(!client.check_app_is_adult(id).await.unwrap(), "app {id}");
    }
}

#[tokio::test]
async fn test_malformed_details_are_parse_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/api/appdetails")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"620": {"success": "maybe"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).check_app_is_adult("620").await.unwrap_err();

    assert!(matches!(err, StorefrontError::Parse { .. }), "got {err:?}");
}
