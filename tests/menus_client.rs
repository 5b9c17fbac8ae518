use std::time::Duration;

use menubot::api::MenusClient;
use menubot::{MenubotError, ScriptedRoller};
use mockito::Matcher;

#[tokio::test]
async fn test_new_client_honors_configured_base_url() {
    // The base URL is a config knob (MENUBOT__MENUS_BASE_URL), so the
    // production constructor must use what it is given.
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/menus")
        .match_query(Matcher::UrlEncoded("token".into(), "secret".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"menus": [{"id": 7}]}"#)
        .create_async()
        .await;

    let client = MenusClient::new("secret", server.url(), Duration::from_secs(5)).unwrap();
    let menus = client.menus(1899, 1905, "date").await.unwrap();

    assert_eq!(menus[0].id, 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_menus_decodes_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/menus")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "secret".into()),
            Matcher::UrlEncoded("min_year".into(), "1899".into()),
            Matcher::UrlEncoded("max_year".into(), "1905".into()),
            Matcher::UrlEncoded("sort_by".into(), "date".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "menus": [
                    {
                        "id": 29388,
                        "location": "Delmonico's",
                        "year": 1899,
                        "currency": "Dollars",
                        "currency_symbol": "$"
                    },
                    {"id": 29389}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = MenusClient::with_base_url("secret", server.url());
    let menus = client.menus(1899, 1905, "date").await.unwrap();

    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0].id, 29388);
    assert_eq!(menus[0].location.as_deref(), Some("Delmonico's"));
    assert_eq!(menus[0].year.as_deref(), Some("1899"));
    assert!(menus[1].location.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_menu_pages_decodes_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/menus/29388/pages")
        .match_query(Matcher::UrlEncoded("token".into(), "secret".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "pages": [
                    {
                        "large_src_jp2": "http://images.example.org/29388-0.jp2",
                        "dishes": [
                            {"name": "Oysters", "price": "0.50"},
                            {"name": "Consommé", "price": null}
                        ]
                    },
                    {"large_src_jp2": "http://images.example.org/29388-1.jp2", "dishes": null}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = MenusClient::with_base_url("secret", server.url());
    let pages = client.menu_pages(29388).await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].dishes.len(), 2);
    assert_eq!(pages[0].dishes[0].price.as_deref(), Some("0.50"));
    assert!(pages[1].dishes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_random_menu_takes_first_listing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/menus")
        .match_query(Matcher::AllOf(vec![
            // rolls: 48 -> min_year 1899, then 5 -> max_year 1905, 0 -> "date"
            Matcher::UrlEncoded("min_year".into(), "1899".into()),
            Matcher::UrlEncoded("max_year".into(), "1905".into()),
            Matcher::UrlEncoded("sort_by".into(), "date".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"menus": [{"id": 7}, {"id": 8}]}"#)
        .create_async()
        .await;

    let client = MenusClient::with_base_url("secret", server.url());
    let mut roller = ScriptedRoller::new(&[48, 5, 0]);
    let menu = client.random_menu(&mut roller).await.unwrap();

    assert_eq!(menu.id, 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_random_menu_empty_listing_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/menus")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"menus": []}"#)
        .create_async()
        .await;

    let client = MenusClient::with_base_url("secret", server.url());
    let mut roller = ScriptedRoller::new(&[0, 0, 0]);
    let result = client.random_menu(&mut roller).await;

    assert!(matches!(result, Err(MenubotError::ApiError(_))));
}

#[tokio::test]
async fn test_menus_http_error_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/menus")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = MenusClient::with_base_url("secret", server.url());
    let result = client.menus(1899, 1905, "date").await;

    assert!(matches!(result, Err(MenubotError::FetchError(_))));
}
