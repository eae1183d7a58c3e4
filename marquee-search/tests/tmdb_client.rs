//! TMDB client tests against a local stand-in server.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use marquee_search::{MovieProvider, MovieQuery, MovieSearchError, TmdbClient};
use serde_json::json;

const TOKEN: &str = "test-token";

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"))
}

async fn discover(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    assert_eq!(params.get("sort_by").map(String::as_str), Some("popularity.desc"));

    Json(json!({
        "page": 1,
        "results": [
            {"id": 1, "title": "Popular One", "vote_average": 7.5, "poster_path": "/one.jpg",
             "release_date": "2024-01-01", "original_language": "en"},
            {"id": 2, "title": "Popular Two", "vote_average": null, "poster_path": null,
             "release_date": "", "original_language": "fr"}
        ]
    }))
    .into_response()
}

async fn search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    match params.get("query").map(String::as_str) {
        Some("broken") => Json(json!({"Response": "False", "Error": "Too many results."}))
            .into_response(),
        Some("garbage") => (StatusCode::OK, "not json").into_response(),
        Some("server error") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some("nothing") => Json(json!({"page": 1, "results": []})).into_response(),
        Some(query) => Json(json!({
            "results": [{"id": 42, "title": query, "original_language": "en"}]
        }))
        .into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn spawn_stand_in() -> SocketAddr {
    let app = Router::new()
        .route("/3/discover/movie", get(discover))
        .route("/3/search/movie", get(search));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client() -> TmdbClient {
    let addr = spawn_stand_in().await;
    TmdbClient::new(&format!("http://{addr}/3"), TOKEN).unwrap()
}

#[tokio::test]
async fn test_popular_listing_sends_bearer_token() {
    let client = client().await;
    let movies = client.fetch_movies(&MovieQuery::Popular).await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Popular One");
    assert_eq!(movies[1].vote_average, None);
    assert_eq!(movies[1].release_year(), "N/A");
}

#[tokio::test]
async fn test_search_passes_exact_query() {
    let client = client().await;
    let movies = client
        .fetch(&MovieQuery::Search("star wars & more".to_string()))
        .await
        .unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "star wars & more");
}

#[tokio::test]
async fn test_failure_flag_surfaces_server_error() {
    let client = client().await;
    let result = client
        .fetch(&MovieQuery::Search("broken".to_string()))
        .await;

    assert_eq!(
        result,
        Err(MovieSearchError::ApiError {
            message: "Too many results.".to_string()
        })
    );
}

#[tokio::test]
async fn test_empty_results_are_not_an_error_at_provider_level() {
    let client = client().await;
    let movies = client
        .fetch(&MovieQuery::Search("nothing".to_string()))
        .await
        .unwrap();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_transport_failures() {
    let client = client().await;

    let status = client
        .fetch(&MovieQuery::Search("server error".to_string()))
        .await;
    assert_eq!(status, Err(MovieSearchError::HttpStatus { status: 500 }));

    let parse = client
        .fetch(&MovieQuery::Search("garbage".to_string()))
        .await;
    assert!(matches!(parse, Err(MovieSearchError::ParseError { .. })));
}

#[tokio::test]
async fn test_bad_token_is_http_status_error() {
    let addr = spawn_stand_in().await;
    let client = TmdbClient::new(&format!("http://{addr}/3"), "wrong").unwrap();

    let result = client.fetch(&MovieQuery::Popular).await;
    assert_eq!(result, Err(MovieSearchError::HttpStatus { status: 401 }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TmdbClient::new(&format!("http://{addr}/3"), TOKEN).unwrap();
    let result = client.fetch(&MovieQuery::Popular).await;

    let error = result.unwrap_err();
    assert!(matches!(error, MovieSearchError::NetworkError { .. }));
    assert!(error.is_transport_failure());
}
