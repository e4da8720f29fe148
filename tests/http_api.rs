// tests/http_api.rs
//
// Wire-level tests for the HTTP API client against a local stub server.

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tradedash::api::http::HttpApi;
use tradedash::config::Config;
use tradedash::{DashboardApi, StockSubscription};
use warp::Filter;

type PostLog = Arc<Mutex<Vec<(String, String, Value)>>>;

/// Spawn a stub trading server; returns its base URL.
/// POSTs are recorded as (path, content-type, body); the algos POST
/// deliberately replies 400 to prove the client ignores status codes.
async fn spawn_stub(posted: PostLog) -> String {
    let capital = warp::path!("api" / "dashboard" / "capital")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"total": 100000.0, "available": 25000.0})));

    let stocks_get = warp::path!("api" / "stocks")
        .and(warp::get())
        .map(|| warp::reply::json(&json!([{"symbol": "ACME", "token": "abc123"}])));

    let algos_get = warp::path!("api" / "algos")
        .and(warp::get())
        .map(|| warp::reply::json(&json!([{"name": "momentum", "window": 10}])));

    let positions = warp::path!("api" / "dashboard" / "positions")
        .and(warp::get())
        .map(|| warp::reply::json(&json!([])));

    let stocks_post = {
        let posted = posted.clone();
        warp::path!("api" / "stocks")
            .and(warp::post())
            .and(warp::header::<String>("content-type"))
            .and(warp::body::json())
            .map(move |content_type: String, body: Value| {
                posted
                    .lock()
                    .unwrap()
                    .push(("stocks".to_string(), content_type, body));
                warp::reply::json(&json!({"status": "subscribed"}))
            })
    };

    let algos_post = {
        let posted = posted.clone();
        warp::path!("api" / "algos")
            .and(warp::post())
            .and(warp::header::<String>("content-type"))
            .and(warp::body::json())
            .map(move |content_type: String, body: Value| {
                posted
                    .lock()
                    .unwrap()
                    .push(("algos".to_string(), content_type, body));
                warp::reply::with_status(
                    warp::reply::json(&json!({"detail": "rejected"})),
                    warp::http::StatusCode::BAD_REQUEST,
                )
            })
    };

    let routes = capital
        .or(stocks_get)
        .or(algos_get)
        .or(positions)
        .or(stocks_post)
        .or(algos_post);

    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> HttpApi {
    let config = Config::new().with_base_url(base_url);
    HttpApi::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_return_opaque_json() {
    let posted: PostLog = Arc::new(Mutex::new(Vec::new()));
    let base_url = spawn_stub(posted).await;
    let api = client_for(&base_url);

    assert_eq!(
        api.fetch_capital().await.unwrap(),
        json!({"total": 100000.0, "available": 25000.0})
    );
    assert_eq!(
        api.fetch_stocks().await.unwrap(),
        json!([{"symbol": "ACME", "token": "abc123"}])
    );
    assert_eq!(
        api.fetch_algos().await.unwrap(),
        json!([{"name": "momentum", "window": 10}])
    );
    assert_eq!(api.fetch_positions().await.unwrap(), json!([]));
}

#[tokio::test]
async fn add_stock_posts_exact_body_with_json_header() {
    let posted: PostLog = Arc::new(Mutex::new(Vec::new()));
    let base_url = spawn_stub(posted.clone()).await;
    let api = client_for(&base_url);

    let subscription = StockSubscription {
        symbol: "ACME".to_string(),
        token: "abc123".to_string(),
    };
    api.add_stock(&subscription).await.unwrap();

    let posted = posted.lock().unwrap();
    assert_eq!(posted.len(), 1);
    let (path, content_type, body) = &posted[0];
    assert_eq!(path, "stocks");
    assert!(content_type.starts_with("application/json"));
    assert_eq!(body, &json!({"symbol": "ACME", "token": "abc123"}));
}

#[tokio::test]
async fn save_algo_ignores_non_2xx_status() {
    let posted: PostLog = Arc::new(Mutex::new(Vec::new()));
    let base_url = spawn_stub(posted.clone()).await;
    let api = client_for(&base_url);

    let config = json!({"name": "momentum", "window": 10});
    // The stub replies 400; the submission still counts as complete
    api.save_algo(&config).await.unwrap();

    let posted = posted.lock().unwrap();
    assert_eq!(posted.len(), 1);
    let (path, content_type, body) = &posted[0];
    assert_eq!(path, "algos");
    assert!(content_type.starts_with("application/json"));
    assert_eq!(body, &config);
}

#[tokio::test]
async fn non_json_body_fails_the_fetch() {
    let capital = warp::path!("api" / "dashboard" / "capital").map(|| "not json");
    let (addr, server) = warp::serve(capital).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let api = client_for(&format!("http://{}", addr));
    assert!(api.fetch_capital().await.is_err());
}
