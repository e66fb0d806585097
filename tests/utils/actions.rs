use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use scorekeeper::game::types::GameUrlResponse;
use tower::ServiceExt; // for `oneshot`

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("host", "localhost:3000")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Starts a game and returns the allocated session code
pub async fn start_game(app: &Router, player1: &str, player2: Option<&str>) -> String {
    let body = match player2 {
        Some(name) => format!(
            r#"{{"player1_name": "{}", "player2_name": "{}"}}"#,
            player1, name
        ),
        None => format!(r#"{{"player1_name": "{}"}}"#, player1),
    };

    let response = app
        .clone()
        .oneshot(post_json("/start-game", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let url_response: GameUrlResponse = serde_json::from_slice(&bytes).unwrap();
    url_response
        .game_url
        .split("game_code=")
        .nth(1)
        .expect("game URL should carry a game_code parameter")
        .to_string()
}

pub async fn increase_score(app: &Router, code: &str, player: &str) -> StatusCode {
    let body = format!(
        r#"{{"player_name": "{}", "game_code": "{}"}}"#,
        player, code
    );
    let response = app
        .clone()
        .oneshot(post_json("/increase-score", body))
        .await
        .unwrap();
    response.status()
}

pub async fn save_game(app: &Router, code: &str) -> StatusCode {
    let body = format!(r#"{{"game_code": "{}"}}"#, code);
    let response = app
        .clone()
        .oneshot(post_json("/save-game", body))
        .await
        .unwrap();
    response.status()
}

/// Fetches a page and returns its status and HTML body
pub async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
