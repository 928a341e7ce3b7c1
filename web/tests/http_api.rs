//! End-to-end tests over the full router.
//!
//! Ids are deterministic: the n-th todo created gets
//! `00000000-0000-0000-0000-00000000000n`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use todo_runtime::MetricsRecorder;
use todo_testing::test_environment;
use todo_web::{AppState, REQUEST_ID_HEADER, TodoService, build_router};
use tower::ServiceExt;

const FIRST: &str = "00000000-0000-0000-0000-000000000001";
const SECOND: &str = "00000000-0000-0000-0000-000000000002";

const FORM: &str = "application/x-www-form-urlencoded";

fn app() -> (Router, TodoService) {
    let todos = TodoService::in_memory(test_environment());
    let router = build_router(AppState::new(todos.clone(), MetricsRecorder::new()));
    (router, todos)
}

#[derive(Clone, Copy)]
enum Client {
    Api,
    Htmx,
    Browser,
}

fn request(client: Client, method: Method, uri: &str, form: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    builder = match client {
        Client::Api => builder.header(header::ACCEPT, "application/json"),
        Client::Htmx => builder.header("HX-Request", "true"),
        Client::Browser => builder.header(header::ACCEPT, "text/html"),
    };
    match form {
        Some(body) => builder
            .header(header::CONTENT_TYPE, FORM)
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn test_end_to_end_scenario_over_json() {
    let (app, _) = app();

    let response = send(&app, request(Client::Api, Method::POST, "/todos", Some("description=Buy+milk"))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], FIRST);
    assert_eq!(created["description"], "Buy milk");
    assert_eq!(created["completed"], false);

    let response = send(&app, request(Client::Api, Method::POST, "/todos", Some("description=Clean+house"))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        request(
            Client::Api,
            Method::PUT,
            &format!("/todos/{FIRST}"),
            Some("description=Buy+milk+and+eggs&completed=on"),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], FIRST);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["created_at"], created["created_at"]);

    let found = body_json(send(&app, request(Client::Api, Method::GET, "/todos?search=MILK", None)).await).await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["description"], "Buy milk and eggs");

    let response = send(&app, request(Client::Api, Method::DELETE, &format!("/todos/{SECOND}"), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let all = body_json(send(&app, request(Client::Api, Method::GET, "/todos", None)).await).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], FIRST);
}

#[tokio::test]
async fn test_htmx_create_returns_item_fragment() {
    let (app, _) = app();

    let response = send(&app, request(Client::Htmx, Method::POST, "/todos", Some("description=Buy+milk"))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::VARY).unwrap(), "HX-Request, Accept");
    let html = body_text(response).await;
    assert!(html.starts_with("<li class=\"todo\""));
    assert!(html.contains(&format!("data-id=\"{FIRST}\"")));
    assert!(html.contains("Buy milk"));
    assert!(!html.contains("<html"));
    assert!(html.contains("<footer id=\"stats\" hx-swap-oob=\"true\">1 of 1 remaining</footer>"));
}

#[tokio::test]
async fn test_browser_mutations_redirect_to_index() {
    let (app, todos) = app();

    let response = send(&app, request(Client::Browser, Method::POST, "/todos", Some("description=Buy+milk"))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(todos.all().await.len(), 1);
}

#[tokio::test]
async fn test_index_renders_full_page_with_totals() {
    let (app, todos) = app();
    todos.seed(["Buy milk", "Clean house"]).await;

    let response = send(&app, request(Client::Browser, Method::GET, "/", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.find("Buy milk").unwrap() < html.find("Clean house").unwrap());
    assert!(html.contains("2 of 2 remaining"));
}

#[tokio::test]
async fn test_blank_description_is_rejected() {
    let (app, todos) = app();

    let response = send(&app, request(Client::Api, Method::POST, "/todos", Some("description=+++"))).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(todos.all().await.is_empty());
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let (app, _) = app();

    let response = send(&app, request(Client::Api, Method::GET, &format!("/todos/{FIRST}"), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = send(
        &app,
        request(Client::Api, Method::PUT, &format!("/todos/{FIRST}"), Some("description=x")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, request(Client::Api, Method::GET, "/todos/not-an-id", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (app, todos) = app();
    todos.seed(["Buy milk"]).await;

    for _ in 0..2 {
        let response = send(&app, request(Client::Htmx, Method::DELETE, &format!("/todos/{FIRST}"), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("<li"));
        assert!(html.contains("0 of 0 remaining"));
    }
    assert!(todos.all().await.is_empty());
}

#[tokio::test]
async fn test_update_without_checkbox_marks_open() {
    let (app, todos) = app();
    todos.seed(["Buy milk"]).await;

    send(
        &app,
        request(Client::Htmx, Method::PUT, &format!("/todos/{FIRST}"), Some("description=Buy+milk&completed=on")),
    )
    .await;
    let response = send(
        &app,
        request(Client::Htmx, Method::PUT, &format!("/todos/{FIRST}"), Some("description=Buy+milk")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.starts_with("<li class=\"todo\""));
    assert!(html.contains("1 of 1 remaining"));
    assert!(!todos.all().await[0].completed());
}

#[tokio::test]
async fn test_toggle_refreshes_footer_totals() {
    let (app, todos) = app();
    todos.seed(["Buy milk", "Clean house"]).await;

    let response = send(
        &app,
        request(Client::Htmx, Method::PUT, &format!("/todos/{FIRST}"), Some("description=Buy+milk&completed=on")),
    )
    .await;

    assert!(body_text(response).await.contains("1 of 2 remaining"));
}

#[tokio::test]
async fn test_filtered_list_is_not_sortable() {
    let (app, todos) = app();
    todos.seed(["Buy milk", "Clean house", "Milk cow"]).await;

    let filtered = body_text(send(&app, request(Client::Htmx, Method::GET, "/todos?search=milk", None)).await).await;
    assert_eq!(filtered.matches("<li class=\"todo\"").count(), 2);
    assert!(filtered.contains("draggable=\"false\""));
    assert!(!filtered.contains("draggable=\"true\""));

    let page = body_text(send(&app, request(Client::Browser, Method::GET, "/todos?search=milk", None)).await).await;
    assert!(!page.contains("draggable=\"true\""));

    let full = body_text(send(&app, request(Client::Htmx, Method::GET, "/todos", None)).await).await;
    assert_eq!(full.matches("draggable=\"true\"").count(), 3);
    assert!(!full.contains("draggable=\"false\""));
    assert_eq!(todos.all().await.len(), 3);
}

#[tokio::test]
async fn test_browser_get_lands_on_item_anchor() {
    let (app, todos) = app();
    todos.seed(["Buy milk"]).await;

    let response = send(&app, request(Client::Browser, Method::GET, &format!("/todos/{FIRST}"), None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/#todo-{FIRST}")
    );
}

#[tokio::test]
async fn test_sort_reorders_and_drops_unlisted() {
    let (app, todos) = app();
    todos.seed(["A", "B", "C"]).await;
    let third = "00000000-0000-0000-0000-000000000003";

    let response = send(
        &app,
        request(
            Client::Api,
            Method::POST,
            "/todos/sort",
            Some(&format!("id={third}&id=garbage&id={FIRST}")),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let descriptions: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, vec!["C", "A"]);
    assert_eq!(todos.all().await.len(), 2);
}

#[tokio::test]
async fn test_edit_form_only_for_htmx() {
    let (app, todos) = app();
    todos.seed(["Buy milk"]).await;
    let uri = format!("/todos/{FIRST}/edit");

    let response = send(&app, request(Client::Htmx, Method::GET, &uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name=\"description\" value=\"Buy milk\""));

    let response = send(&app, request(Client::Browser, Method::GET, &uri, None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_static_assets_are_embedded() {
    let (app, _) = app();

    let response = send(&app, request(Client::Browser, Method::GET, "/static/app.css", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );

    let response = send(&app, request(Client::Browser, Method::GET, "/static/missing.js", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_operational_endpoints() {
    let (app, todos) = app();
    todos.seed(["Buy milk"]).await;

    let response = send(&app, request(Client::Browser, Method::GET, "/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert_eq!(body_text(response).await, "ok");

    let ready = body_json(send(&app, request(Client::Api, Method::GET, "/ready", None)).await).await;
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["todos"], 1);
    assert_eq!(ready["remaining"], 1);

    // No recorder installed for this router
    let response = send(&app, request(Client::Browser, Method::GET, "/metrics", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
