use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::model::CompletionProvider;
use crate::store::StatusStore;
use crate::web::models::{ChatRequest, StatusCheckCreate};

// Liveness endpoint
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

pub async fn create_status_check(
    store: web::Data<StatusStore>,
    body: web::Json<StatusCheckCreate>,
) -> impl Responder {
    let body = body.into_inner();
    if body.client_name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "client_name must not be empty"
        }));
    }

    match store.create(body.client_name).await {
        Ok(check) => HttpResponse::Created().json(check),
        Err(e) => {
            error!("Failed to store status check: {:#}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to store status check"
            }))
        }
    }
}

pub async fn get_status_checks(store: web::Data<StatusStore>) -> impl Responder {
    match store.list().await {
        Ok(checks) => HttpResponse::Ok().json(checks),
        Err(e) => {
            error!("Failed to list status checks: {:#}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to list status checks"
            }))
        }
    }
}

// Chat API endpoint; provider-side failures never fail the request.
pub async fn chat(
    provider: web::Data<CompletionProvider>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    let req = req.into_inner();
    info!("Chat request: mode {:?}, language {:?}", req.mode, req.language);
    HttpResponse::Ok().json(crate::chat::respond(provider.get_ref(), &req).await)
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web::Data, App};
    use serde_json::{json, Value};

    use crate::model::CompletionProvider;
    use crate::store::StatusStore;
    use crate::web::routes;

    // Store handle that parses the URI but never reaches a server; only
    // routes that bail out before touching the collection may use it.
    async fn offline_store() -> StatusStore {
        StatusStore::connect("mongodb://127.0.0.1:27017", "gugi_test")
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn root_returns_greeting() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CompletionProvider::Unconfigured))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "message": "Hello World" }));
    }

    #[actix_web::test]
    async fn chat_echoes_without_provider() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CompletionProvider::Unconfigured))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({
                "mode": "chat",
                "messages": [{ "role": "user", "content": "hello" }]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "text": "hello" }));
    }

    #[actix_web::test]
    async fn chat_greets_without_messages() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CompletionProvider::Unconfigured))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "text": "Hi!" }));
    }

    #[actix_web::test]
    async fn chat_rejects_malformed_body() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CompletionProvider::Unconfigured))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "mode": "monologue" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn status_create_rejects_empty_client_name() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(offline_store().await))
                .app_data(Data::new(CompletionProvider::Unconfigured))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
