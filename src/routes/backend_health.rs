use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Howell League API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/health")]
async fn backend_health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}
