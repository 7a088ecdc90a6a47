use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::auth::token::issue_admin_token;
use crate::config::settings::AdminSettings;
use crate::errors::LeagueError;

#[derive(Debug, Deserialize)]
pub struct PasswordVerifyRequest {
    pub password: String,
}

/// Verify the shared admin password and hand out a short-lived signed
/// token for the admin mutation endpoints.
pub async fn verify_password(
    request: web::Json<PasswordVerifyRequest>,
    settings: web::Data<AdminSettings>,
) -> Result<HttpResponse, LeagueError> {
    if request.password != settings.password.expose_secret() {
        tracing::warn!("Admin password verification failed");
        return Ok(HttpResponse::Unauthorized().json(json!({
            "success": false,
            "message": "Invalid password",
        })));
    }

    let token = issue_admin_token(&settings)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Authentication successful",
        "token": token,
        "expires_in_minutes": settings.token_ttl_minutes,
    })))
}
