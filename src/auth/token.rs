// src/auth/token.rs
//
// The admin gate is a single shared password. Verifying it issues a
// short-lived signed token instead of a client-side boolean, so every
// admin mutation is checked server-side until the token expires.
use actix_web::dev::ServiceRequest;
use actix_web::error::ErrorUnauthorized;
use actix_web::{http::header, web, Error};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::settings::AdminSettings;

const ADMIN_SUBJECT: &str = "league-admin";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issue a signed admin token valid for the configured TTL.
pub fn issue_admin_token(
    settings: &AdminSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(settings.token_ttl_minutes);

    let claims = AdminClaims {
        sub: ADMIN_SUBJECT.to_string(),
        iat: now.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.token_secret.expose_secret().as_bytes()),
    )
}

/// Extract and validate the admin token from a request's Authorization
/// header. Used by the admin middleware.
pub fn validate_admin_token_from_request(req: &ServiceRequest) -> Result<AdminClaims, Error> {
    let settings = req
        .app_data::<web::Data<AdminSettings>>()
        .ok_or_else(|| ErrorUnauthorized("Admin settings not found"))?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ErrorUnauthorized("No authorization header"))?
        .to_str()
        .map_err(|_| ErrorUnauthorized("Invalid authorization header"))?;

    if !auth_header.starts_with("Bearer ") {
        return Err(ErrorUnauthorized("Invalid authorization header format"));
    }

    let token = &auth_header[7..];
    let token_data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(settings.token_secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| {
        tracing::warn!("Failed to decode admin token: {:?}", e);
        ErrorUnauthorized("Invalid token")
    })?;

    if token_data.claims.sub != ADMIN_SUBJECT {
        return Err(ErrorUnauthorized("Invalid token subject"));
    }

    Ok(token_data.claims)
}
