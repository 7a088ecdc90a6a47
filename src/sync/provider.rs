// src/sync/provider.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::settings::ProviderSettings;
use crate::errors::LeagueError;
use crate::models::sync::{ProviderAwardRow, ProviderGame, ProviderSeasonStatRow};

/// External NFL data collaborator. Fetching, pagination and retry
/// behavior live behind this seam; the reconciler only sees rows.
#[async_trait]
pub trait NflDataProvider: Send + Sync {
    /// Season aggregate stat rows for all players.
    async fn fetch_season_stats(
        &self,
        season: i32,
    ) -> Result<Vec<ProviderSeasonStatRow>, LeagueError>;

    /// Full schedule with results, regular season and playoffs.
    async fn fetch_schedule(&self, season: i32) -> Result<Vec<ProviderGame>, LeagueError>;

    /// Player of the Week / Month award rows.
    async fn fetch_season_awards(&self, season: i32)
        -> Result<Vec<ProviderAwardRow>, LeagueError>;
}

/// HTTP implementation against the configured provider endpoint. Every
/// request is bounded by the configured timeout so a stalled provider
/// fails the sync instead of hanging the admin action.
pub struct HttpNflDataProvider {
    client: Client,
    base_url: String,
}

impl HttpNflDataProvider {
    pub fn new(settings: &ProviderSettings) -> Result<Self, LeagueError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| LeagueError::ExternalSync(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LeagueError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::info!("Fetching provider data from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LeagueError::ExternalSync("provider request timed out".into())
            } else {
                LeagueError::ExternalSync(format!("provider unreachable: {}", e))
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LeagueError::ExternalSync(
                "season data not yet published by the provider".into(),
            ));
        }
        if !response.status().is_success() {
            return Err(LeagueError::ExternalSync(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LeagueError::ExternalSync(format!("invalid provider payload: {}", e)))
    }
}

#[async_trait]
impl NflDataProvider for HttpNflDataProvider {
    async fn fetch_season_stats(
        &self,
        season: i32,
    ) -> Result<Vec<ProviderSeasonStatRow>, LeagueError> {
        self.get_json(&format!("player-stats/{}", season)).await
    }

    async fn fetch_schedule(&self, season: i32) -> Result<Vec<ProviderGame>, LeagueError> {
        self.get_json(&format!("schedules/{}", season)).await
    }

    async fn fetch_season_awards(
        &self,
        season: i32,
    ) -> Result<Vec<ProviderAwardRow>, LeagueError> {
        self.get_json(&format!("awards/{}", season)).await
    }
}
