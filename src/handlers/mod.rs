pub mod admin;
pub mod quarterback_handler;
pub mod squad_handler;
pub mod standings_handler;

use serde::Deserialize;

/// Common `?season=` query; endpoints fall back to the configured
/// default season when it is omitted.
#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<i32>,
}

impl SeasonQuery {
    pub fn season_or(&self, default_season: i32) -> i32 {
        self.season.unwrap_or(default_season)
    }
}
