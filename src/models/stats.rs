// src/models/stats.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use crate::errors::LeagueError;

/// Week 0 holds the synced season-aggregate line; 1..=18 are regular
/// season weeks, the tail covers postseason weeks.
pub const MIN_WEEK: i32 = 0;
pub const MAX_WEEK: i32 = 22;
pub const MIN_SEASON: i32 = 2000;
pub const MAX_SEASON: i32 = 2100;

/// One stat line per quarterback per week, unique on (qb_id, season, week).
/// `points` is recomputed through the scoring engine on every write.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct WeeklyStat {
    pub id: Uuid,
    pub qb_id: Uuid,
    pub season: i32,
    pub week: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
    pub passing_tds: i32,
    pub rushing_tds: i32,
    pub receiving_tds: i32,
    pub interceptions: i32,
    pub fumbles: i32,
    pub game_won: bool,
    pub prime_time_win: bool,
    pub points: f64,
}

impl WeeklyStat {
    pub fn line(&self) -> StatLine {
        StatLine {
            passing_yards: self.passing_yards,
            rushing_yards: self.rushing_yards,
            passing_tds: self.passing_tds,
            rushing_tds: self.rushing_tds,
            receiving_tds: self.receiving_tds,
            interceptions: self.interceptions,
            fumbles: self.fumbles,
            game_won: self.game_won,
            prime_time_win: self.prime_time_win,
        }
    }
}

/// Raw scoring input, fully populated. Defaulting of missing fields
/// happens at the request boundary, never inside the scoring engine.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StatLine {
    pub passing_yards: i32,
    pub rushing_yards: i32,
    pub passing_tds: i32,
    pub rushing_tds: i32,
    pub receiving_tds: i32,
    pub interceptions: i32,
    pub fumbles: i32,
    pub game_won: bool,
    pub prime_time_win: bool,
}

/// Admin create/overwrite request for a weekly stat line. Numeric fields
/// omitted by the client default to 0 here, at the boundary.
#[derive(Debug, Deserialize)]
pub struct WeeklyStatRequest {
    pub qb_id: Uuid,
    pub season: i32,
    pub week: i32,
    #[serde(default)]
    pub passing_yards: i32,
    #[serde(default)]
    pub rushing_yards: i32,
    #[serde(default)]
    pub passing_tds: i32,
    #[serde(default)]
    pub rushing_tds: i32,
    #[serde(default)]
    pub receiving_tds: i32,
    #[serde(default)]
    pub interceptions: i32,
    #[serde(default)]
    pub fumbles: i32,
    #[serde(default)]
    pub game_won: bool,
    #[serde(default)]
    pub prime_time_win: bool,
}

impl WeeklyStatRequest {
    pub fn validate(&self) -> Result<(), LeagueError> {
        validate_season(self.season)?;
        validate_week(self.week)?;
        let negatives = [
            self.passing_tds,
            self.rushing_tds,
            self.receiving_tds,
            self.interceptions,
            self.fumbles,
        ];
        if negatives.iter().any(|v| *v < 0) {
            return Err(LeagueError::Validation(
                "stat counts cannot be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn line(&self) -> StatLine {
        StatLine {
            passing_yards: self.passing_yards,
            rushing_yards: self.rushing_yards,
            passing_tds: self.passing_tds,
            rushing_tds: self.rushing_tds,
            receiving_tds: self.receiving_tds,
            interceptions: self.interceptions,
            fumbles: self.fumbles,
            game_won: self.game_won,
            prime_time_win: self.prime_time_win,
        }
    }
}

pub fn validate_season(season: i32) -> Result<(), LeagueError> {
    if !(MIN_SEASON..=MAX_SEASON).contains(&season) {
        return Err(LeagueError::Validation(format!(
            "season {} out of range ({}..={})",
            season, MIN_SEASON, MAX_SEASON
        )));
    }
    Ok(())
}

pub fn validate_week(week: i32) -> Result<(), LeagueError> {
    if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
        return Err(LeagueError::Validation(format!(
            "week {} out of range ({}..={})",
            week, MIN_WEEK, MAX_WEEK
        )));
    }
    Ok(())
}

/// Season award types, each worth a fixed number of points. At most one
/// of each type per quarterback per season.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum BonusType {
    #[serde(rename = "MVP")]
    #[sqlx(rename = "MVP")]
    Mvp,
    #[serde(rename = "MVP_RUNNER_UP")]
    #[sqlx(rename = "MVP_RUNNER_UP")]
    MvpRunnerUp,
    #[serde(rename = "MVP_3RD")]
    #[sqlx(rename = "MVP_3RD")]
    MvpThird,
    #[serde(rename = "MVP_4TH")]
    #[sqlx(rename = "MVP_4TH")]
    MvpFourth,
    #[serde(rename = "MVP_5TH")]
    #[sqlx(rename = "MVP_5TH")]
    MvpFifth,
    #[serde(rename = "ROOKIE_OF_YEAR")]
    #[sqlx(rename = "ROOKIE_OF_YEAR")]
    RookieOfYear,
    #[serde(rename = "CONF_POW")]
    #[sqlx(rename = "CONF_POW")]
    ConfPow,
    #[serde(rename = "CONF_POM")]
    #[sqlx(rename = "CONF_POM")]
    ConfPom,
}

impl BonusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusType::Mvp => "MVP",
            BonusType::MvpRunnerUp => "MVP_RUNNER_UP",
            BonusType::MvpThird => "MVP_3RD",
            BonusType::MvpFourth => "MVP_4TH",
            BonusType::MvpFifth => "MVP_5TH",
            BonusType::RookieOfYear => "ROOKIE_OF_YEAR",
            BonusType::ConfPow => "CONF_POW",
            BonusType::ConfPom => "CONF_POM",
        }
    }
}

impl fmt::Display for BonusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BonusType {
    type Error = LeagueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "MVP" => Ok(BonusType::Mvp),
            "MVP_RUNNER_UP" => Ok(BonusType::MvpRunnerUp),
            "MVP_3RD" => Ok(BonusType::MvpThird),
            "MVP_4TH" => Ok(BonusType::MvpFourth),
            "MVP_5TH" => Ok(BonusType::MvpFifth),
            "ROOKIE_OF_YEAR" => Ok(BonusType::RookieOfYear),
            "CONF_POW" => Ok(BonusType::ConfPow),
            "CONF_POM" => Ok(BonusType::ConfPom),
            other => Err(LeagueError::Validation(format!(
                "invalid bonus type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct SeasonBonus {
    pub id: Uuid,
    pub qb_id: Uuid,
    pub season: i32,
    pub bonus_type: BonusType,
    pub points: f64,
}

#[derive(Debug, Deserialize)]
pub struct SeasonBonusRequest {
    pub qb_id: Uuid,
    pub season: i32,
    pub bonus_type: String,
}

/// Playoff rounds are cumulative: a quarterback earns points for every
/// round reached, not just the last.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum PlayoffRound {
    #[serde(rename = "WILD_CARD")]
    #[sqlx(rename = "WILD_CARD")]
    WildCard,
    #[serde(rename = "DIVISIONAL")]
    #[sqlx(rename = "DIVISIONAL")]
    Divisional,
    #[serde(rename = "CONF_CHAMPIONSHIP")]
    #[sqlx(rename = "CONF_CHAMPIONSHIP")]
    ConfChampionship,
    #[serde(rename = "SUPER_BOWL")]
    #[sqlx(rename = "SUPER_BOWL")]
    SuperBowl,
}

impl PlayoffRound {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayoffRound::WildCard => "WILD_CARD",
            PlayoffRound::Divisional => "DIVISIONAL",
            PlayoffRound::ConfChampionship => "CONF_CHAMPIONSHIP",
            PlayoffRound::SuperBowl => "SUPER_BOWL",
        }
    }
}

impl fmt::Display for PlayoffRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PlayoffRound {
    type Error = LeagueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "WILD_CARD" => Ok(PlayoffRound::WildCard),
            "DIVISIONAL" => Ok(PlayoffRound::Divisional),
            "CONF_CHAMPIONSHIP" => Ok(PlayoffRound::ConfChampionship),
            "SUPER_BOWL" => Ok(PlayoffRound::SuperBowl),
            other => Err(LeagueError::Validation(format!(
                "invalid playoff round: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayoffAppearance {
    pub id: Uuid,
    pub qb_id: Uuid,
    pub season: i32,
    pub round: PlayoffRound,
    pub won_super_bowl: bool,
    pub points: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlayoffAppearanceRequest {
    pub qb_id: Uuid,
    pub season: i32,
    pub round: String,
    #[serde(default)]
    pub won_super_bowl: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_types_round_trip_from_wire_strings() {
        for s in [
            "MVP",
            "MVP_RUNNER_UP",
            "MVP_3RD",
            "MVP_4TH",
            "MVP_5TH",
            "ROOKIE_OF_YEAR",
            "CONF_POW",
            "CONF_POM",
        ] {
            let parsed = BonusType::try_from(s).expect("known bonus type");
            assert_eq!(parsed.as_str(), s);
        }
    }

    #[test]
    fn unknown_bonus_and_round_strings_are_validation_errors() {
        assert!(matches!(
            BonusType::try_from("MVP_6TH"),
            Err(LeagueError::Validation(_))
        ));
        assert!(matches!(
            PlayoffRound::try_from("PRO_BOWL"),
            Err(LeagueError::Validation(_))
        ));
    }

    #[test]
    fn week_and_season_bounds_are_enforced() {
        assert!(validate_week(0).is_ok());
        assert!(validate_week(22).is_ok());
        assert!(validate_week(-1).is_err());
        assert!(validate_week(23).is_err());
        assert!(validate_season(2025).is_ok());
        assert!(validate_season(1999).is_err());
    }
}
