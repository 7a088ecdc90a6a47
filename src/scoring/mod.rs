pub mod engine;

pub use engine::{
    bonus_points, playoff_points, round2, score_quarterback, score_weekly, ScoreBreakdown,
};
