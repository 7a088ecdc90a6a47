pub mod common;
pub mod quarterback;
pub mod squad;
pub mod stats;
pub mod sync;
