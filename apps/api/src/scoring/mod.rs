// Readiness scoring: the ATS rubric, its display tiers, and per-bullet guidance.

pub mod ats;
pub mod guidance;
pub mod status;

pub use ats::score;
pub use guidance::{review_bullet, BulletGuidance};
pub use status::{score_status, ScoreStatus};
