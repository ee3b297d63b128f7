//! The shared project/task lifecycle status.

use serde::{Deserialize, Serialize};

/// Closed three-variant lifecycle status, backed by the `status` Postgres
/// enum type. `Deleted` is a flag, not a row removal; no transition rules
/// are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Archived,
    Deleted,
}

impl Status {
    /// Every variant, in declaration order. Used by the seeder to draw a
    /// uniformly random status.
    pub const ALL: [Status; 3] = [Status::Active, Status::Archived, Status::Deleted];

    /// The lowercase wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Archived => "archived",
            Status::Deleted => "deleted",
        }
    }
}
