//! Charlie {0..1} <--> {1} Deltum.
//!
//! The mandatory pairing. A charlie names exactly one deltum, enforced
//! twice over:
//! - application tier: [`ValidationError::CharlieWithoutDeltum`] on the
//!   validated create path;
//! - database tier: `NOT NULL` on `charlies.deltum_id`, which still
//!   fires when the validated path is bypassed.
//!
//! The deltum side is untouched by all of this; a deltum is free to
//! exist with zero charlies.
//!
//! [`ValidationError::CharlieWithoutDeltum`]: super::ValidationError::CharlieWithoutDeltum

use serde::{Deserialize, Serialize};

pub type CharlieId = i64;
pub type DeltumId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charlie {
    pub id: CharlieId,
    /// Not optional: the column is `NOT NULL`, so a persisted charlie
    /// always has a deltum. Only unsaved input can lack one.
    pub deltum_id: DeltumId,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deltum {
    pub id: DeltumId,
    pub created_at: i64,
    pub updated_at: i64,
}
