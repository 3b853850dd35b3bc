//! Alfa {0..1} <--> {0..1} Bravo.
//!
//! The loosest pairing in the set: both sides are optional, so there is
//! no validation on either side and nothing for a write path to check.
//! The only mechanism in play is `alfas.bravo_id` being nullable with
//! `ON DELETE SET NULL`, meaning the database detaches an alfa when its
//! bravo goes away instead of rejecting the delete.

use serde::{Deserialize, Serialize};

pub type AlfaId = i64;
pub type BravoId = i64;

/// Owning side of the pair; carries the foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alfa {
    pub id: AlfaId,
    /// `None` mirrors NULL in `alfas.bravo_id`.
    pub bravo_id: Option<BravoId>,
    /// Epoch ms.
    pub created_at: i64,
    /// Epoch ms.
    pub updated_at: i64,
}

/// Referenced side; holds no FK. Its alfa (if any) is found by the
/// inverse lookup, i.e. a query on `alfas.bravo_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bravo {
    pub id: BravoId,
    pub created_at: i64,
    pub updated_at: i64,
}
