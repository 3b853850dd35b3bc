//! Golf {0..1} <--> {1..N} Hotel.
//!
//! One-to-many with a minimum count on the hotel side. The pieces:
//! - `golves.hotel_id` nullable, `ON DELETE SET NULL`: a golf may roam
//!   free, and deleting a hotel detaches its golves;
//! - [`ValidationError::HotelWithoutGolves`] when creating a hotel with
//!   an empty golf list;
//! - a pre-delete guard on the golf side that recounts siblings and
//!   refuses to delete a hotel's last golf.
//!
//! Neither the validation nor the guard is enforcement. The raw write
//! paths sidestep both, and the tests keep a hotel with zero golves
//! around to prove it.
//!
//! [`ValidationError::HotelWithoutGolves`]: super::ValidationError::HotelWithoutGolves

use serde::{Deserialize, Serialize};

pub type GolfId = i64;
pub type HotelId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Golf {
    pub id: GolfId,
    /// `None` mirrors NULL in `golves.hotel_id`.
    pub hotel_id: Option<HotelId>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub created_at: i64,
    pub updated_at: i64,
}
