//! Hotel use-case service.
//!
//! # Responsibility
//! - Provide use-case entry points over the golf/hotel repository.
//! - Keep the guarded and guard-bypassing delete paths side by side so
//!   callers pick one consciously.
//!
//! # Invariants
//! - Service APIs never re-implement validation; the repository is the
//!   single place rules are checked (or deliberately skipped).

use crate::model::golf_hotel::{Golf, GolfId, HotelId};
use crate::repo::golf_hotel_repo::GolfHotelRepository;
use crate::repo::RepoResult;

/// Use-case wrapper for the Golf {0..1} <--> {1..N} Hotel pair.
pub struct HotelService<R: GolfHotelRepository> {
    repo: R,
}

impl<R: GolfHotelRepository> HotelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a hotel together with `golf_count` fresh golves.
    ///
    /// # Contract
    /// - `golf_count == 0` fails validation; a hotel starts with at
    ///   least one golf or not at all.
    /// - Returns the hotel id and the ids of its founding golves.
    pub fn found_hotel(&self, golf_count: u32) -> RepoResult<(HotelId, Vec<GolfId>)> {
        let mut golves = Vec::with_capacity(golf_count as usize);
        for _ in 0..golf_count {
            golves.push(self.repo.create_golf(None)?);
        }

        let hotel_id = self.repo.create_hotel(&golves)?;
        Ok((hotel_id, golves))
    }

    /// Creates a hotel claiming already-existing golves.
    pub fn create_hotel(&self, golves: &[GolfId]) -> RepoResult<HotelId> {
        self.repo.create_hotel(golves)
    }

    /// Creates a free-roaming or already-attached golf.
    pub fn create_golf(&self, hotel_id: Option<HotelId>) -> RepoResult<GolfId> {
        self.repo.create_golf(hotel_id)
    }

    /// Guarded golf delete; refuses to take a hotel's last golf.
    pub fn destroy_golf(&self, id: GolfId) -> RepoResult<()> {
        self.repo.destroy_golf(id)
    }

    /// Guard-bypassing golf delete. Exists so the gap between "guarded"
    /// and "enforced" stays demonstrable from the use-case layer too.
    pub fn delete_golf_bypassing_guard(&self, id: GolfId) -> RepoResult<()> {
        self.repo.delete_golf(id)
    }

    /// Deletes a hotel; the schema detaches its golves.
    pub fn delete_hotel(&self, id: HotelId) -> RepoResult<()> {
        self.repo.delete_hotel(id)
    }

    /// Lists the golves a hotel currently claims.
    pub fn golves_of_hotel(&self, id: HotelId) -> RepoResult<Vec<Golf>> {
        self.repo.golves_of_hotel(id)
    }
}
