//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from SQL and repository wiring.
//!
//! Only the golf/hotel pair has enough going on (minimum count plus
//! guard) to deserve a service; the other pairs are used through their
//! repositories directly.

pub mod hotel_service;
