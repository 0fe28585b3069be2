//! # Slotbook Core
//!
//! Domain types and the availability engine for a single-resource
//! appointment booking service.
//!
//! Everything in this crate is a pure function of its inputs. Callers load
//! working hours, break times, settings and appointments from storage, read
//! the clock, and pass the results in. All instants are UTC.

/// Error taxonomy shared by every layer
pub mod errors;
/// Entities and request/response types
pub mod models;
/// Slot generation and appointment conflict detection
pub mod availability;
