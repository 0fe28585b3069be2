/// Staff administration
pub mod admin;
/// Customer booking and cancellation
pub mod appointments;
/// Slot listing
pub mod availability;
/// Public business profile
pub mod businesses;
/// Liveness and version
pub mod health;
/// Service catalogue
pub mod services;
