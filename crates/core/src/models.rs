pub mod appointment;
pub mod business;
pub mod service;
pub mod time_slot;
