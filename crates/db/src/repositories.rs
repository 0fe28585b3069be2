pub mod appointment;
pub mod break_time;
pub mod service;
pub mod settings;
pub mod working_hours;
