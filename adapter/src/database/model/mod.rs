pub mod booking;
pub mod event;
pub mod portfolio;
pub mod service;
pub mod user;
