pub mod auth;
pub mod booking;
pub mod event;
pub mod portfolio;
pub mod service;
pub mod stats;
pub mod upload;
pub mod user;
