pub mod auth;
pub mod booking;
pub mod event;
pub mod id;
pub mod portfolio;
pub mod role;
pub mod service;
pub mod stats;
pub mod user;
