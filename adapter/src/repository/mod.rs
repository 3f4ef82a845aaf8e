pub mod auth;
pub mod booking;
pub mod event;
pub mod health;
pub mod portfolio;
pub mod service;
pub mod stats;
pub mod user;
