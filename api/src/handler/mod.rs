pub mod admin;
pub mod auth;
pub mod booking;
pub mod event;
pub mod health;
pub mod portfolio;
pub mod provider;
pub mod service;
pub mod user;
