pub mod auth;
pub mod dashboard;
pub mod event;
pub mod scoring;
pub mod shared;
