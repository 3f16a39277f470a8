pub mod auth;
pub mod award;
pub mod candidate;
pub mod criteria;
pub mod dashboard;
pub mod event;
pub mod judge;
pub mod score;
pub mod vote;
