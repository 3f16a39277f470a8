mod auth;
mod common;
mod judge;
mod scoring;
mod voting;
