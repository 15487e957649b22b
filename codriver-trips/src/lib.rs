//! Co-driver trip board server.
//!
//! A web application that answers: "which posted trips could I co-drive,
//! and have I already asked to join them?"

pub mod api;
pub mod board;
pub mod config;
pub mod domain;
pub mod filter;
pub mod location;
pub mod notice;
pub mod places;
pub mod web;
