//! Domain types and DTOs
//!
//! These types define the data structures for listings, contact requests,
//! accounts and the static site copy.

pub mod auth;
pub mod contact;
pub mod content;
pub mod property;
pub mod sample;
