//! Shared domain types of the pizzeria point of sale.
//!
//! Everything here is plain data plus pure pricing and validation helpers;
//! file access, logging and HTTP live in the `backend` crate.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
