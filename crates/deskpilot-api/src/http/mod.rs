//! HTTP layer.

pub mod action;
pub mod envelope;
pub mod monitoring;
pub mod routes;
