//! HTTP request handlers
//!
//! Handlers stay thin: they extract parameters, call [`FactsService`] and
//! shape the response.
//!
//! [`FactsService`]: crate::services::FactsService

pub mod admin;
pub mod facts;
pub mod health;
