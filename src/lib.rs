//! Product Wizard - Adaptive Product Recommendation Questionnaire
//!
//! This crate narrows a product catalog by asking, at each step, the
//! unanswered question whose answers best split the remaining items
//! (Shannon entropy over attribute values), and stops once a single
//! product is left or every required question has been answered.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
