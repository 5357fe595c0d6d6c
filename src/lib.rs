//! Scoring engine for gig delivery offers.
//!
//! Shopping and Pickup offers are reduced to equivalent miles, a payout rate
//! per equivalent mile, a 1-100 score and an ACCEPT/MAYBE/SKIP verdict.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::{
    calc_pickup_score, calc_shopping_score, payout_for_target_score, weighted_quantity,
    QuantityBreakdown,
};
pub use error::{Result, WorthItError};
