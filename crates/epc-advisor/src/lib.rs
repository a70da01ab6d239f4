//! Rules engine for UK landlords working through EPC compliance: grant
//! eligibility, upgrade costs, certificate analysis and PRS exemptions.

pub mod config;
pub mod error;
pub mod input;
pub mod property;
pub mod telemetry;
pub mod tools;
