//! The four landlord tools. Each is a pure function over static tables
//! and one input record.

pub mod analyser;
pub mod calculator;
pub mod exemption;
pub mod grants;
