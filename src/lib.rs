//! Scam and phishing scanner: translation, keyword risk scoring,
//! brand-impersonation matching and redirect tracing behind one engine.

pub mod config;
pub mod core;
pub mod pipeline;
