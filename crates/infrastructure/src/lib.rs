//! Tiered DNS Infrastructure Layer
pub mod dns;
