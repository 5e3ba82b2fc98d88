//! CLI subcommand implementations.

pub mod auctions;
pub mod curve;
pub mod keys;
pub mod rates;
pub mod reference;
