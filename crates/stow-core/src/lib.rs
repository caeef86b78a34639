//! stow-core: shared configuration types for the Stow upload services
//!
//! Settings are read once from the environment at process startup and
//! passed by value to the crates that need them.

pub mod config;

pub use config::{DatabaseSettings, StorageSettings};
