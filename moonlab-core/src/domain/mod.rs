//! Domain types for MoonLab

pub mod record;

pub use record::Record;
