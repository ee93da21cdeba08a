//! Protocol-level constants shared by the key agreement mechanisms

pub mod speke;
