//! Trait definitions implemented by the key agreement mechanisms

pub mod key_agreement;
pub mod serialize;

pub use key_agreement::KeyAgreement;
pub use serialize::{Serialize, SerializeSecret};
