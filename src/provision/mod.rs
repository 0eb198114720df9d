//! Consent and installation for a private runtime.

pub mod consent;
pub mod installer;

pub use consent::{ConsentDecision, ConsentGate};
pub use installer::{InstallerCommand, Provisioner};
