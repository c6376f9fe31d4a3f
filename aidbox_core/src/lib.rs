#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod license;
pub mod logging;
pub mod provider;
pub mod schema;
pub mod state;

#[cfg(test)]
mod mock;

pub use aidbox_client::{AidboxClient, LicenseApi};
pub use error::ProviderError;
pub use provider::AidboxProvider;
