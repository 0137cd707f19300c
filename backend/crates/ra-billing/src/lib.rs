//! Installation identity and billing client for the Read Aloud service.
//!
//! Every billing call resolves the installation identity from the key-value
//! store (creating it on first use), then issues a GET against the billing
//! service with the identity embedded in the path.

pub mod billing;
pub mod error;
pub mod identity;
pub mod service_url;
pub mod transport;

#[cfg(test)]
mod tests;

pub use billing::BillingClient;
pub use error::{BillingError, Result as BillingResult};
pub use identity::{INSTALLATION_ID_KEY, InstallationIdentityManager, installation_id::InstallationId};
pub use service_url::ServiceUrl;
pub use transport::{HttpTransport, ReqwestTransport};
