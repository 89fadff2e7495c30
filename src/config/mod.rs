//! Configuration loading, credentials and auth headers.

mod auth;
mod credentials;
mod loader;
mod store;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{AuthType, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, Defaults, Endpoint, StorageConfig};
