//! Per-domain request builders.
//!
//! Every call follows the same chain: send the request, raise any backend
//! error envelope, then map the body. The first failure wins.

mod account;
mod device;
mod event;
mod iap;
mod token;
mod weather;

use std::sync::Arc;

use thiserror::Error;

use crate::mapper::{Mapper, MapperError};
use crate::network::{Network, NetworkError, Request};
use crate::validator::{self, ServiceError};

pub use account::AccountRemote;
pub use device::DeviceRemote;
pub use event::EventRemote;
pub use iap::InAppPurchaseRemote;
pub use token::TokenRemote;
pub use weather::WeatherRemote;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Mapping(#[from] MapperError),
}

/// Shared plumbing for the domain remotes.
#[derive(Clone)]
pub struct Remote {
    network: Arc<dyn Network>,
}

impl Remote {
    pub fn new(network: Arc<dyn Network>) -> Self {
        Self { network }
    }

    /// Send `request`, validate the body, decode it with `mapper`.
    pub async fn enqueue<M>(&self, request: Request, mapper: &M) -> Result<M::Output, RemoteError>
    where
        M: Mapper + Sync,
    {
        let response = self.network.response_data(request).await?;
        validator::validate(&response)?;
        Ok(mapper.map(&response)?)
    }
}
