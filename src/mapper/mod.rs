//! Pure transforms from response bytes to domain records.
//!
//! Payloads arrive either bare or wrapped in a single-key `{"data": ...}`
//! envelope. [`decode`] accepts both and yields the same value; a payload
//! that does not match the expected shape is an error, never a partially
//! defaulted record.

mod account;
mod device;
mod event;
mod forecast;
mod iap;
mod token;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use account::{AccountMapper, EmailCheckMapper, SuccessMapper};
pub use device::{DeviceListMapper, DeviceMapper};
pub use event::EventListMapper;
pub use forecast::ForecastMapper;
pub use iap::{OrderMapper, ProductListMapper};
pub use token::OnsaTokenMapper;

const ENVELOPE_KEY: &str = "data";

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("Backend did not acknowledge the request")]
    Unsuccessful,
}

/// Decodes one response shape into its domain record.
pub trait Mapper {
    type Output;

    fn map(&self, response: &[u8]) -> Result<Self::Output, MapperError>;
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// True iff `response` is a JSON object whose only key is `data`.
pub fn has_data_envelope(response: &[u8]) -> bool {
    match serde_json::from_slice::<Map<String, Value>>(response) {
        Ok(object) => object.len() == 1 && object.contains_key(ENVELOPE_KEY),
        Err(_) => false,
    }
}

/// Decode `T`, unwrapping the `data` envelope when present.
pub fn decode<T: DeserializeOwned>(response: &[u8]) -> Result<T, MapperError> {
    if has_data_envelope(response) {
        let envelope: DataEnvelope<T> = serde_json::from_slice(response)?;
        Ok(envelope.data)
    } else {
        Ok(serde_json::from_slice(response)?)
    }
}
