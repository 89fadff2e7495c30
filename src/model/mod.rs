//! Domain records decoded from the REST APIs.
//!
//! Every record is an immutable value. Field names follow the wire format
//! through `serde` renames where the backend uses a different spelling.

mod account;
mod device;
mod event;
mod forecast;
mod iap;
mod token;

pub use account::{Account, EmailCheckData};
pub use device::MateDevice;
pub use event::MateEvent;
pub use forecast::{Forecast, ForecastDay};
pub use iap::{InAppPurchaseOrder, InAppPurchaseProduct, OrderStatus};
pub use token::OnsaTokenData;
