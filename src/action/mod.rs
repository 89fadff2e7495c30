//! Request messages routed to the stores.
//!
//! Each variant carries its inputs and a one-shot `respond_to` channel on
//! which the owning store posts exactly one result.

mod account;
mod device;
mod event;
mod iap;
mod token;
mod weather;

use tokio::sync::oneshot;

use crate::store::StoreError;

pub use account::AccountAction;
pub use device::DeviceAction;
pub use event::EventAction;
pub use iap::InAppPurchaseAction;
pub use token::TokenAction;
pub use weather::WeatherAction;

/// Reply half handed to a store with every action.
pub type Responder<T> = oneshot::Sender<Result<T, StoreError>>;

/// Action family; one store owns each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Account,
    Token,
    Device,
    Event,
    Weather,
    InAppPurchase,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Domain::Account => "account",
            Domain::Token => "token",
            Domain::Device => "device",
            Domain::Event => "event",
            Domain::Weather => "weather",
            Domain::InAppPurchase => "in_app_purchase",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub enum Action {
    Account(AccountAction),
    Token(TokenAction),
    Device(DeviceAction),
    Event(EventAction),
    Weather(WeatherAction),
    InAppPurchase(InAppPurchaseAction),
}

impl Action {
    pub fn domain(&self) -> Domain {
        match self {
            Action::Account(_) => Domain::Account,
            Action::Token(_) => Domain::Token,
            Action::Device(_) => Domain::Device,
            Action::Event(_) => Domain::Event,
            Action::Weather(_) => Domain::Weather,
            Action::InAppPurchase(_) => Domain::InAppPurchase,
        }
    }

    /// Variant name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Account(action) => action.name(),
            Action::Token(action) => action.name(),
            Action::Device(action) => action.name(),
            Action::Event(action) => action.name(),
            Action::Weather(action) => action.name(),
            Action::InAppPurchase(action) => action.name(),
        }
    }

    /// Answer the action with `error` without running it.
    pub fn fail(self, error: StoreError) {
        match self {
            Action::Account(action) => action.fail(error),
            Action::Token(action) => action.fail(error),
            Action::Device(action) => action.fail(error),
            Action::Event(action) => action.fail(error),
            Action::Weather(action) => action.fail(error),
            Action::InAppPurchase(action) => action.fail(error),
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_action! {
    Account => AccountAction,
    Token => TokenAction,
    Device => DeviceAction,
    Event => EventAction,
    Weather => WeatherAction,
    InAppPurchase => InAppPurchaseAction,
}

/// Send `result` on `respond_to`, logging when the caller has gone away.
pub(crate) fn reply<T>(respond_to: Responder<T>, action: &'static str, result: Result<T, StoreError>) {
    match &result {
        Ok(_) => tracing::info!(action, "Action completed"),
        Err(error) => tracing::warn!(action, error = %error, "Action failed"),
    }
    if respond_to.send(result).is_err() {
        tracing::trace!(action, "Action response dropped (receiver gone)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_routing_keys() {
        let (respond_to, _rx) = oneshot::channel();
        let action: Action = TokenAction::GetToken {
            user_id: 1,
            respond_to,
        }
        .into();
        assert_eq!(action.domain(), Domain::Token);
        assert_eq!(action.name(), "get_token");
    }

    #[tokio::test]
    async fn test_fail_answers_the_caller() {
        let (respond_to, rx) = oneshot::channel();
        let action: Action = EventAction::LoadEvents {
            user_id: 3,
            respond_to,
        }
        .into();

        action.fail(StoreError::NoStore(Domain::Event));
        assert!(matches!(rx.await, Ok(Err(StoreError::NoStore(Domain::Event)))));
    }
}
