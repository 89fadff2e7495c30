use async_trait::async_trait;

use crate::action::{reply, Action, Domain, EventAction};
use crate::model::MateEvent;
use crate::remote::EventRemote;
use crate::storage::{self, StorageManager};

use super::{reject, Store, StoreError};

pub struct EventStore {
    remote: EventRemote,
    storage: StorageManager,
}

impl EventStore {
    pub fn new(remote: EventRemote, storage: StorageManager) -> Self {
        Self { remote, storage }
    }

    async fn synchronize_events(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<MateEvent>, StoreError> {
        let mut events = self.remote.load_events(user_id, category_id).await?;
        let received = events.len();
        events.retain(|event| {
            event.user_id == user_id && category_id.map_or(true, |c| event.category_id == Some(c))
        });
        if events.len() < received {
            tracing::warn!(
                user_id,
                ?category_id,
                skipped = received - events.len(),
                "Ignoring events outside the requested scope"
            );
        }
        let fetched = events.clone();
        let removed = self
            .storage
            .perform(move |tx| {
                let removed = match category_id {
                    None => storage::delete_events(tx, user_id)?,
                    Some(category_id) => {
                        storage::delete_events_in_category(tx, user_id, category_id)?
                    }
                };
                for event in &fetched {
                    storage::upsert_event(tx, event)?;
                }
                Ok(removed)
            })
            .await?;
        tracing::debug!(user_id, ?category_id, removed, fetched = events.len(), "Synchronized events");
        Ok(events)
    }
}

#[async_trait]
impl Store for EventStore {
    fn domain(&self) -> Domain {
        Domain::Event
    }

    async fn on_action(&self, action: Action) {
        let action = match action {
            Action::Event(action) => action,
            other => return reject(self.domain(), other),
        };

        let name = action.name();
        match action {
            EventAction::SynchronizeEvents {
                user_id,
                category_id,
                respond_to,
            } => reply(
                respond_to,
                name,
                self.synchronize_events(user_id, category_id).await,
            ),
            EventAction::LoadEvents {
                user_id,
                respond_to,
            } => {
                let result = self
                    .storage
                    .perform(move |tx| storage::load_events(tx, user_id))
                    .await
                    .map_err(StoreError::from);
                reply(respond_to, name, result)
            }
            EventAction::ResetEvents {
                user_id,
                respond_to,
            } => {
                let result = self
                    .storage
                    .perform(move |tx| storage::delete_events(tx, user_id))
                    .await
                    .map_err(StoreError::from);
                reply(respond_to, name, result)
            }
        }
    }
}
