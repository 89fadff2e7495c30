use crate::model::MateEvent;
use crate::store::StoreError;

use super::{reply, Responder};

#[derive(Debug)]
pub enum EventAction {
    /// Fetch events and replace the stored copies.
    ///
    /// With a `category_id` only that category's stored events are replaced.
    SynchronizeEvents {
        user_id: i64,
        category_id: Option<i64>,
        respond_to: Responder<Vec<MateEvent>>,
    },
    /// Stored events only, no network.
    LoadEvents {
        user_id: i64,
        respond_to: Responder<Vec<MateEvent>>,
    },
    /// Delete every stored event of `user_id`; replies with the count.
    ResetEvents {
        user_id: i64,
        respond_to: Responder<usize>,
    },
}

impl EventAction {
    pub fn name(&self) -> &'static str {
        match self {
            EventAction::SynchronizeEvents { .. } => "synchronize_events",
            EventAction::LoadEvents { .. } => "load_events",
            EventAction::ResetEvents { .. } => "reset_events",
        }
    }

    pub fn fail(self, error: StoreError) {
        let name = self.name();
        match self {
            EventAction::SynchronizeEvents { respond_to, .. }
            | EventAction::LoadEvents { respond_to, .. } => reply(respond_to, name, Err(error)),
            EventAction::ResetEvents { respond_to, .. } => reply(respond_to, name, Err(error)),
        }
    }
}
