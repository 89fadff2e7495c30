use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};

use crate::action::Action;
use crate::store::StoresManager;

pub struct StoresServer {
    pub(crate) receiver: mpsc::Receiver<Action>,
}

impl StoresServer {
    pub fn new(receiver: mpsc::Receiver<Action>) -> Self {
        Self { receiver }
    }

    /// Route actions until every client is dropped, then wait for the
    /// actions still in flight.
    pub async fn run(mut self, manager: StoresManager) {
        let manager = Arc::new(manager);
        let mut in_flight = JoinSet::new();

        while let Some(action) = self.receiver.recv().await {
            while let Some(result) = in_flight.try_join_next() {
                log_task_result(result);
            }

            let manager = Arc::clone(&manager);
            in_flight.spawn(async move {
                manager.dispatch(action).await;
            });
        }

        while let Some(result) = in_flight.join_next().await {
            log_task_result(result);
        }
        tracing::debug!("Dispatcher stopped");
    }
}

fn log_task_result(result: Result<(), JoinError>) {
    if let Err(err) = result {
        tracing::error!(error = %err, panicked = err.is_panic(), "Action task failed");
    }
}
