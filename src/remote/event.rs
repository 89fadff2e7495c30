use crate::mapper::EventListMapper;
use crate::model::MateEvent;
use crate::network::{Method, Request};

use super::{Remote, RemoteError};

/// Events endpoints of the events API.
#[derive(Clone)]
pub struct EventRemote {
    remote: Remote,
}

impl EventRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    pub async fn load_events(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<MateEvent>, RemoteError> {
        let mut request = Request::events(Method::Get, "events").with_parameter("user_id", user_id);
        if let Some(category_id) = category_id {
            request = request.with_parameter("category_id", category_id);
        }
        self.remote.enqueue(request, &EventListMapper).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mock::MockNetwork;
    use crate::network::Api;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_load_events_parameters() {
        let network = Arc::new(MockNetwork::new());
        network.enqueue(Method::Get, "events", "[]");
        network.enqueue(Method::Get, "events", r#"{"data": []}"#);
        let remote = EventRemote::new(Remote::new(network.clone()));

        assert!(remote.load_events(7, None).await.unwrap().is_empty());
        assert!(remote.load_events(7, Some(2)).await.unwrap().is_empty());

        let requests = network.requests();
        assert_eq!(requests[0].api, Api::Events);
        assert_eq!(requests[0].parameters.len(), 1);
        assert_eq!(
            requests[1].parameters[1],
            ("category_id".to_string(), "2".to_string())
        );
    }
}
