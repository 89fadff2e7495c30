use serde_json::json;

use crate::mapper::{OrderMapper, ProductListMapper};
use crate::model::{InAppPurchaseOrder, InAppPurchaseProduct};
use crate::network::{Method, Request};

use super::{Remote, RemoteError};

/// In-app purchase endpoints of the WordPress.com API.
#[derive(Clone)]
pub struct InAppPurchaseRemote {
    remote: Remote,
}

impl InAppPurchaseRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    pub async fn load_products(&self) -> Result<Vec<InAppPurchaseProduct>, RemoteError> {
        let request = Request::dotcom(Method::Get, "iap/products");
        self.remote.enqueue(request, &ProductListMapper).await
    }

    /// Submit a store receipt for `product_id` and return the created order.
    pub async fn create_order(
        &self,
        product_id: &str,
        receipt: &str,
    ) -> Result<InAppPurchaseOrder, RemoteError> {
        let request = Request::dotcom(Method::Post, "iap/orders").with_body(&json!({
            "product_id": product_id,
            "receipt": receipt,
        }))?;
        self.remote.enqueue(request, &OrderMapper).await
    }
}
