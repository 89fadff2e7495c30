use crate::model::{InAppPurchaseOrder, InAppPurchaseProduct};
use crate::store::StoreError;

use super::{reply, Responder};

#[derive(Debug)]
pub enum InAppPurchaseAction {
    LoadProducts {
        respond_to: Responder<Vec<InAppPurchaseProduct>>,
    },
    PurchaseProduct {
        product_id: String,
        receipt: String,
        respond_to: Responder<InAppPurchaseOrder>,
    },
}

impl InAppPurchaseAction {
    pub fn name(&self) -> &'static str {
        match self {
            InAppPurchaseAction::LoadProducts { .. } => "load_products",
            InAppPurchaseAction::PurchaseProduct { .. } => "purchase_product",
        }
    }

    pub fn fail(self, error: StoreError) {
        let name = self.name();
        match self {
            InAppPurchaseAction::LoadProducts { respond_to } => reply(respond_to, name, Err(error)),
            InAppPurchaseAction::PurchaseProduct { respond_to, .. } => {
                reply(respond_to, name, Err(error))
            }
        }
    }
}
