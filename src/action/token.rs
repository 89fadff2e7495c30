use crate::model::OnsaTokenData;
use crate::store::StoreError;

use super::{reply, Responder};

#[derive(Debug)]
pub enum TokenAction {
    GetToken {
        user_id: i64,
        respond_to: Responder<OnsaTokenData>,
    },
}

impl TokenAction {
    pub fn name(&self) -> &'static str {
        match self {
            TokenAction::GetToken { .. } => "get_token",
        }
    }

    pub fn fail(self, error: StoreError) {
        let name = self.name();
        match self {
            TokenAction::GetToken { respond_to, .. } => reply(respond_to, name, Err(error)),
        }
    }
}
