use crate::model::{Account, EmailCheckData};
use crate::store::StoreError;

use super::{reply, Responder};

#[derive(Debug)]
pub enum AccountAction {
    /// Fetch the signed-in account and persist it.
    SynchronizeAccount { respond_to: Responder<Account> },
    /// Read a persisted account.
    LoadAccount {
        user_id: i64,
        respond_to: Responder<Account>,
    },
    CheckEmail {
        email: String,
        respond_to: Responder<EmailCheckData>,
    },
    /// Close the account remotely and drop everything stored for it.
    CloseAccount {
        user_id: i64,
        respond_to: Responder<()>,
    },
}

impl AccountAction {
    pub fn name(&self) -> &'static str {
        match self {
            AccountAction::SynchronizeAccount { .. } => "synchronize_account",
            AccountAction::LoadAccount { .. } => "load_account",
            AccountAction::CheckEmail { .. } => "check_email",
            AccountAction::CloseAccount { .. } => "close_account",
        }
    }

    pub fn fail(self, error: StoreError) {
        let name = self.name();
        match self {
            AccountAction::SynchronizeAccount { respond_to }
            | AccountAction::LoadAccount { respond_to, .. } => reply(respond_to, name, Err(error)),
            AccountAction::CheckEmail { respond_to, .. } => reply(respond_to, name, Err(error)),
            AccountAction::CloseAccount { respond_to, .. } => reply(respond_to, name, Err(error)),
        }
    }
}
