//! Channel-based action bus.
//!
//! [`Dispatcher::new`] returns a clonable [`StoresClient`] and the
//! [`StoresServer`] that drains it. Callers await a typed result; the server
//! runs every action as its own task, so dispatches are independent and
//! unordered.

mod client;
mod server;
mod types;

use tokio::sync::mpsc;

pub use client::StoresClient;
pub use server::StoresServer;
pub use types::DispatchError;

const DISPATCH_BUFFER: usize = 64;

pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> (StoresClient, StoresServer) {
        let (sender, receiver) = mpsc::channel(DISPATCH_BUFFER);
        (StoresClient::new(sender), StoresServer::new(receiver))
    }
}
