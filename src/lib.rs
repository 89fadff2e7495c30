pub mod action;
pub mod cli;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod network;
pub mod remote;
pub mod storage;
pub mod store;
pub mod validator;
