pub mod client;
pub mod logging;
pub mod poller;
