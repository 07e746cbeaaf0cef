pub mod config;
pub mod correlation;
pub mod http_client;
pub mod nhl_fetch;
pub mod persist;
pub mod props;
pub mod suggest;
pub mod teams;
