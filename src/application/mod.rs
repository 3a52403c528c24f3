// Application layer - use cases wiring fetched data to the page
pub mod dashboard_api;
pub mod dispatcher;
pub mod poller;
pub mod push_listener;
