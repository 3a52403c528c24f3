// Domain layer - payload models fetched from the backend
pub mod alert;
pub mod maintenance;
pub mod order;
pub mod push;
