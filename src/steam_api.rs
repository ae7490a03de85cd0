/// Requests for app details and the adult content check
pub mod app_details;
/// Requests for aggregate review statistics
pub mod reviews;
/// Requests for app search and name resolution
pub mod search;
