pub mod auth;
pub mod bulk_upload;
pub mod certificates;
