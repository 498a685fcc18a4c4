pub mod cache;
pub mod category;
pub mod error;
pub mod news;
