pub mod ai;
pub mod news;
