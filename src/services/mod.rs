pub mod filter;
pub mod posts;
pub mod sorter;
pub mod user;
