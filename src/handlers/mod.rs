pub mod extract;
pub mod posts;
pub mod root;
pub mod user;
