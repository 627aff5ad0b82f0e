pub mod info;
pub mod initialize;
pub mod items;
pub mod links;
pub mod migrate;
pub mod pool;
pub mod sessions;

pub use initialize::init_db;
