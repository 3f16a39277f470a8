pub mod store_changes;

pub use store_changes::consume_store_changes;
