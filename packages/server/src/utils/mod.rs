pub mod jwt;
pub mod lookup;
