pub mod catalog;
pub mod geography;
pub mod order;
pub mod product;
pub mod shared;
pub mod store;
pub mod user;
