pub mod catalog;
pub mod geography;
pub mod order;
pub mod product;
pub mod store;
pub mod store_listing;
pub mod user;
