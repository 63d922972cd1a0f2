pub mod billboard;
pub mod category;
pub mod city;
pub mod color;
pub mod country;
pub mod image;
pub mod order;
pub mod order_item;
pub mod product;
pub mod size;
pub mod store;
pub mod user;
