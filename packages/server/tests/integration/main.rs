mod common;

mod catalog;
mod geography;
mod order;
mod schema;
mod store;
