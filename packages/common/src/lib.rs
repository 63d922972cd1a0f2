pub mod popularity;

pub use popularity::{ParsePopularityError, Popularity};
