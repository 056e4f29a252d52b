pub mod select_json;

pub use select_json::{select_ranked_json, SelectRequest, SelectResponse};
