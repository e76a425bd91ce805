mod request;
mod response;
mod wrapper;

pub use request::*;
pub use response::*;
pub use wrapper::*;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleQueryParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_sort_by() -> String {
    String::from("created_at")
}

fn default_order() -> String {
    String::from("desc")
}
