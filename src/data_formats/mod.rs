mod request;
mod wrapper;

pub use request::*;
pub use wrapper::*;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ArticleQueryParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
