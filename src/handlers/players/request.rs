//! Player request DTOs

use serde::Deserialize;
use validator::Validate;

/// New opponent request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// Starting rating; the configured baseline when absent
    #[validate(range(min = 0, max = 4000))]
    pub rating: Option<i32>,

    #[validate(length(max = 32))]
    pub avatar_color: Option<String>,

    #[validate(length(max = 64))]
    pub play_style: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}
