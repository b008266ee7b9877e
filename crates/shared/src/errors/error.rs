use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    #[schema(example = "Product with ID 0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10 not found")]
    pub message: String,
}
