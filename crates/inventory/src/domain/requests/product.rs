use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Largest price a `NUMERIC(10, 2)` column can hold.
pub const MAX_PRICE: f64 = 99_999_999.99;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Wireless Mouse")]
    pub name: String,

    #[schema(example = "2.4 GHz, USB receiver")]
    pub description: Option<String>,

    #[validate(range(min = 0.0, max = 99_999_999.99, message = "Price must be between 0 and 99999999.99"))]
    #[schema(example = 99.99)]
    pub price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 100)]
    pub quantity: i32,

    #[schema(example = "active")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdjustProductRequest {
    pub product_id: Uuid,

    /// Signed change applied to the current quantity.
    #[schema(example = -5)]
    pub quantity: i32,

    pub user_id: Uuid,

    #[schema(example = "Damaged in transit")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn create(price: f64, quantity: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: "Widget".into(),
            description: None,
            price,
            quantity,
            status: None,
        }
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(99.99, 100)]
    #[case(MAX_PRICE, i32::MAX)]
    fn accepts_non_negative_values(#[case] price: f64, #[case] quantity: i32) {
        assert!(create(price, quantity).validate().is_ok());
    }

    #[rstest]
    #[case(-0.01, 1, "price")]
    #[case(1.0, -1, "quantity")]
    #[case(100_000_000.0, 1, "price")]
    fn rejects_out_of_range_values(#[case] price: f64, #[case] quantity: i32, #[case] field: &str) {
        let errors = create(price, quantity).validate().unwrap_err();
        assert!(errors.field_errors().contains_key(field));
    }

    #[test]
    fn adjust_request_reads_camel_case_fields() {
        let body = serde_json::json!({
            "productId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10",
            "quantity": -3,
            "userId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b11",
        });

        let req: AdjustProductRequest = serde_json::from_value(body).unwrap();

        assert_eq!(req.quantity, -3);
        assert!(req.notes.is_none());
    }

    #[rstest]
    #[case(serde_json::json!({"quantity": 1, "userId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b11"}))]
    #[case(serde_json::json!({"productId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10", "userId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b11"}))]
    #[case(serde_json::json!({"productId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10", "quantity": 1}))]
    #[case(serde_json::json!({"productId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10", "quantity": 1.5, "userId": "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b11"}))]
    fn adjust_request_requires_ids_and_integer_quantity(#[case] body: serde_json::Value) {
        assert!(serde_json::from_value::<AdjustProductRequest>(body).is_err());
    }
}
