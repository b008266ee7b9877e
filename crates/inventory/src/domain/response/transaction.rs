use crate::model::transaction::{Transaction as TransactionModel, TransactionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub previous_quantity: i32,
    pub new_quantity: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub product_id: Uuid,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(value: TransactionModel) -> Self {
        TransactionResponse {
            id: value.id,
            transaction_type: value.transaction_type,
            quantity: value.quantity,
            previous_quantity: value.previous_quantity,
            new_quantity: value.new_quantity,
            notes: value.notes,
            created_at: value.created_at,
            user_id: value.user_id,
            product_id: value.product_id,
        }
    }
}
