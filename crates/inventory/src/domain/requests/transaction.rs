use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindTransactions {
    /// Takes precedence over `userId` when both are given.
    pub product_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionFilter {
    All,
    ByProduct(Uuid),
    ByUser(Uuid),
}

impl FindTransactions {
    /// Resolves the query into a single filter dimension. Blank values count
    /// as absent.
    pub fn filter(&self) -> Result<TransactionFilter, ServiceError> {
        if let Some(product_id) = non_blank(&self.product_id) {
            return parse_id("productId", product_id).map(TransactionFilter::ByProduct);
        }

        if let Some(user_id) = non_blank(&self.user_id) {
            return parse_id("userId", user_id).map(TransactionFilter::ByUser);
        }

        Ok(TransactionFilter::All)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw)
        .map_err(|_| ServiceError::Validation(vec![format!("{field}: must be a UUID")]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10";
    const USER: &str = "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b11";

    fn find(product_id: Option<&str>, user_id: Option<&str>) -> FindTransactions {
        FindTransactions {
            product_id: product_id.map(Into::into),
            user_id: user_id.map(Into::into),
        }
    }

    #[test]
    fn product_wins_over_user() {
        let filter = find(Some(PRODUCT), Some(USER)).filter().unwrap();
        assert_eq!(filter, TransactionFilter::ByProduct(Uuid::parse_str(PRODUCT).unwrap()));
    }

    #[test]
    fn user_only() {
        let filter = find(None, Some(USER)).filter().unwrap();
        assert_eq!(filter, TransactionFilter::ByUser(Uuid::parse_str(USER).unwrap()));
    }

    #[test]
    fn blank_product_falls_through_to_user() {
        let filter = find(Some(""), Some(USER)).filter().unwrap();
        assert_eq!(filter, TransactionFilter::ByUser(Uuid::parse_str(USER).unwrap()));
    }

    #[test]
    fn no_filter_lists_everything() {
        assert_eq!(find(None, None).filter().unwrap(), TransactionFilter::All);
    }

    #[test]
    fn malformed_id_is_a_validation_error() {
        let err = find(Some("abc"), None).filter().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
