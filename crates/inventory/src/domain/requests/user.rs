use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane.doe@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "+62 812 3456 7890")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, name: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.into(),
            name: name.into(),
            phone: None,
        }
    }

    #[test]
    fn accepts_well_formed_user() {
        assert!(request("jane@example.com", "Jane").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let errors = request("not-an-email", "Jane").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn rejects_empty_name() {
        let errors = request("jane@example.com", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
