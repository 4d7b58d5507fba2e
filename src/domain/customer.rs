//! Customer entity.
//!
//! One SeaORM entity doubles as the API payload; the store assigns `id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer record
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "customers")]
#[serde(rename_all = "camelCase")]
#[schema(as = Customer)]
pub struct Model {
    /// Store-assigned identity (0 until persisted)
    #[sea_orm(primary_key)]
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    /// Lookup key for `GET /api/customers/{userName}`
    #[sea_orm(unique)]
    #[schema(example = "alice")]
    pub user_name: String,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Nguyen")]
    pub last_name: String,
    #[schema(example = "alice@example.com")]
    pub email_address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build a record that has not been persisted yet.
    pub fn new(
        user_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            user_name: user_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
        }
    }

    /// Check whether the store has assigned an identity
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_is_not_persisted() {
        let customer = Model::new("alice", "Alice", "Nguyen", "alice@example.com");
        assert_eq!(customer.id, 0);
        assert!(!customer.is_persisted());
    }

    #[test]
    fn serializes_in_camel_case() {
        let customer = Model {
            id: 7,
            ..Model::new("alice", "Alice", "Nguyen", "alice@example.com")
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["lastName"], "Nguyen");
        assert_eq!(json["emailAddress"], "alice@example.com");
    }

    #[test]
    fn missing_id_deserializes_as_unpersisted() {
        let customer: Model = serde_json::from_str(
            r#"{"userName":"bob","firstName":"Bob","lastName":"Tran","emailAddress":"bob@example.com"}"#,
        )
        .unwrap();

        assert_eq!(customer.id, 0);
        assert_eq!(customer.user_name, "bob");
    }
}
