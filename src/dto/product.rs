//! Request/response shapes for the product catalog.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::product;

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub price: f64,
}

impl CreateProductRequest {
    /// Maps the validated payload onto a fresh entity; identifier and
    /// timestamps belong to the store layer.
    pub fn into_active_model(self) -> product::ActiveModel {
        product::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            price: Set(self.price),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

/// Partial update for an existing product.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    /// Overwrites only the supplied fields on a copy of the stored entity.
    pub fn merge_into(self, current: product::Model) -> product::Model {
        let mut merged = current;
        if let Some(name) = self.name {
            merged.name = name;
        }
        if let Some(price) = self.price {
            merged.price = price;
        }
        merged
    }
}

/// Externally visible product representation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}
