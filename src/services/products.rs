use std::sync::Arc;

use chrono::Utc;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::{info, instrument};

use crate::db::DbPool;
use crate::dto::product::{CreateProductRequest, UpdateProductRequest};
use crate::entities::product;
use crate::errors::ServiceError;
use crate::validation;

/// Store adapter and orchestration for the product catalog.
///
/// Unlike clients, products are hard-deleted: the row is physically
/// removed.
#[derive(Clone)]
pub struct ProductService {
    db: Arc<DbPool>,
}

impl ProductService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Adds a product to the catalog. The store assigns identifier and
    /// timestamps.
    #[instrument(skip(self, input))]
    pub async fn create_product(
        &self,
        input: CreateProductRequest,
    ) -> Result<product::Model, ServiceError> {
        validation::require_non_empty("name", &input.name)?;
        validation::check_price(input.price)?;

        let now = Utc::now();
        let mut product = input.into_active_model();
        product.created_at = Set(now);
        product.updated_at = Set(now);

        let created = product.insert(&*self.db).await?;
        info!(product_id = created.id, "created product");
        Ok(created)
    }

    /// Fetches a product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> Result<product::Model, ServiceError> {
        self.find(id).await
    }

    /// Lists the whole catalog.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        let products = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(products)
    }

    /// Merges the supplied fields onto the stored row and saves the result.
    ///
    /// Read and write are two round trips; a row deleted in between
    /// surfaces as a store error rather than NotFound.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: i32,
        input: UpdateProductRequest,
    ) -> Result<product::Model, ServiceError> {
        if let Some(name) = input.name.as_deref() {
            validation::require_non_empty("name", name)?;
        }
        if let Some(price) = input.price {
            validation::check_price(price)?;
        }

        let current = self.find(id).await?;
        let mut merged = input.merge_into(current);
        merged.updated_at = Utc::now();

        let updated = full_row(merged).update(&*self.db).await?;
        info!(product_id = updated.id, "updated product");
        Ok(updated)
    }

    /// Physically removes the row. Products are not soft-deleted.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let product = self.find(id).await?;
        product::Entity::delete_by_id(product.id)
            .exec(&*self.db)
            .await?;
        info!(product_id = id, "deleted product");
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<product::Model, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }
}

/// Active model writing every column of the merged entity back to the row.
fn full_row(merged: product::Model) -> product::ActiveModel {
    product::ActiveModel {
        id: Unchanged(merged.id),
        name: Set(merged.name),
        price: Set(merged.price),
        created_at: Set(merged.created_at),
        updated_at: Set(merged.updated_at),
    }
}
