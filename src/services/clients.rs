use std::sync::Arc;

use chrono::Utc;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, instrument};

use crate::db::DbPool;
use crate::dto::client::{CreateClientRequest, UpdateClientRequest};
use crate::entities::client;
use crate::errors::ServiceError;
use crate::validation;

/// Store adapter and orchestration for client records.
///
/// Clients are soft-deleted: a non-null `deleted_at` hides the row from
/// every read without physically removing it.
#[derive(Clone)]
pub struct ClientService {
    db: Arc<DbPool>,
}

impl ClientService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Registers a new client. The store assigns identifier and timestamps;
    /// CPF and zip code are persisted in their normalized form.
    #[instrument(skip(self, input))]
    pub async fn create_client(
        &self,
        mut input: CreateClientRequest,
    ) -> Result<client::Model, ServiceError> {
        validation::require_non_empty("name", &input.name)?;
        validation::check_length("name", &input.name, 3, 255)?;
        validation::require_non_empty("primary_phone", &input.primary_phone)?;
        input.cpf = validation::normalize_cpf(&input.cpf)?;
        if let Some(zip) = input.zip_code.take() {
            input.zip_code = Some(validation::normalize_zip_code(&zip)?);
        }
        if let Some(state) = input.state.as_deref() {
            validation::check_length("state", state, 2, 2)?;
        }

        let now = Utc::now();
        let mut client = input.into_active_model();
        client.created_at = Set(now);
        client.updated_at = Set(now);
        client.deleted_at = Set(None);

        let created = client.insert(&*self.db).await?;
        info!(client_id = created.id, "created client");
        Ok(created)
    }

    /// Fetches a client by id; soft-deleted rows read as absent.
    #[instrument(skip(self))]
    pub async fn get_client(&self, id: i32) -> Result<client::Model, ServiceError> {
        self.find_live(id).await
    }

    /// Lists all live clients.
    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> Result<Vec<client::Model>, ServiceError> {
        let clients = client::Entity::find()
            .filter(client::Column::DeletedAt.is_null())
            .order_by_asc(client::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(clients)
    }

    /// Merges the supplied fields onto the stored row and saves the result.
    ///
    /// Read and write are two round trips; a row deleted in between
    /// surfaces as a store error rather than NotFound.
    #[instrument(skip(self, input))]
    pub async fn update_client(
        &self,
        id: i32,
        mut input: UpdateClientRequest,
    ) -> Result<client::Model, ServiceError> {
        if let Some(name) = input.name.as_deref() {
            validation::check_length("name", name, 3, 255)?;
        }
        if let Some(zip) = input.zip_code.take() {
            input.zip_code = Some(validation::normalize_zip_code(&zip)?);
        }
        if let Some(state) = input.state.as_deref() {
            validation::check_length("state", state, 2, 2)?;
        }

        let current = self.find_live(id).await?;
        let mut merged = input.merge_into(current);
        merged.updated_at = Utc::now();

        let updated = full_row(merged).update(&*self.db).await?;
        info!(client_id = updated.id, "updated client");
        Ok(updated)
    }

    /// Soft-deletes a client by stamping `deleted_at`.
    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: i32) -> Result<(), ServiceError> {
        let current = self.find_live(id).await?;
        let mut active: client::ActiveModel = current.into();
        active.deleted_at = Set(Some(Utc::now()));
        active.update(&*self.db).await?;
        info!(client_id = id, "soft-deleted client");
        Ok(())
    }

    async fn find_live(&self, id: i32) -> Result<client::Model, ServiceError> {
        client::Entity::find_by_id(id)
            .filter(client::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Client {} not found", id)))
    }
}

/// Active model writing every column of the merged entity back to the row.
fn full_row(merged: client::Model) -> client::ActiveModel {
    client::ActiveModel {
        id: Unchanged(merged.id),
        name: Set(merged.name),
        cpf: Set(merged.cpf),
        primary_phone: Set(merged.primary_phone),
        secondary_phone: Set(merged.secondary_phone),
        email: Set(merged.email),
        status: Set(merged.status),
        zip_code: Set(merged.zip_code),
        street: Set(merged.street),
        number: Set(merged.number),
        complement: Set(merged.complement),
        neighborhood: Set(merged.neighborhood),
        city: Set(merged.city),
        state: Set(merged.state),
        created_at: Set(merged.created_at),
        updated_at: Set(merged.updated_at),
        deleted_at: Set(merged.deleted_at),
    }
}
