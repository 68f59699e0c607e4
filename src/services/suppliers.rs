use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::search;
use crate::db::DbPool;
use crate::entities::supplier;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SupplierInput {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub name_kana: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub notes: String,
}

/// Service for managing supplier master records
#[derive(Clone)]
pub struct SupplierService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl SupplierService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<supplier::Model>, ServiceError> {
        let rows = supplier::Entity::find()
            .order_by_desc(supplier::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<supplier::Model>, ServiceError> {
        Ok(supplier::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        input: SupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        let now = Utc::now();
        let model = supplier::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(input.code),
            name: Set(input.name),
            name_kana: Set(input.name_kana),
            postal_code: Set(input.postal_code),
            address: Set(input.address),
            phone: Set(input.phone),
            email: Set(input.email),
            contact_person: Set(input.contact_person),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor)),
            updated_by: Set(Some(actor)),
        };

        let created = model.insert(&*self.db).await?;
        info!(supplier_id = %created.id, "supplier created");
        if let Err(err) = self.events.send(Event::SupplierCreated(created.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: SupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        let existing = supplier::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("supplier {id} not found")))?;

        let mut active: supplier::ActiveModel = existing.into();
        active.code = Set(input.code);
        active.name = Set(input.name);
        active.name_kana = Set(input.name_kana);
        active.postal_code = Set(input.postal_code);
        active.address = Set(input.address);
        active.phone = Set(input.phone);
        active.email = Set(input.email);
        active.contact_person = Set(input.contact_person);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        active.updated_by = Set(Some(actor));

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self.events.send(Event::SupplierUpdated(updated.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = supplier::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(supplier_id = %id, "supplier deleted");
            if let Err(err) = self.events.send(Event::SupplierDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
