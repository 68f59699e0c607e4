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
use crate::entities::customer;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

/// All bound form fields of the customer screen. `code` and `name` are the
/// required fields; everything else defaults to empty.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CustomerInput {
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

/// Service for managing customer master records
#[derive(Clone)]
pub struct CustomerService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl CustomerService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    /// Loads all customers ordered by most recent update, then narrows them
    /// with the in-memory name/code filter.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<customer::Model>, ServiceError> {
        let rows = customer::Entity::find()
            .order_by_desc(customer::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        input: CustomerInput,
    ) -> Result<customer::Model, ServiceError> {
        let now = Utc::now();
        let model = customer::ActiveModel {
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
        info!(customer_id = %created.id, "customer created");
        if let Err(err) = self.events.send(Event::CustomerCreated(created.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    /// Full-record update. The identifier, `created_at` and `created_by` are
    /// never touched; `updated_at`/`updated_by` are refreshed.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: CustomerInput,
    ) -> Result<customer::Model, ServiceError> {
        let existing = customer::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("customer {id} not found")))?;

        let mut active: customer::ActiveModel = existing.into();
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
        if let Err(err) = self.events.send(Event::CustomerUpdated(updated.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    /// Unconditional delete. Removing an already-absent row is not an error;
    /// other records referencing this customer keep their weak ids.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = customer::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(customer_id = %id, "customer deleted");
            if let Err(err) = self.events.send(Event::CustomerDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
