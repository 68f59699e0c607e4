use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{search, LineItemInput};
use crate::db::DbPool;
use crate::entities::delivery_note;
use crate::entities::delivery_note_item;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeliveryNoteInput {
    #[validate(length(min = 1, message = "delivery_number is required"))]
    pub delivery_number: String,
    pub customer_id: Uuid,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub sales_order_id: Option<Uuid>,
    pub delivery_date: NaiveDate,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub notes: String,
}

/// Service for managing delivery notes and their line items
#[derive(Clone)]
pub struct DeliveryNoteService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl DeliveryNoteService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<delivery_note::Model>, ServiceError> {
        let rows = delivery_note::Entity::find()
            .order_by_desc(delivery_note::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<delivery_note::Model>, ServiceError> {
        Ok(delivery_note::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        input: DeliveryNoteInput,
    ) -> Result<delivery_note::Model, ServiceError> {
        let now = Utc::now();
        let model = delivery_note::ActiveModel {
            id: Set(Uuid::new_v4()),
            delivery_number: Set(input.delivery_number),
            customer_id: Set(input.customer_id),
            project_id: Set(input.project_id),
            sales_order_id: Set(input.sales_order_id),
            delivery_date: Set(input.delivery_date),
            subtotal: Set(input.subtotal),
            tax: Set(input.tax),
            total: Set(input.total),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor)),
            updated_by: Set(Some(actor)),
        };

        let created = model.insert(&*self.db).await?;
        info!(delivery_note_id = %created.id, "delivery note created");
        if let Err(err) = self
            .events
            .send(Event::DeliveryNoteCreated(created.id))
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: DeliveryNoteInput,
    ) -> Result<delivery_note::Model, ServiceError> {
        let existing = delivery_note::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("delivery note {id} not found")))?;

        let mut active: delivery_note::ActiveModel = existing.into();
        active.delivery_number = Set(input.delivery_number);
        active.customer_id = Set(input.customer_id);
        active.project_id = Set(input.project_id);
        active.sales_order_id = Set(input.sales_order_id);
        active.delivery_date = Set(input.delivery_date);
        active.subtotal = Set(input.subtotal);
        active.tax = Set(input.tax);
        active.total = Set(input.total);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        active.updated_by = Set(Some(actor));

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self
            .events
            .send(Event::DeliveryNoteUpdated(updated.id))
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = delivery_note::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(delivery_note_id = %id, "delivery note deleted");
            if let Err(err) = self.events.send(Event::DeliveryNoteDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }

    // Line items

    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        delivery_note_id: Uuid,
    ) -> Result<Vec<delivery_note_item::Model>, ServiceError> {
        Ok(delivery_note_item::Entity::find()
            .filter(delivery_note_item::Column::DeliveryNoteId.eq(delivery_note_id))
            .order_by_asc(delivery_note_item::Column::LineNumber)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn add_item(
        &self,
        delivery_note_id: Uuid,
        input: LineItemInput,
    ) -> Result<delivery_note_item::Model, ServiceError> {
        delivery_note::Entity::find_by_id(delivery_note_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("delivery note {delivery_note_id} not found"))
            })?;

        let now = Utc::now();
        let model = delivery_note_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            delivery_note_id: Set(delivery_note_id),
            line_number: Set(input.line_number),
            item_name: Set(input.item_name),
            description: Set(input.description),
            quantity: Set(input.quantity),
            unit_price: Set(input.unit_price),
            amount: Set(input.amount),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        if let Err(err) = self
            .events
            .send(Event::LineItemsChanged {
                parent_id: delivery_note_id,
            })
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(
        &self,
        delivery_note_id: Uuid,
        item_id: Uuid,
        input: LineItemInput,
    ) -> Result<delivery_note_item::Model, ServiceError> {
        let existing = delivery_note_item::Entity::find_by_id(item_id)
            .filter(delivery_note_item::Column::DeliveryNoteId.eq(delivery_note_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "item {item_id} not found on delivery note {delivery_note_id}"
                ))
            })?;

        let mut active: delivery_note_item::ActiveModel = existing.into();
        active.line_number = Set(input.line_number);
        active.item_name = Set(input.item_name);
        active.description = Set(input.description);
        active.quantity = Set(input.quantity);
        active.unit_price = Set(input.unit_price);
        active.amount = Set(input.amount);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self
            .events
            .send(Event::LineItemsChanged {
                parent_id: delivery_note_id,
            })
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        delivery_note_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), ServiceError> {
        let result = delivery_note_item::Entity::delete_many()
            .filter(delivery_note_item::Column::Id.eq(item_id))
            .filter(delivery_note_item::Column::DeliveryNoteId.eq(delivery_note_id))
            .exec(&*self.db)
            .await?;
        if result.rows_affected > 0 {
            if let Err(err) = self
                .events
                .send(Event::LineItemsChanged {
                    parent_id: delivery_note_id,
                })
                .await
            {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
