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
use crate::entities::quote::{self, QuoteStatus};
use crate::entities::quote_item;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct QuoteInput {
    #[validate(length(min = 1, message = "quote_number is required"))]
    pub quote_number: String,
    pub customer_id: Uuid,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    #[serde(default)]
    pub total: Decimal,
    pub status: QuoteStatus,
    #[serde(default)]
    pub notes: String,
}

/// Service for managing quotes and their line items
#[derive(Clone)]
pub struct QuoteService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl QuoteService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<quote::Model>, ServiceError> {
        let rows = quote::Entity::find()
            .order_by_desc(quote::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<quote::Model>, ServiceError> {
        Ok(quote::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, actor: Uuid, input: QuoteInput) -> Result<quote::Model, ServiceError> {
        let now = Utc::now();
        let model = quote::ActiveModel {
            id: Set(Uuid::new_v4()),
            quote_number: Set(input.quote_number),
            customer_id: Set(input.customer_id),
            project_id: Set(input.project_id),
            issue_date: Set(input.issue_date),
            expiry_date: Set(input.expiry_date),
            subtotal: Set(input.subtotal),
            tax: Set(input.tax),
            total: Set(input.total),
            status: Set(input.status),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor)),
            updated_by: Set(Some(actor)),
        };

        let created = model.insert(&*self.db).await?;
        info!(quote_id = %created.id, "quote created");
        if let Err(err) = self.events.send(Event::QuoteCreated(created.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: QuoteInput,
    ) -> Result<quote::Model, ServiceError> {
        let existing = quote::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("quote {id} not found")))?;

        let mut active: quote::ActiveModel = existing.into();
        active.quote_number = Set(input.quote_number);
        active.customer_id = Set(input.customer_id);
        active.project_id = Set(input.project_id);
        active.issue_date = Set(input.issue_date);
        active.expiry_date = Set(input.expiry_date);
        active.subtotal = Set(input.subtotal);
        active.tax = Set(input.tax);
        active.total = Set(input.total);
        active.status = Set(input.status);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        active.updated_by = Set(Some(actor));

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self.events.send(Event::QuoteUpdated(updated.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    /// Deleting a quote also removes its line items (they are owned by the
    /// document); records that reference the quote keep their weak ids.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = quote::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(quote_id = %id, "quote deleted");
            if let Err(err) = self.events.send(Event::QuoteDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }

    // Line items

    #[instrument(skip(self))]
    pub async fn list_items(&self, quote_id: Uuid) -> Result<Vec<quote_item::Model>, ServiceError> {
        Ok(quote_item::Entity::find()
            .filter(quote_item::Column::QuoteId.eq(quote_id))
            .order_by_asc(quote_item::Column::LineNumber)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn add_item(
        &self,
        quote_id: Uuid,
        input: LineItemInput,
    ) -> Result<quote_item::Model, ServiceError> {
        quote::Entity::find_by_id(quote_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("quote {quote_id} not found")))?;

        let now = Utc::now();
        let model = quote_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            quote_id: Set(quote_id),
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
            .send(Event::LineItemsChanged { parent_id: quote_id })
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(
        &self,
        quote_id: Uuid,
        item_id: Uuid,
        input: LineItemInput,
    ) -> Result<quote_item::Model, ServiceError> {
        let existing = quote_item::Entity::find_by_id(item_id)
            .filter(quote_item::Column::QuoteId.eq(quote_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("quote item {item_id} not found on quote {quote_id}"))
            })?;

        let mut active: quote_item::ActiveModel = existing.into();
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
            .send(Event::LineItemsChanged { parent_id: quote_id })
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, quote_id: Uuid, item_id: Uuid) -> Result<(), ServiceError> {
        let result = quote_item::Entity::delete_many()
            .filter(quote_item::Column::Id.eq(item_id))
            .filter(quote_item::Column::QuoteId.eq(quote_id))
            .exec(&*self.db)
            .await?;
        if result.rows_affected > 0 {
            if let Err(err) = self
                .events
                .send(Event::LineItemsChanged { parent_id: quote_id })
                .await
            {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
