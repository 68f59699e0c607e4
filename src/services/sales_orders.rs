use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::search;
use crate::db::DbPool;
use crate::entities::sales_order::{self, SalesOrderStatus};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SalesOrderInput {
    #[validate(length(min = 1, message = "order_number is required"))]
    pub order_number: String,
    pub customer_id: Uuid,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    /// Weak reference to the quote this order was raised from, if any.
    #[serde(default)]
    pub quote_id: Option<Uuid>,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_amount: Decimal,
    pub status: SalesOrderStatus,
    #[serde(default)]
    pub notes: String,
}

/// Service for managing sales orders
#[derive(Clone)]
pub struct SalesOrderService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl SalesOrderService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<sales_order::Model>, ServiceError> {
        let rows = sales_order::Entity::find()
            .order_by_desc(sales_order::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<sales_order::Model>, ServiceError> {
        Ok(sales_order::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        input: SalesOrderInput,
    ) -> Result<sales_order::Model, ServiceError> {
        let now = Utc::now();
        let model = sales_order::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_number: Set(input.order_number),
            customer_id: Set(input.customer_id),
            project_id: Set(input.project_id),
            quote_id: Set(input.quote_id),
            order_date: Set(input.order_date),
            delivery_date: Set(input.delivery_date),
            total_amount: Set(input.total_amount),
            status: Set(input.status),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor)),
            updated_by: Set(Some(actor)),
        };

        let created = model.insert(&*self.db).await?;
        info!(sales_order_id = %created.id, "sales order created");
        if let Err(err) = self.events.send(Event::SalesOrderCreated(created.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: SalesOrderInput,
    ) -> Result<sales_order::Model, ServiceError> {
        let existing = sales_order::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("sales order {id} not found")))?;

        let mut active: sales_order::ActiveModel = existing.into();
        active.order_number = Set(input.order_number);
        active.customer_id = Set(input.customer_id);
        active.project_id = Set(input.project_id);
        active.quote_id = Set(input.quote_id);
        active.order_date = Set(input.order_date);
        active.delivery_date = Set(input.delivery_date);
        active.total_amount = Set(input.total_amount);
        active.status = Set(input.status);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        active.updated_by = Set(Some(actor));

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self.events.send(Event::SalesOrderUpdated(updated.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = sales_order::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(sales_order_id = %id, "sales order deleted");
            if let Err(err) = self.events.send(Event::SalesOrderDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
