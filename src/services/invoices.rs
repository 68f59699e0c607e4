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
use crate::entities::invoice::{self, InvoiceStatus};
use crate::entities::invoice_item;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InvoiceInput {
    #[validate(length(min = 1, message = "invoice_number is required"))]
    pub invoice_number: String,
    pub customer_id: Uuid,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    /// Weak reference to the originating sales order, if any.
    #[serde(default)]
    pub sales_order_id: Option<Uuid>,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    #[serde(default)]
    pub total: Decimal,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

/// Service for managing invoices and their line items
#[derive(Clone)]
pub struct InvoiceService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl InvoiceService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<invoice::Model>, ServiceError> {
        let rows = invoice::Entity::find()
            .order_by_desc(invoice::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<invoice::Model>, ServiceError> {
        Ok(invoice::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        input: InvoiceInput,
    ) -> Result<invoice::Model, ServiceError> {
        let now = Utc::now();
        let model = invoice::ActiveModel {
            id: Set(Uuid::new_v4()),
            invoice_number: Set(input.invoice_number),
            customer_id: Set(input.customer_id),
            project_id: Set(input.project_id),
            sales_order_id: Set(input.sales_order_id),
            issue_date: Set(input.issue_date),
            due_date: Set(input.due_date),
            subtotal: Set(input.subtotal),
            tax: Set(input.tax),
            total: Set(input.total),
            status: Set(input.status),
            payment_date: Set(input.payment_date),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor)),
            updated_by: Set(Some(actor)),
        };

        let created = model.insert(&*self.db).await?;
        info!(invoice_id = %created.id, "invoice created");
        if let Err(err) = self.events.send(Event::InvoiceCreated(created.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: InvoiceInput,
    ) -> Result<invoice::Model, ServiceError> {
        let existing = invoice::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("invoice {id} not found")))?;

        let mut active: invoice::ActiveModel = existing.into();
        active.invoice_number = Set(input.invoice_number);
        active.customer_id = Set(input.customer_id);
        active.project_id = Set(input.project_id);
        active.sales_order_id = Set(input.sales_order_id);
        active.issue_date = Set(input.issue_date);
        active.due_date = Set(input.due_date);
        active.subtotal = Set(input.subtotal);
        active.tax = Set(input.tax);
        active.total = Set(input.total);
        active.status = Set(input.status);
        active.payment_date = Set(input.payment_date);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        active.updated_by = Set(Some(actor));

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self.events.send(Event::InvoiceUpdated(updated.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    /// Deleting an invoice removes its line items and delivery log entries
    /// with it; weak references from other documents are left as-is.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = invoice::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(invoice_id = %id, "invoice deleted");
            if let Err(err) = self.events.send(Event::InvoiceDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }

    // Line items

    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        invoice_id: Uuid,
    ) -> Result<Vec<invoice_item::Model>, ServiceError> {
        Ok(invoice_item::Entity::find()
            .filter(invoice_item::Column::InvoiceId.eq(invoice_id))
            .order_by_asc(invoice_item::Column::LineNumber)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn add_item(
        &self,
        invoice_id: Uuid,
        input: LineItemInput,
    ) -> Result<invoice_item::Model, ServiceError> {
        invoice::Entity::find_by_id(invoice_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("invoice {invoice_id} not found")))?;

        let now = Utc::now();
        let model = invoice_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            invoice_id: Set(invoice_id),
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
                parent_id: invoice_id,
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
        invoice_id: Uuid,
        item_id: Uuid,
        input: LineItemInput,
    ) -> Result<invoice_item::Model, ServiceError> {
        let existing = invoice_item::Entity::find_by_id(item_id)
            .filter(invoice_item::Column::InvoiceId.eq(invoice_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "invoice item {item_id} not found on invoice {invoice_id}"
                ))
            })?;

        let mut active: invoice_item::ActiveModel = existing.into();
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
                parent_id: invoice_id,
            })
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, invoice_id: Uuid, item_id: Uuid) -> Result<(), ServiceError> {
        let result = invoice_item::Entity::delete_many()
            .filter(invoice_item::Column::Id.eq(item_id))
            .filter(invoice_item::Column::InvoiceId.eq(invoice_id))
            .exec(&*self.db)
            .await?;
        if result.rows_affected > 0 {
            if let Err(err) = self
                .events
                .send(Event::LineItemsChanged {
                    parent_id: invoice_id,
                })
                .await
            {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
