use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::search;
use crate::db::DbPool;
use crate::entities::invoice;
use crate::entities::invoice_delivery_log::{self, DeliveryMethod};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeliveryLogInput {
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub recipient_email: String,
    /// Defaults to the time the log is recorded.
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
}

/// Service for the append-only invoice delivery log (送付ログ)
#[derive(Clone)]
pub struct DeliveryLogService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl DeliveryLogService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    /// Logs have no update lifecycle, so the list is ordered by creation.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<invoice_delivery_log::Model>, ServiceError> {
        let rows = invoice_delivery_log::Entity::find()
            .order_by_desc(invoice_delivery_log::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn list_for_invoice(
        &self,
        invoice_id: Uuid,
    ) -> Result<Vec<invoice_delivery_log::Model>, ServiceError> {
        Ok(invoice_delivery_log::Entity::find()
            .filter(invoice_delivery_log::Column::InvoiceId.eq(invoice_id))
            .order_by_desc(invoice_delivery_log::Column::DeliveredAt)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        invoice_id: Uuid,
        input: DeliveryLogInput,
    ) -> Result<invoice_delivery_log::Model, ServiceError> {
        invoice::Entity::find_by_id(invoice_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("invoice {invoice_id} not found")))?;

        let now = Utc::now();
        let model = invoice_delivery_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            invoice_id: Set(invoice_id),
            delivery_method: Set(input.delivery_method),
            recipient_email: Set(input.recipient_email),
            delivered_at: Set(input.delivered_at.unwrap_or(now)),
            delivered_by: Set(Some(actor)),
            notes: Set(input.notes),
            created_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        info!(log_id = %created.id, %invoice_id, "invoice delivery logged");
        if let Err(err) = self
            .events
            .send(Event::InvoiceDeliveryLogged { invoice_id })
            .await
        {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        invoice_delivery_log::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
