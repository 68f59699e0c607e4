use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::search;
use crate::db::DbPool;
use crate::entities::project::{self, ProjectStatus};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProjectInput {
    pub customer_id: Uuid,
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

/// Service for managing project records
#[derive(Clone)]
pub struct ProjectService {
    db: Arc<DbPool>,
    events: EventSender,
}

impl ProjectService {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self { db, events }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<project::Model>, ServiceError> {
        let rows = project::Entity::find()
            .order_by_desc(project::Column::UpdatedAt)
            .all(&*self.db)
            .await?;
        Ok(search::filter_records(rows, query))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<project::Model>, ServiceError> {
        Ok(project::Entity::find_by_id(id).one(&*self.db).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: Uuid,
        input: ProjectInput,
    ) -> Result<project::Model, ServiceError> {
        let now = Utc::now();
        let model = project::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(input.customer_id),
            code: Set(input.code),
            name: Set(input.name),
            status: Set(input.status),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor)),
            updated_by: Set(Some(actor)),
        };

        let created = model.insert(&*self.db).await?;
        info!(project_id = %created.id, "project created");
        if let Err(err) = self.events.send(Event::ProjectCreated(created.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        input: ProjectInput,
    ) -> Result<project::Model, ServiceError> {
        let existing = project::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("project {id} not found")))?;

        let mut active: project::ActiveModel = existing.into();
        active.customer_id = Set(input.customer_id);
        active.code = Set(input.code);
        active.name = Set(input.name);
        active.status = Set(input.status);
        active.start_date = Set(input.start_date);
        active.end_date = Set(input.end_date);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        active.updated_by = Set(Some(actor));

        let updated = active.update(&*self.db).await?;
        if let Err(err) = self.events.send(Event::ProjectUpdated(updated.id)).await {
            warn!("event delivery failed: {err}");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = project::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected > 0 {
            info!(project_id = %id, "project deleted");
            if let Err(err) = self.events.send(Event::ProjectDeleted(id)).await {
                warn!("event delivery failed: {err}");
            }
        }
        Ok(())
    }
}
