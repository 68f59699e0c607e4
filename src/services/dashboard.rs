use chrono::{Datelike, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::entities::project::{self, ProjectStatus};
use crate::entities::{customer, quote, supplier};
use crate::errors::ServiceError;

/// Summary counts shown on the dashboard landing screen.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub customers: u64,
    pub suppliers: u64,
    pub active_projects: u64,
    pub quotes_this_month: u64,
}

#[derive(Clone)]
pub struct DashboardService {
    db: Arc<DbPool>,
}

impl DashboardService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<DashboardSummary, ServiceError> {
        let customers = customer::Entity::find().count(&*self.db).await?;
        let suppliers = supplier::Entity::find().count(&*self.db).await?;
        let active_projects = project::Entity::find()
            .filter(project::Column::Status.eq(ProjectStatus::Active))
            .count(&*self.db)
            .await?;

        let today = Utc::now().date_naive();
        let month_start = today
            .with_day(1)
            .expect("the first of the month always exists");
        let quotes_this_month = quote::Entity::find()
            .filter(quote::Column::IssueDate.gte(month_start))
            .filter(quote::Column::IssueDate.lte(today))
            .count(&*self.db)
            .await?;

        Ok(DashboardSummary {
            customers,
            suppliers,
            active_projects,
            quotes_this_month,
        })
    }
}
