//! Business-logic layer. Every service follows the same record-management
//! contract: list rows ordered by most recent update with an in-memory text
//! filter, fetch one by id, create with actor stamping, full-record update
//! that refreshes the update audit fields, and unconditional delete.

pub mod customers;
pub mod dashboard;
pub mod delivery_logs;
pub mod delivery_notes;
pub mod invoices;
pub mod projects;
pub mod quotes;
pub mod sales_orders;
pub mod search;
pub mod suppliers;

use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::db::DbPool;
use crate::events::EventSender;

/// A document line item as submitted from the form. The same shape serves
/// quotes, invoices and delivery notes. `amount` is taken as-is; whether it
/// equals `quantity * unit_price` is the submitter's business.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LineItemInput {
    pub line_number: i32,
    #[validate(length(min = 1, message = "item_name is required"))]
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// Services container handed to the HTTP handlers through the app state.
#[derive(Clone)]
pub struct AppServices {
    pub customers: Arc<customers::CustomerService>,
    pub suppliers: Arc<suppliers::SupplierService>,
    pub projects: Arc<projects::ProjectService>,
    pub quotes: Arc<quotes::QuoteService>,
    pub sales_orders: Arc<sales_orders::SalesOrderService>,
    pub invoices: Arc<invoices::InvoiceService>,
    pub delivery_notes: Arc<delivery_notes::DeliveryNoteService>,
    pub delivery_logs: Arc<delivery_logs::DeliveryLogService>,
    pub dashboard: Arc<dashboard::DashboardService>,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>, events: EventSender) -> Self {
        Self {
            customers: Arc::new(customers::CustomerService::new(db.clone(), events.clone())),
            suppliers: Arc::new(suppliers::SupplierService::new(db.clone(), events.clone())),
            projects: Arc::new(projects::ProjectService::new(db.clone(), events.clone())),
            quotes: Arc::new(quotes::QuoteService::new(db.clone(), events.clone())),
            sales_orders: Arc::new(sales_orders::SalesOrderService::new(
                db.clone(),
                events.clone(),
            )),
            invoices: Arc::new(invoices::InvoiceService::new(db.clone(), events.clone())),
            delivery_notes: Arc::new(delivery_notes::DeliveryNoteService::new(
                db.clone(),
                events.clone(),
            )),
            delivery_logs: Arc::new(delivery_logs::DeliveryLogService::new(db.clone(), events)),
            dashboard: Arc::new(dashboard::DashboardService::new(db)),
        }
    }
}
