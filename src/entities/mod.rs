//! Entity schemas shared across every screen of the record-management
//! surface. Master data (customers, suppliers, projects) and document
//! entities (quotes, sales orders, invoices, delivery notes) are flat
//! records; line items belong to exactly one parent document.

pub mod customer;
pub mod delivery_note;
pub mod delivery_note_item;
pub mod invoice;
pub mod invoice_delivery_log;
pub mod invoice_item;
pub mod project;
pub mod quote;
pub mod quote_item;
pub mod sales_order;
pub mod supplier;
