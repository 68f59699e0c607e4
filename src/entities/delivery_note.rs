use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery note document (納品書)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub delivery_number: String,
    pub customer_id: Uuid,
    #[sea_orm(nullable)]
    pub project_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub sales_order_id: Option<Uuid>,
    pub delivery_date: Date,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sea_orm(nullable)]
    pub created_by: Option<Uuid>,
    #[sea_orm(nullable)]
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::delivery_note_item::Entity")]
    DeliveryNoteItems,
}

impl Related<super::delivery_note_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryNoteItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
