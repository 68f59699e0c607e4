use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_customers_table::Migration),
            Box::new(m20250601_000002_create_suppliers_table::Migration),
            Box::new(m20250601_000003_create_projects_table::Migration),
            Box::new(m20250601_000004_create_quotes_tables::Migration),
            Box::new(m20250601_000005_create_sales_orders_table::Migration),
            Box::new(m20250601_000006_create_invoices_tables::Migration),
            Box::new(m20250601_000007_create_delivery_notes_tables::Migration),
            Box::new(m20250601_000008_create_users_table::Migration),
            Box::new(m20250601_000009_add_list_indexes::Migration),
        ]
    }
}

// Migration implementations

mod m20250601_000001_create_customers_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000001_create_customers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Customers::Code).string().not_null())
                        .col(ColumnDef::new(Customers::Name).string().not_null())
                        .col(ColumnDef::new(Customers::NameKana).string().not_null())
                        .col(ColumnDef::new(Customers::PostalCode).string().not_null())
                        .col(ColumnDef::new(Customers::Address).string().not_null())
                        .col(ColumnDef::new(Customers::Phone).string().not_null())
                        .col(ColumnDef::new(Customers::Email).string().not_null())
                        .col(ColumnDef::new(Customers::ContactPerson).string().not_null())
                        .col(ColumnDef::new(Customers::Notes).string().not_null())
                        .col(
                            ColumnDef::new(Customers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Customers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Customers::CreatedBy).uuid().null())
                        .col(ColumnDef::new(Customers::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Customers {
        Table,
        Id,
        Code,
        Name,
        NameKana,
        PostalCode,
        Address,
        Phone,
        Email,
        ContactPerson,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }
}

mod m20250601_000002_create_suppliers_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000002_create_suppliers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Suppliers::Code).string().not_null())
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(ColumnDef::new(Suppliers::NameKana).string().not_null())
                        .col(ColumnDef::new(Suppliers::PostalCode).string().not_null())
                        .col(ColumnDef::new(Suppliers::Address).string().not_null())
                        .col(ColumnDef::new(Suppliers::Phone).string().not_null())
                        .col(ColumnDef::new(Suppliers::Email).string().not_null())
                        .col(ColumnDef::new(Suppliers::ContactPerson).string().not_null())
                        .col(ColumnDef::new(Suppliers::Notes).string().not_null())
                        .col(
                            ColumnDef::new(Suppliers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Suppliers::CreatedBy).uuid().null())
                        .col(ColumnDef::new(Suppliers::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Suppliers {
        Table,
        Id,
        Code,
        Name,
        NameKana,
        PostalCode,
        Address,
        Phone,
        Email,
        ContactPerson,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }
}

mod m20250601_000003_create_projects_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000003_create_projects_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Projects::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Projects::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Projects::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(Projects::Code).string().not_null())
                        .col(ColumnDef::new(Projects::Name).string().not_null())
                        .col(
                            ColumnDef::new(Projects::Status)
                                .string_len(20)
                                .not_null()
                                .default("active"),
                        )
                        .col(ColumnDef::new(Projects::StartDate).date().null())
                        .col(ColumnDef::new(Projects::EndDate).date().null())
                        .col(ColumnDef::new(Projects::Notes).string().not_null())
                        .col(
                            ColumnDef::new(Projects::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Projects::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Projects::CreatedBy).uuid().null())
                        .col(ColumnDef::new(Projects::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Projects::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Projects {
        Table,
        Id,
        CustomerId,
        Code,
        Name,
        Status,
        StartDate,
        EndDate,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }
}

mod m20250601_000004_create_quotes_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000004_create_quotes_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Quotes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Quotes::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Quotes::QuoteNumber).string().not_null())
                        .col(ColumnDef::new(Quotes::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(Quotes::ProjectId).uuid().null())
                        .col(ColumnDef::new(Quotes::IssueDate).date().not_null())
                        .col(ColumnDef::new(Quotes::ExpiryDate).date().null())
                        .col(
                            ColumnDef::new(Quotes::Subtotal)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotes::Tax)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotes::Total)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotes::Status)
                                .string_len(20)
                                .not_null()
                                .default("draft"),
                        )
                        .col(ColumnDef::new(Quotes::Notes).string().not_null())
                        .col(
                            ColumnDef::new(Quotes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Quotes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Quotes::CreatedBy).uuid().null())
                        .col(ColumnDef::new(Quotes::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await?;

            // Line items are owned by the quote and removed with it.
            manager
                .create_table(
                    Table::create()
                        .table(QuoteItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(QuoteItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(QuoteItems::QuoteId).uuid().not_null())
                        .col(ColumnDef::new(QuoteItems::LineNumber).integer().not_null())
                        .col(ColumnDef::new(QuoteItems::ItemName).string().not_null())
                        .col(ColumnDef::new(QuoteItems::Description).string().not_null())
                        .col(
                            ColumnDef::new(QuoteItems::Quantity)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuoteItems::UnitPrice)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuoteItems::Amount)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuoteItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuoteItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_quote_items_quote_id")
                                .from(QuoteItems::Table, QuoteItems::QuoteId)
                                .to(Quotes::Table, Quotes::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(QuoteItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Quotes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Quotes {
        Table,
        Id,
        QuoteNumber,
        CustomerId,
        ProjectId,
        IssueDate,
        ExpiryDate,
        Subtotal,
        Tax,
        Total,
        Status,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }

    #[derive(DeriveIden)]
    pub(super) enum QuoteItems {
        Table,
        Id,
        QuoteId,
        LineNumber,
        ItemName,
        Description,
        Quantity,
        UnitPrice,
        Amount,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000005_create_sales_orders_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000005_create_sales_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SalesOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SalesOrders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SalesOrders::OrderNumber).string().not_null())
                        .col(ColumnDef::new(SalesOrders::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(SalesOrders::ProjectId).uuid().null())
                        .col(ColumnDef::new(SalesOrders::QuoteId).uuid().null())
                        .col(ColumnDef::new(SalesOrders::OrderDate).date().not_null())
                        .col(ColumnDef::new(SalesOrders::DeliveryDate).date().null())
                        .col(
                            ColumnDef::new(SalesOrders::TotalAmount)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(SalesOrders::Status)
                                .string_len(20)
                                .not_null()
                                .default("pending"),
                        )
                        .col(ColumnDef::new(SalesOrders::Notes).string().not_null())
                        .col(
                            ColumnDef::new(SalesOrders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SalesOrders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SalesOrders::CreatedBy).uuid().null())
                        .col(ColumnDef::new(SalesOrders::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SalesOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SalesOrders {
        Table,
        Id,
        OrderNumber,
        CustomerId,
        ProjectId,
        QuoteId,
        OrderDate,
        DeliveryDate,
        TotalAmount,
        Status,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }
}

mod m20250601_000006_create_invoices_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000006_create_invoices_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Invoices::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Invoices::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Invoices::InvoiceNumber).string().not_null())
                        .col(ColumnDef::new(Invoices::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(Invoices::ProjectId).uuid().null())
                        .col(ColumnDef::new(Invoices::SalesOrderId).uuid().null())
                        .col(ColumnDef::new(Invoices::IssueDate).date().not_null())
                        .col(ColumnDef::new(Invoices::DueDate).date().null())
                        .col(
                            ColumnDef::new(Invoices::Subtotal)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::Tax)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::Total)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::Status)
                                .string_len(20)
                                .not_null()
                                .default("draft"),
                        )
                        .col(ColumnDef::new(Invoices::PaymentDate).date().null())
                        .col(ColumnDef::new(Invoices::Notes).string().not_null())
                        .col(
                            ColumnDef::new(Invoices::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Invoices::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Invoices::CreatedBy).uuid().null())
                        .col(ColumnDef::new(Invoices::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InvoiceItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InvoiceItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InvoiceItems::InvoiceId).uuid().not_null())
                        .col(
                            ColumnDef::new(InvoiceItems::LineNumber)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InvoiceItems::ItemName).string().not_null())
                        .col(
                            ColumnDef::new(InvoiceItems::Description)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::Quantity)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::UnitPrice)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::Amount)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoice_items_invoice_id")
                                .from(InvoiceItems::Table, InvoiceItems::InvoiceId)
                                .to(Invoices::Table, Invoices::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InvoiceDeliveryLogs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::InvoiceId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::DeliveryMethod)
                                .string_len(10)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::RecipientEmail)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::DeliveredAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::DeliveredBy)
                                .uuid()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::Notes)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceDeliveryLogs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoice_delivery_logs_invoice_id")
                                .from(InvoiceDeliveryLogs::Table, InvoiceDeliveryLogs::InvoiceId)
                                .to(Invoices::Table, Invoices::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InvoiceDeliveryLogs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(InvoiceItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Invoices::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Invoices {
        Table,
        Id,
        InvoiceNumber,
        CustomerId,
        ProjectId,
        SalesOrderId,
        IssueDate,
        DueDate,
        Subtotal,
        Tax,
        Total,
        Status,
        PaymentDate,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }

    #[derive(DeriveIden)]
    pub(super) enum InvoiceItems {
        Table,
        Id,
        InvoiceId,
        LineNumber,
        ItemName,
        Description,
        Quantity,
        UnitPrice,
        Amount,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum InvoiceDeliveryLogs {
        Table,
        Id,
        InvoiceId,
        DeliveryMethod,
        RecipientEmail,
        DeliveredAt,
        DeliveredBy,
        Notes,
        CreatedAt,
    }
}

mod m20250601_000007_create_delivery_notes_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000007_create_delivery_notes_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DeliveryNotes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DeliveryNotes::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNotes::DeliveryNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DeliveryNotes::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(DeliveryNotes::ProjectId).uuid().null())
                        .col(ColumnDef::new(DeliveryNotes::SalesOrderId).uuid().null())
                        .col(
                            ColumnDef::new(DeliveryNotes::DeliveryDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNotes::Subtotal)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(DeliveryNotes::Tax)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(DeliveryNotes::Total)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(DeliveryNotes::Notes).string().not_null())
                        .col(
                            ColumnDef::new(DeliveryNotes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNotes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DeliveryNotes::CreatedBy).uuid().null())
                        .col(ColumnDef::new(DeliveryNotes::UpdatedBy).uuid().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(DeliveryNoteItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DeliveryNoteItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::DeliveryNoteId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::LineNumber)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::ItemName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::Description)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::Quantity)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::UnitPrice)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::Amount)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryNoteItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_delivery_note_items_delivery_note_id")
                                .from(
                                    DeliveryNoteItems::Table,
                                    DeliveryNoteItems::DeliveryNoteId,
                                )
                                .to(DeliveryNotes::Table, DeliveryNotes::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DeliveryNoteItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(DeliveryNotes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DeliveryNotes {
        Table,
        Id,
        DeliveryNumber,
        CustomerId,
        ProjectId,
        SalesOrderId,
        DeliveryDate,
        Subtotal,
        Tax,
        Total,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
    }

    #[derive(DeriveIden)]
    pub(super) enum DeliveryNoteItems {
        Table,
        Id,
        DeliveryNoteId,
        LineNumber,
        ItemName,
        Description,
        Quantity,
        UnitPrice,
        Amount,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000008_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000008_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Users::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(Users::Email)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Users::DisplayName).string().not_null())
                        .col(
                            ColumnDef::new(Users::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Users::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        Email,
        PasswordHash,
        DisplayName,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000009_add_list_indexes {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000009_add_list_indexes"
        }
    }

    // Every list screen orders by updated_at descending; item lookups go
    // through the owning document id.
    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let single: &[(&str, &str)] = &[
                ("idx_customers_updated_at", "customers"),
                ("idx_suppliers_updated_at", "suppliers"),
                ("idx_projects_updated_at", "projects"),
                ("idx_quotes_updated_at", "quotes"),
                ("idx_sales_orders_updated_at", "sales_orders"),
                ("idx_invoices_updated_at", "invoices"),
                ("idx_delivery_notes_updated_at", "delivery_notes"),
            ];

            for (name, table) in single {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(*name)
                            .table(Alias::new(*table))
                            .col(Alias::new("updated_at"))
                            .to_owned(),
                    )
                    .await?;
            }

            let parents: &[(&str, &str, &str)] = &[
                ("idx_quote_items_quote_id", "quote_items", "quote_id"),
                ("idx_invoice_items_invoice_id", "invoice_items", "invoice_id"),
                (
                    "idx_delivery_note_items_delivery_note_id",
                    "delivery_note_items",
                    "delivery_note_id",
                ),
                (
                    "idx_invoice_delivery_logs_invoice_id",
                    "invoice_delivery_logs",
                    "invoice_id",
                ),
            ];

            for (name, table, col) in parents {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(*name)
                            .table(Alias::new(*table))
                            .col(Alias::new(*col))
                            .to_owned(),
                    )
                    .await?;
            }

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let names = [
                "idx_customers_updated_at",
                "idx_suppliers_updated_at",
                "idx_projects_updated_at",
                "idx_quotes_updated_at",
                "idx_sales_orders_updated_at",
                "idx_invoices_updated_at",
                "idx_delivery_notes_updated_at",
                "idx_quote_items_quote_id",
                "idx_invoice_items_invoice_id",
                "idx_delivery_note_items_delivery_note_id",
                "idx_invoice_delivery_logs_invoice_id",
            ];
            for name in names {
                manager
                    .drop_index(Index::drop().name(name).to_owned())
                    .await?;
            }
            Ok(())
        }
    }
}
