use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240102_000001_create_clients_table::Migration),
            Box::new(m20240102_000002_create_products_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240102_000001_create_clients_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240102_000001_create_clients_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Clients::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Clients::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Clients::Name).string_len(255).not_null())
                        .col(
                            ColumnDef::new(Clients::Cpf)
                                .string_len(14)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Clients::PrimaryPhone)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Clients::SecondaryPhone).string_len(20).null())
                        .col(ColumnDef::new(Clients::Email).string_len(255).null())
                        .col(
                            ColumnDef::new(Clients::Status)
                                .string_len(10)
                                .not_null()
                                .default("active"),
                        )
                        .col(ColumnDef::new(Clients::ZipCode).string_len(10).null())
                        .col(ColumnDef::new(Clients::Street).string_len(255).null())
                        .col(ColumnDef::new(Clients::Number).string_len(20).null())
                        .col(ColumnDef::new(Clients::Complement).string_len(255).null())
                        .col(ColumnDef::new(Clients::Neighborhood).string_len(100).null())
                        .col(ColumnDef::new(Clients::City).string_len(100).null())
                        .col(ColumnDef::new(Clients::State).string_len(2).null())
                        .col(
                            ColumnDef::new(Clients::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Clients::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Clients::DeletedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_clients_deleted_at")
                        .table(Clients::Table)
                        .col(Clients::DeletedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Clients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Clients {
        Table,
        Id,
        Name,
        Cpf,
        PrimaryPhone,
        SecondaryPhone,
        Email,
        Status,
        ZipCode,
        Street,
        Number,
        Complement,
        Neighborhood,
        City,
        State,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }
}

mod m20240102_000002_create_products_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240102_000002_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                        .col(ColumnDef::new(Products::Price).double().not_null())
                        .col(
                            ColumnDef::new(Products::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Products {
        Table,
        Id,
        Name,
        Price,
        CreatedAt,
        UpdatedAt,
    }
}
