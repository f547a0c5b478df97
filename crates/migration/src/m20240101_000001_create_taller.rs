//! Create `taller` table.
//!
//! One row per workshop service record. Every column but the id is free text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Taller::Table)
                    .if_not_exists()
                    .col(pk_auto(Taller::Id))
                    .col(string(Taller::Nombre).default(""))
                    .col(string(Taller::Correo).default(""))
                    .col(string(Taller::Telefono).default(""))
                    .col(string(Taller::Equipo).default(""))
                    .col(text(Taller::Diagnostico))
                    .col(text(Taller::Resultados))
                    .col(string(Taller::Decision).default(""))
                    .col(string(Taller::Taller).default(""))
                    .col(string(Taller::Servicio).default(""))
                    .col(string(Taller::Entrega).default(""))
                    .col(string(Taller::Fecha).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Taller::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Taller {
    Table,
    Id,
    Nombre,
    Correo,
    Telefono,
    Equipo,
    Diagnostico,
    Resultados,
    Decision,
    Taller,
    Servicio,
    Entrega,
    Fecha,
}
