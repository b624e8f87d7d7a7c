use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(string(Member::Id).primary_key())
                    .col(string(Member::Pwd))
                    .col(string(Member::Name))
                    .col(string_null(Member::Gender))
                    .col(string_null(Member::Email1))
                    .col(string_null(Member::Email2))
                    .col(string_null(Member::Tel1))
                    .col(string_null(Member::Tel2))
                    .col(string_null(Member::Tel3))
                    .col(string_null(Member::Addr))
                    .col(date_null(Member::Logtime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Pwd,
    Name,
    Gender,
    Email1,
    Email2,
    Tel1,
    Tel2,
    Tel3,
    Addr,
    Logtime,
}
