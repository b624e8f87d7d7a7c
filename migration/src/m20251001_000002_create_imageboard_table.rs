use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Imageboard::Table)
                    .if_not_exists()
                    .col(pk_auto(Imageboard::Seq))
                    .col(string(Imageboard::Imageid))
                    .col(string(Imageboard::Imagename))
                    .col(integer(Imageboard::Imageprice))
                    .col(integer(Imageboard::Imageqty))
                    .col(text(Imageboard::Imagecontent))
                    .col(string_null(Imageboard::Image1))
                    .col(date(Imageboard::Logtime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Imageboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Imageboard {
    Table,
    Seq,
    Imageid,
    Imagename,
    Imageprice,
    Imageqty,
    Imagecontent,
    Image1,
    Logtime,
}
