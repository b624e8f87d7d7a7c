use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "imageboard")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    pub imageid: String,
    pub imagename: String,
    pub imageprice: i32,
    pub imageqty: i32,
    #[sea_orm(column_type = "Text")]
    pub imagecontent: String,
    pub image1: Option<String>,
    pub logtime: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
