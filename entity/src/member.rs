use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pwd: String,
    pub name: String,
    pub gender: Option<String>,
    pub email1: Option<String>,
    pub email2: Option<String>,
    pub tel1: Option<String>,
    pub tel2: Option<String>,
    pub tel3: Option<String>,
    pub addr: Option<String>,
    pub logtime: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
