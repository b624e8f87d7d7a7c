use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::member::{LoginParam, Member};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the member whose id and password both match exactly
    ///
    /// Passwords are stored and compared as plaintext.
    pub async fn find_by_id_and_pwd(&self, param: &LoginParam) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.eq(param.id.as_str()))
            .filter(entity::member::Column::Pwd.eq(param.pwd.as_str()))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }
}
