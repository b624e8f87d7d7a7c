//! Member factory for creating test member entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// Defaults come from `fixture::member::entity()` with a unique ID so several members
/// can be created in the same test.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .id("kim")
///     .pwd("secret")
///     .name("Kim")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::member::Model,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::member::entity();
        entity.id = format!("member_{}", id);
        entity.name = format!("Member {}", id);

        Self { db, entity }
    }

    /// Sets the login ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    /// Sets the plaintext password.
    pub fn pwd(mut self, pwd: impl Into<String>) -> Self {
        self.entity.pwd = pwd.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let entity = self.entity;
        entity::member::ActiveModel {
            id: ActiveValue::Set(entity.id),
            pwd: ActiveValue::Set(entity.pwd),
            name: ActiveValue::Set(entity.name),
            gender: ActiveValue::Set(entity.gender),
            email1: ActiveValue::Set(entity.email1),
            email2: ActiveValue::Set(entity.email2),
            tel1: ActiveValue::Set(entity.tel1),
            tel2: ActiveValue::Set(entity.tel2),
            tel3: ActiveValue::Set(entity.tel3),
            addr: ActiveValue::Set(entity.addr),
            logtime: ActiveValue::Set(entity.logtime),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
