use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{LoginParam, Member},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks the credentials against stored members
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Id and password matched
    /// - `Ok(None)` - Unknown id or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<Option<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo.find_by_id_and_pwd(&param).await?;

        if member.is_none() {
            tracing::debug!("Login rejected for id '{}'", param.id);
        }

        Ok(member)
    }
}
