//! Domain & parameter models for member login

use crate::model::{
    api::ResultStatus,
    member::{LoginDto, LoginResultDto},
};

/// The member domain model
///
/// Only the fields reported back on a successful login are carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the member into a successful login response
    pub fn into_login_dto(self) -> LoginResultDto {
        LoginResultDto {
            rt: ResultStatus::Ok,
            mem_id: Some(self.id),
            mem_name: Some(self.name),
        }
    }
}

/// Credentials compared against the `member` table
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub id: String,
    pub pwd: String,
}

impl From<LoginDto> for LoginParam {
    fn from(dto: LoginDto) -> Self {
        Self {
            id: dto.id,
            pwd: dto.pwd,
        }
    }
}
