use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::member::MemberRepository, model::member::LoginParam};

mod find_by_id_and_pwd;
