use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::imageboard::ImageboardRepository,
    model::imageboard::{CreateImageboardParam, RowRange},
};

mod count;
mod create;
mod delete;
mod find_by_seq;
mod find_range;
