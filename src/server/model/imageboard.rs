//! Domain & parameter models for image board operations
//!
//! Defines the board entry domain model, the parameters used to create an entry, and the
//! pagination arithmetic used by the list endpoint.

use chrono::NaiveDate;
use sea_orm::ActiveValue;

use crate::model::{
    api::ResultStatus,
    imageboard::{ImageboardDto, ImageboardListDto, ImageboardWriteDto},
};

/// Number of entries shown per list page.
pub const PAGE_SIZE: i64 = 5;

/// Number of page links shown per navigation block.
pub const PAGE_BLOCK: i64 = 3;

/// The board entry domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Imageboard {
    pub seq: i32,
    pub image_id: String,
    pub image_name: String,
    pub image_price: i32,
    pub image_qty: i32,
    pub image_content: String,
    pub image1: Option<String>,
    pub logtime: NaiveDate,
}

impl Imageboard {
    /// Converts an entity model to the board entry domain model
    pub fn from_entity(entity: entity::imageboard::Model) -> Self {
        Self {
            seq: entity.seq,
            image_id: entity.imageid,
            image_name: entity.imagename,
            image_price: entity.imageprice,
            image_qty: entity.imageqty,
            image_content: entity.imagecontent,
            image1: entity.image1,
            logtime: entity.logtime,
        }
    }

    /// Converts the domain model into the item DTO used by list and view
    pub fn into_dto(self) -> ImageboardDto {
        ImageboardDto {
            seq: self.seq,
            imageid: self.image_id,
            imagename: self.image_name,
            imageprice: self.image_price,
            imageqty: self.image_qty,
            imagecontent: self.image_content,
            image1: self.image1,
            logtime: self.logtime,
        }
    }
}

/// Parameters for creating a new board entry
///
/// `image1` and `logtime` are always decided by the server, never taken from the form.
#[derive(Debug, Clone)]
pub struct CreateImageboardParam {
    pub image_id: String,
    pub image_name: String,
    pub image_price: i32,
    pub image_qty: i32,
    pub image_content: String,
    pub image1: Option<String>,
    pub logtime: NaiveDate,
}

impl CreateImageboardParam {
    /// Builds the create parameters from the submitted form fields
    ///
    /// # Arguments
    /// - `dto` - Text fields of the write form
    /// - `image1` - Storage key of the saved upload, if any
    /// - `logtime` - Date stamped on the entry
    pub fn from_dto(dto: ImageboardWriteDto, image1: Option<String>, logtime: NaiveDate) -> Self {
        Self {
            image_id: dto.image_id,
            image_name: dto.image_name,
            image_price: dto.image_price,
            image_qty: dto.image_qty,
            image_content: dto.image_content,
            image1,
            logtime,
        }
    }

    /// Converts the parameters into an active model ready for insert
    ///
    /// `seq` is left unset so the database assigns it.
    pub fn into_active_model(self) -> entity::imageboard::ActiveModel {
        entity::imageboard::ActiveModel {
            imageid: ActiveValue::Set(self.image_id),
            imagename: ActiveValue::Set(self.image_name),
            imageprice: ActiveValue::Set(self.image_price),
            imageqty: ActiveValue::Set(self.image_qty),
            imagecontent: ActiveValue::Set(self.image_content),
            image1: ActiveValue::Set(self.image1),
            logtime: ActiveValue::Set(self.logtime),
            ..Default::default()
        }
    }
}

/// Inclusive 1-based row positions, in descending `seq` order, covered by a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start_num: i64,
    pub end_num: i64,
}

impl RowRange {
    /// Row range for page `pg`: `end_num = pg * 5`, `start_num = end_num - 4`
    pub fn for_page(pg: i32) -> Self {
        let end_num = i64::from(pg) * PAGE_SIZE;

        Self {
            start_num: end_num - (PAGE_SIZE - 1),
            end_num,
        }
    }

    /// Offset and limit selecting this range, clamped to the first row
    ///
    /// # Returns
    /// - `Some((offset, limit))` - At least one position of the range is 1 or greater
    /// - `None` - The range lies entirely below the first row
    pub fn offset_limit(&self) -> Option<(u64, u64)> {
        if self.end_num < 1 {
            return None;
        }

        let start = self.start_num.max(1);
        let offset = (start - 1) as u64;
        let limit = (self.end_num - start + 1) as u64;

        Some((offset, limit))
    }
}

/// Page navigation metadata returned alongside a list page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBlock {
    pub total_p: i32,
    pub start_page: i32,
    pub end_page: i32,
}

impl PageBlock {
    /// Computes the total page count and the 3-page navigation block containing `pg`
    ///
    /// Integer division truncates toward zero, so non-positive pages land in the block
    /// starting at page 1.
    pub fn compute(pg: i32, total_rows: u64) -> Self {
        let total_rows = i64::try_from(total_rows).unwrap_or(i64::MAX - PAGE_SIZE);
        let total_p = (total_rows + PAGE_SIZE - 1) / PAGE_SIZE;
        let start_page = (i64::from(pg) - 1) / PAGE_BLOCK * PAGE_BLOCK + 1;
        let end_page = (start_page + PAGE_BLOCK - 1).min(total_p);

        Self {
            total_p: clamp_i32(total_p),
            start_page: clamp_i32(start_page),
            end_page: clamp_i32(end_page),
        }
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// One page of board entries with its navigation metadata
#[derive(Debug, Clone)]
pub struct ImageboardPage {
    pub pg: i32,
    pub block: PageBlock,
    pub items: Vec<Imageboard>,
}

impl ImageboardPage {
    pub fn into_dto(self) -> ImageboardListDto {
        let items: Vec<ImageboardDto> = self.items.into_iter().map(Imageboard::into_dto).collect();

        ImageboardListDto {
            rt: ResultStatus::Ok,
            total: items.len(),
            pg: self.pg,
            total_p: self.block.total_p,
            start_page: self.block.start_page,
            end_page: self.block.end_page,
            items,
        }
    }
}

/// A file part received by the write endpoint
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as sent by the client. Only its extension is ever reused.
    pub file_name: String,
    pub data: Vec<u8>,
}
