//! Image board factory for creating test board entries.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating image board entries with customizable fields.
///
/// The `seq` is always left to the database so entries get increasing sequence numbers
/// in creation order.
///
/// # Example
///
/// ```rust,ignore
/// let entry = ImageboardFactory::new(&db)
///     .image_name("Coffee")
///     .image_price(4500)
///     .build()
///     .await?;
/// ```
pub struct ImageboardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::imageboard::Model,
}

impl<'a> ImageboardFactory<'a> {
    /// Creates a new ImageboardFactory with default values and a unique item ID.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::imageboard::entity();
        entity.imageid = format!("img_{}", id);

        Self { db, entity }
    }

    /// Sets the item ID.
    pub fn image_id(mut self, image_id: impl Into<String>) -> Self {
        self.entity.imageid = image_id.into();
        self
    }

    /// Sets the item name.
    pub fn image_name(mut self, image_name: impl Into<String>) -> Self {
        self.entity.imagename = image_name.into();
        self
    }

    /// Sets the item price.
    pub fn image_price(mut self, image_price: i32) -> Self {
        self.entity.imageprice = image_price;
        self
    }

    /// Sets the item quantity.
    pub fn image_qty(mut self, image_qty: i32) -> Self {
        self.entity.imageqty = image_qty;
        self
    }

    /// Sets the item description.
    pub fn image_content(mut self, image_content: impl Into<String>) -> Self {
        self.entity.imagecontent = image_content.into();
        self
    }

    /// Sets the stored file key.
    pub fn image1(mut self, image1: Option<&str>) -> Self {
        self.entity.image1 = image1.map(str::to_string);
        self
    }

    /// Sets the write date.
    pub fn logtime(mut self, logtime: NaiveDate) -> Self {
        self.entity.logtime = logtime;
        self
    }

    /// Builds and inserts the entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::imageboard::Model)` - Created entry with its assigned `seq`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::imageboard::Model, DbErr> {
        let entity = self.entity;
        entity::imageboard::ActiveModel {
            seq: ActiveValue::NotSet,
            imageid: ActiveValue::Set(entity.imageid),
            imagename: ActiveValue::Set(entity.imagename),
            imageprice: ActiveValue::Set(entity.imageprice),
            imageqty: ActiveValue::Set(entity.imageqty),
            imagecontent: ActiveValue::Set(entity.imagecontent),
            image1: ActiveValue::Set(entity.image1),
            logtime: ActiveValue::Set(entity.logtime),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entry with default values.
pub async fn create_entry(db: &DatabaseConnection) -> Result<entity::imageboard::Model, DbErr> {
    ImageboardFactory::new(db).build().await
}

/// Creates `count` entries with default values, returned in creation (ascending `seq`) order.
pub async fn create_entries(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::imageboard::Model>, DbErr> {
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(create_entry(db).await?);
    }
    Ok(entries)
}
