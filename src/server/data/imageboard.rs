//! Image board data repository for database operations
//!
//! Provides the `ImageboardRepository` for creating, listing, reading and deleting board
//! entries, converting entity models into `Imageboard` domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::imageboard::{CreateImageboardParam, Imageboard, RowRange};

pub struct ImageboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new board entry and returns it with its assigned `seq`
    ///
    /// # Returns
    /// - `Ok(Imageboard)` - The created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateImageboardParam) -> Result<Imageboard, DbErr> {
        let entity = param.into_active_model().insert(self.db).await?;

        Ok(Imageboard::from_entity(entity))
    }

    /// Fetches the entries whose 1-based position in descending `seq` order lies in `range`
    ///
    /// A range entirely below the first row yields an empty list.
    pub async fn find_range(&self, range: RowRange) -> Result<Vec<Imageboard>, DbErr> {
        let Some((offset, limit)) = range.offset_limit() else {
            return Ok(Vec::new());
        };

        let entities = entity::prelude::Imageboard::find()
            .order_by_desc(entity::imageboard::Column::Seq)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Imageboard::from_entity).collect())
    }

    /// Counts all board entries
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Imageboard::find().count(self.db).await
    }

    /// Finds a board entry by its `seq`
    ///
    /// # Returns
    /// - `Ok(Some(Imageboard))` - The entry exists
    /// - `Ok(None)` - No entry with that `seq`
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_seq(&self, seq: i32) -> Result<Option<Imageboard>, DbErr> {
        let entity = entity::prelude::Imageboard::find_by_id(seq)
            .one(self.db)
            .await?;

        Ok(entity.map(Imageboard::from_entity))
    }

    /// Checks whether an entry with the given `seq` exists
    pub async fn exists(&self, seq: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Imageboard::find_by_id(seq)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the entry with the given `seq`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the entry did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, seq: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Imageboard::delete_by_id(seq)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
