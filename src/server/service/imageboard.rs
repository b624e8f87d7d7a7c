use sea_orm::DatabaseConnection;

use crate::{
    model::imageboard::ImageboardWriteDto,
    server::{
        data::imageboard::ImageboardRepository,
        error::AppError,
        model::imageboard::{
            CreateImageboardParam, Imageboard, ImageboardPage, PageBlock, RowRange, UploadedFile,
        },
        service::storage::UploadStorage,
    },
};

pub struct ImageboardService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a UploadStorage,
}

impl<'a> ImageboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a UploadStorage) -> Self {
        Self { db, storage }
    }

    /// Stores the optional upload and inserts a new board entry stamped with today's date
    ///
    /// # Returns
    /// - `Ok(Some(Imageboard))` - Entry created
    /// - `Ok(None)` - The upload could not be written; no entry was created
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn write(
        &self,
        dto: ImageboardWriteDto,
        file: Option<UploadedFile>,
    ) -> Result<Option<Imageboard>, AppError> {
        let image1 = match file {
            Some(file) => match self.storage.save(&file).await {
                Ok(key) => Some(key),
                Err(e) => {
                    tracing::error!("Failed to store upload '{}': {}", file.file_name, e);
                    return Ok(None);
                }
            },
            None => None,
        };

        let logtime = chrono::Local::now().date_naive();
        let param = CreateImageboardParam::from_dto(dto, image1, logtime);

        let entry = ImageboardRepository::new(self.db).create(param).await?;

        Ok(Some(entry))
    }

    /// Gets one page of entries, newest first, with navigation metadata
    pub async fn list(&self, pg: i32) -> Result<ImageboardPage, AppError> {
        let repo = ImageboardRepository::new(self.db);

        let items = repo.find_range(RowRange::for_page(pg)).await?;
        let total = repo.count().await?;

        Ok(ImageboardPage {
            pg,
            block: PageBlock::compute(pg, total),
            items,
        })
    }

    pub async fn view(&self, seq: i32) -> Result<Option<Imageboard>, AppError> {
        let entry = ImageboardRepository::new(self.db).find_by_seq(seq).await?;

        Ok(entry)
    }

    /// Deletes an entry and confirms it is gone
    ///
    /// The stored upload, if any, stays on disk.
    ///
    /// # Returns
    /// - `Ok(true)` - The entry existed and no longer does
    /// - `Ok(false)` - No entry with that `seq`, or it is still present after the delete
    pub async fn delete(&self, seq: i32) -> Result<bool, AppError> {
        let repo = ImageboardRepository::new(self.db);

        if !repo.exists(seq).await? {
            return Ok(false);
        }

        repo.delete(seq).await?;

        Ok(!repo.exists(seq).await?)
    }
}
