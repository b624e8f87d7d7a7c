//! Image board fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::imageboard;

/// Default test item ID.
pub const DEFAULT_IMAGE_ID: &str = "img_1";

/// Default test item name.
pub const DEFAULT_IMAGE_NAME: &str = "Instant noodles";

/// Default test item price.
pub const DEFAULT_IMAGE_PRICE: i32 = 1000;

/// Default test item quantity.
pub const DEFAULT_IMAGE_QTY: i32 = 10;

/// Default test item description.
pub const DEFAULT_IMAGE_CONTENT: &str = "Spicy and cheap";

/// Creates an image board entity model with default values.
///
/// The `seq` is `1`, `image1` is `None` and `logtime` is `2025-01-01`.
pub fn entity() -> imageboard::Model {
    imageboard::Model {
        seq: 1,
        imageid: DEFAULT_IMAGE_ID.to_string(),
        imagename: DEFAULT_IMAGE_NAME.to_string(),
        imageprice: DEFAULT_IMAGE_PRICE,
        imageqty: DEFAULT_IMAGE_QTY,
        imagecontent: DEFAULT_IMAGE_CONTENT.to_string(),
        image1: None,
        logtime: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
    }
}
