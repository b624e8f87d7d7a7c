//! Member fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::member;

/// Default test member ID.
pub const DEFAULT_ID: &str = "hong";

/// Default test member password.
pub const DEFAULT_PWD: &str = "1234";

/// Default test member display name.
pub const DEFAULT_NAME: &str = "Hong Gildong";

/// Creates a member entity model with default values.
///
/// # Default Values
/// - id: `"hong"`
/// - pwd: `"1234"`
/// - name: `"Hong Gildong"`
/// - gender: `Some("M")`
/// - contact fields: `None`
/// - logtime: `2025-01-01`
pub fn entity() -> member::Model {
    member::Model {
        id: DEFAULT_ID.to_string(),
        pwd: DEFAULT_PWD.to_string(),
        name: DEFAULT_NAME.to_string(),
        gender: Some("M".to_string()),
        email1: None,
        email2: None,
        tel1: None,
        tel2: None,
        tel3: None,
        addr: None,
        logtime: NaiveDate::from_ymd_opt(2025, 1, 1),
    }
}
