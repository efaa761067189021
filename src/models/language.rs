//! Language data model.

use serde::Serialize;

/// Represents a language record from the database.
///
/// # Database Table
///
/// Maps to the `languages` table, seeded from ISO 639. The two-letter
/// ISO 639-1 code is the primary key; stored lowercase.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Language {
    /// ISO 639-1 code, e.g. "en"
    pub code: String,

    /// ISO 639-2/T code, e.g. "eng"
    pub iso639_2: String,

    /// English name, e.g. "German"
    pub name: String,

    /// Name in the language itself, e.g. "Deutsch"
    pub native_name: String,

    /// Whether the language is written right-to-left
    ///
    /// Clients use this to flip input fields and rendered text.
    pub rtl: bool,
}
