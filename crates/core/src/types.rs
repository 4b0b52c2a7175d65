/// Record identifiers are opaque strings (UUID v4 for generated rows,
/// readable slugs such as `debt-1` for seed rows).
pub type EntityId = String;

/// Calendar dates carry no time zone; `created_at` is the UTC day.
pub type Date = chrono::NaiveDate;

/// Generate a fresh, globally unique record identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

/// Today's date in UTC.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
