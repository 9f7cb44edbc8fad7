/// All entity primary keys are UUIDs, generated as time-ordered v7 values
/// and surfaced to clients as opaque strings.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
