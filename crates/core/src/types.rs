/// Primary-key type for every registrar table (Postgres BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp used for row bookkeeping columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
