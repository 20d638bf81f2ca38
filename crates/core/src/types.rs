/// Primary keys of stored movie rows (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier shared by every record of one import batch.
///
/// A hyphenated UUIDv4 string. The API treats it as an opaque token, so any
/// text is accepted on lookup and unknown values simply match nothing.
pub type ImportId = String;

/// Generate a fresh, unguessable import identifier.
pub fn generate_import_id() -> ImportId {
    uuid::Uuid::new_v4().to_string()
}
