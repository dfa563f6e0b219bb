//! Entry id generation

use uuid::Uuid;

/// Produce a collision-resistant entry id.
///
/// UUIDv7 puts a millisecond timestamp in the high bits and random bits below it, so ids made
/// later sort after earlier ones.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
