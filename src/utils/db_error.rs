//! SQLx error classification helpers.

/// Returns true when `e` is a unique violation on the `short_code` column.
///
/// Used to turn a racing insert into a 409 instead of a 500; the constraint
/// is the authoritative uniqueness guard.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("urls_short_code_key"))
}
