/// Returns true if the driver reported a `UNIQUE` constraint violation.
///
/// SQLite does not name the violated constraint, and `url.alias` is the only
/// unique column besides the primary key, so the kind alone is enough.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
