//! Helpers for classifying database errors.

/// Returns true if the error is a unique-constraint violation.
///
/// SQLite reports both `UNIQUE` and `PRIMARY KEY` conflicts this way; the
/// tables in this service only carry one user-facing unique column each.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
