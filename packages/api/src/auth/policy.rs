use content::{StoreError, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Read,
    Insert,
    Update,
    Delete,
}

/// Visitors may read published content and leave messages; everything else
/// needs a signed-in admin.
pub fn authorize(table: Table, op: Operation, signed_in: bool) -> Result<(), StoreError> {
    let public = match op {
        Operation::Read => table.is_public_read(),
        Operation::Insert => table.is_public_insert(),
        Operation::Update | Operation::Delete => false,
    };
    if public || signed_in {
        Ok(())
    } else {
        Err(StoreError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_access() {
        for table in [Table::Projects, Table::About, Table::TechNews] {
            assert!(authorize(table, Operation::Read, false).is_ok());
            assert!(authorize(table, Operation::Insert, false).is_err());
            assert!(authorize(table, Operation::Update, false).is_err());
            assert!(authorize(table, Operation::Delete, false).is_err());
        }
        assert!(authorize(Table::Messages, Operation::Insert, false).is_ok());
        assert!(matches!(
            authorize(Table::Messages, Operation::Read, false),
            Err(StoreError::Unauthorized)
        ));
    }

    #[test]
    fn test_admin_access() {
        for table in Table::ALL {
            for op in [
                Operation::Read,
                Operation::Insert,
                Operation::Update,
                Operation::Delete,
            ] {
                assert!(authorize(table, op, true).is_ok());
            }
        }
    }
}
