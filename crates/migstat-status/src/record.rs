//! Per-version migration status record.

use serde::{Deserialize, Serialize};

/// The merged status of one migration version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MigrationRecord {
    /// Version identifier (timestamp or sequence number).
    pub version: u64,
    /// Whether the database has recorded this version as executed.
    pub is_applied: bool,
    /// Whether a definition for this version exists in the local source.
    pub is_present: bool,
}

impl MigrationRecord {
    /// Create a record with both facts set explicitly.
    pub fn new(version: u64, is_present: bool, is_applied: bool) -> Self {
        Self {
            version,
            is_applied,
            is_present,
        }
    }

    /// A record stating only that `version` exists in the local source.
    pub fn present(version: u64) -> Self {
        Self {
            version,
            is_present: true,
            ..Default::default()
        }
    }

    /// A record stating only that `version` is applied on the database.
    pub fn applied(version: u64) -> Self {
        Self {
            version,
            is_applied: true,
            ..Default::default()
        }
    }

    /// Present locally but not yet applied.
    pub fn is_pending(&self) -> bool {
        self.is_present && !self.is_applied
    }

    /// Applied on the database with no local definition.
    pub fn is_orphaned(&self) -> bool {
        self.is_applied && !self.is_present
    }
}

/// Report wording for a status flag.
pub fn status_label(flag: bool) -> &'static str {
    if flag {
        "Present"
    } else {
        "Not Present"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_facts_default_to_false() {
        let p = MigrationRecord::present(5);
        assert!(p.is_present);
        assert!(!p.is_applied);

        let a = MigrationRecord::applied(5);
        assert!(a.is_applied);
        assert!(!a.is_present);
    }

    #[test]
    fn pending_and_orphaned() {
        assert!(MigrationRecord::present(1).is_pending());
        assert!(MigrationRecord::applied(1).is_orphaned());
        let both = MigrationRecord::new(1, true, true);
        assert!(!both.is_pending());
        assert!(!both.is_orphaned());
    }

    #[test]
    fn labels() {
        assert_eq!(status_label(true), "Present");
        assert_eq!(status_label(false), "Not Present");
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_value(MigrationRecord::new(7, true, false)).unwrap();
        assert_eq!(json["version"], 7);
        assert_eq!(json["is_present"], true);
        assert_eq!(json["is_applied"], false);
    }
}
