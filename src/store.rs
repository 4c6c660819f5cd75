//! Node records and the working collections the parser merges through.
//!
//! A [`RecordSet`] backs both collections of a merge session: the existing
//! snapshot (inventory state at session start) and the update set (net
//! changes, in file order). A record lives in exactly one place at a time —
//! one of the two sets, or in the hands of the line parser — so moving
//! between them is an owned-value move, never a shared reference.

use smol_str::SmolStr;

/// One compute host and its slot accounting.
///
/// `slots_max == 0` means unlimited. Whenever a record is outside the line
/// parser, `slots_max != 0` implies `slots_max >= slots`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Host name, the unique key. Immutable once set.
    pub name: SmolStr,
    /// Execution slots allocated to this host.
    pub slots: u32,
    /// Upper bound on `slots`; 0 = unlimited.
    pub slots_max: u32,
}

impl NodeRecord {
    /// A fresh record with no slots and no cap.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            slots: 0,
            slots_max: 0,
        }
    }
}

/// An ordered collection of [`NodeRecord`]s with claim semantics.
///
/// `claim` is a linear search that removes the matched record and hands it
/// to the caller; a claimed record is either pushed back (possibly changed)
/// or dropped. Order of the remaining records is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<NodeRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the record named `name`, if present.
    pub fn claim(&mut self, name: &str) -> Option<NodeRecord> {
        let idx = self.records.iter().position(|r| r.name == name)?;
        Some(self.records.remove(idx))
    }

    /// Append a record. The caller guarantees the name is not already
    /// present; `claim` before `push` maintains that.
    pub fn push(&mut self, record: NodeRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeRecord> {
        self.records.iter()
    }
}

impl FromIterator<NodeRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = NodeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = NodeRecord;
    type IntoIter = std::vec::IntoIter<NodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = NodeRecord::new("node0");
        assert_eq!(record.slots, 0);
        assert_eq!(record.slots_max, 0);
    }

    #[test]
    fn test_claim_removes_match() {
        let mut set: RecordSet = [NodeRecord::new("a"), NodeRecord::new("b")]
            .into_iter()
            .collect();
        let claimed = set.claim("a").unwrap();
        assert_eq!(claimed.name, "a");
        assert_eq!(set.len(), 1);
        assert!(set.claim("a").is_none());
    }

    #[test]
    fn test_claim_missing() {
        let mut set = RecordSet::new();
        assert!(set.claim("nope").is_none());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut set = RecordSet::new();
        set.push(NodeRecord::new("first"));
        set.push(NodeRecord::new("second"));
        let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
