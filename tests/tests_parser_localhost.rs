//! Parser Tests - Localhost Exclusivity
//!
//! A hostfile naming `localhost` may not name any other host, in either
//! order, regardless of whether localhost itself produced an update.

use hostfile::{HostfileError, NodeRecord, RecordSet, parse_hostfile};
use rstest::rstest;

fn parse_with(input: &str, existing: Vec<NodeRecord>) -> Result<RecordSet, HostfileError> {
    let mut existing: RecordSet = existing.into_iter().collect();
    let mut updates = RecordSet::new();
    parse_hostfile(input, &mut existing, &mut updates)?;
    Ok(updates)
}

fn parse(input: &str) -> Result<RecordSet, HostfileError> {
    parse_with(input, vec![])
}

#[test]
fn test_localhost_alone_is_accepted() {
    let updates = parse("localhost\n").unwrap();
    let records: Vec<_> = updates.into_iter().collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "localhost");
    assert_eq!(records[0].slots, 1);
}

#[test]
fn test_localhost_repeated_accumulates() {
    let updates = parse("localhost\nlocalhost\n").unwrap();
    let records: Vec<_> = updates.into_iter().collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slots, 2);
}

#[test]
fn test_localhost_with_clauses() {
    let updates = parse("localhost slots=4 slots_max=8\n").unwrap();
    let records: Vec<_> = updates.into_iter().collect();
    assert_eq!(records[0].slots, 4);
    assert_eq!(records[0].slots_max, 8);
}

#[rstest]
#[case::localhost_first("localhost\nnode0\n")]
#[case::localhost_last("node0\nlocalhost\n")]
#[case::localhost_between("node0\nlocalhost\nnode1\n")]
#[case::repeated_then_other("localhost\nlocalhost\nnode0\n")]
fn test_mixing_localhost_with_other_hosts_fails(#[case] input: &str) {
    assert!(matches!(parse(input), Err(HostfileError::Exclusivity { .. })));
}

#[test]
fn test_exclusivity_error_names_the_offender() {
    let err = parse("localhost\nnode0\n").unwrap_err();
    match err {
        HostfileError::Exclusivity { line, host } => {
            assert_eq!(line, 2);
            assert_eq!(host, "node0");
        }
        other => panic!("expected exclusivity error, got {other:?}"),
    }
}

#[test]
fn test_unchanged_localhost_still_blocks_other_hosts() {
    // localhost is claimed from the snapshot and dropped unchanged, so the
    // update set stays empty; the per-file flag must still reject node0.
    let existing = vec![NodeRecord {
        name: "localhost".into(),
        slots: 1,
        slots_max: 0,
    }];
    let err = parse_with("localhost\nnode0\n", existing).unwrap_err();
    assert!(matches!(err, HostfileError::Exclusivity { .. }));
}

#[test]
fn test_unchanged_localhost_alone_yields_no_update() {
    let existing = vec![NodeRecord {
        name: "localhost".into(),
        slots: 1,
        slots_max: 0,
    }];
    let updates = parse_with("localhost\n", existing).unwrap();
    assert!(updates.is_empty());
}

#[test]
fn test_flag_resets_between_files() {
    // Each parse owns its exclusivity state; localhost in one file must not
    // taint the next.
    assert!(parse("localhost\n").is_ok());
    assert!(parse("node0\n").is_ok());
}
