use arabjoin::audit::{audit, audit_transparent_marks, TableAnomaly};
use arabjoin::forms::arabic_table;
use arabjoin::transparent::TRANSPARENT_MARKS;

#[test]
fn transparent_marks_are_consistent() {
    assert_eq!(audit_transparent_marks(TRANSPARENT_MARKS), vec![]);
}

#[test]
fn builtin_anomalies_are_the_shadowed_rows() {
    let anomalies = audit();
    let shadowed = anomalies
        .iter()
        .map(|anomaly| match anomaly {
            TableAnomaly::ShadowedRow { index, .. } => *index,
            other => panic!("unexpected anomaly: {}", other),
        })
        .collect::<Vec<_>>();

    assert_eq!(shadowed, arabic_table().shadowed());
    assert!(anomalies.contains(&TableAnomaly::ShadowedRow {
        index: 143,
        base: 0x06D0,
        first_index: 128,
    }));
}
