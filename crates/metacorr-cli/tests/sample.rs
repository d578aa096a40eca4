//! Snapshot of the built-in example table the `sample` command emits.

use metacorr_ingest::builtin_csv;

#[test]
fn builtin_dataset_csv() {
    insta::assert_snapshot!(builtin_csv());
}
