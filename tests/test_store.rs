use diag_filter::{InputError, RecordStore};
use serde_json::json;

#[test]
fn test_load_keeps_input_order() {
    let input = concat!(
        "{\"reason\":\"compiler-message\",\"opt_level\":\"0\"}\n",
        "{\"reason\":\"compiler-artifact\",\"opt_level\":\"0\"}\n",
        "{\"reason\":\"build-finished\",\"opt_level\":\"0\"}\n",
    );

    let store = RecordStore::from_lines(input.lines()).unwrap();
    let reasons: Vec<&str> = store
        .records()
        .iter()
        .map(|r| r["reason"].as_str().unwrap())
        .collect();
    assert_eq!(
        reasons,
        vec!["compiler-message", "compiler-artifact", "build-finished"]
    );
}

#[test]
fn test_load_skips_interleaved_noise() {
    let input = concat!(
        "   Compiling diag-filter v0.1.0\n",
        "not json at all\n",
        "{\"reason\":\"error\"}\n",
        "\n",
        "    Finished dev profile\n",
    );

    let store = RecordStore::from_lines(input.lines()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0], json!({"reason": "error"}));
}

#[test]
fn test_duplicate_records_are_kept_separately() {
    let input = "{\"reason\":\"warning\"}\n{\"reason\":\"warning\"}\n";
    let store = RecordStore::from_lines(input.lines()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0], store.records()[1]);
}

#[test]
fn test_malformed_json_is_fatal_not_skipped() {
    let input = "{\"reason\":\"ok\"}\n{not: valid json}\n{\"reason\":\"later\"}\n";
    let err = RecordStore::from_lines(input.lines()).unwrap_err();

    match err {
        InputError::MalformedInput {
            line_number, line, ..
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "{not: valid json}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn test_arbitrary_json_values_survive_round_trip() {
    let input = r#"{"reason":"warning","opt_level":2,"debuginfo":null,"flags":["-W","-D"],"nested":{"code":"E0308"}}"#;
    let store = RecordStore::from_lines([input]).unwrap();
    assert_eq!(
        store.records()[0],
        json!({
            "reason": "warning",
            "opt_level": 2,
            "debuginfo": null,
            "flags": ["-W", "-D"],
            "nested": {"code": "E0308"}
        })
    );
}

#[test]
fn test_no_records_is_not_a_store_error() {
    let store = RecordStore::from_lines("just noise\nmore noise\n".lines()).unwrap();
    assert!(store.is_empty());
}
