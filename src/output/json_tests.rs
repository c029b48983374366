use super::*;

fn entry(name: &str, bytes: u64) -> RankedEntry {
    RankedEntry {
        name: name.to_string(),
        display_name: name.to_string(),
        color: "#000".to_string(),
        bytes,
        rank: 0,
        is_minimum: false,
    }
}

#[test]
fn record_keeps_ranked_order() {
    let entries = vec![entry("vue", 10), entry("coi", 20), entry("react", 30)];
    let output = JsonFormatter.format(&entries).unwrap();

    let vue = output.find("\"vue\"").unwrap();
    let coi = output.find("\"coi\"").unwrap();
    let react = output.find("\"react\"").unwrap();
    assert!(vue < coi && coi < react);
}

#[test]
fn record_uses_four_space_indent() {
    let output = JsonFormatter.format(&[entry("coi", 1_234)]).unwrap();
    assert_eq!(
        output,
        "{\n    \"coi\": {\n        \"bundle_size\": 1234\n    }\n}\n"
    );
}

#[test]
fn record_parses_back_in_order() {
    let entries = vec![entry("react", 0), entry("coi", 5), entry("vue", 9)];
    let output = JsonFormatter.format(&entries).unwrap();

    let parsed: ResultsRecord = serde_json::from_str(&output).unwrap();
    let keys: Vec<_> = parsed.keys().cloned().collect();
    assert_eq!(keys, vec!["react", "coi", "vue"]);
    assert_eq!(parsed["vue"].bundle_size, 9);
}

#[test]
fn empty_record_is_empty_object() {
    let output = JsonFormatter.format(&[]).unwrap();
    assert_eq!(output.trim(), "{}");
}
