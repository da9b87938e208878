use raft_trim::adapters::{parse_adapter, parse_window};

#[test]
fn test_parse_adapter_uppercases() {
    assert_eq!(parse_adapter("tgcaGGGG").unwrap(), "TGCAGGGG");
}

#[test]
fn test_parse_adapter_accepts_iupac() {
    assert_eq!(parse_adapter("GATCNRY").unwrap(), "GATCNRY");
}

#[test]
fn test_parse_adapter_rejects_empty() {
    let err = parse_adapter("").unwrap_err();
    assert!(err.contains("cannot be empty"));
}

#[test]
fn test_parse_adapter_rejects_bad_character() {
    let err = parse_adapter("GATX").unwrap_err();
    assert!(err.contains("'X'"));
}

#[test]
fn test_parse_window() {
    assert_eq!(parse_window("30").unwrap(), 30);
    assert_eq!(parse_window("1").unwrap(), 1);
    // 窗口至少为 1
    assert!(parse_window("0").unwrap_err().contains("at least 1"));
    assert!(parse_window("-3").is_err());
    assert!(parse_window("abc").is_err());
}
