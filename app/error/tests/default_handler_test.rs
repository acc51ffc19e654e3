//! With no handler installed a fault ends in a panic

use app_error::{check, installed_handler, FaultReport};

#[test]
#[should_panic(expected = "unhandled fault 0x00000009")]
fn test_unhandled_fault_panics() {
    assert!(installed_handler().is_none());
    check(9);
}

#[test]
fn test_display() {
    let report = FaultReport::new(0x2A, 17, Some("src/main.rs"));
    assert_eq!(report.to_string(), "fault 0x0000002A at src/main.rs:17");
    assert_eq!(
        FaultReport::anonymous(0x2A).to_string(),
        "fault 0x0000002A (no location)"
    );
}
