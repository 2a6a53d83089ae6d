use super::*;

#[test]
fn logger_init_failure_names_the_cause() {
    let message = logger_init_failure(&"logger already set");
    assert!(message.starts_with("ecostore:"));
    assert!(message.ends_with("logger already set"));
}
