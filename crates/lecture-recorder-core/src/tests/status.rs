use crate::{RecordState, RecorderError, parse_status};

/// WHAT: A well-formed status line yields all four fields
/// WHY: The controller branches on record_state
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_status_line_when_parsing_then_all_fields_extracted() {
    // Given: A status line for an idle appliance
    let raw = "RECORD:READY,STREAM:RTMP,OFF,NAME:Amphi 15";

    // When: Parsing
    let status = parse_status(raw).unwrap();

    // Then: Every field is extracted
    assert_eq!(status.record_state, RecordState::Ready);
    assert_eq!(status.stream_mode, "RTMP");
    assert_eq!(status.stream_state, "OFF");
    assert_eq!(status.device_name, "Amphi 15");
}

/// WHAT: Tags match regardless of letter case
/// WHY: Appliance firmware versions differ in casing
#[test]
#[allow(clippy::unwrap_used)]
fn given_lowercase_status_line_when_parsing_then_fields_extracted() {
    // Given: A lower-case status line with trailing whitespace
    let raw = "record:on,stream:rtmp,on,name:room-1\r\n";

    // When: Parsing
    let status = parse_status(raw).unwrap();

    // Then: State is normalized and the name kept verbatim
    assert_eq!(status.record_state, RecordState::On);
    assert_eq!(status.stream_mode, "rtmp");
    assert_eq!(status.stream_state, "on");
    assert_eq!(status.device_name, "room-1");
}

/// WHAT: Disabled and unknown states are distinguished
/// WHY: DISABLED refuses a start, unknown states are reported as-is
#[test]
#[allow(clippy::unwrap_used)]
fn given_disabled_and_unknown_states_when_parsing_then_mapped() {
    // Given/When: Two status lines
    let disabled = parse_status("RECORD:Disabled,STREAM:RTMP,OFF,NAME:x").unwrap();
    let other = parse_status("RECORD:paused,STREAM:RTMP,OFF,NAME:x").unwrap();

    // Then: Each maps to its variant
    assert_eq!(disabled.record_state, RecordState::Disabled);
    assert_eq!(other.record_state, RecordState::Other("PAUSED".to_string()));
    assert_eq!(other.record_state.to_string(), "PAUSED");
}

/// WHAT: Lines not matching the pattern are rejected
/// WHY: No partial interpretation of appliance state
#[test]
fn given_malformed_lines_when_parsing_then_malformed_status_error() {
    // Given: Lines missing pieces of the pattern
    let samples = [
        "",
        "OK",
        "RECORD:READY",
        "RECORD:READY,STREAM:RTMP,OFF",
        "RECORD:READY,STREAM:RTMP,OFF,NAME:",
        "RECORD:1,STREAM:RTMP,OFF,NAME:x",
    ];

    for raw in samples {
        // When: Parsing
        let result = parse_status(raw);

        // Then: MalformedStatus
        assert!(
            matches!(result, Err(RecorderError::MalformedStatus { .. })),
            "expected failure for {:?}",
            raw
        );
    }
}
