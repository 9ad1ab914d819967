use crate::{
    ApplianceCommand, Params, RecorderError, RecordingRequest, StartOutcome, StopOutcome,
    follow_up_request,
    tests::stubs::{Call, Harness, INTERNAL_HOST, LIVE_TITLE, side_effects},
};

use serde_json::json;

fn titled(title: &str) -> RecordingRequest {
    RecordingRequest {
        title: Some(title.to_string()),
        ..RecordingRequest::default()
    }
}

fn start_commands(calls: &[Call]) -> usize {
    calls
        .iter()
        .filter(|c| {
            matches!(
                c,
                Call::Appliance(ApplianceCommand::StartRecording)
                    | Call::Appliance(ApplianceCommand::StartStreamingAndRecording)
            )
        })
        .count()
}

/// WHAT: Empty request on a READY appliance starts a non-live session with defaults
/// WHY: Default substitution must be total and the non-live branch used
#[test]
#[allow(clippy::unwrap_used)]
fn given_ready_appliance_when_starting_with_empty_request_then_non_live_start_with_defaults() {
    // Given: A READY appliance
    let mut harness = Harness::new("READY");

    // When: Starting with an empty request
    let outcome = harness
        .controller
        .start_recording(RecordingRequest::default())
        .unwrap();

    // Then: Exactly one non-live start command is issued
    assert!(matches!(outcome, StartOutcome::Started { live: false, .. }));
    assert_eq!(
        side_effects(&harness.log),
        vec![Call::Appliance(ApplianceCommand::StartRecording)]
    );

    // And: Metadata carries every default
    let metadata = harness.controller.session().active_metadata.clone().unwrap();
    assert_eq!(metadata.title, "untitled");
    assert_eq!(metadata.speaker_id, "");
    assert_eq!(metadata.course_id, "");
    assert_eq!(metadata.speaker_email, "");
    assert_eq!(metadata.profile, "");
    assert_eq!(metadata.speaker_name, "");
    assert_eq!(metadata.location, "Room 1");
    assert!(metadata.code.ends_with("_room1"));
}

/// WHAT: Live request on a READY appliance runs the full streaming sequence
/// WHY: Stream target must be rewritten to the internal host before starting
#[test]
#[allow(clippy::unwrap_used)]
fn given_ready_appliance_when_starting_live_then_prepare_rtmp_start_and_combined_command() {
    // Given: A READY appliance and a live request
    let mut harness = Harness::new("READY");
    let request = RecordingRequest {
        live: true,
        ..titled("Algebra")
    };

    // When: Starting the session
    let outcome = harness.controller.start_recording(request).unwrap();

    // Then: Streaming is prepared, routed internally, started, then recorded
    assert!(matches!(outcome, StartOutcome::Started { live: true, .. }));
    assert_eq!(
        side_effects(&harness.log),
        vec![
            Call::Prepare(LIVE_TITLE.to_string()),
            Call::Appliance(ApplianceCommand::SetRtmp {
                scheme: "rtmp:/".to_string(),
                target: format!("{}/live/room1-key", INTERNAL_HOST),
            }),
            Call::StartStreaming(LIVE_TITLE.to_string()),
            Call::Appliance(ApplianceCommand::StartStreamingAndRecording),
        ]
    );
    assert_eq!(start_commands(&side_effects(&harness.log)), 1);
}

/// WHAT: Start while ON only queues the request
/// WHY: The appliance is already recording and must not be re-commanded
#[test]
#[allow(clippy::unwrap_used)]
fn given_recording_appliance_when_starting_then_request_queued_without_commands() {
    // Given: A running session
    let mut harness = Harness::new("READY");
    harness.controller.start_recording(titled("First")).unwrap();
    let code = harness
        .controller
        .session()
        .active_metadata
        .clone()
        .unwrap()
        .code;
    harness.clear_log();

    // When: Another start arrives
    let outcome = harness.controller.start_recording(titled("Second")).unwrap();

    // Then: Nothing is sent to the appliance or publisher
    assert_eq!(outcome, StartOutcome::Queued);
    assert!(side_effects(&harness.log).is_empty());

    // And: The request is queued and the running session keeps its identity
    let session = harness.controller.session();
    assert_eq!(session.queued_request, Some(titled("Second")));
    let metadata = session.active_metadata.clone().unwrap();
    assert_eq!(metadata.title, "First");
    assert_eq!(metadata.code, code);
}

/// WHAT: Start on a DISABLED appliance is refused without side effects
/// WHY: Recording not enabled is an operator error, logged only
#[test]
#[allow(clippy::unwrap_used)]
fn given_disabled_appliance_when_starting_then_refused_without_mutation() {
    // Given: A DISABLED appliance
    let mut harness = Harness::new("DISABLED");

    // When: Starting
    let outcome = harness.controller.start_recording(titled("Algebra")).unwrap();

    // Then: Refused, nothing issued, nothing stored
    assert_eq!(outcome, StartOutcome::Refused);
    assert!(side_effects(&harness.log).is_empty());
    assert!(harness.controller.session().active_metadata.is_none());
    assert!(harness.controller.session().queued_request.is_none());
}

/// WHAT: Stop while READY is refused without side effects
/// WHY: Nothing was recording; no stream stop, appliance stop or upload
#[test]
#[allow(clippy::unwrap_used)]
fn given_ready_appliance_when_stopping_then_refused_without_calls() {
    // Given: A READY appliance
    let mut harness = Harness::new("READY");

    // When: Stopping
    let outcome = harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();

    // Then: Refused with only the status query issued
    assert_eq!(outcome, StopOutcome::Refused);
    assert!(side_effects(&harness.log).is_empty());
}

/// WHAT: Stopping a non-live session stops the appliance and hands off once
/// WHY: Exactly one stop sequence and one handoff per recorded session
#[test]
#[allow(clippy::unwrap_used)]
fn given_non_live_session_when_stopping_then_one_stop_and_one_handoff() {
    // Given: A running non-live session
    let mut harness = Harness::new("READY");
    harness.controller.start_recording(titled("Algebra")).unwrap();
    let code = harness
        .controller
        .session()
        .active_metadata
        .clone()
        .unwrap()
        .code;
    harness.clear_log();

    // When: Stopping
    let outcome = harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();

    // Then: Appliance stopped, artifact handed off, session cleared
    assert_eq!(
        outcome,
        StopOutcome::Stopped {
            code: code.clone(),
            follow_up: None
        }
    );
    assert_eq!(
        side_effects(&harness.log),
        vec![
            Call::Appliance(ApplianceCommand::StopStreamingAndRecording),
            Call::Handoff {
                code,
                title: "Algebra".to_string()
            },
        ]
    );
    assert!(harness.controller.session().active_metadata.is_none());
    assert!(harness.controller.session().pending_start_request.is_none());
}

/// WHAT: Stopping a live session stops the stream before the appliance
/// WHY: The publishing service must close the live before recording ends
#[test]
#[allow(clippy::unwrap_used)]
fn given_live_session_when_stopping_then_stream_stopped_first() {
    // Given: A running live session
    let mut harness = Harness::new("READY");
    let request = RecordingRequest {
        live: true,
        ..titled("Algebra")
    };
    harness.controller.start_recording(request).unwrap();
    harness.clear_log();

    // When: Stopping
    harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();

    // Then: Stream stop, appliance stop, handoff, in that order
    let calls = side_effects(&harness.log);
    assert_eq!(calls[0], Call::StopStreaming(LIVE_TITLE.to_string()));
    assert_eq!(
        calls[1],
        Call::Appliance(ApplianceCommand::StopStreamingAndRecording)
    );
    assert!(matches!(calls[2], Call::Handoff { .. }));
    assert_eq!(calls.len(), 3);
}

/// WHAT: A queued request starts right after the stop and the slot is cleared
/// WHY: Back-to-back lectures must not require a second READY transition
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_queued_request_when_stopping_then_follow_up_started_and_queue_cleared() {
    // Given: A running session with a queued live request
    let mut harness = Harness::new("READY");
    harness.controller.start_recording(titled("First")).unwrap();
    let queued = RecordingRequest {
        live: true,
        speaker: Some("Queued speaker".to_string()),
        ..titled("Second")
    };
    harness.controller.start_recording(queued).unwrap();
    harness.clear_log();

    // When: Stopping with a request naming a speaker
    let stop = RecordingRequest {
        speaker: Some("Stop speaker".to_string()),
        ..RecordingRequest::default()
    };
    let outcome = harness.controller.stop_recording(stop).unwrap();

    // Then: The first session is handed off and the live follow-up begins
    let StopOutcome::Stopped { follow_up, .. } = outcome else {
        panic!("expected a stopped session");
    };
    assert!(follow_up.is_some());

    let calls = side_effects(&harness.log);
    assert!(matches!(&calls[1], Call::Handoff { title, .. } if title == "First"));
    assert_eq!(calls[2], Call::Prepare(LIVE_TITLE.to_string()));
    assert_eq!(start_commands(&calls), 1);
    assert_eq!(
        calls.last(),
        Some(&Call::Appliance(ApplianceCommand::StartStreamingAndRecording))
    );

    // And: Title comes from the queued request, speaker from the stop request
    let session = harness.controller.session();
    assert!(session.queued_request.is_none());
    let metadata = session.active_metadata.clone().unwrap();
    assert_eq!(metadata.title, "Second");
    assert_eq!(metadata.speaker_name, "Stop speaker");
    assert_eq!(Some(metadata.code), follow_up);
}

/// WHAT: A queued request without title is dropped at stop
/// WHY: Only requests with a usable title start a follow-up session
#[test]
#[allow(clippy::unwrap_used)]
fn given_untitled_queued_request_when_stopping_then_no_follow_up() {
    // Given: A running session with an untitled queued request
    let mut harness = Harness::new("READY");
    harness.controller.start_recording(titled("First")).unwrap();
    harness
        .controller
        .start_recording(RecordingRequest::default())
        .unwrap();
    harness.clear_log();

    // When: Stopping
    let outcome = harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();

    // Then: No follow-up starts and the slot is cleared
    assert!(matches!(outcome, StopOutcome::Stopped { follow_up: None, .. }));
    assert_eq!(start_commands(&side_effects(&harness.log)), 0);
    assert!(harness.controller.session().queued_request.is_none());
}

/// WHAT: A queued request whose title is null still starts a follow-up
/// WHY: The title key alone marks a usable queued request
#[test]
#[allow(clippy::unwrap_used)]
fn given_queued_request_with_null_title_when_stopping_then_untitled_follow_up_started() {
    // Given: A running session and a queued request with a null title
    let mut harness = Harness::new("READY");
    harness.controller.start_recording(titled("First")).unwrap();
    let raw: Params = serde_json::from_value(json!({ "title": null })).unwrap();
    harness
        .controller
        .start_recording(RecordingRequest::from_params(&raw))
        .unwrap();
    harness.clear_log();

    // When: Stopping
    let outcome = harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();

    // Then: An untitled non-live follow-up begins
    assert!(matches!(outcome, StopOutcome::Stopped { follow_up: Some(_), .. }));
    let calls = side_effects(&harness.log);
    assert_eq!(start_commands(&calls), 1);
    assert_eq!(
        calls.last(),
        Some(&Call::Appliance(ApplianceCommand::StartRecording))
    );
    let metadata = harness.controller.session().active_metadata.clone().unwrap();
    assert_eq!(metadata.title, "untitled");
}

/// WHAT: Stop after a restart synthesizes metadata and closes a possible stream
/// WHY: The process may have lost its memory while the appliance kept recording
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_running_session_when_stopping_then_default_metadata_handed_off() {
    // Given: An appliance already ON and an empty session record
    let mut harness = Harness::new("ON");

    // When: Stopping
    harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();

    // Then: The stream is closed and an untitled session is handed off
    let calls = side_effects(&harness.log);
    assert_eq!(calls[0], Call::StopStreaming(LIVE_TITLE.to_string()));
    assert!(matches!(
        &calls[2],
        Call::Handoff { title, code } if title == "untitled" && code.ends_with("_room1")
    ));
}

/// WHAT: Garbage status aborts the action
/// WHY: No partial interpretation of the appliance state
#[test]
fn given_malformed_status_when_starting_then_malformed_status_error() {
    // Given: An appliance answering garbage
    let mut harness = Harness::new("READY");
    *harness.status.lock().unwrap_or_else(|e| e.into_inner()) = "ERROR: busy".to_string();

    // When: Starting
    let result = harness.controller.start_recording(titled("Algebra"));

    // Then: MalformedStatus and no command issued
    assert!(matches!(result, Err(RecorderError::MalformedStatus { .. })));
    assert!(side_effects(&harness.log).is_empty());
}

/// WHAT: Unknown appliance states refuse a start
/// WHY: Only READY starts a session and only ON queues one
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_record_state_when_starting_then_refused() {
    // Given: An appliance in a state the controller does not know
    let mut harness = Harness::new("PAUSED");

    // When: Starting
    let outcome = harness.controller.start_recording(titled("Algebra")).unwrap();

    // Then: Refused without commands
    assert_eq!(outcome, StartOutcome::Refused);
    assert!(side_effects(&harness.log).is_empty());
}

/// WHAT: Follow-up requests take title and live flag from the queued request only
/// WHY: Pins the field sourcing of queued sessions
#[test]
fn given_queued_and_stop_requests_when_merging_then_title_from_queued_rest_from_stop() {
    // Given: Distinct queued and stop requests
    let queued = RecordingRequest {
        live: true,
        course_id: Some("Q-COURSE".to_string()),
        ..titled("Queued")
    };
    let stop = RecordingRequest {
        course_id: Some("S-COURSE".to_string()),
        profile: Some("omni".to_string()),
        ..titled("Stop")
    };

    // When: Merging
    let merged = follow_up_request(&queued, &stop);

    // Then: Title and live from queued, the rest from stop
    assert_eq!(merged.title.as_deref(), Some("Queued"));
    assert!(merged.live);
    assert_eq!(merged.course_id.as_deref(), Some("S-COURSE"));
    assert_eq!(merged.profile.as_deref(), Some("omni"));
}

/// WHAT: Stop followed by a new start works once the appliance is READY again
/// WHY: Session record is cleared between independent sessions
#[test]
#[allow(clippy::unwrap_used)]
fn given_stopped_session_when_starting_again_then_new_session_begins() {
    // Given: A completed session
    let mut harness = Harness::new("READY");
    harness.controller.start_recording(titled("First")).unwrap();
    harness
        .controller
        .stop_recording(RecordingRequest::default())
        .unwrap();
    harness.set_state("READY");
    harness.clear_log();

    // When: Starting again
    let outcome = harness.controller.start_recording(titled("Second")).unwrap();

    // Then: A fresh session starts
    assert!(matches!(outcome, StartOutcome::Started { .. }));
    assert_eq!(start_commands(&side_effects(&harness.log)), 1);
}
