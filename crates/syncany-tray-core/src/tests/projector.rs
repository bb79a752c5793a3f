use crate::{
    Command, Envelope, IconStatus, Notification, RequestStyle, Response, TrayIconKind,
    tests::support::{BackendCall, RecordingBackend, projector, projector_with},
};

fn icon(status: IconStatus) -> Envelope {
    Envelope::new(RequestStyle::Request, Command::UpdateIcon(status))
}

/// WHAT: Startup shows the disconnected icon and a profile-less menu
/// WHY: The daemon may take a while to send its first update
#[test]
#[allow(clippy::unwrap_used)]
fn given_new_projector_when_created_then_disconnected_with_menu() {
    // Given/When: A freshly created projector
    let backend = RecordingBackend::default();
    let projector =
        crate::TrayProjector::new(backend, crate::tests::support::settings(), "Starting ...")
            .unwrap();

    // Then: Icon set once, menu installed once
    assert_eq!(projector.backend().icon_changes(), vec![TrayIconKind::Disconnected]);
    assert_eq!(projector.backend().installed_menus().len(), 1);
    assert_eq!(projector.state().updating(), 0);
    assert_eq!(projector.state().status_text(), "Starting ...");
}

/// WHAT: Overlapping UPDATING events switch the icon only once
/// WHY: Concurrent folder syncs must not make the icon flicker
#[test]
#[allow(clippy::unwrap_used)]
fn given_two_updating_then_one_uptodate_when_applied_then_icon_stays_syncing() {
    // Given: A projector at rest
    let mut projector = projector();

    // When: UPDATING twice, then UPTODATE once
    projector.apply(icon(IconStatus::Updating)).unwrap();
    projector.apply(icon(IconStatus::Updating)).unwrap();
    projector.apply(icon(IconStatus::UpToDate)).unwrap();

    // Then: Syncing was set exactly once and the counter is 1
    assert_eq!(projector.backend().icon_changes(), vec![TrayIconKind::Syncing]);
    assert_eq!(projector.state().updating(), 1);
    assert_eq!(projector.state().icon(), TrayIconKind::Syncing);
}

/// WHAT: The last UPTODATE switches to the up-to-date icon
/// WHY: The icon reflects whether any operation is still in flight
#[test]
#[allow(clippy::unwrap_used)]
fn given_balanced_events_when_applied_then_icon_up_to_date() {
    let mut projector = projector();

    projector.apply(icon(IconStatus::Updating)).unwrap();
    projector.apply(icon(IconStatus::Updating)).unwrap();
    projector.apply(icon(IconStatus::UpToDate)).unwrap();
    projector.apply(icon(IconStatus::UpToDate)).unwrap();

    assert_eq!(
        projector.backend().icon_changes(),
        vec![TrayIconKind::Syncing, TrayIconKind::UpToDate]
    );
    assert_eq!(projector.state().updating(), 0);
}

/// WHAT: Surplus UPTODATE events neither underflow nor re-set the icon
/// WHY: The counter is clamped at zero and visual changes are transition-only
#[test]
#[allow(clippy::unwrap_used)]
fn given_surplus_uptodate_when_applied_then_counter_clamped_and_no_repeat() {
    // Given: A projector already up to date
    let mut projector = projector();
    projector.apply(icon(IconStatus::Updating)).unwrap();
    projector.apply(icon(IconStatus::UpToDate)).unwrap();

    // When: More UPTODATE events arrive
    projector.apply(icon(IconStatus::UpToDate)).unwrap();
    projector.apply(icon(IconStatus::UpToDate)).unwrap();

    // Then: Counter stays at 0 and the icon was set once
    assert_eq!(projector.state().updating(), 0);
    assert_eq!(
        projector.backend().icon_changes(),
        vec![TrayIconKind::Syncing, TrayIconKind::UpToDate]
    );

    // And: The next UPDATING switches back to syncing
    projector.apply(icon(IconStatus::Updating)).unwrap();
    assert_eq!(projector.state().updating(), 1);
    assert_eq!(projector.state().icon(), TrayIconKind::Syncing);
}

/// WHAT: DISCONNECTED always resets the counter and sets the idle icon
/// WHY: In-flight operations are meaningless once the daemon is gone
#[test]
#[allow(clippy::unwrap_used)]
fn given_in_flight_operations_when_disconnected_then_counter_reset() {
    // Given: Three operations in flight
    let mut projector = projector();
    for _ in 0..3 {
        projector.apply(icon(IconStatus::Updating)).unwrap();
    }

    // When: Disconnected, twice
    projector.apply(icon(IconStatus::Disconnected)).unwrap();
    projector.apply(icon(IconStatus::Disconnected)).unwrap();

    // Then: Counter is zero and the idle icon was set both times
    assert_eq!(projector.state().updating(), 0);
    assert_eq!(
        projector.backend().icon_changes(),
        vec![
            TrayIconKind::Syncing,
            TrayIconKind::Disconnected,
            TrayIconKind::Disconnected
        ]
    );

    // And: A following UPDATING counts from zero again
    projector.apply(icon(IconStatus::Updating)).unwrap();
    assert_eq!(projector.state().updating(), 1);
}

/// WHAT: For any UPDATING/UPTODATE sequence the icon tracks counter > 0
/// WHY: The icon must never disagree with the in-flight count
#[test]
#[allow(clippy::unwrap_used)]
fn given_mixed_sequence_when_applied_then_icon_matches_counter() {
    let sequence = [1, 1, -1, 1, -1, -1, -1, 1, 1, -1, -1, -1, 1];
    let mut projector = projector();
    let mut expected: u32 = 0;

    for step in sequence {
        let status = if step > 0 {
            expected += 1;
            IconStatus::Updating
        } else {
            expected = expected.saturating_sub(1);
            IconStatus::UpToDate
        };
        projector.apply(icon(status)).unwrap();

        assert_eq!(projector.state().updating(), expected);
        assert_eq!(
            projector.state().icon() == TrayIconKind::Syncing,
            expected > 0
        );
    }
}

/// WHAT: Notifications without image use the bundled logo
/// WHY: The notification service needs some image
#[test]
#[allow(clippy::unwrap_used)]
fn given_notification_without_image_when_applied_then_default_image_used() {
    // Given: A notification with an empty image
    let mut projector = projector();
    let envelope = Envelope::new(
        RequestStyle::Request,
        Command::Notify(Notification {
            summary: "Synced".to_string(),
            body: "All done".to_string(),
            image: String::new(),
        }),
    );

    // When: Applying it
    let response = projector.apply(envelope).unwrap();

    // Then: The default image is shown and OK is returned
    assert_eq!(response, Some(Response::Ok));
    assert_eq!(
        projector.backend().calls,
        vec![BackendCall::Notify {
            summary: "Synced".to_string(),
            body: "All done".to_string(),
            image: "/res/logo48.png".to_string(),
        }]
    );
}

/// WHAT: Given images are passed through untouched
/// WHY: Images may be paths or URLs chosen by the daemon
#[test]
#[allow(clippy::unwrap_used)]
fn given_notification_with_url_image_when_applied_then_image_passed_through() {
    let mut projector = projector();
    let envelope = Envelope::new(
        RequestStyle::Action,
        Command::Notify(Notification {
            summary: "s".to_string(),
            body: "b".to_string(),
            image: "http://127.0.0.1:8081/logo.png".to_string(),
        }),
    );

    let response = projector.apply(envelope).unwrap();

    assert_eq!(response, None);
    assert!(matches!(
        &projector.backend().calls[0],
        BackendCall::Notify { image, .. } if image == "http://127.0.0.1:8081/logo.png"
    ));
}

/// WHAT: Backend failures surface as errors
/// WHY: The dispatcher turns them into REQUEST_ERROR
#[test]
fn given_failing_notification_service_when_notifying_then_error() {
    let mut projector = projector_with(RecordingBackend {
        fail_notifications: true,
        ..RecordingBackend::default()
    });
    let envelope = Envelope::new(
        RequestStyle::Request,
        Command::Notify(Notification {
            summary: "s".to_string(),
            body: "b".to_string(),
            image: String::new(),
        }),
    );

    assert!(projector.apply(envelope).is_err());
}

/// WHAT: New status text shows up in later menu rebuilds
/// WHY: The status entry is recreated on every menu update
#[test]
#[allow(clippy::unwrap_used)]
fn given_status_text_update_when_menu_rebuilt_then_new_text_shown() {
    // Given: A status text update
    let mut projector = projector();
    projector
        .apply(Envelope::new(
            RequestStyle::Action,
            Command::UpdateStatusText("Up to date".to_string()),
        ))
        .unwrap();

    // When: The menu is rebuilt
    projector
        .apply(Envelope::new(
            RequestStyle::Action,
            Command::UpdateMenu(crate::ProfileTree::default()),
        ))
        .unwrap();

    // Then: Live label updated and the rebuilt menu carries the text
    assert_eq!(
        projector.backend().calls[0],
        BackendCall::SetStatusText("Up to date".to_string())
    );
    assert_eq!(
        projector.state().menu()[0],
        crate::MenuEntry::Status("Up to date".to_string())
    );
}

/// WHAT: Re-delivered menu updates install identical menus
/// WHY: Menu updates are idempotent
#[test]
#[allow(clippy::unwrap_used)]
fn given_same_menu_update_twice_when_applied_then_identical_menus_installed() {
    let mut projector = projector();
    let tree = crate::ProfileTree::new(vec![crate::Profile {
        name: "P1".to_string(),
        folders: vec![crate::Folder {
            folder: "/a".to_string(),
        }],
    }]);
    let envelope = Envelope::new(RequestStyle::Request, Command::UpdateMenu(tree));

    projector.apply(envelope.clone()).unwrap();
    projector.apply(envelope).unwrap();

    let menus = projector.backend().installed_menus();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0], menus[1]);
}

/// WHAT: Listen requests are refused by the projector
/// WHY: Blocking on the UI thread would freeze the tray
#[test]
fn given_listen_request_when_applied_on_ui_then_error() {
    let mut projector = projector();

    let result = projector.apply(Envelope::new(RequestStyle::Request, Command::ListenForEvent));

    assert!(result.is_err());
}
