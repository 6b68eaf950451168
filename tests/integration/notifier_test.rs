//! Fan-out behavior of the change notifier against a faulty store.

use iddsi_core::error::ErrorKind;
use iddsi_entity::food::{CatalogEntry, FoodCategory, IddsiLevel};
use iddsi_entity::notification::ChangeType;

use crate::helpers::TestApp;

fn entry(id: &str, name: &str, level: Option<u8>) -> CatalogEntry {
    CatalogEntry {
        id: id.into(),
        name: name.to_string(),
        iddsi_level: level.map(|l| IddsiLevel::new(l).unwrap()),
        category: FoodCategory::Food,
        description: "Smooth, no lumps".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_added_fans_out_to_three_recipients() {
    let app = TestApp::new();
    let users = app.register_users(3).await;
    let food = entry("food-1", "Pureed Chicken", Some(4));

    let report = app.notifier.notify_change("added", &food, None).await;

    assert!(report.is_success());
    assert_eq!(report.delivered_count(), 3);

    let written = app.notifications.find_all().await.unwrap();
    assert_eq!(written.len(), 3);
    for user in &users {
        let n = written
            .iter()
            .find(|n| &n.recipient_id == user)
            .expect("one notification per recipient");
        assert_eq!(n.message, "Pureed Chicken was added to Level 4");
        assert_eq!(n.change_type, ChangeType::Added);
        assert_eq!(n.entry_id.as_str(), "food-1");
        assert_eq!(n.iddsi_level, Some(IddsiLevel::new(4).unwrap()));
        assert_eq!(n.previous_iddsi_level, None);
        assert_eq!(n.description, "Smooth, no lumps");
        assert!(!n.is_read);
        assert!(n.created_timestamp.is_some());
    }
}

#[tokio::test]
async fn test_update_level_change_reaches_two_recipients() {
    let app = TestApp::new();
    app.register_users(2).await;
    let old = entry("food-1", "Pureed Chicken", Some(3));
    let new = entry("food-1", "Pureed Chicken", Some(5));

    let report = app.notifier.notify_change("updated", &new, Some(&old)).await;

    assert!(report.is_success());
    let written = app.notifications.find_all().await.unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|n| {
        n.message == "Pureed Chicken's level was changed from Level 3 to Level 5"
            && n.previous_iddsi_level == Some(IddsiLevel::new(3).unwrap())
            && n.iddsi_level == Some(IddsiLevel::new(5).unwrap())
    }));
}

#[tokio::test]
async fn test_update_without_level_change() {
    let app = TestApp::new();
    app.register_users(1).await;
    let old = entry("food-1", "Custard", Some(4));
    let mut new = old.clone();
    new.tips = "Serve chilled".to_string();

    let report = app.notifier.notify_change("updated", &new, Some(&old)).await;

    assert_eq!(report.message, "Custard was updated");
}

#[tokio::test]
async fn test_delete_with_no_recipients_writes_nothing() {
    let app = TestApp::new();
    let food = entry("food-1", "Custard", Some(4));

    let report = app.notifier.notify_change("deleted", &food, None).await;

    assert!(report.is_success());
    assert_eq!(report.delivered_count(), 0);
    assert_eq!(app.notification_count(), 0);
}

#[tokio::test]
async fn test_recipient_read_failure_aborts_fan_out() {
    let app = TestApp::new();
    app.register_users(3).await;
    app.store.deny_user_reads();

    let report = app
        .notifier
        .notify_change("added", &entry("food-1", "Jelly", Some(4)), None)
        .await;

    assert!(!report.is_success());
    let reason = report.abort_reason().expect("aborted");
    assert_eq!(reason.kind, ErrorKind::PermissionDenied);
    assert_eq!(app.notification_count(), 0);
    assert_eq!(
        app.store
            .notification_writes
            .load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn test_single_rejected_write_does_not_roll_back_others() {
    let app = TestApp::new();
    let users = app.register_users(3).await;
    app.store.reject(&users[1]);

    let report = app
        .notifier
        .notify_change("added", &entry("food-1", "Jelly", Some(4)), None)
        .await;

    assert!(!report.is_success());
    assert_eq!(report.delivered_count(), 2);
    assert_eq!(report.failed_recipients(), vec![&users[1]]);
    assert_eq!(app.notification_count(), 2);
}

#[tokio::test]
async fn test_entry_without_level_is_announced_without_level() {
    let app = TestApp::new();
    app.register_users(1).await;

    let report = app
        .notifier
        .notify_change("added", &entry("food-1", "Broth", None), None)
        .await;

    assert_eq!(report.message, "Broth was added");
    let written = app.notifications.find_all().await.unwrap();
    assert_eq!(written[0].iddsi_level, None);
}
