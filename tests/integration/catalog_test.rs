//! Catalog mutations and their background fan-out.

use serde_json::json;

use iddsi_core::events::{CatalogEvent, EventPayload, NotificationEvent};
use iddsi_core::types::document::Document;
use iddsi_core::types::id::FoodId;
use iddsi_entity::food::{FoodCategory, FoodDraft, IddsiLevel};
use iddsi_store::collections::FOODS;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_add_update_delete_lifecycle() {
    let app = TestApp::new();
    app.register_users(2).await;

    let added = app
        .catalog
        .add_food(
            FoodDraft::new("Thickened Water")
                .level(Some(IddsiLevel::new(2).unwrap()))
                .category(FoodCategory::Drink),
        )
        .await
        .unwrap();
    let id = added.entry.id.clone();
    let report = added.delivery.wait().await.unwrap();
    assert_eq!(report.message, "Thickened Water was added to Level 2");

    let updated = app
        .catalog
        .update_food(
            &id,
            FoodDraft::new("Thickened Water")
                .level(Some(IddsiLevel::new(3).unwrap()))
                .category(FoodCategory::Drink),
        )
        .await
        .unwrap();
    let report = updated.delivery.wait().await.unwrap();
    assert_eq!(
        report.message,
        "Thickened Water's level was changed from Level 2 to Level 3"
    );

    let deleted = app.catalog.delete_food(&id).await.unwrap();
    let report = deleted.delivery.wait().await.unwrap();
    assert_eq!(report.message, "Thickened Water was deleted");
    assert_eq!(deleted.entry.iddsi_level, Some(IddsiLevel::new(3).unwrap()));

    assert_eq!(app.notification_count(), 6);
    assert!(app.catalog.get(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_mutation_commits_even_when_recipients_unreadable() {
    let app = TestApp::new();
    app.register_users(2).await;
    app.store.deny_user_reads();

    let added = app.catalog.add_food(FoodDraft::new("Jelly")).await.unwrap();
    let report = added.delivery.wait().await.unwrap();

    assert!(report.abort_reason().is_some());
    assert_eq!(app.catalog.list().await.unwrap().len(), 1);
    assert_eq!(app.notification_count(), 0);
}

#[tokio::test]
async fn test_delete_missing_food_sends_nothing() {
    let app = TestApp::new();
    app.register_users(1).await;

    let err = app
        .catalog
        .delete_food(&FoodId::new("nope"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(app.notification_count(), 0);
}

#[tokio::test]
async fn test_events_follow_mutation_order() {
    let app = TestApp::new();
    app.register_users(1).await;
    let mut rx = app.events.subscribe();

    let added = app.catalog.add_food(FoodDraft::new("Jelly")).await.unwrap();
    added.delivery.wait().await;
    let deleted = app.catalog.delete_food(&added.entry.id).await.unwrap();
    deleted.delivery.wait().await;

    let mut kinds = Vec::new();
    while let Ok(event) = rx.try_recv() {
        kinds.push(match event.payload {
            EventPayload::Catalog(CatalogEvent::Added { .. }) => "added",
            EventPayload::Catalog(CatalogEvent::Updated { .. }) => "updated",
            EventPayload::Catalog(CatalogEvent::Deleted { .. }) => "deleted",
            EventPayload::Notification(NotificationEvent::DeliveryCompleted { .. }) => "delivered",
            EventPayload::Notification(NotificationEvent::DeliveryAborted { .. }) => "aborted",
        });
    }
    assert_eq!(kinds, vec!["added", "delivered", "deleted", "delivered"]);
}

#[tokio::test]
async fn test_malformed_food_can_still_be_deleted() {
    let app = TestApp::new();
    app.register_users(1).await;
    app.store.inner.insert_raw(
        FOODS,
        Document::new(
            "bad".into(),
            json!({ "name": "Bread", "iddsi_level": "Transitional" })
                .as_object()
                .cloned()
                .unwrap(),
        ),
    );
    let good = app.catalog.add_food(FoodDraft::new("Jelly")).await.unwrap();
    good.delivery.wait().await;

    assert_eq!(app.catalog.list().await.unwrap().len(), 2);

    let deleted = app.catalog.delete_food(&FoodId::new("bad")).await.unwrap();
    let report = deleted.delivery.wait().await.unwrap();

    assert_eq!(report.message, "Bread was deleted");
    let remaining = app.catalog.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Jelly");
}
