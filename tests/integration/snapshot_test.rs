//! Store snapshots survive a CLI-style save and reload.

use iddsi_core::config::AppConfig;
use iddsi_entity::food::FoodDraft;
use iddsi_store::MemoryDocumentStore;

use iddsi_cli::AppContext;

#[tokio::test]
async fn test_context_persists_catalog_and_notifications() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.store.data_file = dir
        .path()
        .join("store.json")
        .to_string_lossy()
        .into_owned();

    let ctx = AppContext::open(config.clone()).await.unwrap();
    ctx.recipients
        .create(&Default::default())
        .await
        .unwrap();
    let added = ctx.catalog.add_food(FoodDraft::new("Jelly")).await.unwrap();
    added.delivery.wait().await;
    ctx.persist().await.unwrap();

    let reloaded = AppContext::open(config.clone()).await.unwrap();
    let foods = reloaded.catalog.list().await.unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].name, "Jelly");
    assert_eq!(reloaded.notifications.find_all().await.unwrap().len(), 1);

    let raw = MemoryDocumentStore::load(&config.store.data_file)
        .await
        .unwrap();
    assert_eq!(raw.count("users"), 1);
}

#[tokio::test]
async fn test_autosave_disabled_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.store.autosave = false;
    config.store.data_file = dir
        .path()
        .join("store.json")
        .to_string_lossy()
        .into_owned();

    let ctx = AppContext::open(config.clone()).await.unwrap();
    ctx.catalog.add_food(FoodDraft::new("Jelly")).await.unwrap();
    ctx.persist().await.unwrap();

    assert!(!dir.path().join("store.json").exists());
}
