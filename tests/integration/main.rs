//! Integration tests for catalog change notification.

mod helpers;

mod catalog_test;
mod notifier_test;
mod snapshot_test;
