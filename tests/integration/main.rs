//! Integration test entry point.
//!
//! These tests need a PostgreSQL instance. Set
//! `TASKBOARD_TEST_DATABASE_URL` to run them; without it each test
//! skips cleanly.

mod helpers;
mod notification_test;
mod ws_test;
