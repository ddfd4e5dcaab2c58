//! Embedded PostgreSQL databases for repository integration tests.
//!
//! Each test gets a fresh temporary database on the shared cluster with the
//! crate's migrations applied. Set `SKIP_TEST_CLUSTER=1` to skip these suites
//! where the cluster cannot start.

use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;

/// Fresh database on the shared embedded cluster.
pub fn temporary_database() -> Result<TemporaryDatabase, String> {
    ensure_stable_password();
    let cluster = shared_cluster_handle().map_err(|err| format!("start cluster: {err}"))?;
    cluster
        .temporary_database(format!("test_{}", uuid::Uuid::new_v4()))
        .map_err(|err| format!("create database: {err:?}"))
}

/// Pin `PG_PASSWORD` so a reused data directory keeps accepting logins.
fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster spawns threads; the shared handle
        // initialises at most once per process.
        unsafe {
            std::env::set_var("PG_PASSWORD", "cashcard_embedded_test");
        }
    }
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` is truthy, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
