use super::test_helpers::test_app_state;

#[tokio::test]
async fn test_app_state_builds_without_live_db() {
    // connect_lazy defers the connection, so constructing state is cheap
    // and safe in unit tests.
    let state = test_app_state();
    let cloned = state.clone();
    assert!(!cloned.pool.is_closed());
}
