//! Rejects data operations while the store is disconnected.

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use super::ports::StoreCollections;
use super::{Error, StoreHandle};

/// Message returned to callers while the store is down.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "database not available";

/// Check-then-act guard in front of every store access.
///
/// The only writer of the connection state is the reconnect loop, and it only
/// ever moves the state to connected. A request racing that transition is
/// simply rejected and the next one goes through.
#[derive(Debug, Clone)]
pub struct AvailabilityGate {
    store: Arc<StoreHandle>,
}

impl AvailabilityGate {
    /// Gate operations on `store`.
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self { store }
    }

    /// Whether operations would currently be admitted.
    pub fn is_open(&self) -> bool {
        self.store.is_connected()
    }

    /// Run `op` with the collection handles, or fail with
    /// `service_unavailable` without calling it.
    ///
    /// Errors from `op` pass through unchanged.
    pub async fn guard<T, F, Fut>(&self, op: F) -> Result<T, Error>
    where
        F: FnOnce(StoreCollections) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let Some(collections) = self.store.collections() else {
            warn!("{STORE_UNAVAILABLE_MESSAGE}");
            return Err(Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE));
        };
        op(collections).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockOrderHistoryRepository, MockUserRepository};
    use rstest::rstest;

    fn connected_store() -> Arc<StoreHandle> {
        Arc::new(StoreHandle::connected(StoreCollections::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockOrderHistoryRepository::new()),
        )))
    }

    #[rstest]
    #[tokio::test]
    async fn disconnected_gate_skips_operation() {
        let gate = AvailabilityGate::new(Arc::new(StoreHandle::new()));
        let invoked = AtomicBool::new(false);

        let err = gate
            .guard(|_| async {
                invoked.store(true, Ordering::SeqCst);
                Ok(())
            })
            .await
            .expect_err("gate must reject");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(err.message(), STORE_UNAVAILABLE_MESSAGE);
        assert!(!invoked.load(Ordering::SeqCst));
        assert!(!gate.is_open());
    }

    #[rstest]
    #[tokio::test]
    async fn connected_gate_passes_result_through() {
        let gate = AvailabilityGate::new(connected_store());
        let value = gate
            .guard(|_| async { Ok::<_, Error>(7_u8) })
            .await
            .expect("operation admitted");
        assert_eq!(value, 7);
        assert!(gate.is_open());
    }

    #[rstest]
    #[tokio::test]
    async fn connected_gate_passes_errors_through() {
        let gate = AvailabilityGate::new(connected_store());
        let err = gate
            .guard(|_| async { Err::<(), _>(Error::not_found("missing")) })
            .await
            .expect_err("operation error surfaces");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "missing");
    }
}
