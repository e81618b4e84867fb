//! Tests for order submission and history lookup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{
    MockOrderHistoryRepository, MockUserRepository, OrderHistoryRepository, StoreCollections,
};
use crate::domain::{ErrorCode, StoreHandle};

#[derive(Default)]
struct StubOrderHistoryRepository {
    histories: Mutex<HashMap<String, Vec<Order>>>,
}

#[async_trait]
impl OrderHistoryRepository for StubOrderHistoryRepository {
    async fn find_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<OrderHistory>, OrderHistoryPersistenceError> {
        let guard = self.histories.lock().expect("histories lock");
        Ok(guard
            .get(name.as_ref())
            .map(|orders| OrderHistory::new(name.clone(), orders.clone())))
    }

    async fn append(
        &self,
        name: &UserName,
        order: &Order,
    ) -> Result<(), OrderHistoryPersistenceError> {
        let mut guard = self.histories.lock().expect("histories lock");
        guard
            .entry(name.as_ref().to_owned())
            .or_default()
            .push(order.clone());
        Ok(())
    }
}

fn registered_users(names: &'static [&'static str]) -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .returning(move |name| Ok(names.contains(&name.as_ref())));
    users
}

fn service_over(
    users: MockUserRepository,
    orders: Arc<dyn OrderHistoryRepository>,
) -> OrderHistoryService {
    let collections = StoreCollections::new(Arc::new(users), orders);
    let store = Arc::new(StoreHandle::connected(collections));
    OrderHistoryService::new(AvailabilityGate::new(store))
}

#[fixture]
fn service() -> OrderHistoryService {
    service_over(
        registered_users(&["alice"]),
        Arc::new(StubOrderHistoryRepository::default()),
    )
}

fn alice() -> UserName {
    UserName::new("alice").expect("valid name")
}

#[rstest]
#[tokio::test]
async fn first_order_creates_history(service: OrderHistoryService) {
    let order = Order::new(json!({ "sku": "O1" }));

    service
        .submit_order(&alice(), order.clone())
        .await
        .expect("order appended");

    let history = service.get_history(&alice()).await.expect("history exists");
    assert_eq!(history.name().as_ref(), "alice");
    assert_eq!(history.orders(), &[order]);
}

#[rstest]
#[tokio::test]
async fn sequential_orders_keep_submission_order(service: OrderHistoryService) {
    let orders: Vec<Order> = (1..=4).map(|n| Order::new(json!({ "seq": n }))).collect();

    for order in &orders {
        service
            .submit_order(&alice(), order.clone())
            .await
            .expect("order appended");
    }

    let history = service.get_history(&alice()).await.expect("history exists");
    assert_eq!(history.orders(), orders.as_slice());
}

#[rstest]
#[tokio::test]
async fn concurrent_orders_are_both_recorded(service: OrderHistoryService) {
    let first = Order::new(json!({ "sku": "A" }));
    let second = Order::new(json!({ "sku": "B" }));
    let name = alice();

    let (left, right) = tokio::join!(
        service.submit_order(&name, first.clone()),
        service.submit_order(&name, second.clone()),
    );
    left.expect("first append");
    right.expect("second append");

    let history = service.get_history(&name).await.expect("history exists");
    assert_eq!(history.orders().len(), 2);
    assert!(history.orders().contains(&first));
    assert!(history.orders().contains(&second));
}

#[rstest]
#[tokio::test]
async fn unknown_user_cannot_submit_orders() {
    // Any append would panic: the mock has no expectations.
    let service = service_over(
        registered_users(&["alice"]),
        Arc::new(MockOrderHistoryRepository::new()),
    );
    let bob = UserName::new("bob").expect("valid name");

    let err = service
        .submit_order(&bob, Order::new(json!({})))
        .await
        .expect_err("unregistered user");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn missing_history_is_not_found(service: OrderHistoryService) {
    let err = service
        .get_history(&alice())
        .await
        .expect_err("no orders yet");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn append_failure_maps_to_internal_error() {
    let mut orders = MockOrderHistoryRepository::new();
    orders
        .expect_append()
        .times(1)
        .returning(|_, _| Err(OrderHistoryPersistenceError::query("deadlock detected")));
    let service = service_over(registered_users(&["alice"]), Arc::new(orders));

    let err = service
        .submit_order(&alice(), Order::new(json!({ "sku": "A" })))
        .await
        .expect_err("append failed");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn disconnected_store_rejects_order_operations() {
    let service = OrderHistoryService::new(AvailabilityGate::new(Arc::new(StoreHandle::new())));

    let submit = service
        .submit_order(&alice(), Order::new(json!({})))
        .await
        .expect_err("store unavailable");
    let history = service
        .get_history(&alice())
        .await
        .expect_err("store unavailable");

    assert_eq!(submit.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(history.code(), ErrorCode::ServiceUnavailable);
}
