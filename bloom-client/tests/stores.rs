// bloom-client/tests/stores.rs
// Stores driven against an in-memory mock backend

mod support;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use bloom_client::error::SERVER_MESSAGE;
use bloom_client::models::{ClientCreate, InventoryAdjust};
use bloom_client::view::{DeliveryBucket, HistoryKind, PaymentStatus};
use bloom_client::{
    ClientError, ClientsStore, DashboardStore, InventoryStore, OrderDetailStore, OrdersStore,
    StaffStore,
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::adapter::MISSING_PRODUCT_TITLE;
use shared::status::FrontendStatus;
use support::{Hits, api, order_json, today};

/// Backend records shared between handlers
#[derive(Clone, Default)]
struct Backend {
    records: Arc<Mutex<Vec<Value>>>,
    list_hits: Hits,
    write_hits: Hits,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl Backend {
    fn with(records: Vec<Value>) -> Self {
        let backend = Self::default();
        *backend.records.lock().unwrap() = records;
        backend
    }

    fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

async fn list(State(backend): State<Backend>) -> Json<Value> {
    backend.list_hits.hit();
    Json(Value::Array(backend.records.lock().unwrap().clone()))
}

async fn create_client(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    backend.write_hits.hit();
    let mut records = backend.records.lock().unwrap();
    let created = json!({
        "id": records.len() as i64 + 1,
        "name": body["name"],
        "phone": body["phone"],
        "client_type": body["client_type"],
    });
    records.push(created.clone());
    Json(created)
}

#[tokio::test]
async fn client_without_name_gets_phone_based_label() {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/clients", get(list).post(create_client))
        .with_state(backend.clone());
    let store = ClientsStore::new(api(router).await);

    let created = store
        .create(ClientCreate::with_phone("+7 (900) 123-45-67"))
        .await
        .unwrap();

    assert_eq!(created.name, "Клиент 4567");
    assert_eq!(backend.list_hits.count(), 1);
    let clients = store.clients().await;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Клиент 4567");
}

#[tokio::test]
async fn invalid_client_is_rejected_before_any_request() {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/clients", get(list).post(create_client))
        .with_state(backend.clone());
    let store = ClientsStore::new(api(router).await);

    let err = store
        .create(ClientCreate::with_phone("12-34"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(backend.write_hits.count(), 0);
    assert_eq!(backend.list_hits.count(), 0);
    assert!(store.state().await.error.is_some());
}

async fn set_status(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.write_hits.hit();
    *backend.last_body.lock().unwrap() = Some(body.clone());
    let mut records = backend.records.lock().unwrap();
    let order = records
        .iter_mut()
        .find(|o| o["id"] == id)
        .expect("order exists");
    order["status"] = body["status"].clone();
    Json(order.clone())
}

#[tokio::test]
async fn status_change_sends_backend_token_and_refetches() {
    let backend = Backend::with(vec![order_json(1, "в работе")]);
    let router = Router::new()
        .route("/api/orders", get(list))
        .route("/api/orders/{id}/status", patch(set_status))
        .with_state(backend.clone());
    let store = OrdersStore::new(api(router).await).with_clock(today);

    store.refetch().await.unwrap();
    assert_eq!(store.orders().await[0].status, "in_progress");

    let updated = store
        .change_status(1, FrontendStatus::Delivery)
        .await
        .unwrap();

    assert_eq!(backend.last_body(), Some(json!({"status": "готов"})));
    // The backend cannot tell delivery from ready
    assert_eq!(updated.status, "ready");
    assert_eq!(backend.list_hits.count(), 2);
    assert_eq!(store.orders().await[0].status, "ready");
}

#[tokio::test]
async fn status_filter_queries_with_backend_token() {
    async fn filtered(
        State(backend): State<Backend>,
        axum::extract::Query(query): axum::extract::Query<std::collections::HashMap<String, String>>,
    ) -> Json<Value> {
        *backend.last_body.lock().unwrap() = Some(json!(query));
        Json(json!({"orders": [], "total": 0}))
    }

    let backend = Backend::default();
    let router = Router::new()
        .route("/api/orders", get(filtered))
        .with_state(backend.clone());
    let store = OrdersStore::new(api(router).await);

    store
        .set_status_filter(Some(FrontendStatus::Completed))
        .await
        .unwrap();

    let query = backend.last_body().unwrap();
    assert_eq!(query["status"], "доставлен");
    assert_eq!(query["limit"], "50");
    assert!(store.orders().await.is_empty());
}

#[tokio::test]
async fn list_adapts_orders_for_display() {
    let mut empty = order_json(2, "новый");
    empty["items"] = json!([]);
    empty["delivery_date"] = json!("2026-10-20");
    let backend = Backend::with(vec![order_json(1, "готов"), empty]);
    let router = Router::new()
        .route("/api/orders", get(list))
        .with_state(backend);
    let store = OrdersStore::new(api(router).await).with_clock(today);

    store.refetch().await.unwrap();
    let orders = store.orders().await;

    assert_eq!(orders[0].number, "#1");
    assert_eq!(orders[0].main_product.title, "Букет роз");
    assert_eq!(orders[0].delivery.date, DeliveryBucket::Today);
    assert_eq!(orders[0].payment_status, PaymentStatus::Paid);
    assert_eq!(orders[0].recipient.name, "Клиент 1234");

    assert_eq!(orders[1].main_product.title, MISSING_PRODUCT_TITLE);
    assert_eq!(orders[1].delivery.date, DeliveryBucket::Tomorrow);
    assert_eq!(orders[1].payment_status, PaymentStatus::Unpaid);
}

#[tokio::test]
async fn server_error_surfaces_in_store_state() {
    let router = Router::new().route(
        "/api/orders",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let store = OrdersStore::new(api(router).await);

    assert!(store.refetch().await.is_err());

    let state = store.state().await;
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(SERVER_MESSAGE));
    assert!(state.data.items.is_empty());
}

#[tokio::test]
async fn order_detail_fetches_and_classifies_history() {
    let router = Router::new()
        .route(
            "/api/orders/{id}",
            get(|Path(id): Path<i64>| async move { Json(order_json(id, "новый")) }),
        )
        .route(
            "/api/orders/{id}/history",
            get(|| async {
                Json(json!({"history": [
                    {"id": 1, "action": "Заказ создан", "user_name": "Ольга"},
                    {"id": 2, "action": "Статус изменён на «в работе»"},
                    {"id": 3, "action": "Назначен курьер"}
                ]}))
            }),
        );
    let store = OrderDetailStore::new(api(router).await).with_clock(today);

    store.load(5).await.unwrap();
    let order = store.order().await.unwrap();

    assert_eq!(order.id, 5);
    let kinds: Vec<HistoryKind> = order.history.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![
            HistoryKind::Created,
            HistoryKind::StatusChanged,
            HistoryKind::Assigned
        ]
    );
    assert_eq!(order.history[0].author.as_deref(), Some("Ольга"));
}

#[tokio::test]
async fn missing_history_endpoint_means_empty_history() {
    let router = Router::new().route(
        "/api/orders/{id}",
        get(|Path(id): Path<i64>| async move { Json(order_json(id, "готов")) }),
    );
    let store = OrderDetailStore::new(api(router).await).with_clock(today);

    store.load(3).await.unwrap();

    let order = store.order().await.unwrap();
    assert!(order.history.is_empty());
    assert!(store.state().await.error.is_none());
}

#[tokio::test]
async fn detail_actions_require_a_loaded_order() {
    let router = Router::new();
    let store = OrderDetailStore::new(api(router).await);

    let err = store
        .change_status(FrontendStatus::Ready)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

async fn adjust(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.write_hits.hit();
    *backend.last_body.lock().unwrap() = Some(body.clone());
    let mut records = backend.records.lock().unwrap();
    let item = records
        .iter_mut()
        .find(|i| i["id"] == id)
        .expect("item exists");
    let quantity = item["quantity"].as_f64().unwrap() + body["quantity"].as_f64().unwrap();
    item["quantity"] = json!(quantity);
    Json(item.clone())
}

#[tokio::test]
async fn write_off_updates_stock_after_refetch() {
    let backend = Backend::with(vec![
        json!({"id": 1, "name": "Роза красная", "quantity": 12.0, "unit": "stem", "min_quantity": 10.0}),
        json!({"id": 2, "name": "Лента", "quantity": 3.0, "unit": "m", "min_quantity": 1.0}),
    ]);
    let router = Router::new()
        .route("/api/inventory", get(list))
        .route("/api/inventory/{id}/adjust", post(adjust))
        .with_state(backend.clone());
    let store = InventoryStore::new(api(router).await);

    store.refetch().await.unwrap();
    assert!(store.low_stock().await.is_empty());

    store
        .adjust(1, InventoryAdjust::write_off(Decimal::from(5), "Брак"))
        .await
        .unwrap();

    let body = backend.last_body().unwrap();
    assert_eq!(body["kind"], "write_off");
    assert_eq!(body["quantity"], -5.0);

    let low = store.low_stock().await;
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Роза красная");
    assert_eq!(backend.list_hits.count(), 2);
}

#[tokio::test]
async fn zero_adjustment_is_rejected() {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/inventory", get(list))
        .route("/api/inventory/{id}/adjust", post(adjust))
        .with_state(backend.clone());
    let store = InventoryStore::new(api(router).await);

    let result = store
        .adjust(1, InventoryAdjust::write_off(Decimal::ZERO, "Ошибка"))
        .await;

    assert!(matches!(result, Err(ClientError::Validation(_))));
    assert_eq!(backend.write_hits.count(), 0);
}

#[tokio::test]
async fn staff_is_split_by_role() {
    let router = Router::new().route(
        "/api/users",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "Ольга", "role": "florist"},
                {"id": 2, "name": "Игорь", "role": "courier"},
                {"id": 3, "name": "Мария", "role": "florist", "is_active": false},
                {"id": 4, "name": "Админ", "role": "admin"}
            ]))
        }),
    );
    let store = StaffStore::new(api(router).await);

    store.refetch().await.unwrap();

    let executors: Vec<i64> = store.executors().await.iter().map(|u| u.id).collect();
    let couriers: Vec<i64> = store.couriers().await.iter().map(|u| u.id).collect();
    assert_eq!(executors, vec![1]);
    assert_eq!(couriers, vec![2]);
}

#[tokio::test]
async fn dashboard_tolerates_missing_counters() {
    let router = Router::new().route(
        "/api/stats/dashboard",
        get(|| async { Json(json!({"total_orders": 12, "new_orders": 3})) }),
    );
    let store = DashboardStore::new(api(router).await);

    store.refetch().await.unwrap();

    let stats = store.state().await.data.unwrap();
    assert_eq!(stats.total_orders, 12);
    assert_eq!(stats.new_orders, 3);
    assert_eq!(stats.low_stock_items, 0);
}
