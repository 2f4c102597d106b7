// bloom-client/src/store/orders.rs
// Order list and order detail stores

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use shared::Page;
use shared::adapter::adapt_order;
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::request::OrderFilter;
use shared::status::FrontendStatus;
use shared::view::OrderView;
use tokio::sync::RwLock;

use super::{Resource, ResourceState};
use crate::api::BloomApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Order list
pub struct OrdersStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Page<OrderView>>,
    filter: RwLock<OrderFilter>,
    today: fn() -> NaiveDate,
}

impl<C: HttpClient> OrdersStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
            filter: RwLock::new(OrderFilter::default()),
            today: local_today,
        }
    }

    /// Replace the clock used for delivery-date bucketing
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn state(&self) -> ResourceState<Page<OrderView>> {
        self.resource.snapshot().await
    }

    pub async fn orders(&self) -> Vec<OrderView> {
        self.resource.data().await.items
    }

    pub async fn filter(&self) -> OrderFilter {
        self.filter.read().await.clone()
    }

    pub async fn refetch(&self) -> ClientResult<()> {
        let filter = self.filter().await;
        let today = (self.today)();
        self.resource
            .load(async {
                let page = self.api.list_orders(&filter).await?;
                Ok(page.map(|order| adapt_order(&order, today)))
            })
            .await
    }

    pub async fn set_filter(&self, filter: OrderFilter) -> ClientResult<()> {
        *self.filter.write().await = filter;
        self.refetch().await
    }

    /// Filter by UI status; the backend is queried with the translated token
    pub async fn set_status_filter(&self, status: Option<FrontendStatus>) -> ClientResult<()> {
        self.filter.write().await.status = status.map(|s| s.to_backend().as_str().to_string());
        self.refetch().await
    }

    pub async fn create(&self, payload: OrderCreate) -> ClientResult<OrderView> {
        let order = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.create_order(&payload).await
                },
                || self.refetch(),
            )
            .await?;
        tracing::info!(order_id = order.id, "Order created");
        Ok(self.adapt(&order))
    }

    pub async fn update(&self, id: i64, payload: OrderUpdate) -> ClientResult<OrderView> {
        let order = self
            .resource
            .mutate(self.api.update_order(id, &payload), || self.refetch())
            .await?;
        Ok(self.adapt(&order))
    }

    pub async fn change_status(&self, id: i64, status: FrontendStatus) -> ClientResult<OrderView> {
        let order = self
            .resource
            .mutate(
                self.api.update_order_status(id, status.to_backend()),
                || self.refetch(),
            )
            .await?;
        tracing::info!(order_id = id, status = %status, "Order status changed");
        Ok(self.adapt(&order))
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.resource
            .mutate(self.api.delete_order(id), || self.refetch())
            .await?;
        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }

    fn adapt(&self, order: &Order) -> OrderView {
        adapt_order(order, (self.today)())
    }
}

/// Single order with its history
pub struct OrderDetailStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Option<OrderView>>,
    current: RwLock<Option<i64>>,
    today: fn() -> NaiveDate,
}

impl<C: HttpClient> OrderDetailStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
            current: RwLock::new(None),
            today: local_today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn state(&self) -> ResourceState<Option<OrderView>> {
        self.resource.snapshot().await
    }

    pub async fn order(&self) -> Option<OrderView> {
        self.resource.data().await
    }

    pub async fn load(&self, id: i64) -> ClientResult<()> {
        *self.current.write().await = Some(id);
        self.refetch().await
    }

    /// Reload the current order; no-op before the first `load`
    pub async fn refetch(&self) -> ClientResult<()> {
        let Some(id) = *self.current.read().await else {
            return Ok(());
        };
        let today = (self.today)();
        self.resource
            .load(async {
                let mut order = self.api.get_order(id).await?;
                if order.history.is_empty() {
                    order.history = match self.api.order_history(id).await {
                        Ok(history) => history,
                        Err(e) if e.is_not_found() => Vec::new(),
                        Err(e) => return Err(e),
                    };
                }
                Ok(Some(adapt_order(&order, today)))
            })
            .await
    }

    pub async fn change_status(&self, status: FrontendStatus) -> ClientResult<()> {
        let id = self.current_id().await?;
        self.resource
            .mutate(
                self.api.update_order_status(id, status.to_backend()),
                || self.refetch(),
            )
            .await?;
        Ok(())
    }

    /// Assign the florist and/or courier
    pub async fn assign(&self, executor_id: Option<i64>, courier_id: Option<i64>) -> ClientResult<()> {
        let id = self.current_id().await?;
        let payload = OrderUpdate {
            executor_id,
            courier_id,
            ..Default::default()
        };
        self.resource
            .mutate(self.api.update_order(id, &payload), || self.refetch())
            .await?;
        Ok(())
    }

    async fn current_id(&self) -> ClientResult<i64> {
        match *self.current.read().await {
            Some(id) => Ok(id),
            None => Err(crate::ClientError::Validation("Заказ не выбран".into())),
        }
    }
}
