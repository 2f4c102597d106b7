//! Per-entity stores
//!
//! Each store owns a transient copy of backend data together with a
//! loading flag and a localized error message, the way a view expects to
//! render it. After any successful mutation a store refetches its list in
//! full; returned records are never spliced into local state.
//!
//! Every fetch takes a generation number. A response is applied only if no
//! newer fetch has started since, so a slow response cannot overwrite a
//! fresher one.

mod clients;
mod dashboard;
mod inventory;
mod orders;
mod products;
mod staff;

pub use clients::ClientsStore;
pub use dashboard::DashboardStore;
pub use inventory::InventoryStore;
pub use orders::{OrderDetailStore, OrdersStore};
pub use products::ProductsStore;
pub use staff::StaffStore;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::error::{ClientError, ClientResult};

/// Snapshot of a store's state
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: T,
    pub loading: bool,
    /// Localized message of the last failure, cleared on the next fetch
    pub error: Option<String>,
}

/// Data plus loading / error flags, guarded against stale responses
#[derive(Debug)]
pub struct Resource<T> {
    state: RwLock<ResourceState<T>>,
    generation: AtomicU64,
}

impl<T: Default> Default for Resource<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Resource<T> {
    pub fn new(initial: T) -> Self {
        Self {
            state: RwLock::new(ResourceState {
                data: initial,
                loading: false,
                error: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Record a failure that did not come from a fetch (mutation, validation)
    pub async fn fail(&self, err: &ClientError) {
        tracing::warn!(error = %err, "Store operation failed");
        self.state.write().await.error = Some(err.user_message());
    }

    /// Record the outcome of a mutation, passing the result through
    pub async fn track<R>(&self, result: ClientResult<R>) -> ClientResult<R> {
        if let Err(e) = &result {
            self.fail(e).await;
        }
        result
    }

    /// Run a mutation, then `refetch` on success.
    ///
    /// A failed refetch is recorded in the state but does not fail the
    /// mutation, which already happened on the backend.
    pub async fn mutate<R, Op, Re, ReFut>(&self, op: Op, refetch: Re) -> ClientResult<R>
    where
        Op: Future<Output = ClientResult<R>>,
        Re: FnOnce() -> ReFut,
        ReFut: Future<Output = ClientResult<()>>,
    {
        let value = self.track(op.await).await?;
        if let Err(e) = refetch().await {
            tracing::debug!(error = %e, "Refetch after mutation failed");
        }
        Ok(value)
    }

    /// Run `fetch` and store its result, unless a newer fetch started.
    ///
    /// Superseded results are dropped and reported as `Ok(())`.
    pub async fn load<F>(&self, fetch: F) -> ClientResult<()>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = fetch.await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Dropping stale response");
            return Ok(());
        }
        state.loading = false;
        match result {
            Ok(data) => {
                state.data = data;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetch failed");
                state.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

impl<T: Clone> Resource<T> {
    pub async fn snapshot(&self) -> ResourceState<T> {
        self.state.read().await.clone()
    }

    pub async fn data(&self) -> T {
        self.state.read().await.data.clone()
    }
}
