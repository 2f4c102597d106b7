//! Wire record -> view record adapters
//!
//! Pure, total functions: a missing field becomes a default, never an
//! error. Nothing here performs I/O or reads the clock; callers pass
//! the comparison date.

pub mod client;
pub mod inventory;
pub mod order;
pub mod product;

pub use client::{adapt_client, client_display_name};
pub use inventory::adapt_inventory;
pub use order::{
    MISSING_PRODUCT_TITLE, adapt_order, bucket_delivery_date, classify_history,
};
pub use product::{
    PLACEHOLDER_IMAGE, adapt_product, adapt_product_with_composition, join_composition,
    resolve_composition,
};
