use crate::models::InventoryItem;
use crate::view::InventoryView;

pub fn adapt_inventory(item: &InventoryItem) -> InventoryView {
    InventoryView {
        id: item.id,
        name: item.name.clone(),
        quantity: item.quantity,
        unit: item.unit,
        min_quantity: item.min_quantity,
        price_per_unit: item.price_per_unit,
        is_low_stock: item.is_low_stock(),
        created_at: item.created_at.clone(),
    }
}
