use std::sync::Arc;

use bloom_client::models::InventoryAdjust;
use bloom_client::{BloomApi, InventoryStore};
use rust_decimal::Decimal;
use shared::request::InventoryFilter;

use super::{Table, or_dash};

pub async fn list(api: Arc<BloomApi>, filter: InventoryFilter) -> anyhow::Result<()> {
    let store = InventoryStore::new(api);
    store.set_filter(filter).await?;
    let items = store.items().await;

    if items.is_empty() {
        println!("Склад пуст");
        return Ok(());
    }
    let mut table = Table::new(vec!["ID", "Название", "Остаток", "Минимум", "Цена/ед.", ""]);
    for item in &items {
        table.row(vec![
            item.id.to_string(),
            item.name.clone(),
            format!("{} {}", item.quantity.normalize(), item.unit.label()),
            item.min_quantity.normalize().to_string(),
            item.price_per_unit.normalize().to_string(),
            if item.is_low_stock { "мало" } else { "" }.to_string(),
        ]);
    }
    print!("{}", table);

    let low = store.low_stock().await.len();
    if low > 0 {
        println!("Заканчивается позиций: {}", low);
    }
    Ok(())
}

pub async fn write_off(
    api: Arc<BloomApi>,
    id: i64,
    quantity: Decimal,
    comment: String,
) -> anyhow::Result<()> {
    let store = InventoryStore::new(api);
    let item = store
        .adjust(id, InventoryAdjust::write_off(quantity, comment))
        .await?;
    println!(
        "Списано. {}: {} {}",
        item.name,
        item.quantity.normalize(),
        item.unit.label()
    );
    Ok(())
}

pub async fn history(api: Arc<BloomApi>, id: i64) -> anyhow::Result<()> {
    let store = InventoryStore::new(api);
    let transactions = store.transactions(id).await?;

    if transactions.is_empty() {
        println!("Движений нет");
        return Ok(());
    }
    let mut table = Table::new(vec!["Когда", "Тип", "Кол-во", "Заказ", "Комментарий"]);
    for tx in &transactions {
        table.row(vec![
            or_dash(tx.created_at.as_deref()),
            format!("{:?}", tx.kind),
            tx.quantity.normalize().to_string(),
            tx.order_id.map(|id| format!("#{}", id)).unwrap_or_else(|| "-".into()),
            or_dash(tx.comment.as_deref()),
        ]);
    }
    print!("{}", table);
    Ok(())
}
