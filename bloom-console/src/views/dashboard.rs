use std::sync::Arc;

use bloom_client::{BloomApi, DashboardStore};

pub async fn show(api: Arc<BloomApi>) -> anyhow::Result<()> {
    let store = DashboardStore::new(api);
    store.refetch().await?;
    let Some(stats) = store.state().await.data else {
        return Ok(());
    };

    println!("Заказы");
    println!("  всего:     {}", stats.total_orders);
    println!("  новые:     {}", stats.new_orders);
    println!("  в работе:  {}", stats.in_progress_orders);
    println!("  готовы:    {}", stats.ready_orders);
    println!("  доставлены: {}", stats.delivered_orders);
    println!("  сегодня:   {}", stats.orders_today);
    println!("Выручка");
    println!("  сегодня:   {}", stats.revenue_today.normalize());
    println!("  за месяц:  {}", stats.revenue_month.normalize());
    println!("Клиентов:    {}", stats.total_clients);
    println!("Мало на складе: {}", stats.low_stock_items);
    Ok(())
}
