use std::sync::Arc;

use bloom_client::models::{OrderCreate, OrderItemCreate};
use bloom_client::view::{OrderView, PaymentStatus};
use bloom_client::{BloomApi, OrderDetailStore, OrdersStore};
use shared::request::OrderFilter;
use shared::status::FrontendStatus;

use super::{Table, or_dash};

fn status_label(order: &OrderView) -> String {
    order
        .frontend_status()
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| order.status.clone())
}

fn payment_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "Оплачен",
        PaymentStatus::Unpaid => "Не оплачен",
    }
}

fn product_cell(order: &OrderView) -> String {
    let main = &order.main_product;
    match order.additional_items.len() {
        0 => format!("{} ×{}", main.title, main.quantity),
        n => format!("{} ×{} (+{})", main.title, main.quantity, n),
    }
}

pub async fn list(api: Arc<BloomApi>, filter: OrderFilter) -> anyhow::Result<()> {
    let store = OrdersStore::new(api);
    store.set_filter(filter).await?;
    let page = store.state().await.data;

    let mut table = Table::new(vec![
        "№", "Статус", "Клиент", "Товар", "Доставка", "Сумма", "Оплата",
    ]);
    for order in &page.items {
        table.row(vec![
            order.number.clone(),
            status_label(order),
            order.customer.name.clone(),
            product_cell(order),
            format!(
                "{} {}",
                order.delivery.date.label(),
                order.delivery.time_window
            )
            .trim_end()
            .to_string(),
            order.total.clone(),
            payment_label(order.payment_status).to_string(),
        ]);
    }

    if table.is_empty() {
        println!("Заказов нет");
    } else {
        print!("{}", table);
        println!("Показано {} из {}", page.items.len(), page.total);
    }
    Ok(())
}

fn print_order(order: &OrderView) {
    println!("Заказ {}  [{}]", order.number, status_label(order));
    println!(
        "Клиент:      {} {}",
        order.customer.name, order.customer.phone
    );
    println!(
        "Получатель:  {} {}",
        order.recipient.name, order.recipient.phone
    );
    println!("Товар:       {}", product_cell(order));
    for item in &order.additional_items {
        println!("             {}", item);
    }
    println!(
        "Доставка:    {} {} {}",
        order.delivery.date.label(),
        order.delivery.time_window,
        order.delivery.address
    );
    println!("Флорист:     {}", or_dash(order.executor.as_deref()));
    println!("Курьер:      {}", or_dash(order.courier.as_deref()));
    println!(
        "Сумма:       {} ({})",
        order.total,
        payment_label(order.payment_status)
    );
    if !order.comment.is_empty() {
        println!("Комментарий: {}", order.comment);
    }

    if !order.history.is_empty() {
        println!();
        let mut table = Table::new(vec!["Когда", "Событие", "Кто"]);
        for entry in &order.history {
            let text = match &entry.comment {
                Some(comment) => format!("{} ({})", entry.text, comment),
                None => entry.text.clone(),
            };
            table.row(vec![
                or_dash(entry.at.as_deref()),
                text,
                or_dash(entry.author.as_deref()),
            ]);
        }
        print!("{}", table);
    }
}

async fn load_detail(api: Arc<BloomApi>, id: i64) -> anyhow::Result<OrderDetailStore> {
    let store = OrderDetailStore::new(api);
    store.load(id).await?;
    Ok(store)
}

pub async fn show(api: Arc<BloomApi>, id: i64) -> anyhow::Result<()> {
    let store = load_detail(api, id).await?;
    if let Some(order) = store.order().await {
        print_order(&order);
    }
    Ok(())
}

pub async fn set_status(api: Arc<BloomApi>, id: i64, status: FrontendStatus) -> anyhow::Result<()> {
    let store = load_detail(api, id).await?;
    store.change_status(status).await?;
    if let Some(order) = store.order().await {
        println!("Заказ {}: {}", order.number, status_label(&order));
    }
    Ok(())
}

pub async fn assign(
    api: Arc<BloomApi>,
    id: i64,
    executor_id: Option<i64>,
    courier_id: Option<i64>,
) -> anyhow::Result<()> {
    if executor_id.is_none() && courier_id.is_none() {
        anyhow::bail!("укажите --executor и/или --courier");
    }
    let store = load_detail(api, id).await?;
    store.assign(executor_id, courier_id).await?;
    if let Some(order) = store.order().await {
        print_order(&order);
    }
    Ok(())
}

/// Order form submitted from flags
pub struct NewOrder {
    pub client_id: i64,
    pub recipient_id: Option<i64>,
    pub items: Vec<(i64, i32)>,
    pub delivery_date: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_time_window: Option<String>,
    pub comment: Option<String>,
}

pub async fn create(api: Arc<BloomApi>, form: NewOrder) -> anyhow::Result<()> {
    let payload = OrderCreate {
        client_id: form.client_id,
        recipient_id: form.recipient_id.unwrap_or(form.client_id),
        executor_id: None,
        courier_id: None,
        delivery_date: form.delivery_date,
        delivery_address: form.delivery_address,
        delivery_time_window: form.delivery_time_window,
        comment: form.comment,
        items: form
            .items
            .into_iter()
            .map(|(product_id, quantity)| OrderItemCreate {
                product_id,
                quantity,
                price: None,
            })
            .collect(),
    };
    let store = OrdersStore::new(api);
    let order = store.create(payload).await?;
    println!("Создан заказ {}", order.number);
    print_order(&order);
    Ok(())
}
