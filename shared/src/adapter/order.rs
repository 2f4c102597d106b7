// shared/src/adapter/order.rs
// Order adapter

use chrono::NaiveDate;

use super::client::client_display_name;
use super::product::{PLACEHOLDER_IMAGE, image_or_placeholder};
use crate::models::{Client, Order, OrderHistoryEntry, OrderItem};
use crate::status::{BackendStatus, to_frontend};
use crate::util::{money, parse_calendar_date};
use crate::view::{
    ContactView, DeliveryBucket, DeliveryView, HistoryKind, HistoryView, MainProduct, OrderView,
    PaymentStatus,
};

/// Title used when an order has no line items
pub const MISSING_PRODUCT_TITLE: &str = "Товар не найден";

/// Keyword table for history classification, checked in order.
const HISTORY_KEYWORDS: [(&str, HistoryKind); 6] = [
    ("создан", HistoryKind::Created),
    ("статус", HistoryKind::StatusChanged),
    ("оплат", HistoryKind::Payment),
    ("назначен", HistoryKind::Assigned),
    ("комментар", HistoryKind::Comment),
    ("измен", HistoryKind::Edited),
];

/// Map a free-text action to a history category, `Created` when nothing matches.
pub fn classify_history(action: &str) -> HistoryKind {
    let action = action.to_lowercase();
    HISTORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| action.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(HistoryKind::Created)
}

/// `Today` only for the same calendar day; every other day, including past
/// ones and anything past tomorrow, is `Tomorrow`.
pub fn bucket_delivery_date(delivery_date: Option<&str>, today: NaiveDate) -> DeliveryBucket {
    match delivery_date.and_then(parse_calendar_date) {
        Some(day) if day == today => DeliveryBucket::Today,
        Some(_) => DeliveryBucket::Tomorrow,
        None => {
            if let Some(raw) = delivery_date {
                tracing::debug!(delivery_date = raw, "Unparseable delivery date");
            }
            DeliveryBucket::Tomorrow
        }
    }
}

fn payment_status(status: &str) -> PaymentStatus {
    match BackendStatus::from_token(status) {
        Some(status) if status.is_initial() => PaymentStatus::Unpaid,
        _ => PaymentStatus::Paid,
    }
}

fn contact(client: Option<&Client>, id: i64) -> ContactView {
    match client {
        Some(client) => ContactView {
            name: client_display_name(client.name.as_deref(), &client.phone),
            phone: client.phone.clone(),
        },
        None => ContactView {
            name: format!("Клиент #{}", id),
            phone: String::new(),
        },
    }
}

fn item_title(item: &OrderItem) -> String {
    match &item.product {
        Some(product) => product.name.clone(),
        None => format!("Товар #{}", item.product_id),
    }
}

fn main_product(items: &[OrderItem]) -> MainProduct {
    match items.first() {
        Some(item) => MainProduct {
            title: item_title(item),
            image: image_or_placeholder(item.product.as_ref().and_then(|p| p.image_url.as_deref())),
            quantity: item.quantity,
            price: money(item.price),
        },
        None => MainProduct {
            title: MISSING_PRODUCT_TITLE.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            quantity: 0,
            price: "0".to_string(),
        },
    }
}

fn history(entry: &OrderHistoryEntry) -> HistoryView {
    HistoryView {
        kind: classify_history(&entry.action),
        text: entry.action.clone(),
        comment: entry.comment.clone(),
        author: entry.user_name.clone(),
        at: entry.created_at.clone(),
    }
}

/// Adapt an order, bucketing the delivery date against `today`.
pub fn adapt_order(order: &Order, today: NaiveDate) -> OrderView {
    OrderView {
        id: order.id,
        number: format!("#{}", order.id),
        status: to_frontend(&order.status),
        payment_status: payment_status(&order.status),
        customer: contact(order.client.as_ref(), order.client_id),
        recipient: contact(order.recipient.as_ref(), order.recipient_id),
        main_product: main_product(&order.items),
        additional_items: order
            .items
            .iter()
            .skip(1)
            .map(|item| format!("{} ×{}", item_title(item), item.quantity))
            .collect(),
        delivery: DeliveryView {
            date: bucket_delivery_date(order.delivery_date.as_deref(), today),
            raw_date: order.delivery_date.clone(),
            time_window: order.delivery_time_window.clone().unwrap_or_default(),
            address: order.delivery_address.clone().unwrap_or_default(),
        },
        executor: order.executor.as_ref().map(|u| u.name.clone()),
        courier: order.courier.as_ref().map(|u| u.name.clone()),
        total: money(order.total_price),
        comment: order
            .comment
            .clone()
            .or_else(|| order.notes.clone())
            .unwrap_or_default(),
        history: order.history.iter().map(history).collect(),
        created_at: order.created_at.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientType, Product, User, UserRole};
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn item(id: i64, name: Option<&str>, quantity: i32) -> OrderItem {
        OrderItem {
            id,
            product_id: 100 + id,
            product: name.map(|name| Product {
                id: 100 + id,
                name: name.into(),
                description: None,
                price: Decimal::from(1000),
                category: None,
                preparation_time: None,
                image_url: Some(format!("/img/{}.jpg", id)),
                created_at: None,
            }),
            quantity,
            price: Decimal::new(150000, 2),
        }
    }

    fn order(status: &str, delivery_date: Option<&str>, items: Vec<OrderItem>) -> Order {
        Order {
            id: 42,
            client_id: 1,
            recipient_id: 2,
            client: Some(Client {
                id: 1,
                name: None,
                phone: "+7 999 000-12-34".into(),
                email: None,
                address: None,
                client_type: ClientType::Orderer,
                notes: None,
                created_at: None,
            }),
            recipient: None,
            executor_id: Some(5),
            courier_id: None,
            executor: Some(User {
                id: 5,
                name: "Ольга".into(),
                phone: None,
                role: UserRole::Florist,
                is_active: true,
            }),
            courier: None,
            status: status.into(),
            delivery_date: delivery_date.map(String::from),
            delivery_address: Some("ул. Ленина, 1".into()),
            delivery_time_window: Some("10:00-12:00".into()),
            total_price: Decimal::new(300000, 2),
            comment: None,
            notes: Some("Позвонить заранее".into()),
            created_at: None,
            items,
            history: Vec::new(),
        }
    }

    #[test]
    fn same_day_is_today_regardless_of_time() {
        assert_eq!(
            bucket_delivery_date(Some("2026-10-14T23:30:00"), today()),
            DeliveryBucket::Today
        );
        assert_eq!(
            bucket_delivery_date(Some("2026-10-14T00:05:00+03:00"), today()),
            DeliveryBucket::Today
        );
    }

    #[test]
    fn next_day_is_tomorrow() {
        assert_eq!(
            bucket_delivery_date(Some("2026-10-15T09:00:00"), today()),
            DeliveryBucket::Tomorrow
        );
    }

    #[test]
    fn every_other_day_is_also_tomorrow() {
        for date in ["2026-10-13", "2026-10-20T10:00:00", "2025-01-01", "bad", ""] {
            assert_eq!(
                bucket_delivery_date(Some(date), today()),
                DeliveryBucket::Tomorrow,
                "{date}"
            );
        }
        assert_eq!(bucket_delivery_date(None, today()), DeliveryBucket::Tomorrow);
    }

    #[test]
    fn first_item_is_main_product() {
        let view = adapt_order(
            &order(
                "в работе",
                Some("2026-10-14"),
                vec![item(1, Some("Розы"), 1), item(2, Some("Открытка"), 2), item(3, None, 1)],
            ),
            today(),
        );
        assert_eq!(view.main_product.title, "Розы");
        assert_eq!(view.main_product.image, "/img/1.jpg");
        assert_eq!(view.main_product.price, "1500");
        assert_eq!(view.additional_items, vec!["Открытка ×2", "Товар #103 ×1"]);
        assert_eq!(view.status, "in_progress");
        assert_eq!(view.delivery.date, DeliveryBucket::Today);
    }

    #[test]
    fn no_items_yields_not_found_placeholder() {
        let view = adapt_order(&order("новый", None, vec![]), today());
        assert_eq!(view.main_product.title, MISSING_PRODUCT_TITLE);
        assert_eq!(view.main_product.quantity, 0);
        assert_eq!(view.main_product.image, PLACEHOLDER_IMAGE);
        assert!(view.additional_items.is_empty());
    }

    #[test]
    fn unpaid_only_in_initial_status() {
        assert_eq!(
            adapt_order(&order("новый", None, vec![]), today()).payment_status,
            PaymentStatus::Unpaid
        );
        for status in ["в работе", "готов", "доставлен", "неизвестно"] {
            assert_eq!(
                adapt_order(&order(status, None, vec![]), today()).payment_status,
                PaymentStatus::Paid
            );
        }
    }

    #[test]
    fn contacts_and_staff() {
        let view = adapt_order(&order("готов", None, vec![]), today());
        assert_eq!(view.customer.name, "Клиент 1234");
        assert_eq!(view.recipient.name, "Клиент #2");
        assert_eq!(view.executor.as_deref(), Some("Ольга"));
        assert!(view.courier.is_none());
        assert_eq!(view.comment, "Позвонить заранее");
        assert_eq!(view.total, "3000");
        assert_eq!(view.number, "#42");
    }

    #[test]
    fn history_keywords_are_case_insensitive() {
        assert_eq!(classify_history("Заказ СОЗДАН менеджером"), HistoryKind::Created);
        assert_eq!(classify_history("Изменён статус на «готов»"), HistoryKind::StatusChanged);
        assert_eq!(classify_history("Получена оплата"), HistoryKind::Payment);
        assert_eq!(classify_history("Назначен курьер"), HistoryKind::Assigned);
        assert_eq!(classify_history("Добавлен комментарий"), HistoryKind::Comment);
        assert_eq!(classify_history("Изменена дата доставки"), HistoryKind::Edited);
        assert_eq!(classify_history("Что-то произошло"), HistoryKind::Created);
    }
}
