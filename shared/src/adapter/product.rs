// shared/src/adapter/product.rs
// Product adapter and composition resolution

use crate::models::{CompositionRow, InventoryItem, Product, ProductCategory};
use crate::util::money;
use crate::view::{CompositionLine, ProductKind, ProductView};

/// Image used when a product has none
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-bouquet.svg";

pub(crate) fn image_or_placeholder(image: Option<&str>) -> String {
    match image.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

fn kind_of(category: Option<ProductCategory>) -> ProductKind {
    match category {
        Some(ProductCategory::Bouquet) | None => ProductKind::Bouquet,
        Some(ProductCategory::Composition) => ProductKind::Composition,
        Some(ProductCategory::Potted) => ProductKind::Potted,
    }
}

pub fn adapt_product(product: &Product) -> ProductView {
    ProductView {
        id: product.id,
        title: product.name.clone(),
        description: product.description.clone().unwrap_or_default(),
        price: money(product.price),
        image: image_or_placeholder(product.image_url.as_deref()),
        kind: kind_of(product.category),
        preparation_time: product.preparation_time,
        composition: String::new(),
        created_at: product.created_at.clone(),
    }
}

pub fn adapt_product_with_composition(product: &Product, lines: &[CompositionLine]) -> ProductView {
    ProductView {
        composition: join_composition(lines),
        ..adapt_product(product)
    }
}

/// Attach stock on hand to each row.
///
/// A row matches an inventory item by `inventory_item_id`, or by
/// case-insensitive name when the row is not linked.
pub fn resolve_composition(rows: &[CompositionRow], inventory: &[InventoryItem]) -> Vec<CompositionLine> {
    rows.iter()
        .map(|row| {
            let item = match row.inventory_item_id {
                Some(id) => inventory.iter().find(|item| item.id == id),
                None => {
                    let name = row.name.trim().to_lowercase();
                    inventory
                        .iter()
                        .find(|item| item.name.trim().to_lowercase() == name)
                }
            };
            CompositionLine {
                name: row.name.clone(),
                quantity: row.quantity,
                unit: row.unit.clone(),
                inventory_item_id: item.map(|item| item.id).or(row.inventory_item_id),
                in_stock: item.map(|item| item.quantity),
            }
        })
        .collect()
}

/// `Роза ×5, Эвкалипт ×2`
pub fn join_composition(lines: &[CompositionLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{} ×{}", line.name, money(line.quantity)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use rust_decimal::Decimal;

    fn product(image: Option<&str>, category: Option<ProductCategory>) -> Product {
        Product {
            id: 5,
            name: "Букет «Нежность»".into(),
            description: None,
            price: Decimal::new(450000, 2),
            category,
            preparation_time: Some(30),
            image_url: image.map(String::from),
            created_at: None,
        }
    }

    fn row(name: &str, qty: i64, inventory_item_id: Option<i64>) -> CompositionRow {
        CompositionRow {
            id: 1,
            product_id: 5,
            inventory_item_id,
            name: name.into(),
            quantity: Decimal::from(qty),
            unit: None,
        }
    }

    fn stock(id: i64, name: &str, qty: i64) -> InventoryItem {
        InventoryItem {
            id,
            name: name.into(),
            quantity: Decimal::from(qty),
            unit: Unit::Stem,
            min_quantity: Decimal::ZERO,
            price_per_unit: Decimal::ZERO,
            created_at: None,
        }
    }

    #[test]
    fn renames_and_stringifies() {
        let view = adapt_product(&product(Some("/img/1.jpg"), Some(ProductCategory::Composition)));
        assert_eq!(view.title, "Букет «Нежность»");
        assert_eq!(view.price, "4500");
        assert_eq!(view.image, "/img/1.jpg");
        assert_eq!(view.kind, ProductKind::Composition);
        assert_eq!(view.description, "");
    }

    #[test]
    fn missing_image_and_category_get_defaults() {
        let view = adapt_product(&product(None, None));
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
        assert_eq!(view.kind, ProductKind::Bouquet);

        let view = adapt_product(&product(Some(""), None));
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn composition_resolves_by_id_then_name() {
        let inventory = vec![stock(1, "Роза красная", 40), stock(2, "Эвкалипт", 1)];
        let rows = vec![
            row("Роза", 5, Some(1)),
            row("эвкалипт", 2, None),
            row("Лента", 1, None),
        ];
        let lines = resolve_composition(&rows, &inventory);

        assert_eq!(lines[0].in_stock, Some(Decimal::from(40)));
        assert!(lines[0].is_available());
        assert_eq!(lines[1].inventory_item_id, Some(2));
        assert!(!lines[1].is_available());
        assert_eq!(lines[2].in_stock, None);
        assert!(!lines[2].is_available());

        let view = adapt_product_with_composition(&product(None, None), &lines);
        assert_eq!(view.composition, "Роза ×5, эвкалипт ×2, Лента ×1");
    }
}
