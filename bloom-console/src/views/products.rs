use std::sync::Arc;

use bloom_client::{BloomApi, ProductsStore};
use shared::request::ProductFilter;

use super::{Table, or_dash};

pub async fn list(api: Arc<BloomApi>, filter: ProductFilter) -> anyhow::Result<()> {
    let store = ProductsStore::new(api);
    store.set_filter(filter).await?;
    let products = store.products().await;

    if products.is_empty() {
        println!("Товаров нет");
        return Ok(());
    }
    let mut table = Table::new(vec!["ID", "Название", "Тип", "Цена", "Время, мин"]);
    for product in &products {
        table.row(vec![
            product.id.to_string(),
            product.title.clone(),
            product.kind.label().to_string(),
            product.price.clone(),
            product
                .preparation_time
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    print!("{}", table);
    Ok(())
}

pub async fn show(api: Arc<BloomApi>, id: i64) -> anyhow::Result<()> {
    let store = ProductsStore::new(api);
    let (product, lines) = store.detail(id).await?;

    println!("{} ({})", product.title, product.kind.label());
    println!("Цена:        {}", product.price);
    println!("Изображение: {}", product.image);
    if !product.description.is_empty() {
        println!("{}", product.description);
    }

    if lines.is_empty() {
        println!("Состав не указан");
        return Ok(());
    }
    println!();
    let mut table = Table::new(vec!["Компонент", "Кол-во", "Ед.", "На складе"]);
    for line in &lines {
        let stock = match line.in_stock {
            Some(stock) if line.is_available() => stock.to_string(),
            Some(stock) => format!("{} (мало)", stock),
            None => "-".to_string(),
        };
        table.row(vec![
            line.name.clone(),
            line.quantity.normalize().to_string(),
            or_dash(line.unit.as_deref()),
            stock,
        ]);
    }
    print!("{}", table);
    Ok(())
}
