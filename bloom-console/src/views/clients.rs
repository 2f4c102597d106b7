use std::sync::Arc;

use bloom_client::models::{ClientCreate, ClientType};
use bloom_client::{BloomApi, ClientsStore};

use super::{Table, or_dash};

fn type_label(client_type: ClientType) -> &'static str {
    match client_type {
        ClientType::Orderer => "Заказчик",
        ClientType::Recipient => "Получатель",
        ClientType::Both => "Заказчик/получатель",
    }
}

pub async fn list(api: Arc<BloomApi>, search: Option<String>) -> anyhow::Result<()> {
    let store = ClientsStore::new(api);
    store.search(search.as_deref().unwrap_or_default()).await?;
    let page = store.state().await.data;

    if page.items.is_empty() {
        println!("Клиентов нет");
        return Ok(());
    }
    let mut table = Table::new(vec!["ID", "Имя", "Телефон", "Тип", "Адрес"]);
    for client in &page.items {
        table.row(vec![
            client.id.to_string(),
            client.name.clone(),
            client.phone.clone(),
            type_label(client.client_type).to_string(),
            or_dash(client.address.as_deref()),
        ]);
    }
    print!("{}", table);
    println!("Всего: {}", page.total);
    Ok(())
}

pub async fn add(api: Arc<BloomApi>, payload: ClientCreate) -> anyhow::Result<()> {
    let store = ClientsStore::new(api);
    let client = store.create(payload).await?;
    println!("Добавлен клиент #{}: {} {}", client.id, client.name, client.phone);
    Ok(())
}
