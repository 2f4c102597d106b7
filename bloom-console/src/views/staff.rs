use std::sync::Arc;

use bloom_client::models::User;
use bloom_client::{BloomApi, StaffStore};

use super::{Table, or_dash};

fn print_group(title: &str, users: &[User]) {
    println!("{} ({})", title, users.len());
    if users.is_empty() {
        return;
    }
    let mut table = Table::new(vec!["ID", "Имя", "Телефон"]);
    for user in users {
        table.row(vec![
            user.id.to_string(),
            user.name.clone(),
            or_dash(user.phone.as_deref()),
        ]);
    }
    print!("{}", table);
}

pub async fn list(api: Arc<BloomApi>) -> anyhow::Result<()> {
    let store = StaffStore::new(api);
    store.refetch().await?;

    print_group("Флористы", &store.executors().await);
    println!();
    print_group("Курьеры", &store.couriers().await);
    Ok(())
}
