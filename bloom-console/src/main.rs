//! bloom: terminal front-end for the florist CRM
//!
//! Renders orders, clients, products, stock, staff and the dashboard from
//! the CRM REST backend. Connection settings come from `BLOOM_*` env vars
//! (a `.env` file is honored) and can be overridden with flags.

mod logger;
mod views;

use std::sync::Arc;

use bloom_client::models::{ClientCreate, ClientType};
use bloom_client::{BloomApi, ClientConfig};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use shared::request::{InventoryFilter, OrderFilter, Pagination, ProductFilter};
use shared::status::FrontendStatus;

#[derive(Parser)]
#[command(name = "bloom", about = "Florist CRM console", version)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "BLOOM_API_URL")]
    api_url: Option<String>,

    /// Bearer token
    #[arg(long, env = "BLOOM_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dashboard counters
    Dashboard,
    #[command(subcommand)]
    Orders(OrdersCommand),
    #[command(subcommand)]
    Clients(ClientsCommand),
    #[command(subcommand)]
    Products(ProductsCommand),
    #[command(subcommand)]
    Inventory(InventoryCommand),
    /// Florists and couriers
    Staff,
}

#[derive(Subcommand)]
enum OrdersCommand {
    List {
        /// new, in_progress, ready, delivery or completed
        #[arg(long, value_parser = parse_status)]
        status: Option<FrontendStatus>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "client")]
        client_id: Option<i64>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = shared::request::DEFAULT_LIMIT)]
        limit: u32,
    },
    Show {
        id: i64,
    },
    Status {
        id: i64,
        #[arg(value_parser = parse_status)]
        status: FrontendStatus,
    },
    Assign {
        id: i64,
        #[arg(long = "executor")]
        executor_id: Option<i64>,
        #[arg(long = "courier")]
        courier_id: Option<i64>,
    },
    Create {
        #[arg(long = "client")]
        client_id: i64,
        /// Defaults to the ordering client
        #[arg(long = "recipient")]
        recipient_id: Option<i64>,
        /// PRODUCT_ID:QTY, repeatable
        #[arg(long = "item", value_parser = parse_item, required = true)]
        items: Vec<(i64, i32)>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },
}

#[derive(Subcommand)]
enum ClientsCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Add {
        phone: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// orderer, recipient or both
        #[arg(long = "type", value_parser = parse_client_type, default_value = "both")]
        client_type: ClientType,
    },
}

#[derive(Subcommand)]
enum ProductsCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Product card with composition
    Show { id: i64 },
}

#[derive(Subcommand)]
enum InventoryCommand {
    List {
        #[arg(long)]
        low_stock: bool,
        #[arg(long)]
        search: Option<String>,
    },
    WriteOff {
        id: i64,
        quantity: Decimal,
        #[arg(long, default_value = "Списание")]
        comment: String,
    },
    /// Transactions for one item
    History { id: i64 },
}

fn parse_status(token: &str) -> Result<FrontendStatus, String> {
    FrontendStatus::from_token(token).ok_or_else(|| {
        let known: Vec<&str> = FrontendStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown status `{}`, expected one of: {}", token, known.join(", "))
    })
}

fn parse_client_type(value: &str) -> Result<ClientType, String> {
    [ClientType::Orderer, ClientType::Recipient, ClientType::Both]
        .into_iter()
        .find(|t| t.as_str() == value)
        .ok_or_else(|| format!("unknown client type `{}`", value))
}

fn parse_item(value: &str) -> Result<(i64, i32), String> {
    let (product, quantity) = value.split_once(':').unwrap_or((value, "1"));
    let product = product
        .trim()
        .parse()
        .map_err(|_| format!("bad product id in `{}`", value))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|_| format!("bad quantity in `{}`", value))?;
    Ok((product, quantity))
}

fn config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config = config.with_token(token.clone());
    }
    config
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config(&cli);
    tracing::debug!(base_url = %config.base_url, "Using backend");
    let api = Arc::new(BloomApi::from_config(&config)?);

    match cli.command {
        Command::Dashboard => views::dashboard::show(api).await,
        Command::Staff => views::staff::list(api).await,
        Command::Orders(cmd) => match cmd {
            OrdersCommand::List {
                status,
                search,
                client_id,
                page,
                limit,
            } => {
                let filter = OrderFilter {
                    pagination: Pagination::page(page, limit),
                    status: status.map(|s| s.to_backend().as_str().to_string()),
                    client_id,
                    search,
                };
                views::orders::list(api, filter).await
            }
            OrdersCommand::Show { id } => views::orders::show(api, id).await,
            OrdersCommand::Status { id, status } => views::orders::set_status(api, id, status).await,
            OrdersCommand::Assign {
                id,
                executor_id,
                courier_id,
            } => views::orders::assign(api, id, executor_id, courier_id).await,
            OrdersCommand::Create {
                client_id,
                recipient_id,
                items,
                date,
                address,
                time,
                comment,
            } => {
                let form = views::orders::NewOrder {
                    client_id,
                    recipient_id,
                    items,
                    delivery_date: date,
                    delivery_address: address,
                    delivery_time_window: time,
                    comment,
                };
                views::orders::create(api, form).await
            }
        },
        Command::Clients(cmd) => match cmd {
            ClientsCommand::List { search } => views::clients::list(api, search).await,
            ClientsCommand::Add {
                phone,
                name,
                email,
                address,
                client_type,
            } => {
                let payload = ClientCreate {
                    name,
                    email,
                    address,
                    client_type,
                    ..ClientCreate::with_phone(phone)
                };
                views::clients::add(api, payload).await
            }
        },
        Command::Products(cmd) => match cmd {
            ProductsCommand::List { search } => {
                let filter = ProductFilter {
                    search,
                    ..Default::default()
                };
                views::products::list(api, filter).await
            }
            ProductsCommand::Show { id } => views::products::show(api, id).await,
        },
        Command::Inventory(cmd) => match cmd {
            InventoryCommand::List { low_stock, search } => {
                let filter = InventoryFilter {
                    low_stock,
                    search,
                    ..Default::default()
                };
                views::inventory::list(api, filter).await
            }
            InventoryCommand::WriteOff {
                id,
                quantity,
                comment,
            } => views::inventory::write_off(api, id, quantity, comment).await,
            InventoryCommand::History { id } => views::inventory::history(api, id).await,
        },
    }
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed flags
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        views::report_error(&e);
        std::process::exit(1);
    }
}
