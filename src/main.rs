use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use prometheus_client::encoding::text::encode;
use prometheus_client::registry::Registry;

use arp_inventory::collector::ArpInventory;
use arp_inventory::inventory::{InventoryParams, InventoryRecord, MAX_ENTRIES_LIMIT};
use arp_inventory::views::{DisplayHint, DISPLAY_HINTS};

#[derive(Parser, Debug)]
#[command(term_width = 0)]
struct Args {
    /// Bind Address
    #[arg(long, default_value_t = ("127.0.0.1:9172").parse().unwrap())]
    bind_addr: SocketAddr,

    /// Path to the ARP table dump written by the SNMP poller
    #[arg(long, default_value_t = format!("/var/lib/arp-inventory/ip_net_to_media.json"))]
    table_path: String,

    /// Collection interval
    #[arg(long, default_value = "60s")]
    interval: humantime::Duration,

    /// Limit on ARP entries in the inventory detail table, 0 for unlimited
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(..=MAX_ENTRIES_LIMIT as i64))]
    max_entries: u32,
}

#[derive(Clone)]
struct AppState {
    inventory: ArpInventory,
    registry: Arc<Registry>,
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();
    log::info!("{:?}", args);

    let mut registry = Registry::default();
    let inventory = ArpInventory::new(args.table_path.clone(), InventoryParams { max_entries: args.max_entries });
    inventory.register(&mut registry);

    {
        let inventory = inventory.clone();
        let interval = *args.interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = inventory.update_inventory().await {
                    log::error!("update_inventory failed: {:#}", e);
                }
            }
        });
    }

    let app = Router::new()
        .route("/inventory", get(inventory_records))
        .route("/inventory/hints", get(display_hints))
        .route("/metrics", get(metrics))
        .with_state(AppState { inventory, registry: Arc::new(registry) });

    let listener = tokio::net::TcpListener::bind(args.bind_addr).await?;
    log::info!("Listening on http://{}", args.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn inventory_records(State(state): State<AppState>) -> Json<Vec<InventoryRecord>> {
    Json(state.inventory.records().await)
}

async fn display_hints() -> Json<&'static [DisplayHint]> {
    Json(DISPLAY_HINTS)
}

async fn metrics(State(state): State<AppState>) -> Result<String, StatusCode> {
    let mut buffer = String::new();
    match encode(&mut buffer, state.registry.as_ref()) {
        Ok(()) => Ok(buffer),
        Err(e) => {
            log::error!("encoding metrics failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
