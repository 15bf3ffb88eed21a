//! Demo entry point.
//!
//! With `SELLER_CONSOLE_BASE_URL` and `SELLER_CONSOLE_TOKEN` set, prints the
//! seller's stock as seen by the remote backend. Otherwise runs a scripted
//! session against the in-memory backend: add a product, edit stock, hide it,
//! and delete it from the out-of-stock view.

use seller_console::api::HttpSellerApi;
use seller_console::auth::StaticToken;
use seller_console::config::{load_config, ConsoleConfig};
use seller_console::console::{ConsoleContext, OutOfStockConsole, StockConsole};
use seller_console::intake::ProductIntakeForm;
use seller_console::lifecycle::{setup_tracing, SellerBackend};
use seller_console::model::{ProductCategory, SellerId, UploadFile};
use seller_console::notify::TracingNotifier;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

const TOKEN_ENV: &str = "SELLER_CONSOLE_TOKEN";
const DEMO_TOKEN: &str = "demo-token";

type DemoResult = Result<(), Box<dyn Error + Send + Sync>>;

#[tokio::main]
async fn main() -> DemoResult {
    setup_tracing();
    let config = load_config()?;

    match (&config.api.base_url, std::env::var(TOKEN_ENV).ok()) {
        (Some(base_url), Some(token)) => remote_report(&config, base_url, token).await,
        (Some(_), None) => {
            warn!("{TOKEN_ENV} is not set; falling back to the in-memory backend");
            local_demo(&config).await
        }
        _ => local_demo(&config).await,
    }
}

async fn remote_report(config: &ConsoleConfig, base_url: &str, token: String) -> DemoResult {
    info!(base_url, "Connecting to remote backend");
    let api = HttpSellerApi::new(base_url, config.api.timeout())?;
    let ctx = ConsoleContext::new(
        Arc::new(api),
        Arc::new(StaticToken::new(token)),
        Arc::new(TracingNotifier),
    );

    let console = StockConsole::new(ctx);
    console.mount().await?;
    for row in console.rows() {
        info!(id = %row.id, name = %row.name, stock = %row.badge.label, "Product");
    }
    Ok(())
}

async fn local_demo(config: &ConsoleConfig) -> DemoResult {
    info!("Starting in-memory seller backend");
    let backend = SellerBackend::new(&config.store);
    backend.seed_categories().await?;
    backend
        .register_seller(DEMO_TOKEN, SellerId::from("seller_demo"))
        .await;

    let ctx = backend.context(Arc::new(StaticToken::new(DEMO_TOKEN)), Arc::new(TracingNotifier));

    let span = tracing::info_span!("intake");
    async {
        let mut form = ProductIntakeForm::new(ctx.clone());
        form.fields.name = "Studio Buds".to_string();
        form.fields.description = "Wireless earbuds".to_string();
        form.fields.category = ProductCategory::Earphone;
        form.fields.price = "129.99".to_string();
        form.fields.offer_price = "99.99".to_string();
        form.fields.stock = "8".to_string();
        form.specs.set_pair_key(0, 0, "Battery");
        form.specs.set_pair_value(0, 0, "24h");
        form.set_image(0, Some(UploadFile::new("buds.png", "image/png", vec![0x89, b'P'])))?;
        form.submit().await?;

        let bulk = br#"[{"name":"Trackball","price":59,"stock":0,"category":"Mouse"}]"#;
        form.bulk_upload(UploadFile::new("bulk.json", "application/json", bulk.to_vec()))
            .await?;
        Ok::<_, Box<dyn Error + Send + Sync>>(())
    }
    .instrument(span)
    .await?;

    let stock = StockConsole::new(ctx.clone());
    stock.mount().await?;
    let Some(buds) = stock.rows().into_iter().find(|r| r.name == "Studio Buds") else {
        return Err("demo product missing".into());
    };
    stock.update_stock(&buds.id, "0").await?;
    stock.toggle_stock_visibility(&buds.id).await?;
    for row in stock.rows() {
        info!(id = %row.id, name = %row.name, badge = %row.badge.label, toggle = row.toggle_label, "Stock row");
    }

    let out_of_stock = OutOfStockConsole::new(ctx);
    out_of_stock.mount().await?;
    info!(count = out_of_stock.rows().len(), "Out-of-stock products");
    out_of_stock.arm_delete(&buds.id);
    out_of_stock.confirm_delete(&buds.id).await?;
    info!(remaining = out_of_stock.rows().len(), "After delete");

    drop(stock);
    drop(out_of_stock);
    backend.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
