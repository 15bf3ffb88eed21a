mod common;

use common::{context, product, ScriptedApi};
use seller_console::console::{OutOfStockConsole, Outcome, StockConsole, ALL_IN_STOCK};
use seller_console::model::{Product, ProductId};
use std::sync::Arc;

#[tokio::test]
async fn test_only_zero_stock_products_are_held() {
    let api = Arc::new(ScriptedApi::with_products(vec![
        product("p1", 0),
        product("p2", 3),
        Product {
            force_out_of_stock: true,
            ..product("p3", 8)
        },
        product("p4", 0),
    ]));
    let (ctx, _) = context(api.clone());
    let all = StockConsole::new(ctx.clone());
    let out = OutOfStockConsole::new(ctx);
    all.refresh().await.unwrap();
    out.refresh().await.unwrap();

    assert!(all.products().len() >= out.products().len());
    assert!(out.products().iter().all(|p| p.stock == 0));
    let ids: Vec<_> = out.rows().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![ProductId::from("p1"), ProductId::from("p4")]);
    assert_eq!(out.rows()[0].stock_label, "Current Stock: 0");
    assert_eq!(out.empty_message(), None);
}

#[tokio::test]
async fn test_single_zero_stock_product_scenario() {
    let api = Arc::new(ScriptedApi::with_products(vec![Product {
        force_out_of_stock: false,
        ..product("p1", 0)
    }]));
    let (ctx, _) = context(api.clone());
    let out = OutOfStockConsole::new(ctx.clone());
    out.mount().await.unwrap();

    let rows = out.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, ProductId::from("p1"));

    let stock = StockConsole::new(ctx);
    stock.mount().await.unwrap();
    let lists_before = api.count("list");
    stock
        .toggle_stock_visibility(&ProductId::from("p1"))
        .await
        .unwrap();
    assert_eq!(api.count("list"), lists_before);
    assert!(stock.products()[0].force_out_of_stock);
}

#[tokio::test]
async fn test_empty_view_message() {
    let api = Arc::new(ScriptedApi::with_products(vec![product("p1", 2)]));
    let (ctx, _) = context(api);
    let out = OutOfStockConsole::new(ctx);
    out.refresh().await.unwrap();

    assert!(out.rows().is_empty());
    assert_eq!(out.empty_message(), Some(ALL_IN_STOCK));
}

#[tokio::test]
async fn test_arming_one_row_disarms_the_other() {
    let api = Arc::new(ScriptedApi::with_products(vec![product("a", 0), product("b", 0)]));
    let (ctx, _) = context(api);
    let out = OutOfStockConsole::new(ctx);
    out.refresh().await.unwrap();

    let (a, b) = (ProductId::from("a"), ProductId::from("b"));
    out.arm_delete(&a);
    assert_eq!(out.armed(), Some(a.clone()));
    out.arm_delete(&b);
    assert_eq!(out.armed(), Some(b.clone()));

    let armed: Vec<_> = out.rows().into_iter().filter(|r| r.armed).map(|r| r.id).collect();
    assert_eq!(armed, vec![b]);

    out.cancel_delete();
    assert_eq!(out.armed(), None);
}

#[tokio::test]
async fn test_confirm_requires_the_armed_row() {
    let api = Arc::new(ScriptedApi::with_products(vec![product("a", 0), product("b", 0)]));
    let (ctx, notifier) = context(api.clone());
    let out = OutOfStockConsole::new(ctx);
    out.refresh().await.unwrap();

    let (a, b) = (ProductId::from("a"), ProductId::from("b"));
    out.arm_delete(&a);
    assert_eq!(out.confirm_delete(&b).await.unwrap(), Outcome::Skipped);
    assert_eq!(api.count("delete"), 0);

    assert_eq!(out.confirm_delete(&a).await.unwrap(), Outcome::Applied);
    assert_eq!(out.armed(), None);
    assert_eq!(api.calls().last().map(String::as_str), Some("list"));
    assert_eq!(out.rows().len(), 1);
    assert_eq!(notifier.last().unwrap().message, "Product deleted");
}

#[tokio::test]
async fn test_failed_delete_keeps_row_armed() {
    let api = Arc::new(ScriptedApi::with_products(vec![product("a", 0)]));
    let (ctx, notifier) = context(api.clone());
    let out = OutOfStockConsole::new(ctx);
    out.refresh().await.unwrap();
    api.go_down();

    let a = ProductId::from("a");
    out.arm_delete(&a);
    assert!(out.confirm_delete(&a).await.is_err());
    assert_eq!(out.armed(), Some(a));
    assert_eq!(
        notifier.last().unwrap().message,
        "Request failed with status code 503"
    );
}

#[tokio::test]
async fn test_restocked_product_leaves_the_view() {
    let api = Arc::new(ScriptedApi::with_products(vec![product("a", 0)]));
    let (ctx, _) = context(api.clone());
    let out = OutOfStockConsole::new(ctx);
    out.refresh().await.unwrap();

    let a = ProductId::from("a");
    out.set_stock_draft(&a, "10");
    out.submit_stock_draft(&a).await.unwrap();

    assert!(out.rows().is_empty());
    assert_eq!(out.stock_draft(&a), "10");
}
