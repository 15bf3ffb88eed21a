mod common;

use common::{context, ScriptedApi};
use seller_console::console::Outcome;
use seller_console::error::{ConsoleError, ValidationError};
use seller_console::intake::{
    PreviewRegistry, ProductIntakeForm, DEFAULT_GROUP_TITLE, ADDED_FALLBACK, BULK_FAILED,
    BULK_REJECTED_FALLBACK,
};
use seller_console::model::{ProductCategory, UploadFile};
use seller_console::notify::NoticeLevel;
use std::sync::Arc;

fn png(name: &str) -> UploadFile {
    UploadFile::new(name, "image/png", vec![1, 2, 3])
}

fn filled(form: &mut ProductIntakeForm) {
    form.fields.name = "  Smart Watch ".into();
    form.fields.description = " Tracks steps ".into();
    form.fields.category = ProductCategory::Watch;
    form.fields.price = "200".into();
    form.fields.offer_price = "150".into();
    form.fields.stock = "5".into();
    form.set_image(2, Some(png("w.png"))).unwrap();
}

#[tokio::test]
async fn test_zero_images_is_rejected_before_any_request() {
    let api = Arc::new(ScriptedApi::default());
    let (ctx, notifier) = context(api.clone());
    let mut form = ProductIntakeForm::new(ctx);
    filled(&mut form);
    form.set_image(2, None).unwrap();

    let err = form.submit().await.unwrap_err();
    assert_eq!(err, ConsoleError::Validation(ValidationError::MissingImage));
    assert_eq!(
        notifier.last().unwrap().message,
        "Please upload at least one image."
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_offer_above_price_is_rejected() {
    let api = Arc::new(ScriptedApi::default());
    let (ctx, notifier) = context(api.clone());
    let mut form = ProductIntakeForm::new(ctx);
    filled(&mut form);
    form.fields.price = "10".into();
    form.fields.offer_price = "15".into();

    assert!(form.submit().await.is_err());
    assert_eq!(
        notifier.last().unwrap().message,
        "Offer price must be less than original price."
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_validation_order_and_messages() {
    let (ctx, _) = context(Arc::new(ScriptedApi::default()));
    let mut form = ProductIntakeForm::new(ctx);
    filled(&mut form);

    form.fields.price = "0".into();
    assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPrice);
    form.fields.price = "abc".into();
    assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPrice);

    form.fields.price = "100".into();
    form.fields.offer_price = "100".into();
    assert_eq!(form.validate().unwrap_err(), ValidationError::OfferNotBelowPrice);
    form.fields.offer_price = "cheap".into();
    assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidOfferPrice);

    form.fields.offer_price = String::new();
    form.fields.stock = String::new();
    assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidStock);
    form.fields.stock = "-1".into();
    assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidStock);
    form.fields.stock = "2.5".into();
    assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidStock);
    form.fields.stock = " 3.0 ".into();
    assert_eq!(form.validate().unwrap().stock, 3);

    form.fields.stock = "0".into();
    let submission = form.validate().unwrap();
    assert_eq!(submission.offer_price, None);
    assert_eq!(submission.stock, 0);
}

#[tokio::test]
async fn test_successful_submit_sends_trimmed_payload_and_resets() {
    let api = Arc::new(ScriptedApi::default());
    let (ctx, notifier) = context(api.clone());
    let previews = PreviewRegistry::new();
    let mut form = ProductIntakeForm::with_previews(ctx, previews.clone());
    filled(&mut form);
    form.set_image(0, Some(png("a.png"))).unwrap();
    form.specs.set_pair_key(0, 0, " Display ");
    form.specs.set_pair_value(0, 0, " AMOLED ");
    let extra = form.specs.add_group();
    form.specs.set_group_title(extra, " ");
    assert_eq!(previews.live_count(), 2);

    assert_eq!(form.submit().await.unwrap(), Outcome::Applied);

    let submissions = api.submissions.lock().unwrap().clone();
    let sent = &submissions[0];
    assert_eq!(sent.name, "Smart Watch");
    assert_eq!(sent.description, "Tracks steps");
    assert_eq!(sent.category, ProductCategory::Watch);
    assert_eq!(sent.price, 200.0);
    assert_eq!(sent.offer_price, Some(150.0));
    let names: Vec<_> = sent.images.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "w.png"]);
    assert_eq!(sent.specs.len(), 1);
    assert_eq!(sent.specs[DEFAULT_GROUP_TITLE]["Display"], "AMOLED");

    let notice = notifier.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, ADDED_FALLBACK);

    assert_eq!(form.fields.name, "");
    assert_eq!(form.fields.category, ProductCategory::Earphone);
    assert_eq!(form.images().attached(), 0);
    assert_eq!(form.specs.groups().len(), 1);
    assert_eq!(previews.live_count(), 0);
}

#[tokio::test]
async fn test_server_rejection_keeps_the_form() {
    let api = Arc::new(ScriptedApi::default());
    api.reject(None);
    let (ctx, notifier) = context(api.clone());
    let mut form = ProductIntakeForm::new(ctx);
    filled(&mut form);

    let err = form.submit().await.unwrap_err();
    assert_eq!(err, ConsoleError::Rejected("Something went wrong!".into()));
    assert_eq!(notifier.last().unwrap().level, NoticeLevel::Error);
    assert_eq!(form.fields.name, "  Smart Watch ");
    assert_eq!(form.images().attached(), 1);
}

#[tokio::test]
async fn test_dropping_the_form_revokes_previews() {
    let (ctx, _) = context(Arc::new(ScriptedApi::default()));
    let previews = PreviewRegistry::new();
    let mut form = ProductIntakeForm::with_previews(ctx, previews.clone());
    form.set_image(0, Some(png("a.png"))).unwrap();
    form.set_image(1, Some(png("b.png"))).unwrap();
    assert_eq!(previews.live_count(), 2);

    form.reset();
    assert_eq!(previews.live_count(), 0);

    form.set_image(3, Some(png("c.png"))).unwrap();
    drop(form);
    assert_eq!(previews.live_count(), 0);
}

#[tokio::test]
async fn test_bulk_upload_rejects_non_json_locally() {
    let api = Arc::new(ScriptedApi::default());
    let (ctx, notifier) = context(api.clone());
    let form = ProductIntakeForm::new(ctx);

    let err = form.bulk_upload(png("not.png")).await.unwrap_err();
    assert_eq!(err, ConsoleError::Validation(ValidationError::NotJson));
    assert_eq!(
        notifier.last().unwrap().message,
        "Please upload a valid .json file."
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_bulk_upload_leaves_fields_alone() {
    let api = Arc::new(ScriptedApi::default());
    let (ctx, notifier) = context(api.clone());
    let mut form = ProductIntakeForm::new(ctx);
    filled(&mut form);

    let file = UploadFile::new("products.json", "application/json", b"[]".to_vec());
    assert_eq!(form.bulk_upload(file).await.unwrap(), Outcome::Applied);
    assert_eq!(api.calls(), vec!["bulk products.json"]);
    assert_eq!(notifier.last().unwrap().message, "Bulk upload successful!");
    assert_eq!(form.fields.price, "200");
    assert_eq!(form.images().attached(), 1);
}

#[tokio::test]
async fn test_bulk_upload_failure_messages() {
    let api = Arc::new(ScriptedApi::default());
    let (ctx, notifier) = context(api.clone());
    let form = ProductIntakeForm::new(ctx);
    let file = || UploadFile::new("p.json", "application/json", b"[]".to_vec());

    api.reject(None);
    form.bulk_upload(file()).await.unwrap_err();
    assert_eq!(notifier.last().unwrap().message, BULK_REJECTED_FALLBACK);

    api.reject(Some("Duplicate product"));
    form.bulk_upload(file()).await.unwrap_err();
    assert_eq!(notifier.last().unwrap().message, "Duplicate product");

    api.go_down();
    form.bulk_upload(file()).await.unwrap_err();
    assert_eq!(notifier.last().unwrap().message, BULK_FAILED);
}
