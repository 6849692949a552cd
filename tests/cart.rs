mod common;

use reqwest::StatusCode;
use serde_json::json;

use common::{add_to_cart, admin_token, bearer, get_cart, shopper_token, spawn_app_without_provider};

#[tokio::test]
async fn test_cart_starts_empty() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let cart = get_cart(&app, &token).await;

    assert_eq!(cart["items"].as_array().expect("items missing").len(), 0);
    assert_eq!(cart["totals"]["subtotal"], json!(0.0));
}

#[tokio::test]
async fn test_add_line_item_and_derive_prices() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    // Galway Bay Mist (150.00), 11x14 (+25), glossy (+15), black (+35)
    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 1,
            "size_id": "11x14",
            "paper_id": "glossy",
            "frame_id": "black",
            "quantity": 2
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let cart = get_cart(&app, &token).await;
    let items = cart["items"].as_array().expect("items missing");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], json!("Galway Bay Mist"));
    assert_eq!(items[0]["quantity"], json!(2));
    assert_eq!(items[0]["unit_price"], json!(225.0));
    assert_eq!(items[0]["line_total"], json!(450.0));

    assert_eq!(cart["totals"]["subtotal"], json!(450.0));
    assert_eq!(cart["totals"]["shipping_fee"], json!(0.0));
    assert_eq!(cart["totals"]["grand_total"], json!(450.0));
}

#[tokio::test]
async fn test_same_configuration_merges_into_one_line() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let payload = json!({
        "print_id": 2,
        "size_id": "8x10",
        "paper_id": "matte",
        "frame_id": "none",
        "quantity": 1
    });

    let first = add_to_cart(&app, &token, payload.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = add_to_cart(&app, &token, payload).await;
    assert_eq!(second.status(), StatusCode::OK);

    let cart = get_cart(&app, &token).await;
    let items = cart["items"].as_array().expect("items missing");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], json!(2));
}

#[tokio::test]
async fn test_different_configuration_stays_distinct() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let first = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 2,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same print, different frame: a second line, not a merge.
    let second = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 2,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "black",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let cart = get_cart(&app, &token).await;
    assert_eq!(cart["items"].as_array().expect("items missing").len(), 2);
}

#[tokio::test]
async fn test_merge_saturates_instead_of_overflowing() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let first = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 1,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 4_000_000_000u32
        }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // A second huge add of the same configuration must merge without
    // wrapping the quantity back through zero.
    let second = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 1,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 400_000_000u32
        }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);

    let cart = get_cart(&app, &token).await;
    let items = cart["items"].as_array().expect("items missing");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], json!(u32::MAX));
}

#[tokio::test]
async fn test_add_rejects_zero_quantity() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 1,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 0
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_rejects_unknown_catalog_reference() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let bad_print = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 999,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(bad_print.status(), StatusCode::BAD_REQUEST);

    let bad_size = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 1,
            "size_id": "a0",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(bad_size.status(), StatusCode::BAD_REQUEST);

    let cart = get_cart(&app, &token).await;
    assert_eq!(cart["items"].as_array().expect("items missing").len(), 0);
}

#[tokio::test]
async fn test_patch_updates_quantity() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 3,
            "size_id": "16x20",
            "paper_id": "canvas",
            "frame_id": "natural",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cart = get_cart(&app, &token).await;
    let entry_id = cart["items"][0]["id"].as_i64().expect("id missing");

    let patch = app
        .client
        .patch(app.url(&format!("/api/cart/{}", entry_id)))
        .headers(bearer(&token))
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .expect("Failed to send patch request");

    assert_eq!(patch.status(), StatusCode::OK);

    let cart = get_cart(&app, &token).await;
    assert_eq!(cart["items"][0]["quantity"], json!(5));
}

#[tokio::test]
async fn test_patch_clamps_quantity_to_one() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 1,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 3
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cart = get_cart(&app, &token).await;
    let entry_id = cart["items"][0]["id"].as_i64().expect("id missing");

    // Quantity 0 does not remove the line, it clamps to the minimum.
    let patch = app
        .client
        .patch(app.url(&format!("/api/cart/{}", entry_id)))
        .headers(bearer(&token))
        .json(&json!({ "quantity": 0 }))
        .send()
        .await
        .expect("Failed to send patch request");

    assert_eq!(patch.status(), StatusCode::OK);

    let cart = get_cart(&app, &token).await;
    let items = cart["items"].as_array().expect("items missing");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], json!(1));
}

#[tokio::test]
async fn test_patch_missing_entry_is_a_noop() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let patch = app
        .client
        .patch(app.url("/api/cart/999"))
        .headers(bearer(&token))
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .expect("Failed to send patch request");

    assert_eq!(patch.status(), StatusCode::OK);

    let body = patch
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse patch response JSON");
    assert_eq!(body["message"], json!("Nothing to patch"));
}

#[tokio::test]
async fn test_delete_missing_entry_leaves_cart_untouched() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 4,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let before = get_cart(&app, &token).await;

    let delete = app
        .client
        .delete(app.url("/api/cart/999"))
        .headers(bearer(&token))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(delete.status(), StatusCode::OK);

    let after = get_cart(&app, &token).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_removes_the_line() {
    let app = spawn_app_without_provider().await;
    let token = shopper_token(&app).await;

    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 4,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cart = get_cart(&app, &token).await;
    let entry_id = cart["items"][0]["id"].as_i64().expect("id missing");

    let delete = app
        .client
        .delete(app.url(&format!("/api/cart/{}", entry_id)))
        .headers(bearer(&token))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(delete.status(), StatusCode::OK);

    let cart = get_cart(&app, &token).await;
    assert_eq!(cart["items"].as_array().expect("items missing").len(), 0);
}

#[tokio::test]
async fn test_carts_are_isolated_per_session() {
    let app = spawn_app_without_provider().await;
    let first_token = shopper_token(&app).await;
    let second_token = shopper_token(&app).await;

    let response = add_to_cart(
        &app,
        &first_token,
        json!({
            "print_id": 1,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let other_cart = get_cart(&app, &second_token).await;
    assert_eq!(other_cart["items"].as_array().expect("items missing").len(), 0);
}

#[tokio::test]
async fn test_small_order_pays_flat_shipping() {
    let app = spawn_app_without_provider().await;

    // The seeded catalog never dips below the free-shipping threshold, so
    // create a small print first.
    let admin = admin_token(&app).await;
    let create = app
        .client
        .post(app.url("/api/admin/print"))
        .headers(bearer(&admin))
        .json(&json!({
            "title": "Pocket Postcard",
            "description": "A small open-edition postcard print.",
            "base_price": 40.0,
            "image_url": "https://images.example.com/postcard.jpg"
        }))
        .send()
        .await
        .expect("Failed to send create print request");
    assert_eq!(create.status(), StatusCode::CREATED);

    let token = shopper_token(&app).await;
    let response = add_to_cart(
        &app,
        &token,
        json!({
            "print_id": 5,
            "size_id": "8x10",
            "paper_id": "matte",
            "frame_id": "none",
            "quantity": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cart = get_cart(&app, &token).await;
    assert_eq!(cart["totals"]["subtotal"], json!(40.0));
    assert_eq!(cart["totals"]["shipping_fee"], json!(12.5));
    assert_eq!(cart["totals"]["grand_total"], json!(52.5));
}

#[tokio::test]
async fn test_cart_requires_a_shopper_token() {
    let app = spawn_app_without_provider().await;

    let response = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to send get cart request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
