mod common;

use reqwest::StatusCode;
use serde_json::json;

use common::{admin_token, bearer, spawn_app_without_provider};

#[tokio::test]
async fn test_list_available_prints() {
    let app = spawn_app_without_provider().await;

    let response = app
        .client
        .get(app.url("/api/print"))
        .send()
        .await
        .expect("Failed to send get prints request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse prints response JSON");

    let prints = body.as_array().expect("Expected an array of prints");
    assert_eq!(prints.len(), 4);
    assert_eq!(prints[0]["title"], json!("Galway Bay Mist"));
    assert_eq!(prints[0]["base_price"], json!(150.0));
    // The public shape never leaks availability flags.
    assert!(prints[0].get("is_available").is_none());
}

#[tokio::test]
async fn test_featured_and_price_filters() {
    let app = spawn_app_without_provider().await;

    let featured = app
        .client
        .get(app.url("/api/print?featured=true"))
        .send()
        .await
        .expect("Failed to send get prints request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse prints response JSON");

    assert_eq!(featured.as_array().expect("Expected an array").len(), 1);
    assert_eq!(featured[0]["title"], json!("Galway Bay Mist"));

    let in_range = app
        .client
        .get(app.url("/api/print?min=150&max=170"))
        .send()
        .await
        .expect("Failed to send get prints request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse prints response JSON");

    // 150 and 160 qualify, 120 and 175 do not.
    assert_eq!(in_range.as_array().expect("Expected an array").len(), 2);
}

#[tokio::test]
async fn test_hidden_prints_disappear_from_the_storefront() {
    let app = spawn_app_without_provider().await;
    let admin = admin_token(&app).await;

    let patch = app
        .client
        .patch(app.url("/api/admin/print/1"))
        .headers(bearer(&admin))
        .json(&json!({ "is_available": false }))
        .send()
        .await
        .expect("Failed to send patch print request");
    assert_eq!(patch.status(), StatusCode::OK);

    let public = app
        .client
        .get(app.url("/api/print/1"))
        .send()
        .await
        .expect("Failed to send get print request");
    assert_eq!(public.status(), StatusCode::BAD_REQUEST);

    // The admin view still sees it.
    let admin_view = app
        .client
        .get(app.url("/api/admin/print/1"))
        .headers(bearer(&admin))
        .send()
        .await
        .expect("Failed to send admin get print request");
    assert_eq!(admin_view.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_options_served_in_one_request() {
    let app = spawn_app_without_provider().await;

    let response = app
        .client
        .get(app.url("/api/options"))
        .send()
        .await
        .expect("Failed to send get options request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse options response JSON");

    assert_eq!(body["sizes"].as_array().expect("sizes missing").len(), 5);
    assert_eq!(body["papers"].as_array().expect("papers missing").len(), 3);
    assert_eq!(body["frames"].as_array().expect("frames missing").len(), 4);
    assert_eq!(body["sizes"][0]["id"], json!("8x10"));
    assert_eq!(body["sizes"][0]["price_modifier"], json!(0.0));
}

#[tokio::test]
async fn test_gallery_detail_includes_photos() {
    let app = spawn_app_without_provider().await;

    let list = app
        .client
        .get(app.url("/api/gallery"))
        .send()
        .await
        .expect("Failed to send get galleries request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse galleries response JSON");

    assert_eq!(list.as_array().expect("Expected an array").len(), 5);

    let response = app
        .client
        .get(app.url("/api/gallery/live-music"))
        .send()
        .await
        .expect("Failed to send get gallery request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse gallery response JSON");

    assert_eq!(body["gallery"]["title"], json!("Live Music"));
    assert_eq!(body["photos"].as_array().expect("photos missing").len(), 2);
}

#[tokio::test]
async fn test_unpublished_galleries_are_not_listed() {
    let app = spawn_app_without_provider().await;
    let admin = admin_token(&app).await;

    let patch = app
        .client
        .patch(app.url("/api/admin/gallery/weddings"))
        .headers(bearer(&admin))
        .json(&json!({ "is_published": false }))
        .send()
        .await
        .expect("Failed to send patch gallery request");
    assert_eq!(patch.status(), StatusCode::OK);

    let list = app
        .client
        .get(app.url("/api/gallery"))
        .send()
        .await
        .expect("Failed to send get galleries request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse galleries response JSON");

    assert_eq!(list.as_array().expect("Expected an array").len(), 4);

    let detail = app
        .client
        .get(app.url("/api/gallery/weddings"))
        .send()
        .await
        .expect("Failed to send get gallery request");
    assert_eq!(detail.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_list_omits_the_body() {
    let app = spawn_app_without_provider().await;

    let list = app
        .client
        .get(app.url("/api/post"))
        .send()
        .await
        .expect("Failed to send get posts request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse posts response JSON");

    let posts = list.as_array().expect("Expected an array of posts");
    assert_eq!(posts.len(), 2);
    // Newest first.
    assert_eq!(posts[0]["slug"], json!("printing-for-longevity"));
    assert!(posts[0].get("body").is_none());

    let detail = app
        .client
        .get(app.url("/api/post/printing-for-longevity"))
        .send()
        .await
        .expect("Failed to send get post request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse post response JSON");

    assert!(detail["body"].as_str().expect("body missing").len() > 0);
}

#[tokio::test]
async fn test_admin_manages_prints() {
    let app = spawn_app_without_provider().await;
    let admin = admin_token(&app).await;

    let create = app
        .client
        .post(app.url("/api/admin/print"))
        .headers(bearer(&admin))
        .json(&json!({
            "title": "Salthill Prom",
            "description": "A winter walk along the promenade.",
            "base_price": 140.0,
            "image_url": "https://images.example.com/salthill.jpg"
        }))
        .send()
        .await
        .expect("Failed to send create print request");
    assert_eq!(create.status(), StatusCode::CREATED);

    // Duplicate titles are rejected.
    let duplicate = app
        .client
        .post(app.url("/api/admin/print"))
        .headers(bearer(&admin))
        .json(&json!({
            "title": "Salthill Prom",
            "description": "A winter walk along the promenade.",
            "base_price": 140.0,
            "image_url": "https://images.example.com/salthill.jpg"
        }))
        .send()
        .await
        .expect("Failed to send create print request");
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let delete = app
        .client
        .delete(app.url("/api/admin/print/5"))
        .headers(bearer(&admin))
        .send()
        .await
        .expect("Failed to send delete print request");
    assert_eq!(delete.status(), StatusCode::OK);

    let missing = app
        .client
        .delete(app.url("/api/admin/print/5"))
        .headers(bearer(&admin))
        .send()
        .await
        .expect("Failed to send delete print request");
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_adds_a_photo_to_a_gallery() {
    let app = spawn_app_without_provider().await;
    let admin = admin_token(&app).await;

    let add = app
        .client
        .post(app.url("/api/admin/gallery/drone/photo"))
        .headers(bearer(&admin))
        .json(&json!({
            "src": "https://images.example.com/aerial.jpg",
            "alt": "Aerial of the harbour",
            "width": 1200,
            "height": 800
        }))
        .send()
        .await
        .expect("Failed to send add photo request");
    assert_eq!(add.status(), StatusCode::CREATED);

    let rejected = app
        .client
        .post(app.url("/api/admin/gallery/drone/photo"))
        .headers(bearer(&admin))
        .json(&json!({
            "src": "https://images.example.com/aerial.jpg",
            "alt": "Aerial of the harbour",
            "width": 1200,
            "height": 800,
            "kind": "hologram"
        }))
        .send()
        .await
        .expect("Failed to send add photo request");
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let detail = app
        .client
        .get(app.url("/api/gallery/drone"))
        .send()
        .await
        .expect("Failed to send get gallery request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse gallery response JSON");

    assert_eq!(detail["photos"].as_array().expect("photos missing").len(), 2);
}

#[tokio::test]
async fn test_admin_manages_posts() {
    let app = spawn_app_without_provider().await;
    let admin = admin_token(&app).await;

    let create = app
        .client
        .post(app.url("/api/admin/post"))
        .headers(bearer(&admin))
        .json(&json!({
            "slug": "winter-light",
            "title": "Chasing Winter Light",
            "excerpt": "Notes from a week of short days and long shadows.",
            "body": "Winter light in the west of Ireland is low, fast and unforgiving...",
            "cover_image": "/images/blog/winter-light.jpg",
            "category": "Field Notes",
            "published_at": "2025-01-12"
        }))
        .send()
        .await
        .expect("Failed to send create post request");
    assert_eq!(create.status(), StatusCode::CREATED);

    let patch = app
        .client
        .patch(app.url("/api/admin/post/3"))
        .headers(bearer(&admin))
        .json(&json!({ "read_minutes": 6 }))
        .send()
        .await
        .expect("Failed to send patch post request");
    assert_eq!(patch.status(), StatusCode::OK);

    let detail = app
        .client
        .get(app.url("/api/post/winter-light"))
        .send()
        .await
        .expect("Failed to send get post request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse post response JSON");
    assert_eq!(detail["read_minutes"], json!(6));

    let delete = app
        .client
        .delete(app.url("/api/admin/post/3"))
        .headers(bearer(&admin))
        .send()
        .await
        .expect("Failed to send delete post request");
    assert_eq!(delete.status(), StatusCode::OK);

    let gone = app
        .client
        .get(app.url("/api/post/winter-light"))
        .send()
        .await
        .expect("Failed to send get post request");
    assert_eq!(gone.status(), StatusCode::BAD_REQUEST);
}
