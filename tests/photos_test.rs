//! Integration tests for the photo CRUD routes.

mod common;

use common::TestHarness;
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_photo_with_all_fields() {
    let h = TestHarness::with_server().await;
    let (status, json) = h
        .create(json!({
            "title": "Test Photo",
            "description": "A test photo",
            "url": "https://example.com/test.jpg",
            "tags": ["test", "photo"]
        }))
        .await;

    assert_eq!(status, 201);
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Test Photo");
    assert_eq!(json["description"], "A test photo");
    assert_eq!(json["url"], "https://example.com/test.jpg");
    assert_eq!(json["tags"], json!(["test", "photo"]));
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn create_photo_minimal() {
    let h = TestHarness::with_server().await;
    let (status, json) = h
        .create(json!({"title": "Minimal Photo", "url": "https://example.com/minimal.jpg"}))
        .await;

    assert_eq!(status, 201);
    assert!(json["description"].is_null());
    assert_eq!(json["tags"], json!([]));
}

#[tokio::test]
async fn create_photo_missing_fields_is_422() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.create(json!({"description": "x"})).await;
    assert_eq!(status, 422);
    assert_eq!(json["detail"], "title is required; url is required");
    assert_eq!(h.ctx.store.count(), 0);
}

#[tokio::test]
async fn create_photo_empty_title_is_422() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.create(json!({"title": "", "url": "u"})).await;
    assert_eq!(status, 422);
    assert_eq!(json["detail"], "title must not be empty");
}

#[tokio::test]
async fn create_photo_wrong_type_is_422() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.create(json!({"title": 12, "url": "u"})).await;
    assert_eq!(status, 422);
    assert!(json["detail"].as_str().unwrap().starts_with("invalid body"));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let h = TestHarness::with_server().await;
    h.create_ok("a", &[]).await;
    let b = h.create_ok("b", &[]).await;
    let (status, _) = h.delete(&format!("/photos/{}", b["id"])).await;
    assert_eq!(status, 200);

    let c = h.create_ok("c", &[]).await;
    assert_eq!(c["id"], 3);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_photos_empty() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.get("/photos").await;
    assert_eq!(status, 200);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn list_photos_keeps_insertion_order() {
    let h = TestHarness::with_server().await;
    for title in ["first", "second", "third"] {
        h.create_ok(title, &[]).await;
    }
    let (_, json) = h.get("/photos").await;
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn list_photos_by_tag() {
    let h = TestHarness::with_server().await;
    h.create_ok("one", &["nature", "sunset"]).await;
    h.create_ok("two", &["city"]).await;
    h.create_ok("three", &["nature"]).await;

    let (status, json) = h.get("/photos?tag=nature").await;
    assert_eq!(status, 200);
    let ids: Vec<_> = json.as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, [json!(1), json!(3)]);

    let (_, json) = h.get("/photos?tag=Nature").await;
    assert_eq!(json, json!([]));

    let (_, json) = h.get("/photos?tag=").await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_photos_repeated_tag_uses_last() {
    let h = TestHarness::with_server().await;
    h.create_ok("one", &["a"]).await;
    h.create_ok("two", &["b"]).await;

    let (status, json) = h.get("/photos?tag=a&tag=b").await;
    assert_eq!(status, 200);
    let ids: Vec<_> = json.as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, [json!(2)]);

    let (status, json) = h.get("/photos?tag=b&tag=").await;
    assert_eq!(status, 200);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_photo_not_found() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.get("/photos/999").await;
    assert_eq!(status, 404);
    assert_eq!(json["detail"], "Photo with id 999 not found");
}

#[tokio::test]
async fn malformed_ids_are_422() {
    let h = TestHarness::with_server().await;
    for bad in ["abc", "0", "-1", "1.5"] {
        let (status, json) = h.get(&format!("/photos/{bad}")).await;
        assert_eq!(status, 422, "id {bad}");
        assert!(json["detail"].is_string());
    }
}

#[tokio::test]
async fn id_beyond_u64_is_out_of_range() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.get("/photos/18446744073709551616").await;
    assert_eq!(status, 422);
    assert_eq!(
        json["detail"],
        "photo id 18446744073709551616 is out of range"
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_photo_replaces_fields_and_keeps_created_at() {
    let h = TestHarness::with_server().await;
    let created = h.create_ok("Original", &["old"]).await;

    let (status, json) = h
        .put(
            "/photos/1",
            json!({
                "title": "Updated",
                "description": "now described",
                "url": "https://example.com/updated.jpg",
                "tags": ["new"]
            }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Updated");
    assert_eq!(json["tags"], json!(["new"]));
    assert_eq!(json["created_at"], created["created_at"]);

    let (_, fetched) = h.get("/photos/1").await;
    assert_eq!(fetched, json);
}

#[tokio::test]
async fn update_photo_without_tags_clears_them() {
    let h = TestHarness::with_server().await;
    h.create_ok("Tagged", &["a", "b"]).await;

    let (status, json) = h
        .put("/photos/1", json!({"title": "Bare", "url": "https://example.com/bare.jpg"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(json["tags"], json!([]));
    assert!(json["description"].is_null());
}

#[tokio::test]
async fn update_photo_not_found() {
    let h = TestHarness::with_server().await;
    let (status, json) = h
        .put("/photos/999", json!({"title": "x", "url": "y"}))
        .await;
    assert_eq!(status, 404);
    assert_eq!(json["detail"], "Photo with id 999 not found");
}

#[tokio::test]
async fn update_photo_invalid_body_is_422() {
    let h = TestHarness::with_server().await;
    h.create_ok("Keep", &[]).await;
    let (status, _) = h.put("/photos/1", json!({"title": "no url"})).await;
    assert_eq!(status, 422);

    let (_, fetched) = h.get("/photos/1").await;
    assert_eq!(fetched["title"], "Keep");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_photo_returns_envelope() {
    let h = TestHarness::with_server().await;
    let created = h.create_ok("Gone", &[]).await;

    let (status, json) = h.delete("/photos/1").await;
    assert_eq!(status, 200);
    assert_eq!(json["message"], "Photo 1 deleted successfully");
    assert_eq!(json["deleted_photo"], created);

    let (status, _) = h.get("/photos/1").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn delete_photo_not_found() {
    let h = TestHarness::with_server().await;
    let (status, json) = h.delete("/photos/5").await;
    assert_eq!(status, 404);
    assert_eq!(json["detail"], "Photo with id 5 not found");
}

// ---------------------------------------------------------------------------
// Full walkthrough
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sunset_scenario() {
    let h = TestHarness::with_server().await;

    let (status, sunset) = h
        .create(json!({
            "title": "Sunset",
            "url": "https://x/1.jpg",
            "tags": ["nature", "sunset"]
        }))
        .await;
    assert_eq!(status, 201);
    assert_eq!(sunset["id"], 1);
    let ts1 = sunset["created_at"].clone();

    let (status, city) = h
        .create(json!({"title": "City", "url": "https://x/c.jpg", "tags": ["city"]}))
        .await;
    assert_eq!(status, 201);
    assert_eq!(city["id"], 2);

    let (_, nature) = h.get("/photos?tag=nature").await;
    assert_eq!(nature.as_array().unwrap().len(), 1);
    assert_eq!(nature[0]["id"], 1);

    let (status, updated) = h
        .put("/photos/1", json!({"title": "Sunset HD", "url": "https://x/2.jpg"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["created_at"], ts1);
    assert_eq!(updated["title"], "Sunset HD");

    let (status, deleted) = h.delete("/photos/2").await;
    assert_eq!(status, 200);
    assert_eq!(deleted["message"], "Photo 2 deleted successfully");
    assert_eq!(deleted["deleted_photo"]["id"], 2);

    let (status, missing) = h.get("/photos/2").await;
    assert_eq!(status, 404);
    assert_eq!(missing, json!({"detail": "Photo with id 2 not found"}));

    let (status, _) = h.create(json!({"description": "x"})).await;
    assert_eq!(status, 422);
}
