//! HTTP-level integration tests for the `/species` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_person, create_planet, create_species, delete, get, post_json};
use serde_json::json;

#[tokio::test]
async fn create_species_returns_201_with_planet_id() {
    let store = common::test_store();
    let naboo = create_planet(&store, json!({"name": "Naboo"})).await;

    let response = post_json(&store, "/species", json!({"name": "Gungan", "planet_id": naboo})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Gungan");
    assert_eq!(json["planet_id"], naboo);
    assert_eq!(json["people"], json!([]));
}

#[tokio::test]
async fn create_species_missing_fields_returns_400() {
    let store = common::test_store();
    let naboo = create_planet(&store, json!({"name": "Naboo"})).await;

    for body in [
        json!({"name": "Gungan"}),
        json!({"planet_id": naboo}),
        json!({"name": "Gungan", "planet_id": 0}),
    ] {
        let response = post_json(&store, "/species", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Missing name or planet_id");
    }
}

#[tokio::test]
async fn create_species_with_unknown_planet_returns_400_and_persists_nothing() {
    let store = common::test_store();

    let response = post_json(&store, "/species", json!({"name": "Wookiee", "planet_id": 77})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "planet_id is invalid");

    let list = body_json(get(&store, "/species").await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn list_and_detail_share_the_resolved_shape() {
    let store = common::test_store();
    let naboo = create_planet(&store, json!({"name": "Naboo"})).await;
    let gungan = create_species(&store, "Gungan", naboo).await;
    create_person(&store, "Jar Jar", naboo, gungan).await;

    let expected = json!({
        "id": gungan,
        "name": "Gungan",
        "planet": "Naboo",
        "people": ["Jar Jar"],
    });

    let list = body_json(get(&store, "/species").await).await;
    assert_eq!(list, json!([expected.clone()]));

    let detail = body_json(get(&store, &format!("/species/{gungan}")).await).await;
    assert_eq!(detail, expected);
}

#[tokio::test]
async fn get_nonexistent_species_returns_404() {
    let store = common::test_store();
    let response = get(&store, "/species/5").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Species with id 5 not found");
}

#[tokio::test]
async fn delete_species_returns_message() {
    let store = common::test_store();
    let naboo = create_planet(&store, json!({"name": "Naboo"})).await;
    let gungan = create_species(&store, "Gungan", naboo).await;

    let response = delete(&store, &format!("/species/{gungan}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": format!("Species {gungan} deleted")})
    );

    let response = delete(&store, &format!("/species/{gungan}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_species_with_members_returns_409() {
    let store = common::test_store();
    let naboo = create_planet(&store, json!({"name": "Naboo"})).await;
    let gungan = create_species(&store, "Gungan", naboo).await;
    create_person(&store, "Jar Jar", naboo, gungan).await;

    let response = delete(&store, &format!("/species/{gungan}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(&store, &format!("/species/{gungan}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
