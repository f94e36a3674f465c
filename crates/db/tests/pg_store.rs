//! Integration tests for the PostgreSQL store.
//!
//! These need a reachable PostgreSQL server (`DATABASE_URL`), so they are
//! ignored by default. Run with `cargo test -p swapi-db -- --ignored`.

use std::sync::Arc;

use assert_matches::assert_matches;
use sqlx::PgPool;
use swapi_db::models::person::NewPerson;
use swapi_db::models::planet::NewPlanet;
use swapi_db::models::species::NewSpecies;
use swapi_db::{PgStore, Store, StoreError};

fn new_planet(name: &str, climate: Option<&str>) -> NewPlanet {
    NewPlanet {
        name: name.to_string(),
        climate: climate.map(str::to_string),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn create_and_find_planet(pool: PgPool) {
    let store = PgStore::new(pool);

    let hoth = store
        .create_planet(&new_planet("Hoth", Some("frozen")))
        .await
        .unwrap();
    let found = store.find_planet(hoth.id).await.unwrap().unwrap();

    assert_eq!(found, hoth);
    assert_eq!(found.climate.as_deref(), Some("frozen"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn person_with_unknown_planet_is_rejected(pool: PgPool) {
    let store = PgStore::new(pool);

    let err = store
        .create_person(&NewPerson {
            name: "Jar Jar".into(),
            planet_id: 999,
            species_id: 999,
        })
        .await
        .unwrap_err();

    assert_matches!(err, StoreError::MissingReference { entity: "Planet", .. });
    assert!(store.list_people().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn relations_are_listed_by_foreign_key(pool: PgPool) {
    let store = PgStore::new(pool);

    let naboo = store.create_planet(&new_planet("Naboo", None)).await.unwrap();
    let gungan = store
        .create_species(&NewSpecies {
            name: "Gungan".into(),
            planet_id: naboo.id,
        })
        .await
        .unwrap();
    let jar_jar = store
        .create_person(&NewPerson {
            name: "Jar Jar".into(),
            planet_id: naboo.id,
            species_id: gungan.id,
        })
        .await
        .unwrap();

    assert_eq!(store.list_people_by_planet(naboo.id).await.unwrap(), [jar_jar.clone()]);
    assert_eq!(store.list_people_by_species(gungan.id).await.unwrap(), [jar_jar]);
    assert_eq!(store.list_species_by_planet(naboo.id).await.unwrap(), [gungan]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn delete_with_dependents_is_rejected(pool: PgPool) {
    let store = PgStore::new(pool);

    let naboo = store.create_planet(&new_planet("Naboo", None)).await.unwrap();
    store
        .create_species(&NewSpecies {
            name: "Gungan".into(),
            planet_id: naboo.id,
        })
        .await
        .unwrap();

    assert_matches!(
        store.delete_planet(naboo.id).await,
        Err(StoreError::HasDependents { entity: "Planet", .. })
    );
    assert!(store.find_planet(naboo.id).await.unwrap().is_some());
    assert!(!store.delete_planet(naboo.id + 1000).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn species_with_unknown_planet_is_rejected(pool: PgPool) {
    let store = PgStore::new(pool);

    let err = store
        .create_species(&NewSpecies {
            name: "Wookiee".into(),
            planet_id: 42,
        })
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::MissingReference {
            entity: "Planet",
            id: 42
        }
    );
    assert!(store.list_species().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn species_with_members_is_kept_until_they_are_gone(pool: PgPool) {
    let store = PgStore::new(pool);

    let naboo = store.create_planet(&new_planet("Naboo", None)).await.unwrap();
    let gungan = store
        .create_species(&NewSpecies {
            name: "Gungan".into(),
            planet_id: naboo.id,
        })
        .await
        .unwrap();
    let jar_jar = store
        .create_person(&NewPerson {
            name: "Jar Jar".into(),
            planet_id: naboo.id,
            species_id: gungan.id,
        })
        .await
        .unwrap();

    assert_matches!(
        store.delete_species(gungan.id).await,
        Err(StoreError::HasDependents {
            entity: "Species",
            dependents: "people",
            ..
        })
    );
    assert!(store.find_species(gungan.id).await.unwrap().is_some());

    assert!(store.delete_person(jar_jar.id).await.unwrap());
    assert!(store.delete_species(gungan.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn racing_insert_and_delete_never_orphan_a_person(pool: PgPool) {
    let store = Arc::new(PgStore::new(pool));

    let homeworld = store.create_planet(&new_planet("Kashyyyk", None)).await.unwrap();
    let wookiee = store
        .create_species(&NewSpecies {
            name: "Wookiee".into(),
            planet_id: homeworld.id,
        })
        .await
        .unwrap()
        .id;

    for round in 0..50 {
        let target = store
            .create_planet(&new_planet(&format!("Outpost {round}"), None))
            .await
            .unwrap()
            .id;

        let insert = tokio::spawn({
            let store = Arc::clone(&store);
            async move {
                store
                    .create_person(&NewPerson {
                        name: "Scout".into(),
                        planet_id: target,
                        species_id: wookiee,
                    })
                    .await
            }
        });
        let delete = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.delete_planet(target).await }
        });

        let inserted = insert.await.unwrap();
        let deleted = delete.await.unwrap();

        match (&inserted, &deleted) {
            (Ok(_), Err(StoreError::HasDependents { .. })) => {}
            (Err(StoreError::MissingReference { entity: "Planet", .. }), Ok(true)) => {}
            other => panic!("round {round}: unexpected outcome {other:?}"),
        }
    }

    for person in store.list_people().await.unwrap() {
        assert!(store.find_planet(person.planet_id).await.unwrap().is_some());
    }
}
