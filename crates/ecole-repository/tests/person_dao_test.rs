//! Integration tests for the person DAO, run against in-memory SQLite.

mod common;

use common::TestDatabase;
use ecole_core::{EcoleError, Person, PersonId};

#[tokio::test]
async fn test_create_and_read() {
    let db = TestDatabase::sqlite().await;
    let dao = &db.daos().persons;

    let id = dao
        .create(&Person::new("Ada", "Lovelace", 36))
        .await
        .expect("Failed to create person");
    assert!(id.is_assigned());

    let found = dao
        .read(id)
        .await
        .expect("Query failed")
        .expect("Person not found");

    assert_eq!(found.id, id);
    assert_eq!(found.first_name, "Ada");
    assert_eq!(found.last_name, "Lovelace");
    assert_eq!(found.age, 36);
    assert_eq!(found.address_id, None);
}

#[tokio::test]
async fn test_create_with_address() {
    let db = TestDatabase::sqlite().await;
    let address_id = db.insert_address("12 rue des Lilas", "Lyon", "69003").await;

    let person = Person::new("Louis", "Pasteur", 50).with_address(address_id);
    let id = db.daos().persons.create(&person).await.unwrap();

    let found = db.daos().persons.read(id).await.unwrap().unwrap();
    assert_eq!(found.address_id, Some(address_id));
}

#[tokio::test]
async fn test_ids_are_distinct() {
    let db = TestDatabase::sqlite().await;
    let dao = &db.daos().persons;

    let first = dao.create(&Person::new("A", "One", 20)).await.unwrap();
    let second = dao.create(&Person::new("B", "Two", 30)).await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_read_not_found() {
    let db = TestDatabase::sqlite().await;

    let result = db.daos().persons.read(PersonId::new(404)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update() {
    let db = TestDatabase::sqlite().await;
    let dao = &db.daos().persons;

    let id = dao.create(&Person::new("Marie", "Sklodowska", 24)).await.unwrap();
    let mut person = dao.read(id).await.unwrap().unwrap();
    person.last_name = "Curie".to_string();
    person.age = 28;

    assert!(dao.update(&person).await.unwrap());

    let found = dao.read(id).await.unwrap().unwrap();
    assert_eq!(found.last_name, "Curie");
    assert_eq!(found.age, 28);
}

#[tokio::test]
async fn test_update_not_found() {
    let db = TestDatabase::sqlite().await;

    let mut ghost = Person::new("No", "Body", 1);
    ghost.id = PersonId::new(999);
    assert!(!db.daos().persons.update(&ghost).await.unwrap());
}

#[tokio::test]
async fn test_delete() {
    let db = TestDatabase::sqlite().await;
    let dao = &db.daos().persons;

    let id = dao.create(&Person::new("Blaise", "Pascal", 39)).await.unwrap();
    let person = dao.read(id).await.unwrap().unwrap();

    assert!(dao.delete(&person).await.unwrap());
    assert_eq!(db.count_rows("person", "id_person", id.into_inner()).await, 0);
    assert!(dao.read(id).await.unwrap().is_none());

    assert!(!dao.delete(&person).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_key_maps_to_conflict() {
    let db = TestDatabase::sqlite().await;
    let id = db.daos().persons.create(&Person::new("Ada", "Lovelace", 36)).await.unwrap();
    let pool = db.daos().pool().as_sqlite().expect("SQLite pool");

    let err: EcoleError = sqlx::query(
        "INSERT INTO person (id_person, first_name, last_name, age) VALUES (?, ?, ?, ?)",
    )
    .bind(id)
    .bind("Ada")
    .bind("Byron")
    .bind(20)
    .execute(pool)
    .await
    .unwrap_err()
    .into();

    assert!(matches!(err, EcoleError::Conflict(_)), "unexpected error: {:?}", err);
    assert_eq!(err.error_code(), "CONFLICT");
}
