//! Integration tests for `MySqlFaqRepository`.
//!
//! These run against a real MySQL started with testcontainers and need
//! Docker: `cargo test -p faq-repository -- --ignored`.

mod common;

use common::TestDatabase;
use faq_core::{FaqId, FaqPatch, NewFaq, Translation, Translations};
use faq_repository::{FaqRepository, MySqlFaqRepository};

fn new_faq(question: &str) -> NewFaq {
    let mut translations = Translations::new();
    translations.insert("hi".into(), Translation::new(format!("{question} hi"), "A hi"));
    NewFaq {
        question: question.to_string(),
        answer: "A".to_string(),
        translations,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlFaqRepository::new(db.pool());

    let saved = repo.insert(new_faq("Q1")).await.expect("Failed to insert");
    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Query failed")
        .expect("FAQ not found");

    assert_eq!(found, saved);
    assert_eq!(found.translations.get("hi").unwrap().question, "Q1 hi");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlFaqRepository::new(db.pool());

    assert!(repo.find_by_id(FaqId::new()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_in_creation_order() {
    let db = TestDatabase::new().await;
    let repo = MySqlFaqRepository::new(db.pool());

    for question in ["Q1", "Q2", "Q3"] {
        repo.insert(new_faq(question)).await.unwrap();
    }

    let questions: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|faq| faq.question)
        .collect();
    assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_replaces_translations_and_keeps_created_at() {
    let db = TestDatabase::new().await;
    let repo = MySqlFaqRepository::new(db.pool());
    let saved = repo.insert(new_faq("Q1")).await.unwrap();

    let updated = repo
        .update_by_id(
            saved.id,
            FaqPatch {
                question: None,
                answer: Some("A2".to_string()),
                translations: Some(Translations::new()),
            },
        )
        .await
        .unwrap()
        .expect("FAQ not found");

    assert_eq!(updated.question, "Q1");
    assert_eq!(updated.answer, "A2");
    assert!(updated.translations.is_empty());
    assert_eq!(updated.created_at, saved.created_at);

    let missing = repo
        .update_by_id(FaqId::new(), FaqPatch::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlFaqRepository::new(db.pool());
    let saved = repo.insert(new_faq("Q1")).await.unwrap();

    assert!(repo.delete_by_id(saved.id).await.unwrap());
    assert!(!repo.delete_by_id(saved.id).await.unwrap());
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
}
