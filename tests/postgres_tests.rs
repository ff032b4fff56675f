// tests/postgres_tests.rs
//
// Needs a running Postgres: DATABASE_URL=... cargo test -- --ignored

use chrono::{Duration, Utc};
use polls::{
    models::{choice::NewChoice, question::NewQuestion},
    repository::{PgQuestionRepository, QuestionRepository, RepoError},
};
use sqlx::postgres::PgPoolOptions;

async fn repository() -> PgQuestionRepository {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    PgQuestionRepository::new(pool)
}

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn published_listing_skips_future_questions() {
    let repo = repository().await;

    // Place our rows far in the past/future so other rows do not interleave.
    let far_past = Utc::now() - Duration::days(365 * 50);
    let past = repo
        .create_question(NewQuestion {
            question_text: unique("past"),
            pub_date: far_past,
        })
        .await
        .unwrap();
    let future = repo
        .create_question(NewQuestion {
            question_text: unique("future"),
            pub_date: Utc::now() + Duration::days(30),
        })
        .await
        .unwrap();

    let listed = repo
        .list_published(far_past + Duration::seconds(1), 100)
        .await
        .unwrap();

    assert!(listed.iter().any(|q| q.id == past.id));
    assert!(listed.iter().all(|q| q.id != future.id));

    repo.delete_question(past.id).await.unwrap();
    repo.delete_question(future.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn choices_vote_and_cascade() {
    let repo = repository().await;
    let question = repo
        .create_question(NewQuestion {
            question_text: unique("vote"),
            pub_date: Utc::now(),
        })
        .await
        .unwrap();

    let choice = repo
        .add_choice(
            question.id,
            NewChoice {
                choice_text: "Yes".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(choice.votes, 0);

    let voted = repo.vote(question.id, choice.id).await.unwrap().unwrap();
    assert_eq!(voted.votes, 1);
    assert!(repo.vote(question.id + 1_000_000, choice.id).await.unwrap().is_none());

    assert_eq!(repo.count_choices(question.id).await.unwrap(), 1);
    assert!(repo.delete_question(question.id).await.unwrap());
    assert_eq!(repo.count_choices(question.id).await.unwrap(), 0);
    assert!(repo.find_by_id(question.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn add_choice_to_missing_question_is_not_found() {
    let repo = repository().await;

    let err = repo
        .add_choice(
            -1,
            NewChoice {
                choice_text: "Orphan".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}
