use axum::http::StatusCode;
use trivia::api;
use trivia::db::{init_db, seed_default_categories};
use trivia::{NewQuestion, Repository, TriviaStore};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    repo: Arc<Repository>,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    seed_default_categories(&pool).await.unwrap();
    let repo = Arc::new(Repository::new(pool));
    let app = api::create_router(api::AppState::new(repo.clone()));

    TestApp {
        app,
        repo,
        _temp: temp_dir,
    }
}

async fn seed_questions(repo: &Repository, n: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let category = (i % 6) as i64 + 1;
        let id = repo
            .insert_question(&NewQuestion::new(
                &format!("Question number {}?", i + 1),
                &format!("Answer {}", i + 1),
                category,
                (i % 5) as i64 + 1,
            ))
            .await
            .unwrap();
        ids.push(id);
    }
    ids
}

async fn request(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_get_paginated_questions() {
    let test_app = setup_test_app().await;
    seed_questions(&test_app.repo, 23).await;

    let (status, json) = request(test_app.app, "GET", "/questions?page=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_questions"], 23);
    assert_eq!(json["categories"].as_object().unwrap().len(), 6);
    assert_eq!(json["categories"]["1"], "Science");
    assert!(json["current_category"].is_null());

    let first = &json["questions"][0];
    assert!(first["id"].is_i64());
    assert_eq!(first["question"], "Question number 1?");
    assert_eq!(first["answer"], "Answer 1");
    assert_eq!(first["category"], 1);
    assert_eq!(first["difficulty"], 1);
}

#[tokio::test]
async fn test_every_valid_page_is_full_or_remainder() {
    let test_app = setup_test_app().await;
    let ids = seed_questions(&test_app.repo, 23).await;

    let mut seen = Vec::new();
    for (page, expected) in [(1, 10), (2, 10), (3, 3)] {
        let (status, json) = request(
            test_app.app.clone(),
            "GET",
            &format!("/questions?page={}", page),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let questions = json["questions"].as_array().unwrap();
        assert_eq!(questions.len(), expected);
        seen.extend(questions.iter().map(|q| q["id"].as_i64().unwrap()));
    }
    assert_eq!(seen, ids);
}

#[tokio::test]
async fn test_404_get_paginated_questions_beyond_valid_page() {
    let test_app = setup_test_app().await;
    seed_questions(&test_app.repo, 5).await;

    let (status, json) = request(test_app.app, "GET", "/questions?page=100", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "Resource Not found");
}

#[tokio::test]
async fn test_non_numeric_page_defaults_to_first() {
    let test_app = setup_test_app().await;
    seed_questions(&test_app.repo, 12).await;

    let (status, json) = request(test_app.app, "GET", "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["questions"][0]["question"], "Question number 1?");
}

#[tokio::test]
async fn test_delete_question() {
    let test_app = setup_test_app().await;
    let ids = seed_questions(&test_app.repo, 4).await;
    let target = ids[1];

    let (status, json) = request(
        test_app.app,
        "DELETE",
        &format!("/questions/{}", target),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], target);
    assert_eq!(json["total_questions"], 3);
    assert!(json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["id"] != target));

    assert!(test_app.repo.find_question(target).await.unwrap().is_none());
}

#[tokio::test]
async fn test_422_delete_missing_question() {
    let test_app = setup_test_app().await;
    seed_questions(&test_app.repo, 2).await;

    let (status, json) = request(test_app.app, "DELETE", "/questions/90", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "Unprocesable");
}

#[tokio::test]
async fn test_delete_last_question_still_succeeds() {
    let test_app = setup_test_app().await;
    let ids = seed_questions(&test_app.repo, 1).await;

    let (status, json) = request(
        test_app.app,
        "DELETE",
        &format!("/questions/{}", ids[0]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_questions"], 0);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_post_new_question() {
    let test_app = setup_test_app().await;
    seed_questions(&test_app.repo, 3).await;

    let (status, json) = request(
        test_app.app,
        "POST",
        "/questions",
        Some(serde_json::json!({
            "question": "Who is Stefan cel Mare?",
            "answer": "A Moldavian prince",
            "difficulty": 1,
            "category": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 4);
    assert_eq!(json["questions"].as_array().unwrap().len(), 4);

    let created = json["created"].as_i64().unwrap();
    let stored = test_app.repo.find_question(created).await.unwrap().unwrap();
    assert_eq!(stored.question, "Who is Stefan cel Mare?");
    assert_eq!(stored.category, 4);
}

#[tokio::test]
async fn test_post_new_question_with_string_numbers() {
    let test_app = setup_test_app().await;

    let (status, json) = request(
        test_app.app,
        "POST",
        "/questions",
        Some(serde_json::json!({
            "question": "q",
            "answer": "a",
            "difficulty": "3",
            "category": "2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let created = json["created"].as_i64().unwrap();
    let stored = test_app.repo.find_question(created).await.unwrap().unwrap();
    assert_eq!(stored.difficulty, 3);
    assert_eq!(stored.category, 2);
}

#[tokio::test]
async fn test_422_add_question_missing_difficulty() {
    let test_app = setup_test_app().await;

    let (status, json) = request(
        test_app.app,
        "POST",
        "/questions",
        Some(serde_json::json!({
            "question": "new_question",
            "answer": "new_answer",
            "category": 100
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Unprocesable");
    assert!(test_app.repo.list_questions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_422_add_question_non_numeric_category() {
    let test_app = setup_test_app().await;

    let (status, _json) = request(
        test_app.app,
        "POST",
        "/questions",
        Some(serde_json::json!({
            "question": "q",
            "answer": "a",
            "difficulty": 1,
            "category": "science"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
