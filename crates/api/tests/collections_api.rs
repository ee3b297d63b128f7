//! HTTP-level integration tests for the two collection endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Rows are inserted through the repository
//! layer; the HTTP surface itself is read-only.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get};
use sqlx::PgPool;
use taskboard_db::models::project::CreateProject;
use taskboard_db::models::status::Status;
use taskboard_db::models::task::CreateTask;
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str, slug: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        slug: slug.to_string(),
        status: Status::Active,
        collaborators: vec!["user1@example.com".to_string()],
    }
}

fn new_task(project_id: i64, name: &str) -> CreateTask {
    CreateTask {
        name: name.to_string(),
        description: "a short description".to_string(),
        status: Status::Active,
        due_date: None,
        project_id,
        collaborators: vec!["user2@example.com".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Empty store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_store_yields_empty_arrays(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let app = common::build_test_app(pool);
    let response = get(app, "/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// GET /projects nests owned tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn projects_nest_their_own_tasks(pool: PgPool) {
    let p1 = ProjectRepo::create(&pool, &new_project("P1", "p1"))
        .await
        .unwrap();
    let p2 = ProjectRepo::create(&pool, &new_project("P2", "p2"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(p1.id, "a")).await.unwrap();
    TaskRepo::create(&pool, &new_task(p2.id, "b")).await.unwrap();
    TaskRepo::create(&pool, &new_task(p2.id, "c")).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), 2);

    // Every nested task's foreign key equals the enclosing project's id.
    for project in projects {
        let id = project["id"].as_i64().unwrap();
        for task in project["tasks"].as_array().unwrap() {
            assert_eq!(task["projectId"].as_i64().unwrap(), id);
        }
    }
    assert_eq!(projects[0]["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(projects[1]["tasks"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// GET /tasks embeds the owning project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn tasks_embed_their_owning_project(pool: PgPool) {
    let p1 = ProjectRepo::create(&pool, &new_project("P1", "p1"))
        .await
        .unwrap();
    let p2 = ProjectRepo::create(&pool, &new_project("P2", "p2"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(p1.id, "a")).await.unwrap();
    TaskRepo::create(&pool, &new_task(p2.id, "b")).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 2);

    for task in tasks {
        // The embedded project's id equals the task's foreign key.
        assert_eq!(
            task["project"]["id"].as_i64().unwrap(),
            task["projectId"].as_i64().unwrap()
        );
        assert!(task["project"]["slug"].is_string());
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn wire_format_uses_camel_case_and_lowercase_statuses(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            status: Status::Archived,
            ..new_project("Wire", "wire")
        },
    )
    .await
    .unwrap();
    TaskRepo::create(
        &pool,
        &CreateTask {
            due_date: Some(chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
            ..new_task(project.id, "t")
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/tasks").await).await;
    let task = &json.as_array().unwrap()[0];

    assert_eq!(task["status"], "active");
    assert_eq!(task["dueDate"], "2026-09-01");
    assert!(task["projectId"].is_number());
    assert!(task["createdAt"].is_string());
    assert_eq!(task["project"]["status"], "archived");
}

// ---------------------------------------------------------------------------
// Idempotent reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_project_reads_are_byte_identical(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Stable", "stable"))
        .await
        .unwrap();
    for i in 0..3 {
        TaskRepo::create(&pool, &new_task(project.id, &format!("t{i}")))
            .await
            .unwrap();
    }

    let first = body_bytes(get(common::build_test_app(pool.clone()), "/projects").await).await;
    let second = body_bytes(get(common::build_test_app(pool), "/projects").await).await;

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn one_seeded_project_with_two_tasks_round_trips(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Acme Widgets", "acme-widgets"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(project.id, "ship it"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(project.id, "test it"))
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/projects").await).await;
    let projects = json.as_array().unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Acme Widgets");
    assert_eq!(projects[0]["slug"], "acme-widgets");

    let tasks = projects[0]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    for task in tasks {
        assert_eq!(task["projectId"].as_i64().unwrap(), project.id);
    }
}
