//! HTTP-level integration tests for the `/tasks` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, create_task, create_user, delete, get, post_json, put_json,
};
use sqlx::PgPool;

async fn task_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_starts_in_to_do(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        serde_json::json!({
            "title": "Design",
            "description": "Wireframes",
            "due_date": "2025-03-01",
            "project_id": project_id,
            "status_id": 4,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Design");
    assert_eq!(json["project_id"], project_id);
    assert_eq!(json["project"]["name"], "Site");
    assert_eq!(json["status"]["id"], 1);
    assert_eq!(json["status"]["name"], "To Do");
    assert!(json["assignee"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_with_assignee_is_enriched(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;
    let user_id = create_user(&pool, "Ana", "Developer").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        serde_json::json!({"title": "Build", "project_id": project_id, "assignee_id": user_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["assignee"]["id"], user_id);
    assert_eq!(json["assignee"]["name"], "Ana");
    assert_eq!(json["assignee"]["role"], "Developer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_unknown_project_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tasks",
        serde_json::json!({"title": "Orphan", "project_id": 9999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "REFERENCE_NOT_FOUND");
    assert_eq!(json["error"], "Referenced Project with id 9999 not found");
    assert_eq!(task_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_unknown_assignee_creates_nothing(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tasks",
        serde_json::json!({"title": "Lost", "project_id": project_id, "assignee_id": 777}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "REFERENCE_NOT_FOUND");
    assert_eq!(json["error"], "Referenced User with id 777 not found");
    assert_eq!(task_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_without_title_returns_400(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        serde_json::json!({"title": "", "project_id": project_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_filters_by_project_and_assignee(pool: PgPool) {
    let site = create_project(&pool, "Site").await;
    let app_project = create_project(&pool, "App").await;
    let ana = create_user(&pool, "Ana", "Developer").await;

    create_task(&pool, site, "S1").await;
    create_task(&pool, app_project, "A1").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks",
        serde_json::json!({"title": "S2", "project_id": site, "assignee_id": ana}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let all = body_json(get(common::build_test_app(pool.clone()), "/api/v1/tasks").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let by_project = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/tasks?project_id={site}"),
        )
        .await,
    )
    .await;
    let titles: Vec<&str> = by_project
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["S1", "S2"]);

    let by_both = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/tasks?project_id={site}&assignee_id={ana}"),
        )
        .await,
    )
    .await;
    assert_eq!(by_both.as_array().unwrap().len(), 1);
    assert_eq!(by_both[0]["title"], "S2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_with_non_numeric_filter_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tasks?project_id=abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tasks/5150").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_assignee_tri_state(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;
    let task_id = create_task(&pool, project_id, "Design").await;
    let ana = create_user(&pool, "Ana", "Developer").await;
    let uri = format!("/api/v1/tasks/{task_id}");

    // Assign.
    let json = body_json(
        put_json(
            common::build_test_app(pool.clone()),
            &uri,
            serde_json::json!({"assignee_id": ana}),
        )
        .await,
    )
    .await;
    assert_eq!(json["assignee"]["name"], "Ana");

    // Omitted: unchanged.
    let json = body_json(
        put_json(
            common::build_test_app(pool.clone()),
            &uri,
            serde_json::json!({"title": "Design v2"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["title"], "Design v2");
    assert_eq!(json["assignee_id"], ana);

    // Explicit null: cleared.
    let json = body_json(
        put_json(
            common::build_test_app(pool),
            &uri,
            serde_json::json!({"assignee_id": null}),
        )
        .await,
    )
    .await;
    assert!(json["assignee_id"].is_null());
    assert!(json["assignee"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_status(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;
    let task_id = create_task(&pool, project_id, "Design").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/tasks/{task_id}"),
        serde_json::json!({"status_id": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"]["name"], "Awaiting Approval");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_unknown_status_or_assignee_returns_404(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;
    let task_id = create_task(&pool, project_id, "Design").await;
    let uri = format!("/api/v1/tasks/{task_id}");

    for body in [
        serde_json::json!({"status_id": 42, "title": "Nope"}),
        serde_json::json!({"assignee_id": 4242, "title": "Nope"}),
    ] {
        let response = put_json(common::build_test_app(pool.clone()), &uri, body).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "REFERENCE_NOT_FOUND");
    }

    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(json["title"], "Design");
    assert_eq!(json["status_id"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_cannot_move_project(pool: PgPool) {
    let site = create_project(&pool, "Site").await;
    let other = create_project(&pool, "Other").await;
    let task_id = create_task(&pool, site, "Design").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/tasks/{task_id}"),
        serde_json::json!({"project_id": other, "title": "Still here"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project_id"], site);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_task_leaves_project_and_siblings(pool: PgPool) {
    let project_id = create_project(&pool, "Site").await;
    let doomed = create_task(&pool, project_id, "Doomed").await;
    let sibling = create_task(&pool, project_id, "Sibling").await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{doomed}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{sibling}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{doomed}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_design_scenario(pool: PgPool) {
    // Project "Site" starts Pending.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({
            "name": "Site",
            "description": "Marketing site",
            "start_date": "2025-01-01",
            "end_date": "2025-06-01",
        }),
    )
    .await;
    let project = body_json(response).await;
    assert_eq!(project["status"]["name"], "Pending");
    let project_id = project["id"].as_i64().unwrap();

    // Task "Design" starts To Do, unassigned.
    let task_id = create_task(&pool, project_id, "Design").await;
    let task = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/tasks/{task_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(task["status"]["name"], "To Do");
    assert!(task["assignee"].is_null());

    // Assign to a user, then move to In Progress.
    let user_id = create_user(&pool, "Bo", "Designer").await;
    let task = body_json(
        put_json(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/tasks/{task_id}"),
            serde_json::json!({"assignee_id": user_id, "status_id": 2}),
        )
        .await,
    )
    .await;
    assert_eq!(task["assignee"]["name"], "Bo");
    assert_eq!(task["status"]["name"], "In Progress");

    // Deleting the project takes the task with it.
    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(task_count(&pool).await, 0);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{task_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The user survives.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/users/{user_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
