//! Category management routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use kasku_core::category::{CategoryType, PriorityGroup};
use kasku_db::entities::categories;
use kasku_db::repositories::category::{CategoryError, CategoryRepository, CreateCategoryInput};

use crate::AppState;
use crate::routes::{bad_request, internal_error_response};

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
}

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Globally unique category name.
    pub name: String,
    /// Category type: income or expense.
    #[serde(rename = "type")]
    pub category_type: String,
    /// Priority group for expense categories: fixed, living, lifestyle.
    pub priority_group: Option<String>,
    /// Phosphor icon name.
    pub icon: Option<String>,
}

fn category_json(category: &categories::Model) -> serde_json::Value {
    json!({
        "id": category.id,
        "name": category.name,
        "type": category.category_type,
        "priority_group": category.priority_group,
        "icon": category.icon,
    })
}

/// GET `/categories` - List all categories.
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(categories) => {
            let items: Vec<_> = categories.iter().map(category_json).collect();
            (StatusCode::OK, Json(json!({ "categories": items }))).into_response()
        }
        Err(e) => internal_error_response(&e, "Failed to list categories"),
    }
}

/// POST `/categories` - Create a user-defined category.
///
/// Transfer categories are system-managed and cannot be created here.
async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    let category_type = match CategoryType::parse(&payload.category_type) {
        Some(CategoryType::Transfer) | None => {
            return bad_request(
                "INVALID_CATEGORY_TYPE",
                "Invalid category type. Must be one of: income, expense",
            );
        }
        Some(ty) => ty,
    };

    let priority_group = match payload.priority_group.as_deref() {
        None | Some("") => None,
        Some(raw) => match PriorityGroup::parse(raw) {
            Some(group) => Some(group),
            None => {
                return bad_request(
                    "INVALID_PRIORITY_GROUP",
                    "Invalid priority group. Must be one of: fixed, living, lifestyle",
                );
            }
        },
    };

    let repo = CategoryRepository::new((*state.db).clone());
    let input = CreateCategoryInput {
        name: payload.name,
        category_type,
        priority_group,
        icon: payload.icon,
    };

    match repo.create(input).await {
        Ok(category) => {
            info!(category_id = %category.id, name = %category.name, "Category created");
            (StatusCode::CREATED, Json(category_json(&category))).into_response()
        }
        Err(CategoryError::DuplicateName(name)) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "DUPLICATE_NAME",
                "message": format!("Category name '{name}' already exists")
            })),
        )
            .into_response(),
        Err(e) => internal_error_response(&e, "Failed to create category"),
    }
}
