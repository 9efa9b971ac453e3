//! Integration tests for the category repository.
//!
//! Covers the uniqueness constraint, the priority-group rule, and the
//! idempotent sentinel upsert.

mod common;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use kasku_core::category::{CategoryType, PriorityGroup, Sentinel};
use kasku_db::entities::{categories, sea_orm_active_enums};
use kasku_db::repositories::category::{CategoryError, CategoryRepository, CreateCategoryInput};

use common::{create_category, setup_db};

#[tokio::test]
async fn test_create_expense_category_keeps_priority_group() {
    let db = setup_db().await;

    let category = create_category(
        &db,
        "Belanja",
        CategoryType::Expense,
        Some(PriorityGroup::Living),
    )
    .await;

    assert_eq!(
        category.priority_group,
        Some(sea_orm_active_enums::PriorityGroup::Living)
    );
}

#[tokio::test]
async fn test_create_income_category_drops_priority_group() {
    let db = setup_db().await;

    let category = create_category(
        &db,
        "Gaji Bulanan",
        CategoryType::Income,
        Some(PriorityGroup::Fixed),
    )
    .await;

    assert_eq!(category.priority_group, None);
}

#[tokio::test]
async fn test_duplicate_category_name_is_rejected() {
    let db = setup_db().await;
    create_category(&db, "Belanja", CategoryType::Expense, None).await;

    let result = CategoryRepository::new(db.clone())
        .create(CreateCategoryInput {
            name: "Belanja".to_string(),
            category_type: CategoryType::Income,
            priority_group: None,
            icon: None,
        })
        .await;

    assert!(matches!(result, Err(CategoryError::DuplicateName(name)) if name == "Belanja"));
}

#[tokio::test]
async fn test_sentinel_upsert_is_idempotent() {
    let db = setup_db().await;

    let first = CategoryRepository::find_or_create_sentinel(&db, Sentinel::Transfer)
        .await
        .unwrap();
    let second = CategoryRepository::find_or_create_sentinel(&db, Sentinel::Transfer)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);

    let rows = categories::Entity::find()
        .filter(categories::Column::Name.eq("Transfer"))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_sentinel_upsert_returns_preexisting_row() {
    let db = setup_db().await;

    // The row already exists (e.g. created by a concurrent caller); the
    // upsert must return it rather than fail on the unique index.
    let existing = create_category(&db, "Koreksi Saldo", CategoryType::Expense, None).await;

    let found = CategoryRepository::find_or_create_sentinel(&db, Sentinel::BalanceShortfall)
        .await
        .unwrap();

    assert_eq!(found.id, existing.id);
}

#[tokio::test]
async fn test_sentinel_definitions_are_persisted() {
    let db = setup_db().await;

    let shortfall = CategoryRepository::find_or_create_sentinel(&db, Sentinel::BalanceShortfall)
        .await
        .unwrap();
    assert_eq!(
        shortfall.category_type,
        sea_orm_active_enums::CategoryType::Expense
    );
    assert_eq!(
        shortfall.priority_group,
        Some(sea_orm_active_enums::PriorityGroup::Lifestyle)
    );
    assert_eq!(shortfall.icon.as_deref(), Some("scales"));

    let surplus = CategoryRepository::find_or_create_sentinel(&db, Sentinel::BalanceSurplus)
        .await
        .unwrap();
    assert_eq!(surplus.name, "Koreksi Saldo (Income)");
    assert_eq!(
        surplus.category_type,
        sea_orm_active_enums::CategoryType::Income
    );
    assert_eq!(surplus.priority_group, None);
}

#[tokio::test]
async fn test_list_orders_by_name() {
    let db = setup_db().await;
    create_category(&db, "Listrik", CategoryType::Expense, Some(PriorityGroup::Fixed)).await;
    create_category(&db, "Belanja", CategoryType::Expense, Some(PriorityGroup::Living)).await;

    let all = CategoryRepository::new(db.clone()).list().await.unwrap();
    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Belanja", "Listrik"]);
}
