//! Integration tests for the budget and advice-cache repositories.

mod common;

use rust_decimal_macros::dec;

use chrono::{Days, Utc};
use kasku_core::category::{CategoryType, PriorityGroup};
use kasku_db::repositories::advice::AdviceRepository;
use kasku_db::repositories::budget::{BudgetError, BudgetRepository};

use common::{create_category, setup_db};

#[tokio::test]
async fn test_budget_upsert_replaces_limit_for_same_period() {
    let db = setup_db().await;
    let category = create_category(
        &db,
        "Belanja",
        CategoryType::Expense,
        Some(PriorityGroup::Living),
    )
    .await;

    let repo = BudgetRepository::new(db.clone());

    let first = repo
        .upsert(category.id, "2026-08", dec!(1_500_000))
        .await
        .unwrap();
    let second = repo
        .upsert(category.id, "2026-08", dec!(1_200_000))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.amount_limit, dec!(1_200_000));

    let listed = repo.list_for_period("2026-08").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category.name, "Belanja");
}

#[tokio::test]
async fn test_budget_periods_are_independent() {
    let db = setup_db().await;
    let category = create_category(&db, "Belanja", CategoryType::Expense, None).await;

    let repo = BudgetRepository::new(db.clone());
    repo.upsert(category.id, "2026-08", dec!(1_000_000))
        .await
        .unwrap();
    repo.upsert(category.id, "2026-09", dec!(900_000))
        .await
        .unwrap();

    assert_eq!(repo.list_for_period("2026-08").await.unwrap().len(), 1);
    assert_eq!(repo.list_for_period("2026-09").await.unwrap().len(), 1);
    assert!(repo.list_for_period("2026-10").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_budget_requires_existing_category() {
    let db = setup_db().await;

    let result = BudgetRepository::new(db.clone())
        .upsert(404, "2026-08", dec!(1_000_000))
        .await;

    assert!(matches!(result, Err(BudgetError::CategoryNotFound(404))));
}

#[tokio::test]
async fn test_advice_cache_hits_only_for_creation_date() {
    let db = setup_db().await;
    let repo = AdviceRepository::new(db.clone());

    let today = Utc::now().date_naive();
    assert!(repo.find_for_date(today).await.unwrap().is_none());

    repo.insert("Kurangi jajan kopi.").await.unwrap();

    let cached = repo
        .find_for_date(today)
        .await
        .unwrap()
        .expect("today's advice must be cached");
    assert_eq!(cached.content, "Kurangi jajan kopi.");

    // Yesterday's lookup must not see today's advice.
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    assert!(repo.find_for_date(yesterday).await.unwrap().is_none());
}
