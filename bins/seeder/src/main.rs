//! Database seeder for Kasku development.
//!
//! Installs the default category set and a starting cash wallet into an
//! empty database. Safe to re-run: an already seeded database is left
//! untouched.
//!
//! Usage: cargo run --bin seeder

use rust_decimal::Decimal;

use kasku_core::category::{CategoryType, PriorityGroup};
use kasku_db::repositories::category::{CategoryRepository, CreateCategoryInput};
use kasku_db::repositories::wallet::{CreateWalletInput, WalletRepository};

const DEFAULT_INCOME_CATEGORIES: &[(&str, &str)] = &[
    ("Gaji Bulanan", "money"),
    ("Bonus/THR", "gift"),
];

const DEFAULT_EXPENSE_CATEGORIES: &[(&str, PriorityGroup, &str)] = &[
    ("KPR", PriorityGroup::Fixed, "house"),
    ("Listrik", PriorityGroup::Fixed, "lightning"),
    ("Belanja", PriorityGroup::Living, "shopping-cart"),
    ("Bensin/Transport", PriorityGroup::Living, "gas-pump"),
    ("Pulsa/Internet", PriorityGroup::Living, "wifi-high"),
    ("Jajan", PriorityGroup::Lifestyle, "coffee"),
    ("Makan Luar", PriorityGroup::Lifestyle, "fork-knife"),
    ("Langganan Digital", PriorityGroup::Lifestyle, "film-strip"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/kasku.db?mode=rwc".to_string());

    println!("Connecting to database...");
    let db = kasku_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let categories = CategoryRepository::new(db.clone());
    let existing = categories
        .list()
        .await
        .expect("Failed to inspect categories");

    if existing.is_empty() {
        println!("Seeding default categories...");
        seed_categories(&categories).await;
    } else {
        println!("  Categories already present, skipping...");
    }

    let wallets = WalletRepository::new(db.clone());
    let existing = wallets.list(false).await.expect("Failed to inspect wallets");

    if existing.is_empty() {
        println!("Seeding starting wallet...");
        seed_wallet(&wallets).await;
    } else {
        println!("  Wallets already present, skipping...");
    }

    println!("Seeding complete!");
}

async fn seed_categories(repo: &CategoryRepository) {
    for (name, icon) in DEFAULT_INCOME_CATEGORIES {
        let input = CreateCategoryInput {
            name: (*name).to_string(),
            category_type: CategoryType::Income,
            priority_group: None,
            icon: Some((*icon).to_string()),
        };
        if let Err(e) = repo.create(input).await {
            eprintln!("Failed to seed category {name}: {e}");
        } else {
            println!("  Created income category: {name}");
        }
    }

    for (name, group, icon) in DEFAULT_EXPENSE_CATEGORIES {
        let input = CreateCategoryInput {
            name: (*name).to_string(),
            category_type: CategoryType::Expense,
            priority_group: Some(*group),
            icon: Some((*icon).to_string()),
        };
        if let Err(e) = repo.create(input).await {
            eprintln!("Failed to seed category {name}: {e}");
        } else {
            println!("  Created expense category: {name}");
        }
    }
}

async fn seed_wallet(repo: &WalletRepository) {
    let input = CreateWalletInput {
        name: "Dompet Tunai".to_string(),
        wallet_type: "cash".to_string(),
        initial_balance: Decimal::ZERO,
    };

    if let Err(e) = repo.create(input).await {
        eprintln!("Failed to seed wallet: {e}");
    } else {
        println!("  Created wallet: Dompet Tunai");
    }
}
