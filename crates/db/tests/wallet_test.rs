//! Integration tests for the wallet repository.

mod common;

use rust_decimal_macros::dec;

use kasku_db::repositories::wallet::{CreateWalletInput, WalletError, WalletRepository};

use common::{create_wallet, setup_db};

#[tokio::test]
async fn test_create_wallet_with_initial_balance() {
    let db = setup_db().await;

    let wallet = create_wallet(&db, "Dompet Tunai", dec!(150_000)).await;

    assert_eq!(wallet.name, "Dompet Tunai");
    assert_eq!(wallet.balance, dec!(150_000));
    assert!(wallet.is_active);
    assert_eq!(wallet.version, 0);
}

#[tokio::test]
async fn test_duplicate_wallet_name_is_rejected() {
    let db = setup_db().await;
    create_wallet(&db, "BCA", dec!(0)).await;

    let result = WalletRepository::new(db.clone())
        .create(CreateWalletInput {
            name: "BCA".to_string(),
            wallet_type: "bank".to_string(),
            initial_balance: dec!(0),
        })
        .await;

    assert!(matches!(result, Err(WalletError::DuplicateName(name)) if name == "BCA"));
}

#[tokio::test]
async fn test_list_active_only_hides_archived() {
    let db = setup_db().await;
    let keep = create_wallet(&db, "Aktif", dec!(0)).await;
    let archive = create_wallet(&db, "Lama", dec!(0)).await;

    kasku_db::repositories::ledger::LedgerRepository::new(db.clone())
        .archive_wallet(archive.id, None, None)
        .await
        .unwrap();

    let repo = WalletRepository::new(db.clone());

    let active = repo.list(true).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, keep.id);

    // History survives archival.
    let all = repo.list(false).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_find_by_id_reports_missing_wallet() {
    let db = setup_db().await;

    let result = WalletRepository::new(db.clone()).find_by_id(404).await;
    assert!(matches!(result, Err(WalletError::NotFound(404))));
}
