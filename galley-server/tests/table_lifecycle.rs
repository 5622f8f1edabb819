//! Table lifecycle: creation rules, occupancy toggling, guest counts

mod common;

use galley_server::db::models::{OrderStatus, OrderTableCreate};
use galley_server::db::repository::{OrderTableRepository, RepoError};
use galley_server::services::{OrderService, TableGroupService, TableService};

use common::{id_of, id_of_order, seed_menu, seed_order, seed_table, setup_db};

#[tokio::test]
async fn create_rejects_bad_payloads() {
    let (_tmp, db) = setup_db().await;
    let service = TableService::new(db.clone());

    // Blank name
    let err = service
        .create(OrderTableCreate {
            name: "  ".to_string(),
            number_of_guests: 0,
            empty: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Negative guests
    let err = service
        .create(OrderTableCreate {
            name: "T1".to_string(),
            number_of_guests: -2,
            empty: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Guests on an empty table
    let err = service
        .create(OrderTableCreate {
            name: "T1".to_string(),
            number_of_guests: 4,
            empty: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_duplicate_names() {
    let (_tmp, db) = setup_db().await;
    let service = TableService::new(db.clone());

    seed_table(&db, "T1", true).await;
    let err = service
        .create(OrderTableCreate {
            name: "T1".to_string(),
            number_of_guests: 0,
            empty: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn guest_count_requires_occupied_table() {
    let (_tmp, db) = setup_db().await;
    let service = TableService::new(db.clone());
    let empty_table = seed_table(&db, "T1", true).await;
    let occupied = seed_table(&db, "T2", false).await;

    let err = service
        .change_guest_count(&id_of(&empty_table), 2)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = service
        .change_guest_count(&id_of(&occupied), -1)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let updated = service.change_guest_count(&id_of(&occupied), 4).await.unwrap();
    assert_eq!(updated.number_of_guests, 4);
}

#[tokio::test]
async fn guest_count_on_missing_table_fails() {
    let (_tmp, db) = setup_db().await;
    let service = TableService::new(db.clone());

    let err = service
        .change_guest_count("order_table:missing", 2)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn change_empty_on_grouped_table_fails() {
    let (_tmp, db) = setup_db().await;
    let t1 = seed_table(&db, "T1", true).await;
    let t2 = seed_table(&db, "T2", true).await;
    TableGroupService::new(db.clone())
        .create(&[id_of(&t1), id_of(&t2)])
        .await
        .unwrap();
    let service = TableService::new(db.clone());

    let err = service.change_empty(&id_of(&t1), true).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn change_empty_blocked_by_active_order() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Pulpo", 16.0).await;
    let order = seed_order(&db, &id_of(&table), &menu).await;
    let tables = TableService::new(db.clone());
    let orders = OrderService::new(db.clone());

    // COOKING blocks
    let err = tables.change_empty(&id_of(&table), true).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // MEAL blocks
    orders
        .change_status(&id_of_order(&order), OrderStatus::Meal)
        .await
        .unwrap();
    let err = tables.change_empty(&id_of(&table), true).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // COMPLETION releases the table
    orders
        .change_status(&id_of_order(&order), OrderStatus::Completion)
        .await
        .unwrap();
    let cleared = tables.change_empty(&id_of(&table), true).await.unwrap();
    assert!(cleared.empty);
}

#[tokio::test]
async fn emptying_resets_guest_count_and_occupying_leaves_it() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let service = TableService::new(db.clone());

    let seated = service.change_guest_count(&id_of(&table), 4).await.unwrap();
    assert_eq!(seated.number_of_guests, 4);

    // Emptying zeroes the guest count
    let emptied = service.change_empty(&id_of(&table), true).await.unwrap();
    assert!(emptied.empty);
    assert_eq!(emptied.number_of_guests, 0);

    // Re-occupying leaves the guest count untouched
    let occupied = service.change_empty(&id_of(&table), false).await.unwrap();
    assert!(!occupied.empty);
    assert_eq!(occupied.number_of_guests, 0);
}

#[tokio::test]
async fn guest_count_write_on_emptied_table_surfaces_conflict() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", true).await;

    // Occupancy was validated elsewhere, table got emptied in between: the
    // guarded update matches nothing and reports a lost race
    let err = OrderTableRepository::new(db.clone())
        .change_guest_count_guarded(table.id.as_ref().unwrap(), 3)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[tokio::test]
async fn empty_write_with_active_order_surfaces_conflict() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Pulpo", 16.0).await;
    seed_order(&db, &id_of(&table), &menu).await;

    // An order landed on the table after the caller's validation read: the
    // transaction guard trips instead of committing the write
    let err = OrderTableRepository::new(db.clone())
        .change_empty_guarded(table.id.as_ref().unwrap(), true)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[tokio::test]
async fn empty_write_on_vanished_table_surfaces_not_found() {
    let (_tmp, db) = setup_db().await;

    let missing = "order_table:missing".parse().unwrap();
    let err = OrderTableRepository::new(db.clone())
        .change_empty_guarded(&missing, true)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn change_empty_on_missing_table_fails() {
    let (_tmp, db) = setup_db().await;
    let service = TableService::new(db.clone());

    let err = service
        .change_empty("order_table:missing", true)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
