//! Order lifecycle: creation gating, line-item snapshots, status machine

mod common;

use galley_server::db::models::{OrderCreate, OrderLineItemInput, OrderStatus};
use galley_server::db::repository::{OrderRepository, RepoError};
use galley_server::services::OrderService;

use common::{id_of, id_of_menu, id_of_order, seed_menu, seed_order, seed_table, setup_db};

#[tokio::test]
async fn create_starts_cooking_with_snapshotted_line_items() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Gazpacho", 6.5).await;
    let service = OrderService::new(db.clone());

    let order = service
        .create(OrderCreate {
            order_table_id: id_of(&table),
            line_items: vec![OrderLineItemInput {
                menu_id: id_of_menu(&menu),
                quantity: 2,
            }],
        })
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Cooking);
    assert_eq!(order.line_items.len(), 1);
    let item = &order.line_items[0];
    assert_eq!(item.menu_name, "Gazpacho");
    assert_eq!(item.price, 6.5);
    assert_eq!(item.quantity, 2);
}

#[tokio::test]
async fn create_on_empty_table_fails() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", true).await;
    let menu = seed_menu(&db, "Gazpacho", 6.5).await;
    let service = OrderService::new(db.clone());

    let err = service
        .create(OrderCreate {
            order_table_id: id_of(&table),
            line_items: vec![OrderLineItemInput {
                menu_id: id_of_menu(&menu),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_on_missing_table_fails() {
    let (_tmp, db) = setup_db().await;
    let menu = seed_menu(&db, "Gazpacho", 6.5).await;
    let service = OrderService::new(db.clone());

    let err = service
        .create(OrderCreate {
            order_table_id: "order_table:missing".to_string(),
            line_items: vec![OrderLineItemInput {
                menu_id: id_of_menu(&menu),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn create_without_line_items_fails() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let service = OrderService::new(db.clone());

    let err = service
        .create(OrderCreate {
            order_table_id: id_of(&table),
            line_items: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_with_unknown_menu_fails() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let service = OrderService::new(db.clone());

    let err = service
        .create(OrderCreate {
            order_table_id: id_of(&table),
            line_items: vec![OrderLineItemInput {
                menu_id: "menu:missing".to_string(),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_with_negative_quantity_fails() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Gazpacho", 6.5).await;
    let service = OrderService::new(db.clone());

    let err = service
        .create(OrderCreate {
            order_table_id: id_of(&table),
            line_items: vec![OrderLineItemInput {
                menu_id: id_of_menu(&menu),
                quantity: -1,
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn status_walks_the_allow_list() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Fideua", 14.0).await;
    let order = seed_order(&db, &id_of(&table), &menu).await;
    let service = OrderService::new(db.clone());
    let order_id = id_of_order(&order);

    // COOKING -> MEAL -> COOKING -> MEAL -> COMPLETION
    let o = service
        .change_status(&order_id, OrderStatus::Meal)
        .await
        .unwrap();
    assert_eq!(o.status, OrderStatus::Meal);
    let o = service
        .change_status(&order_id, OrderStatus::Cooking)
        .await
        .unwrap();
    assert_eq!(o.status, OrderStatus::Cooking);
    service
        .change_status(&order_id, OrderStatus::Meal)
        .await
        .unwrap();
    let o = service
        .change_status(&order_id, OrderStatus::Completion)
        .await
        .unwrap();
    assert_eq!(o.status, OrderStatus::Completion);
}

#[tokio::test]
async fn completion_is_terminal() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Fideua", 14.0).await;
    let order = seed_order(&db, &id_of(&table), &menu).await;
    let service = OrderService::new(db.clone());
    let order_id = id_of_order(&order);

    service
        .change_status(&order_id, OrderStatus::Completion)
        .await
        .unwrap();

    for target in [OrderStatus::Cooking, OrderStatus::Meal, OrderStatus::Completion] {
        let err = service.change_status(&order_id, target).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}

#[tokio::test]
async fn stale_status_write_surfaces_conflict() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Fideua", 14.0).await;
    let order = seed_order(&db, &id_of(&table), &menu).await;

    // Writer validated against MEAL, but the order is still COOKING: the
    // compare-and-swap matches nothing and reports a lost race
    let err = OrderRepository::new(db.clone())
        .change_status_cas(
            order.id.as_ref().unwrap(),
            OrderStatus::Meal,
            OrderStatus::Completion,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // The stale write left the order untouched
    let unchanged = OrderRepository::new(db.clone())
        .find_by_id(&id_of_order(&order))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, OrderStatus::Cooking);
}

#[tokio::test]
async fn change_status_of_missing_order_fails() {
    let (_tmp, db) = setup_db().await;
    let service = OrderService::new(db.clone());

    let err = service
        .change_status("orders:missing", OrderStatus::Meal)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn list_returns_created_orders() {
    let (_tmp, db) = setup_db().await;
    let table = seed_table(&db, "T1", false).await;
    let menu = seed_menu(&db, "Crema catalana", 5.0).await;
    let service = OrderService::new(db.clone());

    seed_order(&db, &id_of(&table), &menu).await;
    seed_order(&db, &id_of(&table), &menu).await;

    let orders = service.list().await.unwrap();
    assert_eq!(orders.len(), 2);
}
