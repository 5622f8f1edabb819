//! Shared test fixtures: throwaway embedded database + seed helpers

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use tempfile::TempDir;

use galley_server::db::models::{
    Menu, MenuCreate, Order, OrderCreate, OrderLineItemInput, OrderTable, OrderTableCreate,
};
use galley_server::db::repository::MenuRepository;
use galley_server::services::{OrderService, TableService};

/// Open a fresh embedded database under a tempdir and apply the schema.
/// The TempDir must be kept alive for the duration of the test.
pub async fn setup_db() -> (TempDir, Surreal<Db>) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("galley").use_db("test").await.unwrap();
    galley_server::db::schema::apply(&db).await.unwrap();
    (tmp, db)
}

pub async fn seed_table(db: &Surreal<Db>, name: &str, empty: bool) -> OrderTable {
    TableService::new(db.clone())
        .create(OrderTableCreate {
            name: name.to_string(),
            number_of_guests: 0,
            empty,
        })
        .await
        .unwrap()
}

pub async fn seed_menu(db: &Surreal<Db>, name: &str, price: f64) -> Menu {
    MenuRepository::new(db.clone())
        .create(MenuCreate {
            name: name.to_string(),
            price,
        })
        .await
        .unwrap()
}

pub async fn seed_order(db: &Surreal<Db>, table_id: &str, menu: &Menu) -> Order {
    OrderService::new(db.clone())
        .create(OrderCreate {
            order_table_id: table_id.to_string(),
            line_items: vec![OrderLineItemInput {
                menu_id: id_of_menu(menu),
                quantity: 1,
            }],
        })
        .await
        .unwrap()
}

pub fn id_of(table: &OrderTable) -> String {
    table.id.as_ref().unwrap().to_string()
}

pub fn id_of_menu(menu: &Menu) -> String {
    menu.id.as_ref().unwrap().to_string()
}

pub fn id_of_order(order: &Order) -> String {
    order.id.as_ref().unwrap().to_string()
}
