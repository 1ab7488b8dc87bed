use super::*;

fn item(product_id: i64, quantity: i32, price: f64) -> OrderItem {
    OrderItem { product_id, quantity, price }
}

// =============================================================================
// order_total
// =============================================================================

#[test]
fn order_total_empty_is_zero() {
    assert!((order_total(&[])).abs() < f64::EPSILON);
}

#[test]
fn order_total_single_item() {
    let total = order_total(&[item(1, 3, 9.99)]);
    assert!((total - 29.97).abs() < 1e-9);
}

#[test]
fn order_total_sums_across_items() {
    let total = order_total(&[item(1, 2, 10.0), item(2, 1, 5.5)]);
    assert!((total - 25.5).abs() < 1e-9);
}

#[test]
fn order_total_zero_quantity_contributes_nothing() {
    let total = order_total(&[item(1, 0, 99.0), item(2, 1, 1.0)]);
    assert!((total - 1.0).abs() < 1e-9);
}

// =============================================================================
// OrderItem wire shape
// =============================================================================

#[test]
fn order_item_json_round_trip() {
    let original = item(42, 2, 19.99);
    let json = serde_json::to_string(&original).expect("serialize");
    let parsed: OrderItem = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, original);
}

#[test]
fn order_item_uses_snake_case_field_names() {
    let json = serde_json::to_value(item(7, 1, 2.5)).expect("serialize");
    assert_eq!(json["product_id"], 7);
    assert_eq!(json["quantity"], 1);
}

// =============================================================================
// Order response shape
// =============================================================================

#[test]
fn order_serializes_the_computed_total() {
    let items = vec![item(1, 2, 10.0), item(2, 1, 5.5)];
    let order = Order {
        id: uuid::Uuid::nil(),
        user_id: uuid::Uuid::nil(),
        status: "PENDING".to_owned(),
        total: order_total(&items),
        items,
    };
    let json = serde_json::to_value(&order).expect("serialize");
    let total = json["total"].as_f64().expect("total is a number");
    assert!((total - 25.5).abs() < 1e-9);
}

// =============================================================================
// OrderError display
// =============================================================================

#[test]
fn order_error_messages_name_the_order() {
    let id = uuid::Uuid::nil();
    assert_eq!(
        OrderError::NotFound(id).to_string(),
        format!("order not found: {id}")
    );
    assert_eq!(
        OrderError::Forbidden(id).to_string(),
        format!("order {id} belongs to another user")
    );
}

// =============================================================================
// Live DB tests (require a running Postgres; gated behind live-db-tests)
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::super::*;
    use super::item;
    use sqlx::PgPool;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live tests");
        crate::db::init_pool(&url).await.expect("init pool")
    }

    async fn insert_user(pool: &PgPool) -> uuid::Uuid {
        let id = uuid::Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, 'x')")
            .bind(id)
            .bind(format!("{id}@example.com"))
            .execute(pool)
            .await
            .expect("insert user");
        id
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let pool = test_pool().await;
        let user_id = insert_user(&pool).await;
        let items = vec![item(1, 2, 10.0), item(2, 1, 5.5)];

        let created = create_order(&pool, user_id, items.clone()).await.expect("create");
        assert_eq!(created.status, "PENDING");

        let fetched = get_order(&pool, created.id, user_id).await.expect("get");
        assert_eq!(fetched.items, items);
        assert!((fetched.total - order_total(&items)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_order_is_rejected() {
        let pool = test_pool().await;
        let user_id = insert_user(&pool).await;
        let err = create_order(&pool, user_id, vec![]).await.unwrap_err();
        assert!(matches!(err, OrderError::EmptyOrder));
    }

    #[tokio::test]
    async fn other_users_order_is_forbidden() {
        let pool = test_pool().await;
        let owner = insert_user(&pool).await;
        let intruder = insert_user(&pool).await;

        let created = create_order(&pool, owner, vec![item(1, 1, 1.0)]).await.expect("create");
        let err = get_order(&pool, created.id, intruder).await.unwrap_err();
        assert!(matches!(err, OrderError::Forbidden(_)));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let pool = test_pool().await;
        let user_id = insert_user(&pool).await;
        let err = get_order(&pool, uuid::Uuid::new_v4(), user_id).await.unwrap_err();
        assert!(matches!(err, OrderError::NotFound(_)));
    }
}
