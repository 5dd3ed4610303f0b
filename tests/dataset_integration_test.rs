//! End-to-end tests for the generate -> render -> write pipeline.

use shop_seeder::generator::{Counts, Generator};
use shop_seeder::renderer::{render_insert, SqlValue};
use shop_seeder::writer;
use std::collections::{HashMap, HashSet};
use tempfile::TempDir;

fn int(value: &SqlValue) -> i64 {
    match value {
        SqlValue::Int(n) => *n,
        other => panic!("expected Int, got {:?}", other),
    }
}

fn str_val(value: &SqlValue) -> &str {
    match value {
        SqlValue::Str(s) => s,
        other => panic!("expected Str, got {:?}", other),
    }
}

#[test]
fn test_role_range_scenario() {
    // 3 customers, 2 sellers, 1 admin, 1 shipper
    let counts = Counts {
        customers: 3,
        sellers: 2,
        admins: 1,
        shippers: 1,
        products: 8,
        orders: 4,
        carts_max: 0,
    };
    let dataset = Generator::new(123, counts).generate().unwrap();

    let users = dataset.table("Users").unwrap();
    assert_eq!(users.rows.len(), 7);

    // User rows are emitted in role-block order, so row i holds user_id i+1
    let role_idx = users.table.column_index("role").unwrap();
    for (i, row) in users.rows.iter().enumerate() {
        let user_id = i as i64 + 1;
        let expected = if dataset.plan.customers.contains(user_id) {
            "customer"
        } else if dataset.plan.sellers.contains(user_id) {
            "seller"
        } else if dataset.plan.admins.contains(user_id) {
            "admin"
        } else {
            "shipper"
        };
        assert_eq!(str_val(&row[role_idx]), expected);
    }

    assert_eq!(dataset.plan.sellers.start, 4);
    assert_eq!(dataset.plan.sellers.end, 5);
    assert_eq!(dataset.plan.admins.start, 6);
    assert_eq!(dataset.plan.admins.end, 6);
    assert_eq!(dataset.plan.shippers.start, 7);
    assert_eq!(dataset.plan.shippers.end, 7);

    // A Seller row referencing the admin or shipper block would be a defect
    let seller_ids: Vec<i64> = dataset
        .table("Sellers")
        .unwrap()
        .rows
        .iter()
        .map(|r| int(&r[0]))
        .collect();
    assert_eq!(seller_ids, vec![4, 5]);
}

fn medium_counts() -> Counts {
    Counts {
        customers: 30,
        sellers: 6,
        admins: 2,
        shippers: 4,
        products: 25,
        orders: 40,
        carts_max: 10,
    }
}

#[test]
fn test_foreign_keys_stay_in_planned_ranges() {
    let counts = medium_counts();
    let dataset = Generator::new(77, counts).generate().unwrap();
    let plan = dataset.plan;

    for row in &dataset.table("Products").unwrap().rows {
        assert!(plan.sellers.contains(int(&row[0])));
    }

    for row in &dataset.table("Carts").unwrap().rows {
        assert!(plan.customers.contains(int(&row[0])));
        assert!(plan.sellers.contains(int(&row[1])));
    }

    let orders = dataset.table("Orders").unwrap();
    let shipper_idx = orders.table.column_index("Shipping_units_id").unwrap();
    for row in &orders.rows {
        assert!(plan.customers.contains(int(&row[0])));
        assert!(plan.sellers.contains(int(&row[1])));
        if let SqlValue::Int(shipper_id) = &row[shipper_idx] {
            assert!(plan.shippers.contains(*shipper_id));
        }
    }

    for row in &dataset.table("Reviews").unwrap().rows {
        assert!(plan.customers.contains(int(&row[2])));
    }
}

#[test]
fn test_order_items_unique_products_within_order() {
    let counts = medium_counts();
    let dataset = Generator::new(5, counts).generate().unwrap();

    let mut per_order: HashMap<i64, HashSet<i64>> = HashMap::new();
    for row in &dataset.table("Order_items").unwrap().rows {
        let order_id = int(&row[0]);
        let product_id = int(&row[1]);
        assert!(order_id >= 1 && order_id <= counts.orders as i64);
        assert!(product_id >= 1 && product_id <= counts.products as i64);
        assert!(
            per_order.entry(order_id).or_default().insert(product_id),
            "order {} references product {} twice",
            order_id,
            product_id
        );
    }
    assert_eq!(per_order.len(), counts.orders);
}

#[test]
fn test_reviews_cover_emitted_pairs_exactly() {
    let dataset = Generator::new(99, medium_counts()).generate().unwrap();

    let pairs: HashSet<(i64, i64)> = dataset
        .table("Order_items")
        .unwrap()
        .rows
        .iter()
        .map(|r| (int(&r[0]), int(&r[1])))
        .collect();

    let reviews = dataset.table("Reviews").unwrap();
    let expected = (pairs.len() as f64 * 0.75).round() as usize;
    assert_eq!(reviews.rows.len(), expected);

    let mut reviewed = HashSet::new();
    for row in &reviews.rows {
        let pair = (int(&row[0]), int(&row[1]));
        assert!(pairs.contains(&pair), "review references {:?}, never ordered", pair);
        assert!(reviewed.insert(pair), "pair {:?} reviewed twice", pair);
    }
}

#[test]
fn test_rendered_orders_toggle_shipper_column() {
    // 40 orders at 50% shipper probability: both variants all but surely present
    let dataset = Generator::new(41, medium_counts()).generate().unwrap();
    let orders = dataset.table("Orders").unwrap();
    let shipper_idx = orders.table.column_index("Shipping_units_id").unwrap();

    let mut with_shipper = 0;
    let mut without_shipper = 0;
    for row in &orders.rows {
        let stmt = render_insert(orders.table, row).unwrap();
        if row[shipper_idx].is_null() {
            without_shipper += 1;
            assert!(!stmt.contains("Shipping_units_id"));
        } else {
            with_shipper += 1;
            assert!(stmt.contains("Shipping_units_id"));
        }
    }
    assert!(with_shipper > 0);
    assert!(without_shipper > 0);
}

#[test]
fn test_payments_one_per_order_in_order() {
    let counts = medium_counts();
    let dataset = Generator::new(13, counts).generate().unwrap();

    let payments = dataset.table("Payments").unwrap();
    assert_eq!(payments.rows.len(), counts.orders);
    for (i, row) in payments.rows.iter().enumerate() {
        assert_eq!(int(&row[0]), i as i64 + 1);
    }
}

#[test]
fn test_write_to_path_end_to_end() {
    let dataset = Generator::new(8, medium_counts()).generate().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed").join("mock_data.sql");

    let stats = writer::write_to_path(&dataset, &path, false).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.len() as u64, stats.bytes_written);
    assert_eq!(stats.statements, dataset.total_rows());
    assert!(content.starts_with("-- Vietnamese mock data"));
    assert!(content.contains("-- Expected user_id ranges:"));
    assert!(content.contains("INSERT INTO Users"));
    assert!(content.contains("INSERT INTO Reviews"));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let dataset = Generator::new(8, medium_counts()).generate().unwrap();
    let err = writer::write_to_path(&dataset, &blocker.join("mock_data.sql"), false).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to create output directory"));
}
