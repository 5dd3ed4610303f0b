//! Entity generators for every table in the e-commerce schema.
//!
//! One routine per table, run in emission order. Cross-table references are
//! drawn either from the role range plan or from bookkeeping accumulated by
//! earlier stages, so the emitted statements stay FK-consistent without a
//! database round-trip.

use crate::fake::FakeData;
use crate::plan::{IdRange, RangePlan};
use crate::renderer::SqlValue;
use crate::schema::{self, Table};
use anyhow::{bail, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Fixed row counts for each entity class
#[derive(Debug, Clone, Copy)]
pub struct Counts {
    pub customers: usize,
    pub sellers: usize,
    pub admins: usize,
    pub shippers: usize,
    pub products: usize,
    pub orders: usize,
    /// Customers that hold shopping carts
    pub carts_max: usize,
}

impl Default for Counts {
    fn default() -> Self {
        Self {
            customers: 10_000,
            sellers: 2_000,
            admins: 50,
            shippers: 500,
            products: 15_000,
            orders: 20_000,
            carts_max: 5_000,
        }
    }
}

const SHIPPER_PROBABILITY: f64 = 0.5;
const REVIEW_IMAGE_PROBABILITY: f64 = 0.5;
const REVIEW_COVERAGE: f64 = 0.75;
const PRODUCT_VISIBLE_PROBABILITY: f64 = 0.75;

/// One generated row, positionally aligned with its table's columns
pub type Row = Vec<SqlValue>;

/// Generated rows for a single table
#[derive(Debug)]
pub struct TableData {
    pub table: &'static Table,
    pub rows: Vec<Row>,
}

/// The complete generated dataset, tables in emission order
#[derive(Debug)]
pub struct Dataset {
    pub tables: Vec<TableData>,
    pub plan: RangePlan,
}

impl Dataset {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    pub fn table(&self, name: &str) -> Option<&TableData> {
        self.tables.iter().find(|t| t.table.name == name)
    }
}

/// Cross-table state accumulated while tables are generated.
///
/// Later stages consume it: Cart_items is bounded by the number of Cart
/// rows, Reviews draw from the (order, product) pairs emitted as Order_items.
#[derive(Debug, Default)]
struct Bookkeeping {
    order_item_pairs: Vec<(i64, i64)>,
    carts: usize,
}

/// Main dataset generator
pub struct Generator {
    fake: FakeData<ChaCha8Rng>,
    counts: Counts,
}

impl Generator {
    pub fn new(seed: u64, counts: Counts) -> Self {
        Self {
            fake: FakeData::new(ChaCha8Rng::seed_from_u64(seed)),
            counts,
        }
    }

    /// Generate all tables in emission order.
    ///
    /// Fails only on misconfigured counts (a without-replacement sample
    /// larger than its pool); the default counts never trigger that.
    pub fn generate(&mut self) -> Result<Dataset> {
        let plan = RangePlan::for_roles(
            self.counts.customers,
            self.counts.sellers,
            self.counts.admins,
            self.counts.shippers,
        );
        let mut book = Bookkeeping::default();

        let tables = vec![
            self.generate_users(&plan),
            self.generate_sellers(&plan),
            self.generate_shipping_units(&plan),
            self.generate_admins(&plan),
            self.generate_categories(),
            self.generate_products(&plan),
            self.generate_product_categories()?,
            self.generate_carts(&plan, &mut book)?,
            self.generate_cart_items(&book)?,
            self.generate_orders(&plan),
            self.generate_order_items(&mut book)?,
            self.generate_payments(),
            self.generate_reviews(&plan, &book)?,
        ];

        Ok(Dataset { tables, plan })
    }

    /// Users are emitted customers first, then sellers, admins, shippers, so
    /// the SERIAL user_id assignment matches the range plan.
    fn generate_users(&mut self, plan: &RangePlan) -> TableData {
        let role_blocks = [
            (self.counts.customers, "customer", "", "password123"),
            (self.counts.sellers, "seller", "seller_", "seller123"),
            (self.counts.admins, "admin", "admin_", "admin123"),
            (self.counts.shippers, "shipper", "shipper_", "shipper123"),
        ];

        let mut rows = Vec::with_capacity(plan.total_users());
        for (count, role, prefix, password) in role_blocks {
            let password = sha256_hex(password);
            for _ in 0..count {
                rows.push(vec![
                    SqlValue::Str(format!("{}{}", prefix, self.fake.username())),
                    SqlValue::Str(password.clone()),
                    SqlValue::Str(self.fake.full_name()),
                    SqlValue::Str(self.fake.email()),
                    SqlValue::Str(self.fake.phone()),
                    SqlValue::Str(self.fake.address()),
                    SqlValue::Str(role.to_string()),
                    SqlValue::Bool(false),
                ]);
            }
        }

        TableData {
            table: &schema::USERS,
            rows,
        }
    }

    fn generate_sellers(&mut self, plan: &RangePlan) -> TableData {
        let rows = plan
            .sellers
            .iter()
            .map(|seller_id| {
                vec![
                    SqlValue::Int(seller_id),
                    SqlValue::Str(self.fake.store_name().to_string()),
                    SqlValue::Str(self.fake.store_description()),
                    SqlValue::Str(format!("/uploads/qr/seller_{}.png", seller_id)),
                ]
            })
            .collect();

        TableData {
            table: &schema::SELLERS,
            rows,
        }
    }

    fn generate_shipping_units(&mut self, plan: &RangePlan) -> TableData {
        let rows = plan
            .shippers
            .iter()
            .map(|shipper_id| {
                vec![
                    SqlValue::Int(shipper_id),
                    SqlValue::Str(self.fake.carrier_name().to_string()),
                ]
            })
            .collect();

        TableData {
            table: &schema::SHIPPING_UNITS,
            rows,
        }
    }

    fn generate_admins(&mut self, plan: &RangePlan) -> TableData {
        let rows = plan
            .admins
            .iter()
            .map(|admin_id| {
                vec![
                    SqlValue::Int(admin_id),
                    SqlValue::Str(self.fake.digits(12)),
                    SqlValue::Str(self.fake.full_name()),
                    SqlValue::Str(format!("/uploads/qr/admin_{}.png", admin_id)),
                ]
            })
            .collect();

        TableData {
            table: &schema::ADMINS,
            rows,
        }
    }

    fn generate_categories(&mut self) -> TableData {
        let rows = FakeData::<ChaCha8Rng>::categories()
            .iter()
            .map(|name| vec![SqlValue::Str(name.to_string())])
            .collect();

        TableData {
            table: &schema::CATEGORIES,
            rows,
        }
    }

    fn generate_products(&mut self, plan: &RangePlan) -> TableData {
        let rows = (0..self.counts.products)
            .map(|_| {
                vec![
                    SqlValue::Int(self.fake.id_in(&plan.sellers)),
                    SqlValue::Str(self.fake.product_name()),
                    SqlValue::Str(self.fake.product_description()),
                    SqlValue::Str(self.fake.product_img_path()),
                    SqlValue::Int(self.fake.int_range(50_000, 5_000_000)),
                    SqlValue::Int(self.fake.int_range(0, 100)),
                    SqlValue::Bool(self.fake.bool_with_probability(PRODUCT_VISIBLE_PROBABILITY)),
                ]
            })
            .collect();

        TableData {
            table: &schema::PRODUCTS,
            rows,
        }
    }

    /// Each product links to 1-3 distinct categories.
    fn generate_product_categories(&mut self) -> Result<TableData> {
        let categories = IdRange::new(1, FakeData::<ChaCha8Rng>::categories().len() as i64);
        let mut rows = Vec::new();
        for product_id in 1..=self.counts.products as i64 {
            let want = self.fake.int_range(1, 3) as usize;
            for category_id in self.sample_distinct(&categories, want, "categories")? {
                rows.push(vec![SqlValue::Int(product_id), SqlValue::Int(category_id)]);
            }
        }

        Ok(TableData {
            table: &schema::PRODUCT_CATEGORIES,
            rows,
        })
    }

    /// A subset of customers holds carts, each with 1-3 distinct sellers.
    /// The resulting row count bounds the Cart_items id range.
    fn generate_carts(&mut self, plan: &RangePlan, book: &mut Bookkeeping) -> Result<TableData> {
        let holders = self.sample_distinct(&plan.customers, self.counts.carts_max, "customers")?;
        let mut rows = Vec::new();
        for user_id in holders {
            let want = self.fake.int_range(1, 3) as usize;
            for seller_id in self.sample_distinct(&plan.sellers, want, "sellers")? {
                rows.push(vec![SqlValue::Int(user_id), SqlValue::Int(seller_id)]);
            }
        }
        book.carts = rows.len();

        Ok(TableData {
            table: &schema::CARTS,
            rows,
        })
    }

    fn generate_cart_items(&mut self, book: &Bookkeeping) -> Result<TableData> {
        let products = IdRange::new(1, self.counts.products as i64);
        let mut rows = Vec::new();
        for cart_id in 1..=book.carts as i64 {
            let want = self.fake.int_range(1, 5) as usize;
            for product_id in self.sample_distinct(&products, want, "products")? {
                rows.push(vec![
                    SqlValue::Int(cart_id),
                    SqlValue::Int(product_id),
                    SqlValue::Int(self.fake.int_range(1, 5)),
                ]);
            }
        }

        Ok(TableData {
            table: &schema::CART_ITEMS,
            rows,
        })
    }

    fn generate_orders(&mut self, plan: &RangePlan) -> TableData {
        let rows = (0..self.counts.orders)
            .map(|_| {
                let shipper = if self.fake.bool_with_probability(SHIPPER_PROBABILITY) {
                    SqlValue::Int(self.fake.id_in(&plan.shippers))
                } else {
                    SqlValue::Null
                };
                vec![
                    SqlValue::Int(self.fake.id_in(&plan.customers)),
                    SqlValue::Int(self.fake.id_in(&plan.sellers)),
                    shipper,
                    SqlValue::Str(self.fake.tracking_number()),
                    SqlValue::Str(self.fake.shipping_status().to_string()),
                    SqlValue::Str(self.fake.date_within_next_days(30)),
                    SqlValue::Str(self.fake.datetime_within_past_days(60)),
                    SqlValue::Str(self.fake.order_status().to_string()),
                ]
            })
            .collect();

        TableData {
            table: &schema::ORDERS,
            rows,
        }
    }

    /// Each order gets 1-5 distinct products; every emitted (order, product)
    /// pair is recorded for the Reviews stage.
    fn generate_order_items(&mut self, book: &mut Bookkeeping) -> Result<TableData> {
        let products = IdRange::new(1, self.counts.products as i64);
        let mut rows = Vec::new();
        for order_id in 1..=self.counts.orders as i64 {
            let want = self.fake.int_range(1, 5) as usize;
            for product_id in self.sample_distinct(&products, want, "products")? {
                rows.push(vec![
                    SqlValue::Int(order_id),
                    SqlValue::Int(product_id),
                    SqlValue::Int(self.fake.int_range(1, 3)),
                    SqlValue::Int(self.fake.int_range(50_000, 5_000_000)),
                ]);
                book.order_item_pairs.push((order_id, product_id));
            }
        }

        Ok(TableData {
            table: &schema::ORDER_ITEMS,
            rows,
        })
    }

    fn generate_payments(&mut self) -> TableData {
        let rows = (1..=self.counts.orders as i64)
            .map(|order_id| {
                vec![
                    SqlValue::Int(order_id),
                    SqlValue::Str(self.fake.datetime_within_past_days(60)),
                    SqlValue::Str(self.fake.payment_method().to_string()),
                    SqlValue::Int(self.fake.int_range(100_000, 10_000_000)),
                    SqlValue::Str(self.fake.payment_status().to_string()),
                ]
            })
            .collect();

        TableData {
            table: &schema::PAYMENTS,
            rows,
        }
    }

    /// Reviews cover round(75%) of the emitted order-item pairs, each pair
    /// reviewed at most once.
    fn generate_reviews(&mut self, plan: &RangePlan, book: &Bookkeeping) -> Result<TableData> {
        let pairs = &book.order_item_pairs;
        let want = (pairs.len() as f64 * REVIEW_COVERAGE).round() as usize;
        if want > pairs.len() {
            bail!(
                "cannot sample {} distinct order items from a pool of {}",
                want,
                pairs.len()
            );
        }

        let mut rows = Vec::with_capacity(want);
        for idx in self.fake.sample_indices(pairs.len(), want) {
            let (order_id, product_id) = pairs[idx];
            let img_path = if self.fake.bool_with_probability(REVIEW_IMAGE_PROBABILITY) {
                SqlValue::Str(self.fake.review_img_path())
            } else {
                SqlValue::Null
            };
            rows.push(vec![
                SqlValue::Int(order_id),
                SqlValue::Int(product_id),
                SqlValue::Int(self.fake.id_in(&plan.customers)),
                SqlValue::Int(self.fake.int_range(3, 5)),
                SqlValue::Str(self.fake.review_comment().to_string()),
                img_path,
            ]);
        }

        Ok(TableData {
            table: &schema::REVIEWS,
            rows,
        })
    }

    /// Draw `want` distinct ids from `range`, failing fast when the pool is
    /// too small. Hitting the failure means a count constant is
    /// misconfigured.
    fn sample_distinct(&mut self, range: &IdRange, want: usize, what: &str) -> Result<Vec<i64>> {
        let pool = range.len();
        if want > pool {
            bail!("cannot sample {} distinct {} from a pool of {}", want, what, pool);
        }
        Ok(self
            .fake
            .sample_indices(pool, want)
            .into_iter()
            .map(|i| range.start + i as i64)
            .collect())
    }
}

/// Hex digest stored in the password column
fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
