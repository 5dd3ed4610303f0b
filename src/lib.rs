//! FK-consistent Vietnamese e-commerce seed data, rendered as SQL INSERT
//! statements.
//!
//! The generator predicts the ids that SERIAL columns will assign instead of
//! querying a database: each table's ids start at 1 and follow insertion
//! order, so every cross-table reference can be computed from planned role
//! ranges and from rows emitted earlier in the same run.
//!
//! # Example
//!
//! ```rust
//! use shop_seeder::generator::{Counts, Generator};
//! use shop_seeder::writer;
//!
//! let counts = Counts {
//!     customers: 20,
//!     sellers: 5,
//!     admins: 2,
//!     shippers: 2,
//!     products: 30,
//!     orders: 10,
//!     carts_max: 8,
//! };
//! let dataset = Generator::new(42, counts).generate().unwrap();
//!
//! let mut buf = Vec::new();
//! writer::write_dataset(&dataset, &mut buf, false).unwrap();
//! assert!(String::from_utf8(buf).unwrap().contains("INSERT INTO Users"));
//! ```

pub mod fake;
pub mod generator;
pub mod plan;
pub mod renderer;
pub mod schema;
pub mod writer;

pub use generator::{Counts, Dataset, Generator, Row, TableData};
pub use plan::{IdRange, RangePlan};
pub use renderer::SqlValue;
pub use writer::WriteStats;
