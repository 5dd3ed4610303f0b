//! Fixed table layout shared by the generator and the renderer.
//!
//! Table and column names are a compatibility contract with the consuming
//! schema; nothing here is validated against a live catalog. SERIAL primary
//! keys never appear as columns — the database assigns them in insertion
//! order, which is what the range planner predicts.

/// One column in a fixed table layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// Optional columns are elided from the INSERT when their value is NULL
    pub optional: bool,
}

impl Column {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
        }
    }
}

/// A destination table with its insertable columns in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    /// Position of a column by name, for positional row access
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

pub static USERS: Table = Table {
    name: "Users",
    columns: &[
        Column::new("username"),
        Column::new("password"),
        Column::new("full_name"),
        Column::new("email"),
        Column::new("phone"),
        Column::new("address"),
        Column::new("role"),
        Column::new("locked"),
    ],
};

pub static SELLERS: Table = Table {
    name: "Sellers",
    columns: &[
        Column::new("seller_id"),
        Column::new("store_name"),
        Column::new("description"),
        Column::new("qr_img_path"),
    ],
};

pub static SHIPPING_UNITS: Table = Table {
    name: "Shipping_units",
    columns: &[
        Column::new("shipping_units_id"),
        Column::new("company_name"),
    ],
};

pub static ADMINS: Table = Table {
    name: "Admins",
    columns: &[
        Column::new("admin_id"),
        Column::new("bank_account_number"),
        Column::new("bank_account_name"),
        Column::new("qr_img_path"),
    ],
};

pub static CATEGORIES: Table = Table {
    name: "Categories",
    columns: &[Column::new("name")],
};

pub static PRODUCTS: Table = Table {
    name: "Products",
    columns: &[
        Column::new("seller_id"),
        Column::new("name"),
        Column::new("description"),
        Column::new("img_path"),
        Column::new("price"),
        Column::new("stock"),
        Column::new("visible"),
    ],
};

pub static PRODUCT_CATEGORIES: Table = Table {
    name: "Product_categories",
    columns: &[Column::new("product_id"), Column::new("category_id")],
};

pub static CARTS: Table = Table {
    name: "Carts",
    columns: &[Column::new("user_id"), Column::new("seller_id")],
};

pub static CART_ITEMS: Table = Table {
    name: "Cart_items",
    columns: &[
        Column::new("cart_id"),
        Column::new("product_id"),
        Column::new("quantity"),
    ],
};

pub static ORDERS: Table = Table {
    name: "Orders",
    columns: &[
        Column::new("user_id"),
        Column::new("seller_id"),
        Column::optional("Shipping_units_id"),
        Column::new("tracking_number"),
        Column::new("shipping_status"),
        Column::new("estimated_delivery"),
        Column::new("order_date"),
        Column::new("status"),
    ],
};

pub static ORDER_ITEMS: Table = Table {
    name: "Order_items",
    columns: &[
        Column::new("order_id"),
        Column::new("product_id"),
        Column::new("quantity"),
        Column::new("price"),
    ],
};

pub static PAYMENTS: Table = Table {
    name: "Payments",
    columns: &[
        Column::new("order_id"),
        Column::new("payment_date"),
        Column::new("payment_method"),
        Column::new("amount"),
        Column::new("status"),
    ],
};

pub static REVIEWS: Table = Table {
    name: "Reviews",
    columns: &[
        Column::new("order_id"),
        Column::new("product_id"),
        Column::new("user_id"),
        Column::new("rating"),
        Column::new("comment"),
        Column::optional("img_path"),
    ],
};
