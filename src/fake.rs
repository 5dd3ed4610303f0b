//! Localized fake data helpers.
//!
//! Field values come from static Vietnamese vocabularies or uniform
//! numeric/date ranges; all randomness flows through the caller-supplied RNG
//! so a seeded run draws the same values.

use crate::plan::IdRange;
use chrono::{Duration, Local};
use rand::Rng;

/// Vietnamese family names
const FAMILY_NAMES: &[&str] = &[
    "Nguyễn", "Trần", "Lê", "Phạm", "Hoàng", "Huỳnh", "Phan", "Vũ", "Võ", "Đặng", "Bùi", "Đỗ",
    "Hồ", "Ngô", "Dương", "Lý",
];

/// Vietnamese middle names
const MIDDLE_NAMES: &[&str] = &[
    "Văn", "Thị", "Đức", "Minh", "Ngọc", "Thu", "Quang", "Hữu", "Thanh", "Xuân", "Kim", "Anh",
];

/// Vietnamese given names
const GIVEN_NAMES: &[&str] = &[
    "An", "Bình", "Châu", "Dũng", "Giang", "Hà", "Hải", "Hương", "Khánh", "Lan", "Linh", "Long",
    "Mai", "Nam", "Ngân", "Phúc", "Quân", "Sơn", "Thảo", "Trang", "Trung", "Tuấn", "Việt", "Yến",
];

/// ASCII name parts for usernames and email local parts
const USERNAME_WORDS: &[&str] = &[
    "nguyen", "tran", "le", "pham", "hoang", "phan", "vu", "dang", "bui", "minh", "tuan", "huong",
    "thanh", "phuong", "quang", "trang", "dung", "hai", "lan", "son", "viet", "ngoc",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// Street names for address generation
const STREETS: &[&str] = &[
    "Đường Lê Lợi",
    "Đường Trần Hưng Đạo",
    "Đường Nguyễn Huệ",
    "Đường Hai Bà Trưng",
    "Đường Lý Thường Kiệt",
    "Đường Điện Biên Phủ",
    "Đường Cách Mạng Tháng Tám",
    "Đường Nguyễn Trãi",
    "Đường Phan Đình Phùng",
    "Đường Võ Thị Sáu",
];

const DISTRICTS: &[&str] = &[
    "Quận 1",
    "Quận 3",
    "Quận 7",
    "Quận Ba Đình",
    "Quận Hoàn Kiếm",
    "Quận Đống Đa",
    "Quận Hải Châu",
    "Quận Ninh Kiều",
    "Huyện Củ Chi",
    "Quận Tân Bình",
];

const CITIES: &[&str] = &[
    "Hà Nội",
    "TP. Hồ Chí Minh",
    "Đà Nẵng",
    "Hải Phòng",
    "Cần Thơ",
    "Huế",
    "Nha Trang",
    "Vũng Tàu",
    "Biên Hòa",
    "Buôn Ma Thuột",
];

/// Product category names
const CATEGORIES: &[&str] = &[
    "Thời trang nam",
    "Thời trang nữ",
    "Điện thoại & Phụ kiện",
    "Máy tính & Laptop",
    "Gia dụng & Đời sống",
    "Sách & Văn phòng phẩm",
    "Thể thao & Du lịch",
    "Mẹ & Bé",
    "Làm đẹp & Sức khỏe",
    "Thực phẩm & Đồ uống",
    "Xe máy & Ô tô",
    "Nhà cửa & Đời sống",
    "Điện tử & Công nghệ",
    "Giày dép",
    "Túi xách & Ví",
    "Đồng hồ & Trang sức",
    "Đồ chơi & Trò chơi",
    "Pet & Pet Care",
];

/// Product base names; a numeric suffix keeps listings distinguishable
const PRODUCT_NAMES: &[&str] = &[
    "Áo thun cotton cao cấp",
    "Quần jeans skinny",
    "Giày sneaker thể thao",
    "Túi xách da thật",
    "Đồng hồ thông minh",
    "Điện thoại smartphone",
    "Laptop gaming",
    "Máy ảnh DSLR",
    "Tai nghe bluetooth",
    "Loa không dây",
    "Bình giữ nhiệt inox",
    "Nồi cơm điện",
    "Máy xay sinh tố",
    "Bàn làm việc gỗ",
    "Ghế văn phòng ergonomic",
    "Sách tiểu thuyết hay",
    "Vở học sinh",
    "Bút bi cao cấp",
    "Ba lô du lịch",
    "Giày thể thao chạy bộ",
    "Áo khoác mùa đông",
    "Váy đầm công sở",
    "Kem dưỡng da mặt",
    "Serum vitamin C",
    "Sữa rửa mặt",
    "Son môi matte",
    "Thực phẩm chức năng",
    "Trà xanh organic",
    "Cà phê rang xay",
    "Bánh kẹo nhập khẩu",
    "Xe đạp thể thao",
    "Kính râm thời trang",
    "Dép sandal nữ",
    "Dép tông nam",
];

const STORE_NAMES: &[&str] = &[
    "Shop Thời Trang Hà Nội",
    "Cửa hàng Điện tử Sài Gòn",
    "Siêu thị Mini Mart",
    "Shop Giày Dép Đẹp",
    "Cửa hàng Mỹ phẩm ABC",
    "Shop Đồng hồ Luxury",
    "Thời trang Việt Nam",
    "Điện máy Xanh Mini",
    "Shop Phụ kiện Tech",
    "Cửa hàng Sách Văn",
    "Shop Thể thao 24h",
    "Mẹ và Bé Store",
    "Gia dụng Gia đình",
    "Shop Coffee & Tea",
    "Xe máy Phụ tùng",
];

/// Shipping carrier names
const CARRIERS: &[&str] = &[
    "Vận chuyển Nhanh Express",
    "Giao hàng Tiết kiệm",
    "Viettel Post",
    "VNPost Express",
    "J&T Express Vietnam",
    "GHN - Giao hàng Nhanh",
    "BEST Express VN",
    "Kerry Express",
    "Ninja Van Vietnam",
    "Ahamove Logistics",
];

const REVIEW_COMMENTS: &[&str] = &[
    "Sản phẩm rất tốt, chất lượng như mô tả",
    "Giao hàng nhanh, đóng gói cẩn thận",
    "Giá cả hợp lý, sẽ mua lại lần sau",
    "Chất lượng ổn, đúng như hình ảnh",
    "Shop phục vụ tận tình, sản phẩm đẹp",
    "Hàng chính hãng, rất hài lòng",
    "Đóng gói kỹ càng, giao hàng đúng hẹn",
    "Sản phẩm đúng mô tả, chất lượng tốt",
    "Giá rẻ mà chất lượng cao, recommend",
    "Shop uy tín, sẽ ủng hộ dài dài",
];

/// Store specialties used in seller descriptions
const SPECIALTIES: &[&str] = &["thời trang", "điện tử", "gia dụng", "thực phẩm", "phụ kiện"];

/// Import origins used in product descriptions
const ORIGINS: &[&str] = &["Nhật Bản", "Hàn Quốc", "Thái Lan", "Trung Quốc", "Việt Nam"];

const ORDER_STATUSES: &[&str] = &["pending", "confirmed", "shipped", "delivered", "cancelled"];

const SHIPPING_STATUSES: &[&str] = &["preparing", "in_transit", "delivered", "returned"];

const PAYMENT_METHODS: &[&str] = &["cod", "bank_transfer"];

const PAYMENT_STATUSES: &[&str] = &["pending", "completed", "failed", "refunded"];

/// Fake data generator over a caller-supplied RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.random_range(0..items.len())]
    }

    /// Generate a full Vietnamese name (family, middle, given)
    pub fn full_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(FAMILY_NAMES),
            self.pick(MIDDLE_NAMES),
            self.pick(GIVEN_NAMES)
        )
    }

    /// Generate an ASCII username with a numeric suffix
    pub fn username(&mut self) -> String {
        let first = self.pick(USERNAME_WORDS);
        let second = self.pick(USERNAME_WORDS);
        let num: u32 = self.rng.random_range(1..1000);
        format!("{}{}{}", first, second, num)
    }

    /// Generate an email address
    pub fn email(&mut self) -> String {
        let first = self.pick(USERNAME_WORDS);
        let second = self.pick(USERNAME_WORDS);
        let num: u32 = self.rng.random_range(1..1000);
        format!("{}.{}{}@{}", first, second, num, self.pick(EMAIL_DOMAINS))
    }

    /// Generate a Vietnamese mobile number
    pub fn phone(&mut self) -> String {
        let prefix = ["090", "091", "093", "096", "097", "098", "032", "070", "086"]
            [self.rng.random_range(0..9)];
        format!("{}{}", prefix, self.digits(7))
    }

    /// Generate a street address
    pub fn address(&mut self) -> String {
        let number: u32 = self.rng.random_range(1..500);
        format!(
            "Số {} {}, {}, {}",
            number,
            self.pick(STREETS),
            self.pick(DISTRICTS),
            self.pick(CITIES)
        )
    }

    pub fn store_name(&mut self) -> &'static str {
        self.pick(STORE_NAMES)
    }

    pub fn store_description(&mut self) -> String {
        format!(
            "Cửa hàng chuyên bán {} chất lượng cao với giá cả hợp lý. Cam kết hàng chính hãng 100%.",
            self.pick(SPECIALTIES)
        )
    }

    pub fn carrier_name(&mut self) -> &'static str {
        self.pick(CARRIERS)
    }

    pub fn product_name(&mut self) -> String {
        let num: u32 = self.rng.random_range(1..1000);
        format!("{} #{}", self.pick(PRODUCT_NAMES), num)
    }

    pub fn product_description(&mut self) -> String {
        let months = self.int_range(6, 24);
        format!(
            "Sản phẩm chất lượng cao, được nhập khẩu từ {}. Bảo hành {} tháng.",
            self.pick(ORIGINS),
            months
        )
    }

    pub fn product_img_path(&mut self) -> String {
        format!("/uploads/products/product_{}.jpg", self.rng.random_range(1..1_000_000))
    }

    pub fn review_img_path(&mut self) -> String {
        format!("/uploads/reviews/review_{}.jpg", self.rng.random_range(1..1_000_000))
    }

    pub fn review_comment(&mut self) -> &'static str {
        self.pick(REVIEW_COMMENTS)
    }

    pub fn order_status(&mut self) -> &'static str {
        self.pick(ORDER_STATUSES)
    }

    pub fn shipping_status(&mut self) -> &'static str {
        self.pick(SHIPPING_STATUSES)
    }

    pub fn payment_method(&mut self) -> &'static str {
        self.pick(PAYMENT_METHODS)
    }

    pub fn payment_status(&mut self) -> &'static str {
        self.pick(PAYMENT_STATUSES)
    }

    /// Generate a tracking number ("VN" + 9 digits)
    pub fn tracking_number(&mut self) -> String {
        format!("VN{}", self.rng.random_range(100_000_000u64..1_000_000_000))
    }

    /// Generate a string of `count` random digits
    pub fn digits(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }

    /// Generate a random integer in the inclusive range
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Generate a boolean with the given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    /// Pick one id uniformly from a planned range
    pub fn id_in(&mut self, range: &IdRange) -> i64 {
        self.rng.random_range(range.start..=range.end)
    }

    /// Sample `amount` distinct indices from `0..len`.
    ///
    /// Panics if `amount > len`; callers check the pool size first.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount).into_vec()
    }

    /// Generate a "YYYY-MM-DD HH:MM:SS" timestamp within the past `days` days
    pub fn datetime_within_past_days(&mut self, days: i64) -> String {
        let minutes = self.rng.random_range(0..days * 24 * 60);
        (Local::now() - Duration::minutes(minutes))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    /// Generate a "YYYY-MM-DD" date within the next `days` days
    pub fn date_within_next_days(&mut self, days: i64) -> String {
        let offset = self.rng.random_range(0..=days);
        (Local::now() + Duration::days(offset))
            .format("%Y-%m-%d")
            .to_string()
    }

    /// The full category vocabulary; Categories gets one row per entry
    pub fn categories() -> &'static [&'static str] {
        CATEGORIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let mut fake2 = FakeData::new(ChaCha8Rng::seed_from_u64(42));

        assert_eq!(fake1.full_name(), fake2.full_name());
        assert_eq!(fake1.username(), fake2.username());
        assert_eq!(fake1.tracking_number(), fake2.tracking_number());
    }

    #[test]
    fn test_email_shape() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let email = fake.email();
        assert!(email.contains('@'));
        assert!(EMAIL_DOMAINS.iter().any(|d| email.ends_with(d)));
    }

    #[test]
    fn test_phone_fits_column() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        for _ in 0..100 {
            let phone = fake.phone();
            assert_eq!(phone.len(), 10);
            assert!(phone.starts_with('0'));
        }
    }

    #[test]
    fn test_digits_length_and_content() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let account = fake.digits(12);
        assert_eq!(account.len(), 12);
        assert!(account.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_tracking_number_shape() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        for _ in 0..100 {
            let tracking = fake.tracking_number();
            assert!(tracking.starts_with("VN"));
            assert_eq!(tracking.len(), 11);
        }
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let picked = fake.sample_indices(10, 10);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
    }

    #[test]
    fn test_id_in_range() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let range = IdRange::new(4, 5);
        for _ in 0..100 {
            assert!(range.contains(fake.id_in(&range)));
        }
    }
}
