//! Fixed value tables orders are drawn from.

pub const CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Toys",
];

pub const COUNTRIES: [&str; 8] = [
    "Saudi Arabia",
    "UAE",
    "Egypt",
    "Jordan",
    "Kuwait",
    "Bahrain",
    "Oman",
    "Qatar",
];

pub const CITIES: [&str; 8] = [
    "Riyadh",
    "Dubai",
    "Cairo",
    "Amman",
    "Kuwait City",
    "Manama",
    "Muscat",
    "Doha",
];

pub const PAYMENT_METHODS: [&str; 5] = ["Credit Card", "Debit Card", "Cash", "PayPal", "Apple Pay"];

pub const FIRST_NAMES: [&str; 8] = [
    "Ahmed", "Fatima", "Mohammed", "Aisha", "Ali", "Sara", "Omar", "Layla",
];

pub const LAST_NAMES: [&str; 6] = [
    "Al-Saud",
    "Hassan",
    "Ibrahim",
    "Abdullah",
    "Al-Rashid",
    "Khalil",
];

/// Customer numbers are drawn from `0..CUSTOMER_POOL`.
pub const CUSTOMER_POOL: u32 = 1000;
/// Product numbers are drawn from `0..PRODUCT_POOL`.
pub const PRODUCT_POOL: u32 = 500;
/// Product display names are `Product 0` .. `Product 99`.
pub const PRODUCT_NAME_POOL: u32 = 100;

pub const MAX_QUANTITY: u32 = 5;

/// Unit prices are whole tenths in this inclusive range (10.0 ..= 999.0).
pub const UNIT_PRICE_TENTHS: std::ops::RangeInclusive<u32> = 100..=9990;

pub(crate) fn pick<'a, R: rand::Rng>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table[rng.gen_range(0..table.len())]
}
