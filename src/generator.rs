use chrono::NaiveDate;
use rand::Rng;

use crate::models::SalesRecord;

pub const DEFAULT_RECORD_COUNT: usize = 1000;
pub const DEFAULT_YEAR: i32 = 2023;

pub const DEPARTMENT_NAMES: [&str; 8] = [
    "Men's Clothing",
    "Women's Clothing",
    "Children's Clothing",
    "Accessories",
    "Footwear",
    "Outerwear",
    "Sportswear",
    "Undergarments",
];

/// Four-letter codes matched to DEPARTMENT_NAMES by index.
pub const DEPARTMENT_ABBREVIATIONS: [&str; 8] = [
    "MENS", "WOMN", "CHLD", "ACCS", "FOOT", "OUTR", "SPRT", "UNDR",
];

const SIZE_CODES: [&str; 5] = ["XS", "S", "M", "L", "XL"];
const COLOR_CODES: [&str; 8] = ["BK", "BL", "GR", "RD", "YL", "OR", "WT", "GY"];

pub const MANUFACTURING_SITES: [&str; 10] = [
    "US1", "US2", "US3", "UK1", "UK2", "UK3", "JP1", "JP2", "JP3", "CA1",
];

/// Build `count` synthetic sales orders spread across the given calendar
/// year. Pure function of the random source, so a seeded rng reproduces the
/// same collection exactly.
pub fn generate_sales_data<R: Rng>(rng: &mut R, count: usize, year: i32) -> Vec<SalesRecord> {
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let month = rng.gen_range(1..=12u32);
        // Day capped at 28 so every month is valid.
        let day = rng.gen_range(1..=28u32);
        let date_sold = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let dept_index = rng.gen_range(0..DEPARTMENT_NAMES.len());
        let product_id = format!(
            "{}-{}{:02}-{}-{}-{}",
            DEPARTMENT_ABBREVIATIONS[dept_index],
            dept_index + 1,
            rng.gen_range(1..=99u32),
            SIZE_CODES[rng.gen_range(0..SIZE_CODES.len())],
            COLOR_CODES[rng.gen_range(0..COLOR_CODES.len())],
            MANUFACTURING_SITES[rng.gen_range(0..MANUFACTURING_SITES.len())],
        );

        let quantity_sold = rng.gen_range(1..=100u32);
        let unit_price = rng.gen_range(25.0..300.0f64);
        let discount_pct = rng.gen_range(5..=20u32);
        let base_cost = unit_price * (1.0 - discount_pct as f64 / 100.0);
        let volume_discount = (quantity_sold as f64 * 0.1) as u32;

        records.push(SalesRecord {
            date_sold,
            department_name: DEPARTMENT_NAMES[dept_index].to_string(),
            product_id,
            quantity_sold,
            unit_price,
            base_cost,
            volume_discount,
        });
    }
    records
}
