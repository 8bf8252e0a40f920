use chrono::{Datelike, NaiveDate};

/// One of the four 3-month calendar buckets a sale falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn from_month(month: u32) -> Quarter {
        match month {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single retail sales order. Immutable once built; monetary figures are
/// derived on demand rather than stored.
#[derive(Debug, Clone)]
pub struct SalesRecord {
    pub date_sold: NaiveDate,
    pub department_name: String,
    pub product_id: String,
    pub quantity_sold: u32,
    pub unit_price: f64,
    pub base_cost: f64,
    /// Informational only: 10% of quantity sold, rounded down. Never feeds
    /// a monetary calculation.
    pub volume_discount: u32,
}

impl SalesRecord {
    pub fn quarter(&self) -> Quarter {
        Quarter::from_month(self.date_sold.month())
    }

    pub fn total_sales(&self) -> f64 {
        self.quantity_sold as f64 * self.unit_price
    }

    pub fn total_cost(&self) -> f64 {
        self.quantity_sold as f64 * self.base_cost
    }

    pub fn profit(&self) -> f64 {
        self.total_sales() - self.total_cost()
    }

    pub fn profit_percentage(&self) -> f64 {
        self.profit() / self.total_sales() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: u32) -> SalesRecord {
        SalesRecord {
            date_sold: NaiveDate::from_ymd_opt(2023, month, 15).unwrap(),
            department_name: "Footwear".to_string(),
            product_id: "FOOT-501-M-BK-US1".to_string(),
            quantity_sold: 10,
            unit_price: 100.0,
            base_cost: 80.0,
            volume_discount: 1,
        }
    }

    #[test]
    fn test_quarter_from_month_covers_all_months() {
        let expected = [
            (1, Quarter::Q1),
            (2, Quarter::Q1),
            (3, Quarter::Q1),
            (4, Quarter::Q2),
            (5, Quarter::Q2),
            (6, Quarter::Q2),
            (7, Quarter::Q3),
            (8, Quarter::Q3),
            (9, Quarter::Q3),
            (10, Quarter::Q4),
            (11, Quarter::Q4),
            (12, Quarter::Q4),
        ];
        for (month, quarter) in expected {
            assert_eq!(Quarter::from_month(month), quarter, "month {month}");
            assert_eq!(record(month).quarter(), quarter);
        }
    }

    #[test]
    fn test_quarter_labels_sort_chronologically() {
        let mut quarters = [Quarter::Q3, Quarter::Q1, Quarter::Q4, Quarter::Q2];
        quarters.sort();
        let labels: Vec<&str> = quarters.iter().map(|q| q.label()).collect();
        assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn test_derived_figures() {
        let r = record(5);
        assert_eq!(r.total_sales(), 1000.0);
        assert_eq!(r.total_cost(), 800.0);
        assert_eq!(r.profit(), 200.0);
        assert!((r.profit_percentage() - 20.0).abs() < 1e-9);
    }
}
