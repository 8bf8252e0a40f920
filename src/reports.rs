use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Quarter, SalesRecord};

const TOP_ORDER_COUNT: usize = 3;

/// Running totals for one department within a quarter.
///
/// `sales` and `profit` are true running sums. `profit_percentage` is
/// last-write-wins: each new record for the department overwrites it, so the
/// displayed figure reflects only the most recently processed record. That is
/// observed behavior to reproduce exactly, not an aggregate.
pub struct DepartmentTotals {
    pub name: String,
    pub sales: f64,
    pub profit: f64,
    pub profit_percentage: f64,
}

pub struct QuarterSummary {
    pub total_sales: f64,
    pub total_profit: f64,
    /// First-encountered order within the quarter.
    pub departments: Vec<DepartmentTotals>,
    /// At most three orders, stably sorted descending by profit.
    pub top_orders: Vec<SalesRecord>,
}

impl QuarterSummary {
    fn new() -> QuarterSummary {
        QuarterSummary {
            total_sales: 0.0,
            total_profit: 0.0,
            departments: Vec::new(),
            top_orders: Vec::new(),
        }
    }

    /// Overall profit percentage for the quarter. A zero-sales quarter uses a
    /// denominator of 1 so report generation always completes.
    pub fn profit_percentage(&self) -> f64 {
        let denominator = if self.total_sales == 0.0 {
            1.0
        } else {
            self.total_sales
        };
        self.total_profit / denominator * 100.0
    }
}

/// Aggregates keyed by quarter. Quarters exist only once a record lands in
/// them; BTreeMap iteration gives lexicographic label order, which for
/// Q1..Q4 equals chronological order.
pub struct QuarterlyReport {
    pub quarters: BTreeMap<Quarter, QuarterSummary>,
}

/// Single pass over the records: per-quarter and per-department running
/// totals, then a per-quarter top-3 ranking by profit.
pub fn build_report(records: &[SalesRecord]) -> QuarterlyReport {
    let mut quarters: BTreeMap<Quarter, QuarterSummary> = BTreeMap::new();

    for record in records {
        let total_sales = record.total_sales();
        let profit = record.profit();
        let profit_percentage = record.profit_percentage();

        let summary = quarters
            .entry(record.quarter())
            .or_insert_with(QuarterSummary::new);
        summary.total_sales += total_sales;
        summary.total_profit += profit;

        match summary
            .departments
            .iter_mut()
            .find(|d| d.name == record.department_name)
        {
            Some(dept) => {
                dept.sales += total_sales;
                dept.profit += profit;
                dept.profit_percentage = profit_percentage;
            }
            None => summary.departments.push(DepartmentTotals {
                name: record.department_name.clone(),
                sales: total_sales,
                profit,
                profit_percentage,
            }),
        }

        summary.top_orders.push(record.clone());
    }

    for summary in quarters.values_mut() {
        // Stable sort keeps ties in original relative order.
        summary
            .top_orders
            .sort_by(|a, b| b.profit().partial_cmp(&a.profit()).unwrap_or(Ordering::Equal));
        summary.top_orders.truncate(TOP_ORDER_COUNT);
    }

    QuarterlyReport { quarters }
}
