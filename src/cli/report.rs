use std::io::{self, Write};

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ColumnConstraint, Table, Width};

use crate::error::Result;
use crate::fmt::{money, pct};
use crate::generator::generate_sales_data;
use crate::models::SalesRecord;
use crate::reports::{build_report, QuarterSummary, QuarterlyReport};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate the sales collection, aggregate it, and print the report.
pub fn run(seed: Option<u64>, records: usize, year: i32) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let sales = generate_sales_data(&mut rng, records, year);
    let report = build_report(&sales);

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report)
}

/// Render the report into any sink. Pure with respect to the report data:
/// the same input renders to the same bytes every time.
pub fn write_report<W: Write>(w: &mut W, report: &QuarterlyReport) -> Result<()> {
    write!(w, "{}", render_report(report))?;
    Ok(())
}

pub fn render_report(report: &QuarterlyReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Quarterly Sales Report".bold()));
    out.push_str("----------------------\n");

    for (quarter, summary) in &report.quarters {
        let profit = money(summary.total_profit);
        let profit = if summary.total_profit >= 0.0 {
            profit.green().to_string()
        } else {
            profit.red().to_string()
        };
        out.push_str(&format!(
            "{}: Sales: {}, Profit: {}, Profit Percentage: {}%\n",
            quarter.label().bold(),
            money(summary.total_sales),
            profit,
            pct(summary.profit_percentage()),
        ));

        out.push_str("By Department:\n");
        out.push_str(&format!("{}\n\n", department_table(summary)));

        out.push_str("Top 3 Sales Orders:\n");
        out.push_str(&format!("{}\n\n", orders_table(&summary.top_orders)));
    }

    out
}

fn department_table(summary: &QuarterSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Sales"),
        header_cell("Profit"),
        header_cell("Profit Percentage"),
    ]);
    // Field widths per report layout; +2 covers the cell padding that
    // comfy-table counts inside an absolute column width.
    table.set_constraints(vec![
        ColumnConstraint::Absolute(Width::Fixed(22 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(15 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(15 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(18 + 2)),
    ]);

    for dept in &summary.departments {
        table.add_row(vec![
            Cell::new(&dept.name),
            number_cell(money(dept.sales)),
            number_cell(money(dept.profit)),
            number_cell(pct(dept.profit_percentage)),
        ]);
    }
    table
}

fn orders_table(orders: &[SalesRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        header_cell("Product ID"),
        header_cell("Quantity Sold"),
        header_cell("Unit Price"),
        header_cell("Total Sales"),
        header_cell("Profit"),
        header_cell("Profit %"),
    ]);
    table.set_constraints(vec![
        ColumnConstraint::Absolute(Width::Fixed(22 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(14 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(12 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(14 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(15 + 2)),
        ColumnConstraint::Absolute(Width::Fixed(14 + 2)),
    ]);

    for order in orders {
        table.add_row(vec![
            Cell::new(&order.product_id),
            number_cell(order.quantity_sold.to_string()),
            number_cell(money(order.unit_price)),
            number_cell(money(order.total_sales())),
            number_cell(money(order.profit())),
            number_cell(pct(order.profit_percentage())),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).set_alignment(CellAlignment::Center)
}

fn number_cell(value: String) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
