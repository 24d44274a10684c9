use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use docs_content::QuickReference;
use docs_model::PhpVersion;
use docs_render::BuildReport;

use docs_cli::types::{Resolution, RouteRow, SpyOutcome};

pub fn print_build_report(report: &BuildReport) {
    println!("Output: {}", report.out_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("PHP"),
        header_cell("Page"),
        header_cell("File"),
        header_cell("Bytes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for page in &report.pages {
        let relative = page
            .path
            .strip_prefix(&report.out_dir)
            .unwrap_or(&page.path);
        table.add_row(vec![
            Cell::new(page.version),
            Cell::new(page.route.name()),
            dim_cell(relative.display()),
            Cell::new(page.bytes),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} pages", report.pages.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.total_bytes()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_routes(rows: &[RouteRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Path"),
        header_cell("Title"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.path),
            Cell::new(row.title),
            dim_cell(row.output),
        ]);
    }
    println!("{table}");
}

pub fn print_commands(version: PhpVersion, rows: &[QuickReference]) {
    println!("Quick reference for PHP {version}");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Command"), header_cell("Description")]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.command).fg(Color::Green),
            Cell::new(row.description),
        ]);
    }
    println!("{table}");
}

pub fn print_resolution(resolution: &Resolution) {
    println!("Route: {}", resolution.route);
    match resolution.version {
        Some(version) => println!("Version tree: PHP {version}"),
        None => println!("Version tree: default"),
    }
    println!("Canonical link: {}", resolution.href);
}

pub fn print_spy(outcome: &SpyOutcome) {
    println!("Effective position: {}", outcome.effective);
    match (outcome.index, outcome.offset) {
        (Some(index), Some(offset)) => {
            println!("Active section: #{index} (offset {offset})");
        }
        _ => println!("Active section: none"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
