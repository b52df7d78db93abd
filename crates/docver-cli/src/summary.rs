use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use docver_cli::git::DiscoveredBranches;
use docver_cli::types::InjectResult;
use docver_model::SwitcherConfig;

pub fn print_inject_summary(result: &InjectResult) {
    println!("Release: {}", result.release);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Page"),
        header_cell("Status"),
        header_cell("Bytes added"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for page in &result.pages {
        let status = match &page.error {
            None => Cell::new("mounted").fg(Color::Green),
            Some(error) => Cell::new(error).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(page.path.display()),
            status,
            Cell::new(page.bytes_added),
        ]);
    }
    println!("{table}");
    let failed = result.failed();
    if failed > 0 {
        println!("{failed} of {} pages failed", result.pages.len());
    }
}

pub fn print_branches(discovered: &DiscoveredBranches, config: &SwitcherConfig) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Branch"), header_cell("Link")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, name) in discovered.branches.iter().enumerate() {
        let mut branch = Cell::new(name);
        if name == discovered.default_branch {
            branch = branch.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(index + 1),
            branch,
            Cell::new(config.branch_url(name)),
        ]);
    }
    println!("{table}");
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
