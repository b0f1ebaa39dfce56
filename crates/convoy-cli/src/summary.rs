//! Per-stage summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use convoy_cli::PipelineRun;
use convoy_model::{ArtifactKind, Outcome};

pub fn print_summary(run: &PipelineRun, outcomes: &[Outcome]) {
    if run.is_empty() {
        return;
    }
    println!();
    println!("{}", summary_table(run, outcomes));
}

fn summary_table(run: &PipelineRun, outcomes: &[Outcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Input"),
        header_cell("Output"),
        header_cell("Count"),
        header_cell("Time (ms)"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    // The export stage reports twice, every other stage once.
    let mut remaining = outcomes.iter();
    for stage in &run.stages {
        let reported: Vec<&Outcome> = match stage.kind {
            ArtifactKind::Database => remaining.by_ref().take(2).collect(),
            _ => remaining.by_ref().take(1).collect(),
        };
        let outputs: Vec<String> = reported
            .iter()
            .map(|outcome| outcome.path.display().to_string())
            .collect();
        let counts: Vec<String> = reported
            .iter()
            .map(|outcome| outcome.count.to_string())
            .collect();
        table.add_row(vec![
            Cell::new(stage.kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stage.input.display()),
            Cell::new(outputs.join("\n")),
            Cell::new(counts.join("\n")),
            Cell::new(stage.duration.as_millis()),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
