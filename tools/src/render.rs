//! Plain-text rendering of a `ViewModel` for the terminal.

use runlog_core::{
    action::ActionCategory,
    columns::Column,
    summary::{DescriptionBlock, PlatformTimesPanel, StrategyInfoPanel, NO_DESCRIPTION},
    view::{BreakdownView, CardsView, InfoCard, OptimizationView, ViewModel},
};
use std::fmt::{self, Write};

const BAR_WIDTH: usize = 40;
const CELL_WIDTH: usize = 12;

pub fn render(view: &ViewModel) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let s = &view.selection;

    writeln!(out, "=== RUN ===")?;
    writeln!(
        out,
        "  platform: {}  galaxy: {}  dimboost: {}  sacrifice: {}",
        s.platform, s.galaxy, s.dimboost, s.sacrifice
    )?;
    writeln!(out, "  strategy: {}", s.strategy)?;
    writeln!(out, "  file:     {}", s.run_path)?;
    writeln!(out)?;

    writeln!(out, "=== STRATEGIES (fastest pc first) ===")?;
    for option in &s.strategies {
        let marker = if option.value == s.strategy { '*' } else { ' ' };
        writeln!(out, " {marker} {}", option.label)?;
    }
    writeln!(out)?;

    if view.strategy_info_visible {
        render_strategy_info(&mut out, &view.strategy_info)?;
    }

    writeln!(out, "=== GAME INFO ===")?;
    render_cards(&mut out, &view.game_info)?;
    writeln!(out)?;

    render_actions(&mut out, view)?;

    if let Some(cards) = &view.strategy_search {
        writeln!(out, "=== STRATEGY SEARCH INFO ===")?;
        render_cards(&mut out, cards)?;
        writeln!(out)?;
    }
    if let Some(breakdown) = &view.time_breakdown {
        writeln!(out, "=== TIME BREAKDOWN ===")?;
        render_breakdown(&mut out, breakdown)?;
        writeln!(out)?;
    }
    if let Some(opt) = &view.optimization {
        render_optimization(&mut out, opt)?;
    }
    Ok(out)
}

fn render_strategy_info(out: &mut String, info: &StrategyInfoPanel) -> fmt::Result {
    writeln!(out, "=== STRATEGY INFO: {} ===", info.strategy)?;
    match &info.description {
        None => writeln!(out, "  {NO_DESCRIPTION}")?,
        Some(blocks) => {
            for block in blocks {
                match block {
                    DescriptionBlock::Paragraph(text) => writeln!(out, "  {text}")?,
                    DescriptionBlock::Break           => writeln!(out)?,
                }
            }
        }
    }
    for (name, panel) in [("PC", &info.pc), ("MOBILE", &info.mobile)] {
        writeln!(out, "  {name}:")?;
        match panel {
            PlatformTimesPanel::NoData { message } => writeln!(out, "    {message}")?,
            PlatformTimesPanel::Times { galaxies, total } => {
                for g in galaxies {
                    writeln!(out, "    Galaxy {}: {}", g.galaxy, g.time)?;
                }
                if let Some(total) = total {
                    writeln!(out, "    Total: {total}")?;
                }
            }
        }
    }
    writeln!(out)
}

fn render_cards(out: &mut String, cards: &CardsView) -> fmt::Result {
    match cards {
        CardsView::Cards(cards) => {
            for InfoCard { label, value, .. } in cards {
                writeln!(out, "  {label}: {value}")?;
            }
        }
        CardsView::Raw(text) => {
            for line in text.lines() {
                writeln!(out, "  {line}")?;
            }
        }
    }
    Ok(())
}

fn render_actions(out: &mut String, view: &ViewModel) -> fmt::Result {
    let columns: Vec<Column> = Column::ALL
        .into_iter()
        .filter(|c| view.columns.iter().any(|v| v.id == c.id() && v.visible))
        .collect();

    writeln!(out, "=== ACTIONS ===")?;
    if view.tracking.active {
        writeln!(out, "  tracking {}/{}", view.tracking.current_index, view.tracking.total)?;
    }
    let header: String = columns.iter().map(|c| format!("{:<CELL_WIDTH$}", c.name())).collect();
    writeln!(out, "    {header}")?;

    for row in &view.actions {
        if row.stack_boundary {
            writeln!(out, "    {}", "-".repeat(CELL_WIDTH * columns.len()))?;
        }
        let cursor = if row.highlighted { '>' } else { ' ' };
        let tag = match row.category {
            ActionCategory::Purchase  => ' ',
            ActionCategory::Tickspeed => 't',
            ActionCategory::Sacrifice => 's',
        };
        let cells: String = columns
            .iter()
            .map(|c| format!("{:<CELL_WIDTH$}", row.cell(*c)))
            .collect();
        writeln!(out, "  {cursor}{tag} {cells}")?;
    }
    writeln!(out)
}

fn render_optimization(out: &mut String, opt: &OptimizationView) -> fmt::Result {
    writeln!(out, "=== ITERATIVE OPTIMIZATION INFO ===")?;
    render_cards(out, &opt.cards)?;
    for it in &opt.iterations {
        writeln!(out, "  {} {}", if it.expanded { "v" } else { ">" }, it.title)?;
        if !it.expanded {
            continue;
        }
        for card in it.game_info.iter().chain(&it.strategy_search) {
            writeln!(out, "      {}: {}", card.label, card.value)?;
        }
        if let Some(breakdown) = &it.time_breakdown {
            render_breakdown(out, breakdown)?;
        }
    }
    writeln!(out)
}

fn render_breakdown(out: &mut String, breakdown: &BreakdownView) -> fmt::Result {
    let entries = match breakdown {
        BreakdownView::NoData(message) => return writeln!(out, "  {message}"),
        BreakdownView::Entries(entries) => entries,
    };
    for e in entries {
        let filled = (e.percent.min(100) as usize * BAR_WIDTH) / 100;
        writeln!(
            out,
            "  {:<10} {} ({}%) [{}{}]",
            e.category,
            e.time,
            e.percent,
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlog_core::{
        columns::ColumnVisibility,
        document::LogDocument,
        selection::{PersistedSelection, Selection},
        state::{AppState, LoadedRun},
        view::{project, NO_TIME_BREAKDOWN},
    };

    fn view_of(text: &str) -> ViewModel {
        let strategies = vec!["Optimized".to_string()];
        let selection = Selection::restore(&PersistedSelection::default(), &strategies, "Optimized");
        let mut state = AppState::new(strategies, selection, ColumnVisibility::default());
        state.run = Some(LoadedRun {
            path:     "run.txt".into(),
            text:     text.into(),
            document: LogDocument::parse(text),
        });
        project(&state)
    }

    #[test]
    fn renders_sections_and_empty_breakdown() {
        let text = "=== GAME INFO ===\n{\"game_time\": \"00:01.000\"}\n=== END GAME INFO ===\n\
                    === STRATEGY SEARCH INFO ===\n{\"time_breakdown\": {}}\n=== END STRATEGY SEARCH INFO ===";
        let out = render(&view_of(text)).unwrap();
        assert!(out.contains("Game time: 00:01.000"));
        assert!(out.contains("=== TIME BREAKDOWN ==="));
        assert!(out.contains(NO_TIME_BREAKDOWN));
    }

    #[test]
    fn renders_breakdown_bars() {
        let text = "=== STRATEGY SEARCH INFO ===\n{\"time_breakdown\": {\"tick\": \"00:01.000\"}}\n=== END STRATEGY SEARCH INFO ===";
        let out = render(&view_of(text)).unwrap();
        assert!(out.contains(&format!("tick       00:01.000 (100%) [{}]", "#".repeat(BAR_WIDTH))));
    }
}
