use super::load_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Segment;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_optional, colorize_tag};
use crate::utils::formatting::bold;
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::optional_clock_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { input, day, policy } = cmd {
        let chart = load_chart(input, *policy, cfg)?;

        let segments: Vec<Segment> = chart
            .segments()
            .into_iter()
            .filter(|s| day.as_ref().is_none_or(|d| &s.day == d))
            .collect();

        if segments.is_empty() {
            if let Some(d) = day {
                warning(format!("No day labelled '{d}' in the table."));
            } else {
                warning("No segments found.");
            }
            return Ok(());
        }

        header("Sleep time blocks");
        println!("{}", render_segments(&segments));
        println!("{}", bold(&format!("{} segment(s)", segments.len())));
    }
    Ok(())
}

fn render_segments(segments: &[Segment]) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", 10),
        Column::new("Slot", 4),
        Column::new("Tag", 3),
        Column::new("State", 12),
        Column::new("Event", 7),
        Column::new("From", 6),
        Column::new("To", 6),
        Column::new("Duration", 8),
    ]);

    for s in segments {
        table.add_row(vec![
            s.day.clone(),
            s.slot.to_string(),
            colorize_tag(s.tag),
            s.tag.describe().to_string(),
            colorize_optional(&optional_clock_label(s.event_seconds)),
            secs2readable(s.start, true),
            secs2readable(s.end, true),
            colorize_optional(&secs2readable(s.duration, false)),
        ]);
    }

    table.render()
}
