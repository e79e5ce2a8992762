//! Colorful console output for draw events.
//!
//! Provides a `tracing` layer that renders the pipeline's lifecycle events as
//! one-line summaries. Initialized by [`crate::draw`] when the `console`
//! feature is enabled.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. When
/// `RUST_LOG` is set it replaces the default [`DEFAULT_FILTER`].
pub fn init() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(filter())
            .with(DrawConsoleLayer)
            .try_init();
    });
}

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "teamdraw_solver=info,teamdraw=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// A tracing layer that formats draw events with colors.
pub struct DrawConsoleLayer;

impl<S: Subscriber> Layer<S> for DrawConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("teamdraw") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    seed: Option<u64>,
    veterans: Option<u64>,
    rookies: Option<u64>,
    others: Option<u64>,
    rules: Option<u64>,
    placed: Option<u64>,
    swaps: Option<u64>,
    rebuilds: Option<u64>,
    violations: Option<u64>,
    duration_ms: Option<u64>,
    room_size: Option<u64>,
    male_rooms: Option<u64>,
    female_rooms: Option<u64>,
    score: Option<String>,
    rule: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "score" => self.score = Some(s),
            "rule" => self.rule = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "seed" => &mut self.seed,
            "veterans" => &mut self.veterans,
            "rookies" => &mut self.rookies,
            "others" => &mut self.others,
            "rules" => &mut self.rules,
            "placed" => &mut self.placed,
            "swaps" => &mut self.swaps,
            "rebuilds" => &mut self.rebuilds,
            "violations" => &mut self.violations,
            "duration_ms" => &mut self.duration_ms,
            "room_size" => &mut self.room_size,
            "male_rooms" => &mut self.male_rooms,
            "female_rooms" => &mut self.female_rooms,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "rule" => self.rule = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let n = |value: Option<u64>| value.unwrap_or(0);
    match v.event.as_deref().unwrap_or("") {
        "draw_start" => format!(
            "{} Drawing │ seed {} │ {} veterans │ {} rookies │ {} others │ {} rules",
            "▶".bright_green().bold(),
            n(v.seed).bright_yellow(),
            n(v.veterans).bright_yellow(),
            n(v.rookies).bright_yellow(),
            n(v.others).bright_yellow(),
            n(v.rules).bright_yellow(),
        ),
        "distribute_end" => format!(
            "{} Distributed │ {} people",
            "◆".bright_blue(),
            n(v.placed).white().bold(),
        ),
        "repair_end" => {
            let score = v.score.as_deref().unwrap_or("N/A");
            let status = if n(v.violations) == 0 {
                "SATISFIED".bright_green().bold().to_string()
            } else {
                format!("{} UNSATISFIED", n(v.violations))
                    .bright_red()
                    .bold()
                    .to_string()
            };
            format!(
                "{} Repaired │ {} swaps │ {} rebuilds │ {} │ {}",
                "◆".bright_blue(),
                n(v.swaps).white(),
                n(v.rebuilds).white(),
                score.bright_magenta(),
                status,
            )
        }
        "draw_end" => format!(
            "{} Draw complete │ seed {} │ {}ms",
            "■".bright_cyan().bold(),
            n(v.seed).bright_yellow(),
            n(v.duration_ms).yellow(),
        ),
        "rooms_packed" => format!(
            "{} Rooms │ size {} │ {} male │ {} female",
            "■".bright_cyan().bold(),
            n(v.room_size).white(),
            n(v.male_rooms).bright_yellow(),
            n(v.female_rooms).bright_yellow(),
        ),
        "rule_unsatisfied" if level == Level::WARN => format!(
            "{} Unsatisfied │ {}",
            "!".bright_red().bold(),
            v.rule.as_deref().unwrap_or("?").red(),
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_known_events() {
        let visitor = EventVisitor {
            event: Some("draw_end".into()),
            seed: Some(42),
            duration_ms: Some(3),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::INFO);
        assert!(line.contains("Draw complete"));
        assert!(line.contains("42"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("swap".into()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert!(filter.to_string().contains("teamdraw_solver=info"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
