//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::replay::Bsor;
use crate::score::{AccuracyGrid, StatsSummary};

/// Format a score summary for console display
///
/// Returns a multi-line string with a boxed format.
pub fn format_stats_console(replay: &Bsor, summary: &StatsSummary) -> String {
    let mut output = String::new();
    let info = &replay.info;

    let title_content = format!(
        "  {} [{} {}]",
        info.song_name.bold(),
        format_colored_difficulty(&info.difficulty),
        info.mode
    );
    let content_width = info.song_name.chars().count() + info.difficulty.len() + info.mode.len() + 8;
    let border = "━".repeat(content_width.max(50));
    let border_dim = border.dimmed();

    let percent = match summary.score_percent {
        Some(p) => format_colored_percent(p),
        None => "-".dimmed().to_string(),
    };

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title_content);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  PLAYER : {}", info.player_name);
    let _ = writeln!(
        output,
        "  SCORE  : {} / {} {}",
        summary.score.bold(),
        summary.max_score,
        percent
    );
    let _ = writeln!(output, "  COMBO  : {}", summary.max_combo);
    let _ = writeln!(
        output,
        "  MISS   : {}/{}",
        summary.misses.left.red(),
        summary.misses.right.blue()
    );
    let _ = writeln!(
        output,
        "  BAD    : {}/{}",
        summary.bad_hits.left.red(),
        summary.bad_hits.right.blue()
    );
    let _ = writeln!(output, "  BOMB   : {}", summary.bomb_hits);
    let _ = writeln!(output, "  WALL   : {}", summary.wall_hits);
    if replay.info.failed() {
        let _ = writeln!(output, "  FAILED : {:.2}s", replay.info.fail_time.red());
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format the accuracy grid as three rows of four averages
pub fn format_accuracy_grid(grid: &AccuracyGrid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|avg| match avg {
                    Some(v) => format!("{:>6.1}", v),
                    None => format!("{:>6}", "-"),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format difficulty with color
fn format_colored_difficulty(difficulty: &str) -> String {
    match difficulty {
        "Easy" => difficulty.green().to_string(),
        "Normal" => difficulty.blue().to_string(),
        "Hard" => difficulty.yellow().to_string(),
        "Expert" => difficulty.red().to_string(),
        "ExpertPlus" => difficulty.purple().to_string(),
        _ => difficulty.to_string(),
    }
}

/// Format a score ratio as a colored percentage
fn format_colored_percent(ratio: f64) -> String {
    let text = format!("{:.2}%", ratio * 100.0);
    if ratio >= 0.95 {
        text.truecolor(255, 200, 0).bold().to_string()
    } else if ratio >= 0.90 {
        text.cyan().to_string()
    } else if ratio >= 0.80 {
        text.green().to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// Simple replay summary for logging
pub fn format_replay_summary(replay: &Bsor) -> String {
    let info = &replay.info;
    format!(
        "{} - {} {} by {} ({} notes, {} frames){}",
        info.song_name,
        info.difficulty,
        info.mode,
        info.player_name,
        replay.notes.len(),
        replay.frames.len(),
        if info.failed() { " [FAILED]" } else { "" }
    )
}
