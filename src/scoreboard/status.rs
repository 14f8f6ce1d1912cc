use crate::models::{GameStatus, Team, Winner};

/// Periods in regulation; anything beyond is overtime
pub const REGULATION_PERIODS: u32 = 4;

/// Status texts that mark a completed game, compared after trimming
pub const FINAL_MARKERS: [&str; 13] = [
    "Final",
    "3 - Final",
    "Final/OT",
    "Final/2OT",
    "Final/3OT",
    "Final/4OT",
    "Final/5OT",
    "Final/6OT",
    "Final/7OT",
    "Final/8OT",
    "Final/9OT",
    "Final/10OT",
    "FINAL",
];

pub fn is_final_marker(status_text: &str) -> bool {
    let text = status_text.trim();
    FINAL_MARKERS.iter().any(|marker| *marker == text)
}

/// Canonical status from explicit status text when it marks completion,
/// otherwise from the period count and the feed's activation flag.
///
/// An unknown activation flag (`None`) counts as active: a started game is
/// only closed by a final marker or an explicit inactive flag.
pub fn resolve_status(status_text: &str, period: u32, is_active: Option<bool>) -> GameStatus {
    if is_final_marker(status_text) {
        return GameStatus::Final;
    }
    match (period, is_active) {
        (0, _) => GameStatus::Scheduled,
        // Regulation or overtime in progress
        (_, Some(true) | None) => GameStatus::Live,
        (_, Some(false)) => GameStatus::Final,
    }
}

/// Only meaningful for final games; everything else stays undetermined
pub fn resolve_winner(status: GameStatus, home: &Team, away: &Team) -> Winner {
    if status != GameStatus::Final {
        return Winner::Undetermined;
    }
    match home.score.cmp(&away.score) {
        std::cmp::Ordering::Greater => Winner::Home,
        std::cmp::Ordering::Less => Winner::Away,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}

pub fn is_overtime(period: u32) -> bool {
    period > REGULATION_PERIODS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(score: u32) -> Team {
        Team {
            score,
            ..Default::default()
        }
    }

    #[test]
    fn test_final_markers() {
        assert!(is_final_marker("Final"));
        assert!(is_final_marker("3 - Final"));
        assert!(is_final_marker("Final/OT "));
        assert!(!is_final_marker("2nd Qtr"));
        assert!(!is_final_marker("Halftime"));
        assert!(!is_final_marker("7:30 pm ET"));
        assert!(!is_final_marker(""));
        assert!(!is_final_marker("Finalized"));
    }

    #[test]
    fn test_resolve_status() {
        assert_eq!(resolve_status("Final", 4, Some(false)), GameStatus::Final);
        // Explicit text wins over an active flag
        assert_eq!(resolve_status("Final", 4, Some(true)), GameStatus::Final);
        assert_eq!(resolve_status("7:30 pm ET", 0, Some(true)), GameStatus::Scheduled);
        assert_eq!(resolve_status("", 0, None), GameStatus::Scheduled);
        assert_eq!(resolve_status("2nd Qtr", 2, Some(true)), GameStatus::Live);
        assert_eq!(resolve_status("Halftime", 2, None), GameStatus::Live);
        assert_eq!(resolve_status("OT", 5, Some(true)), GameStatus::Live);
        assert!(is_overtime(5));
        // Closed game without a recognised marker defaults to final
        assert_eq!(resolve_status("Done", 4, Some(false)), GameStatus::Final);
    }

    #[test]
    fn test_resolve_winner() {
        assert_eq!(resolve_winner(GameStatus::Final, &team(110), &team(105)), Winner::Home);
        assert_eq!(resolve_winner(GameStatus::Final, &team(105), &team(110)), Winner::Away);
        assert_eq!(resolve_winner(GameStatus::Final, &team(105), &team(105)), Winner::Tie);
        assert_eq!(resolve_winner(GameStatus::Final, &team(0), &team(0)), Winner::Tie);
        assert_eq!(
            resolve_winner(GameStatus::Live, &team(50), &team(40)),
            Winner::Undetermined
        );
        assert_eq!(
            resolve_winner(GameStatus::Scheduled, &team(0), &team(0)),
            Winner::Undetermined
        );
    }
}
