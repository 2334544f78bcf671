//! Streak-to-text mappings: milestone messages shown after a correct answer
//! and the caption/fill of the progress bar toward "voetballegende".

/// Streak length that fills the progress bar completely.
pub const LEGEND_STREAK: u32 = 10;

/// Celebration line for a correct answer at the given streak. Milestones get
/// their own message; everything else is a plain goal.
pub fn milestone_message(streak: u32) -> &'static str {
    match streak {
        3 => "Hattrick! 🎩⚽",
        5 => "Wat een topscorer ben jij! 🏆",
        10 => "Je bent een echte Messi! 🐐",
        _ => "GOAAAL! ⚽",
    }
}

/// Short word rendered by the celebration animation on milestone streaks.
pub fn milestone_word(streak: u32) -> Option<&'static str> {
    match streak {
        3 => Some("HATTRICK!"),
        5 => Some("TOPSCORER!"),
        10 => Some("MESSI!"),
        _ => None,
    }
}

/// Caption under the progress bar, bucketed by streak range.
pub fn progress_caption(streak: u32) -> &'static str {
    match streak {
        0 => "Begin je reeks!",
        1..=2 => "Goed bezig!",
        3..=4 => "Op weg naar een hattrick!",
        5..=7 => "Je bent in topvorm!",
        8..=9 => "Bijna een Messi!",
        _ => "Je bent een voetballegende! 🏆",
    }
}

/// Progress-bar fill in [0, 1]; full at `LEGEND_STREAK`.
pub fn progress_fraction(streak: u32) -> f64 {
    (streak as f64 / LEGEND_STREAK as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_messages_exact_matches() {
        assert_eq!(milestone_message(3), "Hattrick! 🎩⚽");
        assert_eq!(milestone_message(5), "Wat een topscorer ben jij! 🏆");
        assert_eq!(milestone_message(10), "Je bent een echte Messi! 🐐");
    }

    #[test]
    fn test_non_milestones_get_generic_goal() {
        for streak in [1, 2, 4, 6, 7, 8, 9, 11, 20] {
            assert_eq!(milestone_message(streak), "GOAAAL! ⚽");
        }
    }

    #[test]
    fn test_milestone_words() {
        assert_eq!(milestone_word(3), Some("HATTRICK!"));
        assert_eq!(milestone_word(5), Some("TOPSCORER!"));
        assert_eq!(milestone_word(10), Some("MESSI!"));
        assert_eq!(milestone_word(4), None);
        assert_eq!(milestone_word(0), None);
    }

    #[test]
    fn test_progress_caption_buckets() {
        assert_eq!(progress_caption(0), "Begin je reeks!");
        assert_eq!(progress_caption(1), "Goed bezig!");
        assert_eq!(progress_caption(2), "Goed bezig!");
        assert_eq!(progress_caption(3), "Op weg naar een hattrick!");
        assert_eq!(progress_caption(4), "Op weg naar een hattrick!");
        assert_eq!(progress_caption(5), "Je bent in topvorm!");
        assert_eq!(progress_caption(7), "Je bent in topvorm!");
        assert_eq!(progress_caption(8), "Bijna een Messi!");
        assert_eq!(progress_caption(9), "Bijna een Messi!");
        assert_eq!(progress_caption(10), "Je bent een voetballegende! 🏆");
        assert_eq!(progress_caption(25), "Je bent een voetballegende! 🏆");
    }

    #[test]
    fn test_progress_fraction_clamped() {
        assert_eq!(progress_fraction(0), 0.0);
        assert_eq!(progress_fraction(5), 0.5);
        assert_eq!(progress_fraction(10), 1.0);
        assert_eq!(progress_fraction(15), 1.0);
    }
}
