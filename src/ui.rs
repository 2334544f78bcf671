use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use goalmath::celebration::Celebration;
use goalmath::streak::{milestone_message, progress_caption, progress_fraction};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.game;

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let green_bold = Style::default().patch(bold).fg(Color::Green);
        let red_bold = Style::default().patch(bold).fg(Color::Red);
        let dim_italic = Style::default()
            .add_modifier(Modifier::DIM)
            .add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(1)
            .constraints(
                [
                    Constraint::Length(2), // title
                    Constraint::Length(1), // tier badge
                    Constraint::Length(3), // progress gauge
                    Constraint::Length(2), // progress goals + caption
                    Constraint::Length(3), // problem
                    Constraint::Length(1), // answer input
                    Constraint::Length(2), // success / notice line
                    Constraint::Length(1), // score line
                    Constraint::Length(1), // per-division tally
                    Constraint::Min(0),    // spacer
                    Constraint::Length(1), // key help
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new(Span::styled("⚽ Oefensommen ⚽", green_bold))
            .alignment(Alignment::Center);
        title.render(chunks[0], buf);

        let badge = Paragraph::new(Line::from(vec![
            Span::raw("Je speelt nu in: "),
            Span::styled(game.tier.label(), green_bold),
        ]))
        .alignment(Alignment::Center);
        badge.render(chunks[1], buf);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(progress_fraction(game.streak))
            .label(Span::styled("⚽", bold));
        gauge.render(chunks[2], buf);

        // Goal markers under the bar, spread like the pitch-side boards.
        let goals = render_goal_markers(chunks[3].width);
        let goals_line = Paragraph::new(vec![
            Line::from(Span::styled(goals, dim_italic)),
            Line::from(Span::styled(
                progress_caption(game.streak),
                Style::default().fg(Color::Green),
            )),
        ])
        .alignment(Alignment::Center);
        goals_line.render(chunks[3], buf);

        let problem = Paragraph::new(Span::styled(game.problem.to_string(), bold))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        problem.render(chunks[4], buf);

        let input = Paragraph::new(Line::from(vec![
            Span::raw("Antwoord: "),
            Span::styled(&game.answer, bold),
            Span::styled("▎", Style::default().fg(Color::Green)),
        ]))
        .alignment(Alignment::Center);
        input.render(chunks[5], buf);

        let feedback = if game.show_success {
            Paragraph::new(Span::styled(milestone_message(game.streak), green_bold))
        } else if let Some(notice) = game.notice {
            Paragraph::new(Span::styled(notice, red_bold))
        } else {
            Paragraph::new("")
        };
        feedback
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[6], buf);

        let session = &game.session;
        let score_line = format!(
            "⚽ Score: {}   Reeks: {}   Sessie: {}/{} goed ({:.0}%)   Beste reeks: {}",
            game.score,
            game.streak,
            session.correct(),
            session.attempts(),
            session.accuracy(),
            session.best_streak(),
        );
        Paragraph::new(score_line)
            .alignment(Alignment::Center)
            .render(chunks[7], buf);

        let tally = session
            .per_tier()
            .iter()
            .map(|(tier, count)| format!("{} {}", tier.label(), count))
            .join("   ");
        if !tally.is_empty() {
            Paragraph::new(Span::styled(format!("Per divisie: {}", tally), dim_italic))
                .alignment(Alignment::Center)
                .render(chunks[8], buf);
        }

        Paragraph::new(Span::styled(
            "(Enter) controleer  (n) nieuwe som  (Tab) divisie  (Esc) stoppen",
            dim_italic,
        ))
        .alignment(Alignment::Center)
        .render(chunks[10], buf);

        if game.celebration.is_active {
            render_celebration(&game.celebration, area, buf);
        }
    }
}

/// The four landmark labels spread across the width of the progress bar.
fn render_goal_markers(width: u16) -> String {
    let labels = ["Start", "Hattrick", "Topscorer", "Messi"];
    let total: usize = labels.iter().map(|l| l.width()).sum();
    let width = width as usize;
    if width <= total + labels.len() {
        return labels.join(" ");
    }
    let gap = (width - total) / (labels.len() - 1);
    let pad = " ".repeat(gap.saturating_sub(1).max(1));
    labels.join(&pad)
}

/// Particle overlay drawn on top of everything else during a milestone.
fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::LightYellow,
    ];

    for particle in &celebration.particles {
        let x = particle.x as u16;
        let y = particle.y as u16;
        if x >= area.width || y >= area.height {
            continue;
        }

        let color = colors[particle.color_index % colors.len()];
        let fade = particle.fade();
        let style = if particle.is_letter {
            if fade > 0.4 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            }
        } else if fade > 0.7 {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else if fade > 0.3 {
            Style::default().fg(color)
        } else {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        };

        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(&particle.symbol.to_string());
            cell.set_style(style);
        }
    }
}
