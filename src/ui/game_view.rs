use crate::game::{GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::BoardView;

pub fn render(
    frame: &mut Frame,
    view: &BoardView,
    status: GameStatus,
    selected_column: usize,
    message: &Option<String>,
) {
    let (rows, _) = view.dimensions();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Length(3),                  // Scoreboard
            Constraint::Min(rows as u16 + 4),       // Board
            Constraint::Length(3),                  // Message
            Constraint::Length(3),                  // Controls
        ])
        .split(frame.area());

    render_header(frame, view, status, chunks[0]);
    render_scores(frame, view, chunks[1]);
    render_board(frame, view, selected_column, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Player1 => Color::Red,
        Player::Player2 => Color::Blue,
    }
}

fn render_header(
    frame: &mut Frame,
    view: &BoardView,
    status: GameStatus,
    area: ratatui::layout::Rect,
) {
    let color = match status {
        GameStatus::Won(winner) => player_color(winner),
        GameStatus::Tied => Color::White,
        GameStatus::AwaitingMove(_) => view.turn().map(player_color).unwrap_or(Color::White),
    };

    let header = Paragraph::new(view.status_text().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_scores(frame: &mut Frame, view: &BoardView, area: ratatui::layout::Rect) {
    let scores = view.scores();
    let mut spans = Vec::new();
    for player in [Player::Player1, Player::Player2] {
        spans.push(Span::styled(
            format!("Player {} ({})", player.number(), player.color_name()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {}   ", scores.wins(player))));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Wins"));
    frame.render_widget(widget, area);
}

fn render_board(
    frame: &mut Frame,
    view: &BoardView,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let (rows, cols) = view.dimensions();
    let mut lines = Vec::new();

    // Column headers; the selected one is highlighted
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{}╗", rule)));

    for row in 0..rows {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let (symbol, color) = match view.piece_at(row, col) {
                None => (" . ", Color::DarkGray),
                Some(player) => (" ● ", player_color(player)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", rule)));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter/1-9: Drop  |  U: Undo  |  N: New game  |  C: Clear wins  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
