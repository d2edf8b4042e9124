#![allow(
    // Terminal cell math: the canvas is a few hundred units and terminals a few hundred cells
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use crate::app::{App, RenderSymbol};
use crate::components::{GameState, Machine, Phase};
use crate::symbols::{Position, Size};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

// Width of the info panel beside the reels
const INFO_WIDTH: u16 = 28;

pub fn render(f: &mut Frame, app: &App) {
    let layout = main_layout(f.area());
    let board = layout[0];

    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" SLOTS ")
            .title_alignment(Alignment::Center),
        board,
    );

    let inner = board_area(f.area());
    render_reels(f, app, inner);
    render_info(f, app, layout[1]);
}

fn main_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_WIDTH)])
        .split(area)
}

/// Terminal rect the logical canvas is drawn into.
#[must_use]
pub fn board_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(main_layout(area)[0])
}

/// Maps a logical canvas rect onto `board`, or `None` when it covers no cell.
#[must_use]
pub fn canvas_rect(board: Rect, canvas: Size, x: f32, y: f32, width: f32, height: f32) -> Option<Rect> {
    if canvas.width <= 0.0 || canvas.height <= 0.0 {
        return None;
    }

    let scale_x = f32::from(board.width) / canvas.width;
    let scale_y = f32::from(board.height) / canvas.height;

    let left = (x * scale_x).round().max(0.0) as u16;
    let top = (y * scale_y).round().max(0.0) as u16;
    let right = ((x + width) * scale_x).round().max(0.0) as u16;
    let bottom = ((y + height) * scale_y).round().max(0.0) as u16;

    let right = right.min(board.width);
    let bottom = bottom.min(board.height);
    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        board.x + left,
        board.y + top,
        right - left,
        bottom - top,
    ))
}

/// Canvas coordinates of the terminal cell at `column`, `row`, if inside `board`.
#[must_use]
pub fn canvas_point(board: Rect, canvas: Size, column: u16, row: u16) -> Option<Position> {
    if board.width == 0 || board.height == 0 {
        return None;
    }
    if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
        return None;
    }

    Some(Position {
        x: (f32::from(column - board.x) + 0.5) * canvas.width / f32::from(board.width),
        y: (f32::from(row - board.y) + 0.5) * canvas.height / f32::from(board.height),
    })
}

/// Short label for a symbol that fits a small cell.
#[must_use]
pub fn label(symbol: &RenderSymbol, width: u16) -> String {
    let text = if symbol.wildcard {
        format!("*{}*", symbol.name.to_uppercase())
    } else {
        symbol.name.to_uppercase()
    };
    text.chars().take(usize::from(width)).collect()
}

fn render_reels(f: &mut Frame, app: &App, board: Rect) {
    let machine = app.world.resource::<Machine>();
    let canvas = machine.canvas;
    let margins = machine.margins;

    // Symbols outside the grid window are masked off
    let window_left = margins.vertical;
    let window_right = canvas.width - margins.vertical;
    let window_top = margins.horizontal;
    let window_bottom = canvas.height - margins.horizontal;

    for symbol in app.render_symbols() {
        let x0 = symbol.position.x.max(window_left);
        let y0 = symbol.position.y.max(window_top);
        let x1 = (symbol.position.x + symbol.size.width).min(window_right);
        let y1 = (symbol.position.y + symbol.size.height).min(window_bottom);
        if x1 <= x0 || y1 <= y0 {
            continue;
        }

        let Some(area) = canvas_rect(board, canvas, x0, y0, x1 - x0, y1 - y0) else {
            continue;
        };

        let color = if symbol.wildcard {
            Color::LightMagenta
        } else {
            Color::White
        };

        let text = label(&symbol, area.width.saturating_sub(2).max(1));
        if area.height >= 3 && area.width >= 3 {
            let block = if symbol.highlighted {
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
            } else {
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
            };

            let inner = block.inner(area);
            f.render_widget(block, area);
            let mid = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
            f.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(color)),
                mid,
            );
        } else {
            let style = if symbol.highlighted {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(color)
            };
            f.render_widget(Paragraph::new(text).style(style), area);
        }
    }
}

fn render_info(f: &mut Frame, app: &App, area: Rect) {
    let state = app.world.resource::<GameState>();
    let machine = app.world.resource::<Machine>();

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(8), // Wallet and bet
            Constraint::Min(5),    // Controls
        ])
        .split(area);

    let title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, sections[0]);

    let (lines, cost) = state
        .bet_option(&machine.bets)
        .map_or((0, 0), |bet| (bet.lines, bet.cost));

    let status = match state.phase {
        Phase::Idle => "Ready".to_string(),
        Phase::Rolling => "Rolling...".to_string(),
        Phase::Scoring => "Scoring...".to_string(),
        Phase::Highlighting { run, .. } => {
            format!("Win {}/{}", run + 1, state.result.runs.len().max(1))
        }
    };

    let stats = format!(
        "Balance: {}\nLines: {lines}\nCost: {cost}\nLast win: {}\nTotal won: {}\nSpins: {}\n\n{status}",
        state.balance, state.last_win, state.total_won, state.spins,
    );

    let status_color = if state.balance < cost && state.is_idle() {
        Color::Red
    } else if matches!(state.phase, Phase::Highlighting { .. }) && state.result.total > 0 {
        Color::LightYellow
    } else {
        Color::White
    };

    f.render_widget(
        Paragraph::new(stats)
            .style(Style::default().fg(status_color))
            .wrap(Wrap { trim: true }),
        sections[1],
    );

    let controls = Paragraph::new(
        "Controls:\n\
        Space/Enter: Spin\n\
        Click reels: Spin\n\
        ↑/↓: Lines\n\
        Q: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, sections[2]);
}
