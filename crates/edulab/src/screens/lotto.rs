use crate::components::charts::{render_match_histogram, render_number_frequency};
use crate::components::slider::render_counter;
use crate::components::{Component, EventResult};
use crate::state::{AppState, LottoView};
use crate::util::format::{format_count, format_percentage};
use crate::util::styles::{BALL_COLOR, HEADER_COLOR, HELP_COLOR, focused_block, match_style};
use crossterm::event::{KeyCode, KeyEvent};
use edulab_core::lotto::{DRAW_SIZE, Draw, DrawStatistics};
use edulab_core::pages::LottoReport;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::Screen;

pub struct LottoScreen;

/// Numbers as filled balls; numbers also in `highlight` are bold
fn ball_spans(draw: &Draw, highlight: Option<&Draw>) -> Vec<Span<'static>> {
    draw.numbers()
        .iter()
        .flat_map(|&n| {
            let mut style = Style::default().bg(BALL_COLOR).fg(Color::Black);
            if highlight.is_some_and(|h| h.contains(n)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            } else if highlight.is_some() {
                style = style.add_modifier(Modifier::DIM);
            }
            [Span::styled(format!(" {:>2} ", n), style), Span::raw(" ")]
        })
        .collect()
}

impl LottoScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        render_counter(frame, chunks[0], &state.lotto.sets, true);

        let reference = state.lotto.reference();
        let mut spans = vec![Span::styled(
            format!("  Round {} winning numbers: ", reference.round),
            Style::default().fg(HEADER_COLOR),
        )];
        spans.extend(ball_spans(&reference.numbers, None));
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
    }

    fn render_draws(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let output = &state.lotto.output;
        let block = focused_block(" GENERATED SETS ", true);

        let Some(report) = &output.report else {
            let content = vec![
                Line::from(""),
                Line::from(format!(
                    "Press g or Enter to draw {} set(s) of {} numbers from 1 to 45.",
                    output.sets, DRAW_SIZE
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Each set is compared with the winning numbers above.",
                    Style::default().fg(HELP_COLOR),
                )),
            ];
            frame.render_widget(Paragraph::new(content).block(block), area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3)])
            .split(block.inner(area));
        frame.render_widget(block, area);

        frame.render_widget(Paragraph::new(self.banner(report, output.celebrate)), chunks[0]);

        let rows: Vec<Row> = report
            .rows
            .iter()
            .map(|row| {
                let balls = ball_spans(&row.draw, Some(&report.reference.numbers));
                Row::new(vec![
                    Cell::from(format!("Set {}", row.set)),
                    Cell::from(Line::from(balls)),
                    Cell::from(Span::styled(row.note(), match_style(row.matches))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(30),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec!["", "Numbers", "Result"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(table, chunks[1]);
    }

    fn banner(&self, report: &LottoReport, celebrate: bool) -> Line<'static> {
        let best = report.best_match();
        let text = if celebrate {
            format!("🎉 Fresh sets drawn! Best result: {best} matched.")
        } else {
            format!("Best result: {best} matched.")
        };
        Line::from(Span::styled(text, match_style(best).add_modifier(Modifier::BOLD)))
    }

    fn render_statistics(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(stats) = &state.lotto.statistics else {
            let content = vec![
                Line::from(""),
                Line::from(format!(
                    "Press s to simulate {} draws against the winning numbers.",
                    format_count(state.lotto.trials)
                )),
            ];
            let block = focused_block(" STATISTICS ", true);
            frame.render_widget(Paragraph::new(content).block(block), area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(5)])
            .split(chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" MATCHES PER DRAW ");
        render_match_histogram(frame, left[0], block, stats);
        frame.render_widget(self.summary(stats), left[1]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" NUMBER FREQUENCY (1-45, winning numbers highlighted) ");
        render_number_frequency(frame, chunks[1], block, stats);
    }

    fn summary(&self, stats: &DrawStatistics) -> Paragraph<'static> {
        let three_plus: f64 = (3..=DRAW_SIZE).map(|k| stats.match_rate(k)).sum();
        Paragraph::new(vec![
            Line::from(format!("Draws simulated: {}", format_count(stats.trials))),
            Line::from(format!(
                "3 or more matched: {}",
                format_percentage(three_plus)
            )),
            Line::from(format!(
                "Expected count per number: {:.1}",
                stats.expected_frequency()
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" SUMMARY "))
    }
}

impl Default for LottoScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LottoScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let lotto = &mut state.lotto;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                lotto.sets.decrement();
                lotto.refresh(false);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                lotto.sets.increment();
                lotto.refresh(false);
            }
            KeyCode::Char('g') | KeyCode::Enter => {
                lotto.refresh(true);
                lotto.view = LottoView::Draws;
            }
            KeyCode::Char('s') => lotto.run_statistics(),
            KeyCode::Char('v') => lotto.toggle_view(),
            KeyCode::Char('r') => lotto.reset(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(8)])
            .split(area);

        self.render_header(frame, chunks[0], state);

        match state.lotto.view {
            LottoView::Draws => self.render_draws(frame, chunks[1], state),
            LottoView::Statistics => self.render_statistics(frame, chunks[1], state),
        }
    }
}

impl Screen for LottoScreen {
    fn title(&self) -> &str {
        "Lotto"
    }
}
