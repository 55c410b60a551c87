//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Screen regions of the calculator UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Number display
    pub display: Rect,
    /// Pending expression line under the display
    pub expression: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

/// Width of the calculator column, borders included
const MAIN_WIDTH: u16 = 28;
/// Height of the keypad: five rows of two cells plus borders
const KEYPAD_HEIGHT: u16 = 12;

/// Splits the screen into the calculator regions.
///
/// The event loop uses the same layout for mouse hit testing, so clicks land
/// on the buttons that were drawn.
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Length(MAIN_WIDTH), Constraint::Min(20)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Display
            Constraint::Length(1),             // Expression
            Constraint::Length(KEYPAD_HEIGHT), // Keypad
            Constraint::Min(0),
        ])
        .split(columns[0]);

    UiLayout {
        display: rows[0],
        expression: rows[1],
        keypad: rows[2],
        help: columns[1],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_expression(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.expression_line(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }

    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>9}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        let last = self
            .app
            .last_key()
            .map_or_else(|| "-".to_string(), |action| action.label());
        Paragraph::new(Line::from(vec![
            Span::styled("Last key: ", Style::default().fg(Color::Gray)),
            Span::styled(last, Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_display(regions.display, buf);
        self.render_expression(regions.expression, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        self.render_help_sidebar(regions.help, buf);
    }
}

/// Window title
pub const TITLE: &str = " Desk Calculator ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+ - * /", "Operator"),
    ("Enter =", "Equals"),
    ("%", "Percent"),
    ("n", "Toggle sign"),
    ("Backspace", "Clear (C)"),
    ("Esc", "All clear"),
    ("q", "Quit"),
];
