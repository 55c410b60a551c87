//! On-screen keypad
//!
//! The grid mirrors the physical button layout. Buttons can be clicked with
//! the mouse (see [`Keypad::hit_test`]) and the active operator is
//! highlighted until equals, sign toggle, percent or all-clear.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Action, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: String,
    /// The action this button triggers
    pub action: Action,
    /// Whether the button is highlighted as the active operator
    pub active: bool,
}

impl KeypadButton {
    /// Creates a button for an action, labelled with the action's label
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self {
            label: action.label(),
            action,
            active: false,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(Action::Digit(d.min(9)))
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self::new(Action::Operator(op))
    }

    /// Sets the highlight state
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Returns the operator this button commits, if it is an operator button
    #[must_use]
    pub const fn operator_kind(&self) -> Option<Operator> {
        match self.action {
            Action::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ AC] [  C] [  %] [  ÷]
/// [  7] [  8] [  9] [  ×]
/// [  4] [  5] [  6] [  -]
/// [  1] [  2] [  3] [  +]
/// [(-)] [  0] [  .] [  =]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: AC C % ÷
            KeypadButton::new(Action::AllClear),
            KeypadButton::new(Action::Backspace),
            KeypadButton::new(Action::Percent),
            KeypadButton::operator(Operator::Divide),
            // Row 2: 7 8 9 ×
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 4 5 6 -
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            // Row 5: (-) 0 . =
            KeypadButton::new(Action::ToggleSign),
            KeypadButton::digit(0),
            KeypadButton::new(Action::Decimal),
            KeypadButton::new(Action::Equals),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button that triggers an action
    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Highlights one operator button, or none
    pub fn highlight_operator(&mut self, op: Option<Operator>) {
        for btn in &mut self.buttons {
            let active = op.is_some() && btn.operator_kind() == op;
            btn.set_active(active);
        }
    }

    /// Returns the highlighted operator
    #[must_use]
    pub fn highlighted_operator(&self) -> Option<Operator> {
        self.buttons
            .iter()
            .find(|b| b.active)
            .and_then(KeypadButton::operator_kind)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.active {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }

    match btn.action {
        Action::Digit(_) | Action::Decimal => Style::default().fg(Color::White),
        Action::Operator(_) => Style::default().fg(Color::Yellow),
        Action::Equals => Style::default().fg(Color::Green),
        Action::AllClear | Action::Backspace => Style::default().fg(Color::Red),
        Action::ToggleSign | Action::Percent => Style::default().fg(Color::Cyan),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < self.keypad.cols as u16 || inner.height < self.keypad.rows as u16 {
            return;
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let boxed = format!("[{}]", btn.label);
            let label = if boxed.chars().count() as u16 <= btn_width {
                boxed
            } else {
                btn.label.clone()
            };
            let label_len = label.chars().count() as u16;
            if label_len > btn_width {
                continue;
            }

            let label_x = x + (btn_width - label_len) / 2;
            let label_y = y + btn_height / 2;
            buf.set_span(
                label_x,
                label_y,
                &Span::styled(label, button_style(btn)),
                btn_width,
            );
        }
    }
}
