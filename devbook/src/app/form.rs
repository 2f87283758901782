use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use devbook_core::handler::{login, registration, FieldSource};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// A field in one of our forms. Implement with `form_fields!`.
pub trait FormField: Copy + PartialEq + 'static {
    /// Every field, in tab order
    const FIELDS: &'static [Self];

    /// Position in `FIELDS`
    fn index(self) -> usize;

    /// The element id the form handlers read this field by
    fn id(self) -> &'static str;

    /// What to call the field on screen
    fn label(self) -> &'static str;

    /// Whether to hide what's typed
    fn masked(self) -> bool;

    /// Rotate through the options (e.g. with tab)
    fn next(self) -> Self {
        Self::FIELDS[(self.index() + 1) % Self::FIELDS.len()]
    }

    /// Rotate through the options in reverse (e.g. with shift-tab)
    fn prev(self) -> Self {
        Self::FIELDS[(self.index() + Self::FIELDS.len() - 1) % Self::FIELDS.len()]
    }
}

form_fields!(
    RegistrationField,
    Name(registration::fields::NAME, "Nome", false),
    Email(registration::fields::EMAIL, "E-mail", false),
    Nickname(registration::fields::NICKNAME, "Nick", false),
    Password(registration::fields::PASSWORD, "Senha", true),
    PasswordConfirmation(registration::fields::PASSWORD_CONFIRMATION, "Confirmar senha", true),
);

form_fields!(
    LoginField,
    Email(login::fields::EMAIL, "E-mail", false),
    Password(login::fields::PASSWORD, "Senha", true),
);

/// A form for entering some set of fields
#[derive(Debug)]
pub struct Form<F> {
    /// Which field we're editing
    active: F,

    /// One input per field, in `F::FIELDS` order
    inputs: Vec<Input>,
}

impl<F: FormField> Form<F> {
    /// Render the form centered in `body_area`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&self, title: &str, body_area: Rect, frame: &mut Frame<'_>) {
        let height = 3 * F::FIELDS.len() as u16 + 2; // +2 for the outer border

        let popup_vert = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let border_style = Style::default().fg(Color::Blue);

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style);
        let inner_area = outer.inner(popup_area);
        frame.render_widget(outer, popup_area);

        let width = inner_area.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor

        let rows = Layout::vertical(F::FIELDS.iter().map(|_| Constraint::Length(3))).split(inner_area);

        for (field, area) in F::FIELDS.iter().zip(rows.iter()) {
            let Some(input) = self.inputs.get(field.index()) else {
                continue;
            };

            let scroll = input.visual_scroll(width as usize);

            let shown = if field.masked() {
                "*".repeat(input.value().chars().count())
            } else {
                input.value().to_string()
            };

            let widget = Paragraph::new(shown).scroll((0, scroll as u16)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .border_style(border_style),
            );

            frame.render_widget(widget, *area);

            if *field == self.active {
                frame.set_cursor_position((
                    area.x
                        + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                        + 1, // just past the end of the text
                    area.y + 1, // +1 row for the border/title
                ));
            }
        }
    }

    /// Move between fields or edit the active one.
    pub fn handle_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.active = self.active.next();
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();
            }
            _ => {
                if let Some(input) = self.inputs.get_mut(self.active.index()) {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
    }

    /// Which field has focus.
    pub fn active(&self) -> F {
        self.active
    }
}

impl<F: FormField> Default for Form<F> {
    fn default() -> Self {
        Self {
            active: F::FIELDS[0],
            inputs: F::FIELDS.iter().map(|_| Input::default()).collect(),
        }
    }
}

impl<F: FormField> FieldSource for Form<F> {
    fn value(&self, id: &str) -> String {
        F::FIELDS
            .iter()
            .find(|field| field.id() == id)
            .and_then(|field| self.inputs.get(field.index()))
            .map(|input| input.value().to_string())
            .unwrap_or_default()
    }
}
