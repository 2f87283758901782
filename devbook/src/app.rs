/// Things that can happen to this app
mod action;
pub use action::Action;

/// Side effects and the connections they need
mod effect;
pub use effect::{Effect, EffectContext};

/// Sign-up and login forms
pub mod form;
use form::{Form, FormField, LoginField, RegistrationField};

/// Things shown on top of the current screen
mod popover;
use popover::Popover;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use devbook_core::{
    api,
    handler::{self, login, registration},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::{collections::VecDeque, process::ExitCode};

/// The "functional core" of the app.
#[derive(Debug)]
pub struct App {
    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// What we're looking at
    screen: Screen,

    /// Popovers waiting for a key press, oldest first
    popovers: VecDeque<Popover>,

    /// Set once the user asks to quit
    exit: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app, starting on the sign-up form.
    pub fn new() -> Self {
        Self {
            status_line: None,
            screen: Screen::Registration(Form::default()),
            popovers: VecDeque::new(),
            exit: None,
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        match &self.screen {
            Screen::Registration(form) => form.render("Criar conta", body_area, frame),
            Screen::Login(form) => form.render("Login", body_area, frame),
            Screen::Home => frame.render_widget(
                Paragraph::new("Você está logado.")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).title("Início")),
                body_area,
            ),
        }

        if let Some(popover) = self.popovers.front() {
            popover.render(frame, body_area);
        }

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.clone(),
            None => self.screen.hint(),
        });

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Responded(outcome) => {
                self.status_line = None;

                self.apply(outcome.effects())
            }
            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exit
    }

    /// React to the keyboard
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        // A popover holds the app until it's dismissed, like a modal dialog.
        if self.popovers.pop_front().is_some() {
            return vec![];
        }

        match key.code {
            KeyCode::Esc => {
                self.exit = Some(ExitCode::SUCCESS);

                vec![]
            }
            KeyCode::F(1) => {
                self.popovers.push_back(Popover::Help);

                vec![]
            }
            KeyCode::F(2) => {
                self.screen = match self.screen {
                    Screen::Registration(_) => Screen::Login(Form::default()),
                    Screen::Login(_) | Screen::Home => Screen::Registration(Form::default()),
                };
                self.status_line = None;

                vec![]
            }
            KeyCode::Enter => self.submit(),
            _ => {
                match &mut self.screen {
                    Screen::Registration(form) => form.handle_event(key),
                    Screen::Login(form) => form.handle_event(key),
                    Screen::Home => {}
                }

                vec![]
            }
        }
    }

    /// Submit whichever form is showing.
    fn submit(&mut self) -> Vec<Effect> {
        let effects = match &self.screen {
            Screen::Registration(form) => registration::submit(form),
            Screen::Login(form) => login::submit(form),
            Screen::Home => return vec![],
        };

        self.apply(effects)
    }

    /// Take care of the form handlers' effects that only touch the UI, and
    /// pass the rest on to be run.
    fn apply(&mut self, effects: Vec<handler::Effect>) -> Vec<Effect> {
        let mut requests = Vec::new();

        for effect in effects {
            match effect {
                handler::Effect::Notify(message) => {
                    self.popovers.push_back(Popover::Notice(message));
                }
                handler::Effect::Navigate(location) => self.navigate(&location),
                handler::Effect::Register(req) => {
                    self.status_line = Some("Enviando cadastro…".to_owned());
                    requests.push(Effect::Register(req));
                }
                handler::Effect::LogIn(req) => {
                    self.status_line = Some("Entrando…".to_owned());
                    requests.push(Effect::LogIn(req));
                }
            }
        }

        requests
    }

    /// Move to the screen for `location`.
    fn navigate(&mut self, location: &str) {
        if location == api::login::HOME {
            self.screen = Screen::Home;
        } else {
            tracing::warn!(%location, "no screen for location");
            self.status_line = Some(format!("Nenhuma tela para {location}"));
        }
    }
}

/// What the body of the app shows
#[derive(Debug)]
enum Screen {
    /// The sign-up form
    Registration(Form<RegistrationField>),

    /// The login form
    Login(Form<LoginField>),

    /// Where a successful login lands
    Home,
}

impl Screen {
    /// What to show on the status line when there's nothing else to say.
    fn hint(&self) -> String {
        let editing = match self {
            Screen::Registration(form) => form.active().label(),
            Screen::Login(form) => form.active().label(),
            Screen::Home => return "F1 ajuda · F2 cadastro · esc sair".to_owned(),
        };

        format!("Editando {editing} · F1 ajuda · F2 trocar formulário · enter enviar · esc sair")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use devbook_core::{
        api::{register, Error, StatusCode},
        Outcome,
    };

    fn press(app: &mut App, code: KeyCode) -> Vec<Effect> {
        app.handle(Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert!(press(app, KeyCode::Char(c)).is_empty());
        }
    }

    /// Fill in the sign-up form, one field per entry, tabbing between them.
    fn fill(app: &mut App, values: &[&str]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                press(app, KeyCode::Tab);
            }
            type_text(app, value);
        }
    }

    fn notices(app: &App) -> Vec<&str> {
        app.popovers
            .iter()
            .filter_map(|popover| match popover {
                Popover::Notice(message) => Some(message.as_str()),
                Popover::Help => None,
            })
            .collect()
    }

    #[test]
    fn mismatched_passwords_stay_local() {
        let mut app = App::new();
        fill(&mut app, &["Ana", "ana@x.com", "ana", "p1", "p2"]);

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(notices(&app), vec!["As senhas são diferentes!"]);
    }

    #[test]
    fn matching_passwords_send_a_registration() {
        let mut app = App::new();
        fill(&mut app, &["Ana", "ana@x.com", "ana", "p1", "p1"]);

        let effects = press(&mut app, KeyCode::Enter);

        assert_eq!(
            effects,
            vec![Effect::Register(register::Req {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                nickname: "ana".to_string(),
                password: "p1".to_string(),
            })]
        );
        assert!(notices(&app).is_empty());
    }

    #[test]
    fn notices_swallow_the_next_key() {
        let mut app = App::new();
        fill(&mut app, &["", "", "", "a", "b"]);
        press(&mut app, KeyCode::Enter);

        // This Enter only closes the notice; it doesn't submit again.
        assert!(press(&mut app, KeyCode::Enter).is_empty());
        assert!(app.popovers.is_empty());
    }

    #[test]
    fn registration_success_does_not_navigate() {
        let mut app = App::new();

        let effects = app.handle(Action::Responded(Outcome::Registered(Ok(()))));

        assert!(effects.is_empty());
        assert_eq!(notices(&app), vec!["Usuário cadastrado com sucesso!"]);
        assert!(matches!(app.screen, Screen::Registration(_)));
    }

    #[test]
    fn login_sends_credentials() {
        let mut app = App::new();
        press(&mut app, KeyCode::F(2));
        type_text(&mut app, "ana@x.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "p1");

        let effects = press(&mut app, KeyCode::Enter);

        assert_eq!(
            effects,
            vec![Effect::LogIn(api::login::Req {
                email: "ana@x.com".to_string(),
                password: "p1".to_string(),
            })]
        );
    }

    #[test]
    fn login_success_goes_home() {
        let mut app = App::new();
        press(&mut app, KeyCode::F(2));

        app.handle(Action::Responded(Outcome::LoggedIn(Ok(()))));

        assert_eq!(notices(&app), vec!["Login OK"]);
        assert!(matches!(app.screen, Screen::Home));
    }

    #[test]
    fn login_failure_stays_on_the_form() {
        let mut app = App::new();
        press(&mut app, KeyCode::F(2));

        let failure = Error::Status {
            status: StatusCode::UNAUTHORIZED,
            message: None,
        };
        app.handle(Action::Responded(Outcome::LoggedIn(Err(failure))));

        assert_eq!(notices(&app), vec!["Usuário ou senha inválidos!"]);
        assert!(matches!(app.screen, Screen::Login(_)));
    }

    #[test]
    fn escape_quits() {
        let mut app = App::new();
        assert!(app.should_exit().is_none());

        press(&mut app, KeyCode::Esc);

        assert!(app.should_exit().is_some());
    }

    #[test]
    fn status_line_speaks_portuguese() {
        let mut app = App::new();

        assert_eq!(
            app.screen.hint(),
            "Editando Nome · F1 ajuda · F2 trocar formulário · enter enviar · esc sair"
        );

        app.navigate("/perfil");

        assert_eq!(app.status_line.as_deref(), Some("Nenhuma tela para /perfil"));
    }
}
