use crossterm::event::KeyEvent;
use devbook_core::Outcome;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// The server answered one of our requests
    Responded(Outcome),

    /// Something bad happened; display it to the user
    Problem(String),
}
