use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Row, Table, Wrap},
    Frame,
};

/// States shown above the current screen. While one is up, it takes the next
/// key press for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popover {
    /// Show a table of keyboard shortcuts
    Help,

    /// Tell the user something. Stands in for the browser's `alert()`.
    Notice(String),
}

impl Popover {
    /// Render the popover
    pub fn render(&self, frame: &mut Frame<'_>, body_area: Rect) {
        match self {
            Popover::Help => {
                let popup_vert = Layout::vertical([Constraint::Percentage(50)]).flex(Flex::Center);
                let popup_horiz =
                    Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

                let [popup_area] = popup_vert.areas(body_area);
                let [popup_area] = popup_horiz.areas(popup_area);

                let popup = Table::new(
                    [
                        Row::new(vec!["F1", "Mostrar esta ajuda"]),
                        Row::new(vec!["F2", "Alternar entre cadastro e login"]),
                        Row::new(vec!["tab", "Próximo campo"]),
                        Row::new(vec!["shift-tab", "Campo anterior"]),
                        Row::new(vec!["enter", "Enviar o formulário"]),
                        Row::new(vec!["escape", "Sair"]),
                        Row::new(vec!["qualquer tecla (aviso)", "Fechar"]),
                    ],
                    [Constraint::Max(22), Constraint::Fill(1)],
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Atalhos de teclado")
                        .padding(Padding::horizontal(1))
                        .border_style(Style::new().blue()),
                );

                frame.render_widget(Clear, popup_area);
                frame.render_widget(popup, popup_area);
            }
            Popover::Notice(message) => {
                let popup_vert = Layout::vertical([Constraint::Length(5)]).flex(Flex::Center);
                let popup_horiz =
                    Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

                let [popup_area] = popup_vert.areas(body_area);
                let [popup_area] = popup_horiz.areas(popup_area);

                let popup = Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("devbook")
                            .title_bottom(Line::from("pressione qualquer tecla").right_aligned())
                            .padding(Padding::horizontal(1))
                            .border_style(Style::new().yellow()),
                    );

                frame.render_widget(Clear, popup_area);
                frame.render_widget(popup, popup_area);
            }
        }
    }
}
