use anyhow::Result;
use content_embed_engine::{DocumentTree, InsertCommand, Registry, Renderer, TextRenderer};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::Stdout;

const CURSOR_MARKER: &str = "▸ ─── insert here ───";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Inserted(String),
    Rejected(String),
}

pub struct App {
    registry: Registry,
    document: DocumentTree,
    input: String,
    status: Status,
}

impl App {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            document: DocumentTree::new(),
            input: String::new(),
            status: Status::Ready,
        }
    }

    pub fn document(&self) -> &DocumentTree {
        &self.document
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn cursor_up(&mut self) {
        let position = self.document.cursor().position;
        self.document.move_cursor(position.saturating_sub(1));
    }

    pub fn cursor_down(&mut self) {
        let position = self.document.cursor().position;
        self.document.move_cursor(position + 1);
    }

    /// Try to insert the current input at the cursor.
    ///
    /// The input is cleared on success and kept for editing on rejection.
    pub fn submit(&mut self) {
        let command = InsertCommand::new(&self.registry);
        match command.attempt_insert(&mut self.document, &self.input) {
            Ok(inserted) => {
                self.status = Status::Inserted(format!(
                    "Inserted {} block at position {}",
                    inserted.kind, inserted.patch.inserted_at
                ));
                self.input.clear();
            }
            Err(e) => {
                self.status = Status::Rejected(e.to_string());
            }
        }
    }

    /// Rendered document lines with the cursor marker spliced in
    pub fn document_lines(&self) -> Vec<String> {
        let renderer = TextRenderer::new();
        let cursor = self.document.cursor().position;
        let mut lines = Vec::with_capacity(self.document.len() + 1);

        for (index, node) in self.document.nodes().iter().enumerate() {
            if index == cursor {
                lines.push(CURSOR_MARKER.to_string());
            }
            lines.extend(renderer.render(node).lines().map(str::to_string));
        }
        if cursor == self.document.len() {
            lines.push(CURSOR_MARKER.to_string());
        }

        lines
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.submit(),
                KeyCode::Up => app.cursor_up(),
                KeyCode::Down => app.cursor_down(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Document panel
    let document_text: Vec<Line> = app
        .document_lines()
        .into_iter()
        .map(|line| {
            if line == CURSOR_MARKER {
                Line::from(Span::styled(line, Style::default().fg(Color::Yellow)))
            } else {
                Line::from(Span::raw(line))
            }
        })
        .collect();
    let title = format!(
        "Document ({} nodes, version {})",
        app.document().len(),
        app.document().version()
    );
    let document = Paragraph::new(document_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(document, chunks[0]);

    // Input line
    let input = Paragraph::new(app.input())
        .block(Block::default().borders(Borders::ALL).title("Insert block"));
    f.render_widget(input, chunks[1]);

    let status = match app.status() {
        Status::Ready => Line::from(Span::raw("Type a teacher name or a YouTube link")),
        Status::Inserted(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        )),
        Status::Rejected(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };
    f.render_widget(Paragraph::new(status), chunks[2]);

    let help = Line::from(vec![
        Span::raw("Enter: Insert | "),
        Span::raw("↑/↓: Move cursor | "),
        Span::raw("Esc: Quit"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[3]);
}
