use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // UI Events
    Quit,
    Render,

    // Navigation Events
    Up,
    Down,
    SwitchFocus,

    // Text input (search box, export prompt)
    StartSearch,
    Input(char),
    Backspace,
    Submit,
    Cancel,

    // Playlist Events
    AddSong,
    RemoveSong,
    MoveUp,
    MoveDown,
    StartExport,
}

/// What keystrokes currently mean: commands, or text for one of the input boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Export,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for a terminal event and translate it for `mode`
    pub fn next_event(&self, mode: InputMode) -> Result<Option<AppEvent>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(key_to_app_event(key, mode)),
            Event::Resize(_, _) => Ok(Some(AppEvent::Render)),
            _ => Ok(None),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

pub fn key_to_app_event(key: KeyEvent, mode: InputMode) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppEvent::Quit);
    }

    match mode {
        InputMode::Normal => normal_key(key),
        InputMode::Search | InputMode::Export => input_key(key),
    }
}

fn normal_key(key: KeyEvent) -> Option<AppEvent> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),

        // Reordering
        KeyCode::Up if shift => Some(AppEvent::MoveUp),
        KeyCode::Down if shift => Some(AppEvent::MoveDown),
        KeyCode::Char('K') => Some(AppEvent::MoveUp),
        KeyCode::Char('J') => Some(AppEvent::MoveDown),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::Down),
        KeyCode::Tab | KeyCode::BackTab => Some(AppEvent::SwitchFocus),

        // Playlist controls
        KeyCode::Enter | KeyCode::Char('a') => Some(AppEvent::AddSong),
        KeyCode::Delete | KeyCode::Char('d') => Some(AppEvent::RemoveSong),
        KeyCode::Char('e') => Some(AppEvent::StartExport),

        KeyCode::Char('/') => Some(AppEvent::StartSearch),

        _ => None,
    }
}

fn input_key(key: KeyEvent) -> Option<AppEvent> {
    match key.code {
        KeyCode::Esc => Some(AppEvent::Cancel),
        KeyCode::Enter => Some(AppEvent::Submit),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Up => Some(AppEvent::Up),
        KeyCode::Down => Some(AppEvent::Down),
        KeyCode::Char(c) if !c.is_control() => Some(AppEvent::Input(c)),
        _ => None,
    }
}
