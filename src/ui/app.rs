use super::{AppEvent, EventHandler, InputMode, TerminalManager};
use crate::config::Config;
use crate::export;
use crate::library::{Library, Song};
use crate::playlist::Playlist;
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{error, info, warn};

/// Which list the navigation keys move through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Library,
    Playlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Status {
    level: StatusLevel,
    message: String,
}

pub struct App {
    config: Config,
    library: Library,
    playlist: Playlist,

    // Library pane
    query: String,
    songs_in_view: Vec<Song>,
    library_state: ListState,

    // Playlist pane
    playlist_state: ListState,

    // UI State
    focus: Focus,
    mode: InputMode,
    export_input: String,
    status: Option<Status>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, library: Library) -> Self {
        let playlist = Playlist::new(config.playlist.name.clone());

        let mut app = Self {
            config,
            library,
            playlist,
            query: String::new(),
            songs_in_view: Vec::new(),
            library_state: ListState::default(),
            playlist_state: ListState::default(),
            focus: Focus::Library,
            mode: InputMode::Normal,
            export_input: String::new(),
            status: None,
            should_quit: false,
        };
        app.update_library_list();
        app
    }

    pub fn run(&mut self, terminal: &mut TerminalManager, events: &EventHandler) -> Result<()> {
        info!(
            "Session started with {} songs in the library",
            self.library.len()
        );

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Some(event) = events.next_event(self.mode)? {
                self.handle_event(event);
            }
        }

        info!("Session ended with {} songs in the playlist", self.playlist.len());
        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Render => {}

            AppEvent::Up => self.move_cursor(false),
            AppEvent::Down => self.move_cursor(true),
            AppEvent::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Library => Focus::Playlist,
                    Focus::Playlist => Focus::Library,
                };
            }

            AppEvent::StartSearch => {
                self.mode = InputMode::Search;
                self.focus = Focus::Library;
            }
            AppEvent::Input(c) => match self.mode {
                InputMode::Search => {
                    self.query.push(c);
                    self.update_library_list();
                }
                InputMode::Export => self.export_input.push(c),
                InputMode::Normal => {}
            },
            AppEvent::Backspace => match self.mode {
                InputMode::Search => {
                    self.query.pop();
                    self.update_library_list();
                }
                InputMode::Export => {
                    self.export_input.pop();
                }
                InputMode::Normal => {}
            },
            AppEvent::Submit => match self.mode {
                InputMode::Search => self.mode = InputMode::Normal,
                InputMode::Export => self.submit_export(),
                InputMode::Normal => {}
            },
            AppEvent::Cancel => match self.mode {
                InputMode::Search => {
                    self.query.clear();
                    self.update_library_list();
                    self.mode = InputMode::Normal;
                }
                InputMode::Export => {
                    self.export_input.clear();
                    self.mode = InputMode::Normal;
                    self.set_status(StatusLevel::Info, "Export cancelled");
                }
                InputMode::Normal => {}
            },

            AppEvent::AddSong => {
                if self.focus == Focus::Library {
                    self.add_selected_song();
                }
            }
            AppEvent::RemoveSong => self.remove_selected_song(),
            AppEvent::MoveUp => self.move_selected_song(false),
            AppEvent::MoveDown => self.move_selected_song(true),
            AppEvent::StartExport => self.begin_export(),
        }
    }

    /// Re-run the search for the current query and keep the cursor on a valid row
    fn update_library_list(&mut self) {
        self.songs_in_view = self
            .library
            .search(&self.query)
            .into_iter()
            .cloned()
            .collect();

        let selected = match self.library_state.selected() {
            _ if self.songs_in_view.is_empty() => None,
            Some(i) => Some(i.min(self.songs_in_view.len() - 1)),
            None => Some(0),
        };
        self.library_state.select(selected);
    }

    fn add_selected_song(&mut self) {
        let Some(song) = self
            .library_state
            .selected()
            .and_then(|i| self.songs_in_view.get(i))
            .cloned()
        else {
            return;
        };

        if self.playlist.add_song(song.clone()) {
            if self.playlist_state.selected().is_none() {
                self.playlist_state.select(Some(0));
            }
            self.set_status(StatusLevel::Info, format!("Added {}", song));
        } else {
            self.set_status(StatusLevel::Info, format!("{} is already in the playlist", song));
        }
    }

    fn remove_selected_song(&mut self) {
        let Some(index) = self.playlist_state.selected() else {
            return;
        };

        if self.playlist.remove_song(index) {
            // Keep the cursor near where it was
            let selected = if self.playlist.is_empty() {
                None
            } else {
                Some(index.min(self.playlist.len() - 1))
            };
            self.playlist_state.select(selected);
        }
    }

    fn move_selected_song(&mut self, down: bool) {
        let Some(old_index) = self.playlist_state.selected() else {
            return;
        };
        let new_index = if down {
            old_index.checked_add(1)
        } else {
            old_index.checked_sub(1)
        };

        if let Some(new_index) = new_index {
            if self.playlist.reorder_song(old_index, new_index) {
                self.playlist_state.select(Some(new_index));
            }
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let (state, len) = match self.focus {
            Focus::Library => (&mut self.library_state, self.songs_in_view.len()),
            Focus::Playlist => (&mut self.playlist_state, self.playlist.len()),
        };
        if len == 0 {
            state.select(None);
            return;
        }

        let next = match state.selected() {
            Some(i) if down => (i + 1).min(len - 1),
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        state.select(Some(next));
    }

    fn begin_export(&mut self) {
        if self.playlist.is_empty() {
            warn!("Refusing to export empty playlist '{}'", self.playlist.name());
            self.set_status(StatusLevel::Warning, "Cannot export an empty playlist.");
            return;
        }

        let suggestion = self
            .config
            .export
            .directory
            .join(format!("{}{}", self.playlist.name(), export::M3U_EXTENSION));
        self.export_input = suggestion.display().to_string();
        self.mode = InputMode::Export;
    }

    fn submit_export(&mut self) {
        self.mode = InputMode::Normal;
        let destination = std::mem::take(&mut self.export_input);
        let destination = destination.trim();
        if destination.is_empty() {
            self.set_status(StatusLevel::Info, "Export cancelled");
            return;
        }

        match export::export_to_m3u(&self.playlist, destination) {
            Ok(path) => {
                self.set_status(
                    StatusLevel::Info,
                    format!("Playlist exported to {}", path.display()),
                );
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                error!("Export failed: {:#}", e);
                self.set_status(StatusLevel::Error, format!("Export failed: {:#}", e));
            }
        }
    }

    fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = Some(Status {
            level,
            message: message.into(),
        });
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn songs_in_view(&self) -> &[Song] {
        &self.songs_in_view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn export_input(&self) -> &str {
        &self.export_input
    }

    pub fn status(&self) -> Option<(StatusLevel, &str)> {
        self.status
            .as_ref()
            .map(|status| (status.level, status.message.as_str()))
    }

    pub fn selected_library_index(&self) -> Option<usize> {
        self.library_state.selected()
    }

    pub fn selected_playlist_index(&self) -> Option<usize> {
        self.playlist_state.selected()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // search box
                Constraint::Min(5),    // library + playlist
                Constraint::Length(3), // status / prompt
            ])
            .split(f.area());

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_search(f, chunks[0]);
        self.render_library(f, panes[0]);
        self.render_playlist(f, panes[1]);
        self.render_status(f, chunks[2]);
    }

    fn render_search(&self, f: &mut Frame, area: Rect) {
        let editing = self.mode == InputMode::Search;
        let text = if editing {
            format!("{}_", self.query)
        } else {
            self.query.clone()
        };
        let search = Paragraph::new(text).block(
            Block::default()
                .title("Search (/ to edit, regex)")
                .borders(Borders::ALL)
                .border_style(border_style(editing)),
        );
        f.render_widget(search, area);
    }

    fn render_library(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .songs_in_view
            .iter()
            .map(|song| ListItem::new(song.display_text()))
            .collect();
        let title = format!(
            "Music Library ({}/{})",
            self.songs_in_view.len(),
            self.library.len()
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focus == Focus::Library)),
            )
            .highlight_style(highlight_style())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.library_state);
    }

    fn render_playlist(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .playlist
            .iter()
            .enumerate()
            .map(|(i, song)| ListItem::new(format!("{:>3}. {}", i + 1, song.display_text())))
            .collect();
        let title = format!(
            "{} - {} songs, {}",
            self.playlist.name(),
            self.playlist.len(),
            self.playlist.duration_string()
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focus == Focus::Playlist)),
            )
            .highlight_style(highlight_style())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.playlist_state);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let line = if self.mode == InputMode::Export {
            Line::from(vec![
                Span::styled("Export to: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{}_", self.export_input)),
            ])
        } else if let Some(status) = &self.status {
            let color = match status.level {
                StatusLevel::Info => Color::Green,
                StatusLevel::Warning => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(
                status.message.clone(),
                Style::default().fg(color),
            ))
        } else {
            Line::from(
                "Enter/a add | d remove | K/J move | Tab switch | e export | q quit",
            )
        };

        let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn highlight_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}
