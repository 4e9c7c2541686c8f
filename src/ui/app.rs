use std::mem;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::db::BannerStore;
use crate::models::{Banner, WorkingCopy};

use super::carousel::Carousel;
use super::editor::{ConfirmDelete, TextEntry};
use super::helpers::{centered_rect, surface_error};

/// Footer space reserved for status messages and key hints.
const FOOTER_HEIGHT: u16 = 3;

/// Fine-grained modes layered over the carousel view.
enum Mode {
    Normal,
    Adding(TextEntry),
    Editing {
        copy: WorkingCopy,
        entry: TextEntry,
    },
    ConfirmDelete(ConfirmDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state for the interactive carousel.
pub struct App {
    store: BannerStore,
    carousel: Carousel,
    current: Option<Banner>,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: BannerStore) -> Result<Self> {
        let mut app = Self {
            store,
            carousel: Carousel::new(),
            current: None,
            mode: Mode::Normal,
            status: None,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Re-fetch the count and the banner under the cursor.
    fn refresh(&mut self) -> Result<()> {
        self.current = self.carousel.refresh(&self.store)?;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(key, &mut exit)?,
            Mode::Adding(entry) => self.handle_add(key, entry)?,
            Mode::Editing { copy, entry } => self.handle_edit(key, copy, entry)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(key, confirm)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, key: KeyEvent, exit: &mut bool) -> Result<Mode> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => {
                    self.clear_status();
                    return Ok(Mode::Adding(TextEntry::new()));
                }
                KeyCode::Char('e') => {
                    if let Some(banner) = self.current.clone() {
                        self.clear_status();
                        let entry = TextEntry::with_text(banner.effective_text());
                        return Ok(Mode::Editing {
                            copy: WorkingCopy::new(banner),
                            entry,
                        });
                    }
                    self.set_status("No banner selected to edit.", StatusKind::Error);
                    return Ok(Mode::Normal);
                }
                _ => return Ok(Mode::Normal),
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Left => {
                self.carousel.retreat();
                self.refresh()?;
            }
            KeyCode::Right => {
                self.carousel.advance();
                self.refresh()?;
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if let Some(id) = self.current.as_ref().map(|b| b.id) {
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(ConfirmDelete { id }));
                }
                self.set_status("No banner selected to delete.", StatusKind::Error);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset_current();
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_add(&mut self, key: KeyEvent, mut entry: TextEntry) -> Result<Mode> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('s') = key.code {
                if entry.is_blank() {
                    self.set_status("Nothing to save yet.", StatusKind::Error);
                    return Ok(Mode::Adding(entry));
                }
                if let Err(err) = self.save_new_banner(&entry) {
                    self.set_status(surface_error(&err), StatusKind::Error);
                    return Ok(Mode::Adding(entry));
                }
                return Ok(Mode::Normal);
            }
            return Ok(Mode::Adding(entry));
        }

        match key.code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Enter => entry.newline(),
            KeyCode::Backspace => entry.backspace(),
            KeyCode::Char(ch) => entry.push_char(ch),
            _ => {}
        }
        Ok(Mode::Adding(entry))
    }

    fn handle_edit(
        &mut self,
        key: KeyEvent,
        mut copy: WorkingCopy,
        mut entry: TextEntry,
    ) -> Result<Mode> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('s') = key.code {
                if let Err(err) = self.save_markup(&mut copy, &entry) {
                    self.set_status(surface_error(&err), StatusKind::Error);
                    return Ok(Mode::Editing { copy, entry });
                }
                return Ok(Mode::Normal);
            }
            return Ok(Mode::Editing { copy, entry });
        }

        match key.code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Enter => entry.newline(),
            KeyCode::Backspace => entry.backspace(),
            KeyCode::Char(ch) => entry.push_char(ch),
            _ => {}
        }
        Ok(Mode::Editing { copy, entry })
    }

    fn handle_confirm_delete(&mut self, key: KeyEvent, confirm: ConfirmDelete) -> Result<Mode> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Err(err) = self.perform_delete(confirm.id) {
                    self.set_status(surface_error(&err), StatusKind::Error);
                }
                Ok(Mode::Normal)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Ok(Mode::Normal),
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn save_new_banner(&mut self, entry: &TextEntry) -> Result<()> {
        let banner = self.store.create(&entry.text)?;
        self.refresh()?;
        self.carousel.focus_last();
        self.refresh()?;
        self.set_status(format!("Added banner #{}.", banner.id), StatusKind::Info);
        Ok(())
    }

    fn save_markup(&mut self, copy: &mut WorkingCopy, entry: &TextEntry) -> Result<()> {
        let id = copy.id();
        copy.set_markup(entry.text.clone());
        if copy.save(&self.store)? {
            self.set_status(format!("Banner #{id} saved."), StatusKind::Info);
        } else {
            self.set_status(format!("Banner #{id} unchanged."), StatusKind::Info);
        }
        self.refresh()?;
        Ok(())
    }

    fn perform_delete(&mut self, id: i64) -> Result<()> {
        self.store.delete(id)?;
        self.refresh()?;
        self.set_status(format!("Deleted banner #{id}."), StatusKind::Info);
        Ok(())
    }

    fn reset_current(&mut self) {
        let Some(banner) = self.current.clone() else {
            self.set_status("No banner selected to reset.", StatusKind::Error);
            return;
        };

        if !banner.has_markup() {
            self.set_status(
                format!("Banner #{} has no markup to reset.", banner.id),
                StatusKind::Info,
            );
            return;
        }

        match self.store.update_markup(banner.id, None) {
            Ok(()) => {
                if let Err(err) = self.refresh() {
                    self.set_status(surface_error(&err), StatusKind::Error);
                    return;
                }
                self.set_status(
                    format!("Reset banner #{} to its original content.", banner.id),
                    StatusKind::Info,
                );
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.draw_carousel(frame, content_area);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Adding(entry) => self.draw_entry(frame, area, "Add Banner", entry),
            Mode::Editing { copy, entry } => {
                let title = format!("Edit Banner #{}", copy.id());
                self.draw_entry(frame, area, &title, entry);
            }
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_carousel(&self, frame: &mut Frame, area: Rect) {
        let Some(banner) = &self.current else {
            let message = Paragraph::new("No banners yet. Press Ctrl+A to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Banners"));
            frame.render_widget(message, area);
            return;
        };

        let (position, total) = self.carousel.position();
        let mut title = format!("Banner #{} ({position}/{total})", banner.id);
        if banner.has_markup() {
            title.push_str(" [markup]");
        }

        let paragraph = Paragraph::new(banner.effective_text().to_string())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_entry(&self, frame: &mut Frame, area: Rect, title: &str, entry: &TextEntry) {
        let popup_area = centered_rect(80, 80, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        if inner.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let text = Paragraph::new(entry.text.clone()).wrap(Wrap { trim: false });
        frame.render_widget(text, chunks[0]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Ctrl+S save  Esc cancel  Enter newline",
            Style::default().fg(Color::Gray),
        )));
        frame.render_widget(hint, chunks[1]);
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete banner #{}?", confirm.id)),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let hint = match self.mode {
            Mode::Normal => {
                "←/→ navigate  Ctrl+A add  Ctrl+E edit  [d]elete  [r]eset  [q]uit"
            }
            Mode::Adding(_) | Mode::Editing { .. } => "Ctrl+S save  Esc cancel",
            Mode::ConfirmDelete(_) => "Y confirm  N / Esc cancel",
        };
        Line::from(Span::styled(
            hint,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app_with(contents: &[&str]) -> App {
        let store = BannerStore::open_in_memory().unwrap();
        for content in contents {
            store.create(content).unwrap();
        }
        App::new(store).unwrap()
    }

    #[test]
    fn arrow_keys_wrap_around_the_carousel() {
        let mut app = app_with(&["a", "b"]);
        assert_eq!(app.current.as_ref().unwrap().content, "a");

        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.current.as_ref().unwrap().content, "b");

        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.current.as_ref().unwrap().content, "a");
    }

    #[test]
    fn adding_a_banner_focuses_it() {
        let mut app = app_with(&["a"]);

        app.handle_key(ctrl('a')).unwrap();
        for ch in "new one".chars() {
            app.handle_key(key(KeyCode::Char(ch))).unwrap();
        }
        app.handle_key(ctrl('s')).unwrap();

        assert_eq!(app.current.as_ref().unwrap().content, "new one");
        assert_eq!(app.carousel.position(), (2, 2));
    }

    #[test]
    fn blank_add_is_rejected() {
        let mut app = app_with(&[]);

        app.handle_key(ctrl('a')).unwrap();
        app.handle_key(ctrl('s')).unwrap();

        assert!(matches!(app.mode, Mode::Adding(_)));
        assert_eq!(app.store.count().unwrap(), 0);
    }

    #[test]
    fn editing_saves_a_markup_override() {
        let mut app = app_with(&["plain"]);

        app.handle_key(ctrl('e')).unwrap();
        app.handle_key(key(KeyCode::Char('!'))).unwrap();
        app.handle_key(ctrl('s')).unwrap();

        let banner = app.current.as_ref().unwrap();
        assert_eq!(banner.content, "plain");
        assert_eq!(banner.effective_text(), "plain!");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app_with(&["only"]);

        app.handle_key(key(KeyCode::Char('d'))).unwrap();
        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.store.count().unwrap(), 1);

        app.handle_key(key(KeyCode::Char('d'))).unwrap();
        app.handle_key(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.store.count().unwrap(), 0);
        assert!(app.current.is_none());
    }

    #[test]
    fn reset_clears_markup_from_the_carousel() {
        let mut app = app_with(&["plain"]);
        app.store.update_markup(1, Some("fancy")).unwrap();
        app.refresh().unwrap();
        assert_eq!(app.current.as_ref().unwrap().effective_text(), "fancy");

        app.handle_key(key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.current.as_ref().unwrap().effective_text(), "plain");
    }

    #[test]
    fn quit_key_exits() {
        let mut app = app_with(&[]);
        assert!(app.handle_key(key(KeyCode::Char('q'))).unwrap());
    }
}
