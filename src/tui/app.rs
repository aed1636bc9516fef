use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::launch::launch;
use crate::io::store_io::{data_dir, load_list, save_list};
use crate::model::{ListKind, TaskList};

use super::input;
use super::render;
use super::theme::Theme;

/// Per-pane interactive state: the list plus a cursor into its current
/// display projection.
#[derive(Debug)]
pub struct PaneState {
    pub list: TaskList,
    pub cursor: usize,
}

impl PaneState {
    pub fn new(list: TaskList) -> Self {
        PaneState { list, cursor: 0 }
    }

    /// Backing index of the selected row, if any row is visible
    pub fn selected(&self, hide_done: bool) -> Option<usize> {
        self.list.visible(hide_done).get(self.cursor).copied()
    }

    /// Keep the cursor inside the current projection
    pub fn clamp_cursor(&mut self, hide_done: bool) {
        let len = self.list.visible(hide_done).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Main application state: three panes, one focus, and the two orthogonal
/// flags of the navigation state machine.
pub struct App {
    pub panes: [PaneState; 3],
    /// Index of the focused pane, cyclic over 0..3
    pub focus: usize,
    pub show_help: bool,
    /// Shared across all three panes
    pub hide_done: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(lists: [TaskList; 3]) -> Self {
        App {
            panes: lists.map(PaneState::new),
            focus: 0,
            show_help: false,
            hide_done: false,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub fn focused_pane(&self) -> &PaneState {
        &self.panes[self.focus]
    }

    pub fn focused_pane_mut(&mut self) -> &mut PaneState {
        &mut self.panes[self.focus]
    }

    pub fn focus_forward(&mut self) {
        self.focus = (self.focus + 1) % 3;
    }

    pub fn focus_backward(&mut self) {
        self.focus = (self.focus + 2) % 3;
    }

    /// Flip the shared hide-completed flag and reproject all three panes
    pub fn toggle_hide_done(&mut self) {
        self.hide_done = !self.hide_done;
        let hide = self.hide_done;
        for pane in &mut self.panes {
            pane.clamp_cursor(hide);
        }
    }

    /// Flip completion of the focused pane's selected row, writing through
    /// to the backing entry
    pub fn toggle_selected(&mut self) {
        let hide = self.hide_done;
        let pane = self.focused_pane_mut();
        if let Some(index) = pane.selected(hide) {
            pane.list.toggle(index);
            pane.clamp_cursor(hide);
        }
    }

    /// Launch the focused pane's selected command, if it has one
    pub fn open_selected(&self) {
        let pane = self.focused_pane();
        if let Some(index) = pane.selected(self.hide_done)
            && let Some(command) = &pane.list.all[index].command
        {
            launch(command);
        }
    }

    /// Move the focused pane's selection by `delta` rows, saturating
    pub fn move_selection(&mut self, delta: isize) {
        let hide = self.hide_done;
        let pane = self.focused_pane_mut();
        let len = pane.list.visible(hide).len();
        if len == 0 {
            return;
        }
        let last = len - 1;
        pane.cursor = pane.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn select_first(&mut self) {
        self.focused_pane_mut().cursor = 0;
    }

    pub fn select_last(&mut self) {
        let hide = self.hide_done;
        let pane = self.focused_pane_mut();
        let len = pane.list.visible(hide).len();
        pane.cursor = len.saturating_sub(1);
    }
}

/// Run the dashboard: load the three lists, drive the event loop, and
/// persist everything on clean shutdown.
pub fn run(data_dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir(data_dir_override)?;
    let today = Local::now().date_naive();

    let lists = [
        load_list(&dir, ListKind::Yesterday, today)?,
        load_list(&dir, ListKind::Today, today)?,
        load_list(&dir, ListKind::Weekly, today)?,
    ];
    let mut app = App::new(lists);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal before any error can reach main
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    // Quit is the only exit path, and it always persists. The stamp is
    // taken fresh in case the session crossed midnight.
    let today = Local::now().date_naive();
    for pane in &app.panes {
        save_list(&dir, &pane.list, today)?;
    }
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use pretty_assertions::assert_eq;

    fn app_with(tasks: Vec<Task>) -> App {
        App::new([
            TaskList::new(ListKind::Yesterday, tasks),
            TaskList::new(ListKind::Today, Vec::new()),
            TaskList::new(ListKind::Weekly, Vec::new()),
        ])
    }

    fn done(title: &str) -> Task {
        let mut t = Task::new(title);
        t.done = true;
        t
    }

    #[test]
    fn test_focus_is_cyclic() {
        let mut app = app_with(Vec::new());
        assert_eq!(app.focus, 0);
        app.focus_forward();
        app.focus_forward();
        app.focus_forward();
        assert_eq!(app.focus, 0);
        app.focus_backward();
        assert_eq!(app.focus, 2);
    }

    #[test]
    fn test_toggle_selected_writes_through_with_duplicate_titles() {
        // Two tasks share a title; hiding the completed one must still route
        // the toggle to the entry the cursor is on.
        let mut app = app_with(vec![done("dup"), Task::new("dup")]);
        app.toggle_hide_done();
        // Only index 1 is visible; cursor 0 selects it
        assert_eq!(app.focused_pane().selected(true), Some(1));
        app.toggle_selected();
        assert!(app.panes[0].list.all[1].done);
        assert!(!app.panes[0].list.all[0].done, "first entry untouched");
    }

    #[test]
    fn test_hide_done_clamps_cursor() {
        let mut app = app_with(vec![Task::new("a"), done("b"), done("c")]);
        app.panes[0].cursor = 2;
        app.toggle_hide_done();
        assert_eq!(app.focused_pane().cursor, 0);
        assert_eq!(app.focused_pane().selected(true), Some(0));
    }

    #[test]
    fn test_toggling_last_visible_keeps_selection_valid() {
        let mut app = app_with(vec![Task::new("a"), Task::new("b")]);
        app.toggle_hide_done();
        app.move_selection(1);
        app.toggle_selected();
        // "b" is now hidden; the cursor must have been pulled back onto "a"
        assert_eq!(app.focused_pane().selected(true), Some(0));
    }

    #[test]
    fn test_move_selection_saturates() {
        let mut app = app_with(vec![Task::new("a"), Task::new("b")]);
        app.move_selection(-1);
        assert_eq!(app.focused_pane().cursor, 0);
        app.move_selection(10);
        assert_eq!(app.focused_pane().cursor, 1);
        app.select_first();
        assert_eq!(app.focused_pane().cursor, 0);
        app.select_last();
        assert_eq!(app.focused_pane().cursor, 1);
    }

    #[test]
    fn test_empty_pane_has_no_selection() {
        let mut app = app_with(Vec::new());
        assert_eq!(app.focused_pane().selected(false), None);
        app.toggle_selected();
        app.move_selection(1);
        assert_eq!(app.focused_pane().cursor, 0);
    }
}
