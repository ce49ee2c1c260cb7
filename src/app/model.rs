//! Application model: `App` and `InputMode`.
//!
//! `App` owns every piece of mutable state (catalog, session, view controls,
//! the add-song form and the cursor). The derived view and statistics are
//! recomputed from it on demand and never stored.

use tracing::debug;

use crate::auth::{IDENTITIES, Identity, Session};
use crate::library::{Catalog, Track};
use crate::view::{self, CatalogStats, DerivedView, FilterField, GroupField, SortField, ViewControls};

use super::form::AddSongForm;

/// What keystrokes currently edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    AddForm,
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub session: Session,
    pub controls: ViewControls,
    pub mode: InputMode,
    pub show_add_form: bool,
    pub form: AddSongForm,
    /// Cursor position in the flattened derived view.
    pub selected: usize,
    /// Highlighted entry on the login screen, an index into `IDENTITIES`.
    pub login_choice: usize,
}

impl App {
    /// Create a new `App` over `catalog` with the given starting controls.
    pub fn new(catalog: Catalog, session: Session, controls: ViewControls) -> Self {
        Self {
            catalog,
            session,
            controls,
            mode: InputMode::Normal,
            show_add_form: false,
            form: AddSongForm::default(),
            selected: 0,
            login_choice: 0,
        }
    }

    pub fn current_user(&self) -> Option<&'static Identity> {
        self.session.current()
    }

    /// Whether the active identity may add and delete tracks.
    pub fn can_edit(&self) -> bool {
        self.session.can_edit()
    }

    pub fn derived_view(&self) -> DerivedView<'_> {
        view::derive(self.catalog.tracks(), &self.controls)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(self.catalog.tracks())
    }

    /// The track under the cursor, if the view is not empty.
    pub fn selected_track(&self) -> Option<&Track> {
        self.derived_view().tracks().nth(self.selected)
    }

    // Session

    pub fn login(&mut self, username: &str) {
        if self.session.login(username).is_some() {
            self.mode = InputMode::Normal;
            self.selected = 0;
        }
    }

    /// Log in as the identity highlighted on the login screen.
    pub fn login_selected(&mut self) {
        if let Some(identity) = IDENTITIES.get(self.login_choice) {
            self.login(identity.username);
        }
    }

    pub fn login_next(&mut self) {
        self.login_choice = (self.login_choice + 1) % IDENTITIES.len();
    }

    pub fn login_prev(&mut self) {
        self.login_choice = (self.login_choice + IDENTITIES.len() - 1) % IDENTITIES.len();
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.show_add_form = false;
        self.mode = InputMode::Normal;
        self.login_choice = 0;
    }

    // View controls

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.controls.search = term.into();
        self.clamp_selection();
    }

    pub fn enter_search_mode(&mut self) {
        self.mode = InputMode::Search;
    }

    /// Leave search mode, keeping the current term.
    pub fn exit_search_mode(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.controls.search.push(c);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.controls.search.pop();
        self.clamp_selection();
    }

    /// Clear the search term and leave search mode.
    pub fn clear_search(&mut self) {
        self.controls.search.clear();
        self.mode = InputMode::Normal;
        self.clamp_selection();
    }

    pub fn cycle_filter(&mut self) {
        self.controls.filter_by = view::cycle(&FilterField::ALL, self.controls.filter_by);
        self.clamp_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.controls.sort_by = view::cycle(&SortField::ALL, self.controls.sort_by);
    }

    pub fn toggle_sort_order(&mut self) {
        self.controls.sort_order = self.controls.sort_order.toggled();
    }

    pub fn cycle_group(&mut self) {
        self.controls.group_by = view::cycle(&GroupField::ALL, self.controls.group_by);
    }

    // Add / delete

    /// Open the add-song form. Only administrators get one.
    pub fn open_add_form(&mut self) {
        if !self.can_edit() {
            debug!("add form ignored: not an administrator");
            return;
        }
        self.show_add_form = true;
        self.mode = InputMode::AddForm;
    }

    /// Hide the form. Whatever was typed stays for next time.
    pub fn cancel_add_form(&mut self) {
        self.show_add_form = false;
        self.mode = InputMode::Normal;
    }

    /// Add the form's track. On success the form is reset and closed; when a
    /// required field is missing it stays open untouched.
    pub fn submit_add_form(&mut self) -> Option<String> {
        if !self.can_edit() || !self.show_add_form {
            return None;
        }
        let id = self.catalog.add(self.form.to_candidate())?;
        self.form = AddSongForm::default();
        self.cancel_add_form();
        Some(id)
    }

    /// Delete the track under the cursor. Administrators only.
    pub fn delete_selected(&mut self) -> bool {
        if !self.can_edit() || self.catalog.is_empty() {
            return false;
        }
        let Some(id) = self.selected_track().map(|t| t.id.clone()) else {
            return false;
        };
        let removed = self.catalog.remove(&id);
        self.clamp_selection();
        removed
    }

    // Cursor

    pub fn next(&mut self) {
        let len = self.derived_view().len;
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.derived_view().len;
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.derived_view().len.saturating_sub(1);
    }

    /// Keep the cursor inside the current view.
    fn clamp_selection(&mut self) {
        let len = self.derived_view().len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
