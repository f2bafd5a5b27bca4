use crate::auth::PasswordStrength;
use crate::controller::{AppState, Notice, View};
use crate::storage::SqliteStore;
use crate::ui::chart::PieChart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryField {
    Amount,
    Category,
}

/// Selected row and first visible row of the transaction list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
    pub(crate) offset: usize,
}

impl ListCursor {
    /// Select `index`, clamped to a list of `len` entries, and slide the
    /// window of `rows` lines so the selection stays on screen.
    pub(crate) fn select(&mut self, index: usize, len: usize, rows: usize) {
        let rows = rows.max(1);
        self.selected = index.min(len.saturating_sub(1));
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
    }
}

/// Terminal-side state: form buffers, focus and scroll position, wrapped
/// around the shared [`AppState`].
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) show_help: bool,
    pub(crate) state: AppState<SqliteStore>,

    // Login form
    pub(crate) username_input: String,
    pub(crate) password_input: String,
    pub(crate) login_focus: LoginField,

    // Transaction entry form
    pub(crate) amount_input: String,
    pub(crate) category_input: String,
    pub(crate) entry_focus: EntryField,

    pub(crate) cursor: ListCursor,

    pub(crate) chart: PieChart,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(state: AppState<SqliteStore>) -> Self {
        let mut app = Self {
            running: true,
            show_help: false,
            state,

            username_input: String::new(),
            password_input: String::new(),
            login_focus: LoginField::Username,

            amount_input: String::new(),
            category_input: String::new(),
            entry_focus: EntryField::Amount,

            cursor: ListCursor::default(),

            chart: PieChart::default(),

            visible_rows: 10,
        };
        app.refresh_chart();
        app.select_last_transaction();
        app
    }

    pub(crate) fn view(&self) -> View {
        self.state.view()
    }

    pub(crate) fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.password_input)
    }

    // ── Form editing ─────────────────────────────────────────

    fn focused_input(&mut self) -> &mut String {
        match (self.view(), self.login_focus, self.entry_focus) {
            (View::LoggedOut, LoginField::Username, _) => &mut self.username_input,
            (View::LoggedOut, LoginField::Password, _) => &mut self.password_input,
            (View::LoggedIn, _, EntryField::Amount) => &mut self.amount_input,
            (View::LoggedIn, _, EntryField::Category) => &mut self.category_input,
        }
    }

    pub(crate) fn type_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    pub(crate) fn backspace(&mut self) {
        self.focused_input().pop();
    }

    pub(crate) fn next_field(&mut self) {
        match self.view() {
            View::LoggedOut => {
                self.login_focus = match self.login_focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            View::LoggedIn => {
                self.entry_focus = match self.entry_focus {
                    EntryField::Amount => EntryField::Category,
                    EntryField::Category => EntryField::Amount,
                };
            }
        }
    }

    pub(crate) fn reset_login_form(&mut self) {
        self.username_input.clear();
        self.password_input.clear();
        self.login_focus = LoginField::Username;
    }

    fn reset_entry_form(&mut self) {
        self.amount_input.clear();
        self.category_input.clear();
        self.entry_focus = EntryField::Amount;
    }

    // ── Commands ─────────────────────────────────────────────

    pub(crate) fn submit_login(&mut self) {
        let result = self
            .state
            .on_login_submit(&self.username_input, &self.password_input);
        if let Some(Notice::LoggedIn { username }) = self.state.report(result) {
            log::debug!("Opening dashboard for '{username}'");
            self.reset_login_form();
            self.reset_entry_form();
            self.refresh_chart();
            self.select_last_transaction();
        }
    }

    pub(crate) fn submit_register(&mut self) {
        let result = self
            .state
            .on_register_submit(&self.username_input, &self.password_input);
        if let Some(Notice::Registered { .. }) = self.state.report(result) {
            self.password_input.clear();
            self.login_focus = LoginField::Password;
        }
    }

    pub(crate) fn submit_transaction(&mut self) {
        let result = self
            .state
            .on_add_transaction(&self.amount_input, &self.category_input);
        if let Some(Notice::TransactionAdded(_)) = self.state.report(result) {
            self.reset_entry_form();
            self.refresh_chart();
            self.select_last_transaction();
        }
    }

    pub(crate) fn logout(&mut self) {
        let result = self.state.on_logout();
        if let Some(Notice::LoggedOut) = self.state.report(result) {
            self.reset_login_form();
            self.reset_entry_form();
        }
    }

    // ── Chart / list ─────────────────────────────────────────

    fn refresh_chart(&mut self) {
        self.chart = PieChart::from_series(self.state.chart_series());
    }

    fn select_transaction(&mut self, index: usize) {
        let len = self.state.ledger().len();
        self.cursor.select(index, len, self.visible_rows);
    }

    fn select_last_transaction(&mut self) {
        self.select_transaction(usize::MAX);
    }

    pub(crate) fn move_down(&mut self) {
        self.select_transaction(self.cursor.selected.saturating_add(1));
    }

    pub(crate) fn move_up(&mut self) {
        self.select_transaction(self.cursor.selected.saturating_sub(1));
    }

    pub(crate) fn goto_top(&mut self) {
        self.select_transaction(0);
    }

    pub(crate) fn goto_bottom(&mut self) {
        self.select_last_transaction();
    }
}
