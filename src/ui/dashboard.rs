use chrono::{DateTime, Utc};

use super::status_bar::StatusBar;
use super::table::PullRequestTable;
use crate::notify::PullRequestSnapshot;

const KEY_HELP: &str = "Select a row with `a <row>` or `c <row>`, then `o` to open it in a browser.";

/// Which table row selections and "open" act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFocus {
    #[default]
    Assigned,
    Created,
}

/// Everything the console shows: two tables and a status bar.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub assigned: PullRequestTable,
    pub created: PullRequestTable,
    pub status_bar: StatusBar,
    focus: TableFocus,
}

impl Dashboard {
    pub fn new(snapshot: PullRequestSnapshot, status_bar: StatusBar) -> Self {
        Self {
            assigned: PullRequestTable::new("Assigned Pull Requests", snapshot.assigned),
            created: PullRequestTable::new("Created Pull Requests", snapshot.created),
            status_bar,
            focus: TableFocus::default(),
        }
    }

    pub fn focus(&self) -> TableFocus {
        self.focus
    }

    /// Move focus to `table` and select a zero based row in it.
    pub fn select(&mut self, table: TableFocus, row: usize) -> Option<&str> {
        self.focus = table;
        self.table_mut(table).select(row)
    }

    /// URL of the selected row in the focused table.
    pub fn selected_url(&self) -> Option<&str> {
        match self.focus {
            TableFocus::Assigned => self.assigned.selected_url(),
            TableFocus::Created => self.created.selected_url(),
        }
    }

    fn table_mut(&mut self, table: TableFocus) -> &mut PullRequestTable {
        match table {
            TableFocus::Assigned => &mut self.assigned,
            TableFocus::Created => &mut self.created,
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            self.assigned.render(now),
            self.created.render(now),
            self.status_bar.text(),
            KEY_HELP
        )
    }
}
