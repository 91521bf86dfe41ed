use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::github_client::{format_age, PullRequestSummary};

const COLUMNS: [&str; 7] = [
    "Repository",
    "ID",
    "Author",
    "Title",
    "Reviewers",
    "Status",
    "Age",
];

/// One titled table of pull requests with a selectable row.
#[derive(Debug, Clone)]
pub struct PullRequestTable {
    title: String,
    rows: Arc<[PullRequestSummary]>,
    selected: Option<usize>,
}

impl PullRequestTable {
    pub fn new(title: impl Into<String>, rows: Arc<[PullRequestSummary]>) -> Self {
        Self {
            title: title.into(),
            rows,
            selected: None,
        }
    }

    pub fn rows(&self) -> &[PullRequestSummary] {
        &self.rows
    }

    /// Replace every row. A selection that no longer exists is dropped.
    pub fn update(&mut self, rows: Arc<[PullRequestSummary]>) {
        self.rows = rows;
        if self.selected.is_some_and(|row| row >= self.rows.len()) {
            self.selected = None;
        }
    }

    /// Select a data row (zero based). Out-of-range rows clear the selection
    /// and are otherwise ignored.
    pub fn select(&mut self, row: usize) -> Option<&str> {
        self.selected = (row < self.rows.len()).then_some(row);
        self.selected_url()
    }

    /// URL of the selected pull request, used for "open in browser".
    pub fn selected_url(&self) -> Option<&str> {
        self.selected
            .and_then(|row| self.rows.get(row))
            .map(|pr| pr.url.as_str())
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let mut cells: Vec<[String; 7]> = vec![COLUMNS.map(str::to_string)];
        cells.extend(self.rows.iter().map(|pr| row_cells(pr, now)));

        let mut widths = [0usize; 7];
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = format!("{} ({})\n", self.title, self.rows.len());
        for (idx, row) in cells.iter().enumerate() {
            let marker = if idx > 0 && self.selected == Some(idx - 1) {
                '>'
            } else {
                ' '
            };
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            out.push(marker);
            out.push(' ');
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn row_cells(pr: &PullRequestSummary, now: DateTime<Utc>) -> [String; 7] {
    if pr.draft {
        return [
            pr.repository.clone(),
            pr.id.clone(),
            pr.author.clone(),
            pr.title.clone(),
            "-".to_string(),
            "draft".to_string(),
            "-".to_string(),
        ];
    }

    [
        pr.repository.clone(),
        pr.id.clone(),
        pr.author.clone(),
        pr.title.clone(),
        pr.reviewer_count.to_string(),
        pr.status.to_string(),
        format_age(pr.opened_at, now),
    ]
}
