//! Minimal text rendering of the pull request dashboard.
//!
//! The [`Dashboard`] is owned by a render surface and only ever mutated
//! through [`RenderSurface::queue_update`].

mod console;
mod dashboard;
mod input;
mod status_bar;
mod table;

pub use console::ConsoleSurface;
pub use dashboard::{Dashboard, TableFocus};
pub use input::{parse_command, spawn_stdin_reader, Command, InputHandler, SystemBrowser, UrlOpener};
pub use status_bar::StatusBar;
pub use table::PullRequestTable;

/// Mutation applied to the dashboard on the surface's own task.
pub type RenderFn = Box<dyn FnOnce(&mut Dashboard) + Send + 'static>;

pub trait RenderSurface: Send + Sync {
    /// Schedule `update` to run exclusively against the dashboard, followed by
    /// a single redraw.
    fn queue_update(&self, update: RenderFn);

    /// Halt the render loop.
    fn stop(&self);
}
