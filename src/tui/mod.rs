// TUI module for the interactive event finder
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
pub use timestamps::format_timestamp;
use tracing::debug;

use self::terminal::TerminalManager;
use crate::controller::SearchController;

/// Run the interactive TUI on `controller`
///
/// A load spawned on the controller beforehand keeps running while the UI is
/// up; results appear once it lands. The controller is disposed on exit so a
/// load still in flight is discarded.
pub fn run_interactive(controller: SearchController) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(controller);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;

    let mut controller = app.into_controller();
    debug!(history = controller.history().len(), "leaving interactive mode");
    controller.dispose();

    res
}
