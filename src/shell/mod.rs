//! main file for the dine-in till

pub mod model;

pub(crate) mod error;
mod session;
mod state;
mod util;

use crate::shell::model::config::TillConfig;
use crate::shell::model::menu::Menu;
use crate::shell::state::TillState;
use std::io;

/// Run the till over locked stdin/stdout.
pub fn run(config: TillConfig) -> io::Result<()> {
    let mut state = TillState::new(Menu::house_menu());
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::serve(&mut state, &config, &mut stdin.lock(), &mut stdout.lock())
}
