mod commands;
mod history;

pub use commands::StyleCommand;
pub use history::ColorSchemeHistory;
