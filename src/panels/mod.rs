mod history_panel;
mod style_tree_panel;
mod toolbar;

pub use history_panel::history_panel;
pub use style_tree_panel::style_tree_panel;
pub use toolbar::toolbar;
