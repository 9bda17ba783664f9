//! UI Components
//!
//! Leptos components for the board.

mod board_view;
mod list_column;
mod item_row;
mod prompt_dialog;
mod confirm_button;

pub use board_view::BoardView;
pub use list_column::ListColumn;
pub use item_row::ItemRow;
pub use prompt_dialog::PromptDialog;
pub use confirm_button::ConfirmButton;
