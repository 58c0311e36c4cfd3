//! Terminal presentation components used by the CLI client.
pub mod terminal;
pub mod ui;
pub mod widgets;
