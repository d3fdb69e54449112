pub mod app;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod lights;
pub mod mvi;
pub mod plain;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
