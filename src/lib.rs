// lib.rs - Library root for the wilx-nano editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod mode;
pub mod persistence;
pub mod position;
pub mod save_log;
pub mod search;
pub mod ui;
pub mod view;
pub mod viewport;
