//! # Stockroom Entry Point
//!
//! The actual setup is in lib.rs so that the commands and state can be
//! tested without launching a window.

// Prevents additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() -> Result<(), Box<dyn std::error::Error>> {
    stockroom_desktop_lib::run()
}
