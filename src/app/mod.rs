//! Core application modules for Prompt Dash.
//!
//! # Module Organization
//!
//! ## Data and Filtering
//! - [`catalog`] - The static prompt dataset and language names
//! - [`filter`] - Filter state, address synchronisation and autocompletion
//!
//! ## UI and Infrastructure
//! - [`dashui`] - The user interface
//! - [`clipboard`] - Copying prompt text to the system clipboard
//! - [`notifications`] - Blocking notices shown after a copy
//! - [`config`] - Command line and settings file handling

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod dashui;
pub mod filter;
pub mod notifications;

pub use dashui::app::PromptApp;
