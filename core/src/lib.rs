//! Core of the run-log viewer: log parsing, view-model building,
//! selection state, settings persistence and resource loading.
//!
//! The browser (or any other shell) is an external collaborator.
//! It feeds `ViewerCommand`s into the engine and renders the `ViewModel`
//! it gets back.

pub mod action;
pub mod columns;
pub mod command;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod event;
pub mod loader;
pub mod path;
pub mod ranking;
pub mod reducer;
pub mod section;
pub mod selection;
pub mod source;
pub mod state;
pub mod store;
pub mod summary;
pub mod summary_builder;
pub mod time;
pub mod time_breakdown;
pub mod tracking;
pub mod types;
pub mod view;
