//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (UI state, derived screen)
//! - `catalog`: Domain types and the catalog client trait
//! - `dto`: Wire-format types for the Spotify Web API
//! - `spotify_client`: HTTP implementation of the catalog client
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog;
pub mod dto;
mod spotify_client;
mod types;

// Re-export all public types for convenient access
pub use types::{Screen, UiState, SUGGESTED_ARTISTS};

pub use catalog::{Album, ArtistRef, CatalogClient};

pub use spotify_client::SpotifyClient;

pub use app_model::AppModel;
