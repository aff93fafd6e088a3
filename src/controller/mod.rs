//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and the catalog client. It is
//! organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: The artist-search / album-listing orchestration

mod input;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

// User-facing copy. Everything the error panel can show lives here or in
// `CatalogError`; no error escapes as anything but one of these strings.
pub const MSG_CONFIG_MISSING: &str =
    "Configuration manquante - L'application n'est pas configurée correctement pour la production";
pub const MSG_NOT_CONFIGURED: &str = "Application non configurée - Contactez l'administrateur";
pub const MSG_NOT_READY: &str =
    "Connexion à Spotify en cours... Réessayez dans quelques secondes";
pub const MSG_AUTH_FAILED: &str = "Erreur d'authentification Spotify - Vérifiez les clés API";
pub const MSG_CONNECT_FAILED: &str = "Erreur de connexion à Spotify";
pub const MSG_ARTIST_NOT_FOUND: &str = "Artiste non trouvé";

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }
}
