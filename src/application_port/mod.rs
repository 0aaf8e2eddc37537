mod api_error;
mod auth_service;
mod client_service;
mod commande_service;
mod fournisseur_service;
mod historique_service;
mod notification_service;
mod produit_service;
mod retour_service;
mod user_service;

pub use api_error::*;
pub use auth_service::*;
pub use client_service::*;
pub use commande_service::*;
pub use fournisseur_service::*;
pub use historique_service::*;
pub use notification_service::*;
pub use produit_service::*;
pub use retour_service::*;
pub use user_service::*;
