mod auth_service_impl;
mod client_service_impl;
mod commande_service_impl;
mod fournisseur_service_impl;
mod historique_service_impl;
mod notification_service_impl;
mod produit_service_impl;
mod retour_service_impl;
mod user_service_impl;
mod util;

pub use auth_service_impl::*;
pub use client_service_impl::*;
pub use commande_service_impl::*;
pub use fournisseur_service_impl::*;
pub use historique_service_impl::*;
pub use notification_service_impl::*;
pub use produit_service_impl::*;
pub use retour_service_impl::*;
pub use user_service_impl::*;
