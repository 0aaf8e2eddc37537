mod access_token;
mod client;
mod commande;
mod fournisseur;
mod historique;
mod id;
mod notification;
mod page;
mod produit;
mod request;
mod response;
mod retour;
mod session_event;
mod user;

pub use access_token::*;
pub use client::*;
pub use commande::*;
pub use fournisseur::*;
pub use historique::*;
pub use id::*;
pub use notification::*;
pub use page::*;
pub use produit::*;
pub use request::*;
pub use response::*;
pub use retour::*;
pub use session_event::*;
pub use user::*;
