use super::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "backoffice", about = "Back-office API client")]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,
    /// Print session events while the command runs.
    #[arg(long)]
    pub watch_events: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the signed-in account.
    Profile,
    /// List a resource as JSON.
    List {
        #[arg(value_enum)]
        resource: Resource,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete history entries older than the server's retention window.
    PurgeHistoriques,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Clients,
    Blacklist,
    Produits,
    Fournisseurs,
    Commandes,
    Retours,
    Historiques,
    Notifications,
    Users,
}
