use backoffice::application_port::LoginInput;
use backoffice::client::{Backoffice, SessionWatcher};
use backoffice::domain_model::*;
use backoffice::logger::*;
use backoffice::settings::*;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn list(
    backoffice: &Backoffice,
    resource: Resource,
    page: Option<u32>,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    match resource {
        Resource::Clients => print_json(&backoffice.client_service.list().await?),
        Resource::Blacklist => print_json(&backoffice.client_service.blacklist().await?),
        Resource::Produits => {
            let query = ProduitQuery {
                page,
                limit,
                ..Default::default()
            };
            print_json(&backoffice.produit_service.list(query).await?)
        }
        Resource::Fournisseurs => print_json(&backoffice.fournisseur_service.list().await?),
        Resource::Commandes => {
            let query = CommandeQuery {
                page,
                limit,
                ..Default::default()
            };
            print_json(&backoffice.commande_service.list(query).await?)
        }
        Resource::Retours => {
            let filter = RetourFilter {
                page,
                per_page: limit,
                ..Default::default()
            };
            print_json(&backoffice.retour_service.list(filter).await?)
        }
        Resource::Historiques => {
            let filter = HistoriqueFilter {
                page,
                per_page: limit,
                ..Default::default()
            };
            print_json(&backoffice.historique_service.list(filter).await?)
        }
        Resource::Notifications => {
            let page = backoffice
                .notification_service
                .list(page.unwrap_or(1), limit.unwrap_or(25))
                .await?;
            print_json(&page)
        }
        Resource::Users => print_json(&backoffice.user_service.list().await?),
    }
}

async fn run(backoffice: &Backoffice, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let result = backoffice
                .auth_service
                .login(LoginInput { email, password })
                .await?;
            print_json(&result.user)
        }
        Command::Logout => Ok(backoffice.auth_service.logout().await?),
        Command::Profile => print_json(&backoffice.auth_service.profile().await?),
        Command::List {
            resource,
            page,
            limit,
        } => list(backoffice, resource, page, limit).await,
        Command::PurgeHistoriques => {
            let deleted = backoffice.historique_service.purge_old().await?;
            print_json(&PurgeResult { deleted })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let backoffice = Backoffice::try_new(&project_settings)?;

    let cancellation_token = CancellationToken::new();
    let watcher = cli.watch_events.then(|| {
        let watcher = SessionWatcher::new(
            backoffice.events().subscribe(),
            cancellation_token.clone(),
        );
        tokio::spawn(watcher.run(|event| match serde_json::to_string(event) {
            Ok(line) => eprintln!("session event: {line}"),
            Err(e) => error!(error = %e, "cannot render session event"),
        }))
    });

    let outcome = run(&backoffice, cli.command).await;

    cancellation_token.cancel();
    if let Some(handle) = watcher {
        match handle.await {
            Ok(Ok(seen)) => debug!(seen, "session watcher stopped"),
            Ok(Err(e)) => error!("session watcher error: {:#?}", e),
            Err(e) => error!("session watcher panicked: {}", e),
        }
    }

    outcome
}
