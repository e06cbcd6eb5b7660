use odoo_rpc_client::{ConnectionParameters, OdooClient};
use odoo_rpc_modules::{HelpdeskApi, NewsletterApi};
use std::path::Path;
use std::process::ExitCode;

/// Usage: `example-odoo-rpc-app [config.toml]`
///
/// Without a path, settings come from `ODOO_URL`, `ODOO_DATABASE`,
/// `ODOO_USERNAME` and `ODOO_API_KEY`.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let params = match std::env::args().nth(1) {
        Some(path) => match ConnectionParameters::load(Path::new(&path)) {
            Ok(params) => params,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => ConnectionParameters::from_env(),
    };

    let mut client = match OdooClient::connect(params) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = client.test_connection();
    println!("{}", outcome.message);
    if !outcome.success {
        return ExitCode::FAILURE;
    }

    // Either module may be missing on the server; report and carry on.
    match HelpdeskApi::new(&mut client).teams() {
        Ok(teams) => {
            println!("Helpdesk teams:");
            for team in teams {
                println!("  [{}] {}", team.id, team.name);
            }
        }
        Err(err) => println!("Helpdesk unavailable: {err}"),
    }

    match NewsletterApi::new(&mut client).mailing_lists() {
        Ok(lists) => {
            println!("Mailing lists:");
            for list in lists {
                println!("  [{}] {} ({} contacts)", list.id, list.name, list.contact_count);
            }
        }
        Err(err) => println!("Newsletter unavailable: {err}"),
    }

    ExitCode::SUCCESS
}
