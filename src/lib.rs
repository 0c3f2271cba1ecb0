use crate::app_config::AppConfig;
use crate::commands::cli::{select_emergency_fund, CliArgs};
use crate::core::file_system::PreferenceStore;
use crate::core::runway::runway;
use crate::credentials::Credentials;
use crate::services::finance::{FinanceServiceTrait, MintService};
use dotenvy::dotenv;
use log::{debug, info};
use std::error::Error;
use std::io::{self, BufRead, Write};

pub mod core;
pub mod services;
pub mod commands;
pub mod app_config;
pub mod credentials;

pub fn initialize_environment() {
    pretty_env_logger::init();
    match dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

pub async fn initialize_system(args: &CliArgs) -> Result<(MintService, PreferenceStore), Box<dyn Error>> {
    let config = AppConfig::new()?.with_prefs_file(args.prefs_file.clone());
    let credentials = Credentials::from_env();
    let service = MintService::login(&config.api_url, &credentials).await?;
    let store = PreferenceStore::from_config(&config);
    Ok((service, store))
}

/// Fetches accounts and budget, makes sure an emergency fund is chosen and
/// writes the runway sentence to `output`.
pub async fn report_runway<S, R, W>(
    service: &S,
    store: &PreferenceStore,
    reset: bool,
    input: &mut R,
    output: &mut W,
) -> Result<String, Box<dyn Error>>
where
    S: FinanceServiceTrait + ?Sized,
    R: BufRead,
    W: Write,
{
    let accounts = service.get_accounts().await?;
    let budget = service.get_budgets().await?;

    let saved = if reset {
        info!("Ignoring saved preferences at {}", store.path().display());
        None
    } else {
        store.load().into_valid()
    };

    let prefs = match saved {
        Some(prefs) => prefs,
        None => {
            writeln!(output, "You need to select an account and your emergency fund info")?;
            let prefs = select_emergency_fund(&accounts, &budget, store, input, output)?;
            writeln!(output, "Your information has been saved for future use.")?;
            prefs
        }
    };

    let message = runway(&accounts, &prefs.account_ids, prefs.monthly_expenses);
    writeln!(output, "{}", message)?;
    Ok(message)
}

pub async fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let (service, store) = initialize_system(&args).await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    report_runway(&service, &store, args.reset, &mut input, &mut stdout).await?;
    Ok(())
}
