use anyhow::Result;
use vestibule_client::{Config, RegistrationClient};

/// Run the interactive registration form.
pub async fn run_form(endpoint: Option<String>) -> Result<()> {
    let config = Config::load_with_endpoint(endpoint)?;
    log::debug!("registration endpoint: {}", config.endpoint);
    let client = RegistrationClient::new(&config)?;
    crate::tui::run_form(client)
}
