use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use homeservice_client::{
    error::FormError,
    inputs::load_field_inputs,
    models::common::{ErrorMap, FieldName, SubmitOutcome},
    submit, BookingApiClient, BookingForm, FormController, LoginForm, RegistrationForm, Role,
};

fn print_errors<F: FieldName>(errors: &ErrorMap<F>) {
    for (field, message) in errors.iter() {
        println!("  {}: {}", field.name(), message);
    }
}

fn print_outcome(outcome: &SubmitOutcome) {
    println!("{}", outcome.notice.message);
    if let Some(path) = outcome.navigate_to {
        println!("Next page: {}", path);
    }
}

async fn run_booking(path: &Path) -> Result<(), Box<dyn Error>> {
    let inputs = load_field_inputs(path)?;
    let client = BookingApiClient::from_env()?;
    info!("Submitting booking to {}", client.base_url());

    let mut form = BookingForm::default();
    for (name, value) in &inputs {
        form.apply_named_input(name, value)?;
    }

    match submit(&mut form, &client).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(())
        }
        Err(err @ FormError::Validation(_)) => {
            println!("Please fix the following fields:");
            print_errors(form.errors());
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

async fn run_registration(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut inputs = load_field_inputs(path)?;
    let client = BookingApiClient::from_env()?;

    let role: Role = inputs.remove("role").unwrap_or_default().parse()?;

    let mut form = RegistrationForm::new();
    form.select_role(role)?;
    for (name, value) in &inputs {
        form.apply_named_input(name, value)?;
    }

    match submit(&mut form, &client).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(())
        }
        Err(err @ FormError::Validation(_)) => {
            println!("Please fix the following fields:");
            print_errors(form.errors());
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn run_login(path: &Path) -> Result<(), Box<dyn Error>> {
    let inputs = load_field_inputs(path)?;

    let mut form = LoginForm::new();
    for (name, value) in &inputs {
        form.apply_named_input(name, value)?;
    }
    println!("{}", form.feedback().message);

    match form.submit() {
        Ok(next) => {
            println!("Next page: {}", next);
            Ok(())
        }
        Err(err) => {
            print_errors(form.errors());
            Err(err.into())
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "homeservice-client")]
#[command(about = "Fill in and submit a home-services form from a JSON file", long_about = None)]
struct Cli {
    /// Form to drive
    #[arg(value_enum)]
    form: FormKind,

    /// JSON object of field name to value
    inputs: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormKind {
    Booking,
    Register,
    Login,
}

async fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    match cli.form {
        FormKind::Booking => run_booking(&cli.inputs).await,
        FormKind::Register => run_registration(&cli.inputs).await,
        FormKind::Login => run_login(&cli.inputs),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_form_and_inputs() {
        let cli = Cli::try_parse_from(["homeservice-client", "register", "details.json"]).unwrap();
        assert_eq!(cli.form, FormKind::Register);
        assert_eq!(cli.inputs, PathBuf::from("details.json"));
    }

    #[test]
    fn test_rejects_unknown_form() {
        assert!(Cli::try_parse_from(["homeservice-client", "checkout", "x.json"]).is_err());
        assert!(Cli::try_parse_from(["homeservice-client", "booking"]).is_err());
    }
}
