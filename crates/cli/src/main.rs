use api_client::HttpBackend;
use clap::{Parser, Subcommand};
use symptom_core::{
    constants::{API_BASE_URL_ENV, REQUEST_TIMEOUT_ENV, SUBMIT_POLICY_ENV},
    render::text::card_text,
    ClientConfig, ClientResult, CommitOutcome, HtmlPage, RegionState, SymptomChecker, View,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "symptom")]
#[command(about = "Symptom checker CLI")]
struct Cli {
    /// Prediction service base URL (overrides SYMPTOM_API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Request timeout in seconds (overrides SYMPTOM_REQUEST_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List known symptoms
    Symptoms {
        /// Only show symptoms containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },
    /// Predict diseases for a set of symptoms
    Predict {
        /// Symptom to select; repeat for several. Must match a known symptom, ignoring case
        #[arg(long = "symptom", short = 's', required = true)]
        symptoms: Vec<String>,
        /// Free-text description of the illness
        #[arg(long, default_value = "")]
        description: String,
        /// Print the page markup instead of plain text
        #[arg(long)]
        html: bool,
    },
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let base_url = cli
        .api_base_url
        .clone()
        .or_else(|| std::env::var(API_BASE_URL_ENV).ok());
    let timeout = cli
        .timeout_secs
        .map(|s| s.to_string())
        .or_else(|| std::env::var(REQUEST_TIMEOUT_ENV).ok());

    Ok(ClientConfig::from_env_values(
        base_url,
        std::env::var(SUBMIT_POLICY_ENV).ok(),
        timeout,
    )?)
}

/// Turns a controller failure into the command's error, carrying only the user-facing message.
///
/// Returning it from `main` prints `Error: <message>` and exits non-zero.
fn user_facing<T>(result: ClientResult<T>) -> anyhow::Result<T> {
    result.map_err(|e| anyhow::anyhow!(e.user_message()))
}

/// Selects each symptom the way pressing Enter in the search box would.
///
/// Returns the inputs that matched nothing.
fn select_all<V: View>(
    checker: &mut SymptomChecker<HttpBackend, V>,
    symptoms: &[String],
) -> Vec<String> {
    symptoms
        .iter()
        .filter(|s| checker.commit_exact_match(s) == CommitOutcome::NoMatch)
        .cloned()
        .collect()
}

async fn list_symptoms(cfg: &ClientConfig, search: Option<String>) -> anyhow::Result<()> {
    let backend = HttpBackend::new(cfg)?;
    let mut checker = SymptomChecker::new(backend, RegionState::default(), cfg);
    user_facing(checker.load_vocabulary().await)?;
    if let Some(term) = search {
        checker.set_search_term(term);
    }

    let entries = &checker.view().dropdown;
    if entries.is_empty() {
        println!("No symptoms found.");
    } else {
        for entry in entries {
            println!("{}", entry.symptom);
        }
    }
    Ok(())
}

async fn predict_text(
    cfg: &ClientConfig,
    symptoms: &[String],
    description: String,
) -> anyhow::Result<()> {
    let backend = HttpBackend::new(cfg)?;
    let mut checker = SymptomChecker::new(backend, RegionState::default(), cfg);
    user_facing(checker.load_vocabulary().await)?;

    for unknown in select_all(&mut checker, symptoms) {
        eprintln!("Unknown symptom ignored: {unknown}");
    }
    checker.set_description(description);

    user_facing(checker.submit().await)?;
    for card in &checker.view().results {
        println!("{}", card_text(card));
    }
    Ok(())
}

async fn predict_html(
    cfg: &ClientConfig,
    symptoms: &[String],
    description: String,
) -> anyhow::Result<()> {
    let backend = HttpBackend::new(cfg)?;
    let mut checker = SymptomChecker::new(backend, HtmlPage::new(), cfg);
    // Failures are rendered into the error region before the exit status reports them.
    let outcome = match checker.load_vocabulary().await {
        Ok(_) => {
            for unknown in select_all(&mut checker, symptoms) {
                eprintln!("Unknown symptom ignored: {unknown}");
            }
            checker.set_description(description);
            checker.submit().await.map(|_| ())
        }
        Err(e) => Err(e),
    };

    print!("{}", checker.view().fragment());
    user_facing(outcome)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("symptom=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    tracing::debug!("using prediction service at {}", cfg.api_base_url());

    match cli.command {
        Some(Commands::Symptoms { search }) => list_symptoms(&cfg, search).await?,
        Some(Commands::Predict {
            symptoms,
            description,
            html: false,
        }) => predict_text(&cfg, &symptoms, description).await?,
        Some(Commands::Predict {
            symptoms,
            description,
            html: true,
        }) => predict_html(&cfg, &symptoms, description).await?,
        None => {
            println!("Use 'symptom --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use symptom_core::{ClientError, SubmitPolicy};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_collects_repeated_symptoms() {
        let cli = Cli::try_parse_from([
            "symptom",
            "predict",
            "-s",
            "Fever",
            "--symptom",
            "cough",
            "--description",
            "two days",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Predict {
                symptoms,
                description,
                html,
            }) => {
                assert_eq!(symptoms, vec!["Fever", "cough"]);
                assert_eq!(description, "two days");
                assert!(!html);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn predict_requires_a_symptom() {
        assert!(Cli::try_parse_from(["symptom", "predict"]).is_err());
    }

    #[test]
    fn flag_overrides_base_url() {
        let cli =
            Cli::try_parse_from(["symptom", "--api-base-url", "http://localhost:9000", "symptoms"])
                .unwrap();
        let cfg = resolve_config(&cli).unwrap();
        assert_eq!(cfg.api_base_url(), "http://localhost:9000");
    }

    #[test]
    fn controller_error_becomes_user_message() {
        let err = user_facing::<()>(Err(ClientError::Validation)).unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one symptom");
    }

    #[tokio::test]
    async fn unreachable_service_fails_the_command() {
        let cfg = ClientConfig::new("http://127.0.0.1:1", SubmitPolicy::Overlap, None).unwrap();

        let err = list_symptoms(&cfg, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load symptoms. Please try again later.");

        let symptoms = vec!["Fever".to_string()];
        assert!(predict_text(&cfg, &symptoms, String::new()).await.is_err());
        assert!(predict_html(&cfg, &symptoms, String::new()).await.is_err());
    }
}
