use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_client::HttpBackend;
use symptom_core::{
    constants::{API_BASE_URL_ENV, REQUEST_TIMEOUT_ENV, SUBMIT_POLICY_ENV},
    render::text::page_text,
    ClientConfig, HtmlPage, RegionState, SymptomChecker, UiEvent, View,
};

mod session;

use session::{parse_command, SessionCommand, HELP};

/// Dropdown rows printed per page in text mode.
const DROPDOWN_ROWS: usize = 20;

#[derive(Parser)]
#[command(name = "symptom-run")]
#[command(about = "Interactive symptom checker session")]
struct Args {
    /// Print page markup instead of plain text after each command
    #[arg(long)]
    html: bool,
}

/// Main entry point for the interactive symptom checker
///
/// Loads the symptom vocabulary once, then reads one command per line from stdin and feeds it
/// through the controller, printing the page after every state change.
///
/// # Environment Variables
/// - `SYMPTOM_API_BASE_URL`: prediction service base URL (default: "https://healthdetective.site/api")
/// - `SYMPTOM_SUBMIT_POLICY`: `overlap` or `exclusive` (default: "overlap")
/// - `SYMPTOM_REQUEST_TIMEOUT_SECS`: request timeout in seconds (default: none)
///
/// # Returns
/// * `Ok(())` - When the session ends on `quit` or end of input
/// * `Err(anyhow::Error)` - If configuration is invalid or stdin/stdout fail
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("symptom=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let cfg = ClientConfig::from_env_values(
        std::env::var(API_BASE_URL_ENV).ok(),
        std::env::var(SUBMIT_POLICY_ENV).ok(),
        std::env::var(REQUEST_TIMEOUT_ENV).ok(),
    )?;

    tracing::info!("++ Starting symptom checker against {}", cfg.api_base_url());

    let backend = HttpBackend::new(&cfg)?;
    if args.html {
        let checker = SymptomChecker::new(backend, HtmlPage::new(), &cfg);
        run(checker, |page: &HtmlPage| page.fragment()).await
    } else {
        let checker = SymptomChecker::new(backend, RegionState::default(), &cfg);
        run(checker, |state: &RegionState| page_text(state, DROPDOWN_ROWS)).await
    }
}

async fn run<V, F>(mut checker: SymptomChecker<HttpBackend, V>, render: F) -> anyhow::Result<()>
where
    V: View,
    F: Fn(&V) -> String,
{
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // A load failure is already shown in the error region.
    let _ = checker.load_vocabulary().await;
    stdout.write_all(render(checker.view()).as_bytes()).await?;
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match parse_command(&line) {
            Ok(None) => String::new(),
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Help)) => format!("{HELP}\n"),
            Ok(Some(SessionCommand::Show)) => render(checker.view()),
            Ok(Some(SessionCommand::Reload)) => {
                let _ = checker.load_vocabulary().await;
                render(checker.view())
            }
            Ok(Some(SessionCommand::Commit(term))) => {
                let term = term.unwrap_or_else(|| checker.selector().search_term().to_string());
                checker.dispatch(UiEvent::SearchCommit(term)).await;
                render(checker.view())
            }
            Ok(Some(SessionCommand::Event(event))) => {
                if event == UiEvent::Submit {
                    stdout.write_all(b"Analyzing symptoms...\n").await?;
                    stdout.flush().await?;
                }
                checker.dispatch(event).await;
                render(checker.view())
            }
            Err(message) => format!("{message}\n"),
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
