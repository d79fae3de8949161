use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use portfolio_admin::application::ports::collection_api::ListQuery;
use portfolio_admin::application::shared::mappers::Upsertable;
use portfolio_admin::domain::entities::{group_by_type, ContactMessage};
use portfolio_admin::infrastructure::notify::TracingNotifier;
use portfolio_admin::shared::logging;
use portfolio_admin::{AppConfig, AppState, DeleteOutcome, DraftEditor, SaveOutcome};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(about = "Portfolio site API client and admin tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the access token
    Login {
        #[arg(long, env = "PORTFOLIO_ADMIN_EMAIL")]
        email: String,
        #[arg(long, env = "PORTFOLIO_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored access token
    Logout,
    /// Show the signed-in admin
    Whoami,
    /// Admin dashboard counters
    Dashboard,
    /// Public experience list in display order
    Experiences,
    /// Public project list
    Projects {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        featured: Option<bool>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// One project by slug
    Project { slug: String },
    /// Admin tag list
    Tags {
        /// Group by tag type
        #[arg(long)]
        grouped: bool,
    },
    /// Create or update an experience from a JSON file (no UUID id creates)
    SaveExperience { file: PathBuf },
    /// Delete an experience by id
    DeleteExperience { id: String },
    /// Create or update a project from a JSON file (no UUID id creates)
    SaveProject { file: PathBuf },
    /// Delete a project by id
    DeleteProject { id: String },
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn save_from_file<T>(editor: &DraftEditor<T>, file: &Path) -> Result<()>
where
    T: Upsertable + DeserializeOwned,
{
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let record: T = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid record", file.display()))?;

    editor.load().await?;
    let id = editor.stage(record).await;
    match editor.save(&id).await {
        SaveOutcome::Created { id } => println!("created {id}"),
        SaveOutcome::Updated => println!("updated {id}"),
        other => bail!("save failed: {other:?}"),
    }
    Ok(())
}

async fn delete_by_id<T: Upsertable>(editor: &DraftEditor<T>, id: &str) -> Result<()> {
    editor.load().await?;
    match editor.delete(id).await {
        DeleteOutcome::Deleted | DeleteOutcome::Removed => println!("deleted {id}"),
        other => bail!("delete failed: {other:?}"),
    }
    Ok(())
}

async fn require_admin(state: &AppState) -> Result<()> {
    state.auth.init().await?;
    state.auth.require_admin().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, cli.json_logs);

    let config = AppConfig::from_env();
    info!(api = %config.api.base_url, "portfolio-admin v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config, Arc::new(TracingNotifier))
        .context("failed to initialise client")?;

    match cli.command {
        Commands::Login { email, password } => {
            let user = state.auth.login(&email, &password).await?;
            print_json(&user)?;
        }
        Commands::Logout => {
            state.auth.logout().await?;
            println!("signed out");
        }
        Commands::Whoami => match state.auth.init().await? {
            Some(user) => print_json(&user)?,
            None => println!("not signed in"),
        },
        Commands::Dashboard => {
            require_admin(&state).await?;
            let overview = state.dashboard.overview().await?;
            for card in overview.stat_cards() {
                println!("{:<14} {:>6}  {}", card.label, card.value, card.summary);
            }
        }
        Commands::Experiences => {
            print_json(&state.portfolio.experiences().await?)?;
        }
        Commands::Projects {
            q,
            featured,
            page,
            limit,
        } => {
            let filter = ListQuery {
                page,
                limit,
                q,
                featured,
            };
            print_json(&state.portfolio.projects(&filter).await?)?;
        }
        Commands::Project { slug } => {
            print_json(&state.portfolio.project(&slug).await?)?;
        }
        Commands::Tags { grouped } => {
            require_admin(&state).await?;
            let page = state.tags.fetch().await?;
            if grouped {
                print_json(&group_by_type(&page.data))?;
            } else {
                print_json(&page.data)?;
            }
        }
        Commands::SaveExperience { file } => {
            require_admin(&state).await?;
            save_from_file(&state.experience_editor, &file).await?;
        }
        Commands::DeleteExperience { id } => {
            require_admin(&state).await?;
            delete_by_id(&state.experience_editor, &id).await?;
        }
        Commands::SaveProject { file } => {
            require_admin(&state).await?;
            save_from_file(&state.project_editor, &file).await?;
        }
        Commands::DeleteProject { id } => {
            require_admin(&state).await?;
            delete_by_id(&state.project_editor, &id).await?;
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let message = ContactMessage::new(name, email, subject, message);
            state.portfolio.send_contact_message(&message).await?;
            println!("message sent");
        }
    }

    Ok(())
}
