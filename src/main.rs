//! authz - query the permission aggregation core from the command line
//!
//! Every query command prints pretty JSON on stdout; logs go to stderr.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use devops_authz::config::StorageBackend;
use devops_authz::storage::{self, Database};
use devops_authz::utils::logging::init_logging;
use devops_authz::{AuthorizationService, AuthzError, Config, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "authz", version, about = "DevOps permission aggregation core")]
struct Cli {
    /// YAML configuration file; `AUTHZ_*` variables override its values
    #[arg(short, long, env = "AUTHZ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a user's capability matrix
    AuthInfo {
        #[arg(short, long)]
        user: String,
    },
    /// List the projects a user can see, optionally narrowed to a verb
    Projects {
        #[arg(short, long)]
        user: String,
        /// Resource type of the verb, e.g. `workflow`
        #[arg(long, requires = "verb")]
        resource: Option<String>,
        /// Verb to require, e.g. `view` or `workflow:view`
        #[arg(long)]
        verb: Option<String>,
    },
    /// Check a collaboration-mode grant
    Check {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        project: String,
        /// `workflow` or `environment`
        #[arg(short, long)]
        resource: String,
        #[arg(short, long)]
        action: String,
        /// Check a named resource instead of any resource of the type
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List workflows a collaborator may view in a project
    Workflows {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        project: String,
    },
    /// List environments a collaborator may read or edit in a project
    Envs {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        project: String,
    },
    /// Run database migrations
    Migrate,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).await?;
    init_logging(config.logging())?;
    debug!("Running command {:?}", cli.command);

    match cli.command {
        Command::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
        Command::Migrate => migrate(&config).await,
        command => {
            let store = storage::open_store(config.storage()).await?;
            let service = AuthorizationService::new(store, config.rbac());
            query(&service, command).await
        }
    }
}

async fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path).await?.with_env_overrides(),
        None => Config::from_env(),
    }
}

async fn migrate(config: &Config) -> Result<()> {
    if config.storage().backend != StorageBackend::Database {
        return Err(AuthzError::config(
            "migrate requires the database storage backend",
        ));
    }

    let db = Database::new(&config.storage().database).await?;
    db.migrate().await?;
    db.close().await?;
    info!("Migrations applied");
    Ok(())
}

async fn query(service: &AuthorizationService, command: Command) -> Result<()> {
    match command {
        Command::AuthInfo { user } => print_json(&service.get_user_auth_info(&user).await?),
        Command::Projects {
            user,
            resource,
            verb,
        } => {
            let projects = match verb {
                Some(verb) => {
                    let resource = resource.unwrap_or_default();
                    service
                        .list_authorized_projects_by_verb(&user, &resource, &verb)
                        .await?
                }
                None => service.list_authorized_projects(&user).await?,
            };
            print_json(&projects)
        }
        Command::Check {
            user,
            project,
            resource,
            action,
            name,
        } => {
            let allowed = match name {
                Some(name) => {
                    service
                        .check_collaboration_mode_permission(
                            &user, &project, &resource, &name, &action,
                        )
                        .await?
                }
                None => {
                    service
                        .check_permission_given_by_collaboration_mode(
                            &user, &project, &resource, &action,
                        )
                        .await?
                }
            };
            print_json(&serde_json::json!({ "allowed": allowed }))
        }
        Command::Workflows { user, project } => {
            print_json(&service.list_authorized_workflows(&user, &project).await?)
        }
        Command::Envs { user, project } => {
            print_json(&service.list_authorized_envs(&user, &project).await?)
        }
        Command::Migrate | Command::Config => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
