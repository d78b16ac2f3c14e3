//! Native admin console for the Intelligence backend.
//!
//! Shares the session and guard logic with the browser client: the stored
//! session lives in a JSON file, and every protected command passes through
//! the navigation guard first, so a revoked token clears the file exactly as
//! it clears browser storage.

mod storage;
mod transport;


use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use session::auth::{self, AuthError};
use session::users::UsersClient;
use session::{ApiError, GuardOutcome, NavigationGuard, RouteName, SessionError, SessionStorage, SessionStore, Transport, User};
use tracing::info;

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `intelligence login` first")]
    NotLoggedIn,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("{0} was refused by the backend")]
    Refused(&'static str),
    #[error("user `{0}` already exists")]
    AlreadyExists(String),
    #[error("no user with id `{0}`")]
    UnknownUser(String),
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "intelligence", about = "Intelligence admin console CLI")]
struct Cli {
    #[arg(long, env = "INTELLIGENCE_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[arg(long, env = "INTELLIGENCE_SESSION_FILE", default_value = ".intelligence-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "INTELLIGENCE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    Users(UsersCommand),
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    Create(CreateArgs),
    Delete {
        id: String,
    },
    /// Check an id, login name or email.
    Exists {
        identifier: String,
    },
    Patch(PatchArgs),
    UploadPicture {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "INTELLIGENCE_NEW_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    admin: bool,
    #[arg(long)]
    firstname: Option<String>,
    #[arg(long)]
    lastname: Option<String>,
}

#[derive(Args, Debug, Default)]
struct PatchArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    admin: Option<bool>,
    #[arg(long)]
    password: Option<String>,
    #[arg(long)]
    firstname: Option<String>,
    #[arg(long)]
    lastname: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let transport = ReqwestTransport::new(&cli.base_url)?;
    let mut store = SessionStore::new(FileStorage::open(&cli.session_file));
    let restored = store.init();
    info!(file = %store.storage().path().display(), ?restored, "session loaded");

    match cli.command {
        Command::Login { username, password } => run_login(&transport, &mut store, &username, &password).await,
        Command::Logout => {
            store.logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&transport, &mut store).await,
        Command::Users(users) => run_users(&transport, &mut store, users.command).await,
    }
}

/// Run the guard for `route` and return the validated token.
async fn require_session<T: Transport + ?Sized, S: SessionStorage>(
    transport: &T,
    store: &mut SessionStore<S>,
    route: RouteName,
) -> Result<String, CliError> {
    match NavigationGuard::new(transport).before_each(store, Some(route.route())).await {
        GuardOutcome::Allow => store.token().map(str::to_owned).ok_or(CliError::NotLoggedIn),
        GuardOutcome::Redirect(_) => Err(CliError::NotLoggedIn),
    }
}

async fn run_login<T: Transport + ?Sized, S: SessionStorage>(
    transport: &T,
    store: &mut SessionStore<S>,
    username: &str,
    password: &str,
) -> Result<(), CliError> {
    let outcome = NavigationGuard::new(transport)
        .before_each(store, Some(RouteName::Login.route()))
        .await;
    if outcome != GuardOutcome::Allow {
        let name = store.user().map(User::display_name).unwrap_or_default();
        println!("already logged in as {name}; run `intelligence logout` first");
        return Ok(());
    }

    let user = auth::login(transport, store, username, password).await?;
    println!("logged in as {}", user.display_name());
    Ok(())
}

async fn run_whoami<T: Transport + ?Sized, S: SessionStorage>(
    transport: &T,
    store: &mut SessionStore<S>,
) -> Result<(), CliError> {
    require_session(transport, store, RouteName::Profile).await?;
    let user = store.user().ok_or(CliError::NotLoggedIn)?;
    print_json(&serde_json::to_value(user)?)
}

async fn run_users<T: Transport + ?Sized, S: SessionStorage>(
    transport: &T,
    store: &mut SessionStore<S>,
    command: UsersSubcommand,
) -> Result<(), CliError> {
    let token = require_session(transport, store, RouteName::Users).await?;
    let users = UsersClient::new(transport);

    match command {
        UsersSubcommand::List => {
            let list = users.fetch_users(&token).await?;
            print_json(&serde_json::to_value(list)?)
        }
        UsersSubcommand::Create(args) => {
            for identifier in [&args.name, &args.email] {
                if users.user_exists(identifier, &token).await? {
                    return Err(CliError::AlreadyExists(identifier.clone()));
                }
            }
            let user = new_user(args);
            if !users.create_user(&user, &token).await? {
                return Err(CliError::Refused("create user"));
            }
            println!("created {}", user.name);
            Ok(())
        }
        UsersSubcommand::Delete { id } => {
            if !users.delete_user(&id, &token).await? {
                return Err(CliError::Refused("delete user"));
            }
            println!("deleted {id}");
            Ok(())
        }
        UsersSubcommand::Exists { identifier } => {
            println!("{}", users.user_exists(&identifier, &token).await?);
            Ok(())
        }
        UsersSubcommand::Patch(args) => run_patch(&users, store, &token, args).await,
        UsersSubcommand::UploadPicture { id, file } => {
            let bytes = std::fs::read(&file).map_err(|source| CliError::ReadFile { path: file.clone(), source })?;
            if !users.upload_picture(&id, bytes, &token).await? {
                return Err(CliError::Refused("picture upload"));
            }
            println!("uploaded {} for {id}", file.display());
            Ok(())
        }
    }
}

/// Patch a user. The base record comes from the session when patching
/// oneself, otherwise from the users list; the stored session is refreshed
/// with the result when the target is the logged-in user.
async fn run_patch<T: Transport + ?Sized, S: SessionStorage>(
    users: &UsersClient<'_, T>,
    store: &mut SessionStore<S>,
    token: &str,
    args: PatchArgs,
) -> Result<(), CliError> {
    let own = store.user().filter(|u| u.id.as_deref() == Some(args.id.as_str())).cloned();
    let is_self = own.is_some();
    let base = match own {
        Some(user) => user,
        None => users
            .fetch_users(token)
            .await?
            .into_iter()
            .find(|u| u.id.as_deref() == Some(args.id.as_str()))
            .ok_or_else(|| CliError::UnknownUser(args.id.clone()))?,
    };

    let patched = apply_patch(base, args);
    let echoed = users.patch_user(&patched, token).await?;
    if is_self {
        let refreshed = User { password: None, ..patched };
        store.set_user(refreshed, token.to_owned())?;
    }
    print_json(&serde_json::to_value(echoed)?)
}

fn new_user(args: CreateArgs) -> User {
    User {
        id: None,
        name: args.name,
        email: args.email,
        admin: args.admin,
        password: Some(args.password),
        firstname: args.firstname,
        lastname: args.lastname,
    }
}

/// Overlay the given edits on `base`. The password is only sent when given.
fn apply_patch(base: User, edits: PatchArgs) -> User {
    User {
        id: Some(edits.id),
        name: edits.name.unwrap_or(base.name),
        email: edits.email.unwrap_or(base.email),
        admin: edits.admin.unwrap_or(base.admin),
        password: edits.password,
        firstname: edits.firstname.or(base.firstname),
        lastname: edits.lastname.or(base.lastname),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
