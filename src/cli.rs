use std::process::ExitCode;
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{info, warn};
use crate::config::Config;
use crate::controller::credential_form::{CredentialForm, CredentialHandler, FormMode};
use crate::controller::portal_controller::{PortalState, PortalView, Tab};
use crate::controller::AppState;
use crate::helpers::session_store::{SessionStore, StoredSession};
use crate::models::user::AuthResponse;
use crate::views::PortalScreen;

#[derive(Parser)]
#[command(name = "maya-portal")]
#[command(about = "Sign in to Maya Digital and manage your hotels, restaurants and bookings")]
pub struct Cli {
    #[clap(flatten)]
    pub config: Config,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login {
        #[arg(long, env = "PORTAL_EMAIL", default_value = "")]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    Portal {
        #[arg(long, default_value = "overview")]
        tab: Tab,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    Whoami,
    Logout,
}

/// Stores the session handed back by a successful sign-in or registration.
pub struct SessionPersister<'a> {
    store: &'a SessionStore,
    saved: Option<StoredSession>,
    failure: Option<anyhow::Error>,
}

impl<'a> SessionPersister<'a> {
    pub fn new(store: &'a SessionStore) -> Self {
        Self {
            store,
            saved: None,
            failure: None,
        }
    }

    fn persist(&mut self, payload: Value) {
        let persist_res = serde_json::from_value::<AuthResponse>(payload)
            .context("Authentication response has no session")
            .and_then(|response| {
                let session = StoredSession::from(response);
                self.store.save(&session)?;
                Ok(session)
            });

        match persist_res {
            Ok(session) => {
                info!("Stored session for {} at {}", session.user.email, self.store.path().display());
                self.saved = Some(session);
            }
            Err(e) => {
                warn!("Failed to store session due to: {:#}", e);
                self.failure = Some(e);
            }
        }
    }

    pub fn finish(self) -> anyhow::Result<StoredSession> {
        if let Some(e) = self.failure {
            return Err(e);
        }
        self.saved.context("No session was received")
    }
}

impl CredentialHandler for SessionPersister<'_> {
    fn on_login(&mut self, payload: Value) {
        self.persist(payload);
    }

    fn on_register(&mut self, payload: Value) {
        self.persist(payload);
    }
}

async fn submit_form(
    state: &AppState,
    mut form: CredentialForm,
) -> anyhow::Result<ExitCode> {
    let mut persister = SessionPersister::new(&state.session_store);
    println!("{}", form.title());

    if form.submit(&state.api_repo, &mut persister).await.is_err() {
        eprintln!("Error: {}", form.error().unwrap_or_default());
        return Ok(ExitCode::FAILURE);
    }

    let session = persister.finish()?;
    println!("Bienvenido, {} {} ({})", session.user.first_name, session.user.last_name, session.user.role);
    Ok(ExitCode::SUCCESS)
}

async fn show_portal(
    state: &AppState,
    tab: Tab,
    as_json: bool,
) -> anyhow::Result<ExitCode> {
    let session = state.session_store.load()?;
    let is_logged_in = session.is_some();
    let (user, token) = match session {
        Some(session) => (Some(session.user), session.auth_token),
        None => (None, String::new()),
    };

    let mut view = PortalView::mount(user, is_logged_in);
    if let PortalState::Redirect(redirect) = view.state() {
        eprintln!("{}", redirect);
        return Ok(ExitCode::from(2));
    }

    eprintln!("Cargando portal...");
    view.load(&state.api_repo, &token).await;

    let tabs = view.tabs();
    let active = view.select_tab(tab);
    let (PortalState::Ready(data), Some(user)) = (view.state(), view.user()) else {
        return Ok(ExitCode::FAILURE);
    };

    if as_json {
        let labels: Vec<&str> = tabs.iter().map(Tab::label).collect();
        let output = json!({
            "user": user,
            "tabs": labels,
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", PortalScreen { user, tabs: &tabs, active, data });
    }
    Ok(ExitCode::SUCCESS)
}

async fn refresh_current_user(state: &AppState) -> anyhow::Result<ExitCode> {
    let Some(mut session) = state.session_store.load()? else {
        eprintln!("No hay sesión activa");
        return Ok(ExitCode::from(2));
    };

    let user = state.api_repo.current_user(&session.auth_token).await?;
    println!("{} {} <{}> ({})", user.first_name, user.last_name, user.email, user.role);
    session.user = user;
    state.session_store.save(&session)?;
    Ok(ExitCode::SUCCESS)
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let state = AppState::from_config(&cli.config)?;

    return match cli.command {
        Command::Login { email, password } => {
            let mut form = CredentialForm::new(FormMode::SignIn);
            let fields = form.fields_mut();
            fields.email = email;
            fields.password = password;
            submit_form(&state, form).await
        }
        Command::Register { email, password, first_name, last_name, phone } => {
            let mut form = CredentialForm::new(FormMode::Register);
            let fields = form.fields_mut();
            fields.email = email;
            fields.password = password;
            fields.first_name = first_name;
            fields.last_name = last_name;
            fields.phone = phone;
            submit_form(&state, form).await
        }
        Command::Portal { tab, json } => show_portal(&state, tab, json).await,
        Command::Whoami => refresh_current_user(&state).await,
        Command::Logout => {
            state.session_store.clear()?;
            println!("Sesión cerrada");
            Ok(ExitCode::SUCCESS)
        }
    };
}
