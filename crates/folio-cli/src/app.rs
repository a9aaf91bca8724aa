//! Command execution against the shared session and API client.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use folio_core::auth::{CredentialStore, Session};
use folio_core::routes::{resolve, Guarded, RecordingNavigator, Route};
use folio_core::{ApiClient, BlogForm, Collection, Config, LoginForm, ProjectForm};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{BlogCommand, Cli, Command, ProjectCommand};
use crate::output;

/// Environment variable supplying the password for non-interactive login
const PASSWORD_ENV: &str = "FOLIO_PASSWORD";

pub struct App {
    config: Config,
    session: Arc<Session>,
    navigator: Arc<RecordingNavigator>,
    api: ApiClient,
    /// Set by commands for which a redirect to login is the expected outcome
    redirect_expected: bool,
    /// Print JSON instead of formatted text
    json: bool,
}

impl App {
    /// Load config, open credential storage and hydrate the session.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };
        debug!(
            storage = ?config.effective_storage(cli.storage),
            "Config loaded"
        );

        let credentials = CredentialStore::new(config.credential_backend(cli.storage)?);
        let navigator = Arc::new(RecordingNavigator::new());
        let session = Arc::new(Session::new(credentials, navigator.clone()));
        if let Err(e) = session.hydrate() {
            warn!(error = %e, "Could not restore the previous session");
        }

        let base_url = cli
            .api_url
            .clone()
            .unwrap_or_else(|| config.api_base_url());
        debug!(base_url = %base_url, "API client configured");
        let api = ApiClient::with_timeout(&base_url, config.request_timeout(), session.clone())?;

        Ok(Self {
            config,
            session,
            navigator,
            api,
            redirect_expected: false,
            json: cli.json,
        })
    }

    /// True when a request forced an unexpected redirect to the login view.
    pub fn session_expired(&self) -> bool {
        !self.redirect_expected && self.navigator.login_redirects() > 0
    }

    pub async fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Login { email } => {
                self.redirect_expected = true;
                self.login(email).await
            }
            Command::Logout => {
                self.redirect_expected = true;
                self.logout()
            }
            Command::Whoami => self.whoami(),
            Command::Projects { action } => self.projects(action).await,
            Command::Blogs { action } => self.blogs(action).await,
            Command::Dashboard { full } => {
                self.require(Route::Dashboard)?;
                if full {
                    let data = self.api.fetch_full_dashboard().await?;
                    let overview = folio_core::api::DashboardOverview {
                        github: data.github.clone(),
                        data,
                    };
                    self.show(&overview, output::print_dashboard)?;
                } else {
                    self.show(&self.api.load_dashboard_overview().await?, output::print_dashboard)?;
                }
                Ok(())
            }
            Command::Stats => {
                self.require(Route::Dashboard)?;
                self.show(&self.api.fetch_dashboard_stats().await?, output::print_stats)
            }
            Command::Activity { limit } => {
                self.require(Route::Dashboard)?;
                let activity = self.api.fetch_recent_activity(limit).await?;
                self.show(activity.as_slice(), output::print_activity)
            }
            Command::Github => {
                self.show(&self.api.fetch_github_stats().await?, output::print_github)
            }
        }
    }

    /// Print `value` as JSON or through `render`.
    fn show<T: Serialize + ?Sized>(&self, value: &T, render: fn(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            render(value);
        }
        Ok(())
    }

    /// Pass `route` through the guard.
    fn require(&self, route: Route) -> Result<()> {
        match resolve(&self.session, route) {
            Guarded::Render(_) => Ok(()),
            Guarded::Waiting => bail!("Session is still loading"),
            Guarded::Redirect(_) => bail!("Not logged in. Run `folio login` first."),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    async fn login(&mut self, email: Option<String>) -> Result<()> {
        let email = match email {
            Some(email) => email,
            None => Self::prompt_email(self.config.last_email.as_deref())?,
        };
        let password = match std::env::var(PASSWORD_ENV) {
            Ok(password) if !password.is_empty() => password,
            _ => rpassword::prompt_password("Password: ")?,
        };

        let session = self.api.login(&LoginForm::new(email, password)).await?;

        if let Err(e) = Config::remember_email(&session.user.email) {
            warn!(error = %e, "Failed to save config");
        }

        println!("Logged in as {}", session.user.display_name());
        Ok(())
    }

    fn prompt_email(last: Option<&str>) -> Result<String> {
        match last {
            Some(last) => print!("Email [{}]: ", last),
            None => print!("Email: "),
        }
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let input = input.trim();

        Ok(match (input.is_empty(), last) {
            (true, Some(last)) => last.to_string(),
            _ => input.to_string(),
        })
    }

    fn logout(&self) -> Result<()> {
        if !self.session.is_authenticated() {
            println!("Not logged in.");
            return Ok(());
        }
        self.api.logout()?;
        println!("Logged out.");
        Ok(())
    }

    fn whoami(&self) -> Result<()> {
        match self.session.user() {
            Some(user) => self.show(&user, output::print_user),
            None => {
                println!("Not logged in.");
                Ok(())
            }
        }
    }

    fn confirm(prompt: &str) -> Result<bool> {
        print!("{} [y/N]: ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    // =========================================================================
    // Projects
    // =========================================================================

    async fn projects(&self, action: ProjectCommand) -> Result<()> {
        match action {
            ProjectCommand::List => {
                let mut projects = Collection::new();
                projects.refresh(self.api.fetch_projects()).await;
                if let Some(error) = projects.error() {
                    bail!("{}", error);
                }
                self.show(projects.items(), output::print_projects)?;
            }
            ProjectCommand::Show { id } => {
                self.show(&self.api.fetch_project(&id).await?, output::print_project)?;
            }
            ProjectCommand::Create(args) => {
                self.require(Route::ManageProjects)?;
                let mut form = ProjectForm::new();
                args.apply(&mut form);
                let project = self.api.save_project(&form).await?;
                println!("Created project {} ({})", project.title, project.id);
            }
            ProjectCommand::Update { id, args } => {
                self.require(Route::ManageProjects)?;
                let existing = self
                    .api
                    .fetch_project(&id)
                    .await
                    .with_context(|| format!("Failed to load project {}", id))?;
                let mut form = ProjectForm::edit(&existing);
                args.apply(&mut form);
                let project = self.api.save_project(&form).await?;
                println!("Updated project {} ({})", project.title, project.id);
            }
            ProjectCommand::Delete { id, yes } => {
                self.require(Route::ManageProjects)?;
                if !yes && !Self::confirm("Are you sure you want to delete this project?")? {
                    println!("Cancelled.");
                    return Ok(());
                }
                match self.api.delete_project(&id).await? {
                    Some(project) => println!("Deleted project {} ({})", project.title, project.id),
                    None => println!("Deleted project {}", id),
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Blogs
    // =========================================================================

    async fn blogs(&self, action: BlogCommand) -> Result<()> {
        match action {
            BlogCommand::List => {
                let mut blogs = Collection::new();
                blogs.refresh(self.api.fetch_blogs()).await;
                if let Some(error) = blogs.error() {
                    bail!("{}", error);
                }
                self.show(blogs.items(), output::print_blogs)?;
            }
            BlogCommand::Show { id } => {
                self.show(&self.api.fetch_blog(&id).await?, output::print_blog)?;
            }
            BlogCommand::Create(args) => {
                self.require(Route::ManageBlogs)?;
                let mut form = BlogForm::new();
                args.apply(&mut form);
                let blog = self.api.save_blog(&form).await?;
                println!("Created blog post {} ({})", blog.title, blog.id);
            }
            BlogCommand::Update { id, args } => {
                self.require(Route::ManageBlogs)?;
                let existing = self
                    .api
                    .fetch_blog(&id)
                    .await
                    .with_context(|| format!("Failed to load blog post {}", id))?;
                let mut form = BlogForm::edit(&existing);
                args.apply(&mut form);
                let blog = self.api.save_blog(&form).await?;
                println!("Updated blog post {} ({})", blog.title, blog.id);
            }
            BlogCommand::Delete { id, yes } => {
                self.require(Route::ManageBlogs)?;
                if !yes && !Self::confirm("Are you sure you want to delete this blog?")? {
                    println!("Cancelled.");
                    return Ok(());
                }
                self.api.delete_blog(&id).await?;
                println!("Deleted blog post {}", id);
            }
        }
        Ok(())
    }
}
