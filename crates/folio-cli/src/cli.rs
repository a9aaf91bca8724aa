//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use folio_core::config::StorageBackend;
use folio_core::forms::ImageUpload;
use folio_core::models::project::parse_tech_stack;
use folio_core::{BlogForm, ProjectForm};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Admin console for a portfolio site backend")]
pub struct Cli {
    /// Backend base URL, e.g. https://api.example.com/api
    #[arg(long, env = "FOLIO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Where the session is persisted: file, keyring or memory
    #[arg(long, global = true)]
    pub storage: Option<StorageBackend>,

    /// Write logs to a daily-rolling file in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in as the site administrator
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in administrator
    Whoami,
    /// List and manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectCommand,
    },
    /// List and manage blog posts
    Blogs {
        #[command(subcommand)]
        action: BlogCommand,
    },
    /// Dashboard summary with GitHub stats
    Dashboard {
        /// Include every project, blog post and contact message
        #[arg(long)]
        full: bool,
    },
    /// Dashboard counters only
    Stats,
    /// Recent activity across projects, blogs and contacts
    Activity {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// GitHub profile statistics
    Github,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    List,
    Show {
        id: String,
    },
    Create(ProjectArgs),
    Update {
        id: String,
        #[command(flatten)]
        args: ProjectArgs,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    List,
    Show {
        id: String,
    },
    Create(BlogArgs),
    Update {
        id: String,
        #[command(flatten)]
        args: BlogArgs,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

/// Project fields. Unset flags keep the current value on update.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated, e.g. "Rust, Axum, Postgres"
    #[arg(long)]
    pub tech_stack: Option<String>,
    #[arg(long)]
    pub github_url: Option<String>,
    #[arg(long)]
    pub live_url: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub year_built: Option<i32>,
    /// Image file to upload as the cover
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn apply(&self, form: &mut ProjectForm) {
        if let Some(ref title) = self.title {
            form.title = title.clone();
        }
        if let Some(ref description) = self.description {
            form.description = description.clone();
        }
        if let Some(ref tech_stack) = self.tech_stack {
            form.tech_stack = parse_tech_stack(tech_stack);
        }
        if let Some(ref github_url) = self.github_url {
            form.github_url = github_url.clone();
        }
        if let Some(ref live_url) = self.live_url {
            form.live_url = live_url.clone();
        }
        if let Some(ref category) = self.category {
            form.category = Some(category.clone());
        }
        if self.year_built.is_some() {
            form.year_built = self.year_built;
        }
        if let Some(ref image) = self.image {
            form.image = Some(ImageUpload::new(image));
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct BlogArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// Where the post is published, e.g. Medium or dev.to
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl BlogArgs {
    pub fn apply(&self, form: &mut BlogForm) {
        if let Some(ref title) = self.title {
            form.title = title.clone();
        }
        if let Some(ref description) = self.description {
            form.description = description.clone();
        }
        if let Some(ref url) = self.url {
            form.url = url.clone();
        }
        if let Some(ref platform) = self.platform {
            form.platform = platform.clone();
        }
        if let Some(ref image) = self.image {
            form.image = Some(ImageUpload::new(image));
        }
    }
}
