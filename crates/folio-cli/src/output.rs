//! Plain-text rendering of API data for the terminal.

use folio_core::api::DashboardOverview;
use folio_core::models::{
    Blog, DashboardData, DashboardStats, GithubStats, Project, RecentActivity, User,
};
use folio_core::utils::{format_date, format_optional, truncate};

/// Column width for titles in list views
const TITLE_WIDTH: usize = 36;

pub fn print_user(user: &User) {
    println!("{}", user.display_name());
    println!("  id: {}", user.id);
    if let Some(ref image) = user.profile_image {
        println!("  profile image: {}", image);
    }
}

pub fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects yet.");
        return;
    }
    println!("{:<26} {:<w$} {:<6} TECH", "ID", "TITLE", "YEAR", w = TITLE_WIDTH);
    for project in projects {
        println!(
            "{:<26} {:<w$} {:<6} {}",
            project.id,
            truncate(&project.title, TITLE_WIDTH),
            project.year_built.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string()),
            truncate(&project.tech_stack_display(), 40),
            w = TITLE_WIDTH,
        );
    }
}

pub fn print_project(project: &Project) {
    println!("{}", project.title);
    println!("  id:          {}", project.id);
    println!("  description: {}", format_optional(Some(project.description.as_str()), "-"));
    let tech_stack = project.tech_stack_display();
    println!("  tech stack:  {}", format_optional(Some(tech_stack.as_str()), "-"));
    println!("  github:      {}", format_optional(Some(project.github_url.as_str()), "-"));
    println!("  live:        {}", format_optional(Some(project.live_url.as_str()), "-"));
    println!("  category:    {}", format_optional(project.category.as_deref(), "-"));
    println!("  image:       {}", format_optional(project.image.url.as_deref(), "none"));
    println!("  created:     {}", format_date(project.created_at.as_ref()));
    println!("  updated:     {}", format_date(project.updated_at.as_ref()));
}

pub fn print_blogs(blogs: &[Blog]) {
    if blogs.is_empty() {
        println!("No blog posts yet.");
        return;
    }
    println!("{:<26} {:<w$} {:<12} PUBLISHED", "ID", "TITLE", "PLATFORM", w = TITLE_WIDTH);
    for blog in blogs {
        println!(
            "{:<26} {:<w$} {:<12} {}",
            blog.id,
            truncate(&blog.title, TITLE_WIDTH),
            truncate(&format_optional(Some(blog.platform.as_str()), "-"), 12),
            if blog.published {
                format_date(blog.published_at.as_ref())
            } else {
                "draft".to_string()
            },
            w = TITLE_WIDTH,
        );
    }
}

pub fn print_blog(blog: &Blog) {
    println!("{}", blog.title);
    println!("  id:          {}", blog.id);
    println!("  description: {}", format_optional(Some(blog.description.as_str()), "-"));
    println!("  url:         {}", format_optional(Some(blog.url.as_str()), "-"));
    println!("  platform:    {}", format_optional(Some(blog.platform.as_str()), "-"));
    println!("  published:   {}", if blog.published { "yes" } else { "no" });
    println!("  image:       {}", format_optional(blog.image.url.as_deref(), "none"));
}

pub fn print_stats(stats: &DashboardStats) {
    println!("Projects:  {} ({} published)", stats.total_projects, stats.published_projects);
    println!("Blogs:     {} ({} published)", stats.total_blogs, stats.published_blogs);
    println!("Contacts:  {} ({} unread)", stats.total_contacts, stats.unread_contacts);
    println!("Skills:    {}", stats.total_skills);
}

pub fn print_github(github: &GithubStats) {
    println!("GitHub: {}", github.username);
    println!(
        "  repos {}  stars {}  forks {}  followers {}  following {}",
        github.total_repos,
        github.total_stars,
        github.total_forks,
        github.followers,
        github.following
    );
    if !github.languages.is_empty() {
        println!("  languages: {}", github.languages.join(", "));
    }
    if let Some(ref bio) = github.bio {
        println!("  bio: {}", bio);
    }
    println!("  updated: {}", format_date(github.last_updated.as_ref()));
}

fn print_dashboard_lists(data: &DashboardData) {
    if !data.projects.is_empty() {
        println!("\nProjects");
        print_projects(&data.projects);
    }
    if !data.blogs.is_empty() {
        println!("\nBlogs");
        print_blogs(&data.blogs);
    }
    if !data.contacts.is_empty() {
        println!("\nContacts");
        for contact in &data.contacts {
            println!(
                "  {} {} <{}>: {}",
                if contact.is_read { " " } else { "*" },
                contact.name,
                contact.email,
                truncate(&contact.message, 60)
            );
        }
    }
}

pub fn print_dashboard(overview: &DashboardOverview) {
    print_stats(&overview.data.stats);
    match overview.github {
        Some(ref github) => {
            println!();
            print_github(github);
        }
        None => println!("\nGitHub stats unavailable."),
    }
    print_dashboard_lists(&overview.data);
}

pub fn print_activity(activity: &[RecentActivity]) {
    if activity.is_empty() {
        println!("No recent activity.");
        return;
    }
    for item in activity {
        println!(
            "{:<10}  {:<8} {}",
            format_date(item.created_at.as_ref()),
            item.kind.label(),
            truncate(item.summary(), 60)
        );
    }
}
