//! Staffdir CLI - Employee directory from the terminal
//!
//! Thin client over the Staffdir HTTP API. Ids, sort options and page sizes
//! are parsed into their domain types before any request is sent.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};

use api::{DirectoryClient, EmployeePage, ListParams};
use config::Config;
use staffdir::domain::{validate_email, validate_text};
use staffdir::{
    validate_patch, Employee, EmployeeId, EmployeePatch, FilterCriteria, NewEmployee, PageSize,
    SortField, SortOrder,
};

#[derive(Parser)]
#[command(name = "staffdir")]
#[command(about = "Staffdir CLI - Employee directory", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides the configured one)
    #[arg(long, global = true, env = "STAFFDIR_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List employees
    List {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Show one employee
    Get {
        /// Employee ID
        id: EmployeeId,
    },

    /// Add an employee (prompts for missing fields)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update some fields of an employee
    Update {
        /// Employee ID
        id: EmployeeId,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an employee
    Delete {
        /// Employee ID
        id: EmployeeId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search by first name, last name or email
    Search {
        /// Search query
        query: String,
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Filter by first name, department and role
    Filter {
        /// Case-insensitive part of the first name
        #[arg(long)]
        first_name: Option<String>,
        /// Exact department
        #[arg(short, long)]
        department: Option<String>,
        /// Exact role
        #[arg(short, long)]
        role: Option<String>,
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// List departments
    Departments,

    /// List roles
    Roles,

    /// Show or change configuration
    Config {
        /// Store a new API base URL
        #[arg(long)]
        set_base_url: Option<String>,
    },
}

#[derive(Args, Clone, Copy)]
struct ListingArgs {
    /// Sort field: id, firstName, lastName, email, department, role
    #[arg(short, long, default_value = "firstName")]
    sort: SortField,
    /// Sort order: asc or desc
    #[arg(short, long, default_value = "asc")]
    order: SortOrder,
    /// Page number
    #[arg(short, long, default_value = "1")]
    page: usize,
    /// Page size: 10, 25, 50 or 100
    #[arg(long, default_value = "10")]
    page_size: PageSize,
}

impl From<ListingArgs> for ListParams {
    fn from(args: ListingArgs) -> Self {
        Self {
            sort: args.sort,
            order: args.order,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(Args, Clone, Default)]
struct FieldArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(short, long)]
    department: Option<String>,
    #[arg(short, long)]
    role: Option<String>,
}

impl From<FieldArgs> for EmployeePatch {
    fn from(args: FieldArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            department: args.department,
            role: args.role,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = DirectoryClient::new(&config.resolve_base_url(cli.base_url.as_deref()));

    match cli.command {
        Commands::List { listing } => {
            let page = client.list(listing.into()).await?;
            print_page(&page, "No employees found.");
            Ok(())
        }
        Commands::Get { id } => cmd_get(&client, id).await,
        Commands::Add { fields } => cmd_add(&client, fields).await,
        Commands::Update { id, fields } => cmd_update(&client, id, fields).await,
        Commands::Delete { id, yes } => cmd_delete(&client, id, yes).await,
        Commands::Search { query, listing } => {
            let page = client.search(query.trim(), listing.into()).await?;
            print_page(&page, &format!("No employees found for '{}'", query));
            Ok(())
        }
        Commands::Filter {
            first_name,
            department,
            role,
            listing,
        } => {
            let criteria = FilterCriteria {
                first_name,
                department,
                role,
            };
            let page = client.filter(&criteria, listing.into()).await?;
            print_page(&page, "No employees match these filters.");
            Ok(())
        }
        Commands::Departments => {
            print_options("Departments:", client.departments().await?);
            Ok(())
        }
        Commands::Roles => {
            print_options("Roles:", client.roles().await?);
            Ok(())
        }
        Commands::Config { set_base_url } => cmd_config(config, &client, set_base_url).await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_get(client: &DirectoryClient, id: EmployeeId) -> Result<()> {
    let employee = client
        .get(id)
        .await?
        .with_context(|| format!("Employee {} not found", id))?;

    print_employee(&employee);
    Ok(())
}

async fn cmd_add(client: &DirectoryClient, fields: FieldArgs) -> Result<()> {
    let new_employee = NewEmployee {
        first_name: field_value("First name", fields.first_name, validate_text)?,
        last_name: field_value("Last name", fields.last_name, validate_text)?,
        email: field_value("Email", fields.email, validate_email)?,
        department: field_value("Department", fields.department, validate_text)?,
        role: field_value("Role", fields.role, validate_text)?,
    };

    let employee = client.create(&new_employee).await?;

    println!(
        "{} Employee added: {} [{}]",
        "✓".green(),
        employee.full_name().cyan(),
        employee.id
    );
    Ok(())
}

async fn cmd_update(client: &DirectoryClient, id: EmployeeId, fields: FieldArgs) -> Result<()> {
    let patch = EmployeePatch::from(fields).trimmed();
    if patch.is_empty() {
        bail!("Nothing to update. Pass at least one of --first-name, --last-name, --email, --department, --role");
    }
    if let Err(errors) = validate_patch(&patch) {
        bail!("Invalid input: {}", errors);
    }

    let employee = client
        .update(id, &patch)
        .await?
        .with_context(|| format!("Employee {} not found", id))?;

    println!("{} Employee updated", "✓".green());
    print_employee(&employee);
    Ok(())
}

async fn cmd_delete(client: &DirectoryClient, id: EmployeeId, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete employee {}?", id))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if client.delete(id).await? {
        println!("{} Employee {} deleted", "✓".green(), id);
        Ok(())
    } else {
        bail!("Employee {} not found", id)
    }
}

async fn cmd_config(
    mut config: Config,
    client: &DirectoryClient,
    set_base_url: Option<String>,
) -> Result<()> {
    if let Some(url) = set_base_url {
        config.base_url = url;
        config.save()?;
        println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);

    let reachable = client.health().await.unwrap_or(false);
    println!(
        "  API: {}",
        if reachable { "Reachable".green() } else { "Unreachable".red() }
    );

    Ok(())
}

// ============================================
// Input and Output Helpers
// ============================================

/// Use the flag value if given, otherwise prompt. Either way the value must
/// pass `rule`.
fn field_value(
    label: &str,
    provided: Option<String>,
    rule: fn(&str) -> Result<(), String>,
) -> Result<String> {
    match provided {
        Some(value) => {
            let value = value.trim().to_string();
            if let Err(message) = rule(&value) {
                bail!("{}: {}", label, message);
            }
            Ok(value)
        }
        None => {
            let value: String = Input::new()
                .with_prompt(label)
                .validate_with(|input: &String| rule(input))
                .interact_text()
                .with_context(|| format!("Failed to read {}", label.to_lowercase()))?;
            Ok(value.trim().to_string())
        }
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn employee_row(employee: &Employee) -> String {
    format!(
        "{:>5}  {:<24} {:<34} {:<14} {}",
        employee.id,
        truncate_string(&employee.full_name(), 21),
        truncate_string(&employee.email, 31),
        truncate_string(&employee.department, 11),
        employee.role
    )
}

fn print_employee(employee: &Employee) {
    println!("  {} {}", "ID:".dimmed(), employee.id);
    println!("  {} {}", "Name:".dimmed(), employee.full_name().cyan().bold());
    println!("  {} {}", "Email:".dimmed(), employee.email);
    println!("  {} {}", "Department:".dimmed(), employee.department);
    println!("  {} {}", "Role:".dimmed(), employee.role);
}

fn page_links(page: &EmployeePage) -> String {
    page.page_links
        .iter()
        .map(|&n| {
            if n == page.page {
                format!("[{}]", n).green().bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_page(page: &EmployeePage, empty_message: &str) {
    if page.items.is_empty() {
        println!("{}", empty_message);
        println!("{}", "Try adjusting your search or filter criteria.".dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:>5}  {:<24} {:<34} {:<14} {}",
            "ID", "Name", "Email", "Department", "Role"
        )
        .bold()
    );
    for employee in &page.items {
        println!("{}", employee_row(employee));
    }

    println!(
        "\n{}",
        format!(
            "Showing {} to {} of {} employees",
            page.first_item, page.last_item, page.total_items
        )
        .dimmed()
    );
    if page.total_pages > 1 {
        println!("Pages: {}", page_links(page));
    }
}

fn print_options(title: &str, values: Vec<String>) {
    if values.is_empty() {
        println!("None found.");
        return;
    }

    println!("{}", title.bold());
    for value in values {
        println!("  {}", value.cyan());
    }
}
