//! StaffDB CLI
//!
//! Non-interactive front end over the record store.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use staffdb::view::{ConsoleView, View};
use staffdb::{
    Config, CredentialStore, RecordManager, RecordStore, SearchQuery, SortKey, StaffError,
};
use tracing_subscriber::{fmt, EnvFilter};

/// StaffDB CLI
#[derive(Parser, Debug)]
#[command(name = "staffdb")]
#[command(about = "Employee attendance records with a checksummed binary store")]
#[command(version)]
struct Args {
    /// Binary data file
    #[arg(short = 'f', long, default_value = "employees.db")]
    data_file: PathBuf,

    /// Credential file
    #[arg(short, long, default_value = "admin.auth")]
    auth_file: PathBuf,

    /// Admin username
    #[arg(short, long, default_value = "")]
    user: String,

    /// Admin password
    #[arg(short, long, default_value = "")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create (or replace) the admin account
    Init {
        /// New username
        username: String,

        /// New password
        new_password: String,
    },

    #[command(flatten)]
    Records(RecordCommand),
}

/// Commands that run against the loaded record collection
#[derive(Subcommand, Debug)]
enum RecordCommand {
    /// Add an employee
    #[command(allow_negative_numbers = true)]
    Add {
        name: String,
        department: String,
        /// Attendance date (YYYY-MM-DD)
        date: String,
        /// Attendance days
        days: i32,
    },

    /// Remove an employee by id
    Remove { id: i32 },

    /// Replace an employee's fields
    #[command(allow_negative_numbers = true)]
    Update {
        id: i32,
        name: String,
        department: String,
        /// Attendance date (YYYY-MM-DD)
        date: String,
        /// Attendance days
        days: i32,
    },

    /// Search employees
    #[command(group(ArgGroup::new("by").required(true)))]
    Search {
        /// Exact id
        #[arg(long, group = "by")]
        id: Option<i32>,

        /// Name fragment
        #[arg(long, group = "by")]
        name: Option<String>,

        /// Exact department
        #[arg(long, group = "by")]
        department: Option<String>,
    },

    /// List all employees
    List {
        /// Sort key: id, name, department, date, days (days sorts descending)
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Persist the sorted order
        #[arg(long, requires = "sort")]
        save: bool,
    },

    /// Attendance totals
    #[command(group(ArgGroup::new("period").required(true)))]
    Stats {
        /// Month (YYYY-MM)
        #[arg(long, group = "period")]
        month: Option<String>,

        /// Year (YYYY)
        #[arg(long, group = "period")]
        year: Option<String>,
    },

    /// Export all employees to CSV
    Export {
        /// Destination file (defaults to employees.csv)
        path: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,staffdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut view = ConsoleView::stdout();

    if let Err(e) = run(args, &mut view) {
        tracing::error!("{}", e);
        view.show_message(&e.to_string(), true);
        std::process::exit(1);
    }
}

fn run(args: Args, view: &mut impl View) -> staffdb::Result<()> {
    let config = Config::builder()
        .data_file(args.data_file)
        .auth_file(args.auth_file)
        .build();

    let credentials = CredentialStore::new(&config.auth_file);

    let command = match args.command {
        Commands::Init { username, new_password } => {
            if credentials.is_provisioned() {
                credentials.authenticate(&args.user, &args.password)?;
            }
            credentials.save(&username, &new_password)?;
            view.show_message("Admin account saved", false);
            return Ok(());
        }
        Commands::Records(command) => command,
    };

    if !credentials.is_provisioned() {
        view.show_message("No admin account yet; run `staffdb init <username> <password>`", true);
        return Err(StaffError::AuthFailed);
    }
    credentials.authenticate(&args.user, &args.password)?;

    let store = RecordStore::new(&config.data_file);
    let mut manager = RecordManager::new();
    match store.load(&mut manager) {
        Ok(count) => tracing::debug!(count, "Loaded data file"),
        Err(StaffError::FileNotFound(path)) => {
            tracing::info!("Data file {} not found, starting empty", path.display());
        }
        Err(e) => return Err(e),
    }

    let dirty = execute(command, &config, &mut manager, view)?;
    if dirty {
        store.save(&manager)?;
    }

    Ok(())
}

/// Run one command; returns whether the collection must be saved
fn execute(
    command: RecordCommand,
    config: &Config,
    manager: &mut RecordManager,
    view: &mut impl View,
) -> staffdb::Result<bool> {
    match command {
        RecordCommand::Add { name, department, date, days } => {
            let id = manager.add(&name, &department, &date, days)?;
            view.show_message(&format!("Employee {} added", id), false);
            Ok(true)
        }

        RecordCommand::Remove { id } => {
            let removed = manager.remove_by_id(id)?;
            view.show_message(&format!("Employee {} ({}) removed", removed.id, removed.name), false);
            Ok(true)
        }

        RecordCommand::Update { id, name, department, date, days } => {
            manager.update(id, &name, &department, &date, days)?;
            view.show_message(&format!("Employee {} updated", id), false);
            Ok(true)
        }

        RecordCommand::Search { id, name, department } => {
            let query = match (id, name.as_deref(), department.as_deref()) {
                (Some(id), _, _) => SearchQuery::Id(id),
                (None, Some(name), _) => SearchQuery::Name(name),
                (None, None, Some(department)) => SearchQuery::Department(department),
                (None, None, None) => {
                    return Err(StaffError::InvalidParameter("no search criterion".to_string()))
                }
            };

            let results = manager.search(query)?;
            if results.is_empty() {
                view.show_message("No matching employees found", false);
            } else {
                view.show_message(&format!("{} found", results.len()), false);
                view.render_records(results.iter().copied());
            }
            Ok(false)
        }

        RecordCommand::List { sort, save } => {
            if let Some(key) = sort {
                manager.sort(key);
            }

            if manager.is_empty() {
                view.show_message("No employee records", false);
            } else {
                view.render_records(manager.records());
            }
            Ok(save)
        }

        RecordCommand::Stats { month, year } => {
            let (label, total) = match (month, year) {
                (Some(month), _) => {
                    let total = manager.monthly_attendance(&month);
                    (month, total)
                }
                (None, Some(year)) => {
                    let total = manager.yearly_attendance(&year);
                    (year, total)
                }
                (None, None) => {
                    return Err(StaffError::InvalidParameter("no period given".to_string()))
                }
            };
            view.show_message(&format!("Total attendance days for {}: {}", label, total), false);
            Ok(false)
        }

        RecordCommand::Export { path } => {
            let path = path.unwrap_or_else(|| config.csv_file.clone());
            let rows = staffdb::storage::export_csv(&path, manager.records())?;
            view.show_message(&format!("Exported {} rows to {}", rows, path.display()), false);
            Ok(false)
        }
    }
}
