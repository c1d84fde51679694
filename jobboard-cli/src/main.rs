//! jobboard - Command-line client for the job board
//!
//! Every command runs the same orchestrators as the terminal UI and reads
//! the outcome from the store, so messages and failure handling match.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use libjobboard::catalog::{find_city, find_niche};
use libjobboard::error::{ApiError, JobBoardError, Result};
use libjobboard::logging::LoggingConfig;
use libjobboard::service::failure::UNREACHABLE_MESSAGE;
use libjobboard::store::ResourceKey;
use libjobboard::types::{
    ApplicationForm, Attachment, Credentials, FilterCriteria, HiringMultiple, Job, JobType,
    NewJob, Niches, PasswordUpdate, ProfileUpdate, Registration, Role, User,
};
use libjobboard::{Config, JobBoard};
use secrecy::SecretString;
use serde::Serialize;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version, about = "Browse, post and apply to jobs from the command line")]
#[command(long_about = r#"Browse, post and apply to jobs from the command line.

EXAMPLES:
    # Check that the backend is up
    jobboard status

    # Search listings
    jobboard jobs list --city Delhi --niche "Web Development" --search react
    jobboard jobs list --format json | jq '.[].title'

    # Commands that need a session log in first
    export JOBBOARD_EMAIL=me@example.com
    jobboard user whoami
    jobboard jobs mine --role employer

OUTPUT FORMATS:
    text  - Human-readable (default)
    json  - JSON for scripting

EXIT CODES:
    0 - Success
    1 - Operation failed (backend unreachable, not found, server error)
    2 - Authentication required or rejected
    3 - Invalid input
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Probe backend health and list API endpoints
    Status,

    /// Job listings and postings
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Account registration and sessions
    #[command(subcommand)]
    User(UserCommand),

    /// Profile and password changes
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Apply to a job
    Apply(ApplyArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Search job listings
    List {
        /// City filter ("All" for any)
        #[arg(long)]
        city: Option<String>,

        /// Niche filter ("All" for any)
        #[arg(long)]
        niche: Option<String>,

        /// Keyword matched against title, company and introduction
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one job in full
    Show {
        id: String,
    },

    /// Post a new job (employers)
    Post(PostJobArgs),

    /// List jobs posted by the signed-in employer
    Mine {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Delete one of your jobs
    Delete {
        id: String,

        #[command(flatten)]
        session: SessionArgs,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Create an account
    Register(RegisterArgs),

    /// Check credentials against the backend
    Login {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Show the signed-in account
    Whoami {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Sign in, then end the session
    Logout {
        #[command(flatten)]
        session: SessionArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Change profile fields; only the given ones are sent
    Update(ProfileArgs),

    /// Change the account password
    Password {
        /// New password (prompted twice when omitted)
        #[arg(long, env = "JOBBOARD_NEW_PASSWORD", hide_env_values = true)]
        new_password: Option<String>,

        #[command(flatten)]
        session: SessionArgs,
    },
}

/// Credentials for commands that need a session
#[derive(Args, Debug)]
struct SessionArgs {
    /// Account email
    #[arg(long, env = "JOBBOARD_EMAIL")]
    email: Option<String>,

    /// Account password (prompted when omitted)
    #[arg(long, env = "JOBBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Account role
    #[arg(long, env = "JOBBOARD_ROLE", value_enum, default_value = "job-seeker")]
    role: RoleArg,
}

#[derive(Args, Debug)]
struct PostJobArgs {
    #[arg(long)]
    title: String,

    #[arg(long, value_enum)]
    job_type: JobTypeArg,

    #[arg(long)]
    location: String,

    #[arg(long)]
    company: String,

    #[arg(long)]
    introduction: Option<String>,

    #[arg(long)]
    responsibilities: String,

    #[arg(long)]
    qualifications: String,

    #[arg(long)]
    offers: Option<String>,

    #[arg(long)]
    salary: String,

    /// Hiring more than one candidate
    #[arg(long)]
    multiple: bool,

    #[arg(long)]
    website_title: Option<String>,

    #[arg(long)]
    website_url: Option<String>,

    #[arg(long)]
    niche: String,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long, value_enum)]
    role: RoleArg,

    #[arg(long)]
    name: String,

    #[arg(long, env = "JOBBOARD_EMAIL")]
    email: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    address: String,

    /// Password (prompted when omitted)
    #[arg(long, env = "JOBBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Up to three niches of interest (job seekers)
    #[arg(long = "niche", value_name = "NICHE")]
    niches: Vec<String>,

    #[arg(long)]
    cover_letter: Option<String>,

    /// Resume file to upload
    #[arg(long, value_name = "FILE")]
    resume: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,

    /// New contact email
    #[arg(long = "new-email")]
    new_email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    cover_letter: Option<String>,

    /// Replace the niches of interest (up to three)
    #[arg(long = "niche", value_name = "NICHE")]
    niches: Vec<String>,

    #[arg(long, value_name = "FILE")]
    resume: Option<PathBuf>,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    job_id: String,

    /// Name on the application (defaults to the account's)
    #[arg(long)]
    name: Option<String>,

    /// Contact email (defaults to the account's)
    #[arg(long)]
    contact_email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    cover_letter: Option<String>,

    #[arg(long, value_name = "FILE")]
    resume: Option<PathBuf>,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoleArg {
    JobSeeker,
    Employer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::JobSeeker => Role::JobSeeker,
            RoleArg::Employer => Role::Employer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum JobTypeArg {
    FullTime,
    PartTime,
}

impl From<JobTypeArg> for JobType {
    fn from(job_type: JobTypeArg) -> Self {
        match job_type {
            JobTypeArg::FullTime => JobType::FullTime,
            JobTypeArg::PartTime => JobType::PartTime,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    LoggingConfig::from_env(cli.verbose).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!(base_url = %config.api.resolved_base_url(), "loaded configuration");

    let board = JobBoard::from_config(&config)?;
    let out = Output {
        json: cli.format == "json",
    };

    match cli.command {
        Commands::Status => status(&board, &out).await,
        Commands::Jobs(command) => jobs(&board, &out, command).await,
        Commands::User(command) => user(&board, &out, command).await,
        Commands::Profile(command) => profile(&board, &out, command).await,
        Commands::Apply(args) => apply(&board, &out, args).await,
    }
}

// === Commands ===

async fn status(board: &JobBoard, out: &Output) -> Result<()> {
    let health = board.api().health().await.map_err(friendly)?;
    let status = board.api().api_status().await.map_err(friendly)?;

    if out.json {
        return out.print_json(&serde_json::json!({ "health": health, "api": status }));
    }

    println!("Health: {}", health.status);
    if let Some(message) = health.message {
        println!("  {}", message);
    }
    println!("API: {}", status.message);
    for (name, path) in status.endpoints {
        println!("  {:<14} {}", name, path);
    }
    Ok(())
}

async fn jobs(board: &JobBoard, out: &Output, command: JobsCommand) -> Result<()> {
    match command {
        JobsCommand::List {
            city,
            niche,
            search,
        } => {
            let filters = FilterCriteria::new(
                city.map(|c| filter_value(&c, find_city)),
                niche.map(|n| filter_value(&n, find_niche)),
                search,
            );
            board.jobs().fetch_jobs(&filters).await;
            outcome(board, ResourceKey::Jobs)?;

            let state = board.store().snapshot();
            out.jobs(state.jobs.snapshot().data())
        }

        JobsCommand::Show { id } => {
            board.jobs().fetch_job(&id).await;
            outcome(board, ResourceKey::SingleJob)?;

            let state = board.store().snapshot();
            match state.single_job.snapshot().data() {
                Some(job) if out.json => out.print_json(job),
                Some(job) => {
                    print_job_detail(job);
                    Ok(())
                }
                None => Err(JobBoardError::Failed("Job not found".to_string())),
            }
        }

        JobsCommand::Post(args) => {
            login(board, &args.session).await?;
            let job = NewJob {
                title: args.title,
                job_type: args.job_type.into(),
                location: args.location,
                company_name: args.company,
                introduction: args.introduction,
                responsibilities: args.responsibilities,
                qualifications: args.qualifications,
                offers: args.offers,
                salary: args.salary,
                hiring_multiple_candidates: if args.multiple {
                    HiringMultiple::Yes
                } else {
                    HiringMultiple::No
                },
                personal_website_title: args.website_title,
                personal_website_url: args.website_url,
                job_niche: canonical(&args.niche, find_niche, "niche")?,
            };
            board.jobs().post_job(&job).await;
            outcome(board, ResourceKey::PostJob)?;
            out.message(&board.store().snapshot().post_job)
        }

        JobsCommand::Mine { session } => {
            login(board, &session).await?;
            board.jobs().fetch_my_jobs().await;
            outcome(board, ResourceKey::MyJobs)?;

            let state = board.store().snapshot();
            out.jobs(state.my_jobs.snapshot().data())
        }

        JobsCommand::Delete { id, session } => {
            login(board, &session).await?;
            board.jobs().delete_job(&id).await;
            outcome(board, ResourceKey::DeleteJob)?;
            out.message(&board.store().snapshot().delete_job)
        }
    }
}

async fn user(board: &JobBoard, out: &Output, command: UserCommand) -> Result<()> {
    match command {
        UserCommand::Register(args) => {
            let password = match args.password {
                Some(password) => SecretString::from(password),
                None => prompt_secret("Choose a password: ")?,
            };
            let registration = Registration {
                role: args.role.into(),
                name: args.name,
                email: args.email,
                phone: args.phone,
                address: args.address,
                password,
                niches: niches(&args.niches)?,
                cover_letter: args.cover_letter,
                resume: args.resume.as_deref().map(read_attachment).transpose()?,
            };
            board.users().register(&registration).await;
            outcome(board, ResourceKey::User)?;
            out.session(board)
        }

        UserCommand::Login { session } => {
            login(board, &session).await?;
            out.session(board)
        }

        UserCommand::Whoami { session } => {
            login(board, &session).await?;
            board.users().fetch_current().await;
            if let Some(error) = board.store().snapshot().error(ResourceKey::User) {
                return Err(JobBoardError::AuthRequired(error.to_string()));
            }

            let state = board.store().snapshot();
            match state.current_user() {
                Some(user) if out.json => out.print_json(user),
                Some(user) => {
                    print_user(user);
                    Ok(())
                }
                None => Err(JobBoardError::AuthRequired(
                    "Please log in to continue".to_string(),
                )),
            }
        }

        UserCommand::Logout { session } => {
            login(board, &session).await?;
            board.users().logout().await;
            outcome(board, ResourceKey::User)?;
            out.message(&board.store().snapshot().user)
        }
    }
}

async fn profile(board: &JobBoard, out: &Output, command: ProfileCommand) -> Result<()> {
    match command {
        ProfileCommand::Update(args) => {
            login(board, &args.session).await?;
            let update = ProfileUpdate {
                name: args.name,
                email: args.new_email,
                phone: args.phone,
                address: args.address,
                cover_letter: args.cover_letter,
                niches: if args.niches.is_empty() {
                    None
                } else {
                    Some(niches(&args.niches)?)
                },
                resume: args.resume.as_deref().map(read_attachment).transpose()?,
            };
            if update == ProfileUpdate::default() {
                return Err(JobBoardError::InvalidInput(
                    "Nothing to update; pass at least one field".to_string(),
                ));
            }
            board.profile().update_profile(&update).await;
            outcome(board, ResourceKey::Profile)?;
            out.message(&board.store().snapshot().profile)
        }

        ProfileCommand::Password {
            new_password,
            session,
        } => {
            let old_password = login(board, &session).await?;
            let (new_password, confirm_password) = match new_password {
                Some(password) => (
                    SecretString::from(password.clone()),
                    SecretString::from(password),
                ),
                None => (
                    prompt_secret("New password: ")?,
                    prompt_secret("Confirm new password: ")?,
                ),
            };
            let update = PasswordUpdate {
                old_password,
                new_password,
                confirm_password,
            };
            board.profile().update_password(&update).await;
            outcome(board, ResourceKey::Profile)?;
            out.message(&board.store().snapshot().profile)
        }
    }
}

async fn apply(board: &JobBoard, out: &Output, args: ApplyArgs) -> Result<()> {
    login(board, &args.session).await?;

    let state = board.store().snapshot();
    let account = state.current_user();
    let from_account = |field: fn(&User) -> Option<String>| account.and_then(field);

    let form = ApplicationForm {
        name: args
            .name
            .or_else(|| from_account(|u| Some(u.name.clone())))
            .unwrap_or_default(),
        email: args
            .contact_email
            .or_else(|| from_account(|u| Some(u.email.clone())))
            .unwrap_or_default(),
        phone: args
            .phone
            .or_else(|| from_account(|u| u.phone.as_ref().map(phone_text)))
            .unwrap_or_default(),
        address: args
            .address
            .or_else(|| from_account(|u| u.address.clone()))
            .unwrap_or_default(),
        cover_letter: args
            .cover_letter
            .or_else(|| from_account(|u| u.cover_letter.clone()))
            .unwrap_or_default(),
        resume: args.resume.as_deref().map(read_attachment).transpose()?,
    };

    board.applications().submit(&args.job_id, &form).await;
    outcome(board, ResourceKey::Application)?;
    out.message(&board.store().snapshot().application)
}

// === Helpers ===

/// Log in within this process; later calls reuse the session cookie
///
/// Returns the password so commands that need it again do not re-prompt.
async fn login(board: &JobBoard, session: &SessionArgs) -> Result<SecretString> {
    let email = session.email.clone().ok_or_else(|| {
        JobBoardError::AuthRequired(
            "Login required: pass --email or set JOBBOARD_EMAIL".to_string(),
        )
    })?;
    let password = match &session.password {
        Some(password) => password.clone(),
        None => prompt_password(&format!("Password for {}: ", email))?,
    };

    let credentials = Credentials {
        role: session.role.into(),
        email,
        password: SecretString::from(password.clone()),
    };
    match board.users().login(&credentials).await {
        Ok(()) => Ok(SecretString::from(password)),
        Err(err) => {
            let message = board
                .store()
                .snapshot()
                .error(ResourceKey::User)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            Err(login_error(&err, message))
        }
    }
}

/// Only a rejection by the server means the credentials need attention
fn login_error(err: &ApiError, message: String) -> JobBoardError {
    if err.status() == Some(400) || err.is_auth() {
        JobBoardError::AuthRequired(message)
    } else {
        JobBoardError::Failed(message)
    }
}

fn prompt_password(prompt: &str) -> Result<String> {
    let value = rpassword::prompt_password(prompt)
        .map_err(|e| JobBoardError::InvalidInput(format!("Cannot read password: {}", e)))?;
    if value.is_empty() {
        return Err(JobBoardError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(value)
}

fn prompt_secret(prompt: &str) -> Result<SecretString> {
    prompt_password(prompt).map(SecretString::from)
}

/// Turn a failed resource into the command's error
fn outcome(board: &JobBoard, key: ResourceKey) -> Result<()> {
    match board.store().snapshot().error(key) {
        Some(error) => Err(JobBoardError::Failed(error.to_string())),
        None => Ok(()),
    }
}

/// Direct API calls get the same wording as orchestrated ones
fn friendly(err: ApiError) -> JobBoardError {
    match err {
        ApiError::Unreachable(_) => JobBoardError::Failed(UNREACHABLE_MESSAGE.to_string()),
        ApiError::Status {
            message: Some(message),
            ..
        } => JobBoardError::Failed(message),
        other => JobBoardError::Api(other),
    }
}

/// Catalog spelling when the value is known, otherwise the trimmed input
///
/// Blank values are dropped later by [`FilterCriteria`].
fn filter_value(value: &str, find: fn(&str) -> Option<&'static str>) -> String {
    let value = value.trim();
    find(value).map_or_else(|| value.to_string(), str::to_string)
}

fn canonical(
    value: &str,
    find: fn(&str) -> Option<&'static str>,
    what: &str,
) -> Result<String> {
    find(value)
        .map(str::to_string)
        .ok_or_else(|| JobBoardError::InvalidInput(format!("Unknown {}: {}", what, value)))
}

fn niches(values: &[String]) -> Result<Niches> {
    if values.len() > 3 {
        return Err(JobBoardError::InvalidInput(
            "At most three niches can be given".to_string(),
        ));
    }
    let mut canonical_niches = values
        .iter()
        .map(|value| canonical(value, find_niche, "niche"))
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    Ok(Niches {
        first_niche: canonical_niches.next(),
        second_niche: canonical_niches.next(),
        third_niche: canonical_niches.next(),
    })
}

fn read_attachment(path: &Path) -> Result<Attachment> {
    Attachment::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .map_err(|e| JobBoardError::InvalidInput(format!("{:#}", e)))
}

fn phone_text(phone: &serde_json::Value) -> String {
    match phone {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn hiring_label(job: &Job) -> &'static str {
    if job.hiring_multiple_candidates.is_yes() {
        "Hiring Multiple Candidates"
    } else {
        "Hiring"
    }
}

fn print_job_detail(job: &Job) {
    println!("{}", job.title);
    println!("  {} | {}", job.company_name, hiring_label(job));
    println!("  Location:  {}", job.location);
    println!("  Salary:    {}", job.salary);
    if let Some(job_type) = job.job_type {
        println!("  Type:      {}", job_type);
    }
    if let Some(ref niche) = job.job_niche {
        println!("  Niche:     {}", niche);
    }
    println!("  Posted On: {}", job.posted_date());

    for (heading, body) in [
        ("Introduction", &job.introduction),
        ("Responsibilities", &job.responsibilities),
        ("Qualifications", &job.qualifications),
        ("Offers", &job.offers),
    ] {
        if let Some(body) = body {
            println!();
            println!("{}:", heading);
            println!("  {}", body);
        }
    }

    if let Some(url) = job.personal_website.as_ref().and_then(|w| w.url.as_ref()) {
        println!();
        println!("Website: {}", url);
    }
}

fn print_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    if let Some(role) = user.role {
        println!("  Role: {}", role);
    }
    if let Some(ref address) = user.address {
        println!("  Address: {}", address);
    }
    if let Some(ref niches) = user.niches {
        let list: Vec<&str> = [&niches.first_niche, &niches.second_niche, &niches.third_niche]
            .into_iter()
            .filter_map(|n| n.as_deref())
            .collect();
        if !list.is_empty() {
            println!("  Niches: {}", list.join(", "));
        }
    }
}

/// Writes command results in the selected format
struct Output {
    json: bool,
}

impl Output {
    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| JobBoardError::Failed(format!("Cannot encode output: {}", e)))?;
        println!("{}", text);
        Ok(())
    }

    fn jobs(&self, jobs: &[Job]) -> Result<()> {
        if self.json {
            return self.print_json(jobs);
        }
        if jobs.is_empty() {
            println!("No jobs found matching your criteria.");
            return Ok(());
        }

        let mut stdout = std::io::stdout().lock();
        for job in jobs {
            writeln!(
                stdout,
                "{} | {} | {} | {} | {}",
                job.posted_date(),
                job.title,
                job.company_name,
                job.location,
                job.salary
            )
            .and_then(|()| writeln!(stdout, "  {} ({})", job.id, hiring_label(job)))
            .map_err(|e| JobBoardError::Failed(format!("Cannot write output: {}", e)))?;
        }
        Ok(())
    }

    /// Confirmation message of a finished operation
    fn message<D>(&self, resource: &libjobboard::AsyncResource<D>) -> Result<()> {
        let message = resource.snapshot().message().unwrap_or("Done");
        if self.json {
            return self.print_json(&serde_json::json!({ "message": message }));
        }
        println!("{}", message);
        Ok(())
    }

    /// Greeting plus the account after register/login
    fn session(&self, board: &JobBoard) -> Result<()> {
        let state = board.store().snapshot();
        let message = state.user.snapshot().message().map(str::to_string);

        if self.json {
            return self.print_json(&serde_json::json!({
                "message": message,
                "user": state.current_user(),
            }));
        }
        if let Some(message) = message {
            println!("{}", message);
        }
        if let Some(user) = state.current_user() {
            print_user(user);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_city_is_case_insensitive() {
        assert_eq!(canonical("delhi", find_city, "city").unwrap(), "Delhi");
        assert_eq!(canonical("all", find_city, "city").unwrap(), "All");
    }

    #[test]
    fn test_filter_value_passes_unknown_values_through() {
        assert_eq!(filter_value(" delhi ", find_city), "Delhi");
        assert_eq!(filter_value("Kolkata", find_city), "Kolkata");
        assert_eq!(filter_value("  ", find_city), "");

        let filters = FilterCriteria::new(Some(filter_value("", find_city)), None, None);
        assert_eq!(filters.to_query(), None);
    }

    #[test]
    fn test_login_error_splits_rejection_from_transport() {
        let rejected = ApiError::Status {
            status: 400,
            message: Some("Invalid email or password.".to_string()),
        };
        let err = login_error(&rejected, "Invalid email or password.".to_string());
        assert_eq!(err.exit_code(), 2);

        let unreachable = ApiError::Unreachable("refused".to_string());
        let err = login_error(&unreachable, UNREACHABLE_MESSAGE.to_string());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), UNREACHABLE_MESSAGE);

        let server = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(login_error(&server, "Login failed".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_unknown_niche_is_invalid_input() {
        let err = canonical("Basket Weaving", find_niche, "niche").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_niches_fill_in_order() {
        let parsed = niches(&["devops".to_string(), "Big Data".to_string()]).unwrap();
        assert_eq!(parsed.first_niche.as_deref(), Some("DevOps"));
        assert_eq!(parsed.second_niche.as_deref(), Some("Big Data"));
        assert_eq!(parsed.third_niche, None);

        let four = vec!["DevOps".to_string(); 4];
        assert!(niches(&four).is_err());
    }

    #[test]
    fn test_friendly_unreachable_message() {
        let err = friendly(ApiError::Unreachable("refused".to_string()));
        assert_eq!(err.to_string(), UNREACHABLE_MESSAGE);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_cli_parses_session_flags() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "jobs",
            "mine",
            "--email",
            "boss@example.com",
            "--role",
            "employer",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        match cli.command {
            Commands::Jobs(JobsCommand::Mine { session }) => {
                assert_eq!(session.email.as_deref(), Some("boss@example.com"));
                assert!(matches!(session.role, RoleArg::Employer));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
