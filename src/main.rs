//! Purpose: `oura` CLI entry point; fetches one document or one page and prints it as JSON.
//! Role: Binary crate root; parses args, builds the client, emits JSON on stdout.
//! Invariants: Each invocation issues at most one HTTP request; paging is left to the caller.
//! Invariants: Runtime errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
#![allow(clippy::result_large_err)]
use std::error::Error as StdError;
use std::io::{self, IsTerminal};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use oura::api::{
    ClientConfig, DEFAULT_BASE_URL, Day, Document, Error, OuraClient, Page, Resource, Timestamp,
    to_exit_code,
};
use oura::resources::{
    DailyActivity, DailyReadiness, DailySleep, DailySpo2, DailyStress, EnhancedTag, HeartRate,
    RestModePeriod, RingConfiguration, Session, Sleep, SleepTime, Workout,
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use time::{Date, OffsetDateTime, Time};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "oura",
    version,
    about = "Fetch records from the Oura v2 REST API",
    long_about = r#"Fetch records from the Oura v2 REST API and print them as JSON.

Every response is decoded strictly: a payload missing any expected key fails
with a decode error instead of producing a partially filled record."#,
    after_help = r#"EXAMPLES
  $ oura personal-info
  $ oura get sleep 4f0c8e1a-...
  $ oura list daily-readiness --start 2024-01-01 --end 2024-01-31
  $ oura list heartrate --start 2024-01-01T00:00:00Z --end 2024-01-02T00:00:00Z

NOTES
  - Exit codes: 3 transport, 4 upstream status, 5 decode.
  - `list` prints one page; pass its `next_token` back with --next-token."#
)]
struct Cli {
    #[arg(
        long,
        env = "OURA_ACCESS_TOKEN",
        hide_env_values = true,
        global = true,
        help = "Personal access token"
    )]
    token: Option<String>,
    #[arg(
        long = "base-url",
        env = "OURA_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true,
        help = "API base URL"
    )]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Fetch one document by ID")]
    Get {
        #[arg(value_enum, help = "Resource kind")]
        resource: ResourceKind,
        #[arg(help = "Document ID")]
        id: String,
    },
    #[command(
        about = "Fetch one page of a resource collection",
        after_help = r#"Day resources take YYYY-MM-DD bounds. `heartrate` takes RFC 3339
datetimes; a bare date is read as midnight UTC."#
    )]
    List {
        #[arg(value_enum, help = "Resource kind")]
        resource: ResourceKind,
        #[arg(long, help = "Start of the range")]
        start: String,
        #[arg(long, help = "End of the range")]
        end: String,
        #[arg(long = "next-token", help = "Continuation token from a previous page")]
        next_token: Option<String>,
    },
    #[command(about = "Fetch the account's personal info")]
    PersonalInfo,
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        after_help = r#"EXAMPLES
  $ oura completions bash > ~/.local/share/bash-completion/completions/oura
  $ oura completions zsh > ~/.zfunc/_oura"#
    )]
    Completions {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ResourceKind {
    DailyActivity,
    DailyReadiness,
    DailySleep,
    DailySpo2,
    DailyStress,
    Heartrate,
    EnhancedTag,
    RestModePeriod,
    RingConfiguration,
    Session,
    Sleep,
    SleepTime,
    Workout,
}

#[derive(Debug)]
enum CliError {
    Api(Error),
    Encode(serde_json::Error),
}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        CliError::Api(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Encode(err)
    }
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Api(err) => to_exit_code(err.kind()),
            CliError::Encode(_) => 1,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            emit_error(&err);
            err.exit_code()
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::aot::generate(shell, &mut cmd, "oura", &mut io::stdout());
        return Ok(());
    }

    let Some(token) = cli.token.filter(|token| !token.is_empty()) else {
        usage_error(
            ClapErrorKind::MissingRequiredArgument,
            "an access token is required (--token or OURA_ACCESS_TOKEN)",
        );
    };
    let client = OuraClient::with_config(ClientConfig::new(token).with_base_url(cli.base_url))?;

    let value = match cli.command {
        Command::Get { resource, id } => get(&client, resource, &id)?,
        Command::List {
            resource,
            start,
            end,
            next_token,
        } => list(&client, resource, &start, &end, next_token.as_deref())?,
        Command::PersonalInfo => serde_json::to_value(client.personal_info()?)?,
        Command::Completions { .. } => return Ok(()),
    };
    emit_json(&value)?;
    Ok(())
}

fn get(client: &OuraClient, resource: ResourceKind, id: &str) -> Result<Value, CliError> {
    match resource {
        ResourceKind::DailyActivity => document::<DailyActivity>(client, id),
        ResourceKind::DailyReadiness => document::<DailyReadiness>(client, id),
        ResourceKind::DailySleep => document::<DailySleep>(client, id),
        ResourceKind::DailySpo2 => document::<DailySpo2>(client, id),
        ResourceKind::DailyStress => document::<DailyStress>(client, id),
        ResourceKind::Heartrate => usage_error(
            ClapErrorKind::InvalidValue,
            "heartrate samples have no ID; use `oura list heartrate`",
        ),
        ResourceKind::EnhancedTag => document::<EnhancedTag>(client, id),
        ResourceKind::RestModePeriod => document::<RestModePeriod>(client, id),
        ResourceKind::RingConfiguration => document::<RingConfiguration>(client, id),
        ResourceKind::Session => document::<Session>(client, id),
        ResourceKind::Sleep => document::<Sleep>(client, id),
        ResourceKind::SleepTime => document::<SleepTime>(client, id),
        ResourceKind::Workout => document::<Workout>(client, id),
    }
}

fn list(
    client: &OuraClient,
    resource: ResourceKind,
    start: &str,
    end: &str,
    next_token: Option<&str>,
) -> Result<Value, CliError> {
    match resource {
        ResourceKind::DailyActivity => collection::<DailyActivity>(client, start, end, next_token),
        ResourceKind::DailyReadiness => {
            collection::<DailyReadiness>(client, start, end, next_token)
        }
        ResourceKind::DailySleep => collection::<DailySleep>(client, start, end, next_token),
        ResourceKind::DailySpo2 => collection::<DailySpo2>(client, start, end, next_token),
        ResourceKind::DailyStress => collection::<DailyStress>(client, start, end, next_token),
        ResourceKind::Heartrate => collection::<HeartRate>(client, start, end, next_token),
        ResourceKind::EnhancedTag => collection::<EnhancedTag>(client, start, end, next_token),
        ResourceKind::RestModePeriod => {
            collection::<RestModePeriod>(client, start, end, next_token)
        }
        ResourceKind::RingConfiguration => {
            collection::<RingConfiguration>(client, start, end, next_token)
        }
        ResourceKind::Session => collection::<Session>(client, start, end, next_token),
        ResourceKind::Sleep => collection::<Sleep>(client, start, end, next_token),
        ResourceKind::SleepTime => collection::<SleepTime>(client, start, end, next_token),
        ResourceKind::Workout => collection::<Workout>(client, start, end, next_token),
    }
}

fn document<R: Document + Serialize>(client: &OuraClient, id: &str) -> Result<Value, CliError> {
    Ok(serde_json::to_value(client.document::<R>(id)?)?)
}

fn collection<R>(
    client: &OuraClient,
    start: &str,
    end: &str,
    next_token: Option<&str>,
) -> Result<Value, CliError>
where
    R: Resource + Serialize,
    R::Bound: CliBound,
{
    let start = R::Bound::parse_flag("--start", start).unwrap_or_else(|msg| invalid_bound(&msg));
    let end = R::Bound::parse_flag("--end", end).unwrap_or_else(|msg| invalid_bound(&msg));
    let page: Page<R> = client.collection(start, end, next_token)?;
    Ok(serde_json::to_value(page)?)
}

/// Range bound as typed on the command line.
trait CliBound: Sized {
    fn parse_flag(flag: &str, raw: &str) -> Result<Self, String>;
}

impl CliBound for Date {
    fn parse_flag(flag: &str, raw: &str) -> Result<Self, String> {
        Day::parse(raw)
            .map(|day| day.date())
            .map_err(|err| format!("invalid {flag} {raw:?}: expected YYYY-MM-DD ({err})"))
    }
}

// A bare date means midnight UTC.
impl CliBound for OffsetDateTime {
    fn parse_flag(flag: &str, raw: &str) -> Result<Self, String> {
        if let Ok(timestamp) = Timestamp::parse(raw) {
            return Ok(timestamp.as_offset_datetime());
        }
        Day::parse(raw)
            .map(|day| day.date().with_time(Time::MIDNIGHT).assume_utc())
            .map_err(|err| {
                format!(
                    "invalid {flag} {raw:?}: expected an RFC 3339 datetime or YYYY-MM-DD ({err})"
                )
            })
    }
}

fn invalid_bound<T>(message: &str) -> T {
    usage_error(ClapErrorKind::ValueValidation, message)
}

fn usage_error(kind: ClapErrorKind, message: &str) -> ! {
    Cli::command().error(kind, message).exit()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn emit_json(value: &Value) -> Result<(), CliError> {
    let json = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn emit_error(err: &CliError) {
    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_causes(err: &dyn StdError) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &CliError) -> Value {
    let mut inner = Map::new();
    match err {
        CliError::Api(err) => {
            inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
            inner.insert(
                "message".to_string(),
                json!(err.message().unwrap_or("request failed")),
            );
            if let Some(status) = err.status() {
                inner.insert("status".to_string(), json!(status));
            }
            if let Some(failure) = err.decode_failure() {
                inner.insert("failure".to_string(), json!(failure.to_string()));
            }
            if let Some(field) = err.missing_field() {
                inner.insert("field".to_string(), json!(field));
            }
            if let Some(path) = err.path() {
                inner.insert("path".to_string(), json!(path));
            }
            let causes = error_causes(err);
            if !causes.is_empty() {
                inner.insert("causes".to_string(), json!(causes));
            }
        }
        CliError::Encode(err) => {
            inner.insert("kind".to_string(), json!("Encode"));
            inner.insert("message".to_string(), json!(err.to_string()));
        }
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}
