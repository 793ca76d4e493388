//! Command-line definition.

use std::path::PathBuf;

use a24api_provider::{
    Command, FilterSet, Function, Invocation, OutputMode, RecordKind, Result, Service, schema,
};
use clap::{ArgAction, Args, Parser, Subcommand};

const PRECEDENCE_NOTE: &str =
    "Parameters precedence is config_file > command_line > environment > defaults.";

/// Active24 REST API client
#[derive(Parser, Debug)]
#[command(name = "a24api", version, long_about = None)]
#[command(after_help = PRECEDENCE_NOTE)]
pub struct Cli {
    /// Path to config file [env: A24API_CONFIG] [default: a24api-conf.json next to the executable]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Active24 REST API url [env: A24API_ENDPOINT]
    #[arg(short, long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Active24 REST API token [env: A24API_TOKEN]
    #[arg(short, long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Output format: json or inline
    #[arg(short, long, global = true, default_value = "inline", value_name = "FORMAT")]
    pub format: OutputMode,

    /// Use IPv4 only
    #[arg(short = '4', global = true, conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Use IPv6 only
    #[arg(short = '6', global = true)]
    pub ipv6: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log requests and responses to stderr (-vv for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub service: ServiceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommand {
    /// Manage DNS records
    #[command(subcommand)]
    Dns(DnsCommand),
}

#[derive(Subcommand, Debug)]
pub enum DnsCommand {
    /// List domains, or the records of <DOMAIN>
    ///
    /// Filters apply to inline output only; JSON output is printed unfiltered.
    List(ListArgs),

    /// Create a record
    #[command(after_help = record_shapes())]
    Create(CreateArgs),

    /// Replace the record <HASH_ID>
    #[command(after_help = record_shapes())]
    Update(UpdateArgs),

    /// Delete the record <HASH_ID>
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    pub domain: Option<String>,

    /// Only records (or domains) whose name matches
    #[arg(long = "filter-name", visible_alias = "fn", value_name = "REGEX")]
    pub filter_name: Option<String>,

    /// Only records whose type matches
    #[arg(long = "filter-type", visible_alias = "ft", value_name = "REGEX")]
    pub filter_type: Option<String>,

    /// Only records whose main value (ip, alias, text, target, ...) matches
    #[arg(long = "filter-value", visible_alias = "fv", value_name = "REGEX")]
    pub filter_value: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    pub domain: String,
    /// Record type
    #[arg(value_name = "TYPE")]
    pub kind: String,
    /// Record fields, see below. Put `--` before a value starting with '-'
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub domain: String,
    pub hash_id: String,
    /// Record type
    #[arg(value_name = "TYPE")]
    pub kind: String,
    /// Record fields, see below. Put `--` before a value starting with '-'
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub domain: String,
    pub hash_id: String,
}

/// Argument shape of every record type, for `create`/`update` help.
fn record_shapes() -> String {
    let mut text = String::from("Record types:");
    for kind in RecordKind::ALL {
        text.push_str("\n  ");
        text.push_str(&schema::lookup(kind).usage());
    }
    text
}

impl Cli {
    /// Plan the call and compile the filters.
    pub fn invocation(&self) -> Result<Invocation> {
        let ServiceCommand::Dns(dns) = &self.service;

        let (function, positional): (Function, Vec<String>) = match dns {
            DnsCommand::List(args) => (Function::List, args.domain.iter().cloned().collect()),
            DnsCommand::Create(args) => (
                Function::Create,
                [&args.domain, &args.kind]
                    .into_iter()
                    .chain(&args.fields)
                    .cloned()
                    .collect(),
            ),
            DnsCommand::Update(args) => (
                Function::Update,
                [&args.domain, &args.hash_id, &args.kind]
                    .into_iter()
                    .chain(&args.fields)
                    .cloned()
                    .collect(),
            ),
            DnsCommand::Delete(args) => (
                Function::Delete,
                vec![args.domain.clone(), args.hash_id.clone()],
            ),
        };

        let filters = match dns {
            DnsCommand::List(args) => FilterSet::new(
                args.filter_name.as_deref(),
                args.filter_type.as_deref(),
                args.filter_value.as_deref(),
            )?,
            _ => FilterSet::default(),
        };

        Ok(Invocation {
            command: Command::plan(Service::Dns, function, &positional)?,
            output: self.format,
            filters,
        })
    }
}
