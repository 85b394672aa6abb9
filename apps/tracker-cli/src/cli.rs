//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracker_core::ports::{Method, QueryValue};

/// Command-line client for the Boston Startup Tracker API.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Token storage file (overrides TRACKER_STORAGE_PATH)
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the returned tokens
    Login {
        email: String,
        #[arg(long, env = "TRACKER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out and forget the stored tokens
    Logout,
    /// Show what the stored token says about the current user
    Whoami,
    /// Exchange the refresh token for a new access token
    Refresh,
    /// Change the current user's password
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    /// Startups
    #[command(subcommand)]
    Startups(ResourceAction),
    /// Investors
    #[command(subcommand)]
    Investors(ResourceAction),
    /// Job postings
    #[command(subcommand)]
    Jobs(ResourceAction),
    /// News articles
    #[command(subcommand)]
    News(ResourceAction),
    /// Users (admin only)
    #[command(subcommand)]
    Users(ResourceAction),
    /// Search startups by name
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(long)]
        industry: Option<String>,
        #[command(flatten)]
        paging: Paging,
    },
    /// Send a raw request to any endpoint
    Request {
        #[arg(value_enum)]
        method: MethodArg,
        endpoint: String,
        /// Query parameter as key=value (repeatable, GET only)
        #[arg(long = "query", short = 'q', value_parser = parse_query_pair)]
        query: Vec<(String, QueryValue)>,
        /// JSON request body (POST and PUT)
        #[arg(long, short = 'd', value_parser = parse_json)]
        data: Option<Value>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List one page
    List {
        #[command(flatten)]
        paging: Paging,
        /// Filter as key=value (repeatable)
        #[arg(long = "filter", short = 'f', value_parser = parse_query_pair)]
        filters: Vec<(String, QueryValue)>,
    },
    /// Show one item
    Show { id: i64 },
    /// Create an item from a JSON body
    Create {
        #[arg(long, short = 'd', value_parser = parse_json)]
        data: Value,
    },
    /// Update an item from a JSON body
    Update {
        id: i64,
        #[arg(long, short = 'd', value_parser = parse_json)]
        data: Value,
    },
    /// Delete an item
    Delete { id: i64 },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Paging {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = tracker_shared::constants::DEFAULT_RESULTS_PER_PAGE)]
    pub per_page: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    Get,
    Post,
    Put,
    Delete,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Get => Method::Get,
            MethodArg::Post => Method::Post,
            MethodArg::Put => Method::Put,
            MethodArg::Delete => Method::Delete,
        }
    }
}

/// Parse `key=value`, typing the value as an integer, float or boolean when
/// it reads as one.
pub fn parse_query_pair(raw: &str) -> Result<(String, QueryValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{}`", raw));
    }

    let value = if let Ok(n) = value.parse::<i64>() {
        QueryValue::Int(n)
    } else if let Ok(f) = value.parse::<f64>() {
        QueryValue::Float(f)
    } else if let Ok(b) = value.parse::<bool>() {
        QueryValue::Bool(b)
    } else {
        QueryValue::Str(value.to_string())
    };

    Ok((key.to_string(), value))
}

pub fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {}", e))
}
