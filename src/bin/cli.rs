//! Strata CLI Client
//!
//! Command-line interface for talking to a running Strata server.

use clap::{Parser, Subcommand, ValueEnum};

/// Strata CLI
#[derive(Parser, Debug)]
#[command(name = "strata-cli")]
#[command(about = "CLI for the Strata tiered record store")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

/// Which collection to operate on
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Collection {
    Users,
    Todos,
}

impl Collection {
    fn path(self) -> &'static str {
        match self {
            Collection::Users => "/users",
            Collection::Todos => "/todos",
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all records of a collection
    List {
        /// The collection to list
        collection: Collection,
    },

    /// Get a single record by id
    Get {
        /// The collection to read
        collection: Collection,

        /// The record id
        id: u64,
    },

    /// Create a user
    AddUser {
        /// Unique username
        #[arg(long)]
        username: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,
    },

    /// Create a todo
    AddTodo {
        /// Id of the owning user
        #[arg(long)]
        user_id: u64,

        /// Todo title
        #[arg(long)]
        title: String,

        /// Mark as already completed
        #[arg(long)]
        completed: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let http = reqwest::Client::new();

    let result = match args.command {
        Commands::List { collection } => {
            fetch_json(&http, format!("{}{}", args.server, collection.path())).await
        }
        Commands::Get { collection, id } => {
            fetch_json(&http, format!("{}{}/{}", args.server, collection.path(), id)).await
        }
        Commands::AddUser {
            username,
            name,
            email,
        } => {
            let body = serde_json::json!({
                "username": username,
                "name": name,
                "email": email,
            });
            post_json(&http, format!("{}/users", args.server), body).await
        }
        Commands::AddTodo {
            user_id,
            title,
            completed,
        } => {
            let body = serde_json::json!({
                "userId": user_id,
                "title": title,
                "completed": completed,
            });
            post_json(&http, format!("{}/todos", args.server), body).await
        }
    };

    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{value}"),
        },
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// GET a JSON value, treating non-2xx bodies as the error message
async fn fetch_json(http: &reqwest::Client, url: String) -> Result<serde_json::Value, String> {
    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("GET {url}: {e}"))?;

    read_json(response).await
}

/// POST a JSON body, treating non-2xx bodies as the error message
async fn post_json(
    http: &reqwest::Client,
    url: String,
    body: serde_json::Value,
) -> Result<serde_json::Value, String> {
    let response = http
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("POST {url}: {e}"))?;

    read_json(response).await
}

async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("reading response: {e}"))?;

    if status.is_success() {
        serde_json::from_str(&text).map_err(|e| format!("invalid JSON response: {e}"))
    } else {
        Err(format!("{status}: {text}"))
    }
}
