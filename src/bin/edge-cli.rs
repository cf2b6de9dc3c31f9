use clap::{Parser, Subcommand};

use edge_gate::edge::Credential;
use edge_gate::http::check_reachability;

#[derive(Parser)]
#[command(name = "edge-cli")]
#[command(about = "Operator CLI for the edge access filter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the authorization value for a user id and password
    Credential {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Request a URL through the edge and report how the filter answered
    Probe {
        url: String,
        #[arg(short, long, requires = "password")]
        username: Option<String>,
        #[arg(short, long, requires = "username")]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Credential { username, password } => {
            println!("{}", Credential::basic(&username, &password).as_str());
        }
        Commands::Probe { url, username, password } => {
            let credential = match (username, password) {
                (Some(username), Some(password)) => Some(Credential::basic(&username, &password)),
                _ => None,
            };
            let report = check_reachability(&reqwest::Client::new(), &url, credential.as_ref()).await?;
            println!("{report}");
        }
    }

    Ok(())
}
