//! `intake` — command-line client for the lead intake service.
//!
//! # Usage
//!
//! ```
//! intake --url http://localhost:8080 enquiries --by-time
//! intake submit --name "Rahul Sharma" --phone "+91 98765 43210" \
//!     --email rahul@example.com --service studyAbroad \
//!     --country Canada --message "Interested in MS programs"
//! intake subscribe rahul@example.com
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use intake_core::enquiry::{NewEnquiry, Service};
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "intake", about = "Command-line client for the lead intake API")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the intake server (default: http://localhost:8080).
  #[arg(long, env = "INTAKE_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Submit a new enquiry.
  Submit {
    /// Full name of the lead.
    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    email: String,

    /// One of: studyAbroad, jobPlacement, ieltsTraining, shortTermCourses,
    /// onlineCourses.
    #[arg(long)]
    service: String,

    /// Preferred destination country.
    #[arg(long)]
    country: String,

    #[arg(long)]
    message: String,
  },

  /// List stored enquiries.
  Enquiries {
    /// Order by submission time instead of insertion order.
    #[arg(long)]
    by_time: bool,
  },

  /// Register a subscriber email address.
  Subscribe { email: String },

  /// List subscriber email addresses.
  Subscribers,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

fn load_config_file(path: &std::path::Path) -> Result<ConfigFile> {
  let text = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read config file {path:?}"))?;
  toml::from_str(&text).with_context(|| format!("failed to parse {path:?}"))
}

// ─── Main ─────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => load_config_file(path)?,
    None => ConfigFile::default(),
  };

  // Flag (or INTAKE_URL) wins over the config file.
  let base_url = args
    .url
    .clone()
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| "http://localhost:8080".to_string());

  let client = ApiClient::new(ApiConfig { base_url })?;

  match args.command {
    Command::Submit { name, phone, email, service, country, message } => {
      // The same service check the enquiry form performs in the browser;
      // the server rejects unknown values regardless.
      let service: Service = service.parse().map_err(|_| {
        let accepted: Vec<&str> =
          Service::ALL.iter().map(|s| s.as_str()).collect();
        anyhow::anyhow!(
          "unknown service; accepted values: {}",
          accepted.join(", ")
        )
      })?;

      let id = client
        .submit_enquiry(&NewEnquiry {
          full_name: name,
          phone,
          email,
          service,
          country,
          message,
        })
        .await?;
      println!("{id}");
    }

    Command::Enquiries { by_time } => {
      for e in client.list_enquiries(by_time).await? {
        println!(
          "{}  {}  {}  {}  <{}>  {}",
          e.submitted_at.to_rfc3339(),
          e.id,
          e.service,
          e.full_name,
          e.email,
          e.country,
        );
      }
    }

    Command::Subscribe { email } => {
      client.add_subscriber(&email).await?;
    }

    Command::Subscribers => {
      for email in client.list_subscribers().await? {
        println!("{email}");
      }
    }
  }

  Ok(())
}
