/// OpenVidu CLI - command-line access to an OpenVidu server's REST API
use clap::{Parser, Subcommand};
use openvidu_cli::{payload, CliConfig, ConfigOverrides};
use openvidu_client::{
    OpenViduClient, RecordingProperties, RestApiError, SessionProperties, TokenOptions,
};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "openvidu")]
#[command(about = "OpenVidu server REST API client", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./openvidu.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Server URL, overrides OPENVIDU_URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Server secret, overrides OPENVIDU_SECRET
    #[arg(long, global = true)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a session
    CreateSession {
        /// Custom session id
        #[arg(long)]
        custom_id: Option<String>,
        /// Remaining session properties as a JSON object
        #[arg(long)]
        json: Option<String>,
    },
    /// Generate a token for a session
    GenerateToken {
        /// Session id
        session: String,
        /// Remaining token options as a JSON object
        #[arg(long)]
        json: Option<String>,
    },
    /// Show one session
    GetSession {
        /// Session id
        session: String,
    },
    /// List active sessions
    ListSessions,
    /// Close a session
    CloseSession {
        /// Session id
        session: String,
    },
    /// Evict a connection from a session
    CloseConnection {
        /// Session id
        session: String,
        /// Connection id
        connection: String,
    },
    /// Force a stream to be unpublished
    UnpublishStream {
        /// Session id
        session: String,
        /// Stream id
        stream: String,
    },
    /// Start recording a session
    StartRecording {
        /// Session id
        session: String,
        /// Recording name
        #[arg(long)]
        name: Option<String>,
        /// Remaining recording properties as a JSON object
        #[arg(long)]
        json: Option<String>,
    },
    /// Stop a recording
    StopRecording {
        /// Recording id
        recording: String,
    },
    /// Show one recording
    GetRecording {
        /// Recording id
        recording: String,
    },
    /// List all recordings
    ListRecordings,
    /// Delete a recording
    DeleteRecording {
        /// Recording id
        recording: String,
    },
    /// Show the server configuration
    GetConfig,
}

/// What a command produced: a JSON document or a bare status code.
enum Output {
    Json(Value),
    Status(u16),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openvidu_cli=info,openvidu_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(Output::Json(value)) => match serde_json::to_string_pretty(&value) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(Output::Status(status)) => {
            println!("{}", status);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<RestApiError>() {
                Some(api_error) => report(api_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Output> {
    let config = CliConfig::load(
        cli.config.as_deref(),
        ConfigOverrides {
            url: cli.url,
            secret: cli.secret,
        },
    )?;

    tracing::debug!(url = %config.url, "Using OpenVidu server");
    let client = OpenViduClient::from_config(&config.client_config());

    let output = match cli.command {
        Commands::CreateSession { custom_id, json } => {
            let properties: SessionProperties = payload::build(
                json.as_deref(),
                &[("customSessionId", custom_id.as_deref())],
            )?;
            Output::Json(client.create_session(&properties).await?)
        }
        Commands::GenerateToken { session, json } => {
            let options: TokenOptions =
                payload::build(json.as_deref(), &[("session", Some(session.as_str()))])?;
            Output::Json(client.generate_token(&options).await?)
        }
        Commands::GetSession { session } => {
            Output::Json(client.get_session_by_id(&session).await?)
        }
        Commands::ListSessions => Output::Json(client.get_active_sessions().await?),
        Commands::CloseSession { session } => {
            Output::Status(client.close_session(&session).await?)
        }
        Commands::CloseConnection {
            session,
            connection,
        } => Output::Status(client.close_connection(&session, &connection).await?),
        Commands::UnpublishStream { session, stream } => {
            Output::Status(client.unpublish_stream(&session, &stream).await?)
        }
        Commands::StartRecording {
            session,
            name,
            json,
        } => {
            let properties: RecordingProperties = payload::build(
                json.as_deref(),
                &[("session", Some(session.as_str())), ("name", name.as_deref())],
            )?;
            Output::Json(client.start_recording(&properties).await?)
        }
        Commands::StopRecording { recording } => {
            Output::Json(client.stop_recording(&recording).await?)
        }
        Commands::GetRecording { recording } => {
            Output::Json(client.get_recording(&recording).await?)
        }
        Commands::ListRecordings => Output::Json(client.get_all_recordings().await?),
        Commands::DeleteRecording { recording } => {
            Output::Status(client.delete_recording(&recording).await?)
        }
        Commands::GetConfig => Output::Json(client.get_config().await?),
    };

    Ok(output)
}

fn report(err: &RestApiError) {
    eprintln!("error: {} {}", err.code, err.data.request.path);
    match &err.data.resp {
        Some(resp) => {
            eprintln!("status: {}", resp.status);
            if !resp.body.is_empty() {
                eprintln!("body: {}", resp.body);
            }
        }
        None => {
            if let Some(cause) = &err.cause {
                eprintln!("not sent or no response: {}", cause);
            }
        }
    }
}
