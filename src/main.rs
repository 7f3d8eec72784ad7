use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use orphanage_map::{
    ApiConfig, ClientConfig, HttpApi, MapBrowser, RegistrationForm, core::FileMediaPicker,
    screens::{FormState, PickResult, fetch_orphanages},
};

#[derive(Parser)]
#[command(name = "orphanage-map")]
#[command(about = "Browse and register orphanages on the community map")]
struct Cli {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    client: ClientConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered orphanage
    List,

    /// Register a new orphanage at the given position
    Register {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        about: String,

        #[arg(long, default_value = "")]
        instructions: String,

        #[arg(long, default_value = "")]
        opening_hours: String,

        /// Whether visits are possible on weekends
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        open_on_weekends: bool,

        /// Photo to attach (repeatable)
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,
    },

    /// Open the desktop application
    #[cfg(feature = "gui")]
    Gui,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();
    match args.command {
        // iced owns the main thread and its own runtime.
        #[cfg(feature = "gui")]
        Command::Gui => orphanage_map::gui::run(args.api, args.client),
        command => tokio::runtime::Runtime::new()?.block_on(run(command, args.api, args.client)),
    }
}

async fn run(command: Command, api: ApiConfig, client: ClientConfig) -> anyhow::Result<()> {
    let api = HttpApi::new(&api)?;
    tracing::debug!(base_url = %api.base_url(), "using orphanage API");

    match command {
        Command::List => {
            let mut map = MapBrowser::new(client);
            let (ticket, result) = fetch_orphanages(&api, map.focus()).await;
            map.apply_fetch(ticket, result);
            if let Some(err) = map.last_error() {
                anyhow::bail!("Failed to load orphanages: {err}");
            }
            for marker in map.markers() {
                println!(
                    "  #{} {} at ({}, {})",
                    marker.id,
                    marker.name,
                    marker.position.latitude(),
                    marker.position.longitude()
                );
            }
            println!("{}", map.footer_text());
        }
        Command::Register {
            latitude,
            longitude,
            name,
            about,
            instructions,
            opening_hours,
            open_on_weekends,
            images,
        } => {
            let mut form = RegistrationForm::from_coordinates(latitude, longitude, client)?;
            form.set_name(name);
            form.set_about(about);
            form.set_instructions(instructions);
            form.set_opening_hours(opening_hours);
            form.set_open_on_weekends(open_on_weekends);

            let picker = FileMediaPicker::new(images.iter().cloned());
            for path in &images {
                match form.pick_image(&picker).await {
                    PickResult::Added => {}
                    PickResult::Cancelled => println!("Skipped {}", path.display()),
                    PickResult::PermissionDenied => {
                        if let Some(alert) = form.alert() {
                            anyhow::bail!("{}: {}", alert.message, path.display());
                        }
                    }
                }
            }

            if form.submit_with(&api).await.is_some() {
                println!("Registered \"{}\"", form.draft().name);
            } else if let FormState::SubmitFailed { reason } = form.state() {
                anyhow::bail!("Registration failed: {reason}");
            }
        }
        #[cfg(feature = "gui")]
        Command::Gui => unreachable!("the GUI is started before the runtime"),
    }

    Ok(())
}
