//! Headless driver for the Moments core.
//!
//! The browser UI is a separate surface; this binary exercises the same
//! store, router and upload pipeline for demos and diagnostics.

use anyhow::{bail, Context};
use tracing_subscriber::{fmt, EnvFilter};

use moments_app::commands::NewEvent;
use moments_app::{resolve, AppState, Config, Route};
use moments_media::UploadFile;
use moments_shared::{EventId, MediaId};

const USAGE: &str = "\
Usage: moments <command> [args]

Commands:
  events                                   List all events
  create-event <name> <host> <date> [msg]  Create an event
  delete-event <event-id>                  Delete an event and its media
  media [event-id]                         List media (optionally one event's)
  upload <event-id> <file>...              Upload files to an event
  describe <media-id>                      Attach an AI description to an image
  welcome <event-id> [event-type]          Regenerate the welcome message
  route <token>                            Resolve a navigation token
  stats                                    Collection counts and footprint
  reset --yes                              Restore the demo dataset
";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("moments_app=info,moments_store=info,moments_media=info,moments_assist=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config).context("Failed to open the store")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "events" => print_json(&state.store.list_events())?,

        "create-event" => {
            let [name, host, date] = required(&args[1..], ["name", "host", "date"])?;
            let (event, route) = state.create_event(NewEvent {
                name: name.clone(),
                host_name: host.clone(),
                date: date.clone(),
                welcome_message: args.get(4).cloned(),
                cover_image: None,
            })?;
            print_json(&event)?;
            println!("admin:  {}", route.token());
            println!("public: {}", Route::PublicUpload(event.id.clone()).token());
        }

        "delete-event" => {
            let [id] = required(&args[1..], ["event-id"])?;
            state.delete_event(&EventId::new(id.clone()))?;
            println!("deleted {id}");
        }

        "media" => match args.get(1) {
            Some(id) => print_json(&state.store.list_media_by_event(&EventId::new(id.clone())))?,
            None => print_json(&state.store.list_media())?,
        },

        "upload" => {
            if args.len() < 3 {
                bail!("upload needs an event id and at least one file\n\n{USAGE}");
            }
            let event_id = EventId::new(args[1].clone());
            let files: Vec<UploadFile> = args[2..]
                .iter()
                .map(UploadFile::from_path)
                .collect();

            let summary = state
                .upload(&event_id, &files, None, |p| {
                    tracing::info!(current = p.current, total = p.total, "batch progress");
                })
                .await?;

            println!("stored {} file(s), {} failed", summary.stored.len(), summary.failed);
            println!("view:   {}", summary.redirect.token());
        }

        "describe" => {
            let [id] = required(&args[1..], ["media-id"])?;
            let item = state.describe_media(&MediaId::new(id.clone())).await?;
            print_json(&item)?;
        }

        "welcome" => {
            let [id] = required(&args[1..], ["event-id"])?;
            let event_type = args.get(2).map(String::as_str).unwrap_or("celebration");
            let event = state
                .refresh_welcome(&EventId::new(id.clone()), event_type)
                .await?;
            print_json(&event)?;
        }

        "route" => {
            let [token] = required(&args[1..], ["token"])?;
            let view = resolve(&state.store, &Route::parse(&token));
            print_json(&view)?;
        }

        "stats" => print_json(&state.store.stats())?,

        "reset" => {
            let confirmed = args.iter().any(|a| a == "--yes");
            state.reset_demo(confirmed).context("pass --yes to confirm")?;
            println!("demo dataset restored");
        }

        _ => print!("{USAGE}"),
    }

    Ok(())
}

/// Pull N required positional arguments or fail with a usage hint.
fn required<const N: usize>(args: &[String], names: [&str; N]) -> anyhow::Result<[String; N]> {
    if args.len() < N {
        bail!("missing argument(s): {}\n\n{USAGE}", names[args.len()..].join(", "));
    }
    Ok(std::array::from_fn(|i| args[i].clone()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
