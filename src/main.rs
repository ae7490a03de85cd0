use std::time::Instant;

use anyhow::{bail, Context};
use steamsearch::StorefrontClient;

const USAGE: &str = "usage: steamsearch <review QUERY | adult APP_ID | details APP_ID>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_tracing();

    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        bail!(USAGE);
    };
    let argument = args.collect::<Vec<_>>().join(" ");
    if argument.is_empty() {
        bail!(USAGE);
    }

    let client = StorefrontClient::default();
    let started_at = Instant::now();

    match command.as_str() {
        "review" => {
            let (reception, app_id) = client.get_app_review(&argument).await?;
            tracing::info!("Resolved '{argument}' to app {app_id}");
            println!("{reception}");
        }
        "adult" => {
            let is_adult = client
                .check_app_is_adult(&argument)
                .await
                .with_context(|| format!("Failed to check app {argument}"))?;
            println!("{is_adult}");
        }
        "details" => {
            let details = client
                .get_app_details(&argument)
                .await
                .with_context(|| format!("Failed to get details for app {argument}"))?;

            for (app_id, entry) in &details {
                let Some(data) = &entry.data else {
                    println!("{app_id}: no details available");
                    continue;
                };
                println!("{app_id}: {} ({})", data.name, data.app_type);
                println!("Platforms: {}", data.platforms);
                println!("Content descriptors: {}", data.content_descriptors);
            }
        }
        other => bail!("unknown command '{other}'\n{USAGE}"),
    }

    tracing::info!("Whole process took {}ms", started_at.elapsed().as_millis());

    Ok(())
}

fn start_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {err}");
    }
}
