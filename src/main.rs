use clap::Parser;
use color_eyre::eyre::Result;

mod config;
mod credentials;
mod history;
mod logging;
mod panel;
mod properties;

use std::path::PathBuf;

use config::{Args, Config};
use credentials::CredentialError;
use history::Transcript;
use log::info;
use panel::ChatPanel;
use properties::PropertyBag;

pub const GIT_SHA: &str = "unknown";

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("chatpane version 0.1.0 (git: {GIT_SHA})");
        return Ok(());
    }

    let config = Config::load()?;
    let final_config = config.merge_with_args(&args);

    logging::init_logging(final_config.debug.unwrap_or(false))?;
    color_eyre::install()?;

    let history_path = history::default_history_path();

    if args.clear_history {
        Transcript::remove(&history_path)?;
        info!("Transcript removed: {}", history_path.display());
        println!("Transcript cleared.");
        return Ok(());
    }

    if args.history {
        let transcript = Transcript::load(&history_path)?;
        if transcript.is_empty() {
            println!("No transcript saved.");
        }
        for record in transcript.records() {
            println!("{}: {}", record.role, record.content);
        }
        return Ok(());
    }

    let llm_config = final_config.llm.clone().unwrap_or_default();
    let api_key = match dirs::home_dir() {
        Some(home) => credentials::resolve_api_key(&llm_config, &home),
        None => Err(CredentialError::NoHomeDir),
    };

    // Only availability is reported, the key itself stays out of output and logs
    match &api_key {
        Ok(key) if key.is_empty() => println!("API key: configured but empty"),
        Ok(_) => println!("API key: configured"),
        Err(CredentialError::NotConfigured) => println!("API key: not configured"),
        Err(err) => println!("API key: unavailable ({err})"),
    }

    if args.key_status {
        return Ok(());
    }

    // Act as the embedding host: restore the panel from the durable bag,
    // apply CLI mutations, then persist the bag again.
    let state_path = panel_state_path();
    let mut bag = PropertyBag::load(&state_path)?;

    let mut panel = ChatPanel::new(&final_config);
    panel.read_properties(&bag);
    if panel.model().is_empty() {
        // Nothing persisted yet, seed the selection from config
        panel.set_model(final_config.get_model());
    }
    if let Some(model) = &args.model {
        panel.set_model(model.clone());
    }

    let transcript = Transcript::load(&history_path)?.with_limit(final_config.get_history_limit());
    println!("Selected model: {}", panel.model());
    println!("Transcript: {} record(s)", transcript.len());
    panel.set_transcript(transcript);

    panel.write_properties(&mut bag);
    bag.store(&state_path)?;
    info!("Panel state saved to {}", state_path.display());

    Ok(())
}

fn panel_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chatpane")
        .join("panel.json")
}
