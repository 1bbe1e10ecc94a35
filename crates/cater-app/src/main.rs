//! Cater application binary - composition root.
//!
//! 1. Load configuration from TOML
//! 2. Open the preferences database
//! 3. Restore the chat engine from the persisted flags
//! 4. Run the terminal host loop on stdin

mod cli;
mod repl;

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use cater_chat::{ChatEngine, ChatError};
use cater_core::catalog::ServiceCatalog;
use cater_core::config::CaterConfig;
use cater_core::types::{Language, PageContext};
use cater_storage::{ChatFlags, Database, PreferenceRepository};

use cli::{expand_home, system_locale, CliArgs};
use repl::{pick_suggestion, print_message, print_services, Command, HELP};

fn intro_banner(language: Language) -> &'static str {
    match language {
        Language::En => "Welcome! Ask about our catering services, planning process, capacity, menus or pricing.\nType /help for commands.",
        Language::Tr => "Hoş geldiniz! Catering hizmetlerimiz, planlama sürecimiz, kapasitemiz, menülerimiz veya fiyatlarımız hakkında soru sorabilirsiniz.\nKomutlar için /help yazın.",
    }
}

fn print_transcript(engine: &ChatEngine) {
    for message in engine.messages().iter() {
        print_message(message);
    }
}

fn prompt() {
    print!("{} ", ">".green());
    let _ = std::io::stdout().flush();
}

async fn send(engine: &ChatEngine, text: &str, show_typing: bool) {
    if !engine.is_open() {
        engine.open();
        print_transcript(engine);
    }
    if show_typing {
        println!("{}", "...".bright_black());
    }
    let reply = engine.send_message(text).await;
    print_message(&reply);
}

/// Handle one command. Returns `false` when the loop should stop.
async fn dispatch(
    engine: &ChatEngine,
    catalog: &ServiceCatalog,
    command: Command,
    show_typing: bool,
) -> bool {
    match command {
        Command::Open => {
            engine.open();
            print_transcript(engine);
        }
        Command::Close => {
            engine.close();
            println!("{}", "(chat closed, /open to continue)".bright_black());
        }
        Command::Lang(language) => {
            engine.set_language(language);
            print_transcript(engine);
        }
        Command::Page(context) => {
            engine.set_page_context(context);
            println!("{}", format!("(page: {})", context).bright_black());
        }
        Command::Section(id) => {
            let context = PageContext::for_section(&id);
            engine.set_page_context(context);
            println!("{}", format!("(section {} -> page: {})", id, context).bright_black());
        }
        Command::Services => {
            engine.set_page_context(PageContext::ServiceList);
            print_services(catalog, engine.language());
            println!();
        }
        Command::View(slug) => match catalog.find(&slug) {
            Ok(entry) => {
                engine.set_page_context(PageContext::ServiceDetail);
                let language = engine.language();
                println!(
                    "{}\n{}\n",
                    entry.title(language).bright_cyan().bold(),
                    entry.event_size(language)
                );
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        Command::Memory => match serde_json::to_string_pretty(&engine.memory()) {
            Ok(json) => println!("{}\n", json),
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        Command::ClearMemory => {
            engine.clear_memory();
            println!("{}", "(memory cleared)".bright_black());
        }
        Command::Reset => {
            engine.clear_conversation();
            println!("{}", "(conversation cleared)".bright_black());
        }
        Command::Help => println!("{}\n", HELP),
        Command::Quit => return false,
        Command::Pick(n) => match pick_suggestion(&engine.messages(), n) {
            Some(text) => {
                println!("{} {}", ">".green(), text);
                send(engine, &text, show_typing).await;
            }
            None => {
                tracing::debug!(n, "No such suggestion; sending as text");
                send(engine, &n.to_string(), show_typing).await;
            }
        },
        Command::Say(text) => send(engine, &text, show_typing).await,
    }
    true
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Loaded before tracing so the configured level applies; a load
    // failure is reported once the subscriber is up.
    let config_file = args.resolve_config_path();
    let (config, config_error) = match CaterConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (CaterConfig::default(), Some(e)),
    };

    // Tracing. Logs go to stderr; stdout carries the conversation.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting Cater v{}", env!("CARGO_PKG_VERSION"));
    match config_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config. Using defaults."
        ),
    }

    // Storage.
    let data_dir = expand_home(&args.resolve_data_dir(&config.general.data_dir));
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }

    let db_path = data_dir.join(&config.storage.database_file);
    let db = Arc::new(Database::new(&db_path)?);
    tracing::info!(path = %db_path.display(), "SQLite database opened");
    let flags = ChatFlags::new(Arc::new(PreferenceRepository::new(db)));

    // Engine.
    let mut chat_config = config.chat.clone();
    chat_config.response_delay_ms = args.resolve_delay_ms(chat_config.response_delay_ms);
    let locale = system_locale();
    let engine = ChatEngine::restore(&chat_config, flags.clone(), locale.as_deref())?;

    if let Some(language) = args.resolve_language()? {
        if engine.language() != language {
            engine.set_language(language);
        }
    }

    // Intro, shown until dismissed once.
    let intro_seen = flags.intro_seen().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to read intro flag");
        false
    });
    if !intro_seen {
        println!("{}\n", intro_banner(engine.language()).bright_yellow());
        if let Err(e) = flags.mark_intro_seen() {
            tracing::warn!(error = %e, "Failed to persist intro flag");
        }
    }

    if engine.is_open() {
        engine.open();
        print_transcript(&engine);
    } else {
        println!("{}", "Type /open to start chatting, /help for commands.".bright_black());
    }

    // Host loop.
    let catalog = ServiceCatalog::standard();
    let show_typing = chat_config.response_delay_ms > 0;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(command) => {
                if !dispatch(&engine, &catalog, command, show_typing).await {
                    break;
                }
            }
            Err(ChatError::EmptyMessage) => {}
            Err(e) => eprintln!("{} {}", e.to_string().red(), "(/help for commands)".bright_black()),
        }
        prompt();
    }

    tracing::info!(session = %engine.session_id(), "Goodbye");
    Ok(())
}
