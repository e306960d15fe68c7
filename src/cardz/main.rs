use cardz::api::{CardzApi, CardzPaths, CmdResult, ConfigAction};
use cardz::commands::config::MASK_CHAR_KEY;
use cardz::config::CardzConfig;
use cardz::error::{CardzError, Result};
use cardz::form::CardForm;
use cardz::input::Field;
use cardz::prefs::fs::FilePreferences;
use cardz::store::PREFS_NAME;
use clap::Parser;
use directories::ProjectDirs;
use log::LevelFilter;
use std::path::PathBuf;

mod cli;
use cli::args::{Cli, Commands};
use cli::render;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CardzApi<FilePreferences>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    // Commands that never touch saved cards run without opening the store.
    match &cli.command {
        Some(Commands::Brand { number }) => return handle_brand(number),
        Some(Commands::Path) => return handle_path(&cli),
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            number,
            name,
            expiry,
            cvv,
            dry_run,
        }) => handle_add(&mut ctx, &number, &name, &expiry, &cvv, dry_run),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { index }) => handle_view(&ctx, index),
        Some(Commands::Remove { index }) => handle_remove(&mut ctx, index),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Brand { .. }) | Some(Commands::Path) => Ok(()),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "code4galaxy", "cardz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CardzError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    log::debug!("data dir: {}", data_dir.display());

    let config = CardzConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("using default config: {}", e);
        CardzConfig::default()
    });

    let prefs = FilePreferences::new(&data_dir, PREFS_NAME);
    let paths = CardzPaths {
        prefs_file: prefs.path(),
        data_dir,
    };
    let api = CardzApi::open(prefs, config, paths)?;

    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    number: &str,
    name: &str,
    expiry: &str,
    cvv: &str,
    dry_run: bool,
) -> Result<()> {
    let form = CardForm::new()
        .with_input(Field::Number, number)
        .with_input(Field::HolderName, name)
        .with_input(Field::Expiry, expiry)
        .with_input(Field::Cvv, cvv);

    let result = ctx.api.add_card(&form, dry_run)?;
    println!("{}", render::render_form_fields(&form));
    for preview in &result.previews {
        println!("{}", render::render_card(preview));
    }
    print_messages(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_cards()?;
    if !result.listed_cards.is_empty() {
        println!("{}", render::render_card_list(&result.listed_cards));
    }
    print_messages(&result);
    Ok(())
}

fn handle_view(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.view_card(index)?;
    print_messages(&result);
    if !result.listed_cards.is_empty() {
        println!("{}", render::render_carousel(&result.listed_cards));
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.remove_card(index)?;
    print_messages(&result);
    Ok(())
}

fn handle_brand(number: &str) -> Result<()> {
    let result = cardz::commands::brand::run(number)?;
    if let Some(classification) = &result.classification {
        println!("{}", render::render_classification(classification));
    }
    print_messages(&result);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), Some(v)) if k == MASK_CHAR_KEY => ConfigAction::SetMaskChar(v),
        (Some(k), _) => ConfigAction::ShowKey(k),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("{}", render::render_config(config));
    }
    print_messages(&result);
    Ok(())
}

fn handle_path(cli: &Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli)?;
    println!("{}", FilePreferences::new(data_dir, PREFS_NAME).path().display());
    Ok(())
}

fn print_messages(result: &CmdResult) {
    if !result.messages.is_empty() {
        println!("{}", render::render_messages(&result.messages));
    }
}
