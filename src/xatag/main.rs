use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use xatag::api::{parse_tags, CmdMessage, ConfigAction, DeleteMode, FileTags, MessageLevel, XatagApi};
use xatag::config::{XatagConfig, NAMESPACE};
use xatag::error::{Result, XatagError};
use xatag::store::fs::XattrStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: XatagApi<XattrStore>,
    config: XatagConfig,
    config_dir: PathBuf,
    recursive: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add { tags, files } => handle_add(&mut ctx, tags, files),
        Commands::Set { tags, all, files } => handle_set(&mut ctx, tags, all, files),
        Commands::Delete {
            tags,
            other,
            all,
            files,
        } => handle_delete(&mut ctx, tags, other, all, files),
        Commands::Copy {
            tags,
            complement,
            source,
            destinations,
        } => handle_copy(&mut ctx, tags, complement, source, destinations),
        Commands::List { keys, files } => handle_list(&ctx, keys, files),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("org", "xatag", "xatag")
        .ok_or_else(|| XatagError::Api("Could not determine config dir".into()))?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let config = XatagConfig::load(&config_dir).unwrap_or_default();

    Ok(AppContext {
        api: XatagApi::new(XattrStore::new()),
        config,
        config_dir,
        recursive: cli.recursive,
    })
}

fn handle_add(ctx: &mut AppContext, tags: Vec<String>, files: Vec<PathBuf>) -> Result<()> {
    let tags = parse_tags(&tags)?;
    let result = ctx.api.add_tags(&files, &tags, ctx.recursive)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, tags: Vec<String>, all: bool, files: Vec<PathBuf>) -> Result<()> {
    let tags = parse_tags(&tags)?;
    let result = ctx.api.set_tags(&files, &tags, all, ctx.recursive)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(
    ctx: &mut AppContext,
    tags: Vec<String>,
    other: bool,
    all: bool,
    files: Vec<PathBuf>,
) -> Result<()> {
    let mode = if all {
        DeleteMode::All
    } else if other {
        DeleteMode::Others
    } else {
        DeleteMode::Listed
    };
    if !all && tags.is_empty() {
        return Err(XatagError::Api(
            "Nothing to delete: pass --tag or --all".into(),
        ));
    }
    let tags = parse_tags(&tags)?;
    let result = ctx.api.delete_tags(&files, &tags, mode, ctx.recursive)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(
    ctx: &mut AppContext,
    tags: Vec<String>,
    complement: bool,
    source: PathBuf,
    destinations: Vec<PathBuf>,
) -> Result<()> {
    let filter = if tags.is_empty() {
        None
    } else {
        Some(parse_tags(&tags)?)
    };
    let result = ctx.api.copy_tags(
        &source,
        &destinations,
        filter.as_deref(),
        complement,
        ctx.recursive,
    )?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, keys_only: bool, files: Vec<PathBuf>) -> Result<()> {
    let result = ctx.api.list_tags(&files, ctx.recursive)?;
    print_file_tags(&result.listed, &ctx.config, keys_only);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = xatag::commands::config::run(&ctx.config_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn display_key(key: &str) -> &str {
    if key.is_empty() {
        NAMESPACE.default_key_name
    } else {
        key
    }
}

fn print_file_tags(listed: &[FileTags], config: &XatagConfig, keys_only: bool) {
    for ft in listed {
        if config.one_line {
            let tags: Vec<String> = ft
                .tags
                .to_tags()
                .iter()
                .map(|t| t.format(config.omit_default_key))
                .collect();
            println!(
                "{}: {}",
                ft.path.display().to_string().bold(),
                tags.join(" ")
            );
            continue;
        }

        println!("{}", ft.path.display().to_string().bold());
        if keys_only {
            for key in ft.tags.keys() {
                println!("  {}", display_key(key).cyan());
            }
            continue;
        }

        let key_width = ft
            .tags
            .keys()
            .map(|k| display_key(k).width())
            .max()
            .unwrap_or(0);
        for (key, values) in ft.tags.iter() {
            let shown = display_key(key);
            let padding = " ".repeat(key_width.saturating_sub(shown.width()));
            let joined = values.iter().cloned().collect::<Vec<_>>().join("  ");
            if key.is_empty() && config.omit_default_key {
                println!("  {}{} {}", padding, " ".repeat(shown.width() + 1), joined);
            } else {
                println!("  {}{}: {}", padding, shown.cyan(), joined);
            }
        }
    }
}
