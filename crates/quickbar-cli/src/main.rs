//! quickbar - command-line front-end.
//!
//! Loads the snippet/quicklink library, runs the palette pipeline for a
//! query and prints or executes the result.

mod system;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use quickbar_core::{load_config, ActionKind, ActionOutcome, ItemKind, StaticCommand};
use quickbar_engine::{
    applicable_actions, library_path, resolve_sync, ActionExecutor, Catalog, Library, ListEntry,
    Menu, PaletteState, UuidGenerator,
};

use system::{DesktopCommands, SystemClipboard};

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "quickbar", about = "Search and run snippets and quicklinks")]
struct Cli {
    /// Library file (defaults to the config directory).
    #[arg(long, global = true)]
    library: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the grouped palette list for a query.
    List {
        /// Search text.
        #[arg(default_value = "")]
        query: String,

        /// Include lock/sleep/restart/shutdown entries.
        #[arg(long)]
        system: bool,
    },

    /// Run an action on the selected item.
    Run {
        /// Search text.
        query: String,

        /// Selection index into the list.
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Action to run (defaults to the item's primary action).
        #[arg(long, value_enum)]
        action: Option<CliAction>,

        /// Include system entries, matching `list --system` indices.
        #[arg(long)]
        system: bool,
    },

    /// Preview placeholder substitution (clipboard and uuid tokens untouched).
    Preview { template: String },

    /// Fully resolve a template, reading the clipboard if needed.
    Resolve { template: String },

    /// Print the keyword → body map used for text expansion.
    Triggers,

    /// Print the effective preferences.
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliAction {
    Copy,
    Paste,
    Open,
    CopyLink,
    Launch,
    Pin,
    Duplicate,
    Delete,
    Run,
}

impl From<CliAction> for ActionKind {
    fn from(action: CliAction) -> Self {
        match action {
            CliAction::Copy => ActionKind::Copy,
            CliAction::Paste => ActionKind::Paste,
            CliAction::Open => ActionKind::OpenLink,
            CliAction::CopyLink => ActionKind::CopyLink,
            CliAction::Launch => ActionKind::Launch,
            CliAction::Pin => ActionKind::TogglePin,
            CliAction::Duplicate => ActionKind::Duplicate,
            CliAction::Delete => ActionKind::Delete,
            CliAction::Run => ActionKind::Run,
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Root-menu catalog shared by `list` and `run` so indices agree.
fn library_catalog(library: &Library, system_actions: bool) -> Catalog {
    Catalog {
        snippets: library.snippets.clone(),
        quicklinks: library.quicklinks.clone(),
        system_actions,
        ..Default::default()
    }
}

fn print_view(catalog: &Catalog, state: &PaletteState) {
    let view = catalog.view(state);
    let (rows, _) = view.rows(state.selected);

    for row in rows {
        match row {
            ListEntry::GroupHeader { title } => println!("{title}"),
            ListEntry::Item { item, flat_index } => match &item.subtitle {
                Some(subtitle) => println!("  {flat_index:>3}  {}  ({subtitle})", item.label),
                None => println!("  {flat_index:>3}  {}", item.label),
            },
        }
    }
}

async fn run_action(
    library: &mut Library,
    library_file: &std::path::Path,
    query: String,
    index: usize,
    action: Option<CliAction>,
    system: bool,
) -> Result<(), String> {
    let catalog = library_catalog(library, system);
    let view = catalog.view(&PaletteState::default().with_query(query));
    let item = view
        .selected(index)
        .ok_or_else(|| "Nothing matches the query".to_string())?;

    let action = match action {
        Some(action) => action.into(),
        None => applicable_actions(item)
            .first()
            .map(|a| a.kind)
            .ok_or_else(|| format!("No actions for '{}'", item.label))?,
    };

    let clipboard = Arc::new(SystemClipboard::new());
    let executor = ActionExecutor::new(
        clipboard.clone(),
        Arc::new(UuidGenerator),
        Arc::new(DesktopCommands::new(clipboard)),
    );

    match executor.execute(action, item).await {
        ActionOutcome::Mutate { mutation } => {
            if library
                .apply(&mutation, &UuidGenerator)
                .map_err(|e| e.to_string())?
            {
                library.save_to(library_file).map_err(|e| e.to_string())?;
                println!("Library updated");
            } else {
                println!("{mutation:?} needs the editor form");
            }
        }
        ActionOutcome::Failed { error } => return Err(error),
        ActionOutcome::Unsupported
            if matches!(
                item.kind,
                ItemKind::StaticAction {
                    command: StaticCommand::CreateSnippet | StaticCommand::CreateQuicklink
                }
            ) =>
        {
            return Err("Create entries open the editor form".to_string())
        }
        ActionOutcome::Unsupported => {
            return Err(format!("{action:?} does not apply to '{}'", item.label))
        }
        outcome => println!("{outcome:?}"),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), String> {
    let library_file = match cli.library {
        Some(path) => path,
        None => library_path().map_err(|e| e.to_string())?,
    };
    let mut library = Library::load_from(&library_file).map_err(|e| e.to_string())?;

    match cli.command {
        Command::List { query, system } => {
            let catalog = library_catalog(&library, system);
            let state = PaletteState::default()
                .with_menu(Menu::Root)
                .with_query(query);
            print_view(&catalog, &state);
        }
        Command::Run {
            query,
            index,
            action,
            system,
        } => run_action(&mut library, &library_file, query, index, action, system).await?,
        Command::Preview { template } => println!("{}", resolve_sync(&template)),
        Command::Resolve { template } => {
            let clipboard = SystemClipboard::new();
            let resolved =
                quickbar_engine::resolve_async(&template, &clipboard, &UuidGenerator).await;
            println!("{resolved}");
        }
        Command::Triggers => {
            let triggers = library.triggers();
            let mut keywords: Vec<_> = triggers.iter().collect();
            keywords.sort();
            for (keyword, body) in keywords {
                println!("{keyword}\t{body}");
            }
        }
        Command::Config => {
            let config = load_config().map_err(|e| e.to_string())?;
            println!("hotkey: {}", config.hotkey);
            println!("blur radius: {}", config.appearance.blur_radius);
            println!("glass opacity: {}", config.appearance.glass_opacity);
            println!("always on top: {}", config.appearance.always_on_top);
        }
    }

    Ok(())
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli)) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbar_core::Snippet;

    #[test]
    fn test_system_rows_keep_list_indices() {
        let library = Library {
            snippets: vec![Snippet {
                id: "s1".to_string(),
                name: "Sig".to_string(),
                icon: "Code".to_string(),
                keyword: ";sig".to_string(),
                body: "Regards".to_string(),
                tags: vec![],
                pinned: false,
            }],
            quicklinks: vec![],
        };
        let state = PaletteState::default().with_query("lock");

        let view = library_catalog(&library, true).view(&state);
        let selected = view.selected(0).map(|item| item.id.as_str());
        assert_eq!(selected, Some("__system_lock__"));

        let without = library_catalog(&library, false).view(&state);
        assert_ne!(without.selected(0).map(|item| item.id.as_str()), selected);
    }
}
