use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use indentsync::{
    apply_options, find_settings_file, generate_init_file, load_project_config, load_settings,
    pick_defaults, render_diff, render_options, to_config, ConfigValue, Document, EditorOptions,
    EditorSection, IndentSize, InsertSpaces, LayeredSettings, LogObserver, ProjectConfig, Resolver,
    Result, ScratchEditor, SettingsProvider, SettingsToml, StaticConfigLoader, TabSize, TextEditor,
    Workspace,
};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "indentsync")]
#[command(version, about = "Resolve editor indentation options from project configuration")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve editor options for files
    Resolve(ResolveArgs),
    /// Print the project configuration equivalent to editor options
    Export(ExportArgs),
    /// Generate a template indentsync.toml settings file
    Init,
}

#[derive(Args)]
struct ResolveArgs {
    /// Files to resolve options for
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Project configuration entry for every file
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_entry)]
    entries: Vec<(String, ConfigValue)>,

    /// Flat TOML table of project configuration entries
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Workspace root (repeatable, defaults to the current directory)
    #[arg(long = "workspace", value_name = "DIR")]
    workspace_roots: Vec<PathBuf>,

    /// Language id used to pick per-language settings (default: file extension)
    #[arg(long, value_name = "ID")]
    language: Option<String>,

    /// Treat the paths as names of unsaved buffers
    #[arg(long)]
    untitled: bool,

    /// Specify settings file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(flatten)]
    editor: EditorFlags,

    /// Apply to an editor opened with the workspace defaults and show the diff
    #[arg(long)]
    apply: bool,
}

/// Editor settings that override the settings file.
#[derive(Args)]
struct EditorFlags {
    /// Detect indentation from content (true/false)
    #[arg(long, value_name = "BOOL")]
    detect_indentation: Option<bool>,

    /// Default tab size (N or "auto")
    #[arg(long, value_name = "SIZE")]
    tab_size: Option<TabSize>,

    /// Default indent size (N or "tabSize")
    #[arg(long, value_name = "SIZE")]
    indent_size: Option<IndentSize>,

    /// Default to spaces (true/false)
    #[arg(long, value_name = "BOOL")]
    insert_spaces: Option<bool>,
}

#[derive(Args)]
struct ExportArgs {
    /// Tab size (N or "auto")
    #[arg(long, value_name = "SIZE")]
    tab_size: Option<TabSize>,

    /// Indent size (N or "tabSize")
    #[arg(long, value_name = "SIZE")]
    indent_size: Option<IndentSize>,

    /// Spacing mode (true, false or "auto")
    #[arg(long, value_name = "MODE")]
    insert_spaces: Option<InsertSpaces>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Resolve(args) => run_resolve(args).await,
        Command::Export(args) => run_export(&args),
        Command::Init => run_init(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_entry(raw: &str) -> std::result::Result<(String, ConfigValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    Ok((key, ConfigValue::parse(value)))
}

async fn run_resolve(args: ResolveArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = LayeredSettings::new(
        load_settings_file(args.settings.as_deref(), &cwd)?,
        EditorSection {
            detect_indentation: args.editor.detect_indentation,
            tab_size: args.editor.tab_size,
            indent_size: args.editor.indent_size,
            insert_spaces: args.editor.insert_spaces,
        },
    );

    let mut config = match &args.project {
        Some(path) => load_project_config(path)?,
        None => ProjectConfig::new(),
    };
    for (key, value) in args.entries {
        config.insert(key, value);
    }
    let loader = StaticConfigLoader::new(config);

    let workspace = if args.workspace_roots.is_empty() {
        Workspace::new(vec![cwd.clone()])
    } else {
        Workspace::new(args.workspace_roots.iter().map(|r| cwd.join(r)).collect())
    };
    let resolver = Resolver::new(&workspace, &loader, &settings);

    for path in &args.paths {
        let doc = build_document(path, &cwd, args.untitled, args.language.as_deref());
        let options = resolver.resolve_options(&doc, &LogObserver).await?;
        let label = workspace.relative_path(&cwd.join(path));

        if args.apply {
            let scope = settings.scope(&doc.language_id);
            let mut editor = ScratchEditor::new(EditorOptions::from(pick_defaults(&scope)));
            let before = editor.options();
            if let Some(after) = apply_options(options, Some(&mut editor), &scope, &LogObserver) {
                print!(
                    "{}",
                    render_diff(&label.display().to_string(), &before, &after)?
                );
            }
        } else {
            print!("{}", render_options(&label, &options)?);
        }
    }

    Ok(())
}

fn build_document(path: &Path, cwd: &Path, untitled: bool, language: Option<&str>) -> Document {
    if untitled {
        let language = language.unwrap_or(indentsync::document::DEFAULT_LANGUAGE);
        return Document::untitled(path.to_string_lossy(), language);
    }
    let mut doc = Document::from_path(cwd.join(path));
    if let Some(language) = language {
        doc.language_id = language.to_string();
    }
    doc
}

fn load_settings_file(explicit: Option<&Path>, cwd: &Path) -> Result<SettingsToml> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_settings_file(cwd) {
            Some(path) => path,
            None => {
                debug!("no settings file found, using empty editor settings");
                return Ok(SettingsToml::default());
            }
        },
    };
    debug!(path = %path.display(), "using settings");
    load_settings(&path)
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let options = EditorOptions {
        tab_size: args.tab_size,
        indent_size: args.indent_size,
        insert_spaces: args.insert_spaces,
    };
    print!("{}", to_config(&options));
    Ok(())
}

fn run_init() -> Result<()> {
    let path = generate_init_file()?;
    println!("Created {}", path.display());
    Ok(())
}
