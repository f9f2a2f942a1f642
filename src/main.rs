//! Edgestack CLI entrypoint.
//!
//! This is the main entrypoint for the edgestack command-line tool.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use edgestack::cli::{Cli, Commands, OutputFormatter, StackKind, SynthSummary};
use edgestack::config::{
    account_id, find_context_file, load_dotenv, selected_environment, ConfigValidator,
    ContextStore, REGION,
};
use edgestack::error::Result;
use edgestack::synth::{Ec2OriginStack, S3OriginStack};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Dispatches the selected command.
fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Validate { warnings } => {
            cmd_validate(cli.context.as_ref(), cli.environment.as_deref(), warnings)
        }
        Commands::Synth { stack, out } => cmd_synth(
            cli.context.as_ref(),
            cli.environment.as_deref(),
            stack,
            &out,
            &formatter,
        ),
        Commands::Envs => cmd_envs(cli.context.as_ref(), &formatter),
    }
}

/// Initialize a new project.
fn cmd_init(path: &PathBuf, force: bool) -> Result<()> {
    info!("Initializing new edgestack project in: {}", path.display());

    let context_path = path.join("edgestack.context.yaml");
    let env_path = path.join(".env.example");
    let gitignore_path = path.join(".gitignore");

    // Check if files exist
    if !force && context_path.exists() {
        eprintln!("Context file already exists: {}", context_path.display());
        eprintln!("Use --force to overwrite.");
        return Ok(());
    }

    // Create directory if needed
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }

    // Write context template
    let context_template = include_str!("../templates/edgestack.context.yaml");
    std::fs::write(&context_path, context_template)?;
    eprintln!("Created: {}", context_path.display());

    // Write .env.example
    let env_template = include_str!("../templates/.env.example");
    std::fs::write(&env_path, env_template)?;
    eprintln!("Created: {}", env_path.display());

    // Write .gitignore
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, ".env\nedgestack.out/\n")?;
        eprintln!("Created: {}", gitignore_path.display());
    }

    eprintln!("\nProject initialized successfully!");
    eprintln!("Next steps:");
    eprintln!("  1. Copy .env.example to .env and set your account id");
    eprintln!("  2. Edit edgestack.context.yaml with your environments");
    eprintln!("  3. Run 'edgestack validate' to check your configuration");
    eprintln!("  4. Run 'edgestack synth --stack ec2' to emit the template");

    Ok(())
}

/// Validate the selected environment configuration.
fn cmd_validate(
    context_path: Option<&PathBuf>,
    environment: Option<&str>,
    show_warnings: bool,
) -> Result<()> {
    let (store, env_name) = load_context(context_path, environment)?;
    let config = store.resolve(&env_name)?;

    let validator = ConfigValidator::new();
    let result = validator.validate(config)?;

    eprintln!("Configuration for environment '{env_name}' is valid!");
    if show_warnings && !result.warnings.is_empty() {
        eprintln!("\nWarnings:");
        for warning in &result.warnings {
            eprintln!("  - {warning}");
        }
    }

    eprintln!("\nConfiguration summary:");
    eprintln!("  Resource name: {}", config.resource_name);
    eprintln!("  Origin domain: {}", config.origin_domain);
    eprintln!("  Managed rules: {}", config.managed_rules.len());
    eprintln!("  Behaviors: {}", config.behaviors.len());

    Ok(())
}

/// Synthesize a stack template.
fn cmd_synth(
    context_path: Option<&PathBuf>,
    environment: Option<&str>,
    stack: StackKind,
    out_dir: &Path,
    formatter: &OutputFormatter,
) -> Result<()> {
    let (store, env_name) = load_context(context_path, environment)?;

    // Configuration absence is fatal before any resource is composed.
    let config = store.resolve(&env_name)?;

    let validator = ConfigValidator::new();
    validator.validate(config)?;

    let stack_name = stack.stack_name(&config.resource_name);
    let template = match stack {
        StackKind::Ec2 => Ec2OriginStack::new(&stack_name, config).synthesize()?,
        StackKind::S3 => S3OriginStack::new(&stack_name, config).synthesize()?,
    };

    std::fs::create_dir_all(out_dir)?;
    let template_path = out_dir.join(format!("{stack_name}.template.json"));
    std::fs::write(&template_path, template.to_json()?)?;
    debug!("Wrote template to: {}", template_path.display());

    let summary =
        SynthSummary::from_template(&template, &env_name, REGION, account_id(), template_path);
    eprintln!("{}", formatter.format_synth(&summary));

    Ok(())
}

/// List environments defined in the context file.
fn cmd_envs(context_path: Option<&PathBuf>, formatter: &OutputFormatter) -> Result<()> {
    let (store, _) = load_context(context_path, None)?;
    eprintln!("{}", formatter.format_envs(&store));
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolves the context file path.
fn resolve_context_path(context_path: Option<&PathBuf>) -> Result<PathBuf> {
    context_path.map_or_else(|| find_context_file("."), |path| Ok(path.clone()))
}

/// Loads the context store and resolves the selected environment name.
fn load_context(
    context_path: Option<&PathBuf>,
    environment: Option<&str>,
) -> Result<(ContextStore, String)> {
    let context_file = resolve_context_path(context_path)?;
    debug!("Loading context from: {}", context_file.display());

    load_dotenv(context_file.parent().unwrap_or_else(|| Path::new(".")))?;

    let store = ContextStore::load_file(&context_file)?;
    let env_name = selected_environment(environment);
    debug!("Selected environment: {env_name}");

    Ok((store, env_name))
}
