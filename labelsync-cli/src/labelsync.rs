use clap::{Arg, ArgAction, ArgMatches, Command};
use labelsync_core::{Context, Definitions, GitHubClient, Importer, LabelResolver, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("labelsync")
        .version("0.1.0")
        .about("Create GitHub labels from a YAML definitions file")
        .author(env!("CARGO_PKG_AUTHORS"))
        .arg(
            Arg::new("repository")
                .value_name("REPOSITORY")
                .help("Target repository, owner/name")
                .required(true)
        )
        .arg(
            Arg::new("token")
                .value_name("TOKEN")
                .help("GitHub access token")
                .required(true)
        )
        .arg(
            Arg::new("overrides")
                .value_name("CATEGORY=LABEL,...")
                .help("Assign extra labels to a category, applied after the definitions file")
                .num_args(0..)
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Label definitions file (default: LABELSYNC_DATA_FILE or data.yml)")
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Resolve labels and print them without calling GitHub")
        )
}

/// Command line flags take precedence over the environment
fn apply_matches(ctx: &mut Context, matches: &ArgMatches) {
    if let Some(file) = matches.get_one::<String>("file") {
        ctx.data_file = file.clone();
    }
    if matches.get_flag("dry-run") {
        ctx.dry_run = true;
    }
}

fn overrides(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("overrides")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize context from environment
    let mut ctx = Context::from_env()?;

    // Initialize tracing, RUST_LOG wins over LABELSYNC_DEBUG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(ctx.log_filter())),
        )
        .init();

    let matches = cli().get_matches();
    apply_matches(&mut ctx, &matches);

    if ctx.ctx_out {
        info!("Context: {:?}", ctx);
    }

    let start_time = std::time::Instant::now();

    let repository = matches
        .get_one::<String>("repository")
        .map(String::as_str)
        .unwrap_or_default();
    let token = matches
        .get_one::<String>("token")
        .map(String::as_str)
        .unwrap_or_default();

    info!("Reading label definitions from: {}", ctx.data_file);

    let definitions = match Definitions::load(&ctx.data_file).await {
        Ok(definitions) => definitions,
        Err(err) => {
            error!("Failed to load label definitions '{}': {}", ctx.data_file, err);
            return Err(err);
        }
    };

    let mut resolver = LabelResolver::from_definitions(&definitions);
    resolver.apply_overrides(overrides(&matches));

    info!(
        "Resolved {} label(s) using {} category definition(s)",
        resolver.len(),
        resolver.categories().len()
    );

    if ctx.dry_run {
        for label in resolver.resolved_labels() {
            info!(
                "Would create label '{}' ({}) in {}",
                label.name,
                label.color.as_deref().unwrap_or("no color"),
                repository
            );
        }
        info!("Dry run, no labels were created");
        return Ok(());
    }

    let client = GitHubClient::from_context(&ctx, repository, token)?;
    info!("Pushing labels to {}", client.endpoint());

    let summary = Importer::new(&client).run_all(resolver.resolved_labels()).await;

    let elapsed = start_time.elapsed();

    info!("Label sync completed in {:?}", elapsed);
    info!("Statistics:");
    info!("  Labels created: {}", summary.submitted);
    info!("  Labels failed: {}", summary.failed);

    Ok(())
}
