use super::logging;
use super::print::{print_messages, render_cuisines, render_plan, render_text_list};
use super::setup::{Cli, Commands, PlanArgs};
use clap::Parser;
use directories::ProjectDirs;
use recipe_picker::api::{ConfigAction, PlannerApi, PlannerSettings, PreferenceAnswers};
use recipe_picker::catalog::RecipeCatalog;
use recipe_picker::config::{ConfigKey, FailurePolicy, OversizePolicy, PickerConfig};
use recipe_picker::error::Result;
use recipe_picker::grocery::MockGrocery;
use recipe_picker::store::fs::FileStore;
use std::path::PathBuf;

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "RECIPE_PICKER_CONFIG_DIR";

type Api = PlannerApi<RecipeCatalog, MockGrocery, FileStore>;

struct AppContext {
    config: PickerConfig,
    config_dir: PathBuf,
}

impl AppContext {
    fn api(&self, output: Option<PathBuf>, settings: PlannerSettings) -> Api {
        let output = output.unwrap_or_else(|| self.config.output_path.clone());
        PlannerApi::new(
            RecipeCatalog::new(self.config.cuisines.clone()),
            MockGrocery::new(self.config.delivery_service.clone()),
            FileStore::new(output),
            settings,
            self.config_dir.clone(),
        )
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Plan(args)) => handle_plan(&ctx, args),
        Some(Commands::Show { output }) => handle_show(&ctx, output),
        Some(Commands::Cuisines) => handle_cuisines(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_plan(&ctx, PlanArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli);
    tracing::debug!(dir = %config_dir.display(), "loading config");
    let config = PickerConfig::load(&config_dir)?;
    Ok(AppContext { config, config_dir })
}

fn resolve_config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    match ProjectDirs::from("com", "recipe-picker", "recipe-picker") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".recipe-picker"),
    }
}

fn handle_plan(ctx: &AppContext, args: PlanArgs) -> Result<()> {
    let mut settings = PlannerSettings::from(&ctx.config);
    if args.abort_on_failure {
        settings.failure_policy = FailurePolicy::Abort;
    }
    if args.clamp {
        settings.oversize_policy = OversizePolicy::Clamp;
    }

    let mut api = ctx.api(args.output, settings);
    if let Some(seed) = args.seed {
        api = api.with_seed(seed);
    }

    let answers = PreferenceAnswers {
        cuisine: args.cuisine,
        dietary_restrictions: args.restrictions,
        num_meals: args.meals,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = api.plan(&mut stdin.lock(), &mut stdout.lock(), answers)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let api = ctx.api(output, PlannerSettings::from(&ctx.config));
    let result = api.show_plan()?;
    if let Some(plan) = &result.plan {
        print!("{}", render_plan(plan));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_cuisines(ctx: &AppContext) -> Result<()> {
    let api = ctx.api(None, PlannerSettings::from(&ctx.config));
    let result = api.cuisines()?;
    print!("{}", render_cuisines(&result.cuisines));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let api = ctx.api(None, PlannerSettings::from(&ctx.config));
    let result = api.config(action)?;

    let mut lines = Vec::new();
    if key.is_none() {
        if let Some(config) = &result.config {
            for key in ConfigKey::ALL {
                lines.push(format!("{} = {}", key, config.value(key)));
            }
        }
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}
