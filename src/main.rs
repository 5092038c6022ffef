use clap::{Args, Parser, Subcommand};
use fashionai::{
    logger::{self, LoggerConfig},
    save_image, AccessGate, AspectRatio, Config, FileStore, GenerationRequest, ImageClient,
    ImagePayload, OperationMode, PresetCatalog, PresetCategory, Resolution, ServiceResponse, StudioClient,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fashionai", version, about = "Fashion image studio backed by Gemini")]
struct Cli {
    /// Debug logging with source locations
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Overrides FASHIONAI_DATA_DIR
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Unlock the studio with the shared access code
    Login { code: String },
    Logout,
    /// Run one generation
    Generate(GenerateArgs),
    /// Manage the preset catalog
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },
    /// List operation modes
    Modes,
    /// List aspect ratios and resolutions
    Formats,
    /// List known image models
    Models,
}

#[derive(Args)]
struct GenerateArgs {
    /// extract, try-on, edit or upscale
    #[arg(short, long)]
    mode: OperationMode,

    /// Input image; try-on takes the model photo first, then the garment
    #[arg(short, long = "image", required = true)]
    images: Vec<PathBuf>,

    #[arg(short, long, default_value = "")]
    prompt: String,

    /// Preset id, repeatable
    #[arg(long = "preset")]
    presets: Vec<String>,

    /// Keep face, body and garment details unchanged
    #[arg(long)]
    strict: bool,

    #[arg(long)]
    aspect: Option<AspectRatio>,

    #[arg(long)]
    resolution: Option<Resolution>,

    /// Directory for the generated image
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Print the service response as JSON instead of saving the image
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum PresetAction {
    List {
        #[arg(short, long)]
        category: Option<PresetCategory>,
    },
    Add {
        #[arg(short, long)]
        category: PresetCategory,
        #[arg(short, long)]
        label: String,
        #[arg(short, long)]
        prompt: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    Remove { id: String },
    /// Restore the built-in catalog
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();
    let logger_config = if cli.verbose {
        LoggerConfig::development()
    } else if cli.quiet {
        LoggerConfig::quiet()
    } else {
        LoggerConfig::default()
    };
    logger::init_with_config(logger_config)?;
    logger::log_startup_info("fashionai", env!("CARGO_PKG_VERSION"));
    if !dotenv_loaded {
        log::debug!("No .env file found, using process environment");
    }

    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    logger::log_config_info(&config);

    let store = Arc::new(FileStore::new(&config.data_dir));
    let gate = AccessGate::new(config.access_code.clone(), store.clone());

    match cli.command {
        Command::Login { code } => {
            gate.login(&code)?;
            println!("Logged in.");
        }
        Command::Logout => {
            gate.logout()?;
            println!("Logged out.");
        }
        Command::Generate(args) => {
            gate.require()?;
            let catalog = PresetCatalog::open(store.clone())?;
            run_generate(&config, &catalog, args).await?;
        }
        Command::Presets { action } => {
            gate.require()?;
            let mut catalog = PresetCatalog::open(store.clone())?;
            run_presets(&mut catalog, action)?;
        }
        Command::Modes => {
            for mode in OperationMode::ALL {
                println!(
                    "{:<8} {} (images: {})",
                    mode.as_str(),
                    mode.label(),
                    mode.required_images()
                );
            }
        }
        Command::Formats => {
            println!("Aspect ratios:");
            for ratio in AspectRatio::ALL {
                println!("  {:<5} {}", ratio.id(), ratio.label());
            }
            println!("Resolutions:");
            for resolution in Resolution::ALL {
                println!("  {:<5} {}", resolution.id(), resolution.label());
            }
        }
        Command::Models => {
            for (id, name, provider) in ImageClient::supported_models() {
                let marker = if id == config.gemini.model { "*" } else { " " };
                println!("{} {:<28} {} ({})", marker, id, name, provider);
            }
        }
    }

    Ok(())
}

async fn run_generate(
    config: &Config,
    catalog: &PresetCatalog,
    args: GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let images = args
        .images
        .iter()
        .map(ImagePayload::from_file)
        .collect::<fashionai::Result<Vec<_>>>()?;
    log::info!("🖼️  Loaded {} image(s) for {}", images.len(), args.mode);

    if !args.mode.uses_user_text() && !args.prompt.trim().is_empty() {
        log::warn!("⚠️  {} mode does not use --prompt; the text is ignored", args.mode);
    }

    let unknown = catalog.unknown_ids(&args.presets);
    if !unknown.is_empty() {
        log::warn!("⚠️  Ignoring unknown preset(s): {}", unknown.join(", "));
    }

    let request = GenerationRequest::new(args.mode, images)
        .with_user_text(args.prompt)
        .with_presets(catalog.fragments_for(&args.presets))
        .with_strict(args.strict)
        .with_format(
            args.aspect.unwrap_or(config.aspect_ratio),
            args.resolution.unwrap_or(config.resolution),
        );

    let client = StudioClient::new(config.gemini.clone())?;
    let result = client.generate(request).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ServiceResponse::from(&result))?);
        if !result.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match (result.image_data_uri(), result.composed_prompt()) {
        (Some(data_uri), Some(prompt)) => {
            let path = save_image(data_uri, &args.out, args.mode)?;
            println!("Saved {}", path.display());
            println!("\nPrompt:\n{}", prompt);
            Ok(())
        }
        _ => {
            eprintln!("Error: {}", result.error().unwrap_or_default());
            std::process::exit(1);
        }
    }
}

fn run_presets(
    catalog: &mut PresetCatalog,
    action: PresetAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PresetAction::List { category } => {
            let categories = match category {
                Some(category) => vec![category],
                None => PresetCategory::ALL.to_vec(),
            };
            for category in categories {
                println!("[{}]", category);
                for preset in catalog.by_category(category) {
                    match &preset.description {
                        Some(description) => {
                            println!("  {:<20} {} ({})", preset.id, preset.label, description)
                        }
                        None => println!("  {:<20} {}", preset.id, preset.label),
                    }
                }
            }
        }
        PresetAction::Add {
            category,
            label,
            prompt,
            description,
        } => {
            let preset = catalog.add(&label, description.as_deref(), &prompt, category)?;
            println!("Added {}", preset.id);
        }
        PresetAction::Remove { id } => match catalog.remove(&id)? {
            Some(removed) => println!("Removed {} ({})", removed.id, removed.label),
            None => {
                eprintln!("No preset with id '{}'", id);
                std::process::exit(1);
            }
        },
        PresetAction::Reset => {
            catalog.reset_to_defaults()?;
            println!("Restored {} built-in presets", catalog.all().len());
        }
    }
    Ok(())
}
