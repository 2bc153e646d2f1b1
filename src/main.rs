use cafe_menu::{config, generate, menu, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cafe-menu")]
#[command(about = "Render a café menu into a static RTL HTML page")]
#[command(long_about = "\
Render a café menu into a static RTL HTML page

Reads one menu file (JSON, or TOML for *.toml) and writes two files:

  output/
  ├── menu.html    # the page, links style.css
  └── style.css    # fixed stylesheet

Menu shape:

  {
    \"cafe\": { \"name\", \"subtitle\", \"address\", \"phone\", \"instagram\",
              \"telegram\", \"whatsapp\", \"maps\", \"currency\" },
    \"menu\": [ { \"title\", \"hint\", \"items\": [
              { \"name\", \"desc\", \"price\", \"img\", \"icon\" } ] } ]
  }

Every field is optional. Prices may be numbers, digit strings (Western or
Persian) or \"-\" for unavailable.

Run 'cafe-menu gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Menu file (JSON, or TOML if it ends in .toml)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Output directory, created if missing
    #[arg(long, short = 'o', default_value = "output")]
    outdir: PathBuf,

    /// Page title [default: منو]
    #[arg(long)]
    title: Option<String>,

    /// Render prices and the phone number with Persian digits
    #[arg(long)]
    alt_numerals: bool,

    /// Optional config file (see gen-config)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the menu page and stylesheet
    Render(RenderArgs),
    /// Load the menu and print its contents without writing anything
    Check {
        /// Menu file (JSON, or TOML if it ends in .toml)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Optional config file (see gen-config)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Render(args) => {
            let render_config = config::load_config(args.config.as_deref())?
                .with_overrides(args.title, args.alt_numerals);

            let doc = menu::load_menu(&args.input)?;
            let site = generate::generate(&doc, &render_config, &args.outdir)?;
            output::print_render_output(&doc, &site);
        }
        Command::Check {
            input,
            config: config_path,
        } => {
            let render_config = config::load_config(config_path.as_deref())?;
            let doc = menu::load_menu(&input)?;
            output::print_check_output(&doc, &render_config);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
