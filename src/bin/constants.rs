use astro_constants::{builtin, ConstantRegistry, ResolvedConstant};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "constants")]
#[command(about = "Inspect unit-aware astronomical constant tables")]
struct Cli {
    /// Path to an alternate constants table (defaults to the builtin table)
    #[arg(long)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every constant in declaration order
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show one constant (canonical name or alias)
    Show { name: String },
    /// Convert a constant into a target unit
    Convert {
        /// Canonical name or alias
        name: String,
        /// Target unit, e.g. km or m^3/kg/s^2
        unit: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let owned;
    let registry: &ConstantRegistry = match &cli.table {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Cannot read table '{}': {}", path.display(), e))?;
            owned = ConstantRegistry::parse(&text)?;
            &owned
        }
        None => builtin(),
    };

    match cli.command {
        Commands::List { format } => match format {
            OutputFormat::Table => print_table(registry),
            OutputFormat::Json => print_json(registry),
            OutputFormat::Csv => print_csv(registry),
        },
        Commands::Show { name } => {
            let constant = registry.resolve(&name)?;
            print_constant(constant);
        }
        Commands::Convert { name, unit } => {
            let value = registry.value(&name, &unit)?;
            println!("{:e} {}", value, unit);
        }
    }

    Ok(())
}

fn print_table(registry: &ConstantRegistry) {
    for constant in registry.iter() {
        let aliases = constant.aliases.join(", ");
        println!(
            "{:<26} {:>24} {:<14} {}",
            constant.name,
            format!("{:e}", constant.value),
            constant.unit.symbol(),
            aliases
        );
    }
    println!("\nTotal constants: {}", registry.len());
}

#[derive(serde::Serialize)]
struct JsonConstant<'a> {
    name: &'a str,
    value: f64,
    unit: &'a str,
    si_value: f64,
    aliases: &'a [String],
}

fn print_json(registry: &ConstantRegistry) {
    let constants: Vec<JsonConstant> = registry
        .iter()
        .map(|c| JsonConstant {
            name: &c.name,
            value: c.value,
            unit: c.unit.symbol(),
            si_value: c.si_value(),
            aliases: &c.aliases,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&constants).unwrap());
}

fn print_csv(registry: &ConstantRegistry) {
    println!("name,value,unit,si_value,aliases");
    for c in registry.iter() {
        println!(
            "{},{:e},{},{:e},{}",
            c.name,
            c.value,
            c.unit,
            c.si_value(),
            c.aliases.join(";")
        );
    }
}

fn print_constant(constant: &ResolvedConstant) {
    println!("{}", constant.name);
    println!("  value:    {:e} {}", constant.value, constant.unit);
    println!(
        "  SI value: {:e} {}",
        constant.si_value(),
        constant.unit.dimension()
    );
    if !constant.aliases.is_empty() {
        println!("  aliases:  {}", constant.aliases.join(", "));
    }
}
