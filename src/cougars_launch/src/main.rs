//! cougars_launch CLI

use clap::{Parser, Subcommand};
use cougars_launch::{
    build_launch_plan_with, config::parse_launch_arg, generate_launch_record,
    record::{CommandGenerator, RecordOptions},
    AmentIndex, PlanConfig,
};
use std::{collections::HashMap, path::PathBuf, process};

#[derive(Parser)]
#[command(name = "cougars_launch")]
#[command(about = "Plan the CougUV control nodes for a ROS 2 process supervisor", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the launch plan as record.json
    Plan {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,

        /// Copy values from readable parameter files into the record
        #[arg(long)]
        inline_params: bool,
    },

    /// Print the command line of every planned node
    Cmd {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Plan {
            args,
            output,
            inline_params,
        } => write_plan(args, &output, RecordOptions { inline_params }),
        Commands::Cmd { args } => print_commands(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn plan_config(args: Vec<(String, String)>) -> cougars_launch::Result<PlanConfig> {
    let launch_args: HashMap<String, String> = args.into_iter().collect();
    let mut config = PlanConfig::default();
    config.apply_launch_args(&launch_args)?;
    Ok(config)
}

fn write_plan(
    args: Vec<(String, String)>,
    output: &std::path::Path,
    options: RecordOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = plan_config(args)?;
    let resolver = AmentIndex::from_env();

    let record = generate_launch_record(&resolver, &config, options)?;
    std::fs::write(output, record.to_json()?)?;

    log::info!("Generated record.json: {}", output.display());
    log::info!("  {} nodes", record.node.len());
    Ok(())
}

fn print_commands(args: Vec<(String, String)>) -> Result<(), Box<dyn std::error::Error>> {
    let config = plan_config(args)?;
    let resolver = AmentIndex::from_env();

    let plan = build_launch_plan_with(&resolver, &config)?;
    for request in &plan {
        let cmd = CommandGenerator::generate_node_command(request, &resolver)?;
        println!("{}", cmd.join(" "));
    }
    Ok(())
}
