//! vecsim - similarity search over word and document embeddings
//!
//! A command-line front-end for the embedding store: nearest-neighbour
//! ranking, vector lookup and aggregation, and store maintenance.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use vecsim::cli::{Cli, Command};
use vecsim::commands;
use vecsim::engine::{RankOrder, SimilarParams};
use vecsim::ui;

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	ui::Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Similar { keys, k, prune_threshold, lowest, all, quiet, export } => {
			let store = commands::load_store(cli.store, cli.docs)?;
			let params = SimilarParams {
				k,
				prune_threshold,
				order: if lowest { RankOrder::Lowest } else { RankOrder::Highest },
				ignore_k: all,
				report_missing: !quiet,
			};
			commands::similar::run(&store, &keys, &params, export.as_deref())
		}
		Command::Vector { keys, normalize, full } => {
			let store = commands::load_store(cli.store, cli.docs)?;
			commands::vector::run(&store, &keys, normalize, full)
		}
		Command::Info => {
			let store = commands::load_store(cli.store, cli.docs)?;
			commands::info::run(&store)
		}
		Command::Normalize { output } => {
			let store = commands::load_store(cli.store, cli.docs)?;
			commands::normalize::run(&store, &output)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(mut sub_cmd) = cmd.find_subcommand(&sub).cloned() {
					sub_cmd.print_help()?;
					return Ok(());
				}
				ui::warn(&format!("Unknown subcommand: {}", sub));
			}
			cmd.print_help()?;
			Ok(())
		}
	}
}
