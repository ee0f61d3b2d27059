use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_K, DEFAULT_PRUNE_THRESHOLD};

fn parse_threshold(s: &str) -> Result<f32, String> {
	let val: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("threshold must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "vecsim",
	author,
	version,
	about = "Similarity search over word and document embeddings",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {vecsim} {similar}   {similar_args}   {similar_desc}
  {vecsim} {similar}   {docs_args}      {docs_desc}
  {vecsim} {vector}    {vector_args}    {vector_desc}
  {vecsim} {info}      {info_args}      {info_desc}",
		title = "Examples:".bright_blue().bold(),
		vecsim = "vecsim".bright_blue(),
		similar = "similar".yellow(),
		similar_args = "-s words.jl cleo street -k 5",
		similar_desc = "Nearest words".dimmed(),
		docs_args = "-s docs.jl --docs 1 2",
		docs_desc = "Nearest documents".dimmed(),
		vector = "vector".yellow(),
		vector_args = "california street -n",
		vector_desc = "Summed, normalized vector".dimmed(),
		info = "info".yellow(),
		info_args = "-s words.jl",
		info_desc = "Store statistics".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Embeddings file (newline-delimited JSON); falls back to $VECSIM_STORE
	#[arg(short = 's', long = "store", global = true, value_name = "PATH")]
	pub store: Option<PathBuf>,

	/// Treat keys as document ids instead of words
	#[arg(long = "docs", global = true)]
	pub docs: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rank the keys most similar to each seed
	Similar {
		/// Seed keys
		#[arg(value_name = "KEY", required = true)]
		keys: Vec<String>,

		/// Number of neighbours per seed
		#[arg(short = 'k', long = "limit", default_value_t = DEFAULT_K)]
		k: usize,

		/// Skip candidates with more than this fraction of non-zero entries (1.0 = off)
		#[arg(long = "prune", default_value_t = DEFAULT_PRUNE_THRESHOLD, value_parser = parse_threshold)]
		prune_threshold: f32,

		/// Rank least similar keys first
		#[arg(long = "lowest")]
		lowest: bool,

		/// Return every candidate, ignoring --limit
		#[arg(long = "all")]
		all: bool,

		/// Do not warn about seeds missing from the store
		#[arg(short = 'q', long = "quiet")]
		quiet: bool,

		/// Write results as JSON to a file ('-' for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Print the vector of a key, or the sum over several keys
	Vector {
		#[arg(value_name = "KEY", required = true)]
		keys: Vec<String>,

		/// L2-normalize the result
		#[arg(short = 'n', long = "normalize")]
		normalize: bool,

		/// Print every component instead of a preview
		#[arg(long = "full")]
		full: bool,
	},

	/// Show entry count and dimensionality of the store
	Info,

	/// Write an L2-normalized copy of the store
	Normalize {
		/// Output file
		#[arg(short = 'o', long = "output", value_name = "PATH")]
		output: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
