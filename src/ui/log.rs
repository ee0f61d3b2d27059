//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::Notice;

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
                      _
 __   _____  ___ ___(_)_ __ ___
 \ \ / / _ \/ __/ __| | '_ ` _ \
  \ V /  __/ (__\__ \ | | | | | |
   \_/ \___|\___|___/_|_| |_| |_|"#;

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", "You shall know a word by the company it keeps".dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Missing keys are worth a warning; scoring fallbacks only show with --verbose
pub fn notice(n: &Notice) {
	match n {
		Notice::MissingKey { .. }
		| Notice::NothingResolved
		| Notice::EmptySum
		| Notice::NonFiniteVector { .. } => warn(&n.to_string()),
		Notice::DegenerateVector { .. } | Notice::SkippedCandidate { .. } => debug(&n.to_string()),
	}
}

pub fn notices(all: &[Notice]) {
	all.iter().for_each(notice);
}

/// Similarity as a colored percentage, brighter for closer matches
pub fn score(value: f32) -> ColoredString {
	let text = format!("{:5.1}%", value * 100.0);
	if value >= 0.8 {
		text.bright_green()
	} else if value >= 0.5 {
		text.yellow()
	} else {
		text.dimmed()
	}
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &std::path::Path) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let display_name = path
		.file_name()
		.and_then(|n| n.to_str())
		.unwrap_or("unknown");

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, display_name)
}

/// Render a vector compactly, eliding the middle of long ones
pub fn vector_preview(v: &[f32], max_items: usize) -> String {
	let fmt = |xs: &[f32]| xs.iter().map(|x| format!("{:.4}", x)).collect::<Vec<_>>().join(", ");
	if v.len() <= max_items {
		format!("[{}]", fmt(v))
	} else {
		let half = max_items / 2;
		format!("[{}, …, {}]", fmt(&v[..half]), fmt(&v[v.len() - half..]))
	}
}
