use std::path::PathBuf;

use fieldcodec::codec::Document;
use fieldcodec::device::device_codec;

use crate::cmd::{CliError, Result, read_document, status_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Output budget in bytes; unbounded when omitted.
	#[arg(long)]
	pub capacity: Option<usize>,
}

/// Decode a device document and print its canonical encoding.
pub fn run(args: Args) -> Result<()> {
	let Args { path, capacity } = args;

	let codec = device_codec();
	let src = read_document(&path)?;
	let (value, code) = codec.decode(&src);
	if code != codec.ok() {
		return Err(CliError::Rejected { code, label: status_label(code) });
	}

	let mut doc = match capacity {
		Some(capacity) => Document::with_capacity(capacity),
		None => Document::unbounded(),
	};
	codec.try_encode(&value, doc.slot())?;
	tracing::debug!(remaining = ?doc.remaining(), "document normalized");

	println!("{}", serde_json::to_string_pretty(&doc.into_json())?);
	Ok(())
}
