use std::path::PathBuf;

use fieldcodec::codec::StatusCode;
use fieldcodec::device::{DeviceStatus, device_codec};
use serde::Serialize;

use crate::cmd::{CliError, Result, read_document, status_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
	path: String,
	ok: bool,
	code: u32,
	label: &'a str,
}

/// Validate a device document and report the first failure.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let src = read_document(&path)?;
	let (_, code) = device_codec().decode(&src);
	let ok = code == StatusCode::from(DeviceStatus::Ok);
	let label = status_label(code);

	if json {
		let report = Report {
			path: path.display().to_string(),
			ok,
			code: code.get(),
			label,
		};
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else if ok {
		println!("ok");
	}

	if ok { Ok(()) } else { Err(CliError::Rejected { code, label }) }
}
