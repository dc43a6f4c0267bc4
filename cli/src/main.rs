use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;
use log::info;

use cfop::prelude::*;

/// Rubik's Cube solver using the CFOP method
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the solved cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube with the given number of random turns
	#[arg(short, long, num_args = 0..=1, default_missing_value = "25")]
	random: Option<usize>,

	/// Solve the cube (the output is a sequence, one line per stage)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Merge the turns of the solution into one sequence
	#[arg(long, default_value_t = false)]
	optimize: bool,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};
	let mut cube = CubeState::default();

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		cube = CubeState::from_str(args.set.as_str())?;
	}

	// Generate a random input cube
	if let Some(n) = args.random {
		let scramble = random_sequence(n);
		info!("Scramble: {}", format_moves(&scramble));
		cube.apply_moves(&scramble);
	}

	cube.parse(&args.sequence)?;

	// Solve the cube and only outputs the sequence
	if args.solve {
		let solution = solve(&mut cube)?;

		let (text, len) = if args.optimize {
			let moves = solution.optimized();
			(format_moves(&moves), count_turns(&moves))
		} else {
			let moves = solution.simplified();
			(format_moves(&moves), count_turns(&moves))
		};

		if args.length {
			writeln!(out.as_mut(), "{} (len={})", text, len)?;
		} else {
			writeln!(out.as_mut(), "{}", text)?;
		}
		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		let s: String = cube.into();
		writeln!(out.as_mut(), "{}", s)?;
	} else {
		cube.write_colored(out.as_mut())?;
	}

	Ok(())
}
