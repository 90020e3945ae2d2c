use std::env;
use std::io::{self, Read};
use std::process;

use anyhow::{bail, Context, Result};

use devtoolshub::report::Report;
use devtoolshub::{base64_codec, highlight, json_format, matcher, FlagSet};

const USAGE: &str = "\
usage: devtoolshub <tool> [options]        (input text on stdin)

  regex -E <pattern> [-f <flags>] [--json | --markup]
  json [--minify]
  base64 <encode | decode>";

enum RegexOutput {
    Offsets,
    Json,
    Markup,
}

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(tool) = args.first() else {
        bail!("{USAGE}");
    };
    match tool.as_str() {
        "regex" => run_regex(&args[1..]),
        "json" => run_json(&args[1..]),
        "base64" => run_base64(&args[1..]),
        other => bail!("unknown tool '{other}'\n{USAGE}"),
    }
}

// Exit code follows grep: 0 when something matched, 1 when nothing did.
fn run_regex(args: &[String]) -> Result<i32> {
    let mut pattern = None;
    let mut flag_text = String::new();
    let mut output = RegexOutput::Offsets;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-E" => pattern = Some(iter.next().context("-E expects a pattern")?.clone()),
            "-f" => flag_text = iter.next().context("-f expects a flag string")?.clone(),
            "--json" => output = RegexOutput::Json,
            "--markup" => output = RegexOutput::Markup,
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }
    let pattern = pattern.context("the regex tool requires -E <pattern>")?;

    let raw = read_stdin()?;
    // Trim the trailing newline so '$' anchors the last line of input.
    let input = raw.trim_end_matches('\n');

    let flags = FlagSet::parse(&flag_text)?;
    let matches = matcher::evaluate(&pattern, &flags, input)?;
    let found = !matches.is_empty();

    match output {
        RegexOutput::Offsets => {
            for record in &matches {
                println!("{}\t{}", record.start_offset, record.matched_text);
            }
        }
        RegexOutput::Json => {
            println!("{}", Report::new(&pattern, flags, input, matches).to_json()?);
        }
        RegexOutput::Markup => {
            println!("{}", highlight::render(input, &matches).markup());
        }
    }

    Ok(if found { 0 } else { 1 })
}

fn run_json(args: &[String]) -> Result<i32> {
    let minify = match args {
        [] => false,
        [flag] if flag == "--minify" => true,
        _ => bail!("{USAGE}"),
    };
    let input = read_stdin()?;
    let formatted = if minify {
        json_format::minify(&input)?
    } else {
        json_format::format(&input)?
    };
    println!("{formatted}");
    Ok(0)
}

fn run_base64(args: &[String]) -> Result<i32> {
    let [mode] = args else {
        bail!("{USAGE}");
    };
    let raw = read_stdin()?;
    let input = raw.trim_end_matches('\n');
    match mode.as_str() {
        "encode" => println!("{}", base64_codec::encode(input)),
        "decode" => println!("{}", base64_codec::decode(input)?),
        other => bail!("base64 expects 'encode' or 'decode', got '{other}'"),
    }
    Ok(0)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}
