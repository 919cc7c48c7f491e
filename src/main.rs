//! Wordforge - targeted password wordlist generation
//!
//! Expands operator-supplied seed tokens (names, dates, keywords) into a
//! deduplicated candidate wordlist for authorized credential audits.

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use wordforge::{
    engine::MutationEngine,
    output,
    seeds::SeedInput,
    types::MutationConfig,
    Result, WordforgeError,
};

/// Parsed command line
struct CliOptions {
    seeds: SeedInput,
    config: MutationConfig,
    output_path: PathBuf,
    report_path: Option<PathBuf>,
    /// True when at least one target flag was given (disables prompting)
    had_target_flags: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = wordforge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("wordforge {}", wordforge::VERSION);
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if let Err(e) = run_wordforge(options).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Main wordforge workflow
async fn run_wordforge(mut options: CliOptions) -> Result<()> {
    println!("🔨 Wordforge - targeted wordlist generation");
    println!("═══════════════════════════════════════════");
    println!();

    // Prompt interactively when no target flags were given and we have a
    // terminal to ask on
    if !options.had_target_flags && std::io::stdin().is_terminal() {
        options.seeds = prompt_seeds()?;
    }

    let tokens = options.seeds.collect();
    if tokens.is_empty() {
        println!("❌ No input provided. Use --help for the target flags.");
        return Ok(());
    }

    let config = options.config.clone();
    println!(
        "⚙️  Window {}-{} | strong={} | numbers={} | combiner={} | cases={}",
        config.window.min,
        config.window.max,
        config.strong,
        config.numbers,
        config.combiner,
        config.cases
    );
    println!("🌱 Seeds ({}): {}", tokens.len(), tokens.join(", "));
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Generating candidates...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let engine = MutationEngine::new(config);
    let start = Instant::now();
    let candidates = engine.generate_parallel(&tokens).await?;
    let report = engine.report(&tokens, &candidates, start.elapsed());

    spinner.finish_and_clear();

    output::write_wordlist(&options.output_path, &candidates)?;
    if let Some(report_path) = &options.report_path {
        output::write_report(report_path, &report)?;
        println!("📊 Report: {}", report_path.display());
    }

    println!(
        "✅ Saved: {} ({} entries, {:.2}s)",
        options.output_path.display(),
        report.candidate_count,
        report.elapsed.as_secs_f32()
    );
    if !candidates.is_empty() {
        println!();
        println!("[Preview]");
        println!("{}", output::preview(&candidates));
    }

    Ok(())
}

/// Parse the manual flag list
fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut seeds = SeedInput::default();
    let mut config = MutationConfig::default();
    let mut output_path = PathBuf::from("wordlist.txt");
    let mut report_path = None;
    let mut had_target_flags = false;

    // Environment defaults (flags still win)
    if let Ok(cap) = env::var("WORDFORGE_MAX_CANDIDATES") {
        config.max_candidates = parse_cap(&cap)?;
    }
    if let Ok(jobs) = env::var("WORDFORGE_JOBS") {
        config.concurrency = jobs
            .parse()
            .map_err(|_| WordforgeError::cli(format!("invalid WORDFORGE_JOBS '{}'", jobs)))?;
    }

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-u" => seeds.username = Some(take_value(args, &mut i, flag)?),
            "-f" => seeds.full_name = Some(take_value(args, &mut i, flag)?),
            "-n" => seeds.nickname = Some(take_value(args, &mut i, flag)?),
            "-p" => seeds.pet_name = Some(take_value(args, &mut i, flag)?),
            "-s" => seeds.school = Some(take_value(args, &mut i, flag)?),
            "-c" => seeds.city = Some(take_value(args, &mut i, flag)?),
            "-y" => seeds.birth_year = Some(take_value(args, &mut i, flag)?),
            "-d" => seeds.birth_date = Some(take_value(args, &mut i, flag)?),
            "-a" => seeds.partner = Some(take_value(args, &mut i, flag)?),
            "-l" => seeds.lucky_number = Some(take_value(args, &mut i, flag)?),
            "-k" => seeds.keywords = Some(take_value(args, &mut i, flag)?),
            "-min" => {
                config.window.min = parse_number(&take_value(args, &mut i, flag)?, flag)?;
            }
            "-max" => {
                config.window.max = parse_number(&take_value(args, &mut i, flag)?, flag)?;
            }
            "-o" => output_path = PathBuf::from(take_value(args, &mut i, flag)?),
            "-strong" => config.strong = true,
            "--numbers" => config.numbers = take_value(args, &mut i, flag)?.parse()?,
            "--combiner" => config.combiner = take_value(args, &mut i, flag)?.parse()?,
            "--cases" => config.cases = take_value(args, &mut i, flag)?.parse()?,
            "--sort" => config.sort = take_value(args, &mut i, flag)?.parse()?,
            "--cap" => config.max_candidates = parse_cap(&take_value(args, &mut i, flag)?)?,
            "--jobs" => {
                config.concurrency = parse_number(&take_value(args, &mut i, flag)?, flag)?;
            }
            "--report" => report_path = Some(PathBuf::from(take_value(args, &mut i, flag)?)),
            other => {
                return Err(WordforgeError::cli(format!("unknown flag '{}'", other)));
            }
        }
        if matches!(
            flag,
            "-u" | "-f" | "-n" | "-p" | "-s" | "-c" | "-y" | "-d" | "-a" | "-l" | "-k"
        ) {
            had_target_flags = true;
        }
        i += 1;
    }

    Ok(CliOptions {
        seeds,
        config,
        output_path,
        report_path,
        had_target_flags,
    })
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| WordforgeError::cli(format!("flag '{}' expects a value", flag)))
}

fn parse_number(value: &str, flag: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| WordforgeError::cli(format!("flag '{}' expects a number, got '{}'", flag, value)))
}

/// "--cap 0" disables the limit
fn parse_cap(value: &str) -> Result<Option<usize>> {
    let cap: usize = value
        .parse()
        .map_err(|_| WordforgeError::cli(format!("invalid cap '{}'", value)))?;
    Ok(if cap == 0 { None } else { Some(cap) })
}

/// Interactive seed entry; blank answers skip a field
fn prompt_seeds() -> Result<SeedInput> {
    println!("🧭 No target flags given - interactive mode (blank to skip)");
    println!();

    let ask = |label: &str| -> Result<Option<String>> {
        let answer = inquire::Text::new(label).prompt_skippable()?;
        Ok(answer.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
    };

    Ok(SeedInput {
        username: ask("Username:")?,
        full_name: ask("Full name:")?,
        nickname: ask("Nickname:")?,
        pet_name: ask("Pet name:")?,
        school: ask("School:")?,
        city: ask("City:")?,
        birth_year: ask("Birth year:")?,
        birth_date: ask("Birth date (e.g. 17061995):")?,
        partner: ask("Partner name:")?,
        lucky_number: ask("Lucky number:")?,
        keywords: ask("Custom keywords (comma-separated):")?,
    })
}

/// Print help information
fn print_help() {
    println!("🔨 Wordforge - targeted password wordlist generation");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    wordforge [TARGET FLAGS] [OPTIONS]");
    println!();
    println!("TARGET FLAGS (each adds a seed token):");
    println!("    -u <username>      -f <full name>     -n <nickname>");
    println!("    -p <pet name>      -s <school>        -c <city>");
    println!("    -y <birth year>    -d <birth date>    -a <partner name>");
    println!("    -l <lucky number>  -k <keywords, comma-separated>");
    println!();
    println!("OPTIONS:");
    println!("    -min <n>           Minimum candidate length (default: 6)");
    println!("    -max <n>           Maximum candidate length (default: 16)");
    println!("    -o <file>          Output file (default: wordlist.txt)");
    println!("    -strong            Enable symbol/number injection and combining");
    println!("    --numbers <p>      basic | curated | exhaustive[:bound] (default: curated)");
    println!("    --combiner <p>     cross | fixed (default: cross)");
    println!("    --cases <p>        basic | extended (default: basic)");
    println!("    --sort <o>         lex | length (default: lex)");
    println!("    --cap <n>          Max candidate count, 0 disables (default: 5000000)");
    println!("    --jobs <n>         Worker count (default: CPU count)");
    println!("    --report <file>    Write a JSON run summary");
    println!("    -h, --help         Show this help");
    println!("    -V, --version      Show version");
    println!();
    println!("EXAMPLES:");
    println!("    wordforge -u jdoe -p rex -y 1995");
    println!("    wordforge -u jdoe -k \"blue,falcon\" -strong -o audit.txt");
    println!("    wordforge -f \"Ann Lee\" -strong --numbers exhaustive:1000 --cap 2000000");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    WORDFORGE_MAX_CANDIDATES   Default candidate cap");
    println!("    WORDFORGE_JOBS             Default worker count");
    println!();
    println!("For authorized security audits only.");
}
