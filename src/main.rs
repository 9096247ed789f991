use std::env;
use std::fs;
use std::path::Path;
use std::process;

use teamforge::config::{self, Command, Config};
use teamforge::export::export_teams_to_csv;
use teamforge::formation::{feasibility_check, generate_teams, TeamOption};
use teamforge::log::RunLogger;
use teamforge::publish::{
    find_team_for_email, FileSnapshotStore, PublishedTeamsData, SnapshotStore,
};
use teamforge::roster::{parse_roster, RosterParseResult};

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    if cli.help {
        output::print_help();
        return;
    }

    if cli.version {
        println!("teamforge {}", VERSION);
        return;
    }

    let Some(command) = cli.command.clone() else {
        output::print_help();
        process::exit(2);
    };

    let config = Config::load(&cli);

    let result = match command {
        Command::Check => cmd_check(&config, &cli),
        Command::Generate => cmd_generate(&config, &cli),
        Command::Lookup => cmd_lookup(&config, &cli),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Read and parse the roster file, printing the ingestion report.
///
/// Fails only on unreadable files and fatal parse errors; row-level errors
/// are reported and the remaining participants carry on.
fn load_roster(cli: &config::CliArgs) -> Result<RosterParseResult, String> {
    let path = cli
        .positional
        .as_deref()
        .ok_or("missing roster file argument (try: teamforge check roster.csv)")?;

    let raw = fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    let result = parse_roster(&raw);
    output::print_parse_report(&result);

    if result.participants.is_empty() {
        return Err(match result.errors.first() {
            Some(e) => e.clone(),
            None => "roster contains no participants".to_string(),
        });
    }

    Ok(result)
}

fn cmd_check(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let logger = RunLogger::new(Path::new(&config.files_log_dir));
    let _ = logger.log_run_start("check");

    let team_config = config.team_config();
    team_config.validate().map_err(|p| p.join("; "))?;

    let roster = load_roster(cli)?;
    let _ = logger.log(&format!(
        "parsed {} participants ({} row errors)",
        roster.participants.len(),
        roster.errors.len()
    ));

    let feasibility = feasibility_check(&roster.participants, &team_config);
    output::print_feasibility(&feasibility);
    let _ = logger.log(&format!(
        "feasibility: {} ({} errors, {} warnings)",
        feasibility.feasible,
        feasibility.errors.len(),
        feasibility.warnings.len()
    ));

    if feasibility.feasible {
        Ok(())
    } else {
        Err("roster is not feasible with the current constraints".to_string())
    }
}

fn cmd_generate(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let logger = RunLogger::new(Path::new(&config.files_log_dir));
    let _ = logger.log_run_start("generate");

    let team_config = config.team_config();
    team_config.validate().map_err(|p| p.join("; "))?;

    let roster = load_roster(cli)?;

    let feasibility = feasibility_check(&roster.participants, &team_config);
    output::print_feasibility(&feasibility);
    if !feasibility.feasible {
        return Err("roster is not feasible with the current constraints".to_string());
    }

    let options = generate_teams(&roster.participants, &team_config);
    let _ = logger.log(&format!(
        "generated {} options for {} participants",
        options.len(),
        roster.participants.len()
    ));

    if options.is_empty() {
        // Feasibility counts each constraint in isolation; seeding needs
        // them simultaneously, so this can still come up empty.
        return Err("no valid teams could be formed; relax a constraint and retry".to_string());
    }

    output::print_options(&options);

    if cli.out.is_some() || cli.publish {
        let picked = pick_option(&options, cli.pick)?;

        if let Some(ref out_path) = cli.out {
            let csv = export_teams_to_csv(picked);
            fs::write(out_path, csv)
                .map_err(|e| format!("failed to write {}: {}", out_path, e))?;
            println!();
            println!("Exported option {} to {}", picked.id, out_path);
            let _ = logger.log(&format!("exported option {} to {}", picked.id, out_path));
        }

        if cli.publish {
            let store = FileSnapshotStore::new(&config.files_snapshot_dir);
            let snapshot = PublishedTeamsData::from_option(picked);
            store.save(&snapshot)?;
            println!();
            println!(
                "Published option {} (score {}) to {}",
                picked.id,
                picked.overall_score,
                store.path().display()
            );
            let _ = logger.log(&format!("published option {}", picked.id));
        }
    }

    Ok(())
}

fn pick_option(options: &[TeamOption], pick: Option<usize>) -> Result<&TeamOption, String> {
    let n = pick.unwrap_or(1);
    options
        .iter()
        .find(|o| o.id == n)
        .ok_or_else(|| format!("no option {} (have 1..{})", n, options.len()))
}

fn cmd_lookup(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let email = cli
        .positional
        .as_deref()
        .ok_or("missing email argument (try: teamforge lookup you@example.com)")?;

    let store = FileSnapshotStore::new(&config.files_snapshot_dir);
    let snapshot = store
        .load()?
        .ok_or("no teams have been published yet")?;

    match find_team_for_email(&snapshot, email) {
        Some((team, member)) => {
            println!("{} is on team {} (published {})", member.name, team.id, snapshot.published_at);
            for m in &team.members {
                let marker = if m.email == member.email { "*" } else { " " };
                println!("  {} {} <{}>", marker, m.name, m.email);
            }
            Ok(())
        }
        None => Err(format!("no team found for {}", email)),
    }
}
