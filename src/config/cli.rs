/// CLI arguments parsed from the command line.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Subcommand to execute.
    pub command: Option<Command>,
    /// Path to config file.
    pub config: Option<String>,
    /// Target team size.
    pub team_size: Option<usize>,
    /// Anchors required per team.
    pub anchors_per_team: Option<usize>,
    /// Disable the one-editor-per-team constraint.
    pub no_editor_constraint: bool,
    /// Disable the one-AI-lead-per-team constraint.
    pub no_ai_lead_constraint: bool,
    /// Disable the anchors-per-team constraint.
    pub no_anchor_constraint: bool,
    /// Directory for the published snapshot.
    pub snapshot_dir: Option<String>,
    /// Directory for run logs.
    pub log_dir: Option<String>,
    /// Option number to pick for export/publish (1-based).
    pub pick: Option<usize>,
    /// Path to write the exported CSV to.
    pub out: Option<String>,
    /// Publish the picked option as the team snapshot.
    pub publish: bool,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
    /// Positional argument: roster file path or lookup email.
    pub positional: Option<String>,
}

/// Teamforge subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse the roster and report feasibility.
    Check,
    /// Generate ranked team options (optionally export/publish one).
    Generate,
    /// Look up the published team for an email address.
    Lookup,
}

impl Command {
    /// Parse command from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "check" => Some(Self::Check),
            "generate" => Some(Self::Generate),
            "lookup" => Some(Self::Lookup),
            _ => None,
        }
    }
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-c" | "--config" => cli.config = args.next(),
            "--team-size" => cli.team_size = args.next().and_then(|s| s.parse().ok()),
            "--anchors-per-team" => {
                cli.anchors_per_team = args.next().and_then(|s| s.parse().ok())
            }
            "--no-editor-constraint" => cli.no_editor_constraint = true,
            "--no-ai-lead-constraint" => cli.no_ai_lead_constraint = true,
            "--no-anchor-constraint" => cli.no_anchor_constraint = true,
            "--snapshot-dir" => cli.snapshot_dir = args.next(),
            "--log-dir" => cli.log_dir = args.next(),
            "--pick" => cli.pick = args.next().and_then(|s| s.parse().ok()),
            "--out" => cli.out = args.next(),
            "--publish" => cli.publish = true,
            _ if !arg.starts_with('-') && cli.command.is_none() => {
                cli.command = Command::from_str(&arg);
            }
            _ if !arg.starts_with('-') && cli.positional.is_none() => {
                cli.positional = Some(arg);
            }
            _ => {} // Ignore unknown flags
        }
    }

    cli
}
