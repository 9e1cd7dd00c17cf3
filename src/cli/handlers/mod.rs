mod init;
pub use init::cmd_init;

use std::io::Read;
use std::path::PathBuf;

use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, project_io};
use crate::logging;
use crate::model::config::AppConfig;
use crate::model::project::Project;
use crate::model::team::{Presence, TeamRole};
use crate::ops::{check, feed_ops, session_ops, stats, team_ops};
use crate::store::{Action, DragEnd, Store};

/// Global flags every command sees
struct Context {
    json: bool,
    config: Option<PathBuf>,
    verbose: u8,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context {
        json: cli.json,
        config: cli.config,
        verbose: cli.verbose,
    };

    match cli.command {
        // Init never reads a config
        Commands::Init(args) => {
            logging::init(ctx.verbose, None);
            cmd_init(args)
        }

        Commands::Show(args) => cmd_show(args, &ctx),
        Commands::Stats => cmd_stats(&ctx),
        Commands::Apply(args) => cmd_apply(args, &ctx),
        Commands::Check => cmd_check(&ctx),
        Commands::Nav(args) => cmd_nav(args, &ctx),
        Commands::Team(args) => cmd_team(args, &ctx),
        Commands::Feed(args) => cmd_feed(args, &ctx),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read the config and start logging at its configured level.
fn load_config_cwd(ctx: &Context) -> Result<(Option<PathBuf>, AppConfig), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let path = config_io::resolve_config_path(ctx.config.as_deref(), &cwd);
    let config = project_io::load_config(path.as_deref())?;
    logging::init(ctx.verbose, config.log.level.as_deref());
    Ok((path, config))
}

fn load_project_cwd(ctx: &Context) -> Result<Project, Box<dyn std::error::Error>> {
    let (path, config) = load_config_cwd(ctx)?;
    let mut project = project_io::build_project(config, Utc::now())?;
    project.config_path = path;
    Ok(project)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn require_board(store: &Store, board: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = board {
        if store.snapshot().workspace.board(id).is_none() {
            return Err(format!("board not found: {}", id).into());
        }
    }
    Ok(())
}

fn print_snapshot(store: &Store, board: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = store.snapshot();
    if json {
        return print_json(&snapshot_to_json(&snapshot, board));
    }
    let mut first = true;
    for b in snapshot.workspace.boards.values() {
        if board.is_some_and(|id| b.id != id) {
            continue;
        }
        if !first {
            println!();
        }
        first = false;
        print_lines(&format_board(b));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_show(args: ShowArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project_cwd(ctx)?;
    let store = Store::new(project.workspace);
    require_board(&store, args.board.as_deref())?;
    print_snapshot(&store, args.board.as_deref(), ctx.json)
}

fn cmd_stats(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project_cwd(ctx)?;
    let stats = stats::workspace_stats(&project.workspace);
    if ctx.json {
        print_json(&stats)
    } else {
        print_lines(&format_stats(&stats));
        Ok(())
    }
}

fn cmd_check(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config) = load_config_cwd(ctx)?;
    let result = check::check_config(&config);

    if ctx.json {
        return print_json(&result);
    }
    if !result.errors.is_empty() {
        println!("Errors:");
        for err in &result.errors {
            match err {
                check::CheckError::DuplicateId { id, locations } => {
                    println!("  {} is used by: {}", id, locations.join(", "));
                }
            }
        }
    }
    if !result.warnings.is_empty() {
        if !result.errors.is_empty() {
            println!();
        }
        println!("Warnings:");
        for warn in &result.warnings {
            match warn {
                check::CheckWarning::BlankName { location } => {
                    println!("  {} has a blank name", location);
                }
                check::CheckWarning::EmptyBoard { board_id } => {
                    println!("  board {} has no groups", board_id);
                }
                check::CheckWarning::RepeatedTag { location, tag } => {
                    println!("  {} repeats tag #{}", location, tag);
                }
            }
        }
    }
    if result.valid {
        println!("✓ config is valid");
    } else {
        println!("✗ config has errors");
    }
    Ok(())
}

fn cmd_nav(args: NavArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(ctx.verbose, None);
    let session = match args.name.as_deref() {
        Some(name) => session_ops::login(name, session_ops::parse_role(&args.role)?)?,
        None => session_ops::logout(),
    };
    let views = session_ops::navigation(&session);
    if ctx.json {
        print_json(&nav_to_json(&session, &views))
    } else {
        print_lines(&format_nav(&session, &views));
        Ok(())
    }
}

fn cmd_team(args: TeamArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project_cwd(ctx)?;
    let mut team = project.team;

    if let Some(name) = args.add.as_deref() {
        let role_name = args.role.as_deref().unwrap_or("developer");
        let role = TeamRole::parse(role_name).ok_or_else(|| {
            format!(
                "unknown team role: {} (expected admin, developer, designer or product-manager)",
                role_name
            )
        })?;
        match team_ops::add_member(&team, name, role, Presence::default(), &project.workspace.ids) {
            Some(next) => team = next,
            None => return Err("member name is blank".into()),
        }
    }
    for id in &args.remove {
        match team_ops::remove_member(&team, id) {
            Some(next) => team = next,
            None => warn!(id = %id, "no team member with this id"),
        }
    }

    let members = team_ops::search(&team, args.search.as_deref().unwrap_or(""));
    if ctx.json {
        let out: Vec<MemberJson> = members
            .iter()
            .map(|&member| MemberJson {
                member,
                initials: team_ops::initials(&member.name),
            })
            .collect();
        return print_json(&out);
    }
    if members.is_empty() {
        println!("no team members found");
    }
    for member in members {
        println!("{}", format_member(member));
    }
    Ok(())
}

fn cmd_feed(args: FeedArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project_cwd(ctx)?;
    let mut notifications = project.notifications;
    let mut messages = project.messages;

    // Notification and message IDs are looked up in that order
    for id in &args.read {
        if let Some(next) = feed_ops::mark_read(&notifications, id) {
            notifications = next;
        } else if let Some(next) = feed_ops::mark_read(&messages, id) {
            messages = next;
        } else {
            warn!(id = %id, "nothing unread with this id");
        }
    }
    for id in &args.remove {
        if let Some(next) = feed_ops::remove(&notifications, id) {
            notifications = next;
        } else if let Some(next) = feed_ops::remove(&messages, id) {
            messages = next;
        } else {
            warn!(id = %id, "no notification or message with this id");
        }
    }

    let unread_notifications = feed_ops::unread_count(&notifications);
    let unread_messages = feed_ops::unread_count(&messages);

    if ctx.json {
        return print_json(&FeedJson {
            unread_notifications,
            unread_messages,
            notifications: &notifications,
            messages: &messages,
        });
    }

    let now = Utc::now();
    println!("Notifications ({} unread)", unread_notifications);
    for n in &notifications {
        println!("  {}", format_notification(n, now));
    }
    println!();
    println!("Messages ({} unread)", unread_messages);
    for m in &messages {
        println!("  {}", format_message(m, now));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

/// A drag-and-drop result as it appears in a script line
#[derive(Debug, Deserialize)]
struct DragLine {
    board: String,
    drag: DragEnd,
}

/// Parse one script line. Lines with an `op` field are actions; lines with a
/// `drag` field are drop results that may or may not turn into a move.
fn parse_script_line(line: &str) -> Result<Option<Action>, String> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|e| format!("invalid JSON: {}", e))?;
    if value.get("op").is_some() {
        let action: Action =
            serde_json::from_value(value).map_err(|e| format!("invalid action: {}", e))?;
        return Ok(Some(action));
    }
    if value.get("drag").is_some() {
        let drag: DragLine =
            serde_json::from_value(value).map_err(|e| format!("invalid drag: {}", e))?;
        return Ok(drag.drag.to_action(&drag.board));
    }
    Err("expected an \"op\" or \"drag\" field".to_string())
}

fn read_script(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| format!("could not read {}: {}", source, e).into())
    }
}

fn cmd_apply(args: ApplyArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project_cwd(ctx)?;
    let script = read_script(&args.script)?;
    let mut store = Store::new(project.workspace);
    require_board(&store, args.board.as_deref())?;

    if args.watch {
        let json = ctx.json;
        store.subscribe(move |snapshot| {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": snapshot.version,
                        "total": snapshot.stats.total,
                        "completion": snapshot.stats.completion,
                    })
                );
            } else {
                println!(
                    "v{}  {} items, {}% done",
                    snapshot.version, snapshot.stats.total, snapshot.stats.completion
                );
            }
        });
    }

    let mut failures = 0usize;
    for (n, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let result = parse_script_line(line).and_then(|action| match action {
            Some(action) => store.dispatch(&action).map(|_| ()).map_err(|e| e.to_string()),
            None => Ok(()),
        });
        if let Err(e) = result {
            if args.strict {
                return Err(format!("line {}: {}", n + 1, e).into());
            }
            eprintln!("line {}: {}", n + 1, e);
            failures += 1;
        }
    }

    if args.watch && !ctx.json {
        println!();
    }
    print_snapshot(&store, args.board.as_deref(), ctx.json)?;
    if failures > 0 && !ctx.json {
        eprintln!("{} line(s) skipped", failures);
    }
    Ok(())
}
