// CLI entry point for Vibe Island.
//
// Runs the mood controller headless: each action on the command line is one
// input event, applied in order. After every state change the new state and
// a one-line scene/audio summary are printed (or one JSON object per line
// with `--json`). `--frames` lets that many frames of presentation time pass
// after each action so particles, lightning and audio slews move.
//
// Usage:
//   vibe [OPTIONS] ACTION...
//     --config <PATH>     Mood config JSON (default: built-in tables)
//     --seed <N>          Scene seed (default: 1)
//     --json              Print JSON lines instead of text
//     --frames <N>        Frames to run after each action (default: 0)
//     --dt <SECS>         Frame length in seconds (default: 0.016)
//   Actions:
//     --slider <N>        Set the life level (0-100, rounded and clamped)
//     --preset <LABEL>    Apply a catalog preset
//     --text <TEXT>       Interpret free text
//     --mute              Toggle audio mute
//     --list-presets      Print the preset catalog
//
// Logging goes to stderr and is controlled by RUST_LOG (default: warn).

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use vibe_island_app::StandardController;
use vibe_island_app::report::{Report, preset_table};
use vibe_island_mood::{MoodConfig, MoodEngine, MoodInput};

#[derive(Clone, Debug, PartialEq)]
enum Action {
    Input(MoodInput),
    Mute,
    ListPresets,
}

#[derive(Clone, Debug, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    seed: u64,
    json: bool,
    frames: u32,
    dt: f32,
    actions: Vec<Action>,
    help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: None,
            seed: 1,
            json: false,
            frames: 0,
            dt: 0.016,
            actions: Vec::new(),
            help: false,
        }
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            std::process::exit(1);
        }
    };
    if options.help || options.actions.is_empty() {
        print_usage();
        return;
    }

    let config = match &options.config {
        Some(path) => match MoodConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => MoodConfig::default(),
    };
    let engine = match MoodEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            std::process::exit(1);
        }
    };

    let mut controller = StandardController::standard(engine, options.seed);
    for action in &options.actions {
        match run_action(&mut controller, action, &options) {
            Ok(output) => print!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// Apply one action, then let `options.frames` frames pass. Returns what the
/// action prints.
fn run_action(
    controller: &mut StandardController,
    action: &Action,
    options: &Options,
) -> Result<String, String> {
    let output = match action {
        Action::Input(input) => {
            controller.handle(input);
            controller.run_frames(options.frames, options.dt);
            let report = Report::capture(controller);
            if options.json {
                let line = report
                    .to_json()
                    .map_err(|e| format!("Failed to encode report: {e}"))?;
                format!("{line}\n")
            } else {
                format!("{}\n", report.to_text())
            }
        }
        Action::Mute => {
            let muted = controller.toggle_mute();
            controller.run_frames(options.frames, options.dt);
            if options.json {
                format!("{{\"muted\":{muted}}}\n")
            } else {
                format!("audio {}\n", if muted { "muted" } else { "unmuted" })
            }
        }
        Action::ListPresets => {
            controller.run_frames(options.frames, options.dt);
            let presets = controller.engine().presets();
            if options.json {
                let json = serde_json::to_string(presets)
                    .map_err(|e| format!("Failed to encode presets: {e}"))?;
                format!("{json}\n")
            } else {
                preset_table(presets)
            }
        }
    };
    Ok(output)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse arguments (without the program name). Uses simple matching, no
/// clap dependency.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 0;

    let value = |i: usize, flag: &str| -> Result<String, String> {
        args.get(i)
            .cloned()
            .ok_or_else(|| format!("{flag} requires a value"))
    };

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                options.config = Some(PathBuf::from(value(i, "--config")?));
            }
            "--seed" => {
                i += 1;
                options.seed = value(i, "--seed")?
                    .parse()
                    .map_err(|_| "--seed requires a non-negative integer".to_string())?;
            }
            "--json" => options.json = true,
            "--frames" => {
                i += 1;
                options.frames = value(i, "--frames")?
                    .parse()
                    .map_err(|_| "--frames requires a non-negative integer".to_string())?;
            }
            "--dt" => {
                i += 1;
                let dt: f32 = value(i, "--dt")?
                    .parse()
                    .map_err(|_| "--dt requires a number of seconds".to_string())?;
                if !dt.is_finite() || dt < 0.0 {
                    return Err("--dt must be a finite, non-negative number".to_string());
                }
                options.dt = dt;
            }
            "--slider" => {
                i += 1;
                let level: f64 = value(i, "--slider")?
                    .parse()
                    .map_err(|_| "--slider requires a number".to_string())?;
                options.actions.push(Action::Input(MoodInput::slider(level)));
            }
            "--preset" => {
                i += 1;
                let label = value(i, "--preset")?;
                options.actions.push(Action::Input(MoodInput::preset(label)));
            }
            "--text" => {
                i += 1;
                let text = value(i, "--text")?;
                options.actions.push(Action::Input(MoodInput::text(text)));
            }
            "--mute" => options.actions.push(Action::Mute),
            "--list-presets" => options.actions.push(Action::ListPresets),
            "--help" | "-h" => options.help = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(options)
}

fn print_usage() {
    println!("Usage: vibe [OPTIONS] ACTION...");
    println!();
    println!("Options:");
    println!("  --config <PATH>     Mood config JSON (default: built-in tables)");
    println!("  --seed <N>          Scene seed (default: 1)");
    println!("  --json              Print JSON lines instead of text");
    println!("  --frames <N>        Frames to run after each action (default: 0)");
    println!("  --dt <SECS>         Frame length in seconds (default: 0.016)");
    println!("  --help, -h          Show this help");
    println!();
    println!("Actions (applied in order):");
    println!("  --slider <N>        Set the life level (0-100)");
    println!("  --preset <LABEL>    Apply a catalog preset");
    println!("  --text <TEXT>       Interpret free text");
    println!("  --mute              Toggle audio mute");
    println!("  --list-presets      Print the preset catalog");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn actions_keep_their_order() {
        let o = parse_args(&args(&[
            "--preset", "Burnout", "--mute", "--slider", "85", "--text", "rainy day",
        ]))
        .unwrap();
        assert_eq!(
            o.actions,
            vec![
                Action::Input(MoodInput::preset("Burnout")),
                Action::Mute,
                Action::Input(MoodInput::slider(85.0)),
                Action::Input(MoodInput::text("rainy day")),
            ]
        );
    }

    #[test]
    fn options_parse() {
        let o = parse_args(&args(&[
            "--seed", "9", "--json", "--frames", "30", "--dt", "0.05", "--config", "mood.json",
            "--list-presets",
        ]))
        .unwrap();
        assert_eq!(o.seed, 9);
        assert!(o.json);
        assert_eq!(o.frames, 30);
        assert_eq!(o.dt, 0.05);
        assert_eq!(o.config, Some(PathBuf::from("mood.json")));
        assert_eq!(o.actions, vec![Action::ListPresets]);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_args(&args(&["--slider"])).is_err());
        assert!(parse_args(&args(&["--slider", "lots"])).is_err());
        assert!(parse_args(&args(&["--dt", "-1"])).is_err());
        assert!(parse_args(&args(&["--frames", "-3"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    fn controller() -> StandardController {
        StandardController::standard(MoodEngine::new(MoodConfig::default()).unwrap(), 1)
    }

    #[test]
    fn frames_run_after_every_action_kind() {
        let options = Options {
            frames: 10,
            dt: 0.1,
            ..Options::default()
        };
        let mut c = controller();
        run_action(&mut c, &Action::Input(MoodInput::slider(80.0)), &options).unwrap();
        assert!((c.scene().elapsed() - 1.0).abs() < 1e-4);
        run_action(&mut c, &Action::Mute, &options).unwrap();
        assert!((c.scene().elapsed() - 2.0).abs() < 1e-4);
        run_action(&mut c, &Action::ListPresets, &options).unwrap();
        assert!((c.scene().elapsed() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn action_output_follows_json_flag() {
        let mut c = controller();
        let text = run_action(&mut c, &Action::Mute, &Options::default()).unwrap();
        assert_eq!(text, "audio muted\n");
        let json = Options {
            json: true,
            ..Options::default()
        };
        let line = run_action(&mut c, &Action::Mute, &json).unwrap();
        assert_eq!(line, "{\"muted\":false}\n");
        let report = run_action(&mut c, &Action::Input(MoodInput::preset("Calm")), &json).unwrap();
        assert!(report.starts_with('{') && report.ends_with("}\n"), "{report}");
    }

    #[test]
    fn help_flag() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }
}
