use anyhow::Context;
use panview_demo::{parse_script, DemoScreen, DemoSettings, DEFAULT_SCRIPT};

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let steps = if args.is_empty() {
        parse_script(DEFAULT_SCRIPT.split_whitespace())
    } else {
        parse_script(args.iter().map(String::as_str))
    }
    .context("parsing the gesture script")?;

    println!("=== Panview Demo ===");
    println!("Playing {} swipes, e.g. `panview-demo right up:30`", steps.len());
    println!();

    let mut screen = DemoScreen::new(DemoSettings::default())?;
    for step in steps {
        let report = screen.play(step);
        let outcome = match report.triggered {
            Some(direction) => {
                let icon = screen
                    .settings()
                    .style(direction)
                    .map_or("?", |style| style.icon);
                format!("triggered {direction} [{icon}]")
            }
            None => "no trigger".to_string(),
        };
        println!(
            "swipe {} {:>5.1}px -> {} ({} frames)",
            step.direction, step.distance, outcome, report.frames
        );
    }

    let [r, g, b, _] = screen.background().components();
    println!();
    println!("label:      {}", screen.label());
    println!("background: rgb({r:.2}, {g:.2}, {b:.2})");
    Ok(())
}
