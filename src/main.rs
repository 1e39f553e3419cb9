use clap::{ArgAction, Parser};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use inklayer::capture;
use inklayer::config::Config;
use inklayer::input::{DrawMode, GestureEvent};
use inklayer::session::{DrawingSession, run_publish_loop};

#[derive(Parser, Debug)]
#[command(name = "inklayer")]
#[command(version, about = "Freehand drawing overlay engine")]
struct Cli {
    /// Canvas width in pixels for demo rendering
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Canvas height in pixels for demo rendering
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Render a scripted stroke sequence and save the overlay as a PNG
    #[arg(long, action = ArgAction::SetTrue)]
    demo: bool,

    /// Override the output directory for saved drawings
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.demo {
        let path = run_demo(&cli)?;
        println!("Saved demo drawing to {}", path.display());
    } else {
        // No flags: show usage
        println!("inklayer: freehand drawing overlay engine");
        println!();
        println!("Usage:");
        println!("  inklayer --demo            Render a scripted stroke and save it as PNG");
        println!("  inklayer --demo -o DIR     Save the demo drawing under DIR");
        println!("  inklayer --help            Show help");
        println!();
        println!("The engine itself is a library: embed a DrawingSession between a");
        println!("gesture source and a display compositor to draw interactively.");
    }

    Ok(())
}

/// Drives the full pipeline headlessly: a drawn stroke, an erase pass through
/// it, a few published frames, and a PNG export.
fn run_demo(cli: &Cli) -> anyhow::Result<PathBuf> {
    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Falling back to default config: {err:#}");
        Config::default()
    });

    let mut export = config.output.export_config();
    if let Some(dir) = &cli.output {
        export.save_directory = dir.clone();
    }
    let frames_per_second = config.publish.frames_per_second;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let local = tokio::task::LocalSet::new();

    runtime.block_on(local.run_until(async move {
        let session = Rc::new(RefCell::new(DrawingSession::new(&config)));
        session.borrow_mut().resize(cli.width, cli.height);

        let publisher = tokio::task::spawn_local(run_publish_loop(
            Rc::clone(&session),
            frames_per_second,
        ));

        draw_demo_strokes(&mut session.borrow_mut(), cli.width, cli.height);

        // Let the publish loop pick up the finished drawing once.
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;

        let path = capture::export_session(&mut session.borrow_mut(), &export)?;

        session.borrow().shutdown();
        let _ = publisher.await;

        Ok(path)
    }))
}

/// A wavy pen stroke across the canvas, then an erase band through its middle.
fn draw_demo_strokes(session: &mut DrawingSession, width: u32, height: u32) {
    let (w, h) = (width as f64, height as f64);

    session.handle_event(GestureEvent::Begin {
        x: w * 0.1,
        y: h * 0.5,
    });
    for i in 1..=48 {
        let t = i as f64 / 48.0;
        session.handle_event(GestureEvent::Update {
            x: w * (0.1 + 0.8 * t),
            y: h * (0.5 + 0.3 * (t * std::f64::consts::TAU).sin()),
        });
    }
    session.handle_event(GestureEvent::End);

    session.set_mode(DrawMode::Erase);
    session.handle_event(GestureEvent::Begin {
        x: w * 0.5,
        y: h * 0.15,
    });
    for i in 1..=16 {
        let t = i as f64 / 16.0;
        session.handle_event(GestureEvent::Update {
            x: w * 0.5,
            y: h * (0.15 + 0.7 * t),
        });
    }
    session.handle_event(GestureEvent::End);
    session.set_mode(DrawMode::Draw);
}
