use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::audio::{AudioSink, BellAudio, NullAudio};
use skyward::config::FRAME_INTERVAL_MS;
use skyward::game;
use skyward::input::{map_key, GameInput};
use skyward::ui::render_game;
use skyward::{GameConfig, GameState, RenderOptions};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let mut options = RenderOptions::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--hitboxes" => options.draw_hitboxes = true,
            "--mute" => options.sound = false,
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Flappy Bird\n");
                println!("Usage: skyward [options]\n");
                println!("Options:");
                println!("  --hitboxes  Overlay collision geometry");
                println!("  --mute      Disable the terminal bell");
                println!("  --version   Show version information");
                println!("  --help      Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Validate the field constants before touching the terminal.
    let config = GameConfig::default();
    if let Err(err) = config.validate() {
        eprintln!("Invalid game configuration: {}", err);
        std::process::exit(1);
    }

    let mut audio: Box<dyn AudioSink> = if options.sound {
        Box::new(BellAudio)
    } else {
        Box::new(NullAudio)
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &options, audio.as_mut());

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// The frame loop: poll input, advance the simulation by the elapsed time,
/// draw. Runs until the player quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
    options: &RenderOptions,
    audio: &mut dyn AudioSink,
) -> io::Result<()> {
    let mut state = GameState::new(config);
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        // Drain pending events; jump is edge-triggered, so several presses
        // within one frame still count as a single flap.
        let mut jump_requested = false;
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    GameInput::Jump => jump_requested = true,
                    GameInput::Quit => return Ok(()),
                    GameInput::Other => {}
                }
            }
        }

        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();

        game::update(&mut state, config, jump_requested, dt, &mut rng, audio);

        terminal.draw(|frame| {
            render_game(frame, frame.size(), &state, config, options);
        })?;

        // Wait out the rest of the frame; a new key wakes the loop early.
        event::poll(Duration::from_millis(FRAME_INTERVAL_MS))?;
    }
}
