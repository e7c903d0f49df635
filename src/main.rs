//! Punimals main entry point.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window and the ECS world with its resources
//! 2. Load the animal/word catalog and spawn the scene
//! 3. Register the click observer and the per-frame schedule
//! 4. Run the main loop:
//!    - Clamp the frame delta and advance world time
//!    - Apply window resizes to the whole scene
//!    - Run behaviors, note bounce, highlight decay, pointer, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use clap::Parser;
use std::path::PathBuf;

use punimals::events::clicked::observe_animal_clicked;
use punimals::game::setup_scene;
use punimals::resources::catalog::Catalog;
use punimals::resources::gameconfig::GameConfig;
use punimals::resources::notemetrics::NoteMetrics;
use punimals::resources::notestyle::NoteStyle;
use punimals::resources::texturestore::TextureStore;
use punimals::resources::viewport::Viewport;
use punimals::resources::worldtime::WorldTime;
use punimals::systems::highlight::highlight_system;
use punimals::systems::movement::movement_system;
use punimals::systems::notebounce::note_bounce_system;
use punimals::systems::pointer::pointer_system;
use punimals::systems::render::render_system;
use punimals::systems::resize::apply_viewport_resize;
use punimals::systems::startdelay::start_delay_system;
use punimals::systems::time::update_world_time;

/// Punimals 2D scene
#[derive(Parser)]
#[command(version, about = "Animals making puns, bouncing around your screen")]
struct Cli {
    /// Path to the configuration INI file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// RNG seed for reproducible scenes.
    #[arg(long)]
    seed: Option<u64>,

    /// How many utterances to put on screen.
    #[arg(long)]
    words: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("using default configuration: {e}");
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(words) = cli.words {
        config.max_words = words;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Punimals")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Viewport::new(
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
    ));
    world.insert_resource(NoteStyle::default());
    world.insert_resource(config.rabbit.sanitized());
    world.insert_resource(NoteMetrics::raylib());

    let catalog = match Catalog::load(&config.animals_path, &config.words_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{e}");
            Catalog::default()
        }
    };
    world.insert_resource(catalog);
    world.insert_resource(config);

    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_animal_clicked));
    world.flush();

    if let Err(e) = world.run_system_once(setup_scene) {
        log::error!("scene setup failed: {e}");
    }

    let mut update = Schedule::default();
    update.add_systems(start_delay_system);
    update.add_systems(movement_system.after(start_delay_system));
    update.add_systems(note_bounce_system.after(movement_system));
    update.add_systems(highlight_system);
    update.add_systems(pointer_system);
    update.add_systems(render_system.after(note_bounce_system).after(pointer_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        let resized = world
            .non_send_resource::<raylib::RaylibHandle>()
            .is_window_resized();
        if resized {
            let (new_w, new_h) = {
                let rl = world.non_send_resource::<raylib::RaylibHandle>();
                (rl.get_screen_width() as f32, rl.get_screen_height() as f32)
            };
            apply_viewport_resize(&mut world, new_w, new_h);
        }

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
