use macroquad::prelude::*;
use toroidal_life::{
    Config, Simulation,
    application::{ClockSeed, SeedSource},
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: rendering::WINDOW_TITLE.to_owned(),
        window_width: toroidal_life::application::DEFAULT_WIDTH as i32,
        window_height: toroidal_life::application::DEFAULT_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let mut seeds = ClockSeed;
    let seed = config.seed.unwrap_or_else(|| seeds.next_seed());
    let mut state = Simulation::new(&config, seed);
    log::info!(
        "starting {}x{} grid, {} step ({}), seed {}",
        config.dimensions.width(),
        config.dimensions.height(),
        state.algorithm().name(),
        state.algorithm().description(),
        seed
    );

    loop {
        let events = input::poll_events();
        let points = state.frame(&events, &mut seeds);
        rendering::draw_points(&points, state.dimensions());

        if state.should_exit() {
            break;
        }
        next_frame().await;
    }

    log::info!(
        "stopped at generation {} (last step {:.2}ms)",
        state.generation(),
        state.last_step_time_ms()
    );
}
