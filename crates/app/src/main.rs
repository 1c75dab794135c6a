mod render;
mod window_config;

use std::{env, process};

use app::seed::{SeedChoice, resolve_seed_from_args};
use cave_core::mapgen::{GenerationConfig, MapGenerator};
use cave_core::types::TileKind;
use macroquad::prelude::*;
use render::QuadMesh;

fn generation_config(choice: &SeedChoice) -> GenerationConfig {
    match choice {
        SeedChoice::Fixed(text) => GenerationConfig {
            seed: text.clone(),
            use_random_seed: false,
            ..GenerationConfig::default()
        },
        SeedChoice::Random => GenerationConfig::default(),
    }
}

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let choice = match resolve_seed_from_args(&args) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let mut generator = match MapGenerator::new(generation_config(&choice)) {
        Ok(generator) => generator,
        Err(error) => {
            eprintln!("{error}");
            process::exit(2);
        }
    };

    let mut mesh = QuadMesh::default();
    generator.generate();
    generator.build_mesh(&mut mesh);

    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            generator.generate();
            generator.build_mesh(&mut mesh);
        }

        clear_background(BLACK);
        render::draw_mesh(&mesh);

        if let Some(map) = generator.map() {
            let open = map.grid.count(TileKind::Floor);
            let total = map.grid.width() * map.grid.height();
            let caption = format!(
                "{} | {}",
                app::seed_caption(&map.resolved_seed),
                app::coverage_caption(open, total)
            );
            draw_text(&caption, 20.0, 24.0, 24.0, WHITE);
        }

        next_frame().await
    }
}
