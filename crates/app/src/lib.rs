pub mod seed;

pub const APP_NAME: &str = "Cave Viewer";

/// Caption shown under the rendered map.
pub fn seed_caption(resolved_seed: &str) -> String {
    format!("seed {resolved_seed} | click to regenerate")
}

/// Human-readable open-tile share for the status line.
pub fn coverage_caption(open_tiles: usize, total_tiles: usize) -> String {
    if total_tiles == 0 {
        return "open 0%".to_string();
    }
    format!("open {}%", open_tiles * 100 / total_tiles)
}
