//! Loads the runner's model set (terrain, character, obstacle), assembles
//! and flattens it with frame modifiers, and reports what the renderer
//! would receive. All game semantics live here, not in the libraries.

use std::path::PathBuf;

use anyhow::{Context, Result};

use asset::{Classification, Model, load_model_from_path};
use scene::{InstanceModifiers, PackedVertex};

// Modifier scales from the original runner's buffer generation.
const POSITION_STEP: f32 = 0.01;
const SCROLL_STEP: f32 = 0.004;
const PALETTE_STEP: f32 = 0.003906;

struct FrameState {
    tick: u64,
    night: bool,
    character_height: i32,
    obstacle_x: i32,
    palette_offset: i32,
}

fn parse_models_arg() -> PathBuf {
    // Accept: --models=DIR, default ./common/objects
    let mut dir = PathBuf::from("./common/objects");
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--models=") {
            dir = PathBuf::from(val);
        }
    }
    dir
}

fn parse_night_arg() -> bool {
    // --night[=on|off], по умолчанию off
    for arg in std::env::args() {
        if arg == "--night" {
            return true;
        }
        if let Some(val) = arg.strip_prefix("--night=") {
            return matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }
    }
    false
}

fn parse_tick_arg() -> u64 {
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--tick=") {
            if let Ok(tick) = val.parse::<u64>() {
                return tick;
            }
        }
    }
    0
}

/// Which modifier channels a model gets is decided purely by its
/// classification, the way the original keyed them off the model type.
fn modifiers_for(model: &Model, frame: &FrameState) -> InstanceModifiers {
    match model.classification {
        Classification::Character => InstanceModifiers {
            offset_y: frame.character_height as f32 * POSITION_STEP,
            palette_u: frame.palette_offset as f32 * PALETTE_STEP,
            ..Default::default()
        },
        Classification::Obstacle => InstanceModifiers {
            offset_x: frame.obstacle_x as f32 * POSITION_STEP,
            palette_u: frame.palette_offset as f32 * PALETTE_STEP,
            ..Default::default()
        },
        Classification::Terrain => InstanceModifiers {
            scroll_u: (frame.tick % 125) as f32 * SCROLL_STEP,
            ..Default::default()
        },
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let models_dir = parse_models_arg();
    let frame = FrameState {
        tick: parse_tick_arg(),
        night: parse_night_arg(),
        character_height: 0,
        obstacle_x: 0,
        palette_offset: 0,
    };
    log::info!(
        "Loading model set from {} (tick={}, night={})",
        models_dir.display(),
        frame.tick,
        frame.night
    );

    let terrain_file = if frame.night { "bg_night.obj" } else { "bg.obj" };
    let character_file = if frame.tick % 30 < 15 {
        "dino2.obj"
    } else {
        "dino.obj"
    };

    let set = [
        (terrain_file, Classification::Terrain),
        (character_file, Classification::Character),
        ("cactus.obj", Classification::Obstacle),
    ];

    let mut vertex_data: Vec<PackedVertex> = Vec::new();
    for (file, classification) in set {
        let path = models_dir.join(file);
        let model = load_model_from_path(&path, classification)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let triangles = model
            .assemble()
            .with_context(|| format!("failed to assemble {}", path.display()))?;
        log::info!(
            "{:?}: {} triangles, texture={:?}",
            classification,
            triangles.len(),
            model.texture_path()
        );
        vertex_data.extend(scene::flatten(&triangles, &modifiers_for(&model, &frame)));
    }

    log::info!(
        "Buffer ready: {} vertices, {} floats",
        vertex_data.len(),
        scene::as_floats(&vertex_data).len()
    );
    Ok(())
}
