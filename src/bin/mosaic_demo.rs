//! Config-driven mosaic demo.
//!
//! Builds a stack (a list of frames arranged on `stack_shape`, an input image
//! replicated `depth` times, or a synthetic brightness ramp), tiles it, and writes the canvas as a PNG plus
//! an optional JSON report with the layout and stage timings.

use image_mosaic::config::mosaic_demo::{load_config, MosaicDemoConfig};
use image_mosaic::diagnostics::{MosaicReport, TimingBreakdown};
use image_mosaic::image::io::{
    load_grayscale_image, save_array_u8, save_grayscale_f32, write_json_file,
};
use image_mosaic::image::synthetic::brightness_ramp_stack;
use image_mosaic::image::ImageF32;
use image_mosaic::{mosaic_with_layout, stack_with_shape, tile_stack, MosaicLayout};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut timing = TimingBreakdown::default();
    let (input_shape, layout) = if !config.frames.is_empty() {
        tile_frames(&config, &mut timing)?
    } else if let Some(path) = &config.input {
        tile_input_image(&config, path, &mut timing)?
    } else {
        tile_synthetic_stack(&config, &mut timing)?
    };

    println!(
        "Saved {}x{} mosaic of {} slices to {}",
        layout.grid.rows,
        layout.grid.cols,
        layout.grid.len(),
        config.output.mosaic_image.display()
    );

    if let Some(report_path) = &config.output.report_json {
        let report = MosaicReport::new(&input_shape, layout, timing);
        write_json_file(report_path, &report)?;
        println!("Saved report to {}", report_path.display());
    }
    Ok(())
}

fn tile_frames(
    config: &MosaicDemoConfig,
    timing: &mut TimingBreakdown,
) -> Result<(Vec<usize>, MosaicLayout), String> {
    let frames = timing.measure("load", || {
        config
            .frames
            .iter()
            .map(|path| load_grayscale_image(path).map(|gray| gray.to_array()))
            .collect::<Result<Vec<_>, _>>()
    })?;
    let views: Vec<_> = frames.iter().map(|frame| frame.view()).collect();
    let stack = timing
        .measure("stack", || stack_with_shape(&views, &config.stack_shape))
        .map_err(|e| e.to_string())?;
    let (canvas, layout) = timing
        .measure("mosaic", || mosaic_with_layout(&stack))
        .map_err(|e| e.to_string())?;
    timing.measure("save", || {
        save_array_u8(canvas.view(), &config.output.mosaic_image)
    })?;
    Ok((stack.shape().to_vec(), layout))
}

fn tile_input_image(
    config: &MosaicDemoConfig,
    path: &Path,
    timing: &mut TimingBreakdown,
) -> Result<(Vec<usize>, MosaicLayout), String> {
    let gray = timing.measure("load", || load_grayscale_image(path))?;
    let frame = gray.to_array();
    let stack = timing.measure("stack", || tile_stack(frame.view(), config.depth));
    let (canvas, layout) = timing
        .measure("mosaic", || mosaic_with_layout(&stack))
        .map_err(|e| e.to_string())?;
    timing.measure("save", || {
        save_array_u8(canvas.view(), &config.output.mosaic_image)
    })?;
    Ok((stack.shape().to_vec(), layout))
}

fn tile_synthetic_stack(
    config: &MosaicDemoConfig,
    timing: &mut TimingBreakdown,
) -> Result<(Vec<usize>, MosaicLayout), String> {
    let syn = &config.synthetic;
    let stack = timing.measure("stack", || {
        brightness_ramp_stack(config.depth, syn.width, syn.height, syn.cell)
    });
    let (canvas, layout) = timing
        .measure("mosaic", || mosaic_with_layout(&stack))
        .map_err(|e| e.to_string())?;
    timing.measure("save", || {
        save_grayscale_f32(&ImageF32::from_array(&canvas), &config.output.mosaic_image)
    })?;
    Ok((stack.shape().to_vec(), layout))
}

fn usage() -> String {
    "Usage: mosaic_demo <config.json>".to_string()
}
