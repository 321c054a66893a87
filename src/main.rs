use image_mosaic::image::io::save_array_u8;
use image_mosaic::image::synthetic::checkerboard_u8;
use image_mosaic::{mosaic_with_layout, tile_stack};
use std::path::Path;

fn main() {
    // Demo: replicate one synthetic frame into a 64-slice stack and tile it.
    let frame = checkerboard_u8(128, 128, 16).to_array();
    let stack = tile_stack(frame.view(), 64);

    let (canvas, layout) = match mosaic_with_layout(&stack) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let out = Path::new("mosaic.png");
    if let Err(err) = save_array_u8(canvas.view(), out) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    println!(
        "tiled {} slices into {}x{} grid, canvas {:?} -> {}",
        layout.grid.len(),
        layout.grid.rows,
        layout.grid.cols,
        canvas.dim(),
        out.display()
    );
}
