pub mod mosaic_demo;
