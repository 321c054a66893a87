pub mod f32;
pub mod io;
pub mod synthetic;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{to_array, ImageView, Rows};
pub use self::u8::ImageU8;
