pub mod io;
pub mod source;
pub mod u8;

pub use self::io::{load_grayscale_image, write_json_file, GrayImageU8};
pub use self::source::{FsImageSource, ImageSource};
pub use self::u8::ImageU8;
