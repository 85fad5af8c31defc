mod error;
pub use error::Error;

mod background_key;
pub use background_key::{sample_reference, BackgroundKey, BackgroundKeySettings};

mod icon;
pub use icon::{compose_icon, IconSettings};

mod fonts;
pub use fonts::load_caption_font;

mod splash;
pub use splash::{compose_splash, SplashSettings};
