use logo_to_assets::{compose_splash, load_caption_font, Error, SplashSettings};

const LOGO_PATH: &str = "assets/images/logo.png";
const DARK_PATH: &str = "assets/images/logo_with_text_dark.png";
const LIGHT_PATH: &str = "assets/images/logo_with_text_light.png";

fn main() -> Result<(), Error> {
    env_logger::init();
    let logo = image::open(LOGO_PATH)?.to_rgba8();
    let font = load_caption_font()?;
    let settings = SplashSettings::default();

    let dark = compose_splash(&logo, &font, image::Rgba([255, 255, 255, 255]), &settings);
    dark.save(DARK_PATH)?;
    // #0F172A text for the light variant
    let light = compose_splash(&logo, &font, image::Rgba([15, 23, 42, 255]), &settings);
    light.save(LIGHT_PATH)?;
    log::info!("Saved light and dark splash images.");
    Ok(())
}
