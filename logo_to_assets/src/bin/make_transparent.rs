use logo_to_assets::{sample_reference, BackgroundKey, BackgroundKeySettings, Error};

const INPUT_PATH: &str = "assets/images/app_icon.png";
const OUTPUT_PATH: &str = "assets/images/app_icon_transparent.png";

fn main() -> Result<(), Error> {
    env_logger::init();
    let image = image::open(INPUT_PATH)?.to_rgba8();
    let reference = sample_reference(&image).ok_or(Error::EmptyImage)?;
    log::info!("Keying out background {reference:?} from {INPUT_PATH}");
    let keyed = image.key_background(reference, &BackgroundKeySettings::default());
    keyed.save(OUTPUT_PATH)?;
    log::info!("Saved transparent icon to {OUTPUT_PATH}");
    Ok(())
}
