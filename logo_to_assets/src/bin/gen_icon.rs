use logo_to_assets::{compose_icon, Error, IconSettings};

const LOGO_PATH: &str = "assets/images/logo.png";
const ICON_PATH: &str = "assets/images/app_icon.png";

fn main() -> Result<(), Error> {
    env_logger::init();
    let logo = image::open(LOGO_PATH)?.to_rgba8();
    let icon = compose_icon(&logo, &IconSettings::default());
    icon.save(ICON_PATH)?;
    log::info!("Saved app icon to {ICON_PATH}");
    Ok(())
}
