use anyhow::Context;
use clap::Parser;
use relm4::prelude::*;
use ringrange::config;
use ringrange::gui::app::AppModel;
use ringrange::slider::{CairoRangeSlider, LoggingListener, load_thumb_images};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Slider config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 480)]
    width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 520)]
    height: i32,

    /// Write a commented default config and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.init_config {
        let path = match args.config {
            Some(p) => p,
            None => config::get_config_path()?,
        };
        config::write_default_config(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    // invalid values such as an unknown line cap abort here
    let slider_config = config::load_or_default(args.config.as_deref())
        .context("Failed to load slider config")?;
    let (start_image, end_image) =
        load_thumb_images(&slider_config).context("Failed to load thumb images")?;

    let mut slider =
        CairoRangeSlider::from_config(&slider_config).with_images(start_image, end_image);
    slider.set_on_slider_range_moved_listener(Some(Box::new(LoggingListener)));

    let app = RelmApp::new("org.ringrange.demo").with_args(Vec::new());
    app.run::<AppModel>((slider, args.width, args.height));

    Ok(())
}
