use anyhow::Result;
use fuelmap::map::visible_candidates;
use fuelmap::view::{locate, ScreenPoint, Viewport};
use std::path::PathBuf;

use super::config::load_all;
use super::ViewArgs;

/// Print the first visible point within the hit radius of (x, y)
pub fn run(x: f64, y: f64, files: Vec<PathBuf>, view: ViewArgs) -> Result<()> {
    let config = view.view_config()?;
    let files = load_all(&files, view.visibility())?;

    let series = files
        .iter()
        .flat_map(|file| file.visible_series().map(|(_, series)| series));
    let viewport = Viewport::compute(series, &config);
    let candidates = visible_candidates(&files);

    let screen = ScreenPoint::new(x, y);
    match locate(screen, &candidates, &viewport) {
        Some(hit) => {
            let file = &files[hit.label.file_index];
            println!(
                "{} {} row {}: pressure {}, injection {}",
                file.name,
                hit.label.kind,
                hit.index + 1,
                hit.point.x,
                hit.point.y
            );
        }
        None => {
            let world = viewport.screen_to_world(screen);
            println!("No point near ({:.4}, {:.4})", world.x, world.y);
        }
    }

    Ok(())
}
