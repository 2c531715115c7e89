//! Headless viewer walkthrough
//!
//! Drives the viewer without a renderer: loads the bundled molecules,
//! selects one, simulates a short drag and a few auto-rotation frames, then
//! exports the selection as JSON to stdout.
//!
//! ```bash
//! cargo run --example headless
//! # or pick a molecule by name
//! cargo run --example headless -- Ethanol
//! ```

use molview_mol::ViewMode;
use molview_scene::{PointerButton, Viewer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut viewer = Viewer::with_builtin_molecules();
    log::info!(
        "loaded molecules: {}",
        viewer.registry().names().collect::<Vec<_>>().join(", ")
    );

    if let Some(name) = std::env::args().nth(1) {
        if let Err(err) = viewer.select_molecule(&name) {
            log::error!("{err}");
            std::process::exit(1);
        }
    }

    viewer.set_view_mode(ViewMode::BallStick);

    // A short primary-button drag, then a few idle frames of auto-rotation.
    let input = viewer.input_mut();
    input.handle_motion((400.0, 300.0));
    input.handle_button(PointerButton::Primary, true);
    input.handle_motion((430.0, 310.0));
    viewer.tick();
    viewer.input_mut().handle_button(PointerButton::Primary, false);
    for _ in 0..10 {
        viewer.tick();
    }

    let molecule = viewer.selected().expect("a molecule is selected");
    log::info!(
        "'{}' rotation after simulation: ({:.3}, {:.3}, {:.3})",
        molecule.name,
        molecule.rotation.x,
        molecule.rotation.y,
        molecule.rotation.z
    );

    // Warnings, if any, are logged by the exporter.
    let (record, _warnings) = viewer.export_current().expect("selection exists");
    let json = molview_io::to_json_string(&record).expect("record serializes");
    println!("{json}");
    log::info!(
        "suggested filename: {}",
        viewer.export_current_filename().expect("selection exists")
    );
}
