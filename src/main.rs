// Vizboard - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Initial application state (seeded RNG, optional startup view)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use vizboard::app;
pub use vizboard::core;
pub use vizboard::ui;
pub use vizboard::util;

use clap::Parser;

/// Build the window icon procedurally: a 2x2 block of the view accent
/// colours. Generating it in code keeps the binary free of image assets
/// and decoder dependencies.
fn app_icon() -> egui::IconData {
    const SIZE: usize = 64;
    let quadrants = [
        ui::theme::SERIES_SALES,
        ui::theme::SERIES_REVENUE,
        ui::theme::PRICE,
        ui::theme::SERIES_PROFIT,
    ];
    let mut rgba = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let quadrant = match (x < SIZE / 2, y < SIZE / 2) {
                (true, true) => quadrants[0],
                (false, true) => quadrants[1],
                (true, false) => quadrants[2],
                (false, false) => quadrants[3],
            };
            rgba.extend_from_slice(&[quadrant.r(), quadrant.g(), quadrant.b(), 255]);
        }
    }
    egui::IconData {
        rgba,
        width: SIZE as u32,
        height: SIZE as u32,
    }
}

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI, Segoe UI Emoji, and Segoe UI Symbol from the
/// system font directory and sets them as the primary proportional fonts.
/// These fonts have much broader Unicode coverage than the egui built-ins,
/// preventing square-glyph rendering for the view icons and other symbols.
/// The built-in egui fonts are kept as final fallbacks so no glyph is ever lost.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        // Load Windows system fonts in priority order.
        // Segoe UI covers most Latin and common UI symbols.
        // Segoe UI Emoji adds Unicode emoji and many pictographic symbols.
        // Segoe UI Symbol covers Mathematical and other specialist blocks.
        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some symbols may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            // Proportional: place Windows fonts first so they take priority
            // over the egui default, while keeping it as a final fallback.
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }

            // Monospace: append Windows fonts as symbol fallbacks after the
            // primary monospace font so Unicode symbols outside its range
            // still render correctly.
            if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                for name in &loaded_names {
                    monospace.push((*name).to_owned());
                }
            }

            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    // On non-Windows platforms the egui built-in fonts are used unchanged.
    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// Vizboard - demo analytics dashboard.
///
/// A single-window dashboard with four openable views over synthetic data:
/// sales charts, an activity heatmap, a user table, and a product grid.
#[derive(Parser, Debug)]
#[command(name = "Vizboard", version, about)]
struct Cli {
    /// View to open at startup: chart, heatmap, table, or grid.
    #[arg(short = 'v', long = "view")]
    view: Option<String>,

    /// Seed for the synthetic data generators (entropy when omitted).
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        seed = ?cli.seed,
        "Vizboard starting"
    );

    // Validate --view before any window appears so a typo fails fast.
    let initial_view = match cli.view.as_deref() {
        Some(name) => match name.parse::<app::state::ViewKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                tracing::error!(error = %e, "Invalid --view argument");
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        },
        None => None,
    };

    // Create application state
    let mut state = app::state::AppState::new(cli.seed, cli.debug);

    // A startup view from the CLI begins with the menu expanded so the
    // launcher strip matches what is on screen.
    if let Some(kind) = initial_view {
        state.menu_open = true;
        state.open_view(kind);
    }

    // Launch the GUI
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([780.0, 520.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(gui::VizboardApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Vizboard GUI: {e}");
        std::process::exit(1);
    }
}
