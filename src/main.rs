use anyhow::Context as _;
use clap::Parser;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, Application, ApplicationWindow, Orientation};
use log::{info, warn};
use rainbow_border::{RainbowBorder, TextStyle};
use rainbow_border_types::{BorderConfig, Color};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const APP_ID: &str = "com.github.rainbow_border.demo";

/// rainbow-border - animated rainbow border demo (login screen)
#[derive(Parser, Debug, Clone)]
#[command(name = "rainbow-border")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 1500)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = 900)]
    height: i32,

    /// Border thickness in pixels
    #[arg(short = 'b', long = "border-width", default_value_t = 5)]
    border_width: u32,

    /// Corner radius in pixels; 0 draws square corners
    #[arg(short = 'r', long = "corner-radius", default_value_t = 10)]
    corner_radius: u32,

    /// Animation frame rate in frames per second
    #[arg(long = "fps", default_value_t = 20)]
    frame_rate: u32,

    /// Canvas fill behind the hosted content, as #rrggbb
    #[arg(long = "base-color", default_value = "#2b2b2b", value_parser = parse_color)]
    base_color: Color,

    /// Background image stretched across the window
    #[arg(short = 'i', long = "image", value_name = "FILE")]
    image: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse a `#rrggbb` color argument
fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex_rgb(s).ok_or_else(|| format!("Expected #rrggbb hex color, got: {}", s))
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag.
    // RUST_LOG overrides the CLI setting.
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting rainbow-border v{}", env!("CARGO_PKG_VERSION"));

    // Store CLI options for access in build_ui
    CLI_OPTIONS.set(cli).expect("CLI options already set");

    // Create GTK application
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["rainbow-border"]);
}

fn build_ui(app: &Application) {
    info!("Building UI");

    let cli = CLI_OPTIONS
        .get()
        .cloned()
        .expect("CLI options are set before activation");

    let config = BorderConfig {
        border_width: cli.border_width.max(1),
        corner_radius: cli.corner_radius,
        frame_rate: cli.frame_rate.max(1),
        base_color: cli.base_color,
    };
    let border = Rc::new(RainbowBorder::new(config));

    if let Some(path) = &cli.image {
        match load_background(path) {
            Ok(image) => border.set_background_image(image),
            Err(e) => warn!("Failed to load background image: {:#}", e),
        }
    }

    border.add_persistent_text(
        450.0,
        450.0,
        "Welcome back",
        TextStyle {
            size_pt: 30.0,
            bold: true,
            ..TextStyle::default()
        },
    );
    border.add_persistent_text(
        450.0,
        500.0,
        "Please log in to continue",
        TextStyle {
            size_pt: 20.0,
            ..TextStyle::default()
        },
    );

    border.attach_control(&build_login_form());

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Rainbow Border Demo - Login Screen")
        .default_width(cli.width)
        .default_height(cli.height)
        .build();
    window.set_child(Some(border.widget()));

    // Tear the animation down deterministically when the window goes away.
    let border_for_close = border.clone();
    window.connect_close_request(move |_| {
        border_for_close.stop();
        glib::Propagation::Proceed
    });

    window.present();
}

/// The interactive login controls hosted above the animated canvas.
fn build_login_form() -> gtk4::Box {
    let form = gtk4::Box::new(Orientation::Vertical, 30);
    form.set_halign(Align::End);
    form.set_valign(Align::Center);
    form.set_margin_end(120);
    form.set_width_request(300);

    let username = gtk4::Entry::builder().placeholder_text("Username").build();
    let password = gtk4::Entry::builder()
        .placeholder_text("Password")
        .visibility(false)
        .build();
    let login = gtk4::Button::with_label("Login");
    login.connect_clicked(|_| info!("Login clicked"));

    form.append(&username);
    form.append(&password);
    form.append(&login);
    form
}

fn load_background(path: &Path) -> anyhow::Result<Pixbuf> {
    Pixbuf::from_file(path).with_context(|| format!("loading {}", path.display()))
}
