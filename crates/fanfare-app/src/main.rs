//! Entry point for the Fanfare celebration app.
//!
//! Desktop builds open a window and take a presentation config from the command line.
//! Browser builds (`--no-default-features --features web`) run with the default config.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    tracing::info!("Starting Fanfare");
    dioxus::launch(fanfare_app::components::WebRoot);
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use fanfare_core::PresentationConfig;
    use fanfare_logging::{FanfareSubscriberBuilder, LogConfig};

    use fanfare_app::theme::Theme;

    /// Command line arguments.
    #[derive(Parser, Debug)]
    #[command(name = "fanfare")]
    #[command(about = "Name entry and a looping celebration video with captions and confetti")]
    struct Args {
        /// JSON presentation config (captions, confetti timing, video source)
        #[arg(short, long, env = "FANFARE_CONFIG")]
        config: Option<PathBuf>,

        /// Kiosk mode logging: JSONL files rotated daily in this directory
        #[arg(long, env = "FANFARE_LOG_DIR")]
        log_dir: Option<PathBuf>,

        /// Log at debug level
        #[arg(short, long)]
        verbose: bool,

        /// Stage theme
        #[arg(long, value_enum, default_value_t = Theme::Curtain)]
        theme: Theme,
    }

    pub fn run() {
        let args = Args::parse();

        let mut log_config = match args.log_dir {
            Some(directory) => LogConfig::kiosk(directory),
            None => LogConfig::default(),
        };
        if args.verbose {
            log_config = log_config.verbose();
        }
        let _log_guard = FanfareSubscriberBuilder::new()
            .with_config(log_config)
            .init();

        tracing::info!("Starting Fanfare");

        let config = match &args.config {
            Some(path) => PresentationConfig::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Falling back to default presentation config"
                );
                PresentationConfig::default()
            }),
            None => PresentationConfig::default(),
        };
        fanfare_app::set_config(config);
        fanfare_app::set_theme(args.theme);

        launch();
    }

    #[cfg(feature = "desktop")]
    fn launch() {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(
                Config::new()
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Fanfare")
                            .with_inner_size(LogicalSize::new(1280.0, 760.0)),
                    )
                    .with_custom_head(format!("<style>{}</style>", fanfare_app::STYLES_CSS)),
            )
            .launch(fanfare_app::components::App);
    }

    #[cfg(not(feature = "desktop"))]
    fn launch() {
        dioxus::launch(fanfare_app::components::WebRoot);
    }

}
