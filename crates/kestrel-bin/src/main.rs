//! Kestrel entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Editor, EditorConfig};
use core_config::{ConfigContext, load_from};
use core_input::RawKeyReader;
use core_model::Layout;
use core_render::{BufferedWriter, Renderer};
use core_terminal::CrosstermBackend;
use std::io::{Stdin, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const APP_NAME: &str = "Kestrel editor";
const LOG_FILE: &str = "kestrel.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "kestrel", version, about = "Kestrel editor")]
struct Args {
    /// File to open at startup. If omitted the editor starts on an untitled buffer.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `kestrel.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

type TerminalEditor = Editor<RawKeyReader<Stdin>, Renderer<BufferedWriter<Stdout>>>;

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run(&mut self) -> Result<()> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let args = Args::parse();
        let mut editor = self.build_editor(&args)?;

        let _guard = self.backend.enter_guard()?;
        let result = editor.run();
        let stats = editor.renderer().stats();
        info!(
            target: "runtime",
            frames = stats.frames,
            mean_frame_us = stats.mean().as_micros() as u64,
            slowest_frame_us = stats.slowest.as_micros() as u64,
            ok = result.is_ok(),
            "shutdown"
        );
        result.context("editor loop")
    }

    /// Load configuration, size the screen and open the requested file. A
    /// file that cannot be opened aborts startup before the terminal is put
    /// into raw mode.
    fn build_editor(&self, args: &Args) -> Result<TerminalEditor> {
        let mut config = load_from(args.config.clone())?;
        let (columns, rows) = self.backend.size_or_fallback();
        config.apply_context(ConfigContext::new(columns, rows));
        let layout = Layout::new(columns, rows);

        let renderer = Renderer::new(
            APP_NAME,
            env!("CARGO_PKG_VERSION"),
            BufferedWriter::new(std::io::stdout()),
            layout,
        )
        .with_message_ttl(config.message_timeout());
        let reader = RawKeyReader::new(std::io::stdin());
        let mut editor = Editor::new(reader, renderer, EditorConfig::from_config(&config, layout));
        if let Some(path) = args.path.as_deref() {
            editor.open(path)?;
        }

        info!(
            target: "runtime.startup",
            path = args.path.as_deref().map(|p| p.display().to_string()).as_deref(),
            config_override = args.config.is_some(),
            columns,
            rows,
            effective_margin = config.effective_horizontal_margin,
            quit_confirmations = config.effective_quit_confirmations,
            "bootstrap_complete"
        );
        Ok(editor)
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // A global subscriber is already installed; dropping the guard stops this writer.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn main() -> Result<()> {
    let mut startup = AppStartup::new();
    startup.run()
}
