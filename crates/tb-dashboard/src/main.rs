use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;

use tb_dashboard::actions::{Action, CoreAction, RouteAction};
use tb_dashboard::deeplink::{HashDeepLinker, HashStorage, HashStorageContainer};
use tb_dashboard::meta_reducer::{self, InterceptedReducer};
use tb_dashboard::reducers::reduce;
use tb_dashboard::state::{AppState, Route};
use tb_dashboard::store::Store;
use tb_dashboard::telemetry::{LogTelemetry, NoopTelemetry, TelemetrySink};
use tb_dashboard_config::AppConfig;

mod commands;
mod logger;

use commands::Command;

fn main() -> Result<()> {
    let log_file = logger::init();
    log::info!("Starting tb-dashboard");
    eprintln!("Logging to {}", log_file.display());

    let config = AppConfig::load();
    let sink: Rc<dyn TelemetrySink> = if config.telemetry.enabled {
        Rc::new(LogTelemetry::new(config.telemetry.page_path.clone()))
    } else {
        log::info!("Telemetry disabled");
        Rc::new(NoopTelemetry)
    };

    let (mut store, hash_storage) = build_store(&config, sink);

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open session script: {}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let result = run_session(input, &mut store, &hash_storage, &mut io::stdout());

    log::info!("Exiting tb-dashboard");
    result
}

/// Store wired with the configured meta-reducers and a mounted hash storage
fn build_store(
    config: &AppConfig,
    sink: Rc<dyn TelemetrySink>,
) -> (Store, HashStorageContainer<HashDeepLinker>) {
    let reducer = InterceptedReducer::new(reduce)
        .with_meta_reducers(meta_reducer::for_environment(config.environment, sink));
    let mut store = Store::new(AppState::with_reload_period(config.reload_period_ms), reducer);

    let storage = HashStorage::new(
        HashDeepLinker::new(),
        store.dispatcher().clone(),
        config.deep_link.plugin_key.clone(),
        config.deep_link.default_value.clone(),
    );
    let hash_storage = HashStorageContainer::mount(&mut store, storage);

    (store, hash_storage)
}

/// Run commands until input ends or `quit`
///
/// A bad line is reported and skipped.
fn run_session<R: BufRead, W: Write>(
    input: R,
    store: &mut Store,
    hash_storage: &HashStorageContainer<HashDeepLinker>,
    out: &mut W,
) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read command")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Skipping line {}: {}", index + 1, e);
                eprintln!("line {}: {}", index + 1, e);
                continue;
            }
        };

        if !apply(command, store, hash_storage, out)? {
            break;
        }
    }
    Ok(())
}

/// Apply one command; returns false when the session should stop
fn apply<W: Write>(
    command: Command,
    store: &mut Store,
    hash_storage: &HashStorageContainer<HashDeepLinker>,
    out: &mut W,
) -> Result<bool> {
    match command {
        Command::Ready => store.dispatch(Action::Core(CoreAction::CoreLoaded)),
        Command::Plugins(plugins) => {
            store.dispatch(Action::Core(CoreAction::PluginsListingLoaded { plugins }))
        }
        Command::Select(plugin) => store.dispatch(Action::Core(CoreAction::PluginChanged {
            plugin: plugin.unwrap_or_default(),
        })),
        Command::Route(path) => store.dispatch(Action::Route(RouteAction::Navigated {
            route: Route::new(path),
        })),
        Command::Unroute => store.dispatch(Action::Route(RouteAction::Cleared)),
        Command::Hash(fragment) => {
            hash_storage.with_deep_linker(|linker| linker.set_fragment(&fragment));
            hash_storage.hash_changed();
            store.drain_pending();
        }
        Command::Reload(period_ms) => {
            store.dispatch(Action::Core(CoreAction::ReloadPeriodChanged { period_ms }))
        }
        Command::ToggleReload => store.dispatch(Action::Core(CoreAction::ReloadEnabledToggled)),
        Command::State => {
            let json =
                serde_json::to_string_pretty(store.state()).context("Failed to serialize state")?;
            writeln!(out, "{}", json)?;
        }
        Command::Location => {
            let (fragment, history_len) =
                hash_storage.with_deep_linker(|linker| (linker.fragment(), linker.history_len()));
            writeln!(out, "location: {} (history: {})", fragment, history_len)?;
        }
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
