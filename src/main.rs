use std::time::Duration;

use clap::{arg, command, value_parser};
use color_eyre::eyre::Result;
use log::*;

use constraint_tui::app::{App, AppReturn};
use constraint_tui::config::UserConfig;
use constraint_tui::inputs::handler::Event;
use constraint_tui::logger::setup_logger;
use constraint_tui::tui::Tui;

fn main() -> Result<()> {
    let matches = command!()
        .arg(arg!(-l --logs "Show the log panel on startup"))
        .arg(
            arg!(-t --"tick-rate" <MS> "Event tick rate in milliseconds")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .get_matches();

    setup_logger()?;

    let mut config = UserConfig::load()?;
    if matches.get_flag("logs") {
        config.show_logs = true;
    }
    if let Some(ms) = matches.get_one::<u64>("tick-rate") {
        config.tick_rate_ms = *ms;
    }

    let mut app = App::new(&config);
    info!("Rendering the {} page variant", app.state.theme.name);

    let mut tui = Tui::with_tick_rate(Duration::from_millis(config.tick_rate_ms))?;
    tui.init()?;

    loop {
        tui.draw(&mut app)?;
        match tui.events.next() {
            Event::Input(key) => {
                if app.process_key(key) == AppReturn::Exit {
                    break;
                }
            }
            Event::Tick => {}
        }
    }

    tui.events.close();
    tui.exit()?;
    Ok(())
}
