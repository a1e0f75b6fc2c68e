use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use daybreak::app::{persistence, r#loop::run_loop, state::AppState};
use daybreak::domain::providers::{DeviceLocator, Providers};
use daybreak::infrastructure::{geoip::IpLocator, open_meteo::OpenMeteoClient};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let prefs = persistence::load();
    let open_meteo = Arc::new(OpenMeteoClient::new());
    let locator: Option<Arc<dyn DeviceLocator>> = if prefs.geolocation {
        Some(Arc::new(IpLocator::new()))
    } else {
        None
    };
    let providers = Arc::new(Providers {
        geocoder: open_meteo.clone(),
        locator,
        weather: open_meteo,
    });
    let app_state = AppState::new(prefs);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, providers).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
