use std::process::ExitCode;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use grandprix_booking::config::Config;
use grandprix_booking::handlers;
use grandprix_booking::state::AppState;

fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "Opening booking data");
    let state = AppState::open_files(config);

    let catalog = handlers::list_events(&state);
    for event in catalog.data.unwrap_or_default() {
        tracing::info!(
            id = %event.id,
            name = %event.name,
            date = %event.date,
            sold = event.tickets_sold,
            remaining = event.remaining,
            "Event"
        );
    }

    let mut sales: Vec<_> = state.system.track_sales().into_iter().collect();
    sales.sort();
    for (event_id, count) in sales {
        tracing::info!(event_id = %event_id, tickets_sold = count, "Ledger");
    }

    match handlers::save_all(&state) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let notice = e.into_notice();
            eprintln!("{}: {}", notice.error.code, notice.error.message);
            ExitCode::FAILURE
        }
    }
}
