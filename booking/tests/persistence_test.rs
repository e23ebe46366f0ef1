use std::fs;

use grandprix_booking::config::Config;
use grandprix_booking::handlers::{self, LoginRole, PurchaseForm};
use grandprix_booking::models::Event;
use grandprix_booking::services::{DiscountRules, SalesLog, SystemData, SystemManager};
use grandprix_booking::state::AppState;
use grandprix_booking::storage::JsonFileStore;
use tempfile::TempDir;

fn manager_at(dir: &TempDir) -> SystemManager {
    let store: JsonFileStore<SystemData> = JsonFileStore::new(dir.path().join("system_data.json"));
    SystemManager::new(Box::new(store))
}

#[test]
fn test_save_and_load_system_data() {
    let dir = TempDir::new().unwrap();

    let mut mgr = manager_at(&dir);
    mgr.set_discount_rules(DiscountRules::from([("WeekendPackage".to_string(), 20.0)]));
    mgr.log_sale(&Event::new("E4", "Race 4", "2025-09-01", 50), 7);
    mgr.save_data().unwrap();

    let mut reloaded = manager_at(&dir);
    reloaded.load_data().unwrap();
    assert_eq!(
        reloaded.discount_rules(),
        &DiscountRules::from([("WeekendPackage".to_string(), 20.0)])
    );
    assert_eq!(reloaded.track_sales(), SalesLog::from([("E4".to_string(), 7)]));
}

#[test]
fn test_load_without_file_keeps_empty_state() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager_at(&dir);

    mgr.load_data().unwrap();
    assert!(mgr.discount_rules().is_empty());
    assert!(mgr.track_sales().is_empty());
}

#[test]
fn test_corrupt_system_data_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("system_data.json"), "not json at all").unwrap();

    let mut mgr = manager_at(&dir);
    mgr.set_discount_rules(DiscountRules::from([("SingleRacePass".to_string(), 5.0)]));
    assert!(mgr.load_data().is_err());
    assert_eq!(mgr.discount_rules()["SingleRacePass"], 5.0);
}

#[test]
fn test_first_run_seeds_catalog_on_disk() {
    let dir = TempDir::new().unwrap();
    let config = Config::default().with_data_dir(dir.path());

    let state = AppState::open_files(config.clone());
    assert_eq!(state.events.len(), 3);
    assert!(config.events_path().exists());
    assert!(!config.customers_path().exists());

    let raw = fs::read_to_string(config.events_path()).unwrap();
    assert!(raw.contains("Grand Prix Race"));
}

#[test]
fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = Config::default().with_data_dir(dir.path());

    {
        let mut state = AppState::open_files(config.clone());
        handlers::create_account(&mut state, "amy", "pw").unwrap();
        handlers::login(&mut state, "amy", "pw", LoginRole::Customer).unwrap();
        handlers::edit_profile(&mut state, "Amy Racer").unwrap();
        handlers::purchase(
            &mut state,
            &PurchaseForm {
                event_name: "Qualifying".to_string(),
                ticket_type: "GroupDiscount".to_string(),
                quantity: "3".to_string(),
                payment_method: "Digital Wallet".to_string(),
            },
        )
        .unwrap();
        handlers::save_all(&state).unwrap();
    }

    let mut state = AppState::open_files(config);
    assert_eq!(state.event_by_id("E2").unwrap().tickets_sold(), 3);
    assert_eq!(state.system.track_sales()["E2"], 3);

    handlers::login(&mut state, "amy", "pw", LoginRole::Customer).unwrap();
    let customer = state.current_customer().unwrap();
    assert_eq!(customer.name(), "Amy Racer");

    let reservation = &customer.reservations()[0];
    assert_eq!(reservation.id(), "amy_1");
    assert_eq!(reservation.payment().method(), "Digital Wallet");
    assert_eq!(reservation.total_price(), 1200.0);
    assert_eq!(reservation.tickets()[2].group_size(), Some(3));
}

#[test]
fn test_unreadable_roster_starts_empty() {
    let dir = TempDir::new().unwrap();
    let config = Config::default().with_data_dir(dir.path());
    fs::write(config.customers_path(), "[{\"broken\":").unwrap();

    let state = AppState::open_files(config);
    assert!(state.customers.is_empty());
    assert_eq!(state.events.len(), 3);
}
