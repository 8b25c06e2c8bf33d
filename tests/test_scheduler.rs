mod common;
use common::*;
use hargassner_sensors::scheduler::Scheduler;
use hargassner_sensors::setup::setup;
use tempfile::NamedTempFile;

fn write_snapshot(file: &NamedTempFile, values: &str) {
    let content = format!(
        r#"{{
            "parameters": [
                {{"key": "ZK", "description": "Kesselzustand"}},
                {{"key": "TK", "description": "Kesseltemperatur", "unit": "°C"}},
                {{"key": "Störung", "description": "Störung"}},
                {{"key": "Störungs Nr", "description": "Störungs Nr"}}
            ],
            "values": {}
        }}"#,
        values
    );
    std::fs::write(file.path(), content).unwrap();
}

fn config(snapshot: &NamedTempFile, state_file: &NamedTempFile) -> ConfigWrapper {
    let mut config = Factory::config(ParameterSet::Full, Language::De).config();
    config.snapshot_file = Some(snapshot.path().to_str().unwrap().to_owned());
    config.state_file = Some(state_file.path().to_str().unwrap().to_owned());
    ConfigWrapper::from_config(config)
}

#[test]
fn tick_reloads_snapshot_and_writes_states() -> Result<()> {
    common_setup();

    let snapshot = NamedTempFile::new()?;
    let state_file = NamedTempFile::new()?;
    write_snapshot(&snapshot, r#"{"ZK": "7", "TK": "71", "Störung": "False"}"#);

    let config = config(&snapshot, &state_file);
    let cache = hargassner_sensors::value_cache(&config)?;
    let sensors = setup(&config, cache.clone());
    let mut subject = Scheduler::new(config, cache, PollOrchestrator::new(sensors))?;

    subject.tick();
    let orchestrator = subject.orchestrator();
    assert_eq!(orchestrator.sensor("Hargassner boiler state").unwrap().current_presentation(), "Leistungsbrand");
    assert_eq!(orchestrator.sensor("Hargassner operation").unwrap().current_presentation(), "OK");

    write_snapshot(&snapshot, r#"{"ZK": "10", "Störung": "True", "Störungs Nr": "5"}"#);
    subject.tick();
    let orchestrator = subject.orchestrator();
    assert_eq!(orchestrator.sensor("Hargassner boiler state").unwrap().current_presentation(), "Entaschung");
    assert_eq!(orchestrator.sensor("Hargassner operation").unwrap().current_presentation(), "Aschelade entleeren");
    assert_eq!(orchestrator.sensor("Hargassner Kesseltemperatur").unwrap().current_presentation(), "Unknown");

    let contents = std::fs::read_to_string(state_file.path())?;
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line))
        .collect::<Result<_, _>>()?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["host"], "localhost");
    assert_eq!(lines[0]["states"]["Hargassner Kesseltemperatur"]["state"], "71");
    assert_eq!(lines[0]["states"]["Hargassner Kesseltemperatur"]["unit"], "°C");
    assert_eq!(lines[1]["states"]["Hargassner boiler state"]["icon"], "mdi:fireplace-off");

    Ok(())
}

#[test]
fn broken_snapshot_keeps_previous_values() -> Result<()> {
    common_setup();

    let snapshot = NamedTempFile::new()?;
    let state_file = NamedTempFile::new()?;
    write_snapshot(&snapshot, r#"{"TK": "71"}"#);

    let config = config(&snapshot, &state_file);
    let cache = hargassner_sensors::value_cache(&config)?;
    let sensors = setup(&config, cache.clone());
    let mut subject = Scheduler::new(config, cache, PollOrchestrator::new(sensors))?;

    subject.tick();

    write_snapshot(&snapshot, "not json");
    subject.tick();

    assert_eq!(
        subject.orchestrator().sensor("Hargassner Kesseltemperatur").unwrap().current_presentation(),
        "71"
    );
    assert_eq!(subject.orchestrator().ticks(), 2);

    Ok(())
}

#[tokio::test]
async fn start_stops_on_shutdown() -> Result<()> {
    common_setup();

    let config = Factory::config(ParameterSet::Standard, Language::En);
    let cache = Factory::bridge(&[("TK", "60")]);
    let sensors = setup(&config, cache.clone());
    let mut subject = Scheduler::new(config, cache, PollOrchestrator::new(sensors))?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);
    shutdown_tx.send(())?;

    subject.start(shutdown_rx).await?;
    assert!(subject.orchestrator().ticks() <= 1);

    Ok(())
}
