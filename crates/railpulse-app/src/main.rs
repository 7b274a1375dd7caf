//! Headless demo driver.
//!
//! Runs the dashboard simulation for a short scripted session, logging
//! notifications and tone cues as they would reach a frontend.

use std::time::Duration;

use railpulse_app::Runtime;
use railpulse_core::commands::ControlCommand;
use railpulse_core::enums::ScenarioAction;
use railpulse_core::state::DashboardSnapshot;
use railpulse_sim::engine::SimConfig;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let runtime = Runtime::start(SimConfig::default(), |snapshot: &DashboardSnapshot| {
        for notice in &snapshot.notifications {
            log::info!("[{:?}] {}", notice.level, notice.title);
            if let Some(detail) = &notice.detail {
                log::info!("        {detail}");
            }
        }
        for tone in &snapshot.tones {
            log::debug!("tone {} Hz for {:.2} s", tone.freq_hz, tone.duration_secs);
        }
    })?;

    let script: [(u64, ControlCommand); 5] = [
        (2, ControlCommand::HighlightTrain {
            query: "Rajdhani".into(),
        }),
        (2, ControlCommand::BoostTrain {
            code: "12001".into(),
        }),
        (3, ControlCommand::Scenario {
            action: ScenarioAction::Congestion,
        }),
        (3, ControlCommand::ToggleHeatmap),
        (2, ControlCommand::Scenario {
            action: ScenarioAction::Reroute,
        }),
    ];

    for (delay_secs, command) in script {
        std::thread::sleep(Duration::from_secs(delay_secs));
        runtime.send(command)?;
    }

    std::thread::sleep(Duration::from_secs(5));

    if let Some(snapshot) = runtime.latest_snapshot()? {
        log::info!(
            "session end: tick {}, {:.1} s simulated, efficiency {}%",
            snapshot.time.tick,
            snapshot.time.elapsed_secs,
            snapshot.efficiency_pct
        );
        for train in &snapshot.trains {
            log::info!(
                "  {} {} — {:?} at t={:.3}, occupancy {:.0}%",
                train.code,
                train.name,
                train.status,
                train.t,
                train.occupancy_pct
            );
        }
    }

    runtime.shutdown();
    Ok(())
}
