#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::ControlCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{Notification, ToneCue};
    use crate::state::DashboardSnapshot;
    use crate::types::{wrap_unit, SimTime};
    use crate::viewport::Viewport;

    #[test]
    fn test_train_status_serde() {
        let variants = vec![TrainStatus::OnTime, TrainStatus::Delayed, TrainStatus::Stopped];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TrainStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_train_class_serde() {
        let variants = vec![
            TrainClass::Express,
            TrainClass::Passenger,
            TrainClass::Freight,
            TrainClass::Metro,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TrainClass = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TrainStatus::OnTime.label(), "On-time");
        assert_eq!(TrainStatus::Delayed.label(), "Delayed");
        assert_eq!(TrainStatus::Stopped.label(), "Stopped");
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = ControlCommand::SetTimeScale { scale: 2.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetTimeScale\""), "got {json}");

        let back: ControlCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, ControlCommand::SetTimeScale { scale } if scale == 2.0));
    }

    #[test]
    fn test_scenario_command_round_trip() {
        let cmd = ControlCommand::Scenario {
            action: ScenarioAction::Congestion,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: ControlCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            ControlCommand::Scenario {
                action: ScenarioAction::Congestion
            }
        ));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(DT);
        time.advance(DT);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 2.0 * DT).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_unit_range() {
        for &t in &[0.0, 0.5, 0.999, 1.0, 1.5, 2.75, -0.25, -3.1, 1e-18, -1e-18] {
            let w = wrap_unit(t);
            assert!((0.0..1.0).contains(&w), "wrap_unit({t}) = {w}");
        }
        assert_eq!(wrap_unit(1.0), 0.0);
        assert!((wrap_unit(1.12) - 0.12).abs() < 1e-12);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_viewport_zoom_clamps() {
        let mut vp = Viewport::new();
        // Zoom way in: -deltaY accumulates, clamped at ZOOM_MAX.
        for _ in 0..10_000 {
            vp.wheel(-100.0);
        }
        assert_eq!(vp.scale, ZOOM_MAX);

        for _ in 0..10_000 {
            vp.wheel(100.0);
        }
        assert_eq!(vp.scale, ZOOM_MIN);
    }

    #[test]
    fn test_viewport_drag() {
        let mut vp = Viewport::new();
        // Moves without a begun drag are ignored.
        vp.drag_to(DVec2::new(50.0, 50.0));
        assert_eq!(vp.offset, DVec2::ZERO);

        vp.begin_drag(DVec2::new(100.0, 100.0));
        assert!(vp.dragging());
        vp.drag_to(DVec2::new(130.0, 80.0));
        assert_eq!(vp.offset, DVec2::new(30.0, -20.0));
        vp.end_drag();
        assert!(!vp.dragging());

        vp.drag_to(DVec2::new(500.0, 500.0));
        assert_eq!(vp.offset, DVec2::new(30.0, -20.0));
    }

    #[test]
    fn test_viewport_transform() {
        let mut vp = Viewport::new();
        vp.begin_drag(DVec2::ZERO);
        vp.drag_to(DVec2::new(10.0, 5.0));
        vp.wheel(-1000.0); // scale 2.0
        assert!((vp.scale - 2.0).abs() < 1e-12);
        let p = vp.transform(DVec2::new(3.0, 4.0));
        assert_eq!(p, DVec2::new(16.0, 13.0));
    }

    #[test]
    fn test_notification_construction() {
        let n = Notification::new(
            NoticeLevel::Warning,
            "Track congestion simulated",
            Some("Delays increased near Bhopal".into()),
            42,
        );
        assert_eq!(n.level, NoticeLevel::Warning);
        assert_eq!(n.tick, 42);

        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Track congestion simulated");
    }

    #[test]
    fn test_tone_cue_default_gain() {
        let tone = ToneCue::new(TONE_FOCUS_HZ, TONE_SHORT_SECS);
        assert_eq!(tone.gain, TONE_GAIN);
        assert_eq!(tone.freq_hz, 1200.0);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = DashboardSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DashboardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trains.len(), 0);
        assert!(back.toggles.predictions);
    }

    #[test]
    fn test_occupancy_bounds_sane() {
        assert!(OCCUPANCY_MIN < OCCUPANCY_MAX);
        assert!(OCCUPANCY_MIN >= 0.0 && OCCUPANCY_MAX <= 100.0);
        assert_eq!(GHOST_OPACITIES.len(), 3);
        assert!(GHOST_OPACITIES.windows(2).all(|w| w[0] > w[1]));
    }
}
