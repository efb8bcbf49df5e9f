/// Integration tests driving the full service
use habit_tracker::*;
use serde_json::{json, Value};

mod service_tests {
    use super::*;

    /// The dashboard example from the product brief: two habits, mixed
    /// history, one global rate over the raw log count.
    #[test]
    fn test_dashboard_aggregates_across_habits() {
        let store = MemStore::new();

        let reading = create_habit(
            &store,
            CreateHabitParams {
                name: "Read a Book".to_string(),
                description: None,
                frequency_days: "0,1,2,3,4,5,6".to_string(),
                reminder_time: None,
                color: None,
            },
        )
        .unwrap();

        let exercise = create_habit(
            &store,
            CreateHabitParams {
                name: "Exercise".to_string(),
                description: None,
                frequency_days: "1,3,5".to_string(),
                reminder_time: None,
                color: None,
            },
        )
        .unwrap();

        // Reading: completed the 3 most recent entries, then a miss.
        for (date, completed) in [
            ("2024-03-10", true),
            ("2024-03-09", true),
            ("2024-03-08", true),
            ("2024-03-07", false),
        ] {
            upsert_log(
                &store,
                UpsertLogParams {
                    habit_id: reading.id,
                    date: date.to_string(),
                    completed: Some(completed),
                    status: Some(LogStatus::from_completed(completed)),
                },
            )
            .unwrap();
        }

        // Exercise: most recent entry missed, older ones completed.
        for (date, completed) in [
            ("2024-03-10", false),
            ("2024-03-08", true),
            ("2024-03-06", true),
        ] {
            upsert_log(
                &store,
                UpsertLogParams {
                    habit_id: exercise.id,
                    date: date.to_string(),
                    completed: Some(completed),
                    status: Some(LogStatus::from_completed(completed)),
                },
            )
            .unwrap();
        }

        let rule = StreakRule::ConsecutiveEntries;

        let with_stats = habits_with_stats(&store, rule).unwrap();
        assert_eq!(with_stats.len(), 2);
        assert_eq!(with_stats[0].habit.id, reading.id);
        assert_eq!(with_stats[0].current_streak, 3);
        assert_eq!(with_stats[0].completion_rate, 75);
        assert_eq!(with_stats[1].current_streak, 0);
        assert_eq!(with_stats[1].completion_rate, 67);

        // Logs come back newest first.
        let dates: Vec<String> = with_stats[0]
            .logs
            .iter()
            .map(|log| format_day(log.date))
            .collect();
        assert_eq!(
            dates,
            vec!["2024-03-10", "2024-03-09", "2024-03-08", "2024-03-07"]
        );

        // Global rate counts raw logs (5 completed of 7 = 71), not the
        // average of per-habit rates.
        let stats = dashboard_stats(&store, rule).unwrap();
        assert_eq!(stats.current_streaks, 3);
        assert_eq!(stats.completion_rate, 71);
        assert_eq!(stats.total_habits, 2);
    }

    #[test]
    fn test_zero_logs_zero_stats() {
        let store = MemStore::new();
        create_habit(
            &store,
            CreateHabitParams {
                name: "Untouched".to_string(),
                description: None,
                frequency_days: "0".to_string(),
                reminder_time: None,
                color: None,
            },
        )
        .unwrap();

        let with_stats = habits_with_stats(&store, StreakRule::default()).unwrap();
        assert_eq!(with_stats[0].current_streak, 0);
        assert_eq!(with_stats[0].completion_rate, 0);

        let stats = dashboard_stats(&store, StreakRule::default()).unwrap();
        assert_eq!(stats.current_streaks, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.total_habits, 1);
    }

    #[test]
    fn test_total_habits_tracks_created_minus_deleted() {
        let store = MemStore::new();

        let mut ids = Vec::new();
        for name in ["One", "Two", "Three"] {
            let habit = create_habit(
                &store,
                CreateHabitParams {
                    name: name.to_string(),
                    description: None,
                    frequency_days: "0".to_string(),
                    reminder_time: None,
                    color: None,
                },
            )
            .unwrap();
            ids.push(habit.id);
        }

        delete_habit(&store, DeleteHabitParams { habit_id: ids[1] }).unwrap();

        let stats = dashboard_stats(&store, StreakRule::default()).unwrap();
        assert_eq!(stats.total_habits, 2);
    }

    #[test]
    fn test_deleted_habit_drops_out_of_global_rate() {
        let store = MemStore::new();

        let keeper = create_habit(
            &store,
            CreateHabitParams {
                name: "Keeper".to_string(),
                description: None,
                frequency_days: "0".to_string(),
                reminder_time: None,
                color: None,
            },
        )
        .unwrap();
        let goner = create_habit(
            &store,
            CreateHabitParams {
                name: "Goner".to_string(),
                description: None,
                frequency_days: "0".to_string(),
                reminder_time: None,
                color: None,
            },
        )
        .unwrap();

        toggle_completion(
            &store,
            ToggleParams {
                habit_id: keeper.id,
                date: "2024-03-05".to_string(),
            },
        )
        .unwrap();
        for date in ["2024-03-03", "2024-03-04", "2024-03-05"] {
            toggle_completion(
                &store,
                ToggleParams {
                    habit_id: goner.id,
                    date: date.to_string(),
                },
            )
            .unwrap();
        }

        delete_habit(&store, DeleteHabitParams { habit_id: goner.id }).unwrap();

        let stats = dashboard_stats(&store, StreakRule::default()).unwrap();
        assert_eq!(stats.total_habits, 1);
        assert_eq!(stats.completion_rate, 100);
        assert_eq!(stats.current_streaks, 1);

        // The cascaded logs are gone from date queries too.
        let logs = logs_for_date(
            &store,
            LogsForDateParams {
                date: "2024-03-05".to_string(),
            },
        )
        .unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].habit_id, keeper.id);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let store = MemStore::new();

        let first = toggle_completion(
            &store,
            ToggleParams {
                habit_id: HabitId(1),
                date: "2024-03-05".to_string(),
            },
        )
        .unwrap();
        assert!(first.completed);
        assert_eq!(first.status, LogStatus::Completed);

        let second = toggle_completion(
            &store,
            ToggleParams {
                habit_id: HabitId(1),
                date: "2024-03-05".to_string(),
            },
        )
        .unwrap();
        assert!(!second.completed);
        assert_eq!(second.status, LogStatus::Pending);
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn test_strict_streak_rule_respects_calendar_gaps() {
        let store = MemStore::new();
        let habit = create_habit(
            &store,
            CreateHabitParams {
                name: "Strict".to_string(),
                description: None,
                frequency_days: "0".to_string(),
                reminder_time: None,
                color: None,
            },
        )
        .unwrap();

        for date in ["2024-03-10", "2024-03-09", "2024-03-07"] {
            toggle_completion(
                &store,
                ToggleParams {
                    habit_id: habit.id,
                    date: date.to_string(),
                },
            )
            .unwrap();
        }

        let lenient = habits_with_stats(&store, StreakRule::ConsecutiveEntries).unwrap();
        assert_eq!(lenient[0].current_streak, 3);

        let strict = habits_with_stats(&store, StreakRule::ConsecutiveDays).unwrap();
        assert_eq!(strict[0].current_streak, 2);
    }

    #[test]
    fn test_demo_seed_is_consistent() {
        let tracker = HabitTracker::new(StreakRule::default());
        tracker.seed_demo_data().unwrap();

        let habits = list_habits(tracker.store()).unwrap();
        assert_eq!(habits.len(), 4);

        let stats = dashboard_stats(tracker.store(), tracker.streak_rule()).unwrap();
        assert_eq!(stats.total_habits, 4);

        // 30 logs per habit, roughly 70% completed by construction.
        let totals = tracker.store().log_totals().unwrap();
        assert_eq!(totals.total, 120);
        assert_eq!(totals.completed, 84);
    }
}

mod rpc_tests {
    use super::*;

    fn request(id: i64, method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest::new(id, method, Some(params))
    }

    fn server() -> RpcServer {
        RpcServer::new(HabitTracker::new(StreakRule::default()))
    }

    #[test]
    fn test_create_toggle_and_stats_over_rpc() {
        let server = server();

        let response = server.handle_request(request(
            1,
            "habit_create",
            json!({"name": "Journal", "frequency_days": "0,1,2,3,4,5,6"}),
        ));
        assert!(response.error.is_none());
        let habit = response.result.unwrap();
        assert_eq!(habit["id"], json!(1));
        assert_eq!(habit["color"], json!("#4F46E5"));

        let response = server.handle_request(request(
            2,
            "log_toggle",
            json!({"habit_id": 1, "date": "2024-03-05"}),
        ));
        assert!(response.error.is_none());
        let log = response.result.unwrap();
        assert_eq!(log["completed"], json!(true));
        assert_eq!(log["status"], json!("completed"));

        let response =
            server.handle_request(JsonRpcRequest::new(3, "dashboard_stats", None));
        let stats = response.result.unwrap();
        assert_eq!(stats["current_streaks"], json!(1));
        assert_eq!(stats["completion_rate"], json!(100));
        assert_eq!(stats["total_habits"], json!(1));

        let response = server.handle_request(JsonRpcRequest::new(4, "habit_stats", None));
        let with_stats = response.result.unwrap();
        assert_eq!(with_stats[0]["current_streak"], json!(1));
        assert_eq!(with_stats[0]["logs"][0]["date"], json!("2024-03-05"));
    }

    #[test]
    fn test_validation_error_code() {
        let server = server();

        let response = server.handle_request(request(
            1,
            "habit_create",
            json!({"name": "", "frequency_days": "0"}),
        ));

        let error = response.error.unwrap();
        assert_eq!(error.code, error_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_not_found_error_code() {
        let server = server();

        let response = server.handle_request(request(
            1,
            "habit_update",
            json!({"habit_id": 99, "name": "Renamed"}),
        ));
        assert_eq!(response.error.unwrap().code, error_codes::HABIT_NOT_FOUND);

        let response = server.handle_request(request(2, "habit_get", json!({"habit_id": 99})));
        assert_eq!(response.error.unwrap().code, error_codes::HABIT_NOT_FOUND);
    }

    #[test]
    fn test_malformed_date_is_validation_error() {
        let server = server();

        let response = server.handle_request(request(
            1,
            "log_toggle",
            json!({"habit_id": 1, "date": "soon"}),
        ));

        assert_eq!(response.error.unwrap().code, error_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_unknown_method_and_bad_params() {
        let server = server();

        let response = server.handle_request(JsonRpcRequest::new(1, "habit_destroy", None));
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);

        let response = server.handle_request(request(2, "log_toggle", json!({"habit_id": "one"})));
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[test]
    fn test_delete_over_rpc_reports_flag() {
        let server = server();

        server.handle_request(request(
            1,
            "habit_create",
            json!({"name": "Transient", "frequency_days": "0"}),
        ));

        let response = server.handle_request(request(2, "habit_delete", json!({"habit_id": 1})));
        assert_eq!(response.result.unwrap()["deleted"], json!(true));

        let response = server.handle_request(request(3, "habit_delete", json!({"habit_id": 1})));
        assert_eq!(response.result.unwrap()["deleted"], json!(false));
    }
}
