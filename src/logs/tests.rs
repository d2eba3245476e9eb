#[cfg(test)]
mod logs_tests {
    mod host_level_tests {
        use log::LevelFilter;
        use crate::logs::enums::host_level::HostLevel;

        #[test]
        fn test_host_level_codes() {
            assert_eq!(HostLevel::Debug.code(), 1);
            assert_eq!(HostLevel::Error.code(), 4);
            assert_eq!(HostLevel::Off.code(), 5);
            assert_eq!(HostLevel::from(3), HostLevel::Warn);
        }

        #[test]
        fn test_unknown_code_defaults_to_info() {
            assert_eq!(HostLevel::from(0), HostLevel::Info);
            assert_eq!(HostLevel::from(7), HostLevel::Info);
        }

        #[test]
        fn test_outward_mapping() {
            assert_eq!(HostLevel::from_level_filter(LevelFilter::Debug), HostLevel::Debug);
            assert_eq!(HostLevel::from_level_filter(LevelFilter::Warn), HostLevel::Warn);
            assert_eq!(HostLevel::from_level_filter(LevelFilter::Trace), HostLevel::Off);
            assert_eq!(HostLevel::from_level_filter(LevelFilter::Off), HostLevel::Off);
        }

        #[test]
        fn test_inward_mapping() {
            assert_eq!(LevelFilter::from(HostLevel::Info), LevelFilter::Info);
            assert_eq!(LevelFilter::from(HostLevel::Error), LevelFilter::Error);
            assert_eq!(LevelFilter::from(HostLevel::Off), LevelFilter::Off);
        }

        #[test]
        fn test_host_level_serialization() {
            assert_eq!(serde_json::to_string(&HostLevel::Warn).unwrap(), "\"WARN\"");
            let level: HostLevel = serde_json::from_str("\"DEBUG\"").unwrap();
            assert_eq!(level, HostLevel::Debug);
            assert_eq!(format!("{}", HostLevel::Off), "OFF");
        }
    }

    mod severity_tests {
        use crate::logs::enums::severity::Severity;

        #[test]
        fn test_only_error_fatal_panic_forward() {
            assert!(!Severity::Print.forwards());
            assert!(!Severity::Debug.forwards());
            assert!(!Severity::Info.forwards());
            assert!(!Severity::Warn.forwards());
            assert!(Severity::Error.forwards());
            assert!(Severity::Fatal.forwards());
            assert!(Severity::Panic.forwards());
        }

        #[test]
        fn test_severity_levels() {
            assert_eq!(Severity::Print.level(), log::Level::Info);
            assert_eq!(Severity::Fatal.level(), log::Level::Error);
            assert_eq!(Severity::Panic.sentry_level(), sentry::Level::Fatal);
            assert_eq!(Severity::Error.sentry_level(), sentry::Level::Error);
        }
    }

    mod call_site_tests {
        use crate::logs::impls::call_site::short_function;
        use crate::logs::structs::call_site::CallSite;

        #[test]
        fn test_source_with_function() {
            let call_site = CallSite::new("src/api/handlers.rs", 42, Some("service::api::handlers::create_order"));
            assert_eq!(call_site.source(), "handlers.rs:42:create_order()");
        }

        #[test]
        fn test_source_without_function() {
            let call_site = CallSite::new("src/api/handlers.rs", 7, None);
            assert_eq!(call_site.source(), "handlers.rs:7");
        }

        #[test]
        fn test_short_function_strips_closures() {
            assert_eq!(short_function("app::<impl app::Svc>::serve::{{closure}}::{{closure}}"), "serve");
            assert_eq!(short_function("main"), "main");
        }

        #[test]
        fn test_caller_points_here() {
            let line = line!() + 1;
            let call_site = CallSite::caller();
            assert_eq!(call_site.file_name(), "tests.rs");
            assert_eq!(call_site.line, line);
        }

        #[test]
        fn test_call_site_macro_captures_function() {
            let call_site = crate::call_site!();
            assert_eq!(call_site.file_name(), "tests.rs");
            assert!(call_site.source().ends_with(":test_call_site_macro_captures_function()"));
        }
    }

    mod logger_tests {
        use std::sync::Arc;
        use log::LevelFilter;
        use mockall::predicate::eq;
        use serde_json::json;
        use crate::logs::enums::host_level::HostLevel;
        use crate::logs::enums::severity::Severity;
        use crate::logs::structs::call_site::CallSite;
        use crate::logs::structs::logger::Logger;
        use crate::logs::traits::error_sink::MockErrorSink;
        use crate::logs::traits::host_logger::HostLogger;

        fn logger_with(sink: MockErrorSink) -> Logger {
            Logger::new("orders", Arc::new(sink))
        }

        #[test]
        fn test_global_keeps_latest_prefix() {
            let first = Logger::global(Some("checkout"));
            let second = Logger::global(Some("Payments"));
            assert!(std::ptr::eq(first, second));
            assert!(second.prefix().eq_ignore_ascii_case("payments"));

            // same prefix in another case, or no prefix at all, leaves it alone
            Logger::global(Some("PAYMENTS"));
            Logger::global(None);
            Logger::global(Some(""));
            assert_eq!(first.prefix(), "Payments");
        }

        #[test]
        fn test_error_forwards_once() {
            let mut sink = MockErrorSink::new();
            sink.expect_capture_message()
                .withf(|message, level| message.contains("boom") && *level == sentry::Level::Error)
                .times(1)
                .return_const(());
            let logger = logger_with(sink);
            logger.error("boom");
            logger.info("boom");
        }

        #[test]
        fn test_plain_levels_never_forward() {
            let sink = MockErrorSink::new();
            let logger = logger_with(sink);
            logger.set_level_filter(LevelFilter::Trace);
            logger.print("boom");
            logger.debug("boom");
            logger.info("boom");
            logger.warn("boom");
            logger.warnj(&json!({"event": "boom"}));
            crate::log_warn!(logger, "{} boom", 1);
        }

        #[test]
        fn test_error_variants_forward() {
            let mut sink = MockErrorSink::new();
            sink.expect_capture_message()
                .withf(|message, _| message.contains("boom"))
                .times(3)
                .return_const(());
            let logger = logger_with(sink);
            logger.error(format_args!("{}-{}", "boom", 1));
            logger.errorj(&json!({"reason": "boom"}));
            crate::log_error!(logger, "{} happened", "boom");
        }

        #[test]
        fn test_forwarding_ignores_level_filter() {
            let mut sink = MockErrorSink::new();
            sink.expect_capture_message().times(1).return_const(());
            let logger = logger_with(sink);
            logger.set_level(HostLevel::Off);
            logger.error("boom");
        }

        #[test]
        #[should_panic(expected = "kaboom")]
        fn test_panic_forwards_then_panics() {
            let mut sink = MockErrorSink::new();
            sink.expect_capture_message()
                .withf(|message, level| message.to_string() == "kaboom" && *level == sentry::Level::Fatal)
                .times(1)
                .return_const(());
            let logger = logger_with(sink);
            logger.panic("kaboom");
        }

        const FATAL_CHILD_ENV: &str = "SERVICE_COMMON_FATAL_CHILD";

        #[test]
        fn test_fatal_forwards_flushes_and_exits() {
            if std::env::var_os(FATAL_CHILD_ENV).is_some() {
                let mut sink = MockErrorSink::new();
                sink.expect_capture_message()
                    .withf(|message, level| message.to_string() == "shutting down" && *level == sentry::Level::Fatal)
                    .times(1)
                    .returning(|message, _| eprintln!("captured: {}", message));
                sink.expect_flush()
                    .times(1)
                    .returning(|| eprintln!("sink flushed"));
                let logger = logger_with(sink);
                logger.fatal("shutting down");
            }

            let output = std::process::Command::new(std::env::current_exe().unwrap())
                .args([
                    "--exact",
                    "logs::tests::logs_tests::logger_tests::test_fatal_forwards_flushes_and_exits",
                    "--nocapture",
                ])
                .env(FATAL_CHILD_ENV, "1")
                .output()
                .unwrap();
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
            assert!(stderr.contains("captured: shutting down"));
            assert!(stderr.contains("sink flushed"));
        }

        #[test]
        fn test_set_level_roundtrip() {
            let logger = logger_with(MockErrorSink::new());
            assert_eq!(logger.level(), HostLevel::Info);
            logger.set_level(HostLevel::Warn);
            assert_eq!(logger.level(), HostLevel::Warn);
            assert_eq!(logger.level_filter(), LevelFilter::Warn);
            logger.set_level(HostLevel::Off);
            assert_eq!(logger.level(), HostLevel::Off);
            logger.set_level_filter(LevelFilter::Trace);
            assert_eq!(logger.level(), HostLevel::Off);
        }

        #[test]
        fn test_enabled_follows_level() {
            let logger = logger_with(MockErrorSink::new());
            logger.set_level(HostLevel::Warn);
            assert!(!logger.enabled(Severity::Info));
            assert!(logger.enabled(Severity::Warn));
            assert!(logger.enabled(Severity::Fatal));
        }

        #[test]
        fn test_decorate_fields() {
            let logger = logger_with(MockErrorSink::new());
            let entry = logger.decorate(Severity::Info, CallSite::new("src/orders.rs", 12, Some("orders::place")), "placed".to_string());
            assert_eq!(entry.source, "orders.rs:12:place()");
            assert_eq!(entry.prefix.as_deref(), Some("orders"));
            assert_eq!(entry.request_id, None);
            assert_eq!(entry.to_string(), "placed prefix=orders source=orders.rs:12:place()");
        }

        #[test]
        fn test_decorate_omits_empty_prefix() {
            let logger = Logger::new("", Arc::new(MockErrorSink::new()));
            let entry = logger.decorate(Severity::Info, CallSite::new("lib.rs", 1, None), "up".to_string());
            assert_eq!(entry.prefix, None);
            assert_eq!(entry.target(), "service_common");
        }

        #[test]
        fn test_shared_request_id_is_last_write_wins() {
            let logger = logger_with(MockErrorSink::new());
            let clone = logger.clone();
            logger.set_request_id("req-1");
            clone.set_request_id("req-2");
            assert_eq!(logger.request_id(), "req-2");
            let entry = logger.decorate(Severity::Info, CallSite::new("lib.rs", 1, None), "x".to_string());
            assert_eq!(entry.request_id.as_deref(), Some("req-2"));
        }

        #[test]
        fn test_bound_request_id_wins() {
            let logger = logger_with(MockErrorSink::new());
            let bound = logger.bind_request_id("req-bound");
            logger.set_request_id("req-shared");
            assert_eq!(bound.request_id(), "req-bound");
            assert_eq!(logger.request_id(), "req-shared");
            bound.set_prefix("billing");
            assert_eq!(logger.prefix(), "billing");
        }

        #[test]
        fn test_output_and_header_are_noops() {
            let logger = logger_with(MockErrorSink::new());
            logger.set_output(Box::new(std::io::sink()));
            logger.set_header("${time_rfc3339}");
            assert_eq!(logger.prefix(), "orders");
            assert_eq!(logger.level(), HostLevel::Info);
        }

        #[test]
        fn test_sink_receives_tags() {
            let mut sink = MockErrorSink::new();
            sink.expect_set_tag()
                .with(eq("x-request-id"), eq("abc-123"))
                .times(1)
                .return_const(());
            let logger = logger_with(sink);
            logger.sink().set_tag("x-request-id", "abc-123");
        }
    }
}
